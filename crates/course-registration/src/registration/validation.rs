use std::sync::LazyLock;

use regex::Regex;

use super::domain::{field_text, NewRegistration, RegistrationSubmission};

static EMAIL_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("valid email regex"));

// ASCII digits only; `\d` would also accept other Unicode numerals.
static MOBILE_PATTERN: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"^[6-9][0-9]{9}$").expect("valid mobile regex"));

/// Caller-correctable rejection of a submission. Only the first failing check is reported.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum ValidationError {
    #[error("Missing required fields.")]
    MissingFields,
    #[error("Invalid email format.")]
    InvalidEmail,
    #[error("Invalid Indian mobile number.")]
    InvalidMobile,
    #[error("Amount must be greater than zero.")]
    InvalidAmount,
}

impl ValidationError {
    pub const fn kind(self) -> &'static str {
        match self {
            Self::MissingFields => "missing_fields",
            Self::InvalidEmail => "invalid_email",
            Self::InvalidMobile => "invalid_mobile",
            Self::InvalidAmount => "invalid_amount",
        }
    }
}

pub fn is_valid_email(email: &str) -> bool {
    EMAIL_PATTERN.is_match(email)
}

pub fn is_valid_mobile(mobile: &str) -> bool {
    MOBILE_PATTERN.is_match(mobile)
}

/// Parse a submitted amount, accepting only finite values strictly above zero.
pub fn parse_amount(raw: &str) -> Option<f64> {
    raw.trim()
        .parse::<f64>()
        .ok()
        .filter(|amount| amount.is_finite() && *amount > 0.0)
}

/// Run the ordered checks (presence, email, mobile, amount) and build the record to insert.
pub fn registration_from_submission(
    submission: &RegistrationSubmission,
) -> Result<NewRegistration, ValidationError> {
    let (
        Some(name),
        Some(email),
        Some(mobile),
        Some(course_name),
        Some(amount),
        Some(payment_status),
    ) = (
        field_text(submission.name.as_ref()),
        field_text(submission.email.as_ref()),
        field_text(submission.mobile.as_ref()),
        field_text(submission.course_name.as_ref()),
        field_text(submission.amount.as_ref()),
        field_text(submission.payment_status.as_ref()),
    )
    else {
        return Err(ValidationError::MissingFields);
    };

    if !is_valid_email(&email) {
        return Err(ValidationError::InvalidEmail);
    }

    if !is_valid_mobile(&mobile) {
        return Err(ValidationError::InvalidMobile);
    }

    let parsed_amount = parse_amount(&amount).ok_or(ValidationError::InvalidAmount)?;

    Ok(NewRegistration {
        name,
        email,
        mobile,
        course_name,
        amount: parsed_amount,
        amount_text: amount,
        payment_status,
    })
}
