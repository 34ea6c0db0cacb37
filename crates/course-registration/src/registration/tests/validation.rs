use super::common::*;
use serde_json::{json, Value};

use crate::registration::domain::RegistrationSubmission;
use crate::registration::validation::{
    is_valid_email, is_valid_mobile, parse_amount, registration_from_submission, ValidationError,
};

fn without(field: &str) -> RegistrationSubmission {
    let mut submission = submission();
    match field {
        "name" => submission.name = None,
        "email" => submission.email = None,
        "mobile" => submission.mobile = None,
        "courseName" => submission.course_name = None,
        "amount" => submission.amount = None,
        "paymentStatus" => submission.payment_status = None,
        other => panic!("unknown field {other}"),
    }
    submission
}

#[test]
fn accepts_complete_submission() {
    let registration = registration_from_submission(&submission()).expect("valid submission");
    assert_eq!(registration, super::common::registration());
}

#[test]
fn each_missing_field_is_reported_as_missing() {
    for field in [
        "name",
        "email",
        "mobile",
        "courseName",
        "amount",
        "paymentStatus",
    ] {
        assert_eq!(
            registration_from_submission(&without(field)),
            Err(ValidationError::MissingFields),
            "field {field}"
        );
    }
}

#[test]
fn empty_and_null_values_count_as_missing() {
    let mut submission = submission();
    submission.name = Some(json!(""));
    assert_eq!(
        registration_from_submission(&submission),
        Err(ValidationError::MissingFields)
    );

    let mut submission = super::common::submission();
    submission.payment_status = Some(Value::Null);
    assert_eq!(
        registration_from_submission(&submission),
        Err(ValidationError::MissingFields)
    );
}

#[test]
fn presence_is_checked_before_formats() {
    let mut submission = submission();
    submission.email = Some(json!("not-an-email"));
    submission.course_name = None;

    assert_eq!(
        registration_from_submission(&submission),
        Err(ValidationError::MissingFields)
    );
}

#[test]
fn email_is_checked_before_mobile_and_amount() {
    let submission = RegistrationSubmission::from_text(
        "Asha", "asha.example.com", "12345", "Algebra", "-3", "paid",
    );

    assert_eq!(
        registration_from_submission(&submission),
        Err(ValidationError::InvalidEmail)
    );
}

#[test]
fn mobile_is_checked_before_amount() {
    let submission = RegistrationSubmission::from_text(
        "Asha",
        "asha@example.com",
        "5123456789",
        "Algebra",
        "0",
        "paid",
    );

    assert_eq!(
        registration_from_submission(&submission),
        Err(ValidationError::InvalidMobile)
    );
}

#[test]
fn email_pattern_requires_at_and_dot() {
    assert!(is_valid_email("asha@example.com"));
    assert!(is_valid_email("a.b@mail.example.co.in"));
    assert!(!is_valid_email("asha.example.com"));
    assert!(!is_valid_email("asha@example"));
    assert!(!is_valid_email("asha @example.com"));
    assert!(!is_valid_email("asha@@example.com"));
    assert!(!is_valid_email("@example.com"));
}

#[test]
fn mobile_pattern_follows_indian_numbering() {
    assert!(is_valid_mobile("9123456789"));
    assert!(is_valid_mobile("6000000000"));
    assert!(!is_valid_mobile("12345"));
    assert!(!is_valid_mobile("5123456789"));
    assert!(!is_valid_mobile("98765432101"));
    assert!(!is_valid_mobile("98765 4321"));
    assert!(!is_valid_mobile("\u{0669}123456789"));
}

#[test]
fn numeric_mobile_is_accepted_as_text() {
    let mut submission = submission();
    submission.mobile = Some(json!(9123456789_u64));

    let registration = registration_from_submission(&submission).expect("valid submission");
    assert_eq!(registration.mobile, "9123456789");
}

#[test]
fn amount_must_parse_and_be_positive() {
    assert_eq!(parse_amount("500"), Some(500.0));
    assert_eq!(parse_amount(" 499.50 "), Some(499.5));
    assert_eq!(parse_amount("0"), None);
    assert_eq!(parse_amount("-10"), None);
    assert_eq!(parse_amount("five hundred"), None);
    assert_eq!(parse_amount("inf"), None);
    assert_eq!(parse_amount("NaN"), None);
}

#[test]
fn accepted_amount_keeps_its_submitted_text() {
    for (amount, text, value) in [
        (json!("1499.00"), "1499.00", 1499.0),
        (json!(" 250 "), " 250 ", 250.0),
        (json!(1250.75), "1250.75", 1250.75),
    ] {
        let mut submission = submission();
        submission.amount = Some(amount);
        let registration = registration_from_submission(&submission).expect("valid amount");
        assert_eq!(registration.amount, value);
        assert_eq!(registration.amount_text, text);
    }
}

#[test]
fn non_positive_or_non_numeric_amounts_are_rejected() {
    for amount in [json!(0), json!(-1.5), json!("0.00"), json!("abc")] {
        let mut submission = submission();
        submission.amount = Some(amount.clone());
        assert_eq!(
            registration_from_submission(&submission),
            Err(ValidationError::InvalidAmount),
            "amount {amount}"
        );
    }
}

#[test]
fn payment_status_is_kept_verbatim() {
    let mut submission = submission();
    submission.payment_status = Some(json!("  Paid (UPI) "));

    let registration = registration_from_submission(&submission).expect("valid submission");
    assert_eq!(registration.payment_status, "  Paid (UPI) ");
}

#[test]
fn error_kinds_and_messages() {
    assert_eq!(ValidationError::MissingFields.kind(), "missing_fields");
    assert_eq!(ValidationError::InvalidEmail.kind(), "invalid_email");
    assert_eq!(ValidationError::InvalidMobile.kind(), "invalid_mobile");
    assert_eq!(ValidationError::InvalidAmount.kind(), "invalid_amount");
    assert_eq!(
        ValidationError::InvalidMobile.to_string(),
        "Invalid Indian mobile number."
    );
    assert_eq!(
        ValidationError::InvalidAmount.to_string(),
        "Amount must be greater than zero."
    );
}
