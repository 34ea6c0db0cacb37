use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Identifier assigned by the store when a registration is inserted.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RegistrationId(pub u64);

impl std::fmt::Display for RegistrationId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Raw registrant payload as posted to `/register`.
///
/// Every key may be absent or carry an unexpected JSON type; the validator decides what is
/// usable, so deserialization itself never fails on field content.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct RegistrationSubmission {
    pub name: Option<Value>,
    pub email: Option<Value>,
    pub mobile: Option<Value>,
    pub course_name: Option<Value>,
    pub amount: Option<Value>,
    pub payment_status: Option<Value>,
}

impl RegistrationSubmission {
    /// Convenience constructor for callers that already hold text values.
    pub fn from_text(
        name: &str,
        email: &str,
        mobile: &str,
        course_name: &str,
        amount: &str,
        payment_status: &str,
    ) -> Self {
        Self {
            name: Some(Value::from(name)),
            email: Some(Value::from(email)),
            mobile: Some(Value::from(mobile)),
            course_name: Some(Value::from(course_name)),
            amount: Some(Value::from(amount)),
            payment_status: Some(Value::from(payment_status)),
        }
    }
}

impl RegistrationSubmission {
    /// Read a decoded request body. Only a JSON object carries fields; arrays, scalars and
    /// `null` become an empty submission.
    pub fn from_json(body: Value) -> Self {
        match body {
            Value::Object(fields) => {
                serde_json::from_value(Value::Object(fields)).unwrap_or_default()
            }
            _ => Self::default(),
        }
    }
}

/// Text form of a submitted field, or `None` when the field counts as missing.
///
/// Non-empty strings pass through untouched, numbers become their decimal text and `true`
/// becomes `"true"`. Null, empty strings, `false`, arrays and objects are all treated as absent.
pub(crate) fn field_text(value: Option<&Value>) -> Option<String> {
    match value? {
        Value::String(text) if !text.is_empty() => Some(text.clone()),
        Value::Number(number) => Some(number.to_string()),
        Value::Bool(true) => Some("true".to_string()),
        _ => None,
    }
}

/// Submission that passed every check and is ready to be stored.
#[derive(Debug, Clone, PartialEq)]
pub struct NewRegistration {
    pub name: String,
    pub email: String,
    pub mobile: String,
    pub course_name: String,
    pub amount: f64,
    /// Amount exactly as submitted, echoed back in confirmation e-mails.
    pub amount_text: String,
    pub payment_status: String,
}

/// Stored registration with its store-assigned identifier.
#[derive(Debug, Clone, PartialEq)]
pub struct RegistrationRecord {
    pub id: RegistrationId,
    pub registration: NewRegistration,
}
