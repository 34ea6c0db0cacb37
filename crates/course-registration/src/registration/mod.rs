//! Course registration intake: validation, storage, and confirmation e-mails.

pub mod domain;
pub mod mysql;
pub mod notification;
pub mod repository;
pub mod router;
pub mod service;
pub mod smtp;
pub mod validation;

#[cfg(test)]
mod tests;

pub use domain::{NewRegistration, RegistrationId, RegistrationRecord, RegistrationSubmission};
pub use mysql::MySqlRegistrationStore;
pub use notification::{
    dispatch_confirmations, ConfirmationTemplate, DeliveryReport, CONFIRMATION_SUBJECT,
};
pub use repository::{EmailMessage, Notifier, NotifyError, RegistrationStore, StoreError};
pub use router::{registration_router, RegistrationResponse, SUCCESS_MESSAGE};
pub use service::{RegistrationError, RegistrationService};
pub use smtp::SmtpNotifier;
pub use validation::{
    is_valid_email, is_valid_mobile, parse_amount, registration_from_submission, ValidationError,
};
