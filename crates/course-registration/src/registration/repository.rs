use async_trait::async_trait;

use super::domain::{NewRegistration, RegistrationId};

/// Storage abstraction so the service can be exercised without a database.
#[async_trait]
pub trait RegistrationStore: Send + Sync {
    async fn insert(&self, registration: &NewRegistration) -> Result<RegistrationId, StoreError>;
}

/// Error enumeration for store failures. Details are logged, never shown to registrants.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error("store unavailable: {0}")]
    Unavailable(String),
    #[error("store rejected registration: {0}")]
    Rejected(String),
}

/// Outbound e-mail hook (SMTP in production, fakes in tests).
#[async_trait]
pub trait Notifier: Send + Sync {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError>;
}

/// Plain-text message handed to a [`Notifier`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct EmailMessage {
    pub recipient: String,
    pub subject: String,
    pub body: String,
}

/// Notification dispatch error.
#[derive(Debug, thiserror::Error)]
pub enum NotifyError {
    #[error("invalid e-mail address: {0}")]
    InvalidAddress(String),
    #[error("mail transport unavailable: {0}")]
    Transport(String),
}
