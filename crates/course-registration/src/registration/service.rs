use std::sync::Arc;

use axum::http::StatusCode;
use tracing::{error, info, warn};

use super::domain::{RegistrationId, RegistrationSubmission};
use super::notification::{dispatch_confirmations, ConfirmationTemplate};
use super::repository::{Notifier, RegistrationStore, StoreError};
use super::validation::{registration_from_submission, ValidationError};

/// Service composing validation, the registration store, and confirmation e-mails.
pub struct RegistrationService {
    store: Arc<dyn RegistrationStore>,
    notifier: Arc<dyn Notifier>,
    admin_recipient: String,
}

impl RegistrationService {
    pub fn new(
        store: Arc<dyn RegistrationStore>,
        notifier: Arc<dyn Notifier>,
        admin_recipient: impl Into<String>,
    ) -> Self {
        Self {
            store,
            notifier,
            admin_recipient: admin_recipient.into(),
        }
    }

    /// Validate, persist, then notify.
    ///
    /// Validation failures stop before any side effect and a store failure stops before any
    /// e-mail. Once the insert succeeds the call succeeds, even if every confirmation fails.
    pub async fn handle(
        &self,
        submission: RegistrationSubmission,
    ) -> Result<RegistrationId, RegistrationError> {
        let registration = match registration_from_submission(&submission) {
            Ok(registration) => registration,
            Err(err) => {
                warn!(kind = err.kind(), "registration rejected");
                return Err(err.into());
            }
        };

        let id = match self.store.insert(&registration).await {
            Ok(id) => id,
            Err(err) => {
                error!(error = %err, "failed to store registration");
                return Err(err.into());
            }
        };

        info!(%id, course = %registration.course_name, "registration stored");

        let deliveries = [
            (registration.email.clone(), ConfirmationTemplate::Registrant),
            (
                self.admin_recipient.clone(),
                ConfirmationTemplate::Administrator,
            ),
        ];
        let report =
            dispatch_confirmations(self.notifier.as_ref(), &registration, &deliveries).await;

        if report.all_failed() {
            warn!(%id, "registration stored but no confirmation e-mail was delivered");
        }

        Ok(id)
    }
}

/// Error raised by the registration service.
#[derive(Debug, thiserror::Error)]
pub enum RegistrationError {
    #[error(transparent)]
    Validation(#[from] ValidationError),
    #[error("persistence failed: {0}")]
    Persistence(#[from] StoreError),
}

impl RegistrationError {
    pub fn kind(&self) -> &'static str {
        match self {
            Self::Validation(err) => err.kind(),
            Self::Persistence(_) => "persistence_failed",
        }
    }

    pub fn status_code(&self) -> StatusCode {
        match self {
            Self::Validation(_) => StatusCode::BAD_REQUEST,
            Self::Persistence(_) => StatusCode::INTERNAL_SERVER_ERROR,
        }
    }

    /// Message safe to return to the registrant; store details stay in the logs.
    pub fn public_message(&self) -> String {
        match self {
            Self::Validation(err) => err.to_string(),
            Self::Persistence(_) => "Database or email error.".to_string(),
        }
    }
}
