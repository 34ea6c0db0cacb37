use async_trait::async_trait;
use course_registration::config::AppConfig;
use course_registration::error::AppError;
use course_registration::registration::{
    EmailMessage, MySqlRegistrationStore, NewRegistration, Notifier, NotifyError,
    RegistrationId, RegistrationRecord, RegistrationService, RegistrationStore, SmtpNotifier,
    StoreError,
};
use metrics_exporter_prometheus::PrometheusHandle;
use std::sync::atomic::AtomicBool;
use std::sync::{Arc, Mutex};
use tracing::{info, warn};

/// Admin address used when no mail account is configured and confirmations are only logged.
const LOCAL_ADMIN_RECIPIENT: &str = "admin@localhost";

#[derive(Clone)]
pub(crate) struct AppState {
    pub(crate) readiness: Arc<AtomicBool>,
    pub(crate) metrics: Arc<PrometheusHandle>,
}

/// Process-local store for runs without a database. Ids start at 1.
#[derive(Default, Clone)]
pub(crate) struct InMemoryRegistrationStore {
    records: Arc<Mutex<Vec<RegistrationRecord>>>,
}

#[cfg(test)]
impl InMemoryRegistrationStore {
    pub(crate) fn records(&self) -> Result<Vec<RegistrationRecord>, StoreError> {
        let guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("registration store lock poisoned".to_string()))?;
        Ok(guard.clone())
    }
}

#[async_trait]
impl RegistrationStore for InMemoryRegistrationStore {
    async fn insert(&self, registration: &NewRegistration) -> Result<RegistrationId, StoreError> {
        let mut guard = self
            .records
            .lock()
            .map_err(|_| StoreError::Unavailable("registration store lock poisoned".to_string()))?;
        let id = RegistrationId(guard.len() as u64 + 1);
        guard.push(RegistrationRecord {
            id,
            registration: registration.clone(),
        });
        Ok(id)
    }
}

/// Notifier that writes confirmations to the log instead of sending them.
#[derive(Default, Clone, Copy)]
pub(crate) struct LogNotifier;

#[async_trait]
impl Notifier for LogNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        info!(
            recipient = %message.recipient,
            subject = %message.subject,
            body = %message.body,
            "mail not configured; confirmation logged only"
        );
        Ok(())
    }
}

/// Wire the registration service from configuration, falling back to local collaborators.
pub(crate) async fn registration_service(
    config: &AppConfig,
) -> Result<RegistrationService, AppError> {
    let store: Arc<dyn RegistrationStore> = match &config.database {
        Some(database) => {
            info!(host = %database.host, database = %database.database, "using MySQL store");
            Arc::new(MySqlRegistrationStore::connect(database).await?)
        }
        None => {
            warn!("DB_HOST not set; registrations are kept in memory");
            Arc::new(InMemoryRegistrationStore::default())
        }
    };

    let notifier: Arc<dyn Notifier>;
    let admin_recipient = match &config.mail {
        Some(mail) => {
            notifier = Arc::new(SmtpNotifier::new(mail)?);
            mail.admin_recipient.clone()
        }
        None => {
            warn!("EMAIL_USER not set; confirmation e-mails are logged only");
            notifier = Arc::new(LogNotifier);
            LOCAL_ADMIN_RECIPIENT.to_string()
        }
    };

    Ok(RegistrationService::new(store, notifier, admin_recipient))
}
