use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};

use async_trait::async_trait;
use axum::response::Response;
use serde_json::Value;

use crate::registration::domain::{NewRegistration, RegistrationId, RegistrationSubmission};
use crate::registration::repository::{
    EmailMessage, Notifier, NotifyError, RegistrationStore, StoreError,
};
use crate::registration::RegistrationService;

pub(super) const ADMIN_RECIPIENT: &str = "office@academy.test";

pub(super) fn submission() -> RegistrationSubmission {
    RegistrationSubmission::from_text(
        "Asha",
        "asha@example.com",
        "9876543210",
        "Algebra",
        "500",
        "paid",
    )
}

pub(super) fn registration() -> NewRegistration {
    NewRegistration {
        name: "Asha".to_string(),
        email: "asha@example.com".to_string(),
        mobile: "9876543210".to_string(),
        course_name: "Algebra".to_string(),
        amount: 500.0,
        amount_text: "500".to_string(),
        payment_status: "paid".to_string(),
    }
}

/// Store that hands out a fixed identifier and remembers what it was given.
pub(super) struct MemoryStore {
    id: u64,
    records: Mutex<Vec<NewRegistration>>,
}

impl MemoryStore {
    pub(super) fn assigning(id: u64) -> Self {
        Self {
            id,
            records: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn records(&self) -> Vec<NewRegistration> {
        self.records.lock().expect("store mutex poisoned").clone()
    }
}

#[async_trait]
impl RegistrationStore for MemoryStore {
    async fn insert(&self, registration: &NewRegistration) -> Result<RegistrationId, StoreError> {
        let mut guard = self.records.lock().expect("store mutex poisoned");
        guard.push(registration.clone());
        Ok(RegistrationId(self.id))
    }
}

#[derive(Default)]
pub(super) struct UnavailableStore {
    attempts: AtomicUsize,
}

impl UnavailableStore {
    pub(super) fn attempts(&self) -> usize {
        self.attempts.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl RegistrationStore for UnavailableStore {
    async fn insert(&self, _registration: &NewRegistration) -> Result<RegistrationId, StoreError> {
        self.attempts.fetch_add(1, Ordering::SeqCst);
        Err(StoreError::Unavailable("connection refused".to_string()))
    }
}

/// Notifier that records every message and optionally fails each send.
#[derive(Default)]
pub(super) struct RecordingNotifier {
    fail: bool,
    sent: Mutex<Vec<EmailMessage>>,
}

impl RecordingNotifier {
    pub(super) fn failing() -> Self {
        Self {
            fail: true,
            sent: Mutex::new(Vec::new()),
        }
    }

    pub(super) fn messages(&self) -> Vec<EmailMessage> {
        self.sent.lock().expect("notifier mutex poisoned").clone()
    }
}

#[async_trait]
impl Notifier for RecordingNotifier {
    async fn send(&self, message: &EmailMessage) -> Result<(), NotifyError> {
        self.sent
            .lock()
            .expect("notifier mutex poisoned")
            .push(message.clone());
        if self.fail {
            return Err(NotifyError::Transport("smtp relay down".to_string()));
        }
        Ok(())
    }
}

pub(super) fn build_service<S, N>(store: Arc<S>, notifier: Arc<N>) -> RegistrationService
where
    S: RegistrationStore + 'static,
    N: Notifier + 'static,
{
    RegistrationService::new(store, notifier, ADMIN_RECIPIENT)
}

pub(super) async fn read_json_body(response: Response) -> Value {
    let body = axum::body::to_bytes(response.into_body(), 4096)
        .await
        .expect("body readable");
    serde_json::from_slice(&body).expect("json body")
}
