use std::sync::Arc;

use axum::{
    extract::{rejection::JsonRejection, State},
    http::StatusCode,
    response::{IntoResponse, Response},
    routing::post,
    Json, Router,
};
use serde::{Deserialize, Serialize};
use serde_json::Value;
use tracing::debug;

use super::domain::{RegistrationId, RegistrationSubmission};
use super::service::RegistrationService;

pub const SUCCESS_MESSAGE: &str = "Registration saved and email sent.";

/// Body returned by `POST /register`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct RegistrationResponse {
    pub success: bool,
    pub message: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<RegistrationId>,
}

/// Router builder exposing the registration intake endpoint.
pub fn registration_router(service: Arc<RegistrationService>) -> Router {
    Router::new()
        .route("/register", post(register_handler))
        .with_state(service)
}

pub(crate) async fn register_handler(
    State(service): State<Arc<RegistrationService>>,
    payload: Result<Json<Value>, JsonRejection>,
) -> Response {
    // An unreadable body carries no fields, so it falls through to the presence check.
    let submission = match payload {
        Ok(Json(body)) => RegistrationSubmission::from_json(body),
        Err(rejection) => {
            debug!(error = %rejection, "registration body not usable as JSON object");
            RegistrationSubmission::default()
        }
    };

    match service.handle(submission).await {
        Ok(id) => {
            let body = RegistrationResponse {
                success: true,
                message: SUCCESS_MESSAGE.to_string(),
                id: Some(id),
            };
            (StatusCode::OK, Json(body)).into_response()
        }
        Err(err) => {
            let body = RegistrationResponse {
                success: false,
                message: err.public_message(),
                id: None,
            };
            (err.status_code(), Json(body)).into_response()
        }
    }
}
