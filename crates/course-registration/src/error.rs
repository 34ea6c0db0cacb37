use crate::config::ConfigError;
use crate::registration::NotifyError;
use crate::telemetry::TelemetryError;

/// Process-level failures raised while configuring or running the service.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error("configuration error: {0}")]
    Config(#[from] ConfigError),
    #[error("telemetry error: {0}")]
    Telemetry(#[from] TelemetryError),
    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
    #[error("database error: {0}")]
    Database(#[from] sqlx::Error),
    #[error("mail error: {0}")]
    Mail(#[from] NotifyError),
}
