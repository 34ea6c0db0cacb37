use async_trait::async_trait;
use sqlx::mysql::{MySqlConnectOptions, MySqlPool, MySqlPoolOptions};

use super::domain::{NewRegistration, RegistrationId};
use super::repository::{RegistrationStore, StoreError};
use crate::config::DatabaseConfig;

const MAX_CONNECTIONS: u32 = 5;

const CREATE_REGISTRATIONS_TABLE: &str = r#"
CREATE TABLE IF NOT EXISTS registrations (
    id BIGINT UNSIGNED NOT NULL AUTO_INCREMENT PRIMARY KEY,
    name VARCHAR(255) NOT NULL,
    email VARCHAR(255) NOT NULL,
    mobile VARCHAR(16) NOT NULL,
    course_name VARCHAR(255) NOT NULL,
    amount DOUBLE NOT NULL,
    payment_status VARCHAR(64) NOT NULL,
    created_at TIMESTAMP NOT NULL DEFAULT CURRENT_TIMESTAMP
)
"#;

const INSERT_REGISTRATION: &str = "INSERT INTO registrations \
    (name, email, mobile, course_name, amount, payment_status) \
    VALUES (?, ?, ?, ?, ?, ?)";

/// Registration store backed by a MySQL connection pool.
#[derive(Debug, Clone)]
pub struct MySqlRegistrationStore {
    pool: MySqlPool,
}

impl MySqlRegistrationStore {
    pub async fn connect(config: &DatabaseConfig) -> Result<Self, sqlx::Error> {
        let pool = MySqlPoolOptions::new()
            .max_connections(MAX_CONNECTIONS)
            .connect_with(connect_options(config))
            .await?;
        Ok(Self::from_pool(pool))
    }

    pub fn from_pool(pool: MySqlPool) -> Self {
        Self { pool }
    }

    /// Create the `registrations` table when it does not exist yet.
    pub async fn ensure_schema(&self) -> Result<(), sqlx::Error> {
        sqlx::query(CREATE_REGISTRATIONS_TABLE)
            .execute(&self.pool)
            .await?;
        Ok(())
    }
}

fn connect_options(config: &DatabaseConfig) -> MySqlConnectOptions {
    MySqlConnectOptions::new()
        .host(&config.host)
        .port(config.port)
        .username(&config.user)
        .password(&config.password)
        .database(&config.database)
}

#[async_trait]
impl RegistrationStore for MySqlRegistrationStore {
    async fn insert(&self, registration: &NewRegistration) -> Result<RegistrationId, StoreError> {
        let result = sqlx::query(INSERT_REGISTRATION)
            .bind(&registration.name)
            .bind(&registration.email)
            .bind(&registration.mobile)
            .bind(&registration.course_name)
            .bind(registration.amount)
            .bind(&registration.payment_status)
            .execute(&self.pool)
            .await?;

        Ok(RegistrationId(result.last_insert_id()))
    }
}

impl From<sqlx::Error> for StoreError {
    fn from(err: sqlx::Error) -> Self {
        match err {
            sqlx::Error::Database(db_err) => Self::Rejected(db_err.message().to_string()),
            other => Self::Unavailable(other.to_string()),
        }
    }
}
