use thiserror::Error;

use crate::contract::error::AuthRejection;

/// Fixed user-facing message for presence validation, matching the mobile
/// clients ("please fill in all fields").
pub const MISSING_FIELDS_MESSAGE: &str = "모든 항목을 입력해주세요";

/// Domain-specific errors using thiserror
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DomainError {
    #[error("{MISSING_FIELDS_MESSAGE}")]
    MissingFields,

    #[error("Identity provider rejected the request: {rejection}")]
    Rejected { rejection: AuthRejection },

    #[error("Signup already in progress for '{email}'")]
    SignupInFlight { email: String },

    #[error("Identity provider unreachable: {message}")]
    Provider { message: String },

    #[error("Database error: {message}")]
    Database { message: String },
}

impl DomainError {
    pub fn missing_fields() -> Self {
        Self::MissingFields
    }

    pub fn rejected(rejection: AuthRejection) -> Self {
        Self::Rejected { rejection }
    }

    pub fn signup_in_flight(email: impl Into<String>) -> Self {
        Self::SignupInFlight {
            email: email.into(),
        }
    }

    pub fn provider(message: impl Into<String>) -> Self {
        Self::Provider {
            message: message.into(),
        }
    }

    pub fn database(message: impl Into<String>) -> Self {
        Self::Database {
            message: message.into(),
        }
    }
}
