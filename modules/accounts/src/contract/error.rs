use thiserror::Error;

/// Closed taxonomy for identity-provider rejections. The HTTP adapter maps
/// raw provider codes into these variants; callers branch on kind, never on
/// message content. `Unknown` preserves the provider text verbatim.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AuthRejection {
    DuplicateEmail,
    WeakPassword,
    MalformedEmail,
    InvalidCredentials,
    Unknown(String),
}

impl AuthRejection {
    /// User-facing message for this rejection (Korean, matching the mobile
    /// clients).
    pub fn user_message(&self) -> &str {
        match self {
            AuthRejection::DuplicateEmail => "이미 가입된 이메일입니다",
            AuthRejection::WeakPassword => "비밀번호는 6자 이상이어야 합니다",
            AuthRejection::MalformedEmail => "이메일 형식이 올바르지 않습니다",
            AuthRejection::InvalidCredentials => "이메일 또는 비밀번호가 올바르지 않습니다",
            AuthRejection::Unknown(message) => message,
        }
    }
}

impl std::fmt::Display for AuthRejection {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.user_message())
    }
}

/// Errors that are safe to expose to other modules
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum AccountsError {
    #[error("Validation error: {message}")]
    Validation { message: String },

    #[error("Signup rejected: {rejection}")]
    Rejected { rejection: AuthRejection },

    #[error("Signup already in progress for '{email}'")]
    SignupInFlight { email: String },

    #[error("Internal error")]
    Internal,
}

impl AccountsError {
    pub fn validation(message: impl Into<String>) -> Self {
        Self::Validation {
            message: message.into(),
        }
    }

    pub fn rejected(rejection: AuthRejection) -> Self {
        Self::Rejected { rejection }
    }

    pub fn signup_in_flight(email: impl Into<String>) -> Self {
        Self::SignupInFlight {
            email: email.into(),
        }
    }

    pub fn internal() -> Self {
        Self::Internal
    }
}

impl From<crate::domain::error::DomainError> for AccountsError {
    fn from(domain_error: crate::domain::error::DomainError) -> Self {
        use crate::domain::error::DomainError::*;
        match domain_error {
            MissingFields => Self::validation(crate::domain::error::MISSING_FIELDS_MESSAGE),
            Rejected { rejection } => Self::rejected(rejection),
            SignupInFlight { email } => Self::signup_in_flight(email),
            Provider { .. } | Database { .. } => Self::internal(),
        }
    }
}
