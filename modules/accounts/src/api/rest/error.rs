use axum::http::StatusCode;

use crate::api::problem::{Problem, ProblemResponse};
use crate::contract::error::AuthRejection;
use crate::domain::error::DomainError;

/// Helper to create a ProblemResponse with less boilerplate
pub fn from_parts(
    status: StatusCode,
    code: &str,
    title: &str,
    detail: impl Into<String>,
    instance: &str,
) -> ProblemResponse {
    let problem = Problem::new(status, title, detail)
        .with_type(format!("https://errors.marketday.dev/{}", code))
        .with_code(code)
        .with_instance(instance);

    ProblemResponse(problem)
}

/// Map domain error to RFC9457 ProblemResponse
pub fn map_domain_error(e: &DomainError, instance: &str) -> ProblemResponse {
    match e {
        DomainError::MissingFields => from_parts(
            StatusCode::BAD_REQUEST,
            "ACCOUNTS_VALIDATION",
            "Validation error",
            crate::domain::error::MISSING_FIELDS_MESSAGE,
            instance,
        ),
        DomainError::Rejected { rejection } => match rejection {
            AuthRejection::DuplicateEmail => from_parts(
                StatusCode::CONFLICT,
                "ACCOUNTS_EMAIL_CONFLICT",
                "Email already registered",
                rejection.user_message(),
                instance,
            ),
            AuthRejection::InvalidCredentials => from_parts(
                StatusCode::UNAUTHORIZED,
                "ACCOUNTS_INVALID_CREDENTIALS",
                "Invalid credentials",
                rejection.user_message(),
                instance,
            ),
            AuthRejection::WeakPassword
            | AuthRejection::MalformedEmail
            | AuthRejection::Unknown(_) => from_parts(
                StatusCode::UNPROCESSABLE_ENTITY,
                "ACCOUNTS_REJECTED",
                "Signup rejected",
                rejection.user_message(),
                instance,
            ),
        },
        DomainError::SignupInFlight { email } => from_parts(
            StatusCode::CONFLICT,
            "ACCOUNTS_SIGNUP_IN_FLIGHT",
            "Signup already in progress",
            format!("A signup for '{}' is already in progress", email),
            instance,
        ),
        DomainError::Provider { .. } => {
            // Log the upstream details but don't expose them to the client
            tracing::error!(error = ?e, "Identity provider unreachable");
            from_parts(
                StatusCode::BAD_GATEWAY,
                "UPSTREAM_IDENTITY",
                "Identity provider unavailable",
                "The identity provider could not be reached",
                instance,
            )
        }
        DomainError::Database { .. } => {
            tracing::error!(error = ?e, "Database error occurred");
            from_parts(
                StatusCode::INTERNAL_SERVER_ERROR,
                "INTERNAL_DB",
                "Internal error",
                "An internal database error occurred",
                instance,
            )
        }
    }
}
