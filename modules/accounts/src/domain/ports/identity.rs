use async_trait::async_trait;
use thiserror::Error;

use crate::contract::error::AuthRejection;
use crate::contract::model::{Identity, Session};
use crate::domain::error::DomainError;

/// Failure modes at the identity-provider boundary. A `Rejected` settlement
/// means the provider processed the request and said no; `Transport` covers
/// everything that prevented a settlement.
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IdentityError {
    #[error("{0}")]
    Rejected(AuthRejection),

    #[error("transport failure: {0}")]
    Transport(String),
}

impl From<IdentityError> for DomainError {
    fn from(e: IdentityError) -> Self {
        match e {
            IdentityError::Rejected(rejection) => DomainError::rejected(rejection),
            IdentityError::Transport(message) => DomainError::provider(message),
        }
    }
}

/// Port for the external identity provider. Exactly one of identity/error
/// settles each call; the adapter owns all wire knowledge.
#[async_trait]
pub trait IdentityProvider: Send + Sync {
    /// Create a new authentication identity from an email and password.
    async fn create_identity(&self, email: &str, password: &str)
        -> Result<Identity, IdentityError>;

    /// Exchange email/password for a session (password grant).
    async fn password_grant(&self, email: &str, password: &str)
        -> Result<Session, IdentityError>;

    /// Revoke a session token.
    async fn revoke(&self, access_token: &str) -> Result<(), IdentityError>;
}
