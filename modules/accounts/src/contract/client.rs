use async_trait::async_trait;
use uuid::Uuid;

use crate::contract::{
    error::AccountsError,
    model::{AccountResolution, OwnerSignupRequest, Session, SignupReceipt, SignupRequest},
};

/// Public API trait for the accounts module that other modules can use
#[async_trait]
pub trait AccountsApi: Send + Sync {
    /// Provision a consumer account: create an identity with the provider
    /// and attach a consumer profile.
    async fn sign_up(&self, request: SignupRequest) -> Result<SignupReceipt, AccountsError>;

    /// Provision a store-owner account. The store profile starts in the
    /// pending approval state.
    async fn sign_up_owner(
        &self,
        request: OwnerSignupRequest,
    ) -> Result<SignupReceipt, AccountsError>;

    /// Authenticate with email and password.
    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AccountsError>;

    /// Revoke a session token. Best-effort: provider failures are logged
    /// and swallowed.
    async fn sign_out(&self, access_token: &str) -> Result<(), AccountsError>;

    /// Determine which profile kind, if any, is attached to an identity.
    async fn resolve_account(&self, user_id: Uuid) -> Result<AccountResolution, AccountsError>;
}
