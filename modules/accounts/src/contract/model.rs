use chrono::{DateTime, Utc};
use uuid::Uuid;

/// User-supplied consumer signup input (no serde; transport DTOs live in
/// the REST layer).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SignupRequest {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

/// User-supplied store-owner signup input. Same orchestration as consumer
/// signup, but a store profile row is provisioned instead.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OwnerSignupRequest {
    pub email: String,
    pub password: String,
    pub store_name: String,
}

/// Opaque handle to an authentication identity owned by the external
/// provider. The module never creates or mutates identities locally.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Identity {
    pub id: Uuid,
}

/// Result of a successful signup: the provider-assigned identity id.
/// Profile persistence is attempted but deliberately not confirmed here.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignupReceipt {
    pub user_id: Uuid,
}

/// An authenticated session returned by the provider's password grant.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    pub user_id: Uuid,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// Which kind of profile an identity resolved to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccountKind {
    Consumer,
    StoreOwner,
}

/// Outcome of looking up the profiles attached to an identity. An identity
/// with no profile row needs the profile-setup flow.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct AccountResolution {
    pub kind: Option<AccountKind>,
    pub needs_profile_setup: bool,
}
