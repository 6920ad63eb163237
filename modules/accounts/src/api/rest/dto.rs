use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;
use uuid::Uuid;

use crate::contract::model::{
    AccountKind, AccountResolution, OwnerSignupRequest, Session, SignupReceipt, SignupRequest,
};

/// REST DTO for consumer signup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupReq {
    pub email: String,
    pub password: String,
    pub nickname: String,
}

/// REST DTO for store-owner signup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct OwnerSignupReq {
    pub email: String,
    pub password: String,
    pub store_name: String,
}

/// REST DTO for the password login
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct LoginReq {
    pub email: String,
    pub password: String,
}

/// REST DTO returned on successful signup
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SignupReceiptDto {
    pub user_id: Uuid,
}

/// REST DTO for an authenticated session
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct SessionDto {
    pub user_id: Uuid,
    pub access_token: String,
    pub expires_at: DateTime<Utc>,
}

/// REST DTO for account resolution
#[derive(Debug, Clone, Serialize, Deserialize, ToSchema)]
pub struct AccountResolutionDto {
    /// "consumer", "store_owner", or null when no profile exists yet.
    pub kind: Option<String>,
    pub needs_profile_setup: bool,
}

// Conversion implementations between REST DTOs and contract models

impl From<SignupReq> for SignupRequest {
    fn from(req: SignupReq) -> Self {
        Self {
            email: req.email,
            password: req.password,
            nickname: req.nickname,
        }
    }
}

impl From<OwnerSignupReq> for OwnerSignupRequest {
    fn from(req: OwnerSignupReq) -> Self {
        Self {
            email: req.email,
            password: req.password,
            store_name: req.store_name,
        }
    }
}

impl From<SignupReceipt> for SignupReceiptDto {
    fn from(receipt: SignupReceipt) -> Self {
        Self {
            user_id: receipt.user_id,
        }
    }
}

impl From<Session> for SessionDto {
    fn from(session: Session) -> Self {
        Self {
            user_id: session.user_id,
            access_token: session.access_token,
            expires_at: session.expires_at,
        }
    }
}

impl From<AccountResolution> for AccountResolutionDto {
    fn from(resolution: AccountResolution) -> Self {
        Self {
            kind: resolution.kind.map(|k| {
                match k {
                    AccountKind::Consumer => "consumer",
                    AccountKind::StoreOwner => "store_owner",
                }
                .to_string()
            }),
            needs_profile_setup: resolution.needs_profile_setup,
        }
    }
}
