use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::contract::{
    client::AccountsApi,
    error::AccountsError,
    model::{AccountResolution, OwnerSignupRequest, Session, SignupReceipt, SignupRequest},
};
use crate::domain::service::Service;

/// Local implementation of the AccountsApi trait that delegates to the domain service
pub struct AccountsLocalClient {
    service: Arc<Service>,
}

impl AccountsLocalClient {
    pub fn new(service: Arc<Service>) -> Self {
        Self { service }
    }
}

#[async_trait]
impl AccountsApi for AccountsLocalClient {
    async fn sign_up(&self, request: SignupRequest) -> Result<SignupReceipt, AccountsError> {
        self.service.sign_up(request).await.map_err(Into::into)
    }

    async fn sign_up_owner(
        &self,
        request: OwnerSignupRequest,
    ) -> Result<SignupReceipt, AccountsError> {
        self.service
            .sign_up_owner(request)
            .await
            .map_err(Into::into)
    }

    async fn sign_in(&self, email: &str, password: &str) -> Result<Session, AccountsError> {
        self.service
            .sign_in(email, password)
            .await
            .map_err(Into::into)
    }

    async fn sign_out(&self, access_token: &str) -> Result<(), AccountsError> {
        self.service
            .sign_out(access_token)
            .await
            .map_err(Into::into)
    }

    async fn resolve_account(&self, user_id: Uuid) -> Result<AccountResolution, AccountsError> {
        self.service
            .resolve_account(user_id)
            .await
            .map_err(Into::into)
    }
}
