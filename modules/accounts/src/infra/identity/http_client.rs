//! HTTP adapter for the hosted identity provider (GoTrue-style REST).
//!
//! All wire knowledge lives here: endpoint paths, the `apikey` header, and
//! the mapping from raw provider error codes to the closed [`AuthRejection`]
//! taxonomy. The domain only ever sees the `IdentityProvider` port.

use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use serde::Deserialize;
use serde_json::json;
use tracing::instrument;
use url::Url;
use uuid::Uuid;

use crate::contract::error::AuthRejection;
use crate::contract::model::{Identity, Session};
use crate::domain::ports::{IdentityError, IdentityProvider};

pub struct HttpIdentityProvider {
    client: reqwest::Client,
    base_url: Url,
    anon_key: String,
}

impl HttpIdentityProvider {
    pub fn new(client: reqwest::Client, base_url: Url, anon_key: impl Into<String>) -> Self {
        Self {
            client,
            base_url,
            anon_key: anon_key.into(),
        }
    }

    fn endpoint(&self, segments: &[&str]) -> Result<Url, IdentityError> {
        let mut url = self.base_url.clone();
        url.path_segments_mut()
            .map_err(|_| IdentityError::Transport("invalid identity base URL".to_string()))?
            .extend(segments);
        Ok(url)
    }
}

/// Created-identity payload. Depending on provider settings the user object
/// arrives either at the top level or nested under `user`.
#[derive(Debug, Deserialize)]
struct CreatedUser {
    id: Option<Uuid>,
    user: Option<UserObject>,
}

#[derive(Debug, Deserialize)]
struct UserObject {
    id: Uuid,
}

#[derive(Debug, Deserialize)]
struct SessionPayload {
    access_token: String,
    expires_in: Option<i64>,
    expires_at: Option<i64>,
    user: UserObject,
}

/// Error body shapes the provider emits across endpoints.
#[derive(Debug, Default, Deserialize)]
struct ApiError {
    error_code: Option<String>,
    msg: Option<String>,
    message: Option<String>,
    error_description: Option<String>,
}

impl ApiError {
    fn text(&self) -> String {
        self.msg
            .as_deref()
            .or(self.message.as_deref())
            .or(self.error_description.as_deref())
            .unwrap_or("signup rejected")
            .to_string()
    }
}

/// Map a provider error code/message pair onto the closed taxonomy.
/// `Unknown` keeps the provider text verbatim for display.
fn map_rejection(error_code: Option<&str>, message: &str) -> AuthRejection {
    match error_code {
        Some("user_already_exists") | Some("email_exists") => AuthRejection::DuplicateEmail,
        Some("weak_password") => AuthRejection::WeakPassword,
        Some("invalid_credentials") => AuthRejection::InvalidCredentials,
        Some("validation_failed") if message.to_ascii_lowercase().contains("email") => {
            AuthRejection::MalformedEmail
        }
        _ => {
            let lower = message.to_ascii_lowercase();
            if lower.contains("already registered") {
                AuthRejection::DuplicateEmail
            } else if lower.contains("password") && lower.contains("characters") {
                AuthRejection::WeakPassword
            } else if lower.contains("valid email") || lower.contains("validate email") {
                AuthRejection::MalformedEmail
            } else if lower.contains("invalid login credentials") {
                AuthRejection::InvalidCredentials
            } else {
                AuthRejection::Unknown(message.to_string())
            }
        }
    }
}

/// Turn a non-success response into an `IdentityError`. 4xx settles as a
/// typed rejection; everything else is a transport fault.
async fn reject_from(response: reqwest::Response) -> IdentityError {
    let status = response.status();
    let body: ApiError = response.json().await.unwrap_or_default();

    if status.is_client_error() {
        IdentityError::Rejected(map_rejection(body.error_code.as_deref(), &body.text()))
    } else {
        IdentityError::Transport(format!("HTTP {status}: {}", body.text()))
    }
}

fn transport(e: reqwest::Error) -> IdentityError {
    IdentityError::Transport(e.to_string())
}

#[async_trait]
impl IdentityProvider for HttpIdentityProvider {
    #[instrument(
        name = "accounts.http.identity.create_identity",
        skip_all,
        fields(base_url = %self.base_url, email = %email)
    )]
    async fn create_identity(
        &self,
        email: &str,
        password: &str,
    ) -> Result<Identity, IdentityError> {
        let url = self.endpoint(&["auth", "v1", "signup"])?;

        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(reject_from(response).await);
        }

        let created: CreatedUser = response.json().await.map_err(transport)?;
        let id = created
            .id
            .or(created.user.map(|u| u.id))
            .ok_or_else(|| IdentityError::Transport("signup response without user id".into()))?;

        Ok(Identity { id })
    }

    #[instrument(
        name = "accounts.http.identity.password_grant",
        skip_all,
        fields(base_url = %self.base_url, email = %email)
    )]
    async fn password_grant(&self, email: &str, password: &str) -> Result<Session, IdentityError> {
        let mut url = self.endpoint(&["auth", "v1", "token"])?;
        url.query_pairs_mut().append_pair("grant_type", "password");

        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .json(&json!({ "email": email, "password": password }))
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(reject_from(response).await);
        }

        let payload: SessionPayload = response.json().await.map_err(transport)?;
        let expires_at = payload
            .expires_at
            .and_then(|ts| DateTime::from_timestamp(ts, 0))
            .unwrap_or_else(|| Utc::now() + Duration::seconds(payload.expires_in.unwrap_or(3600)));

        Ok(Session {
            user_id: payload.user.id,
            access_token: payload.access_token,
            expires_at,
        })
    }

    #[instrument(name = "accounts.http.identity.revoke", skip_all, fields(base_url = %self.base_url))]
    async fn revoke(&self, access_token: &str) -> Result<(), IdentityError> {
        let url = self.endpoint(&["auth", "v1", "logout"])?;

        let response = self
            .client
            .post(url)
            .header("apikey", &self.anon_key)
            .bearer_auth(access_token)
            .send()
            .await
            .map_err(transport)?;

        if !response.status().is_success() {
            return Err(reject_from(response).await);
        }

        Ok(())
    }
}
