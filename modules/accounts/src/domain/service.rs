use std::sync::Arc;

use chrono::Utc;
use dashmap::DashMap;
use tracing::{debug, info, instrument, warn};
use uuid::Uuid;

use crate::contract::model::{
    AccountKind, AccountResolution, OwnerSignupRequest, Session, SignupReceipt, SignupRequest,
};
use crate::domain::error::DomainError;
use crate::domain::events::AccountEvent;
use crate::domain::ports::{EventPublisher, IdentityProvider};
use crate::domain::repo::{ConsumerProfileRecord, ProfilesRepository, StoreProfileRecord};

/// Domain service orchestrating account provisioning.
/// Depends only on ports, not on infra types.
///
/// Per-invocation flow: validate → create identity → detach profile write →
/// report. Validation failures and provider rejections are terminal and
/// leave no partial state; the profile write is issued at most once and
/// only after identity creation succeeds.
#[derive(Clone)]
pub struct Service {
    identity: Arc<dyn IdentityProvider>,
    profiles: Arc<dyn ProfilesRepository>,
    events: Arc<dyn EventPublisher<AccountEvent>>,
    /// In-flight signup slots keyed by normalized email. A slot is held for
    /// the duration of one signup invocation and released on settlement,
    /// success or failure.
    in_flight: Arc<DashMap<String, ()>>,
}

impl Service {
    /// Create a service with dependencies.
    pub fn new(
        identity: Arc<dyn IdentityProvider>,
        profiles: Arc<dyn ProfilesRepository>,
        events: Arc<dyn EventPublisher<AccountEvent>>,
    ) -> Self {
        Self {
            identity,
            profiles,
            events,
            in_flight: Arc::new(DashMap::new()),
        }
    }

    #[instrument(name = "accounts.service.sign_up", skip(self, request), fields(email = %request.email))]
    pub async fn sign_up(&self, request: SignupRequest) -> Result<SignupReceipt, DomainError> {
        info!("Provisioning consumer account");

        if is_blank(&request.email) || request.password.is_empty() || is_blank(&request.nickname) {
            return Err(DomainError::missing_fields());
        }

        let _slot = self.acquire_signup_slot(&request.email)?;

        let identity = self
            .identity
            .create_identity(&request.email, &request.password)
            .await?;

        self.attach_consumer_profile(identity.id, request.nickname);

        self.events.publish(&AccountEvent::SignedUp {
            user_id: identity.id,
            kind: AccountKind::Consumer,
            at: Utc::now(),
        });

        info!(user_id = %identity.id, "Successfully provisioned consumer account");
        Ok(SignupReceipt {
            user_id: identity.id,
        })
    }

    #[instrument(name = "accounts.service.sign_up_owner", skip(self, request), fields(email = %request.email))]
    pub async fn sign_up_owner(
        &self,
        request: OwnerSignupRequest,
    ) -> Result<SignupReceipt, DomainError> {
        info!("Provisioning store-owner account");

        if is_blank(&request.email) || request.password.is_empty() || is_blank(&request.store_name)
        {
            return Err(DomainError::missing_fields());
        }

        let _slot = self.acquire_signup_slot(&request.email)?;

        let identity = self
            .identity
            .create_identity(&request.email, &request.password)
            .await?;

        self.attach_store_profile(identity.id, request.store_name);

        self.events.publish(&AccountEvent::SignedUp {
            user_id: identity.id,
            kind: AccountKind::StoreOwner,
            at: Utc::now(),
        });

        info!(user_id = %identity.id, "Successfully provisioned store-owner account");
        Ok(SignupReceipt {
            user_id: identity.id,
        })
    }

    #[instrument(name = "accounts.service.sign_in", skip(self, password), fields(email = %email))]
    pub async fn sign_in(&self, email: &str, password: &str) -> Result<Session, DomainError> {
        debug!("Authenticating");

        if is_blank(email) || password.is_empty() {
            return Err(DomainError::missing_fields());
        }

        let session = self.identity.password_grant(email, password).await?;

        self.events.publish(&AccountEvent::SignedIn {
            user_id: session.user_id,
            at: Utc::now(),
        });

        Ok(session)
    }

    /// Best-effort session revoke. A provider failure is logged and the
    /// sign-out still reported as successful, matching the clients.
    #[instrument(name = "accounts.service.sign_out", skip_all)]
    pub async fn sign_out(&self, access_token: &str) -> Result<(), DomainError> {
        if let Err(e) = self.identity.revoke(access_token).await {
            warn!(error = %e, "session revoke failed, reporting sign-out anyway");
        }
        Ok(())
    }

    #[instrument(name = "accounts.service.resolve_account", skip(self), fields(user_id = %user_id))]
    pub async fn resolve_account(&self, user_id: Uuid) -> Result<AccountResolution, DomainError> {
        debug!("Resolving account kind");

        let consumer = self
            .profiles
            .consumer_exists(user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;
        let store = self
            .profiles
            .store_exists(user_id)
            .await
            .map_err(|e| DomainError::database(e.to_string()))?;

        let kind = if store {
            Some(AccountKind::StoreOwner)
        } else if consumer {
            Some(AccountKind::Consumer)
        } else {
            None
        };

        Ok(AccountResolution {
            kind,
            needs_profile_setup: kind.is_none(),
        })
    }

    // --- signup internals ---

    fn acquire_signup_slot(&self, email: &str) -> Result<SignupSlot, DomainError> {
        let key = email.trim().to_ascii_lowercase();
        if self.in_flight.insert(key.clone(), ()).is_some() {
            debug!("Duplicate signup rejected while another is in flight");
            return Err(DomainError::signup_in_flight(email));
        }
        Ok(SignupSlot {
            slots: Arc::clone(&self.in_flight),
            key,
        })
    }

    /// Issue the consumer profile insert as a detached task. The signup
    /// outcome is not gated on it settling; a failure is traced and turned
    /// into a `ProfileWriteFailed` event.
    fn attach_consumer_profile(&self, user_id: Uuid, nickname: String) {
        let record = ConsumerProfileRecord {
            id: Uuid::new_v4(),
            user_id,
            nickname,
            created_at: Utc::now(),
        };
        let profiles = Arc::clone(&self.profiles);
        let events = Arc::clone(&self.events);
        tokio::spawn(async move {
            if let Err(e) = profiles.insert_consumer(record).await {
                warn!(%user_id, error = %e, "consumer profile write failed after signup");
                events.publish(&AccountEvent::ProfileWriteFailed {
                    user_id,
                    kind: AccountKind::Consumer,
                    at: Utc::now(),
                });
            }
        });
    }

    fn attach_store_profile(&self, user_id: Uuid, store_name: String) {
        let record = StoreProfileRecord {
            id: Uuid::new_v4(),
            user_id,
            store_name,
            approval: catalog::StoreApprovalStatus::Pending,
            created_at: Utc::now(),
        };
        let profiles = Arc::clone(&self.profiles);
        let events = Arc::clone(&self.events);
        tokio::spawn(async move {
            if let Err(e) = profiles.insert_store(record).await {
                warn!(%user_id, error = %e, "store profile write failed after signup");
                events.publish(&AccountEvent::ProfileWriteFailed {
                    user_id,
                    kind: AccountKind::StoreOwner,
                    at: Utc::now(),
                });
            }
        });
    }
}

/// RAII handle for one in-flight signup slot.
struct SignupSlot {
    slots: Arc<DashMap<String, ()>>,
    key: String,
}

impl Drop for SignupSlot {
    fn drop(&mut self) {
        self.slots.remove(&self.key);
    }
}

fn is_blank(s: &str) -> bool {
    s.trim().is_empty()
}
