//! Service-level tests for the account provisioning flow, driven through
//! hand-rolled port mocks so every settlement path is reachable without a
//! real provider or database.

use std::sync::atomic::{AtomicBool, AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use std::time::Duration;

use anyhow::anyhow;
use async_trait::async_trait;
use chrono::Utc;
use tokio::sync::Notify;
use uuid::Uuid;

use accounts::contract::error::AuthRejection;
use accounts::contract::model::{AccountKind, Identity, OwnerSignupRequest, Session, SignupRequest};
use accounts::domain::error::DomainError;
use accounts::domain::events::AccountEvent;
use accounts::domain::ports::{EventPublisher, IdentityError, IdentityProvider};
use accounts::domain::repo::{ConsumerProfileRecord, ProfilesRepository, StoreProfileRecord};
use accounts::domain::service::Service;

/// Scriptable identity provider. `fail_next` is consumed by the next call;
/// `gate` (when armed) blocks exactly one call until released.
#[derive(Default)]
struct MockIdentityProvider {
    create_calls: AtomicUsize,
    revoke_calls: AtomicUsize,
    fail_next: Mutex<Option<IdentityError>>,
    gate: Mutex<Option<Arc<Notify>>>,
}

impl MockIdentityProvider {
    fn fail_next_with(&self, error: IdentityError) {
        *self.fail_next.lock().unwrap() = Some(error);
    }

    fn arm_gate(&self) -> Arc<Notify> {
        let gate = Arc::new(Notify::new());
        *self.gate.lock().unwrap() = Some(Arc::clone(&gate));
        gate
    }
}

#[async_trait]
impl IdentityProvider for MockIdentityProvider {
    async fn create_identity(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Identity, IdentityError> {
        self.create_calls.fetch_add(1, Ordering::SeqCst);
        let gate = self.gate.lock().unwrap().take();
        if let Some(gate) = gate {
            gate.notified().await;
        }
        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error);
        }
        Ok(Identity { id: Uuid::new_v4() })
    }

    async fn password_grant(
        &self,
        _email: &str,
        _password: &str,
    ) -> Result<Session, IdentityError> {
        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error);
        }
        Ok(Session {
            user_id: Uuid::new_v4(),
            access_token: "token-abc".to_string(),
            expires_at: Utc::now() + chrono::Duration::hours(1),
        })
    }

    async fn revoke(&self, _access_token: &str) -> Result<(), IdentityError> {
        self.revoke_calls.fetch_add(1, Ordering::SeqCst);
        if let Some(error) = self.fail_next.lock().unwrap().take() {
            return Err(error);
        }
        Ok(())
    }
}

/// In-memory profiles repository; inserts can be forced to fail.
#[derive(Default)]
struct MockProfiles {
    consumers: Mutex<Vec<ConsumerProfileRecord>>,
    stores: Mutex<Vec<StoreProfileRecord>>,
    fail_inserts: AtomicBool,
}

#[async_trait]
impl ProfilesRepository for MockProfiles {
    async fn insert_consumer(&self, record: ConsumerProfileRecord) -> anyhow::Result<()> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(anyhow!("insert rejected"));
        }
        self.consumers.lock().unwrap().push(record);
        Ok(())
    }

    async fn insert_store(&self, record: StoreProfileRecord) -> anyhow::Result<()> {
        if self.fail_inserts.load(Ordering::SeqCst) {
            return Err(anyhow!("insert rejected"));
        }
        self.stores.lock().unwrap().push(record);
        Ok(())
    }

    async fn consumer_exists(&self, user_id: Uuid) -> anyhow::Result<bool> {
        Ok(self
            .consumers
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.user_id == user_id))
    }

    async fn store_exists(&self, user_id: Uuid) -> anyhow::Result<bool> {
        Ok(self
            .stores
            .lock()
            .unwrap()
            .iter()
            .any(|r| r.user_id == user_id))
    }
}

#[derive(Default)]
struct RecordingEvents {
    events: Mutex<Vec<AccountEvent>>,
}

impl RecordingEvents {
    fn snapshot(&self) -> Vec<AccountEvent> {
        self.events.lock().unwrap().clone()
    }
}

impl EventPublisher<AccountEvent> for RecordingEvents {
    fn publish(&self, event: &AccountEvent) {
        self.events.lock().unwrap().push(event.clone());
    }
}

struct Harness {
    service: Service,
    identity: Arc<MockIdentityProvider>,
    profiles: Arc<MockProfiles>,
    events: Arc<RecordingEvents>,
}

fn harness() -> Harness {
    let identity = Arc::new(MockIdentityProvider::default());
    let profiles = Arc::new(MockProfiles::default());
    let events = Arc::new(RecordingEvents::default());
    let service = Service::new(
        Arc::clone(&identity) as Arc<dyn IdentityProvider>,
        Arc::clone(&profiles) as Arc<dyn ProfilesRepository>,
        Arc::clone(&events) as Arc<dyn EventPublisher<AccountEvent>>,
    );
    Harness {
        service,
        identity,
        profiles,
        events,
    }
}

fn consumer_request(email: &str, password: &str, nickname: &str) -> SignupRequest {
    SignupRequest {
        email: email.to_string(),
        password: password.to_string(),
        nickname: nickname.to_string(),
    }
}

/// Poll until `check` holds, or fail after ~2s. The profile write is a
/// detached task, so tests observe it with a deadline rather than a join.
async fn eventually(check: impl Fn() -> bool, what: &str) {
    for _ in 0..200 {
        if check() {
            return;
        }
        tokio::time::sleep(Duration::from_millis(10)).await;
    }
    panic!("timed out waiting for {what}");
}

#[tokio::test]
async fn blank_fields_fail_validation_before_the_provider_is_called() {
    let h = harness();

    let cases = [
        consumer_request("", "secret1", "민지"),
        consumer_request("   ", "secret1", "민지"),
        consumer_request("a@b.com", "", "민지"),
        consumer_request("a@b.com", "secret1", ""),
        consumer_request("a@b.com", "secret1", "  "),
    ];

    for request in cases {
        let err = h.service.sign_up(request).await.unwrap_err();
        assert_eq!(err, DomainError::MissingFields);
    }

    assert_eq!(h.identity.create_calls.load(Ordering::SeqCst), 0);
    assert!(h.events.snapshot().is_empty());
}

#[tokio::test]
async fn successful_signup_returns_receipt_and_attaches_profile() {
    let h = harness();

    let receipt = h
        .service
        .sign_up(consumer_request("mina@example.com", "secret1", "미나"))
        .await
        .unwrap();

    eventually(
        || !h.profiles.consumers.lock().unwrap().is_empty(),
        "consumer profile insert",
    )
    .await;

    let consumers = h.profiles.consumers.lock().unwrap();
    assert_eq!(consumers.len(), 1);
    assert_eq!(consumers[0].user_id, receipt.user_id);
    assert_eq!(consumers[0].nickname, "미나");

    let events = h.events.snapshot();
    assert!(events.iter().any(|e| matches!(
        e,
        AccountEvent::SignedUp { user_id, kind: AccountKind::Consumer, .. }
            if *user_id == receipt.user_id
    )));
}

#[tokio::test]
async fn provider_rejection_settles_signup_without_profile_write() {
    let h = harness();
    h.identity
        .fail_next_with(IdentityError::Rejected(AuthRejection::DuplicateEmail));

    let err = h
        .service
        .sign_up(consumer_request("dup@example.com", "secret1", "민수"))
        .await
        .unwrap_err();

    assert_eq!(
        err,
        DomainError::Rejected {
            rejection: AuthRejection::DuplicateEmail
        }
    );

    // Give any stray detached task a chance to run before asserting.
    tokio::time::sleep(Duration::from_millis(50)).await;
    assert!(h.profiles.consumers.lock().unwrap().is_empty());
    assert!(h.events.snapshot().is_empty());
}

#[tokio::test]
async fn transport_failure_surfaces_as_provider_error() {
    let h = harness();
    h.identity
        .fail_next_with(IdentityError::Transport("connection refused".to_string()));

    let err = h
        .service
        .sign_up(consumer_request("net@example.com", "secret1", "하늘"))
        .await
        .unwrap_err();

    assert!(matches!(err, DomainError::Provider { .. }));
}

#[tokio::test]
async fn failed_profile_write_keeps_signup_successful_but_observable() {
    let h = harness();
    h.profiles.fail_inserts.store(true, Ordering::SeqCst);

    let receipt = h
        .service
        .sign_up(consumer_request("gap@example.com", "secret1", "보라"))
        .await
        .unwrap();

    eventually(
        || {
            h.events
                .snapshot()
                .iter()
                .any(|e| matches!(e, AccountEvent::ProfileWriteFailed { .. }))
        },
        "profile-write-failed event",
    )
    .await;

    let events = h.events.snapshot();
    assert!(events.iter().any(|e| matches!(
        e,
        AccountEvent::ProfileWriteFailed { user_id, kind: AccountKind::Consumer, .. }
            if *user_id == receipt.user_id
    )));
    // Signup itself still settled as success.
    assert!(events.iter().any(|e| matches!(
        e,
        AccountEvent::SignedUp { user_id, .. } if *user_id == receipt.user_id
    )));
    assert!(h.profiles.consumers.lock().unwrap().is_empty());
}

#[tokio::test]
async fn concurrent_signup_for_same_email_is_rejected_while_in_flight() {
    let h = harness();
    let gate = h.identity.arm_gate();

    let service = h.service.clone();
    let first = tokio::spawn(async move {
        service
            .sign_up(consumer_request("race@example.com", "secret1", "선우"))
            .await
    });

    // Wait until the first attempt is parked inside the provider call.
    eventually(
        || h.identity.create_calls.load(Ordering::SeqCst) == 1,
        "first signup to reach the provider",
    )
    .await;

    // Same email, different case: still the same slot.
    let err = h
        .service
        .sign_up(consumer_request("Race@Example.com", "secret1", "선우"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::SignupInFlight { .. }));

    // A different email is not blocked by the held slot.
    let other = h
        .service
        .sign_up(consumer_request("other@example.com", "secret1", "지호"))
        .await;
    assert!(other.is_ok());

    gate.notify_one();
    let settled = first.await.unwrap();
    assert!(settled.is_ok());
}

#[tokio::test]
async fn signup_slot_is_released_after_settlement() {
    let h = harness();
    h.identity
        .fail_next_with(IdentityError::Rejected(AuthRejection::WeakPassword));

    let err = h
        .service
        .sign_up(consumer_request("retry@example.com", "12345", "유진"))
        .await
        .unwrap_err();
    assert!(matches!(err, DomainError::Rejected { .. }));

    // The slot from the failed attempt must not leak into the retry.
    let retried = h
        .service
        .sign_up(consumer_request("retry@example.com", "longer-password", "유진"))
        .await;
    assert!(retried.is_ok());
}

#[tokio::test]
async fn owner_signup_attaches_pending_store_profile() {
    let h = harness();

    let receipt = h
        .service
        .sign_up_owner(OwnerSignupRequest {
            email: "owner@example.com".to_string(),
            password: "secret1".to_string(),
            store_name: "행복반찬".to_string(),
        })
        .await
        .unwrap();

    eventually(
        || !h.profiles.stores.lock().unwrap().is_empty(),
        "store profile insert",
    )
    .await;

    let stores = h.profiles.stores.lock().unwrap();
    assert_eq!(stores.len(), 1);
    assert_eq!(stores[0].user_id, receipt.user_id);
    assert_eq!(stores[0].store_name, "행복반찬");
    assert_eq!(stores[0].approval, catalog::StoreApprovalStatus::Pending);

    assert!(h.events.snapshot().iter().any(|e| matches!(
        e,
        AccountEvent::SignedUp { kind: AccountKind::StoreOwner, .. }
    )));
}

#[tokio::test]
async fn sign_in_validates_presence_and_publishes_event() {
    let h = harness();

    let err = h.service.sign_in("", "secret1").await.unwrap_err();
    assert_eq!(err, DomainError::MissingFields);
    let err = h.service.sign_in("a@b.com", "").await.unwrap_err();
    assert_eq!(err, DomainError::MissingFields);

    let session = h.service.sign_in("a@b.com", "secret1").await.unwrap();
    assert_eq!(session.access_token, "token-abc");
    assert!(h.events.snapshot().iter().any(|e| matches!(
        e,
        AccountEvent::SignedIn { user_id, .. } if *user_id == session.user_id
    )));
}

#[tokio::test]
async fn sign_out_swallows_revoke_failures() {
    let h = harness();
    h.identity
        .fail_next_with(IdentityError::Transport("provider down".to_string()));

    let result = h.service.sign_out("stale-token").await;
    assert!(result.is_ok());
    assert_eq!(h.identity.revoke_calls.load(Ordering::SeqCst), 1);
}

#[tokio::test]
async fn resolve_account_prefers_store_profile_and_flags_missing_ones() {
    let h = harness();
    let user_id = Uuid::new_v4();

    let resolution = h.service.resolve_account(user_id).await.unwrap();
    assert_eq!(resolution.kind, None);
    assert!(resolution.needs_profile_setup);

    h.profiles.consumers.lock().unwrap().push(ConsumerProfileRecord {
        id: Uuid::new_v4(),
        user_id,
        nickname: "주연".to_string(),
        created_at: Utc::now(),
    });

    let resolution = h.service.resolve_account(user_id).await.unwrap();
    assert_eq!(resolution.kind, Some(AccountKind::Consumer));
    assert!(!resolution.needs_profile_setup);

    h.profiles.stores.lock().unwrap().push(StoreProfileRecord {
        id: Uuid::new_v4(),
        user_id,
        store_name: "가게".to_string(),
        approval: catalog::StoreApprovalStatus::Approved,
        created_at: Utc::now(),
    });

    let resolution = h.service.resolve_account(user_id).await.unwrap();
    assert_eq!(resolution.kind, Some(AccountKind::StoreOwner));
}
