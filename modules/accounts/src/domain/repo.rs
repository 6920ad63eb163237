use async_trait::async_trait;
use catalog::StoreApprovalStatus;
use chrono::{DateTime, Utc};
use uuid::Uuid;

/// A consumer profile row. `user_id` is a weak reference to the
/// provider-owned identity; the module creates these exactly once per
/// successful consumer signup and never reads them back on the signup path.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConsumerProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub nickname: String,
    pub created_at: DateTime<Utc>,
}

/// A store-owner profile row. New rows start in `Pending` approval.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoreProfileRecord {
    pub id: Uuid,
    pub user_id: Uuid,
    pub store_name: String,
    pub approval: StoreApprovalStatus,
    pub created_at: DateTime<Utc>,
}

/// Port for the domain layer: persistence operations the domain needs.
/// Object-safe and async-friendly via `async_trait`.
#[async_trait]
pub trait ProfilesRepository: Send + Sync {
    /// Insert a consumer profile for a freshly created identity.
    async fn insert_consumer(&self, record: ConsumerProfileRecord) -> anyhow::Result<()>;
    /// Insert a store-owner profile for a freshly created identity.
    async fn insert_store(&self, record: StoreProfileRecord) -> anyhow::Result<()>;
    /// Whether a consumer profile exists for the identity.
    async fn consumer_exists(&self, user_id: Uuid) -> anyhow::Result<bool>;
    /// Whether a store-owner profile exists for the identity.
    async fn store_exists(&self, user_id: Uuid) -> anyhow::Result<bool>;
}
