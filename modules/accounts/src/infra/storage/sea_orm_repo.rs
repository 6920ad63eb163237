//! SeaORM-backed repository implementation for the domain port.
//!
//! Generic over `C: ConnectionTrait`, so it can be constructed with a
//! `DatabaseConnection` or a transactional connection.

use anyhow::Context;
use sea_orm::{ActiveModelTrait, ColumnTrait, ConnectionTrait, EntityTrait, PaginatorTrait, QueryFilter};
use uuid::Uuid;

use crate::domain::repo::{ConsumerProfileRecord, ProfilesRepository, StoreProfileRecord};
use crate::infra::storage::entity::{consumer, store};

pub struct SeaOrmProfilesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    conn: C,
}

impl<C> SeaOrmProfilesRepository<C>
where
    C: ConnectionTrait + Send + Sync,
{
    pub fn new(conn: C) -> Self {
        Self { conn }
    }
}

#[async_trait::async_trait]
impl<C> ProfilesRepository for SeaOrmProfilesRepository<C>
where
    C: ConnectionTrait + Send + Sync + 'static,
{
    async fn insert_consumer(&self, record: ConsumerProfileRecord) -> anyhow::Result<()> {
        let am: consumer::ActiveModel = record.into();
        let _ = am
            .insert(&self.conn)
            .await
            .context("insert_consumer failed")?;
        Ok(())
    }

    async fn insert_store(&self, record: StoreProfileRecord) -> anyhow::Result<()> {
        let am: store::ActiveModel = record.into();
        let _ = am.insert(&self.conn).await.context("insert_store failed")?;
        Ok(())
    }

    async fn consumer_exists(&self, user_id: Uuid) -> anyhow::Result<bool> {
        let count = consumer::Entity::find()
            .filter(consumer::Column::UserId.eq(user_id))
            .count(&self.conn)
            .await
            .context("consumer_exists failed")?;
        Ok(count > 0)
    }

    async fn store_exists(&self, user_id: Uuid) -> anyhow::Result<bool> {
        let count = store::Entity::find()
            .filter(store::Column::UserId.eq(user_id))
            .count(&self.conn)
            .await
            .context("store_exists failed")?;
        Ok(count > 0)
    }
}
