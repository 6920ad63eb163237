//! Conversions between domain records and SeaORM entity models.

use sea_orm::Set;

use crate::domain::repo::{ConsumerProfileRecord, StoreProfileRecord};
use crate::infra::storage::entity::{consumer, store};

impl From<ConsumerProfileRecord> for consumer::ActiveModel {
    fn from(record: ConsumerProfileRecord) -> Self {
        Self {
            id: Set(record.id),
            user_id: Set(record.user_id),
            nickname: Set(record.nickname),
            created_at: Set(record.created_at),
        }
    }
}

impl From<StoreProfileRecord> for store::ActiveModel {
    fn from(record: StoreProfileRecord) -> Self {
        Self {
            id: Set(record.id),
            user_id: Set(record.user_id),
            store_name: Set(record.store_name),
            approval_status: Set(record.approval.as_str().to_string()),
            created_at: Set(record.created_at),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use catalog::StoreApprovalStatus;
    use chrono::Utc;
    use sea_orm::ActiveValue;
    use uuid::Uuid;

    #[test]
    fn store_record_serializes_approval_wire_value() {
        let record = StoreProfileRecord {
            id: Uuid::new_v4(),
            user_id: Uuid::new_v4(),
            store_name: "반찬가게".to_string(),
            approval: StoreApprovalStatus::Pending,
            created_at: Utc::now(),
        };
        let am: store::ActiveModel = record.into();
        assert_eq!(
            am.approval_status,
            ActiveValue::Set("pending".to_string())
        );
    }
}
