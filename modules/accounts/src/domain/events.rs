use chrono::{DateTime, Utc};
use uuid::Uuid;

use crate::contract::model::AccountKind;

/// Transport-agnostic domain event.
///
/// `ProfileWriteFailed` is the observable trace of the fire-and-forget
/// profile insert: signup still succeeds, but the gap is never silent.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AccountEvent {
    SignedUp {
        user_id: Uuid,
        kind: AccountKind,
        at: DateTime<Utc>,
    },
    SignedIn {
        user_id: Uuid,
        at: DateTime<Utc>,
    },
    ProfileWriteFailed {
        user_id: Uuid,
        kind: AccountKind,
        at: DateTime<Utc>,
    },
}
