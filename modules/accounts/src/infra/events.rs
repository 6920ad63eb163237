//! Event publisher adapter that surfaces domain events as structured logs.

use tracing::{info, warn};

use crate::domain::events::AccountEvent;
use crate::domain::ports::EventPublisher;

/// Publishes account events into the tracing pipeline. Profile-write
/// failures are warnings so the fire-and-forget gap stays observable.
#[derive(Debug, Clone, Default)]
pub struct TracingEventPublisher;

impl EventPublisher<AccountEvent> for TracingEventPublisher {
    fn publish(&self, event: &AccountEvent) {
        match event {
            AccountEvent::SignedUp { user_id, kind, at } => {
                info!(%user_id, ?kind, %at, "account signed up");
            }
            AccountEvent::SignedIn { user_id, at } => {
                info!(%user_id, %at, "account signed in");
            }
            AccountEvent::ProfileWriteFailed { user_id, kind, at } => {
                warn!(%user_id, ?kind, %at, "profile write failed after signup");
            }
        }
    }
}
