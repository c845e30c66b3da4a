//! Server dependencies for domain actions (using traits for testability)
//!
//! Every action takes `&ServerDeps`; production wires the Postgres adapter,
//! tests wire the in-memory stores from `test_dependencies`.

use sqlx::PgPool;
use std::sync::Arc;

use crate::kernel::{
    BaseHealthProbe, BaseModerationStore, BaseNotificationStore, BaseProfileStore, PostgresStore,
};

/// Server dependencies accessible to actions and routes
#[derive(Clone)]
pub struct ServerDeps {
    pub profiles: Arc<dyn BaseProfileStore>,
    pub moderation: Arc<dyn BaseModerationStore>,
    pub notifications: Arc<dyn BaseNotificationStore>,
    pub health: Arc<dyn BaseHealthProbe>,
}

impl ServerDeps {
    pub fn new(
        profiles: Arc<dyn BaseProfileStore>,
        moderation: Arc<dyn BaseModerationStore>,
        notifications: Arc<dyn BaseNotificationStore>,
        health: Arc<dyn BaseHealthProbe>,
    ) -> Self {
        Self {
            profiles,
            moderation,
            notifications,
            health,
        }
    }

    /// All stores backed by one connection pool
    pub fn postgres(pool: PgPool) -> Self {
        let store = Arc::new(PostgresStore::new(pool));
        Self::new(store.clone(), store.clone(), store.clone(), store)
    }
}
