// TestDependencies - in-memory implementations of the store traits
//
// Each mock keeps its rows behind a Mutex, records the writes it receives and
// can be told to fail reads or writes.

use anyhow::{anyhow, Result};
use async_trait::async_trait;
use chrono::{DateTime, Duration, Utc};
use std::collections::HashMap;
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use super::{
    BaseHealthProbe, BaseModerationStore, BaseNotificationStore, BaseProfileStore, ServerDeps,
};
use crate::common::{ModerationId, NotificationId, UserId};
use crate::domains::moderation::models::ModerationRecord;
use crate::domains::notifications::models::{NewNotification, Notification};
use crate::domains::phone_verification::models::ProfileVerification;

// =============================================================================
// Mock Profile Store
// =============================================================================

#[derive(Default)]
pub struct MockProfileStore {
    profiles: Mutex<HashMap<UserId, ProfileVerification>>,
    verified_writes: Mutex<Vec<UserId>>,
    reads: Mutex<usize>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockProfileStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_profile(self, user_id: &UserId, profile: ProfileVerification) -> Self {
        self.profiles.lock().unwrap().insert(user_id.clone(), profile);
        self
    }

    /// Unverified profile holding a pending code
    pub fn with_pending_code(self, user_id: &UserId, code: &str, expires_at: DateTime<Utc>) -> Self {
        let profile = ProfileVerification {
            id: user_id.as_uuid().unwrap_or_else(Uuid::new_v4),
            phone_verified: Some(false),
            phone_verification_code: Some(code.to_string()),
            phone_verification_expires_at: Some(expires_at),
        };
        self.with_profile(user_id, profile)
    }

    /// Profile with no pending code
    pub fn with_verified(self, user_id: &UserId, verified: bool) -> Self {
        let profile = ProfileVerification {
            id: user_id.as_uuid().unwrap_or_else(Uuid::new_v4),
            phone_verified: Some(verified),
            phone_verification_code: None,
            phone_verification_expires_at: None,
        };
        self.with_profile(user_id, profile)
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn get(&self, user_id: &UserId) -> Option<ProfileVerification> {
        self.profiles.lock().unwrap().get(user_id).cloned()
    }

    /// Users passed to `mark_phone_verified`, in call order
    pub fn verified_writes(&self) -> Vec<UserId> {
        self.verified_writes.lock().unwrap().clone()
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }

    fn record_read(&self) -> Result<()> {
        *self.reads.lock().unwrap() += 1;
        if self.fail_reads {
            return Err(anyhow!("profiles: connection refused"));
        }
        Ok(())
    }
}

#[async_trait]
impl BaseProfileStore for MockProfileStore {
    async fn find_verification(&self, user_id: &UserId) -> Result<Option<ProfileVerification>> {
        self.record_read()?;
        Ok(self.get(user_id))
    }

    async fn is_phone_verified(&self, user_id: &UserId) -> Result<bool> {
        self.record_read()?;
        Ok(self
            .get(user_id)
            .and_then(|p| p.phone_verified)
            .unwrap_or(false))
    }

    async fn mark_phone_verified(&self, user_id: &UserId) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("profiles: update rejected"));
        }

        self.verified_writes.lock().unwrap().push(user_id.clone());
        if let Some(profile) = self.profiles.lock().unwrap().get_mut(user_id) {
            profile.phone_verified = Some(true);
            profile.phone_verification_code = None;
            profile.phone_verification_expires_at = None;
        }
        Ok(())
    }
}

// =============================================================================
// Mock Moderation Store
// =============================================================================

#[derive(Default)]
pub struct MockModerationStore {
    entries: Mutex<Vec<(UserId, ModerationRecord)>>,
    deactivated: Mutex<Vec<ModerationId>>,
    reads: Mutex<usize>,
    fail_reads: bool,
    fail_writes: bool,
}

impl MockModerationStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an active entry; each added entry is newer than the previous one
    pub fn with_entry(
        self,
        user_id: &UserId,
        moderation_type: impl Into<String>,
        expires_at: Option<DateTime<Utc>>,
    ) -> Self {
        {
            let mut entries = self.entries.lock().unwrap();
            let created_at = Utc::now() - Duration::days(30) + Duration::seconds(entries.len() as i64);
            entries.push((
                user_id.clone(),
                ModerationRecord {
                    id: ModerationId::new(),
                    moderation_type: moderation_type.into(),
                    is_active: true,
                    expires_at,
                    created_at,
                },
            ));
        }
        self
    }

    pub fn failing_reads(mut self) -> Self {
        self.fail_reads = true;
        self
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    /// Ids passed to `deactivate`, in call order
    pub fn deactivated(&self) -> Vec<ModerationId> {
        self.deactivated.lock().unwrap().clone()
    }

    pub fn read_count(&self) -> usize {
        *self.reads.lock().unwrap()
    }
}

#[async_trait]
impl BaseModerationStore for MockModerationStore {
    async fn find_current(&self, user_id: &UserId) -> Result<Option<ModerationRecord>> {
        *self.reads.lock().unwrap() += 1;
        if self.fail_reads {
            return Err(anyhow!("user_moderation: connection refused"));
        }

        Ok(self
            .entries
            .lock()
            .unwrap()
            .iter()
            .filter(|(owner, record)| owner == user_id && record.is_active)
            .map(|(_, record)| record)
            .max_by_key(|record| record.created_at)
            .cloned())
    }

    async fn deactivate(&self, id: ModerationId) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("user_moderation: update rejected"));
        }

        self.deactivated.lock().unwrap().push(id);
        for (_, record) in self.entries.lock().unwrap().iter_mut() {
            if record.id == id {
                record.is_active = false;
            }
        }
        Ok(())
    }
}

// =============================================================================
// Mock Notification Store
// =============================================================================

#[derive(Default)]
pub struct MockNotificationStore {
    rows: Mutex<Vec<Notification>>,
    inserted: Mutex<Vec<NewNotification>>,
    fail_writes: bool,
}

impl MockNotificationStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn failing_writes(mut self) -> Self {
        self.fail_writes = true;
        self
    }

    pub fn inserted(&self) -> Vec<NewNotification> {
        self.inserted.lock().unwrap().clone()
    }
}

#[async_trait]
impl BaseNotificationStore for MockNotificationStore {
    async fn insert(&self, notification: &NewNotification) -> Result<()> {
        if self.fail_writes {
            return Err(anyhow!("notifications: insert rejected"));
        }

        let user_id = notification.user_id.as_uuid().ok_or_else(|| {
            anyhow!(
                "invalid input syntax for type uuid: \"{}\"",
                notification.user_id
            )
        })?;

        self.inserted.lock().unwrap().push(notification.clone());
        self.rows.lock().unwrap().push(Notification {
            id: NotificationId::new(),
            user_id,
            kind: notification.kind.clone(),
            title: notification.title.clone(),
            body: notification.body.clone(),
            link_url: notification.link_url.clone(),
            image_url: notification.image_url.clone(),
            metadata: notification.metadata.clone(),
            is_read: false,
            created_at: Utc::now(),
        });
        Ok(())
    }

    async fn list_for_user(&self, user_id: &UserId, limit: i64) -> Result<Vec<Notification>> {
        let Some(user_id) = user_id.as_uuid() else {
            return Ok(Vec::new());
        };

        let mut rows: Vec<Notification> = self
            .rows
            .lock()
            .unwrap()
            .iter()
            .filter(|n| n.user_id == user_id)
            .cloned()
            .collect();
        // Newest first; rows are appended in insert order
        rows.reverse();
        rows.truncate(limit.max(0) as usize);
        Ok(rows)
    }
}

// =============================================================================
// Mock Health Probe
// =============================================================================

#[derive(Default)]
pub struct MockHealthProbe {
    down: bool,
}

impl MockHealthProbe {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn down() -> Self {
        Self { down: true }
    }
}

#[async_trait]
impl BaseHealthProbe for MockHealthProbe {
    async fn ping(&self) -> Result<()> {
        if self.down {
            return Err(anyhow!("database unreachable"));
        }
        Ok(())
    }
}

// =============================================================================
// TestDependencies
// =============================================================================

/// Bundle of mocks; keep it around to inspect recorded calls after a test runs
pub struct TestDependencies {
    pub profiles: Arc<MockProfileStore>,
    pub moderation: Arc<MockModerationStore>,
    pub notifications: Arc<MockNotificationStore>,
    pub health: Arc<MockHealthProbe>,
}

impl TestDependencies {
    pub fn new() -> Self {
        Self {
            profiles: Arc::new(MockProfileStore::new()),
            moderation: Arc::new(MockModerationStore::new()),
            notifications: Arc::new(MockNotificationStore::new()),
            health: Arc::new(MockHealthProbe::new()),
        }
    }

    pub fn with_profiles(mut self, profiles: MockProfileStore) -> Self {
        self.profiles = Arc::new(profiles);
        self
    }

    pub fn with_moderation(mut self, moderation: MockModerationStore) -> Self {
        self.moderation = Arc::new(moderation);
        self
    }

    pub fn with_notifications(mut self, notifications: MockNotificationStore) -> Self {
        self.notifications = Arc::new(notifications);
        self
    }

    pub fn with_health(mut self, health: MockHealthProbe) -> Self {
        self.health = Arc::new(health);
        self
    }

    pub fn server_deps(&self) -> ServerDeps {
        ServerDeps::new(
            self.profiles.clone(),
            self.moderation.clone(),
            self.notifications.clone(),
            self.health.clone(),
        )
    }
}

impl Default for TestDependencies {
    fn default() -> Self {
        Self::new()
    }
}
