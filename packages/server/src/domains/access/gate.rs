use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::common::UserId;
use crate::domains::moderation::has_active_moderation;
use crate::domains::phone_verification::is_phone_verified;
use crate::kernel::ServerDeps;

pub const LOGIN_PATH: &str = "/auth";
pub const MODERATION_PATH: &str = "/moderation";
pub const VERIFY_PHONE_PATH: &str = "/verify-phone";

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum RedirectReason {
    Unauthenticated,
    Moderated,
    PhoneUnverified,
}

impl RedirectReason {
    pub fn location(&self) -> &'static str {
        match self {
            RedirectReason::Unauthenticated => LOGIN_PATH,
            RedirectReason::Moderated => MODERATION_PATH,
            RedirectReason::PhoneUnverified => VERIFY_PHONE_PATH,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum AccessDecision {
    Render,
    Redirect(RedirectReason),
}

/// Decide whether `user` may see the page at `path`.
///
/// Precedence: no identity → login; current moderation → moderation notice;
/// unverified phone → verification page (unless already there). The phone
/// flag is only read once moderation has cleared.
pub async fn evaluate_access(
    user: Option<&UserId>,
    path: &str,
    now: DateTime<Utc>,
    deps: &ServerDeps,
) -> AccessDecision {
    let Some(user_id) = user else {
        return AccessDecision::Redirect(RedirectReason::Unauthenticated);
    };

    if has_active_moderation(user_id, now, deps).await {
        debug!(user_id = %user_id, "Access blocked by moderation");
        return AccessDecision::Redirect(RedirectReason::Moderated);
    }

    if path != VERIFY_PHONE_PATH && !is_phone_verified(user_id, deps).await {
        debug!(user_id = %user_id, path, "Phone not verified");
        return AccessDecision::Redirect(RedirectReason::PhoneUnverified);
    }

    AccessDecision::Render
}
