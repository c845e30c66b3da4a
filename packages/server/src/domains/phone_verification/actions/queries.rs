use tracing::error;

use crate::common::UserId;
use crate::kernel::ServerDeps;

/// Whether the user's phone is verified, for the access gate.
///
/// A failed read is logged and reported as unverified.
pub async fn is_phone_verified(user_id: &UserId, deps: &ServerDeps) -> bool {
    match deps.profiles.is_phone_verified(user_id).await {
        Ok(verified) => verified,
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Error checking phone verification");
            false
        }
    }
}
