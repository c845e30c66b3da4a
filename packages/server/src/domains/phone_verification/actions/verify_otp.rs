//! Verify OTP action

use chrono::{DateTime, Utc};
use tracing::{error, info};

use crate::common::UserId;
use crate::kernel::ServerDeps;

/// Result of checking a submitted code against the stored one
///
/// Expired and mismatched codes are business-rule failures, not errors: they
/// leave the profile untouched and are reported back to the caller.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VerifyOtpOutcome {
    Verified,
    Expired,
    CodeMismatch,
}

impl VerifyOtpOutcome {
    pub fn message(&self) -> &'static str {
        match self {
            VerifyOtpOutcome::Verified => "Phone number verified successfully",
            VerifyOtpOutcome::Expired => "OTP has expired. Please request a new code.",
            VerifyOtpOutcome::CodeMismatch => "Invalid verification code",
        }
    }
}

#[derive(Debug, thiserror::Error)]
pub enum VerifyOtpError {
    #[error("User ID and OTP code are required")]
    MissingFields,

    #[error("User profile not found")]
    ProfileNotFound,

    #[error("Failed to verify phone number")]
    UpdateFailed(#[source] anyhow::Error),
}

/// Check `otp_code` for `user_id` and mark the phone verified on a match.
///
/// Expiry is checked before the code, so an expired code fails the same way
/// whether or not it is correct. On a match exactly one write clears the code
/// and expiry and sets `phone_verified`.
pub async fn verify_otp(
    user_id: &UserId,
    otp_code: &str,
    now: DateTime<Utc>,
    deps: &ServerDeps,
) -> Result<VerifyOtpOutcome, VerifyOtpError> {
    let profile = match deps.profiles.find_verification(user_id).await {
        Ok(Some(profile)) => profile,
        Ok(None) => return Err(VerifyOtpError::ProfileNotFound),
        Err(e) => {
            error!(user_id = %user_id, error = %e, "Failed to load profile for OTP verification");
            return Err(VerifyOtpError::ProfileNotFound);
        }
    };

    if profile.is_expired(now) {
        info!(user_id = %user_id, "OTP expired");
        return Ok(VerifyOtpOutcome::Expired);
    }

    if !profile.code_matches(otp_code) {
        info!(user_id = %user_id, "OTP mismatch");
        return Ok(VerifyOtpOutcome::CodeMismatch);
    }

    deps.profiles
        .mark_phone_verified(user_id)
        .await
        .map_err(|e| {
            error!(user_id = %user_id, error = %e, "Database update error");
            VerifyOtpError::UpdateFailed(e)
        })?;

    info!(user_id = %user_id, "Phone verified successfully");
    Ok(VerifyOtpOutcome::Verified)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::kernel::test_dependencies::{MockProfileStore, TestDependencies};
    use chrono::Duration;

    fn deps_with(profiles: MockProfileStore) -> (TestDependencies, ServerDeps) {
        let test_deps = TestDependencies::new().with_profiles(profiles);
        let deps = test_deps.server_deps();
        (test_deps, deps)
    }

    #[tokio::test]
    async fn test_matching_code_marks_verified_with_one_write() {
        let now = Utc::now();
        let user = UserId::new("u1");
        let (test_deps, deps) = deps_with(
            MockProfileStore::new().with_pending_code(&user, "482913", now + Duration::minutes(5)),
        );

        let outcome = verify_otp(&user, "482913", now, &deps).await.unwrap();

        assert_eq!(outcome, VerifyOtpOutcome::Verified);
        assert_eq!(test_deps.profiles.verified_writes(), vec![user.clone()]);
        let stored = test_deps.profiles.get(&user).unwrap();
        assert_eq!(stored.phone_verified, Some(true));
        assert!(stored.phone_verification_code.is_none());
        assert!(stored.phone_verification_expires_at.is_none());
    }

    #[tokio::test]
    async fn test_expired_code_fails_even_when_correct() {
        let now = Utc::now();
        let user = UserId::new("u1");
        let expires_at = now - Duration::seconds(1);
        let (test_deps, deps) =
            deps_with(MockProfileStore::new().with_pending_code(&user, "482913", expires_at));

        for submitted in ["482913", "000000"] {
            let outcome = verify_otp(&user, submitted, now, &deps).await.unwrap();
            assert_eq!(outcome, VerifyOtpOutcome::Expired);
        }

        assert!(test_deps.profiles.verified_writes().is_empty());
        let stored = test_deps.profiles.get(&user).unwrap();
        assert_eq!(stored.phone_verification_code.as_deref(), Some("482913"));
        assert_eq!(stored.phone_verification_expires_at, Some(expires_at));
    }

    #[tokio::test]
    async fn test_mismatch_leaves_code_and_expiry_unchanged() {
        let now = Utc::now();
        let user = UserId::new("u1");
        let expires_at = now + Duration::minutes(5);
        let (test_deps, deps) =
            deps_with(MockProfileStore::new().with_pending_code(&user, "482913", expires_at));

        for submitted in ["000000", "48291", "4829130", "482914"] {
            let outcome = verify_otp(&user, submitted, now, &deps).await.unwrap();
            assert_eq!(outcome, VerifyOtpOutcome::CodeMismatch);
        }

        assert!(test_deps.profiles.verified_writes().is_empty());
        let stored = test_deps.profiles.get(&user).unwrap();
        assert_eq!(stored.phone_verification_code.as_deref(), Some("482913"));
        assert_eq!(stored.phone_verification_expires_at, Some(expires_at));
        assert_eq!(stored.phone_verified, Some(false));
    }

    #[tokio::test]
    async fn test_missing_profile_is_not_found() {
        let (_test_deps, deps) = deps_with(MockProfileStore::new());

        let result = verify_otp(&UserId::new("ghost"), "123456", Utc::now(), &deps).await;

        assert!(matches!(result, Err(VerifyOtpError::ProfileNotFound)));
    }

    #[tokio::test]
    async fn test_read_failure_is_not_found() {
        let user = UserId::new("u1");
        let (_test_deps, deps) = deps_with(
            MockProfileStore::new()
                .with_pending_code(&user, "482913", Utc::now() + Duration::minutes(5))
                .failing_reads(),
        );

        let result = verify_otp(&user, "482913", Utc::now(), &deps).await;

        assert!(matches!(result, Err(VerifyOtpError::ProfileNotFound)));
    }

    #[tokio::test]
    async fn test_update_failure_is_surfaced() {
        let now = Utc::now();
        let user = UserId::new("u1");
        let (_test_deps, deps) = deps_with(
            MockProfileStore::new()
                .with_pending_code(&user, "482913", now + Duration::minutes(5))
                .failing_writes(),
        );

        let result = verify_otp(&user, "482913", now, &deps).await;

        match result {
            Err(e @ VerifyOtpError::UpdateFailed(_)) => {
                assert_eq!(e.to_string(), "Failed to verify phone number")
            }
            other => panic!("expected UpdateFailed, got {:?}", other),
        }
    }
}
