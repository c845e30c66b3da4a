//! Test harness for integration testing.
//!
//! Each test gets a fresh set of in-memory stores behind the real router, so
//! requests go through the same middleware stack as production.

use axum::Router;
use server_core::common::UserId;
use server_core::domains::auth::JwtService;
use server_core::kernel::TestDependencies;
use server_core::server::build_app;
use test_context::AsyncTestContext;

use super::HttpClient;

pub const TEST_JWT_SECRET: &str = "test_jwt_secret";
pub const TEST_AUDIENCE: &str = "authenticated";

/// Test harness that owns the mock dependencies.
///
/// # Example using test-context
///
/// ```ignore
/// use test_context::test_context;
///
/// #[test_context(TestHarness)]
/// #[tokio::test]
/// async fn my_test(ctx: &mut TestHarness) {
///     ctx.deps = TestDependencies::new().with_profiles(...);
///     let response = ctx.client().post_json("/functions/v1/verify-otp", body).await;
/// }
/// ```
pub struct TestHarness {
    /// Stores wired into the router; replace before sending requests.
    pub deps: TestDependencies,
    pub jwt_service: JwtService,
}

impl AsyncTestContext for TestHarness {
    async fn setup() -> Self {
        // Run tests with: RUST_LOG=debug cargo test -- --nocapture
        let _ = tracing_subscriber::fmt()
            .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
            .with_test_writer()
            .try_init();

        Self {
            deps: TestDependencies::new(),
            jwt_service: JwtService::new(TEST_JWT_SECRET, TEST_AUDIENCE.to_string()),
        }
    }
}

impl TestHarness {
    /// Router over the current dependencies
    pub fn router(&self) -> Router {
        build_app(self.deps.server_deps(), self.jwt_service.clone())
    }

    pub fn client(&self) -> HttpClient {
        HttpClient::new(self.router())
    }

    /// Access token the way the platform's auth service would sign it
    pub fn token_for(&self, user_id: &UserId) -> String {
        self.jwt_service
            .create_token(user_id)
            .expect("Failed to sign test token")
    }
}
