//! Integration tests for `POST /functions/v1/create-order-notification`.

mod common;

use common::TestHarness;
use serde_json::json;
use server_core::kernel::test_dependencies::MockNotificationStore;
use server_core::kernel::TestDependencies;
use test_context::test_context;
use uuid::Uuid;

const CREATE_NOTIFICATION: &str = "/functions/v1/create-order-notification";

#[test_context(TestHarness)]
#[tokio::test]
async fn creates_notification_with_defaults(ctx: &mut TestHarness) {
    let user = Uuid::new_v4();

    let response = ctx
        .client()
        .post_json(
            CREATE_NOTIFICATION,
            json!({
                "user_id": user.to_string(),
                "type": "order_placed",
                "title": "Order received",
                "body": "Your order #1042 was placed"
            }),
        )
        .await;

    assert_eq!(response.status, 200);
    assert_eq!(response.body, json!({ "success": true }));

    let inserted = ctx.deps.notifications.inserted();
    assert_eq!(inserted.len(), 1);
    assert_eq!(inserted[0].kind, "order_placed");
    assert_eq!(inserted[0].title, "Order received");
    assert!(inserted[0].link_url.is_none());
    assert!(inserted[0].image_url.is_none());
    assert_eq!(inserted[0].metadata, json!({}));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn passes_optional_fields_through(ctx: &mut TestHarness) {
    let user = Uuid::new_v4();

    let response = ctx
        .client()
        .post_json(
            CREATE_NOTIFICATION,
            json!({
                "user_id": user.to_string(),
                "type": "order_shipped",
                "title": "On its way",
                "body": "Order #1042 has shipped",
                "link_url": "/orders/1042",
                "image_url": "https://cdn.market360.app/p/1042.jpg",
                "metadata": { "order_id": 1042 }
            }),
        )
        .await;

    assert_eq!(response.status, 200);

    let inserted = ctx.deps.notifications.inserted();
    assert_eq!(inserted[0].link_url.as_deref(), Some("/orders/1042"));
    assert_eq!(
        inserted[0].image_url.as_deref(),
        Some("https://cdn.market360.app/p/1042.jpg")
    );
    assert_eq!(inserted[0].metadata, json!({ "order_id": 1042 }));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn missing_required_fields_are_rejected(ctx: &mut TestHarness) {
    let response = ctx
        .client()
        .post_json(
            CREATE_NOTIFICATION,
            json!({ "user_id": Uuid::new_v4().to_string(), "type": "order_placed" }),
        )
        .await;

    assert_eq!(response.status, 400);
    assert_eq!(
        response.body,
        json!({ "error": "Missing required fields: user_id, type, title, body" })
    );
    assert!(ctx.deps.notifications.inserted().is_empty());
}

#[test_context(TestHarness)]
#[tokio::test]
async fn store_failure_surfaces_its_message(ctx: &mut TestHarness) {
    ctx.deps = TestDependencies::new().with_notifications(MockNotificationStore::new().failing_writes());

    let response = ctx
        .client()
        .post_json(
            CREATE_NOTIFICATION,
            json!({
                "user_id": Uuid::new_v4().to_string(),
                "type": "order_placed",
                "title": "Order received",
                "body": "Your order was placed"
            }),
        )
        .await;

    assert_eq!(response.status, 500);
    assert_eq!(response.body, json!({ "error": "notifications: insert rejected" }));
    assert_eq!(response.header("access-control-allow-origin"), Some("*"));
}

#[test_context(TestHarness)]
#[tokio::test]
async fn non_uuid_user_is_a_store_error(ctx: &mut TestHarness) {
    let response = ctx
        .client()
        .post_json(
            CREATE_NOTIFICATION,
            json!({
                "user_id": "u1",
                "type": "order_placed",
                "title": "Order received",
                "body": "Your order was placed"
            }),
        )
        .await;

    assert_eq!(response.status, 500);
    assert!(response.body["error"].as_str().unwrap().contains("uuid"));
}
