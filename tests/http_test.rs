use axum::extract::Path;
use axum::routing::get;
use axum::{Json, Router};
use serde_json::{json, Value};
use std::net::SocketAddr;
use std::sync::Arc;
use std::time::Duration;
use user_service::http::{self, AppState};
use user_service::lifecycle::UserSystem;
use user_service::model::User;
use user_service::order_proxy;
use user_service::persistence::InMemoryStore;

async fn spawn_order_service() -> String {
    let app = Router::new().route(
        "/orders/:user_id",
        get(|Path(user_id): Path<u64>| async move {
            Json(json!([{ "order_id": 100 + user_id, "user_id": user_id }]))
        }),
    );
    let listener = tokio::net::TcpListener::bind("127.0.0.1:0").await.unwrap();
    let address = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    format!("http://{address}")
}

async fn start_service(order_base_url: &str) -> (UserSystem, http::HttpServer, String) {
    let order_client = order_proxy::new(order_base_url, Duration::from_secs(2)).unwrap();
    let system = UserSystem::with_store(Arc::new(InMemoryStore::<User>::new()), order_client, 8)
        .await
        .unwrap();
    let state = AppState::new(system.user_client.clone(), system.order_client.clone());
    let bind: SocketAddr = "127.0.0.1:0".parse().unwrap();
    let server = http::serve(bind, state).await.unwrap();
    let base = format!("http://{}", server.address);
    (system, server, base)
}

/// Drives the running server over a real socket, orders included.
#[tokio::test]
async fn test_served_api_end_to_end() {
    let orders_base = spawn_order_service().await;
    let (system, server, base) = start_service(&orders_base).await;
    let client = reqwest::Client::new();

    let created = client
        .post(format!("{base}/users"))
        .json(&json!({"username": "alice", "email": "a@x.com"}))
        .send()
        .await
        .unwrap();
    assert_eq!(created.status(), 201);
    let body: Value = created.json().await.unwrap();
    assert_eq!(body, json!({"message": "User created successfully", "user_id": 1}));

    let fetched: Value = client
        .get(format!("{base}/users/1"))
        .send()
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(fetched, json!({"user_id": 1, "username": "alice", "email": "a@x.com"}));

    let orders = client
        .get(format!("{base}/users/1/orders"))
        .send()
        .await
        .unwrap();
    assert_eq!(orders.status(), 200);
    let orders: Value = orders.json().await.unwrap();
    assert_eq!(orders, json!([{"order_id": 101, "user_id": 1}]));

    let missing = client
        .get(format!("{base}/users/2"))
        .send()
        .await
        .unwrap();
    assert_eq!(missing.status(), 404);
    let body: Value = missing.json().await.unwrap();
    assert_eq!(body, json!({"message": "User not found"}));

    drop(client);
    server.close().await.unwrap();
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_orders_endpoint_when_order_service_is_down() {
    let (system, server, base) = start_service("http://127.0.0.1:1").await;

    let response = reqwest::get(format!("{base}/users/1/orders")).await.unwrap();
    assert_eq!(response.status(), 500);
    let body: Value = response.json().await.unwrap();
    assert_eq!(body, json!({"message": "Error fetching orders"}));

    server.close().await.unwrap();
    system.shutdown().await.unwrap();
}
