//! # HTTP Transport
//!
//! A thin axum adapter over [`UserClient`] and [`OrderClient`]. Handlers parse the path and
//! body, call one client method, and render the result; every failure goes through
//! [`ApiError`].
//!
//! | Route | Success |
//! |-------|---------|
//! | `GET /` | 200 landing page |
//! | `POST /users` | 201 `{message, user_id}` |
//! | `GET /users` | 200 array of users |
//! | `GET /users/{id}` | 200 user |
//! | `PUT /users/{id}` | 200 `{message}` |
//! | `DELETE /users/{id}` | 200 `{message}` |
//! | `GET /users/{id}/orders` | 200 upstream body |

pub mod error;
mod orders;
mod users;


pub use error::ApiError;

use crate::clients::{OrderClient, UserClient};
use axum::response::Html;
use axum::routing::get;
use axum::Router;
use std::net::SocketAddr;
use tokio::net::TcpListener;
use tokio::sync::oneshot;
use tower_http::trace::TraceLayer;
use tracing::info;

const INDEX_HTML: &str = include_str!("index.html");

#[derive(Clone)]
pub struct AppState {
    pub user_client: UserClient,
    pub order_client: OrderClient,
}

impl AppState {
    pub fn new(user_client: UserClient, order_client: OrderClient) -> Self {
        Self {
            user_client,
            order_client,
        }
    }
}

pub fn build_router(state: AppState) -> Router {
    Router::new()
        .route("/", get(index))
        .route("/users", get(users::list_users).post(users::create_user))
        .route(
            "/users/:user_id",
            get(users::get_user)
                .put(users::update_user)
                .delete(users::delete_user),
        )
        .route("/users/:user_id/orders", get(orders::get_user_orders))
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

async fn index() -> Html<&'static str> {
    Html(INDEX_HTML)
}

/// A running listener. Dropping it leaves the server running; call [`close`](Self::close).
pub struct HttpServer {
    pub address: SocketAddr,
    shutdown: Option<oneshot::Sender<()>>,
    join: tokio::task::JoinHandle<()>,
}

impl HttpServer {
    /// Stops accepting connections, lets in-flight requests finish and waits for the task.
    pub async fn close(mut self) -> Result<(), String> {
        if let Some(shutdown) = self.shutdown.take() {
            let _ = shutdown.send(());
        }
        self.join
            .await
            .map_err(|error| format!("server join failed: {error}"))
    }
}

/// Binds `bind_addr` and serves [`build_router`] in a background task.
pub async fn serve(bind_addr: SocketAddr, state: AppState) -> Result<HttpServer, String> {
    let listener = TcpListener::bind(bind_addr)
        .await
        .map_err(|error| format!("failed to bind {bind_addr}: {error}"))?;
    let address = listener.local_addr().map_err(|error| error.to_string())?;
    let app = build_router(state);
    let (shutdown_tx, shutdown_rx) = oneshot::channel::<()>();

    let join = tokio::spawn(async move {
        let _ = axum::serve(listener, app)
            .with_graceful_shutdown(async {
                let _ = shutdown_rx.await;
            })
            .await;
    });

    info!(%address, "Listening");
    Ok(HttpServer {
        address,
        shutdown: Some(shutdown_tx),
        join,
    })
}
