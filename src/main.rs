use tracing::{error, info};
use user_service::http::{self, AppState};
use user_service::lifecycle::{setup_tracing, ServiceConfig, UserSystem};

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = ServiceConfig::from_env().map_err(|e| e.to_string())?;
    info!(?config, "Starting user service");

    let system = UserSystem::start(&config).await.map_err(|e| {
        error!(error = %e, "Startup failed");
        e.to_string()
    })?;

    let state = AppState::new(system.user_client.clone(), system.order_client.clone());
    let server = http::serve(config.bind_addr, state).await?;

    tokio::signal::ctrl_c()
        .await
        .map_err(|e| format!("failed to listen for shutdown signal: {e}"))?;
    info!("Shutdown signal received");

    server.close().await?;
    system.shutdown().await
}
