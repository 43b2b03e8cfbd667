use crate::clients::{OrderClient, UserClient};
use crate::framework::{IdAllocator, RecordStore, StoreError};
use crate::lifecycle::config::{ServiceConfig, StoreBackend};
use crate::model::User;
use crate::order_proxy::{self, OrderError};
use crate::persistence::{InMemoryStore, SqliteUserStore};
use std::sync::Arc;
use thiserror::Error;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// Errors that stop the service before it can accept requests.
#[derive(Debug, Error)]
pub enum StartupError {
    #[error("user store unavailable: {0}")]
    Store(#[from] StoreError),

    #[error("order client: {0}")]
    OrderClient(#[from] OrderError),
}

/// Owns the running user actor and the clients that front it.
///
/// `UserSystem` is responsible for:
/// - **Store Selection**: opening the backend named by [`ServiceConfig::store`]
/// - **Id Recovery**: seeding the [`IdAllocator`] from the largest stored `user_id`
/// - **Lifecycle Management**: spawning the actor and stopping it on [`shutdown`](Self::shutdown)
///
/// ```ignore
/// let system = UserSystem::start(&ServiceConfig::from_env()?).await?;
/// let user = system.user_client.create_user(UserCreate::new("alice", "a@x.com")).await?;
/// system.shutdown().await?;
/// ```
pub struct UserSystem {
    pub user_client: UserClient,
    pub order_client: OrderClient,
    allocator: Arc<IdAllocator>,
    handles: Vec<JoinHandle<()>>,
}

impl UserSystem {
    /// Opens the configured store and starts the user actor.
    ///
    /// An unreachable store is fatal: the service never starts with an unseeded allocator.
    pub async fn start(config: &ServiceConfig) -> Result<Self, StartupError> {
        let store: Arc<dyn RecordStore<User>> = match &config.store {
            StoreBackend::Memory => {
                info!("Using in-memory user store");
                Arc::new(InMemoryStore::<User>::new())
            }
            StoreBackend::Sqlite(path) => Arc::new(SqliteUserStore::open(path)?),
        };
        let order_client = order_proxy::new(&config.order_service_url, config.order_timeout)?;

        Self::with_store(store, order_client, config.actor_buffer).await
    }

    /// Starts the user actor over an already opened store.
    pub async fn with_store(
        store: Arc<dyn RecordStore<User>>,
        order_client: OrderClient,
        buffer_size: usize,
    ) -> Result<Self, StartupError> {
        let allocator = Arc::new(IdAllocator::recover(store.as_ref()).await?);
        let (user_actor, user_client) =
            crate::user_actor::new(buffer_size, store, Arc::clone(&allocator));
        let user_handle = tokio::spawn(user_actor.run());

        info!(
            order_service = order_client.base_url(),
            next_user_id = allocator.last_issued() + 1,
            "User system started"
        );

        Ok(Self {
            user_client,
            order_client,
            allocator,
            handles: vec![user_handle],
        })
    }

    /// The last `user_id` handed out (or recovered at startup).
    pub fn last_issued_id(&self) -> u64 {
        self.allocator.last_issued()
    }

    /// Stops the actor and waits for it to drain.
    ///
    /// Clones of `user_client` held elsewhere (e.g. by the HTTP router) keep the actor alive,
    /// so stop the server first.
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down user system...");

        drop(self.user_client);
        drop(self.order_client);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("User system shutdown complete.");
        Ok(())
    }
}
