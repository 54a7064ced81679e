use crate::clients::{DietaryClient, HealthConnectClient, ProfileClient, SavedItemsClient};
use crate::config::AppConfig;
use crate::hooks::{DietaryHook, HealthConnectHook, ProfileHook, SavedItemsHook};
use crate::storage::{FileStore, KeyValueStore, MemoryStore, PersistActor, PersistHandle};
use crate::stores::{AuthStore, LanguageStore, ThemeStore};
use resource_hooks::{MountScope, StalePolicy};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// The runtime orchestrator for the app core.
///
/// # Example
///
/// ```ignore
/// let system = AppSystem::new(AppConfig::default()).await;
///
/// let scope = MountScope::new("profile-screen");
/// let hook = system.profile_hook(&scope);
/// hook.settled().await;
///
/// drop(hook);
/// drop(scope);
/// system.shutdown().await?;
/// ```
pub struct AppSystem {
    pub profile_client: ProfileClient,
    pub dietary_client: DietaryClient,
    pub saved_items_client: SavedItemsClient,
    pub health_client: HealthConnectClient,

    pub theme: ThemeStore,
    pub language: LanguageStore,
    pub auth: AuthStore,

    config: AppConfig,
    persist: PersistHandle,

    /// Task handles for all running actors (used for graceful shutdown)
    handles: Vec<JoinHandle<()>>,
}

impl AppSystem {
    /// Starts the system with the store selected by `config.storage.path`.
    pub async fn new(config: AppConfig) -> Self {
        let store: Arc<dyn KeyValueStore> = match &config.storage.path {
            Some(path) => Arc::new(FileStore::new(path)),
            None => Arc::new(MemoryStore::new()),
        };
        Self::with_store(config, store).await
    }

    /// Starts every actor, then hydrates the stores from `store`.
    pub async fn with_store(config: AppConfig, store: Arc<dyn KeyValueStore>) -> Self {
        let services = &config.services;
        let buffer = services.buffer_size;

        // 1. Create actors
        let (profile_actor, profile_client) =
            crate::profile_actor::new(buffer, services.profile_latency());
        let (dietary_actor, dietary_client) =
            crate::dietary_actor::new(buffer, services.dietary_latency());
        let (saved_actors, saved_items_client) =
            crate::saved_actor::new(buffer, services.saved_latency());
        let (health_actor, health_client) =
            crate::health_actor::new(buffer, services.health_latency());
        let (persist_actor, persist) = PersistActor::new(store.clone());

        // 2. Start them
        let handles = vec![
            tokio::spawn(profile_actor.run()),
            tokio::spawn(dietary_actor.run()),
            tokio::spawn(saved_actors.restaurants.run()),
            tokio::spawn(saved_actors.menus.run()),
            tokio::spawn(health_actor.run()),
            tokio::spawn(persist_actor.run()),
        ];

        // 3. Hydrate stores
        let theme = ThemeStore::new(store.clone(), persist.clone());
        let language = LanguageStore::new(store.clone(), persist.clone());
        let auth = AuthStore::new(store, persist.clone());
        tokio::join!(theme.hydrate(), language.hydrate(), auth.hydrate());

        info!(
            stale_policy = ?config.hooks.stale_policy,
            persistent = config.storage.path.is_some(),
            "System started"
        );

        Self {
            profile_client,
            dietary_client,
            saved_items_client,
            health_client,
            theme,
            language,
            auth,
            config,
            persist,
            handles,
        }
    }

    pub fn config(&self) -> &AppConfig {
        &self.config
    }

    pub fn stale_policy(&self) -> StalePolicy {
        self.config.hooks.stale_policy
    }

    pub fn profile_hook(&self, scope: &MountScope) -> ProfileHook {
        ProfileHook::mount(self.profile_client.clone(), scope, self.stale_policy())
    }

    pub fn dietary_hook(&self, scope: &MountScope) -> DietaryHook {
        DietaryHook::mount(self.dietary_client.clone(), scope, self.stale_policy())
    }

    pub fn saved_items_hook(&self, scope: &MountScope) -> SavedItemsHook {
        SavedItemsHook::mount(self.saved_items_client.clone(), scope, self.stale_policy())
    }

    pub fn health_connect_hook(&self, scope: &MountScope) -> HealthConnectHook {
        HealthConnectHook::mount(self.health_client.clone(), scope, self.stale_policy())
    }

    /// Waits until every store write issued so far has been applied.
    pub async fn flush(&self) {
        self.persist.flush().await
    }

    /// Gracefully shuts down the entire system.
    ///
    /// # Returns
    ///
    /// - `Ok(())` if all actors shut down cleanly
    /// - `Err(String)` if any actor task failed or panicked
    pub async fn shutdown(self) -> Result<(), String> {
        info!("Shutting down system...");
        self.persist.flush().await;

        drop(self.profile_client);
        drop(self.dietary_client);
        drop(self.saved_items_client);
        drop(self.health_client);
        drop(self.theme);
        drop(self.language);
        drop(self.auth);
        drop(self.persist);

        for handle in self.handles {
            if let Err(e) = handle.await {
                error!("Actor task failed: {:?}", e);
                return Err(format!("Actor task failed: {:?}", e));
            }
        }

        info!("System shutdown complete.");
        Ok(())
    }
}
