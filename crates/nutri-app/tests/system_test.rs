//! App-wide stores and the system lifecycle.

use nutri_app::config::{AppConfig, ServiceConfig, StorageConfig};
use nutri_app::hooks::FeatureHook;
use nutri_app::lifecycle::AppSystem;
use nutri_app::model::{Language, Session, ThemeMode};
use nutri_app::storage::{KeyValueStore, MemoryStore, LANGUAGE_KEY, SESSION_KEY, THEME_KEY};
use resource_hooks::MountScope;
use std::sync::Arc;

fn instant_config() -> AppConfig {
    AppConfig {
        services: ServiceConfig::immediate(),
        ..Default::default()
    }
}

fn session() -> Session {
    Session {
        user_id: "user_1".to_string(),
        access_token: "access".to_string(),
        refresh_token: "refresh".to_string(),
    }
}

#[tokio::test]
async fn test_stores_hydrate_from_persisted_values() {
    let store = Arc::new(MemoryStore::with_entries([
        (THEME_KEY, "\"dark\""),
        (LANGUAGE_KEY, "\"es\""),
    ]));
    let system = AppSystem::with_store(instant_config(), store).await;

    assert_eq!(system.theme.mode(), ThemeMode::Dark);
    assert!(system.theme.is_dark());
    assert_eq!(system.language.language(), Language::Es);
    assert!(!system.auth.is_authenticated());

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_unreadable_value_falls_back_to_default() {
    let store = Arc::new(MemoryStore::with_entries([(THEME_KEY, "purple")]));
    let system = AppSystem::with_store(instant_config(), store).await;

    assert_eq!(system.theme.mode(), ThemeMode::Light);
    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_toggle_is_immediate_and_persisted() {
    let store = Arc::new(MemoryStore::new());
    let system = AppSystem::with_store(instant_config(), store.clone()).await;
    let mut changes = system.theme.subscribe();

    assert_eq!(system.theme.toggle(), ThemeMode::Dark);
    assert_eq!(system.theme.mode(), ThemeMode::Dark);
    assert!(changes.has_changed().unwrap());
    assert_eq!(*changes.borrow_and_update(), ThemeMode::Dark);

    assert_eq!(system.theme.toggle(), ThemeMode::Light);
    system.flush().await;
    assert_eq!(
        store.get(THEME_KEY).await.unwrap().as_deref(),
        Some("\"light\"")
    );

    system.theme.set_mode(ThemeMode::System);
    assert_eq!(system.theme.toggle(), ThemeMode::Dark);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_sign_in_and_out_round_trip() {
    let store = Arc::new(MemoryStore::new());
    let system = AppSystem::with_store(instant_config(), store.clone()).await;

    system.auth.sign_in(session());
    assert!(system.auth.is_authenticated());
    system.language.set_language(Language::Fr);
    system.flush().await;

    let raw = store.get(SESSION_KEY).await.unwrap().unwrap();
    let persisted: Session = serde_json::from_str(&raw).unwrap();
    assert_eq!(persisted, session());
    assert_eq!(
        store.get(LANGUAGE_KEY).await.unwrap().as_deref(),
        Some("\"fr\"")
    );

    system.auth.sign_out();
    assert!(!system.auth.is_authenticated());
    system.flush().await;
    assert_eq!(store.get(SESSION_KEY).await.unwrap(), None);

    system.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_file_store_survives_restart() {
    let dir = tempfile::tempdir().unwrap();
    let config = AppConfig {
        storage: StorageConfig {
            path: Some(dir.path().join("settings.json")),
        },
        ..instant_config()
    };

    let system = AppSystem::new(config.clone()).await;
    system.theme.set_mode(ThemeMode::Dark);
    system.auth.sign_in(session());
    system.shutdown().await.unwrap();

    let restarted = AppSystem::new(config).await;
    assert_eq!(restarted.theme.mode(), ThemeMode::Dark);
    assert_eq!(restarted.auth.session(), Some(session()));
    restarted.shutdown().await.unwrap();
}

#[tokio::test]
async fn test_every_screen_mounts_and_shuts_down() {
    let system = AppSystem::new(instant_config()).await;

    {
        let scope = MountScope::new("dashboard");
        let profile = system.profile_hook(&scope);
        let dietary = system.dietary_hook(&scope);
        let saved = system.saved_items_hook(&scope);
        let health = system.health_connect_hook(&scope);

        let (p, d, s, h) = tokio::join!(
            profile.settled(),
            dietary.settled(),
            saved.settled(),
            health.settled()
        );
        assert!(p.data.is_some() && p.error.is_none());
        assert!(d.data.is_some() && d.error.is_none());
        assert_eq!(s.data.unwrap().restaurants.len(), 2);
        assert!(h.data.is_some());
    }

    system.shutdown().await.unwrap();
}
