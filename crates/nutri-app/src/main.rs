//! # Nutri App Demo
//!
//! Boots the app core against its mock backends and walks through each screen:
//! profile, dietary preferences, saved items and Health Connect.
//!
//! Set `NUTRI_CONFIG` to a TOML file to change latencies, the stale-response policy or
//! the settings file; see [`nutri_app::config`].

use nutri_app::config::AppConfig;
use nutri_app::hooks::FeatureHook;
use nutri_app::lifecycle::AppSystem;
use nutri_app::model::{DietaryPatch, Goal, ProfilePatch, RestaurantId, Session};
use resource_hooks::tracing::setup_tracing;
use resource_hooks::MountScope;
use tracing::{error, info, Instrument};

const CONFIG_ENV: &str = "NUTRI_CONFIG";

#[tokio::main]
async fn main() -> Result<(), String> {
    setup_tracing();

    let config = match std::env::var(CONFIG_ENV) {
        Ok(path) => AppConfig::load_from(path).map_err(|e| e.to_string())?,
        Err(_) => AppConfig::default(),
    };

    info!("Starting nutri app core");
    let system = AppSystem::new(config).await;

    system.auth.sign_in(Session {
        user_id: "user_1".to_string(),
        access_token: "demo-access".to_string(),
        refresh_token: "demo-refresh".to_string(),
    });
    let mode = system.theme.toggle();
    info!(?mode, language = ?system.language.language(), "Settings ready");

    // Profile screen
    async {
        let scope = MountScope::new("profile-screen");
        let profile = system.profile_hook(&scope);
        profile.settled().await;

        let patch = ProfilePatch {
            goal: Some(Goal::Lose),
            ..Default::default()
        };
        match profile.update_profile(patch).await {
            Ok(updated) => info!(goal = ?updated.goal, "Profile saved"),
            Err(e) => error!(error = %e, "Profile update failed"),
        }
        if let Some(Ok(summary)) = profile.summary() {
            info!(
                bmi = summary.bmi,
                calorie_target = summary.calorie_target,
                "Nutrition summary"
            );
        }
    }
    .instrument(tracing::info_span!("profile_screen"))
    .await;

    // Dietary preferences screen
    async {
        let scope = MountScope::new("dietary-screen");
        let dietary = system.dietary_hook(&scope);
        dietary.settled().await;

        dietary.add_allergen("shellfish").await;
        dietary
            .update_preferences(DietaryPatch {
                dislikes: Some(vec!["olives".to_string()]),
                ..Default::default()
            })
            .await;
        info!(dietary = ?dietary.dietary(), "Dietary preferences");
    }
    .instrument(tracing::info_span!("dietary_screen"))
    .await;

    // Saved items screen
    async {
        let scope = MountScope::new("saved-screen");
        let saved = system.saved_items_hook(&scope);
        saved.settled().await;

        saved.remove_restaurant(RestaurantId::from("r1")).await;
        info!(
            restaurants = saved.restaurants().len(),
            menus = saved.menus().len(),
            "Saved items"
        );
    }
    .instrument(tracing::info_span!("saved_screen"))
    .await;

    // Health Connect screen
    async {
        let scope = MountScope::new("health-screen");
        let health = system.health_connect_hook(&scope);
        health.settled().await;

        health.connect().await;
        health.sync().await;
        match health.error() {
            Some(message) => error!(%message, "Health Connect"),
            None => info!(status = ?health.status(), "Health Connect linked"),
        }
    }
    .instrument(tracing::info_span!("health_screen"))
    .await;

    system.shutdown().await?;

    info!("Application completed successfully");
    Ok(())
}
