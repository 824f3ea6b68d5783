//! Application - App Initialization and Window Management
//!
//! Main entry point for the GPUI application.

use gpui::{
    App, AppContext, Application, Bounds, SharedString, TitlebarOptions, WindowBounds,
    WindowOptions, actions, px,
};

use crate::app::entities::AppEntities;
use crate::app::workspace::Workspace;
use crate::domain::config::AppConfig;
use crate::services::service_hub::ServiceHub;
use crate::state::config_state::ConfigState;
use crate::utils::config_store::{CONFIG_FILE, load_config};

actions!(rest_grid, [Quit]);

/// Read the configuration file, falling back to defaults on failure
fn load_config_state() -> ConfigState {
    match load_config::<AppConfig>(CONFIG_FILE) {
        Ok(config) => {
            tracing::info!(
                items_url = %config.api.items_url,
                users_url = %config.api.users_url,
                "Configuration loaded"
            );
            ConfigState::loaded(config)
        }
        Err(e) => {
            tracing::warn!(error = %e, "Could not load configuration, using defaults");
            ConfigState::with_error(format!("{e:#}"))
        }
    }
}

/// Run the REST Grid application
pub fn run_app() {
    Application::new().run(move |cx: &mut App| {
        // Set up action handlers
        cx.on_action(|_: &Quit, cx: &mut App| cx.quit());

        // Quit the app when all windows are closed (macOS behavior)
        cx.on_window_closed(|cx| {
            if cx.windows().is_empty() {
                cx.quit();
            }
        })
        .detach();

        let config_state = load_config_state();

        // Initialize service hub
        match ServiceHub::new(&config_state.config.api) {
            Ok(hub) => cx.set_global(hub),
            Err(e) => tracing::error!(error = %e, "Failed to initialize services"),
        }

        // Initialize global entities
        let entities = AppEntities::init(config_state, cx);
        cx.set_global(entities.clone());

        // Create main window
        let bounds = Bounds::centered(None, gpui::size(px(1280.0), px(800.0)), cx);
        let window_options = WindowOptions {
            window_bounds: Some(WindowBounds::Windowed(bounds)),
            titlebar: Some(TitlebarOptions {
                title: Some(SharedString::from("REST Grid")),
                appears_transparent: true,
                traffic_light_position: Some(gpui::point(px(9.0), px(9.0))),
            }),
            ..Default::default()
        };

        if let Err(e) = cx.open_window(window_options, |_window, cx| {
            cx.new(|cx| Workspace::new(entities.clone(), cx))
        }) {
            tracing::error!(error = %e, "Failed to open main window");
            cx.quit();
            return;
        }

        cx.activate(true);
    });
}
