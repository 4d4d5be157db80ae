use dioxus::desktop::{Config, WindowBuilder};
use tracing_subscriber::EnvFilter;
use webtech_docs::app::{App, AppState};
use webtech_docs::types::config::AppConfig;

/// Tailwind with class-based dark mode, so the root `dark` class drives every `dark:` variant
const HEAD: &str = r#"<script src="https://cdn.tailwindcss.com"></script>
<script>tailwind.config = { darkMode: 'class' }</script>"#;

fn main() {
    let loaded = AppConfig::try_load();
    let config = loaded.as_ref().cloned().unwrap_or_default();

    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(&config.log_filter));
    tracing_subscriber::fmt().with_env_filter(filter).init();

    if let Err(e) = &loaded {
        tracing::warn!("Failed to load config, using defaults: {}", e);
    }
    tracing::info!("Starting {}", config.window_title);

    let app_state = AppState::from_config(&config);

    dioxus::LaunchBuilder::desktop()
        .with_cfg(
            Config::new()
                .with_window(WindowBuilder::new().with_title(config.window_title.clone()))
                .with_custom_head(HEAD.to_string()),
        )
        .with_context(app_state)
        .launch(App);
}
