use productfinder::config::AppConfig;

/// Bundled config for mobile builds (iOS/Android)
const BUNDLED_CONFIG: &str = include_str!("../assets/config.env");

#[cfg(not(target_arch = "wasm32"))]
fn load_dotenv() {
    // First try to load from .env file (desktop dev)
    if dotenvy::dotenv().is_ok() {
        return;
    }

    // Fall back to bundled config (mobile builds)
    load_bundled_config();
}

#[cfg(target_arch = "wasm32")]
fn load_dotenv() {
    load_bundled_config();
}

fn load_bundled_config() {
    // from_read never overrides variables that are already set
    if let Err(err) = dotenvy::from_read(BUNDLED_CONFIG.as_bytes()) {
        eprintln!("Ignoring bundled config: {err}");
    }
}

fn main() {
    load_dotenv();
    let config = AppConfig::from_env();
    tracing_subscriber::fmt()
        .with_max_level(config.log_level)
        .init();
    tracing::info!(backend = %config.backend_url, "starting product finder");
    dioxus::launch(productfinder::ui::App);
}
