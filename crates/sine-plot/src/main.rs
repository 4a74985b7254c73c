use curve_core::constants::{DOMAIN_END, DOMAIN_START, SAMPLE_COUNT};
use curve_render::{AppConfig, ConfigManager};
use tracing_subscriber::{fmt, EnvFilter};

/// `RUST_LOG` overrides the configured filter.
fn init_logging(default_filter: &str) {
    let filter = EnvFilter::try_from_default_env()
        .unwrap_or_else(|_| EnvFilter::new(default_filter));

    fmt().with_env_filter(filter).with_target(false).init();
}

fn main() -> eframe::Result<()> {
    let manager = ConfigManager::new();
    // The filter lives in the config, so a load failure can only be
    // reported once logging is up.
    let loaded = manager.try_load();
    let config = match &loaded {
        Ok(Some(config)) => config.clone(),
        Ok(None) | Err(_) => AppConfig::default(),
    };
    init_logging(&config.log_filter);
    if let Err(err) = &loaded {
        tracing::warn!(%err, "using default configuration");
    }

    tracing::info!(
        config = %manager.config_path().display(),
        samples = SAMPLE_COUNT,
        domain_start = DOMAIN_START,
        domain_end = DOMAIN_END,
        "starting sine plot"
    );

    curve_render::run(config)
}
