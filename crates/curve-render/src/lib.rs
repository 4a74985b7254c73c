pub mod app;
pub mod config;
pub mod plot_view;
pub mod ui;

use app::App;
pub use config::{AppConfig, ConfigError, ConfigManager};

/// Launch the application with eframe. Blocks until the window closes.
pub fn run(config: AppConfig) -> eframe::Result<()> {
    let native_options = eframe::NativeOptions {
        viewport: egui::ViewportBuilder::default()
            .with_title(config.window_title.clone())
            .with_inner_size(config.window_size),
        ..Default::default()
    };
    let app_name = config.window_title.clone();
    eframe::run_native(
        &app_name,
        native_options,
        Box::new(move |cc| Ok(Box::new(App::new(cc, &config)))),
    )
}
