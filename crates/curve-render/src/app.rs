// eframe application: owns the session and the plot surface.

use curve_core::Session;

use crate::config::AppConfig;
use crate::{plot_view, plot_view::PlotSurface, ui};

pub struct App {
    session: Session,
    surface: PlotSurface,
    show_legend: bool,
}

impl App {
    pub fn new(_cc: &eframe::CreationContext<'_>, config: &AppConfig) -> Self {
        Self::with_config(config)
    }

    fn with_config(config: &AppConfig) -> Self {
        let mut app = Self {
            session: Session::new(),
            surface: PlotSurface::default(),
            show_legend: config.show_legend,
        };
        // Draw the default curve before the first Run.
        app.run();
        app
    }

    fn run(&mut self) {
        let curve = self.session.on_trigger(&mut self.surface);
        self.surface.set_label(curve);
    }
}

impl eframe::App for App {
    fn update(&mut self, ctx: &egui::Context, _frame: &mut eframe::Frame) {
        // Side panel first so the central plot takes the remaining space.
        if ui::draw_controls(ctx, self.session.parameters_mut()) {
            self.run();
        }
        plot_view::draw_curve_plot(ctx, &self.surface, self.show_legend);
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::ParameterName;

    #[test]
    fn test_startup_shows_default_curve() {
        let app = App::with_config(&AppConfig::default());
        assert_eq!(app.surface.points().len(), app.session.series().len());
        assert_eq!(app.surface.label(), "1 * sin(1 * x + 0)");
    }

    #[test]
    fn test_run_updates_surface_and_fields() {
        let mut app = App::with_config(&AppConfig::default());
        *app.session.parameters_mut().text_mut(ParameterName::B) = "abc".to_string();
        app.run();
        assert_eq!(app.session.parameters().get(ParameterName::B).raw_text(), "0");
        assert!(app.surface.points().iter().all(|p| p[1] == 0.0));
        assert_eq!(app.surface.label(), "0 * sin(1 * x + 0)");
    }
}
