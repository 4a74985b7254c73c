// Curve plot via egui_plot.

use curve_core::constants::{PLOT_TITLE, X_AXIS_LABEL, Y_AXIS_LABEL};
use curve_core::{SampleSeries, SeriesRenderer, SineCurve};
use egui_plot::{Legend, Line, Plot};

/// Half-height of the band shown around a flat curve.
const FLAT_MARGIN: f64 = 1.0;

/// Spans below this fraction of the curve's magnitude count as flat.
const FLAT_TOLERANCE: f64 = 1e-6;

/// Plot-ready copy of the last rendered series.
#[derive(Debug, Default)]
pub struct PlotSurface {
    points: Vec<[f64; 2]>,
    y_range: Option<(f64, f64)>,
    label: String,
}

impl PlotSurface {
    /// Name the next rendered line after `curve`.
    pub fn set_label(&mut self, curve: SineCurve) {
        self.label = curve.to_string();
    }

    pub fn points(&self) -> &[[f64; 2]] {
        &self.points
    }

    pub fn label(&self) -> &str {
        &self.label
    }

    /// Y extent to keep in view. Flat curves are padded so the line does not
    /// sit on the frame.
    pub fn y_range(&self) -> Option<(f64, f64)> {
        let (lo, hi) = self.y_range?;
        let scale = lo.abs().max(hi.abs()).max(1.0);
        if hi - lo <= FLAT_TOLERANCE * scale {
            Some((lo - FLAT_MARGIN, hi + FLAT_MARGIN))
        } else {
            Some((lo, hi))
        }
    }
}

impl SeriesRenderer for PlotSurface {
    fn render(&mut self, series: &SampleSeries) {
        self.points = series.iter().map(|s| [s.x, s.y]).collect();
        self.y_range = series.y_bounds().filter(|(lo, hi)| lo.is_finite() && hi.is_finite());
    }
}

/// Draw the curve plot in the central panel.
pub fn draw_curve_plot(ctx: &egui::Context, surface: &PlotSurface, show_legend: bool) {
    egui::CentralPanel::default().show(ctx, |ui| {
        ui.vertical_centered(|ui| {
            ui.heading(PLOT_TITLE);
        });

        let line = Line::new(surface.points().to_vec()).name(surface.label());

        let mut plot = Plot::new("curve_plot")
            .x_axis_label(X_AXIS_LABEL)
            .y_axis_label(Y_AXIS_LABEL);
        if show_legend {
            plot = plot.legend(Legend::default());
        }
        if let Some((lo, hi)) = surface.y_range() {
            plot = plot.include_y(lo).include_y(hi);
        }

        plot.show(ui, |plot_ui| {
            plot_ui.line(line);
        });
    });
}

#[cfg(test)]
mod tests {
    use super::*;
    use curve_core::evaluate;

    #[test]
    fn test_render_copies_series() {
        let series = evaluate(1.0, 2.0, 0.0);
        let mut surface = PlotSurface::default();
        surface.render(&series);
        assert_eq!(surface.points().len(), series.len());
        assert_eq!(surface.points()[1], [series.samples()[1].x, series.samples()[1].y]);
        let (lo, hi) = surface.y_range().unwrap();
        assert!(lo < -1.9 && hi > 1.9, "range = ({lo}, {hi})");
    }

    #[test]
    fn test_flat_curve_gets_margin() {
        let mut surface = PlotSurface::default();
        surface.render(&evaluate(0.0, 0.0, 0.0));
        assert_eq!(surface.y_range(), Some((-1.0, 1.0)));
    }

    #[test]
    fn test_nearly_flat_large_curve_gets_margin() {
        let mut surface = PlotSurface::default();
        // 1e6·sin(1e-9·x + π/2) varies by well under a unit over the domain.
        surface.render(&evaluate(1e-9, 1e6, std::f64::consts::FRAC_PI_2));
        let (lo, hi) = surface.y_range().unwrap();
        assert!(hi - lo >= 2.0, "range = ({lo}, {hi})");
    }

    #[test]
    fn test_infinite_curve_has_no_range() {
        let mut surface = PlotSurface::default();
        surface.render(&evaluate(1.0, f64::INFINITY, 0.5));
        assert_eq!(surface.y_range(), None);
    }

    #[test]
    fn test_label_follows_curve() {
        let mut surface = PlotSurface::default();
        surface.set_label(SineCurve::new(2.0, 3.0, 0.0));
        assert_eq!(surface.label(), "3 * sin(2 * x + 0)");
    }
}
