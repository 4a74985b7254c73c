use crate::evaluator::{evaluate, SineCurve};
use crate::parameter::ParameterSet;
use crate::series::SampleSeries;

/// Anything that can display a freshly evaluated series.
pub trait SeriesRenderer {
    /// Replace whatever is currently shown with `series`.
    fn render(&mut self, series: &SampleSeries);
}

/// Owns the parameter table and the last series shown for it.
#[derive(Debug, Clone)]
pub struct Session {
    parameters: ParameterSet,
    curve: SineCurve,
    series: SampleSeries,
}

impl Default for Session {
    fn default() -> Self {
        let parameters = ParameterSet::new();
        let curve = SineCurve::from(parameters.values());
        let series = curve.sample();
        Self {
            parameters,
            curve,
            series,
        }
    }
}

impl Session {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn parameters(&self) -> &ParameterSet {
        &self.parameters
    }

    pub fn parameters_mut(&mut self) -> &mut ParameterSet {
        &mut self.parameters
    }

    /// Curve the current series was evaluated from.
    pub fn curve(&self) -> SineCurve {
        self.curve
    }

    pub fn series(&self) -> &SampleSeries {
        &self.series
    }

    /// Handle a Run: resolve the parameter texts, re-evaluate the whole
    /// series and hand it to `renderer`. Returns the curve that was drawn.
    pub fn on_trigger(&mut self, renderer: &mut dyn SeriesRenderer) -> SineCurve {
        let [a, b, c] = self.parameters.refresh();
        self.curve = SineCurve::new(a, b, c);
        self.series = evaluate(a, b, c);
        tracing::info!(curve = %self.curve, samples = self.series.len(), "run");
        renderer.render(&self.series);
        self.curve
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::parameter::ParameterName;

    #[derive(Default)]
    struct CountingRenderer {
        calls: usize,
        last_len: usize,
    }

    impl SeriesRenderer for CountingRenderer {
        fn render(&mut self, series: &SampleSeries) {
            self.calls += 1;
            self.last_len = series.len();
        }
    }

    #[test]
    fn test_new_session_shows_default_curve() {
        let session = Session::new();
        assert_eq!(session.curve(), SineCurve::new(1.0, 1.0, 0.0));
        assert_eq!(session.series(), &evaluate(1.0, 1.0, 0.0));
    }

    #[test]
    fn test_trigger_renders_once_per_run() {
        let mut session = Session::new();
        let mut renderer = CountingRenderer::default();

        *session.parameters_mut().text_mut(ParameterName::B) = "2".to_string();
        let curve = session.on_trigger(&mut renderer);
        assert_eq!(curve, SineCurve::new(1.0, 2.0, 0.0));
        assert_eq!(renderer.calls, 1);
        assert_eq!(renderer.last_len, session.series().len());

        session.on_trigger(&mut renderer);
        assert_eq!(renderer.calls, 2);
    }

    #[test]
    fn test_editing_without_trigger_keeps_series() {
        let mut session = Session::new();
        let before = session.series().clone();
        *session.parameters_mut().text_mut(ParameterName::A) = "5".to_string();
        assert_eq!(session.series(), &before);
        assert_eq!(session.curve().a, 1.0);
    }
}
