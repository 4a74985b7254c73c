use std::fmt;

use crate::constants::{sample_x, SAMPLE_COUNT};
use crate::series::{Sample, SampleSeries};

/// The curve `y = b·sin(a·x + c)`.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SineCurve {
    pub a: f64,
    pub b: f64,
    pub c: f64,
}

impl SineCurve {
    pub fn new(a: f64, b: f64, c: f64) -> Self {
        Self { a, b, c }
    }

    pub fn value_at(&self, x: f64) -> f64 {
        self.b * (self.a * x + self.c).sin()
    }

    /// Sample the curve over the whole domain.
    pub fn sample(&self) -> SampleSeries {
        let samples = (0..SAMPLE_COUNT)
            .map(|i| {
                let x = sample_x(i);
                Sample {
                    x,
                    y: self.value_at(x),
                }
            })
            .collect();
        SampleSeries::from_samples(samples)
    }
}

impl From<[f64; 3]> for SineCurve {
    fn from([a, b, c]: [f64; 3]) -> Self {
        Self { a, b, c }
    }
}

impl fmt::Display for SineCurve {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} * sin({} * x + {})", self.b, self.a, self.c)
    }
}

/// Evaluate `b·sin(a·x + c)` over the fixed domain.
pub fn evaluate(a: f64, b: f64, c: f64) -> SampleSeries {
    let curve = SineCurve::new(a, b, c);
    tracing::debug!(%curve, "evaluating curve");
    curve.sample()
}
