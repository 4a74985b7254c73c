/// One evaluated point of a curve.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Sample {
    pub x: f64,
    pub y: f64,
}

/// A curve sampled over the fixed domain, in increasing x order.
///
/// Always produced whole by [`evaluate`](crate::evaluator::evaluate); there
/// is no way to patch individual points.
#[derive(Debug, Clone, PartialEq, Default)]
pub struct SampleSeries {
    samples: Vec<Sample>,
}

impl SampleSeries {
    pub(crate) fn from_samples(samples: Vec<Sample>) -> Self {
        Self { samples }
    }

    pub fn len(&self) -> usize {
        self.samples.len()
    }

    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    pub fn iter(&self) -> impl Iterator<Item = &Sample> {
        self.samples.iter()
    }

    /// `(min, max)` over the y values, skipping NaN. `None` when no finite
    /// or infinite y value exists.
    pub fn y_bounds(&self) -> Option<(f64, f64)> {
        self.samples
            .iter()
            .map(|s| s.y)
            .filter(|y| !y.is_nan())
            .fold(None, |acc, y| match acc {
                None => Some((y, y)),
                Some((lo, hi)) => Some((lo.min(y), hi.max(y))),
            })
    }
}
