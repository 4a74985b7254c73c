/// First x value of the sampling domain.
pub const DOMAIN_START: f64 = 0.0;

/// Exclusive upper end of the sampling domain.
pub const DOMAIN_END: f64 = 10.0;

/// Spacing between consecutive x samples.
pub const STEP: f64 = 0.01;

/// Number of samples per series: `[0, 10)` at `0.01` spacing.
pub const SAMPLE_COUNT: usize = 1000;

/// Default values of A, B and C, in that order.
pub const DEFAULT_VALUES: [f64; 3] = [1.0, 1.0, 0.0];

/// Text written back into a field whose contents did not parse.
pub const FALLBACK_TEXT: &str = "0";

/// Plot title showing the evaluated formula symbolically.
pub const PLOT_TITLE: &str = "B * sin(A * x + C)";
pub const X_AXIS_LABEL: &str = "x";
pub const Y_AXIS_LABEL: &str = "y";

/// The `i`-th x sample. Computed by multiplication so every series shares
/// bit-identical abscissae regardless of how it was produced.
pub fn sample_x(i: usize) -> f64 {
    DOMAIN_START + i as f64 * STEP
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_domain_covers_zero_to_ten() {
        assert_eq!(sample_x(0), 0.0);
        let last = sample_x(SAMPLE_COUNT - 1);
        assert!((last - 9.99).abs() < 1e-12, "last = {last}");
        assert!(last < DOMAIN_END);
    }

    #[test]
    fn test_sample_count_matches_step() {
        let expected = ((DOMAIN_END - DOMAIN_START) / STEP).round() as usize;
        assert_eq!(expected, SAMPLE_COUNT);
    }
}
