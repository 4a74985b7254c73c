//! Parameter parsing errors.

use thiserror::Error;

/// Reasons a parameter's text could not be read as a number.
///
/// These never reach the caller of [`ParameterSet::validate_and_read`]:
/// the set logs them and substitutes zero.
///
/// [`ParameterSet::validate_and_read`]: crate::parameter::ParameterSet::validate_and_read
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ParameterError {
    /// The field holds nothing but whitespace.
    #[error("parameter text is empty")]
    Empty,
    /// The field holds text that is not a float literal.
    #[error("'{text}' is not a number")]
    Invalid { text: String },
}
