use std::fmt;

use crate::constants::{DEFAULT_VALUES, FALLBACK_TEXT};
use crate::error::ParameterError;

/// Identity of one of the three curve parameters.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum ParameterName {
    /// Angular frequency.
    A,
    /// Amplitude.
    B,
    /// Phase offset.
    C,
}

impl ParameterName {
    /// All names in table order.
    pub const ALL: [ParameterName; 3] = [ParameterName::A, ParameterName::B, ParameterName::C];

    pub fn label(self) -> &'static str {
        match self {
            ParameterName::A => "A",
            ParameterName::B => "B",
            ParameterName::C => "C",
        }
    }

    fn index(self) -> usize {
        match self {
            ParameterName::A => 0,
            ParameterName::B => 1,
            ParameterName::C => 2,
        }
    }
}

impl fmt::Display for ParameterName {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Parse a field's text as a float.
///
/// Surrounding whitespace is ignored and single underscores between digits
/// are accepted as separators (`"1_000"`); everything else follows Rust's
/// float literal grammar (`"1e3"`, `".5"`, `"-inf"` and `"nan"` are all
/// accepted).
pub fn parse_value(text: &str) -> Result<f64, ParameterError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(ParameterError::Empty);
    }
    strip_digit_separators(trimmed)
        .and_then(|digits| digits.parse::<f64>().ok())
        .ok_or_else(|| ParameterError::Invalid {
            text: text.to_string(),
        })
}

/// Drop `_` separators. `None` if any underscore is not flanked by ASCII
/// digits on both sides.
fn strip_digit_separators(text: &str) -> Option<String> {
    let bytes = text.as_bytes();
    let mut out = String::with_capacity(text.len());
    for (i, ch) in text.char_indices() {
        if ch != '_' {
            out.push(ch);
            continue;
        }
        let after_digit = i > 0 && bytes[i - 1].is_ascii_digit();
        let before_digit = bytes.get(i + 1).is_some_and(u8::is_ascii_digit);
        if !(after_digit && before_digit) {
            return None;
        }
    }
    Some(out)
}

/// A single named parameter: the text shown to the user and the number it
/// last resolved to.
#[derive(Debug, Clone, PartialEq)]
pub struct Parameter {
    name: ParameterName,
    value: f64,
    raw_text: String,
}

impl Parameter {
    fn with_default(name: ParameterName) -> Self {
        let value = DEFAULT_VALUES[name.index()];
        Self {
            name,
            value,
            raw_text: value.to_string(),
        }
    }

    pub fn name(&self) -> ParameterName {
        self.name
    }

    /// Value from the most recent validate-and-read (or the default).
    pub fn value(&self) -> f64 {
        self.value
    }

    pub fn raw_text(&self) -> &str {
        &self.raw_text
    }

    /// Coerce `raw_text` into `value`. Invalid text resets both the value
    /// and the text to zero.
    fn resolve(&mut self) -> f64 {
        match parse_value(&self.raw_text) {
            Ok(value) => self.value = value,
            Err(err) => {
                tracing::debug!(parameter = %self.name, %err, "coercing parameter to zero");
                self.value = 0.0;
                self.raw_text = FALLBACK_TEXT.to_string();
            }
        }
        self.value
    }
}

/// The A, B, C parameters in fixed order.
#[derive(Debug, Clone, PartialEq)]
pub struct ParameterSet {
    parameters: [Parameter; 3],
}

impl Default for ParameterSet {
    fn default() -> Self {
        Self {
            parameters: ParameterName::ALL.map(Parameter::with_default),
        }
    }
}

impl ParameterSet {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, name: ParameterName) -> &Parameter {
        &self.parameters[name.index()]
    }

    /// Parameters in A, B, C order.
    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.parameters.iter()
    }

    /// Mutable access to a field's text, for toolkits that edit in place.
    /// The value is untouched until the next [`refresh`](Self::refresh).
    pub fn text_mut(&mut self, name: ParameterName) -> &mut String {
        &mut self.parameters[name.index()].raw_text
    }

    /// Current values in A, B, C order.
    pub fn values(&self) -> [f64; 3] {
        [
            self.parameters[0].value,
            self.parameters[1].value,
            self.parameters[2].value,
        ]
    }

    /// Replace all three texts and resolve them to numbers.
    ///
    /// Text that does not parse yields `0.0` and is rewritten to `"0"`.
    /// Never fails.
    pub fn validate_and_read(&mut self, raw_texts: [String; 3]) -> [f64; 3] {
        for (parameter, text) in self.parameters.iter_mut().zip(raw_texts) {
            parameter.raw_text = text;
        }
        self.refresh()
    }

    /// Resolve the texts currently held by the set, same rules as
    /// [`validate_and_read`](Self::validate_and_read).
    pub fn refresh(&mut self) -> [f64; 3] {
        for parameter in &mut self.parameters {
            parameter.resolve();
        }
        self.values()
    }
}
