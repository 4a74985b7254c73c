//! Parameter handling and evaluation for the `b·sin(a·x + c)` plotter.
//!
//! Nothing here knows about windows or widgets: a toolkit edits the texts in
//! a [`ParameterSet`], calls [`Session::on_trigger`] when the user asks for a
//! redraw, and receives the new [`SampleSeries`] through [`SeriesRenderer`].

pub mod constants;
pub mod error;
pub mod evaluator;
pub mod parameter;
pub mod series;
pub mod session;

pub use error::ParameterError;
pub use evaluator::{evaluate, SineCurve};
pub use parameter::{parse_value, Parameter, ParameterName, ParameterSet};
pub use series::{Sample, SampleSeries};
pub use session::{SeriesRenderer, Session};
