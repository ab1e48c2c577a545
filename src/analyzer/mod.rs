//! Heuristic, line-based source analysis.
//!
//! Nothing here builds a syntax tree: functions are found by signature
//! patterns and brace matching, complexity by counting decision constructs and
//! magic numbers by scanning for literals outside exempt contexts.

mod complexity;
mod magic;
mod params;
mod parser;
mod types;

pub use complexity::ComplexityCounter;
pub use magic::{DEFAULT_ALLOWED_NUMBERS, MagicNumber, MagicNumberDetector};
pub use params::count_parameters;
pub use parser::{FunctionParser, HeuristicParser};
pub use types::{FunctionSpan, SourceFile};
