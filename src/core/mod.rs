//! Core functionality for the add step
//!
//! Contains number parsing, the summation itself, result rendering and
//! the result file writer.

pub mod number;
pub mod output;
pub mod render;
pub mod sum;

pub use number::parse_number;
pub use output::ResultWriter;
pub use render::render;
pub use sum::sum;
