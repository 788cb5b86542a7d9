//! Human-readable and JSON rendering of resume analyses.

mod json;
mod text;

pub use json::JsonWriter;
pub use text::TextWriter;
