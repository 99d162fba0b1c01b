//! Textual input for the containers. Output is the `Display` impl on each type.

pub mod text;
pub use text::{TextRead, TokenReader};
