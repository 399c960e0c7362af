//! Numeric types and sparse storage shared by the model builder.
//!
//! The staged model is handed to a solving engine in standard compressed
//! sparse column format, which is the one matrix type provided here.

mod csc;
mod error_types;
mod floats;
mod matrix_types;

pub use csc::*;
pub use error_types::*;
pub use floats::*;
pub use matrix_types::*;
