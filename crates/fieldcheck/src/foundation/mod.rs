//! Building blocks shared by every part of the engine
//!
//! - [`Value`] / [`Category`]: the dynamic value model
//! - [`FieldValue`]: a named value with an optional original form
//! - [`Status`]: the outcome taxonomy
//! - [`Error`]: construction-time errors and transform diagnostics

pub mod error;
pub mod field;
pub mod status;
pub mod value;

pub use error::Error;
pub use field::FieldValue;
pub use status::Status;
pub use value::{Category, Value};
