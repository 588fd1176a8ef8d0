//! Core invoice input types, builders, and input checks.
//!
//! The types here are the single record the document engine consumes.
//! They carry no behaviour beyond construction and optional bounds checks.

mod builder;
mod error;
mod outcome;
mod types;
mod validation;

pub use builder::*;
pub use error::*;
pub use outcome::*;
pub use types::*;
pub use validation::*;
