//! Shared model for the field picker.
//!
//! Responsibilities
//! - Read `.fields` definition files and classify every field name
//!   (`fields`, `model::category`).
//! - Hold the per-category catalog with its sorting and filtering rules
//!   (`model::catalog`).
//! - Derive the placeholder tokens embedded in documents (`model::token`).
//! - Escape tokens for markup and read field-code packages back (`markup`).

pub mod error;
pub mod fields;
pub mod markup;
pub mod model;

pub use error::{MarkupError, ParseError, UnknownValue};
pub use model::catalog::{FieldCatalog, SortDirection};
pub use model::category::{Category, classify};
pub use model::field::FieldName;
pub use model::token::{LoopControl, PlaceholderToken};
