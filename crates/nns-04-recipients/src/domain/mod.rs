//! # Domain Layer

pub mod classifier;
pub mod errors;
pub mod names;

pub use classifier::{classify, RecipientReference};
pub use errors::{NameError, RecipientError};
pub use names::{base_name, format_name, validate_name, NameRules, NAME_SUFFIX};
