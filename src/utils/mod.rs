//! Utility functions

pub mod crypto;
pub mod validation;

pub use crypto::hash_string;
pub use validation::{parse_filter, validate_university_email};
