//! Error types for the generator crate.
//!
//! Generation itself never fails: unknown references are passed through as
//! placeholders. The only fallible step is reading the input document.

use thiserror::Error;

/// Error raised while reading a DMMF document.
#[derive(Debug, Error)]
pub enum DocumentError {
    /// The input is not valid DMMF JSON.
    #[error("Invalid DMMF document: {0}")]
    Json(#[from] serde_json::Error),
}
