//! # prisma-typebox-cli
//!
//! CLI library for generating TypeBox schemas from Prisma DMMF documents.
//!
//! ## Architecture
//!
//! - [`config`] - Configuration management and TOML parsing
//! - [`loader`] - DMMF document loading
//! - [`generator`] - Runs the generator and maps entities to output files
//! - [`writer`] - File output, dry-run support and up-to-date checks
//! - [`error`] - Error types and handling

pub mod config;
pub mod error;
pub mod generator;
pub mod loader;
pub mod writer;

// Re-export main types for convenience
pub use config::{Config, ConfigManager};
pub use error::{CliError, CliResult};
pub use generator::{GeneratedOutput, OutputFile, SchemaGenerator};
pub use loader::load_document;
pub use writer::FileWriter;
