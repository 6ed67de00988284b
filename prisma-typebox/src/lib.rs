//! # prisma-typebox
//!
//! Generates TypeScript [TypeBox](https://github.com/sinclairzx81/typebox)
//! validation schemas from a Prisma DMMF document.
//!
//! Every model produces two self-contained sources: the canonical schema and
//! an input schema for create/update payloads, in which auto-increment
//! identifiers are optional. Every enum produces one source.
//!
//! Related models are inlined one level deep. Fields of an inlined model that
//! point back at any model of the document are dropped, so mutually
//! referencing models always terminate.
//!
//! ## Usage
//!
//! ```rust,ignore
//! let document = prisma_typebox::Document::from_json(&dmmf_json)?;
//! for entity in prisma_typebox::generate(&document) {
//!     println!("{}", entity.canonical);
//! }
//! ```
//!
//! ## Logging
//!
//! The crate emits `tracing` events: `debug` for inlining decisions and
//! `warn` for references that match neither a model nor an enum. Installing
//! a subscriber is left to the caller.

pub mod error;
pub mod generator;
pub mod ir;

pub use error::DocumentError;
pub use generator::typebox::TypeBoxGenerator;
pub use generator::{
    CodeGenerator, EntityKind, GeneratedEntity, GeneratorConfig, IndentStyle, LineEnding,
};
pub use ir::{Document, Enum, EnumValue, Field, FieldDefault, Model, ScalarType};

/// Generate schemas for every model and enum with the default configuration.
pub fn generate(document: &Document) -> Vec<GeneratedEntity> {
    generate_with_config(document, &GeneratorConfig::default())
}

/// Generate schemas for every model and enum.
pub fn generate_with_config(document: &Document, config: &GeneratorConfig) -> Vec<GeneratedEntity> {
    TypeBoxGenerator::new().generate(document, config)
}

/// Parse a DMMF JSON document and generate its schemas.
pub fn generate_from_json(
    json: &str,
    config: &GeneratorConfig,
) -> Result<Vec<GeneratedEntity>, DocumentError> {
    let document = Document::from_json(json)?;
    Ok(generate_with_config(&document, config))
}
