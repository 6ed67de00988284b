//! Code generator module.
//!
//! This module defines the code generator trait and the TypeBox backend.

pub mod traits;
pub mod typebox;

pub use traits::{
    CodeGenerator, EntityKind, GeneratedEntity, GeneratorConfig, IndentStyle, LineEnding,
    DEFAULT_LIBRARY,
};
