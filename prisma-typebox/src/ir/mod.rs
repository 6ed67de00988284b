//! Intermediate Representation (IR) module.
//!
//! This module defines the input document (models, fields and enums as
//! described by a Prisma DMMF document) and the object-schema tree that the
//! generator builds from it before rendering any text.

pub mod document;
pub mod schema;
pub mod types;

pub use document::{Document, Enum, EnumValue, Field, FieldDefault, Model};
pub use schema::{Expr, FieldNode, ObjectSchema, References};
pub use types::ScalarType;
