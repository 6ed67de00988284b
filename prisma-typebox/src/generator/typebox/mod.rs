//! TypeBox schema generator.
//!
//! This module turns a Prisma document into TypeScript source using the
//! `@sinclair/typebox` builders.
//!
//! # Components
//!
//! - [`TypeBoxGenerator`] - Drives a whole document, implements [`CodeGenerator`]
//! - [`transform_field`] / [`transform_model`] - Build object-schema trees
//! - [`DependencyResolver`] - Inlines related models and resolves enums, one level deep
//! - [`TypeBoxEmitter`] - Renders trees to source text
//! - [`TypeBoxTypeMapper`] - Maps Prisma scalars to TypeBox expressions
//!
//! [`CodeGenerator`]: crate::generator::CodeGenerator

pub mod document;
pub mod emitter;
pub mod field;
pub mod model;
pub mod resolver;
pub mod type_mapper;

pub use document::TypeBoxGenerator;
pub use emitter::TypeBoxEmitter;
pub use field::{transform_field, FieldTransform};
pub use model::{transform_model, DependencyCounter, ModelFragment, SchemaVariant};
pub use resolver::{DependencyResolver, ResolvedModel};
pub use type_mapper::TypeBoxTypeMapper;
