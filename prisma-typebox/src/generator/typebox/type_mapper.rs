//! Prisma scalar to TypeBox mappings.
//!
//! # Type Mappings
//!
//! | Prisma Type | TypeBox Expression |
//! |-------------|--------------------|
//! | `Int`, `Float`, `Decimal` | `Type.Number()` |
//! | `BigInt` | `Type.Integer()` |
//! | `String`, `DateTime`, `Date` | `Type.String()` |
//! | `Boolean` | `Type.Boolean()` |
//! | `Json` | `Type.Object({}, { additionalProperties: true })` |
//!
//! Any other type tag is a model or enum reference and is not handled here.

use std::collections::HashMap;

use crate::ir::ScalarType;

/// Maps Prisma scalars to TypeBox expression tokens.
///
/// # Example
///
/// ```rust,ignore
/// use prisma_typebox::generator::typebox::TypeBoxTypeMapper;
/// use prisma_typebox::ir::ScalarType;
///
/// let mapper = TypeBoxTypeMapper::new();
/// assert_eq!(mapper.map_scalar(ScalarType::String), "Type.String()");
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeBoxTypeMapper {
    /// Custom overrides (scalar tag -> TypeBox expression)
    type_overrides: HashMap<String, String>,
}

impl TypeBoxTypeMapper {
    /// Create a mapper with the built-in mappings only.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a mapper with custom overrides.
    ///
    /// Overrides whose key is not a scalar tag are never consulted.
    pub fn with_overrides(overrides: HashMap<String, String>) -> Self {
        Self {
            type_overrides: overrides,
        }
    }

    /// Add a custom override.
    pub fn add_override(&mut self, scalar_tag: impl Into<String>, expression: impl Into<String>) {
        self.type_overrides
            .insert(scalar_tag.into(), expression.into());
    }

    /// Map a scalar to its TypeBox expression.
    pub fn map_scalar(&self, scalar: ScalarType) -> &str {
        match self.type_overrides.get(scalar.as_tag()) {
            Some(expression) => expression.as_str(),
            None => builtin_expression(scalar),
        }
    }

    /// Map a raw DMMF type tag.
    ///
    /// Returns `None` for tags that name a model or enum.
    pub fn map_tag(&self, tag: &str) -> Option<&str> {
        ScalarType::from_tag(tag).map(|scalar| self.map_scalar(scalar))
    }
}

fn builtin_expression(scalar: ScalarType) -> &'static str {
    match scalar {
        ScalarType::Int | ScalarType::Float | ScalarType::Decimal => "Type.Number()",
        ScalarType::BigInt => "Type.Integer()",
        ScalarType::String | ScalarType::DateTime | ScalarType::Date => "Type.String()",
        ScalarType::Boolean => "Type.Boolean()",
        ScalarType::Json => "Type.Object({}, { additionalProperties: true })",
    }
}
