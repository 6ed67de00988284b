//! Scalar type definitions.
//!
//! Prisma field types are plain strings in the DMMF. A handful of them are
//! scalars with a direct TypeBox counterpart; every other type tag names a
//! model or an enum of the same document.

use serde::{Deserialize, Serialize};

/// Recognized Prisma scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ScalarType {
    Int,
    Float,
    Decimal,
    BigInt,
    String,
    DateTime,
    Date,
    Boolean,
    Json,
}

impl ScalarType {
    /// All recognized scalars, in declaration order.
    pub const ALL: [ScalarType; 9] = [
        ScalarType::Int,
        ScalarType::Float,
        ScalarType::Decimal,
        ScalarType::BigInt,
        ScalarType::String,
        ScalarType::DateTime,
        ScalarType::Date,
        ScalarType::Boolean,
        ScalarType::Json,
    ];

    /// Parse a DMMF type tag.
    ///
    /// Returns `None` when the tag is not a scalar, meaning it refers to a
    /// model or enum by name.
    pub fn from_tag(tag: &str) -> Option<Self> {
        let scalar = match tag {
            "Int" => ScalarType::Int,
            "Float" => ScalarType::Float,
            "Decimal" => ScalarType::Decimal,
            "BigInt" => ScalarType::BigInt,
            "String" => ScalarType::String,
            "DateTime" => ScalarType::DateTime,
            "Date" => ScalarType::Date,
            "Boolean" => ScalarType::Boolean,
            "Json" => ScalarType::Json,
            _ => return None,
        };
        Some(scalar)
    }

    /// The DMMF type tag for this scalar.
    pub fn as_tag(&self) -> &'static str {
        match self {
            ScalarType::Int => "Int",
            ScalarType::Float => "Float",
            ScalarType::Decimal => "Decimal",
            ScalarType::BigInt => "BigInt",
            ScalarType::String => "String",
            ScalarType::DateTime => "DateTime",
            ScalarType::Date => "Date",
            ScalarType::Boolean => "Boolean",
            ScalarType::Json => "Json",
        }
    }
}
