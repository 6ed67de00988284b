//! Field transformation.
//!
//! A field produces two entries: the canonical one used for data read from
//! storage and the input one used for create/update payloads. They differ
//! only in optionality of identifiers assigned by the database.

use crate::ir::{Expr, Field, FieldNode, References, ScalarType};

/// Result of transforming a single field.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldTransform {
    pub canonical: FieldNode,
    pub input: FieldNode,

    /// Model/enum names referenced by the field
    pub refs: References,
}

/// Transform a field into its canonical and input entries.
pub fn transform_field(field: &Field) -> FieldTransform {
    let mut refs = References::new();

    let mut base = match ScalarType::from_tag(&field.ty) {
        Some(scalar) => Expr::Scalar(scalar),
        None => {
            refs.insert(field.ty.as_str());
            Expr::Placeholder(field.ty.clone())
        }
    };

    if field.is_list {
        base = Expr::array(base);
    }

    let canonical = if is_canonical_optional(field) {
        Expr::optional(base.clone())
    } else {
        base.clone()
    };

    let input = if is_input_optional(field) {
        Expr::optional(base)
    } else {
        base
    };

    FieldTransform {
        canonical: FieldNode::new(field.name.as_str(), canonical),
        input: FieldNode::new(field.name.as_str(), input),
        refs,
    }
}

/// Identifiers are always present on stored data; anything else that may be
/// missing or has a default is optional.
pub fn is_canonical_optional(field: &Field) -> bool {
    (!field.is_required || field.has_default_value) && !field.is_id
}

/// Auto-increment identifiers are assigned by the store and never required on
/// input.
pub fn is_input_optional(field: &Field) -> bool {
    is_canonical_optional(field) || (field.is_id && field.is_autoincrement())
}
