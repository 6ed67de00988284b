//! Model transformation.
//!
//! Aggregates field transforms into an object schema. When a model is inlined
//! as another model's dependency, fields pointing at suppressed model names
//! are dropped so back-references are never expanded again.

use tracing::trace;

use crate::ir::{Model, ObjectSchema, References};

use super::field::transform_field;

/// Sequence used to disambiguate the `$id` of inlined dependencies.
///
/// One counter is created per document pass and advanced for every model
/// transform, top-level or inlined.
#[derive(Debug, Default, Clone, PartialEq, Eq)]
pub struct DependencyCounter {
    current: usize,
}

impl DependencyCounter {
    pub fn new() -> Self {
        Self::default()
    }

    /// Advance and return the new sequence number. The first call returns 1.
    pub fn advance(&mut self) -> usize {
        self.current += 1;
        self.current
    }

    /// Last sequence number handed out.
    pub fn current(&self) -> usize {
        self.current
    }
}

/// Which of the two generated schemas an object belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SchemaVariant {
    Canonical,
    Input,
}

impl SchemaVariant {
    /// Suffix of the exported const (`User` / `UserInput`).
    pub fn export_suffix(&self) -> &'static str {
        match self {
            SchemaVariant::Canonical => "",
            SchemaVariant::Input => "Input",
        }
    }

    /// Suffix of the `$id` option.
    fn id_suffix(&self) -> &'static str {
        match self {
            SchemaVariant::Canonical => "model",
            SchemaVariant::Input => "input_model",
        }
    }

    /// `$id` of a top-level model schema.
    pub fn model_id(&self, model_name: &str) -> String {
        format!("{}_{}", model_name, self.id_suffix())
    }

    /// `$id` of an inlined dependency schema.
    pub fn dependency_id(&self, model_name: &str, sequence: usize) -> String {
        format!("{}_dep_{}_{}", model_name, sequence, self.id_suffix())
    }
}

/// Canonical and input schemas of one model, with the references they hold.
#[derive(Debug, Clone, PartialEq)]
pub struct ModelFragment {
    pub canonical: ObjectSchema,
    pub input: ObjectSchema,
    pub refs: References,
}

/// Transform a model into its object schemas.
///
/// With `suppress_references_to`, the model is treated as an inlined
/// dependency: it gets a `_dep_<n>` identifier and every field referencing
/// one of the given names is removed from both schemas.
pub fn transform_model(
    model: &Model,
    suppress_references_to: Option<&[String]>,
    counter: &mut DependencyCounter,
) -> ModelFragment {
    let sequence = counter.advance();

    let (canonical_id, input_id) = match suppress_references_to {
        Some(_) => (
            SchemaVariant::Canonical.dependency_id(&model.name, sequence),
            SchemaVariant::Input.dependency_id(&model.name, sequence),
        ),
        None => (
            SchemaVariant::Canonical.model_id(&model.name),
            SchemaVariant::Input.model_id(&model.name),
        ),
    };

    let mut canonical_fields = Vec::with_capacity(model.fields.len());
    let mut input_fields = Vec::with_capacity(model.fields.len());
    let mut refs = References::new();

    for field in &model.fields {
        let transformed = transform_field(field);

        if let Some(suppressed) = suppress_references_to {
            if suppressed.iter().any(|name| transformed.refs.contains(name)) {
                trace!(
                    model = %model.name,
                    field = %field.name,
                    "dropping back-reference from inlined dependency"
                );
                continue;
            }
        }

        canonical_fields.push(transformed.canonical);
        input_fields.push(transformed.input);
        refs.extend(transformed.refs);
    }

    ModelFragment {
        canonical: ObjectSchema::new(canonical_id, canonical_fields),
        input: ObjectSchema::new(input_id, input_fields),
        refs,
    }
}
