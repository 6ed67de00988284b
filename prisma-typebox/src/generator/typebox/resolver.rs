//! Dependency resolution.
//!
//! Replaces the placeholders of a top-level model. Referenced models are
//! inlined as object schemas with every relation back into the document's
//! models stripped; referenced enums become identifiers that the emitted file
//! imports. Resolution goes one level deep: references introduced by an
//! inlined model are never expanded.

use tracing::{debug, warn};

use crate::ir::{Document, Expr, Model, ObjectSchema};

use super::model::{transform_model, DependencyCounter, ModelFragment};

/// A top-level model with its placeholders substituted.
#[derive(Debug, Clone, PartialEq)]
pub struct ResolvedModel {
    pub canonical: ObjectSchema,
    pub input: ObjectSchema,

    /// Models inlined into the schemas, in resolution order
    pub inlined: Vec<String>,

    /// Enums referenced anywhere in the schemas, deduplicated
    pub enum_imports: Vec<String>,

    /// Names left as placeholders because nothing in the document matches
    pub unresolved: Vec<String>,
}

/// Resolves model and enum references against a document.
#[derive(Debug, Clone)]
pub struct DependencyResolver<'a> {
    document: &'a Document,

    /// Names suppressed in every inlined dependency
    model_names: Vec<String>,
}

impl<'a> DependencyResolver<'a> {
    pub fn new(document: &'a Document) -> Self {
        Self {
            document,
            model_names: document.model_names(),
        }
    }

    /// Resolve the placeholders of `model`'s fragment.
    pub fn resolve(
        &self,
        model: &Model,
        fragment: ModelFragment,
        counter: &mut DependencyCounter,
    ) -> ResolvedModel {
        let ModelFragment {
            mut canonical,
            mut input,
            refs,
        } = fragment;

        let mut inlined = Vec::new();
        for name in refs.iter() {
            // enums are resolved below, together with those of inlined models
            if self.document.find_enum(name).is_some() {
                continue;
            }
            let Some(dependency) = self.document.find_model(name) else {
                continue;
            };

            let fragment = transform_model(dependency, Some(self.model_names.as_slice()), counter);
            debug!(
                model = %model.name,
                dependency = %name,
                id = %fragment.canonical.id,
                "inlining dependency"
            );

            canonical.substitute(name, &Expr::Object(Box::new(fragment.canonical)));
            input.substitute(name, &Expr::Object(Box::new(fragment.input)));
            inlined.push(name.to_string());
        }

        let mut enum_imports = Vec::new();
        let mut unresolved = Vec::new();
        let pending = canonical.placeholders();
        for name in pending.iter() {
            if self.document.find_enum(name).is_some() {
                let identifier = Expr::EnumRef(name.to_string());
                canonical.substitute(name, &identifier);
                input.substitute(name, &identifier);
                enum_imports.push(name.to_string());
            } else {
                warn!(
                    model = %model.name,
                    reference = %name,
                    "reference matches no model or enum, leaving placeholder"
                );
                unresolved.push(name.to_string());
            }
        }

        ResolvedModel {
            canonical,
            input,
            inlined,
            enum_imports,
            unresolved,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ir::{Enum, Field, FieldDefault, ScalarType};

    fn blog() -> Document {
        Document::new(
            vec![
                Model::new(
                    "Post",
                    vec![
                        Field::new("id", "Int")
                            .with_id(true)
                            .with_default(FieldDefault::autoincrement()),
                        Field::new("title", "String"),
                        Field::new("author", "User"),
                    ],
                ),
                Model::new(
                    "User",
                    vec![
                        Field::new("id", "Int")
                            .with_id(true)
                            .with_default(FieldDefault::autoincrement()),
                        Field::new("posts", "Post").with_list(true),
                        Field::new("role", "Role"),
                    ],
                ),
            ],
            vec![Enum::new("Role", ["USER", "ADMIN"])],
        )
    }

    fn resolve(document: &Document, model_name: &str) -> ResolvedModel {
        let model = document.find_model(model_name).unwrap();
        let mut counter = DependencyCounter::new();
        let fragment = transform_model(model, None, &mut counter);
        DependencyResolver::new(document).resolve(model, fragment, &mut counter)
    }

    fn inlined_object(schema: &ObjectSchema, field: &str) -> ObjectSchema {
        let mut expr = &schema.field(field).unwrap().expr;
        loop {
            match expr {
                Expr::Object(object) => return (**object).clone(),
                Expr::Array(inner) | Expr::Optional(inner) => expr = inner.as_ref(),
                other => panic!("expected inlined object, got {:?}", other),
            }
        }
    }

    #[test]
    fn test_inlines_model_without_back_reference() {
        let doc = blog();
        let resolved = resolve(&doc, "Post");

        assert_eq!(resolved.inlined, vec!["User"]);
        let author = inlined_object(&resolved.canonical, "author");
        assert_eq!(author.id, "User_dep_2_model");
        assert!(author.field("posts").is_none());
        assert!(!author.references("Post"));
        assert!(resolved.canonical.placeholders().is_empty());
    }

    #[test]
    fn test_enum_inside_inlined_model_is_resolved() {
        let doc = blog();
        let resolved = resolve(&doc, "Post");

        let author = inlined_object(&resolved.canonical, "author");
        assert_eq!(
            author.field("role").unwrap().expr,
            Expr::EnumRef("Role".to_string())
        );
        assert_eq!(resolved.enum_imports, vec!["Role"]);
        assert!(resolved.unresolved.is_empty());
    }

    #[test]
    fn test_input_schema_gets_input_fragment() {
        let doc = blog();
        let resolved = resolve(&doc, "Post");

        let author = inlined_object(&resolved.input, "author");
        assert_eq!(author.id, "User_dep_2_input_model");
        assert_eq!(
            author.field("id").unwrap().expr,
            Expr::optional(Expr::Scalar(ScalarType::Int))
        );
    }

    #[test]
    fn test_self_relation_is_inlined_once() {
        let doc = Document::new(
            vec![Model::new(
                "Employee",
                vec![
                    Field::new("name", "String"),
                    Field::new("manager", "Employee").with_required(false),
                    Field::new("reports", "Employee").with_list(true),
                ],
            )],
            vec![],
        );
        let resolved = resolve(&doc, "Employee");

        let manager = inlined_object(&resolved.canonical, "manager");
        assert_eq!(manager.fields.len(), 1);
        assert_eq!(manager.fields[0].name, "name");
        // both fields receive the same fragment
        assert_eq!(manager, inlined_object(&resolved.canonical, "reports"));
        assert_eq!(resolved.inlined, vec!["Employee"]);
    }

    #[test]
    fn test_unknown_reference_is_left_in_place() {
        let doc = Document::new(
            vec![Model::new("Post", vec![Field::new("blob", "Bytes")])],
            vec![],
        );
        let resolved = resolve(&doc, "Post");

        assert_eq!(resolved.unresolved, vec!["Bytes"]);
        assert_eq!(
            resolved.canonical.field("blob").unwrap().expr,
            Expr::Placeholder("Bytes".to_string())
        );
        assert!(resolved.inlined.is_empty());
        assert!(resolved.enum_imports.is_empty());
    }

    #[test]
    fn test_enum_imported_once_for_many_fields() {
        let doc = Document::new(
            vec![Model::new(
                "Account",
                vec![
                    Field::new("role", "Role"),
                    Field::new("previousRoles", "Role").with_list(true),
                ],
            )],
            vec![Enum::new("Role", ["USER"])],
        );
        let resolved = resolve(&doc, "Account");
        assert_eq!(resolved.enum_imports, vec!["Role"]);
        assert!(resolved.input.placeholders().is_empty());
    }
}
