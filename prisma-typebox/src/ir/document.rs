//! Input document definitions.
//!
//! These types mirror the `datamodel` section of a Prisma DMMF document.
//! Only the keys the generator reads are modelled; everything else in the
//! DMMF JSON is ignored during deserialization.

use serde::{Deserialize, Serialize};

use crate::error::DocumentError;

/// The complete set of models and enums for one generation run.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Document {
    /// Models in declaration order
    pub models: Vec<Model>,

    /// Enums in declaration order
    #[serde(default)]
    pub enums: Vec<Enum>,
}

impl Document {
    /// Create a document from models and enums.
    pub fn new(models: Vec<Model>, enums: Vec<Enum>) -> Self {
        Self { models, enums }
    }

    /// Parse a DMMF JSON document.
    ///
    /// Accepts either the full DMMF (`{ "datamodel": { ... } }`) or the bare
    /// datamodel object.
    pub fn from_json(json: &str) -> Result<Self, DocumentError> {
        let value: serde_json::Value = serde_json::from_str(json)?;
        let datamodel = match value {
            serde_json::Value::Object(mut root) => match root.remove("datamodel") {
                Some(datamodel) => datamodel,
                None => serde_json::Value::Object(root),
            },
            other => other,
        };
        Ok(serde_json::from_value(datamodel)?)
    }

    /// Find a model by name.
    pub fn find_model(&self, name: &str) -> Option<&Model> {
        self.models.iter().find(|m| m.name == name)
    }

    /// Find an enum by name.
    pub fn find_enum(&self, name: &str) -> Option<&Enum> {
        self.enums.iter().find(|e| e.name == name)
    }

    /// Names of all models, in declaration order.
    pub fn model_names(&self) -> Vec<String> {
        self.models.iter().map(|m| m.name.clone()).collect()
    }
}

/// A data model with its ordered fields.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Model {
    /// Model name, unique within the document
    pub name: String,

    /// Fields in declaration order
    #[serde(default)]
    pub fields: Vec<Field>,
}

impl Model {
    /// Create a new model.
    pub fn new(name: impl Into<String>, fields: Vec<Field>) -> Self {
        Self {
            name: name.into(),
            fields,
        }
    }
}

/// A single model field.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Field {
    /// Field name
    pub name: String,

    /// Scalar tag or the name of a model/enum
    #[serde(rename = "type")]
    pub ty: String,

    #[serde(default)]
    pub is_list: bool,

    #[serde(default)]
    pub is_required: bool,

    #[serde(default)]
    pub has_default_value: bool,

    #[serde(default)]
    pub is_id: bool,

    /// Default value descriptor
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub default: Option<FieldDefault>,
}

impl Field {
    /// Create a required, non-list field of the given type.
    pub fn new(name: impl Into<String>, ty: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ty: ty.into(),
            is_list: false,
            is_required: true,
            has_default_value: false,
            is_id: false,
            default: None,
        }
    }

    /// Mark as a list.
    pub fn with_list(mut self, is_list: bool) -> Self {
        self.is_list = is_list;
        self
    }

    /// Set whether the field is required.
    pub fn with_required(mut self, is_required: bool) -> Self {
        self.is_required = is_required;
        self
    }

    /// Mark as the model identifier.
    pub fn with_id(mut self, is_id: bool) -> Self {
        self.is_id = is_id;
        self
    }

    /// Attach a default descriptor. Also sets `has_default_value`.
    pub fn with_default(mut self, default: FieldDefault) -> Self {
        self.default = Some(default);
        self.has_default_value = true;
        self
    }

    /// Whether the store assigns this field with an auto-increment sequence.
    pub fn is_autoincrement(&self) -> bool {
        self.default
            .as_ref()
            .is_some_and(FieldDefault::is_autoincrement)
    }
}

/// Default value descriptor of a field.
///
/// The DMMF encodes database functions as `{ "name": "now", "args": [] }` and
/// literal defaults as plain JSON values.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldDefault {
    /// Function default (`autoincrement()`, `now()`, `uuid()`, ...)
    Function {
        name: String,
        #[serde(default)]
        args: Vec<serde_json::Value>,
    },

    /// Literal default value
    Value(serde_json::Value),
}

impl FieldDefault {
    /// The `autoincrement()` function default.
    pub fn autoincrement() -> Self {
        Self::function("autoincrement")
    }

    /// A function default without arguments.
    pub fn function(name: impl Into<String>) -> Self {
        FieldDefault::Function {
            name: name.into(),
            args: Vec::new(),
        }
    }

    /// A literal default value.
    pub fn value(value: impl Into<serde_json::Value>) -> Self {
        FieldDefault::Value(value.into())
    }

    pub fn is_autoincrement(&self) -> bool {
        matches!(self, FieldDefault::Function { name, .. } if name == "autoincrement")
    }
}

/// An enumeration with its ordered value names.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Enum {
    pub name: String,

    #[serde(default)]
    pub values: Vec<EnumValue>,
}

impl Enum {
    /// Create an enum from value names.
    pub fn new<I, S>(name: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: name.into(),
            values: values.into_iter().map(EnumValue::new).collect(),
        }
    }
}

/// A single enum value.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct EnumValue {
    pub name: String,
}

impl EnumValue {
    pub fn new(name: impl Into<String>) -> Self {
        Self { name: name.into() }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const DMMF: &str = r#"{
        "datamodel": {
            "models": [
                {
                    "name": "User",
                    "dbName": null,
                    "fields": [
                        {
                            "name": "id",
                            "kind": "scalar",
                            "isList": false,
                            "isRequired": true,
                            "isUnique": false,
                            "isId": true,
                            "isReadOnly": false,
                            "hasDefaultValue": true,
                            "type": "Int",
                            "default": { "name": "autoincrement", "args": [] }
                        },
                        {
                            "name": "role",
                            "kind": "enum",
                            "isList": false,
                            "isRequired": true,
                            "isId": false,
                            "hasDefaultValue": true,
                            "type": "Role",
                            "default": "USER"
                        }
                    ],
                    "primaryKey": null,
                    "uniqueFields": []
                }
            ],
            "enums": [
                { "name": "Role", "values": [{ "name": "USER", "dbName": null }, { "name": "ADMIN", "dbName": null }] }
            ],
            "types": []
        },
        "schema": {},
        "mappings": {}
    }"#;

    #[test]
    fn test_parse_full_dmmf() {
        let doc = Document::from_json(DMMF).unwrap();
        assert_eq!(doc.models.len(), 1);
        assert_eq!(doc.enums.len(), 1);

        let user = doc.find_model("User").unwrap();
        assert_eq!(user.fields[0].name, "id");
        assert!(user.fields[0].is_id);
        assert!(user.fields[0].is_autoincrement());
        assert_eq!(
            user.fields[1].default,
            Some(FieldDefault::value("USER"))
        );
        assert!(!user.fields[1].is_autoincrement());

        let role = doc.find_enum("Role").unwrap();
        assert_eq!(role.values, vec![EnumValue::new("USER"), EnumValue::new("ADMIN")]);
    }

    #[test]
    fn test_parse_bare_datamodel() {
        let json = r#"{ "models": [{ "name": "Tag", "fields": [] }] }"#;
        let doc = Document::from_json(json).unwrap();
        assert_eq!(doc.model_names(), vec!["Tag".to_string()]);
        assert!(doc.enums.is_empty());
    }

    #[test]
    fn test_parse_invalid_json() {
        let error = Document::from_json("{ not json").unwrap_err();
        assert!(error.to_string().contains("line 1"), "{}", error);

        let error = Document::from_json(r#"{ "enums": [] }"#).unwrap_err();
        assert!(error.to_string().contains("missing field `models`"), "{}", error);
    }

    #[test]
    fn test_parse_error_names_missing_field() {
        let json = r#"{"datamodel":{"models":[{"name":"User","fields":[{"name":"id","isId":true}]}],"enums":[]}}"#;
        let error = Document::from_json(json).unwrap_err();
        assert!(error.to_string().contains("missing field `type`"), "{}", error);
        assert!(!error.to_string().contains("untagged"), "{}", error);
    }

    #[test]
    fn test_parse_error_inside_datamodel_is_not_masked() {
        let error = Document::from_json(r#"{ "datamodel": { "models": 3 } }"#).unwrap_err();
        assert!(error.to_string().contains("invalid type: integer `3`"), "{}", error);
    }

    #[test]
    fn test_field_builder() {
        let field = Field::new("id", "Int")
            .with_id(true)
            .with_default(FieldDefault::autoincrement());
        assert!(field.is_required);
        assert!(field.has_default_value);
        assert!(field.is_autoincrement());

        let field = Field::new("createdAt", "DateTime").with_default(FieldDefault::function("now"));
        assert!(!field.is_autoincrement());
    }

    #[test]
    fn test_lookup_misses() {
        let doc = Document::new(vec![Model::new("User", vec![])], vec![Enum::new("Role", ["A"])]);
        assert!(doc.find_model("Role").is_none());
        assert!(doc.find_enum("User").is_none());
        assert!(doc.find_model("Post").is_none());
    }
}
