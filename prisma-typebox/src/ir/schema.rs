//! Object-schema tree.
//!
//! Models are first transformed into this tree; relations are left as
//! [`Expr::Placeholder`] nodes until the dependency resolver replaces them
//! with an inlined [`ObjectSchema`] or an enum identifier. Only the emitter
//! turns the tree into text.

use serde::{Deserialize, Serialize};

use super::types::ScalarType;

/// A schema expression.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value")]
pub enum Expr {
    /// Mapped scalar (`Type.String()`, `Type.Number()`, ...)
    Scalar(ScalarType),

    /// Unresolved reference to a model or enum by name
    Placeholder(String),

    /// Resolved enum, rendered as the enum's identifier
    EnumRef(String),

    /// `Type.Array(...)`
    Array(Box<Expr>),

    /// `Type.Optional(...)`
    Optional(Box<Expr>),

    /// Inlined object schema
    Object(Box<ObjectSchema>),
}

impl Expr {
    /// Wrap in `Type.Array(...)`.
    pub fn array(inner: Expr) -> Self {
        Expr::Array(Box::new(inner))
    }

    /// Wrap in `Type.Optional(...)`.
    pub fn optional(inner: Expr) -> Self {
        Expr::Optional(Box::new(inner))
    }

    pub fn is_optional(&self) -> bool {
        matches!(self, Expr::Optional(_))
    }

    /// Whether this expression holds a placeholder for `name`, at any depth.
    pub fn references(&self, name: &str) -> bool {
        match self {
            Expr::Placeholder(n) => n == name,
            Expr::Array(inner) | Expr::Optional(inner) => inner.references(name),
            Expr::Object(object) => object.fields.iter().any(|f| f.expr.references(name)),
            Expr::Scalar(_) | Expr::EnumRef(_) => false,
        }
    }

    /// Collect placeholder names in first-seen order.
    pub fn collect_placeholders(&self, out: &mut References) {
        match self {
            Expr::Placeholder(name) => out.insert(name.clone()),
            Expr::Array(inner) | Expr::Optional(inner) => inner.collect_placeholders(out),
            Expr::Object(object) => object.collect_placeholders(out),
            Expr::Scalar(_) | Expr::EnumRef(_) => {}
        }
    }

    /// Replace every placeholder for `name` with `replacement`.
    ///
    /// Returns the number of replaced nodes.
    pub fn substitute(&mut self, name: &str, replacement: &Expr) -> usize {
        match self {
            Expr::Placeholder(n) if n == name => {
                *self = replacement.clone();
                1
            }
            Expr::Array(inner) | Expr::Optional(inner) => inner.substitute(name, replacement),
            Expr::Object(object) => object.substitute(name, replacement),
            _ => 0,
        }
    }
}

/// A `name: <expr>` entry of an object schema.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FieldNode {
    pub name: String,
    pub expr: Expr,
}

impl FieldNode {
    pub fn new(name: impl Into<String>, expr: Expr) -> Self {
        Self {
            name: name.into(),
            expr,
        }
    }
}

/// `Type.Object({ ... }, { $id, additionalProperties })`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ObjectSchema {
    /// Value of the `$id` option, without the leading `#`
    pub id: String,

    /// Fields in declaration order
    pub fields: Vec<FieldNode>,

    /// Whether undeclared properties are accepted
    #[serde(default)]
    pub additional_properties: bool,
}

impl ObjectSchema {
    /// Create a closed object schema (`additionalProperties: false`).
    pub fn new(id: impl Into<String>, fields: Vec<FieldNode>) -> Self {
        Self {
            id: id.into(),
            fields,
            additional_properties: false,
        }
    }

    /// Find a field by name.
    pub fn field(&self, name: &str) -> Option<&FieldNode> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Whether any field references `name`.
    pub fn references(&self, name: &str) -> bool {
        self.fields.iter().any(|f| f.expr.references(name))
    }

    /// Collect placeholder names of all fields in first-seen order.
    pub fn collect_placeholders(&self, out: &mut References) {
        for field in &self.fields {
            field.expr.collect_placeholders(out);
        }
    }

    /// Placeholder names still present in this schema.
    pub fn placeholders(&self) -> References {
        let mut refs = References::new();
        self.collect_placeholders(&mut refs);
        refs
    }

    /// Replace every placeholder for `name` with `replacement`.
    pub fn substitute(&mut self, name: &str, replacement: &Expr) -> usize {
        self.fields
            .iter_mut()
            .map(|f| f.expr.substitute(name, replacement))
            .sum()
    }
}

/// Ordered set of referenced model/enum names.
///
/// Iteration follows insertion order, which keeps the dependency numbering
/// stable across runs.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct References(Vec<String>);

impl References {
    pub fn new() -> Self {
        Self::default()
    }

    /// Insert a name unless it is already present.
    pub fn insert(&mut self, name: impl Into<String>) {
        let name = name.into();
        if !self.0.contains(&name) {
            self.0.push(name);
        }
    }

    pub fn extend(&mut self, other: References) {
        for name in other.0 {
            self.insert(name);
        }
    }

    pub fn contains(&self, name: &str) -> bool {
        self.0.iter().any(|n| n == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.0.iter().map(String::as_str)
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl<S: Into<String>> FromIterator<S> for References {
    fn from_iter<I: IntoIterator<Item = S>>(iter: I) -> Self {
        let mut refs = References::new();
        for name in iter {
            refs.insert(name);
        }
        refs
    }
}
