//! TypeBox code emitter.
//!
//! Renders resolved schema trees and enums into TypeScript source text.
//!
//! # Output layout
//!
//! Every rendered file has the same three sections separated by blank lines:
//!
//! - import statements, one per line
//! - the exported schema const (`export const User = Type.Object(...)`)
//! - the exported static type alias (`export type UserType = Static<typeof User>`)
//!
//! Object schemas always carry their `$id` and `additionalProperties: false`.

use crate::generator::traits::{GeneratorConfig, IndentStyle, LineEnding};
use crate::ir::{Enum, Expr, FieldNode, ObjectSchema};

use super::model::SchemaVariant;
use super::type_mapper::TypeBoxTypeMapper;

/// TypeBox source emitter.
///
/// # Example
///
/// ```rust,ignore
/// use prisma_typebox::generator::GeneratorConfig;
/// use prisma_typebox::generator::typebox::TypeBoxEmitter;
///
/// let emitter = TypeBoxEmitter::from_config(&GeneratorConfig::default());
/// let source = emitter.render_enum(&role, &imports);
/// ```
#[derive(Debug, Clone, Default)]
pub struct TypeBoxEmitter {
    /// Type mapper for scalar leaves
    type_mapper: TypeBoxTypeMapper,

    indent: IndentStyle,
    line_ending: LineEnding,
}

impl TypeBoxEmitter {
    /// Create an emitter with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an emitter honouring the formatting options and scalar
    /// overrides of `config`.
    pub fn from_config(config: &GeneratorConfig) -> Self {
        Self {
            type_mapper: TypeBoxTypeMapper::with_overrides(config.type_overrides.clone()),
            indent: config.indent,
            line_ending: config.line_ending,
        }
    }

    /// Create an emitter with a custom type mapper.
    pub fn with_type_mapper(mut self, type_mapper: TypeBoxTypeMapper) -> Self {
        self.type_mapper = type_mapper;
        self
    }

    // =========================================================================
    // Expressions
    // =========================================================================

    /// Render an expression nested `depth` levels deep.
    pub fn render_expr(&self, expr: &Expr, depth: usize) -> String {
        match expr {
            Expr::Scalar(scalar) => self.type_mapper.map_scalar(*scalar).to_string(),
            Expr::Placeholder(name) => format!("::{}::", name),
            Expr::EnumRef(name) => name.clone(),
            Expr::Array(inner) => format!("Type.Array({})", self.render_expr(inner, depth)),
            Expr::Optional(inner) => format!("Type.Optional({})", self.render_expr(inner, depth)),
            Expr::Object(object) => self.render_object(object, depth),
        }
    }

    /// Render a `name: expression` entry.
    pub fn render_field(&self, field: &FieldNode, depth: usize) -> String {
        format!("{}: {}", field.name, self.render_expr(&field.expr, depth))
    }

    /// Render an object schema whose closing brace sits at `depth`.
    pub fn render_object(&self, object: &ObjectSchema, depth: usize) -> String {
        let inner = self.indent.indent(depth + 1);
        let outer = self.indent.indent(depth);

        let properties = if object.fields.is_empty() {
            "{}".to_string()
        } else {
            let mut properties = String::from("{\n");
            for field in &object.fields {
                properties.push_str(&inner);
                properties.push_str(&self.render_field(field, depth + 1));
                properties.push_str(",\n");
            }
            properties.push_str(&outer);
            properties.push('}');
            properties
        };

        format!(
            "Type.Object({}, {{\n{inner}$id: '#{}',\n{inner}additionalProperties: {},\n{outer}}})",
            properties,
            escape_string(&object.id),
            object.additional_properties,
            inner = inner,
            outer = outer,
        )
    }

    // =========================================================================
    // Files
    // =========================================================================

    /// Render the source file of one model schema variant.
    pub fn render_model(
        &self,
        model_name: &str,
        variant: SchemaVariant,
        schema: &ObjectSchema,
        imports: &[String],
    ) -> String {
        let export_name = format!("{}{}", model_name, variant.export_suffix());
        let body = format!(
            "export const {} = {}\n\nexport type {}Type = Static<typeof {}>",
            export_name,
            self.render_object(schema, 0),
            export_name,
            export_name
        );
        self.render_file(imports, &body)
    }

    /// Render the source file of an enum.
    pub fn render_enum(&self, enumeration: &Enum, imports: &[String]) -> String {
        let name = &enumeration.name;
        let indent = self.indent.indent(1);

        let mut constant = format!("const {}Const = {{\n", name);
        for value in &enumeration.values {
            constant.push_str(&format!(
                "{}{}: Type.Literal('{}'),\n",
                indent,
                value.name,
                escape_string(&value.name)
            ));
        }
        constant.push('}');

        let body = format!(
            "{}\n\nexport const {name} = Type.KeyOf(Type.Object({name}Const, {{ $id: '#{id}', additionalProperties: false }}))\n\nexport type {name}Type = Static<typeof {name}>",
            constant,
            name = name,
            id = escape_string(name),
        );
        self.render_file(imports, &body)
    }

    fn render_file(&self, imports: &[String], body: &str) -> String {
        let mut out = String::new();
        if !imports.is_empty() {
            out.push_str(&imports.join("\n"));
            out.push_str("\n\n");
        }
        out.push_str(body);
        out.push('\n');
        self.line_ending.apply(out)
    }
}

/// Escape a string for use inside a single-quoted TypeScript literal.
fn escape_string(s: &str) -> String {
    s.replace('\\', "\\\\")
        .replace('\'', "\\'")
        .replace('\n', "\\n")
        .replace('\r', "\\r")
        .replace('\t', "\\t")
}
