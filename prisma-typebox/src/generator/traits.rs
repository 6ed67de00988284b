//! Code generator trait definition.
//!
//! This module defines the `CodeGenerator` trait that schema backends
//! implement, together with the configuration and output records shared by
//! every backend.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::ir::Document;

/// Trait for schema code generators.
///
/// A generator turns a whole [`Document`] into one [`GeneratedEntity`] per
/// model and enum.
///
/// # Example
///
/// ```rust,ignore
/// use prisma_typebox::generator::{CodeGenerator, GeneratorConfig};
/// use prisma_typebox::generator::typebox::TypeBoxGenerator;
///
/// let generator = TypeBoxGenerator::new();
/// let entities = generator.generate(&document, &GeneratorConfig::default());
/// for entity in entities {
///     println!("{}.{}", entity.name, generator.file_extension());
/// }
/// ```
pub trait CodeGenerator: Send + Sync {
    /// Returns the unique identifier for this generator (e.g. "typebox").
    fn id(&self) -> &'static str;

    /// Returns the human-readable name of this generator.
    fn name(&self) -> &'static str;

    /// Returns the file extension for generated files.
    fn file_extension(&self) -> &'static str;

    /// Generate source text for every model and enum of the document.
    ///
    /// Models come first, in declaration order, followed by enums.
    fn generate(&self, document: &Document, config: &GeneratorConfig) -> Vec<GeneratedEntity>;
}

/// Default import path of the TypeBox library.
pub const DEFAULT_LIBRARY: &str = "@sinclair/typebox";

/// Generator configuration options.
#[derive(Debug, Clone, PartialEq)]
pub struct GeneratorConfig {
    /// Module the `Type` and `Static` helpers are imported from
    pub library: String,

    /// Prefix of enum module paths (`import { Role } from './Role'`)
    pub enum_import_prefix: String,

    /// Indentation style
    pub indent: IndentStyle,

    /// Line ending style
    pub line_ending: LineEnding,

    /// Custom scalar mappings (Prisma scalar tag -> TypeBox expression)
    pub type_overrides: HashMap<String, String>,
}

impl Default for GeneratorConfig {
    fn default() -> Self {
        Self {
            library: DEFAULT_LIBRARY.to_string(),
            enum_import_prefix: "./".to_string(),
            indent: IndentStyle::default(),
            line_ending: LineEnding::default(),
            type_overrides: HashMap::new(),
        }
    }
}

impl GeneratorConfig {
    /// Create a new generator config with default settings.
    pub fn new() -> Self {
        Self::default()
    }

    /// Set the library import path.
    pub fn with_library(mut self, library: impl Into<String>) -> Self {
        self.library = library.into();
        self
    }

    /// Set the enum module prefix.
    pub fn with_enum_import_prefix(mut self, prefix: impl Into<String>) -> Self {
        self.enum_import_prefix = prefix.into();
        self
    }

    /// Set the indentation style.
    pub fn with_indent(mut self, indent: IndentStyle) -> Self {
        self.indent = indent;
        self
    }

    /// Set the line ending style.
    pub fn with_line_ending(mut self, line_ending: LineEnding) -> Self {
        self.line_ending = line_ending;
        self
    }

    /// Add a custom scalar mapping.
    pub fn with_type_override(
        mut self,
        scalar_tag: impl Into<String>,
        expression: impl Into<String>,
    ) -> Self {
        self.type_overrides
            .insert(scalar_tag.into(), expression.into());
        self
    }

    /// The library entry import included in every generated file.
    pub fn library_import(&self) -> String {
        format!("import {{ Type, Static }} from '{}'", self.library)
    }

    /// Import statement for an enum module.
    pub fn enum_import(&self, enum_name: &str) -> String {
        format!(
            "import {{ {} }} from '{}{}'",
            enum_name, self.enum_import_prefix, enum_name
        )
    }
}

/// Indentation style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IndentStyle {
    /// Use tabs for indentation
    #[default]
    Tabs,

    /// Use 2 spaces for indentation
    Spaces2,

    /// Use 4 spaces for indentation
    Spaces4,
}

impl IndentStyle {
    /// Get the indentation string.
    pub fn as_str(&self) -> &str {
        match self {
            IndentStyle::Tabs => "\t",
            IndentStyle::Spaces2 => "  ",
            IndentStyle::Spaces4 => "    ",
        }
    }

    /// Create an indentation string for the given depth.
    pub fn indent(&self, depth: usize) -> String {
        self.as_str().repeat(depth)
    }
}

/// Line ending style for generated code.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum LineEnding {
    /// Unix-style line endings (LF)
    #[default]
    Lf,

    /// Windows-style line endings (CRLF)
    CrLf,
}

impl LineEnding {
    /// Get the line ending string.
    pub fn as_str(&self) -> &str {
        match self {
            LineEnding::Lf => "\n",
            LineEnding::CrLf => "\r\n",
        }
    }

    /// Convert text rendered with `\n` to this line ending.
    pub fn apply(&self, text: String) -> String {
        match self {
            LineEnding::Lf => text,
            LineEnding::CrLf => text.replace('\n', "\r\n"),
        }
    }
}

/// Kind of entity a [`GeneratedEntity`] was produced from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EntityKind {
    Model,
    Enum,
}

/// Generated output for one model or enum.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct GeneratedEntity {
    /// Model or enum name
    pub name: String,

    pub kind: EntityKind,

    /// Canonical schema source
    pub canonical: String,

    /// Input-variant schema source (models only)
    pub input: Option<String>,

    /// Enums imported by this entity
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub enum_imports: Vec<String>,

    /// References that matched neither a model nor an enum
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub unresolved: Vec<String>,
}

impl GeneratedEntity {
    /// Create a model entity.
    pub fn model(name: impl Into<String>, canonical: String, input: String) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Model,
            canonical,
            input: Some(input),
            enum_imports: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    /// Create an enum entity.
    pub fn enumeration(name: impl Into<String>, canonical: String) -> Self {
        Self {
            name: name.into(),
            kind: EntityKind::Enum,
            canonical,
            input: None,
            enum_imports: Vec::new(),
            unresolved: Vec::new(),
        }
    }

    /// Set the imported enums.
    pub fn with_enum_imports(mut self, enum_imports: Vec<String>) -> Self {
        self.enum_imports = enum_imports;
        self
    }

    /// Set the unresolved references.
    pub fn with_unresolved(mut self, unresolved: Vec<String>) -> Self {
        self.unresolved = unresolved;
        self
    }

    /// Check if this entity has an input variant.
    pub fn has_input(&self) -> bool {
        self.input.is_some()
    }

    /// Check if every reference was resolved.
    pub fn is_fully_resolved(&self) -> bool {
        self.unresolved.is_empty()
    }
}
