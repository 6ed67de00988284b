//! Document transformation.
//!
//! Drives the pipeline over a whole [`Document`]: every model is transformed,
//! resolved and rendered twice (canonical and input), then every enum is
//! rendered once.

use tracing::debug;

use crate::generator::traits::{CodeGenerator, GeneratedEntity, GeneratorConfig};
use crate::ir::{Document, Enum, Model};

use super::emitter::TypeBoxEmitter;
use super::model::{transform_model, DependencyCounter, SchemaVariant};
use super::resolver::DependencyResolver;

/// TypeBox schema generator.
///
/// # Example
///
/// ```rust,ignore
/// use prisma_typebox::generator::{CodeGenerator, GeneratorConfig};
/// use prisma_typebox::generator::typebox::TypeBoxGenerator;
///
/// let entities = TypeBoxGenerator::new().generate(&document, &GeneratorConfig::default());
/// ```
#[derive(Debug, Clone, Copy, Default)]
pub struct TypeBoxGenerator;

impl TypeBoxGenerator {
    pub fn new() -> Self {
        Self
    }

    fn generate_model(
        &self,
        model: &Model,
        resolver: &DependencyResolver<'_>,
        emitter: &TypeBoxEmitter,
        config: &GeneratorConfig,
        counter: &mut DependencyCounter,
    ) -> GeneratedEntity {
        let fragment = transform_model(model, None, counter);
        let resolved = resolver.resolve(model, fragment, counter);

        let mut imports = ImportSet::new(config);
        for name in &resolved.enum_imports {
            imports.add_enum(name);
        }
        let imports = imports.into_lines();

        let canonical =
            emitter.render_model(&model.name, SchemaVariant::Canonical, &resolved.canonical, &imports);
        let input =
            emitter.render_model(&model.name, SchemaVariant::Input, &resolved.input, &imports);

        debug!(
            model = %model.name,
            inlined = resolved.inlined.len(),
            enums = resolved.enum_imports.len(),
            "generated model schemas"
        );

        GeneratedEntity::model(model.name.as_str(), canonical, input)
            .with_enum_imports(resolved.enum_imports)
            .with_unresolved(resolved.unresolved)
    }

    fn generate_enum(
        &self,
        enumeration: &Enum,
        emitter: &TypeBoxEmitter,
        config: &GeneratorConfig,
    ) -> GeneratedEntity {
        let imports = ImportSet::new(config).into_lines();
        let canonical = emitter.render_enum(enumeration, &imports);
        debug!(
            enumeration = %enumeration.name,
            values = enumeration.values.len(),
            "generated enum schema"
        );
        GeneratedEntity::enumeration(enumeration.name.as_str(), canonical)
    }
}

impl CodeGenerator for TypeBoxGenerator {
    fn id(&self) -> &'static str {
        "typebox"
    }

    fn name(&self) -> &'static str {
        "TypeBox Schema Generator"
    }

    fn file_extension(&self) -> &'static str {
        "ts"
    }

    fn generate(&self, document: &Document, config: &GeneratorConfig) -> Vec<GeneratedEntity> {
        let emitter = TypeBoxEmitter::from_config(config);
        let resolver = DependencyResolver::new(document);
        let mut counter = DependencyCounter::new();

        let mut entities = Vec::with_capacity(document.models.len() + document.enums.len());
        for model in &document.models {
            entities.push(self.generate_model(model, &resolver, &emitter, config, &mut counter));
        }
        for enumeration in &document.enums {
            entities.push(self.generate_enum(enumeration, &emitter, config));
        }
        entities
    }
}

/// Deduplicated, insertion-ordered import lines of one generated file.
///
/// The library import is always the first line.
#[derive(Debug, Clone)]
struct ImportSet<'a> {
    config: &'a GeneratorConfig,
    lines: Vec<String>,
}

impl<'a> ImportSet<'a> {
    fn new(config: &'a GeneratorConfig) -> Self {
        Self {
            config,
            lines: vec![config.library_import()],
        }
    }

    fn add_enum(&mut self, name: &str) {
        let line = self.config.enum_import(name);
        if !self.lines.contains(&line) {
            self.lines.push(line);
        }
    }

    fn into_lines(self) -> Vec<String> {
        self.lines
    }
}
