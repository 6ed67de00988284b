//! Output planning for generated schemas.
//!
//! This module runs the TypeBox generator over a document and maps every
//! generated entity to the files it is written to.

use std::path::{Path, PathBuf};

use prisma_typebox::{CodeGenerator, Document, GeneratedEntity, TypeBoxGenerator};
use tracing::warn;

use crate::config::Config;

/// A file to be written.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OutputFile {
    /// Destination path.
    pub path: PathBuf,

    /// File content.
    pub content: String,
}

/// Generated output for a whole document.
#[derive(Debug, Clone)]
pub struct GeneratedOutput {
    /// Files in entity order, canonical before input.
    pub files: Vec<OutputFile>,

    /// Generated entities.
    pub entities: Vec<GeneratedEntity>,
}

impl GeneratedOutput {
    /// Number of (entity, reference) pairs left unresolved.
    pub fn unresolved_count(&self) -> usize {
        self.entities.iter().map(|e| e.unresolved.len()).sum()
    }
}

/// Schema generator driving the TypeBox backend.
pub struct SchemaGenerator {
    config: Config,
    backend: TypeBoxGenerator,
}

impl SchemaGenerator {
    /// Create a new schema generator with the given configuration.
    pub fn new(config: Config) -> Self {
        Self {
            config,
            backend: TypeBoxGenerator::new(),
        }
    }

    /// Generate every file for `document`.
    pub fn generate(&self, document: &Document) -> GeneratedOutput {
        let generator_config = self.config.to_generator_config();
        let entities = self.backend.generate(document, &generator_config);

        let mut files = Vec::with_capacity(entities.len() * 2);
        for entity in &entities {
            for reference in &entity.unresolved {
                warn!(entity = %entity.name, reference = %reference, "unresolved reference in output");
            }

            files.push(OutputFile {
                path: self.path_for(&entity.name),
                content: entity.canonical.clone(),
            });
            if let Some(input) = &entity.input {
                let name = format!("{}{}", entity.name, self.config.output.input_suffix);
                files.push(OutputFile {
                    path: self.path_for(&name),
                    content: input.clone(),
                });
            }
        }

        GeneratedOutput { files, entities }
    }

    fn path_for(&self, stem: &str) -> PathBuf {
        output_path(&self.config.output.dir, stem, self.backend.file_extension())
    }
}

fn output_path(dir: &Path, stem: &str, extension: &str) -> PathBuf {
    dir.join(format!("{}.{}", stem, extension))
}
