//! DMMF document loading.

use std::path::Path;

use prisma_typebox::Document;
use tracing::debug;

use crate::error::{CliResult, LoadError};

/// Read and parse a DMMF JSON file.
pub fn load_document(path: &Path) -> CliResult<Document> {
    if !path.exists() {
        return Err(LoadError::not_found(path.to_path_buf()).into());
    }

    let content = std::fs::read_to_string(path).map_err(|e| LoadError::Io {
        path: path.to_path_buf(),
        source: e,
    })?;

    let document = Document::from_json(&content).map_err(|e| LoadError::Invalid {
        path: path.to_path_buf(),
        source: e,
    })?;

    debug!(
        path = %path.display(),
        models = document.models.len(),
        enums = document.enums.len(),
        "loaded document"
    );
    Ok(document)
}
