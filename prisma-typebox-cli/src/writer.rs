//! File writer for outputting generated schemas.
//!
//! Writes generated TypeScript files to disk, with support for dry-run mode
//! and for checking files on disk against freshly generated content.

use std::path::{Path, PathBuf};

use tracing::debug;

use crate::error::{CliResult, WriteError};
use crate::generator::OutputFile;

/// Result of a write operation.
#[derive(Debug)]
pub enum WriteResult {
    /// File was written successfully.
    Written {
        /// Path to the written file.
        path: PathBuf,
        /// Number of bytes written.
        bytes: usize,
    },
    /// Dry run - content was not written.
    DryRun {
        /// Content that would have been written.
        content: String,
        /// Path where content would have been written.
        path: PathBuf,
    },
}

/// State of a generated file relative to the disk.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileStatus {
    UpToDate,
    Stale,
    Missing,
}

/// File writer with dry-run support.
#[derive(Debug)]
pub struct FileWriter {
    /// Whether to run in dry-run mode.
    dry_run: bool,
}

impl FileWriter {
    /// Create a new file writer.
    pub fn new(dry_run: bool) -> Self {
        Self { dry_run }
    }

    /// Write content to a file.
    ///
    /// In dry-run mode, returns the content without writing.
    pub fn write(&self, path: &Path, content: &str) -> CliResult<WriteResult> {
        if self.dry_run {
            return Ok(WriteResult::DryRun {
                content: content.to_string(),
                path: path.to_path_buf(),
            });
        }

        if let Some(parent) = path.parent() {
            if !parent.as_os_str().is_empty() && !parent.exists() {
                std::fs::create_dir_all(parent).map_err(|e| WriteError::CreateDir {
                    path: parent.to_path_buf(),
                    source: e,
                })?;
            }
        }

        std::fs::write(path, content).map_err(|e| WriteError::WriteFile {
            path: path.to_path_buf(),
            source: e,
        })?;

        debug!(path = %path.display(), bytes = content.len(), "wrote file");
        Ok(WriteResult::Written {
            path: path.to_path_buf(),
            bytes: content.len(),
        })
    }

    /// Write every generated file, stopping at the first failure.
    pub fn write_all(&self, files: &[OutputFile]) -> CliResult<Vec<WriteResult>> {
        files
            .iter()
            .map(|file| self.write(&file.path, &file.content))
            .collect()
    }

    /// Check if running in dry-run mode.
    pub fn is_dry_run(&self) -> bool {
        self.dry_run
    }
}

/// Compare a generated file with the one on disk.
pub fn check_file(file: &OutputFile) -> CliResult<FileStatus> {
    if !file.path.exists() {
        return Ok(FileStatus::Missing);
    }
    let existing = std::fs::read_to_string(&file.path)?;
    if existing.trim_end() == file.content.trim_end() {
        Ok(FileStatus::UpToDate)
    } else {
        Ok(FileStatus::Stale)
    }
}

impl WriteResult {
    /// Get the path associated with this result.
    pub fn path(&self) -> &Path {
        match self {
            WriteResult::Written { path, .. } => path,
            WriteResult::DryRun { path, .. } => path,
        }
    }

    /// Check if the write was successful (not dry-run).
    pub fn was_written(&self) -> bool {
        matches!(self, WriteResult::Written { .. })
    }

    /// Get the number of bytes written (0 for dry-run).
    pub fn bytes(&self) -> usize {
        match self {
            WriteResult::Written { bytes, .. } => *bytes,
            WriteResult::DryRun { .. } => 0,
        }
    }
}
