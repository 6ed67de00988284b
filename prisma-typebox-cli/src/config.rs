//! Configuration management for the CLI.
//!
//! This module handles loading configuration from `prisma-typebox.toml`
//! files and merging with command-line arguments.

use std::collections::HashMap;
use std::path::{Path, PathBuf};

use prisma_typebox::{GeneratorConfig, IndentStyle, LineEnding};
use serde::Deserialize;
use tracing::debug;

use crate::error::{CliResult, ConfigError};

/// Default configuration filename.
pub const CONFIG_FILENAME: &str = "prisma-typebox.toml";

/// Main configuration structure.
#[derive(Debug, Default, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct Config {
    /// Output configuration.
    pub output: OutputConfig,

    /// Generator options.
    pub generator: GeneratorSection,
}

/// Output configuration.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct OutputConfig {
    /// Output directory for generated files.
    pub dir: PathBuf,

    /// Suffix of input-variant file names (`PostInput.ts`).
    pub input_suffix: String,
}

/// Generator options.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct GeneratorSection {
    /// Module the `Type` and `Static` helpers are imported from.
    pub library: String,

    /// Prefix of enum module imports.
    pub enum_import_prefix: String,

    pub indent: IndentStyle,
    pub line_ending: LineEnding,

    /// Scalar tag to TypeBox expression overrides.
    pub type_overrides: HashMap<String, String>,
}

impl Default for OutputConfig {
    fn default() -> Self {
        Self {
            dir: PathBuf::from("./generated"),
            input_suffix: "Input".to_string(),
        }
    }
}

impl Default for GeneratorSection {
    fn default() -> Self {
        let defaults = GeneratorConfig::default();
        Self {
            library: defaults.library,
            enum_import_prefix: defaults.enum_import_prefix,
            indent: defaults.indent,
            line_ending: defaults.line_ending,
            type_overrides: defaults.type_overrides,
        }
    }
}

impl Config {
    /// Check values the file format alone cannot rule out.
    pub fn validate(&self) -> CliResult<()> {
        if self.output.input_suffix.is_empty() {
            return Err(ConfigError::invalid_value(
                "output.input_suffix",
                "must not be empty, input files would overwrite canonical ones",
            )
            .into());
        }
        if self.generator.library.trim().is_empty() {
            return Err(ConfigError::invalid_value("generator.library", "must not be empty").into());
        }
        Ok(())
    }

    /// Core generator configuration for these settings.
    pub fn to_generator_config(&self) -> GeneratorConfig {
        let section = &self.generator;
        let mut config = GeneratorConfig::new()
            .with_library(section.library.as_str())
            .with_enum_import_prefix(section.enum_import_prefix.as_str())
            .with_indent(section.indent)
            .with_line_ending(section.line_ending);
        for (tag, expression) in &section.type_overrides {
            config = config.with_type_override(tag.as_str(), expression.as_str());
        }
        config
    }
}

/// Configuration manager for loading and merging configs.
pub struct ConfigManager;

impl ConfigManager {
    /// Load configuration from a file path.
    ///
    /// If the path is None, attempts to load from the default location.
    /// If no config file exists, returns default configuration.
    pub fn load(path: Option<&Path>) -> CliResult<Config> {
        let config_path = path
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(CONFIG_FILENAME));

        if !config_path.exists() {
            debug!(path = %config_path.display(), "no configuration file, using defaults");
            return Ok(Config::default());
        }

        let content = std::fs::read_to_string(&config_path).map_err(|e| ConfigError::Io {
            path: config_path.clone(),
            source: e,
        })?;

        let config: Config = toml::from_str(&content)
            .map_err(|e| ConfigError::invalid_toml(config_path.clone(), e.to_string()))?;
        config.validate()?;

        debug!(path = %config_path.display(), "loaded configuration");
        Ok(config)
    }

    /// Merge CLI arguments into configuration.
    ///
    /// CLI arguments take precedence over config file values.
    pub fn merge_cli_args(mut config: Config, args: &CliArgs) -> Config {
        if let Some(ref output) = args.output {
            config.output.dir = output.clone();
        }

        if let Some(ref input_suffix) = args.input_suffix {
            config.output.input_suffix = input_suffix.clone();
        }

        if let Some(ref library) = args.library {
            config.generator.library = library.clone();
        }

        config
    }

    /// Generate default configuration file content with comments.
    pub fn default_config_content() -> &'static str {
        r#"# prisma-typebox configuration file

[output]
# Output directory for generated TypeScript files
dir = "./generated"

# Suffix of input-variant files (Post.ts / PostInput.ts)
input_suffix = "Input"

[generator]
# Module providing the Type and Static helpers
library = "@sinclair/typebox"

# Prefix of enum imports (import { Role } from './Role')
enum_import_prefix = "./"

# Indentation: "tabs", "spaces2" or "spaces4"
indent = "tabs"

# Line endings: "lf" or "crlf"
line_ending = "lf"

# Custom scalar mappings
[generator.type_overrides]
# DateTime = "Type.String({ format: 'date-time' })"
"#
    }
}

/// CLI arguments that can override configuration.
#[derive(Debug, Default)]
pub struct CliArgs {
    /// Output directory override.
    pub output: Option<PathBuf>,

    /// Input file suffix override.
    pub input_suffix: Option<String>,

    /// Library import override.
    pub library: Option<String>,
}
