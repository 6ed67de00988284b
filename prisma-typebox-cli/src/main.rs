//! # prisma-typebox
//!
//! CLI tool for generating TypeBox schemas from Prisma DMMF documents.
//!
//! ## Usage
//!
//! ```bash
//! # Generate schemas into ./generated
//! prisma-typebox generate --input dmmf.json
//!
//! # Generate into a specific directory
//! prisma-typebox generate --input dmmf.json --output ./src/schemas
//!
//! # Name input files PostCreate.ts and import from another module
//! prisma-typebox generate --input dmmf.json --input-suffix Create --library typebox
//!
//! # Preview without writing
//! prisma-typebox generate --input dmmf.json --dry-run
//!
//! # Initialize configuration
//! prisma-typebox init
//!
//! # Check that generated files are up to date
//! prisma-typebox validate --input dmmf.json
//! ```

use std::path::{Path, PathBuf};
use std::process::ExitCode;

use clap::{Args, Parser, Subcommand};
use colored::Colorize;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

use prisma_typebox_cli::{
    config::{CliArgs, Config, ConfigManager},
    error::CliError,
    generator::SchemaGenerator,
    loader::load_document,
    writer::{check_file, FileStatus, FileWriter, WriteResult},
};

#[derive(Parser)]
#[command(name = "prisma-typebox")]
#[command(author, version, about = "Generate TypeBox schemas from Prisma DMMF documents", long_about = None)]
struct Cli {
    /// Enable debug logging
    #[arg(short, long, global = true)]
    verbose: bool,

    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Generate TypeBox schemas from a DMMF document
    Generate {
        /// DMMF JSON document
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        overrides: Overrides,

        /// Preview changes without writing files
        #[arg(long)]
        dry_run: bool,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },

    /// Initialize a new prisma-typebox configuration file
    Init {
        /// Output path for configuration file
        #[arg(short, long, default_value = "prisma-typebox.toml")]
        output: PathBuf,

        /// Overwrite existing configuration file
        #[arg(long)]
        force: bool,
    },

    /// Validate that generated schemas are up-to-date
    Validate {
        /// DMMF JSON document
        #[arg(short, long)]
        input: PathBuf,

        #[command(flatten)]
        overrides: Overrides,

        /// Configuration file path
        #[arg(short, long)]
        config: Option<PathBuf>,
    },
}

/// Flags shared by `generate` and `validate` that override the config file.
#[derive(Args, Debug)]
struct Overrides {
    /// Output directory for generated TypeScript files
    #[arg(short, long)]
    output: Option<PathBuf>,

    /// Suffix of input-variant file names (default: Input)
    #[arg(long)]
    input_suffix: Option<String>,

    /// Module the Type and Static helpers are imported from
    #[arg(long)]
    library: Option<String>,
}

impl From<Overrides> for CliArgs {
    fn from(overrides: Overrides) -> Self {
        Self {
            output: overrides.output,
            input_suffix: overrides.input_suffix,
            library: overrides.library,
        }
    }
}

fn main() -> ExitCode {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match run(cli) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            print_error(&e);
            match e {
                CliError::Validation(_) => ExitCode::from(2),
                _ => ExitCode::FAILURE,
            }
        }
    }
}

fn init_logging(verbose: bool) {
    let level = if verbose { "debug" } else { "info" };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env().unwrap_or_else(|_| {
                tracing_subscriber::EnvFilter::new(format!(
                    "prisma_typebox={level},prisma_typebox_cli={level}"
                ))
            }),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

fn run(cli: Cli) -> Result<(), CliError> {
    match cli.command {
        Commands::Generate {
            input,
            overrides,
            dry_run,
            config,
        } => cmd_generate(&input, overrides.into(), dry_run, config.as_deref()),

        Commands::Init { output, force } => cmd_init(&output, force),

        Commands::Validate {
            input,
            overrides,
            config,
        } => cmd_validate(&input, overrides.into(), config.as_deref()),
    }
}

fn load_config(config_path: Option<&Path>, args: &CliArgs) -> Result<Config, CliError> {
    let config = ConfigManager::merge_cli_args(ConfigManager::load(config_path)?, args);
    config.validate()?;
    Ok(config)
}

/// Generate command implementation.
fn cmd_generate(
    input: &Path,
    args: CliArgs,
    dry_run: bool,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    let config = load_config(config_path, &args)?;

    println!("{} {}", "Loading".cyan(), input.display());
    let document = load_document(input)?;
    println!(
        "  Found {} model(s) and {} enum(s)",
        document.models.len().to_string().green(),
        document.enums.len().to_string().green()
    );

    println!("{}", "Generating TypeBox schemas...".cyan());
    let generated = SchemaGenerator::new(config).generate(&document);

    let unresolved = generated.unresolved_count();
    if unresolved > 0 {
        println!(
            "{} {} unresolved reference(s) left as placeholders",
            "Warning:".yellow(),
            unresolved
        );
    }

    let writer = FileWriter::new(dry_run);
    for result in writer.write_all(&generated.files)? {
        match result {
            WriteResult::Written { path, bytes } => {
                println!("{} Written {} bytes to {}", "✓".green(), bytes, path.display());
            }
            WriteResult::DryRun { content, path } => {
                println!("{} Would write to {}:", "[dry-run]".yellow(), path.display());
                println!("{}", "─".repeat(60).dimmed());
                println!("{}", content);
                println!("{}", "─".repeat(60).dimmed());
            }
        }
    }

    println!(
        "  Generated {} file(s)",
        generated.files.len().to_string().green()
    );
    Ok(())
}

/// Init command implementation.
fn cmd_init(output: &Path, force: bool) -> Result<(), CliError> {
    if output.exists() && !force {
        println!(
            "{} Configuration file already exists: {}",
            "Error:".red(),
            output.display()
        );
        println!("  Use --force to overwrite");
        return Err(CliError::Validation(
            "Configuration file already exists".to_string(),
        ));
    }

    std::fs::write(output, ConfigManager::default_config_content())?;

    println!(
        "{} Created configuration file: {}",
        "✓".green(),
        output.display()
    );
    Ok(())
}

/// Validate command implementation.
fn cmd_validate(
    input: &Path,
    args: CliArgs,
    config_path: Option<&Path>,
) -> Result<(), CliError> {
    println!("{}", "Validating schemas...".cyan());

    let config = load_config(config_path, &args)?;
    let document = load_document(input)?;
    let generated = SchemaGenerator::new(config).generate(&document);

    let mut outdated = 0;
    for file in &generated.files {
        match check_file(file)? {
            FileStatus::UpToDate => {}
            FileStatus::Stale => {
                outdated += 1;
                println!("  {} {}", "stale".red(), file.path.display());
            }
            FileStatus::Missing => {
                outdated += 1;
                println!("  {} {}", "missing".red(), file.path.display());
            }
        }
    }

    if outdated == 0 {
        println!("{} Schemas are up-to-date", "✓".green());
        Ok(())
    } else {
        println!("{} Schemas are out of date", "✗".red());
        println!("  Run 'prisma-typebox generate' to update");
        Err(CliError::Validation(format!(
            "{} file(s) out of date",
            outdated
        )))
    }
}

/// Print an error with formatting.
fn print_error(error: &CliError) {
    eprintln!("{} {}", "Error:".red().bold(), error);
}

#[cfg(test)]
mod tests {
    use super::*;

    fn overrides_of(argv: &[&str]) -> CliArgs {
        match Cli::try_parse_from(argv).unwrap().command {
            Commands::Generate { overrides, .. } | Commands::Validate { overrides, .. } => {
                overrides.into()
            }
            Commands::Init { .. } => panic!("expected generate or validate"),
        }
    }

    #[test]
    fn test_generate_override_flags() {
        let args = overrides_of(&[
            "prisma-typebox",
            "generate",
            "--input",
            "dmmf.json",
            "--output",
            "out",
            "--input-suffix",
            "Create",
            "--library",
            "typebox",
        ]);
        assert_eq!(args.output, Some(PathBuf::from("out")));
        assert_eq!(args.input_suffix.as_deref(), Some("Create"));
        assert_eq!(args.library.as_deref(), Some("typebox"));
    }

    #[test]
    fn test_validate_override_flags_reach_config() {
        let args = overrides_of(&[
            "prisma-typebox",
            "validate",
            "-i",
            "dmmf.json",
            "--input-suffix",
            "Create",
            "--library",
            "typebox",
        ]);
        let config = load_config(Some(Path::new("missing-prisma-typebox.toml")), &args).unwrap();
        assert_eq!(config.output.input_suffix, "Create");
        assert_eq!(config.generator.library, "typebox");
        assert_eq!(config.output.dir, PathBuf::from("./generated"));
    }

    #[test]
    fn test_empty_input_suffix_flag_is_rejected() {
        let args = overrides_of(&[
            "prisma-typebox",
            "generate",
            "--input",
            "dmmf.json",
            "--input-suffix",
            "",
        ]);
        assert!(load_config(Some(Path::new("missing-prisma-typebox.toml")), &args).is_err());
    }
}
