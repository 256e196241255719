//! Command-line driver.
//!
//! Maps flags (with environment fallbacks) onto a [`GeneratorConfig`] and
//! runs one generation.

use std::io::Write;
use std::path::PathBuf;

use anyhow::Context;
use clap::Parser;
use plainrec_codegen::{Generator, GeneratorConfig};

/// Command-line arguments.
#[derive(Debug, Clone, Parser)]
#[command(name = "plainrec")]
#[command(about = "Generate a plain record from a struct with nullable fields", long_about = None)]
pub struct Cli {
    /// Name of the struct to target
    #[arg(short = 't', long = "type", value_name = "NAME")]
    pub type_name: String,

    /// Directory of the module declaring the struct
    #[arg(
        short = 'd',
        long = "dir",
        value_name = "DIR",
        env = "PLAINREC_DIR",
        default_value = "."
    )]
    pub dir: PathBuf,

    /// Base file the generated unit is named after (`user.rs` -> `user_gen.rs`)
    #[arg(
        short = 'o',
        long = "out",
        value_name = "FILE",
        env = "PLAINREC_OUT",
        required_unless_present = "dry_run"
    )]
    pub out: Option<PathBuf>,

    /// Path of the source module as seen from the generated module
    #[arg(long = "source-module", value_name = "PATH", default_value = "super")]
    pub source_module: String,

    /// Trait to derive on the plain record (repeatable)
    #[arg(long = "derive", value_name = "TRAIT")]
    pub derives: Vec<String>,

    /// Print the generated unit instead of writing it
    #[arg(long = "dry-run")]
    pub dry_run: bool,
}

impl Cli {
    /// Builds the generator configuration from the arguments.
    #[must_use]
    pub fn config(&self) -> GeneratorConfig {
        self.derives.iter().fold(
            GeneratorConfig::new().source_module(self.source_module.as_str()),
            |config, derive| config.derive(derive.as_str()),
        )
    }
}

/// Runs one generation.
///
/// Returns the written path, or `None` for a dry run.
///
/// # Errors
/// Returns an error if generation or writing fails.
pub fn run(cli: &Cli, stdout: &mut impl Write) -> anyhow::Result<Option<PathBuf>> {
    let generator = Generator::new(cli.config());

    if cli.dry_run {
        let unit = generator
            .generate(&cli.dir, &cli.type_name)
            .with_context(|| format!("failed to generate {}", cli.type_name))?;
        stdout.write_all(unit.render().as_bytes())?;
        return Ok(None);
    }

    let out = cli
        .out
        .as_deref()
        .context("--out (or PLAINREC_OUT) is required unless --dry-run is set")?;
    let path = generator
        .generate_to(&cli.dir, &cli.type_name, out)
        .with_context(|| format!("failed to generate {}", cli.type_name))?;
    tracing::info!("Generated {} into {}", cli.type_name, path.display());
    Ok(Some(path))
}
