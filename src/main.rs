//! vhal-annotations — generate property lookup tables from VehicleProperty.aidl.
//!
//! Reads the `@change_mode`, `@access`, `@data_enum` and `@unit` annotations
//! on every `VehicleProperty` constant and writes:
//!
//! - `ChangeModeForVehicleProperty` (C++ header and Java class)
//! - `AccessForVehicleProperty` (C++ header and Java class)
//! - `EnumForVehicleProperty` (Java class)
//!
//! With `--check-only` nothing is written; the command fails if any of the
//! committed files is out of date. With `--output-csv` the parsed annotations
//! are exported as CSV instead.

mod error;
mod generate;
mod model;
mod parser;
mod render;
mod targets;

use anyhow::{Context, Result};
use clap::Parser;
use std::fs;
use std::path::{Path, PathBuf};
use tracing::info;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

#[derive(Parser)]
#[command(
    name = "vhal-annotations",
    about = "Generate Java and C++ lookup tables from annotations in VehicleProperty.aidl"
)]
struct Cli {
    /// Root of the Android source tree
    #[arg(long, env = "ANDROID_BUILD_TOP", alias = "android_build_top")]
    android_build_top: PathBuf,

    /// Files modified in the pending change. If VehicleProperty.aidl is not
    /// among them, exit without doing anything.
    #[arg(long, alias = "preupload_files", num_args = 0..)]
    preupload_files: Option<Vec<String>>,

    /// Only check whether the generated files need update
    #[arg(long, alias = "check_only")]
    check_only: bool,

    /// Write the parsing result as CSV to this path and skip code generation
    #[arg(long, alias = "output_csv")]
    output_csv: Option<PathBuf>,

    /// Enable debug logging
    #[arg(short, long)]
    verbose: bool,
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    if let Some(ref files) = cli.preupload_files {
        if !input_changed(files) {
            info!(
                "{} not modified, nothing to generate",
                targets::PROP_AIDL_FILE_NAME
            );
            return Ok(());
        }
    }

    let root = cli.android_build_top.as_path();
    let configs = parse_input(root)?;

    if let Some(ref csv_path) = cli.output_csv {
        let csv = render::csv::render(&configs)?;
        fs::write(csv_path, csv)
            .with_context(|| format!("failed to write {}", csv_path.display()))?;
        info!("wrote {} properties to {}", configs.len(), csv_path.display());
        return Ok(());
    }

    if cli.check_only {
        generate::check_all(root, &configs)
    } else {
        generate::write_all(root, &configs)
    }
}

/// Sets up tracing on stderr. `RUST_LOG` wins unless `--verbose` is given.
fn init_logging(verbose: bool) {
    let filter = if verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info"))
    };

    tracing_subscriber::registry()
        .with(filter)
        .with(tracing_subscriber::fmt::layer().with_writer(std::io::stderr))
        .init();
}

/// Read and parse VehicleProperty.aidl under `root`.
fn parse_input(root: &Path) -> Result<Vec<model::PropertyConfig>> {
    let input = root.join(targets::PROP_AIDL_FILE_PATH);
    let content = fs::read_to_string(&input)
        .with_context(|| format!("failed to read {}", input.display()))?;
    let configs = parser::parse(&content)
        .with_context(|| format!("error parsing {}", input.display()))?;
    info!("parsed {} properties from {}", configs.len(), input.display());
    Ok(configs)
}

/// Whether the property definition file is among the changed files.
fn input_changed(files: &[String]) -> bool {
    files
        .iter()
        .any(|f| f.ends_with(targets::PROP_AIDL_FILE_NAME))
}
