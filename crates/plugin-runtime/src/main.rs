//! SignVault admin tool.
//!
//! Offline inspection of registry files and configuration, without a
//! running host.

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use plugin_runtime::init_tracing;
use std::path::PathBuf;
use sv_01_sign_storage::{FileRegistryPersistence, RegistryPersistence, SignType};
use sv_02_sign_format::{PluginConfig, SignFormatter};

/// SignVault admin tool
#[derive(Parser, Debug)]
#[command(name = "signvault-admin")]
#[command(about = "Inspect SignVault registry files and configuration")]
struct Args {
    /// Log at debug level
    #[arg(short, long)]
    verbose: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// List the entries of a sign registry file
    Inspect {
        /// Path to signsstorage.bin
        file: PathBuf,
    },
    /// Render the configured sign text and report broken templates
    CheckConfig {
        /// Path to config.toml
        file: PathBuf,
    },
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_tracing(args.verbose)?;

    match args.command {
        Command::Inspect { file } => inspect(file),
        Command::CheckConfig { file } => check_config(file),
    }
}

fn inspect(file: PathBuf) -> Result<()> {
    let persistence = FileRegistryPersistence::new(&file);
    if !persistence.exists() {
        println!("{}: no registry written yet", persistence.describe());
        return Ok(());
    }

    let entries = persistence
        .read()
        .with_context(|| format!("reading {}", persistence.describe()))?;

    println!("{} entries in {}", entries.len(), persistence.describe());
    for entry in &entries {
        let loc = entry.location;
        println!(
            "  {:<8} world={} x={} y={} z={}",
            entry.sign_type, loc.world, loc.x, loc.y, loc.z
        );
    }
    Ok(())
}

fn check_config(file: PathBuf) -> Result<()> {
    let config =
        PluginConfig::load(&file).with_context(|| format!("loading {}", file.display()))?;
    let formatter = SignFormatter::new(config);

    for sign_type in SignType::ALL {
        println!("[{sign_type}]");
        for line in formatter.configured_lines(sign_type).iter() {
            println!("  | {line}");
        }
    }

    let broken = formatter.misconfigured_keys();
    if broken.is_empty() {
        println!("All sign templates are valid.");
    } else {
        for key in &broken {
            println!("warning: {key} must be a list of exactly two strings");
        }
    }
    Ok(())
}
