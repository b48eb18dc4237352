//! `tomlmerge` CLI — merge layered TOML configuration files.
//!
//! ## Usage
//!
//! ```sh
//! # Merge files in order (later files win), print to stdout
//! tomlmerge merge base.toml production.toml
//!
//! # Read one layer from stdin, write the result to a file
//! cat local.toml | tomlmerge merge base.toml - -o app.toml
//!
//! # Render every number with float syntax
//! tomlmerge merge --numbers-as-float base.toml overrides.toml
//!
//! # Check that every file parses
//! tomlmerge check base.toml production.toml
//!
//! # Debug logging (RUST_LOG overrides -v)
//! tomlmerge -v merge base.toml production.toml
//! ```

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use std::io::{self, Read};
use tomlmerge_core::{MergeError, MergeOptions};
use tracing::{debug, info};
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt};

/// File argument that means "read stdin".
const STDIN_PATH: &str = "-";

#[derive(Parser)]
#[command(name = "tomlmerge", version, about = "Merge layered TOML configuration files")]
struct Cli {
    #[command(subcommand)]
    command: Commands,

    /// Increase log verbosity (-v debug, -vv trace); RUST_LOG takes precedence
    #[arg(short, long, action = clap::ArgAction::Count, global = true)]
    verbose: u8,
}

#[derive(Subcommand)]
enum Commands {
    /// Merge TOML files; later files override earlier ones
    Merge {
        /// Input files in precedence order ("-" reads stdin)
        #[arg(required = true)]
        files: Vec<String>,
        /// Output file (writes to stdout if omitted)
        #[arg(short, long)]
        output: Option<String>,
        /// Render every number with float syntax (1 → 1.0)
        #[arg(long)]
        numbers_as_float: bool,
    },
    /// Check that every file is valid TOML
    Check {
        /// Files to check ("-" reads stdin)
        #[arg(required = true)]
        files: Vec<String>,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match cli.command {
        Commands::Merge {
            files,
            output,
            numbers_as_float,
        } => {
            let configs = read_inputs(&files)?;
            let options = MergeOptions { numbers_as_float };
            let merged = tomlmerge_core::merge(&configs, &options)
                .map_err(|e| with_file_context(e, &files))?;
            info!(files = files.len(), "merged configs");
            write_output(output.as_deref(), &merged)?;
        }
        Commands::Check { files } => {
            let configs = read_inputs(&files)?;
            let mut failed = 0;
            for (index, (path, text)) in files.iter().zip(&configs).enumerate() {
                match tomlmerge_core::parse(text) {
                    Ok(_) => println!("ok    [{index}] {path}"),
                    Err(e) => {
                        failed += 1;
                        println!("error [{index}] {path}: {e}");
                    }
                }
            }
            if failed > 0 {
                anyhow::bail!("{} of {} configs failed to parse", failed, files.len());
            }
        }
    }

    Ok(())
}

/// Log to stderr so stdout stays the merged document.
fn init_logging(verbose: u8) {
    let default_level = match verbose {
        0 => "warn",
        1 => "debug",
        _ => "trace",
    };
    tracing_subscriber::registry()
        .with(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| default_level.into()),
        )
        .with(tracing_subscriber::fmt::layer().with_writer(io::stderr))
        .init();
}

/// Name the file behind an index-tagged merge error.
fn with_file_context(err: MergeError, files: &[String]) -> anyhow::Error {
    match err.index().and_then(|i| files.get(i)) {
        Some(path) => {
            let context = format!("Failed to merge {}", path);
            anyhow::Error::new(err).context(context)
        }
        None => anyhow::Error::new(err).context("Failed to merge configs"),
    }
}

fn read_inputs(paths: &[String]) -> Result<Vec<String>> {
    if paths.iter().filter(|p| p.as_str() == STDIN_PATH).count() > 1 {
        anyhow::bail!("stdin (\"-\") can only be given once");
    }
    paths.iter().map(|path| read_input(path)).collect()
}

fn read_input(path: &str) -> Result<String> {
    if path == STDIN_PATH {
        let mut buf = String::new();
        io::stdin()
            .read_to_string(&mut buf)
            .context("Failed to read from stdin")?;
        debug!(bytes = buf.len(), "read stdin");
        return Ok(buf);
    }
    let text =
        std::fs::read_to_string(path).with_context(|| format!("Failed to read file: {}", path))?;
    debug!(path, bytes = text.len(), "read config");
    Ok(text)
}

fn write_output(path: Option<&str>, content: &str) -> Result<()> {
    let content = if content.is_empty() {
        String::new()
    } else {
        format!("{content}\n")
    };
    match path {
        Some(path) => {
            std::fs::write(path, content)
                .with_context(|| format!("Failed to write file: {}", path))?;
        }
        None => {
            print!("{}", content);
        }
    }
    Ok(())
}
