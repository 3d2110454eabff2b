//! Drifter command-line front end.
//!
//! Prints the JSON bodies of the planet service on stdout; diagnostics go to
//! stderr through `tracing`.
//!
//! ```text
//! drifter health
//! drifter planet --radius 2.5 --pretty
//! echo '{"biome":"tundra"}' | drifter log-environment
//! ```

use std::io::{Read, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::{Parser, Subcommand};
use drifter::api::{health, EnvironmentLog, PlanetResponse};
use drifter::Config;
use serde::Serialize;
use tracing::error;

/// Procedural planet generator and environment logger.
#[derive(Parser)]
#[command(name = "drifter")]
#[command(about = "Procedural planet generator and environment logger", long_about = None)]
#[command(version)]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Report liveness
    Health,

    /// Generate a planet mesh and print it as JSON
    Planet {
        /// Sphere radius (defaults to DRIFTER_PLANET_RADIUS or 1.0)
        #[arg(long)]
        radius: Option<f64>,

        /// Pretty-print the output
        #[arg(long)]
        pretty: bool,
    },

    /// Append a JSON object to the environment log
    LogEnvironment {
        /// JSON document; read from stdin when omitted
        #[arg(name = "JSON")]
        body: Option<String>,

        /// Log file (defaults to ENV_LOG_FILE or logs/environments.log)
        #[arg(long)]
        log_file: Option<PathBuf>,
    },
}

#[derive(Serialize)]
struct ErrorBody {
    error: String,
}

fn main() -> ExitCode {
    // Default: WARN for everything, INFO for drifter.
    // Override with RUST_LOG env var (e.g. RUST_LOG=drifter=debug).
    let env_filter = tracing_subscriber::EnvFilter::from_default_env()
        .add_directive(tracing_subscriber::filter::LevelFilter::WARN.into())
        .add_directive("drifter=info".parse().unwrap_or_default());
    tracing_subscriber::fmt()
        .with_env_filter(env_filter)
        .with_writer(std::io::stderr)
        .init();

    match run(Cli::parse()) {
        Ok(()) => ExitCode::SUCCESS,
        Err(err) => {
            error!("{err:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(cli: Cli) -> Result<()> {
    let config = Config::from_env().context("invalid configuration")?;

    match cli.command {
        Commands::Health => print_json(&health(), false),
        Commands::Planet { radius, pretty } => {
            let radius = radius.unwrap_or(config.planet_radius);
            let planet = PlanetResponse::generate(radius)?;
            print_json(&planet, pretty)
        }
        Commands::LogEnvironment { body, log_file } => {
            let body = match body {
                Some(body) => body.into_bytes(),
                None => {
                    let mut buf = Vec::new();
                    std::io::stdin()
                        .read_to_end(&mut buf)
                        .context("failed to read request body")?;
                    buf
                }
            };
            let log = EnvironmentLog::new(log_file.unwrap_or(config.env_log_file));
            match log.save(&body) {
                Ok(status) => print_json(&status, false),
                Err(err) => {
                    print_json(
                        &ErrorBody {
                            error: err.to_string(),
                        },
                        false,
                    )?;
                    Err(err.into())
                }
            }
        }
    }
}

fn print_json<T: Serialize>(value: &T, pretty: bool) -> Result<()> {
    let mut out = std::io::stdout().lock();
    if pretty {
        serde_json::to_writer_pretty(&mut out, value)?;
    } else {
        serde_json::to_writer(&mut out, value)?;
    }
    writeln!(out)?;
    Ok(())
}
