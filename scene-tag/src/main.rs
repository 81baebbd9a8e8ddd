use std::io::{self, Write};
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::{Context, Result};
use clap::Parser;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use scene_tag::scene;

/// Print the year, collection id and id of the first feature in a GeoJSON file
#[derive(Debug, Parser)]
#[command(name = "scene-tag", version, about, long_about = None)]
struct Args {
    /// GeoJSON file to label
    #[arg(value_name = "GEOJSON FILE")]
    path: PathBuf,
}

fn main() -> ExitCode {
    init_tracing();
    let args = Args::parse();

    match run(&args) {
        Ok(()) => ExitCode::SUCCESS,
        Err(e) => {
            eprintln!("Error: {e:#}");
            ExitCode::FAILURE
        }
    }
}

fn run(args: &Args) -> Result<()> {
    let label = scene::extract(&args.path).map_err(|e| {
        let kind = e.kind();
        debug!(kind, path = %args.path.display(), "extraction failed");
        anyhow::Error::new(e).context(format!("{kind} in {}", args.path.display()))
    })?;

    let mut stdout = io::stdout().lock();
    writeln!(stdout, "{label}").context("failed to write label to stdout")?;
    Ok(())
}

/// Diagnostics go to stderr so stdout only ever carries the label line.
/// `RUST_LOG` overrides the default `warn` filter.
fn init_tracing() {
    let filter = EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"));
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
}
