use std::fs;
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use anyhow::{Context, Result};
use clap::Parser;
use serde::Serialize;
use tracing::info;
use tracing_subscriber::EnvFilter;

use farmacoords::records::{Pharmacy, parse_datastore_response};
use farmacoords::viewport::{MapView, ViewConfig, fit_view, plottable};

/// Normalize the coordinates of a pharmacy datastore dump and print the
/// records as JSON.
#[derive(Parser, Debug)]
#[command(name = "farmacoords", version)]
struct Cli {
    /// Datastore response file, or `-` for stdin
    input: PathBuf,

    /// Drop records whose coordinates could not be resolved
    #[arg(long)]
    plottable_only: bool,

    /// Also compute the map view that fits the resolved records
    #[arg(long)]
    view: bool,

    /// Pretty-print the JSON output
    #[arg(long)]
    pretty: bool,
}

#[derive(Serialize)]
struct Output<'a> {
    pharmacies: Vec<&'a Pharmacy>,
    #[serde(skip_serializing_if = "Option::is_none")]
    view: Option<MapView>,
}

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")))
        .with_writer(io::stderr)
        .init();

    let cli = Cli::parse();
    let body = read_input(&cli.input)?;
    let pharmacies = parse_datastore_response(&body)
        .with_context(|| format!("parse {}", cli.input.display()))?;

    let located = plottable(&pharmacies);
    info!(
        "[NORMALIZE] {} records, {} with usable coordinates",
        pharmacies.len(),
        located.len()
    );

    let view = cli.view.then(|| {
        let points: Vec<_> = located.iter().map(|p| p.location).collect();
        fit_view(&points, &ViewConfig::default())
    });
    let output = Output {
        pharmacies: if cli.plottable_only {
            located
        } else {
            pharmacies.iter().collect()
        },
        view,
    };

    let json = if cli.pretty {
        serde_json::to_string_pretty(&output)?
    } else {
        serde_json::to_string(&output)?
    };
    println!("{json}");
    Ok(())
}

fn read_input(path: &Path) -> Result<String> {
    if path.as_os_str() == "-" {
        let mut body = String::new();
        io::stdin()
            .read_to_string(&mut body)
            .context("read stdin")?;
        return Ok(body);
    }
    fs::read_to_string(path).with_context(|| format!("read {}", path.display()))
}
