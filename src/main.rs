use std::{
    io::{self, BufRead, Write},
    path::{Path, PathBuf},
};

use api::directions::{FetchDirections, GmapsFetcher, DEFAULT_BASE_URL};
use clap::Parser;
use color_eyre::eyre::{Result, WrapErr};
use credential::{Credential, FileKeyReader, ReadApiKey};
use dotenv::dotenv;
use error::CommuteError;
use route::DistanceFinder;

mod api;
mod credential;
mod error;
mod logging;
mod route;

/// Travel duration and distance between two addresses
#[derive(Parser, Debug)]
#[command(version, about, long_about = None)]
struct Cli {
    /// File holding the Google Maps API key
    #[arg(long, env = "MAPS_API_KEY_FILE", default_value = "Maps-API.txt")]
    key_file: PathBuf,

    /// Origin as {address} or {city, state}; prompted for when omitted
    #[arg(short, long)]
    origin: Option<String>,

    /// Destination as {address} or {city, state}; prompted for when omitted
    #[arg(short, long)]
    destination: Option<String>,

    /// Directions endpoint
    #[arg(long, env = "MAPS_DIRECTIONS_URL", default_value = DEFAULT_BASE_URL)]
    base_url: String,
}

fn main() -> Result<()> {
    dotenv().ok();
    color_eyre::install()?;
    logging::init_logging();

    let cli = Cli::parse();
    let stdin = io::stdin();
    let stdout = io::stdout();

    run(
        &FileKeyReader,
        &cli.key_file,
        |key| GmapsFetcher::with_base_url(key, cli.base_url.clone()),
        cli.origin.clone(),
        cli.destination.clone(),
        &mut stdin.lock(),
        &mut stdout.lock(),
    )
}

fn run<K, F>(
    key_reader: &K,
    key_file: &Path,
    make_fetcher: impl FnOnce(Credential) -> F,
    origin: Option<String>,
    destination: Option<String>,
    input: &mut impl BufRead,
    out: &mut impl Write,
) -> Result<()>
where
    K: ReadApiKey,
    F: FetchDirections,
{
    let api_key = match key_reader.read_api_key(key_file) {
        Some(api_key) if !api_key.is_empty() => api_key,
        _ => {
            writeln!(out, "{}", CommuteError::CredentialMissing)?;
            return Ok(());
        }
    };

    let finder = DistanceFinder::new(make_fetcher(api_key));

    let origin = match origin {
        Some(origin) => origin,
        None => prompt("Enter origin as {address} or {city, state}: ", input, out)?,
    };
    let destination = match destination {
        Some(destination) => destination,
        None => prompt(
            "Enter destination address as {address} or {city, state}: ",
            input,
            out,
        )?,
    };

    match finder.find_distance(&origin, &destination) {
        Ok(result) => {
            writeln!(
                out,
                "Total Duration: {:.2} min / {:.2} hrs",
                result.duration_minutes,
                result.duration_hours()
            )?;
            writeln!(out, "Total Distance: {:.2} miles", result.distance_miles)?;
        }
        Err(CommuteError::BlankInput) => {
            writeln!(out, "{}", CommuteError::BlankInput)?;
        }
        Err(CommuteError::ApiStatus { status, message }) => {
            log::warn!(
                "Directions API returned {}: {}",
                status,
                message.as_deref().unwrap_or("no message")
            );
            writeln!(out, "Error: Directions not found")?;
        }
        Err(e @ CommuteError::Lookup(_)) => {
            log::error!("{} -> {}: {}", origin, destination, e);
            writeln!(out, "Error: {}", e)?;
        }
        Err(e) => {
            return Err(e).wrap_err(format!(
                "Could not get directions from {} to {}",
                origin, destination
            ))
        }
    }

    Ok(())
}

fn prompt(label: &str, input: &mut impl BufRead, out: &mut impl Write) -> io::Result<String> {
    write!(out, "{}", label)?;
    out.flush()?;

    let mut line = String::new();
    input.read_line(&mut line)?;
    Ok(line.trim_end_matches(['\r', '\n']).to_string())
}
