use std::fs;
use std::path::{Path, PathBuf};

use anyhow::Context;
use clap::Parser;
use urania::ephemeris::RawChart;
use urania::request::{julian_day, ChartRequest, FixedOffsetResolver, TimeResolver};
use urania::{assemble_chart, Chart, ChartError};
use urania_config::{load_settings, UraniaSettings};

#[derive(Parser)]
#[command(name = "urania", about = "Natal chart from a birth request")]
struct Cli {
    /// JSON file with date, time, latitude and longitude
    #[arg(long)]
    request: PathBuf,
    /// JSON file with precomputed raw positions and cusps
    #[arg(long)]
    positions: Option<PathBuf>,
    /// TOML settings (default: configs/urania.toml when present)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Single-line JSON output
    #[arg(long)]
    compact: bool,
}

fn main() {
    env_logger::init();
    let cli = Cli::parse();
    if let Err(e) = run(&cli) {
        eprintln!("error: {e:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> anyhow::Result<()> {
    let settings = load_settings(cli.config.as_deref())?;
    log::debug!("Settings: {:?}", settings);

    let request: ChartRequest = read_json(&cli.request)?;
    let resolver = FixedOffsetResolver::new(
        settings.timezone.name.clone(),
        settings.timezone.utc_offset_minutes,
    )?;

    let chart = match &cli.positions {
        Some(path) => chart_from_positions(&request, &resolver, path)?,
        None => chart_from_ephemeris(&settings, &request, &resolver)?,
    };
    println!("{}", render(&chart, settings.pretty && !cli.compact)?);
    Ok(())
}

/// Assemble from recorded positions instead of querying an ephemeris
fn chart_from_positions(
    request: &ChartRequest,
    resolver: &FixedOffsetResolver,
    path: &Path,
) -> anyhow::Result<Chart> {
    let validated = request.validate().map_err(ChartError::from)?;
    let resolved = resolver.resolve(&validated).map_err(ChartError::from)?;
    let jd = julian_day(resolved.utc);
    log::info!("Chart instant {} UTC (JD {:.6})", resolved.utc, jd);

    let raw: RawChart = read_json(path)?;
    if (raw.julian_day - jd).abs() > 1e-6 {
        log::warn!(
            "Positions were computed for JD {:.6}, request resolves to JD {:.6}",
            raw.julian_day,
            jd
        );
    }
    Ok(assemble_chart(validated.chart_meta(&resolved.timezone), &raw))
}

fn read_json<T: serde::de::DeserializeOwned>(path: &Path) -> anyhow::Result<T> {
    let text = fs::read_to_string(path)
        .with_context(|| format!("Failed to read {}", path.display()))?;
    serde_json::from_str(&text).with_context(|| format!("Failed to parse {}", path.display()))
}

fn render(chart: &Chart, pretty: bool) -> anyhow::Result<String> {
    let text = if pretty {
        serde_json::to_string_pretty(chart)?
    } else {
        serde_json::to_string(chart)?
    };
    Ok(text)
}

#[cfg(feature = "swisseph")]
fn chart_from_ephemeris(
    settings: &UraniaSettings,
    request: &ChartRequest,
    resolver: &FixedOffsetResolver,
) -> anyhow::Result<Chart> {
    use urania::ephemeris::{EphemerisConfig, SwissEphemerisAdapter};

    let config = EphemerisConfig::resolve(settings.ephemeris_path.clone());
    let adapter = SwissEphemerisAdapter::new(config)?;
    Ok(urania::cast_chart(request, resolver, &adapter)?)
}

#[cfg(not(feature = "swisseph"))]
fn chart_from_ephemeris(
    _settings: &UraniaSettings,
    _request: &ChartRequest,
    _resolver: &FixedOffsetResolver,
) -> anyhow::Result<Chart> {
    anyhow::bail!("No --positions given and urania-cli was built without the `swisseph` feature")
}
