use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

const DEFAULT_CONFIG_PATHS: [&str; 2] = ["configs/urania.toml", "../../configs/urania.toml"];

#[derive(Debug, Clone, PartialEq)]
pub struct UraniaSettings {
    /// Swiss Ephemeris data directory; `None` leaves it to the environment
    pub ephemeris_path: Option<PathBuf>,
    pub timezone: TimezoneSettings,
    pub pretty: bool,
}

/// Fixed offset applied to request times before they reach the chart core
#[derive(Debug, Clone, PartialEq, Deserialize)]
pub struct TimezoneSettings {
    #[serde(default = "default_timezone_name")]
    pub name: String,
    #[serde(default)]
    pub utc_offset_minutes: i32,
}

impl Default for TimezoneSettings {
    fn default() -> Self {
        Self {
            name: default_timezone_name(),
            utc_offset_minutes: 0,
        }
    }
}

impl Default for UraniaSettings {
    fn default() -> Self {
        Self {
            ephemeris_path: None,
            timezone: TimezoneSettings::default(),
            pretty: true,
        }
    }
}

fn default_timezone_name() -> String {
    "UTC".to_string()
}

fn default_pretty() -> bool {
    true
}

#[derive(Debug, Clone, Default, Deserialize)]
struct EphemerisToml {
    #[serde(default)]
    path: Option<PathBuf>,
}

#[derive(Debug, Clone, Deserialize)]
struct OutputToml {
    #[serde(default = "default_pretty")]
    pretty: bool,
}

impl Default for OutputToml {
    fn default() -> Self {
        Self {
            pretty: default_pretty(),
        }
    }
}

#[derive(Debug, Clone, Default, Deserialize)]
struct RootConfigToml {
    #[serde(default)]
    ephemeris: EphemerisToml,
    #[serde(default)]
    timezone: TimezoneSettings,
    #[serde(default)]
    output: OutputToml,
}

/// Try the common relative locations of `configs/urania.toml`.
///
/// Returns `Ok(None)` when neither exists.
pub fn read_config_toml_text() -> anyhow::Result<Option<String>> {
    for p in &DEFAULT_CONFIG_PATHS {
        if Path::new(p).exists() {
            let text = fs::read_to_string(p)
                .map_err(|e| anyhow::anyhow!("Failed to read {p}: {e}"))?;
            return Ok(Some(text));
        }
    }
    Ok(None)
}

pub fn parse_settings(text: &str) -> anyhow::Result<UraniaSettings> {
    let root: RootConfigToml = toml::from_str(text)
        .map_err(|e| anyhow::anyhow!("Failed to parse urania.toml: {e}"))?;
    if root.timezone.utc_offset_minutes.abs() >= 24 * 60 {
        anyhow::bail!(
            "timezone.utc_offset_minutes must be within one day, got {}",
            root.timezone.utc_offset_minutes
        );
    }
    Ok(UraniaSettings {
        ephemeris_path: root.ephemeris.path,
        timezone: root.timezone,
        pretty: root.output.pretty,
    })
}

/// Load settings from `explicit`, or from the default locations.
///
/// An explicit path must exist. Without one, a missing file means defaults.
pub fn load_settings(explicit: Option<&Path>) -> anyhow::Result<UraniaSettings> {
    let text = match explicit {
        Some(path) => Some(fs::read_to_string(path).map_err(|e| {
            anyhow::anyhow!("Could not load config from {}: {e}", path.display())
        })?),
        None => read_config_toml_text()?,
    };
    match text {
        Some(text) => parse_settings(&text),
        None => Ok(UraniaSettings::default()),
    }
}
