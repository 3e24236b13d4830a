//! Scenario manifests and loaders for the solar system simulator.
//!
//! A scenario names the attractor, the orbiting bodies, the gravitational
//! constant, the time step, and exactly one horizon (`duration_s` or
//! `steps`). Manifests may be YAML or TOML:
//!
//! ```yaml
//! name: earth-only
//! gravitational_constant: 6.67e-11
//! time_step_s: 86400.0
//! steps: 365
//! attractor:
//!   name: Sun
//!   mass_kg: 2.0e30
//!   position_m: [0.0, 0.0, 0.0]
//! bodies:
//!   - name: Earth
//!     mass_kg: 5.972e24
//!     position_m: [1.52505e11, 0.0, 0.0]
//!     velocity_m_s: [0.0, 29290.0, 0.0]
//! ```

use std::fs::File;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use thiserror::Error;

pub mod presets;

/// Initial state of one body, in SI units.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct BodyConfig {
    pub name: String,
    pub mass_kg: f64,
    pub position_m: [f64; 3],
    #[serde(default)]
    pub velocity_m_s: [f64; 3],
}

/// Full scenario manifest.
#[derive(Debug, Deserialize, Clone, PartialEq)]
pub struct ScenarioConfig {
    pub name: String,
    #[serde(default = "default_gravitational_constant")]
    pub gravitational_constant: f64,
    pub time_step_s: f64,
    #[serde(default)]
    pub duration_s: Option<f64>,
    #[serde(default)]
    pub steps: Option<u64>,
    pub attractor: BodyConfig,
    #[serde(default)]
    pub bodies: Vec<BodyConfig>,
}

/// Resolved stopping rule of a scenario.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum HorizonConfig {
    DurationSeconds(f64),
    Steps(u64),
}

impl ScenarioConfig {
    /// Returns the single configured horizon.
    pub fn horizon(&self) -> Result<HorizonConfig, ConfigError> {
        match (self.duration_s, self.steps) {
            (Some(seconds), None) => Ok(HorizonConfig::DurationSeconds(seconds)),
            (None, Some(steps)) => Ok(HorizonConfig::Steps(steps)),
            (None, None) => Err(ConfigError::MissingHorizon(self.name.clone())),
            (Some(_), Some(_)) => Err(ConfigError::ConflictingHorizon(self.name.clone())),
        }
    }

    /// Replaces the horizon with a fixed duration.
    pub fn with_duration(mut self, seconds: f64) -> Self {
        self.duration_s = Some(seconds);
        self.steps = None;
        self
    }

    /// Replaces the horizon with a fixed step count.
    pub fn with_steps(mut self, steps: u64) -> Self {
        self.steps = Some(steps);
        self.duration_s = None;
        self
    }
}

fn default_gravitational_constant() -> f64 {
    solar_core::constants::G
}

/// Errors that can occur while loading scenario manifests.
#[derive(Debug, Error)]
pub enum ConfigError {
    #[error("failed to read scenario: {0}")]
    Io(#[from] std::io::Error),
    #[error("failed to parse YAML: {0}")]
    Parse(#[from] serde_yaml::Error),
    #[error("failed to parse TOML: {0}")]
    Toml(#[from] toml::de::Error),
    #[error("scenario '{0}' sets neither duration_s nor steps")]
    MissingHorizon(String),
    #[error("scenario '{0}' sets both duration_s and steps")]
    ConflictingHorizon(String),
}

/// Load a single scenario; `.toml` files are read as TOML, anything else as YAML.
pub fn load_scenario<P: AsRef<Path>>(path: P) -> Result<ScenarioConfig, ConfigError> {
    let path = path.as_ref();
    let scenario: ScenarioConfig = if has_extension(path, &["toml"]) {
        let contents = std::fs::read_to_string(path)?;
        toml::from_str(&contents)?
    } else {
        let reader = File::open(path)?;
        serde_yaml::from_reader(reader)?
    };
    scenario.horizon()?;
    Ok(scenario)
}

/// Load every scenario in a directory (sorted by path), or the single file at `path`.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<ScenarioConfig>, ConfigError> {
    let path = path.as_ref();
    if !path.is_dir() {
        return Ok(vec![load_scenario(path)?]);
    }
    let mut entries: Vec<PathBuf> = std::fs::read_dir(path)?
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|p| has_extension(p, &["toml", "yaml", "yml"]))
        .collect();
    entries.sort();
    entries.iter().map(load_scenario).collect()
}

fn has_extension(path: &Path, allowed: &[&str]) -> bool {
    path.extension()
        .and_then(|ext| ext.to_str())
        .map(|ext| allowed.contains(&ext))
        .unwrap_or(false)
}
