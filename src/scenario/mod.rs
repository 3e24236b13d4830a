//! Turns scenario manifests into runnable systems.

use std::path::Path;

use log::debug;
use thiserror::Error;

use solar_config::{BodyConfig, ConfigError, HorizonConfig, ScenarioConfig};
use solar_orbits::{Body, Horizon, SimulationError, SimulationParams, System, Trajectories};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error("invalid scenario: {0}")]
    Simulation(#[from] SimulationError),
    #[error("scenario '{name}' asks for {steps} steps, more than this platform can count")]
    StepCountOverflow { name: String, steps: u64 },
}

/// Build a validated [`System`] from a manifest.
pub fn build_system(config: &ScenarioConfig) -> Result<System, ScenarioError> {
    let horizon = match config.horizon()? {
        HorizonConfig::DurationSeconds(seconds) => Horizon::Duration(seconds),
        HorizonConfig::Steps(steps) => Horizon::Steps(usize::try_from(steps).map_err(|_| {
            ScenarioError::StepCountOverflow {
                name: config.name.clone(),
                steps,
            }
        })?),
    };
    let params = SimulationParams {
        gravitational_constant: config.gravitational_constant,
        time_step: config.time_step_s,
        horizon,
    };
    let attractor = body_from_config(&config.attractor);
    let bodies = config.bodies.iter().map(body_from_config).collect();
    debug!("building scenario '{}'", config.name);
    Ok(System::new(attractor, bodies, params)?)
}

/// Build and run a manifest to completion.
pub fn simulate(config: &ScenarioConfig) -> Result<Trajectories, ScenarioError> {
    Ok(build_system(config)?.run()?)
}

/// Load a manifest from disk and run it.
pub fn simulate_file<P: AsRef<Path>>(path: P) -> Result<Trajectories, ScenarioError> {
    let config = solar_config::load_scenario(path)?;
    simulate(&config)
}

fn body_from_config(config: &BodyConfig) -> Body {
    Body::new(
        config.name.clone(),
        config.mass_kg,
        config.position_m,
        config.velocity_m_s,
    )
}
