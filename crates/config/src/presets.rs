//! Built-in scenarios.

use solar_core::constants::{
    COMET_MASS_KG, COMET_SPEED_M_S, COMET_START_AU, EARTH_APHELION_AU, EARTH_APHELION_SPEED_M_S,
    EARTH_MASS_KG, G, MARS_APHELION_AU, MARS_APHELION_SPEED_M_S, MARS_MASS_KG, SUN_MASS_KG,
};
use solar_core::time::{days_to_seconds, years_to_seconds};
use solar_core::units::au_to_m;

use crate::{BodyConfig, ScenarioConfig};

/// Sun, Earth, Mars, and a comet, each planet starting at aphelion on the +x
/// axis. Five years at a one-day step.
pub fn inner_solar_system() -> ScenarioConfig {
    ScenarioConfig {
        name: "inner-solar-system".to_string(),
        gravitational_constant: G,
        time_step_s: days_to_seconds(1.0),
        duration_s: Some(years_to_seconds(5.0)),
        steps: None,
        attractor: BodyConfig {
            name: "Sun".to_string(),
            mass_kg: SUN_MASS_KG,
            position_m: [0.0, 0.0, 0.0],
            velocity_m_s: [0.0, 0.0, 0.0],
        },
        bodies: vec![
            orbiter("Earth", EARTH_MASS_KG, EARTH_APHELION_AU, EARTH_APHELION_SPEED_M_S),
            orbiter("Mars", MARS_MASS_KG, MARS_APHELION_AU, MARS_APHELION_SPEED_M_S),
            orbiter("Comet", COMET_MASS_KG, COMET_START_AU, COMET_SPEED_M_S),
        ],
    }
}

fn orbiter(name: &str, mass_kg: f64, distance_au: f64, speed_m_s: f64) -> BodyConfig {
    BodyConfig {
        name: name.to_string(),
        mass_kg,
        position_m: [au_to_m(distance_au), 0.0, 0.0],
        velocity_m_s: [0.0, speed_m_s, 0.0],
    }
}
