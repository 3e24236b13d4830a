use std::fs;

use solar_system_simulator::config::{
    self, ConfigError, HorizonConfig, ScenarioConfig, load_scenario, load_scenarios, presets,
};
use solar_system_simulator::orbits::{Horizon, SimulationError};
use solar_system_simulator::scenario::{self, ScenarioError};

#[test]
fn yaml_manifest_describes_the_inner_system() {
    let scenario = load_scenario("data/scenarios/inner_system.yaml").expect("inner system yaml");
    assert_eq!(scenario.name, "inner-system");
    assert_eq!(scenario.attractor.name, "Sun");
    let names: Vec<&str> = scenario.bodies.iter().map(|b| b.name.as_str()).collect();
    assert_eq!(names, ["Earth", "Mars", "Comet"]);
    assert_eq!(
        scenario.horizon().unwrap(),
        HorizonConfig::DurationSeconds(5.0 * 365.0 * 86_400.0)
    );
}

#[test]
fn toml_manifest_uses_defaults_and_step_horizon() {
    let scenario = load_scenario("data/scenarios/earth_only.toml").expect("earth toml");
    assert_eq!(scenario.gravitational_constant, 6.67e-11);
    assert_eq!(scenario.attractor.velocity_m_s, [0.0, 0.0, 0.0]);
    assert_eq!(scenario.horizon().unwrap(), HorizonConfig::Steps(365));

    let run = scenario::simulate(&scenario).expect("earth run");
    assert_eq!(run.step_count(), 365);
    assert_eq!(run.body("Earth").unwrap().trajectory().len(), 366);
}

#[test]
fn scenario_directory_loads_sorted() {
    let scenarios = load_scenarios("data/scenarios").expect("scenario directory");
    let names: Vec<&str> = scenarios.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, ["earth-only", "inner-system"]);
}

#[test]
fn preset_matches_yaml_manifest_layout() {
    let preset = presets::inner_solar_system();
    let manifest = load_scenario("data/scenarios/inner_system.yaml").unwrap();
    assert_eq!(preset.time_step_s, manifest.time_step_s);
    assert_eq!(preset.duration_s, manifest.duration_s);
    assert_eq!(preset.bodies.len(), manifest.bodies.len());
    for (a, b) in preset.bodies.iter().zip(&manifest.bodies) {
        assert_eq!(a.name, b.name);
        assert_eq!(a.mass_kg, b.mass_kg);
        assert_eq!(a.velocity_m_s, b.velocity_m_s);
        assert!((a.position_m[0] - b.position_m[0]).abs() / b.position_m[0] < 1e-12);
    }
}

#[test]
fn horizon_must_be_set_exactly_once() {
    let dir = tempfile::tempdir().expect("tempdir");

    let missing = dir.path().join("missing.yaml");
    fs::write(
        &missing,
        "name: nowhere\ntime_step_s: 60.0\nattractor: {name: Star, mass_kg: 1.0, position_m: [0, 0, 0]}\n",
    )
    .unwrap();
    assert!(matches!(
        load_scenario(&missing),
        Err(ConfigError::MissingHorizon(name)) if name == "nowhere"
    ));

    let both = dir.path().join("both.toml");
    fs::write(
        &both,
        "name = \"greedy\"\ntime_step_s = 60.0\nsteps = 3\nduration_s = 180.0\n\n[attractor]\nname = \"Star\"\nmass_kg = 1.0\nposition_m = [0.0, 0.0, 0.0]\n",
    )
    .unwrap();
    assert!(matches!(
        load_scenario(&both),
        Err(ConfigError::ConflictingHorizon(name)) if name == "greedy"
    ));
}

#[test]
fn malformed_manifests_surface_parse_errors() {
    let dir = tempfile::tempdir().expect("tempdir");
    let yaml = dir.path().join("broken.yaml");
    fs::write(&yaml, "name: [unterminated\n").unwrap();
    assert!(matches!(load_scenario(&yaml), Err(ConfigError::Parse(_))));

    let toml = dir.path().join("broken.toml");
    fs::write(&toml, "name = \n").unwrap();
    assert!(matches!(load_scenario(&toml), Err(ConfigError::Toml(_))));

    assert!(matches!(
        load_scenario(dir.path().join("absent.yaml")),
        Err(ConfigError::Io(_))
    ));
}

#[test]
fn horizon_overrides_replace_each_other() {
    let preset = presets::inner_solar_system().with_steps(10);
    assert_eq!(preset.horizon().unwrap(), HorizonConfig::Steps(10));
    let preset = preset.with_duration(3_600.0);
    assert_eq!(preset.horizon().unwrap(), HorizonConfig::DurationSeconds(3_600.0));

    let system = scenario::build_system(&preset).unwrap();
    assert_eq!(system.params().horizon, Horizon::Duration(3_600.0));
}

#[test]
fn physically_invalid_manifests_are_rejected_before_running() {
    let mut negative_mass: ScenarioConfig = presets::inner_solar_system();
    negative_mass.bodies[1].mass_kg = -6.39e23;
    let err = scenario::build_system(&negative_mass).unwrap_err();
    assert!(matches!(
        err,
        ScenarioError::Simulation(SimulationError::NonPositiveMass { ref body, .. }) if body == "Mars"
    ));
    assert!(err.to_string().contains("non-positive"));

    let mut zero_step = presets::inner_solar_system();
    zero_step.time_step_s = 0.0;
    assert!(matches!(
        scenario::simulate(&zero_step),
        Err(ScenarioError::Simulation(SimulationError::InvalidTimeStep(_)))
    ));

    let negative_duration = presets::inner_solar_system().with_duration(-1.0);
    assert!(matches!(
        scenario::simulate(&negative_duration),
        Err(ScenarioError::Simulation(SimulationError::InvalidDuration(_)))
    ));
}

#[test]
fn zero_duration_manifest_yields_initial_positions_only() {
    let run = scenario::simulate(&presets::inner_solar_system().with_duration(0.0)).unwrap();
    assert_eq!(run.step_count(), 0);
    assert!(run.iter().all(|b| b.trajectory().len() == 1));
}

#[test]
fn simulate_file_runs_manifest_from_disk() {
    let run = scenario::simulate_file("data/scenarios/earth_only.toml").expect("run from file");
    assert_eq!(run.attractor().name(), "Sun");
    assert_eq!(run.bodies().len(), 1);

    let err = scenario::simulate_file("data/scenarios/does_not_exist.yaml").unwrap_err();
    assert!(matches!(err, ScenarioError::Config(config::ConfigError::Io(_))));
}

#[test]
fn step_counts_beyond_usize_are_reported_not_truncated() {
    let config = presets::inner_solar_system().with_steps(u64::MAX);
    let result = scenario::build_system(&config);

    #[cfg(target_pointer_width = "64")]
    assert_eq!(
        result.expect("u64 step count fits").params().horizon,
        Horizon::Steps(usize::MAX)
    );

    #[cfg(not(target_pointer_width = "64"))]
    assert!(matches!(
        result,
        Err(ScenarioError::StepCountOverflow { steps, .. }) if steps == u64::MAX
    ));
}
