use std::path::PathBuf;

use clap::Parser;
use log::info;
use solar_system_simulator::config::{self, presets};
use solar_system_simulator::orbits::{Body, Trajectories, diagnostics};
use solar_system_simulator::scenario;
use solar_system_simulator::time::{days_to_seconds, seconds_to_days, years_to_seconds};
use solar_system_simulator::units::m_to_au;
use solar_system_simulator::vector::{self, Vector3};

#[derive(Parser)]
#[command(
    author,
    version,
    about = "Integrate a star and its orbiting bodies, then summarise the trajectories"
)]
struct Cli {
    /// Scenario manifest (YAML or TOML); defaults to the built-in inner solar system
    #[arg(long)]
    scenario: Option<PathBuf>,

    /// Run for this many 365-day years instead of the manifest horizon
    #[arg(long, conflicts_with = "steps")]
    years: Option<f64>,

    /// Run exactly this many steps instead of the manifest horizon
    #[arg(long)]
    steps: Option<u64>,

    /// Time step in days (defaults to the manifest value)
    #[arg(long)]
    time_step_days: Option<f64>,
}

fn main() -> anyhow::Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    let mut scenario_config = match &cli.scenario {
        Some(path) => config::load_scenario(path)?,
        None => presets::inner_solar_system(),
    };
    if let Some(years) = cli.years {
        scenario_config = scenario_config.with_duration(years_to_seconds(years));
    }
    if let Some(steps) = cli.steps {
        scenario_config = scenario_config.with_steps(steps);
    }
    if let Some(days) = cli.time_step_days {
        scenario_config.time_step_s = days_to_seconds(days);
    }

    let system = scenario::build_system(&scenario_config)?;
    let momentum_before = system.total_momentum();
    let energy_before = system.total_energy();
    info!(
        "running '{}' with {} orbiting bodies",
        scenario_config.name,
        system.bodies().len()
    );

    let run = system.run()?;
    print_summary(&scenario_config.name, &run, &momentum_before, energy_before);
    Ok(())
}

fn print_summary(name: &str, run: &Trajectories, momentum_before: &Vector3, energy_before: f64) {
    println!("=== Scenario: {} ===", name);
    println!(
        "Steps          : {} (dt = {:.3} days, {:.2} days simulated)",
        run.step_count(),
        seconds_to_days(run.time_step()),
        seconds_to_days(run.elapsed_time())
    );

    let attractor = run.attractor();
    let last = attractor.trajectory().last();
    println!(
        "{:<12} samples = {:>6}, final = ({:+.6}, {:+.6}, {:+.6}) AU, drift = {:.3e} AU",
        attractor.name(),
        attractor.trajectory().len(),
        m_to_au(last[0]),
        m_to_au(last[1]),
        m_to_au(last[2]),
        m_to_au(vector::norm(&vector::sub(last, attractor.trajectory().initial())))
    );

    for body in run.bodies() {
        let last = body.trajectory().last();
        let (r_min, r_max) = distance_range(attractor, body);
        println!(
            "{:<12} samples = {:>6}, final = ({:+.6}, {:+.6}, {:+.6}) AU, r = {:.4} AU [{:.4}, {:.4}]",
            body.name(),
            body.trajectory().len(),
            m_to_au(last[0]),
            m_to_au(last[1]),
            m_to_au(last[2]),
            m_to_au(vector::norm(&vector::sub(last, attractor.trajectory().last()))),
            m_to_au(r_min),
            m_to_au(r_max)
        );
    }

    let momentum_delta = vector::sub(&run.total_momentum(), momentum_before);
    println!(
        "Momentum drift : |dp| = {:.3e} kg m/s",
        vector::norm(&momentum_delta)
    );
    println!(
        "Energy drift   : {:.3e} (relative)",
        diagnostics::relative_drift(energy_before, run.total_energy())
    );
}

/// Smallest and largest recorded separation between `body` and the attractor.
fn distance_range(attractor: &Body, body: &Body) -> (f64, f64) {
    attractor
        .trajectory()
        .iter()
        .zip(body.trajectory())
        .map(|(a, b)| vector::norm(&vector::sub(b, a)))
        .fold((f64::INFINITY, 0.0_f64), |(lo, hi), r| (lo.min(r), hi.max(r)))
}
