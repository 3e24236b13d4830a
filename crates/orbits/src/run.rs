//! Run-to-completion driver and the read-only trajectory handoff.

use log::{debug, info};
use solar_core::vector::Vector3;

use crate::body::Body;
use crate::diagnostics;
use crate::error::SimulationError;
use crate::system::{Horizon, System};

/// Driver state: keep stepping or stop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RunState {
    Running,
    Done,
}

impl System {
    /// `Running` until the horizon is reached, `Done` afterwards.
    pub fn state(&self) -> RunState {
        let running = match self.params().horizon {
            Horizon::Duration(seconds) => self.elapsed_time() < seconds,
            Horizon::Steps(steps) => self.step_count() < steps,
        };
        if running {
            RunState::Running
        } else {
            RunState::Done
        }
    }

    /// Steps the system until [`RunState::Done`] and returns every trajectory.
    ///
    /// Consumes the system, so nothing can mutate the history afterwards.
    /// Any step error aborts the run with no partial output.
    ///
    /// ```
    /// use solar_orbits::{Body, Horizon, SimulationParams, System};
    ///
    /// let star = Body::new("Star", 1.0e30, [0.0; 3], [0.0; 3]);
    /// let planet = Body::new("Planet", 1.0e24, [1.0e11, 0.0, 0.0], [0.0, 3.0e4, 0.0]);
    /// let params = SimulationParams {
    ///     gravitational_constant: 6.67e-11,
    ///     time_step: 3_600.0,
    ///     horizon: Horizon::Steps(24),
    /// };
    ///
    /// let run = System::new(star, vec![planet], params)?.run()?;
    /// assert_eq!(run.step_count(), 24);
    /// assert_eq!(run.body("Planet").unwrap().trajectory().len(), 25);
    /// # Ok::<(), solar_orbits::SimulationError>(())
    /// ```
    pub fn run(mut self) -> Result<Trajectories, SimulationError> {
        debug!(
            "integrating {} bodies until {:?}",
            self.bodies().len() + 1,
            self.params().horizon
        );
        while self.state() == RunState::Running {
            self.step()?;
        }
        info!(
            "trajectory data ready: {} steps, {} s simulated",
            self.step_count(),
            self.elapsed_time()
        );
        Ok(Trajectories::from_system(self))
    }
}

/// Completed run: final body states plus their full position histories.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectories {
    attractor: Body,
    bodies: Vec<Body>,
    gravitational_constant: f64,
    time_step: f64,
    elapsed_time: f64,
    step_count: usize,
}

impl Trajectories {
    fn from_system(system: System) -> Self {
        let (attractor, bodies, params, elapsed_time, step_count) = system.into_parts();
        Self {
            attractor,
            bodies,
            gravitational_constant: params.gravitational_constant,
            time_step: params.time_step,
            elapsed_time,
            step_count,
        }
    }

    pub fn attractor(&self) -> &Body {
        &self.attractor
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Looks up the attractor or an orbiting body by name.
    pub fn body(&self, name: &str) -> Option<&Body> {
        self.iter().find(|b| b.name() == name)
    }

    /// Attractor first, then orbiting bodies in configuration order.
    pub fn iter(&self) -> impl Iterator<Item = &Body> + '_ {
        std::iter::once(&self.attractor).chain(&self.bodies)
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn time_step(&self) -> f64 {
        self.time_step
    }

    pub fn gravitational_constant(&self) -> f64 {
        self.gravitational_constant
    }

    /// Total momentum of the final state.
    pub fn total_momentum(&self) -> Vector3 {
        diagnostics::total_momentum(&self.attractor, &self.bodies)
    }

    /// Total mechanical energy of the final state.
    pub fn total_energy(&self) -> f64 {
        diagnostics::total_energy(self.gravitational_constant, &self.attractor, &self.bodies)
    }
}
