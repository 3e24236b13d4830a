//! System state and the single integration step.

use log::debug;
use solar_core::vector::{self, Vector3};

use crate::body::Body;
use crate::diagnostics;
use crate::error::SimulationError;
use crate::gravity;

/// Upper bound on the trajectory capacity reserved up front. Longer runs grow
/// their buffers on demand.
const MAX_PREALLOCATED_STEPS: usize = 1 << 20;

/// When the driver loop stops.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Horizon {
    /// Keep stepping while elapsed simulated time (s) is below this value.
    Duration(f64),
    /// Take exactly this many steps.
    Steps(usize),
}

impl Horizon {
    /// Expected step count at `time_step`, used to size trajectory buffers.
    pub fn planned_steps(&self, time_step: f64) -> usize {
        match *self {
            Horizon::Duration(seconds) => (seconds / time_step).ceil() as usize,
            Horizon::Steps(steps) => steps,
        }
    }
}

/// Numeric parameters fixed for the whole run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SimulationParams {
    pub gravitational_constant: f64,
    /// Seconds advanced per step.
    pub time_step: f64,
    pub horizon: Horizon,
}

/// One central attractor plus the bodies orbiting it.
///
/// Only attractor↔body forces are modelled. Orbiting bodies do not attract
/// each other. The attractor recoils from the summed reaction of every
/// orbiting body.
#[derive(Debug, Clone)]
pub struct System {
    attractor: Body,
    bodies: Vec<Body>,
    couplings: Vec<f64>,
    forces: Vec<Vector3>,
    params: SimulationParams,
    elapsed_time: f64,
    step_count: usize,
}

impl System {
    /// Validates masses, initial state, and parameters, then assembles the system.
    pub fn new(
        mut attractor: Body,
        mut bodies: Vec<Body>,
        params: SimulationParams,
    ) -> Result<Self, SimulationError> {
        validate_params(&params)?;
        validate_body(&attractor)?;
        for body in &bodies {
            validate_body(body)?;
            let separation = vector::sub(body.position(), attractor.position());
            if vector::norm_squared(&separation) == 0.0 {
                return Err(SimulationError::ZeroSeparation {
                    body: body.name().to_string(),
                });
            }
        }

        let planned = params
            .horizon
            .planned_steps(params.time_step)
            .min(MAX_PREALLOCATED_STEPS);
        attractor.trajectory_mut().reserve(planned);
        for body in &mut bodies {
            body.trajectory_mut().reserve(planned);
        }

        let couplings = bodies
            .iter()
            .map(|b| gravity::coupling_constant(params.gravitational_constant, b.mass(), attractor.mass()))
            .collect();
        let forces = vec![vector::ZERO; bodies.len()];

        debug!(
            "assembled system around '{}' with {} orbiting bodies (dt = {} s, horizon = {:?})",
            attractor.name(),
            bodies.len(),
            params.time_step,
            params.horizon
        );

        Ok(Self {
            attractor,
            bodies,
            couplings,
            forces,
            params,
            elapsed_time: 0.0,
            step_count: 0,
        })
    }

    pub fn attractor(&self) -> &Body {
        &self.attractor
    }

    pub fn bodies(&self) -> &[Body] {
        &self.bodies
    }

    /// Looks up the attractor or an orbiting body by name.
    pub fn body(&self, name: &str) -> Option<&Body> {
        std::iter::once(&self.attractor)
            .chain(&self.bodies)
            .find(|b| b.name() == name)
    }

    pub fn params(&self) -> &SimulationParams {
        &self.params
    }

    /// Simulated seconds elapsed so far.
    pub fn elapsed_time(&self) -> f64 {
        self.elapsed_time
    }

    pub fn step_count(&self) -> usize {
        self.step_count
    }

    /// Total linear momentum (kg m/s) of attractor and bodies.
    pub fn total_momentum(&self) -> Vector3 {
        diagnostics::total_momentum(&self.attractor, &self.bodies)
    }

    /// Kinetic plus attractor↔body potential energy (J).
    pub fn total_energy(&self) -> f64 {
        diagnostics::total_energy(self.params.gravitational_constant, &self.attractor, &self.bodies)
    }

    /// Advances every body by one time step.
    ///
    /// All forces are evaluated from the pre-step positions first. Then each
    /// orbiting body gets its velocity and position update. Last, the attractor
    /// recoils from the negated sum of those same forces. If a force comes out
    /// non-finite, nothing is updated and the step reports
    /// [`SimulationError::NonFiniteForce`].
    pub fn step(&mut self) -> Result<(), SimulationError> {
        let dt = self.params.time_step;
        let origin = *self.attractor.position();

        for ((slot, body), gravconst) in self
            .forces
            .iter_mut()
            .zip(&self.bodies)
            .zip(&self.couplings)
        {
            let displacement = vector::sub(body.position(), &origin);
            let force = gravity::gravitational_force(*gravconst, &displacement);
            if !vector::is_finite(&force) {
                return Err(SimulationError::NonFiniteForce {
                    body: body.name().to_string(),
                    step: self.step_count + 1,
                });
            }
            *slot = force;
        }

        for (body, force) in self.bodies.iter_mut().zip(&self.forces) {
            body.advance(force, dt);
        }

        let net = self
            .forces
            .iter()
            .fold(vector::ZERO, |acc, f| vector::add(&acc, f));
        self.attractor.advance(&vector::neg(&net), dt);

        self.elapsed_time += dt;
        self.step_count += 1;
        Ok(())
    }

    pub(crate) fn into_parts(self) -> (Body, Vec<Body>, SimulationParams, f64, usize) {
        (
            self.attractor,
            self.bodies,
            self.params,
            self.elapsed_time,
            self.step_count,
        )
    }
}

fn validate_params(params: &SimulationParams) -> Result<(), SimulationError> {
    let g = params.gravitational_constant;
    if !(g.is_finite() && g > 0.0) {
        return Err(SimulationError::InvalidGravitationalConstant(g));
    }
    let dt = params.time_step;
    if !(dt.is_finite() && dt > 0.0) {
        return Err(SimulationError::InvalidTimeStep(dt));
    }
    if let Horizon::Duration(seconds) = params.horizon {
        if !(seconds.is_finite() && seconds >= 0.0) {
            return Err(SimulationError::InvalidDuration(seconds));
        }
    }
    Ok(())
}

fn validate_body(body: &Body) -> Result<(), SimulationError> {
    let mass = body.mass();
    if !(mass.is_finite() && mass > 0.0) {
        return Err(SimulationError::NonPositiveMass {
            body: body.name().to_string(),
            mass,
        });
    }
    let checks = [("position", body.position()), ("velocity", body.velocity())];
    for (quantity, value) in checks {
        if !vector::is_finite(value) {
            return Err(SimulationError::NonFiniteState {
                body: body.name().to_string(),
                quantity,
            });
        }
    }
    Ok(())
}
