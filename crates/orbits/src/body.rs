//! Body state and trajectory history.

use solar_core::vector::Vector3;

/// Ordered history of recorded positions, one per completed step plus the initial one.
///
/// Only this crate can append to a trajectory. Consumers get read-only views.
#[derive(Debug, Clone, PartialEq)]
pub struct Trajectory {
    positions: Vec<Vector3>,
}

impl Trajectory {
    fn starting_at(position: Vector3) -> Self {
        Self {
            positions: vec![position],
        }
    }

    pub(crate) fn reserve(&mut self, additional: usize) {
        self.positions.reserve(additional);
    }

    pub(crate) fn record(&mut self, position: Vector3) {
        self.positions.push(position);
    }

    /// All recorded positions, indexed by step number.
    pub fn positions(&self) -> &[Vector3] {
        &self.positions
    }

    /// Position recorded after `step` steps (0 is the initial position).
    pub fn get(&self, step: usize) -> Option<&Vector3> {
        self.positions.get(step)
    }

    pub fn initial(&self) -> &Vector3 {
        &self.positions[0]
    }

    pub fn last(&self) -> &Vector3 {
        &self.positions[self.positions.len() - 1]
    }

    pub fn len(&self) -> usize {
        self.positions.len()
    }

    /// Always false: a trajectory holds at least the initial position.
    pub fn is_empty(&self) -> bool {
        self.positions.is_empty()
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Vector3> {
        self.positions.iter()
    }

    /// Projection onto the x/y plane, as drawn by 2D viewers.
    pub fn project_xy(&self) -> impl Iterator<Item = [f64; 2]> + '_ {
        self.positions.iter().map(|p| [p[0], p[1]])
    }
}

impl<'a> IntoIterator for &'a Trajectory {
    type Item = &'a Vector3;
    type IntoIter = std::slice::Iter<'a, Vector3>;

    fn into_iter(self) -> Self::IntoIter {
        self.positions.iter()
    }
}

/// A point mass with its current state and recorded trajectory.
#[derive(Debug, Clone, PartialEq)]
pub struct Body {
    name: String,
    mass: f64,
    position: Vector3,
    velocity: Vector3,
    trajectory: Trajectory,
}

impl Body {
    /// Creates a body whose trajectory starts at `position`.
    ///
    /// Mass and state are validated when the body joins a [`System`](crate::System).
    pub fn new(name: impl Into<String>, mass: f64, position: Vector3, velocity: Vector3) -> Self {
        Self {
            name: name.into(),
            mass,
            position,
            velocity,
            trajectory: Trajectory::starting_at(position),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    /// Mass in kilograms.
    pub fn mass(&self) -> f64 {
        self.mass
    }

    /// Current position in metres.
    pub fn position(&self) -> &Vector3 {
        &self.position
    }

    /// Current velocity in m/s.
    pub fn velocity(&self) -> &Vector3 {
        &self.velocity
    }

    pub fn trajectory(&self) -> &Trajectory {
        &self.trajectory
    }

    pub fn momentum(&self) -> Vector3 {
        solar_core::vector::scale(&self.velocity, self.mass)
    }

    pub fn kinetic_energy(&self) -> f64 {
        0.5 * self.mass * solar_core::vector::norm_squared(&self.velocity)
    }

    pub(crate) fn trajectory_mut(&mut self) -> &mut Trajectory {
        &mut self.trajectory
    }

    /// Semi-implicit Euler update under a constant `force` over `dt`, then record.
    ///
    /// The position update uses the velocity produced by this same call.
    pub(crate) fn advance(&mut self, force: &Vector3, dt: f64) {
        for (v, f) in self.velocity.iter_mut().zip(force) {
            *v += f * dt / self.mass;
        }
        for (p, v) in self.position.iter_mut().zip(&self.velocity) {
            *p += v * dt;
        }
        self.trajectory.record(self.position);
    }
}
