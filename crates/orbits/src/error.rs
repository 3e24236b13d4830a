use thiserror::Error;

/// Errors raised while assembling or advancing a [`System`](crate::System).
#[derive(Debug, Error, Clone, PartialEq)]
pub enum SimulationError {
    #[error("body '{body}' has non-positive or non-finite mass {mass}")]
    NonPositiveMass { body: String, mass: f64 },
    #[error("time step must be positive and finite (got {0})")]
    InvalidTimeStep(f64),
    #[error("simulation duration must be non-negative and finite (got {0})")]
    InvalidDuration(f64),
    #[error("gravitational constant must be positive and finite (got {0})")]
    InvalidGravitationalConstant(f64),
    #[error("body '{body}' has a non-finite {quantity}")]
    NonFiniteState { body: String, quantity: &'static str },
    #[error("body '{body}' starts at zero separation from the attractor")]
    ZeroSeparation { body: String },
    #[error("gravitational force on '{body}' became non-finite at step {step}")]
    NonFiniteForce { body: String, step: usize },
}
