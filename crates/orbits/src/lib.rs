//! Star/body gravity integrator.
//!
//! A [`System`] holds one central attractor and any number of orbiting
//! bodies. Each step applies Newtonian gravity from the attractor to every
//! orbiting body and recoils the attractor from the net reaction, using
//! semi-implicit Euler. [`System::run`] drives the loop to the configured
//! horizon and hands back the per-body [`Trajectories`].

pub mod body;
pub mod diagnostics;
pub mod error;
pub mod gravity;
pub mod run;
pub mod system;

pub use body::{Body, Trajectory};
pub use error::SimulationError;
pub use run::{RunState, Trajectories};
pub use system::{Horizon, SimulationParams, System};
