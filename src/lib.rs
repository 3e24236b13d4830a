//! Newtonian star/body simulation.
//!
//! The integrator lives in [`orbits`] and manifests in [`config`]. Shared
//! constants and vector helpers are re-exported from `solar_core`.
//! [`scenario`] glues a manifest to a runnable [`orbits::System`]. Front-ends
//! such as the `simulate` CLI consume the resulting [`orbits::Trajectories`].

pub mod scenario;

pub use solar_config as config;
pub use solar_core::{constants, time, units, vector};
pub use solar_orbits as orbits;
