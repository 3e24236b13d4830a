//! Newtonian attraction toward the central body.

use solar_core::vector::{self, Vector3};

/// Per-body coupling `G * m_body * m_attractor` (N m²), fixed for a run.
#[inline]
pub fn coupling_constant(g: f64, body_mass: f64, attractor_mass: f64) -> f64 {
    g * body_mass * attractor_mass
}

/// Force the attractor exerts on a body, given `displacement = p_body - p_attractor`.
///
/// Computes `-gravconst * r / |r|^3` with `|r|^3 = (rx² + ry² + rz²)^1.5`, so the
/// result points from the body back toward the attractor.
///
/// A zero displacement yields NaN components. The value is not clamped; the
/// integrator checks for non-finite forces before applying them.
///
/// ```
/// use solar_orbits::gravity::gravitational_force;
///
/// let f = gravitational_force(2.0, &[1.0, 0.0, 0.0]);
/// assert_eq!(f, [-2.0, 0.0, 0.0]);
/// ```
#[inline]
pub fn gravitational_force(gravconst: f64, displacement: &Vector3) -> Vector3 {
    let modr3 = vector::norm_squared(displacement).powf(1.5);
    displacement.map(|r| -gravconst * r / modr3)
}
