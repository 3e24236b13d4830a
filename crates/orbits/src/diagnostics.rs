//! Conservation diagnostics used to judge integration drift.

use solar_core::vector::{self, Vector3};

use crate::body::Body;

/// Sum of `m * v` over the attractor and all orbiting bodies.
///
/// Because the attractor recoils from exactly the forces applied to the
/// orbiting bodies, this stays constant up to rounding.
pub fn total_momentum(attractor: &Body, bodies: &[Body]) -> Vector3 {
    bodies
        .iter()
        .map(Body::momentum)
        .fold(attractor.momentum(), |acc, p| vector::add(&acc, &p))
}

/// Kinetic energy of the attractor and all orbiting bodies (J).
pub fn kinetic_energy(attractor: &Body, bodies: &[Body]) -> f64 {
    attractor.kinetic_energy() + bodies.iter().map(Body::kinetic_energy).sum::<f64>()
}

/// Attractor↔body potential energy, `-G M m / r` summed over orbiting bodies (J).
///
/// Body↔body pairs are left out to match the force model.
pub fn potential_energy(g: f64, attractor: &Body, bodies: &[Body]) -> f64 {
    bodies
        .iter()
        .map(|b| {
            let r = vector::norm(&vector::sub(b.position(), attractor.position()));
            -g * attractor.mass() * b.mass() / r
        })
        .sum()
}

/// Total mechanical energy (J).
///
/// Semi-implicit Euler does not conserve this exactly. Expect a bounded
/// oscillation whose amplitude scales with the time step.
pub fn total_energy(g: f64, attractor: &Body, bodies: &[Body]) -> f64 {
    kinetic_energy(attractor, bodies) + potential_energy(g, attractor, bodies)
}

/// Relative change `|after - before| / |before|`; absolute change when `before` is zero.
pub fn relative_drift(before: f64, after: f64) -> f64 {
    let delta = (after - before).abs();
    if before == 0.0 {
        delta
    } else {
        delta / before.abs()
    }
}
