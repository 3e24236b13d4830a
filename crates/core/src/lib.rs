//! Core constants, unit helpers, and shared primitives for the solar system simulator workspace.

/// Physical constants expressed in SI units (unless stated otherwise).
///
/// The values match the reference inner-system scenario rather than CODATA,
/// so trajectories reproduce the reference output exactly.
pub mod constants {
    /// Newtonian gravitational constant (m³ kg⁻¹ s⁻²).
    pub const G: f64 = 6.67e-11;
    /// Metres per astronomical unit (rounded).
    pub const AU_M: f64 = 1.5e11;
    /// Seconds per day.
    pub const SECONDS_PER_DAY: f64 = 24.0 * 60.0 * 60.0;
    /// Days per (non-leap) year.
    pub const DAYS_PER_YEAR: f64 = 365.0;

    /// Solar mass (kg).
    pub const SUN_MASS_KG: f64 = 2.0e30;
    /// Earth mass (kg).
    pub const EARTH_MASS_KG: f64 = 5.972e24;
    /// Mars mass (kg).
    pub const MARS_MASS_KG: f64 = 6.39e23;
    /// Mass of the reference comet (kg).
    pub const COMET_MASS_KG: f64 = 6.39e20;

    /// Earth orbital speed at aphelion (m/s).
    pub const EARTH_APHELION_SPEED_M_S: f64 = 29_290.0;
    /// Mars orbital speed at aphelion (m/s).
    pub const MARS_APHELION_SPEED_M_S: f64 = 21_970.0;
    /// Initial speed of the reference comet (m/s).
    pub const COMET_SPEED_M_S: f64 = 7_000.0;

    /// Earth aphelion distance (AU).
    pub const EARTH_APHELION_AU: f64 = 1.0167;
    /// Mars aphelion distance (AU).
    pub const MARS_APHELION_AU: f64 = 1.666;
    /// Initial heliocentric distance of the reference comet (AU).
    pub const COMET_START_AU: f64 = 2.0;
}

/// Basic unit conversion helpers.
pub mod units {
    use super::constants::AU_M;

    /// Convert astronomical units to metres.
    #[inline]
    pub fn au_to_m(v: f64) -> f64 {
        v * AU_M
    }

    /// Convert metres to astronomical units.
    #[inline]
    pub fn m_to_au(v: f64) -> f64 {
        v / AU_M
    }
}

/// Lightweight time utilities shared across crates.
pub mod time {
    use super::constants::{DAYS_PER_YEAR, SECONDS_PER_DAY};

    /// Convert days to seconds.
    #[inline]
    pub fn days_to_seconds(days: f64) -> f64 {
        days * SECONDS_PER_DAY
    }

    /// Convert seconds to days.
    #[inline]
    pub fn seconds_to_days(seconds: f64) -> f64 {
        seconds / SECONDS_PER_DAY
    }

    /// Convert 365-day years to seconds.
    #[inline]
    pub fn years_to_seconds(years: f64) -> f64 {
        years * DAYS_PER_YEAR * SECONDS_PER_DAY
    }
}

/// Minimal vector helpers to avoid ad-hoc `[f64; 3]` math everywhere.
pub mod vector {
    /// Alias for a 3D vector in metres, m/s, or newtons depending on context.
    pub type Vector3 = [f64; 3];

    /// The zero vector.
    pub const ZERO: Vector3 = [0.0, 0.0, 0.0];

    /// Squared Euclidean norm, summed in x, y, z order.
    #[inline]
    pub fn norm_squared(v: &Vector3) -> f64 {
        v[0] * v[0] + v[1] * v[1] + v[2] * v[2]
    }

    /// Euclidean norm of a vector.
    #[inline]
    pub fn norm(v: &Vector3) -> f64 {
        norm_squared(v).sqrt()
    }

    /// Dot product of two vectors.
    #[inline]
    pub fn dot(a: &Vector3, b: &Vector3) -> f64 {
        a[0] * b[0] + a[1] * b[1] + a[2] * b[2]
    }

    /// Vector addition.
    #[inline]
    pub fn add(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] + b[0], a[1] + b[1], a[2] + b[2]]
    }

    /// Vector subtraction.
    #[inline]
    pub fn sub(a: &Vector3, b: &Vector3) -> Vector3 {
        [a[0] - b[0], a[1] - b[1], a[2] - b[2]]
    }

    /// Scale a vector by a scalar.
    #[inline]
    pub fn scale(v: &Vector3, s: f64) -> Vector3 {
        [v[0] * s, v[1] * s, v[2] * s]
    }

    /// Component-wise negation.
    #[inline]
    pub fn neg(v: &Vector3) -> Vector3 {
        [-v[0], -v[1], -v[2]]
    }

    /// True when every component is finite.
    #[inline]
    pub fn is_finite(v: &Vector3) -> bool {
        v.iter().all(|c| c.is_finite())
    }
}
