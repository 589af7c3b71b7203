//! Local formula helpers for the calculator commands.
//!
//! All computation here is synchronous and self-contained. Invalid inputs
//! are typed errors rather than sentinel values.

use crate::convert::{METERS_PER_MEGAPARSEC, SECONDS_PER_YEAR};

/// Newtonian gravitational constant, m³ kg⁻¹ s⁻².
pub const GRAVITATIONAL_CONSTANT: f64 = 6.67430e-11;
/// Speed of light, m/s.
pub const SPEED_OF_LIGHT: f64 = 3e8;

/// Errors from the formula helpers.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum PhysicsError {
    /// Carnot reservoirs must satisfy `hot > cold` with `hot` above zero.
    #[error("invalid reservoirs: hot {hot} K, cold {cold} K (need hot > cold and hot > 0)")]
    InvalidReservoirs { hot: f64, cold: f64 },

    /// Schwarzschild radius needs a positive mass.
    #[error("mass must be positive, got {0} kg")]
    NonPositiveMass(f64),

    /// Expansion-age estimate needs a positive Hubble constant.
    #[error("Hubble constant must be positive, got {0} km/s/Mpc")]
    NonPositiveHubble(f64),
}

/// Carnot efficiency as a fraction, for reservoir temperatures in kelvin.
pub fn carnot_efficiency(hot_k: f64, cold_k: f64) -> Result<f64, PhysicsError> {
    if hot_k > cold_k && hot_k > 0.0 {
        Ok(1.0 - cold_k / hot_k)
    } else {
        Err(PhysicsError::InvalidReservoirs {
            hot: hot_k,
            cold: cold_k,
        })
    }
}

/// Schwarzschild radius in meters for a mass in kilograms.
pub fn schwarzschild_radius(mass_kg: f64) -> Result<f64, PhysicsError> {
    if mass_kg <= 0.0 {
        return Err(PhysicsError::NonPositiveMass(mass_kg));
    }
    Ok(2.0 * GRAVITATIONAL_CONSTANT * mass_kg / (SPEED_OF_LIGHT * SPEED_OF_LIGHT))
}

/// Recession velocity in km/s under Hubble's law.
///
/// `h0` in km/s/Mpc, `distance_mpc` in megaparsecs.
pub fn hubble_velocity(h0: f64, distance_mpc: f64) -> f64 {
    h0 * distance_mpc
}

/// Naive expansion age of the universe in years, `1 / H0`.
pub fn universe_age_years(h0: f64) -> Result<f64, PhysicsError> {
    if h0 <= 0.0 {
        return Err(PhysicsError::NonPositiveHubble(h0));
    }
    // H0 in km/s/Mpc -> 1/s, then invert and convert seconds to years
    let seconds = 1.0 / (h0 * 1e3 / METERS_PER_MEGAPARSEC);
    Ok(seconds / SECONDS_PER_YEAR)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_carnot_efficiency() {
        let eff = carnot_efficiency(500.0, 300.0).unwrap();
        assert!((eff - 0.4).abs() < 1e-12);
    }

    #[test]
    fn test_carnot_rejects_cold_hotter_than_hot() {
        let err = carnot_efficiency(300.0, 500.0).unwrap_err();
        assert!(matches!(err, PhysicsError::InvalidReservoirs { .. }));
    }

    #[test]
    fn test_carnot_rejects_equal_reservoirs() {
        assert!(carnot_efficiency(300.0, 300.0).is_err());
    }

    #[test]
    fn test_carnot_rejects_non_positive_hot() {
        assert!(carnot_efficiency(0.0, -10.0).is_err());
        assert!(carnot_efficiency(-5.0, -10.0).is_err());
    }

    #[test]
    fn test_schwarzschild_radius_of_sun() {
        let r = schwarzschild_radius(1.989e30).unwrap();
        // About 2.95 km for one solar mass
        assert!((r - 2950.0).abs() < 10.0, "got {r}");
    }

    #[test]
    fn test_schwarzschild_rejects_non_positive_mass() {
        assert!(schwarzschild_radius(0.0).is_err());
        assert!(schwarzschild_radius(-1.0).is_err());
    }

    #[test]
    fn test_hubble_velocity() {
        let v = hubble_velocity(70.0, 1000.0);
        assert!((v - 70_000.0).abs() < 1e-9);
    }

    #[test]
    fn test_universe_age_near_fourteen_billion_years() {
        let age = universe_age_years(70.0).unwrap();
        assert!((age / 1e9 - 13.97).abs() < 0.05, "got {age}");
    }

    #[test]
    fn test_universe_age_rejects_non_positive_hubble() {
        assert!(universe_age_years(0.0).is_err());
        assert!(universe_age_years(-70.0).is_err());
    }
}
