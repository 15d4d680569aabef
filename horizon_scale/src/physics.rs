//! Black hole physics
//!
//! Closed-form Schwarzschild radius for a non-rotating black hole, with masses
//! in solar masses and lengths in kilometres.

/// Gravitational constant (m³ kg⁻¹ s⁻²)
pub const G: f64 = 6.67430e-11;

/// Speed of light (m/s)
pub const C: f64 = 299_792_458.0;

/// Solar mass (kg)
pub const SOLAR_MASS_KG: f64 = 1.989e30;

/// Astronomical Unit (km)
pub const AU_KM: f64 = 149_597_870.7;

/// Schwarzschild radius of one solar mass, rₛ = 2GM☉/c², in km (~2.95 km)
pub const SCHWARZSCHILD_KM_PER_SOLAR_MASS: f64 = 2.0 * G * SOLAR_MASS_KG / (C * C) / 1000.0;

/// Schwarzschild radius in km for a mass given in solar masses.
pub fn schwarzschild_radius_km(mass_solar: f64) -> f64 {
    SCHWARZSCHILD_KM_PER_SOLAR_MASS * mass_solar
}

/// Mass in solar masses for a log₁₀ slider position.
pub fn mass_from_log10(log10_mass: f64) -> f64 {
    10f64.powf(log10_mass)
}

/// Schwarzschild black hole
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct BlackHole {
    pub mass_solar: f64,
    pub radius_km: f64,
}

impl BlackHole {
    pub fn new(mass_solar: f64) -> Self {
        Self {
            mass_solar,
            radius_km: schwarzschild_radius_km(mass_solar),
        }
    }

    pub fn from_log10_mass(log10_mass: f64) -> Self {
        Self::new(mass_from_log10(log10_mass))
    }
}

impl Default for BlackHole {
    fn default() -> Self {
        Self::new(1.0)
    }
}
