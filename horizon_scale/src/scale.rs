//! Unit and comparison-mode selection
//!
//! Both decisions are plain threshold tests on the current horizon radius.

use crate::catalog::{MERCURY_ORBIT_KM, SUN_RADIUS_KM};
use crate::physics::AU_KM;

/// Labels switch to AU once the horizon exceeds this (0.05 AU).
pub const AU_SWITCH_KM: f64 = 0.05 * AU_KM;

/// Orbit comparison starts at half of Mercury's orbital radius.
pub const HALF_MERCURY_ORBIT_KM: f64 = 0.5 * MERCURY_ORBIT_KM;

/// Fraction of the Sun's radius where the small-scale set changes.
pub const SUN_MIN_FRACTION: f64 = 0.1;

pub const NEAR_SUN_LIMIT_KM: f64 = SUN_MIN_FRACTION * SUN_RADIUS_KM;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DistanceUnit {
    Kilometers,
    AstronomicalUnits,
}

impl DistanceUnit {
    /// Kilometres per plot unit
    pub fn km_per_unit(self) -> f64 {
        match self {
            DistanceUnit::Kilometers => 1.0,
            DistanceUnit::AstronomicalUnits => AU_KM,
        }
    }

    pub fn symbol(self) -> &'static str {
        match self {
            DistanceUnit::Kilometers => "km",
            DistanceUnit::AstronomicalUnits => "AU",
        }
    }

    pub fn from_km(self, km: f64) -> f64 {
        km / self.km_per_unit()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum DisplayMode {
    /// Compare against planetary orbits
    LargeScale,
    /// Compare against small bodies, up to Earth
    SmallScaleNearSun,
    /// Compare against small bodies, up to the Sun
    SmallScaleFar,
}

impl DisplayMode {
    pub fn is_large_scale(self) -> bool {
        self == DisplayMode::LargeScale
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ScaleSelection {
    pub unit: DistanceUnit,
    pub mode: DisplayMode,
}

pub fn select_unit(radius_km: f64) -> DistanceUnit {
    if radius_km > AU_SWITCH_KM {
        DistanceUnit::AstronomicalUnits
    } else {
        DistanceUnit::Kilometers
    }
}

pub fn select_mode(radius_km: f64) -> DisplayMode {
    if radius_km >= HALF_MERCURY_ORBIT_KM {
        DisplayMode::LargeScale
    } else if radius_km < NEAR_SUN_LIMIT_KM {
        DisplayMode::SmallScaleNearSun
    } else {
        DisplayMode::SmallScaleFar
    }
}

pub fn select_scale(radius_km: f64) -> ScaleSelection {
    ScaleSelection {
        unit: select_unit(radius_km),
        mode: select_mode(radius_km),
    }
}
