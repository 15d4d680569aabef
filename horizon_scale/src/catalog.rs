//! Solar system reference scales
//!
//! Orbital radii (semi-major axes) and physical radii of the bodies the event
//! horizon is compared against. All values in km.

use crate::physics::AU_KM;

/// Linear RGBA colour, as uploaded to the GPU.
pub type Rgba = [f32; 4];

/// A named length in the solar system.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ReferenceBody {
    pub name: &'static str,
    pub radius_km: f64,
}

/// A physical-size reference with its fixed plotting colour.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SizeReference {
    pub name: &'static str,
    pub radius_km: f64,
    pub color: Rgba,
}

pub const MERCURY_ORBIT_KM: f64 = 0.387 * AU_KM;

/// Planetary and dwarf-planet orbits, ascending.
pub const ORBITS: [ReferenceBody; 12] = [
    ReferenceBody { name: "Mercury", radius_km: MERCURY_ORBIT_KM },
    ReferenceBody { name: "Venus", radius_km: 0.723 * AU_KM },
    ReferenceBody { name: "Earth", radius_km: 1.0 * AU_KM },
    ReferenceBody { name: "Mars", radius_km: 1.524 * AU_KM },
    ReferenceBody { name: "Ceres", radius_km: 2.766 * AU_KM },
    ReferenceBody { name: "Jupiter", radius_km: 5.203 * AU_KM },
    ReferenceBody { name: "Saturn", radius_km: 9.537 * AU_KM },
    ReferenceBody { name: "Uranus", radius_km: 19.19 * AU_KM },
    ReferenceBody { name: "Neptune", radius_km: 30.07 * AU_KM },
    ReferenceBody { name: "Pluto", radius_km: 39.48 * AU_KM },
    ReferenceBody { name: "Makemake", radius_km: 45.43 * AU_KM },
    ReferenceBody { name: "Eris", radius_km: 67.86 * AU_KM },
];

// Physical radii
pub const SUN_RADIUS_KM: f64 = 695_700.0;
pub const JUPITER_RADIUS_KM: f64 = 69_911.0;
pub const EARTH_RADIUS_KM: f64 = 6_371.0;
pub const MOON_RADIUS_KM: f64 = 1_738.0;
pub const PLUTO_RADIUS_KM: f64 = 1_188.0;
pub const CERES_RADIUS_KM: f64 = 476.0;
pub const VESTA_RADIUS_KM: f64 = 262.0;
pub const ENCELADUS_RADIUS_KM: f64 = 252.0;
pub const EROS_RADIUS_KM: f64 = 8.4;
/// Characteristic radius of the 15×8×8 km nucleus
pub const HALLEY_NUCLEUS_KM: f64 = 11.0;
pub const NEUTRON_STAR_RADIUS_KM: f64 = 10.0;

pub const SUN_LABEL: &str = "Sun (radius)";

/// Named colours
pub mod palette {
    use super::Rgba;

    pub const BLACK: Rgba = [0.0, 0.0, 0.0, 1.0];
    pub const AXIS_GRAY: Rgba = [0.5, 0.5, 0.5, 1.0];
    pub const GRID_GRAY: Rgba = [0.69, 0.69, 0.69, 0.3];

    // Cycle used for orbit comparisons
    pub const C0: Rgba = [0.122, 0.467, 0.706, 1.0];
    pub const C1: Rgba = [1.0, 0.498, 0.055, 1.0];
    pub const C2: Rgba = [0.173, 0.627, 0.173, 1.0];

    pub const DARK_ORANGE: Rgba = [1.0, 0.549, 0.0, 1.0];
    pub const SILVER: Rgba = [0.753, 0.753, 0.753, 1.0];
    pub const LIGHT_BLUE: Rgba = [0.678, 0.847, 0.902, 1.0];
    pub const TAN: Rgba = [0.824, 0.706, 0.549, 1.0];
    pub const GRAY: Rgba = [0.502, 0.502, 0.502, 1.0];
    pub const LIGHT_GRAY: Rgba = [0.827, 0.827, 0.827, 1.0];
    pub const STEEL_BLUE: Rgba = [0.275, 0.510, 0.706, 1.0];
    pub const BROWN: Rgba = [0.647, 0.165, 0.165, 1.0];
    pub const ORANGE: Rgba = [1.0, 0.647, 0.0, 1.0];
    pub const SANDY_BROWN: Rgba = [0.957, 0.643, 0.376, 1.0];
    pub const GOLD: Rgba = [1.0, 0.843, 0.0, 1.0];
}

/// Comparison set when the horizon is under a tenth of the Sun's radius.
pub const NEAR_SUN_REFERENCES: [SizeReference; 7] = [
    SizeReference { name: "Eros (asteroid)", radius_km: EROS_RADIUS_KM, color: palette::DARK_ORANGE },
    SizeReference {
        name: "Neutron star (typical radius)",
        radius_km: NEUTRON_STAR_RADIUS_KM,
        color: palette::SILVER,
    },
    SizeReference {
        name: "Enceladus (moon of Saturn)",
        radius_km: ENCELADUS_RADIUS_KM,
        color: palette::LIGHT_BLUE,
    },
    SizeReference { name: "Vesta (asteroid)", radius_km: VESTA_RADIUS_KM, color: palette::TAN },
    SizeReference { name: "Ceres (dwarf planet)", radius_km: CERES_RADIUS_KM, color: palette::GRAY },
    SizeReference { name: "Moon (Earth's moon)", radius_km: MOON_RADIUS_KM, color: palette::LIGHT_GRAY },
    SizeReference { name: "Earth (radius)", radius_km: EARTH_RADIUS_KM, color: palette::STEEL_BLUE },
];

/// Comparison set from a tenth of the Sun's radius up to half Mercury's orbit.
pub const FAR_REFERENCES: [SizeReference; 8] = [
    SizeReference {
        name: "Neutron star (typical radius)",
        radius_km: NEUTRON_STAR_RADIUS_KM,
        color: palette::SILVER,
    },
    SizeReference { name: "Halley's comet nucleus", radius_km: HALLEY_NUCLEUS_KM, color: palette::BROWN },
    SizeReference { name: "Vesta (asteroid)", radius_km: VESTA_RADIUS_KM, color: palette::TAN },
    SizeReference { name: "Ceres (dwarf planet)", radius_km: CERES_RADIUS_KM, color: palette::GRAY },
    SizeReference { name: "Pluto (dwarf planet)", radius_km: PLUTO_RADIUS_KM, color: palette::ORANGE },
    SizeReference { name: "Earth (radius)", radius_km: EARTH_RADIUS_KM, color: palette::STEEL_BLUE },
    SizeReference { name: "Jupiter (radius)", radius_km: JUPITER_RADIUS_KM, color: palette::SANDY_BROWN },
    SizeReference { name: SUN_LABEL, radius_km: SUN_RADIUS_KM, color: palette::GOLD },
];

/// Static notes shown under "Reference values".
pub const REFERENCE_NOTES: &[&str] = &[
    "Schwarzschild radius: R_s = 2GM/c² ≈ 2.95 km for 1 M☉",
    "Half Mercury orbit: ≈ 29 million km (threshold for switching comparison mode)",
    "Sun radius: ~696,000 km; Jupiter radius: ~70,000 km; Earth radius: ~6,371 km; Moon: ~1,738 km",
    "Neutron star (typical radius): ~10 km; Eros (asteroid): ~8.4 km (for smallest mass black holes)",
    "Small/mid-scale (R_s < ~70,000 km): Eros, neutron star, Enceladus 252 km, Vesta ~263 km, Ceres ~470 km, Moon 1,738 km, Earth 6,371 km",
    "Orbital radii: Mercury 58 Mkm, Earth 150 Mkm, Pluto 5.9 billion km, Makemake 45.4 AU, Eris 67.9 AU",
    "Halley's comet nucleus: ~11 km; Pluto ~1,188 km radius",
];
