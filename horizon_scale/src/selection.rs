//! Reference-body selection
//!
//! Picks at most one reference strictly smaller than the event horizon and up
//! to two strictly larger ones. A reference exactly equal to the horizon is in
//! neither set.

use crate::catalog::{
    palette, ReferenceBody, Rgba, SizeReference, FAR_REFERENCES, NEAR_SUN_REFERENCES, ORBITS,
    SUN_LABEL, SUN_RADIUS_KM,
};
use crate::scale::{DisplayMode, DistanceUnit, ScaleSelection};

pub const MAX_LARGER: usize = 2;

/// Label of the stand-in circle drawn when nothing in the catalog is larger.
pub const SCALE_MARKER_LABEL: &str = "1.2 × R_s (scale)";
pub const SCALE_MARKER_FACTOR: f64 = 1.2;

/// A reference circle chosen for the figure.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Marker {
    pub name: &'static str,
    pub radius_km: f64,
    pub color: Rgba,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Comparison {
    pub mode: DisplayMode,
    pub smaller: Option<Marker>,
    /// Ascending by radius
    pub larger: Vec<Marker>,
}

impl Comparison {
    /// Smaller reference first, then the larger ones in ascending order.
    pub fn markers(&self) -> impl Iterator<Item = &Marker> {
        self.smaller.iter().chain(self.larger.iter())
    }

    pub fn max_radius_km(&self) -> Option<f64> {
        self.markers().map(|m| m.radius_km).reduce(f64::max)
    }
}

/// Dispatch on the display mode.
pub fn select(radius_km: f64, scale: ScaleSelection) -> Comparison {
    match scale.mode {
        DisplayMode::LargeScale => select_large_scale(radius_km, scale.unit),
        DisplayMode::SmallScaleNearSun => {
            select_small_scale(radius_km, DisplayMode::SmallScaleNearSun, &NEAR_SUN_REFERENCES)
        }
        DisplayMode::SmallScaleFar => {
            select_small_scale(radius_km, DisplayMode::SmallScaleFar, &FAR_REFERENCES)
        }
    }
}

/// Compare against planetary orbits.
///
/// Colours follow slot order: the inner orbit gets C0, the outer ones C1 and C2.
pub fn select_large_scale(radius_km: f64, unit: DistanceUnit) -> Comparison {
    let below: Option<&ReferenceBody> = ORBITS
        .iter()
        .filter(|orbit| orbit.radius_km < radius_km)
        .max_by(|a, b| a.radius_km.total_cmp(&b.radius_km));

    let smaller = match below {
        Some(orbit) => Some(Marker {
            name: orbit.name,
            radius_km: orbit.radius_km,
            color: palette::C0,
        }),
        // The Sun only stands in while labels are still in km
        None if unit == DistanceUnit::Kilometers => Some(Marker {
            name: SUN_LABEL,
            radius_km: SUN_RADIUS_KM,
            color: palette::C0,
        }),
        None => None,
    };

    let mut above: Vec<&ReferenceBody> = ORBITS
        .iter()
        .filter(|orbit| orbit.radius_km > radius_km)
        .collect();
    above.sort_by(|a, b| a.radius_km.total_cmp(&b.radius_km));

    let mut larger: Vec<Marker> = above
        .into_iter()
        .take(MAX_LARGER)
        .zip([palette::C1, palette::C2])
        .map(|(orbit, color)| Marker {
            name: orbit.name,
            radius_km: orbit.radius_km,
            color,
        })
        .collect();

    if larger.is_empty() && radius_km > 0.0 {
        larger.push(Marker {
            name: SCALE_MARKER_LABEL,
            radius_km: radius_km * SCALE_MARKER_FACTOR,
            color: palette::C1,
        });
    }

    Comparison {
        mode: DisplayMode::LargeScale,
        smaller,
        larger,
    }
}

/// Compare against physical radii from a fixed reference list.
pub fn select_small_scale(radius_km: f64, mode: DisplayMode, references: &[SizeReference]) -> Comparison {
    let smaller = references
        .iter()
        .filter(|r| r.radius_km < radius_km)
        .max_by(|a, b| a.radius_km.total_cmp(&b.radius_km))
        .map(to_marker);

    let mut above: Vec<&SizeReference> = references.iter().filter(|r| r.radius_km > radius_km).collect();
    above.sort_by(|a, b| a.radius_km.total_cmp(&b.radius_km));
    let larger = above.into_iter().take(MAX_LARGER).map(to_marker).collect();

    Comparison { mode, smaller, larger }
}

fn to_marker(reference: &SizeReference) -> Marker {
    Marker {
        name: reference.name,
        radius_km: reference.radius_km,
        color: reference.color,
    }
}
