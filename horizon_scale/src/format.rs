//! Distance and readout formatting

use crate::physics::BlackHole;
use crate::scale::DistanceUnit;

/// Format with `significant` significant figures, choosing fixed or exponent
/// notation and dropping trailing zeros (printf `%g`).
pub fn format_general(value: f64, significant: usize) -> String {
    let precision = significant.max(1);

    if value == 0.0 {
        return "0".to_string();
    }
    if !value.is_finite() {
        return value.to_string();
    }

    // Round first so the exponent reflects the rounded value (9.9995 -> 10)
    let scientific = format!("{:.*e}", precision - 1, value);
    let (mantissa, exponent) = match scientific.split_once('e') {
        Some((mantissa, exponent)) => (mantissa, exponent.parse::<i32>().unwrap_or(0)),
        None => (scientific.as_str(), 0),
    };

    if exponent < -4 || exponent >= precision as i32 {
        let sign = if exponent < 0 { '-' } else { '+' };
        format!("{}e{}{:02}", trim_fraction(mantissa), sign, exponent.abs())
    } else {
        let decimals = (precision as i32 - 1 - exponent).max(0) as usize;
        trim_fraction(&format!("{:.*}", decimals, value)).to_string()
    }
}

fn trim_fraction(number: &str) -> &str {
    if number.contains('.') {
        number.trim_end_matches('0').trim_end_matches('.')
    } else {
        number
    }
}

/// Label text for a distance given in km.
pub fn format_distance(radius_km: f64, unit: DistanceUnit) -> String {
    match unit {
        DistanceUnit::AstronomicalUnits => {
            format!("{} AU", format_general(unit.from_km(radius_km), 3))
        }
        DistanceUnit::Kilometers if radius_km >= 1e6 => format!("{:.2} Mkm", radius_km / 1e6),
        DistanceUnit::Kilometers if radius_km >= 1e3 => format!("{:.1}k km", radius_km / 1e3),
        DistanceUnit::Kilometers => format!("{:.0} km", radius_km),
    }
}

/// Horizon radius for the readout line, 4 significant figures.
pub fn format_radius_readout(black_hole: &BlackHole, unit: DistanceUnit) -> String {
    format!(
        "{} {}",
        format_general(unit.from_km(black_hole.radius_km), 4),
        unit.symbol()
    )
}

pub fn format_mass_readout(black_hole: &BlackHole) -> String {
    format!("{} M☉", format_general(black_hole.mass_solar, 4))
}

/// Axis tick label, in plot units.
pub fn format_tick(value: f64) -> String {
    if value.abs() < f64::EPSILON {
        "0".to_string()
    } else {
        format_general(value, 3)
    }
}
