//! Parallax distances

/// Proxima Centauri's parallax in arcseconds
pub const PROXIMA_CENTAURI_PARALLAX_ARCSEC: f64 = 0.768;

/// Distance in parsecs for a parallax in arcseconds, d = 1/p.
pub fn distance_parsecs(parallax_arcsec: f64) -> f64 {
    1.0 / parallax_arcsec
}

pub fn greeting() -> [String; 3] {
    [
        "# Welcome to Astronomy Tools".to_string(),
        "This is my first astronomy app!".to_string(),
        format!(
            "Distance to Proxima Centauri: {:.2} parsecs",
            distance_parsecs(PROXIMA_CENTAURI_PARALLAX_ARCSEC)
        ),
    ]
}
