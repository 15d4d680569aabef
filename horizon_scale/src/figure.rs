//! Figure model
//!
//! Everything the viewer draws for one mass: concentric circles in plot units
//! (km or AU), axis limits, title, axis labels and legend text. Built fresh on
//! every slider change; the GPU and egui layers only consume it.

use log::{debug, info};

use crate::catalog::{palette, Rgba};
use crate::config::{LOG10_MASS_DEFAULT, LOG10_MASS_MAX, LOG10_MASS_MIN};
use crate::format::format_distance;
use crate::physics::BlackHole;
use crate::scale::{select_scale, DisplayMode, ScaleSelection};
use crate::selection::{select, Comparison};

/// Headroom over the largest orbit-mode circle before the final padding.
const LARGE_HORIZON_HEADROOM: f64 = 1.2;
const LARGE_REFERENCE_HEADROOM: f64 = 1.1;
const LARGE_PADDING: f64 = 1.05;
const SMALL_PADDING: f64 = 1.25;

/// Approximate number of grid lines on each side of the origin.
const TARGET_TICKS_PER_SIDE: f64 = 4.0;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LineStyle {
    Solid,
    Dashed,
}

/// An unfilled circle centred on the origin.
#[derive(Debug, Clone, PartialEq)]
pub struct FigureCircle {
    /// Radius in plot units
    pub radius: f64,
    pub color: Rgba,
    /// Stroke width in pixels
    pub width: f32,
    pub style: LineStyle,
    /// Legend text; the event horizon has none
    pub label: Option<String>,
}

#[derive(Debug, Clone, PartialEq)]
pub struct Figure {
    pub black_hole: BlackHole,
    pub scale: ScaleSelection,
    pub comparison: Comparison,
    pub horizon: FigureCircle,
    pub references: Vec<FigureCircle>,
    /// Half-width of the square plot window, in plot units
    pub limit: f64,
    pub title: String,
    pub axis_label: String,
    pub show_grid: bool,
    /// Size of the origin "+" marker in pixels
    pub center_marker_px: f32,
}

impl Figure {
    pub fn build(black_hole: BlackHole) -> Self {
        let radius_km = black_hole.radius_km;
        let scale = select_scale(radius_km);
        let comparison = select(radius_km, scale);
        let unit = scale.unit;
        let large = scale.mode.is_large_scale();

        let horizon = FigureCircle {
            radius: unit.from_km(radius_km),
            color: palette::BLACK,
            width: 2.5,
            style: LineStyle::Solid,
            label: None,
        };

        let references: Vec<FigureCircle> = comparison
            .markers()
            .map(|marker| FigureCircle {
                radius: unit.from_km(marker.radius_km),
                color: marker.color,
                width: if large { 2.0 } else { 1.5 },
                style: if large { LineStyle::Dashed } else { LineStyle::Solid },
                label: Some(format!("{} ({})", marker.name, format_distance(marker.radius_km, unit))),
            })
            .collect();

        let limit = if large {
            let largest = references
                .iter()
                .map(|c| c.radius * LARGE_REFERENCE_HEADROOM)
                .fold(horizon.radius * LARGE_HORIZON_HEADROOM, f64::max);
            largest * LARGE_PADDING
        } else {
            let largest_km = comparison.max_radius_km().map_or(radius_km, |r| r.max(radius_km));
            unit.from_km(largest_km * SMALL_PADDING)
        };

        let horizon_text = format_distance(radius_km, unit);
        let title = match scale.mode {
            DisplayMode::LargeScale => format!("Event horizon (black circle): R_s = {horizon_text}"),
            DisplayMode::SmallScaleNearSun | DisplayMode::SmallScaleFar => {
                format!("Event horizon vs solar system objects (R_s = {horizon_text})")
            }
        };

        Self {
            black_hole,
            scale,
            comparison,
            horizon,
            references,
            limit,
            title,
            axis_label: format!("Distance ({})", unit.symbol()),
            show_grid: !large,
            center_marker_px: if large { 10.0 } else { 8.0 },
        }
    }

    /// Horizon first, then references in legend order.
    pub fn circles(&self) -> impl Iterator<Item = &FigureCircle> {
        std::iter::once(&self.horizon).chain(self.references.iter())
    }

    /// (label, colour, style) for every labelled circle.
    pub fn legend(&self) -> impl Iterator<Item = (&str, Rgba, LineStyle)> {
        self.references
            .iter()
            .filter_map(|c| c.label.as_deref().map(|label| (label, c.color, c.style)))
    }

    /// Tick positions within `[-limit, limit]`, symmetric about the origin.
    pub fn ticks(&self) -> Vec<f64> {
        let step = nice_step(self.limit / TARGET_TICKS_PER_SIDE);
        if !(step.is_finite() && step > 0.0) {
            return vec![0.0];
        }

        let count = (self.limit / step).floor() as i64;
        (-count..=count).map(|i| i as f64 * step).collect()
    }
}

/// Slider position and the figure built for it, always in step.
#[derive(Debug, Clone)]
pub struct MassSetting {
    log10_mass: f64,
    figure: Figure,
}

impl MassSetting {
    pub fn new(log10_mass: f64) -> Self {
        let log10_mass = log10_mass.clamp(LOG10_MASS_MIN, LOG10_MASS_MAX);
        Self {
            log10_mass,
            figure: Figure::build(BlackHole::from_log10_mass(log10_mass)),
        }
    }

    pub fn log10_mass(&self) -> f64 {
        self.log10_mass
    }

    pub fn figure(&self) -> &Figure {
        &self.figure
    }

    /// Clamp to the slider range and rebuild the figure. Returns true when
    /// the position changed.
    pub fn set_log10_mass(&mut self, log10_mass: f64) -> bool {
        let log10_mass = log10_mass.clamp(LOG10_MASS_MIN, LOG10_MASS_MAX);
        if log10_mass == self.log10_mass {
            return false;
        }

        let previous = self.figure.scale;
        self.log10_mass = log10_mass;
        self.figure = Figure::build(BlackHole::from_log10_mass(log10_mass));

        let figure = &self.figure;
        debug!(
            "log10(M) = {:.1}: M = {:.4e} M☉, R_s = {:.4e} km, {} reference(s)",
            log10_mass,
            figure.black_hole.mass_solar,
            figure.black_hole.radius_km,
            figure.references.len()
        );

        if figure.scale != previous {
            info!(
                "Switched to {:?} in {} at R_s = {}",
                figure.scale.mode,
                figure.scale.unit.symbol(),
                format_distance(figure.black_hole.radius_km, figure.scale.unit)
            );
        }

        true
    }
}

impl Default for MassSetting {
    fn default() -> Self {
        Self::new(LOG10_MASS_DEFAULT)
    }
}

/// Round a raw spacing up to 1, 2 or 5 times a power of ten.
pub fn nice_step(raw: f64) -> f64 {
    if !(raw.is_finite() && raw > 0.0) {
        return 0.0;
    }

    let magnitude = 10f64.powf(raw.log10().floor());
    let fraction = raw / magnitude;
    let nice = if fraction <= 1.0 {
        1.0
    } else if fraction <= 2.0 {
        2.0
    } else if fraction <= 5.0 {
        5.0
    } else {
        10.0
    };

    nice * magnitude
}
