//! Window, control and drawing constants

pub const WINDOW_TITLE: &str = "Schwarzschild Radius";
pub const PAGE_HEADING: &str = "Black Hole Event Horizon vs. Solar System";
pub const WINDOW_WIDTH: u32 = 1280;
pub const WINDOW_HEIGHT: u32 = 900;

// Mass slider, in log10(M / M_sun)
pub const SLIDER_LABEL: &str = "log₁₀(mass in M☉)";
pub const SLIDER_HELP: &str = "Mass = 10^slider M☉ (0 = 1 M☉, 10 = 10¹⁰ M☉)";
pub const LOG10_MASS_MIN: f64 = 0.0;
pub const LOG10_MASS_MAX: f64 = 10.0;
pub const LOG10_MASS_STEP: f64 = 0.1;
pub const LOG10_MASS_DEFAULT: f64 = 0.0;

// Figure tessellation
pub const CIRCLE_SEGMENTS: usize = 256;
/// Segments per dash (and per gap) on dashed circles
pub const DASH_SEGMENTS: usize = 6;
pub const MAX_VERTICES: usize = 16_384;

// Plot area margins around the square figure, in points
pub const PLOT_MARGIN_TOP: f32 = 40.0;
pub const PLOT_MARGIN_BOTTOM: f32 = 56.0;
pub const PLOT_MARGIN_LEFT: f32 = 72.0;
pub const PLOT_MARGIN_RIGHT: f32 = 16.0;
