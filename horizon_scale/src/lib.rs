//! Black hole event horizon vs. solar system scales
//!
//! Computes the Schwarzschild radius for a mass between 1 and 10¹⁰ M☉ and
//! picks solar-system references to draw beside it:
//!
//! - **Planetary orbits** once the horizon reaches half of Mercury's orbit
//! - **Planets, moons and asteroids** for smaller horizons
//!
//! The pure pieces (`physics`, `catalog`, `scale`, `selection`, `format`,
//! `figure`) build a [`figure::Figure`]; `renderer` and `panel` put it on screen.

pub mod physics;
pub mod catalog;
pub mod scale;
pub mod selection;
pub mod format;
pub mod figure;
pub mod renderer;
pub mod panel;
pub mod parallax;
pub mod config;

#[cfg(test)]
mod scale_test;
#[cfg(test)]
mod selection_test;
#[cfg(test)]
mod format_test;
#[cfg(test)]
mod renderer_test;
#[cfg(test)]
mod parallax_test;
