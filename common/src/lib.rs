//! Common utilities for the scale viewers
//!
//! This crate provides the shared window and GPU setup plus the 2D orthographic
//! camera used to frame a figure with an equal aspect ratio.

pub mod graphics;
pub mod camera;

pub use graphics::*;
pub use camera::*;

#[cfg(test)]
mod camera_test;
