//! Orthographic camera for 2D figures

use glam::{Mat4, Vec3};

/// 2D orthographic camera
///
/// `zoom` is the half-height of the visible region in world units.
#[derive(Debug, Clone)]
pub struct Camera2D {
    pub position: Vec3,
    pub zoom: f32,
    pub aspect_ratio: f32,
}

impl Camera2D {
    pub fn new(aspect_ratio: f32) -> Self {
        Self {
            position: Vec3::ZERO,
            zoom: 1.0,
            aspect_ratio,
        }
    }

    /// Get the view-projection matrix
    pub fn view_projection(&self) -> Mat4 {
        let half_width = self.zoom * self.aspect_ratio;
        let half_height = self.zoom;

        let projection = Mat4::orthographic_rh(
            -half_width,
            half_width,
            -half_height,
            half_height,
            -1.0,
            1.0,
        );

        let view = Mat4::from_translation(-self.position);

        projection * view
    }

    pub fn update_aspect_ratio(&mut self, aspect_ratio: f32) {
        self.aspect_ratio = aspect_ratio;
    }

    /// Centre on the origin and zoom so that `[-limit, limit]` is visible on
    /// both axes. World units stay square whatever the aspect ratio.
    pub fn fit_symmetric(&mut self, limit: f32) {
        self.position = Vec3::ZERO;
        self.zoom = if self.aspect_ratio >= 1.0 {
            limit
        } else {
            limit / self.aspect_ratio
        };
    }

    /// World units covered by one pixel of a viewport `height_px` tall.
    pub fn units_per_pixel(&self, height_px: f32) -> f32 {
        2.0 * self.zoom / height_px.max(1.0)
    }
}

/// Camera uniform data for shaders
#[repr(C)]
#[derive(Copy, Clone, Debug, bytemuck::Pod, bytemuck::Zeroable)]
pub struct CameraUniform {
    pub view_proj: [[f32; 4]; 4],
    pub position: [f32; 4],
}

impl CameraUniform {
    pub fn from_camera_2d(camera: &Camera2D) -> Self {
        Self {
            view_proj: camera.view_projection().to_cols_array_2d(),
            position: [camera.position.x, camera.position.y, camera.position.z, 1.0],
        }
    }
}
