//! Perspective camera and viewport geometry.
//!
//! The camera here is the manipulation target of the camera controls:
//! a world-space pose (position + orientation quaternion) plus projection
//! parameters, with a projection zoom factor that scales the frustum
//! height the way the zoom control expects.

/// View frustum extraction and containment tests.
pub mod frustum;

use glam::{Mat4, Quat, Vec2, Vec3};

/// Perspective camera defined by a world-space pose and projection
/// parameters.
#[derive(Debug, Clone, PartialEq)]
pub struct Camera {
    /// Camera position in world space.
    pub position: Vec3,
    /// Camera orientation in world space. Identity looks down -Z.
    pub rotation: Quat,
    /// Projection zoom factor. Values above 1 narrow the frustum.
    pub zoom: f32,
    /// Vertical field of view in degrees (before zoom).
    pub fovy: f32,
    /// Viewport aspect ratio (width / height).
    pub aspect: f32,
    /// Near clipping plane distance.
    pub znear: f32,
    /// Far clipping plane distance.
    pub zfar: f32,
}

impl Default for Camera {
    fn default() -> Self {
        Self {
            position: Vec3::ZERO,
            rotation: Quat::IDENTITY,
            zoom: 1.0,
            fovy: 45.0,
            aspect: 1.0,
            znear: 0.1,
            zfar: 2000.0,
        }
    }
}

impl Camera {
    /// Create a camera at `position` with default projection parameters.
    #[must_use]
    pub fn at(position: Vec3) -> Self {
        Self {
            position,
            ..Self::default()
        }
    }

    /// Effective vertical field of view in radians with zoom applied.
    /// Zoom divides the frustum half-height, so the effective angle
    /// shrinks as zoom grows.
    #[must_use]
    pub fn effective_fovy(&self) -> f32 {
        2.0 * ((self.fovy.to_radians() * 0.5).tan() / self.zoom).atan()
    }

    /// World-to-camera view matrix.
    #[must_use]
    pub fn view_matrix(&self) -> Mat4 {
        Mat4::from_rotation_translation(self.rotation, self.position).inverse()
    }

    /// Projection matrix with [0,1] depth range (wgpu/Vulkan convention).
    #[must_use]
    pub fn projection_matrix(&self) -> Mat4 {
        Mat4::perspective_rh(self.effective_fovy(), self.aspect, self.znear, self.zfar)
    }

    /// Combined view-projection matrix.
    #[must_use]
    pub fn view_projection(&self) -> Mat4 {
        self.projection_matrix() * self.view_matrix()
    }

    /// Orient the camera to look from its position toward `target`.
    pub fn look_at(&mut self, target: Vec3, up: Vec3) {
        let view = Mat4::look_at_rh(self.position, target, up);
        self.rotation = Quat::from_mat4(&view.inverse());
    }

    /// The camera's forward direction in world space.
    #[must_use]
    pub fn forward(&self) -> Vec3 {
        self.rotation * Vec3::NEG_Z
    }
}

/// Size of the control surface in pixels. Screen positions map through
/// this into normalized device coordinates for ray casting.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Viewport {
    /// Surface width in pixels.
    pub width: f32,
    /// Surface height in pixels.
    pub height: f32,
}

impl Default for Viewport {
    fn default() -> Self {
        Self {
            width: 1.0,
            height: 1.0,
        }
    }
}

impl Viewport {
    /// Create a viewport of the given pixel size.
    #[must_use]
    pub fn new(width: f32, height: f32) -> Self {
        Self { width, height }
    }

    /// Convert a screen position (origin top-left, y down) to normalized
    /// device coordinates (origin center, y up, both axes in [-1, 1]).
    #[must_use]
    pub fn ndc(&self, position: Vec2) -> Vec2 {
        Vec2::new(
            (position.x / self.width) * 2.0 - 1.0,
            -(position.y / self.height) * 2.0 + 1.0,
        )
    }

    /// Aspect ratio (width / height).
    #[must_use]
    pub fn aspect(&self) -> f32 {
        self.width / self.height
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_default_camera_looks_down_negative_z() {
        let camera = Camera::default();
        let forward = camera.forward();
        assert!((forward - Vec3::NEG_Z).length() < 1e-6);
    }

    #[test]
    fn test_look_at_points_forward_at_target() {
        let mut camera = Camera::at(Vec3::new(0.0, 0.0, 10.0));
        camera.look_at(Vec3::ZERO, Vec3::Y);
        let forward = camera.forward();
        assert!((forward - Vec3::NEG_Z).length() < 1e-5);
    }

    #[test]
    fn test_zoom_narrows_effective_fov() {
        let mut camera = Camera::default();
        let wide = camera.effective_fovy();
        camera.zoom = 2.0;
        let narrow = camera.effective_fovy();
        assert!(narrow < wide);
        assert!((camera.fovy.to_radians() - wide).abs() < 1e-6);
    }

    #[test]
    fn test_view_matrix_moves_world_opposite_to_camera() {
        let camera = Camera::at(Vec3::new(0.0, 0.0, 5.0));
        let view = camera.view_matrix();
        let origin_in_view = view.transform_point3(Vec3::ZERO);
        assert!((origin_in_view - Vec3::new(0.0, 0.0, -5.0)).length() < 1e-5);
    }

    #[test]
    fn test_ndc_mapping_corners_and_center() {
        let viewport = Viewport::new(800.0, 600.0);
        let center = viewport.ndc(Vec2::new(400.0, 300.0));
        assert!(center.length() < 1e-6);
        let top_left = viewport.ndc(Vec2::ZERO);
        assert!((top_left - Vec2::new(-1.0, 1.0)).length() < 1e-6);
        let bottom_right = viewport.ndc(Vec2::new(800.0, 600.0));
        assert!((bottom_right - Vec2::new(1.0, -1.0)).length() < 1e-6);
    }
}
