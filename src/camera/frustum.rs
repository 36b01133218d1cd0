//! View frustum containment tests.
//!
//! The distance and dolly controls refuse any move that would push the
//! grip point or the manipulated position outside the camera's view.
//! That guard needs exact plane containment rather than a conservative
//! culling test, so the planes are extracted from the full
//! view-projection matrix.

use glam::{Mat4, Vec3, Vec4};

use super::Camera;

/// A plane in 3D space with equation `normal · p + distance = 0`.
#[derive(Debug, Clone, Copy)]
pub struct Plane {
    /// Unit normal pointing into the positive half-space.
    pub normal: Vec3,
    /// Signed distance from origin.
    pub distance: f32,
}

impl Plane {
    /// Create a plane from raw coefficients and normalize it.
    #[must_use]
    pub fn from_coefficients(coefficients: Vec4) -> Self {
        let normal = Vec3::new(coefficients.x, coefficients.y, coefficients.z);
        let len = normal.length();
        if len > 0.0 {
            Self {
                normal: normal / len,
                distance: coefficients.w / len,
            }
        } else {
            Self {
                normal: Vec3::ZERO,
                distance: 0.0,
            }
        }
    }

    /// Signed distance from point to plane (positive = in front).
    #[inline]
    #[must_use]
    pub fn distance_to_point(&self, point: Vec3) -> f32 {
        self.normal.dot(point) + self.distance
    }
}

/// View frustum consisting of 6 inward-facing planes.
#[derive(Debug, Clone)]
pub struct Frustum {
    /// Six clipping planes: left, right, bottom, top, near, far.
    pub planes: [Plane; 6],
}

impl Frustum {
    /// Extract frustum planes from a view-projection matrix using the
    /// Gribb/Hartmann method, for a right-handed system with [0,1]
    /// depth range (wgpu/Vulkan). Planes point inward.
    #[must_use]
    pub fn from_view_projection(vp: Mat4) -> Self {
        // glam stores column-major, so assemble the rows by hand
        let row0 = Vec4::new(vp.x_axis.x, vp.y_axis.x, vp.z_axis.x, vp.w_axis.x);
        let row1 = Vec4::new(vp.x_axis.y, vp.y_axis.y, vp.z_axis.y, vp.w_axis.y);
        let row2 = Vec4::new(vp.x_axis.z, vp.y_axis.z, vp.z_axis.z, vp.w_axis.z);
        let row3 = Vec4::new(vp.x_axis.w, vp.y_axis.w, vp.z_axis.w, vp.w_axis.w);

        Self {
            planes: [
                Plane::from_coefficients(row3 + row0),
                Plane::from_coefficients(row3 - row0),
                Plane::from_coefficients(row3 + row1),
                Plane::from_coefficients(row3 - row1),
                // [0,1] depth: near plane is just row2
                Plane::from_coefficients(row2),
                Plane::from_coefficients(row3 - row2),
            ],
        }
    }

    /// Extract the frustum for a camera's current pose and projection.
    #[must_use]
    pub fn from_camera(camera: &Camera) -> Self {
        Self::from_view_projection(camera.view_projection())
    }

    /// Test if a point is inside the frustum.
    #[inline]
    #[must_use]
    pub fn contains_point(&self, point: Vec3) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(point) >= 0.0)
    }

    /// Test if a sphere intersects or is inside the frustum.
    #[inline]
    #[must_use]
    pub fn intersects_sphere(&self, center: Vec3, radius: f32) -> bool {
        self.planes
            .iter()
            .all(|plane| plane.distance_to_point(center) >= -radius)
    }
}
