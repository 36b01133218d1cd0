//! Spherical coordinates around the +Y axis.
//!
//! The direction and orbit controls move points on camera- or
//! object-centered spheres by shifting their spherical angles, keeping
//! the radius fixed. Angles follow the y-up convention: `phi` is the
//! polar angle measured from +Y, `theta` the azimuth around Y measured
//! from +Z.

use glam::Vec3;

/// A point in spherical coordinates.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct Spherical {
    /// Distance from the origin.
    pub radius: f32,
    /// Polar angle from +Y, in [0, pi] for points produced by
    /// [`Spherical::from_vec3`].
    pub phi: f32,
    /// Azimuthal angle around Y from +Z.
    pub theta: f32,
}

impl Spherical {
    /// Create spherical coordinates from explicit components.
    #[must_use]
    pub fn new(radius: f32, phi: f32, theta: f32) -> Self {
        Self { radius, phi, theta }
    }

    /// Convert a cartesian offset to spherical coordinates. The zero
    /// vector maps to zero angles.
    #[must_use]
    pub fn from_vec3(v: Vec3) -> Self {
        let radius = v.length();
        if radius == 0.0 {
            return Self::default();
        }
        Self {
            radius,
            phi: (v.y / radius).clamp(-1.0, 1.0).acos(),
            theta: v.x.atan2(v.z),
        }
    }

    /// Convert back to a cartesian offset.
    #[must_use]
    pub fn to_vec3(self) -> Vec3 {
        let sin_phi_radius = self.phi.sin() * self.radius;
        Vec3::new(
            sin_phi_radius * self.theta.sin(),
            self.phi.cos() * self.radius,
            sin_phi_radius * self.theta.cos(),
        )
    }
}
