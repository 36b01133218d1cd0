//! Rays and analytic shape intersection.

use glam::{Mat4, Vec3};

/// A ray with normalized direction.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Ray {
    /// Ray origin.
    pub origin: Vec3,
    /// Unit direction.
    pub direction: Vec3,
}

impl Ray {
    /// Create a ray from an origin and a (not necessarily unit)
    /// direction.
    #[must_use]
    pub fn new(origin: Vec3, direction: Vec3) -> Self {
        Self {
            origin,
            direction: direction.normalize_or_zero(),
        }
    }

    /// Point at parameter `t` along the ray.
    #[must_use]
    pub fn point_at(&self, t: f32) -> Vec3 {
        self.origin + self.direction * t
    }

    /// Map the ray through a transform, renormalizing the direction.
    /// Used to carry world rays into an object's local frame.
    #[must_use]
    pub fn transformed(&self, matrix: &Mat4) -> Self {
        Self::new(
            matrix.transform_point3(self.origin),
            matrix.transform_vector3(self.direction),
        )
    }

    /// Nearest non-negative intersection parameter with a sphere, or
    /// `None` on a miss. A ray starting inside the sphere reports the
    /// exit point.
    #[must_use]
    pub fn intersect_sphere(&self, center: Vec3, radius: f32) -> Option<f32> {
        let to_origin = self.origin - center;
        let b = to_origin.dot(self.direction);
        let c = to_origin.length_squared() - radius * radius;
        let discriminant = b * b - c;
        if discriminant < 0.0 {
            return None;
        }
        let root = discriminant.sqrt();
        let near = -b - root;
        if near >= 0.0 {
            return Some(near);
        }
        let far = -b + root;
        (far >= 0.0).then_some(far)
    }

    /// Nearest non-negative intersection parameter with an axis-aligned
    /// box centered at the origin, or `None` on a miss. Call on a ray
    /// already transformed into the box's frame.
    #[must_use]
    pub fn intersect_centered_aabb(&self, half_extents: Vec3) -> Option<f32> {
        let mut t_min = f32::NEG_INFINITY;
        let mut t_max = f32::INFINITY;
        for axis in 0..3 {
            let origin = self.origin[axis];
            let direction = self.direction[axis];
            let extent = half_extents[axis];
            if direction.abs() < f32::EPSILON {
                // Parallel to the slab: must already be inside it
                if origin.abs() > extent {
                    return None;
                }
                continue;
            }
            let inv = 1.0 / direction;
            let mut t0 = (-extent - origin) * inv;
            let mut t1 = (extent - origin) * inv;
            if t0 > t1 {
                std::mem::swap(&mut t0, &mut t1);
            }
            t_min = t_min.max(t0);
            t_max = t_max.min(t1);
            if t_max < t_min {
                return None;
            }
        }
        if t_max < 0.0 {
            return None;
        }
        Some(if t_min >= 0.0 { t_min } else { t_max })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sphere_hit_reports_entry_distance() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        let t = ray.intersect_sphere(Vec3::ZERO, 2.0);
        assert!(matches!(t, Some(d) if (d - 8.0).abs() < 1e-5));
    }

    #[test]
    fn test_sphere_miss_and_behind() {
        let ray = Ray::new(Vec3::new(0.0, 0.0, 10.0), Vec3::NEG_Z);
        assert!(ray.intersect_sphere(Vec3::new(5.0, 0.0, 0.0), 1.0).is_none());
        // Sphere entirely behind the origin
        assert!(ray.intersect_sphere(Vec3::new(0.0, 0.0, 20.0), 1.0).is_none());
    }

    #[test]
    fn test_sphere_from_inside_reports_exit() {
        let ray = Ray::new(Vec3::ZERO, Vec3::X);
        let t = ray.intersect_sphere(Vec3::ZERO, 3.0);
        assert!(matches!(t, Some(d) if (d - 3.0).abs() < 1e-5));
    }

    #[test]
    fn test_aabb_hit_and_slab_miss() {
        let ray = Ray::new(Vec3::new(-5.0, 0.0, 0.0), Vec3::X);
        let t = ray.intersect_centered_aabb(Vec3::splat(1.0));
        assert!(matches!(t, Some(d) if (d - 4.0).abs() < 1e-5));

        let above = Ray::new(Vec3::new(-5.0, 2.0, 0.0), Vec3::X);
        assert!(above.intersect_centered_aabb(Vec3::splat(1.0)).is_none());
    }

    #[test]
    fn test_aabb_parallel_ray_inside_slab() {
        let ray = Ray::new(Vec3::new(-5.0, 0.5, 0.0), Vec3::X);
        assert!(ray.intersect_centered_aabb(Vec3::splat(1.0)).is_some());
    }
}
