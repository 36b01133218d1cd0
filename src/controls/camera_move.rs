//! Camera orbit around the gripped object.

use glam::Vec3;

use crate::controls::core::SingleTargetCore;
use crate::controls::events::EventListeners;
use crate::controls::traits::{ControlContext, ObjectControl};
use crate::input::{EventCategory, PointerEvent};
use crate::picking::Intersection;
use crate::util::spherical::Spherical;

/// Swings the camera on a sphere around the gripped object, the
/// inverse of [`DirectionControl`](crate::controls::DirectionControl).
///
/// The object-to-camera vector picks up the angular delta between the
/// grip start and the current hit, seen from the grip side. The drag
/// start is never advanced: each change reapplies the total delta from
/// the original grip against the freshly cast hit, since the camera
/// itself moved under the pointer.
pub struct CameraMoveControl {
    core: SingleTargetCore,
    grip: Vec3,
}

impl CameraMoveControl {
    /// A camera move control; `allow_non_top` keeps the gesture alive
    /// while the target is occluded.
    #[must_use]
    pub fn new(allow_non_top: bool) -> Self {
        Self {
            core: SingleTargetCore::new(allow_non_top),
            grip: Vec3::ZERO,
        }
    }
}

impl ObjectControl for CameraMoveControl {
    fn name(&self) -> &'static str {
        "camera move"
    }

    fn supports_category(&self, category: EventCategory) -> bool {
        category == EventCategory::Mouse
    }

    fn enabled(&self) -> bool {
        self.core.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.core.enabled = enabled;
    }

    fn listeners_mut(&mut self) -> &mut EventListeners {
        &mut self.core.listeners
    }

    fn start_handler(
        &mut self,
        _ctx: &mut ControlContext<'_>,
        _event: &PointerEvent,
        hits: &[Intersection],
    ) -> bool {
        let grip = &mut self.grip;
        self.core.start(hits, |hit| {
            *grip = hit.point;
            true
        })
    }

    fn change_handler(
        &mut self,
        ctx: &mut ControlContext<'_>,
        _event: &PointerEvent,
        hits: &[Intersection],
    ) -> bool {
        let grip = self.grip;
        let scene = &*ctx.scene;
        let camera = &mut *ctx.camera;
        self.core.change(
            hits,
            |target, hit| {
                let Some(object) = scene.get(target) else {
                    return false;
                };
                let center = object.world_position();
                let mut around = Spherical::from_vec3(camera.position - center);
                let from = Spherical::from_vec3(camera.position - grip);
                let to = Spherical::from_vec3(camera.position - hit.point);
                around.phi += to.phi - from.phi;
                around.theta += to.theta - from.theta;
                camera.position = around.to_vec3() + center;
                true
            },
            || {},
        )
    }

    fn end_handler(&mut self, _ctx: &mut ControlContext<'_>, _event: &PointerEvent) -> bool {
        self.core.end(|| {})
    }
}

#[cfg(test)]
mod tests {
    use glam::{Quat, Vec2};

    use super::*;
    use crate::camera::{Camera, Viewport};
    use crate::input::{Modifiers, MouseButtons, MousePhase};
    use crate::scene::{Scene, SceneObject};

    fn drag_event() -> PointerEvent {
        PointerEvent::mouse(
            MousePhase::Move,
            Vec2::ZERO,
            MouseButtons::LEFT,
            Modifiers::NONE,
        )
    }

    #[test]
    fn test_camera_orbits_object_at_constant_radius() {
        let mut scene = Scene::new();
        let id = scene.add(
            SceneObject::new()
                .with_position(Vec3::new(0.0, 0.0, -10.0))
                .with_pick_sphere(1.0),
        );
        let mut camera = Camera::default();
        let mut ctx = ControlContext {
            scene: &mut scene,
            camera: &mut camera,
            viewport: Viewport::new(800.0, 600.0),
        };

        // Grip a point just in front of the object and slide it
        // sideways; seen from the grip, the camera swings the other
        // way around the object.
        let start = Vec3::new(0.0, 0.0, -9.0);
        let end = Quat::from_rotation_y(0.1) * start;
        let mut control = CameraMoveControl::new(false);
        assert!(control.start_handler(
            &mut ctx,
            &drag_event(),
            &[Intersection {
                object: id,
                point: start,
                distance: 9.0,
            }],
        ));
        assert!(control.change_handler(
            &mut ctx,
            &drag_event(),
            &[Intersection {
                object: id,
                point: end,
                distance: 9.0,
            }],
        ));

        let center = Vec3::new(0.0, 0.0, -10.0);
        let radius = (ctx.camera.position - center).length();
        assert!((radius - 10.0).abs() < 1e-3);
        assert!(ctx.camera.position != Vec3::ZERO);
        assert_eq!(ctx.scene.get(id).unwrap().position, center);
    }

    #[test]
    fn test_zero_delta_keeps_camera_still() {
        let mut scene = Scene::new();
        let id = scene.add(
            SceneObject::new()
                .with_position(Vec3::new(0.0, 0.0, -10.0))
                .with_pick_sphere(1.0),
        );
        let mut camera = Camera::default();
        let mut ctx = ControlContext {
            scene: &mut scene,
            camera: &mut camera,
            viewport: Viewport::new(800.0, 600.0),
        };

        let start = Vec3::new(0.0, 0.0, -9.0);
        let mut control = CameraMoveControl::new(false);
        assert!(control.start_handler(
            &mut ctx,
            &drag_event(),
            &[Intersection {
                object: id,
                point: start,
                distance: 9.0,
            }],
        ));
        assert!(control.change_handler(
            &mut ctx,
            &drag_event(),
            &[Intersection {
                object: id,
                point: start,
                distance: 9.0,
            }],
        ));

        assert!((ctx.camera.position - Vec3::ZERO).length() < 1e-5);
    }
}
