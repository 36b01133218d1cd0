//! Object movement on a camera-centered sphere.

use glam::Vec3;

use crate::controls::core::SingleTargetCore;
use crate::controls::events::EventListeners;
use crate::controls::traits::{ControlContext, ObjectControl};
use crate::input::{EventCategory, PointerEvent};
use crate::picking::Intersection;
use crate::util::spherical::Spherical;

/// Moves the gripped object sideways, keeping its distance to the
/// camera.
///
/// The grip start and current hit are converted to spherical angles
/// around the camera; their angular delta is added to the object's own
/// spherical coordinate, so the object slides on the sphere it already
/// sits on.
pub struct DirectionControl {
    core: SingleTargetCore,
    grip: Vec3,
}

impl DirectionControl {
    /// A direction control; `allow_non_top` keeps the gesture alive
    /// while the target is occluded.
    #[must_use]
    pub fn new(allow_non_top: bool) -> Self {
        Self {
            core: SingleTargetCore::new(allow_non_top),
            grip: Vec3::ZERO,
        }
    }
}

impl ObjectControl for DirectionControl {
    fn name(&self) -> &'static str {
        "direction"
    }

    fn supports_category(&self, category: EventCategory) -> bool {
        matches!(category, EventCategory::Mouse | EventCategory::Touch)
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
        let grip = &mut self.grip;
        let scene = &mut *ctx.scene;
        let camera_position = ctx.camera.position;
        self.core.change(
            hits,
            |target, hit| {
                let Some(object) = scene.get_mut(target) else {
                    return false;
                };
                let mut around = Spherical::from_vec3(object.world_position() - camera_position);
                let from = Spherical::from_vec3(*grip - camera_position);
                let to = Spherical::from_vec3(hit.point - camera_position);
                around.phi += to.phi - from.phi;
                around.theta += to.theta - from.theta;
                object.set_world_position(around.to_vec3() + camera_position);
                *grip = hit.point;
                true
            },
            || {},
        )
    }

    fn end_handler(&mut self, _ctx: &mut ControlContext<'_>, _event: &PointerEvent) -> bool {
        self.core.end(|| {})
    }
}
