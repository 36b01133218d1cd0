//! Object rotation from pointer drags.

use glam::{Quat, Vec3};

use crate::controls::core::SingleTargetCore;
use crate::controls::events::EventListeners;
use crate::controls::traits::{ControlContext, ObjectControl};
use crate::input::{EventCategory, PointerEvent};
use crate::picking::Intersection;

/// Smallest sin(half angle) treated as an actual rotation; 2^-62.
/// Smaller drags are pointer jitter and leave the object alone.
const MIN_SIN_HALF_ANGLE: f32 = 2.168_404_3e-19;

/// Spins the gripped object so the grip point tracks the pointer.
///
/// The grip start and current pointer ray hit are taken as directions
/// from the object center in its parent frame; the shortest arc
/// between them premultiplies the object rotation.
pub struct RotationControl {
    core: SingleTargetCore,
    grip: Vec3,
}

impl RotationControl {
    /// A rotation control; `allow_non_top` keeps the gesture alive
    /// while the target is occluded.
    #[must_use]
    pub fn new(allow_non_top: bool) -> Self {
        Self {
            core: SingleTargetCore::new(allow_non_top),
            grip: Vec3::ZERO,
        }
    }
}

impl ObjectControl for RotationControl {
    fn name(&self) -> &'static str {
        "rotation"
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
        self.core.change(
            hits,
            |target, hit| {
                let Some(object) = scene.get_mut(target) else {
                    return false;
                };
                let v1 = (object.world_to_parent(*grip) - object.position).normalize_or_zero();
                let v2 =
                    (object.world_to_parent(hit.point) - object.position).normalize_or_zero();
                let arc = Quat::from_rotation_arc(v1, v2);
                let sin_half_angle = (1.0 - arc.w * arc.w).max(0.0).sqrt();
                if sin_half_angle > MIN_SIN_HALF_ANGLE {
                    object.rotation = arc * object.rotation;
                    *grip = hit.point;
                    true
                } else {
                    false
                }
            },
            || {},
        )
    }

    fn end_handler(&mut self, _ctx: &mut ControlContext<'_>, _event: &PointerEvent) -> bool {
        self.core.end(|| {})
    }
}
