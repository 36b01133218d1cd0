//! Camera dolly toward or away from the gripped object.

use glam::Vec2;

use crate::camera::frustum::Frustum;
use crate::controls::core::SingleTargetCore;
use crate::controls::events::EventListeners;
use crate::controls::traits::{ControlContext, ObjectControl};
use crate::input::{EventCategory, PointerEvent};
use crate::options::DistanceOptions;
use crate::picking::Intersection;

/// Slides the camera along the axis to the gripped object from a
/// vertical mouse drag. Dragging down backs the camera away.
///
/// The candidate position is applied first and rolled back exactly
/// unless the grip point and the object stay inside the moved
/// camera's frustum.
pub struct CameraDistanceControl {
    core: SingleTargetCore,
    scale_base: f32,
    rate: f32,
    drag_start: Vec2,
}

impl CameraDistanceControl {
    /// A camera dolly control with the default gesture feel.
    #[must_use]
    pub fn new(allow_non_top: bool) -> Self {
        Self::with_options(allow_non_top, &DistanceOptions::default())
    }

    /// A camera dolly control tuned by `options`.
    #[must_use]
    pub fn with_options(allow_non_top: bool, options: &DistanceOptions) -> Self {
        Self {
            core: SingleTargetCore::new(allow_non_top),
            scale_base: options.scale_base,
            rate: options.drag_rate,
            drag_start: Vec2::ZERO,
        }
    }
}

impl ObjectControl for CameraDistanceControl {
    fn name(&self) -> &'static str {
        "camera distance"
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
        event: &PointerEvent,
        hits: &[Intersection],
    ) -> bool {
        let drag_start = &mut self.drag_start;
        self.core.start(hits, |_| {
            *drag_start = event.position();
            true
        })
    }

    fn change_handler(
        &mut self,
        ctx: &mut ControlContext<'_>,
        event: &PointerEvent,
        hits: &[Intersection],
    ) -> bool {
        let drag_start = &mut self.drag_start;
        let scale_base = self.scale_base;
        let rate = self.rate;
        let scene = &*ctx.scene;
        let camera = &mut *ctx.camera;
        self.core.change(
            hits,
            |target, hit| {
                let position = event.position();
                let delta = position - *drag_start;
                if delta.y == 0.0 {
                    return false;
                }
                let Some(object) = scene.get(target) else {
                    return false;
                };
                let mut factor = scale_base.powf(rate);
                if delta.y > 0.0 {
                    factor = 1.0 / factor;
                }

                let center = object.world_position();
                let saved = camera.position;
                camera.position = center - (center - saved) * factor;
                let frustum = Frustum::from_camera(camera);
                let committed =
                    frustum.contains_point(hit.point) && frustum.contains_point(center);
                if !committed {
                    camera.position = saved;
                }
                *drag_start = position;
                committed
            },
            || {},
        )
    }

    fn end_handler(&mut self, _ctx: &mut ControlContext<'_>, _event: &PointerEvent) -> bool {
        self.core.end(|| {})
    }
}
