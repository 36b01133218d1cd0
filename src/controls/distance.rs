//! Object distance scaling: drag, pinch, and wheel variants.

use glam::{Vec2, Vec3};

use crate::camera::frustum::Frustum;
use crate::camera::Camera;
use crate::controls::core::SingleTargetCore;
use crate::controls::events::{EventListeners, NotificationKind};
use crate::controls::traits::{ControlContext, ObjectControl};
use crate::input::{EventCategory, PointerEvent};
use crate::options::DistanceOptions;
use crate::picking::Intersection;
use crate::scene::{ObjectId, Scene};

/// Scale the camera-to-object vector by `factor`, committing only when
/// the moved grip point and the moved object both stay inside the view
/// frustum. An object pushed out of view could no longer be ray-cast,
/// which would strand the gesture.
fn stretch_object_distance(
    scene: &mut Scene,
    camera: &Camera,
    target: ObjectId,
    touched: Vec3,
    factor: f32,
) -> bool {
    let Some(object) = scene.get_mut(target) else {
        return false;
    };
    let world = object.world_position();
    let moved = (world - camera.position) * factor + camera.position;
    let moved_touch = touched - world + moved;
    let frustum = Frustum::from_camera(camera);
    if frustum.contains_point(moved_touch) && frustum.contains_point(moved) {
        object.set_world_position(moved);
        true
    } else {
        false
    }
}

// ---------------------------------------------------------------------------
// Mouse drag
// ---------------------------------------------------------------------------

/// Pushes the gripped object along the view axis from a vertical mouse
/// drag. Dragging down moves it away, dragging up pulls it closer.
pub struct DistanceMouseControl {
    core: SingleTargetCore,
    scale_base: f32,
    rate: f32,
    drag_start: Vec2,
}

impl DistanceMouseControl {
    /// A mouse distance control with the default gesture feel.
    #[must_use]
    pub fn new(allow_non_top: bool) -> Self {
        Self::with_options(allow_non_top, &DistanceOptions::default())
    }

    /// A mouse distance control tuned by `options`.
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

impl ObjectControl for DistanceMouseControl {
    fn name(&self) -> &'static str {
        "mouse distance"
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
        let scene = &mut *ctx.scene;
        let camera = &*ctx.camera;
        self.core.change(
            hits,
            |target, hit| {
                let position = event.position();
                let delta = position - *drag_start;
                if delta.y == 0.0 {
                    return false;
                }
                let mut factor = scale_base.powf(rate);
                if delta.y > 0.0 {
                    factor = 1.0 / factor;
                }
                if stretch_object_distance(scene, camera, target, hit.point, factor) {
                    *drag_start = position;
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

// ---------------------------------------------------------------------------
// Touch pinch
// ---------------------------------------------------------------------------

/// Pushes the gripped object along the view axis from a two-finger
/// pinch. Spreading the fingers pulls it closer.
pub struct DistanceTouchControl {
    core: SingleTargetCore,
    scale_base: f32,
    rate: f32,
    pinch_start: Vec2,
}

/// Pinch distance encoded as a drag position, so the shared drag
/// direction rule applies unchanged: negated spread on the y axis.
fn pinch_position(event: &PointerEvent) -> Option<Vec2> {
    let PointerEvent::Touch(touch) = event else {
        return None;
    };
    if touch.touches.len() < 2 {
        return None;
    }
    let spread = (touch.touches[0].position - touch.touches[1].position).length();
    Some(Vec2::new(0.0, -spread))
}

impl DistanceTouchControl {
    /// A touch distance control with the default gesture feel.
    #[must_use]
    pub fn new(allow_non_top: bool) -> Self {
        Self::with_options(allow_non_top, &DistanceOptions::default())
    }

    /// A touch distance control tuned by `options`.
    #[must_use]
    pub fn with_options(allow_non_top: bool, options: &DistanceOptions) -> Self {
        Self {
            core: SingleTargetCore::new(allow_non_top),
            scale_base: options.scale_base,
            rate: options.pinch_rate,
            pinch_start: Vec2::ZERO,
        }
    }
}

impl ObjectControl for DistanceTouchControl {
    fn name(&self) -> &'static str {
        "touch distance"
    }

    fn supports_category(&self, category: EventCategory) -> bool {
        category == EventCategory::Touch
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
        let pinch_start = &mut self.pinch_start;
        self.core.start(hits, |_| match pinch_position(event) {
            Some(position) => {
                *pinch_start = position;
                true
            }
            None => false,
        })
    }

    fn change_handler(
        &mut self,
        ctx: &mut ControlContext<'_>,
        event: &PointerEvent,
        hits: &[Intersection],
    ) -> bool {
        let pinch_start = &mut self.pinch_start;
        let scale_base = self.scale_base;
        let rate = self.rate;
        let scene = &mut *ctx.scene;
        let camera = &*ctx.camera;
        self.core.change(
            hits,
            |target, hit| {
                let Some(position) = pinch_position(event) else {
                    return false;
                };
                let delta = position - *pinch_start;
                if delta.y == 0.0 {
                    return false;
                }
                let mut factor = scale_base.powf(rate);
                if delta.y > 0.0 {
                    factor = 1.0 / factor;
                }
                if stretch_object_distance(scene, camera, target, hit.point, factor) {
                    *pinch_start = position;
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

// ---------------------------------------------------------------------------
// Wheel
// ---------------------------------------------------------------------------

/// Pushes the object under the cursor along the view axis from wheel
/// ticks. There is no arming phase: every tick is start and change at
/// once, so no target is held between events.
pub struct DistanceWheelControl {
    enabled: bool,
    scale_base: f32,
    rate: f32,
    listeners: EventListeners,
}

impl DistanceWheelControl {
    /// A wheel distance control with the default gesture feel.
    #[must_use]
    pub fn new() -> Self {
        Self::with_options(&DistanceOptions::default())
    }

    /// A wheel distance control tuned by `options`.
    #[must_use]
    pub fn with_options(options: &DistanceOptions) -> Self {
        Self {
            enabled: true,
            scale_base: options.scale_base,
            rate: options.wheel_rate,
            listeners: EventListeners::new(),
        }
    }
}

impl Default for DistanceWheelControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectControl for DistanceWheelControl {
    fn name(&self) -> &'static str {
        "wheel distance"
    }

    fn supports_category(&self, category: EventCategory) -> bool {
        category == EventCategory::Wheel
    }

    fn enabled(&self) -> bool {
        self.enabled
    }

    fn set_enabled(&mut self, enabled: bool) {
        self.enabled = enabled;
    }

    fn listeners_mut(&mut self) -> &mut EventListeners {
        &mut self.listeners
    }

    fn start_handler(
        &mut self,
        ctx: &mut ControlContext<'_>,
        event: &PointerEvent,
        hits: &[Intersection],
    ) -> bool {
        if !self.enabled {
            return false;
        }
        let _ = self.change_handler(ctx, event, hits);
        true
    }

    fn change_handler(
        &mut self,
        ctx: &mut ControlContext<'_>,
        event: &PointerEvent,
        hits: &[Intersection],
    ) -> bool {
        if !self.enabled || hits.is_empty() {
            return false;
        }
        let PointerEvent::Wheel(wheel) = event else {
            return false;
        };
        if wheel.delta.y != 0.0 {
            let mut factor = self.scale_base.powf(self.rate);
            if wheel.delta.y < 0.0 {
                factor = 1.0 / factor;
            }
            let hit = &hits[0];
            if stretch_object_distance(ctx.scene, ctx.camera, hit.object, hit.point, factor) {
                self.listeners.notify(NotificationKind::Change, &[hit.object]);
            }
        }
        true
    }

    fn end_handler(&mut self, _ctx: &mut ControlContext<'_>, _event: &PointerEvent) -> bool {
        false
    }
}
