//! Projection zoom from a vertical mouse drag.

use glam::Vec2;

use crate::controls::core::TargetlessCore;
use crate::controls::events::EventListeners;
use crate::controls::traits::{ControlContext, ObjectControl};
use crate::input::{EventCategory, PointerEvent};
use crate::options::ZoomOptions;
use crate::picking::Intersection;

/// Scales the camera's projection zoom. Dragging up zooms in,
/// dragging down zooms out, clamped to the configured range.
///
/// Needs no target: the gesture arms wherever the pointer is.
pub struct CameraZoomControl {
    core: TargetlessCore,
    scale_base: f32,
    rate: f32,
    min_zoom: f32,
    max_zoom: f32,
    drag_start: Vec2,
}

impl CameraZoomControl {
    /// A zoom control clamped to `[min_zoom, max_zoom]`, with the
    /// default gesture feel.
    #[must_use]
    pub fn new(min_zoom: f32, max_zoom: f32) -> Self {
        let defaults = ZoomOptions::default();
        Self {
            core: TargetlessCore::new(),
            scale_base: defaults.scale_base,
            rate: defaults.drag_rate,
            min_zoom,
            max_zoom,
            drag_start: Vec2::ZERO,
        }
    }

    /// A zoom control tuned and clamped by `options`.
    #[must_use]
    pub fn with_options(options: &ZoomOptions) -> Self {
        Self {
            core: TargetlessCore::new(),
            scale_base: options.scale_base,
            rate: options.drag_rate,
            min_zoom: options.min_zoom,
            max_zoom: options.max_zoom,
            drag_start: Vec2::ZERO,
        }
    }
}

impl ObjectControl for CameraZoomControl {
    fn name(&self) -> &'static str {
        "camera zoom"
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
        _hits: &[Intersection],
    ) -> bool {
        let drag_start = &mut self.drag_start;
        self.core.start(|| {
            *drag_start = event.position();
            true
        })
    }

    fn change_handler(
        &mut self,
        ctx: &mut ControlContext<'_>,
        event: &PointerEvent,
        _hits: &[Intersection],
    ) -> bool {
        let drag_start = &mut self.drag_start;
        let scale_base = self.scale_base;
        let rate = self.rate;
        let min_zoom = self.min_zoom;
        let max_zoom = self.max_zoom;
        let camera = &mut *ctx.camera;
        self.core.change(|| {
            let position = event.position();
            let delta = position - *drag_start;
            if delta.y != 0.0 {
                let mut factor = scale_base.powf(rate);
                if delta.y < 0.0 {
                    factor = 1.0 / factor;
                }
                let zoom = (camera.zoom * factor).clamp(min_zoom, max_zoom);
                if zoom != camera.zoom {
                    camera.zoom = zoom;
                }
            }
            *drag_start = position;
            true
        })
    }

    fn end_handler(&mut self, _ctx: &mut ControlContext<'_>, _event: &PointerEvent) -> bool {
        self.core.end(|| {})
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::camera::{Camera, Viewport};
    use crate::input::{Modifiers, MouseButtons, MousePhase};
    use crate::scene::Scene;

    fn mouse_at(phase: MousePhase, y: f32) -> PointerEvent {
        PointerEvent::mouse(
            phase,
            Vec2::new(100.0, y),
            MouseButtons::LEFT,
            Modifiers::NONE,
        )
    }

    #[test]
    fn test_drag_up_zooms_in() {
        let mut scene = Scene::new();
        let mut camera = Camera::default();
        let mut ctx = ControlContext {
            scene: &mut scene,
            camera: &mut camera,
            viewport: Viewport::new(800.0, 600.0),
        };

        let mut control = CameraZoomControl::new(0.1, 20.0);
        assert!(control.start_handler(&mut ctx, &mouse_at(MousePhase::Down, 100.0), &[]));
        assert!(control.change_handler(&mut ctx, &mouse_at(MousePhase::Move, 90.0), &[]));

        let expected = 1.0 / (0.95 * 0.95);
        assert!((ctx.camera.zoom - expected).abs() < 1e-4);
    }

    #[test]
    fn test_zoom_clamps_at_bounds() {
        let mut scene = Scene::new();
        let mut camera = Camera::default();
        camera.zoom = 19.9;
        let mut ctx = ControlContext {
            scene: &mut scene,
            camera: &mut camera,
            viewport: Viewport::new(800.0, 600.0),
        };

        let mut control = CameraZoomControl::new(0.1, 20.0);
        assert!(control.start_handler(&mut ctx, &mouse_at(MousePhase::Down, 100.0), &[]));
        assert!(control.change_handler(&mut ctx, &mouse_at(MousePhase::Move, 80.0), &[]));
        assert!((ctx.camera.zoom - 20.0).abs() < 1e-5);

        // Clamped at the bound, further zooming in changes nothing but
        // the gesture stays active.
        assert!(control.change_handler(&mut ctx, &mouse_at(MousePhase::Move, 60.0), &[]));
        assert!((ctx.camera.zoom - 20.0).abs() < 1e-5);
    }

    #[test]
    fn test_change_before_start_is_inert() {
        let mut scene = Scene::new();
        let mut camera = Camera::default();
        let mut ctx = ControlContext {
            scene: &mut scene,
            camera: &mut camera,
            viewport: Viewport::new(800.0, 600.0),
        };

        let mut control = CameraZoomControl::new(0.1, 20.0);
        assert!(!control.change_handler(&mut ctx, &mouse_at(MousePhase::Move, 90.0), &[]));
        assert!((ctx.camera.zoom - 1.0).abs() < 1e-6);
    }
}
