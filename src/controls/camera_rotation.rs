//! First-person camera look.

use std::f32::consts::{FRAC_PI_2, TAU};

use glam::{EulerRot, Quat, Vec2};

use crate::controls::core::TargetlessCore;
use crate::controls::events::EventListeners;
use crate::controls::traits::{ControlContext, ObjectControl};
use crate::input::{EventCategory, PointerEvent};
use crate::picking::Intersection;

/// Turns the camera in place, pixel delta scaled by field of view
/// over viewport height.
///
/// The orientation is decomposed into yaw and pitch each change, so
/// external camera motion between events is picked up. Pitch is
/// clamped to straight up and straight down, azimuth wraps, and roll
/// is forced to zero.
pub struct CameraRotationControl {
    core: TargetlessCore,
    drag_start: Vec2,
}

impl CameraRotationControl {
    /// A camera look control.
    #[must_use]
    pub fn new() -> Self {
        Self {
            core: TargetlessCore::new(),
            drag_start: Vec2::ZERO,
        }
    }
}

impl Default for CameraRotationControl {
    fn default() -> Self {
        Self::new()
    }
}

impl ObjectControl for CameraRotationControl {
    fn name(&self) -> &'static str {
        "camera rotation"
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
        let camera = &mut *ctx.camera;
        let viewport = ctx.viewport;
        self.core.change(|| {
            let (yaw, pitch, _) = camera.rotation.to_euler(EulerRot::YXZ);
            let mut elevation = pitch;
            let mut rotation = FRAC_PI_2 - yaw;

            let position = event.position();
            let per_pixel = camera.fovy.to_radians() / viewport.height;
            elevation += (position.y - drag_start.y) * per_pixel;
            rotation -= (position.x - drag_start.x) * per_pixel;

            elevation = elevation.clamp(-FRAC_PI_2, FRAC_PI_2);
            rotation %= TAU;
            camera.rotation = Quat::from_euler(EulerRot::YXZ, FRAC_PI_2 - rotation, elevation, 0.0);
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
    use glam::Vec3;

    use super::*;
    use crate::camera::{Camera, Viewport};
    use crate::input::{Modifiers, MouseButtons, MousePhase};
    use crate::scene::Scene;

    fn mouse_at(phase: MousePhase, x: f32, y: f32) -> PointerEvent {
        PointerEvent::mouse(
            phase,
            Vec2::new(x, y),
            MouseButtons::LEFT,
            Modifiers::NONE,
        )
    }

    fn looking_context<'a>(
        scene: &'a mut Scene,
        camera: &'a mut Camera,
    ) -> ControlContext<'a> {
        ControlContext {
            scene,
            camera,
            viewport: Viewport::new(800.0, 600.0),
        }
    }

    #[test]
    fn test_vertical_drag_pitches_by_fov_per_pixel() {
        let mut scene = Scene::new();
        let mut camera = Camera::default();
        let mut ctx = looking_context(&mut scene, &mut camera);

        let mut control = CameraRotationControl::new();
        assert!(control.start_handler(&mut ctx, &mouse_at(MousePhase::Down, 400.0, 300.0), &[]));
        assert!(control.change_handler(&mut ctx, &mouse_at(MousePhase::Move, 400.0, 360.0), &[]));

        let expected = 60.0 * 45.0f32.to_radians() / 600.0;
        let (yaw, pitch, roll) = ctx.camera.rotation.to_euler(EulerRot::YXZ);
        assert!((pitch - expected).abs() < 1e-5);
        assert!(yaw.abs() < 1e-5);
        assert!(roll.abs() < 1e-5);
    }

    #[test]
    fn test_horizontal_drag_turns_left() {
        let mut scene = Scene::new();
        let mut camera = Camera::default();
        let mut ctx = looking_context(&mut scene, &mut camera);

        let mut control = CameraRotationControl::new();
        assert!(control.start_handler(&mut ctx, &mouse_at(MousePhase::Down, 400.0, 300.0), &[]));
        assert!(control.change_handler(&mut ctx, &mouse_at(MousePhase::Move, 460.0, 300.0), &[]));

        let expected = 60.0 * 45.0f32.to_radians() / 600.0;
        let (yaw, pitch, _) = ctx.camera.rotation.to_euler(EulerRot::YXZ);
        assert!((yaw - expected).abs() < 1e-5);
        assert!(pitch.abs() < 1e-5);
    }

    #[test]
    fn test_pitch_clamps_looking_straight_up() {
        let mut scene = Scene::new();
        let mut camera = Camera::default();
        let mut ctx = looking_context(&mut scene, &mut camera);

        let mut control = CameraRotationControl::new();
        assert!(control.start_handler(&mut ctx, &mouse_at(MousePhase::Down, 400.0, 300.0), &[]));
        assert!(control.change_handler(
            &mut ctx,
            &mouse_at(MousePhase::Move, 400.0, 30_000.0),
            &[],
        ));

        assert!((ctx.camera.forward() - Vec3::Y).length() < 1e-4);
    }

    #[test]
    fn test_deltas_accumulate_across_changes() {
        let mut scene = Scene::new();
        let mut camera = Camera::default();
        let mut ctx = looking_context(&mut scene, &mut camera);

        let mut control = CameraRotationControl::new();
        assert!(control.start_handler(&mut ctx, &mouse_at(MousePhase::Down, 400.0, 300.0), &[]));
        assert!(control.change_handler(&mut ctx, &mouse_at(MousePhase::Move, 400.0, 330.0), &[]));
        assert!(control.change_handler(&mut ctx, &mouse_at(MousePhase::Move, 400.0, 360.0), &[]));

        let expected = 60.0 * 45.0f32.to_radians() / 600.0;
        let (_, pitch, _) = ctx.camera.rotation.to_euler(EulerRot::YXZ);
        assert!((pitch - expected).abs() < 1e-5);
    }
}
