//! The control dispatcher: classifies events, ray-casts, and drives
//! control lifecycles.

use std::rc::Rc;

use glam::Vec2;
use rustc_hash::FxHashMap;

use crate::camera::{Camera, Viewport};
use crate::controls::events::{Listener, NotificationKind};
use crate::controls::traits::{ControlContext, SharedControl};
use crate::error::ControlError;
use crate::input::{
    EventCategory, GestureKey, Modifiers, MouseButtons, MousePhase, PointerEvent,
};
use crate::scene::{ObjectId, Scene};

// ---------------------------------------------------------------------------
// Host-facing outcome
// ---------------------------------------------------------------------------

/// Pointer affordance the host should show.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CursorStyle {
    /// The platform default cursor.
    Default,
    /// The interactive pointer cursor.
    Pointer,
}

#[cfg(feature = "viewer")]
impl From<CursorStyle> for winit::window::CursorIcon {
    fn from(style: CursorStyle) -> Self {
        match style {
            CursorStyle::Default => Self::Default,
            CursorStyle::Pointer => Self::Pointer,
        }
    }
}

/// What the host should do after pushing an event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DispatchOutcome {
    /// A control claimed the event; the host should suppress its own
    /// default handling for it.
    pub consumed: bool,
    /// Pointer affordance to apply, or `None` to leave it alone.
    pub cursor: Option<CursorStyle>,
}

impl DispatchOutcome {
    /// No control claimed the event; show the default cursor.
    #[must_use]
    pub const fn unclaimed() -> Self {
        Self {
            consumed: false,
            cursor: Some(CursorStyle::Default),
        }
    }

    /// A control claimed the event; leave the cursor alone.
    #[must_use]
    pub const fn claimed() -> Self {
        Self {
            consumed: true,
            cursor: None,
        }
    }

    /// The event was ignored outright.
    const fn ignored() -> Self {
        Self {
            consumed: false,
            cursor: None,
        }
    }
}

// ---------------------------------------------------------------------------
// Dispatcher
// ---------------------------------------------------------------------------

fn same_control(a: &SharedControl, b: &SharedControl) -> bool {
    std::ptr::addr_eq(Rc::as_ptr(a), Rc::as_ptr(b))
}

/// Routes pointer events to registered controls.
///
/// Controls are registered under a [`GestureKey`]; each incoming event
/// is classified, matched against the active gesture, and forwarded as
/// a start, change, or end to the bound control list. One ray cast per
/// event supplies the intersections.
pub struct ControlManager {
    /// Master switch. A disabled manager resets the cursor and claims
    /// nothing.
    pub enabled: bool,
    disposed: bool,
    viewport: Viewport,
    controlled: Vec<ObjectId>,
    table: FxHashMap<GestureKey, Vec<SharedControl>>,
    current_key: Option<GestureKey>,
    /// Snapshot of the control list bound when the gesture started.
    /// Table mutation during a gesture does not retarget it.
    active: Vec<SharedControl>,
}

impl ControlManager {
    /// An empty dispatcher with nothing registered.
    #[must_use]
    pub fn new() -> Self {
        Self {
            enabled: true,
            disposed: false,
            viewport: Viewport::default(),
            controlled: Vec::new(),
            table: FxHashMap::default(),
            current_key: None,
            active: Vec::new(),
        }
    }

    /// Update the control-surface size used for screen-to-ray
    /// conversion.
    pub fn set_viewport(&mut self, viewport: Viewport) {
        self.viewport = viewport;
    }

    // -- Registration -------------------------------------------------------

    /// Append `controls` to the slot for (`category`, `selector`,
    /// `modifiers`).
    ///
    /// Every control must support `category`; otherwise nothing at all
    /// is registered and the offending control is named in the error.
    pub fn register_controls(
        &mut self,
        category: EventCategory,
        selector: u32,
        modifiers: Modifiers,
        controls: &[SharedControl],
    ) -> Result<(), ControlError> {
        for control in controls {
            let control = control.borrow();
            if !control.supports_category(category) {
                return Err(ControlError::UnsupportedCategory {
                    control: control.name(),
                    category,
                });
            }
        }
        let key = GestureKey::new(category, selector, modifiers);
        let slot = self.table.entry(key).or_default();
        for control in controls {
            slot.push(Rc::clone(control));
        }
        log::debug!("registered {} control(s) under {key:?}", controls.len());
        Ok(())
    }

    /// Register controls for mouse events with exactly `buttons` held.
    pub fn add_mouse_controls(
        &mut self,
        buttons: MouseButtons,
        modifiers: Modifiers,
        controls: &[SharedControl],
    ) -> Result<(), ControlError> {
        self.register_controls(
            EventCategory::Mouse,
            u32::from(buttons.bits()),
            modifiers,
            controls,
        )
    }

    /// Register controls for touch events with exactly `touches`
    /// fingers down.
    pub fn add_touch_controls(
        &mut self,
        touches: u32,
        modifiers: Modifiers,
        controls: &[SharedControl],
    ) -> Result<(), ControlError> {
        self.register_controls(EventCategory::Touch, touches, modifiers, controls)
    }

    /// Register controls for wheel events.
    pub fn add_wheel_controls(
        &mut self,
        modifiers: Modifiers,
        controls: &[SharedControl],
    ) -> Result<(), ControlError> {
        self.register_controls(EventCategory::Wheel, 0, modifiers, controls)
    }

    /// Remove every occurrence of `control` from the slot for
    /// (`category`, `selector`, `modifiers`); no-op when absent.
    pub fn unregister_control(
        &mut self,
        category: EventCategory,
        selector: u32,
        modifiers: Modifiers,
        control: &SharedControl,
    ) {
        let key = GestureKey::new(category, selector, modifiers);
        if let Some(slot) = self.table.get_mut(&key) {
            slot.retain(|known| !same_control(known, control));
        }
    }

    /// Remove a control registered for mouse events with `buttons`.
    pub fn remove_mouse_control(
        &mut self,
        buttons: MouseButtons,
        modifiers: Modifiers,
        control: &SharedControl,
    ) {
        self.unregister_control(
            EventCategory::Mouse,
            u32::from(buttons.bits()),
            modifiers,
            control,
        );
    }

    /// Remove a control registered for touch events with `touches`
    /// fingers.
    pub fn remove_touch_control(
        &mut self,
        touches: u32,
        modifiers: Modifiers,
        control: &SharedControl,
    ) {
        self.unregister_control(EventCategory::Touch, touches, modifiers, control);
    }

    /// Remove a control registered for wheel events.
    pub fn remove_wheel_control(&mut self, modifiers: Modifiers, control: &SharedControl) {
        self.unregister_control(EventCategory::Wheel, 0, modifiers, control);
    }

    // -- Controlled objects -------------------------------------------------

    /// Make `id` a ray-cast target. Adding an object twice keeps one
    /// entry.
    pub fn add_object(&mut self, id: ObjectId) {
        if !self.controlled.contains(&id) {
            self.controlled.push(id);
            log::debug!("controlling object {id:?}");
        }
    }

    /// Stop ray casting against `id`; no-op when absent.
    pub fn remove_object(&mut self, id: ObjectId) {
        self.controlled.retain(|known| *known != id);
    }

    /// The objects currently eligible as ray-cast targets.
    #[must_use]
    pub fn controlled_objects(&self) -> &[ObjectId] {
        &self.controlled
    }

    // -- Pass-through listeners ---------------------------------------------

    /// Attach `listener` for `kind` notifications on every control in
    /// the registration table. A control sitting under several keys
    /// receives one copy.
    pub fn add_listener(&mut self, kind: NotificationKind, listener: &Listener) {
        for slot in self.table.values() {
            for control in slot {
                control.borrow_mut().listeners_mut().add(kind, listener);
            }
        }
    }

    /// Detach `listener` for `kind` from every registered control.
    pub fn remove_listener(&mut self, kind: NotificationKind, listener: &Listener) {
        for slot in self.table.values() {
            for control in slot {
                control.borrow_mut().listeners_mut().remove(kind, listener);
            }
        }
    }

    // -- Event handling -----------------------------------------------------

    /// Route one pointer event.
    ///
    /// Classifies the event, ray-casts the controlled objects through
    /// its position, and drives the continuation, escalation, or
    /// transition of the active gesture.
    pub fn handle_event(
        &mut self,
        event: &PointerEvent,
        scene: &mut Scene,
        camera: &mut Camera,
    ) -> DispatchOutcome {
        if self.disposed {
            log::warn!("event pushed at a disposed control manager");
            return DispatchOutcome::ignored();
        }
        if !self.enabled {
            return DispatchOutcome::unclaimed();
        }

        let ndc = self.viewport.ndc(event.position());
        let caster = crate::picking::Raycaster::from_camera(camera, ndc);
        let hits = caster.intersect_objects(scene, &self.controlled);

        let key = GestureKey::from_event(event);
        let mut ctx = ControlContext {
            scene,
            camera,
            viewport: self.viewport,
        };

        if self.current_key != Some(key) {
            // The gesture changed shape. Adding modifiers to a held
            // chord escalates; anything else is a plain transition.
            let escalation = self
                .current_key
                .is_some_and(|previous| previous.escalates_to(key));
            self.current_key = Some(key);

            let previous = std::mem::take(&mut self.active);
            for control in &previous {
                let _ = control.borrow_mut().end_handler(&mut ctx, event);
            }

            if event.is_start() || escalation {
                self.active = self.table.get(&key).cloned().unwrap_or_default();
                let mut claimed = false;
                for control in &self.active {
                    claimed = control.borrow_mut().start_handler(&mut ctx, event, &hits)
                        || claimed;
                }
                if claimed {
                    return DispatchOutcome {
                        consumed: true,
                        cursor: event.is_pointer_down().then_some(CursorStyle::Pointer),
                    };
                }
            }
            return DispatchOutcome::unclaimed();
        }

        if self.active.is_empty() {
            return DispatchOutcome::unclaimed();
        }
        let mut claimed = false;
        for control in &self.active {
            claimed = control.borrow_mut().change_handler(&mut ctx, event, &hits) || claimed;
        }
        if claimed {
            DispatchOutcome::claimed()
        } else {
            DispatchOutcome::unclaimed()
        }
    }

    /// End the active gesture out of band, for signals like the
    /// pointer leaving the control surface. Broadcasts an end to the
    /// active controls and clears the gesture state.
    pub fn handle_cancel(&mut self, event: &PointerEvent, scene: &mut Scene, camera: &mut Camera) {
        if self.disposed {
            log::warn!("cancel pushed at a disposed control manager");
            return;
        }
        let mut ctx = ControlContext {
            scene,
            camera,
            viewport: self.viewport,
        };
        let previous = std::mem::take(&mut self.active);
        for control in &previous {
            let _ = control.borrow_mut().end_handler(&mut ctx, event);
        }
        self.current_key = None;
    }

    /// Tear the dispatcher down: end any active gesture as if the
    /// pointer was released, then ignore all further events.
    pub fn dispose(&mut self, scene: &mut Scene, camera: &mut Camera) {
        if self.disposed {
            return;
        }
        let release = PointerEvent::mouse(
            MousePhase::Up,
            Vec2::ZERO,
            MouseButtons::NONE,
            Modifiers::NONE,
        );
        self.handle_cancel(&release, scene, camera);
        self.disposed = true;
        log::info!("control manager disposed");
    }

    /// Whether [`dispose`](Self::dispose) has been called.
    #[must_use]
    pub fn is_disposed(&self) -> bool {
        self.disposed
    }
}

impl Default for ControlManager {
    fn default() -> Self {
        Self::new()
    }
}
