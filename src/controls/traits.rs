//! The control capability interface.

use std::cell::RefCell;
use std::rc::Rc;

use crate::camera::{Camera, Viewport};
use crate::controls::events::EventListeners;
use crate::input::{EventCategory, PointerEvent};
use crate::picking::Intersection;
use crate::scene::Scene;

/// Borrowed world state a control may mutate during a lifecycle call.
pub struct ControlContext<'a> {
    /// Object store holding the controlled objects.
    pub scene: &'a mut Scene,
    /// The camera gestures read and steer.
    pub camera: &'a mut Camera,
    /// Current control-surface size in pixels.
    pub viewport: Viewport,
}

/// A gesture behavior driven by the dispatcher.
///
/// `start_handler` and `change_handler` return `true` when the control
/// claimed the event, which the dispatcher reports to the host as
/// consumed. Listeners attached through [`EventListeners`] run inside
/// the handler call and must not reborrow the dispatching control.
pub trait ObjectControl {
    /// Short name used in registration errors and logs.
    fn name(&self) -> &'static str {
        "unnamed"
    }

    /// Whether this control can handle gestures of `category`.
    fn supports_category(&self, category: EventCategory) -> bool;

    /// Whether this control currently reacts to events.
    fn enabled(&self) -> bool;

    /// Enable or disable this control.
    fn set_enabled(&mut self, enabled: bool);

    /// Lifecycle notification listeners.
    fn listeners_mut(&mut self) -> &mut EventListeners;

    /// A gesture matching this control's registration began.
    fn start_handler(
        &mut self,
        ctx: &mut ControlContext<'_>,
        event: &PointerEvent,
        hits: &[Intersection],
    ) -> bool;

    /// The active gesture produced another event.
    fn change_handler(
        &mut self,
        ctx: &mut ControlContext<'_>,
        event: &PointerEvent,
        hits: &[Intersection],
    ) -> bool;

    /// The active gesture ended or was reclassified.
    fn end_handler(&mut self, ctx: &mut ControlContext<'_>, event: &PointerEvent) -> bool;
}

/// Shared handle to a control, so one instance can sit under several
/// registration keys.
pub type SharedControl = Rc<RefCell<dyn ObjectControl>>;

/// Wrap a control for registration.
pub fn shared<C: ObjectControl + 'static>(control: C) -> SharedControl {
    Rc::new(RefCell::new(control))
}
