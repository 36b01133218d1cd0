//! Pointer events and gesture classification.
//!
//! Hosts translate their windowing events into [`PointerEvent`] values
//! and push them at the control manager. Each event is classified into
//! a [`GestureKey`] (category, selector, modifier mask) which drives
//! the registration table lookup.

pub mod event;
pub mod gesture;

pub use event::{
    Modifiers, MouseButtons, MouseEvent, MousePhase, PointerEvent, TouchEvent, TouchPhase,
    TouchPoint, WheelEvent,
};
pub use gesture::{EventCategory, GestureKey};
