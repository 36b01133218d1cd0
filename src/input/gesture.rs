//! Gesture classification.

use std::fmt;

use super::event::{Modifiers, PointerEvent};

/// Broad input family a gesture belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EventCategory {
    /// Mouse buttons and moves.
    Mouse,
    /// Touch sequences.
    Touch,
    /// Wheel scrolling.
    Wheel,
}

impl fmt::Display for EventCategory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Mouse => "mouse",
            Self::Touch => "touch",
            Self::Wheel => "wheel",
        };
        write!(f, "{name}")
    }
}

/// Identity of a gesture as the registration table sees it.
///
/// The selector is the button bit mask for mouse gestures, the finger
/// count for touch gestures, and zero for wheel gestures.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct GestureKey {
    /// Input family.
    pub category: EventCategory,
    /// Button mask or finger count, category dependent.
    pub selector: u32,
    /// Modifier keys held.
    pub modifiers: Modifiers,
}

impl GestureKey {
    /// Build a key for a registration slot.
    #[must_use]
    pub const fn new(category: EventCategory, selector: u32, modifiers: Modifiers) -> Self {
        Self {
            category,
            selector,
            modifiers,
        }
    }

    /// Classify a pointer event.
    #[must_use]
    pub fn from_event(event: &PointerEvent) -> Self {
        match event {
            PointerEvent::Mouse(e) => Self::new(
                EventCategory::Mouse,
                u32::from(e.buttons.bits()),
                e.modifiers,
            ),
            PointerEvent::Touch(e) => Self::new(
                EventCategory::Touch,
                u32::try_from(e.touches.len()).unwrap_or(u32::MAX),
                e.modifiers,
            ),
            PointerEvent::Wheel(e) => Self::new(EventCategory::Wheel, 0, e.modifiers),
        }
    }

    /// Whether a gesture keyed by `self` may hand over to one keyed by
    /// `next` without an explicit press. Category and selector must
    /// match and the modifier set may only grow.
    #[must_use]
    pub fn escalates_to(self, next: Self) -> bool {
        self.category == next.category
            && self.selector == next.selector
            && self.modifiers.is_subset_of(next.modifiers)
    }
}

#[cfg(test)]
mod tests {
    use glam::Vec2;

    use super::*;
    use crate::input::event::{MouseButtons, MousePhase, TouchPhase};

    #[test]
    fn test_mouse_key_uses_button_bits() {
        let event = PointerEvent::mouse(
            MousePhase::Down,
            Vec2::ZERO,
            MouseButtons::LEFT | MouseButtons::RIGHT,
            Modifiers::SHIFT,
        );
        let key = GestureKey::from_event(&event);
        assert_eq!(key.category, EventCategory::Mouse);
        assert_eq!(key.selector, 3);
        assert_eq!(key.modifiers, Modifiers::SHIFT);
    }

    #[test]
    fn test_touch_key_uses_finger_count() {
        let event = PointerEvent::touch(
            TouchPhase::Start,
            &[Vec2::ZERO, Vec2::ONE],
            Modifiers::NONE,
        );
        let key = GestureKey::from_event(&event);
        assert_eq!(key.category, EventCategory::Touch);
        assert_eq!(key.selector, 2);
    }

    #[test]
    fn test_wheel_key_selector_is_zero() {
        let event = PointerEvent::wheel(Vec2::ZERO, Vec2::new(0.0, 1.0), Modifiers::CTRL);
        let key = GestureKey::from_event(&event);
        assert_eq!(key.category, EventCategory::Wheel);
        assert_eq!(key.selector, 0);
        assert_eq!(key.modifiers, Modifiers::CTRL);
    }

    #[test]
    fn test_escalation_requires_growing_modifiers() {
        let base = GestureKey::new(EventCategory::Mouse, 1, Modifiers::NONE);
        let with_shift = GestureKey::new(EventCategory::Mouse, 1, Modifiers::SHIFT);
        let other_button = GestureKey::new(EventCategory::Mouse, 2, Modifiers::SHIFT);
        assert!(base.escalates_to(with_shift));
        assert!(base.escalates_to(base));
        assert!(!with_shift.escalates_to(base));
        assert!(!base.escalates_to(other_button));
    }
}
