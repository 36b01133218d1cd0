//! Host-facing pointer event types.

use glam::Vec2;

// ---------------------------------------------------------------------------
// Button and modifier masks
// ---------------------------------------------------------------------------

/// Mouse buttons held during an event, as a bit mask.
///
/// Masks combine with `|`, so a chord reads the way it is held:
/// `MouseButtons::LEFT | MouseButtons::RIGHT`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct MouseButtons(u8);

impl MouseButtons {
    /// No buttons held.
    pub const NONE: Self = Self(0);
    /// Primary button.
    pub const LEFT: Self = Self(1);
    /// Secondary button.
    pub const RIGHT: Self = Self(2);
    /// Auxiliary button, usually the wheel.
    pub const MIDDLE: Self = Self(4);
    /// Fourth button, usually browse-back.
    pub const BACK: Self = Self(8);
    /// Fifth button, usually browse-forward.
    pub const FORWARD: Self = Self(16);
    /// Alias of [`Self::LEFT`].
    pub const PRIMARY: Self = Self::LEFT;
    /// Alias of [`Self::RIGHT`].
    pub const SECONDARY: Self = Self::RIGHT;
    /// Alias of [`Self::MIDDLE`].
    pub const AUXILIARY: Self = Self::MIDDLE;
    /// Alias of [`Self::BACK`].
    pub const FOURTH: Self = Self::BACK;
    /// Alias of [`Self::FORWARD`].
    pub const FIFTH: Self = Self::FORWARD;

    /// Raw bit mask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a mask from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Whether every button in `other` is also held in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether no buttons are held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for MouseButtons {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for MouseButtons {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

/// Keyboard modifiers held during an event, as a bit mask.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Modifiers(u8);

impl Modifiers {
    /// No modifiers held.
    pub const NONE: Self = Self(0);
    /// Shift key.
    pub const SHIFT: Self = Self(1);
    /// Control key.
    pub const CTRL: Self = Self(2);
    /// Alt (option) key.
    pub const ALT: Self = Self(4);
    /// Meta (command, windows) key.
    pub const META: Self = Self(8);

    /// Raw bit mask.
    #[must_use]
    pub const fn bits(self) -> u8 {
        self.0
    }

    /// Build a mask from raw bits.
    #[must_use]
    pub const fn from_bits(bits: u8) -> Self {
        Self(bits)
    }

    /// Whether every modifier in `other` is also held in `self`.
    #[must_use]
    pub const fn contains(self, other: Self) -> bool {
        self.0 & other.0 == other.0
    }

    /// Whether every modifier held here is also held in `other`.
    ///
    /// Used by the gesture escalation rule: a chord only grows, so the
    /// old modifier set must survive into the new one.
    #[must_use]
    pub const fn is_subset_of(self, other: Self) -> bool {
        self.0 & !other.0 == 0
    }

    /// Whether no modifiers are held.
    #[must_use]
    pub const fn is_empty(self) -> bool {
        self.0 == 0
    }
}

impl std::ops::BitOr for Modifiers {
    type Output = Self;

    fn bitor(self, rhs: Self) -> Self {
        Self(self.0 | rhs.0)
    }
}

impl std::ops::BitOrAssign for Modifiers {
    fn bitor_assign(&mut self, rhs: Self) {
        self.0 |= rhs.0;
    }
}

// ---------------------------------------------------------------------------
// Events
// ---------------------------------------------------------------------------

/// Lifecycle phase of a mouse event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MousePhase {
    /// A button went down.
    Down,
    /// The pointer moved with the current button set held.
    Move,
    /// A button went up.
    Up,
}

/// Lifecycle phase of a touch event.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TouchPhase {
    /// A finger went down.
    Start,
    /// One or more fingers moved.
    Move,
    /// A finger lifted.
    End,
    /// The system cancelled the touch sequence.
    Cancel,
}

/// One active touch point.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct TouchPoint {
    /// Position in viewport pixels.
    pub position: Vec2,
}

/// A mouse button or move event.
#[derive(Debug, Clone, PartialEq)]
pub struct MouseEvent {
    /// Lifecycle phase.
    pub phase: MousePhase,
    /// Position in viewport pixels.
    pub position: Vec2,
    /// Buttons held after this event.
    pub buttons: MouseButtons,
    /// Modifiers held during this event.
    pub modifiers: Modifiers,
}

/// A touch event carrying every active touch point.
#[derive(Debug, Clone, PartialEq)]
pub struct TouchEvent {
    /// Lifecycle phase.
    pub phase: TouchPhase,
    /// Active touch points after this event.
    pub touches: Vec<TouchPoint>,
    /// Modifiers held during this event.
    pub modifiers: Modifiers,
}

/// A wheel or scroll event.
#[derive(Debug, Clone, PartialEq)]
pub struct WheelEvent {
    /// Position in viewport pixels.
    pub position: Vec2,
    /// Scroll delta, y positive scrolling down.
    pub delta: Vec2,
    /// Modifiers held during this event.
    pub modifiers: Modifiers,
}

/// Any pointer event a host can push at the control manager.
#[derive(Debug, Clone, PartialEq)]
pub enum PointerEvent {
    /// A mouse event.
    Mouse(MouseEvent),
    /// A touch event.
    Touch(TouchEvent),
    /// A wheel event.
    Wheel(WheelEvent),
}

impl PointerEvent {
    /// Build a mouse event.
    #[must_use]
    pub fn mouse(
        phase: MousePhase,
        position: Vec2,
        buttons: MouseButtons,
        modifiers: Modifiers,
    ) -> Self {
        Self::Mouse(MouseEvent {
            phase,
            position,
            buttons,
            modifiers,
        })
    }

    /// Build a touch event from the active touch positions.
    #[must_use]
    pub fn touch(phase: TouchPhase, positions: &[Vec2], modifiers: Modifiers) -> Self {
        Self::Touch(TouchEvent {
            phase,
            touches: positions
                .iter()
                .map(|&position| TouchPoint { position })
                .collect(),
            modifiers,
        })
    }

    /// Build a wheel event.
    #[must_use]
    pub fn wheel(position: Vec2, delta: Vec2, modifiers: Modifiers) -> Self {
        Self::Wheel(WheelEvent {
            position,
            delta,
            modifiers,
        })
    }

    /// Primary position of this event in viewport pixels.
    #[must_use]
    pub fn position(&self) -> Vec2 {
        self.position_at(0)
    }

    /// Position of the `n`-th touch point, clamped to the last active
    /// touch. Mouse and wheel events have a single position.
    #[must_use]
    pub fn position_at(&self, n: usize) -> Vec2 {
        match self {
            Self::Mouse(e) => e.position,
            Self::Wheel(e) => e.position,
            Self::Touch(e) => {
                if e.touches.is_empty() {
                    Vec2::ZERO
                } else {
                    e.touches[n.min(e.touches.len() - 1)].position
                }
            }
        }
    }

    /// Modifiers held during this event.
    #[must_use]
    pub fn modifiers(&self) -> Modifiers {
        match self {
            Self::Mouse(e) => e.modifiers,
            Self::Touch(e) => e.modifiers,
            Self::Wheel(e) => e.modifiers,
        }
    }

    /// Whether this event can begin a gesture.
    #[must_use]
    pub fn is_start(&self) -> bool {
        match self {
            Self::Mouse(e) => e.phase == MousePhase::Down,
            Self::Touch(e) => e.phase == TouchPhase::Start,
            Self::Wheel(_) => true,
        }
    }

    /// Whether this event is a button or finger going down. Wheel
    /// events start gestures but are not presses.
    #[must_use]
    pub fn is_pointer_down(&self) -> bool {
        match self {
            Self::Mouse(e) => e.phase == MousePhase::Down,
            Self::Touch(e) => e.phase == TouchPhase::Start,
            Self::Wheel(_) => false,
        }
    }
}

// ---------------------------------------------------------------------------
// Host conversions
// ---------------------------------------------------------------------------

#[cfg(feature = "viewer")]
impl From<winit::event::MouseButton> for MouseButtons {
    fn from(button: winit::event::MouseButton) -> Self {
        match button {
            winit::event::MouseButton::Left => Self::LEFT,
            winit::event::MouseButton::Right => Self::RIGHT,
            winit::event::MouseButton::Middle => Self::MIDDLE,
            winit::event::MouseButton::Back => Self::BACK,
            winit::event::MouseButton::Forward => Self::FORWARD,
            winit::event::MouseButton::Other(_) => Self::NONE,
        }
    }
}

#[cfg(feature = "viewer")]
impl From<winit::keyboard::ModifiersState> for Modifiers {
    fn from(state: winit::keyboard::ModifiersState) -> Self {
        let mut modifiers = Self::NONE;
        if state.shift_key() {
            modifiers |= Self::SHIFT;
        }
        if state.control_key() {
            modifiers |= Self::CTRL;
        }
        if state.alt_key() {
            modifiers |= Self::ALT;
        }
        if state.super_key() {
            modifiers |= Self::META;
        }
        modifiers
    }
}

#[cfg(feature = "viewer")]
impl From<winit::event::TouchPhase> for TouchPhase {
    fn from(phase: winit::event::TouchPhase) -> Self {
        match phase {
            winit::event::TouchPhase::Started => Self::Start,
            winit::event::TouchPhase::Moved => Self::Move,
            winit::event::TouchPhase::Ended => Self::End,
            winit::event::TouchPhase::Cancelled => Self::Cancel,
        }
    }
}
