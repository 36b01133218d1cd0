//! Control state machines and concrete gesture behaviors.
//!
//! A control is a small per-gesture state machine with three lifecycle
//! hooks: start, change, end. The dispatcher drives those hooks; the
//! control mutates the scene or camera and reports via a boolean
//! whether it claimed the event. Two shared cores carry the lifecycle
//! bookkeeping: [`SingleTargetCore`] tracks the one object a gesture
//! grips, [`TargetlessCore`] tracks a plain active flag. Each concrete
//! behavior composes one of the cores with its own scratch state.
//!
//! [`SingleTargetCore`]: self::core::SingleTargetCore
//! [`TargetlessCore`]: self::core::TargetlessCore

pub mod camera_distance;
pub mod camera_move;
pub mod camera_rotation;
pub mod camera_zoom;
pub mod core;
pub mod direction;
pub mod distance;
pub mod events;
pub mod rotation;
pub mod traits;

pub use camera_distance::CameraDistanceControl;
pub use camera_move::CameraMoveControl;
pub use camera_rotation::CameraRotationControl;
pub use camera_zoom::CameraZoomControl;
pub use direction::DirectionControl;
pub use distance::{DistanceMouseControl, DistanceTouchControl, DistanceWheelControl};
pub use events::{ControlNotification, EventListeners, Listener, NotificationKind};
pub use rotation::RotationControl;
pub use traits::{shared, ControlContext, ObjectControl, SharedControl};
