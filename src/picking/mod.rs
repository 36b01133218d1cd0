//! CPU ray casting against controlled objects.
//!
//! Every pointer event is resolved to the ordered list of objects under
//! the cursor before the dispatcher consults any control. The rays are
//! built from the camera through the event's screen position, and
//! intersections are reported in world space, nearest first.

/// Ray construction and shape intersection.
pub mod ray;
/// Camera rays and ordered object intersection lists.
pub mod raycaster;

pub use ray::Ray;
pub use raycaster::{Intersection, Raycaster};
