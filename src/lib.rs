// -- Lint policy ---------------------------------------------------------
// This is the single source of truth for crate-wide lints.

// Broad lint groups
#![deny(clippy::all)]
#![deny(clippy::pedantic)]
#![deny(clippy::nursery)]
// Documentation
#![deny(missing_docs)]
#![deny(rustdoc::broken_intra_doc_links)]
#![deny(rustdoc::private_intra_doc_links)]
#![deny(rustdoc::bare_urls)]
// No panicking in library code
#![deny(clippy::unwrap_used)]
#![deny(clippy::expect_used)]
#![deny(clippy::panic)]
#![deny(clippy::todo)]
#![deny(clippy::unimplemented)]
// No debug/print artifacts
#![deny(clippy::dbg_macro)]
#![deny(clippy::print_stdout)]
#![deny(clippy::print_stderr)]
// Import hygiene
#![deny(clippy::wildcard_imports)]
// Complexity limits (thresholds in clippy.toml)
#![deny(clippy::cognitive_complexity)]
#![deny(clippy::too_many_lines)]
#![deny(clippy::excessive_nesting)]
// Function signature hygiene
#![deny(clippy::too_many_arguments)]
#![deny(clippy::fn_params_excessive_bools)]
// Clone / pass-by-value hygiene
#![deny(clippy::needless_pass_by_value)]
#![deny(clippy::implicit_clone)]
// String hygiene
#![deny(clippy::inefficient_to_string)]
#![deny(clippy::redundant_closure_for_method_calls)]
#![deny(clippy::manual_string_new)]
#![deny(clippy::str_to_string)]
// Cargo lints (warn, not deny since cargo lints can be noisy)
#![warn(clippy::cargo)]
// Unused / redundant code
#![deny(unused_results)]
#![deny(unused_qualifications)]
// Cast hygiene
#![deny(trivial_casts)]
#![deny(trivial_numeric_casts)]

//! Mouse, touch, and wheel control of 3-D objects and the camera.
//!
//! Hosts mirror their manipulable objects into a flat [`scene::Scene`],
//! register gesture controls with a [`manager::ControlManager`], and feed
//! it raw pointer events. The manager classifies each event into a gesture
//! key (category, button/finger selector, modifier mask), ray-casts the
//! controlled objects through the pointer, and drives the start/change/end
//! lifecycle of whichever controls the key is bound to. Controls mutate
//! object poses and the camera directly and emit lifecycle notifications
//! for effects like highlighting.
//!
//! # Key entry points
//!
//! - [`manager::ControlManager`] - the event dispatcher
//! - [`scene::Scene`] - the flat store of controlled objects
//! - [`controls`] - the concrete gesture behaviors (rotate, move,
//!   distance, camera pan/orbit/dolly/zoom)
//! - [`options::ControlOptions`] - gesture tuning (rates, clamps) with
//!   TOML presets
//! - [`wrapper::ObjectWrapper`] - proxy spheres for composite objects
//!
//! # Architecture
//!
//! Everything runs synchronously on the host's event thread: event →
//! classification → one ray cast → lifecycle dispatch. Holding a gesture
//! and pressing an extra modifier escalates to the modifier-qualified
//! control set without releasing the button; any other classification
//! change ends the gesture. Controls never retain references into the
//! scene, they address objects by ID through the context passed to each
//! handler call.

pub mod camera;
pub mod controls;
pub mod error;
pub mod input;
pub mod manager;
pub mod options;
pub mod picking;
pub mod scene;
pub mod util;
pub mod wrapper;
