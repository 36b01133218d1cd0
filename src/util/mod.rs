//! Shared math utilities.

pub mod spherical;
