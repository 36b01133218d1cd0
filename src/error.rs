//! Crate-level error types.

use std::fmt;

use crate::input::EventCategory;
use crate::scene::ObjectId;

/// Errors produced by the object-controls crate.
///
/// These cover misuse of the synchronous API surface (registration,
/// wrapper construction, options IO). Runtime precondition misses inside
/// gesture handling, such as a disabled control or an empty hit list,
/// are reported through boolean handler results, never through this
/// type.
#[derive(Debug)]
pub enum ControlError {
    /// A control was registered for an event category it does not handle.
    /// No controls from the offending registration call were added.
    UnsupportedCategory {
        /// Name of the rejected control.
        control: &'static str,
        /// The category the registration asked for.
        category: EventCategory,
    },
    /// An operation referenced an object ID that is not in the scene.
    UnknownObject(ObjectId),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
}

impl fmt::Display for ControlError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::UnsupportedCategory { control, category } => {
                write!(f, "{control} does not support event category {category}")
            }
            Self::UnknownObject(id) => {
                write!(f, "object {id:?} is not in the scene")
            }
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
        }
    }
}

impl std::error::Error for ControlError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for ControlError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<toml::de::Error> for ControlError {
    fn from(e: toml::de::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}

impl From<toml::ser::Error> for ControlError {
    fn from(e: toml::ser::Error) -> Self {
        Self::OptionsParse(e.to_string())
    }
}
