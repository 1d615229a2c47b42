//! Crate-level error types.

use std::fmt;

use crate::scene::LayerKind;

/// Errors produced by the semiviz crate.
#[derive(Debug)]
pub enum SemivizError {
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Topic content could not be decoded.
    ContentParse(String),
    /// TOML options parsing/serialization failure.
    OptionsParse(String),
    /// No topic is registered under the requested id.
    UnknownTopic(String),
    /// The topic exists but has no section with the requested id.
    UnknownSection {
        /// Topic that was searched.
        topic: String,
        /// Section id that was not found.
        section: String,
    },
}

impl fmt::Display for SemivizError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ContentParse(msg) => {
                write!(f, "content parse error: {msg}")
            }
            Self::OptionsParse(msg) => {
                write!(f, "options parse error: {msg}")
            }
            Self::UnknownTopic(id) => write!(f, "unknown topic: {id}"),
            Self::UnknownSection { topic, section } => {
                write!(f, "topic {topic} has no section {section}")
            }
        }
    }
}

impl std::error::Error for SemivizError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for SemivizError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}

impl From<serde_json::Error> for SemivizError {
    fn from(e: serde_json::Error) -> Self {
        Self::ContentParse(e.to_string())
    }
}

/// Failure of a single per-frame updater.
///
/// The render host logs these and moves on to the next updater; they never
/// stop the frame loop.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FrameError {
    /// The device layers have not been built yet (or were torn down).
    MissingLayers,
    /// An optional layer the updater depends on is absent.
    MissingLayer(LayerKind),
}

impl fmt::Display for FrameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingLayers => write!(f, "device layers not built"),
            Self::MissingLayer(kind) => {
                write!(f, "layer {} not present", kind.name())
            }
        }
    }
}

impl std::error::Error for FrameError {}
