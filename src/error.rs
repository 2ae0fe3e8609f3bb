//! Setup-time error types.
//!
//! Nothing in the per-frame path fails; these cover building the rig
//! hierarchy, the grid, and loading configuration.

use std::fmt;

/// Errors produced while setting up the camera rig or its map.
#[derive(Debug)]
pub enum RigError {
    /// The rig root has no first child to act as the swivel.
    MissingSwivel,
    /// The swivel has no first child to act as the stick.
    MissingStick,
    /// A hierarchy node has no `Transform` component.
    MissingTransform(&'static str),
    /// Grid dimensions that cannot describe a map.
    InvalidGrid(String),
    /// Generic I/O failure.
    Io(std::io::Error),
    /// Configuration parsing/serialization failure.
    ConfigParse(String),
}

impl fmt::Display for RigError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::MissingSwivel => write!(f, "camera rig root has no swivel child"),
            Self::MissingStick => write!(f, "camera swivel has no stick child"),
            Self::MissingTransform(node) => {
                write!(f, "camera {node} node has no transform")
            }
            Self::InvalidGrid(msg) => write!(f, "invalid grid: {msg}"),
            Self::Io(e) => write!(f, "I/O error: {e}"),
            Self::ConfigParse(msg) => write!(f, "config parse error: {msg}"),
        }
    }
}

impl std::error::Error for RigError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Io(e) => Some(e),
            _ => None,
        }
    }
}

impl From<std::io::Error> for RigError {
    fn from(e: std::io::Error) -> Self {
        Self::Io(e)
    }
}
