//! Serialized control archives
//!
//! A [`ControlArchive`] is the serialized-UI-state shape a screen archive
//! stores per control: a kind tag plus a free-form property map. Decoding
//! the archive format is ordinary fallible work; whether a given control can
//! be *restored* from one is up to that control.

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Errors that can occur handling control archives.
#[derive(Debug, Error)]
pub enum ArchiveError {
    /// The archive payload is not valid JSON for this shape.
    #[error("malformed control archive: {0}")]
    Malformed(#[from] serde_json::Error),
}

/// Serialized representation of a control in a screen archive.
#[derive(Clone, Debug, Serialize, Deserialize)]
pub struct ControlArchive {
    /// Control kind tag, e.g. `"toggle-button"`.
    pub kind: String,
    /// Free-form per-control properties.
    #[serde(default)]
    pub properties: serde_json::Map<String, serde_json::Value>,
}

impl ControlArchive {
    pub fn from_json(json: &str) -> Result<Self, ArchiveError> {
        Ok(serde_json::from_str(json)?)
    }

    pub fn to_json(&self) -> Result<String, ArchiveError> {
        Ok(serde_json::to_string(self)?)
    }
}
