use bevy::prelude::*;
use serde::{Deserialize, Serialize};
use std::path::Path;

use crate::error::PortalError;

/// Tunables for the portal plugin, loadable from a RON file.
#[derive(Resource, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct PortalSettings {
    /// Block offset from the paired endpoint to the teleport destination.
    pub teleport_offset: IVec3,
    /// Whether activation feedback is sent to the acting player.
    pub notify_player: bool,
}

impl Default for PortalSettings {
    fn default() -> Self {
        Self {
            teleport_offset: IVec3::ONE,
            notify_player: true,
        }
    }
}

impl PortalSettings {
    /// Parse settings from RON text. Missing fields keep their defaults.
    pub fn from_ron_str(text: &str) -> Result<Self, PortalError> {
        Ok(ron::from_str(text)?)
    }

    /// Read settings from a RON file.
    pub fn load(path: impl AsRef<Path>) -> Result<Self, PortalError> {
        let path = path.as_ref();
        let text = std::fs::read_to_string(path).map_err(|source| PortalError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Self::from_ron_str(&text)
    }
}
