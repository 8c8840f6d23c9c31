use bevy::prelude::*;
use serde::{Deserialize, Serialize};

use crate::error::PortalError;
use crate::portal::components::PortalColor;

/// Positions of the currently active blue and orange endpoints.
///
/// Lives on a single world entity created by [`init_portal_pair`](crate::portal::systems::init_portal_pair)
/// and is reflected so scene persistence carries it across sessions.
#[derive(Component, Reflect, Default, Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[reflect(Component)]
pub struct ActivePortalPair {
    /// Block coordinate of the active blue portal.
    pub blue: Option<IVec3>,
    /// Block coordinate of the active orange portal.
    pub orange: Option<IVec3>,
}

impl ActivePortalPair {
    /// Return the stored position for `color`.
    pub fn slot(&self, color: PortalColor) -> Option<IVec3> {
        match color {
            PortalColor::Blue => self.blue,
            PortalColor::Orange => self.orange,
        }
    }

    /// Mutable access to the stored position for `color`.
    fn slot_mut(&mut self, color: PortalColor) -> &mut Option<IVec3> {
        match color {
            PortalColor::Blue => &mut self.blue,
            PortalColor::Orange => &mut self.orange,
        }
    }

    /// Record `position` as the active endpoint of `color`.
    pub fn set(&mut self, color: PortalColor, position: IVec3) {
        *self.slot_mut(color) = Some(position);
    }

    /// Forget the active endpoint of `color`.
    pub fn clear(&mut self, color: PortalColor) {
        *self.slot_mut(color) = None;
    }

    /// Whether both endpoints are active.
    pub fn is_linked(&self) -> bool {
        self.blue.is_some() && self.orange.is_some()
    }

    /// Teleport target for a player standing on `beneath`, if it is a linked endpoint.
    ///
    /// Blue is checked before orange, so at most one destination is produced.
    pub fn destination_from(&self, beneath: IVec3, offset: IVec3) -> Option<IVec3> {
        let (Some(blue), Some(orange)) = (self.blue, self.orange) else {
            return None;
        };
        if beneath == blue {
            Some(orange + offset)
        } else if beneath == orange {
            Some(blue + offset)
        } else {
            None
        }
    }

    /// Write the pair as a RON snapshot.
    pub fn to_ron(&self) -> Result<String, PortalError> {
        Ok(ron::ser::to_string_pretty(self, ron::ser::PrettyConfig::default())?)
    }

    /// Restore a pair from a RON snapshot.
    pub fn from_ron(text: &str) -> Result<Self, PortalError> {
        Ok(ron::from_str(text)?)
    }
}

/// Handle to the entity carrying the world's [`ActivePortalPair`].
#[derive(Resource, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PortalPair(pub Entity);

impl PortalPair {
    /// Entity that owns the pair component.
    pub fn entity(&self) -> Entity {
        self.0
    }
}
