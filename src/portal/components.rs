use bevy::prelude::*;
use serde::{Deserialize, Serialize};

/// Color of a portal endpoint. Each color has at most one active block.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Reflect, Serialize, Deserialize)]
pub enum PortalColor {
    /// Blue endpoint.
    Blue,
    /// Orange endpoint.
    Orange,
}

impl PortalColor {
    /// Return the color that completes a pathway with this one.
    pub const fn other(self) -> Self {
        match self {
            Self::Blue => Self::Orange,
            Self::Orange => Self::Blue,
        }
    }

    /// Capitalized name used in player-facing messages.
    pub const fn display_name(self) -> &'static str {
        match self {
            Self::Blue => "Blue",
            Self::Orange => "Orange",
        }
    }

    /// Indefinite article matching `display_name`.
    const fn article(self) -> &'static str {
        match self {
            Self::Blue => "a",
            Self::Orange => "an",
        }
    }

    /// Hint telling the player to activate a portal of this color.
    pub fn activation_hint(self) -> String {
        format!(
            "Activate {} {} Portal to complete pathway.",
            self.article(),
            self.display_name()
        )
    }
}

/// Marker for blue portal blocks.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct BluePortal;

/// Marker for orange portal blocks.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct OrangePortal;

/// Present iff this block is the endpoint currently recorded for its color.
#[derive(Component, Reflect, Default, Debug, Clone, Copy)]
#[reflect(Component)]
pub struct ActivePortal;

/// World-block coordinate of a block entity.
#[derive(Component, Reflect, Default, Debug, Clone, Copy, PartialEq, Eq)]
#[reflect(Component)]
pub struct BlockPosition(pub IVec3);

/// Marker for player bodies that can travel through portals.
#[derive(Component, Default, Debug, Clone, Copy)]
pub struct PortalTraveler;

/// Spawn a portal block of `color` at `position` and return its entity.
pub fn spawn_portal_block(commands: &mut Commands, position: IVec3, color: PortalColor) -> Entity {
    let mut block = commands.spawn((
        Name::new(format!("{} Portal {position}", color.display_name())),
        BlockPosition(position),
    ));
    match color {
        PortalColor::Blue => block.insert(BluePortal),
        PortalColor::Orange => block.insert(OrangePortal),
    };
    block.id()
}
