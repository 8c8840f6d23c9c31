use bevy::prelude::*;

/// A player pressed "use" on a block.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockActivated {
    /// Block the player interacted with.
    pub block: Entity,
    /// Player that triggered the interaction.
    pub player: Entity,
}

/// A block is being destroyed. The block is despawned once portal state has been updated.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct BlockDestroyed {
    /// Block being removed from the world.
    pub block: Entity,
}

/// A player body moved this tick.
#[derive(Message, Debug, Clone, Copy, PartialEq, Eq)]
pub struct PlayerMoved {
    /// Player whose position changed.
    pub player: Entity,
}

/// Move a player to a world position.
#[derive(Message, Debug, Clone, Copy, PartialEq)]
pub struct TeleportPlayer {
    /// Player to move.
    pub player: Entity,
    /// Target world position.
    pub destination: Vec3,
}

/// Text shown to one player.
#[derive(Message, Debug, Clone, PartialEq, Eq)]
pub struct PortalNotification {
    /// Player that should see the text.
    pub player: Entity,
    /// Message body.
    pub text: String,
}
