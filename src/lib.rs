//! Paired blue/orange portal blocks for a Bevy voxel world.
//!
//! Activating one blue and one orange block links them; a player standing on top of either
//! endpoint is moved above the other one.

mod error;
pub mod portal;

pub use error::PortalError;
pub use portal::{
    ActivePortal, ActivePortalPair, BlockActivated, BlockDestroyed, BlockEntityRegistry,
    BlockPosition, BluePortal, OrangePortal, PlayerMoved, PortalBlocksPlugin, PortalColor,
    PortalNotification, PortalPair, PortalSet, PortalSettings, PortalTraveler, TeleportPlayer,
    spawn_portal_block,
};
