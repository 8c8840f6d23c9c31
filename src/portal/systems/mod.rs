mod activation;
mod bootstrap;
mod deactivation;
mod teleport;

pub use activation::handle_portal_activation;
pub use bootstrap::init_portal_pair;
pub use deactivation::{deactivate_destroyed_portals, despawn_destroyed_blocks};
pub use teleport::{apply_teleports, block_beneath, teleport_on_portal, track_player_movement};
