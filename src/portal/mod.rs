mod components;
mod messages;
mod pair_state;
mod plugin;
mod registry;
mod settings;
pub mod systems;

pub use components::{
    ActivePortal, BlockPosition, BluePortal, OrangePortal, PortalColor, PortalTraveler,
    spawn_portal_block,
};
pub use messages::{BlockActivated, BlockDestroyed, PlayerMoved, PortalNotification, TeleportPlayer};
pub use pair_state::{ActivePortalPair, PortalPair};
pub use plugin::{PortalBlocksPlugin, PortalSet};
pub use registry::{BlockEntityRegistry, sync_block_registry};
pub use settings::PortalSettings;
