use bevy::prelude::*;

use crate::portal::components::{ActivePortal, BlockPosition, BluePortal, OrangePortal};
use crate::portal::messages::{
    BlockActivated, BlockDestroyed, PlayerMoved, PortalNotification, TeleportPlayer,
};
use crate::portal::pair_state::ActivePortalPair;
use crate::portal::registry::{BlockEntityRegistry, sync_block_registry};
use crate::portal::settings::PortalSettings;
use crate::portal::systems::{
    apply_teleports, deactivate_destroyed_portals, despawn_destroyed_blocks,
    handle_portal_activation, init_portal_pair, teleport_on_portal, track_player_movement,
};

/// Ordering of the portal systems inside `Update`.
#[derive(SystemSet, Debug, Hash, PartialEq, Eq, Clone)]
pub enum PortalSet {
    /// Register new blocks and report player movement.
    Track,
    /// Handle activation interactions.
    Activate,
    /// Handle destroyed blocks.
    Deactivate,
    /// Check endpoints and move players.
    Teleport,
}

/// Installs portal block state, messages and systems.
#[derive(Default)]
pub struct PortalBlocksPlugin {
    /// Settings inserted as a resource when the plugin is built.
    pub settings: PortalSettings,
}

impl PortalBlocksPlugin {
    /// Build the plugin with explicit settings.
    pub fn new(settings: PortalSettings) -> Self {
        Self { settings }
    }
}

impl Plugin for PortalBlocksPlugin {
    fn build(&self, app: &mut App) {
        app.register_type::<ActivePortalPair>()
            .register_type::<ActivePortal>()
            .register_type::<BluePortal>()
            .register_type::<OrangePortal>()
            .register_type::<BlockPosition>()
            .insert_resource(self.settings.clone())
            .init_resource::<BlockEntityRegistry>()
            .add_message::<BlockActivated>()
            .add_message::<BlockDestroyed>()
            .add_message::<PlayerMoved>()
            .add_message::<TeleportPlayer>()
            .add_message::<PortalNotification>()
            .configure_sets(
                Update,
                (
                    PortalSet::Track,
                    PortalSet::Activate,
                    PortalSet::Deactivate,
                    PortalSet::Teleport,
                )
                    .chain(),
            )
            .add_systems(Startup, init_portal_pair)
            .add_systems(
                Update,
                (
                    (sync_block_registry, track_player_movement).in_set(PortalSet::Track),
                    handle_portal_activation.in_set(PortalSet::Activate),
                    (deactivate_destroyed_portals, despawn_destroyed_blocks)
                        .chain()
                        .in_set(PortalSet::Deactivate),
                    (teleport_on_portal, apply_teleports)
                        .chain()
                        .in_set(PortalSet::Teleport),
                ),
            );
    }
}
