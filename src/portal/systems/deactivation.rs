use bevy::prelude::*;

use crate::portal::components::{ActivePortal, BluePortal, OrangePortal, PortalColor};
use crate::portal::messages::BlockDestroyed;
use crate::portal::pair_state::{ActivePortalPair, PortalPair};
use crate::portal::registry::BlockEntityRegistry;

/// Clear the pair slot of every active portal block being destroyed.
pub fn deactivate_destroyed_portals(
    mut destroyed: MessageReader<BlockDestroyed>,
    handle: Res<PortalPair>,
    mut pairs: Query<&mut ActivePortalPair>,
    active: Query<(Has<BluePortal>, Has<OrangePortal>), With<ActivePortal>>,
) {
    let Ok(mut pair) = pairs.get_mut(handle.entity()) else {
        return;
    };
    for event in destroyed.read() {
        let Ok((blue, orange)) = active.get(event.block) else {
            continue;
        };
        // Anything not marked blue clears the orange slot.
        let color = if blue {
            PortalColor::Blue
        } else {
            if !orange {
                warn!(
                    "Active portal {} has no color marker; clearing the orange slot",
                    event.block
                );
            }
            PortalColor::Orange
        };
        pair.clear(color);
        info!("{} Portal deactivated", color.display_name());
    }
}

/// Despawn destroyed blocks once portal state has seen them.
pub fn despawn_destroyed_blocks(
    mut commands: Commands,
    mut destroyed: MessageReader<BlockDestroyed>,
    mut registry: ResMut<BlockEntityRegistry>,
) {
    for event in destroyed.read() {
        registry.remove_entity(event.block);
        if let Ok(mut block) = commands.get_entity(event.block) {
            block.try_despawn();
        }
    }
}
