use bevy::prelude::*;
use std::collections::HashMap;

use crate::portal::components::BlockPosition;

/// Lookup from world-block coordinate to the block entity placed there.
#[derive(Resource, Default, Debug)]
pub struct BlockEntityRegistry {
    /// Block entities keyed by their coordinate.
    blocks: HashMap<IVec3, Entity>,
    /// Last registered coordinate of each block entity.
    positions: HashMap<Entity, IVec3>,
}

impl BlockEntityRegistry {
    /// Return the block entity at `position`, if one is registered.
    pub fn entity_at(&self, position: IVec3) -> Option<Entity> {
        self.blocks.get(&position).copied()
    }

    /// Register `entity` as the block at `position`, replacing any previous one there and
    /// dropping the entity's old coordinate.
    pub fn insert(&mut self, position: IVec3, entity: Entity) {
        if let Some(old) = self.positions.insert(entity, position)
            && old != position
            && self.blocks.get(&old) == Some(&entity)
        {
            self.blocks.remove(&old);
        }
        if let Some(replaced) = self.blocks.insert(position, entity)
            && replaced != entity
        {
            self.positions.remove(&replaced);
        }
    }

    /// Unregister `entity`. A newer block at the same spot is kept.
    pub fn remove_entity(&mut self, entity: Entity) {
        let Some(position) = self.positions.remove(&entity) else {
            return;
        };
        if self.blocks.get(&position) == Some(&entity) {
            self.blocks.remove(&position);
        }
    }
}

/// Keep the registry in step with placed, moved and removed blocks.
pub fn sync_block_registry(
    mut registry: ResMut<BlockEntityRegistry>,
    mut removed: RemovedComponents<BlockPosition>,
    changed: Query<(Entity, &BlockPosition), Changed<BlockPosition>>,
) {
    for entity in removed.read() {
        registry.remove_entity(entity);
    }
    for (entity, position) in &changed {
        registry.insert(position.0, entity);
    }
}
