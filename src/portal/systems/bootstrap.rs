use bevy::prelude::*;

use crate::portal::pair_state::{ActivePortalPair, PortalPair};

/// Adopt the world's portal pair entity, or create an empty one if none was loaded.
pub fn init_portal_pair(mut commands: Commands, pairs: Query<Entity, With<ActivePortalPair>>) {
    let mut existing = pairs.iter();
    let entity = match existing.next() {
        Some(entity) => {
            let extra = existing.count();
            if extra > 0 {
                warn!("Found {extra} extra portal pair entities; using {entity}");
            }
            debug!("Adopted portal pair state on {entity}");
            entity
        }
        None => {
            let entity = commands
                .spawn((Name::new("Active Portal Pair"), ActivePortalPair::default()))
                .id();
            info!("Created portal pair state on {entity}");
            entity
        }
    };
    commands.insert_resource(PortalPair(entity));
}
