use bevy::prelude::*;

use crate::portal::components::PortalTraveler;
use crate::portal::messages::{PlayerMoved, TeleportPlayer};
use crate::portal::pair_state::{ActivePortalPair, PortalPair};
use crate::portal::settings::PortalSettings;

/// Round to the nearest integer with halves going up (`-0.5` rounds to `0`).
///
/// Summed in `f64` so the `+ 0.5` is exact for every `f32` input.
fn round_half_up(value: f64) -> i32 {
    (value + 0.5).floor() as i32
}

/// Block coordinate directly beneath a body at `position`.
pub fn block_beneath(position: Vec3) -> IVec3 {
    IVec3::new(
        round_half_up(f64::from(position.x)),
        round_half_up(f64::from(position.y) - 1.0),
        round_half_up(f64::from(position.z)),
    )
}

/// Report every traveler whose transform changed this tick.
pub fn track_player_movement(
    moved: Query<Entity, (With<PortalTraveler>, Changed<Transform>)>,
    mut writer: MessageWriter<PlayerMoved>,
) {
    for player in &moved {
        writer.write(PlayerMoved { player });
    }
}

/// Send players standing on a linked endpoint to the other endpoint.
pub fn teleport_on_portal(
    mut moves: MessageReader<PlayerMoved>,
    mut teleports: MessageWriter<TeleportPlayer>,
    settings: Res<PortalSettings>,
    handle: Res<PortalPair>,
    pairs: Query<&ActivePortalPair>,
    bodies: Query<&Transform>,
) {
    let Ok(pair) = pairs.get(handle.entity()) else {
        return;
    };
    if !pair.is_linked() {
        moves.clear();
        return;
    }
    for moved in moves.read() {
        let Ok(transform) = bodies.get(moved.player) else {
            continue;
        };
        let beneath = block_beneath(transform.translation);
        let Some(target) = pair.destination_from(beneath, settings.teleport_offset) else {
            continue;
        };
        debug!("Teleporting {} from {beneath} to {target}", moved.player);
        teleports.write(TeleportPlayer {
            player: moved.player,
            destination: target.as_vec3(),
        });
    }
}

/// Move players to their teleport destinations.
pub fn apply_teleports(
    mut teleports: MessageReader<TeleportPlayer>,
    mut bodies: Query<&mut Transform>,
) {
    for teleport in teleports.read() {
        if let Ok(mut transform) = bodies.get_mut(teleport.player) {
            transform.translation = teleport.destination;
        }
    }
}
