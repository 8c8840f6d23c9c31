use bevy::prelude::*;
use std::collections::HashMap;

use crate::portal::components::{
    ActivePortal, BlockPosition, BluePortal, OrangePortal, PortalColor,
};
use crate::portal::messages::{BlockActivated, PortalNotification};
use crate::portal::pair_state::{ActivePortalPair, PortalPair};
use crate::portal::registry::BlockEntityRegistry;
use crate::portal::settings::PortalSettings;

/// Notification suffix once the other color is active.
const JUMP_HINT: &str = "Jump on top to teleport!";

/// Suffix telling the player what completes the pathway given the other slot's state.
fn pathway_hint(other: PortalColor, other_active: bool) -> String {
    if other_active {
        JUMP_HINT.to_string()
    } else {
        other.activation_hint()
    }
}

/// Color of a block from its marker components. Blue wins if both are present.
fn block_color(blue: bool, orange: bool) -> Option<PortalColor> {
    match (blue, orange) {
        (true, _) => Some(PortalColor::Blue),
        (false, true) => Some(PortalColor::Orange),
        (false, false) => None,
    }
}

/// Activate portal blocks the player interacted with, superseding the previous endpoint of
/// the same color.
#[allow(clippy::too_many_arguments)]
pub fn handle_portal_activation(
    mut commands: Commands,
    mut activations: MessageReader<BlockActivated>,
    mut notifications: MessageWriter<PortalNotification>,
    settings: Res<PortalSettings>,
    registry: Res<BlockEntityRegistry>,
    handle: Res<PortalPair>,
    mut pairs: Query<&mut ActivePortalPair>,
    blocks: Query<(&BlockPosition, Has<BluePortal>, Has<OrangePortal>, Has<ActivePortal>)>,
) {
    let Ok(mut pair) = pairs.get_mut(handle.entity()) else {
        return;
    };
    // Tag changes issued this run; commands are not visible to `blocks` until applied.
    let mut tagged: HashMap<Entity, bool> = HashMap::new();

    for activation in activations.read() {
        let Ok((position, blue, orange, has_active)) = blocks.get(activation.block) else {
            continue;
        };
        let Some(color) = block_color(blue, orange) else {
            continue;
        };
        let other = color.other();
        let other_active = pair.slot(other).is_some();
        let mut notify = |text: String| {
            debug!("Notify {}: {text}", activation.player);
            if settings.notify_player {
                notifications.write(PortalNotification {
                    player: activation.player,
                    text,
                });
            }
        };

        let is_active = tagged.get(&activation.block).copied().unwrap_or(has_active);
        if is_active {
            notify(format!(
                "This portal is already activated. {}",
                pathway_hint(other, other_active)
            ));
            continue;
        }

        if let Some(previous) = pair.slot(color) {
            match registry.entity_at(previous) {
                Some(entity) => {
                    if let Ok(mut previous_block) = commands.get_entity(entity) {
                        previous_block.try_remove::<ActivePortal>();
                    }
                    tagged.insert(entity, false);
                }
                None => debug!("No block at stale {color:?} portal position {previous}"),
            }
        }

        commands.entity(activation.block).try_insert(ActivePortal);
        tagged.insert(activation.block, true);
        notify(format!(
            "Activated {} Portal. {}",
            color.display_name(),
            pathway_hint(other, other_active)
        ));

        pair.set(color, position.0);
        info!("{} Portal Location: {}", color.display_name(), position.0);
    }
}

#[cfg(test)]
mod tests {
    use bevy::prelude::*;

    use crate::portal::test_support::{
        activate, is_active, notifications, pair, spawn_block, spawn_player, test_app,
    };
    use crate::portal::{ActivePortalPair, PortalColor};

    /// Verify activating a blue block records it and asks for an orange one.
    #[test]
    fn first_blue_activation_records_position() {
        let mut app = test_app();
        let player = spawn_player(&mut app, Vec3::new(50.0, 50.0, 50.0));
        let blue = spawn_block(&mut app, IVec3::new(0, 5, 0), PortalColor::Blue);
        app.update();

        activate(&mut app, blue, player);
        app.update();

        assert!(is_active(&app, blue));
        assert_eq!(pair(&app).blue, Some(IVec3::new(0, 5, 0)));
        assert_eq!(pair(&app).orange, None);
        assert_eq!(
            notifications(&app),
            vec!["Activated Blue Portal. Activate an Orange Portal to complete pathway."]
        );
    }

    /// Verify a second blue activation untags the first blue block.
    #[test]
    fn new_blue_supersedes_previous_blue() {
        let mut app = test_app();
        let player = spawn_player(&mut app, Vec3::new(50.0, 50.0, 50.0));
        let first = spawn_block(&mut app, IVec3::new(0, 5, 0), PortalColor::Blue);
        let second = spawn_block(&mut app, IVec3::new(4, 5, 0), PortalColor::Blue);
        app.update();

        activate(&mut app, first, player);
        app.update();
        activate(&mut app, second, player);
        app.update();

        assert!(!is_active(&app, first));
        assert!(is_active(&app, second));
        assert_eq!(pair(&app).blue, Some(IVec3::new(4, 5, 0)));
    }

    /// Verify re-activating an active block only notifies.
    #[test]
    fn reactivation_is_a_notifying_no_op() {
        let mut app = test_app();
        let player = spawn_player(&mut app, Vec3::new(50.0, 50.0, 50.0));
        let blue = spawn_block(&mut app, IVec3::new(0, 5, 0), PortalColor::Blue);
        let orange = spawn_block(&mut app, IVec3::new(10, 5, 10), PortalColor::Orange);
        app.update();

        activate(&mut app, blue, player);
        activate(&mut app, orange, player);
        app.update();
        let before = pair(&app);

        activate(&mut app, orange, player);
        app.update();

        assert_eq!(pair(&app), before);
        assert!(is_active(&app, orange));
        assert_eq!(
            notifications(&app).last().map(String::as_str),
            Some("This portal is already activated. Jump on top to teleport!")
        );
    }

    /// Verify the already-active hint reflects an empty other slot.
    #[test]
    fn reactivation_without_partner_asks_for_partner() {
        let mut app = test_app();
        let player = spawn_player(&mut app, Vec3::new(50.0, 50.0, 50.0));
        let orange = spawn_block(&mut app, IVec3::new(10, 5, 10), PortalColor::Orange);
        app.update();

        activate(&mut app, orange, player);
        app.update();
        activate(&mut app, orange, player);
        app.update();

        assert_eq!(
            notifications(&app).last().map(String::as_str),
            Some("This portal is already activated. Activate a Blue Portal to complete pathway.")
        );
    }

    /// Verify only one block per color stays tagged across a burst of activations.
    #[test]
    fn at_most_one_active_block_per_color() {
        let mut app = test_app();
        let player = spawn_player(&mut app, Vec3::new(50.0, 50.0, 50.0));
        let blues: Vec<Entity> = (0..3)
            .map(|i| spawn_block(&mut app, IVec3::new(i * 3, 5, 0), PortalColor::Blue))
            .collect();
        let oranges: Vec<Entity> = (0..3)
            .map(|i| spawn_block(&mut app, IVec3::new(i * 3, 5, 9), PortalColor::Orange))
            .collect();
        app.update();

        // Same-tick bursts and revisits of earlier blocks.
        for &block in [blues[0], oranges[1], blues[2], blues[0]].iter() {
            activate(&mut app, block, player);
        }
        app.update();
        for &block in [oranges[2], blues[1], oranges[0]].iter() {
            activate(&mut app, block, player);
            app.update();
        }

        let active_blues: Vec<Entity> =
            blues.iter().copied().filter(|&b| is_active(&app, b)).collect();
        let active_oranges: Vec<Entity> =
            oranges.iter().copied().filter(|&b| is_active(&app, b)).collect();
        assert_eq!(active_blues, vec![blues[1]]);
        assert_eq!(active_oranges, vec![oranges[0]]);
        assert_eq!(
            pair(&app),
            ActivePortalPair {
                blue: Some(IVec3::new(3, 5, 0)),
                orange: Some(IVec3::new(0, 5, 9)),
            }
        );
    }

    /// Verify a stale stored position that resolves to no block is skipped.
    #[test]
    fn stale_previous_position_is_ignored() {
        let mut app = test_app();
        let player = spawn_player(&mut app, Vec3::new(50.0, 50.0, 50.0));
        app.world_mut().spawn(ActivePortalPair {
            blue: Some(IVec3::new(-7, 0, -7)),
            orange: None,
        });
        let blue = spawn_block(&mut app, IVec3::new(0, 5, 0), PortalColor::Blue);
        app.update();

        activate(&mut app, blue, player);
        app.update();

        assert!(is_active(&app, blue));
        assert_eq!(pair(&app).blue, Some(IVec3::new(0, 5, 0)));
    }

    /// Verify non-portal blocks are ignored.
    #[test]
    fn plain_blocks_are_ignored() {
        let mut app = test_app();
        let player = spawn_player(&mut app, Vec3::new(50.0, 50.0, 50.0));
        let plain = app
            .world_mut()
            .spawn(crate::portal::BlockPosition(IVec3::new(1, 1, 1)))
            .id();
        app.update();

        activate(&mut app, plain, player);
        app.update();

        assert!(!is_active(&app, plain));
        assert_eq!(pair(&app), ActivePortalPair::default());
        assert!(notifications(&app).is_empty());
    }
}
