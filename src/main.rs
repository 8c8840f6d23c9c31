use anyhow::Context;
use bevy::log::LogPlugin;
use bevy::prelude::*;

use portal_blocks::{
    BlockActivated, PortalBlocksPlugin, PortalColor, PortalNotification, PortalSettings,
    PortalTraveler, TeleportPlayer, spawn_portal_block,
};

// Blue endpoint of the demo pathway.
const BLUE_POSITION: IVec3 = IVec3::new(0, 5, 0);
// Orange endpoint of the demo pathway.
const ORANGE_POSITION: IVec3 = IVec3::new(10, 5, 10);

/// Entities placed by the demo setup.
#[derive(Resource)]
struct DemoWorld {
    /// Player body that walks onto the blue portal.
    player: Entity,
    /// Blue portal block.
    blue: Entity,
    /// Orange portal block.
    orange: Entity,
}

// Headless walk-through: place both portals, activate them, step onto blue.
fn main() -> anyhow::Result<()> {
    let settings = match std::env::args().nth(1) {
        Some(path) => PortalSettings::load(&path)
            .with_context(|| format!("Failed to load portal settings from {path}"))?,
        None => PortalSettings::default(),
    };

    let mut app = App::new();
    app.add_plugins((MinimalPlugins, LogPlugin::default()))
        .add_plugins(PortalBlocksPlugin::new(settings))
        .add_systems(Startup, setup_demo)
        .add_systems(PostUpdate, (log_notifications, log_teleports));

    // Startup spawns the world and registers the blocks.
    app.update();
    let (player, blue, orange) = {
        let demo = app.world().resource::<DemoWorld>();
        (demo.player, demo.blue, demo.orange)
    };

    app.world_mut().write_message(BlockActivated { block: blue, player });
    app.update();
    app.world_mut().write_message(BlockActivated { block: orange, player });
    app.update();

    if let Some(mut transform) = app.world_mut().get_mut::<Transform>(player) {
        transform.translation = (BLUE_POSITION + IVec3::Y).as_vec3();
    }
    app.update();

    let position = app
        .world()
        .get::<Transform>(player)
        .map(|transform| transform.translation)
        .context("Demo player disappeared")?;
    info!("Player ended at {position}");
    Ok(())
}

/// Place the two portal blocks and a player away from both.
fn setup_demo(mut commands: Commands) {
    let blue = spawn_portal_block(&mut commands, BLUE_POSITION, PortalColor::Blue);
    let orange = spawn_portal_block(&mut commands, ORANGE_POSITION, PortalColor::Orange);
    let player = commands
        .spawn((
            Name::new("Player"),
            PortalTraveler,
            Transform::from_xyz(-5.0, 6.0, -5.0),
        ))
        .id();
    commands.insert_resource(DemoWorld {
        player,
        blue,
        orange,
    });
}

/// Print notifications the way a chat overlay would show them.
fn log_notifications(mut notifications: MessageReader<PortalNotification>) {
    for note in notifications.read() {
        info!("[to {}] {}", note.player, note.text);
    }
}

/// Report teleports that were applied.
fn log_teleports(mut teleports: MessageReader<TeleportPlayer>) {
    for teleport in teleports.read() {
        info!("{} teleported to {}", teleport.player, teleport.destination);
    }
}
