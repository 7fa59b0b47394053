use bevy::prelude::*;
use bevy::window::WindowResolution;

use driftfield::config::load_game_config;
use driftfield::simulation::GamePlugin;
use driftfield::{asteroid, constants, graphics, player, rendering};

fn main() {
    App::new()
        .add_plugins(DefaultPlugins.set(WindowPlugin {
            primary_window: Some(Window {
                title: constants::SCREEN_TITLE.into(),
                resolution: WindowResolution::new(
                    constants::SCREEN_WIDTH as u32,
                    constants::SCREEN_HEIGHT as u32,
                ),
                resizable: false,
                ..Default::default()
            }),
            ..Default::default()
        }))
        .insert_resource(ClearColor(Color::BLACK))
        .add_plugins(GamePlugin)
        .add_systems(
            Startup,
            (
                // Load config first so every other startup system sees the
                // final values.
                load_game_config,
                graphics::setup_camera.after(load_game_config),
                rendering::setup_hud.after(load_game_config),
                player::spawn_player.after(load_game_config),
                asteroid::spawn_initial_field.after(load_game_config),
                asteroid::init_spawn_timer.after(load_game_config),
            ),
        )
        .add_systems(
            Update,
            (
                rendering::player_gizmo_system,
                rendering::asteroid_gizmo_system,
                rendering::hud_score_display_system,
                rendering::hud_lives_display_system,
            ),
        )
        .run();
}
