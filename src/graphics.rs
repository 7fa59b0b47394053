use crate::config::GameConfig;
use bevy::prelude::*;

/// Setup camera for 2D rendering.
///
/// Game coordinates live in `[0, width] × [0, height]` with the origin at
/// the bottom-left, so the camera sits at the playfield centre to frame the
/// whole field.
pub fn setup_camera(mut commands: Commands, config: Res<GameConfig>) {
    commands.spawn((
        Camera2d,
        Transform::from_translation(config.screen_center().extend(0.0)),
    ));
    eprintln!("[SETUP] Camera spawned");
}
