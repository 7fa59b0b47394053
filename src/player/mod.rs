//! Player module: ship entity, input mapping, and combat.
//!
//! ## Sub-module layout
//!
//! | Module | Responsibility |
//! |--------|----------------|
//! | [`state`] | ECS components (`Player`, `Bullet`), the `FireCommand` message, and resources (`PlayerIntent`, `PlayerScore`, `PlayerLives`) |
//! | [`control`] | Input mapping (arrow keys → held flags, Space → fire command) and ship motion |
//! | [`combat`] | Bullet firing/flight/expiry, bullet–asteroid hits with splitting, ship–asteroid life loss |
//!
//! All public items are re-exported at this level so the rest of the crate
//! can use flat `crate::player::*` imports without knowing the sub-module
//! layout.

pub mod combat;
pub mod control;
pub mod state;

// ── Flat re-exports ───────────────────────────────────────────────────────────

pub use combat::{
    bullet_asteroid_hit_system, bullet_expiry_system, bullet_fire_system, bullet_motion_system,
    player_asteroid_hit_system,
};
pub use control::{keyboard_fire_system, keyboard_to_intent_system, player_motion_system};
pub use state::{Bullet, FireCommand, Player, PlayerIntent, PlayerLives, PlayerScore};

// ── Ship spawn ────────────────────────────────────────────────────────────────

use crate::config::GameConfig;
use bevy::prelude::*;

/// Spawn the player's ship at the centre of the playfield, facing +X,
/// stationary, with a full set of configured lives.
pub fn spawn_player(
    mut commands: Commands,
    config: Res<GameConfig>,
    mut lives: ResMut<PlayerLives>,
) {
    lives.remaining = config.max_lives;
    commands.spawn((
        Player::default(),
        Transform::from_translation(config.screen_center().extend(1.0)),
    ));

    println!("✓ Player ship spawned at screen centre");
}
