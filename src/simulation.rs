//! Game plugin and shared simulation primitives.
//!
//! ## Tick order (contractual)
//!
//! The per-tick systems run as one chained set — the order below is part of
//! the game's semantics, not an implementation detail:
//!
//! 1. [`keyboard_to_intent_system`] — held keys → [`PlayerIntent`] flags.
//! 2. [`keyboard_fire_system`] — fire key press → queued [`FireCommand`].
//! 3. [`player_motion_system`] — rotate, thrust, wrap.
//! 4. [`bullet_motion_system`] — straight-line bullet flight (no wrap).
//! 5. [`bullet_expiry_system`] — optional age-based despawn (off by default).
//! 6. [`asteroid_motion_system`] — drift + wrap.
//! 7. [`bullet_asteroid_hit_system`] — hits, scoring, splitting.
//! 8. [`player_asteroid_hit_system`] — life loss, centre reset, game over.
//! 9. [`asteroid_spawn_system`] — spawn-timer advance + edge spawn.
//! 10. [`bullet_fire_system`] — one bullet per queued fire command.
//!
//! Splitting must see post-motion positions, and the player-collision pass
//! must see the asteroid set *after* splitting (deferred spawns/despawns
//! flush between chained systems). Firing runs last so a new bullet sits at
//! the ship for one frame and first moves on the following tick, the same
//! as firing between ticks in the classic loop.
//!
//! The plugin registers no startup systems and no rendering: `main.rs` adds
//! cameras, HUD, and the initial world, which keeps this plugin runnable on
//! a bare headless [`App`] in tests.

use crate::asteroid::{asteroid_motion_system, asteroid_spawn_system, SpawnTimer};
use crate::config::GameConfig;
use crate::player::{
    bullet_asteroid_hit_system, bullet_expiry_system, bullet_fire_system, bullet_motion_system,
    keyboard_fire_system, keyboard_to_intent_system, player_asteroid_hit_system,
    player_motion_system, FireCommand, PlayerIntent, PlayerLives, PlayerScore,
};
use bevy::input::ButtonInput;
use bevy::prelude::*;
use rand::rngs::SmallRng;
use rand::SeedableRng;

// ── Shared components & resources ────────────────────────────────────────────

/// Fixed per-tick displacement vector for bullets and asteroids.
///
/// Assigned once at spawn time and never mutated: bullets inherit the ship's
/// heading, asteroids draw a random drift. Units are world units per tick
/// (motion is frame-based, like the rest of the kinematics).
#[derive(Component, Debug, Clone, Copy, PartialEq)]
pub struct Velocity(pub Vec2);

/// The single RNG stream behind every gameplay draw: asteroid velocities,
/// edge spawn points, and the spawn-interval threshold.
///
/// Entropy-seeded in normal play; tests construct it with [`GameRng::seeded`]
/// to make the whole spawn cadence reproducible.
#[derive(Resource)]
pub struct GameRng(pub SmallRng);

impl Default for GameRng {
    fn default() -> Self {
        Self(SmallRng::from_entropy())
    }
}

impl GameRng {
    /// Deterministic stream for tests.
    pub fn seeded(seed: u64) -> Self {
        Self(SmallRng::seed_from_u64(seed))
    }
}

// ── Screen wrap ───────────────────────────────────────────────────────────────

/// Snap a position back onto the playfield after a motion step.
///
/// This is a hard snap, not a modulo: a coordinate below 0 lands exactly on
/// the opposite boundary and one above the boundary lands exactly on 0,
/// regardless of how far past the edge the entity travelled. An entity fast
/// enough to overshoot by several screen-widths still wraps exactly once.
pub fn wrap_position(mut position: Vec2, width: f32, height: f32) -> Vec2 {
    if position.x < 0.0 {
        position.x = width;
    } else if position.x > width {
        position.x = 0.0;
    }
    if position.y < 0.0 {
        position.y = height;
    } else if position.y > height {
        position.y = 0.0;
    }
    position
}

// ── Plugin ────────────────────────────────────────────────────────────────────

/// Core game-state plugin: resources plus the ordered per-tick system chain.
pub struct GamePlugin;

impl Plugin for GamePlugin {
    fn build(&self, app: &mut App) {
        app.init_resource::<GameConfig>()
            .init_resource::<PlayerIntent>()
            .init_resource::<PlayerScore>()
            .init_resource::<PlayerLives>()
            .init_resource::<SpawnTimer>()
            .init_resource::<GameRng>()
            // Present under DefaultPlugins; inserted here so headless test
            // apps get working keyboard state and a manually advanced clock.
            .init_resource::<ButtonInput<KeyCode>>()
            .init_resource::<Time>()
            .add_message::<FireCommand>()
            .add_systems(
                Update,
                (
                    keyboard_to_intent_system,
                    keyboard_fire_system,
                    player_motion_system,
                    bullet_motion_system,
                    bullet_expiry_system,
                    asteroid_motion_system,
                    bullet_asteroid_hit_system,
                    player_asteroid_hit_system,
                    asteroid_spawn_system,
                    bullet_fire_system,
                )
                    .chain(),
            );
    }
}
