//! Runtime game configuration loaded from `assets/settings.toml`.
//!
//! [`GameConfig`] is a Bevy [`Resource`] that mirrors every constant in
//! [`crate::constants`]. At startup, [`load_game_config`] reads
//! `assets/settings.toml` and overwrites the defaults with any values present
//! in the file. Missing keys fall back to the compile-time defaults, so a
//! minimal TOML can override just the values you care about.
//!
//! Loaded values pass through [`crate::error::validate_config`] before they
//! replace the defaults; a file that parses but carries an unusable value
//! (zero-width screen, inverted spawn interval, …) is rejected wholesale.
//!
//! ## Usage in systems
//!
//! Add `config: Res<GameConfig>` to any system parameter list and read values
//! with `config.player_speed`, `config.spawn_interval_min`, etc.

use crate::constants::*;
use crate::error::validate_config;
use bevy::prelude::*;
use serde::Deserialize;

/// Runtime-tunable gameplay configuration.
///
/// All fields default to the corresponding compile-time constant from
/// `src/constants.rs`. Override any subset by setting the value in
/// `assets/settings.toml`.
#[derive(Resource, Debug, Clone, Deserialize)]
#[serde(default)]
pub struct GameConfig {
    // ── Screen ───────────────────────────────────────────────────────────────
    pub screen_width: f32,
    pub screen_height: f32,

    // ── Player ───────────────────────────────────────────────────────────────
    pub player_speed: f32,
    pub rotation_speed: f32,
    pub max_lives: i32,

    // ── Bullets ──────────────────────────────────────────────────────────────
    pub bullet_speed: f32,
    pub bullet_radius: f32,
    pub bullet_max_age: f32,

    // ── Asteroids ────────────────────────────────────────────────────────────
    pub asteroid_max_speed: f32,
    pub initial_asteroid_count: usize,

    // ── Spawner ──────────────────────────────────────────────────────────────
    pub spawn_interval_min: f32,
    pub spawn_interval_max: f32,

    // ── HUD ──────────────────────────────────────────────────────────────────
    pub hud_font_size: f32,
    pub hud_margin: f32,
}

impl Default for GameConfig {
    fn default() -> Self {
        Self {
            // Screen
            screen_width: SCREEN_WIDTH,
            screen_height: SCREEN_HEIGHT,
            // Player
            player_speed: PLAYER_SPEED,
            rotation_speed: ROTATION_SPEED,
            max_lives: MAX_LIVES,
            // Bullets
            bullet_speed: BULLET_SPEED,
            bullet_radius: BULLET_RADIUS,
            bullet_max_age: BULLET_MAX_AGE,
            // Asteroids
            asteroid_max_speed: ASTEROID_MAX_SPEED,
            initial_asteroid_count: INITIAL_ASTEROID_COUNT,
            // Spawner
            spawn_interval_min: SPAWN_INTERVAL_MIN,
            spawn_interval_max: SPAWN_INTERVAL_MAX,
            // HUD
            hud_font_size: HUD_FONT_SIZE,
            hud_margin: HUD_MARGIN,
        }
    }
}

impl GameConfig {
    /// Centre of the playfield — the ship's spawn point and its reset
    /// position after losing a life.
    #[inline]
    pub fn screen_center(&self) -> Vec2 {
        Vec2::new(self.screen_width / 2.0, self.screen_height / 2.0)
    }
}

/// Startup system: attempt to load `assets/settings.toml` and overwrite the
/// [`GameConfig`] resource with any values present in the file.
///
/// Missing keys retain their compiled defaults. TOML parse errors and
/// validation failures are logged but do not abort the game — the defaults
/// stay in place. A missing file is silently ignored.
pub fn load_game_config(mut config: ResMut<GameConfig>) {
    let path = "assets/settings.toml";
    match std::fs::read_to_string(path) {
        Ok(contents) => match toml::from_str::<GameConfig>(&contents) {
            Ok(loaded) => match validate_config(&loaded) {
                Ok(()) => {
                    *config = loaded;
                    println!("✓ Loaded game config from {path}");
                }
                Err(e) => {
                    warn!("rejected {path}: {e}; using defaults");
                }
            },
            Err(e) => {
                eprintln!("⚠ Failed to parse {path}: {e}; using defaults");
            }
        },
        Err(_) => {
            // File not present — defaults are already in place; not an error.
            println!("ℹ No {path} found; using compiled defaults");
        }
    }
}
