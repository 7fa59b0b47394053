//! Game-specific error types.
//!
//! Gameplay itself has no recoverable-error taxonomy — the only terminal
//! condition is running out of lives, and that is a normal state transition,
//! not an error. What *can* go wrong is configuration: a hand-edited
//! `assets/settings.toml` may carry values the simulation cannot run with.
//! [`validate_config`] rejects those before they reach any system, and the
//! loader falls back to compiled defaults.

use std::fmt;

use crate::config::GameConfig;

/// Top-level error enum for the game.
#[derive(Debug)]
pub enum GameError {
    /// A settings value is outside its safe operating range.
    UnsafeSetting {
        /// Name of the setting (for logging).
        name: &'static str,
        /// The value that was rejected.
        value: f32,
        /// Human-readable description of the safe range.
        safe_range: &'static str,
    },

    /// A randomized interval has no width (`min >= max`), which would make
    /// the uniform draw panic at runtime.
    EmptyInterval {
        /// Name of the interval (for logging).
        name: &'static str,
        min: f32,
        max: f32,
    },
}

impl fmt::Display for GameError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            GameError::UnsafeSetting {
                name,
                value,
                safe_range,
            } => write!(
                f,
                "setting '{}' = {} is outside safe range {}",
                name, value, safe_range
            ),
            GameError::EmptyInterval { name, min, max } => write!(
                f,
                "interval '{}' is empty: min {} must be strictly below max {}",
                name, min, max
            ),
        }
    }
}

impl std::error::Error for GameError {}

/// Convenience alias: a `Result` using `GameError` as the error type.
pub type GameResult<T> = Result<T, GameError>;

// ── Validation helpers ────────────────────────────────────────────────────────

/// Returns an error if any loaded setting would break the simulation.
///
/// Checked invariants:
/// - screen dimensions strictly positive (wrap snaps to `width`/`height`);
/// - bullet, player, rotation, and asteroid speeds strictly positive
///   (velocity draws use `±asteroid_max_speed`, an empty range panics);
/// - spawn interval window non-empty with a positive lower bound.
pub fn validate_config(config: &GameConfig) -> GameResult<()> {
    positive("screen_width", config.screen_width)?;
    positive("screen_height", config.screen_height)?;
    positive("player_speed", config.player_speed)?;
    positive("rotation_speed", config.rotation_speed)?;
    positive("bullet_speed", config.bullet_speed)?;
    positive("asteroid_max_speed", config.asteroid_max_speed)?;
    positive("spawn_interval_min", config.spawn_interval_min)?;
    if config.spawn_interval_min >= config.spawn_interval_max {
        return Err(GameError::EmptyInterval {
            name: "spawn_interval",
            min: config.spawn_interval_min,
            max: config.spawn_interval_max,
        });
    }
    if config.max_lives < 1 {
        return Err(GameError::UnsafeSetting {
            name: "max_lives",
            value: config.max_lives as f32,
            safe_range: "[1, ∞)",
        });
    }
    Ok(())
}

fn positive(name: &'static str, value: f32) -> GameResult<()> {
    if value <= 0.0 {
        Err(GameError::UnsafeSetting {
            name,
            value,
            safe_range: "(0.0, ∞)",
        })
    } else {
        Ok(())
    }
}
