//! Player components, resources, and the fire message.
//!
//! All ECS state that describes the player side of the game lives here.
//! Systems that mutate this state are in the sibling modules:
//! - [`super::control`] — input mapping + ship motion
//! - [`super::combat`] — bullet firing, collisions, lives and score

use crate::constants::MAX_LIVES;
use bevy::prelude::*;

// ── Components ────────────────────────────────────────────────────────────────

/// The player ship: heading and scalar forward speed.
///
/// The heading is stored in **degrees** and converted to radians only at the
/// trig call sites, so a held rotation key changes it by a whole number of
/// degrees per tick. Speed is either the configured thrust speed or zero —
/// there is no inertia.
#[derive(Component, Debug, Default, Clone, Copy, PartialEq)]
pub struct Player {
    /// Heading angle in degrees; 0° points along +X, counter-clockwise.
    pub angle: f32,
    /// Forward speed in units per tick.
    pub speed: f32,
}

/// A fired bullet. The flight vector lives in the shared
/// [`Velocity`](crate::simulation::Velocity) component and never changes
/// after fire time.
#[derive(Component, Debug, Default, Clone, Copy)]
pub struct Bullet {
    /// Seconds since this bullet was fired; only consulted when the
    /// optional `bullet_max_age` expiry is enabled.
    pub age: f32,
}

// ── Messages ──────────────────────────────────────────────────────────────────

/// Discrete fire request: one message, one bullet.
///
/// Written by [`super::control::keyboard_fire_system`] on each fire-key
/// *press* (holding the key does not auto-repeat), and drained by
/// [`super::combat::bullet_fire_system`] at the end of the tick. Tests write
/// this message directly to fire without a keyboard.
#[derive(Message, Debug, Clone, Copy)]
pub struct FireCommand;

// ── Resources ─────────────────────────────────────────────────────────────────

/// Held-key state for the current tick: three independent flags.
///
/// Overwritten every tick by [`super::control::keyboard_to_intent_system`]
/// from the host's key press/release bookkeeping. Holding left and right
/// together is representable; the motion system applies both, which cancels.
/// Tests populate this resource directly and skip the keyboard system.
#[derive(Resource, Debug, Default, Clone, Copy, PartialEq, Eq)]
pub struct PlayerIntent {
    pub rotate_left: bool,
    pub rotate_right: bool,
    pub thrust: bool,
}

/// Accumulated score. Monotonically non-decreasing.
#[derive(Resource, Debug, Default, Clone, Copy)]
pub struct PlayerScore {
    pub points: u32,
}

/// Lives remaining, including the current one. Starts at [`MAX_LIVES`];
/// each asteroid contact costs one, and reaching zero ends the game.
#[derive(Resource, Debug, Clone, Copy)]
pub struct PlayerLives {
    pub remaining: i32,
}

impl Default for PlayerLives {
    fn default() -> Self {
        Self {
            remaining: MAX_LIVES,
        }
    }
}
