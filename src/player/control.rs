//! Input mapping and ship motion.
//!
//! ## Pipeline (runs at the head of every tick)
//!
//! 1. [`keyboard_to_intent_system`] — arrow-key held state → [`PlayerIntent`].
//! 2. [`keyboard_fire_system`] — Space press → one queued [`FireCommand`].
//! 3. [`player_motion_system`] — applies the intent: rotate, thrust, wrap.
//!
//! The **input abstraction layer** (`PlayerIntent`) keeps the motion logic
//! fully testable: tests populate the resource directly and run only
//! [`player_motion_system`], without a keyboard.

use super::state::{FireCommand, Player, PlayerIntent};
use crate::config::GameConfig;
use crate::simulation::wrap_position;
use bevy::input::ButtonInput;
use bevy::prelude::*;

// ── Step 1: Keyboard → Intent ─────────────────────────────────────────────────

/// Translate held arrow keys into [`PlayerIntent`].
///
/// - **ArrowLeft** → `rotate_left` (counter-clockwise)
/// - **ArrowRight** → `rotate_right` (clockwise)
/// - **ArrowUp** → `thrust`
///
/// All three flags are overwritten from scratch each tick, so a release is
/// reflected on the very next update and stale state cannot linger.
pub fn keyboard_to_intent_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut intent: ResMut<PlayerIntent>,
) {
    intent.rotate_left = keys.pressed(KeyCode::ArrowLeft);
    intent.rotate_right = keys.pressed(KeyCode::ArrowRight);
    intent.thrust = keys.pressed(KeyCode::ArrowUp);
}

// ── Step 2: Fire key → FireCommand ────────────────────────────────────────────

/// Queue exactly one [`FireCommand`] per Space *press*.
///
/// Uses `just_pressed`, not `pressed`: holding the key down fires once, on
/// the press edge. Each queued command becomes exactly one bullet when
/// [`super::combat::bullet_fire_system`] drains the queue.
pub fn keyboard_fire_system(
    keys: Res<ButtonInput<KeyCode>>,
    mut fire: MessageWriter<FireCommand>,
) {
    if keys.just_pressed(KeyCode::Space) {
        fire.write(FireCommand);
    }
}

// ── Step 3: Apply intent ──────────────────────────────────────────────────────

/// Rotate and move the ship from the current [`PlayerIntent`], then wrap.
///
/// Rotation keys add/subtract a fixed number of degrees per tick; holding
/// both applies both and cancels. Speed is the configured thrust speed while
/// the thrust flag is held and zero otherwise. The position advances by
/// `(cos θ, sin θ) × speed` with the heading converted degrees → radians,
/// then hard-snaps back onto the playfield.
pub fn player_motion_system(
    mut query: Query<(&mut Transform, &mut Player)>,
    intent: Res<PlayerIntent>,
    config: Res<GameConfig>,
) {
    let Ok((mut transform, mut player)) = query.single_mut() else {
        return;
    };

    if intent.rotate_left {
        player.angle += config.rotation_speed;
    }
    if intent.rotate_right {
        player.angle -= config.rotation_speed;
    }
    player.speed = if intent.thrust {
        config.player_speed
    } else {
        0.0
    };

    let heading = player.angle.to_radians();
    let next = transform.translation.truncate()
        + Vec2::new(heading.cos(), heading.sin()) * player.speed;
    let wrapped = wrap_position(next, config.screen_width, config.screen_height);
    transform.translation = wrapped.extend(transform.translation.z);
}
