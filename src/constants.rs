//! Centralised gameplay constants.
//!
//! All tuneable values live here so they can be found, reasoned-about, and
//! modified in one place without source-diving across multiple modules.
//! Every constant doubles as the compiled default for the matching
//! [`GameConfig`](crate::config::GameConfig) field, so `assets/settings.toml`
//! can override any subset at startup.

// ── Screen ────────────────────────────────────────────────────────────────────

/// Playfield width in world units (= window pixels at default zoom).
///
/// Positions are kept inside `[0, SCREEN_WIDTH]`; the wrap snap teleports
/// anything that leaves through one side back in through the other.
pub const SCREEN_WIDTH: f32 = 800.0;

/// Playfield height in world units.
pub const SCREEN_HEIGHT: f32 = 600.0;

/// Window title shown by the host windowing layer.
pub const SCREEN_TITLE: &str = "Asteroids Clone";

// ── Player ────────────────────────────────────────────────────────────────────

/// Forward speed (units per tick) while the thrust key is held.
///
/// Speed is all-or-nothing: the ship moves at exactly this rate under thrust
/// and stops dead the moment the key is released.
pub const PLAYER_SPEED: f32 = 2.0;

/// Heading change (degrees per tick) while a rotation key is held.
pub const ROTATION_SPEED: f32 = 4.0;

/// Lives at the start of a run. Reaching zero ends the game.
pub const MAX_LIVES: i32 = 3;

// ── Bullets ───────────────────────────────────────────────────────────────────

/// Bullet speed (units per tick). The velocity vector is derived once at
/// fire time from the ship's heading and never changes afterwards.
pub const BULLET_SPEED: f32 = 5.0;

/// Bullet render radius. Deliberately *not* part of the collision
/// threshold — hits are tested against the asteroid radius alone.
pub const BULLET_RADIUS: f32 = 3.0;

/// Maximum bullet age in seconds before despawn; `0.0` disables expiry and
/// lets bullets fly forever, which is the classic behaviour.
pub const BULLET_MAX_AGE: f32 = 0.0;

// ── Asteroids ─────────────────────────────────────────────────────────────────

/// Per-axis drift speed bound (units per tick). Each new asteroid draws its
/// velocity components uniformly from `±ASTEROID_MAX_SPEED`.
pub const ASTEROID_MAX_SPEED: f32 = 1.5;

/// Number of full-size asteroids seeded into the field at startup.
pub const INITIAL_ASTEROID_COUNT: usize = 5;

// ── Spawner ───────────────────────────────────────────────────────────────────

/// Lower bound (seconds, inclusive) of the randomized spawn interval.
pub const SPAWN_INTERVAL_MIN: f32 = 1.0;

/// Upper bound (seconds, exclusive) of the randomized spawn interval.
///
/// Together with [`SPAWN_INTERVAL_MIN`] this is the only difficulty knob:
/// shrinking the window floods the field faster.
pub const SPAWN_INTERVAL_MAX: f32 = 5.0;

// ── HUD ───────────────────────────────────────────────────────────────────────

/// Font size for the score and lives overlays.
pub const HUD_FONT_SIZE: f32 = 16.0;

/// Pixel inset of the HUD overlays from the window corners.
pub const HUD_MARGIN: f32 = 10.0;
