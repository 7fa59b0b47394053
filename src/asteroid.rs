//! Asteroid components, spawning, drift motion, and the randomized spawner.
//!
//! Asteroids come in three size tiers that control collision radius, score
//! value, and what a hit leaves behind:
//!
//! | Tier   | Radius | Score | Hit yields      |
//! |--------|--------|-------|-----------------|
//! | Large  | 40     | 10    | 2 × Medium      |
//! | Medium | 30     | 20    | 2 × Small       |
//! | Small  | 20     | 50    | nothing         |
//!
//! Every asteroid drifts with a fixed random velocity and wraps at the
//! screen edges. New rocks enter the field from a uniformly random point on
//! one of the four edges, on a timer that re-randomizes after every spawn.

use crate::config::GameConfig;
use crate::constants::SPAWN_INTERVAL_MAX;
use crate::simulation::{wrap_position, GameRng, Velocity};
use bevy::prelude::*;
use rand::rngs::SmallRng;
use rand::Rng;

// ── Components ────────────────────────────────────────────────────────────────

/// Marker component for any asteroid entity.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Asteroid;

/// Size tier: collision radius, score value, and split behaviour.
#[derive(Component, Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum AsteroidTier {
    Large,
    Medium,
    Small,
}

impl AsteroidTier {
    /// Collision (and render) radius in world units.
    ///
    /// The collision test compares squared centre distance against this
    /// radius squared — the bullet's own radius is not added.
    #[inline]
    pub fn radius(self) -> f32 {
        match self {
            AsteroidTier::Large => 40.0,
            AsteroidTier::Medium => 30.0,
            AsteroidTier::Small => 20.0,
        }
    }

    /// Points awarded for destroying an asteroid of this tier.
    /// Smaller rocks are harder to hit and worth more.
    #[inline]
    pub fn score(self) -> u32 {
        match self {
            AsteroidTier::Large => 10,
            AsteroidTier::Medium => 20,
            AsteroidTier::Small => 50,
        }
    }

    /// The tier of the two children a hit produces, or `None` for the
    /// smallest tier (which shatters completely).
    #[inline]
    pub fn split(self) -> Option<AsteroidTier> {
        match self {
            AsteroidTier::Large => Some(AsteroidTier::Medium),
            AsteroidTier::Medium => Some(AsteroidTier::Small),
            AsteroidTier::Small => None,
        }
    }
}

// ── Resources ─────────────────────────────────────────────────────────────────

/// Tracks time since the last asteroid spawn and the next random threshold.
///
/// The threshold starts at the interval maximum and is randomized by
/// `init_spawn_timer` at startup; after every spawn it is redrawn uniformly
/// from `[spawn_interval_min, spawn_interval_max)`.
#[derive(Resource, Debug, Clone)]
pub struct SpawnTimer {
    /// Seconds accumulated since the last spawn.
    pub elapsed: f32,
    /// Seconds of accumulation that trigger the next spawn.
    pub next_spawn: f32,
}

impl Default for SpawnTimer {
    fn default() -> Self {
        Self {
            elapsed: 0.0,
            next_spawn: SPAWN_INTERVAL_MAX,
        }
    }
}

// ── Spawning ──────────────────────────────────────────────────────────────────

/// Spawn a single asteroid with an explicit position, tier, and velocity.
pub fn spawn_asteroid(
    commands: &mut Commands,
    position: Vec2,
    tier: AsteroidTier,
    velocity: Vec2,
) -> Entity {
    commands
        .spawn((
            Asteroid,
            tier,
            Transform::from_translation(position.extend(0.0)),
            Velocity(velocity),
        ))
        .id()
}

/// Draw a drift velocity with both components uniform in `±max_speed`.
pub fn random_drift_velocity(rng: &mut SmallRng, max_speed: f32) -> Vec2 {
    Vec2::new(
        rng.gen_range(-max_speed..max_speed),
        rng.gen_range(-max_speed..max_speed),
    )
}

/// Pick a uniformly random point on one of the four screen edges.
///
/// The edge is chosen uniformly among top/bottom/left/right; the free
/// coordinate along the chosen edge is uniform over its full range.
pub fn random_edge_position(rng: &mut SmallRng, config: &GameConfig) -> Vec2 {
    match rng.gen_range(0..4u8) {
        0 => Vec2::new(
            rng.gen_range(0.0..=config.screen_width),
            config.screen_height,
        ),
        1 => Vec2::new(rng.gen_range(0.0..=config.screen_width), 0.0),
        2 => Vec2::new(0.0, rng.gen_range(0.0..=config.screen_height)),
        _ => Vec2::new(
            config.screen_width,
            rng.gen_range(0.0..=config.screen_height),
        ),
    }
}

/// Spawn one full-size asteroid at a random edge point with a random drift.
pub fn spawn_edge_asteroid(commands: &mut Commands, rng: &mut SmallRng, config: &GameConfig) {
    let position = random_edge_position(rng, config);
    let velocity = random_drift_velocity(rng, config.asteroid_max_speed);
    spawn_asteroid(commands, position, AsteroidTier::Large, velocity);
}

/// Startup system: seed the field with full-size asteroids at uniformly
/// random positions anywhere on the playfield.
pub fn spawn_initial_field(
    mut commands: Commands,
    mut rng: ResMut<GameRng>,
    config: Res<GameConfig>,
) {
    for _ in 0..config.initial_asteroid_count {
        let position = Vec2::new(
            rng.0.gen_range(0.0..=config.screen_width),
            rng.0.gen_range(0.0..=config.screen_height),
        );
        let velocity = random_drift_velocity(&mut rng.0, config.asteroid_max_speed);
        spawn_asteroid(&mut commands, position, AsteroidTier::Large, velocity);
    }
    println!(
        "✓ Initial field spawned ({} asteroids)",
        config.initial_asteroid_count
    );
}

/// Startup system: randomize the first spawn threshold.
///
/// Kept out of [`crate::simulation::GamePlugin`] so tests can inject a fixed
/// [`SpawnTimer`] without a startup system overwriting it.
pub fn init_spawn_timer(
    mut timer: ResMut<SpawnTimer>,
    mut rng: ResMut<GameRng>,
    config: Res<GameConfig>,
) {
    timer.elapsed = 0.0;
    timer.next_spawn = rng
        .0
        .gen_range(config.spawn_interval_min..config.spawn_interval_max);
}

// ── Per-tick systems ──────────────────────────────────────────────────────────

/// Advance every asteroid by its fixed drift and wrap at the screen edges.
pub fn asteroid_motion_system(
    mut query: Query<(&mut Transform, &Velocity), With<Asteroid>>,
    config: Res<GameConfig>,
) {
    for (mut transform, velocity) in query.iter_mut() {
        let next = transform.translation.truncate() + velocity.0;
        let wrapped = wrap_position(next, config.screen_width, config.screen_height);
        transform.translation = wrapped.extend(transform.translation.z);
    }
}

/// Accumulate frame delta-time and spawn one edge asteroid whenever the
/// threshold is reached, then reset and redraw the threshold.
pub fn asteroid_spawn_system(
    mut commands: Commands,
    time: Res<Time>,
    mut timer: ResMut<SpawnTimer>,
    mut rng: ResMut<GameRng>,
    config: Res<GameConfig>,
) {
    timer.elapsed += time.delta_secs();
    if timer.elapsed >= timer.next_spawn {
        spawn_edge_asteroid(&mut commands, &mut rng.0, &config);
        timer.elapsed = 0.0;
        timer.next_spawn = rng
            .0
            .gen_range(config.spawn_interval_min..config.spawn_interval_max);
    }
}
