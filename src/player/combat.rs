//! Bullet firing, bullet flight, and both collision passes.
//!
//! ## Collision model
//!
//! A hit is a squared centre distance strictly below the asteroid's radius
//! squared. The bullet's own radius is render-only and is *not* added to
//! the threshold; the ship is likewise tested as a point.
//!
//! ## Hit resolution
//!
//! | Target tier | Score | Children          |
//! |-------------|-------|-------------------|
//! | Large       | +10   | 2 × Medium        |
//! | Medium      | +20   | 2 × Small         |
//! | Small       | +50   | none              |
//!
//! One bullet destroys at most one asteroid per tick — the first match in
//! query iteration order wins. A ship contact costs one life and teleports
//! the ship back to the screen centre with zero speed (heading kept); the
//! asteroid stays, so an overlap that persists keeps costing one life per
//! tick until the rock drifts clear.

use super::state::{Bullet, FireCommand, Player, PlayerLives, PlayerScore};
use crate::asteroid::{random_drift_velocity, spawn_asteroid, Asteroid, AsteroidTier};
use crate::config::GameConfig;
use crate::simulation::{GameRng, Velocity};
use bevy::app::AppExit;
use bevy::prelude::*;
use std::collections::HashSet;

// ── Firing ────────────────────────────────────────────────────────────────────

/// Spawn one bullet per queued [`FireCommand`], at the ship's current
/// position, flying along its current heading.
///
/// The velocity vector is computed here, once; the bullet keeps it for life
/// regardless of what the ship does afterwards.
pub fn bullet_fire_system(
    mut commands: Commands,
    mut fire: MessageReader<FireCommand>,
    q_player: Query<(&Transform, &Player)>,
    config: Res<GameConfig>,
) {
    let Ok((transform, player)) = q_player.single() else {
        return;
    };
    for _ in fire.read() {
        let heading = player.angle.to_radians();
        commands.spawn((
            Bullet::default(),
            Transform::from_translation(transform.translation.truncate().extend(0.0)),
            Velocity(Vec2::new(heading.cos(), heading.sin()) * config.bullet_speed),
        ));
    }
}

// ── Flight ────────────────────────────────────────────────────────────────────

/// Advance every bullet by its fixed velocity.
///
/// Bullets do not wrap: a shot that leaves the playfield keeps flying away
/// from it forever (unless [`bullet_expiry_system`] is enabled).
pub fn bullet_motion_system(mut query: Query<(&mut Transform, &Velocity), With<Bullet>>) {
    for (mut transform, velocity) in query.iter_mut() {
        transform.translation.x += velocity.0.x;
        transform.translation.y += velocity.0.y;
    }
}

/// Age bullets and, when `bullet_max_age` is enabled (> 0), despawn the
/// ones that have outlived it.
///
/// Disabled by default: unbounded bullet lifetime is the classic behaviour.
pub fn bullet_expiry_system(
    mut commands: Commands,
    mut query: Query<(Entity, &mut Bullet)>,
    time: Res<Time>,
    config: Res<GameConfig>,
) {
    let dt = time.delta_secs();
    for (entity, mut bullet) in query.iter_mut() {
        bullet.age += dt;
        if config.bullet_max_age > 0.0 && bullet.age >= config.bullet_max_age {
            commands.entity(entity).despawn();
        }
    }
}

// ── Bullet ↔ asteroid ─────────────────────────────────────────────────────────

/// Test every live (bullet, asteroid) pair; resolve hits with scoring and
/// splitting.
///
/// Each bullet checks asteroids in query iteration order and stops at its
/// first hit. An asteroid destroyed earlier in the tick is skipped for the
/// remaining bullets, so two bullets can never cash in the same rock.
/// Children spawn through deferred commands and become collidable next
/// system (they *do* already threaten the ship this tick).
pub fn bullet_asteroid_hit_system(
    mut commands: Commands,
    q_bullets: Query<(Entity, &Transform), With<Bullet>>,
    q_asteroids: Query<(Entity, &Transform, &AsteroidTier), With<Asteroid>>,
    mut score: ResMut<PlayerScore>,
    mut rng: ResMut<GameRng>,
    config: Res<GameConfig>,
) {
    let mut destroyed: HashSet<Entity> = HashSet::new();

    for (bullet_entity, bullet_transform) in q_bullets.iter() {
        let bullet_pos = bullet_transform.translation.truncate();

        for (asteroid_entity, asteroid_transform, tier) in q_asteroids.iter() {
            if destroyed.contains(&asteroid_entity) {
                continue;
            }
            let asteroid_pos = asteroid_transform.translation.truncate();
            let radius = tier.radius();
            if bullet_pos.distance_squared(asteroid_pos) < radius * radius {
                score.points += tier.score();
                if let Some(child_tier) = tier.split() {
                    for _ in 0..2 {
                        let velocity =
                            random_drift_velocity(&mut rng.0, config.asteroid_max_speed);
                        spawn_asteroid(&mut commands, asteroid_pos, child_tier, velocity);
                    }
                }
                destroyed.insert(asteroid_entity);
                commands.entity(asteroid_entity).despawn();
                commands.entity(bullet_entity).despawn();
                break;
            }
        }
    }
}

// ── Ship ↔ asteroid ───────────────────────────────────────────────────────────

/// Cost one life per overlapping asteroid and reset the ship to the screen
/// centre (speed zeroed, heading kept). Lives at or below zero end the run.
///
/// The asteroid is deliberately not removed: a rock sitting on the centre
/// keeps draining lives tick after tick until it drifts away. Later
/// asteroids in the same tick are tested against the already-reset position.
pub fn player_asteroid_hit_system(
    mut q_player: Query<(&mut Transform, &mut Player)>,
    q_asteroids: Query<(&Transform, &AsteroidTier), (With<Asteroid>, Without<Player>)>,
    mut lives: ResMut<PlayerLives>,
    config: Res<GameConfig>,
    mut exit: MessageWriter<AppExit>,
) {
    let Ok((mut transform, mut player)) = q_player.single_mut() else {
        return;
    };

    for (asteroid_transform, tier) in q_asteroids.iter() {
        let radius = tier.radius();
        let distance_squared = transform
            .translation
            .truncate()
            .distance_squared(asteroid_transform.translation.truncate());
        if distance_squared < radius * radius {
            lives.remaining -= 1;
            transform.translation = config
                .screen_center()
                .extend(transform.translation.z);
            player.speed = 0.0;
            info!("ship hit: {} lives remaining", lives.remaining);
            if lives.remaining <= 0 {
                info!("out of lives — game over");
                exit.write(AppExit::Success);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::constants::BULLET_SPEED;
    use std::time::Duration;

    const CENTER: Vec2 = Vec2::new(400.0, 300.0);

    fn combat_app() -> App {
        let mut app = App::new();
        app.insert_resource(GameConfig::default());
        app.insert_resource(GameRng::seeded(11));
        app.init_resource::<PlayerScore>();
        app.init_resource::<PlayerLives>();
        app.init_resource::<Time>();
        app.add_message::<FireCommand>();
        app
    }

    fn spawn_ship(app: &mut App, position: Vec2, angle: f32) {
        app.world_mut().spawn((
            Player { angle, speed: 0.0 },
            Transform::from_translation(position.extend(1.0)),
        ));
    }

    fn spawn_rock(app: &mut App, position: Vec2, tier: AsteroidTier) -> Entity {
        app.world_mut()
            .spawn((
                Asteroid,
                tier,
                Transform::from_translation(position.extend(0.0)),
                Velocity(Vec2::ZERO),
            ))
            .id()
    }

    fn spawn_bullet(app: &mut App, position: Vec2, velocity: Vec2) -> Entity {
        app.world_mut()
            .spawn((
                Bullet::default(),
                Transform::from_translation(position.extend(0.0)),
                Velocity(velocity),
            ))
            .id()
    }

    fn count<C: Component>(app: &mut App) -> usize {
        let mut query = app.world_mut().query_filtered::<(), With<C>>();
        query.iter(app.world()).count()
    }

    fn tiers(app: &mut App) -> Vec<AsteroidTier> {
        let mut query = app.world_mut().query::<&AsteroidTier>();
        query.iter(app.world()).copied().collect()
    }

    // ── Firing ────────────────────────────────────────────────────────────────

    #[test]
    fn each_fire_command_spawns_exactly_one_bullet() {
        let mut app = combat_app();
        app.add_systems(Update, bullet_fire_system);
        spawn_ship(&mut app, CENTER, 0.0);

        app.world_mut().write_message(FireCommand);
        app.update();
        assert_eq!(count::<Bullet>(&mut app), 1);

        app.world_mut().write_message(FireCommand);
        app.world_mut().write_message(FireCommand);
        app.update();
        assert_eq!(count::<Bullet>(&mut app), 3, "two presses → two more bullets");
    }

    #[test]
    fn bullet_velocity_is_derived_from_heading_at_fire_time() {
        let mut app = combat_app();
        app.add_systems(Update, bullet_fire_system);
        spawn_ship(&mut app, CENTER, 90.0);

        app.world_mut().write_message(FireCommand);
        app.update();

        let mut query = app.world_mut().query_filtered::<&Velocity, With<Bullet>>();
        let velocity = query.single(app.world()).unwrap().0;
        assert!((velocity.x - 0.0).abs() < 1e-4);
        assert!((velocity.y - BULLET_SPEED).abs() < 1e-4);

        // Turning the ship afterwards must not steer the bullet.
        {
            let world = app.world_mut();
            let mut players = world.query::<&mut Player>();
            players.single_mut(world).unwrap().angle = 180.0;
        }
        app.update();
        let mut query = app.world_mut().query_filtered::<&Velocity, With<Bullet>>();
        assert_eq!(query.single(app.world()).unwrap().0, velocity);
    }

    #[test]
    fn no_bullet_spawns_without_a_command() {
        let mut app = combat_app();
        app.add_systems(Update, bullet_fire_system);
        spawn_ship(&mut app, CENTER, 0.0);
        app.update();
        app.update();
        assert_eq!(count::<Bullet>(&mut app), 0);
    }

    // ── Flight & expiry ───────────────────────────────────────────────────────

    #[test]
    fn bullets_fly_straight_and_do_not_wrap() {
        let mut app = combat_app();
        app.add_systems(Update, bullet_motion_system);
        spawn_bullet(&mut app, Vec2::new(799.0, 300.0), Vec2::new(BULLET_SPEED, 0.0));

        app.update();
        let mut query = app.world_mut().query_filtered::<&Transform, With<Bullet>>();
        let pos = query.single(app.world()).unwrap().translation.truncate();
        assert_eq!(
            pos,
            Vec2::new(799.0 + BULLET_SPEED, 300.0),
            "a bullet past the edge keeps flying — no wrap snap"
        );
    }

    #[test]
    fn bullet_expiry_is_disabled_by_default() {
        let mut app = combat_app();
        app.add_systems(Update, bullet_expiry_system);
        spawn_bullet(&mut app, CENTER, Vec2::ZERO);

        for _ in 0..10 {
            app.world_mut()
                .resource_mut::<Time>()
                .advance_by(Duration::from_secs(60));
            app.update();
        }
        assert_eq!(count::<Bullet>(&mut app), 1, "default config never expires bullets");
    }

    #[test]
    fn bullet_expiry_despawns_old_bullets_when_enabled() {
        let mut app = combat_app();
        let mut config = GameConfig::default();
        config.bullet_max_age = 1.0;
        app.insert_resource(config);
        app.add_systems(Update, bullet_expiry_system);
        spawn_bullet(&mut app, CENTER, Vec2::ZERO);

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(0.6));
        app.update();
        assert_eq!(count::<Bullet>(&mut app), 1, "not yet expired");

        app.world_mut()
            .resource_mut::<Time>()
            .advance_by(Duration::from_secs_f32(0.6));
        app.update();
        assert_eq!(count::<Bullet>(&mut app), 0, "1.2 s old with a 1.0 s cap");
    }

    // ── Bullet ↔ asteroid ─────────────────────────────────────────────────────

    #[test]
    fn large_hit_scores_ten_and_splits_into_two_medium() {
        let mut app = combat_app();
        app.add_systems(Update, bullet_asteroid_hit_system);
        let rock_pos = Vec2::new(500.0, 300.0);
        spawn_rock(&mut app, rock_pos, AsteroidTier::Large);
        spawn_bullet(&mut app, rock_pos, Vec2::ZERO);

        app.update();

        assert_eq!(app.world().resource::<PlayerScore>().points, 10);
        assert_eq!(count::<Bullet>(&mut app), 0, "bullet is consumed");
        let remaining = tiers(&mut app);
        assert_eq!(remaining.len(), 2);
        assert!(
            remaining.iter().all(|t| *t == AsteroidTier::Medium),
            "children must be one tier smaller, got {remaining:?}"
        );

        let mut query = app
            .world_mut()
            .query_filtered::<&Transform, With<Asteroid>>();
        for transform in query.iter(app.world()) {
            assert_eq!(
                transform.translation.truncate(),
                rock_pos,
                "children spawn at the hit position"
            );
        }
    }

    #[test]
    fn small_hit_scores_fifty_and_leaves_nothing() {
        let mut app = combat_app();
        app.add_systems(Update, bullet_asteroid_hit_system);
        spawn_rock(&mut app, CENTER, AsteroidTier::Small);
        spawn_bullet(&mut app, CENTER, Vec2::ZERO);

        app.update();

        assert_eq!(app.world().resource::<PlayerScore>().points, 50);
        assert_eq!(count::<Asteroid>(&mut app), 0, "smallest tier shatters completely");
        assert_eq!(count::<Bullet>(&mut app), 0);
    }

    #[test]
    fn hit_requires_distance_strictly_below_radius() {
        let mut app = combat_app();
        app.add_systems(Update, bullet_asteroid_hit_system);
        spawn_rock(&mut app, CENTER, AsteroidTier::Large);
        // Exactly on the radius: distance² == radius², not a hit.
        spawn_bullet(&mut app, CENTER + Vec2::new(40.0, 0.0), Vec2::ZERO);

        app.update();

        assert_eq!(app.world().resource::<PlayerScore>().points, 0);
        assert_eq!(count::<Asteroid>(&mut app), 1);
        assert_eq!(count::<Bullet>(&mut app), 1);
    }

    #[test]
    fn one_bullet_destroys_at_most_one_asteroid_per_tick() {
        let mut app = combat_app();
        app.add_systems(Update, bullet_asteroid_hit_system);
        // Two small rocks stacked on the same point; one bullet between them.
        spawn_rock(&mut app, CENTER, AsteroidTier::Small);
        spawn_rock(&mut app, CENTER, AsteroidTier::Small);
        spawn_bullet(&mut app, CENTER, Vec2::ZERO);

        app.update();

        assert_eq!(
            app.world().resource::<PlayerScore>().points,
            50,
            "only the first match may score"
        );
        assert_eq!(count::<Asteroid>(&mut app), 1, "the second rock survives");
    }

    #[test]
    fn two_bullets_cannot_cash_in_the_same_asteroid() {
        let mut app = combat_app();
        app.add_systems(Update, bullet_asteroid_hit_system);
        spawn_rock(&mut app, CENTER, AsteroidTier::Small);
        spawn_bullet(&mut app, CENTER, Vec2::ZERO);
        spawn_bullet(&mut app, CENTER, Vec2::ZERO);

        app.update();

        assert_eq!(
            app.world().resource::<PlayerScore>().points,
            50,
            "a destroyed rock is skipped for later bullets in the same tick"
        );
        assert_eq!(count::<Asteroid>(&mut app), 0);
        assert_eq!(count::<Bullet>(&mut app), 1, "the second bullet flies on");
    }

    // ── Ship ↔ asteroid ───────────────────────────────────────────────────────

    #[test]
    fn ship_contact_costs_a_life_and_resets_to_centre() {
        let mut app = combat_app();
        app.add_systems(Update, player_asteroid_hit_system);
        spawn_ship(&mut app, Vec2::new(120.0, 80.0), 37.0);
        spawn_rock(&mut app, Vec2::new(130.0, 80.0), AsteroidTier::Large);

        app.update();

        assert_eq!(app.world().resource::<PlayerLives>().remaining, 2);
        let mut query = app.world_mut().query::<(&Transform, &Player)>();
        let (transform, player) = query.single(app.world()).unwrap();
        assert_eq!(transform.translation.truncate(), CENTER);
        assert_eq!(player.speed, 0.0);
        assert_eq!(player.angle, 37.0, "heading survives the reset");
        assert_eq!(count::<Asteroid>(&mut app), 1, "the rock is not removed");
    }

    #[test]
    fn two_overlapping_rocks_cost_two_lives_in_one_tick() {
        let mut app = combat_app();
        app.add_systems(Update, player_asteroid_hit_system);
        spawn_ship(&mut app, CENTER, 0.0);
        spawn_rock(&mut app, CENTER, AsteroidTier::Large);
        spawn_rock(&mut app, CENTER + Vec2::new(5.0, 0.0), AsteroidTier::Large);

        app.update();

        assert_eq!(app.world().resource::<PlayerLives>().remaining, 1);
    }

    #[test]
    fn running_out_of_lives_requests_app_exit() {
        let mut app = combat_app();
        app.add_systems(Update, player_asteroid_hit_system);
        app.insert_resource(PlayerLives { remaining: 1 });
        spawn_ship(&mut app, CENTER, 0.0);
        spawn_rock(&mut app, CENTER, AsteroidTier::Large);

        app.update();

        assert_eq!(app.world().resource::<PlayerLives>().remaining, 0);
        assert!(
            app.should_exit().is_some(),
            "lives at zero must request shutdown"
        );
    }

    #[test]
    fn distant_rock_does_not_touch_the_ship() {
        let mut app = combat_app();
        app.add_systems(Update, player_asteroid_hit_system);
        spawn_ship(&mut app, CENTER, 0.0);
        spawn_rock(&mut app, CENTER + Vec2::new(41.0, 0.0), AsteroidTier::Large);

        app.update();

        assert_eq!(app.world().resource::<PlayerLives>().remaining, 3);
        assert!(app.should_exit().is_none());
    }
}
