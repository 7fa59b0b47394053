//! Rendering systems: gizmo outlines for every entity plus the HUD overlays.
//!
//! Everything visual lives here, outside the core plugin, so the game logic
//! runs headless in tests. All shapes are immediate-mode gizmo lines and
//! circles, rebuilt each frame.
//!
//! | System                      | Schedule | Purpose                        |
//! |-----------------------------|----------|--------------------------------|
//! | `setup_hud`                 | Startup  | Spawn score + lives text nodes |
//! | `hud_score_display_system`  | Update   | Refresh score text on change   |
//! | `hud_lives_display_system`  | Update   | Refresh lives text on change   |
//! | `player_gizmo_system`       | Update   | Ship triangle + bullet circles |
//! | `asteroid_gizmo_system`     | Update   | Asteroid circle outlines       |

use crate::asteroid::{Asteroid, AsteroidTier};
use crate::config::GameConfig;
use crate::player::{Bullet, Player, PlayerLives, PlayerScore};
use bevy::prelude::*;

// ── Component markers ─────────────────────────────────────────────────────────

/// Marker for the score HUD node (top-left).
#[derive(Component)]
pub struct ScoreDisplay;

/// Marker for the lives HUD node (top-right).
#[derive(Component)]
pub struct LivesDisplay;

// ── Startup: HUD ──────────────────────────────────────────────────────────────

/// Spawn the permanent score (top-left) and lives (top-right) overlays.
pub fn setup_hud(mut commands: Commands, config: Res<GameConfig>, lives: Res<PlayerLives>) {
    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                left: Val::Px(config.hud_margin),
                top: Val::Px(config.hud_margin),
                ..default()
            },
            ScoreDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new("Score: 0"),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });

    commands
        .spawn((
            Node {
                position_type: PositionType::Absolute,
                right: Val::Px(config.hud_margin),
                top: Val::Px(config.hud_margin),
                ..default()
            },
            LivesDisplay,
        ))
        .with_children(|parent| {
            parent.spawn((
                Text::new(format!("Lives: {}", lives.remaining)),
                TextFont {
                    font_size: config.hud_font_size,
                    ..default()
                },
                TextColor(Color::WHITE),
            ));
        });
}

// ── Update: HUD refresh ───────────────────────────────────────────────────────

/// Refresh the score text. Change-gated, so the per-frame cost is a no-op
/// while the score holds still.
pub fn hud_score_display_system(
    score: Res<PlayerScore>,
    parent_query: Query<&Children, With<ScoreDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    if !score.is_changed() {
        return;
    }
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(format!("Score: {}", score.points));
            }
        }
    }
}

/// Refresh the lives text whenever a life is lost.
pub fn hud_lives_display_system(
    lives: Res<PlayerLives>,
    parent_query: Query<&Children, With<LivesDisplay>>,
    mut text_query: Query<&mut Text>,
) {
    if !lives.is_changed() {
        return;
    }
    for children in parent_query.iter() {
        for child in children.iter() {
            if let Ok(mut text) = text_query.get_mut(child) {
                *text = Text::new(format!("Lives: {}", lives.remaining));
            }
        }
    }
}

// ── Update: gizmos ────────────────────────────────────────────────────────────

/// Offset of `length` units from a position along a heading given in degrees.
fn heading_offset(angle_deg: f32, length: f32) -> Vec2 {
    let radians = angle_deg.to_radians();
    Vec2::new(radians.cos(), radians.sin()) * length
}

/// Draw the ship as a triangle derived from its position and heading
/// (tip 15 units forward, base corners at ±140° × 10 units), and every
/// bullet as a small circle.
pub fn player_gizmo_system(
    mut gizmos: Gizmos,
    q_player: Query<(&Transform, &Player)>,
    q_bullets: Query<&Transform, With<Bullet>>,
    config: Res<GameConfig>,
) {
    if let Ok((transform, player)) = q_player.single() {
        let pos = transform.translation.truncate();
        let tip = pos + heading_offset(player.angle, 15.0);
        let left = pos + heading_offset(player.angle + 140.0, 10.0);
        let right = pos + heading_offset(player.angle - 140.0, 10.0);

        let ship_color = Color::srgb(0.25, 0.45, 1.0);
        gizmos.line_2d(tip, left, ship_color);
        gizmos.line_2d(left, right, ship_color);
        gizmos.line_2d(right, tip, ship_color);
    }

    let bullet_color = Color::srgb(1.0, 0.2, 0.2);
    for transform in q_bullets.iter() {
        gizmos.circle_2d(
            transform.translation.truncate(),
            config.bullet_radius,
            bullet_color,
        );
    }
}

/// Draw every asteroid as a circle outline at its tier radius.
pub fn asteroid_gizmo_system(
    mut gizmos: Gizmos,
    query: Query<(&Transform, &AsteroidTier), With<Asteroid>>,
) {
    for (transform, tier) in query.iter() {
        gizmos.circle_2d(transform.translation.truncate(), tier.radius(), Color::WHITE);
    }
}
