//! Driftfield — a wrap-around asteroids arcade game.
//!
//! The game core is [`simulation::GamePlugin`]: a chained set of per-tick
//! systems over plain components and resources, with all randomness routed
//! through one seedable stream. Rendering and window wiring live at the
//! edge (`main.rs`), so the whole core runs headless — the integration
//! tests drive it on a bare [`bevy::app::App`] with a hand-advanced clock.

pub mod asteroid;
pub mod config;
pub mod constants;
pub mod error;
pub mod graphics;
pub mod player;
pub mod rendering;
pub mod simulation;
