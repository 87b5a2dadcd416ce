//! Discrete collision resolution for rectangular sprites.
//!
//! A [`PhysicsEngine`] moves one sprite per call by its pending motion and corrects the pose so
//! the sprite does not rest inside any wall of an [`Environment`]. The returned [`StepReport`]
//! names the walls the sprite ran into.
//!
//! ```
//! use sprite_physics::{Environment, PhysicsEngine, Position, Sprite};
//!
//! let mut player = Sprite::with_size(10.0, 10.0)?;
//! let mut walls = Environment::default();
//! walls.add(Sprite::with_size(10.0, 10.0)?.at(Position::new(11.0, 0.0)));
//!
//! player.set_change_x(5.0);
//! let report = PhysicsEngine::default().step(&mut player, &walls)?;
//!
//! assert_eq!(player.position(), Position::new(1.0, 0.0));
//! assert!(report.is_empty());
//! # Ok::<(), Box<dyn std::error::Error>>(())
//! ```

#[cfg(test)]
mod tests;

pub mod domain;
mod engine;

pub use domain::{
    Angle, Environment, HasCollision, HitBox, ObstacleId, Position, Sprite, SpriteError,
};
pub use engine::{ConfigError, EngineConfig, PhysicsEngine, StepError, StepReport};
