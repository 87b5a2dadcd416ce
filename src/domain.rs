//! The domain module holds the geometry and the participants of collision resolution: sprites,
//! the walls they bump into, and the hit-box test deciding whether two of them overlap.
//!
//! Nothing in here moves on its own. Motion is applied by the engine.

mod basis;
mod collision;
mod environment;
mod sprite;

pub use basis::{Angle, Position};
pub use collision::{HasCollision, HitBox};
pub use environment::{Environment, ObstacleId};
pub use sprite::{Sprite, SpriteError};
