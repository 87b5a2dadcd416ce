//! Collision resolution of one moving sprite against a set of walls.
//!
//! Each step applies the sprite's pending rotation and translation and then corrects the pose
//! so that the sprite rests outside every wall. Rotation is applied first, then the horizontal
//! and the vertical part of the translation, each checked and corrected on its own:
//!
//! * A translation that runs into walls is backed off in fixed steps against the direction of
//!   travel until the walls are clear again.
//! * A rotation that makes the sprite reach into a wall is never undone. Instead the sprite is
//!   pushed away from the wall with probe distances doubling from one back-off step, up to the
//!   sprite's half-width plus half-height. Walls penetrating from opposite sides of the same
//!   axis cannot be escaped this way, so the sprite stays where it was.
//!
//! Walls hit by the rotation are always reported, together with every wall still overlapping
//! the final pose.

use thiserror::Error;

use crate::domain::{Environment, HasCollision, ObstacleId, Position, Sprite};

#[derive(Clone, Debug, PartialEq)]
pub struct EngineConfig {
    /// Distance of one back-off step.
    pub backoff_step: f64,
    /// Upper bound of back-off steps per axis and step.
    pub max_correction_steps: u32,
    /// Constant downward acceleration, subtracted from `change_y` before every step.
    pub gravity: Option<f64>,
}

impl EngineConfig {
    pub const fn new(backoff_step: f64, max_correction_steps: u32, gravity: Option<f64>) -> Self {
        EngineConfig {
            backoff_step,
            max_correction_steps,
            gravity,
        }
    }

    /// Side-view configuration where the moving sprite falls and lands on walls.
    pub const fn platformer(gravity: f64) -> Self {
        Self::new(1.0, 1000, Some(gravity))
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.backoff_step.is_finite() && self.backoff_step > 0.0) {
            return Err(ConfigError::InvalidBackoffStep(self.backoff_step));
        }
        if self.max_correction_steps == 0 {
            return Err(ConfigError::ZeroCorrectionCap);
        }
        match self.gravity {
            Some(gravity) if !gravity.is_finite() => Err(ConfigError::NonFiniteGravity(gravity)),
            _ => Ok(()),
        }
    }
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self::new(1.0, 1000, None)
    }
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum ConfigError {
    #[error("back-off step must be positive and finite, got {0}")]
    InvalidBackoffStep(f64),
    #[error("correction cap must allow at least one back-off step")]
    ZeroCorrectionCap,
    #[error("gravity must be finite, got {0}")]
    NonFiniteGravity(f64),
}

#[derive(Error, Debug, Clone, PartialEq)]
pub enum StepError {
    #[error("moving sprite has a non-finite pose or motion at {position:?}")]
    NonFiniteSprite { position: Position },
    #[error("wall {id:?} has a non-finite pose at {position:?}")]
    NonFiniteObstacle { id: ObstacleId, position: Position },
}

/// Outcome of one [`PhysicsEngine::step`].
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct StepReport {
    hits: Vec<ObstacleId>,
    bracketed: bool,
    exhausted: bool,
}

impl StepReport {
    /// Walls the sprite collided with, in index order and without duplicates.
    pub fn hits(&self) -> &[ObstacleId] {
        &self.hits
    }

    pub fn is_empty(&self) -> bool {
        self.hits.is_empty()
    }

    /// A rotation was blocked by walls on opposite sides of the sprite.
    pub fn is_bracketed(&self) -> bool {
        self.bracketed
    }

    /// The correction gave up before the sprite was clear.
    pub fn is_exhausted(&self) -> bool {
        self.exhausted
    }

    fn record(&mut self, ids: &[ObstacleId]) {
        self.hits.extend_from_slice(ids);
        self.hits.sort_unstable();
        self.hits.dedup();
    }
}

impl IntoIterator for StepReport {
    type Item = ObstacleId;
    type IntoIter = std::vec::IntoIter<ObstacleId>;

    fn into_iter(self) -> Self::IntoIter {
        self.hits.into_iter()
    }
}

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
enum Axis {
    X,
    Y,
}

impl Axis {
    fn unit(self) -> Position {
        match self {
            Axis::X => Position::new(1.0, 0.0),
            Axis::Y => Position::new(0.0, 1.0),
        }
    }

    fn change(self, sprite: &Sprite) -> f64 {
        match self {
            Axis::X => sprite.change_x(),
            Axis::Y => sprite.change_y(),
        }
    }
}

/// Resolver for one moving sprite against one set of walls.
///
/// The engine is not bound to its sprite and walls. It only holds the configuration, and the
/// moving sprite and the walls are lent to every [`PhysicsEngine::step`] call, so the caller
/// can edit motion or move walls between steps.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct PhysicsEngine {
    config: EngineConfig,
}

impl PhysicsEngine {
    pub fn new(config: EngineConfig) -> Result<Self, ConfigError> {
        config.validate()?;
        Ok(Self { config })
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// Moves `sprite` by its pending motion and resolves collisions with `environment`.
    ///
    /// Only the pose of `sprite` is changed, and its `change_y` when gravity is configured.
    /// Non-finite input is rejected before anything is touched.
    pub fn step(
        &self,
        sprite: &mut Sprite,
        environment: &Environment,
    ) -> Result<StepReport, StepError> {
        if !sprite.is_finite() {
            return Err(StepError::NonFiniteSprite {
                position: sprite.position(),
            });
        }
        if let Some((id, position)) = environment.first_non_finite() {
            return Err(StepError::NonFiniteObstacle { id, position });
        }

        if let Some(gravity) = self.config.gravity {
            sprite.set_change_y(sprite.change_y() - gravity);
        }

        log::trace!(
            "step from {:?} by ({}, {}, {}°)",
            sprite.position(),
            sprite.change_x(),
            sprite.change_y(),
            sprite.change_angle().degrees()
        );

        let mut report = StepReport::default();
        self.rotate(sprite, environment, &mut report);
        for axis in [Axis::X, Axis::Y] {
            let hits = self.translate(sprite, environment, axis, &mut report);
            if axis == Axis::Y && !hits.is_empty() && self.config.gravity.is_some() {
                sprite.set_change_y(0.0);
            }
        }
        report.record(&environment.collisions(sprite));

        Ok(report)
    }

    /// Whether a wall is within `probe` below the sprite.
    pub fn can_jump(&self, sprite: &Sprite, environment: &Environment, probe: f64) -> bool {
        let mut below = sprite.clone();
        below.set_position(sprite.position() - Axis::Y.unit() * probe);
        environment.has_collision(&below)
    }

    pub fn jump(&self, sprite: &mut Sprite, velocity: f64) {
        sprite.set_change_y(velocity);
    }

    fn rotate(&self, sprite: &mut Sprite, environment: &Environment, report: &mut StepReport) {
        let change = sprite.change_angle();
        if change.is_zero() {
            return;
        }
        sprite.set_angle(sprite.angle() + change);

        let hits = environment.collisions(sprite);
        if hits.is_empty() {
            return;
        }
        report.record(&hits);

        let origin = sprite.position();
        let Some(direction) = push_direction(origin, &hits, environment) else {
            log::warn!("rotation at {origin:?} is bracketed by walls {hits:?}");
            report.bracketed = true;
            return;
        };

        let max_push = sprite.half_width() + sprite.half_height();
        let mut distance = self.config.backoff_step;
        loop {
            // The last probe lands on the limit itself.
            distance = distance.min(max_push);
            sprite.set_position(origin + direction * distance);
            if !environment.has_collision(sprite) {
                log::debug!(
                    "rotation pushed sprite from {origin:?} by {distance} along {direction:?}"
                );
                return;
            }
            if distance >= max_push {
                break;
            }
            distance *= 2.0;
        }

        log::warn!("no free position within {max_push} of {origin:?} after rotation");
        sprite.set_position(origin);
        report.exhausted = true;
    }

    /// Applies the motion along `axis` and backs off again if it ran into walls. Returns the
    /// walls hit by the motion.
    fn translate(
        &self,
        sprite: &mut Sprite,
        environment: &Environment,
        axis: Axis,
        report: &mut StepReport,
    ) -> Vec<ObstacleId> {
        let change = axis.change(sprite);
        if change == 0.0 {
            return Vec::new();
        }
        let origin = sprite.position();
        sprite.set_position(origin + axis.unit() * change);

        let hits = environment.collisions(sprite);
        if hits.is_empty() {
            return hits;
        }

        // Never back off past the pre-step position.
        let step = self.config.backoff_step;
        let travelled = change.abs();
        let limit = ((travelled / step).ceil() as u32).min(self.config.max_correction_steps);

        let mut steps = 0;
        let mut backed = 0.0;
        let mut remaining = hits.clone();
        while !remaining.is_empty() && steps < limit {
            backed = f64::min(backed + step, travelled);
            sprite.set_position(origin + axis.unit() * (change.signum() * (travelled - backed)));
            steps += 1;
            remaining = environment.overlapping(&sprite.hit_box(), hits.iter().copied());
        }

        if remaining.is_empty() {
            log::debug!(
                "backed off {steps} steps along {axis:?} to {:?} after hitting {hits:?}",
                sprite.position()
            );
        } else {
            log::warn!(
                "gave up backing off along {axis:?} at {:?}, still hitting {remaining:?}",
                sprite.position()
            );
            report.exhausted = true;
        }
        hits
    }
}

/// Per-axis signs pointing away from every wall in `hits`, or `None` if two of them press from
/// opposite sides of the same axis or one shares the sprite's center.
fn push_direction(
    position: Position,
    hits: &[ObstacleId],
    environment: &Environment,
) -> Option<Position> {
    let mut x_sign: Option<f64> = None;
    let mut y_sign: Option<f64> = None;

    for obstacle in hits.iter().filter_map(|id| environment.get(*id)) {
        let offset = position - obstacle.position();
        let (sign, component) = if offset.x().abs() >= offset.y().abs() {
            (&mut x_sign, offset.x())
        } else {
            (&mut y_sign, offset.y())
        };
        if component == 0.0 {
            return None;
        }
        if let Some(s) = *sign {
            if s != component.signum() {
                return None;
            }
        }
        *sign = Some(component.signum());
    }

    Some(Position::new(x_sign.unwrap_or(0.0), y_sign.unwrap_or(0.0)))
}
