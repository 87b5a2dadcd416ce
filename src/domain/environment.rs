//! Environment with walls.

use super::{HasCollision, HitBox, Position, Sprite};

/// Stable handle of a wall inside an [`Environment`].
#[derive(Clone, Copy, Debug, Eq, PartialEq, Ord, PartialOrd, Hash)]
pub struct ObstacleId(usize);

impl ObstacleId {
    pub fn index(self) -> usize {
        self.0
    }
}

/// Ordered set of static walls. Order only fixes the order of reported hits.
#[derive(Clone, Debug, Default, PartialEq, PartialOrd)]
pub struct Environment {
    obstacles: Vec<Sprite>,
}

impl Environment {
    pub fn new(obstacles: Vec<Sprite>) -> Self {
        Self { obstacles }
    }

    pub fn add(&mut self, obstacle: Sprite) -> ObstacleId {
        self.obstacles.push(obstacle);
        ObstacleId(self.obstacles.len() - 1)
    }

    pub fn ids(&self) -> impl Iterator<Item = ObstacleId> {
        (0..self.obstacles.len()).map(ObstacleId)
    }

    pub fn get(&self, id: ObstacleId) -> Option<&Sprite> {
        self.obstacles.get(id.0)
    }

    pub fn len(&self) -> usize {
        self.obstacles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.obstacles.is_empty()
    }

    /// Walls are only moved by the caller, between engine steps.
    pub fn set_obstacle_position(&mut self, id: ObstacleId, position: Position) {
        if let Some(obstacle) = self.obstacles.get_mut(id.0) {
            obstacle.set_position(position)
        }
    }

    pub fn has_collision(&self, object: &dyn HasCollision) -> bool {
        let hit_box = object.hit_box();
        self.obstacles.iter().any(|o| o.hit_box().overlaps(&hit_box))
    }

    /// Walls overlapping `object`, in index order.
    pub fn collisions(&self, object: &dyn HasCollision) -> Vec<ObstacleId> {
        self.overlapping(&object.hit_box(), self.ids())
    }

    /// The subset of `candidates` overlapping `hit_box`, in the order given.
    pub(crate) fn overlapping(
        &self,
        hit_box: &HitBox,
        candidates: impl IntoIterator<Item = ObstacleId>,
    ) -> Vec<ObstacleId> {
        candidates
            .into_iter()
            .filter(|id| {
                self.get(*id)
                    .is_some_and(|o| o.hit_box().overlaps(hit_box))
            })
            .collect()
    }

    /// Position of the first wall that is not finite, if any.
    pub(crate) fn first_non_finite(&self) -> Option<(ObstacleId, Position)> {
        self.ids()
            .zip(&self.obstacles)
            .find(|(_, o)| !o.position().is_finite() || !o.angle().is_finite())
            .map(|(id, o)| (id, o.position()))
    }
}

impl FromIterator<Sprite> for Environment {
    fn from_iter<T: IntoIterator<Item = Sprite>>(iter: T) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rstest::rstest;

    use super::super::Angle;
    use super::*;
    use crate::tests::square;

    fn walls() -> (Environment, ObstacleId, ObstacleId, ObstacleId) {
        let mut environment = Environment::default();
        let right = environment.add(square(10.0, 0.0));
        let above = environment.add(square(0.0, 10.0));
        let far = environment.add(square(250.0, 250.0));
        (environment, right, above, far)
    }

    #[test]
    fn test_environment_ids_are_stable() {
        let (environment, right, above, far) = walls();
        assert_eq!(environment.len(), 3);
        assert_eq!(
            environment.ids().collect::<Vec<_>>(),
            vec![right, above, far]
        );
        assert_eq!(far.index(), 2);
        assert_eq!(
            environment.get(above).map(Sprite::position),
            Some(Position::new(0.0, 10.0))
        );
    }

    #[rstest]
    #[case::resting_between(Position::new(0.0, 0.0), 0.0, vec![])]
    #[case::into_right(Position::new(1.0, 0.0), 0.0, vec![0])]
    #[case::into_corner(Position::new(1.0, 1.0), 0.0, vec![0, 1])]
    #[case::rotated(Position::new(0.0, 0.0), 1.0, vec![0, 1])]
    #[case::far_away(Position::new(250.0, 259.0), 0.0, vec![2])]
    fn test_environment_collisions(
        #[case] position: Position,
        #[case] degrees: f64,
        #[case] expected: Vec<usize>,
    ) {
        let (environment, ..) = walls();
        let mut sprite = square(position.x(), position.y());
        sprite.set_angle(Angle::from_deg(degrees));
        assert_eq!(
            environment
                .collisions(&sprite)
                .into_iter()
                .map(ObstacleId::index)
                .collect::<Vec<_>>(),
            expected
        );
        assert_eq!(environment.has_collision(&sprite), !expected.is_empty());
    }

    #[test]
    fn test_environment_set_obstacle_position() {
        let (mut environment, right, ..) = walls();
        let sprite = square(0.0, 0.0);
        environment.set_obstacle_position(right, Position::new(9.0, 0.0));
        assert_eq!(environment.collisions(&sprite), vec![right]);
        environment.set_obstacle_position(ObstacleId(17), Position::new(0.0, 0.0));
        assert_eq!(environment.len(), 3);
    }

    #[test]
    fn test_environment_first_non_finite() {
        let (mut environment, _, above, _) = walls();
        assert_eq!(environment.first_non_finite(), None);
        environment.set_obstacle_position(above, Position::new(0.0, f64::NAN));
        assert_eq!(environment.first_non_finite().map(|(id, _)| id), Some(above));
    }
}
