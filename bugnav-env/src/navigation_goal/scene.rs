//! Random layout of an episode.
use crate::{
    error::{BugNavError, Result},
    geometry::{Line, Point, Pose},
    params::NavigationParams,
    track::Track,
};
use rand::Rng;

/// Goal, robot and obstacles at the start of an episode.
#[derive(Clone, Debug, PartialEq)]
pub struct Scene {
    /// The point to reach.
    pub goal: Point,

    /// Initial pose of the robot, facing the goal for generated scenes.
    pub pose: Pose,

    /// Segment from the initial position of the robot to the goal.
    pub goal_direction: Line,

    /// Bearing of the goal from the initial position.
    pub initial_yaw: f64,

    /// Centers of the obstacles.
    pub circular_obstacles: Vec<Point>,
}

impl Scene {
    /// Constructs a scene from explicit positions, keeping the heading of `pose`.
    ///
    /// # Errors
    ///
    /// Fails if the robot starts on the goal.
    pub fn new(pose: Pose, goal: Point, circular_obstacles: Vec<Point>) -> Result<Self> {
        let goal_direction = Line::new(pose.position, goal)?;
        let initial_yaw = Pose::new(pose.position, 0.0).calculate_angle_difference(&goal);
        Ok(Self {
            goal,
            pose,
            goal_direction,
            initial_yaw,
            circular_obstacles,
        })
    }

    /// Draws a scene on a track.
    ///
    /// The goal and the robot are drawn from the spawn areas, the robot farther
    /// than `minimum_distance_robot_goal` from the goal. The robot is turned to
    /// face the goal. Obstacles are drawn on the segment from the robot to the
    /// goal, farther than `minimum_distance` from both; their mutual distance
    /// is not constrained.
    ///
    /// # Errors
    ///
    /// Fails with [`BugNavError::SamplingExhausted`] when a placement is not
    /// found within `max_sampling_attempts` samples.
    pub fn generate<R: Rng + ?Sized>(
        track: &Track,
        params: &NavigationParams,
        rng: &mut R,
    ) -> Result<Self> {
        let goal = track.sample_spawn_point(rng);
        let position = sample_robot_position(track, params, &goal, rng)?;

        // The direction is captured before the robot turns.
        let goal_direction = Line::new(position, goal)?;
        let mut pose = Pose::new(position, 0.0);
        let initial_yaw = pose.calculate_angle_difference(&goal);
        pose.rotate(initial_yaw);

        let circular_obstacles = (0..params.n_obstacles)
            .map(|_| sample_obstacle(&goal_direction, params, &position, &goal, rng))
            .collect::<Result<Vec<_>>>()?;

        log::debug!(
            "Scene: goal = {:?}, pose = {:?}, obstacles = {:?}",
            goal,
            pose,
            circular_obstacles
        );

        Ok(Self {
            goal,
            pose,
            goal_direction,
            initial_yaw,
            circular_obstacles,
        })
    }
}

fn sample_robot_position<R: Rng + ?Sized>(
    track: &Track,
    params: &NavigationParams,
    goal: &Point,
    rng: &mut R,
) -> Result<Point> {
    for _ in 0..params.max_sampling_attempts {
        let position = track.sample_spawn_point(rng);
        if position.calculate_distance(goal) > params.minimum_distance_robot_goal {
            return Ok(position);
        }
    }

    Err(BugNavError::SamplingExhausted {
        what: "the robot position",
        attempts: params.max_sampling_attempts,
    })
}

fn sample_obstacle<R: Rng + ?Sized>(
    goal_direction: &Line,
    params: &NavigationParams,
    robot: &Point,
    goal: &Point,
    rng: &mut R,
) -> Result<Point> {
    for _ in 0..params.max_sampling_attempts {
        let center = goal_direction.get_point(rng, params.max_sampling_attempts)?;
        if center.calculate_distance(robot) > params.minimum_distance
            && center.calculate_distance(goal) > params.minimum_distance
        {
            return Ok(center);
        }
    }

    Err(BugNavError::SamplingExhausted {
        what: "an obstacle",
        attempts: params.max_sampling_attempts,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::track::SpawnArea;
    use rand::{rngs::StdRng, SeedableRng};

    #[test]
    fn test_spawn_invariants() -> Result<()> {
        let track = Track::get(1)?;
        let params = NavigationParams::default();

        for seed in 0..200 {
            let mut rng = StdRng::seed_from_u64(seed);
            let scene = Scene::generate(track, &params, &mut rng)?;
            let start = scene.pose.position;

            assert!(start.calculate_distance(&scene.goal) > 12.0);
            assert!(track.spawn_areas()[0].contains(&start));
            assert!(track.spawn_areas()[0].contains(&scene.goal));
            assert_eq!(scene.circular_obstacles.len(), 3);
            for obstacle in scene.circular_obstacles.iter() {
                assert!(obstacle.calculate_distance(&start) > 2.5);
                assert!(obstacle.calculate_distance(&scene.goal) > 2.5);
                assert!(scene.goal_direction.contains(obstacle));
            }

            assert_eq!(scene.goal_direction.start(), start);
            assert_eq!(scene.goal_direction.end(), scene.goal);
            assert!(scene.pose.calculate_angle_difference(&scene.goal).abs() < 1e-9);
            assert!((scene.pose.yaw - scene.initial_yaw).abs() < 1e-9);
        }
        Ok(())
    }

    #[test]
    fn test_same_seed_same_scene() -> Result<()> {
        let track = Track::get(1)?;
        let params = NavigationParams::default();
        let a = Scene::generate(track, &params, &mut StdRng::seed_from_u64(42))?;
        let b = Scene::generate(track, &params, &mut StdRng::seed_from_u64(42))?;
        let c = Scene::generate(track, &params, &mut StdRng::seed_from_u64(43))?;
        assert_eq!(a, b);
        assert_ne!(a, c);
        Ok(())
    }

    #[test]
    fn test_obstacle_count_follows_params() -> Result<()> {
        let params = NavigationParams {
            n_obstacles: 5,
            ..NavigationParams::default()
        };
        let scene = Scene::generate(Track::get(1)?, &params, &mut StdRng::seed_from_u64(1))?;
        assert_eq!(scene.circular_obstacles.len(), 5);
        Ok(())
    }

    #[test]
    fn test_unreachable_spacing_is_reported() -> Result<()> {
        // The spawn area is too small to separate robot and goal by 12 units.
        let track = Track::from_corners(
            5,
            &[
                Point::new(0.0, 0.0),
                Point::new(0.0, 5.0),
                Point::new(5.0, 5.0),
                Point::new(5.0, 0.0),
            ],
            vec![SpawnArea::new((1.0, 4.0), (1.0, 4.0))],
        )?;
        let params = NavigationParams {
            max_sampling_attempts: 50,
            ..NavigationParams::default()
        };

        match Scene::generate(&track, &params, &mut StdRng::seed_from_u64(0)) {
            Err(BugNavError::SamplingExhausted { what, attempts }) => {
                assert_eq!(what, "the robot position");
                assert_eq!(attempts, 50);
            }
            other => panic!("unexpected {:?}", other),
        }
        Ok(())
    }

    #[test]
    fn test_explicit_scene() -> Result<()> {
        let pose = Pose::new(Point::new(0.0, 0.0), 30.0);
        let scene = Scene::new(pose, Point::new(5.0, 5.0), vec![])?;
        assert_eq!(scene.pose.yaw, 30.0);
        assert!((scene.initial_yaw - 45.0).abs() < 1e-9);

        assert!(Scene::new(pose, Point::new(0.0, 0.0), vec![]).is_err());
        Ok(())
    }
}
