//! Constants of the navigation task.
use serde::{Deserialize, Serialize};

/// Distances, rewards and counts of the navigation-goal task.
///
/// The default value holds the constants the environment was designed with;
/// tests and experiments may vary them through serde or struct update syntax.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationParams {
    /// Radius of the goal.
    pub goal_threshold: f64,

    /// Radius of the robot.
    pub collision_threshold: f64,

    /// Radius of an obstacle.
    pub obstacle_radius: f64,

    /// Minimum distance between the spawned robot and the goal.
    pub minimum_distance_robot_goal: f64,

    /// Intended minimum distance between obstacles. Not applied by the
    /// scene generator.
    pub minimum_distance_obstacle: f64,

    /// Minimum distance of an obstacle from the spawned robot and the goal.
    pub minimum_distance: f64,

    /// Obstacles closer than this are reported in the observation; it is also
    /// the clearance kept, minus 0.1, while going around an obstacle.
    pub minimum_safe_distance: f64,

    /// Number of obstacles in an episode.
    pub n_obstacles: usize,

    /// Reward of a collision.
    pub collision_reward: f32,

    /// Reward of reaching the goal.
    pub goal_reward: f32,

    /// Reward of any other transition.
    pub transition_reward: f32,

    /// Length of a single forward step.
    pub shift: f64,

    /// Angle, in degrees, an obstacle has to be off the goal bearing before
    /// the robot leaves it behind.
    pub clearance_angle: f64,

    /// Maximum number of samples drawn by each rejection sampling loop.
    pub max_sampling_attempts: usize,
}

impl Default for NavigationParams {
    fn default() -> Self {
        Self {
            goal_threshold: 0.4,
            collision_threshold: 0.4,
            obstacle_radius: 0.8,
            minimum_distance_robot_goal: 12.0,
            minimum_distance_obstacle: 4.0,
            minimum_distance: 2.5,
            minimum_safe_distance: 1.5,
            n_obstacles: 3,
            collision_reward: -1.0,
            goal_reward: 1.0,
            transition_reward: 0.5,
            shift: 0.1,
            clearance_angle: 1.7f64.to_degrees(),
            max_sampling_attempts: 10_000,
        }
    }
}

impl NavigationParams {
    /// Distance below which the robot collides with an obstacle.
    pub fn collision_distance(&self) -> f64 {
        self.obstacle_radius + self.collision_threshold
    }

    /// Distance below which the goal is reached.
    pub fn goal_distance(&self) -> f64 {
        self.goal_threshold + self.collision_threshold
    }
}

#[cfg(test)]
mod tests {
    use super::NavigationParams;

    #[test]
    fn test_derived_distances() {
        let params = NavigationParams::default();
        assert!((params.collision_distance() - 1.2).abs() < 1e-12);
        assert!((params.goal_distance() - 0.8).abs() < 1e-12);
        assert!((params.clearance_angle - 97.40282517).abs() < 1e-6);
    }

    #[test]
    fn test_partial_yaml() {
        let params: NavigationParams = serde_yaml::from_str("n_obstacles: 5\nshift: 0.2\n").unwrap();
        assert_eq!(params.n_obstacles, 5);
        assert_eq!(params.shift, 0.2);
        assert_eq!(params.goal_reward, 1.0);
    }
}
