//! The navigation-goal task driven by a bug algorithm.
//!
//! The robot starts facing the goal with obstacles scattered on the segment
//! between them. At each step it either advances along its heading
//! ([`BugNavAct::TowardGoal`]) or goes around the obstacle reported by the
//! observation ([`BugNavAct::AroundObstacle`]). Going around means moving
//! tangent to the obstacle, always turning the same way, at a fixed clearance;
//! the robot leaves the obstacle once it faces the goal again with the
//! obstacle well behind its side.
mod scene;
pub use scene::Scene;

use crate::{
    act::BugNavAct,
    error::{BugNavError, Result},
    geometry::{Line, Point, Pose},
    obs::BugNavObs,
    params::NavigationParams,
    render::{Canvas, Color},
    scenario::Scenario,
    track::Track,
};
use bugnav_core::{
    record::{Record, RecordValue},
    Info,
};
use rand::rngs::StdRng;
use serde::{Deserialize, Serialize};

/// Result of evaluating the current state.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Outcome {
    /// The robot hit an obstacle.
    Collision,

    /// The robot reached the goal.
    GoalReached,

    /// The episode goes on.
    Proceed,
}

impl Outcome {
    /// Human readable result.
    pub fn message(&self) -> &'static str {
        match self {
            Outcome::Collision => "Collision with obstacle!",
            Outcome::GoalReached => "Goal reached!!!",
            Outcome::Proceed => "bug-robot proceed",
        }
    }

    /// Whether the episode ends.
    pub fn is_terminal(&self) -> bool {
        !matches!(self, Outcome::Proceed)
    }
}

/// Information of a step of [`NavigationGoal`].
#[derive(Clone, Debug, PartialEq)]
pub struct NavigationInfo {
    /// The outcome of the state.
    pub outcome: Outcome,

    /// [`Outcome::message`] of the outcome.
    pub result: &'static str,
}

impl Info for NavigationInfo {}

impl From<Outcome> for NavigationInfo {
    fn from(outcome: Outcome) -> Self {
        Self {
            outcome,
            result: outcome.message(),
        }
    }
}

/// Configuration of [`NavigationGoal`].
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct NavigationGoalConfig {
    /// Identifier of the registered [`Track`].
    pub track_id: u32,

    /// Constants of the task.
    pub params: NavigationParams,
}

impl Default for NavigationGoalConfig {
    fn default() -> Self {
        Self {
            track_id: 1,
            params: NavigationParams::default(),
        }
    }
}

impl NavigationGoalConfig {
    /// Sets the track.
    pub fn track_id(mut self, track_id: u32) -> Self {
        self.track_id = track_id;
        self
    }

    /// Sets the constants of the task.
    pub fn params(mut self, params: NavigationParams) -> Self {
        self.params = params;
        self
    }
}

/// The navigation-goal task.
#[derive(Clone, Debug)]
pub struct NavigationGoal {
    params: NavigationParams,
    track: Track,
    pose: Pose,
    goal: Point,
    circular_obstacles: Vec<Point>,
    goal_direction: Line,
    distance_from_goal: f64,
    previous_distance_from_goal: f64,
    last_action_performed: BugNavAct,
    nearer_obstacle_index: i64,
    initial_yaw: f64,
    circumnavigation_terminated: bool,
}

impl NavigationGoal {
    /// Constructs the task with an explicit first episode.
    pub fn with_scene(track: Track, params: NavigationParams, scene: Scene) -> Self {
        let distance_from_goal = scene.pose.position.calculate_distance(&scene.goal);
        Self {
            params,
            track,
            pose: scene.pose,
            goal: scene.goal,
            circular_obstacles: scene.circular_obstacles,
            goal_direction: scene.goal_direction,
            distance_from_goal,
            previous_distance_from_goal: distance_from_goal,
            last_action_performed: BugNavAct::TowardGoal,
            nearer_obstacle_index: -1,
            initial_yaw: scene.initial_yaw,
            circumnavigation_terminated: true,
        }
    }

    /// Replaces the episode with `scene`.
    pub fn load_scene(&mut self, scene: Scene) {
        let distance_from_goal = scene.pose.position.calculate_distance(&scene.goal);
        self.pose = scene.pose;
        self.goal = scene.goal;
        self.circular_obstacles = scene.circular_obstacles;
        self.goal_direction = scene.goal_direction;
        self.initial_yaw = scene.initial_yaw;
        self.distance_from_goal = distance_from_goal;
        self.previous_distance_from_goal = distance_from_goal;
        self.last_action_performed = BugNavAct::TowardGoal;
        self.nearer_obstacle_index = -1;
        self.circumnavigation_terminated = true;
    }

    /// Moves one step around the obstacle to overcome.
    ///
    /// The robot faces the obstacle, turns 90 degrees clockwise, steps forward,
    /// faces the obstacle again and moves along that line so that its distance
    /// from the obstacle center becomes `minimum_safe_distance - 0.1`.
    ///
    /// # Errors
    ///
    /// Returns [`BugNavError::NoObstacle`] if the arena has no obstacle.
    pub fn move_tangent_to_obstacle(&mut self) -> Result<()> {
        let obstacle = self.obstacle_to_overcome()?;
        self.move_tangent_to(&obstacle);
        Ok(())
    }

    fn move_tangent_to(&mut self, obstacle: &Point) {
        let yaw = self.pose.calculate_angle_difference(obstacle);
        self.pose.rotate(yaw);
        self.pose.rotate(90.0);
        self.pose.shift(self.params.shift, 0.0);
        let yaw = self.pose.calculate_angle_difference(obstacle);
        self.pose.rotate(yaw);
        let distance_after_shift = self.pose.position.calculate_distance(obstacle);
        let shift_closer = distance_after_shift - self.params.minimum_safe_distance + 0.1;
        self.pose.shift(shift_closer, 0.0);
        self.circumnavigation_terminated = false;
    }

    /// The obstacle at the index stored by the last observation.
    ///
    /// The index counts from the end when negative, so a clear observation
    /// (-1) designates the last obstacle.
    fn obstacle_to_overcome(&self) -> Result<Point> {
        let n = self.circular_obstacles.len() as i64;
        let ix = if self.nearer_obstacle_index < 0 {
            log::warn!("No obstacle is too close, going around the last one");
            n + self.nearer_obstacle_index
        } else {
            self.nearer_obstacle_index
        };

        if ix < 0 || ix >= n {
            return Err(BugNavError::NoObstacle);
        }
        Ok(self.circular_obstacles[ix as usize])
    }

    /// Finds the obstacle closer than `minimum_safe_distance` with the smallest
    /// distance, the first one on ties, and stores its index.
    ///
    /// Returns the index, or -1 if no obstacle is that close.
    pub fn get_observation(&mut self) -> i64 {
        let mut index = -1;
        let mut min_obstacle_distance = self.params.minimum_safe_distance;
        for (i, obstacle) in self.circular_obstacles.iter().enumerate() {
            let distance = self.pose.position.calculate_distance(obstacle);
            if distance < min_obstacle_distance {
                min_obstacle_distance = distance;
                index = i as i64;
            }
        }
        self.nearer_obstacle_index = index;
        index
    }

    /// Whether the robot overlaps an obstacle.
    pub fn collision_occurred(&self) -> bool {
        let collision_distance = self.params.collision_distance();
        self.circular_obstacles
            .iter()
            .any(|obstacle| self.pose.position.calculate_distance(obstacle) < collision_distance)
    }

    /// Whether the robot overlaps the goal.
    pub fn goal_reached(&self) -> bool {
        self.distance_from_goal < self.params.goal_distance()
    }

    /// Evaluates the state; a collision takes precedence over the goal.
    pub fn outcome(&self) -> Outcome {
        if self.collision_occurred() {
            Outcome::Collision
        } else if self.goal_reached() {
            Outcome::GoalReached
        } else {
            Outcome::Proceed
        }
    }

    /// Current pose of the robot.
    pub fn pose(&self) -> &Pose {
        &self.pose
    }

    /// The goal.
    pub fn goal(&self) -> &Point {
        &self.goal
    }

    /// Centers of the obstacles.
    pub fn circular_obstacles(&self) -> &[Point] {
        &self.circular_obstacles
    }

    /// Segment from the initial position to the goal.
    pub fn goal_direction(&self) -> &Line {
        &self.goal_direction
    }

    /// Distance between the robot and the goal.
    pub fn distance_from_goal(&self) -> f64 {
        self.distance_from_goal
    }

    /// Distance between the robot and the goal before the last step.
    pub fn previous_distance_from_goal(&self) -> f64 {
        self.previous_distance_from_goal
    }

    /// The last action applied.
    pub fn last_action_performed(&self) -> BugNavAct {
        self.last_action_performed
    }

    /// Index stored by the last observation, -1 for none.
    pub fn nearer_obstacle_index(&self) -> i64 {
        self.nearer_obstacle_index
    }

    /// Bearing of the goal at the start of the episode.
    pub fn initial_yaw(&self) -> f64 {
        self.initial_yaw
    }

    /// Whether the robot is not going around an obstacle.
    pub fn circumnavigation_terminated(&self) -> bool {
        self.circumnavigation_terminated
    }

    /// Constants of the task.
    pub fn params(&self) -> &NavigationParams {
        &self.params
    }

    /// The arena.
    pub fn track(&self) -> &Track {
        &self.track
    }
}

impl Scenario for NavigationGoal {
    type Config = NavigationGoalConfig;
    type Obs = BugNavObs;
    type Act = BugNavAct;
    type Info = NavigationInfo;

    fn build(config: &Self::Config, rng: &mut StdRng) -> Result<Self> {
        let track = Track::get(config.track_id)?.clone();
        let scene = Scene::generate(&track, &config.params, rng)?;
        Ok(Self::with_scene(track, config.params.clone(), scene))
    }

    fn init_episode(&mut self, rng: &mut StdRng) -> Result<()> {
        let scene = Scene::generate(&self.track, &self.params, rng)?;
        self.load_scene(scene);
        Ok(())
    }

    fn perform_action(&mut self, act: &Self::Act) -> Result<()> {
        match act {
            BugNavAct::TowardGoal => self.pose.shift(self.params.shift, 0.0),
            BugNavAct::AroundObstacle => {
                let obstacle = self.obstacle_to_overcome()?;
                if self.last_action_performed == BugNavAct::TowardGoal {
                    self.move_tangent_to(&obstacle);
                } else {
                    // Check whether facing the goal leaves the obstacle behind.
                    let mut facing_goal = self.pose;
                    let goal_yaw = self.pose.calculate_angle_difference(&self.goal);
                    facing_goal.rotate(goal_yaw);
                    let angle_to_face_obstacle =
                        facing_goal.calculate_angle_difference(&obstacle).abs();

                    if facing_goal.is_closer_yaw(self.initial_yaw)
                        && angle_to_face_obstacle >= self.params.clearance_angle
                    {
                        self.pose.rotate(goal_yaw);
                        self.pose.shift(self.params.shift, 0.0);
                        self.circumnavigation_terminated = true;
                    } else {
                        self.move_tangent_to(&obstacle);
                    }
                }
            }
        }

        self.last_action_performed = *act;
        self.previous_distance_from_goal = self.distance_from_goal;
        self.distance_from_goal = self.pose.position.calculate_distance(&self.goal);
        log::trace!(
            "{:?}: pose = {:?}, distance from goal = {:.3}",
            act,
            self.pose,
            self.distance_from_goal
        );
        Ok(())
    }

    fn observe(&mut self) -> Self::Obs {
        BugNavObs(self.get_observation())
    }

    fn reward(&self) -> f32 {
        match self.outcome() {
            Outcome::Collision => self.params.collision_reward,
            Outcome::GoalReached => self.params.goal_reward,
            Outcome::Proceed => self.params.transition_reward,
        }
    }

    fn is_terminated(&self) -> bool {
        self.outcome().is_terminal()
    }

    fn is_truncated(&self) -> bool {
        false
    }

    fn describe(&self) -> Self::Info {
        self.outcome().into()
    }

    fn record(&self) -> Record {
        let position = self.pose.position;
        Record::from_slice(&[
            ("result", RecordValue::String(self.outcome().message().to_string())),
            ("distance_from_goal", RecordValue::Scalar(self.distance_from_goal as f32)),
            ("nearer_obstacle_index", RecordValue::Scalar(self.nearer_obstacle_index as f32)),
            (
                "circumnavigation_terminated",
                RecordValue::Scalar(if self.circumnavigation_terminated { 1.0 } else { 0.0 }),
            ),
            ("position", RecordValue::Array1(vec![position.x as f32, position.y as f32])),
            ("yaw", RecordValue::Scalar(self.pose.yaw as f32)),
        ])
    }

    fn draw(&self, canvas: &mut dyn Canvas) {
        canvas.fill(Color::White);

        for wall in self.track.walls() {
            canvas.line(wall.start(), wall.end(), Color::Black);
        }

        canvas.line(
            self.goal_direction.start(),
            self.goal_direction.end(),
            Color::Yellow,
        );

        for obstacle in self.circular_obstacles.iter() {
            canvas.circle(*obstacle, self.params.obstacle_radius, Color::Blue);
        }

        canvas.circle(self.pose.position, self.params.collision_threshold, Color::Green);
        canvas.circle(self.goal, self.params.goal_threshold, Color::Red);
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const FAR: [Point; 2] = [Point::new(40.0, -40.0), Point::new(-40.0, 40.0)];

    fn task(pose: Pose, goal: Point, obstacles: Vec<Point>) -> NavigationGoal {
        let scene = Scene::new(pose, goal, obstacles).unwrap();
        let track = Track::get(1).unwrap().clone();
        NavigationGoal::with_scene(track, NavigationParams::default(), scene)
    }

    fn origin_task(obstacles: Vec<Point>) -> NavigationGoal {
        task(
            Pose::new(Point::new(0.0, 0.0), 0.0),
            Point::new(0.0, 15.0),
            obstacles,
        )
    }

    #[test]
    fn test_goal_reached_by_advancing() -> Result<()> {
        let mut task = origin_task(vec![FAR[0], FAR[1], Point::new(30.0, 30.0)]);
        assert_eq!(task.observe(), BugNavObs::CLEAR);

        let mut n_steps = 0;
        loop {
            let before = task.distance_from_goal();
            task.perform_action(&BugNavAct::TowardGoal)?;
            assert_eq!(task.observe(), BugNavObs::CLEAR);
            n_steps += 1;

            assert!(task.distance_from_goal() < before);
            assert_eq!(task.previous_distance_from_goal(), before);

            if task.is_terminated() {
                break;
            }
            assert_eq!(task.reward(), 0.5);
            assert_eq!(task.describe().result, "bug-robot proceed");
            assert!(n_steps < 200);
        }

        assert!(task.distance_from_goal() < 0.8);
        assert!(task.previous_distance_from_goal() >= 0.8);
        assert_eq!(task.reward(), 1.0);
        assert_eq!(task.describe().result, "Goal reached!!!");
        assert_eq!(task.describe().outcome, Outcome::GoalReached);
        assert!(!task.is_truncated());
        Ok(())
    }

    #[test]
    fn test_collision_at_unit_distance() {
        let task = origin_task(vec![Point::new(0.0, 1.0), FAR[0], FAR[1]]);
        assert!(task.collision_occurred());
        assert!(task.is_terminated());
        assert_eq!(task.reward(), -1.0);
        assert_eq!(task.describe().result, "Collision with obstacle!");

        let task = origin_task(vec![Point::new(0.0, 1.25), FAR[0], FAR[1]]);
        assert!(!task.collision_occurred());
    }

    #[test]
    fn test_collision_takes_precedence_over_goal() {
        let task = task(
            Pose::new(Point::new(0.0, 0.0), 0.0),
            Point::new(0.0, 0.5),
            vec![Point::new(1.0, 0.0), FAR[0], FAR[1]],
        );
        assert!(task.goal_reached());
        assert!(task.collision_occurred());
        assert_eq!(task.outcome(), Outcome::Collision);
        assert_eq!(task.reward(), -1.0);
        assert_eq!(task.describe().result, "Collision with obstacle!");
    }

    #[test]
    fn test_observation_picks_first_strictly_closest() {
        // Obstacles 1 and 2 tie at 1.3, obstacle 0 is out of range.
        let mut task = origin_task(vec![
            Point::new(0.0, 1.6),
            Point::new(1.3, 0.0),
            Point::new(-1.3, 0.0),
        ]);
        assert_eq!(task.get_observation(), 1);
        assert_eq!(task.nearer_obstacle_index(), 1);

        let mut task = origin_task(vec![
            Point::new(0.0, 1.45),
            Point::new(1.4, 0.0),
            Point::new(0.0, -1.3),
        ]);
        assert_eq!(task.get_observation(), 2);

        let mut task = origin_task(vec![Point::new(0.0, 1.5), FAR[0], FAR[1]]);
        assert_eq!(task.get_observation(), -1);
        assert_eq!(task.observe().obstacle_index(), None);
    }

    #[test]
    fn test_tangent_move_keeps_clearance() -> Result<()> {
        let obstacle = Point::new(0.0, 1.3);
        let mut task = origin_task(vec![obstacle, FAR[0], FAR[1]]);
        assert_eq!(task.observe(), BugNavObs(0));
        assert_eq!(task.last_action_performed(), BugNavAct::TowardGoal);

        task.perform_action(&BugNavAct::AroundObstacle)?;

        let distance = task.pose().position.calculate_distance(&obstacle);
        assert!((distance - 1.4).abs() < 1e-9);
        // The robot ended up on the right-hand side of the obstacle.
        assert!(task.pose().position.x > 0.0);
        assert!(task.pose().calculate_angle_difference(&obstacle).abs() < 1e-9);
        assert!(!task.circumnavigation_terminated());
        assert_eq!(task.last_action_performed(), BugNavAct::AroundObstacle);
        Ok(())
    }

    #[test]
    fn test_move_tangent_to_obstacle_from_any_heading() {
        let obstacle = Point::new(5.0, 5.0);
        let mut task = task(
            Pose::new(Point::new(4.0, 4.5), -120.0),
            Point::new(5.0, 18.0),
            vec![obstacle, FAR[0], FAR[1]],
        );
        task.get_observation();
        task.move_tangent_to_obstacle().unwrap();
        let distance = task.pose().position.calculate_distance(&obstacle);
        assert!((distance - 1.4).abs() < 1e-9);
    }

    #[test]
    fn test_circumnavigation_leaves_the_obstacle() -> Result<()> {
        let obstacle = Point::new(0.0, 1.3);
        let mut task = origin_task(vec![obstacle, FAR[0], FAR[1]]);
        task.observe();

        let mut n_steps = 0;
        loop {
            task.perform_action(&BugNavAct::AroundObstacle)?;
            task.observe();
            n_steps += 1;

            assert!(!task.collision_occurred());
            if task.circumnavigation_terminated() {
                break;
            }
            let distance = task.pose().position.calculate_distance(&obstacle);
            assert!((distance - 1.4).abs() < 1e-9);
            assert!(n_steps < 100, "the robot kept circling");
        }

        // Went around the right-hand side and now faces the goal.
        assert!(n_steps > 1);
        assert!(task.pose().position.x > 0.0);
        assert!(task.pose().position.y > obstacle.y);
        assert!(task.pose().calculate_angle_difference(task.goal()).abs() < 1e-9);
        assert!(task.pose().is_closer_yaw(task.initial_yaw()));

        // From here on advancing reaches the goal.
        while !task.is_terminated() {
            task.perform_action(&BugNavAct::TowardGoal)?;
            task.observe();
        }
        assert_eq!(task.outcome(), Outcome::GoalReached);
        Ok(())
    }

    #[test]
    fn test_avoiding_without_reported_obstacle_uses_last() -> Result<()> {
        let last = FAR[1];
        let mut task = origin_task(vec![FAR[0], Point::new(0.0, 3.0), last]);
        assert_eq!(task.get_observation(), -1);
        task.perform_action(&BugNavAct::AroundObstacle)?;

        let distance = task.pose().position.calculate_distance(&last);
        assert!((distance - 1.4).abs() < 1e-9);
        assert!(!task.circumnavigation_terminated());
        Ok(())
    }

    #[test]
    fn test_avoiding_without_obstacles_fails() {
        let mut task = origin_task(vec![]);
        assert!(matches!(
            task.perform_action(&BugNavAct::AroundObstacle),
            Err(BugNavError::NoObstacle)
        ));
        assert!(matches!(
            task.move_tangent_to_obstacle(),
            Err(BugNavError::NoObstacle)
        ));
        assert_eq!(task.pose().position, Point::new(0.0, 0.0));
        assert_eq!(task.last_action_performed(), BugNavAct::TowardGoal);
    }

    /// A task in the middle of going around an obstacle seen at `angle`
    /// degrees off the goal bearing, the goal lying straight ahead along +y.
    fn circling_task(angle: f64, initial_yaw: f64) -> NavigationGoal {
        let (sin, cos) = angle.to_radians().sin_cos();
        let obstacle = Point::new(1.4 * sin, 1.4 * cos);
        let mut task = task(
            Pose::new(Point::new(0.0, 0.0), -90.0),
            Point::new(0.0, 15.0),
            vec![obstacle, FAR[0], FAR[1]],
        );
        task.initial_yaw = initial_yaw;
        task.last_action_performed = BugNavAct::AroundObstacle;
        task.circumnavigation_terminated = false;
        assert_eq!(task.get_observation(), 0);
        task
    }

    fn leaves_obstacle(mut task: NavigationGoal) -> Result<bool> {
        let obstacle = task.circular_obstacles()[0];
        task.perform_action(&BugNavAct::AroundObstacle)?;

        if task.circumnavigation_terminated() {
            // Turned to the goal and advanced one step.
            assert!(task.pose().yaw.abs() < 1e-9);
            assert!((task.pose().position.y - 0.1).abs() < 1e-9);
            assert!(task.pose().position.x.abs() < 1e-9);
            Ok(true)
        } else {
            let distance = task.pose().position.calculate_distance(&obstacle);
            assert!((distance - 1.4).abs() < 1e-9);
            Ok(false)
        }
    }

    #[test]
    fn test_leaving_requires_the_clearance_angle() -> Result<()> {
        let threshold = NavigationParams::default().clearance_angle;
        assert!(leaves_obstacle(circling_task(threshold + 0.01, 0.0))?);
        assert!(leaves_obstacle(circling_task(-threshold - 0.01, 0.0))?);
        assert!(!leaves_obstacle(circling_task(threshold - 0.01, 0.0))?);
        assert!(!leaves_obstacle(circling_task(-threshold + 0.01, 0.0))?);
        assert!(!leaves_obstacle(circling_task(45.0, 0.0))?);
        Ok(())
    }

    #[test]
    fn test_leaving_requires_the_initial_heading() -> Result<()> {
        // The obstacle is well behind, only the goal bearing differs.
        assert!(leaves_obstacle(circling_task(150.0, 0.0))?);
        assert!(leaves_obstacle(circling_task(150.0, 89.9))?);
        assert!(!leaves_obstacle(circling_task(150.0, 90.0))?);
        assert!(!leaves_obstacle(circling_task(150.0, 180.0))?);
        assert!(!leaves_obstacle(circling_task(150.0, -135.0))?);
        Ok(())
    }

    #[test]
    fn test_record() {
        let mut task = origin_task(vec![Point::new(0.0, 1.3), FAR[0], FAR[1]]);
        task.observe();
        let record = task.record();
        assert_eq!(record.get_string("result").unwrap(), "bug-robot proceed");
        assert_eq!(record.get_scalar("distance_from_goal").unwrap(), 15.0);
        assert_eq!(record.get_scalar("nearer_obstacle_index").unwrap(), 0.0);
        assert_eq!(record.get_scalar("circumnavigation_terminated").unwrap(), 1.0);
        assert_eq!(record.get_array1("position").unwrap(), vec![0.0, 0.0]);
    }

    #[derive(Default)]
    struct CallLog {
        calls: Vec<(&'static str, Color)>,
    }

    impl Canvas for CallLog {
        fn fill(&mut self, color: Color) {
            self.calls.push(("fill", color));
        }

        fn line(&mut self, _start: Point, _end: Point, color: Color) {
            self.calls.push(("line", color));
        }

        fn circle(&mut self, _center: Point, _radius: f64, color: Color) {
            self.calls.push(("circle", color));
        }
    }

    #[test]
    fn test_draw_order() {
        let task = origin_task(vec![Point::new(0.0, 5.0), Point::new(0.0, 7.0), Point::new(0.0, 9.0)]);
        let mut canvas = CallLog::default();
        task.draw(&mut canvas);

        let mut expected = vec![("fill", Color::White)];
        expected.extend(vec![("line", Color::Black); 4]);
        expected.push(("line", Color::Yellow));
        expected.extend(vec![("circle", Color::Blue); 3]);
        expected.push(("circle", Color::Green));
        expected.push(("circle", Color::Red));
        assert_eq!(canvas.calls, expected);
    }
}
