//! The ball, the ground and the goal-line sensor, in screen pixels.

use log::debug;

use crate::core::ballistics::{EARTH_GRAVITY_MPS2, Vector2};
use crate::core::scene::SceneConfig;

pub const FIXED_STEP_S: f64 = 1.0 / 240.0;
/// Longest frame the world will catch up on in one go.
pub const MAX_FRAME_S: f64 = 0.10;

/// Position and velocity access to the launched body.
pub trait BallBody {
    fn position(&self) -> Vector2;
    fn velocity(&self) -> Vector2;
    fn set_position(&mut self, position: Vector2);
    fn set_velocity(&mut self, velocity: Vector2);

    fn speed(&self) -> f64 {
        self.velocity().length()
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Ball {
    pub position: Vector2,
    pub velocity: Vector2,
    pub radius: f64,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum StepOutcome {
    Flying,
    CrossedGoal,
    Landed,
    Resting,
}

/// Zero-restitution, frictionless ground with a sensor at the goal line.
#[derive(Clone, Debug)]
pub struct BallWorld {
    ball: Ball,
    gravity_px: f64,
    ground_top: f64,
    goal_x: f64,
    goal_crossing: Option<Vector2>,
    flight_time_s: f64,
}

impl BallWorld {
    pub fn from_scene(config: &SceneConfig) -> Self {
        Self {
            ball: Ball {
                position: config.initial_ball_position(),
                velocity: Vector2::ZERO,
                radius: config.ball_radius_px,
            },
            gravity_px: config.mapping.acceleration_to_screen(EARTH_GRAVITY_MPS2),
            ground_top: config.ground_top(),
            goal_x: config.mapping.origin.x,
            goal_crossing: None,
            flight_time_s: 0.0,
        }
    }

    pub fn ball(&self) -> &Ball {
        &self.ball
    }

    /// Screen position where the ball centre last crossed the goal line.
    pub fn goal_crossing(&self) -> Option<Vector2> {
        self.goal_crossing
    }

    /// Time since the last launch, frozen once the ball comes to rest.
    pub fn flight_time_s(&self) -> f64 {
        self.flight_time_s
    }

    fn on_ground(&self) -> bool {
        self.ball.position.y + self.ball.radius >= self.ground_top
    }

    pub fn step(&mut self, dt: f64) -> StepOutcome {
        let prev = self.ball.position;
        let was_grounded = self.on_ground() && self.ball.velocity.y >= 0.0;

        // Exact for constant acceleration.
        let v = self.ball.velocity;
        self.ball.position.x += v.x * dt;
        self.ball.position.y += (v.y * dt) + (0.5 * self.gravity_px * dt * dt);
        self.ball.velocity.y += self.gravity_px * dt;
        if !was_grounded {
            self.flight_time_s += dt;
        }

        let mut outcome = StepOutcome::Flying;
        if self.on_ground() {
            self.ball.position.y = self.ground_top - self.ball.radius;
            self.ball.velocity.y = 0.0;
            outcome = if was_grounded {
                StepOutcome::Resting
            } else {
                debug!("ball landed at x={:.1}px", self.ball.position.x);
                StepOutcome::Landed
            };
        }

        let pos = self.ball.position;
        if self.goal_crossing.is_none() && prev.x < self.goal_x && pos.x >= self.goal_x {
            let t = (self.goal_x - prev.x) / (pos.x - prev.x);
            let crossing = Vector2::new(self.goal_x, prev.y + (pos.y - prev.y) * t);
            debug!("goal sensor triggered at y={:.2}px", crossing.y);
            self.goal_crossing = Some(crossing);
            if outcome == StepOutcome::Flying {
                outcome = StepOutcome::CrossedGoal;
            }
        }

        outcome
    }

    /// Advances by one rendered frame in fixed steps.
    pub fn advance(&mut self, frame_s: f64) {
        let mut remaining = frame_s.clamp(0.0, MAX_FRAME_S);
        while remaining > 0.0 {
            let dt = remaining.min(FIXED_STEP_S);
            remaining -= dt;
            self.step(dt);
        }
    }
}

impl BallBody for BallWorld {
    fn position(&self) -> Vector2 {
        self.ball.position
    }

    fn velocity(&self) -> Vector2 {
        self.ball.velocity
    }

    fn set_position(&mut self, position: Vector2) {
        self.ball.position = position;
    }

    /// A new velocity starts a new flight, so the goal sensor re-arms.
    fn set_velocity(&mut self, velocity: Vector2) {
        self.ball.velocity = velocity;
        self.goal_crossing = None;
        self.flight_time_s = 0.0;
    }
}
