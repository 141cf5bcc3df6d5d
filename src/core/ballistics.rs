use serde::{Deserialize, Serialize};

use crate::core::error::ParameterError;

pub const EARTH_GRAVITY_MPS2: f64 = 9.8;

pub const DEFAULT_DISTANCE_M: f64 = 25.0;
pub const DEFAULT_ANGLE_DEG: f64 = 0.0;
pub const DEFAULT_VELOCITY_MPS: f64 = 0.0;

/// Below this the launch is treated as vertical and never reaches the goal plane.
pub const VERTICAL_COS_EPSILON: f64 = 1e-9;

/// A 2D vector. Screen-space users treat negative `y` as "up".
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize, Deserialize)]
pub struct Vector2 {
    pub x: f64,
    pub y: f64,
}

impl Vector2 {
    pub const ZERO: Self = Self { x: 0.0, y: 0.0 };

    pub const fn new(x: f64, y: f64) -> Self {
        Self { x, y }
    }

    pub fn length(self) -> f64 {
        self.x.hypot(self.y)
    }

    pub fn scale(self, factor: f64) -> Self {
        Self::new(self.x * factor, self.y * factor)
    }
}

/// The three user-facing launch inputs.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SimulationParameters {
    pub distance_m: f64,
    pub angle_deg: f64,
    pub velocity_mps: f64,
}

impl Default for SimulationParameters {
    fn default() -> Self {
        Self {
            distance_m: DEFAULT_DISTANCE_M,
            angle_deg: DEFAULT_ANGLE_DEG,
            velocity_mps: DEFAULT_VELOCITY_MPS,
        }
    }
}

impl SimulationParameters {
    pub fn new(distance_m: f64, angle_deg: f64, velocity_mps: f64) -> Self {
        Self {
            distance_m,
            angle_deg,
            velocity_mps,
        }
    }

    pub fn validate(&self) -> Result<(), ParameterError> {
        for (name, value) in [
            ("distance", self.distance_m),
            ("angle", self.angle_deg),
            ("velocity", self.velocity_mps),
        ] {
            if !value.is_finite() {
                return Err(ParameterError::NotFinite { name, value });
            }
        }
        if self.distance_m <= 0.0 {
            return Err(ParameterError::NonPositiveDistance(self.distance_m));
        }
        if !(0.0..=90.0).contains(&self.angle_deg) {
            return Err(ParameterError::AngleOutOfRange(self.angle_deg));
        }
        if self.velocity_mps < 0.0 {
            return Err(ParameterError::NegativeVelocity(self.velocity_mps));
        }
        Ok(())
    }
}

/// Where the ball meets the goal plane, if it ever does.
#[derive(Clone, Copy, Debug, PartialEq)]
pub enum GoalCrossing {
    Reached { arrival_time_s: f64, height_m: f64 },
    /// Horizontal speed is zero, so the goal plane is never crossed.
    Unreachable,
}

impl GoalCrossing {
    pub fn height_m(self) -> Option<f64> {
        match self {
            Self::Reached { height_m, .. } => Some(height_m),
            Self::Unreachable => None,
        }
    }

    pub fn arrival_time_s(self) -> Option<f64> {
        match self {
            Self::Reached { arrival_time_s, .. } => Some(arrival_time_s),
            Self::Unreachable => None,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct LaunchResult {
    pub angle_rad: f64,
    pub apex_time_s: f64,
    pub max_height_m: f64,
    pub goal: GoalCrossing,
    /// Launch velocity in m/s, screen convention (negative y is up).
    pub velocity: Vector2,
}

/// Horizontal and vertical launch speed, with positive `vy` pointing up.
pub fn velocity_components(params: SimulationParameters) -> (f64, f64) {
    let theta = params.angle_deg.to_radians();
    let vx = params.velocity_mps * theta.cos();
    let vy = params.velocity_mps * theta.sin();
    (vx, vy)
}

pub fn launch_velocity(params: SimulationParameters) -> Vector2 {
    let (vx, vy) = velocity_components(params);
    Vector2::new(vx, -vy)
}

/// Closed-form launch statistics.
///
/// A zero initial velocity suppresses the launch and yields `Ok(None)`.
pub fn compute_launch(
    params: SimulationParameters,
) -> Result<Option<LaunchResult>, ParameterError> {
    params.validate()?;
    if params.velocity_mps == 0.0 {
        return Ok(None);
    }

    let g = EARTH_GRAVITY_MPS2;
    let v0 = params.velocity_mps;
    let theta = params.angle_deg.to_radians();

    let apex_time_s = (v0 * theta.sin()) / g;
    let max_height_m = (v0 * theta.sin() * apex_time_s) - (0.5 * g * apex_time_s * apex_time_s);

    let horizontal = v0 * theta.cos();
    let goal = if horizontal.abs() < VERTICAL_COS_EPSILON * v0 {
        GoalCrossing::Unreachable
    } else {
        let arrival_time_s = params.distance_m / horizontal;
        let fall_s = arrival_time_s - apex_time_s;
        GoalCrossing::Reached {
            arrival_time_s,
            height_m: max_height_m - (0.5 * g * fall_s * fall_s),
        }
    };

    Ok(Some(LaunchResult {
        angle_rad: theta,
        apex_time_s,
        max_height_m,
        goal,
        velocity: launch_velocity(params),
    }))
}

/// Position relative to the launch point, `y` up, ignoring the ground.
pub fn trajectory_at_time(params: SimulationParameters, time_s: f64) -> (f64, f64) {
    let (vx, vy) = velocity_components(params);
    let x = vx * time_s;
    let y = (vy * time_s) - (0.5 * EARTH_GRAVITY_MPS2 * time_s * time_s);
    (x, y)
}

/// Time until the ball is back at launch height.
pub fn landing_time(params: SimulationParameters) -> f64 {
    let (_, vy) = velocity_components(params);
    (2.0 * vy / EARTH_GRAVITY_MPS2).max(0.0)
}

pub fn sample_trajectory(
    params: SimulationParameters,
    time_of_flight_s: f64,
    samples: usize,
) -> Vec<(f64, f64)> {
    let sample_count = samples.max(2);
    (0..=sample_count)
        .map(|i| {
            let t = (i as f64 * time_of_flight_s) / sample_count as f64;
            trajectory_at_time(params, t)
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn assert_close(actual: f64, expected: f64, tolerance: f64) {
        assert!(
            (actual - expected).abs() <= tolerance,
            "actual={actual}, expected={expected}, tolerance={tolerance}"
        );
    }

    #[test]
    fn computes_reference_goal_shot() {
        let launch = compute_launch(SimulationParameters::new(25.0, 45.0, 20.0))
            .expect("valid parameters")
            .expect("non-zero velocity launches");

        assert_close(launch.angle_rad, 0.7854, 0.0001);
        assert_close(launch.apex_time_s, 1.4431, 0.0001);
        assert_close(launch.max_height_m, 10.204, 0.001);
        assert_close(launch.goal.arrival_time_s().unwrap(), 1.7678, 0.0001);
        assert_close(launch.goal.height_m().unwrap(), 9.6875, 0.0001);
        assert_close(launch.velocity.x, 14.142, 0.001);
        assert_close(launch.velocity.y, -14.142, 0.001);
    }

    #[test]
    fn zero_velocity_does_not_launch() {
        let launch = compute_launch(SimulationParameters::new(25.0, 30.0, 0.0)).unwrap();
        assert!(launch.is_none());
    }

    #[test]
    fn vertical_launch_never_reaches_goal() {
        let launch = compute_launch(SimulationParameters::new(25.0, 90.0, 10.0))
            .unwrap()
            .unwrap();

        assert_eq!(launch.goal, GoalCrossing::Unreachable);
        assert_close(launch.max_height_m, 100.0 / (2.0 * EARTH_GRAVITY_MPS2), 1e-9);
        assert_close(launch.velocity.y, -10.0, 1e-9);
    }

    #[test]
    fn flat_launch_has_no_apex() {
        let launch = compute_launch(SimulationParameters::new(10.0, 0.0, 5.0))
            .unwrap()
            .unwrap();

        assert_close(launch.apex_time_s, 0.0, 1e-12);
        assert_close(launch.max_height_m, 0.0, 1e-12);
        assert_close(launch.goal.arrival_time_s().unwrap(), 2.0, 1e-12);
        assert_close(launch.goal.height_m().unwrap(), -19.6, 1e-9);
    }

    #[test]
    fn rejects_invalid_parameters() {
        assert_eq!(
            compute_launch(SimulationParameters::new(0.0, 30.0, 5.0)),
            Err(ParameterError::NonPositiveDistance(0.0))
        );
        assert_eq!(
            compute_launch(SimulationParameters::new(10.0, 91.0, 5.0)),
            Err(ParameterError::AngleOutOfRange(91.0))
        );
        assert_eq!(
            compute_launch(SimulationParameters::new(10.0, 30.0, -1.0)),
            Err(ParameterError::NegativeVelocity(-1.0))
        );
        assert!(matches!(
            compute_launch(SimulationParameters::new(f64::NAN, 30.0, 5.0)),
            Err(ParameterError::NotFinite { name: "distance", .. })
        ));
    }

    #[test]
    fn sampled_arc_returns_to_launch_height() {
        let params = SimulationParameters::new(25.0, 60.0, 12.0);
        let points = sample_trajectory(params, landing_time(params), 64);

        assert_eq!(points.len(), 65);
        let (x0, y0) = points[0];
        let (_, y_end) = points[points.len() - 1];
        assert_close(x0, 0.0, 1e-12);
        assert_close(y0, 0.0, 1e-12);
        assert_close(y_end, 0.0, 1e-9);
    }
}
