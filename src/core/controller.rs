use log::{debug, info};

use crate::core::ballistics::{
    GoalCrossing, LaunchResult, SimulationParameters, Vector2, compute_launch,
};
use crate::core::error::ParameterError;
use crate::core::frame::{FrameEvents, FrameSubscription};
use crate::core::scene::{SceneConfig, ScreenMapping, TrailStyle};
use crate::core::trail::{TrailCanvas, TrailRecorder};
use crate::core::world::BallBody;

pub const CLEARED_STAT: &str = "0";
pub const UNREACHABLE_STAT: &str = "n/a";

/// Statistics text as shown next to the sliders.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct DisplayedStats {
    pub max_height: String,
    pub goal_height: String,
}

impl DisplayedStats {
    pub fn cleared() -> Self {
        Self {
            max_height: CLEARED_STAT.to_string(),
            goal_height: CLEARED_STAT.to_string(),
        }
    }

    fn from_launch(launch: &LaunchResult) -> Self {
        Self {
            max_height: format_height(launch.max_height_m),
            goal_height: match launch.goal {
                GoalCrossing::Reached { height_m, .. } => format_height(height_m),
                GoalCrossing::Unreachable => UNREACHABLE_STAT.to_string(),
            },
        }
    }
}

pub fn format_height(height_m: f64) -> String {
    format!("{height_m:.2}")
}

/// Slider echo, whole numbers without a fractional part.
pub fn format_slider_value(value: f64) -> String {
    if value.fract() == 0.0 {
        format!("{value:.0}")
    } else {
        format!("{value}")
    }
}

/// Owns the launch inputs, the last launch, the trail and the frame
/// subscription.
#[derive(Debug, Clone)]
pub struct SimulationController {
    params: SimulationParameters,
    mapping: ScreenMapping,
    last_launch: Option<LaunchResult>,
    stats: DisplayedStats,
    trail: TrailRecorder,
    subscription: Option<FrameSubscription>,
}

impl SimulationController {
    pub fn new(mapping: ScreenMapping, trail_style: TrailStyle) -> Self {
        Self {
            params: SimulationParameters::default(),
            mapping,
            last_launch: None,
            stats: DisplayedStats::cleared(),
            trail: TrailRecorder::new(trail_style),
            subscription: None,
        }
    }

    pub fn from_scene(config: &SceneConfig) -> Self {
        Self::new(config.mapping, config.trail)
    }

    pub fn params(&self) -> SimulationParameters {
        self.params
    }

    pub fn mapping(&self) -> &ScreenMapping {
        &self.mapping
    }

    pub fn last_launch(&self) -> Option<&LaunchResult> {
        self.last_launch.as_ref()
    }

    pub fn stats(&self) -> &DisplayedStats {
        &self.stats
    }

    pub fn trail(&self) -> &TrailRecorder {
        &self.trail
    }

    pub fn subscription(&self) -> Option<FrameSubscription> {
        self.subscription
    }

    pub fn is_tracking(&self) -> bool {
        self.subscription.is_some()
    }

    /// Stores the distance and moves the resting ball in front of the goal.
    pub fn set_distance<B: BallBody>(
        &mut self,
        distance_m: f64,
        body: &mut B,
    ) -> Result<(), ParameterError> {
        let candidate = SimulationParameters {
            distance_m,
            ..self.params
        };
        candidate.validate()?;
        self.params = candidate;
        body.set_position(self.mapping.launch_point(distance_m));
        Ok(())
    }

    pub fn set_angle(&mut self, angle_deg: f64) -> Result<(), ParameterError> {
        let candidate = SimulationParameters {
            angle_deg,
            ..self.params
        };
        candidate.validate()?;
        self.params = candidate;
        Ok(())
    }

    pub fn set_velocity(&mut self, velocity_mps: f64) -> Result<(), ParameterError> {
        let candidate = SimulationParameters {
            velocity_mps,
            ..self.params
        };
        candidate.validate()?;
        self.params = candidate;
        Ok(())
    }

    pub fn distance_text(&self) -> String {
        format_slider_value(self.params.distance_m)
    }

    pub fn angle_text(&self) -> String {
        format_slider_value(self.params.angle_deg)
    }

    pub fn velocity_text(&self) -> String {
        format_slider_value(self.params.velocity_mps)
    }

    /// Launches the ball with the current parameters.
    ///
    /// Returns `Ok(None)` when the velocity is zero; nothing is touched in
    /// that case. Starting again while already subscribed keeps the existing
    /// subscription.
    pub fn start<B: BallBody>(
        &mut self,
        body: &mut B,
        events: &mut FrameEvents,
    ) -> Result<Option<FrameSubscription>, ParameterError> {
        let Some(launch) = compute_launch(self.params)? else {
            debug!("launch skipped: initial velocity is zero");
            return Ok(None);
        };

        self.stats = DisplayedStats::from_launch(&launch);
        body.set_velocity(self.mapping.velocity_to_screen(launch.velocity));

        let subscription = match self.subscription {
            Some(existing) if events.is_active(existing) => existing,
            _ => events.subscribe(),
        };
        self.subscription = Some(subscription);
        self.last_launch = Some(launch);

        info!(
            "launched: d={} m, angle={} deg, v0={} m/s",
            self.params.distance_m, self.params.angle_deg, self.params.velocity_mps
        );
        debug!(
            "apex at {:.4} s, max height {:.4} m",
            launch.apex_time_s, launch.max_height_m
        );
        match launch.goal {
            GoalCrossing::Reached {
                arrival_time_s,
                height_m,
            } => debug!("goal plane at {arrival_time_s:.4} s, height {height_m:.4} m"),
            GoalCrossing::Unreachable => debug!("vertical launch, goal plane unreachable"),
        }

        Ok(Some(subscription))
    }

    /// Records and draws the trail for one rendered frame.
    ///
    /// The new point is drawn before the oldest is evicted, so a full trail
    /// paints capacity + 1 markers. Frames delivered to a subscription other
    /// than the controller's own are ignored; returns whether anything was
    /// recorded.
    pub fn on_frame<B: BallBody, C: TrailCanvas>(
        &mut self,
        subscription: FrameSubscription,
        body: &B,
        canvas: &mut C,
    ) -> bool {
        if self.subscription != Some(subscription) {
            return false;
        }
        self.trail.push(body.position(), body.speed());
        self.trail.draw(canvas);
        self.trail.evict_overflow();
        true
    }

    /// Restores defaults, clears the trail, parks the ball and stops tracking.
    pub fn reset<B: BallBody>(&mut self, body: &mut B, events: &mut FrameEvents) {
        if let Some(subscription) = self.subscription.take() {
            events.unsubscribe(subscription);
            info!("reset: trail cleared ({} points)", self.trail.len());
        }

        self.params = SimulationParameters::default();
        self.last_launch = None;
        self.stats = DisplayedStats::cleared();
        self.trail.clear();

        body.set_position(self.mapping.launch_point(self.params.distance_m));
        body.set_velocity(Vector2::ZERO);
    }
}
