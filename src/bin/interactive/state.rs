use log::{info, warn};
use projectile_demo::core::controller::SimulationController;
use projectile_demo::core::frame::FrameEvents;
use projectile_demo::core::scene::SceneConfig;
use projectile_demo::core::world::BallWorld;

use crate::controls::FrameActions;

/// Slider positions as the UI widgets hold them.
#[derive(Clone, Copy, Debug, PartialEq)]
pub(crate) struct SliderValues {
    pub(crate) distance_m: f32,
    pub(crate) angle_deg: f32,
    pub(crate) velocity_mps: f32,
}

pub(crate) struct AppRuntime {
    pub(crate) config: SceneConfig,
    pub(crate) controller: SimulationController,
    pub(crate) world: BallWorld,
    pub(crate) events: FrameEvents,
    pub(crate) sliders: SliderValues,
    pub(crate) status_line: String,
}

impl AppRuntime {
    pub(crate) fn new(config: SceneConfig) -> Self {
        let controller = SimulationController::from_scene(&config);
        let world = BallWorld::from_scene(&config);
        let mut state = Self {
            config,
            controller,
            world,
            events: FrameEvents::new(),
            sliders: SliderValues {
                distance_m: 0.0,
                angle_deg: 0.0,
                velocity_mps: 0.0,
            },
            status_line: "Ready".to_string(),
        };
        state.sync_sliders();
        state
    }

    /// Pulls the slider widgets back to the controller's parameters.
    pub(crate) fn sync_sliders(&mut self) {
        let params = self.controller.params();
        self.sliders = SliderValues {
            distance_m: params.distance_m as f32,
            angle_deg: params.angle_deg as f32,
            velocity_mps: params.velocity_mps as f32,
        };
    }

    /// Pushes moved sliders into the controller, one input event per change.
    pub(crate) fn apply_slider_changes(&mut self) {
        let params = self.controller.params();
        let ranges = self.config.sliders;
        let distance = ranges.distance_m.clamp(f64::from(self.sliders.distance_m).round());
        let angle = ranges.angle_deg.clamp(f64::from(self.sliders.angle_deg).round());
        let velocity = ranges
            .velocity_mps
            .clamp(f64::from(self.sliders.velocity_mps).round());

        let mut result = Ok(());
        if distance != params.distance_m {
            result = result.and(self.controller.set_distance(distance, &mut self.world));
        }
        if angle != params.angle_deg {
            result = result.and(self.controller.set_angle(angle));
        }
        if velocity != params.velocity_mps {
            result = result.and(self.controller.set_velocity(velocity));
        }
        if let Err(err) = result {
            warn!("slider value rejected: {err}");
            self.status_line = err.to_string();
        }
        self.sync_sliders();
    }

    pub(crate) fn apply_actions(&mut self, actions: FrameActions) {
        if actions.start {
            self.status_line = match self.controller.start(&mut self.world, &mut self.events) {
                Ok(Some(_)) => "Ball launched".to_string(),
                Ok(None) => "Set a velocity above zero to launch".to_string(),
                Err(err) => {
                    warn!("launch rejected: {err}");
                    err.to_string()
                }
            };
        }

        if actions.reset {
            self.controller.reset(&mut self.world, &mut self.events);
            self.sync_sliders();
            self.status_line = "Reset".to_string();
            info!("scene reset to defaults");
        }
    }

    /// Height the goal sensor measured for the current flight, in metres.
    pub(crate) fn measured_goal_height_m(&self) -> Option<f64> {
        if !self.controller.is_tracking() {
            return None;
        }
        self.world
            .goal_crossing()
            .map(|crossing| self.config.mapping.height_above_origin_m(crossing.y))
    }
}
