//! Goal-shot projectile demo.
//!
//! A ball is launched toward a goal line from a chosen distance, angle and
//! initial velocity. [`core::ballistics`] computes the closed-form apex and
//! goal-plane heights, [`core::trail`] keeps the bounded path overlay and
//! [`core::controller`] ties both to the ball world and the frame loop.

pub mod core;
pub mod logging;

pub use crate::core::ballistics::{
    GoalCrossing, LaunchResult, SimulationParameters, Vector2, compute_launch,
};
pub use crate::core::controller::{DisplayedStats, SimulationController};
pub use crate::core::error::{ConfigError, ParameterError, PlotError};
pub use crate::core::frame::{FrameEvents, FrameSubscription};
pub use crate::core::scene::{SceneConfig, ScreenMapping};
pub use crate::core::trail::{TrailCanvas, TrailPoint, TrailRecorder};
pub use crate::core::world::{BallBody, BallWorld};
pub use crate::logging::init as init_logging;
