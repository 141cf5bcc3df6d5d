use macroquad::prelude::*;
use macroquad::ui::{hash, root_ui, widgets};

use crate::constants::PANEL_WIDTH;
use crate::state::AppRuntime;

#[derive(Default, Clone, Copy)]
pub(crate) struct FrameActions {
    pub(crate) start: bool,
    pub(crate) reset: bool,
}

impl FrameActions {
    pub(crate) fn merge(self, other: Self) -> Self {
        Self {
            start: self.start || other.start,
            reset: self.reset || other.reset,
        }
    }
}

pub(crate) fn hotkey_actions() -> FrameActions {
    FrameActions {
        start: is_key_pressed(KeyCode::Space),
        reset: is_key_pressed(KeyCode::R),
    }
}

pub(crate) fn draw_control_panel(state: &mut AppRuntime, position: Vec2, height: f32) -> FrameActions {
    let ranges = state.config.sliders;
    let distance_text = state.controller.distance_text();
    let angle_text = state.controller.angle_text();
    let velocity_text = state.controller.velocity_text();

    let mut actions = FrameActions::default();
    widgets::Window::new(hash!(), position, vec2(PANEL_WIDTH, height))
        .label("Launch")
        .movable(false)
        .ui(&mut *root_ui(), |ui| {
            ui.slider(
                hash!(),
                "Distance (m)",
                ranges.distance_m.min as f32..ranges.distance_m.max as f32,
                &mut state.sliders.distance_m,
            );
            ui.slider(
                hash!(),
                "Angle (deg)",
                ranges.angle_deg.min as f32..ranges.angle_deg.max as f32,
                &mut state.sliders.angle_deg,
            );
            ui.slider(
                hash!(),
                "Velocity (m/s)",
                ranges.velocity_mps.min as f32..ranges.velocity_mps.max as f32,
                &mut state.sliders.velocity_mps,
            );
            ui.label(
                None,
                &format!("d = {distance_text} m | angle = {angle_text} deg | v0 = {velocity_text} m/s"),
            );
            ui.separator();
            if ui.button(None, "Start (Space)") {
                actions.start = true;
            }
            if ui.button(None, "Reset (R)") {
                actions.reset = true;
            }
        });

    actions
}
