use macroquad::prelude::*;
use projectile_demo::core::controller::format_height;

use crate::constants::{
    PANEL_MARGIN, STATS_COLOR, STATS_FONT_SIZE, STATS_LINE_HEIGHT, STATS_X_OFFSET,
    STATUS_FONT_SIZE,
};
use crate::state::AppRuntime;

pub(crate) fn draw_ui_text(
    text: &str,
    x: f32,
    y: f32,
    font_size: u16,
    color: Color,
    font: Option<&Font>,
) {
    draw_text_ex(
        text,
        x,
        y,
        TextParams {
            font,
            font_size,
            color,
            ..Default::default()
        },
    );
}

/// Statistics column to the right of the control panel.
pub(crate) fn draw_hud(state: &AppRuntime, panel_top: f32, font: Option<&Font>) {
    let x = PANEL_MARGIN + STATS_X_OFFSET;
    let mut y = panel_top + STATS_LINE_HEIGHT;
    let stats = state.controller.stats();

    draw_ui_text(
        &format!("Max height: {} m", stats.max_height),
        x,
        y,
        STATS_FONT_SIZE,
        STATS_COLOR,
        font,
    );
    y += STATS_LINE_HEIGHT;
    draw_ui_text(
        &format!("Height at goal: {} m", stats.goal_height),
        x,
        y,
        STATS_FONT_SIZE,
        STATS_COLOR,
        font,
    );
    y += STATS_LINE_HEIGHT;

    let sensor = state
        .measured_goal_height_m()
        .map_or_else(|| "-".to_string(), |h| format!("{} m", format_height(h)));
    draw_ui_text(
        &format!("Goal sensor: {sensor}"),
        x,
        y,
        STATS_FONT_SIZE,
        DARKGRAY,
        font,
    );
    y += STATS_LINE_HEIGHT;

    if let Some(launch) = state.controller.last_launch() {
        draw_ui_text(
            &format!(
                "Apex after {:.2} s | flight {:.2} s | trail {} points",
                launch.apex_time_s,
                state.world.flight_time_s(),
                state.controller.trail().len()
            ),
            x,
            y,
            STATUS_FONT_SIZE,
            DARKGRAY,
            font,
        );
        y += STATS_LINE_HEIGHT;
    }

    draw_ui_text(&state.status_line, x, y, STATUS_FONT_SIZE, BLUE, font);
}
