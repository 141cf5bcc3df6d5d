use std::path::PathBuf;

use clap::Parser;
use log::{error, info, warn};
use macroquad::prelude::*;
use projectile_demo::core::scene::SceneConfig;
use projectile_demo::init_logging;

use crate::constants::{
    INITIAL_WINDOW_HEIGHT, INITIAL_WINDOW_WIDTH, MSAA_SAMPLES, PANEL_BG, PANEL_HEIGHT,
    PANEL_MARGIN, UI_FONT_PATH,
};
use crate::controls::{draw_control_panel, hotkey_actions};
use crate::hud::draw_hud;
use crate::render::{MacroquadCanvas, SceneView, draw_scene};
use crate::state::AppRuntime;

/// Interactive goal-shot demo
#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Scene config (JSON)
    #[arg(long)]
    config: Option<PathBuf>,
    /// Enable verbose logging
    #[arg(short, long)]
    verbose: bool,
}

pub(crate) fn window_conf() -> Conf {
    Conf {
        window_title: "Projectile Demo".to_string(),
        window_width: INITIAL_WINDOW_WIDTH,
        window_height: INITIAL_WINDOW_HEIGHT,
        high_dpi: true,
        sample_count: MSAA_SAMPLES,
        ..Default::default()
    }
}

fn load_scene(path: Option<PathBuf>) -> SceneConfig {
    match SceneConfig::load_or_default(path.as_deref()) {
        Ok(config) => config,
        Err(err) => {
            error!("{err}. Falling back to the built-in scene.");
            SceneConfig::default()
        }
    }
}

pub(crate) async fn run() {
    let args = Args::parse();
    init_logging(args.verbose);

    let ui_font = match load_ttf_font(UI_FONT_PATH).await {
        Ok(font) => Some(font),
        Err(err) => {
            warn!("Could not load '{UI_FONT_PATH}': {err}. Falling back to default font.");
            None
        }
    };

    let mut state = AppRuntime::new(load_scene(args.config));
    info!("scene ready, ball at {:?}", state.world.ball().position);

    loop {
        let frame_dt = get_frame_time();
        let screen_w = screen_width();
        let screen_h = screen_height();

        let view = SceneView::fit(&state.config, screen_w, (screen_h - PANEL_HEIGHT).max(1.0));
        let panel_top = view.bottom(&state.config) + PANEL_MARGIN;
        let panel_height = (screen_h - panel_top - PANEL_MARGIN).max(120.0);

        let actions = hotkey_actions().merge(draw_control_panel(
            &mut state,
            vec2(PANEL_MARGIN, panel_top),
            panel_height,
        ));
        state.apply_slider_changes();
        state.apply_actions(actions);

        state.world.advance(f64::from(frame_dt));

        clear_background(PANEL_BG);
        draw_scene(&state.config, &state.world, &view);

        let mut canvas = MacroquadCanvas::new(&view);
        for subscription in state.events.dispatch() {
            state
                .controller
                .on_frame(subscription, &state.world, &mut canvas);
        }

        draw_hud(&state, panel_top, ui_font.as_ref());

        next_frame().await;
    }
}
