use macroquad::prelude::Color;

pub const INITIAL_WINDOW_WIDTH: i32 = 1200;
pub const INITIAL_WINDOW_HEIGHT: i32 = 720;
pub const MSAA_SAMPLES: i32 = 4;
pub const UI_FONT_PATH: &str = "assets/fonts/Lato-Regular.ttf";

pub const PANEL_HEIGHT: f32 = 220.0;
pub const PANEL_MARGIN: f32 = 12.0;
pub const PANEL_WIDTH: f32 = 380.0;

pub const STATS_X_OFFSET: f32 = PANEL_WIDTH + 40.0;
pub const STATS_LINE_HEIGHT: f32 = 30.0;
pub const STATS_FONT_SIZE: u16 = 24;
pub const STATUS_FONT_SIZE: u16 = 18;

pub const PANEL_BG: Color = Color::new(0.95, 0.96, 0.97, 1.0);
pub const STATS_COLOR: Color = Color::new(0.12, 0.12, 0.14, 1.0);
pub const BALL_OUTLINE: Color = Color::new(0.2, 0.2, 0.22, 1.0);
