use macroquad::prelude::*;
use projectile_demo::core::scene::{RectSpec, Rgba, SceneConfig};
use projectile_demo::core::trail::TrailCanvas;
use projectile_demo::core::world::BallWorld;

use crate::constants::BALL_OUTLINE;

pub(crate) fn to_color(color: Rgba) -> Color {
    Color::new(color.r, color.g, color.b, color.a)
}

/// Uniform scale and offset from scene pixels to window pixels.
#[derive(Clone, Copy, Debug)]
pub(crate) struct SceneView {
    pub(crate) scale: f32,
    pub(crate) offset: Vec2,
}

impl SceneView {
    /// Fits the scene into the top `available_h` pixels of the window, centred horizontally.
    pub(crate) fn fit(config: &SceneConfig, screen_w: f32, available_h: f32) -> Self {
        let scene_w = config.window.width as f32;
        let scene_h = config.window.height as f32;
        let scale = (screen_w / scene_w).min(available_h / scene_h).max(0.05);
        Self {
            scale,
            offset: vec2((screen_w - scene_w * scale) * 0.5, 0.0),
        }
    }

    pub(crate) fn to_screen(&self, x: f64, y: f64) -> Vec2 {
        self.offset + vec2(x as f32, y as f32) * self.scale
    }

    pub(crate) fn length(&self, pixels: f64) -> f32 {
        pixels as f32 * self.scale
    }

    pub(crate) fn bottom(&self, config: &SceneConfig) -> f32 {
        self.offset.y + self.length(config.window.height)
    }
}

/// Trail canvas drawing through the active [`SceneView`].
pub(crate) struct MacroquadCanvas<'a> {
    view: &'a SceneView,
    alpha: f32,
    fill: Color,
}

impl<'a> MacroquadCanvas<'a> {
    pub(crate) fn new(view: &'a SceneView) -> Self {
        Self {
            view,
            alpha: 1.0,
            fill: BLACK,
        }
    }
}

impl TrailCanvas for MacroquadCanvas<'_> {
    fn set_global_alpha(&mut self, alpha: f32) {
        self.alpha = alpha;
    }

    fn set_fill(&mut self, color: Rgba) {
        self.fill = to_color(color);
    }

    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64) {
        let p = self.view.to_screen(x, y);
        let mut color = self.fill;
        color.a *= self.alpha;
        draw_rectangle(
            p.x,
            p.y,
            self.view.length(width),
            self.view.length(height),
            color,
        );
    }
}

fn draw_rect_spec(rect: &RectSpec, view: &SceneView) {
    let p = view.to_screen(rect.left(), rect.top());
    let w = view.length(rect.size.x);
    let h = view.length(rect.size.y);
    draw_rectangle(p.x, p.y, w, h, to_color(rect.fill));
    draw_rectangle_lines(
        p.x,
        p.y,
        w,
        h,
        view.length(rect.line_width).max(1.0),
        to_color(rect.stroke),
    );
}

pub(crate) fn draw_scene(config: &SceneConfig, world: &BallWorld, view: &SceneView) {
    let origin = view.to_screen(0.0, 0.0);
    draw_rectangle(
        origin.x,
        origin.y,
        view.length(config.window.width),
        view.length(config.window.height),
        to_color(config.background),
    );

    draw_rect_spec(&config.ground, view);
    draw_rect_spec(&config.goal_marker, view);

    let ball = world.ball();
    let center = view.to_screen(ball.position.x, ball.position.y);
    let radius = view.length(ball.radius);
    draw_circle(center.x, center.y, radius, to_color(config.ball_color));
    draw_circle_lines(center.x, center.y, radius, 2.0, BALL_OUTLINE);
}
