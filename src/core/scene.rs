//! Scene layout, unit mapping and trail styling.
//!
//! Every field has a default matching the stock 1200×500 scene, so a config
//! file only needs the values it changes.

use std::fs;
use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::core::ballistics::{DEFAULT_DISTANCE_M, Vector2};
use crate::core::error::ConfigError;

/// RGBA colour with channels in `0.0..=1.0`, written as `#RRGGBB` or `#RRGGBBAA` in config.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(try_from = "String", into = "String")]
pub struct Rgba {
    pub r: f32,
    pub g: f32,
    pub b: f32,
    pub a: f32,
}

impl Rgba {
    pub const WHITE: Self = Self::new(1.0, 1.0, 1.0, 1.0);
    pub const BLACK: Self = Self::new(0.0, 0.0, 0.0, 1.0);

    pub const fn new(r: f32, g: f32, b: f32, a: f32) -> Self {
        Self { r, g, b, a }
    }

    pub fn from_rgb8(r: u8, g: u8, b: u8) -> Self {
        Self::new(
            f32::from(r) / 255.0,
            f32::from(g) / 255.0,
            f32::from(b) / 255.0,
            1.0,
        )
    }

    pub fn from_hex(hex: &str) -> Option<Self> {
        let digits = hex.strip_prefix('#')?;
        let channel = |idx: usize| {
            digits
                .get(idx..idx + 2)
                .and_then(|pair| u8::from_str_radix(pair, 16).ok())
        };
        match digits.len() {
            6 => Some(Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?)),
            8 => {
                let mut color = Self::from_rgb8(channel(0)?, channel(2)?, channel(4)?);
                color.a = f32::from(channel(6)?) / 255.0;
                Some(color)
            }
            _ => None,
        }
    }

    /// `hue` in degrees, `saturation` and `lightness` in `0.0..=1.0`.
    pub fn from_hsl(hue: f32, saturation: f32, lightness: f32) -> Self {
        let h = hue.rem_euclid(360.0) / 60.0;
        let chroma = (1.0 - (2.0 * lightness - 1.0).abs()) * saturation;
        let x = chroma * (1.0 - (h.rem_euclid(2.0) - 1.0).abs());
        let (r, g, b) = match h as u32 {
            0 => (chroma, x, 0.0),
            1 => (x, chroma, 0.0),
            2 => (0.0, chroma, x),
            3 => (0.0, x, chroma),
            4 => (x, 0.0, chroma),
            _ => (chroma, 0.0, x),
        };
        let m = lightness - chroma / 2.0;
        Self::new(r + m, g + m, b + m, 1.0)
    }

    fn to_hex(self) -> String {
        let byte = |v: f32| (v.clamp(0.0, 1.0) * 255.0).round() as u8;
        if self.a >= 1.0 {
            format!("#{:02X}{:02X}{:02X}", byte(self.r), byte(self.g), byte(self.b))
        } else {
            format!(
                "#{:02X}{:02X}{:02X}{:02X}",
                byte(self.r),
                byte(self.g),
                byte(self.b),
                byte(self.a)
            )
        }
    }
}

impl TryFrom<String> for Rgba {
    type Error = String;

    fn try_from(value: String) -> Result<Self, Self::Error> {
        Self::from_hex(&value).ok_or_else(|| format!("'{value}' is not a #RRGGBB colour"))
    }
}

impl From<Rgba> for String {
    fn from(color: Rgba) -> Self {
        color.to_hex()
    }
}

/// Converts metres to screen pixels around the goal plane.
///
/// `origin` is where the goal plane meets the ball's resting height; screen
/// `y` grows downward.
#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct ScreenMapping {
    pub meters_to_pixels: f64,
    pub origin: Vector2,
}

impl Default for ScreenMapping {
    fn default() -> Self {
        Self {
            meters_to_pixels: 7.0,
            origin: Vector2::new(1000.0, 420.0),
        }
    }
}

impl ScreenMapping {
    /// Resting ball position `distance_m` in front of the goal plane.
    pub fn launch_point(&self, distance_m: f64) -> Vector2 {
        Vector2::new(
            self.origin.x - distance_m * self.meters_to_pixels,
            self.origin.y,
        )
    }

    pub fn velocity_to_screen(&self, velocity_mps: Vector2) -> Vector2 {
        velocity_mps.scale(self.meters_to_pixels)
    }

    pub fn acceleration_to_screen(&self, accel_mps2: f64) -> f64 {
        accel_mps2 * self.meters_to_pixels
    }

    pub fn height_above_origin_m(&self, screen_y: f64) -> f64 {
        (self.origin.y - screen_y) / self.meters_to_pixels
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct RectSpec {
    pub center: Vector2,
    pub size: Vector2,
    pub fill: Rgba,
    pub stroke: Rgba,
    pub line_width: f64,
}

impl RectSpec {
    pub fn left(&self) -> f64 {
        self.center.x - self.size.x / 2.0
    }

    pub fn top(&self) -> f64 {
        self.center.y - self.size.y / 2.0
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
pub struct SliderRange {
    pub min: f64,
    pub max: f64,
}

impl SliderRange {
    pub const fn new(min: f64, max: f64) -> Self {
        Self { min, max }
    }

    pub fn clamp(&self, value: f64) -> f64 {
        value.clamp(self.min, self.max)
    }

    pub fn contains(&self, value: f64) -> bool {
        (self.min..=self.max).contains(&value)
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SliderRanges {
    pub distance_m: SliderRange,
    pub angle_deg: SliderRange,
    pub velocity_mps: SliderRange,
}

impl Default for SliderRanges {
    fn default() -> Self {
        Self {
            // 100 m spans 700 px at the default scale.
            distance_m: SliderRange::new(1.0, 100.0),
            angle_deg: SliderRange::new(0.0, 90.0),
            velocity_mps: SliderRange::new(0.0, 50.0),
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(tag = "mode", rename_all = "snake_case")]
pub enum TrailColoring {
    Fixed,
    /// Slow points drift toward red, fast ones toward blue.
    SpeedHue { reference_speed: f64 },
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct TrailStyle {
    pub capacity: usize,
    pub marker_size: f64,
    pub alpha: f32,
    pub color: Rgba,
    pub coloring: TrailColoring,
}

impl Default for TrailStyle {
    fn default() -> Self {
        Self {
            capacity: 2000,
            marker_size: 4.0,
            alpha: 0.7,
            color: Rgba::from_rgb8(0x5A, 0x5A, 0x5A),
            coloring: TrailColoring::Fixed,
        }
    }
}

impl TrailStyle {
    pub fn color_for_speed(&self, speed: f64) -> Rgba {
        match self.coloring {
            TrailColoring::Fixed => self.color,
            TrailColoring::SpeedHue { reference_speed } => {
                let ratio = if reference_speed > 0.0 {
                    (speed / reference_speed).min(1.0)
                } else {
                    1.0
                };
                let hue = 250.0 + ((1.0 - ratio) * 170.0).round();
                Rgba::from_hsl(hue as f32, 1.0, 0.55)
            }
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct WindowSize {
    pub width: f64,
    pub height: f64,
}

impl Default for WindowSize {
    fn default() -> Self {
        Self {
            width: 1200.0,
            height: 500.0,
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Serialize, Deserialize)]
#[serde(default)]
pub struct SceneConfig {
    pub mapping: ScreenMapping,
    pub window: WindowSize,
    pub background: Rgba,
    pub ball_radius_px: f64,
    pub ball_color: Rgba,
    pub ground: RectSpec,
    pub goal_marker: RectSpec,
    pub sliders: SliderRanges,
    pub trail: TrailStyle,
}

impl Default for SceneConfig {
    fn default() -> Self {
        Self {
            mapping: ScreenMapping::default(),
            window: WindowSize::default(),
            background: Rgba::from_rgb8(0x37, 0xC6, 0xFA),
            ball_radius_px: 20.0,
            ball_color: Rgba::WHITE,
            ground: RectSpec {
                center: Vector2::new(450.0, 470.0),
                size: Vector2::new(1500.0, 60.0),
                fill: Rgba::from_rgb8(0x4C, 0xB0, 0x50),
                stroke: Rgba::WHITE,
                line_width: 2.0,
            },
            goal_marker: RectSpec {
                center: Vector2::new(1000.0, 430.0),
                size: Vector2::new(10.0, 20.0),
                fill: Rgba::WHITE,
                stroke: Rgba::BLACK,
                line_width: 1.0,
            },
            sliders: SliderRanges::default(),
            trail: TrailStyle::default(),
        }
    }
}

impl SceneConfig {
    pub fn load(path: &Path) -> Result<Self, ConfigError> {
        let text = fs::read_to_string(path).map_err(|source| ConfigError::Io {
            path: path.to_path_buf(),
            source,
        })?;
        let config: Self = serde_json::from_str(&text).map_err(|source| ConfigError::Parse {
            path: path.to_path_buf(),
            source,
        })?;
        config.validate()?;
        Ok(config)
    }

    /// Loads `path` when given, otherwise the built-in scene.
    pub fn load_or_default(path: Option<&Path>) -> Result<Self, ConfigError> {
        match path {
            Some(path) => Self::load(path),
            None => Ok(Self::default()),
        }
    }

    pub fn validate(&self) -> Result<(), ConfigError> {
        if !(self.mapping.meters_to_pixels.is_finite() && self.mapping.meters_to_pixels > 0.0) {
            return Err(ConfigError::Invalid(format!(
                "meters_to_pixels must be positive, got {}",
                self.mapping.meters_to_pixels
            )));
        }
        if self.ball_radius_px <= 0.0 {
            return Err(ConfigError::Invalid(format!(
                "ball_radius_px must be positive, got {}",
                self.ball_radius_px
            )));
        }
        if self.trail.capacity == 0 {
            return Err(ConfigError::Invalid(
                "trail capacity must be at least 1".to_string(),
            ));
        }
        for (name, range) in [
            ("distance_m", self.sliders.distance_m),
            ("angle_deg", self.sliders.angle_deg),
            ("velocity_mps", self.sliders.velocity_mps),
        ] {
            if range.min > range.max {
                return Err(ConfigError::Invalid(format!(
                    "slider {name} has min {} above max {}",
                    range.min, range.max
                )));
            }
        }
        if !(self.sliders.distance_m.min > 0.0) {
            return Err(ConfigError::Invalid(
                "slider distance_m must stay above zero".to_string(),
            ));
        }
        if self.sliders.angle_deg.min < 0.0 || self.sliders.angle_deg.max > 90.0 {
            return Err(ConfigError::Invalid(
                "slider angle_deg must stay within 0..=90".to_string(),
            ));
        }
        if self.sliders.velocity_mps.min < 0.0 {
            return Err(ConfigError::Invalid(
                "slider velocity_mps cannot go negative".to_string(),
            ));
        }
        if !self.sliders.distance_m.contains(DEFAULT_DISTANCE_M) {
            return Err(ConfigError::Invalid(format!(
                "slider distance_m must include the default distance {DEFAULT_DISTANCE_M}"
            )));
        }
        Ok(())
    }

    /// Where the ball rests after a reset.
    pub fn initial_ball_position(&self) -> Vector2 {
        self.mapping.launch_point(DEFAULT_DISTANCE_M)
    }

    /// Top edge of the ground in screen pixels.
    pub fn ground_top(&self) -> f64 {
        self.ground.top()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_scene_rests_ball_at_stock_position() {
        let config = SceneConfig::default();
        assert_eq!(config.initial_ball_position(), Vector2::new(825.0, 420.0));
        assert!((config.ground_top() - 440.0).abs() < 1e-9);
        assert!((config.ground_top() - config.ball_radius_px - 420.0).abs() < 1e-9);
    }

    #[test]
    fn mapping_scales_heights_and_velocities() {
        let mapping = ScreenMapping::default();
        assert!((mapping.height_above_origin_m(350.0) - 10.0).abs() < 1e-9);
        assert_eq!(
            mapping.velocity_to_screen(Vector2::new(2.0, -1.0)),
            Vector2::new(14.0, -7.0)
        );
    }

    #[test]
    fn parses_hex_colours() {
        assert_eq!(Rgba::from_hex("#FFFFFF"), Some(Rgba::WHITE));
        let translucent = Rgba::from_hex("#00000080").unwrap();
        assert!((translucent.a - 128.0 / 255.0).abs() < 1e-6);
        assert_eq!(Rgba::from_hex("5A5A5A"), None);
        assert_eq!(Rgba::from_hex("#5A5A"), None);
        assert_eq!(String::from(Rgba::from_rgb8(0x37, 0xC6, 0xFA)), "#37C6FA");
    }

    #[test]
    fn hsl_primaries() {
        let red = Rgba::from_hsl(0.0, 1.0, 0.5);
        assert!((red.r - 1.0).abs() < 1e-6 && red.g.abs() < 1e-6 && red.b.abs() < 1e-6);
        let blue = Rgba::from_hsl(240.0, 1.0, 0.5);
        assert!(blue.r.abs() < 1e-6 && blue.g.abs() < 1e-6 && (blue.b - 1.0).abs() < 1e-6);
    }

    #[test]
    fn speed_hue_saturates_at_reference_speed() {
        let style = TrailStyle {
            coloring: TrailColoring::SpeedHue {
                reference_speed: 10.0,
            },
            ..TrailStyle::default()
        };
        // hue 250 at or above the reference, 420 (= 60) when resting
        assert_eq!(style.color_for_speed(25.0), Rgba::from_hsl(250.0, 1.0, 0.55));
        assert_eq!(style.color_for_speed(0.0), Rgba::from_hsl(420.0, 1.0, 0.55));
        assert_eq!(TrailStyle::default().color_for_speed(3.0), TrailStyle::default().color);
    }

    #[test]
    fn partial_config_keeps_defaults() {
        let config: SceneConfig = serde_json::from_str(
            r##"{
                "mapping": { "meters_to_pixels": 10.0 },
                "trail": { "capacity": 50, "coloring": { "mode": "speed_hue", "reference_speed": 70.0 } }
            }"##,
        )
        .unwrap();

        assert_eq!(config.mapping.meters_to_pixels, 10.0);
        assert_eq!(config.mapping.origin, ScreenMapping::default().origin);
        assert_eq!(config.trail.capacity, 50);
        assert_eq!(config.trail.marker_size, 4.0);
        assert_eq!(config.background, SceneConfig::default().background);
        assert!(config.validate().is_ok());
    }

    #[test]
    fn rejects_zero_scale() {
        let mut config = SceneConfig::default();
        config.mapping.meters_to_pixels = 0.0;
        assert!(matches!(config.validate(), Err(ConfigError::Invalid(_))));
    }

    #[test]
    fn missing_file_reports_path() {
        let err = SceneConfig::load(Path::new("/definitely/not/here.json")).unwrap_err();
        assert!(matches!(err, ConfigError::Io { .. }));
        assert!(err.to_string().contains("/definitely/not/here.json"));
    }
}
