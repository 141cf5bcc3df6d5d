//! Bounded newest-first history of rendered ball positions.

use std::collections::VecDeque;

use crate::core::ballistics::Vector2;
use crate::core::scene::{Rgba, TrailStyle};

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TrailPoint {
    pub position: Vector2,
    pub speed: f64,
}

/// The drawing surface the trail is painted on.
///
/// Coordinates are whatever the surface's active view transform expects;
/// the recorder never rescales them.
pub trait TrailCanvas {
    fn set_global_alpha(&mut self, alpha: f32);
    fn set_fill(&mut self, color: Rgba);
    fn fill_rect(&mut self, x: f64, y: f64, width: f64, height: f64);
}

#[derive(Debug, Clone)]
pub struct TrailRecorder {
    points: VecDeque<TrailPoint>,
    style: TrailStyle,
}

impl TrailRecorder {
    pub fn new(style: TrailStyle) -> Self {
        Self {
            points: VecDeque::with_capacity(style.capacity + 1),
            style,
        }
    }

    /// Prepends the current position and trims the history back to capacity.
    pub fn record(&mut self, position: Vector2, speed: f64) {
        self.push(position, speed);
        self.evict_overflow();
    }

    /// Prepends without trimming; a full history briefly holds one extra
    /// point until [`TrailRecorder::evict_overflow`] runs.
    pub fn push(&mut self, position: Vector2, speed: f64) {
        self.points.push_front(TrailPoint { position, speed });
    }

    /// Drops at most one tail point if the history is over capacity.
    pub fn evict_overflow(&mut self) -> Option<TrailPoint> {
        if self.points.len() > self.style.capacity {
            self.points.pop_back()
        } else {
            None
        }
    }

    pub fn draw<C: TrailCanvas>(&self, canvas: &mut C) {
        if self.points.is_empty() {
            return;
        }

        let size = self.style.marker_size;
        canvas.set_global_alpha(self.style.alpha);
        for point in &self.points {
            canvas.set_fill(self.style.color_for_speed(point.speed));
            canvas.fill_rect(point.position.x, point.position.y, size, size);
        }
        canvas.set_global_alpha(1.0);
    }

    pub fn clear(&mut self) {
        self.points.clear();
    }

    pub fn len(&self) -> usize {
        self.points.len()
    }

    pub fn is_empty(&self) -> bool {
        self.points.is_empty()
    }

    pub fn newest(&self) -> Option<&TrailPoint> {
        self.points.front()
    }

    pub fn oldest(&self) -> Option<&TrailPoint> {
        self.points.back()
    }

    pub fn get(&self, index: usize) -> Option<&TrailPoint> {
        self.points.get(index)
    }

    /// Newest first.
    pub fn iter(&self) -> impl Iterator<Item = &TrailPoint> {
        self.points.iter()
    }
}
