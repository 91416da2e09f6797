//! Collision tests between balls and axis-aligned rectangles
//!
//! Everything in the field is a rectangle except the ball, and the ball is
//! deliberately treated as its bounding square: corner hits reflect as if a
//! full face was struck. Exact circle geometry would change deflection feel,
//! so the approximation is part of the game's contract.

use glam::Vec2;
use serde::{Deserialize, Serialize};

/// An axis-aligned rectangle (top-left origin, y grows downward)
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Rect {
    pub x: f32,
    pub y: f32,
    pub w: f32,
    pub h: f32,
}

impl Rect {
    pub fn new(x: f32, y: f32, w: f32, h: f32) -> Self {
        Self { x, y, w, h }
    }

    pub fn center_x(&self) -> f32 {
        self.x + self.w / 2.0
    }

    /// Strict AABB overlap against another rectangle
    pub fn overlaps(&self, other: &Rect) -> bool {
        self.x < other.x + other.w
            && self.x + self.w > other.x
            && self.y < other.y + other.h
            && self.y + self.h > other.y
    }
}

/// Does the ball's bounding square overlap the rectangle?
///
/// Total over any inputs: a zero-size rect or a ball anywhere off-field
/// simply reports no overlap.
pub fn ball_overlaps_rect(pos: Vec2, radius: f32, rect: &Rect) -> bool {
    pos.x + radius > rect.x
        && pos.x - radius < rect.x + rect.w
        && pos.y + radius > rect.y
        && pos.y - radius < rect.y + rect.h
}

/// Horizontal velocity for a ball bouncing off the paddle.
///
/// The offset between ball center and paddle center is normalized to
/// [-1, 1] over the paddle half-width and mapped linearly onto
/// [-max_speed, max_speed], so edge hits deflect steeply and center hits
/// go straight up. Paddle width is always positive by construction.
pub fn paddle_deflection(ball_x: f32, paddle: &Rect, max_speed: f32) -> f32 {
    let offset = (ball_x - paddle.center_x()) / (paddle.w / 2.0);
    offset.clamp(-1.0, 1.0) * max_speed
}
