use crate::geometry::Aabb;
use crate::params::Params;
use glam::Vec2;

/// Ball component - the ball in play
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub body: Aabb,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2) -> Self {
        Self {
            body: Aabb::new(pos, Vec2::new(Params::BALL_WIDTH, Params::BALL_HEIGHT)),
            vel: Vec2::ZERO,
        }
    }

    /// True while the ball is waiting to be served
    pub fn is_idle(&self) -> bool {
        self.vel == Vec2::ZERO
    }

    /// Recenter and stop the ball. The entity is reused, never respawned.
    pub fn reset(&mut self, center: Vec2) {
        self.body.pos = center;
        self.vel = Vec2::ZERO;
    }
}

/// Paddle component - one per side
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub side: u8, // 0 = left/local, 1 = right/opponent
    pub body: Aabb,
    pub score: u32,
}

impl Paddle {
    pub fn new(side: u8, pos: Vec2) -> Self {
        Self {
            side,
            body: Aabb::new(pos, Vec2::new(Params::PADDLE_WIDTH, Params::PADDLE_HEIGHT)),
            score: 0,
        }
    }
}
