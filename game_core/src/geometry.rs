use glam::Vec2;

/// Rescale a vector to the given magnitude, preserving its direction.
///
/// A zero vector has no direction to preserve, so it is returned
/// unchanged instead of propagating non-finite components.
pub fn set_length(v: Vec2, target: f32) -> Vec2 {
    let len = v.length();
    if len == 0.0 {
        return v;
    }
    v * (target / len)
}

/// Axis-aligned box, positioned by its center.
#[derive(Debug, Clone, Copy)]
pub struct Aabb {
    pub pos: Vec2,
    pub size: Vec2,
}

impl Aabb {
    pub fn new(pos: Vec2, size: Vec2) -> Self {
        Self { pos, size }
    }

    pub fn left(&self) -> f32 {
        self.pos.x - self.size.x / 2.0
    }

    pub fn right(&self) -> f32 {
        self.pos.x + self.size.x / 2.0
    }

    pub fn top(&self) -> f32 {
        self.pos.y - self.size.y / 2.0
    }

    pub fn bottom(&self) -> f32 {
        self.pos.y + self.size.y / 2.0
    }

    /// AABB overlap test, open at the edges (touching boxes do not overlap).
    pub fn overlaps(&self, other: &Aabb) -> bool {
        self.left() < other.right()
            && self.right() > other.left()
            && self.top() < other.bottom()
            && self.bottom() > other.top()
    }
}
