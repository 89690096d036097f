/// Game tuning parameters
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Surface
    pub const SURFACE_WIDTH: f32 = 800.0;
    pub const SURFACE_HEIGHT: f32 = 600.0;

    // Ball
    pub const BALL_WIDTH: f32 = 10.0;
    pub const BALL_HEIGHT: f32 = 10.0;

    // Paddle
    pub const PADDLE_WIDTH: f32 = 11.0;
    pub const PADDLE_HEIGHT: f32 = 100.0;
    pub const PADDLE_MARGIN: f32 = 40.0;

    // Serve: per-axis kick applied while idle, then normalized
    pub const SERVE_KICK: f32 = 300.0;
    pub const SERVE_SPEED: f32 = 200.0;

    // Rally: spin range added on paddle contact, speed ramp per contact
    pub const PADDLE_SPIN: f32 = 300.0;
    pub const RALLY_SPEEDUP: f32 = 1.05;

    // Score glyphs
    pub const CELL_PX: u32 = 10;
    pub const GLYPH_COLS: u32 = 3;
    pub const GLYPH_ROWS: u32 = 5;
    pub const DIGIT_ADVANCE: i32 = (Self::CELL_PX * 4) as i32;
    pub const SCORE_TOP: i32 = 20;

    // Colors (0x00RRGGBB)
    pub const BACKGROUND: u32 = 0x0000_0000;
    pub const FOREGROUND: u32 = 0x0028_A745;
}

/// Match configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub surface_width: f32,
    pub surface_height: f32,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            surface_width: Params::SURFACE_WIDTH,
            surface_height: Params::SURFACE_HEIGHT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Surface center, where the ball rests between rallies
    pub fn center(&self) -> glam::Vec2 {
        glam::Vec2::new(self.surface_width / 2.0, self.surface_height / 2.0)
    }

    /// Fixed X position for a paddle based on its side
    pub fn paddle_x(&self, side: u8) -> f32 {
        if side == 0 {
            Params::PADDLE_MARGIN
        } else {
            self.surface_width - Params::PADDLE_MARGIN
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_paddle_x() {
        let config = Config::new();
        assert_eq!(config.paddle_x(0), 40.0, "Left paddle X position");
        assert_eq!(config.paddle_x(1), 760.0, "Right paddle X position");
    }

    #[test]
    fn test_config_center() {
        let config = Config::new();
        assert_eq!(config.center(), glam::Vec2::new(400.0, 300.0));
    }
}
