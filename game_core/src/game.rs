//! Match session: owns the entities, runs the frame loop, renders.

use crate::audio::Audio;
use crate::components::{Ball, Paddle};
use crate::font::DigitFont;
use crate::geometry::{set_length, Aabb};
use crate::params::{Config, Params};
use crate::render::Bitmap;
use crate::resources::{Events, GameRng};
use crate::systems::{bounce_walls, check_scoring, collide_paddles, move_ball, track_ball};
use glam::Vec2;
use hecs::World;
use rand::Rng;

/// One running match. Constructed once at startup and driven by the
/// host's frame and pointer callbacks for the life of the process.
pub struct Game {
    world: World,
    config: Config,
    rng: GameRng,
    events: Events,
    font: DigitFont,
    surface: Bitmap,
    audio: Box<dyn Audio>,
    last_timestamp: Option<f64>,
}

impl Game {
    pub fn new(config: Config, audio: Box<dyn Audio>) -> Self {
        Self::with_rng(config, audio, GameRng::from_entropy())
    }

    /// Seeded constructor for deterministic play
    pub fn with_seed(config: Config, audio: Box<dyn Audio>, seed: u64) -> Self {
        Self::with_rng(config, audio, GameRng::new(seed))
    }

    fn with_rng(config: Config, audio: Box<dyn Audio>, rng: GameRng) -> Self {
        let mut world = World::new();
        let center = config.center();
        world.spawn((Ball::new(center),));
        world.spawn((Paddle::new(0, Vec2::new(config.paddle_x(0), center.y)),));
        world.spawn((Paddle::new(1, Vec2::new(config.paddle_x(1), center.y)),));

        let surface = Bitmap::new(config.surface_width as usize, config.surface_height as usize);

        Self {
            world,
            config,
            rng,
            events: Events::new(),
            font: DigitFont::new(),
            surface,
            audio,
            last_timestamp: None,
        }
    }

    /// Host animation tick. The first call only records the timestamp
    /// to establish a baseline delta; every later call advances the
    /// match by the elapsed time.
    pub fn on_frame(&mut self, timestamp_ms: f64) {
        if let Some(last) = self.last_timestamp {
            let dt = ((timestamp_ms - last) / 1000.0) as f32;
            self.update(dt);
        }
        self.last_timestamp = Some(timestamp_ms);
    }

    /// Advance the match by dt seconds and redraw.
    pub fn update(&mut self, dt: f32) {
        self.events.clear();

        move_ball(&mut self.world, dt);

        if let Some(side) = check_scoring(&mut self.world, &self.config) {
            self.events.scored_by = Some(side);
            log::info!(
                "side {} scores: {} - {}",
                side,
                self.score(0),
                self.score(1)
            );
            self.reset();
        }

        bounce_walls(&mut self.world, &self.config, &mut self.events);
        track_ball(&mut self.world);
        collide_paddles(&mut self.world, &mut self.rng, &mut self.events);

        self.draw();
    }

    /// Put the ball back at the center, idle, and stop the serve sound.
    pub fn reset(&mut self) {
        let center = self.config.center();
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            ball.reset(center);
        }
        self.audio.pause();
    }

    /// Arm the serve. Does nothing unless the ball is idle: a random
    /// horizontal kick of +-300, a vertical kick in [-300, 300), then
    /// the whole vector normalized to the serve speed.
    pub fn serve(&mut self) {
        for (_entity, ball) in self.world.query_mut::<&mut Ball>() {
            if ball.is_idle() {
                let sign = if self.rng.0.gen_bool(0.5) { 1.0 } else { -1.0 };
                ball.vel.x = Params::SERVE_KICK * sign;
                ball.vel.y = Params::SERVE_KICK * (self.rng.0.gen::<f32>() * 2.0 - 1.0);
                ball.vel = set_length(ball.vel, Params::SERVE_SPEED);
                self.events.served = true;
                log::debug!("serve armed: vel {:?}", ball.vel);
            }
        }
    }

    /// Host click: arm the serve and start the serve sound.
    pub fn click(&mut self) {
        self.serve();
        self.audio.play();
    }

    /// Host pointer move. frac is the pointer's vertical position
    /// normalized to the displayed surface, 0 at the top.
    pub fn pointer_moved(&mut self, frac: f32) {
        let y = self.config.surface_height * frac;
        for (_entity, paddle) in self.world.query_mut::<&mut Paddle>() {
            if paddle.side == 0 {
                paddle.body.pos.y = y;
            }
        }
    }

    /// Repaint the whole surface: background, ball, paddles, scores.
    pub fn draw(&mut self) {
        self.surface.clear(Params::BACKGROUND);

        let mut scores = [0u32; 2];
        {
            let mut query = self.world.query::<&Ball>();
            for (_entity, ball) in query.iter() {
                fill_box(&mut self.surface, &ball.body);
            }
        }
        {
            let mut query = self.world.query::<&Paddle>();
            for (_entity, paddle) in query.iter() {
                fill_box(&mut self.surface, &paddle.body);
                scores[paddle.side as usize] = paddle.score;
            }
        }

        self.draw_scores(scores);
    }

    /// Each score is centered within its owner's third of the surface,
    /// drawn digit by digit with a fixed advance.
    fn draw_scores(&mut self, scores: [u32; 2]) {
        let align = self.config.surface_width / 3.0;
        let advance = Params::DIGIT_ADVANCE as f32;

        for (side, score) in scores.iter().enumerate() {
            let digits: Vec<usize> = score
                .to_string()
                .bytes()
                .map(|b| (b - b'0') as usize)
                .collect();
            let offset = align * (side as f32 + 1.0)
                - (advance * digits.len() as f32 / 2.0 + Params::CELL_PX as f32) / 2.0;
            for (i, &digit) in digits.iter().enumerate() {
                let x = (offset + i as f32 * advance) as i32;
                self.surface
                    .blit(self.font.glyph(digit), x, Params::SCORE_TOP);
            }
        }
    }

    pub fn surface(&self) -> &Bitmap {
        &self.surface
    }

    pub fn config(&self) -> &Config {
        &self.config
    }

    /// Flags raised by the most recent update
    pub fn events(&self) -> &Events {
        &self.events
    }

    pub fn score(&self, side: u8) -> u32 {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.score)
            .unwrap_or(0)
    }

    /// Snapshot of the ball component
    pub fn ball(&self) -> Ball {
        self.world
            .query::<&Ball>()
            .iter()
            .next()
            .map(|(_e, b)| *b)
            .expect("a match always has a ball")
    }

    /// Snapshot of one paddle component
    pub fn paddle(&self, side: u8) -> Paddle {
        self.world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| *p)
            .expect("a match always has both paddles")
    }
}

fn fill_box(surface: &mut Bitmap, body: &Aabb) {
    surface.fill_rect(
        body.left() as i32,
        body.top() as i32,
        body.size.x as u32,
        body.size.y as u32,
        Params::FOREGROUND,
    );
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::audio::NullAudio;

    fn new_game() -> Game {
        Game::with_seed(Config::new(), Box::new(NullAudio), 12345)
    }

    #[test]
    fn test_match_starts_idle_at_center() {
        let game = new_game();
        let ball = game.ball();
        assert_eq!(ball.body.pos, Vec2::new(400.0, 300.0));
        assert!(ball.is_idle());
        assert_eq!(game.paddle(0).body.pos, Vec2::new(40.0, 300.0));
        assert_eq!(game.paddle(1).body.pos, Vec2::new(760.0, 300.0));
    }

    #[test]
    fn test_serve_speed_is_normalized() {
        let mut game = new_game();
        game.serve();
        let ball = game.ball();
        assert!((ball.vel.length() - 200.0).abs() < 1e-3);
        assert!(ball.vel.x != 0.0);
    }

    #[test]
    fn test_serve_is_idempotent_until_reset() {
        let mut game = new_game();
        game.serve();
        let first = game.ball().vel;
        game.serve();
        assert_eq!(game.ball().vel, first, "second serve is a no-op");

        game.reset();
        game.serve();
        assert!(!game.ball().is_idle(), "serve works again after a reset");
    }

    #[test]
    fn test_first_frame_establishes_baseline() {
        let mut game = new_game();
        game.serve();
        let before = game.ball().body.pos;

        game.on_frame(16.0);
        assert_eq!(game.ball().body.pos, before, "no physics on the first tick");

        game.on_frame(32.0);
        assert_ne!(game.ball().body.pos, before, "second tick advances the ball");
    }

    #[test]
    fn test_pointer_moves_local_paddle() {
        let mut game = new_game();
        game.pointer_moved(0.25);
        assert_eq!(game.paddle(0).body.pos.y, 150.0);
        assert_eq!(game.paddle(1).body.pos.y, 300.0);
    }

    #[test]
    fn test_draw_paints_ball_at_center() {
        let mut game = new_game();
        game.draw();
        let surface = game.surface();
        // Center pixel sits inside the ball's 10x10 box
        let idx = 300 * surface.width + 400;
        assert_eq!(surface.pixels[idx], Params::FOREGROUND);
        // A corner pixel is background
        assert_eq!(surface.pixels[0], Params::BACKGROUND);
    }

    #[test]
    fn test_draw_paints_zero_scores() {
        let mut game = new_game();
        game.draw();
        let surface = game.surface();
        // Side 0's glyph block is centered on width/3; the digit's top
        // left cell starts at offset = 800/3 - (40/2 + 10)/2 ~ 251.6.
        let x = (800.0_f32 / 3.0 - 15.0) as usize;
        let y = Params::SCORE_TOP as usize + 5;
        assert_eq!(surface.pixels[y * surface.width + x + 5], Params::FOREGROUND);
    }
}
