use crate::components::{Ball, Paddle};
use crate::geometry::{set_length, Aabb};
use crate::params::{Config, Params};
use crate::resources::{Events, GameRng};
use hecs::World;
use rand::Rng;

/// Bounce the ball off the top and bottom edges. Only the velocity
/// flips; the position stays where integration put it.
pub fn bounce_walls(world: &mut World, config: &Config, events: &mut Events) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        if ball.body.top() < 0.0 || ball.body.bottom() > config.surface_height {
            ball.vel.y = -ball.vel.y;
            events.ball_hit_wall = true;
        }
    }
}

/// Resolve ball contact against each paddle, left paddle first.
///
/// Contact always reflects the horizontal velocity, whichever edge was
/// struck, then adds spin and ramps the speed: the final magnitude is
/// 1.05x the magnitude captured before the spin was added. There is no
/// contact debounce; a ball still overlapping on the next frame
/// triggers again.
pub fn collide_paddles(world: &mut World, rng: &mut GameRng, events: &mut Events) {
    let mut paddles: Vec<(u8, Aabb)> = {
        let mut query = world.query::<&Paddle>();
        query.iter().map(|(_e, p)| (p.side, p.body)).collect()
    };
    paddles.sort_by_key(|(side, _)| *side);

    for (_side, body) in paddles {
        for (_entity, ball) in world.query_mut::<&mut Ball>() {
            if body.overlaps(&ball.body) {
                let speed = ball.vel.length();
                ball.vel.x = -ball.vel.x;
                ball.vel.y += Params::PADDLE_SPIN * (rng.0.gen::<f32>() - 0.5);
                ball.vel = set_length(ball.vel, speed * Params::RALLY_SPEEDUP);
                events.ball_hit_paddle = true;
            }
        }
    }
}
