use crate::components::{Ball, Paddle};
use hecs::World;

/// Advance the ball along its velocity
pub fn move_ball(world: &mut World, dt: f32) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.body.pos += ball.vel * dt;
    }
}

/// The opponent paddle copies the ball's vertical position every
/// frame. Perfect tracking, no speed limit; the opponent only loses
/// to spin at the corners.
pub fn track_ball(world: &mut World) {
    let ball_y = {
        let mut query = world.query::<&Ball>();
        query.iter().next().map(|(_e, ball)| ball.body.pos.y)
    };
    let ball_y = match ball_y {
        Some(y) => y,
        None => return,
    };
    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == 1 {
            paddle.body.pos.y = ball_y;
        }
    }
}
