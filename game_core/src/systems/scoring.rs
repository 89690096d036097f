use crate::components::{Ball, Paddle};
use crate::params::Config;
use hecs::World;

/// Detect the ball leaving the surface horizontally and credit the
/// side it was travelling toward: a ball exiting the left edge scores
/// for side 1, the right edge for side 0. The caller resets the match.
pub fn check_scoring(world: &mut World, config: &Config) -> Option<u8> {
    let scorer = {
        let mut query = world.query::<&Ball>();
        query.iter().next().and_then(|(_e, ball)| {
            if ball.body.left() < 0.0 || ball.body.right() > config.surface_width {
                Some(if ball.vel.x < 0.0 { 1 } else { 0 })
            } else {
                None
            }
        })
    }?;

    for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
        if paddle.side == scorer {
            paddle.score += 1;
        }
    }
    Some(scorer)
}

#[cfg(test)]
mod tests {
    use super::*;
    use glam::Vec2;

    fn spawn_match(world: &mut World, ball_pos: Vec2, ball_vel: Vec2) {
        let mut ball = Ball::new(ball_pos);
        ball.vel = ball_vel;
        world.spawn((ball,));
        world.spawn((Paddle::new(0, Vec2::new(40.0, 300.0)),));
        world.spawn((Paddle::new(1, Vec2::new(760.0, 300.0)),));
    }

    fn score_of(world: &World, side: u8) -> u32 {
        world
            .query::<&Paddle>()
            .iter()
            .find(|(_e, p)| p.side == side)
            .map(|(_e, p)| p.score)
            .unwrap()
    }

    #[test]
    fn test_left_exit_credits_right_side() {
        let mut world = World::new();
        spawn_match(&mut world, Vec2::new(-1.0, 300.0), Vec2::new(-150.0, 0.0));

        let scorer = check_scoring(&mut world, &Config::new());

        assert_eq!(scorer, Some(1), "ball heading left exits past side 0");
        assert_eq!(score_of(&world, 1), 1);
        assert_eq!(score_of(&world, 0), 0);
    }

    #[test]
    fn test_right_exit_credits_left_side() {
        let mut world = World::new();
        spawn_match(&mut world, Vec2::new(801.0, 300.0), Vec2::new(150.0, 0.0));

        let scorer = check_scoring(&mut world, &Config::new());

        assert_eq!(scorer, Some(0));
        assert_eq!(score_of(&world, 0), 1);
        assert_eq!(score_of(&world, 1), 0);
    }

    #[test]
    fn test_no_score_in_bounds() {
        let mut world = World::new();
        spawn_match(&mut world, Vec2::new(400.0, 300.0), Vec2::new(150.0, 0.0));

        let scorer = check_scoring(&mut world, &Config::new());

        assert_eq!(scorer, None);
        assert_eq!(score_of(&world, 0), 0);
        assert_eq!(score_of(&world, 1), 0);
    }

    #[test]
    fn test_scores_accumulate() {
        let mut world = World::new();
        spawn_match(&mut world, Vec2::new(801.0, 300.0), Vec2::new(150.0, 0.0));

        check_scoring(&mut world, &Config::new());
        check_scoring(&mut world, &Config::new());

        assert_eq!(score_of(&world, 0), 2, "each out-of-bounds check scores");
    }
}
