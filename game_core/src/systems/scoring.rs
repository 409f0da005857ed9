use hecs::World;

use crate::components::{Ball, Paddle};
use crate::config::Config;
use crate::resources::{Events, GameRng, RallyState, Score};

/// Check if the ball left the field (scoring). Scoring resets the ball to
/// a fresh serve, returns both paddles to their start positions and
/// clears the rally count.
pub fn check_scoring(
    world: &mut World,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    rally: &mut RallyState,
    rng: &mut GameRng,
) {
    let mut scored = false;
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        let exited = if ball.pos.x < 0.0 {
            score.increment_right();
            events.right_scored = true;
            true
        } else if ball.pos.x > config.field_width {
            score.increment_left();
            events.left_scored = true;
            true
        } else {
            false
        };
        if exited {
            ball.serve(config.ball_spawn(), config.ball_speed, rng);
            scored = true;
        }
    }

    if scored {
        rally.reset();
        for (_entity, paddle) in world.query_mut::<&mut Paddle>() {
            paddle.pos = config.paddle_start(paddle.player_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::grid::{PaddleGrid, Preset};
    use crate::{create_ball, create_paddle};
    use glam::Vec2;

    fn setup_world() -> (World, Config, Score, Events, RallyState, GameRng) {
        (
            World::new(),
            Config::new(),
            Score::new(),
            Events::new(),
            RallyState::new(),
            GameRng::new(12345),
        )
    }

    #[test]
    fn test_right_player_scores_when_ball_exits_left() {
        let (mut world, config, mut score, mut events, mut rally, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(-0.1, 250.0), Vec2::new(-4.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rally, &mut rng);

        assert_eq!(score.right, 1, "Right player should score");
        assert_eq!(score.left, 0);
        assert!(events.right_scored);
    }

    #[test]
    fn test_left_player_scores_when_ball_exits_right() {
        let (mut world, config, mut score, mut events, mut rally, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(900.1, 250.0), Vec2::new(4.0, 0.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rally, &mut rng);

        assert_eq!(score.left, 1, "Left player should score");
        assert_eq!(score.right, 0);
        assert!(events.left_scored);
    }

    #[test]
    fn test_scoring_resets_ball_and_paddles() {
        let (mut world, config, mut score, mut events, mut rally, mut rng) = setup_world();
        rally.rallies = 8;
        create_ball(&mut world, Vec2::new(-0.1, 30.0), Vec2::new(-4.0, 0.0));
        let paddle = create_paddle(
            &mut world,
            1,
            Vec2::new(800.0, 400.0),
            PaddleGrid::preset(Preset::Rectangle),
        );

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rally, &mut rng);

        for (_e, ball) in world.query::<&Ball>().iter() {
            assert_eq!(ball.pos, config.ball_spawn(), "Ball back at center");
            assert_eq!(ball.vel.x.abs(), config.ball_speed, "Fresh serve");
        }
        assert_eq!(
            world.get::<&Paddle>(paddle).unwrap().pos,
            config.paddle_start(1),
            "Paddle back at its start position"
        );
        assert_eq!(rally.rallies, 0, "Rally count cleared");
    }

    #[test]
    fn test_no_scoring_when_ball_in_bounds() {
        let (mut world, config, mut score, mut events, mut rally, mut rng) = setup_world();
        create_ball(&mut world, Vec2::new(450.0, 250.0), Vec2::new(4.0, 2.0));

        check_scoring(&mut world, &config, &mut score, &mut events, &mut rally, &mut rng);

        assert_eq!(score.left, 0);
        assert_eq!(score.right, 0);
        assert!(!events.left_scored && !events.right_scored);
    }
}
