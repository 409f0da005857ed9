use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::geom::Aabb;
use crate::grid::PaddleGrid;
use crate::params::Params;
use crate::resources::{Events, GameRng, RallyState};

// Fraction of the paddle's own velocity imparted to the ball on contact
const PADDLE_INFLUENCE: f32 = 0.3;

/// Check ball collisions with walls and paddle pixels. Paddles are a set
/// of scaled cell boxes, so holes in a design let the ball through.
pub fn check_collisions(
    world: &mut World,
    config: &Config,
    events: &mut Events,
    rally: &mut RallyState,
    rng: &mut GameRng,
) {
    let ball_data = {
        let mut ball_query = world.query::<&Ball>();
        ball_query
            .iter()
            .next()
            .map(|(_e, ball)| (ball.pos, ball.vel))
    };

    let (mut ball_pos, mut ball_vel) = match ball_data {
        Some(data) => data,
        None => return, // No ball in world
    };

    // Top/bottom wall bounces
    let radius = config.ball_radius;
    if ball_pos.y - radius <= 0.0 || ball_pos.y + radius >= config.field_height {
        ball_vel.y = -ball_vel.y;
        ball_pos.y = ball_pos.y.clamp(radius, config.field_height - radius);
        events.ball_hit_wall = true;
    }

    // Paddle pixel collisions
    let paddles: Vec<(Vec2, PaddleGrid, Vec2)> = world
        .query::<(&Paddle, &PaddleGrid, &PaddleIntent)>()
        .iter()
        .map(|(_e, (p, grid, intent))| (p.pos, *grid, intent.vel))
        .collect();

    let scale = config.paddle_scale;
    'paddles: for (paddle_pos, grid, paddle_vel) in paddles {
        // Nearest intersecting cell decides the bounce
        let mut hit: Option<(Aabb, f32)> = None;
        for (px, py) in grid.active_cells() {
            let cell = Aabb::cell(
                paddle_pos + Vec2::new(px as f32, py as f32) * scale,
                scale,
            );
            if cell.intersects_circle(ball_pos, radius) {
                let dist = (ball_pos - cell.center()).length_squared();
                if hit.map(|(_, d)| dist < d).unwrap_or(true) {
                    hit = Some((cell, dist));
                }
            }
        }

        let Some((cell, _)) = hit else { continue };
        let offset = ball_pos - cell.center();
        let speed = ball_vel.length();

        // Reflect along the dominant contact axis, only when the ball is
        // actually moving into the cell
        if offset.x.abs() >= offset.y.abs() {
            if ball_vel.x * offset.x >= 0.0 {
                continue 'paddles;
            }
            ball_vel.x = -ball_vel.x;
            ball_pos.x = if offset.x >= 0.0 {
                cell.max.x + radius
            } else {
                cell.min.x - radius
            };
        } else {
            if ball_vel.y * offset.y >= 0.0 {
                continue 'paddles;
            }
            ball_vel.y = -ball_vel.y;
            ball_pos.y = if offset.y >= 0.0 {
                cell.max.y + radius
            } else {
                cell.min.y - radius
            };
        }

        // A moving paddle imparts some of its velocity, speed preserved
        if speed > f32::EPSILON {
            ball_vel += paddle_vel * PADDLE_INFLUENCE;
            ball_vel = ball_vel.normalize_or_zero() * speed;
        }

        events.ball_hit_paddle = true;
        let speedup = rally.register_hit();
        if config.speed_increase && speedup {
            let new_speed = (speed + Params::RALLY_SPEEDUP_STEP * config.ball_speed)
                .min(config.max_ball_speed());
            ball_vel = ball_vel.normalize_or_zero() * new_speed;
        }
        break;
    }

    // Keep the ball from freezing mid-rally
    if ball_vel.length() < Params::BALL_SPEED_MIN {
        let dir = if ball_vel.x.abs() < 0.1 && ball_vel.y.abs() < 0.1 {
            use rand::Rng;
            let angle: f32 = rng.0.gen_range(0.0..std::f32::consts::TAU);
            Vec2::new(angle.cos(), angle.sin())
        } else {
            ball_vel.normalize_or_zero()
        };
        ball_vel = dir * Params::BALL_SPEED_MIN;
    }

    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos = ball_pos;
        ball.vel = ball_vel;
    }
}
