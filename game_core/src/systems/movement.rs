use glam::Vec2;
use hecs::World;

use crate::components::{Ball, Paddle, PaddleIntent};
use crate::config::Config;
use crate::grid::PaddleGrid;
use crate::resources::Time;

/// Whether every active pixel of the paddle stays inside its zone at `pos`
fn paddle_pos_valid(config: &Config, player_id: u8, grid: &PaddleGrid, pos: Vec2) -> bool {
    let scale = config.paddle_scale;
    grid.active_cells().all(|(px, py)| {
        config.cell_in_zone(
            player_id,
            pos.x + px as f32 * scale,
            pos.y + py as f32 * scale,
        )
    })
}

/// Apply paddle movement based on intents. A move that would push any
/// active pixel out of the player's zone is retried x-only then y-only,
/// so paddles slide along walls and fences instead of sticking.
pub fn move_paddles(world: &mut World, time: &Time, config: &Config) {
    for (_entity, (paddle, grid, intent)) in
        world.query_mut::<(&mut Paddle, &PaddleGrid, &PaddleIntent)>()
    {
        if intent.vel == Vec2::ZERO {
            continue;
        }
        let delta = intent.vel * time.dt;

        let full = paddle.pos + delta;
        if paddle_pos_valid(config, paddle.player_id, grid, full) {
            paddle.pos = full;
            continue;
        }

        let x_only = paddle.pos + Vec2::new(delta.x, 0.0);
        if paddle_pos_valid(config, paddle.player_id, grid, x_only) {
            paddle.pos = x_only;
        }
        let y_only = paddle.pos + Vec2::new(0.0, delta.y);
        if paddle_pos_valid(config, paddle.player_id, grid, y_only) {
            paddle.pos = y_only;
        }
    }
}

/// Move ball based on velocity
pub fn move_ball(world: &mut World, time: &Time) {
    for (_entity, ball) in world.query_mut::<&mut Ball>() {
        ball.pos += ball.vel * time.dt;
    }
}
