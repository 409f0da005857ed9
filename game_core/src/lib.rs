pub mod components;
pub mod config;
pub mod designs;
pub mod geom;
pub mod grid;
pub mod params;
pub mod resources;
pub mod systems;

pub use components::*;
pub use config::*;
pub use geom::*;
pub use grid::*;
pub use params::*;
pub use resources::*;

use hecs::World;
use systems::*;

/// Run one tick of the deterministic PixelPaddle simulation. The caller
/// drives this at a fixed cadence; velocities are pixels per tick.
#[allow(clippy::too_many_arguments)]
pub fn step(
    world: &mut World,
    time: &mut Time,
    config: &Config,
    score: &mut Score,
    events: &mut Events,
    net_queue: &mut NetQueue,
    rally: &mut RallyState,
    rng: &mut GameRng,
) {
    // Clear events at start of tick
    events.clear();

    // 1. Ingest movement commands (apply to paddle intents)
    ingest_inputs(world, net_queue);

    // 2. Move paddles, pixel-validated against their zones
    move_paddles(world, time, config);

    // 3. Move ball
    move_ball(world, time);

    // 4. Check collisions (ball vs paddle pixels, walls)
    check_collisions(world, config, events, rally, rng);

    // 5. Check scoring (ball exited the field)
    check_scoring(world, config, score, events, rally, rng);

    time.now += time.dt;
}

/// Helper to create a paddle entity with its pixel-art shape
pub fn create_paddle(
    world: &mut World,
    player_id: u8,
    pos: glam::Vec2,
    grid: PaddleGrid,
) -> hecs::Entity {
    world.spawn((Paddle::new(player_id, pos), grid, PaddleIntent::new()))
}

/// Helper to create the ball entity
pub fn create_ball(world: &mut World, pos: glam::Vec2, vel: glam::Vec2) -> hecs::Entity {
    world.spawn((Ball::new(pos, vel),))
}
