use hecs::World;

use crate::components::{Paddle, PaddleIntent};
use crate::resources::NetQueue;

/// Drain queued movement commands into paddle intents. The last command
/// for a player in a tick wins; players with no command hold still.
pub fn ingest_inputs(world: &mut World, net_queue: &mut NetQueue) {
    for (_entity, (paddle, intent)) in world.query_mut::<(&Paddle, &mut PaddleIntent)>() {
        intent.vel = glam::Vec2::ZERO;
        for (player_id, vel) in &net_queue.inputs {
            if *player_id == paddle.player_id {
                intent.vel = *vel;
            }
        }
    }
    net_queue.clear();
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::{create_paddle, grid::PaddleGrid};
    use glam::Vec2;

    #[test]
    fn test_inputs_become_intents() {
        let mut world = World::new();
        let left = create_paddle(&mut world, 0, Vec2::new(50.0, 200.0), PaddleGrid::new());
        let right = create_paddle(&mut world, 1, Vec2::new(650.0, 200.0), PaddleGrid::new());

        let mut queue = NetQueue::new();
        queue.push_input(1, Vec2::new(-4.0, 2.0));
        ingest_inputs(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().vel, Vec2::new(-4.0, 2.0));
        assert_eq!(world.get::<&PaddleIntent>(left).unwrap().vel, Vec2::ZERO, "no command holds still");
        assert!(queue.inputs.is_empty(), "queue drained");
    }

    #[test]
    fn test_last_command_wins() {
        let mut world = World::new();
        let right = create_paddle(&mut world, 1, Vec2::new(650.0, 200.0), PaddleGrid::new());

        let mut queue = NetQueue::new();
        queue.push_input(1, Vec2::new(4.0, 0.0));
        queue.push_input(1, Vec2::new(0.0, 4.0));
        ingest_inputs(&mut world, &mut queue);

        assert_eq!(world.get::<&PaddleIntent>(right).unwrap().vel, Vec2::new(0.0, 4.0));
    }
}
