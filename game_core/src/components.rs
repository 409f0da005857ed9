use glam::Vec2;

/// Paddle component. `pos` is the top-left anchor of the paddle's 16x16
/// cell grid, not its visual center.
#[derive(Debug, Clone, Copy)]
pub struct Paddle {
    pub player_id: u8, // 0 = left, 1 = right (AI)
    pub pos: Vec2,
}

impl Paddle {
    pub fn new(player_id: u8, pos: Vec2) -> Self {
        Self { player_id, pos }
    }
}

/// The ball
#[derive(Debug, Clone, Copy)]
pub struct Ball {
    pub pos: Vec2,
    pub vel: Vec2,
}

impl Ball {
    pub fn new(pos: Vec2, vel: Vec2) -> Self {
        Self { pos, vel }
    }

    /// Serve from center: full speed toward a random side, with a vertical
    /// component up to half the serve speed either way
    pub fn serve(&mut self, spawn: Vec2, speed: f32, rng: &mut crate::GameRng) {
        use rand::Rng;
        self.pos = spawn;
        let vx = if rng.0.gen_bool(0.5) { speed } else { -speed };
        let vy = rng.0.gen_range(-0.5..0.5) * speed;
        self.vel = Vec2::new(vx, vy);
    }
}

/// Per-tick movement command for a paddle. Paddles move freely in both
/// axes within their zone.
#[derive(Debug, Clone, Copy, Default)]
pub struct PaddleIntent {
    pub vel: Vec2,
}

impl PaddleIntent {
    pub fn new() -> Self {
        Self::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::GameRng;

    #[test]
    fn test_serve_leaves_center_at_full_speed() {
        let mut rng = GameRng::new(7);
        let mut ball = Ball::new(Vec2::ZERO, Vec2::ZERO);
        ball.serve(Vec2::new(450.0, 250.0), 4.0, &mut rng);

        assert_eq!(ball.pos, Vec2::new(450.0, 250.0));
        assert_eq!(ball.vel.x.abs(), 4.0, "horizontal serve is full speed");
        assert!(ball.vel.y.abs() <= 2.0, "vertical component within half speed");
    }
}
