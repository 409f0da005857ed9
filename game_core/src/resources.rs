use glam::Vec2;

use crate::params::Params;

/// Time resource for tracking simulation ticks
#[derive(Debug, Clone, Copy)]
pub struct Time {
    pub dt: f32,  // Delta for this step, in ticks
    pub now: f32, // Total elapsed ticks
}

impl Time {
    pub fn new(dt: f32, now: f32) -> Self {
        Self { dt, now }
    }
}

impl Default for Time {
    fn default() -> Self {
        Self {
            dt: Params::FIXED_DT,
            now: 0.0,
        }
    }
}

/// Game score tracking
#[derive(Debug, Clone, Copy, Default)]
pub struct Score {
    pub left: u8,
    pub right: u8,
}

impl Score {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn increment_left(&mut self) {
        self.left += 1;
    }

    pub fn increment_right(&mut self) {
        self.right += 1;
    }

    pub fn has_winner(&self, win_score: u8) -> Option<u8> {
        if self.left >= win_score {
            Some(0)
        } else if self.right >= win_score {
            Some(1)
        } else {
            None
        }
    }
}

/// Random number generator (seedable for deterministic tests)
pub struct GameRng(pub rand::rngs::StdRng);

impl GameRng {
    pub fn new(seed: u64) -> Self {
        use rand::SeedableRng;
        Self(rand::rngs::StdRng::seed_from_u64(seed))
    }
}

impl Default for GameRng {
    fn default() -> Self {
        Self::new(12345)
    }
}

/// Events that occurred during this tick
#[derive(Debug, Clone, Default)]
pub struct Events {
    pub left_scored: bool,
    pub right_scored: bool,
    pub ball_hit_paddle: bool,
    pub ball_hit_wall: bool,
}

impl Events {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.left_scored = false;
        self.right_scored = false;
        self.ball_hit_paddle = false;
        self.ball_hit_wall = false;
    }
}

/// Rally bookkeeping for the speed-increase rule: every
/// `RALLIES_PER_SPEEDUP` paddle hits, the ball gains a speed step.
#[derive(Debug, Clone, Copy, Default)]
pub struct RallyState {
    pub rallies: u32,
}

impl RallyState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Register a paddle hit; true when this hit triggers a speed-up
    pub fn register_hit(&mut self) -> bool {
        self.rallies += 1;
        self.rallies % Params::RALLIES_PER_SPEEDUP == 0
    }

    pub fn reset(&mut self) {
        self.rallies = 0;
    }
}

/// Pending movement commands, one per player per tick
#[derive(Debug, Clone, Default)]
pub struct NetQueue {
    pub inputs: Vec<(u8, Vec2)>, // (player_id, velocity)
}

impl NetQueue {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn clear(&mut self) {
        self.inputs.clear();
    }

    pub fn push_input(&mut self, player_id: u8, vel: Vec2) {
        self.inputs.push((player_id, vel));
    }
}
