//! AI decision core for PixelPaddle's single-player opponent.
//!
//! Every tick the engine turns a ball snapshot, the AI paddle's position
//! and its pixel-art shape into a movement command: a trajectory
//! predictor forecasts where the ball will cross the defensive plane, a
//! priority chain of opportunity detectors (loop-around, chase,
//! interception) picks a tactic and a target, and the movement
//! synthesizer converts that into a bounded velocity. The whole core is
//! deterministic: same inputs, same command.

pub mod movement;
pub mod params;
pub mod predict;
pub mod shape;
pub mod tactics;
pub mod threat;

pub use movement::{Movement, MoveReason};
pub use params::Tuning;
pub use predict::{predict, Prediction};
pub use shape::ShapeProfile;
pub use tactics::{Opportunity, Strategy, VelocityStrategy};
pub use threat::{estimate, Threat, ThreatEstimate};

use glam::Vec2;

use game_core::{Ball, Paddle, PaddleGrid, GRID_CELLS};

/// Per-AI state carried across ticks. Caller-owned and passed into every
/// [`decide`] call, so multiple independent AIs can run side by side.
/// The shape profile is memoized here and recomputed only when the
/// paddle design changes.
#[derive(Debug, Clone)]
pub struct AiMemory {
    pub target: Vec2,
    pub strategy: Strategy,
    pub urgency: f32,
    pub velocity_strategy: Option<VelocityStrategy>,
    shape_cache: Option<(PaddleGrid, ShapeProfile)>,
}

impl Default for AiMemory {
    fn default() -> Self {
        Self::new()
    }
}

impl AiMemory {
    pub fn new() -> Self {
        Self {
            target: Vec2::new(650.0, 200.0),
            strategy: Strategy::default(),
            urgency: 0.0,
            velocity_strategy: None,
            shape_cache: None,
        }
    }

    fn profile(&mut self, grid: &PaddleGrid) -> ShapeProfile {
        match &self.shape_cache {
            Some((cached, profile)) if cached == grid => profile.clone(),
            _ => {
                let profile = ShapeProfile::analyze(grid);
                self.shape_cache = Some((*grid, profile.clone()));
                profile
            }
        }
    }
}

/// Compute the AI paddle's movement for this tick with the shipped
/// tuning. `difficulty` is consumed only by [`difficulty_label`]; the
/// tactical engine itself is difficulty-invariant.
pub fn decide(
    ball: &Ball,
    paddle: &Paddle,
    memory: &mut AiMemory,
    difficulty: u8,
    paddle_size: f32,
    max_speed: f32,
    grid: &PaddleGrid,
) -> Movement {
    decide_tuned(
        ball,
        paddle,
        memory,
        difficulty,
        paddle_size,
        max_speed,
        grid,
        &Tuning::default(),
    )
}

/// [`decide`] with explicit tuning, for simulations probing variants
#[allow(clippy::too_many_arguments)]
pub fn decide_tuned(
    ball: &Ball,
    paddle: &Paddle,
    memory: &mut AiMemory,
    _difficulty: u8,
    paddle_size: f32,
    max_speed: f32,
    grid: &PaddleGrid,
    tuning: &Tuning,
) -> Movement {
    let scale = paddle_size / GRID_CELLS as f32;
    let shape = memory.profile(grid);

    let opportunity = tactics::plan(ball, paddle.pos, &shape, scale, tuning);
    memory.target = opportunity.target;
    memory.strategy = opportunity.strategy;
    memory.urgency = opportunity.urgency;
    memory.velocity_strategy = opportunity.velocity_strategy;

    movement::synthesize(
        paddle.pos,
        memory.target,
        memory.urgency,
        memory.strategy,
        memory.velocity_strategy,
        ball,
        max_speed,
        tuning,
    )
}

/// Human-readable difficulty name for the settings screen
pub fn difficulty_label(difficulty: u8) -> &'static str {
    match difficulty {
        0..=2 => "Very Easy",
        3..=4 => "Easy",
        5..=6 => "Normal",
        7..=8 => "Hard",
        _ => "Expert",
    }
}
