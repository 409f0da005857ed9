use glam::Vec2;

use game_core::Ball;

use crate::params::Tuning;

/// Forecast of the ball's arrival at a target x-plane. Ephemeral: valid
/// for the tick it was computed in.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Prediction {
    /// Ball y at the plane
    pub y: f32,
    /// Simulated ticks until arrival
    pub time: f32,
    /// Wall bounces along the way
    pub bounces: u32,
    /// Ball velocity at arrival
    pub final_vel: Vec2,
    /// Quality score in [0.3, 1.0], decaying per bounce
    pub confidence: f32,
}

/// Simulate straight-line ball motion with elastic top/bottom reflections
/// until it reaches `target_x`. Returns `None` when the ball is not
/// approaching the plane or the time/bounce budget runs out; callers
/// treat that as "fall back to defensive positioning", not as a fault.
///
/// The step size is fixed so the forecast is a pure function of ball
/// state, independent of frame timing.
pub fn predict(ball: &Ball, target_x: f32, tuning: &Tuning) -> Option<Prediction> {
    if ball.vel.x <= 0.0 {
        return None; // Ball moving away
    }

    let mut pos = ball.pos;
    let vel = ball.vel;
    let mut vy = vel.y;
    let mut time = 0.0f32;
    let mut bounces = 0u32;
    let dt = tuning.predict_dt;
    let floor = tuning.ball_radius;
    let ceiling = tuning.field_height - tuning.ball_radius;

    while pos.x < target_x && time < tuning.predict_max_time && bounces <= tuning.predict_max_bounces
    {
        pos.x += vel.x * dt;
        pos.y += vy * dt;
        time += dt;

        if pos.y <= floor || pos.y >= ceiling {
            vy = -vy;
            pos.y = pos.y.clamp(floor, ceiling);
            bounces += 1;
        }
    }

    if pos.x >= target_x && time < tuning.predict_max_time && bounces <= tuning.predict_max_bounces
    {
        Some(Prediction {
            y: pos.y,
            time,
            bounces,
            final_vel: Vec2::new(vel.x, vy),
            confidence: (1.0 - bounces as f32 * tuning.confidence_loss_per_bounce)
                .max(tuning.confidence_floor),
        })
    } else {
        None
    }
}
