use glam::Vec2;

use game_core::Ball;

use crate::params::Tuning;
use crate::tactics::{Strategy, VelocityStrategy};

/// Why the paddle is moving at contact instead of holding still
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum MoveReason {
    PowerHit,
    SoftReturn,
}

/// The per-tick movement command returned to the caller
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Movement {
    pub vel: Vec2,
    pub reason: Option<MoveReason>,
}

impl Movement {
    pub fn hold() -> Self {
        Self {
            vel: Vec2::ZERO,
            reason: None,
        }
    }
}

/// At-contact velocity override. An aggressive or smashing paddle moves
/// into the ball's path so its own momentum hardens the return; an
/// absorbing paddle moves with the ball to soften it. `None` means plain
/// hold-position behavior.
pub fn contact_velocity(
    ball: &Ball,
    strategy: Strategy,
    velocity_strategy: Option<VelocityStrategy>,
    tuning: &Tuning,
) -> Option<Movement> {
    if strategy == Strategy::Aggressive || strategy.is_smash() {
        let vx = if ball.vel.x > 0.0 {
            -tuning.power_hit_speed
        } else {
            tuning.power_hit_speed
        };
        return Some(Movement {
            vel: Vec2::new(vx, 0.0),
            reason: Some(MoveReason::PowerHit),
        });
    }
    if velocity_strategy == Some(VelocityStrategy::Absorb) {
        let with = |v: f32| {
            if v > 0.0 {
                tuning.absorb_speed
            } else {
                -tuning.absorb_speed
            }
        };
        return Some(Movement {
            vel: Vec2::new(with(ball.vel.x), with(ball.vel.y)),
            reason: Some(MoveReason::SoftReturn),
        });
    }
    None
}

/// Urgency-derived speed damping: full speed for urgent plays, slightly
/// damped otherwise so the paddle settles instead of oscillating around
/// its target.
fn speed_multiplier(urgency: f32) -> f32 {
    if urgency > 0.9 {
        1.0
    } else if urgency > 0.7 {
        0.95
    } else if urgency > 0.5 {
        0.9
    } else {
        0.85
    }
}

/// Turn (position, target, urgency) into a velocity. Near the target the
/// contact-velocity override may take over; in the dead band between the
/// contact and hold radii the paddle simply holds.
#[allow(clippy::too_many_arguments)]
pub fn synthesize(
    paddle_pos: Vec2,
    target: Vec2,
    urgency: f32,
    strategy: Strategy,
    velocity_strategy: Option<VelocityStrategy>,
    ball: &Ball,
    max_speed: f32,
    tuning: &Tuning,
) -> Movement {
    let delta = target - paddle_pos;
    let distance = delta.length();

    if distance < tuning.hold_radius {
        if distance < tuning.contact_radius {
            if let Some(movement) = contact_velocity(ball, strategy, velocity_strategy, tuning) {
                return movement;
            }
        }
        return Movement::hold();
    }

    // distance >= hold_radius > 0, safe to normalize
    let dir = delta / distance;
    Movement {
        vel: dir * max_speed * speed_multiplier(urgency),
        reason: None,
    }
}
