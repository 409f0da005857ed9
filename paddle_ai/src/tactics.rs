use glam::Vec2;

use game_core::{Ball, GRID_CELLS};

use crate::params::Tuning;
use crate::predict::{predict, Prediction};
use crate::shape::ShapeProfile;
use crate::threat;

/// Named tactical posture. One is chosen per tick and drives both the
/// target position and the at-contact velocity behavior.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
    #[default]
    Intercept,
    LoopAround,
    Chase,
    SmashDown,
    SmashUp,
    AimCorner,
    DefensiveBlock,
    CounterSpinDown,
    CounterSpinUp,
    Aggressive,
    Defensive,
}

impl Strategy {
    pub fn is_smash(self) -> bool {
        matches!(self, Strategy::SmashDown | Strategy::SmashUp)
    }

    pub fn is_counter_spin(self) -> bool {
        matches!(self, Strategy::CounterSpinDown | Strategy::CounterSpinUp)
    }
}

/// How to move once the paddle has reached its target
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum VelocityStrategy {
    /// Move into the ball's path for a harder return
    PowerHit,
    /// Move with the ball to soften the return
    Absorb,
}

/// A candidate tactical action. Detectors return `None` when their
/// opportunity does not apply; that is a normal control signal.
#[derive(Debug, Clone, PartialEq)]
pub struct Opportunity {
    pub target: Vec2,
    pub strategy: Strategy,
    pub urgency: f32,
    pub velocity_strategy: Option<VelocityStrategy>,
    pub prediction: Option<Prediction>,
}

fn paddle_width(scale: f32) -> f32 {
    GRID_CELLS as f32 * scale
}

/// Forward limit for the paddle anchor: clearance from the back wall
fn max_reach_x(scale: f32, tuning: &Tuning) -> f32 {
    tuning.zone_right - paddle_width(scale) - tuning.reach_margin
}

/// Fold a projected y back into [min, max] as if it reflected off the
/// boundaries, approximating wall bounces during a projection window
fn reflect_into(y: f32, min: f32, max: f32) -> f32 {
    let span = max - min;
    let period = 2.0 * span;
    let m = (y - min).rem_euclid(period);
    min + if m <= span { m } else { period - m }
}

/// Highest priority: the ball is already behind the paddle and barely
/// moving, so swing around it and meet it from the far side. Fires only
/// when the paddle can beat the ball to the loop position with a
/// comfortable margin.
pub fn loop_around(
    ball: &Ball,
    paddle_pos: Vec2,
    shape: &ShapeProfile,
    scale: f32,
    tuning: &Tuning,
) -> Option<Opportunity> {
    let paddle_right = paddle_pos.x + paddle_width(scale);
    if ball.pos.x <= paddle_right || ball.vel.x >= tuning.loop_vx_max {
        return None;
    }
    if ball.vel.length() > tuning.loop_speed_max {
        return None; // Too fast to loop
    }

    let ideal_x = (ball.pos.x + tuning.loop_lead).min(max_reach_x(scale, tuning));
    if ideal_x < tuning.zone_left {
        return None; // No space to position
    }

    let time_to_target = (ideal_x - paddle_pos.x).abs() / tuning.paddle_travel_speed;
    let time_to_wall = (tuning.field_width - ball.pos.x) / ball.vel.x.max(0.5);
    if time_to_target >= time_to_wall * tuning.loop_safety_margin {
        return None;
    }

    Some(Opportunity {
        target: Vec2::new(
            ideal_x,
            ball.pos.y - shape.row_offset(shape.center.y, scale),
        ),
        strategy: Strategy::LoopAround,
        urgency: 1.0,
        velocity_strategy: None,
        prediction: None,
    })
}

/// Second priority: a slow ball loose in or drifting into the defensive
/// zone is worth running down. Projects the ball over the paddle's
/// closing time, reflecting the projection off the walls, and aligns the
/// silhouette with the projected point.
pub fn chase(
    ball: &Ball,
    paddle_pos: Vec2,
    shape: &ShapeProfile,
    scale: f32,
    tuning: &Tuning,
) -> Option<Opportunity> {
    let width = paddle_width(scale);
    let paddle_right = paddle_pos.x + width;
    let speed = ball.vel.length();

    let behind = ball.pos.x > paddle_right + tuning.chase_behind_slack;
    let drifting_in = ball.vel.x > 0.0 && ball.vel.x < tuning.chase_vx_max;
    let loose_in_zone =
        ball.pos.x >= tuning.zone_left && ball.vel.x.abs() < tuning.chase_vx_max;
    let slow = speed < tuning.chase_speed_max;
    let approachable = ball.pos.x < tuning.zone_right - tuning.chase_edge_margin;

    if !((behind || drifting_in || loose_in_zone) && slow && approachable) {
        return None;
    }

    // Account for ball movement during the chase
    let paddle_center = paddle_pos + Vec2::splat(width / 2.0);
    let time_to_reach = (ball.pos - paddle_center).length() / tuning.paddle_travel_speed;
    let future = ball.pos + ball.vel * time_to_reach;
    let future_y = reflect_into(future.y, 0.0, tuning.field_height);

    let max_reach = max_reach_x(scale, tuning);
    if future.x >= max_reach {
        return None;
    }

    let target_x = (future.x - shape.offset_for_row(shape.center.y, scale))
        .clamp(tuning.zone_left, max_reach);

    Some(Opportunity {
        target: Vec2::new(
            target_x,
            future_y - shape.row_offset(shape.center.y, scale),
        ),
        strategy: Strategy::Chase,
        urgency: 0.95,
        velocity_strategy: None,
        prediction: None,
    })
}

/// Secondary contact-row adjustment layered on the chosen strategy's
/// target. Smashes bias just inside the relevant extent, counter-spin
/// uses the extreme edge, corner shots move off-center away from the
/// ball's half of the field.
fn contact_adjustment(
    prediction: &Prediction,
    shape: &ShapeProfile,
    scale: f32,
    strategy: Strategy,
    tuning: &Tuning,
) -> f32 {
    let row = match strategy {
        Strategy::SmashDown => shape.top_y as f32 + 1.0,
        Strategy::SmashUp => shape.bottom_y as f32 - 1.0,
        Strategy::CounterSpinDown | Strategy::CounterSpinUp => {
            if prediction.final_vel.y > 0.0 {
                shape.bottom_y as f32
            } else {
                shape.top_y as f32
            }
        }
        Strategy::AimCorner => {
            if prediction.y < tuning.mid_court_y {
                shape.center.y + 2.0
            } else {
                shape.center.y - 2.0
            }
        }
        _ => shape.center.y,
    };
    (row - shape.center.y) * scale
}

/// Fallback for every tick: run the predictor against the defensive
/// plane and pick an interception variant from ball speed, arrival
/// height and confidence. Always yields a target.
pub fn intercept(
    ball: &Ball,
    paddle_pos: Vec2,
    shape: &ShapeProfile,
    scale: f32,
    tuning: &Tuning,
) -> Opportunity {
    let Some(prediction) = predict(ball, tuning.defensive_plane_x, tuning) else {
        // Unpredictable ball: hold a defensive post keyed off the threat
        // estimate
        let est = threat::estimate(ball, None, tuning);
        let y = est
            .expected_return_y
            .clamp(tuning.fallback_y_min, tuning.fallback_y_max);
        return Opportunity {
            target: Vec2::new(
                tuning.fallback_x,
                y - shape.row_offset(shape.center.y, scale),
            ),
            strategy: Strategy::Defensive,
            urgency: 0.3,
            velocity_strategy: None,
            prediction: None,
        };
    };

    let speed = ball.vel.length();
    let mut strategy = Strategy::Intercept;
    let mut contact_row = shape.center.y;
    let mut urgency = (5.0 / prediction.time.max(1.0)).min(1.0);

    // Shot selection
    if prediction.confidence > tuning.placement_confidence && speed < tuning.placement_speed_max {
        if prediction.y < tuning.smash_high_y {
            // Ball coming high: smash it down
            strategy = Strategy::SmashDown;
            contact_row = shape.top_y as f32;
        } else if prediction.y > tuning.smash_low_y {
            // Ball coming low: lift it up
            strategy = Strategy::SmashUp;
            contact_row = shape.bottom_y as f32;
        } else {
            strategy = Strategy::AimCorner;
        }
    } else if speed > tuning.block_speed_min {
        // Fast ball: present the widest contact surface
        strategy = Strategy::DefensiveBlock;
        contact_row = shape.max_width_row();
    } else if ball.vel.y.abs() > ball.vel.x.abs() {
        // Mostly vertical: counter with the opposite edge
        if ball.vel.y > 0.0 {
            strategy = Strategy::CounterSpinDown;
            contact_row = shape.bottom_y as f32;
        } else {
            strategy = Strategy::CounterSpinUp;
            contact_row = shape.top_y as f32;
        }
    }

    // Aggressive forward positioning when time permits: trade ground for
    // reaction time while the ball is still on the far side
    let mut target_x = paddle_pos.x;
    if prediction.time > tuning.aggressive_time
        && ball.pos.x < tuning.aggressive_ball_x
        && prediction.confidence > tuning.aggressive_confidence
    {
        target_x = (paddle_pos.x - tuning.aggressive_step).max(tuning.zone_left);
        strategy = Strategy::Aggressive;
        urgency = tuning.aggressive_urgency;
    }

    let velocity_strategy = if strategy.is_smash() {
        Some(VelocityStrategy::PowerHit)
    } else if strategy == Strategy::DefensiveBlock {
        Some(VelocityStrategy::Absorb)
    } else {
        None
    };

    let target_y = prediction.y - shape.row_offset(contact_row, scale)
        + contact_adjustment(&prediction, shape, scale, strategy, tuning);

    Opportunity {
        target: Vec2::new(target_x, target_y),
        strategy,
        urgency,
        velocity_strategy,
        prediction: Some(prediction),
    }
}

/// The priority chain: loop-around, then chase, then interception. The
/// first applicable opportunity wins the tick.
pub fn plan(
    ball: &Ball,
    paddle_pos: Vec2,
    shape: &ShapeProfile,
    scale: f32,
    tuning: &Tuning,
) -> Opportunity {
    loop_around(ball, paddle_pos, shape, scale, tuning)
        .or_else(|| chase(ball, paddle_pos, shape, scale, tuning))
        .unwrap_or_else(|| intercept(ball, paddle_pos, shape, scale, tuning))
}
