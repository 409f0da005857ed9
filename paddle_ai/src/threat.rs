use game_core::Ball;

use crate::params::Tuning;
use crate::predict::Prediction;

/// Coarse danger classification for a ball the predictor cannot usefully
/// forecast, used only for fallback defensive positioning.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Threat {
    None,
    Low,
    Medium,
    High,
}

#[derive(Debug, Clone, Copy, PartialEq)]
pub struct ThreatEstimate {
    pub threat: Threat,
    /// Where the opponent's return is most likely to arrive
    pub expected_return_y: f32,
    pub level: f32,
}

/// Score how dangerous the ball might be on its way back. A fast arrival
/// (small predicted time) with a confident forecast rates high; without a
/// forecast there is no signal at all.
pub fn estimate(ball: &Ball, prediction: Option<&Prediction>, tuning: &Tuning) -> ThreatEstimate {
    let Some(prediction) = prediction else {
        return ThreatEstimate {
            threat: Threat::None,
            expected_return_y: tuning.mid_court_y,
            level: 0.0,
        };
    };

    let level = prediction.confidence * (1.0 / (prediction.time / 50.0).max(1.0));

    // A shot with real vertical momentum tends to be returned near where
    // it was received; a flat shot comes back toward the center.
    let expected_return_y = if ball.vel.y.abs() > ball.vel.x.abs() * 0.5 {
        prediction.y
    } else {
        tuning.mid_court_y
    };

    let threat = if level > 0.8 {
        Threat::High
    } else if level > 0.5 {
        Threat::Medium
    } else {
        Threat::Low
    };

    ThreatEstimate {
        threat,
        expected_return_y,
        level,
    }
}
