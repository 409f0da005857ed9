use glam::Vec2;
use serde::{Deserialize, Serialize};

use crate::params::Params;

/// Game configuration
#[derive(Debug, Clone)]
pub struct Config {
    pub field_width: f32,
    pub field_height: f32,
    pub side_margin: f32,
    pub paddle_scale: f32,
    pub paddle_speed: f32,
    pub ball_radius: f32,
    pub ball_speed: f32,
    pub speed_increase: bool,
    pub win_score: u8,
    pub ai_difficulty: u8,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            side_margin: Params::SIDE_MARGIN,
            paddle_scale: Params::PADDLE_SCALE,
            paddle_speed: Params::PADDLE_SPEED,
            ball_radius: Params::BALL_RADIUS,
            ball_speed: Params::BALL_SPEED_DEFAULT,
            speed_increase: true,
            win_score: Params::WIN_SCORE,
            ai_difficulty: Params::AI_DIFFICULTY_DEFAULT,
        }
    }
}

impl Config {
    pub fn new() -> Self {
        Self::default()
    }

    /// Paddle size in pixels (the 16x16 grid at the current scale)
    pub fn paddle_size(&self) -> f32 {
        Params::GRID_CELLS as f32 * self.paddle_scale
    }

    /// Hard cap on ball speed after rally speed-ups
    pub fn max_ball_speed(&self) -> f32 {
        self.ball_speed * Params::BALL_SPEED_CAP_FACTOR
    }

    /// Start position (top-left grid anchor) for a paddle
    pub fn paddle_start(&self, player_id: u8) -> Vec2 {
        if player_id == 0 {
            Vec2::new(50.0, 200.0)
        } else {
            Vec2::new(650.0, 200.0)
        }
    }

    /// Ball spawn point (center of the field)
    pub fn ball_spawn(&self) -> Vec2 {
        Vec2::new(self.field_width / 2.0, self.field_height / 2.0)
    }

    /// Whether a single scaled grid cell at (pixel_x, pixel_y) lies inside
    /// the player's zone. The left paddle may not touch the x=300 fence;
    /// the right paddle may not cross back over x=600.
    pub fn cell_in_zone(&self, player_id: u8, pixel_x: f32, pixel_y: f32) -> bool {
        let scale = self.paddle_scale;
        if pixel_y < 0.0 || pixel_y + scale > self.field_height {
            return false;
        }
        if player_id == 0 {
            pixel_x >= self.side_margin && pixel_x + scale < Params::LEFT_ZONE_RIGHT
        } else {
            pixel_x >= Params::RIGHT_ZONE_LEFT
                && pixel_x + scale <= self.field_width - self.side_margin
        }
    }
}

/// Player-facing settings, as persisted by the setup screen.
/// `paddle_scale_factor` is the 0.5x..3x slider; the cell size in pixels
/// is `factor * 5`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Settings {
    pub ball_speed: f32,
    pub paddle_scale_factor: f32,
    pub win_score: u8,
    pub speed_increase: bool,
    pub ai_difficulty: u8,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            ball_speed: Params::BALL_SPEED_DEFAULT,
            paddle_scale_factor: 1.0,
            win_score: Params::WIN_SCORE,
            speed_increase: true,
            ai_difficulty: Params::AI_DIFFICULTY_DEFAULT,
        }
    }
}

impl Settings {
    pub fn to_config(&self) -> Config {
        Config {
            paddle_scale: self.paddle_scale_factor * Params::PADDLE_SCALE,
            ball_speed: self.ball_speed,
            speed_increase: self.speed_increase,
            win_score: self.win_score,
            ai_difficulty: self.ai_difficulty,
            ..Config::default()
        }
    }
}
