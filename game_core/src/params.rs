/// Game tuning parameters for PixelPaddle
#[derive(Debug, Clone, Copy)]
pub struct Params;

impl Params {
    // Field
    pub const FIELD_WIDTH: f32 = 900.0;
    pub const FIELD_HEIGHT: f32 = 500.0;
    pub const SIDE_MARGIN: f32 = 10.0;

    // Paddle zones. The strip between the two fences is no-paddle land.
    pub const LEFT_ZONE_RIGHT: f32 = 300.0;
    pub const RIGHT_ZONE_LEFT: f32 = 600.0;
    pub const RIGHT_ZONE_RIGHT: f32 = 890.0;

    // Paddle
    pub const GRID_CELLS: usize = 16;
    pub const PADDLE_SCALE: f32 = 5.0; // pixels per grid cell
    pub const PADDLE_SPEED: f32 = 4.0; // pixels per tick

    // Ball
    pub const BALL_RADIUS: f32 = 6.0;
    pub const BALL_SPEED_DEFAULT: f32 = 4.0;
    pub const BALL_SPEED_MIN: f32 = 1.5; // stuck-ball nudge floor
    pub const BALL_SPEED_CAP_FACTOR: f32 = 2.5; // of base speed
    pub const RALLY_SPEEDUP_STEP: f32 = 0.1; // of base speed
    pub const RALLIES_PER_SPEEDUP: u32 = 5;

    // Score
    pub const WIN_SCORE: u8 = 7;

    // AI
    pub const AI_DIFFICULTY_DEFAULT: u8 = 5;

    // Simulation cadence: one tick per step, velocities are px/tick
    pub const FIXED_DT: f32 = 1.0;
}
