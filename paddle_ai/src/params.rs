use game_core::Params;

/// Decision-core tuning. Defaults are the empirically tuned values the
/// game ships with; every threshold is a field so simulations can probe
/// variants without recompiling.
#[derive(Debug, Clone)]
pub struct Tuning {
    // Field geometry
    pub field_width: f32,
    pub field_height: f32,
    pub ball_radius: f32,
    /// The AI's baseline: the x-plane predictions are run against
    pub defensive_plane_x: f32,
    /// Paddle zone of the AI (right side)
    pub zone_left: f32,
    pub zone_right: f32,

    // Trajectory predictor
    pub predict_dt: f32,
    pub predict_max_time: f32,
    pub predict_max_bounces: u32,
    pub confidence_loss_per_bounce: f32,
    pub confidence_floor: f32,

    // Loop-around detector
    pub loop_vx_max: f32,
    pub loop_speed_max: f32,
    pub loop_lead: f32,
    pub loop_safety_margin: f32,

    // Chase detector
    pub chase_speed_max: f32,
    pub chase_vx_max: f32,
    pub chase_behind_slack: f32,
    pub chase_edge_margin: f32,

    /// Assumed paddle travel speed for time-budget comparisons
    pub paddle_travel_speed: f32,
    /// Clearance kept from the zone's back wall when reaching forward
    pub reach_margin: f32,

    // Interception
    pub fallback_x: f32,
    pub fallback_y_min: f32,
    pub fallback_y_max: f32,
    pub smash_high_y: f32,
    pub smash_low_y: f32,
    pub placement_confidence: f32,
    pub placement_speed_max: f32,
    pub block_speed_min: f32,
    pub mid_court_y: f32,

    // Aggressive forward positioning
    pub aggressive_time: f32,
    pub aggressive_ball_x: f32,
    pub aggressive_confidence: f32,
    pub aggressive_step: f32,
    pub aggressive_urgency: f32,

    // Movement
    pub hold_radius: f32,
    pub contact_radius: f32,
    pub power_hit_speed: f32,
    pub absorb_speed: f32,
}

impl Default for Tuning {
    fn default() -> Self {
        Self {
            field_width: Params::FIELD_WIDTH,
            field_height: Params::FIELD_HEIGHT,
            ball_radius: Params::BALL_RADIUS,
            defensive_plane_x: Params::RIGHT_ZONE_LEFT,
            zone_left: Params::RIGHT_ZONE_LEFT,
            zone_right: Params::RIGHT_ZONE_RIGHT,

            predict_dt: 0.1,
            predict_max_time: 500.0,
            predict_max_bounces: 10,
            confidence_loss_per_bounce: 0.15,
            confidence_floor: 0.3,

            loop_vx_max: 3.0,
            loop_speed_max: 3.5,
            loop_lead: 40.0,
            loop_safety_margin: 0.7,

            chase_speed_max: 4.5,
            chase_vx_max: 3.0,
            chase_behind_slack: 10.0,
            chase_edge_margin: 20.0,

            paddle_travel_speed: Params::PADDLE_SPEED,
            reach_margin: 5.0,

            fallback_x: 650.0,
            fallback_y_min: 50.0,
            fallback_y_max: 450.0,
            smash_high_y: 150.0,
            smash_low_y: 350.0,
            placement_confidence: 0.7,
            placement_speed_max: 6.0,
            block_speed_min: 8.0,
            mid_court_y: 250.0,

            aggressive_time: 60.0,
            aggressive_ball_x: 500.0,
            aggressive_confidence: 0.6,
            aggressive_step: 10.0,
            aggressive_urgency: 0.85,

            hold_radius: 3.0,
            contact_radius: 2.0,
            power_hit_speed: 4.0,
            absorb_speed: 2.0,
        }
    }
}

impl Tuning {
    pub fn new() -> Self {
        Self::default()
    }
}
