/// Default probability that a match is simulated as a draw
pub const DEFAULT_DRAW_PROBABILITY: f64 = 0.25;

/// Default goal factor (strength divisor bounding goal ranges)
pub const DEFAULT_GOAL_FACTOR: u32 = 30;

/// Lowest accepted team strength
pub const MIN_STRENGTH: u32 = 1;

/// Highest accepted team strength
pub const MAX_STRENGTH: u32 = 100;

/// Added to the winner's strength/factor ratio so even weak winners can
/// score more than one goal
pub const WIN_GOAL_BUFFER: u32 = 2;

/// Added to the loser's ratio; the winner's own score still caps the range,
/// so the loser never reaches the winner's tally
pub const LOSE_GOAL_BUFFER: u32 = 1;

/// Points for a win
pub const WIN_POINTS: u32 = 3;

/// Points per side for a draw
pub const DRAW_POINTS: u32 = 1;

/// Label attached to a simulated group result
pub const DEFAULT_GROUP_NAME: &str = "Match Group";
