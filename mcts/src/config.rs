// search
pub const EXPLORATION: f64 = std::f64::consts::SQRT_2;

// play
pub const DEFAULT_THINK_SECONDS: f64 = 7.0;
