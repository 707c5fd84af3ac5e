/// One knot expressed in metres per second.
pub const KNOT_MS: f64 = 0.514_444;

/// Number of seconds in a day, used to fold timestamps into a time of day.
pub const SECONDS_PER_DAY: f64 = 86_400.0;

/// Converts a speed given in knots into metres per second.
pub fn knots(value: f64) -> f64 { value * KNOT_MS }

/// Normalizes an angle (or an angle difference) in degrees into the range `(-180, 180]`.
///
/// # Arguments
/// - `angle`: The angle in degrees, any magnitude.
///
/// # Returns
/// - An `f64` equivalent to `angle` modulo 360, centered around zero.
pub fn angle_limit_180(angle: f64) -> f64 {
    let wrapped = angle % 360.0;
    if wrapped > 180.0 {
        wrapped - 360.0
    } else if wrapped <= -180.0 {
        wrapped + 360.0
    } else {
        wrapped
    }
}

/// Exponential smoothing step: blends `new` into `old` with weight `alpha`.
pub fn smooth(old: f64, new: f64, alpha: f64) -> f64 { alpha * new + (1.0 - alpha) * old }
