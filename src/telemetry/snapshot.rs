use super::{
    math::SECONDS_PER_DAY,
    task::{StartHeightRef, TaskState},
};
use chrono::TimeDelta;

/// Time-to-go values at or above this are flagged as invalid by the glide computer.
const ERROR_TIME: f64 = 1.0e6;

#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct GeoPoint {
    pub latitude: f64,
    pub longitude: f64,
}

impl GeoPoint {
    pub const fn new(latitude: f64, longitude: f64) -> Self { Self { latitude, longitude } }

    /// The glide computer reports "no point" as exactly (0, 0).
    #[allow(clippy::float_cmp)]
    pub fn is_unset(&self) -> bool { self.latitude == 0.0 && self.longitude == 0.0 }
}

/// Estimated wind; `speed` in m/s, `bearing` in degrees the wind blows from.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub struct WindVector {
    pub speed: f64,
    pub bearing: f64,
}

impl WindVector {
    pub const fn new(speed: f64, bearing: f64) -> Self { Self { speed, bearing } }
}

/// Read-only view of the telemetry and derived flight state at one tick.
#[derive(Debug, Clone, PartialEq)]
pub struct TelemetrySnapshot {
    /// Telemetry time in seconds; values `<= 0` are invalid.
    pub time: f64,
    pub utc_offset: TimeDelta,
    pub flying: bool,
    pub ground_speed: f64,
    pub indicated_airspeed: Option<f64>,
    /// Navigation altitude above sea level (m).
    pub nav_altitude: f64,
    /// Altitude above ground; `None` while terrain data is not valid.
    pub altitude_agl: Option<f64>,
    pub wind: WindVector,
    pub final_glide: bool,
    /// Altitude above (positive) or below (negative) the glide path to goal (m).
    pub task_altitude_difference: f64,
    pub task_time_to_go: f64,
    /// Remaining minimum task time of an AAT (s).
    pub aat_time_to_go: f64,
    pub valid_start: bool,
    pub valid_finish: bool,
    pub leg_distance_to_go: f64,
    /// Terrain obstacle on the final glide path, unset when clear.
    pub terrain_warning: GeoPoint,
    pub task: TaskState,
}

impl TelemetrySnapshot {
    /// Local time of day in seconds, derived from the telemetry time and the UTC offset.
    #[allow(clippy::cast_precision_loss)]
    pub fn local_time_of_day(&self) -> f64 {
        (self.time + self.utc_offset.num_seconds() as f64).rem_euclid(SECONDS_PER_DAY)
    }

    pub fn is_valid_task_time_to_go(&self) -> bool {
        self.task_time_to_go > 0.0 && self.task_time_to_go < 0.9 * ERROR_TIME
    }

    pub fn has_terrain_warning(&self) -> bool { !self.terrain_warning.is_unset() }

    /// Speed checked by the start rules: indicated airspeed when available, else ground speed.
    pub fn start_speed(&self) -> f64 { self.indicated_airspeed.unwrap_or(self.ground_speed) }

    /// Height checked by the start rules for the given reference.
    pub fn start_height(&self, height_ref: StartHeightRef) -> Option<f64> {
        match height_ref {
            StartHeightRef::AboveGround => self.altitude_agl,
            StartHeightRef::AboveSeaLevel => Some(self.nav_altitude),
        }
    }
}

impl Default for TelemetrySnapshot {
    fn default() -> Self {
        Self {
            time: 0.0,
            utc_offset: TimeDelta::zero(),
            flying: false,
            ground_speed: 0.0,
            indicated_airspeed: None,
            nav_altitude: 0.0,
            altitude_agl: None,
            wind: WindVector::default(),
            final_glide: false,
            task_altitude_difference: 0.0,
            task_time_to_go: 0.0,
            aat_time_to_go: 0.0,
            valid_start: false,
            valid_finish: false,
            leg_distance_to_go: 0.0,
            terrain_warning: GeoPoint::default(),
            task: TaskState::default(),
        }
    }
}
