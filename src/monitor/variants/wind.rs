use crate::monitor::{Condition, MonitorKind};
use crate::notification::{Notification, StatusMessage};
use crate::telemetry::{TelemetrySnapshot, angle_limit_180, knots};
use chrono::TimeDelta;

/// Reports a significant change of the estimated wind since the last report.
#[derive(Debug, Default, Clone)]
pub struct WindShift {
    wind_mag: f64,
    wind_bearing: f64,
    last_wind_mag: f64,
    last_wind_bearing: f64,
}

impl WindShift {
    /// Speed change (kt) that always counts as significant.
    pub const SPEED_CHANGE_KT: f64 = 5.0;
    /// Wind speed (kt) above which a direction change is considered.
    pub const MIN_SPEED_FOR_VEER_KT: f64 = 10.0;
    /// Direction change (deg) that counts as significant.
    pub const VEER_DEG: f64 = 45.0;

    pub fn new() -> Self { Self::default() }

    /// Wind speed and bearing the next shift is measured against.
    pub fn baseline(&self) -> (f64, f64) { (self.last_wind_mag, self.last_wind_bearing) }
}

impl Condition for WindShift {
    const KIND: MonitorKind = MonitorKind::WindShift;
    const NOTIFY_INTERVAL: TimeDelta = TimeDelta::minutes(5);
    const CHECK_INTERVAL: TimeDelta = TimeDelta::seconds(10);

    fn check(&mut self, snapshot: &TelemetrySnapshot) -> bool {
        self.wind_mag = snapshot.wind.speed;
        self.wind_bearing = snapshot.wind.bearing;

        if !snapshot.flying {
            self.save_last();
            return false;
        }

        let mag_change = (self.wind_mag - self.last_wind_mag).abs();
        let dir_change = angle_limit_180(self.wind_bearing - self.last_wind_bearing).abs();
        if mag_change > knots(Self::SPEED_CHANGE_KT) {
            return true;
        }
        self.wind_mag > knots(Self::MIN_SPEED_FOR_VEER_KT) && dir_change > Self::VEER_DEG
    }

    fn notification(&self) -> Option<Notification> { Some(StatusMessage::WindChange.into()) }

    fn save_last(&mut self) {
        self.last_wind_mag = self.wind_mag;
        self.last_wind_bearing = self.wind_bearing;
    }
}
