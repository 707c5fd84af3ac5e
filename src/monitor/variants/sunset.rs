use crate::monitor::{Condition, MonitorKind};
use crate::notification::{Notification, StatusMessage};
use crate::telemetry::{GeoPoint, TelemetrySnapshot};
use chrono::TimeDelta;

/// Source of sunset times.
pub trait SunEphemeris {
    /// Local sunset time at `location`, in seconds since local midnight, or `None` if unknown.
    fn sunset_time(&self, location: GeoPoint) -> Option<f64>;
}

impl<F> SunEphemeris for F
where
    F: Fn(GeoPoint) -> Option<f64>,
{
    fn sunset_time(&self, location: GeoPoint) -> Option<f64> { self(location) }
}

/// Reports when the estimated task arrival falls after sunset at the active waypoint.
///
/// The arrival estimate is not wrapped at midnight and the ephemeris value is used as is. Field
/// reports claim the result is wrong in one hemisphere; this is kept until the expected
/// behavior is decided.
pub struct SunsetArrival {
    ephemeris: Box<dyn SunEphemeris + Send>,
}

impl SunsetArrival {
    pub fn new(ephemeris: impl SunEphemeris + Send + 'static) -> Self {
        Self { ephemeris: Box::new(ephemeris) }
    }
}

impl Condition for SunsetArrival {
    const KIND: MonitorKind = MonitorKind::Sunset;
    const NOTIFY_INTERVAL: TimeDelta = TimeDelta::minutes(30);
    const CHECK_INTERVAL: TimeDelta = TimeDelta::seconds(60);

    fn check(&mut self, snapshot: &TelemetrySnapshot) -> bool {
        if !snapshot.is_valid_task_time_to_go() || !snapshot.flying {
            return false;
        }
        let Some(waypoint) = snapshot.task.active_point() else {
            return false;
        };
        let Some(sunset_time) = self.ephemeris.sunset_time(waypoint.location) else {
            return false;
        };
        let local_time = snapshot.local_time_of_day();
        let task_eta = local_time + snapshot.task_time_to_go;

        task_eta > sunset_time && local_time < sunset_time
    }

    fn notification(&self) -> Option<Notification> { Some(StatusMessage::ArrivalPastSunset.into()) }

    fn save_last(&mut self) {}
}
