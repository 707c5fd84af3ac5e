use crate::monitor::{Condition, MonitorKind};
use crate::notification::{Notification, StatusMessage};
use crate::telemetry::{TaskType, TelemetrySnapshot};
use chrono::TimeDelta;

/// Warns on an assigned area task when the pilot is on pace to finish before the minimum task time.
#[derive(Debug, Default, Clone)]
pub struct AatEarlyArrival;

impl AatEarlyArrival {
    pub fn new() -> Self { Self }
}

impl Condition for AatEarlyArrival {
    const KIND: MonitorKind = MonitorKind::AatTime;
    const NOTIFY_INTERVAL: TimeDelta = TimeDelta::minutes(15);
    const CHECK_INTERVAL: TimeDelta = TimeDelta::seconds(10);

    fn check(&mut self, snapshot: &TelemetrySnapshot) -> bool {
        let task = &snapshot.task;
        if task.route_optimized
            || task.task_type != TaskType::Aat
            || !task.has_active_point()
            || !(snapshot.valid_start && !snapshot.valid_finish)
            || !snapshot.flying
        {
            return false;
        }
        snapshot.task_time_to_go < snapshot.aat_time_to_go
    }

    fn notification(&self) -> Option<Notification> { Some(StatusMessage::EarlyTaskArrival.into()) }

    fn save_last(&mut self) {}
}
