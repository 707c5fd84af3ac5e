use super::final_glide::FinalGlideTransition;
use crate::monitor::{Condition, MonitorKind};
use crate::notification::{GlideComputerEvent, Notification};
use crate::telemetry::TelemetrySnapshot;
use chrono::TimeDelta;

/// Reports terrain appearing on the final glide path.
#[derive(Debug, Default, Clone)]
pub struct GlideTerrain {
    warning: bool,
    last_warning: bool,
}

impl GlideTerrain {
    pub fn new() -> Self { Self::default() }

    pub fn last_warning(&self) -> bool { self.last_warning }
}

impl Condition for GlideTerrain {
    const KIND: MonitorKind = MonitorKind::GlideTerrain;
    const NOTIFY_INTERVAL: TimeDelta = TimeDelta::minutes(5);
    const CHECK_INTERVAL: TimeDelta = TimeDelta::seconds(1);

    fn check(&mut self, snapshot: &TelemetrySnapshot) -> bool {
        if !snapshot.flying || !snapshot.task.has_active_point() {
            return false;
        }
        self.warning = snapshot.has_terrain_warning();

        if !snapshot.final_glide
            || snapshot.task_altitude_difference < FinalGlideTransition::WELL_BELOW
        {
            self.last_warning = false;
            false
        } else {
            self.warning && !self.last_warning
        }
    }

    fn notification(&self) -> Option<Notification> { Some(GlideComputerEvent::FinalGlideTerrain.into()) }

    fn save_last(&mut self) { self.last_warning = self.warning; }
}
