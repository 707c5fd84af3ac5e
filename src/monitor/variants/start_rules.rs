use crate::monitor::{Condition, MonitorKind};
use crate::notification::{Notification, StatusMessage};
use crate::telemetry::TelemetrySnapshot;
use chrono::TimeDelta;

/// Reports start speed or height violations while approaching the start.
#[derive(Debug, Default, Clone)]
pub struct StartRuleCompliance {
    within_margin: bool,
}

impl StartRuleCompliance {
    pub fn new() -> Self { Self::default() }

    /// Whether the last violation was still inside the configured margins.
    pub fn within_margin(&self) -> bool { self.within_margin }
}

impl Condition for StartRuleCompliance {
    const KIND: MonitorKind = MonitorKind::StartRules;
    const NOTIFY_INTERVAL: TimeDelta = TimeDelta::minutes(1);
    const CHECK_INTERVAL: TimeDelta = TimeDelta::seconds(1);

    fn check(&mut self, snapshot: &TelemetrySnapshot) -> bool {
        let task = &snapshot.task;
        if !snapshot.flying || !task.on_first_leg() {
            return false;
        }
        let rules = &task.start_rules;
        if snapshot.leg_distance_to_go > rules.radius() {
            return false;
        }

        let speed = snapshot.start_speed();
        let height = snapshot.start_height(rules.height_ref());
        self.within_margin = rules.speed_ok(speed, true) && rules.height_ok(height, true);

        !(rules.speed_ok(speed, false) && rules.height_ok(height, false))
    }

    fn notification(&self) -> Option<Notification> {
        if self.within_margin {
            Some(StatusMessage::StartRulesViolatedWithinMargin.into())
        } else {
            Some(StatusMessage::StartRulesViolated.into())
        }
    }

    fn save_last(&mut self) {}
}
