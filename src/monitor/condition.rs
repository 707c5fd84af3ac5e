use super::{
    gate::{CheckGate, MonitorState},
    kind::MonitorKind,
};
use crate::notification::{Notification, NotificationSink};
use crate::telemetry::TelemetrySnapshot;
use crate::{alert, event, log};
use chrono::TimeDelta;

/// A flight condition watched by a [`ConditionMonitor`].
///
/// Implementors only decide whether the condition holds right now and what to report about
/// it; all timing is handled by the monitor.
pub trait Condition {
    const KIND: MonitorKind;
    /// Minimum time between two notifications.
    const NOTIFY_INTERVAL: TimeDelta;
    /// Minimum time between two evaluations of [`Condition::check`].
    const CHECK_INTERVAL: TimeDelta;

    /// Evaluates the condition; may update the variant's working values.
    fn check(&mut self, snapshot: &TelemetrySnapshot) -> bool;

    /// What to report once the condition fired, if anything.
    fn notification(&self) -> Option<Notification>;

    /// Commits the working values into the hysteresis memory.
    fn save_last(&mut self);

    /// Notify interval for the current flight phase, queried after every check.
    fn notify_interval(&self) -> TimeDelta { Self::NOTIFY_INTERVAL }
}

/// Dual-gate state machine driving one [`Condition`].
pub struct ConditionMonitor<C> {
    state: MonitorState,
    condition: C,
}

impl<C: Condition> ConditionMonitor<C> {
    pub fn new(condition: C) -> Self {
        Self {
            state: MonitorState::new(C::NOTIFY_INTERVAL, C::CHECK_INTERVAL),
            condition,
        }
    }

    pub fn state(&self) -> &MonitorState { &self.state }

    pub fn condition(&self) -> &C { &self.condition }

    /// Runs one tick: gates, checks and, if due, notifies `sink`.
    pub fn update<S: NotificationSink + ?Sized>(&mut self, snapshot: &TelemetrySnapshot, sink: &mut S) {
        if !snapshot.flying {
            return;
        }
        let t = snapshot.time;
        let previous_check = self.state.last_check_time();
        let restart = match self.state.ready_to_check(t) {
            CheckGate::Closed => return,
            CheckGate::Open => false,
            CheckGate::Restart => true,
        };
        if let Some(prev) = previous_check.filter(|_| restart) {
            log!("{} monitor: telemetry time went back from {prev:.1}s to {t:.1}s, re-arming", C::KIND);
        }

        self.state.mark_checked(t);
        let triggered = self.condition.check(snapshot);
        self.state.set_notify_interval(self.condition.notify_interval());
        event!("{} monitor checked at {t:.1}s: {triggered}", C::KIND);

        if triggered && !restart && self.state.ready_to_notify(t) {
            self.state.mark_notified(t);
            if let Some(notification) = self.condition.notification() {
                alert!("{} monitor raised {notification}", C::KIND);
                sink.dispatch(notification);
            }
            self.condition.save_last();
        }
        if restart {
            self.condition.save_last();
        }
    }
}
