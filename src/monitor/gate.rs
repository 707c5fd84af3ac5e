use chrono::TimeDelta;

/// Outcome of the check gate for one telemetry timestamp.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum CheckGate {
    /// Not due yet, or the timestamp is invalid.
    Closed,
    /// Check interval elapsed since the last check.
    Open,
    /// First check ever, or telemetry time went backwards. The notify gate is re-armed.
    Restart,
}

/// Timing state of a single condition monitor.
///
/// Timestamps are telemetry seconds; `None` means no check (or notification) happened yet
/// on the current timeline.
#[derive(Debug, Clone, PartialEq)]
pub struct MonitorState {
    last_check: Option<f64>,
    last_notify: Option<f64>,
    check_interval: TimeDelta,
    notify_interval: TimeDelta,
}

#[allow(clippy::cast_precision_loss)]
fn as_secs(dt: TimeDelta) -> f64 { dt.num_milliseconds() as f64 / 1000.0 }

impl MonitorState {
    pub fn new(notify_interval: TimeDelta, check_interval: TimeDelta) -> Self {
        Self {
            last_check: None,
            last_notify: None,
            check_interval,
            notify_interval,
        }
    }

    pub fn last_check_time(&self) -> Option<f64> { self.last_check }
    pub fn last_notify_time(&self) -> Option<f64> { self.last_notify }
    pub fn check_interval(&self) -> TimeDelta { self.check_interval }
    pub fn notify_interval(&self) -> TimeDelta { self.notify_interval }

    /// Only the owning monitor adjusts this, after each check of its condition.
    pub(crate) fn set_notify_interval(&mut self, interval: TimeDelta) { self.notify_interval = interval; }

    /// Evaluates the check gate at telemetry time `t`.
    ///
    /// A restart clears the last notification time so the notify gate starts over on the new
    /// timeline. No other state is touched here.
    pub(crate) fn ready_to_check(&mut self, t: f64) -> CheckGate {
        if t.is_nan() || t <= 0.0 {
            return CheckGate::Closed;
        }
        match self.last_check {
            Some(last) if t >= last => {
                if t >= last + as_secs(self.check_interval) {
                    CheckGate::Open
                } else {
                    CheckGate::Closed
                }
            }
            _ => {
                self.last_notify = None;
                CheckGate::Restart
            }
        }
    }

    /// Evaluates the notify gate at telemetry time `t`.
    pub(crate) fn ready_to_notify(&self, t: f64) -> bool {
        if t.is_nan() || t <= 0.0 {
            return false;
        }
        match self.last_notify {
            None => true,
            Some(last) if t < last => true,
            Some(last) => t >= last + as_secs(self.notify_interval),
        }
    }

    pub(crate) fn mark_checked(&mut self, t: f64) { self.last_check = Some(t); }
    pub(crate) fn mark_notified(&mut self, t: f64) { self.last_notify = Some(t); }
}
