use crate::info;
use crate::monitor::ConditionMonitors;
use crate::notification::NotificationSink;
use crate::telemetry::TelemetrySnapshot;
use tokio::sync::watch;

/// Drives the condition monitors from a stream of telemetry snapshots.
pub struct MonitorFeed<S> {
    monitors: ConditionMonitors,
    sink: S,
    ticks: u64,
}

impl<S: NotificationSink> MonitorFeed<S> {
    pub fn new(monitors: ConditionMonitors, sink: S) -> Self { Self { monitors, sink, ticks: 0 } }

    pub fn monitors(&self) -> &ConditionMonitors { &self.monitors }

    pub fn sink(&self) -> &S { &self.sink }

    /// Number of snapshots processed so far.
    pub fn ticks(&self) -> u64 { self.ticks }

    /// Processes one snapshot synchronously.
    pub fn tick(&mut self, snapshot: &TelemetrySnapshot) {
        self.monitors.update(snapshot, &mut self.sink);
        self.ticks += 1;
    }

    /// Runs the monitors on every snapshot published on `rx` until the sender is dropped.
    ///
    /// Snapshots published faster than they are processed are skipped; only the latest one
    /// is evaluated.
    pub async fn run(mut self, mut rx: watch::Receiver<TelemetrySnapshot>) -> Self {
        info!("Condition monitor feed started.");
        while rx.changed().await.is_ok() {
            let snapshot = rx.borrow_and_update();
            self.tick(&snapshot);
        }
        info!("Telemetry source closed after {} ticks, stopping condition monitor feed.", self.ticks);
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::notification::{ChannelSink, Notification, StatusMessage};
    use crate::telemetry::WindVector;

    fn no_sunset(_: crate::telemetry::GeoPoint) -> Option<f64> { None }

    fn flying_at(time: f64, wind_speed: f64) -> TelemetrySnapshot {
        TelemetrySnapshot {
            time,
            flying: true,
            wind: WindVector::new(wind_speed, 270.0),
            ..TelemetrySnapshot::default()
        }
    }

    #[tokio::test]
    async fn test_feed_runs_until_sender_dropped() {
        let (sink, mut notifications) = ChannelSink::new();
        let feed = MonitorFeed::new(ConditionMonitors::new(no_sunset), sink);
        let (tx, rx) = watch::channel(TelemetrySnapshot::default());
        tx.send(flying_at(100.0, 2.0)).unwrap();
        drop(tx);

        let feed = feed.run(rx).await;
        assert_eq!(feed.ticks(), 1);
        assert_eq!(feed.monitors().wind().state().last_check_time(), Some(100.0));
        assert!(notifications.try_recv().is_err());
    }

    #[tokio::test]
    async fn test_feed_only_evaluates_latest_snapshot() {
        let feed = MonitorFeed::new(ConditionMonitors::new(no_sunset), Vec::<Notification>::new());
        let (tx, rx) = watch::channel(TelemetrySnapshot::default());
        let handle = tokio::spawn(feed.run(rx));
        for time in [100.0, 200.0, 300.0] {
            tx.send(flying_at(time, 2.0)).unwrap();
        }
        drop(tx);

        let feed = handle.await.unwrap();
        assert!(feed.ticks() >= 1);
        assert_eq!(feed.monitors().wind().state().last_check_time(), Some(300.0));
        assert!(feed.sink().is_empty());
    }

    #[test]
    fn test_tick_counts_and_collects() {
        let mut feed = MonitorFeed::new(ConditionMonitors::new(no_sunset), Vec::<Notification>::new());
        feed.tick(&flying_at(100.0, 2.0));
        feed.tick(&flying_at(200.0, 9.0));
        assert_eq!(feed.ticks(), 2);
        assert_eq!(feed.sink(), &vec![Notification::Status(StatusMessage::WindChange)]);
    }
}
