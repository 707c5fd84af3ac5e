use super::{
    condition::ConditionMonitor,
    gate::MonitorState,
    kind::MonitorKind,
    variants::{
        AatEarlyArrival, FinalGlideTransition, GlideTerrain, StartRuleCompliance, SunEphemeris,
        SunsetArrival, WindShift,
    },
};
use crate::info;
use crate::notification::NotificationSink;
use crate::telemetry::TelemetrySnapshot;

/// One monitor per watched condition, owned by the flight computation context.
pub struct ConditionMonitors {
    wind: ConditionMonitor<WindShift>,
    final_glide: ConditionMonitor<FinalGlideTransition>,
    sunset: ConditionMonitor<SunsetArrival>,
    aat_time: ConditionMonitor<AatEarlyArrival>,
    start_rules: ConditionMonitor<StartRuleCompliance>,
    glide_terrain: ConditionMonitor<GlideTerrain>,
}

impl ConditionMonitors {
    /// Creates all monitors in their initial state.
    ///
    /// # Arguments
    /// - `ephemeris`: Sunset source used by the sunset arrival monitor.
    pub fn new(ephemeris: impl SunEphemeris + Send + 'static) -> Self {
        info!("Initialized condition monitors.");
        Self {
            wind: ConditionMonitor::new(WindShift::new()),
            final_glide: ConditionMonitor::new(FinalGlideTransition::new()),
            sunset: ConditionMonitor::new(SunsetArrival::new(ephemeris)),
            aat_time: ConditionMonitor::new(AatEarlyArrival::new()),
            start_rules: ConditionMonitor::new(StartRuleCompliance::new()),
            glide_terrain: ConditionMonitor::new(GlideTerrain::new()),
        }
    }

    /// Feeds one telemetry snapshot to every monitor in [`MonitorKind`] order.
    pub fn update<S: NotificationSink + ?Sized>(&mut self, snapshot: &TelemetrySnapshot, sink: &mut S) {
        self.wind.update(snapshot, sink);
        self.final_glide.update(snapshot, sink);
        self.sunset.update(snapshot, sink);
        self.aat_time.update(snapshot, sink);
        self.start_rules.update(snapshot, sink);
        self.glide_terrain.update(snapshot, sink);
    }

    /// Timing state of the monitor watching `kind`.
    pub fn state(&self, kind: MonitorKind) -> &MonitorState {
        match kind {
            MonitorKind::WindShift => self.wind.state(),
            MonitorKind::FinalGlide => self.final_glide.state(),
            MonitorKind::Sunset => self.sunset.state(),
            MonitorKind::AatTime => self.aat_time.state(),
            MonitorKind::StartRules => self.start_rules.state(),
            MonitorKind::GlideTerrain => self.glide_terrain.state(),
        }
    }

    pub fn wind(&self) -> &ConditionMonitor<WindShift> { &self.wind }
    pub fn final_glide(&self) -> &ConditionMonitor<FinalGlideTransition> { &self.final_glide }
    pub fn start_rules(&self) -> &ConditionMonitor<StartRuleCompliance> { &self.start_rules }
    pub fn glide_terrain(&self) -> &ConditionMonitor<GlideTerrain> { &self.glide_terrain }
}
