use strum_macros::{Display, EnumIter};

/// The monitored conditions, in the order they are evaluated on every tick.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, Clone, Copy, Hash)]
pub enum MonitorKind {
    WindShift,
    FinalGlide,
    Sunset,
    AatTime,
    StartRules,
    GlideTerrain,
}
