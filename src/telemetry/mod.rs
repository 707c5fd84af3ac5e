pub(crate) mod math;
mod snapshot;
mod task;

pub use math::{angle_limit_180, knots};
pub use snapshot::{GeoPoint, TelemetrySnapshot, WindVector};
pub use task::{StartHeightRef, StartRules, StartRulesError, TaskPoint, TaskState, TaskType};

#[cfg(test)]
mod tests;
