mod condition;
mod gate;
mod kind;
mod registry;
pub mod variants;

pub use condition::{Condition, ConditionMonitor};
pub use gate::{CheckGate, MonitorState};
pub use kind::MonitorKind;
pub use registry::ConditionMonitors;
