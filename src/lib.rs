#![allow(clippy::module_name_repetitions)]
//! Rate-limited flight condition monitors for a glide computer.
//!
//! Every telemetry tick, [`ConditionMonitors::update`] evaluates wind shift, final glide,
//! sunset arrival, AAT time, start rule and terrain-on-glide conditions and reports each of
//! them at most once per cooldown window. Telemetry time running backwards (GPS
//! re-acquisition, replay, simulator restart) re-arms the monitors instead of silencing them.
pub mod feed;
pub mod logger;
pub mod monitor;
pub mod notification;
pub mod telemetry;

pub use feed::MonitorFeed;
pub use monitor::{ConditionMonitors, MonitorKind};
pub use notification::{GlideComputerEvent, Notification, NotificationSink, StatusMessage};
pub use telemetry::TelemetrySnapshot;
