mod message;
mod sink;

pub use message::{GlideComputerEvent, Notification, StatusMessage};
pub use sink::{ChannelSink, NotificationSink};
