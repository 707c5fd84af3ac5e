use super::message::Notification;
use crate::warn;
use std::sync::{
    Arc,
    atomic::{AtomicUsize, Ordering},
};
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};

/// Receiver of the notifications emitted by the condition monitors.
///
/// Called from the telemetry loop, so implementations must not block.
pub trait NotificationSink {
    fn dispatch(&mut self, notification: Notification);
}

impl NotificationSink for Vec<Notification> {
    fn dispatch(&mut self, notification: Notification) { self.push(notification); }
}

/// Forwards notifications to an async consumer (UI, event processor) over an unbounded channel.
///
/// Clones share the channel and the drop counter.
#[derive(Debug, Clone)]
pub struct ChannelSink {
    tx: UnboundedSender<Notification>,
    dropped: Arc<AtomicUsize>,
}

impl ChannelSink {
    /// Creates a new sink together with the receiving end for the consumer task.
    pub fn new() -> (Self, UnboundedReceiver<Notification>) {
        let (tx, rx) = mpsc::unbounded_channel();
        (Self { tx, dropped: Arc::new(AtomicUsize::new(0)) }, rx)
    }

    /// Number of notifications lost because the consumer was gone.
    pub fn dropped(&self) -> usize { self.dropped.load(Ordering::Relaxed) }
}

impl NotificationSink for ChannelSink {
    fn dispatch(&mut self, notification: Notification) {
        if let Err(err) = self.tx.send(notification) {
            self.dropped.fetch_add(1, Ordering::Relaxed);
            warn!("Notification consumer is gone, dropping {}!", err.0);
        }
    }
}
