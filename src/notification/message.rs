use std::fmt;
use strum_macros::{Display, EnumIter};

/// User-facing status messages, identified by their localization token.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, Clone, Copy, Hash)]
pub enum StatusMessage {
    #[strum(to_string = "Significant wind change")]
    WindChange,
    #[strum(to_string = "Expect arrival past sunset")]
    ArrivalPastSunset,
    #[strum(to_string = "Expect early task arrival")]
    EarlyTaskArrival,
    #[strum(to_string = "Start rules violated")]
    StartRulesViolated,
    #[strum(to_string = "Start rules violated but within margin")]
    StartRulesViolatedWithinMargin,
}

impl StatusMessage {
    /// Localization token of the message text.
    pub fn token(self) -> u16 {
        match self {
            StatusMessage::WindChange => 616,
            StatusMessage::ArrivalPastSunset => 1531,
            StatusMessage::EarlyTaskArrival => 270,
            StatusMessage::StartRulesViolated => 651,
            StatusMessage::StartRulesViolatedWithinMargin => 652,
        }
    }
}

/// Named events raised towards the input event processor.
#[derive(Debug, Display, EnumIter, PartialEq, Eq, Clone, Copy, Hash)]
pub enum GlideComputerEvent {
    FinalGlideAbove,
    FinalGlideBelow,
    FinalGlideTerrain,
}

#[derive(Debug, PartialEq, Eq, Clone, Copy, Hash)]
pub enum Notification {
    Status(StatusMessage),
    Event(GlideComputerEvent),
}

impl fmt::Display for Notification {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Notification::Status(msg) => write!(f, "status message #{} \"{msg}\"", msg.token()),
            Notification::Event(ev) => write!(f, "glide computer event {ev}"),
        }
    }
}

impl From<StatusMessage> for Notification {
    fn from(value: StatusMessage) -> Self { Notification::Status(value) }
}

impl From<GlideComputerEvent> for Notification {
    fn from(value: GlideComputerEvent) -> Self { Notification::Event(value) }
}
