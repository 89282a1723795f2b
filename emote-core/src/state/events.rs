//! Events consumed by the display controller

use emote_protocol::ButtonEvent;

use crate::decode::DecodedMessage;

/// Outcome of a transport attempt, as shown to the user
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum TransportStatus {
    /// Outbound message acknowledged
    Sent,
    /// Outbound message could not be delivered
    SendFailed,
    /// Inbound message lost by the transport
    Dropped,
}

impl TransportStatus {
    /// One-line status text shown on the text surface
    pub fn status_text(self) -> &'static str {
        match self {
            TransportStatus::Sent => "Sent",
            TransportStatus::SendFailed => "Failed",
            TransportStatus::Dropped => "Dropped",
        }
    }
}

/// Events that drive the display controller
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Event {
    /// A record from the companion device, already decoded
    MessageReceived(DecodedMessage),
    /// A debounced button press
    Button(ButtonEvent),
    /// A transport delivery report
    Transport(TransportStatus),
}

impl From<DecodedMessage> for Event {
    fn from(message: DecodedMessage) -> Self {
        Event::MessageReceived(message)
    }
}
