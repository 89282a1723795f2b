//! Transport event adapter
//!
//! Bridges link-level outcomes into controller events. Reasons never
//! change what the user sees; they are handed back to the caller so the
//! firmware can log them.

use emote_protocol::{LinkMessage, RawRecord, TransportReason};

use crate::controller::DisplayController;
use crate::decode::decode;
use crate::state::TransportStatus;
use crate::traits::RenderTree;

/// What a link message turned into
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum LinkOutcome {
    /// A record was decoded and handled
    Received,
    /// Outbound message acknowledged
    Sent,
    /// Outbound message failed
    SendFailed(TransportReason),
    /// Inbound message lost
    Dropped(TransportReason),
    /// Heartbeat, nothing shown
    Heartbeat,
}

impl LinkOutcome {
    /// Reason attached to a failure report
    pub fn reason(&self) -> Option<TransportReason> {
        match self {
            LinkOutcome::SendFailed(reason) | LinkOutcome::Dropped(reason) => Some(*reason),
            _ => None,
        }
    }
}

/// Forwards transport callbacks to a borrowed controller
pub struct TransportEventAdapter<'a, T: RenderTree> {
    controller: &'a mut DisplayController<T>,
}

impl<'a, T: RenderTree> TransportEventAdapter<'a, T> {
    pub fn new(controller: &'a mut DisplayController<T>) -> Self {
        Self { controller }
    }

    /// Outbound message acknowledged
    pub fn on_sent(&mut self) {
        self.controller.report(TransportStatus::Sent);
    }

    /// Outbound message failed; `reason` is not shown
    pub fn on_send_failed(&mut self, _reason: TransportReason) {
        self.controller.report(TransportStatus::SendFailed);
    }

    /// Inbound message lost; `reason` is not shown
    pub fn on_dropped(&mut self, _reason: TransportReason) {
        self.controller.report(TransportStatus::Dropped);
    }

    /// Inbound record delivered
    pub fn on_received(&mut self, record: &RawRecord) {
        self.controller.handle(decode(record).into());
    }

    /// Route one link message to the matching callback
    pub fn dispatch(&mut self, message: &LinkMessage) -> LinkOutcome {
        match message {
            LinkMessage::Inbox(record) => {
                self.on_received(record);
                LinkOutcome::Received
            }
            LinkMessage::InboxDropped(reason) => {
                self.on_dropped(*reason);
                LinkOutcome::Dropped(*reason)
            }
            LinkMessage::OutboxSent => {
                self.on_sent();
                LinkOutcome::Sent
            }
            LinkMessage::OutboxFailed(reason) => {
                self.on_send_failed(*reason);
                LinkOutcome::SendFailed(*reason)
            }
            LinkMessage::Ping => LinkOutcome::Heartbeat,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::DisplayConfig;
    use crate::sentiment::Sentiment;
    use crate::state::View;
    use crate::surface::testing::RecordingTree;
    use crate::surface::SurfaceId;

    fn controller() -> DisplayController<RecordingTree> {
        DisplayController::new(RecordingTree::default(), &DisplayConfig::default())
    }

    #[test]
    fn test_sent_shows_status() {
        let mut controller = controller();
        TransportEventAdapter::new(&mut controller).on_sent();
        assert_eq!(controller.tree().text, "Sent");
        assert_eq!(controller.view(), View::ShowingText);
    }

    #[test]
    fn test_reason_does_not_change_text() {
        let reasons = [
            TransportReason::Timeout,
            TransportReason::Busy,
            TransportReason::Malformed,
            TransportReason::Other(0x7F),
        ];

        for reason in reasons {
            let mut controller = controller();
            let mut adapter = TransportEventAdapter::new(&mut controller);
            adapter.on_send_failed(reason);
            assert_eq!(controller.tree().text, "Failed");

            TransportEventAdapter::new(&mut controller).on_dropped(reason);
            assert_eq!(controller.tree().text, "Dropped");
        }
    }

    #[test]
    fn test_dispatch_inbox() {
        let mut controller = controller();
        let record = RawRecord::from_pairs(&[(1, "hello"), (2, "happy")]).unwrap();

        let outcome = TransportEventAdapter::new(&mut controller).dispatch(&LinkMessage::Inbox(record));

        assert_eq!(outcome, LinkOutcome::Received);
        assert_eq!(controller.current_surface(), SurfaceId::Image(Sentiment::Happy));
        assert_eq!(controller.last_text_message(), "hello");
    }

    #[test]
    fn test_dispatch_reports_reason() {
        let mut controller = controller();
        let mut adapter = TransportEventAdapter::new(&mut controller);

        let outcome = adapter.dispatch(&LinkMessage::OutboxFailed(TransportReason::NotConnected));
        assert_eq!(outcome, LinkOutcome::SendFailed(TransportReason::NotConnected));
        assert_eq!(outcome.reason(), Some(TransportReason::NotConnected));

        let outcome = adapter.dispatch(&LinkMessage::InboxDropped(TransportReason::BufferOverflow));
        assert_eq!(outcome.reason(), Some(TransportReason::BufferOverflow));
        assert_eq!(adapter.dispatch(&LinkMessage::OutboxSent).reason(), None);
    }

    #[test]
    fn test_ping_leaves_display_alone() {
        let mut controller = controller();
        controller.tree_mut().clear_ops();

        let outcome = TransportEventAdapter::new(&mut controller).dispatch(&LinkMessage::Ping);

        assert_eq!(outcome, LinkOutcome::Heartbeat);
        assert!(controller.tree().ops.is_empty());
        assert_eq!(controller.view(), View::Idle);
    }
}
