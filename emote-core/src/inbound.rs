//! Ordered controller input
//!
//! Link messages and button presses share one queue so the controller
//! handles them in arrival order. Only the newest unhandled record is
//! kept: queueing a record drops any record still waiting, while status
//! reports and presses queued around it keep their places.

use emote_protocol::{ButtonEvent, LinkMessage};
use heapless::Vec;

use crate::controller::DisplayController;
use crate::traits::RenderTree;
use crate::transport::{LinkOutcome, TransportEventAdapter};

/// One input for the controller, from either the link or the buttons
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum Inbound {
    Link(LinkMessage),
    Button(ButtonEvent),
}

impl Inbound {
    /// Check if this carries an inbound record
    pub fn is_record(&self) -> bool {
        matches!(self, Inbound::Link(LinkMessage::Inbox(_)))
    }

    /// Handle this input to completion
    ///
    /// Link messages go through [`TransportEventAdapter::dispatch`]; the
    /// outcome is returned so the caller can log its reason.
    pub fn apply<T: RenderTree>(self, controller: &mut DisplayController<T>) -> Option<LinkOutcome> {
        match self {
            Inbound::Link(message) => {
                Some(TransportEventAdapter::new(controller).dispatch(&message))
            }
            Inbound::Button(button) => {
                controller.press(button);
                None
            }
        }
    }
}

/// Bounded FIFO of controller input, latest record wins
#[derive(Debug, Clone)]
pub struct InboundQueue<const N: usize> {
    items: Vec<Inbound, N>,
}

impl<const N: usize> Default for InboundQueue<N> {
    fn default() -> Self {
        Self::new()
    }
}

impl<const N: usize> InboundQueue<N> {
    pub const fn new() -> Self {
        Self { items: Vec::new() }
    }

    /// Append `input`, replacing any record still waiting
    ///
    /// Returns the input back when the queue is full.
    pub fn push(&mut self, input: Inbound) -> Result<(), Inbound> {
        if input.is_record() {
            self.items.retain(|queued| !queued.is_record());
        }
        self.items.push(input)
    }

    /// Take the oldest input
    pub fn pop(&mut self) -> Option<Inbound> {
        if self.items.is_empty() {
            None
        } else {
            Some(self.items.remove(0))
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
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
    use emote_protocol::{RawRecord, TransportReason};

    fn controller() -> DisplayController<RecordingTree> {
        DisplayController::new(RecordingTree::default(), &DisplayConfig::default())
    }

    fn record(pairs: &[(u32, &str)]) -> Inbound {
        Inbound::Link(LinkMessage::Inbox(RawRecord::from_pairs(pairs).unwrap()))
    }

    fn drain<const N: usize>(
        queue: &mut InboundQueue<N>,
        controller: &mut DisplayController<RecordingTree>,
    ) {
        while let Some(input) = queue.pop() {
            input.apply(controller);
        }
    }

    #[test]
    fn test_dropped_then_record_ends_on_image() {
        let mut queue: InboundQueue<8> = InboundQueue::new();
        queue
            .push(Inbound::Link(LinkMessage::InboxDropped(TransportReason::Timeout)))
            .unwrap();
        queue.push(record(&[(1, "hello"), (2, "sad")])).unwrap();

        let mut controller = controller();
        drain(&mut queue, &mut controller);

        assert_eq!(controller.view(), View::ShowingSentimentImage(Sentiment::Sad));
        assert_eq!(controller.last_text_message(), "hello");
    }

    #[test]
    fn test_record_then_button_ends_on_text() {
        let mut queue: InboundQueue<8> = InboundQueue::new();
        queue.push(record(&[(1, "hello"), (2, "happy")])).unwrap();
        queue.push(Inbound::Button(ButtonEvent::Up)).unwrap();

        let mut controller = controller();
        drain(&mut queue, &mut controller);

        assert_eq!(controller.view(), View::ShowingText);
        assert_eq!(controller.tree().text, "hello");
    }

    #[test]
    fn test_newer_record_replaces_waiting_one() {
        let mut queue: InboundQueue<8> = InboundQueue::new();
        queue.push(record(&[(1, "first"), (2, "happy")])).unwrap();
        queue.push(Inbound::Button(ButtonEvent::Up)).unwrap();
        queue.push(record(&[(1, "second"), (2, "sad")])).unwrap();

        assert_eq!(queue.len(), 2);
        assert_eq!(queue.pop(), Some(Inbound::Button(ButtonEvent::Up)));
        assert!(queue.pop().is_some_and(|input| input.is_record()));
        assert!(queue.is_empty());
    }

    #[test]
    fn test_replaced_record_is_never_shown() {
        let mut queue: InboundQueue<8> = InboundQueue::new();
        queue.push(record(&[(1, "first"), (2, "happy")])).unwrap();
        queue.push(Inbound::Button(ButtonEvent::Up)).unwrap();
        queue.push(record(&[(1, "second"), (2, "sad")])).unwrap();

        let mut controller = controller();
        drain(&mut queue, &mut controller);

        // Up ran before any record, so it showed the welcome text
        assert_eq!(controller.view(), View::ShowingSentimentImage(Sentiment::Sad));
        assert_eq!(controller.last_text_message(), "second");
        assert_eq!(controller.tree().text, "Welcome");
    }

    #[test]
    fn test_full_queue_rejects() {
        let mut queue: InboundQueue<2> = InboundQueue::new();
        queue.push(Inbound::Button(ButtonEvent::Up)).unwrap();
        queue.push(Inbound::Link(LinkMessage::OutboxSent)).unwrap();

        let rejected = queue.push(Inbound::Button(ButtonEvent::Down));
        assert_eq!(rejected, Err(Inbound::Button(ButtonEvent::Down)));
        assert_eq!(queue.len(), 2);
    }

    #[test]
    fn test_record_replaces_in_full_queue() {
        let mut queue: InboundQueue<2> = InboundQueue::new();
        queue.push(record(&[(1, "first")])).unwrap();
        queue.push(Inbound::Button(ButtonEvent::Down)).unwrap();

        assert!(queue.push(record(&[(1, "second")])).is_ok());
        assert_eq!(queue.pop(), Some(Inbound::Button(ButtonEvent::Down)));
    }

    #[test]
    fn test_apply_returns_link_outcome() {
        let mut controller = controller();

        let outcome =
            Inbound::Link(LinkMessage::OutboxFailed(TransportReason::Busy)).apply(&mut controller);
        assert_eq!(outcome, Some(LinkOutcome::SendFailed(TransportReason::Busy)));
        assert_eq!(controller.tree().text, "Failed");

        assert_eq!(Inbound::Button(ButtonEvent::Down).apply(&mut controller), None);
        assert_eq!(controller.current_surface(), SurfaceId::Text);
    }
}
