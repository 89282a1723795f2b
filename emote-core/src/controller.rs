//! Display controller
//!
//! The controller is the single owner of the display state:
//! - Decoded messages switch to the face for their sentiment
//! - Buttons flip back to text
//! - Transport reports show a one-line status
//!
//! Every event runs to completion inside [`DisplayController::handle`];
//! the render tree only changes through the surface registry it owns.

use emote_protocol::ButtonEvent;

use crate::config::DisplayConfig;
use crate::sentiment::{classify, Sentiment};
use crate::state::{DisplayState, Event, TransportStatus, View};
use crate::surface::{SurfaceId, SurfaceRegistry};
use crate::traits::{Redraw, RenderTree};

/// Status text shown when the `Down` button is pressed
pub const DOWN_TEXT: &str = "Down";

/// Message-driven controller for the single screen
#[derive(Debug, Clone)]
pub struct DisplayController<T: RenderTree> {
    state: DisplayState,
    registry: SurfaceRegistry<T>,
}

impl<T: RenderTree> DisplayController<T> {
    /// Take over `tree` and show the welcome text
    pub fn new(mut tree: T, config: &DisplayConfig) -> Self {
        let state = DisplayState::new(&config.welcome_text);
        tree.set_text(&state.last_text_message);
        let registry = SurfaceRegistry::new(tree, state.active_surface());
        Self { state, registry }
    }

    /// Process one event to completion
    pub fn handle(&mut self, event: Event) {
        let next = self.state.view.transition(&event);

        match event {
            Event::MessageReceived(message) => {
                if let Some(text) = message.text {
                    self.state.last_text_message = text;
                }
                let sentiment = classify(message.sentiment.as_deref());
                self.registry.show(SurfaceId::Image(sentiment));
            }
            Event::Button(ButtonEvent::Select) => {}
            Event::Button(ButtonEvent::Up) => {
                self.registry.show_text(&self.state.last_text_message);
            }
            Event::Button(ButtonEvent::Down) => self.registry.show_text(DOWN_TEXT),
            Event::Transport(status) => self.registry.show_text(status.status_text()),
        }

        self.state.view = next;
        debug_assert_eq!(self.registry.current(), self.state.active_surface());
    }

    /// Shorthand for a button event
    pub fn press(&mut self, button: ButtonEvent) {
        self.handle(Event::Button(button));
    }

    /// Shorthand for a transport report
    pub fn report(&mut self, status: TransportStatus) {
        self.handle(Event::Transport(status));
    }

    pub fn view(&self) -> View {
        self.state.view
    }

    /// Text the `Up` button shows
    pub fn last_text_message(&self) -> &str {
        &self.state.last_text_message
    }

    /// Attached surface
    pub fn current_surface(&self) -> SurfaceId {
        self.registry.current()
    }

    /// Sentiment of the face on screen, if a face is shown
    pub fn current_sentiment(&self) -> Option<Sentiment> {
        self.registry.current().sentiment()
    }

    /// Read access to the render tree
    pub fn tree(&self) -> &T {
        self.registry.tree()
    }

    #[cfg(test)]
    pub(crate) fn tree_mut(&mut self) -> &mut T {
        self.registry.tree_mut()
    }
}

impl<T: RenderTree + Redraw> DisplayController<T> {
    /// Clear the tree's redraw flag, returning whether it was set
    pub fn take_dirty(&mut self) -> bool {
        self.registry.take_dirty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::decode::decode;
    use crate::surface::testing::{Op, RecordingTree};
    use emote_protocol::RawRecord;

    fn controller() -> DisplayController<RecordingTree> {
        DisplayController::new(RecordingTree::default(), &DisplayConfig::default())
    }

    fn receive(controller: &mut DisplayController<RecordingTree>, pairs: &[(u32, &str)]) {
        let record = RawRecord::from_pairs(pairs).unwrap();
        controller.handle(Event::MessageReceived(decode(&record)));
    }

    #[test]
    fn test_starts_with_welcome_text() {
        let controller = controller();
        assert_eq!(controller.view(), View::Idle);
        assert_eq!(controller.current_surface(), SurfaceId::Text);
        assert_eq!(controller.tree().attached, Some(SurfaceId::Text));
        assert_eq!(controller.tree().text, "Welcome");
    }

    #[test]
    fn test_custom_welcome() {
        let config = DisplayConfig::with_welcome("Hi there");
        let controller = DisplayController::new(RecordingTree::default(), &config);
        assert_eq!(controller.tree().text, "Hi there");
        assert_eq!(controller.last_text_message(), "Hi there");
    }

    #[test]
    fn test_message_with_sentiment() {
        let mut controller = controller();
        receive(&mut controller, &[(1, "hello"), (2, "sad")]);

        assert_eq!(controller.current_surface(), SurfaceId::Image(Sentiment::Sad));
        assert_eq!(controller.view(), View::ShowingSentimentImage(Sentiment::Sad));
        assert_eq!(controller.last_text_message(), "hello");
        assert_eq!(controller.tree().attached, Some(SurfaceId::Image(Sentiment::Sad)));
    }

    #[test]
    fn test_up_after_message_shows_text() {
        let mut controller = controller();
        receive(&mut controller, &[(1, "hello"), (2, "sad")]);
        controller.press(ButtonEvent::Up);

        assert_eq!(controller.view(), View::ShowingText);
        assert_eq!(controller.tree().attached, Some(SurfaceId::Text));
        assert_eq!(controller.tree().text, "hello");
    }

    #[test]
    fn test_down_without_message() {
        let mut controller = controller();
        controller.press(ButtonEvent::Down);

        assert_eq!(controller.view(), View::ShowingText);
        assert_eq!(controller.tree().attached, Some(SurfaceId::Text));
        assert_eq!(controller.tree().text, "Down");
        // Down does not overwrite the stored message
        assert_eq!(controller.last_text_message(), "Welcome");
    }

    #[test]
    fn test_dropped_from_any_view() {
        let mut from_image = controller();
        receive(&mut from_image, &[(2, "happy")]);
        let mut from_text = controller();
        from_text.press(ButtonEvent::Up);

        for mut controller in [from_image, from_text, controller()] {
            controller.report(TransportStatus::Dropped);
            assert_eq!(controller.view(), View::ShowingText);
            assert_eq!(controller.tree().attached, Some(SurfaceId::Text));
            assert_eq!(controller.tree().text, "Dropped");
        }
    }

    #[test]
    fn test_text_only_message_is_neutral() {
        let mut controller = controller();
        receive(&mut controller, &[(1, "ping")]);

        assert_eq!(controller.current_sentiment(), Some(Sentiment::Neutral));
        assert_eq!(controller.last_text_message(), "ping");
    }

    #[test]
    fn test_message_without_text_keeps_last_text() {
        let mut controller = controller();
        receive(&mut controller, &[(1, "first")]);
        receive(&mut controller, &[(2, "happy")]);

        assert_eq!(controller.current_sentiment(), Some(Sentiment::Happy));
        assert_eq!(controller.last_text_message(), "first");
    }

    #[test]
    fn test_empty_record_shows_neutral() {
        let mut controller = controller();
        receive(&mut controller, &[]);

        assert_eq!(controller.current_sentiment(), Some(Sentiment::Neutral));
        assert_eq!(controller.last_text_message(), "Welcome");
    }

    #[test]
    fn test_select_changes_nothing() {
        let mut controller = controller();
        receive(&mut controller, &[(1, "hello"), (2, "sad")]);
        controller.tree_mut().clear_ops();

        controller.press(ButtonEvent::Select);

        assert!(controller.tree().ops.is_empty());
        assert_eq!(controller.view(), View::ShowingSentimentImage(Sentiment::Sad));
    }

    #[test]
    fn test_status_texts() {
        let mut controller = controller();

        controller.report(TransportStatus::Sent);
        assert_eq!(controller.tree().text, "Sent");

        controller.report(TransportStatus::SendFailed);
        assert_eq!(controller.tree().text, "Failed");
        assert_eq!(controller.tree().attached, Some(SurfaceId::Text));
    }

    #[test]
    fn test_image_to_text_detaches_first() {
        let mut controller = controller();
        receive(&mut controller, &[(2, "happy")]);
        controller.tree_mut().clear_ops();

        controller.press(ButtonEvent::Up);

        assert_eq!(
            controller.tree().ops,
            [
                Op::SetText("Welcome".into()),
                Op::Detach(SurfaceId::Image(Sentiment::Happy)),
                Op::Attach(SurfaceId::Text)
            ]
        );
    }

    #[test]
    fn test_same_sentiment_twice_keeps_image_attached() {
        let mut controller = controller();
        receive(&mut controller, &[(2, "sad")]);
        controller.tree_mut().clear_ops();

        receive(&mut controller, &[(1, "again"), (2, "sad")]);

        assert!(controller.tree().ops.is_empty());
        assert_eq!(controller.last_text_message(), "again");
    }

    #[test]
    fn test_take_dirty_after_event() {
        let mut controller = controller();
        assert!(controller.take_dirty());
        assert!(!controller.take_dirty());

        controller.press(ButtonEvent::Select);
        assert!(!controller.take_dirty());

        controller.press(ButtonEvent::Down);
        assert!(controller.take_dirty());
        assert_eq!(controller.tree().attached, Some(SurfaceId::Text));
    }
}
