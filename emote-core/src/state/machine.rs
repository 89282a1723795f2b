//! State machine definition
//!
//! What the screen shows is a function of the current view and an event.

use emote_protocol::ButtonEvent;
use heapless::String;

use super::events::Event;
use crate::decode::FieldText;
use crate::sentiment::{classify, Sentiment};
use crate::surface::SurfaceId;

/// Views of the single screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub enum View {
    /// Start-up view, welcome text
    #[default]
    Idle,
    /// Text surface with a message or status line
    ShowingText,
    /// Face for the last received sentiment
    ShowingSentimentImage(Sentiment),
}

impl View {
    /// Surface that must be attached in this view
    pub fn surface(&self) -> SurfaceId {
        match self {
            View::Idle | View::ShowingText => SurfaceId::Text,
            View::ShowingSentimentImage(sentiment) => SurfaceId::Image(*sentiment),
        }
    }

    /// Process an event and return the next view
    pub fn transition(self, event: &Event) -> Self {
        match event {
            Event::MessageReceived(message) => {
                View::ShowingSentimentImage(classify(message.sentiment()))
            }
            Event::Button(ButtonEvent::Select) => self,
            Event::Button(ButtonEvent::Up | ButtonEvent::Down) => View::ShowingText,
            Event::Transport(_) => View::ShowingText,
        }
    }
}

/// Session state owned by the display controller
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DisplayState {
    /// Text of the last message that carried one
    pub last_text_message: FieldText,
    /// Current view; its surface is the attached one
    pub view: View,
}

impl DisplayState {
    /// Start-up state showing `welcome`
    ///
    /// Text longer than a message field is cut at a character boundary.
    pub fn new(welcome: &str) -> Self {
        Self {
            last_text_message: truncated(welcome),
            view: View::Idle,
        }
    }

    pub fn active_surface(&self) -> SurfaceId {
        self.view.surface()
    }
}

impl Default for DisplayState {
    fn default() -> Self {
        Self::new(crate::config::DEFAULT_WELCOME_TEXT)
    }
}

/// Copy `text` into a fixed-capacity string, cutting at a char boundary
pub(crate) fn truncated<const N: usize>(text: &str) -> String<N> {
    let mut out = String::new();
    for ch in text.chars() {
        if out.push(ch).is_err() {
            break;
        }
    }
    out
}
