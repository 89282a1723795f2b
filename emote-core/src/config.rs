//! Controller configuration
//!
//! Board-agnostic settings. The firmware fills these from its build-time
//! device configuration.

use crate::decode::FieldText;
use crate::state::machine::truncated;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Text shown until the first message arrives
pub const DEFAULT_WELCOME_TEXT: &str = "Welcome";

/// Display controller configuration
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct DisplayConfig {
    /// Initial text, also the `Up` text before any message arrived
    pub welcome_text: FieldText,
}

impl DisplayConfig {
    /// Configuration with a custom welcome text
    ///
    /// Text longer than a message field is cut at a character boundary.
    pub fn with_welcome(text: &str) -> Self {
        Self {
            welcome_text: truncated(text),
        }
    }
}

impl Default for DisplayConfig {
    fn default() -> Self {
        Self::with_welcome(DEFAULT_WELCOME_TEXT)
    }
}
