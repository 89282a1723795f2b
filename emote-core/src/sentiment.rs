//! Sentiment classification
//!
//! The companion labels each message with a mood. Only the exact,
//! lower-case labels are recognised; everything else is neutral.

use crate::traits::ImageResource;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// Mood category that selects the face shown on screen
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Sentiment {
    Happy,
    Sad,
    #[default]
    Neutral,
}

impl Sentiment {
    pub const ALL: [Sentiment; 3] = [Sentiment::Happy, Sentiment::Sad, Sentiment::Neutral];

    /// Label used on the wire
    pub fn label(self) -> &'static str {
        match self {
            Sentiment::Happy => "happy",
            Sentiment::Sad => "sad",
            Sentiment::Neutral => "neutral",
        }
    }

    /// Image painted for this sentiment
    pub fn image(self) -> ImageResource {
        match self {
            Sentiment::Happy => ImageResource::Smiley,
            Sentiment::Sad => ImageResource::Frown,
            Sentiment::Neutral => ImageResource::Neutral,
        }
    }
}

/// Classify a raw sentiment field
///
/// Case-sensitive exact match. Absent, empty and unknown labels are all
/// [`Sentiment::Neutral`].
pub fn classify(raw: Option<&str>) -> Sentiment {
    match raw {
        Some("happy") => Sentiment::Happy,
        Some("sad") => Sentiment::Sad,
        _ => Sentiment::Neutral,
    }
}
