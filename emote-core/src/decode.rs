//! Inbound message decoding
//!
//! Turns a [`RawRecord`] into the two fields the controller cares about.
//! Decoding never fails: missing keys stay absent, unknown keys are
//! skipped and a repeated key keeps its last value.

use emote_protocol::{RawRecord, MAX_VALUE_LEN};
use heapless::String;

/// Record key carrying the message text
pub const KEY_TEXT: u32 = 1;

/// Record key carrying the sentiment label
pub const KEY_SENTIMENT: u32 = 2;

/// Text field as carried in a message
pub type FieldText = String<MAX_VALUE_LEN>;

/// Typed view of an inbound record
#[derive(Debug, Clone, Default, PartialEq, Eq)]
#[cfg_attr(feature = "defmt", derive(defmt::Format))]
pub struct DecodedMessage {
    /// Value of [`KEY_TEXT`], if present
    pub text: Option<FieldText>,
    /// Value of [`KEY_SENTIMENT`], if present
    pub sentiment: Option<FieldText>,
}

impl DecodedMessage {
    pub fn text(&self) -> Option<&str> {
        self.text.as_deref()
    }

    pub fn sentiment(&self) -> Option<&str> {
        self.sentiment.as_deref()
    }
}

/// Decode a record, visiting tuples in transport order
pub fn decode(record: &RawRecord) -> DecodedMessage {
    let mut message = DecodedMessage::default();

    for tuple in record.tuples() {
        match tuple.key {
            KEY_TEXT => message.text = Some(tuple.value.clone()),
            KEY_SENTIMENT => message.sentiment = Some(tuple.value.clone()),
            _ => {}
        }
    }

    message
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    fn record(pairs: &[(u32, &str)]) -> RawRecord {
        RawRecord::from_pairs(pairs).unwrap()
    }

    #[test]
    fn test_empty_record() {
        let message = decode(&RawRecord::new());
        assert_eq!(message, DecodedMessage::default());
        assert!(message.text().is_none());
        assert!(message.sentiment().is_none());
    }

    #[test]
    fn test_both_fields() {
        let message = decode(&record(&[(1, "hello"), (2, "sad")]));
        assert_eq!(message.text(), Some("hello"));
        assert_eq!(message.sentiment(), Some("sad"));
    }

    #[test]
    fn test_out_of_order_fields() {
        let message = decode(&record(&[(2, "happy"), (1, "hi")]));
        assert_eq!(message.text(), Some("hi"));
        assert_eq!(message.sentiment(), Some("happy"));
    }

    #[test]
    fn test_text_only() {
        let message = decode(&record(&[(1, "ping")]));
        assert_eq!(message.text(), Some("ping"));
        assert_eq!(message.sentiment(), None);
    }

    #[test]
    fn test_text_does_not_leak_into_sentiment() {
        // A text tuple on its own must not set the sentiment field
        let message = decode(&record(&[(1, "sad")]));
        assert_eq!(message.sentiment(), None);
    }

    #[test]
    fn test_unknown_keys_ignored() {
        let message = decode(&record(&[(0, "x"), (3, "y"), (u32::MAX, "z")]));
        assert_eq!(message, DecodedMessage::default());
    }

    #[test]
    fn test_last_duplicate_wins() {
        let message = decode(&record(&[(1, "A"), (1, "B")]));
        assert_eq!(message.text(), Some("B"));

        let message = decode(&record(&[(2, "sad"), (1, "t"), (2, "happy")]));
        assert_eq!(message.sentiment(), Some("happy"));
    }

    #[test]
    fn test_empty_value_is_present() {
        let message = decode(&record(&[(1, "")]));
        assert_eq!(message.text(), Some(""));
    }

    proptest! {
        #[test]
        fn test_last_text_tuple_wins(
            pairs in proptest::collection::vec((0u32..4, "[a-z]{0,12}"), 0..8)
        ) {
            let borrowed: std::vec::Vec<(u32, &str)> =
                pairs.iter().map(|(k, v)| (*k, v.as_str())).collect();
            let message = decode(&record(&borrowed));

            let last_text = pairs.iter().rev().find(|(k, _)| *k == KEY_TEXT).map(|(_, v)| v.as_str());
            let last_sentiment = pairs.iter().rev().find(|(k, _)| *k == KEY_SENTIMENT).map(|(_, v)| v.as_str());
            prop_assert_eq!(message.text(), last_text);
            prop_assert_eq!(message.sentiment(), last_sentiment);
        }
    }
}
