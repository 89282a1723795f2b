//! Device configuration
//!
//! Constants are generated by `build.rs` from the validated device.toml.

use emote_core::DisplayConfig;
use emote_display::Layout;

include!(concat!(env!("OUT_DIR"), "/device_config.rs"));

/// Controller settings for this device
pub fn display_config() -> DisplayConfig {
    DisplayConfig::with_welcome(WELCOME_TEXT)
}

/// Panel layout for this device
pub const LAYOUT: Layout = Layout::new(TEXT_Y, TEXT_HEIGHT);
