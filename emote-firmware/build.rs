//! Build script for emote-firmware
//!
//! - Sets up linker search paths for memory.x
//! - Validates device.toml at compile time
//! - Compiles device.toml into `device_config.rs` constants

use std::env;
use std::fs::{self, File};
use std::io::Write;
use std::path::{Path, PathBuf};

/// Longest welcome text a message field can hold
const MAX_WELCOME_LEN: usize = 64;

/// Panel height in pixels
const PANEL_HEIGHT: i64 = 64;

fn main() {
    let out_dir = PathBuf::from(env::var("OUT_DIR").unwrap());
    setup_linker(&out_dir);
    let config = validate_config();
    write_constants(&out_dir, &config);
}

/// Set up linker search paths for memory.x
fn setup_linker(out_dir: &Path) {
    // Copy memory.x to the output directory
    let memory_x = include_bytes!("memory.x");
    let mut f = File::create(out_dir.join("memory.x")).unwrap();
    f.write_all(memory_x).unwrap();

    // Tell rustc where to find memory.x
    println!("cargo:rustc-link-search={}", out_dir.display());

    println!("cargo:rerun-if-changed=memory.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Settings read from device.toml, defaults filled in
struct DeviceConfig {
    welcome_text: String,
    text_y: i64,
    text_height: i64,
    baud_rate: i64,
    inbox_size: i64,
    outbox_size: i64,
    debounce_ms: i64,
}

/// Validate device.toml configuration at compile time
fn validate_config() -> DeviceConfig {
    println!("cargo:rerun-if-changed=device.toml");

    let config_path = Path::new("device.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: device.toml not found!                                   ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a device.toml configuration file.         ║\n\
            ║  Please create one in the emote-firmware directory.              ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read device.toml                               ║\n\
                ║                                                                  ║\n\
                ║  Error: {:<56} ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                e
            );
        }
    };

    let config: toml::Value = match toml::from_str(&config_content) {
        Ok(value) => value,
        Err(e) => {
            let error_msg = e.to_string();
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Invalid TOML syntax in device.toml                       ║\n\
                ╠══════════════════════════════════════════════════════════════════╣\n\
                ║                                                                  ║\n\
                {}\n\
                ║                                                                  ║\n\
                ╚══════════════════════════════════════════════════════════════════╝\n",
                format_error_lines(&error_msg)
            );
        }
    };

    let mut errors = Vec::new();

    let display = section(&config, "display", &mut errors);
    let link = section(&config, "link", &mut errors);
    let buttons = section(&config, "buttons", &mut errors);

    let welcome_text = match display.and_then(|d| d.get("welcome_text")) {
        None => "Welcome".to_string(),
        Some(toml::Value::String(text)) => {
            if text.len() > MAX_WELCOME_LEN {
                errors.push(format!(
                    "[display] welcome_text must be at most {} bytes",
                    MAX_WELCOME_LEN
                ));
            }
            text.clone()
        }
        Some(_) => {
            errors.push("[display] welcome_text must be a string".to_string());
            String::new()
        }
    };

    let text_y = integer(display, "display", "text_y", 27, 0..=PANEL_HEIGHT - 1, &mut errors);
    let text_height = integer(display, "display", "text_height", 10, 1..=PANEL_HEIGHT, &mut errors);
    if text_y + text_height > PANEL_HEIGHT {
        errors.push(format!(
            "[display] text_y + text_height must not exceed {}",
            PANEL_HEIGHT
        ));
    }

    let baud_rate = integer(link, "link", "baud_rate", 115_200, 1_200..=1_000_000, &mut errors);
    let inbox_size = integer(link, "link", "inbox_size", 256, 16..=u16::MAX as i64, &mut errors);
    let outbox_size = integer(link, "link", "outbox_size", 64, 16..=u16::MAX as i64, &mut errors);

    let debounce_ms = integer(buttons, "buttons", "debounce_ms", 20, 1..=500, &mut errors);

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid device configuration                             ║\n\
            ╠══════════════════════════════════════════════════════════════════╣\n\
            {}\n\
            ╚══════════════════════════════════════════════════════════════════╝\n",
            errors
                .iter()
                .map(|e| format!("║  • {:<62} ║", e))
                .collect::<Vec<_>>()
                .join("\n")
        );
    }

    println!("cargo:warning=device.toml validated successfully");

    DeviceConfig {
        welcome_text,
        text_y,
        text_height,
        baud_rate,
        inbox_size,
        outbox_size,
        debounce_ms,
    }
}

/// Look up an optional `[name]` table
fn section<'a>(
    config: &'a toml::Value,
    name: &str,
    errors: &mut Vec<String>,
) -> Option<&'a toml::value::Table> {
    match config.get(name) {
        None => None,
        Some(toml::Value::Table(t)) => Some(t),
        Some(_) => {
            errors.push(format!("[{}] must be a table", name));
            None
        }
    }
}

/// Read an optional integer key and check its range
fn integer(
    table: Option<&toml::value::Table>,
    section: &str,
    key: &str,
    default: i64,
    range: std::ops::RangeInclusive<i64>,
    errors: &mut Vec<String>,
) -> i64 {
    match table.and_then(|t| t.get(key)) {
        None => default,
        Some(toml::Value::Integer(value)) => {
            if !range.contains(value) {
                errors.push(format!(
                    "[{}] {} must be {}-{}",
                    section,
                    key,
                    range.start(),
                    range.end()
                ));
            }
            *value
        }
        Some(_) => {
            errors.push(format!("[{}] {} must be an integer", section, key));
            default
        }
    }
}

/// Emit the validated settings as Rust constants
fn write_constants(out_dir: &Path, config: &DeviceConfig) {
    let source = format!(
        "/// Text shown until the first message arrives\n\
         pub const WELCOME_TEXT: &str = {:?};\n\
         /// Top edge of the text band in pixels\n\
         pub const TEXT_Y: u16 = {};\n\
         /// Height of the text band in pixels\n\
         pub const TEXT_HEIGHT: u16 = {};\n\
         /// Link UART baud rate\n\
         pub const BAUD_RATE: u32 = {};\n\
         /// Inbox size requested from the bridge\n\
         pub const INBOX_SIZE: u16 = {};\n\
         /// Outbox size requested from the bridge\n\
         pub const OUTBOX_SIZE: u16 = {};\n\
         /// Button debounce time\n\
         pub const DEBOUNCE_MS: u64 = {};\n",
        config.welcome_text,
        config.text_y,
        config.text_height,
        config.baud_rate,
        config.inbox_size,
        config.outbox_size,
        config.debounce_ms,
    );

    let mut f = File::create(out_dir.join("device_config.rs")).unwrap();
    f.write_all(source.as_bytes()).unwrap();
}

/// Format error message lines with box drawing
fn format_error_lines(msg: &str) -> String {
    msg.lines()
        .map(|line| {
            let truncated = if line.len() > 64 {
                format!("{}...", &line[..61])
            } else {
                line.to_string()
            };
            format!("║  {:<64} ║", truncated)
        })
        .collect::<Vec<_>>()
        .join("\n")
}
