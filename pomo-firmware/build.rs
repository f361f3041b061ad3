//! Build script for pomo-firmware
//!
//! - Passes the esp-hal and defmt linker scripts
//! - Validates pomo.toml at compile time and emits its values as constants

use std::env;
use std::fs;
use std::path::{Path, PathBuf};

/// Mode labels accepted in `[timer] mode`, in index order
const MODES: [&str; 3] = ["1/1", "25/5", "50/10"];

fn main() {
    setup_linker();
    let config = validate_config();
    emit_constants(&config);
}

/// Pass the linker scripts esp-hal and defmt provide
fn setup_linker() {
    println!("cargo:rustc-link-arg=-Tlinkall.x");
    println!("cargo:rustc-link-arg=-Tdefmt.x");
    println!("cargo:rerun-if-changed=build.rs");
}

/// Boot defaults read from pomo.toml
struct BootConfig {
    mode_index: u8,
    work_color: u16,
    rest_color: u16,
    orientation: u8,
    tap_indicator: bool,
}

/// Validate pomo.toml and extract the boot defaults
fn validate_config() -> BootConfig {
    println!("cargo:rerun-if-changed=pomo.toml");

    let config_path = Path::new("pomo.toml");

    if !config_path.exists() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: pomo.toml not found!                                     ║\n\
            ║                                                                  ║\n\
            ║  The firmware requires a pomo.toml boot configuration file.      ║\n\
            ║  Please create one in the pomo-firmware directory.               ║\n\
            ╚══════════════════════════════════════════════════════════════════╝\n"
        );
    }

    let config_content = match fs::read_to_string(config_path) {
        Ok(content) => content,
        Err(e) => {
            panic!(
                "\n\
                ╔══════════════════════════════════════════════════════════════════╗\n\
                ║  ERROR: Failed to read pomo.toml                                 ║\n\
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
                ║  ERROR: Invalid TOML syntax in pomo.toml                         ║\n\
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

    let mode_index = match lookup(&config, "timer", "mode") {
        Some(toml::Value::String(label)) => match MODES.iter().position(|m| *m == label.as_str()) {
            Some(i) => i as u8,
            None => {
                errors.push(format!("[timer] mode must be one of {}", MODES.join(", ")));
                1
            }
        },
        Some(_) => {
            errors.push("[timer] mode must be a string".to_string());
            1
        }
        None => 1,
    };

    let work_color = color(&config, "work", 0xFCE0, &mut errors);
    let rest_color = color(&config, "rest", 0, &mut errors);
    if work_color == 0 {
        errors.push("[colors] work cannot be 0 (black)".to_string());
    }

    let orientation = match lookup(&config, "display", "orientation") {
        Some(toml::Value::Integer(n)) if (0..=3).contains(n) => *n as u8,
        Some(_) => {
            errors.push("[display] orientation must be 0-3".to_string());
            0
        }
        None => 0,
    };

    let tap_indicator = match lookup(&config, "display", "tap_indicator") {
        Some(toml::Value::Boolean(b)) => *b,
        Some(_) => {
            errors.push("[display] tap_indicator must be true or false".to_string());
            false
        }
        None => false,
    };

    if !errors.is_empty() {
        panic!(
            "\n\
            ╔══════════════════════════════════════════════════════════════════╗\n\
            ║  ERROR: Invalid configuration in pomo.toml                       ║\n\
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

    println!("cargo:warning=pomo.toml validated successfully");

    BootConfig {
        mode_index,
        work_color,
        rest_color,
        orientation,
        tap_indicator,
    }
}

/// Look up `[section] key`
fn lookup<'a>(config: &'a toml::Value, section: &str, key: &str) -> Option<&'a toml::Value> {
    config.get(section).and_then(|s| s.get(key))
}

/// Read an RGB565 value from `[colors]`
fn color(config: &toml::Value, key: &str, default: u16, errors: &mut Vec<String>) -> u16 {
    match lookup(config, "colors", key) {
        Some(toml::Value::Integer(n)) if (0..=0xFFFF).contains(n) => *n as u16,
        Some(_) => {
            errors.push(format!("[colors] {} must be an RGB565 value (0-0xFFFF)", key));
            default
        }
        None => default,
    }
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

/// Write the boot defaults to `$OUT_DIR/boot_config.rs`
fn emit_constants(config: &BootConfig) {
    let out_dir = PathBuf::from(env::var("OUT_DIR").expect("OUT_DIR not set"));
    let source = format!(
        "/// Mode index from `[timer] mode`\n\
        pub const DEFAULT_MODE: u8 = {};\n\
        /// `[colors] work`\n\
        pub const WORK_COLOR: u16 = {:#06X};\n\
        /// `[colors] rest`\n\
        pub const REST_COLOR: u16 = {:#06X};\n\
        /// `[display] orientation`\n\
        pub const ORIENTATION: u8 = {};\n\
        /// `[display] tap_indicator`\n\
        pub const TAP_INDICATOR: bool = {};\n",
        config.mode_index, config.work_color, config.rest_color, config.orientation, config.tap_indicator
    );
    fs::write(out_dir.join("boot_config.rs"), source).expect("failed to write boot_config.rs");
}
