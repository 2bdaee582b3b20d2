//! Kinlog CLI - Convert a directory of raw depth frames into one .klg log.

use std::error::Error;
use std::fs;
use std::path::Path;

use kinlog::convert::{CONFIG_FILE_NAME, convert_dir};
use kinlog::schema::ConvertConfig;

fn main() {
    env_logger::init();

    // Optional JSON config next to the frames; defaults match the original
    // capture rig (640x480, kintinuous.klg)
    let config: ConvertConfig = if Path::new(CONFIG_FILE_NAME).exists() {
        let config_str = fs::read_to_string(CONFIG_FILE_NAME).unwrap_or_else(|e| {
            eprintln!("Error reading {}: {}", CONFIG_FILE_NAME, e);
            std::process::exit(2);
        });
        serde_json::from_str(&config_str).unwrap_or_else(|e| {
            eprintln!("Error parsing {}: {}", CONFIG_FILE_NAME, e);
            std::process::exit(2);
        })
    } else {
        ConvertConfig::default()
    };

    println!("Kinlog depth converter");
    println!("======================");
    println!(
        "Frame: {}x{} ({} raw bytes)",
        config.width,
        config.height,
        config.frame_bytes()
    );
    println!("Output: {}", config.log_name);
    println!();

    match convert_dir(".", &config) {
        Ok(stats) => {
            println!();
            println!("Wrote {}: {}", config.log_name, stats);
        }
        Err(e) => {
            eprintln!("Error: {}", e);
            let mut cause = e.source();
            while let Some(c) = cause {
                eprintln!("  caused by: {}", c);
                cause = c.source();
            }
            std::process::exit(e.exit_code());
        }
    }
}
