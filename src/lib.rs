//! Kinlog - Compressed depth-frame log writer.
//!
//! This crate converts a directory of raw fixed-size 16-bit depth-sensor
//! frames into a single sequential Kintinuous-style `.klg` log file, with
//! each frame zlib-compressed and framed by its size and sequence index.
//!
//! # Architecture
//!
//! The crate is split into three main modules:
//!
//! - `schema`: Conversion configuration (frame resolution, output name)
//! - `depth`: Frame enumeration and per-frame zlib compression
//! - `klg`: The on-disk log format and its append-only writer
//!
//! The `convert` module drives them in a single forward pass: every frame
//! is read once, compressed once, and written once.
//!
//! # Example
//!
//! ```rust,no_run
//! use kinlog::{convert_dir, schema::ConvertConfig};
//!
//! let config = ConvertConfig::default();
//! let stats = convert_dir("./frames", &config)?;
//! println!("wrote {}", stats);
//! # Ok::<(), kinlog::convert::ConvertError>(())
//! ```

pub mod convert;
pub mod depth;
pub mod klg;
pub mod schema;

// Re-export commonly used types
pub use convert::{ConvertError, ConvertStats, convert_dir};
pub use depth::{DepthCompressor, FrameSource};
pub use klg::{LogStats, LogWriter};
pub use schema::ConvertConfig;
