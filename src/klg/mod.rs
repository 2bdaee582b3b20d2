//! Kintinuous-style `.klg` log format and its append-only writer.
//!
//! # File Format
//!
//! A `.klg` log stores zlib-compressed depth frames back to back:
//!
//! ```text
//! Header (4 bytes):
//!   Frame count: i32 (placeholder 0 on create, patched on finalize)
//!
//! Frame records (frame_count times):
//!   Timestamp: i64       (sequence index in this build)
//!   Depth size: i32      (N, compressed bytes)
//!   Image size: i32      (M, always 0 in this build)
//!   Depth data: N bytes  (one zlib stream per frame)
//!   Image data: M bytes  (absent when M = 0)
//! ```
//!
//! All integers are little-endian, fixed width, no padding.

mod format;
mod writer;

pub use format::{LogHeader, RecordHeader};
pub use writer::{LogStats, LogWriter};
