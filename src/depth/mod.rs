//! Depth frame acquisition and compression.
//!
//! [`FrameSource`] walks a capture directory of raw 16-bit depth frames and
//! reads them one at a time into a caller-owned reusable buffer.
//! [`DepthCompressor`] turns each raw buffer into a standalone zlib stream
//! using a single scratch buffer allocated for the worst case.

mod compress;
mod source;

pub use compress::{CompressionError, DepthCompressor};
pub use source::{FrameSource, SourceError};
