//! Per-frame zlib compression with a reusable scratch buffer.

use flate2::{Compress, Compression, FlushCompress, Status};

/// Worst-case zlib output size for `raw` input bytes: covers incompressible
/// input under the encoder's block fallback, plus the stream header and
/// trailer.
fn compress_bound(raw: usize) -> usize {
    raw + raw / 10 + 128
}

/// Compresses fixed-size raw depth buffers into standalone zlib streams.
///
/// The scratch buffer is allocated once, sized for the worst-case output of
/// one frame, and reused across calls. The compressor state is reset before
/// every frame, so each output is an independent zlib stream and identical
/// input always produces identical output.
pub struct DepthCompressor {
    compress: Compress,
    scratch: Vec<u8>,
}

impl DepthCompressor {
    /// Create a compressor for frames of `frame_bytes` raw bytes at the
    /// given deflate level (0-9).
    pub fn new(frame_bytes: usize, level: u32) -> Self {
        Self {
            compress: Compress::new(Compression::new(level), true),
            scratch: vec![0u8; compress_bound(frame_bytes)],
        }
    }

    /// Compress one raw frame, returning the compressed prefix of the
    /// scratch buffer.
    ///
    /// Fails when the deflate stream faults or the output does not fit in
    /// the scratch buffer; both are fatal for a conversion run.
    pub fn compress_frame(&mut self, raw: &[u8]) -> Result<&[u8], CompressionError> {
        self.compress.reset();

        let status = self
            .compress
            .compress(raw, &mut self.scratch, FlushCompress::Finish)?;

        let consumed_all = self.compress.total_in() == raw.len() as u64;
        match status {
            Status::StreamEnd if consumed_all => {
                let len = self.compress.total_out() as usize;
                Ok(&self.scratch[..len])
            }
            _ => Err(CompressionError::ScratchOverflow {
                capacity: self.scratch.len(),
            }),
        }
    }

    /// Scratch buffer capacity in bytes.
    pub fn capacity(&self) -> usize {
        self.scratch.len()
    }
}

/// Depth compression failures. Both kinds abort the run.
#[derive(Debug, thiserror::Error)]
pub enum CompressionError {
    #[error("compressed frame does not fit in {capacity}-byte scratch buffer")]
    ScratchOverflow { capacity: usize },
    #[error("deflate stream fault")]
    Stream(#[from] flate2::CompressError),
}
