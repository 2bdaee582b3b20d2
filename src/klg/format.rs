//! Binary layout definitions for `.klg` depth logs.

use std::io::{self, Read, Write};

/// File header for a `.klg` depth log.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LogHeader {
    /// Total number of records in the log body.
    pub frame_count: i32,
}

impl LogHeader {
    /// Size of header in bytes.
    pub const SIZE: usize = 4;

    /// Write header to output.
    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.frame_count.to_le_bytes())
    }

    /// Read header from input.
    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut buf4 = [0u8; 4];
        r.read_exact(&mut buf4)?;
        Ok(Self {
            frame_count: i32::from_le_bytes(buf4),
        })
    }
}

/// Framing metadata preceding one compressed frame payload.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RecordHeader {
    /// Capture timestamp, unit-agnostic. This build stores the 0-based
    /// sequence index here.
    pub timestamp: i64,
    /// Size in bytes of the compressed depth payload.
    pub depth_len: i32,
    /// Size in bytes of the encoded color image (always 0 in this build).
    pub image_len: i32,
}

impl RecordHeader {
    /// Size of one record header in bytes.
    /// Timestamp(8) + DepthSize(4) + ImageSize(4) = 16
    pub const SIZE: usize = 16;

    pub fn write_to<W: Write>(&self, w: &mut W) -> io::Result<()> {
        w.write_all(&self.timestamp.to_le_bytes())?;
        w.write_all(&self.depth_len.to_le_bytes())?;
        w.write_all(&self.image_len.to_le_bytes())?;
        Ok(())
    }

    pub fn read_from<R: Read>(r: &mut R) -> io::Result<Self> {
        let mut buf4 = [0u8; 4];
        let mut buf8 = [0u8; 8];

        r.read_exact(&mut buf8)?;
        let timestamp = i64::from_le_bytes(buf8);

        r.read_exact(&mut buf4)?;
        let depth_len = i32::from_le_bytes(buf4);

        r.read_exact(&mut buf4)?;
        let image_len = i32::from_le_bytes(buf4);

        Ok(Self {
            timestamp,
            depth_len,
            image_len,
        })
    }
}
