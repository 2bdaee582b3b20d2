//! Append-only log writer with a two-phase header.

use std::fs::File;
use std::io::{self, BufWriter, Seek, SeekFrom, Write};
use std::path::Path;

use super::format::{LogHeader, RecordHeader};

/// Append-only writer for `.klg` depth logs.
///
/// Usage:
/// ```ignore
/// let mut writer = LogWriter::create("kintinuous.klg")?;
/// for (i, frame) in compressed_frames.iter().enumerate() {
///     writer.append(i as i64, frame)?;
/// }
/// let stats = writer.finalize()?;
/// ```
///
/// The frame count is written as a placeholder of 0 on create and patched
/// with the true count on [`finalize`](LogWriter::finalize). A writer that
/// is dropped without finalizing leaves the placeholder on disk even though
/// records follow it; a reader must not trust a zero count when the file is
/// longer than the header.
pub struct LogWriter {
    writer: BufWriter<File>,
    frames_written: i32,
}

impl LogWriter {
    /// Create a new log file, truncating any existing one, and write the
    /// placeholder header.
    pub fn create<P: AsRef<Path>>(path: P) -> io::Result<Self> {
        let file = File::create(path)?;
        let mut writer = BufWriter::new(file);

        LogHeader { frame_count: 0 }.write_to(&mut writer)?;

        Ok(Self {
            writer,
            frames_written: 0,
        })
    }

    /// Append one framed record: timestamp, depth size, image size (always
    /// 0), then the compressed depth payload.
    pub fn append(&mut self, timestamp: i64, depth: &[u8]) -> io::Result<()> {
        let header = RecordHeader {
            timestamp,
            depth_len: depth.len() as i32,
            image_len: 0,
        };
        header.write_to(&mut self.writer)?;
        self.writer.write_all(depth)?;
        self.frames_written += 1;
        Ok(())
    }

    /// Finalize the log file.
    ///
    /// Seeks back to offset 0, overwrites the placeholder with the true
    /// frame count, and flushes. The file is closed when the returned
    /// writer's handle drops.
    pub fn finalize(mut self) -> io::Result<LogStats> {
        let total_bytes = self.writer.stream_position()?;

        self.writer.seek(SeekFrom::Start(0))?;
        LogHeader {
            frame_count: self.frames_written,
        }
        .write_to(&mut self.writer)?;
        self.writer.flush()?;

        Ok(LogStats {
            frame_count: self.frames_written,
            total_bytes,
            average_record_size: if self.frames_written > 0 {
                total_bytes.saturating_sub(LogHeader::SIZE as u64) / self.frames_written as u64
            } else {
                0
            },
        })
    }

    /// Get number of records appended so far.
    pub fn frames_written(&self) -> i32 {
        self.frames_written
    }
}

/// Statistics from a completed log.
#[derive(Debug, Clone)]
pub struct LogStats {
    /// Total records written.
    pub frame_count: i32,
    /// Total file size in bytes.
    pub total_bytes: u64,
    /// Average record size (header + payload) in bytes.
    pub average_record_size: u64,
}

impl std::fmt::Display for LogStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(
            f,
            "{} frames, {} bytes total, {} bytes/record avg",
            self.frame_count, self.total_bytes, self.average_record_size
        )
    }
}
