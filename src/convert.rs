//! Single-pass conversion pipeline: enumerate, compress, append, patch.

use std::env;
use std::ffi::OsString;
use std::io;
use std::path::{Path, PathBuf};

use log::debug;

use crate::depth::{CompressionError, DepthCompressor, FrameSource, SourceError};
use crate::klg::{LogStats, LogWriter};
use crate::schema::{ConfigError, ConvertConfig};

/// Name of the optional JSON config file read by the CLI; never treated as
/// a frame.
pub const CONFIG_FILE_NAME: &str = "kinlog.json";

/// Convert every raw frame file in `dir` into one compressed `.klg` log.
///
/// Frames are processed in the order the directory listing reports them.
/// Each record's timestamp field carries the 0-based processing index,
/// since capture timestamps are unavailable here. Every processed filename
/// is printed to stdout.
///
/// Any failure aborts the whole run; there is no per-frame retry or
/// partial-success mode. The log file handle is released on every exit
/// path, and on error the file keeps its placeholder count of 0.
pub fn convert_dir<P: AsRef<Path>>(
    dir: P,
    config: &ConvertConfig,
) -> Result<ConvertStats, ConvertError> {
    let dir = dir.as_ref();
    config.validate()?;

    let mut source = FrameSource::open(dir, excluded_names(config))?;

    let log_path = dir.join(&config.log_name);
    let mut writer = LogWriter::create(&log_path).map_err(|source| ConvertError::CreateLog {
        path: log_path,
        source,
    })?;

    let mut compressor = DepthCompressor::new(config.frame_bytes(), config.level);
    let mut raw = vec![0u8; config.frame_bytes()];
    let mut raw_bytes: u64 = 0;

    while let Some(path) = source.next_frame(&mut raw)? {
        println!("{}", path.display());

        let compressed = compressor.compress_frame(&raw)?;
        debug!(
            "{}: {} -> {} bytes",
            path.display(),
            raw.len(),
            compressed.len()
        );

        let index = writer.frames_written() as i64;
        writer
            .append(index, compressed)
            .map_err(ConvertError::WriteRecord)?;
        raw_bytes += raw.len() as u64;
    }

    let log = writer.finalize().map_err(ConvertError::Finalize)?;
    Ok(ConvertStats { raw_bytes, log })
}

/// Entry names never treated as frames: the output log, the running
/// executable, and the CLI config file.
fn excluded_names(config: &ConvertConfig) -> Vec<OsString> {
    let mut names = vec![
        OsString::from(config.log_name.clone()),
        OsString::from(CONFIG_FILE_NAME),
    ];
    if let Some(exe) = env::current_exe()
        .ok()
        .and_then(|p| p.file_name().map(|n| n.to_os_string()))
    {
        names.push(exe);
    }
    names
}

/// Statistics from a completed conversion.
#[derive(Debug, Clone)]
pub struct ConvertStats {
    /// Raw depth bytes consumed.
    pub raw_bytes: u64,
    /// Finalized log statistics.
    pub log: LogStats,
}

impl std::fmt::Display for ConvertStats {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{} ({} raw bytes in)", self.log, self.raw_bytes)
    }
}

/// A fatal conversion failure. Every variant aborts the run and leaves any
/// partially written log on disk unfinalized.
#[derive(Debug, thiserror::Error)]
pub enum ConvertError {
    #[error(transparent)]
    Config(#[from] ConfigError),
    #[error(transparent)]
    Source(#[from] SourceError),
    #[error(transparent)]
    Compression(#[from] CompressionError),
    #[error("failed to create log file {}", .path.display())]
    CreateLog {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to write log record")]
    WriteRecord(#[source] io::Error),
    #[error("failed to finalize log header")]
    Finalize(#[source] io::Error),
}

impl ConvertError {
    /// Process exit code for this failure.
    pub fn exit_code(&self) -> i32 {
        match self {
            ConvertError::Config(_) => 2,
            ConvertError::Source(SourceError::List { .. })
            | ConvertError::Source(SourceError::Open { .. })
            | ConvertError::CreateLog { .. } => 3,
            ConvertError::Source(SourceError::Read { .. })
            | ConvertError::Source(SourceError::ShortRead { .. }) => 4,
            ConvertError::Compression(_) => 5,
            ConvertError::WriteRecord(_) | ConvertError::Finalize(_) => 6,
        }
    }
}
