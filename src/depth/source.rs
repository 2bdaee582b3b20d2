//! Raw frame enumeration over a capture directory.

use std::ffi::OsString;
use std::fs::{self, File};
use std::io::{self, Read};
use std::path::{Path, PathBuf};

use log::debug;

/// Lazily yields raw depth frames from a capture directory.
///
/// Entries are visited in whatever order the operating system reports them;
/// no ordering is imposed. Non-regular entries and excluded names (the
/// output log, the running executable) are skipped; every remaining entry
/// is treated as a frame file. The sequence is finite and non-restartable.
pub struct FrameSource {
    dir: PathBuf,
    entries: fs::ReadDir,
    excluded: Vec<OsString>,
}

impl FrameSource {
    /// Open a frame directory. `excluded` lists entry names that are never
    /// treated as frames.
    pub fn open<P: AsRef<Path>>(dir: P, excluded: Vec<OsString>) -> Result<Self, SourceError> {
        let dir = dir.as_ref().to_path_buf();
        let entries = fs::read_dir(&dir).map_err(|source| SourceError::List {
            dir: dir.clone(),
            source,
        })?;
        Ok(Self {
            dir,
            entries,
            excluded,
        })
    }

    /// Read the next frame into `buf`, which must be sized to the expected
    /// raw frame length. Returns the frame file's path, or `None` once the
    /// directory is exhausted.
    ///
    /// A file holding fewer than `buf.len()` bytes is a fatal
    /// [`SourceError::ShortRead`]; a partially filled buffer is never
    /// yielded. Bytes past the expected frame length are ignored.
    pub fn next_frame(&mut self, buf: &mut [u8]) -> Result<Option<PathBuf>, SourceError> {
        loop {
            let entry = match self.entries.next() {
                Some(entry) => entry.map_err(|source| SourceError::List {
                    dir: self.dir.clone(),
                    source,
                })?,
                None => return Ok(None),
            };

            let name = entry.file_name();
            if self.excluded.contains(&name) {
                debug!("skipping excluded entry {:?}", name);
                continue;
            }

            let path = entry.path();
            let file_type = entry.file_type().map_err(|source| SourceError::Open {
                path: path.clone(),
                source,
            })?;
            if !file_type.is_file() {
                debug!("skipping non-regular entry {}", path.display());
                continue;
            }

            let mut file = File::open(&path).map_err(|source| SourceError::Open {
                path: path.clone(),
                source,
            })?;
            read_frame(&mut file, &path, buf)?;
            return Ok(Some(path));
        }
    }
}

/// Fill `buf` from `file`, failing loudly when the file runs out early.
fn read_frame(file: &mut File, path: &Path, buf: &mut [u8]) -> Result<(), SourceError> {
    let mut filled = 0;
    while filled < buf.len() {
        match file.read(&mut buf[filled..]) {
            Ok(0) => {
                return Err(SourceError::ShortRead {
                    path: path.to_path_buf(),
                    expected: buf.len(),
                    actual: filled,
                });
            }
            Ok(n) => filled += n,
            Err(e) if e.kind() == io::ErrorKind::Interrupted => continue,
            Err(source) => {
                return Err(SourceError::Read {
                    path: path.to_path_buf(),
                    source,
                });
            }
        }
    }
    Ok(())
}

/// Frame enumeration and read errors. All are fatal for a conversion run.
#[derive(Debug, thiserror::Error)]
pub enum SourceError {
    #[error("failed to list frame directory {}", .dir.display())]
    List {
        dir: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to open frame file {}", .path.display())]
    Open {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("failed to read frame file {}", .path.display())]
    Read {
        path: PathBuf,
        #[source]
        source: io::Error,
    },
    #[error("frame file {} holds {actual} bytes, expected {expected}", .path.display())]
    ShortRead {
        path: PathBuf,
        expected: usize,
        actual: usize,
    },
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::collections::HashSet;
    use tempfile::tempdir;

    const FRAME_BYTES: usize = 32;

    #[test]
    fn test_source_reads_all_frames() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("frame_a.raw"), [0xABu8; FRAME_BYTES]).unwrap();
        fs::write(dir.path().join("frame_b.raw"), [0xCDu8; FRAME_BYTES]).unwrap();

        let mut source = FrameSource::open(dir.path(), Vec::new()).unwrap();
        let mut buf = [0u8; FRAME_BYTES];
        let mut seen = HashSet::new();

        while let Some(path) = source.next_frame(&mut buf).unwrap() {
            let name = path.file_name().unwrap().to_string_lossy().into_owned();
            match name.as_str() {
                "frame_a.raw" => assert_eq!(buf, [0xABu8; FRAME_BYTES]),
                "frame_b.raw" => assert_eq!(buf, [0xCDu8; FRAME_BYTES]),
                other => panic!("unexpected frame {}", other),
            }
            seen.insert(name);
        }

        assert_eq!(seen.len(), 2);
    }

    #[test]
    fn test_source_skips_excluded_and_directories() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("frame.raw"), [1u8; FRAME_BYTES]).unwrap();
        fs::write(dir.path().join("kintinuous.klg"), [2u8; 4]).unwrap();
        fs::write(dir.path().join("kinlog"), [3u8; 8]).unwrap();
        fs::create_dir(dir.path().join("subdir")).unwrap();

        let excluded = vec![OsString::from("kintinuous.klg"), OsString::from("kinlog")];
        let mut source = FrameSource::open(dir.path(), excluded).unwrap();
        let mut buf = [0u8; FRAME_BYTES];

        let first = source.next_frame(&mut buf).unwrap().unwrap();
        assert_eq!(first.file_name().unwrap(), "frame.raw");
        assert!(source.next_frame(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_source_short_file_is_fatal() {
        let dir = tempdir().unwrap();
        fs::write(dir.path().join("truncated.raw"), [7u8; FRAME_BYTES / 2]).unwrap();

        let mut source = FrameSource::open(dir.path(), Vec::new()).unwrap();
        let mut buf = [0u8; FRAME_BYTES];

        match source.next_frame(&mut buf) {
            Err(SourceError::ShortRead {
                expected, actual, ..
            }) => {
                assert_eq!(expected, FRAME_BYTES);
                assert_eq!(actual, FRAME_BYTES / 2);
            }
            other => panic!("expected ShortRead, got {:?}", other),
        }
    }

    #[test]
    fn test_source_ignores_trailing_bytes() {
        let dir = tempdir().unwrap();
        let mut content = vec![9u8; FRAME_BYTES];
        content.extend_from_slice(&[0xFF; 16]);
        fs::write(dir.path().join("long.raw"), &content).unwrap();

        let mut source = FrameSource::open(dir.path(), Vec::new()).unwrap();
        let mut buf = [0u8; FRAME_BYTES];

        assert!(source.next_frame(&mut buf).unwrap().is_some());
        assert_eq!(buf, [9u8; FRAME_BYTES]);
        assert!(source.next_frame(&mut buf).unwrap().is_none());
    }

    #[test]
    fn test_source_missing_directory() {
        let dir = tempdir().unwrap();
        let missing = dir.path().join("nope");

        match FrameSource::open(&missing, Vec::new()) {
            Err(SourceError::List { dir, .. }) => assert_eq!(dir, missing),
            _ => panic!("expected List error"),
        }
    }
}
