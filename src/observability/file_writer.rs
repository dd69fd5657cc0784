//! Size-rotated log file usable as a `tracing_subscriber` writer.
//!
//! When the active file grows past the size limit it is shifted to `.1`, the
//! previous `.1` to `.2`, and so on; the oldest backup beyond the retention
//! count is removed.

use std::fs::{self, File, OpenOptions};
use std::io::{self, Write};
use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tracing_subscriber::fmt::MakeWriter;

/// Maximum file size before rotation (10 MiB).
pub const MAX_FILE_SIZE_BYTES: u64 = 10 * 1024 * 1024;

/// Number of rotated files kept next to the active one.
pub const MAX_BACKUP_FILES: usize = 3;

/// Thread-safe rotating log file.
///
/// Cheap to clone; clones share one file handle. The file is opened lazily on
/// the first write, so construction never fails.
#[derive(Clone)]
pub struct RotatingFile {
    inner: Arc<Inner>,
}

struct Inner {
    path: PathBuf,
    max_bytes: u64,
    max_backups: usize,
    file: Mutex<Option<File>>,
}

impl RotatingFile {
    #[must_use]
    pub fn new(path: PathBuf) -> Self {
        Self::with_limits(path, MAX_FILE_SIZE_BYTES, MAX_BACKUP_FILES)
    }

    /// Creates a writer with custom limits.
    #[must_use]
    pub fn with_limits(path: PathBuf, max_bytes: u64, max_backups: usize) -> Self {
        Self {
            inner: Arc::new(Inner {
                path,
                max_bytes,
                max_backups,
                file: Mutex::new(None),
            }),
        }
    }

    #[must_use]
    pub fn path(&self) -> &Path {
        &self.inner.path
    }

    /// Appends `buf`, rotating first if the file is over the limit.
    ///
    /// # Errors
    ///
    /// Fails if the lock is poisoned or rotating, opening or writing fails.
    pub fn append(&self, buf: &[u8]) -> io::Result<()> {
        let mut slot = self
            .inner
            .file
            .lock()
            .map_err(|e| io::Error::new(io::ErrorKind::Other, format!("Mutex poisoned: {e}")))?;

        if fs::metadata(&self.inner.path).is_ok_and(|m| m.len() > self.inner.max_bytes) {
            *slot = None;
            self.inner.rotate()?;
        }

        if slot.is_none() {
            *slot = Some(
                OpenOptions::new()
                    .create(true)
                    .append(true)
                    .open(&self.inner.path)?,
            );
        }
        if let Some(file) = slot.as_mut() {
            file.write_all(buf)?;
            file.flush()?;
        }
        Ok(())
    }
}

impl Inner {
    fn backup_path(&self, n: usize) -> PathBuf {
        let mut name = self.path.as_os_str().to_os_string();
        name.push(format!(".{n}"));
        PathBuf::from(name)
    }

    fn rotate(&self) -> io::Result<()> {
        if self.max_backups == 0 {
            return fs::remove_file(&self.path);
        }
        let oldest = self.backup_path(self.max_backups);
        if oldest.exists() {
            fs::remove_file(&oldest)?;
        }
        for n in (1..self.max_backups).rev() {
            let from = self.backup_path(n);
            if from.exists() {
                fs::rename(&from, self.backup_path(n + 1))?;
            }
        }
        fs::rename(&self.path, self.backup_path(1))
    }
}

/// Per-event handle returned by [`MakeWriter`].
pub struct RotatingWriter<'a> {
    file: &'a RotatingFile,
}

impl Write for RotatingWriter<'_> {
    fn write(&mut self, buf: &[u8]) -> io::Result<usize> {
        self.file.append(buf)?;
        Ok(buf.len())
    }

    fn flush(&mut self) -> io::Result<()> {
        Ok(())
    }
}

impl<'a> MakeWriter<'a> for RotatingFile {
    type Writer = RotatingWriter<'a>;

    fn make_writer(&'a self) -> Self::Writer {
        RotatingWriter { file: self }
    }
}

impl std::fmt::Debug for RotatingFile {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RotatingFile")
            .field("path", &self.inner.path)
            .field("max_bytes", &self.inner.max_bytes)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn appends_lines() {
        let dir = tempfile::tempdir().expect("temp dir");
        let log = RotatingFile::new(dir.path().join("test.log"));
        log.append(b"one\n").expect("write");
        log.make_writer().write_all(b"two\n").expect("write");
        let contents = fs::read_to_string(log.path()).expect("read log");
        assert_eq!(contents, "one\ntwo\n");
    }

    #[test]
    fn rotates_and_keeps_bounded_backups() {
        let dir = tempfile::tempdir().expect("temp dir");
        let path = dir.path().join("test.log");
        let log = RotatingFile::with_limits(path.clone(), 8, 2);

        for i in 0..6 {
            log.append(format!("line {i} padding\n").as_bytes()).expect("write");
        }

        assert_eq!(fs::read_to_string(&path).expect("active"), "line 5 padding\n");
        assert_eq!(
            fs::read_to_string(dir.path().join("test.log.1")).expect("backup 1"),
            "line 4 padding\n"
        );
        assert!(dir.path().join("test.log.2").exists());
        assert!(!dir.path().join("test.log.3").exists());
    }
}
