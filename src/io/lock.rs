use std::ffi::OsString;
use std::fs::{File, OpenOptions};
use std::io;
use std::path::{Path, PathBuf};
use std::time::{Duration, Instant};

use tracing::debug;

/// How long CLI edits wait for another process to finish
pub const DEFAULT_LOCK_TIMEOUT: Duration = Duration::from_secs(5);

const RETRY_INTERVAL: Duration = Duration::from_millis(10);

/// Advisory lock held while a board file is read, edited and written back.
///
/// The lock is a flock on the sibling `<board>.lock` file. That file is
/// left in place on release: every process must lock the same inode, and
/// unlinking it would let a waiter and a newcomer hold locks on two
/// different files at once.
#[derive(Debug)]
pub struct BoardLock {
    // Closing the file releases the flock
    _file: File,
    path: PathBuf,
}

/// Error type for lock operations
#[derive(Debug, thiserror::Error)]
pub enum LockError {
    #[error("could not create lock file at {path}: {source}")]
    CreateError { path: PathBuf, source: io::Error },
    #[error("could not lock {path}: {source}")]
    FlockError { path: PathBuf, source: io::Error },
    #[error("could not acquire lock on {path}: another aac process may be editing the board")]
    Timeout { path: PathBuf },
}

/// Path of the lock file guarding `board_path`
pub fn lock_path_for(board_path: &Path) -> PathBuf {
    let mut name = OsString::from(board_path.as_os_str());
    name.push(".lock");
    PathBuf::from(name)
}

impl BoardLock {
    /// Take the lock for `board_path` if nobody else holds it.
    pub fn try_acquire(board_path: &Path) -> Result<Option<Self>, LockError> {
        let path = lock_path_for(board_path);
        let file = OpenOptions::new()
            .create(true)
            .write(true)
            .truncate(false)
            .open(&path)
            .map_err(|source| LockError::CreateError {
                path: path.clone(),
                source,
            })?;

        match try_flock(&file) {
            Ok(true) => {
                debug!(path = %path.display(), "acquired board lock");
                Ok(Some(BoardLock { _file: file, path }))
            }
            Ok(false) => Ok(None),
            Err(source) => Err(LockError::FlockError { path, source }),
        }
    }

    /// Acquire the lock for `board_path`, retrying until `timeout` passes.
    pub fn acquire(board_path: &Path, timeout: Duration) -> Result<Self, LockError> {
        let deadline = Instant::now() + timeout;
        loop {
            if let Some(lock) = Self::try_acquire(board_path)? {
                return Ok(lock);
            }
            if Instant::now() >= deadline {
                return Err(LockError::Timeout {
                    path: lock_path_for(board_path),
                });
            }
            std::thread::sleep(RETRY_INTERVAL);
        }
    }

    pub fn acquire_default(board_path: &Path) -> Result<Self, LockError> {
        Self::acquire(board_path, DEFAULT_LOCK_TIMEOUT)
    }

    /// The lock file this guard holds
    pub fn path(&self) -> &Path {
        &self.path
    }
}

/// Non-blocking exclusive flock. `Ok(false)` means someone else holds it.
#[cfg(unix)]
fn try_flock(file: &File) -> io::Result<bool> {
    use std::os::unix::io::AsRawFd;
    let result = unsafe { libc::flock(file.as_raw_fd(), libc::LOCK_EX | libc::LOCK_NB) };
    if result == 0 {
        return Ok(true);
    }
    let err = io::Error::last_os_error();
    if err.kind() == io::ErrorKind::WouldBlock {
        Ok(false)
    } else {
        Err(err)
    }
}

#[cfg(not(unix))]
fn try_flock(_file: &File) -> io::Result<bool> {
    Ok(true)
}
