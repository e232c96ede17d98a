use std::fs;
use std::io::{self, Write};
use std::path::{Path, PathBuf};

use tempfile::NamedTempFile;
use tracing::{info, warn};

use crate::io::lock::LockError;
use crate::model::board::Board;
use crate::parse::{ParseError, parse_board};

/// Error type for board file operations
#[derive(Debug, thiserror::Error)]
pub enum BoardError {
    #[error("could not read {path}: {source}")]
    ReadError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not write {path}: {source}")]
    WriteError {
        path: PathBuf,
        source: std::io::Error,
    },
    #[error("could not parse {path}: {source}")]
    Parse { path: PathBuf, source: ParseError },
    #[error(transparent)]
    Lock(#[from] LockError),
}

/// Write `content` to `path` atomically using a temp file + rename.
pub fn atomic_write(path: &Path, content: &[u8]) -> io::Result<()> {
    let dir = match path.parent() {
        Some(p) if !p.as_os_str().is_empty() => p,
        _ => Path::new("."),
    };
    let mut tmp = NamedTempFile::new_in(dir)?;
    tmp.write_all(content)?;
    tmp.flush()?;
    tmp.persist(path).map_err(|e| e.error)?;
    Ok(())
}

/// Read and parse a board file. Every failure is returned to the caller.
pub fn read_board(path: &Path) -> Result<Board, BoardError> {
    let text = fs::read_to_string(path).map_err(|e| BoardError::ReadError {
        path: path.to_path_buf(),
        source: e,
    })?;
    parse_board(&text).map_err(|e| BoardError::Parse {
        path: path.to_path_buf(),
        source: e,
    })
}

/// Read a board file, degrading to an empty board when the file cannot be
/// read. Parse errors still fail.
pub fn read_board_or_empty(path: &Path) -> Result<Board, BoardError> {
    match read_board(path) {
        Ok(board) => {
            info!(
                path = %path.display(),
                categories = board.categories.len(),
                items = board.item_count(),
                "loaded board"
            );
            Ok(board)
        }
        Err(BoardError::ReadError { path, source }) => {
            warn!(path = %path.display(), error = %source, "board file unreadable, starting empty");
            Ok(Board::new())
        }
        Err(e) => Err(e),
    }
}

/// Write serialized board text to `path`.
pub fn write_board_text(path: &Path, content: &str) -> Result<(), BoardError> {
    atomic_write(path, content.as_bytes()).map_err(|e| BoardError::WriteError {
        path: path.to_path_buf(),
        source: e,
    })?;
    info!(path = %path.display(), bytes = content.len(), "saved board");
    Ok(())
}
