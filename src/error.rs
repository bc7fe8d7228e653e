//! Error type for terminal input operations.

use std::io;
use std::os::fd::RawFd;

use thiserror::Error;

pub type Result<T> = std::result::Result<T, InputError>;

/// Failure of a terminal input operation.
#[derive(Debug, Error)]
pub enum InputError {
    /// The file descriptor does not refer to a terminal (piped or redirected input).
    #[error("fd {fd} is not a terminal")]
    NotATerminal { fd: RawFd },

    /// An underlying system call failed.
    #[error("{op} failed: {source}")]
    Sys {
        op: &'static str,
        #[source]
        source: io::Error,
    },

    /// Raw mode was never successfully enabled, so there is nothing to restore.
    #[error("raw mode was never enabled on this terminal")]
    NeverEnabled,

    /// The input stream reached end of file.
    #[error("end of input")]
    EndOfInput,
}

impl InputError {
    /// Wrap the current `errno` for a failed call on `fd`.
    ///
    /// `ENOTTY` is reported as [`InputError::NotATerminal`].
    pub(crate) fn last_os_error(op: &'static str, fd: RawFd) -> Self {
        let source = io::Error::last_os_error();
        Self::from_io(op, fd, source)
    }

    pub(crate) fn from_io(op: &'static str, fd: RawFd, source: io::Error) -> Self {
        if source.raw_os_error() == Some(libc::ENOTTY) {
            return Self::NotATerminal { fd };
        }
        Self::Sys { op, source }
    }

    /// True if the caller should fall back to line-buffered (non-raw) input.
    pub fn is_not_a_terminal(&self) -> bool {
        matches!(self, Self::NotATerminal { .. })
    }
}
