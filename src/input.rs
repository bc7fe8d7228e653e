//! The `kbhit`/`getch` handle.
//!
//! A [`TerminalInput`] owns everything needed to toggle one terminal between
//! cooked and raw mode: the fd it drives, the configuration, and the settings
//! snapshot taken the first time raw mode was enabled.
//!
//! ```no_run
//! use rawkey::TerminalInput;
//!
//! let mut input = TerminalInput::stdin();
//! input.enable_raw_mode()?;
//! loop {
//!     if let Some(byte) = input.try_read_byte()? {
//!         if byte == b'q' {
//!             break;
//!         }
//!     }
//!     // ... other work ...
//! }
//! input.disable_raw_mode()?;
//! # Ok::<(), rawkey::InputError>(())
//! ```

use std::os::fd::{AsFd, AsRawFd, BorrowedFd, RawFd};

use tracing::{debug, trace, warn};

use crate::config::RawModeConfig;
use crate::error::{InputError, Result};
use crate::settings::TerminalSettings;
use crate::sys;

/// Line discipline state last confirmed by a successful attribute-set call.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mode {
    /// Canonical, line-buffered input (the terminal's normal state).
    Cooked,
    /// Non-canonical: bytes are delivered as soon as they arrive.
    Raw,
}

/// Raw keyboard input on one terminal file descriptor.
///
/// State changes take `&mut self`; the handle can be moved to an input thread
/// but not shared. Dropping it while in [`Mode::Raw`] restores the original
/// settings.
pub struct TerminalInput<'fd> {
    fd: BorrowedFd<'fd>,
    config: RawModeConfig,
    saved: Option<TerminalSettings>,
    mode: Mode,
}

impl TerminalInput<'static> {
    /// Handle on the process's standard input.
    pub fn stdin() -> Self {
        // SAFETY: fd 0 stays open for the life of the process.
        let fd = unsafe { BorrowedFd::borrow_raw(libc::STDIN_FILENO) };
        Self::with_borrowed(fd)
    }
}

impl<'fd> TerminalInput<'fd> {
    /// Handle on any terminal fd, e.g. the slave side of a pseudo-terminal.
    pub fn from_fd<F: AsFd + ?Sized>(fd: &'fd F) -> Self {
        Self::with_borrowed(fd.as_fd())
    }

    fn with_borrowed(fd: BorrowedFd<'fd>) -> Self {
        Self {
            fd,
            config: RawModeConfig::default(),
            saved: None,
            mode: Mode::Cooked,
        }
    }

    /// Replace the raw mode configuration. Takes effect on the next enable.
    pub fn with_config(mut self, config: RawModeConfig) -> Self {
        self.config = config;
        self
    }

    pub fn config(&self) -> &RawModeConfig {
        &self.config
    }

    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// The snapshot raw mode restores, if raw mode was ever enabled.
    pub fn saved_settings(&self) -> Option<&TerminalSettings> {
        self.saved.as_ref()
    }

    pub fn is_terminal(&self) -> bool {
        sys::is_terminal(self.raw_fd())
    }

    /// Read the terminal's live attributes.
    pub fn current_settings(&self) -> Result<TerminalSettings> {
        sys::get_attrs(self.raw_fd()).map(TerminalSettings::new)
    }

    fn raw_fd(&self) -> RawFd {
        self.fd.as_raw_fd()
    }

    // =========================================================================
    // MODE TRANSITIONS
    // =========================================================================

    /// Switch to non-canonical mode.
    ///
    /// The first successful call snapshots the current attributes. Later calls
    /// re-apply raw attributes derived from that snapshot and never re-capture,
    /// so a double enable cannot lose the original settings.
    ///
    /// On failure nothing changes: the mode stays as it was and no snapshot is
    /// stored.
    pub fn enable_raw_mode(&mut self) -> Result<()> {
        let fd = self.raw_fd();
        if !sys::is_terminal(fd) {
            return Err(InputError::NotATerminal { fd });
        }

        let original = match self.saved {
            Some(saved) => saved,
            None => TerminalSettings::new(sys::get_attrs(fd)?),
        };

        let raw = self.config.apply(&original.raw);
        sys::set_attrs_now(fd, &raw)?;

        match (self.saved.is_some(), self.mode) {
            (false, _) => {
                debug!(fd, cleared = ?self.config.cleared(), "raw mode enabled");
                self.saved = Some(original);
            }
            (true, Mode::Cooked) => {
                debug!(fd, cleared = ?self.config.cleared(), "raw mode re-enabled");
            }
            (true, Mode::Raw) => trace!(fd, "re-applying raw mode"),
        }
        self.mode = Mode::Raw;
        Ok(())
    }

    /// Restore the settings captured by the first successful enable.
    ///
    /// Always re-applies the snapshot, even if already cooked.
    pub fn disable_raw_mode(&mut self) -> Result<()> {
        let fd = self.raw_fd();
        let saved = self.saved.ok_or(InputError::NeverEnabled)?;
        sys::set_attrs_now(fd, &saved.raw)?;
        if self.mode == Mode::Raw {
            debug!(fd, "raw mode disabled");
        }
        self.mode = Mode::Cooked;
        Ok(())
    }

    // =========================================================================
    // INPUT
    // =========================================================================

    /// Bytes readable right now without blocking.
    ///
    /// In cooked mode only completed lines are counted.
    pub fn pending_bytes(&self) -> Result<usize> {
        sys::bytes_available(self.raw_fd())
    }

    /// `kbhit`: is at least one byte waiting?
    pub fn has_pending(&self) -> Result<bool> {
        Ok(self.pending_bytes()? > 0)
    }

    /// `getch`: block until one byte arrives and return it.
    ///
    /// Multi-byte keys (arrows, function keys) take one call per byte.
    pub fn read_byte(&mut self) -> Result<u8> {
        let mut byte = [0u8; 1];
        match sys::read(self.raw_fd(), &mut byte)? {
            0 => Err(InputError::EndOfInput),
            _ => Ok(byte[0]),
        }
    }

    /// Read one byte if one is pending, otherwise return `None` immediately.
    pub fn try_read_byte(&mut self) -> Result<Option<u8>> {
        if !self.has_pending()? {
            return Ok(None);
        }
        self.read_byte().map(Some)
    }

    /// Append every currently pending byte to `buf` without blocking.
    ///
    /// Returns the number of bytes appended. Useful for collecting a whole
    /// escape sequence that arrived in one burst.
    pub fn read_pending(&mut self, buf: &mut Vec<u8>) -> Result<usize> {
        let pending = self.pending_bytes()?;
        if pending == 0 {
            return Ok(0);
        }
        let start = buf.len();
        buf.resize(start + pending, 0);
        match sys::read(self.raw_fd(), &mut buf[start..]) {
            Ok(n) => {
                buf.truncate(start + n);
                Ok(n)
            }
            Err(e) => {
                buf.truncate(start);
                Err(e)
            }
        }
    }

    /// Discard input that has been received but not yet read.
    pub fn flush_pending(&self) -> Result<()> {
        sys::flush_input(self.raw_fd())?;
        trace!(fd = self.raw_fd(), "input queue flushed");
        Ok(())
    }
}

impl Drop for TerminalInput<'_> {
    fn drop(&mut self) {
        if self.mode == Mode::Raw {
            if let Err(e) = self.disable_raw_mode() {
                warn!(fd = self.raw_fd(), error = %e, "failed to restore terminal settings");
            }
        }
    }
}

impl std::fmt::Debug for TerminalInput<'_> {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("TerminalInput")
            .field("fd", &self.raw_fd())
            .field("mode", &self.mode)
            .field("config", &self.config)
            .finish_non_exhaustive()
    }
}
