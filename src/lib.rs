//! # rawkey
//!
//! Unbuffered, byte-at-a-time keyboard input for Unix terminals: the
//! `kbhit`/`getch` pair from Windows consoles, built on termios.
//!
//! ## Usage
//!
//! ```text
//! TerminalInput::stdin()
//!     │
//!     ├─ enable_raw_mode()      snapshot attributes, clear ICANON
//!     │
//!     ├─ pending_bytes()        FIONREAD, never blocks   ("kbhit")
//!     ├─ read_byte()            read(2) one byte, blocks ("getch")
//!     ├─ flush_pending()        TCIFLUSH
//!     │
//!     └─ disable_raw_mode()     re-apply the snapshot (also on drop)
//! ```
//!
//! Bytes are returned as-is. Turning escape sequences into keys is left to
//! the caller.
//!
//! ## Modules
//!
//! - [`input`] - The [`TerminalInput`] handle and its operations
//! - [`config`] - Which local modes raw mode switches off
//! - [`settings`] - Terminal attribute snapshots
//! - [`error`] - [`InputError`] and the crate [`Result`]
//!
//! Only Unix targets are supported; elsewhere the crate is empty.

#[cfg(unix)]
pub mod config;
#[cfg(unix)]
pub mod error;
#[cfg(unix)]
pub mod input;
#[cfg(unix)]
pub mod settings;
#[cfg(unix)]
mod sys;

#[cfg(unix)]
pub use config::{LocalModes, RawModeConfig};
#[cfg(unix)]
pub use error::{InputError, Result};
#[cfg(unix)]
pub use input::{Mode, TerminalInput};
#[cfg(unix)]
pub use settings::TerminalSettings;
