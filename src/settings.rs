//! Snapshot of a terminal's attribute structure.

use std::fmt;

/// Opaque copy of the OS terminal attributes (`struct termios`).
///
/// Two snapshots compare equal when their flag words and control characters
/// match. The separate speed words and platform-private fields are ignored.
#[derive(Clone, Copy)]
pub struct TerminalSettings {
    pub(crate) raw: libc::termios,
}

impl TerminalSettings {
    pub(crate) fn new(raw: libc::termios) -> Self {
        Self { raw }
    }

    /// Line-at-a-time input is on.
    pub fn is_canonical(&self) -> bool {
        self.raw.c_lflag & libc::ICANON != 0
    }

    /// Typed characters are echoed.
    pub fn echoes(&self) -> bool {
        self.raw.c_lflag & libc::ECHO != 0
    }

    /// INTR/QUIT/SUSP generate signals.
    pub fn generates_signals(&self) -> bool {
        self.raw.c_lflag & libc::ISIG != 0
    }
}

impl PartialEq for TerminalSettings {
    fn eq(&self, other: &Self) -> bool {
        let (a, b) = (&self.raw, &other.raw);
        a.c_iflag == b.c_iflag
            && a.c_oflag == b.c_oflag
            && a.c_cflag == b.c_cflag
            && a.c_lflag == b.c_lflag
            && a.c_cc == b.c_cc
    }
}

impl Eq for TerminalSettings {}

impl fmt::Debug for TerminalSettings {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TerminalSettings")
            .field("iflag", &format_args!("{:#o}", self.raw.c_iflag))
            .field("oflag", &format_args!("{:#o}", self.raw.c_oflag))
            .field("cflag", &format_args!("{:#o}", self.raw.c_cflag))
            .field("lflag", &format_args!("{:#o}", self.raw.c_lflag))
            .field("cc", &self.raw.c_cc)
            .finish()
    }
}
