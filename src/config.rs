//! Raw mode configuration.
//!
//! Selects which local-mode (`c_lflag`) bits raw mode clears. The default
//! only turns off canonical line buffering, which is what a `kbhit`/`getch`
//! loop needs; echo and signal handling are left to the terminal unless asked
//! for.

use bitflags::bitflags;

bitflags! {
    /// Local-mode features that raw mode can switch off.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub struct LocalModes: u8 {
        /// Line-at-a-time input (`ICANON`).
        const CANONICAL    = 1 << 0;
        /// Echo typed characters (`ECHO`).
        const ECHO         = 1 << 1;
        /// Echo newline even when `ECHO` is off (`ECHONL`).
        const ECHO_NEWLINE = 1 << 2;
        /// Generate signals for INTR/QUIT/SUSP (`ISIG`).
        const SIGNALS      = 1 << 3;
        /// Implementation-defined input processing (`IEXTEN`).
        const EXTENDED     = 1 << 4;
    }
}

impl LocalModes {
    /// The matching `c_lflag` bits.
    pub(crate) fn to_lflag(self) -> libc::tcflag_t {
        let mut bits: libc::tcflag_t = 0;
        if self.contains(Self::CANONICAL) {
            bits |= libc::ICANON;
        }
        if self.contains(Self::ECHO) {
            bits |= libc::ECHO;
        }
        if self.contains(Self::ECHO_NEWLINE) {
            bits |= libc::ECHONL;
        }
        if self.contains(Self::SIGNALS) {
            bits |= libc::ISIG;
        }
        if self.contains(Self::EXTENDED) {
            bits |= libc::IEXTEN;
        }
        bits
    }
}

/// How [`TerminalInput::enable_raw_mode`](crate::TerminalInput::enable_raw_mode)
/// rewrites the terminal attributes.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RawModeConfig {
    clear: LocalModes,
}

impl RawModeConfig {
    /// Only canonical mode is cleared.
    pub const fn new() -> Self {
        Self { clear: LocalModes::CANONICAL }
    }

    /// Replace the set of cleared modes. `CANONICAL` is always kept.
    pub fn clearing(mut self, modes: LocalModes) -> Self {
        self.clear = modes | LocalModes::CANONICAL;
        self
    }

    /// Also stop the terminal from echoing keystrokes.
    pub fn without_echo(mut self) -> Self {
        self.clear |= LocalModes::ECHO | LocalModes::ECHO_NEWLINE;
        self
    }

    /// Deliver Ctrl-C, Ctrl-\ and Ctrl-Z as plain bytes instead of signals.
    pub fn with_signals_disabled(mut self) -> Self {
        self.clear |= LocalModes::SIGNALS;
        self
    }

    pub fn cleared(&self) -> LocalModes {
        self.clear
    }

    /// Derive raw attributes from an original snapshot.
    ///
    /// `VMIN = 1, VTIME = 0` makes a read wait for exactly one byte with no
    /// timer, whatever the snapshot had in those slots.
    pub(crate) fn apply(&self, original: &libc::termios) -> libc::termios {
        let mut raw = *original;
        raw.c_lflag &= !self.clear.to_lflag();
        raw.c_cc[libc::VMIN] = 1;
        raw.c_cc[libc::VTIME] = 0;
        raw
    }
}

impl Default for RawModeConfig {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn cooked() -> libc::termios {
        // SAFETY: termios is plain old data; all-zero is a valid value.
        let mut t: libc::termios = unsafe { std::mem::zeroed() };
        t.c_lflag = libc::ICANON | libc::ECHO | libc::ECHONL | libc::ISIG | libc::IEXTEN;
        t.c_iflag = libc::ICRNL;
        t.c_cc[libc::VMIN] = 0;
        t.c_cc[libc::VTIME] = 5;
        t
    }

    #[test]
    fn test_default_clears_only_canonical() {
        let raw = RawModeConfig::default().apply(&cooked());
        assert_eq!(raw.c_lflag & libc::ICANON, 0);
        assert_ne!(raw.c_lflag & libc::ECHO, 0);
        assert_ne!(raw.c_lflag & libc::ISIG, 0);
        assert_eq!(raw.c_iflag, libc::ICRNL);
        assert_eq!(raw.c_cc[libc::VMIN], 1);
        assert_eq!(raw.c_cc[libc::VTIME], 0);
    }

    #[test]
    fn test_without_echo() {
        let raw = RawModeConfig::new().without_echo().apply(&cooked());
        assert_eq!(raw.c_lflag & (libc::ICANON | libc::ECHO | libc::ECHONL), 0);
        assert_ne!(raw.c_lflag & libc::ISIG, 0);
    }

    #[test]
    fn test_signals_disabled() {
        let raw = RawModeConfig::new().with_signals_disabled().apply(&cooked());
        assert_eq!(raw.c_lflag & libc::ISIG, 0);
        assert_ne!(raw.c_lflag & libc::IEXTEN, 0);
    }

    #[test]
    fn test_clearing_keeps_canonical() {
        let config = RawModeConfig::new().clearing(LocalModes::EXTENDED);
        assert_eq!(config.cleared(), LocalModes::CANONICAL | LocalModes::EXTENDED);

        let config = RawModeConfig::new().clearing(LocalModes::empty());
        assert_eq!(config.cleared(), LocalModes::CANONICAL);
    }

    #[test]
    fn test_apply_leaves_original_untouched() {
        let original = cooked();
        let _ = RawModeConfig::new().without_echo().apply(&original);
        assert_ne!(original.c_lflag & libc::ICANON, 0);
        assert_eq!(original.c_cc[libc::VTIME], 5);
    }

    #[test]
    fn test_lflag_mapping() {
        assert_eq!(LocalModes::empty().to_lflag(), 0);
        assert_eq!(
            LocalModes::all().to_lflag(),
            libc::ICANON | libc::ECHO | libc::ECHONL | libc::ISIG | libc::IEXTEN,
        );
    }
}
