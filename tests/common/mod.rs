//! Pseudo-terminal fixture shared by the integration tests.
//!
//! The slave side plays the role of the controlling terminal; writing to the
//! master side is the same as the user typing.

#![allow(dead_code)]

use std::os::fd::{AsRawFd, FromRawFd, OwnedFd};
use std::ptr;
use std::thread;
use std::time::{Duration, Instant};

use rawkey::TerminalInput;

/// How long to wait for injected bytes to cross the pty.
pub const SETTLE: Duration = Duration::from_secs(2);

pub struct Pty {
    pub master: OwnedFd,
    pub slave: OwnedFd,
}

impl Pty {
    pub fn open() -> Self {
        let mut master: libc::c_int = -1;
        let mut slave: libc::c_int = -1;
        let rc = unsafe {
            libc::openpty(
                &mut master,
                &mut slave,
                ptr::null_mut(),
                ptr::null_mut(),
                ptr::null_mut(),
            )
        };
        assert_eq!(rc, 0, "openpty: {}", std::io::Error::last_os_error());
        unsafe {
            Self {
                master: OwnedFd::from_raw_fd(master),
                slave: OwnedFd::from_raw_fd(slave),
            }
        }
    }

    /// Type `bytes` on the terminal.
    pub fn inject(&self, bytes: &[u8]) {
        let n = unsafe { libc::write(self.master.as_raw_fd(), bytes.as_ptr().cast(), bytes.len()) };
        assert_eq!(n, bytes.len() as isize, "write: {}", std::io::Error::last_os_error());
    }

    pub fn input(&self) -> TerminalInput<'_> {
        TerminalInput::from_fd(&self.slave)
    }
}

/// Poll until at least `expected` bytes are pending, then return the count.
///
/// The pty moves data from master to slave asynchronously, so a count taken
/// right after `inject` can still be short.
pub fn wait_for_pending(input: &TerminalInput<'_>, expected: usize) -> usize {
    let deadline = Instant::now() + SETTLE;
    loop {
        let pending = input.pending_bytes().expect("FIONREAD on pty");
        if pending >= expected || Instant::now() >= deadline {
            return pending;
        }
        thread::sleep(Duration::from_millis(5));
    }
}

/// Both ends of an anonymous pipe: (read, write).
pub fn pipe() -> (OwnedFd, OwnedFd) {
    let mut fds = [-1 as libc::c_int; 2];
    let rc = unsafe { libc::pipe(fds.as_mut_ptr()) };
    assert_eq!(rc, 0, "pipe: {}", std::io::Error::last_os_error());
    unsafe { (OwnedFd::from_raw_fd(fds[0]), OwnedFd::from_raw_fd(fds[1])) }
}
