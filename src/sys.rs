//! Thin wrappers over the libc terminal calls.
//!
//! Each wrapper performs exactly one system call (reads also restart on
//! `EINTR`) and turns the C return convention into a [`Result`].

use std::os::fd::RawFd;

use crate::error::{InputError, Result};

pub(crate) fn is_terminal(fd: RawFd) -> bool {
    // SAFETY: isatty only inspects the descriptor.
    unsafe { libc::isatty(fd) == 1 }
}

pub(crate) fn get_attrs(fd: RawFd) -> Result<libc::termios> {
    // SAFETY: termios is plain old data; tcgetattr fills it on success.
    let mut termios: libc::termios = unsafe { std::mem::zeroed() };
    if unsafe { libc::tcgetattr(fd, &mut termios) } != 0 {
        return Err(InputError::last_os_error("tcgetattr", fd));
    }
    Ok(termios)
}

/// Apply attributes immediately (`TCSANOW`), without waiting for output to drain.
pub(crate) fn set_attrs_now(fd: RawFd, termios: &libc::termios) -> Result<()> {
    // SAFETY: termios points at a valid, initialized struct.
    if unsafe { libc::tcsetattr(fd, libc::TCSANOW, termios) } != 0 {
        return Err(InputError::last_os_error("tcsetattr", fd));
    }
    Ok(())
}

/// Bytes waiting in the input queue (`FIONREAD`).
pub(crate) fn bytes_available(fd: RawFd) -> Result<usize> {
    let mut count: libc::c_int = 0;
    // SAFETY: FIONREAD writes a single c_int through the pointer.
    if unsafe { libc::ioctl(fd, libc::FIONREAD, &mut count) } != 0 {
        return Err(InputError::last_os_error("ioctl(FIONREAD)", fd));
    }
    Ok(count.max(0) as usize)
}

/// Discard received-but-unread input (`TCIFLUSH`).
pub(crate) fn flush_input(fd: RawFd) -> Result<()> {
    // SAFETY: tcflush takes no pointers.
    if unsafe { libc::tcflush(fd, libc::TCIFLUSH) } != 0 {
        return Err(InputError::last_os_error("tcflush", fd));
    }
    Ok(())
}

/// Read into `buf`, restarting on `EINTR`. Returns 0 at end of input.
pub(crate) fn read(fd: RawFd, buf: &mut [u8]) -> Result<usize> {
    loop {
        // SAFETY: buf is valid for writes of buf.len() bytes.
        let n = unsafe { libc::read(fd, buf.as_mut_ptr().cast(), buf.len()) };
        if n >= 0 {
            return Ok(n as usize);
        }
        let err = std::io::Error::last_os_error();
        if err.kind() == std::io::ErrorKind::Interrupted {
            continue;
        }
        return Err(InputError::from_io("read", fd, err));
    }
}
