use std::ffi::CString;
use std::io;
use std::os::unix::io::RawFd;
use std::path::Path;

use libc::{c_char, FILE};

use nix::fcntl::{open, OFlag};
use nix::sys::stat::Mode;

use terminfo::Database;

use super::ffi::{self, SCREEN};

/// Curses screen running on a terminal device opened by this crate
#[derive(Debug)]
pub struct Device {
    screen: *mut SCREEN,
    file: *mut FILE,
    fd: RawFd,
}

impl Device {
    /// Returns the descriptor of the device.
    pub fn fd(&self) -> RawFd {
        self.fd
    }

    /// Deletes the screen and closes the device.
    ///
    /// # Safety
    ///
    /// Curses mode must have been left with `endwin` and every window
    /// created on the screen must have been deleted.
    pub unsafe fn close(self) {
        ffi::delscreen(self.screen);
        libc::fclose(self.file);

        debug!("closed screen {:p}", self.screen);
    }
}

/// Starts curses on the terminal device at `path`, using the terminfo
/// entry `term`.
pub fn new_screen(term: &str, path: &Path) -> io::Result<Device> {
    let c_term = CString::new(term).map_err(|_| io::Error::new(
        io::ErrorKind::InvalidInput, "terminal name contains a NUL byte"))?;

    let fd = open_rw(path)?;

    let file = unsafe { libc::fdopen(fd, b"r+\0".as_ptr() as *const c_char) };

    if file.is_null() {
        let e = io::Error::last_os_error();
        unsafe { close_fd(fd); }
        return Err(e);
    }

    let screen = unsafe { ffi::newterm(c_term.as_ptr(), file, file) };

    if screen.is_null() {
        unsafe { libc::fclose(file); }

        // Report a missing entry as such
        Database::from_name(term).map_err(ti_to_io)?;

        return Err(io::Error::new(io::ErrorKind::Other, "newterm failed"));
    }

    Ok(Device{screen, file, fd})
}

unsafe fn close_fd(fd: RawFd) {
    libc::close(fd);
}

fn open_rw(path: &Path) -> io::Result<RawFd> {
    open(path, OFlag::O_RDWR | OFlag::O_NOCTTY | OFlag::O_CLOEXEC, Mode::empty())
        .map_err(nix_to_io)
}

fn nix_to_io(e: nix::Error) -> io::Error {
    io::Error::from_raw_os_error(e as i32)
}

fn ti_to_io(e: terminfo::Error) -> io::Error {
    match e {
        terminfo::Error::Io(e) => e,
        terminfo::Error::NotFound => io::Error::new(
            io::ErrorKind::NotFound, "terminfo entry not found"),
        terminfo::Error::Parse => io::Error::new(
            io::ErrorKind::Other, "failed to parse terminfo entry"),
        terminfo::Error::Expand(_) => io::Error::new(
            io::ErrorKind::Other, "failed to expand terminfo entry"),
    }
}
