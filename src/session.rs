//! Curses mode lifecycle
//!
//! A [`Session`] puts the terminal under curses control when created and
//! restores it when dropped. Windows may only be created and used while a
//! session is active.
//!
//! [`Session`]: struct.Session.html

use std::io;
use std::mem::ManuallyDrop;
use std::path::Path;
use std::sync::atomic::{AtomicBool, Ordering};

use libc::{c_int, STDOUT_FILENO};

use crate::color::start_color;
use crate::mouse::{mousemask, MouseMask};
use crate::status::Status;
use crate::sys::ffi;
use crate::sys::terminal::{new_screen, Device};
use crate::terminal::{cbreak, curs_set, echo, nl, raw, CursorVisibility};
use crate::window::Window;

static SESSION_ACTIVE: AtomicBool = AtomicBool::new(false);

/// Configures the terminal modes of a new [`Session`].
///
/// This struct implements the [`Default`] trait, providing the curses
/// defaults for all options. Only options that differ from the defaults
/// cause any change to the terminal.
///
/// To override only some options while using the remaining default values,
/// one may use the following construct:
///
/// ```no_run
/// # use std::io;
/// # fn example() -> io::Result<()> {
/// use tcurses::{Session, SessionConfig};
///
/// let session = Session::new(SessionConfig{
///     cbreak: true,
///     echo: false,
///     keypad: true,
///     .. SessionConfig::default()
/// })?;
///
/// // ...
///
/// session.end();
/// # Ok(())
/// # }
/// ```
///
/// [`Default`]: https://doc.rust-lang.org/std/default/trait.Default.html
/// [`Session`]: struct.Session.html
#[derive(Copy, Clone, Debug)]
pub struct SessionConfig {
    /// Whether typed characters are available immediately,
    /// rather than after a full line.
    ///
    /// The default is `false`.
    pub cbreak: bool,
    /// Whether interrupt, quit and flow control characters are passed
    /// through as input.
    ///
    /// The default is `false`.
    pub raw: bool,
    /// Whether typed characters are echoed.
    ///
    /// The default is `true`.
    pub echo: bool,
    /// Whether the return key is translated into a newline on input.
    ///
    /// The default is `true`.
    pub nl: bool,
    /// Whether the standard screen decodes function keys into `Key`
    /// variants.
    ///
    /// The default is `false`.
    pub keypad: bool,
    /// Whether to enable color support.
    ///
    /// The default is `false`.
    pub start_color: bool,
    /// Cursor visibility, or `None` to leave it unchanged.
    ///
    /// The default is `None`.
    ///
    /// # Notes
    ///
    /// Terminals that cannot change cursor visibility ignore this setting.
    pub cursor: Option<CursorVisibility>,
    /// Mouse events to report.
    ///
    /// The default is `MouseMask::empty()`.
    pub mouse: MouseMask,
}

impl Default for SessionConfig {
    fn default() -> SessionConfig {
        SessionConfig{
            cbreak: false,
            raw: false,
            echo: true,
            nl: true,
            keypad: false,
            start_color: false,
            cursor: None,
            mouse: MouseMask::empty(),
        }
    }
}

/// Holds the terminal in curses mode.
///
/// At most one session may be active at a time. Dropping a session calls
/// `endwin`, returning the terminal to its previous state, unless
/// [`release`] was called first.
///
/// A session started with [`open`] also deletes its screen and closes the
/// terminal device when it ends. Every window must be dropped before that
/// happens.
///
/// The standard screen window is reachable only through [`stdscr`], and
/// so cannot outlive the session.
///
/// [`open`]: #method.open
/// [`release`]: #method.release
/// [`stdscr`]: #method.stdscr
pub struct Session {
    stdscr: ManuallyDrop<Window<'static>>,
    device: Option<Device>,
    released: bool,
    tty: bool,
}

impl Session {
    /// Starts curses on the controlling terminal, using the terminal type
    /// named by the `TERM` environment variable.
    ///
    /// # Panics
    ///
    /// If another session is active.
    pub fn new(config: SessionConfig) -> io::Result<Session> {
        acquire();

        let win = unsafe { ffi::initscr() };
        assert!(!win.is_null(), "initscr failed");

        Session::start(config, STDOUT_FILENO, None)
    }

    /// Starts curses on the terminal device at `path`, using the
    /// terminal type `term`.
    ///
    /// # Panics
    ///
    /// If another session is active.
    pub fn open<P: AsRef<Path>>(term: &str, path: P, config: SessionConfig)
            -> io::Result<Session> {
        acquire();

        let device = match new_screen(term, path.as_ref()) {
            Ok(dev) => dev,
            Err(e) => {
                SESSION_ACTIVE.store(false, Ordering::SeqCst);
                return Err(e);
            }
        };

        debug!("opened {} screen on {}", term, path.as_ref().display());

        Session::start(config, device.fd(), Some(device))
    }

    fn start(config: SessionConfig, fd: c_int, device: Option<Device>)
            -> io::Result<Session> {
        let stdscr = Window::borrowed(unsafe { ffi::stdscr });
        let tty = unsafe { libc::isatty(fd) } == 1;

        // Loads key definitions, so that `has_key` does not depend on
        // whether any window enables keypad mode.
        stdscr.keypad(true);
        stdscr.keypad(false);

        let session = Session{
            stdscr,
            device,
            released: false,
            tty,
        };

        debug!("curses session started");

        session.configure(config)?;

        Ok(session)
    }

    fn configure(&self, config: SessionConfig) -> io::Result<()> {
        debug!("applying {:?}", config);

        if config.raw {
            raw(true).into_result("raw")?;
        }
        if config.cbreak {
            cbreak(true).into_result("cbreak")?;
        }
        if !config.echo {
            echo(false).into_result("noecho")?;
        }
        if !config.nl {
            nl(false).into_result("nonl")?;
        }
        if config.keypad {
            self.stdscr.keypad(true).into_result("keypad")?;
        }
        if config.start_color {
            start_color().into_result("start_color")?;
        }
        if let Some(vis) = config.cursor {
            if curs_set(vis).is_none() {
                debug!("cursor visibility {:?} not supported", vis);
            }
        }
        if !config.mouse.is_empty() {
            let mask = mousemask(config.mouse);
            debug!("mouse events enabled: {:?}", mask);
        }

        Ok(())
    }

    /// Returns the standard screen window.
    #[inline]
    pub fn stdscr(&self) -> &Window<'static> {
        &self.stdscr
    }

    /// Returns whether the session has been released or ended.
    #[inline]
    pub fn is_released(&self) -> bool {
        self.released
    }

    /// Releases the session without leaving curses mode.
    ///
    /// The caller becomes responsible for calling `terminal::endwin`.
    /// A new session may be started after this call. The screen and
    /// device of a released session are never freed.
    pub fn release(&mut self) {
        if !self.released {
            self.released = true;
            SESSION_ACTIVE.store(false, Ordering::SeqCst);
            debug!("curses session released");
        }
    }

    /// Ends the session, returning the result of `endwin`.
    ///
    /// Returns `Status::Ok` if the session was already released.
    pub fn end(mut self) -> Status {
        self.finish()
    }

    fn finish(&mut self) -> Status {
        if self.released {
            return Status::Ok;
        }

        let res = Status::from(unsafe { ffi::endwin() });

        if let Some(dev) = self.device.take() {
            unsafe { dev.close(); }
        }

        self.released = true;
        SESSION_ACTIVE.store(false, Ordering::SeqCst);

        debug!("curses session ended: {}", res);

        res
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let tty = self.tty;
        let res = self.finish();

        // Terminal modes cannot be restored on other devices
        assert!(res.is_ok() || !tty, "endwin failed");
    }
}

fn acquire() {
    let active = SESSION_ACTIVE.swap(true, Ordering::SeqCst);
    assert!(!active, "a curses session is already active");
}
