//! Global terminal state and geometry types
//!
//! Functions in this module operate on the current curses screen. Most of
//! them require an active [`Session`]; `use_env`, `use_tioctl`, `filter` and
//! `nofilter` only have an effect when called before one is created.
//!
//! [`Session`]: ../session/struct.Session.html

use std::os::unix::io::RawFd;
use std::ptr;

use libc::c_char;

use crate::attr::Attr;
use crate::cell::Cell;
use crate::key::Key;
use crate::priv_util::string_from_ptr;
use crate::status::Status;
use crate::sys::ffi::{self, ERR};

/// Represents a position as a line and column.
///
/// Positions are relative to the screen or to a window, depending on the
/// operation.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Pos {
    /// Line, zero-based
    pub y: i32,
    /// Column, zero-based
    pub x: i32,
}

impl Pos {
    /// Creates a position from line and column.
    #[inline]
    pub fn new(y: i32, x: i32) -> Pos {
        Pos{y, x}
    }
}

impl From<(i32, i32)> for Pos {
    fn from((y, x): (i32, i32)) -> Pos {
        Pos{y, x}
    }
}

/// Represents the size of a window in lines and columns.
///
/// When creating a window, a zero value extends the window to the edge of
/// the screen in that dimension.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct Size {
    /// Number of lines
    pub lines: i32,
    /// Number of columns
    pub columns: i32,
}

impl Size {
    /// Creates a size from lines and columns.
    #[inline]
    pub fn new(lines: i32, columns: i32) -> Size {
        Size{lines, columns}
    }

    /// Returns the size of the whole screen.
    pub fn screen() -> Size {
        Size{lines: lines(), columns: cols()}
    }
}

impl From<(i32, i32)> for Size {
    fn from((lines, columns): (i32, i32)) -> Size {
        Size{lines, columns}
    }
}

/// Software scrolling region of a window, as inclusive line numbers
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ScrollRegion {
    /// First line of the region
    pub top: i32,
    /// Last line of the region
    pub bottom: i32,
}

/// Cursor visibility, as set by `curs_set`
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum CursorVisibility {
    /// Hidden cursor
    Invisible = 0,
    /// Normal cursor
    Normal = 1,
    /// Highly visible cursor
    VeryVisible = 2,
}

impl CursorVisibility {
    fn from_native(n: i32) -> Option<CursorVisibility> {
        match n {
            0 => Some(CursorVisibility::Invisible),
            1 => Some(CursorVisibility::Normal),
            2 => Some(CursorVisibility::VeryVisible),
            _ => None
        }
    }
}

/// Line drawing characters of the alternate character set
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
#[allow(missing_docs)]
pub enum Acs {
    UlCorner = b'l' as isize,
    LlCorner = b'm' as isize,
    UrCorner = b'k' as isize,
    LrCorner = b'j' as isize,
    LTee = b't' as isize,
    RTee = b'u' as isize,
    BTee = b'v' as isize,
    TTee = b'w' as isize,
    HLine = b'q' as isize,
    VLine = b'x' as isize,
    Plus = b'n' as isize,
    S1 = b'o' as isize,
    S3 = b'p' as isize,
    S7 = b'r' as isize,
    S9 = b's' as isize,
    Diamond = b'`' as isize,
    CkBoard = b'a' as isize,
    Degree = b'f' as isize,
    PlMinus = b'g' as isize,
    Bullet = b'~' as isize,
    LArrow = b',' as isize,
    RArrow = b'+' as isize,
    DArrow = b'.' as isize,
    UArrow = b'-' as isize,
    Board = b'h' as isize,
    Lantern = b'i' as isize,
    Block = b'0' as isize,
    LessEqual = b'y' as isize,
    GreaterEqual = b'z' as isize,
    Pi = b'{' as isize,
    NotEqual = b'|' as isize,
    Sterling = b'}' as isize,
}

/// Returns the cell used to draw the given line drawing character.
///
/// The table is filled in when a session starts; before that every entry
/// is a null cell.
pub fn acs(ch: Acs) -> Cell {
    Cell::from_raw(unsafe { ffi::acs_map[ch as usize] })
}

/// Returns the number of lines on the screen.
pub fn lines() -> i32 {
    unsafe { ffi::LINES }
}

/// Returns the number of columns on the screen.
pub fn cols() -> i32 {
    unsafe { ffi::COLS }
}

/// Returns the short name of the terminal.
pub fn termname() -> String {
    string_from_ptr(unsafe { ffi::termname() }).unwrap_or_default()
}

/// Returns the verbose description of the terminal.
pub fn longname() -> String {
    string_from_ptr(unsafe { ffi::longname() }).unwrap_or_default()
}

/// Returns the video attributes supported by the terminal.
pub fn termattrs() -> Attr {
    Attr::from_native(unsafe { ffi::termattrs() })
}

/// Returns the user's erase character.
///
/// Returns `None` if the terminal modes cannot be read.
pub fn erasechar() -> Option<char> {
    control_char(unsafe { ffi::erasechar() })
}

/// Returns the user's line kill character.
///
/// Returns `None` if the terminal modes cannot be read.
pub fn killchar() -> Option<char> {
    control_char(unsafe { ffi::killchar() })
}

fn control_char(ch: c_char) -> Option<char> {
    if ch == ERR as c_char {
        None
    } else {
        Some(ch as u8 as char)
    }
}

/// Enables or disables cbreak mode, in which typed characters are
/// available immediately rather than after a full line.
pub fn cbreak(enable: bool) -> Status {
    Status::from(unsafe { if enable { ffi::cbreak() } else { ffi::nocbreak() } })
}

/// Enables or disables echoing of typed characters.
pub fn echo(enable: bool) -> Status {
    Status::from(unsafe { if enable { ffi::echo() } else { ffi::noecho() } })
}

/// Enables or disables newline translation.
pub fn nl(enable: bool) -> Status {
    Status::from(unsafe { if enable { ffi::nl() } else { ffi::nonl() } })
}

/// Enables or disables raw mode, in which interrupt and flow control
/// characters are passed through as input.
pub fn raw(enable: bool) -> Status {
    Status::from(unsafe { if enable { ffi::raw() } else { ffi::noraw() } })
}

/// Enables or disables flushing of queued input and output when an
/// interrupt character is typed.
pub fn qiflush(enable: bool) {
    unsafe {
        if enable { ffi::qiflush() } else { ffi::noqiflush() }
    }
}

/// Enables half-delay mode, in which input waits at most `tenths`
/// tenths of a second.
///
/// `tenths` must be in the range `1 ..= 255`.
pub fn halfdelay(tenths: i32) -> Status {
    Status::from(unsafe { ffi::halfdelay(tenths) })
}

/// Sets the descriptor checked for typeahead during updates.
///
/// `None` disables the check.
pub fn typeahead(fd: Option<RawFd>) -> Status {
    Status::from(unsafe { ffi::typeahead(fd.unwrap_or(-1)) })
}

/// Enables or disables 8-bit input.
pub fn meta(enable: bool) -> Status {
    Status::from(unsafe { ffi::meta(ptr::null_mut(), enable) })
}

/// Controls whether screen size is taken from the `LINES` and `COLUMNS`
/// environment variables.
///
/// Has effect only before a session is created.
pub fn use_env(enable: bool) {
    unsafe { ffi::use_env(enable) }
}

/// Controls whether screen size is taken from the operating system
/// in preference to the environment.
///
/// Has effect only before a session is created.
pub fn use_tioctl(enable: bool) {
    unsafe { ffi::use_tioctl(enable) }
}

/// Restricts the next session to a single line of the terminal.
///
/// Has effect only before a session is created.
pub fn filter() {
    unsafe { ffi::filter() }
}

/// Undoes the effect of `filter` for the next session.
pub fn nofilter() {
    unsafe { ffi::nofilter() }
}

/// Inserts a pause of `ms` milliseconds into the output.
pub fn delay_output(ms: i32) -> Status {
    Status::from(unsafe { ffi::delay_output(ms) })
}

/// Discards any typeahead not yet read.
pub fn flushinp() -> Status {
    Status::from(unsafe { ffi::flushinp() })
}

/// Returns the printable representation of the character in a cell,
/// e.g. `"^C"` for Ctrl-C.
pub fn unctrl(cell: Cell) -> String {
    string_from_ptr(unsafe { ffi::unctrl(cell.raw()) }).unwrap_or_default()
}

/// Returns the name of a key, e.g. `"KEY_LEFT"` or `"^A"`.
pub fn keyname(key: Key) -> Option<String> {
    string_from_ptr(unsafe { ffi::keyname(key.code()) })
}

/// Saves the current terminal modes as the program mode.
pub fn def_prog_mode() -> Status {
    Status::from(unsafe { ffi::def_prog_mode() })
}

/// Saves the current terminal modes as the shell mode.
pub fn def_shell_mode() -> Status {
    Status::from(unsafe { ffi::def_shell_mode() })
}

/// Restores the modes saved by `def_prog_mode`.
pub fn reset_prog_mode() -> Status {
    Status::from(unsafe { ffi::reset_prog_mode() })
}

/// Restores the modes saved by `def_shell_mode`.
pub fn reset_shell_mode() -> Status {
    Status::from(unsafe { ffi::reset_shell_mode() })
}

/// Saves the terminal modes in a buffer for `resetty`.
pub fn savetty() -> Status {
    Status::from(unsafe { ffi::savetty() })
}

/// Restores the modes saved by `savetty`.
pub fn resetty() -> Status {
    Status::from(unsafe { ffi::resetty() })
}

/// Sets cursor visibility, returning the previous visibility.
///
/// Returns `None` if the terminal cannot set the requested visibility.
pub fn curs_set(visibility: CursorVisibility) -> Option<CursorVisibility> {
    CursorVisibility::from_native(unsafe { ffi::curs_set(visibility as i32) })
}

/// Returns where the cursor will be placed by the next `doupdate`.
///
/// Returns `None` if the cursor is left wherever the update puts it.
pub fn getsyx() -> Option<Pos> {
    unsafe {
        let scr = ffi::newscr;

        if scr.is_null() || ffi::is_leaveok(scr) {
            None
        } else {
            Some(Pos{y: ffi::getcury(scr), x: ffi::getcurx(scr)})
        }
    }
}

/// Sets where the cursor will be placed by the next `doupdate`.
///
/// `None` leaves the cursor wherever the update puts it.
pub fn setsyx(pos: Option<Pos>) -> Status {
    unsafe {
        let scr = ffi::newscr;

        if scr.is_null() {
            return Status::Err;
        }

        match pos {
            None => Status::from(ffi::leaveok(scr, true)),
            Some(pos) => {
                ffi::leaveok(scr, false);
                Status::from(ffi::wmove(scr, pos.y, pos.x))
            }
        }
    }
}

/// Sleeps for `ms` milliseconds.
pub fn napms(ms: i32) -> Status {
    Status::from(unsafe { ffi::napms(ms) })
}

/// Sends all pending deferred refreshes to the terminal.
pub fn doupdate() -> Status {
    Status::from(unsafe { ffi::doupdate() })
}

/// Pushes a key back onto the input queue, to be returned by the next
/// `getch` on any window.
pub fn ungetch(key: Key) -> Status {
    Status::from(unsafe { ffi::ungetch(key.code()) })
}

/// Returns whether the terminal recognizes the given key.
pub fn has_key(key: Key) -> bool {
    unsafe { ffi::has_key(key.code()) != 0 }
}

/// Sounds the audible bell, or flashes the screen if no bell is available.
pub fn beep() -> Status {
    Status::from(unsafe { ffi::beep() })
}

/// Flashes the screen, or sounds the bell if flashing is unavailable.
pub fn flash() -> Status {
    Status::from(unsafe { ffi::flash() })
}

/// Returns the version string of the curses library.
pub fn curses_version() -> String {
    string_from_ptr(unsafe { ffi::curses_version() }).unwrap_or_default()
}

/// Enables or disables extended capability names in terminfo lookups,
/// returning the previous setting.
pub fn use_extended_names(enable: bool) -> bool {
    unsafe { ffi::use_extended_names(enable) != 0 }
}

/// Temporarily leaves curses mode.
///
/// The next refresh returns the terminal to curses mode. Ending the
/// [`Session`] is the normal way to restore the terminal.
///
/// [`Session`]: ../session/struct.Session.html
pub fn endwin() -> Status {
    Status::from(unsafe { ffi::endwin() })
}

/// Returns whether curses mode has been left with `endwin`
/// and not yet resumed.
pub fn isendwin() -> bool {
    unsafe { ffi::isendwin() }
}

#[cfg(test)]
mod test {
    use libc::c_char;

    use super::{control_char, CursorVisibility, Pos, Size};
    use crate::sys::ffi::ERR;

    #[test]
    fn test_geometry() {
        assert_eq!(Pos::from((3, 4)), Pos{y: 3, x: 4});
        assert_eq!(Pos::new(1, 2), Pos{y: 1, x: 2});
        assert_eq!(Size::from((24, 80)), Size{lines: 24, columns: 80});
        assert_eq!(Size::default(), Size::new(0, 0));
    }

    #[test]
    fn test_cursor_visibility() {
        assert_eq!(CursorVisibility::from_native(2), Some(CursorVisibility::VeryVisible));
        assert_eq!(CursorVisibility::from_native(-1), None);
        assert_eq!(CursorVisibility::Normal as i32, 1);
    }

    #[test]
    fn test_control_char() {
        assert_eq!(control_char(0x7f), Some('\x7f'));
        assert_eq!(control_char(0x15), Some('\x15'));
        assert_eq!(control_char(ERR as c_char), None);
    }
}
