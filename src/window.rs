//! Window handles
//!
//! A [`Window`] owns one curses window and deletes it when dropped.
//! Windows created with [`subwin`] or [`derwin`] share storage with the
//! window that created them and borrow it for their whole lifetime, so a
//! parent window can never be deleted while a subwindow is alive.
//!
//! ```no_run
//! # use std::io;
//! # fn example() -> io::Result<()> {
//! use tcurses::{Pos, Session, SessionConfig, Size, Window};
//!
//! let session = Session::new(SessionConfig::default())?;
//!
//! let frame = Window::new(Size::new(10, 40), Pos::new(2, 2))?;
//! let inner = frame.derwin(Size::new(8, 38), Pos::new(1, 1))?;
//!
//! frame.draw_box(Default::default(), Default::default());
//! inner.mvaddstr(Pos::new(0, 0), "Hello, world!");
//! frame.refresh();
//!
//! drop(inner);
//! drop(frame);
//! session.end();
//! # Ok(())
//! # }
//! ```
//!
//! [`Window`]: struct.Window.html
//! [`subwin`]: struct.Window.html#method.subwin
//! [`derwin`]: struct.Window.html#method.derwin

use std::fmt;
use std::io;
use std::mem;
use std::ptr;

use libc::{c_char, c_int, c_short};

use crate::attr::Attr;
use crate::cell::Cell;
use crate::key::Key;
use crate::priv_util::{c_len, read_cell, read_cells, read_line, read_string};
use crate::status::Status;
use crate::sys::ffi::{self, attr_t, WINDOW, ERR};
use crate::terminal::{Pos, ScrollRegion, Size};

/// Characters used for the sides of a border.
///
/// A zero cell, as produced by `Default`, selects the standard line
/// drawing character for that side.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BorderSides {
    /// Left side
    pub left: Cell,
    /// Right side
    pub right: Cell,
    /// Top side
    pub top: Cell,
    /// Bottom side
    pub bottom: Cell,
}

/// Characters used for the corners of a border.
///
/// A zero cell, as produced by `Default`, selects the standard line
/// drawing character for that corner.
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct BorderCorners {
    /// Top left corner
    pub top_left: Cell,
    /// Top right corner
    pub top_right: Cell,
    /// Bottom left corner
    pub bottom_left: Cell,
    /// Bottom right corner
    pub bottom_right: Cell,
}

/// Handle to a curses window.
///
/// A handle is either empty or owns exactly one native window. Dropping a
/// non-empty handle deletes the window. Performing any operation other than
/// `clone`, `take` or `is_empty` on an empty handle panics.
///
/// The lifetime `'p` is that of the parent window, for subwindows.
/// Windows created with [`Window::new`] have no parent.
///
/// `Window` methods take `&self`; curses windows are not synchronized and a
/// `Window` cannot be shared between threads.
///
/// [`Window::new`]: #method.new
pub struct Window<'p> {
    ptr: *mut WINDOW,
    parent: Option<&'p Window<'p>>,
}

impl Window<'static> {
    /// Creates a new window at `pos` on the screen.
    ///
    /// A zero line or column count extends the window to the edge of the
    /// screen. A session must be active.
    pub fn new(size: Size, pos: Pos) -> io::Result<Window<'static>> {
        let ptr = unsafe { ffi::newwin(size.lines, size.columns, pos.y, pos.x) };

        if ptr.is_null() {
            return Err(io::Error::new(io::ErrorKind::Other, "newwin failed"));
        }

        trace!("created window {:p}", ptr);

        Ok(Window{ptr, parent: None})
    }

    /// Wraps a window that is never deleted by this handle.
    pub(crate) fn borrowed(ptr: *mut WINDOW) -> mem::ManuallyDrop<Window<'static>> {
        mem::ManuallyDrop::new(Window{ptr, parent: None})
    }
}

impl<'p> Window<'p> {
    /// Returns whether the handle is empty.
    #[inline]
    pub fn is_empty(&self) -> bool {
        self.ptr.is_null()
    }

    /// Returns the window that created this one with `subwin` or `derwin`.
    #[inline]
    pub fn parent(&self) -> Option<&'p Window<'p>> {
        self.parent
    }

    /// Moves the window out of this handle, leaving it empty.
    #[inline]
    pub fn take(&mut self) -> Window<'p> {
        mem::take(self)
    }

    /// Duplicates the window.
    ///
    /// The copy is independent of the original, but has the same parent.
    /// Duplicating an empty handle produces an empty handle.
    pub fn try_clone(&self) -> io::Result<Window<'p>> {
        let ptr = unsafe { ffi::dupwin(self.ptr) };

        if ptr.is_null() != self.ptr.is_null() {
            return Err(io::Error::new(io::ErrorKind::Other, "dupwin failed"));
        }

        if !ptr.is_null() {
            trace!("duplicated window {:p} as {:p}", self.ptr, ptr);
        }

        Ok(Window{ptr, parent: self.parent})
    }

    /// Creates a subwindow at `pos` on the screen.
    ///
    /// The subwindow shares storage with this window; changes through
    /// either are visible through both.
    pub fn subwin(&self, size: Size, pos: Pos) -> io::Result<Window<'_>> {
        let ptr = unsafe { ffi::subwin(self.get(), size.lines, size.columns, pos.y, pos.x) };

        if ptr.is_null() {
            return Err(io::Error::new(io::ErrorKind::Other, "subwin failed"));
        }

        trace!("created subwindow {:p} of {:p}", ptr, self.ptr);

        Ok(Window{ptr, parent: Some(self)})
    }

    /// Creates a subwindow at `pos` relative to this window.
    ///
    /// The subwindow shares storage with this window; changes through
    /// either are visible through both.
    pub fn derwin(&self, size: Size, pos: Pos) -> io::Result<Window<'_>> {
        let ptr = unsafe { ffi::derwin(self.get(), size.lines, size.columns, pos.y, pos.x) };

        if ptr.is_null() {
            return Err(io::Error::new(io::ErrorKind::Other, "derwin failed"));
        }

        trace!("created derived window {:p} of {:p}", ptr, self.ptr);

        Ok(Window{ptr, parent: Some(self)})
    }

    fn get(&self) -> *mut WINDOW {
        assert!(!self.ptr.is_null(), "operation on an empty window");
        self.ptr
    }

    fn width(&self) -> usize {
        let n = unsafe { ffi::getmaxx(self.get()) };
        n.max(0) as usize
    }

    // Geometry

    /// Returns the size of the window.
    pub fn getmaxyx(&self) -> Size {
        let win = self.get();
        unsafe { Size{lines: ffi::getmaxy(win), columns: ffi::getmaxx(win)} }
    }

    /// Returns the position of the window on the screen.
    pub fn getbegyx(&self) -> Pos {
        let win = self.get();
        unsafe { Pos{y: ffi::getbegy(win), x: ffi::getbegx(win)} }
    }

    /// Returns the position of a subwindow relative to its parent.
    ///
    /// Returns `Pos{y: -1, x: -1}` if this is not a subwindow.
    pub fn getparyx(&self) -> Pos {
        let win = self.get();
        unsafe { Pos{y: ffi::getpary(win), x: ffi::getparx(win)} }
    }

    /// Returns the cursor position.
    pub fn getyx(&self) -> Pos {
        let win = self.get();
        unsafe { Pos{y: ffi::getcury(win), x: ffi::getcurx(win)} }
    }

    /// Moves the window to `pos` on the screen.
    pub fn mvwin(&self, pos: Pos) -> Status {
        Status::from(unsafe { ffi::mvwin(self.get(), pos.y, pos.x) })
    }

    /// Moves a subwindow to `pos` within its parent.
    ///
    /// The screen position of the window is unchanged; it shows a
    /// different part of the parent.
    pub fn mvderwin(&self, pos: Pos) -> Status {
        Status::from(unsafe { ffi::mvderwin(self.get(), pos.y, pos.x) })
    }

    /// Moves the cursor.
    pub fn mv(&self, pos: Pos) -> Status {
        Status::from(unsafe { ffi::wmove(self.get(), pos.y, pos.x) })
    }

    // Options

    /// Enables or disables decoding of function keys into `Key` variants.
    pub fn keypad(&self, enable: bool) -> Status {
        Status::from(unsafe { ffi::keypad(self.get(), enable) })
    }

    /// Enables or disables non-blocking input.
    pub fn nodelay(&self, enable: bool) -> Status {
        Status::from(unsafe { ffi::nodelay(self.get(), enable) })
    }

    /// Enables or disables the escape sequence timer.
    pub fn notimeout(&self, enable: bool) -> Status {
        Status::from(unsafe { ffi::notimeout(self.get(), enable) })
    }

    /// Sets the input timeout in milliseconds.
    ///
    /// A negative value blocks; zero does not wait.
    pub fn timeout(&self, ms: i32) {
        unsafe { ffi::wtimeout(self.get(), ms) }
    }

    /// Requests that the next refresh redraws the screen from scratch.
    pub fn clearok(&self, enable: bool) -> Status {
        Status::from(unsafe { ffi::clearok(self.get(), enable) })
    }

    /// Enables or disables use of hardware line insertion and deletion.
    pub fn idlok(&self, enable: bool) -> Status {
        Status::from(unsafe { ffi::idlok(self.get(), enable) })
    }

    /// Enables or disables use of hardware character insertion and deletion.
    pub fn idcok(&self, enable: bool) {
        unsafe { ffi::idcok(self.get(), enable) }
    }

    /// Enables or disables refreshing after every change.
    pub fn immedok(&self, enable: bool) {
        unsafe { ffi::immedok(self.get(), enable) }
    }

    /// Enables or disables leaving the cursor wherever an update leaves it.
    pub fn leaveok(&self, enable: bool) -> Status {
        Status::from(unsafe { ffi::leaveok(self.get(), enable) })
    }

    /// Enables or disables scrolling when the cursor moves past the
    /// bottom of the window or scrolling region.
    pub fn scrollok(&self, enable: bool) -> Status {
        Status::from(unsafe { ffi::scrollok(self.get(), enable) })
    }

    /// Sets the scrolling region.
    pub fn setscrreg(&self, region: ScrollRegion) -> Status {
        Status::from(unsafe { ffi::wsetscrreg(self.get(), region.top, region.bottom) })
    }

    /// Enables or disables propagating changes to ancestor windows.
    pub fn syncok(&self, enable: bool) -> Status {
        Status::from(unsafe { ffi::syncok(self.get(), enable) })
    }

    /// Returns the option set with `clearok`.
    pub fn is_cleared(&self) -> bool {
        unsafe { ffi::is_cleared(self.get()) }
    }

    /// Returns the option set with `idcok`.
    pub fn is_idcok(&self) -> bool {
        unsafe { ffi::is_idcok(self.get()) }
    }

    /// Returns the option set with `idlok`.
    pub fn is_idlok(&self) -> bool {
        unsafe { ffi::is_idlok(self.get()) }
    }

    /// Returns the option set with `immedok`.
    pub fn is_immedok(&self) -> bool {
        unsafe { ffi::is_immedok(self.get()) }
    }

    /// Returns the option set with `keypad`.
    pub fn is_keypad(&self) -> bool {
        unsafe { ffi::is_keypad(self.get()) }
    }

    /// Returns the option set with `leaveok`.
    pub fn is_leaveok(&self) -> bool {
        unsafe { ffi::is_leaveok(self.get()) }
    }

    /// Returns the option set with `nodelay`.
    pub fn is_nodelay(&self) -> bool {
        unsafe { ffi::is_nodelay(self.get()) }
    }

    /// Returns the option set with `notimeout`.
    pub fn is_notimeout(&self) -> bool {
        unsafe { ffi::is_notimeout(self.get()) }
    }

    /// Returns the option set with `scrollok`.
    pub fn is_scrollok(&self) -> bool {
        unsafe { ffi::is_scrollok(self.get()) }
    }

    /// Returns the option set with `syncok`.
    pub fn is_syncok(&self) -> bool {
        unsafe { ffi::is_syncok(self.get()) }
    }

    /// Returns whether this is a subwindow.
    pub fn is_subwin(&self) -> bool {
        unsafe { ffi::is_subwin(self.get()) }
    }

    /// Returns whether this is a pad.
    pub fn is_pad(&self) -> bool {
        unsafe { ffi::is_pad(self.get()) }
    }

    /// Returns the input timeout set with `timeout`.
    pub fn getdelay(&self) -> i32 {
        unsafe { ffi::wgetdelay(self.get()) }
    }

    /// Returns the scrolling region.
    pub fn getscrreg(&self) -> ScrollRegion {
        let mut top: c_int = 0;
        let mut bottom: c_int = 0;

        unsafe { ffi::wgetscrreg(self.get(), &mut top, &mut bottom); }

        ScrollRegion{top, bottom}
    }

    // Attributes

    /// Turns on attributes for subsequent output.
    pub fn attron(&self, attr: Attr) -> Status {
        Status::from(unsafe { ffi::wattron(self.get(), attr.bits() as c_int) })
    }

    /// Turns off attributes for subsequent output.
    ///
    /// Any color pair bits in `attr` reset the color pair.
    pub fn attroff(&self, attr: Attr) -> Status {
        Status::from(unsafe { ffi::wattroff(self.get(), attr.bits() as c_int) })
    }

    /// Sets the attributes for subsequent output.
    pub fn attrset(&self, attr: Attr) -> Status {
        Status::from(unsafe { ffi::wattrset(self.get(), attr.bits() as c_int) })
    }

    /// Sets the color pair for subsequent output.
    pub fn color_set(&self, pair: i16) -> Status {
        Status::from(unsafe { ffi::wcolor_set(self.get(), pair, ptr::null_mut()) })
    }

    /// Returns the attributes for subsequent output.
    pub fn attrget(&self) -> Attr {
        let mut attrs: attr_t = 0;
        let mut pair: c_short = 0;

        unsafe { ffi::wattr_get(self.get(), &mut attrs, &mut pair, ptr::null_mut()); }

        let attrs = Attr::from_native(attrs);

        // The pair set by `color_set` is kept apart from the attribute word
        if pair >= 0 && pair < 256 {
            attrs.remove_color() | Attr::color_pair(pair as i32)
        } else {
            attrs
        }
    }

    /// Changes the attributes of `n` cells starting at the cursor,
    /// leaving characters and the cursor unchanged.
    ///
    /// `None` changes the rest of the line.
    pub fn chgat(&self, n: Option<i32>, attr: Attr) -> Status {
        Status::from(unsafe {
            ffi::wchgat(self.get(), n.unwrap_or(-1),
                attr.remove_color().bits(), attr.pair_number() as c_short, ptr::null())
        })
    }

    /// Moves the cursor, then changes attributes as `chgat` does.
    pub fn mvchgat(&self, pos: Pos, n: Option<i32>, attr: Attr) -> Status {
        Status::from(unsafe {
            ffi::mvwchgat(self.get(), pos.y, pos.x, n.unwrap_or(-1),
                attr.remove_color().bits(), attr.pair_number() as c_short, ptr::null())
        })
    }

    /// Sets the background and applies it to every cell of the window.
    pub fn bkgd(&self, cell: Cell) -> Status {
        Status::from(unsafe { ffi::wbkgd(self.get(), cell.raw()) })
    }

    /// Sets the background for subsequent output.
    pub fn bkgdset(&self, cell: Cell) {
        unsafe { ffi::wbkgdset(self.get(), cell.raw()) }
    }

    /// Returns the background.
    pub fn getbkgd(&self) -> Cell {
        Cell::from_raw(unsafe { ffi::getbkgd(self.get()) })
    }

    // Output

    /// Writes a cell at the cursor and advances the cursor.
    pub fn addch(&self, cell: Cell) -> Status {
        Status::from(unsafe { ffi::waddch(self.get(), cell.raw()) })
    }

    /// Moves the cursor, then writes a cell.
    pub fn mvaddch(&self, pos: Pos, cell: Cell) -> Status {
        Status::from(unsafe { ffi::mvwaddch(self.get(), pos.y, pos.x, cell.raw()) })
    }

    /// Writes a cell and refreshes the window.
    pub fn echochar(&self, cell: Cell) -> Status {
        Status::from(unsafe { ffi::wechochar(self.get(), cell.raw()) })
    }

    /// Writes cells at the cursor, without moving the cursor or wrapping.
    pub fn addchstr(&self, cells: &[Cell]) -> Status {
        Status::from(unsafe {
            ffi::waddchnstr(self.get(), cells.as_ptr() as *const ffi::chtype, c_len(cells.len()))
        })
    }

    /// Writes cells at `pos`, without moving the cursor or wrapping.
    pub fn mvaddchstr(&self, pos: Pos, cells: &[Cell]) -> Status {
        Status::from(unsafe {
            ffi::mvwaddchnstr(self.get(), pos.y, pos.x,
                cells.as_ptr() as *const ffi::chtype, c_len(cells.len()))
        })
    }

    /// Writes a string at the cursor and advances the cursor.
    pub fn addstr(&self, s: &str) -> Status {
        self.addnstr(s, s.len())
    }

    /// Moves the cursor, then writes a string.
    pub fn mvaddstr(&self, pos: Pos, s: &str) -> Status {
        self.mvaddnstr(pos, s, s.len())
    }

    /// Writes at most `n` bytes of a string.
    pub fn addnstr(&self, s: &str, n: usize) -> Status {
        let n = n.min(s.len());
        Status::from(unsafe {
            ffi::waddnstr(self.get(), s.as_ptr() as *const c_char, c_len(n))
        })
    }

    /// Moves the cursor, then writes at most `n` bytes of a string.
    pub fn mvaddnstr(&self, pos: Pos, s: &str, n: usize) -> Status {
        let n = n.min(s.len());
        Status::from(unsafe {
            ffi::mvwaddnstr(self.get(), pos.y, pos.x, s.as_ptr() as *const c_char, c_len(n))
        })
    }

    /// Inserts a cell before the cursor, shifting the rest of the line right.
    pub fn insch(&self, cell: Cell) -> Status {
        Status::from(unsafe { ffi::winsch(self.get(), cell.raw()) })
    }

    /// Moves the cursor, then inserts a cell.
    pub fn mvinsch(&self, pos: Pos, cell: Cell) -> Status {
        Status::from(unsafe { ffi::mvwinsch(self.get(), pos.y, pos.x, cell.raw()) })
    }

    /// Inserts a string before the cursor, shifting the rest of the line right.
    pub fn insstr(&self, s: &str) -> Status {
        Status::from(unsafe {
            ffi::winsnstr(self.get(), s.as_ptr() as *const c_char, c_len(s.len()))
        })
    }

    /// Moves the cursor, then inserts a string.
    pub fn mvinsstr(&self, pos: Pos, s: &str) -> Status {
        Status::from(unsafe {
            ffi::mvwinsnstr(self.get(), pos.y, pos.x, s.as_ptr() as *const c_char, c_len(s.len()))
        })
    }

    /// Deletes the cell at the cursor, shifting the rest of the line left.
    pub fn delch(&self) -> Status {
        Status::from(unsafe { ffi::wdelch(self.get()) })
    }

    /// Moves the cursor, then deletes a cell.
    pub fn mvdelch(&self, pos: Pos) -> Status {
        Status::from(unsafe { ffi::mvwdelch(self.get(), pos.y, pos.x) })
    }

    /// Writes formatted text at the cursor.
    ///
    /// This allows the `write!` macro to be used with a `Window`
    /// without importing any traits.
    pub fn write_fmt(&self, args: fmt::Arguments) -> Status {
        let mut w = self;
        match fmt::Write::write_fmt(&mut w, args) {
            Ok(()) => Status::Ok,
            Err(_) => Status::Err,
        }
    }

    // Reading back

    /// Returns the cell at the cursor.
    pub fn inch(&self) -> Cell {
        read_cell(unsafe { ffi::winch(self.get()) })
    }

    /// Returns the cell at `pos` and moves the cursor there.
    ///
    /// Returns a null cell if `pos` lies outside the window.
    pub fn mvinch(&self, pos: Pos) -> Cell {
        read_cell(unsafe { ffi::mvwinch(self.get(), pos.y, pos.x) })
    }

    /// Returns the cells from the cursor to the end of the line.
    pub fn inchstr(&self) -> Vec<Cell> {
        self.inchnstr(self.width())
    }

    /// Returns at most `n` cells from the cursor.
    pub fn inchnstr(&self, n: usize) -> Vec<Cell> {
        let win = self.get();
        read_cells(n, |buf, n| unsafe { ffi::winchnstr(win, buf, n) })
    }

    /// Moves the cursor, then returns the cells to the end of the line.
    pub fn mvinchstr(&self, pos: Pos) -> Vec<Cell> {
        self.mvinchnstr(pos, self.width())
    }

    /// Moves the cursor, then returns at most `n` cells.
    pub fn mvinchnstr(&self, pos: Pos, n: usize) -> Vec<Cell> {
        let win = self.get();
        read_cells(n, |buf, n| unsafe { ffi::mvwinchnstr(win, pos.y, pos.x, buf, n) })
    }

    /// Returns the characters from the cursor to the end of the line.
    pub fn instr(&self) -> String {
        self.innstr(self.width())
    }

    /// Returns at most `n` characters from the cursor.
    pub fn innstr(&self, n: usize) -> String {
        let win = self.get();
        read_string(n, |buf, n| unsafe { ffi::winnstr(win, buf, n) })
    }

    /// Moves the cursor, then returns the characters to the end of the line.
    pub fn mvinstr(&self, pos: Pos) -> String {
        self.mvinnstr(pos, self.width())
    }

    /// Moves the cursor, then returns at most `n` characters.
    pub fn mvinnstr(&self, pos: Pos, n: usize) -> String {
        let win = self.get();
        read_string(n, |buf, n| unsafe { ffi::mvwinnstr(win, pos.y, pos.x, buf, n) })
    }

    // Input

    /// Reads a key, refreshing the window first if it has changed.
    ///
    /// Returns `None` if no input is available within the window's timeout.
    pub fn getch(&self) -> Option<Key> {
        Key::from_code(unsafe { ffi::wgetch(self.get()) })
    }

    /// Moves the cursor, then reads a key.
    pub fn mvgetch(&self, pos: Pos) -> Option<Key> {
        Key::from_code(unsafe { ffi::mvwgetch(self.get(), pos.y, pos.x) })
    }

    /// Reads a line of input, up to the width of the window.
    ///
    /// Returns an empty string on failure.
    pub fn getstr(&self) -> String {
        self.getnstr(self.width())
    }

    /// Reads a line of input of at most `n` bytes.
    ///
    /// Returns an empty string on failure.
    pub fn getnstr(&self, n: usize) -> String {
        let win = self.get();
        read_line(n, |buf, n| unsafe { ffi::wgetnstr(win, buf, n) })
    }

    /// Moves the cursor, then reads a line of input.
    pub fn mvgetstr(&self, pos: Pos) -> String {
        self.mvgetnstr(pos, self.width())
    }

    /// Moves the cursor, then reads a line of input of at most `n` bytes.
    pub fn mvgetnstr(&self, pos: Pos, n: usize) -> String {
        let win = self.get();
        read_line(n, |buf, n| unsafe { ffi::mvwgetnstr(win, pos.y, pos.x, buf, n) })
    }

    // Clearing and line operations

    /// Fills the window with blanks.
    pub fn erase(&self) -> Status {
        Status::from(unsafe { ffi::werase(self.get()) })
    }

    /// Fills the window with blanks and redraws the screen on the next refresh.
    pub fn clear(&self) -> Status {
        Status::from(unsafe { ffi::wclear(self.get()) })
    }

    /// Clears from the cursor to the end of the window.
    pub fn clrtobot(&self) -> Status {
        Status::from(unsafe { ffi::wclrtobot(self.get()) })
    }

    /// Clears from the cursor to the end of the line.
    pub fn clrtoeol(&self) -> Status {
        Status::from(unsafe { ffi::wclrtoeol(self.get()) })
    }

    /// Scrolls the window up by `n` lines; negative values scroll down.
    ///
    /// Requires `scrollok`.
    pub fn scrl(&self, n: i32) -> Status {
        Status::from(unsafe { ffi::wscrl(self.get(), n) })
    }

    /// Inserts a blank line above the cursor line.
    pub fn insertln(&self) -> Status {
        Status::from(unsafe { ffi::winsertln(self.get()) })
    }

    /// Deletes the cursor line, moving the following lines up.
    pub fn deleteln(&self) -> Status {
        Status::from(unsafe { ffi::wdeleteln(self.get()) })
    }

    /// Inserts `n` lines above the cursor line, or deletes `-n` lines
    /// if `n` is negative.
    pub fn insdelln(&self, n: i32) -> Status {
        Status::from(unsafe { ffi::winsdelln(self.get(), n) })
    }

    // Refresh

    /// Copies the window to the terminal.
    pub fn refresh(&self) -> Status {
        Status::from(unsafe { ffi::wrefresh(self.get()) })
    }

    /// Copies the window to the virtual screen, to be sent to the terminal
    /// by `doupdate`.
    pub fn noutrefresh(&self) -> Status {
        Status::from(unsafe { ffi::wnoutrefresh(self.get()) })
    }

    /// Redraws the whole window on the next refresh.
    pub fn redrawwin(&self) -> Status {
        Status::from(unsafe { ffi::redrawwin(self.get()) })
    }

    /// Redraws `n` lines starting at `beg` on the next refresh.
    pub fn redrawln(&self, beg: i32, n: i32) -> Status {
        Status::from(unsafe { ffi::wredrawln(self.get(), beg, n) })
    }

    /// Marks the whole window as changed.
    pub fn touchwin(&self) -> Status {
        Status::from(unsafe { ffi::touchwin(self.get()) })
    }

    /// Marks the whole window as unchanged.
    pub fn untouchwin(&self) -> Status {
        Status::from(unsafe { ffi::untouchwin(self.get()) })
    }

    /// Marks `n` lines starting at `y` as changed or unchanged.
    pub fn touchln(&self, y: i32, n: i32, changed: bool) -> Status {
        Status::from(unsafe { ffi::wtouchln(self.get(), y, n, changed as c_int) })
    }

    /// Returns whether the window has changed since the last refresh.
    pub fn is_wintouched(&self) -> bool {
        unsafe { ffi::is_wintouched(self.get()) }
    }

    /// Returns whether a line has changed since the last refresh.
    pub fn is_linetouched(&self, line: i32) -> bool {
        unsafe { ffi::is_linetouched(self.get(), line) }
    }

    // Borders and lines

    /// Draws a border around the edges of the window.
    pub fn border(&self, sides: BorderSides, corners: BorderCorners) -> Status {
        Status::from(unsafe {
            ffi::wborder(self.get(),
                sides.left.raw(), sides.right.raw(),
                sides.top.raw(), sides.bottom.raw(),
                corners.top_left.raw(), corners.top_right.raw(),
                corners.bottom_left.raw(), corners.bottom_right.raw())
        })
    }

    /// Draws a border with the given vertical and horizontal characters
    /// and standard corners.
    pub fn draw_box(&self, verch: Cell, horch: Cell) -> Status {
        Status::from(unsafe { ffi::box_(self.get(), verch.raw(), horch.raw()) })
    }

    /// Draws a horizontal line of at most `n` cells from the cursor.
    pub fn hline(&self, cell: Cell, n: i32) -> Status {
        Status::from(unsafe { ffi::whline(self.get(), cell.raw(), n) })
    }

    /// Moves the cursor, then draws a horizontal line.
    pub fn mvhline(&self, pos: Pos, cell: Cell, n: i32) -> Status {
        Status::from(unsafe { ffi::mvwhline(self.get(), pos.y, pos.x, cell.raw(), n) })
    }

    /// Draws a vertical line of at most `n` cells from the cursor.
    pub fn vline(&self, cell: Cell, n: i32) -> Status {
        Status::from(unsafe { ffi::wvline(self.get(), cell.raw(), n) })
    }

    /// Moves the cursor, then draws a vertical line.
    pub fn mvvline(&self, pos: Pos, cell: Cell, n: i32) -> Status {
        Status::from(unsafe { ffi::mvwvline(self.get(), pos.y, pos.x, cell.raw(), n) })
    }

    // Compositing

    /// Copies the non-blank cells of this window onto `dst` where the
    /// windows overlap on the screen.
    pub fn overlay(&self, dst: &Window) -> Status {
        Status::from(unsafe { ffi::overlay(self.get(), dst.get()) })
    }

    /// Copies all cells of this window onto `dst` where the windows
    /// overlap on the screen.
    pub fn overwrite(&self, dst: &Window) -> Status {
        Status::from(unsafe { ffi::overwrite(self.get(), dst.get()) })
    }

    /// Copies the non-blank cells of a region of this window onto the
    /// rectangle `dst_min ..= dst_max` of `dst`, starting from `src_min`.
    pub fn overlay_region(&self, dst: &Window,
            src_min: Pos, dst_min: Pos, dst_max: Pos) -> Status {
        self.copywin(dst, src_min, dst_min, dst_max, true)
    }

    /// Copies a region of this window onto the rectangle
    /// `dst_min ..= dst_max` of `dst`, starting from `src_min`.
    pub fn overwrite_region(&self, dst: &Window,
            src_min: Pos, dst_min: Pos, dst_max: Pos) -> Status {
        self.copywin(dst, src_min, dst_min, dst_max, false)
    }

    fn copywin(&self, dst: &Window,
            src_min: Pos, dst_min: Pos, dst_max: Pos, overlay: bool) -> Status {
        Status::from(unsafe {
            ffi::copywin(self.get(), dst.get(),
                src_min.y, src_min.x,
                dst_min.y, dst_min.x,
                dst_max.y, dst_max.x,
                overlay as c_int)
        })
    }

    // Mouse coordinates

    /// Returns whether the screen position `pos` lies within the window.
    pub fn enclose(&self, pos: Pos) -> bool {
        unsafe { ffi::wenclose(self.get(), pos.y, pos.x) }
    }

    /// Converts a screen position to a position within the window.
    ///
    /// Returns `None` if `pos` is outside the window.
    pub fn to_window(&self, pos: Pos) -> Option<Pos> {
        self.transform(pos, false)
    }

    /// Converts a position within the window to a screen position.
    ///
    /// Returns `None` if `pos` is outside the window.
    pub fn to_screen(&self, pos: Pos) -> Option<Pos> {
        self.transform(pos, true)
    }

    fn transform(&self, pos: Pos, to_screen: bool) -> Option<Pos> {
        let mut y = pos.y;
        let mut x = pos.x;

        if unsafe { ffi::wmouse_trafo(self.get(), &mut y, &mut x, to_screen) } {
            Some(Pos{y, x})
        } else {
            None
        }
    }

    // Synchronization

    /// Marks the ancestors of this window as changed wherever this
    /// window has changed.
    pub fn syncup(&self) {
        unsafe { ffi::wsyncup(self.get()) }
    }

    /// Moves the cursor of ancestor windows to match this window.
    pub fn cursyncup(&self) {
        unsafe { ffi::wcursyncup(self.get()) }
    }

    /// Marks this window as changed wherever an ancestor has changed.
    pub fn syncdown(&self) {
        unsafe { ffi::wsyncdown(self.get()) }
    }
}

impl<'a, 'p> fmt::Write for &'a Window<'p> {
    fn write_str(&mut self, s: &str) -> fmt::Result {
        if self.addstr(s).is_ok() {
            Ok(())
        } else {
            Err(fmt::Error)
        }
    }
}

impl Default for Window<'_> {
    fn default() -> Self {
        Window{ptr: ptr::null_mut(), parent: None}
    }
}

/// # Panics
///
/// If the window cannot be duplicated.
impl<'p> Clone for Window<'p> {
    fn clone(&self) -> Self {
        self.try_clone().unwrap_or_else(|e| panic!("failed to clone window: {}", e))
    }
}

impl fmt::Debug for Window<'_> {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Window")
            .field("ptr", &self.ptr)
            .field("parent", &self.parent.map(|p| p.ptr))
            .finish()
    }
}

impl Drop for Window<'_> {
    fn drop(&mut self) {
        if self.ptr.is_null() {
            return;
        }

        unsafe {
            assert!(self.ptr != ffi::stdscr
                && self.ptr != ffi::curscr
                && self.ptr != ffi::newscr,
                "attempt to delete a window owned by curses");

            let res = ffi::delwin(self.ptr);

            assert!(res != ERR, "delwin failed; the window may have a live subwindow");
        }

        trace!("deleted window {:p}", self.ptr);
    }
}
