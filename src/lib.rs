//! Typed interface to the curses terminal library
//!
//! The [`Session`] type puts the terminal under curses control for as long as
//! it lives. Drawing and input go through [`Window`] handles, which own their
//! native window and delete it when dropped. Subwindows borrow the window
//! that created them, so the borrow checker guarantees that a parent window
//! outlives its children.
//!
//! Characters with display attributes are represented by [`Cell`], and sets
//! of attributes by [`Attr`]. Operations that can fail without further
//! detail return a [`Status`]; operations that acquire a resource return
//! `io::Result`.
//!
//! The [`win_write!`] and [`win_writeln!`] macros provide a convenient
//! interface to output attributes and formatted text to a window.
//!
//! ## Concurrency
//!
//! Curses keeps global state and performs no locking. `Session` and `Window`
//! are neither `Send` nor `Sync`, and all curses calls must be made from the
//! thread that created the session.
//!
//! [`Attr`]: attr/struct.Attr.html
//! [`Cell`]: cell/struct.Cell.html
//! [`Session`]: session/struct.Session.html
//! [`Status`]: status/enum.Status.html
//! [`Window`]: window/struct.Window.html
//! [`win_write!`]: macro.win_write.html
//! [`win_writeln!`]: macro.win_writeln.html

#![deny(missing_docs)]

#[macro_use] extern crate bitflags;
#[macro_use] extern crate log;
extern crate smallvec;

#[cfg(unix)] extern crate libc;
#[cfg(unix)] extern crate nix;
#[cfg(unix)] extern crate terminfo;

#[cfg(not(unix))]
compile_error!("tcurses requires a Unix system with ncurses");

pub use crate::attr::Attr;
pub use crate::cell::{Cell, CellParts};
pub use crate::color::{Color, ColorPairFgBg, ColorRgb};
pub use crate::key::Key;
pub use crate::mouse::{MouseEvent, MouseMask};
pub use crate::session::{Session, SessionConfig};
pub use crate::status::Status;
pub use crate::terminal::{Acs, CursorVisibility, Pos, ScrollRegion, Size};
pub use crate::window::{BorderCorners, BorderSides, Window};

#[doc(hidden)]
#[macro_use] pub mod macros;
mod priv_util;
pub mod attr;
pub mod cell;
pub mod color;
pub mod key;
pub mod mouse;
pub mod session;
pub mod status;
pub mod terminal;
pub mod util;
pub mod window;

#[cfg(unix)]
#[path = "unix/mod.rs"]
mod sys;
