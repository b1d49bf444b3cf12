//! Provides macros for easier output of attributes and formatted text.

use crate::status::Status;

/// Writes attributes and formatted text to a `Window`.
///
/// # Usage
///
/// `win_write!` accepts a series of attribute elements and formatted text
/// elements, and returns the [`Status`] of the first failed operation,
/// or `Status::Ok`. Elements after a failure are not written.
///
/// [`win_writeln!`] is equivalent, but writes a newline character
/// to the end of the formatted text.
///
/// Attribute elements are enclosed in square brackets
/// and take one of the following forms:
///
/// | Element           | Equivalent                        |
/// | ----------------- | --------------------------------- |
/// | `[bold]`          | `win.attron(Attr::BOLD)`          |
/// | `[!bold]`         | `win.attroff(Attr::BOLD)`         |
/// | `[reset]`         | `win.attrset(Attr::NORMAL)`       |
/// | `[pair=expr]`     | `win.color_set(expr)`             |
/// | `[attr=expr]`     | `win.attrset(expr)`               |
/// | `[attr+=expr]`    | `win.attron(expr)`                |
/// | `[attr-=expr]`    | `win.attroff(expr)`               |
///
/// Named attributes are `standout`, `underline`, `reverse`, `blink`, `dim`,
/// `bold`, `italic` and `invis`.
///
/// Formatted text elements are enclosed in parentheses
/// and use Rust [`std::fmt`] functions to write formatted text to the window.
/// Additionally, a bare string literal may be given and will be written
/// directly to the window.
///
/// | Element           | Equivalent                        |
/// | ----------------- | --------------------------------- |
/// | `(: expr)`        | `write!(win, "{}", expr)`         |
/// | `(? expr)`        | `write!(win, "{:?}", expr)`       |
/// | `("format", ...)` | `write!(win, "format", ...)`      |
/// | `"literal str"`   | `win.addstr("literal str")`       |
///
/// # Examples
///
/// ```no_run
/// #[macro_use] extern crate tcurses;
/// # use std::io;
/// use tcurses::{Attr, Session, SessionConfig};
///
/// # fn main() -> io::Result<()> {
/// let session = Session::new(SessionConfig::default())?;
/// let win = session.stdscr();
///
/// win_writeln!(win, [bold] "bold text" [reset]);
///
/// let value = 42;
/// win_writeln!(win, "The answer is: " [underline] (: value) [reset]);
///
/// let attr = Attr::REVERSE | Attr::color_pair(1);
/// win_writeln!(win, [attr=attr] "reversed text" [reset]).into_result("win_writeln")?;
///
/// win.refresh();
/// # Ok(())
/// # }
/// ```
///
/// [`Status`]: enum.Status.html
/// [`std::fmt`]: https://doc.rust-lang.org/std/fmt/
/// [`win_writeln!`]: macro.win_writeln.html
#[macro_export]
macro_rules! win_write {
    // Entry rule
    ( $win:expr , $first:tt $($rest:tt)* ) => {
        match &$win {
            win => {
                let init = <$crate::Status as $crate::macros::Chain>::init();
                $crate::win_write!(@_INTERNAL main: win ; init ; $first $($rest)*)
            }
        }
    };

    // Final rule
    ( @_INTERNAL main: $win:expr ; $result:expr ; ) => {
        $result
    };

    // Attribute rules
    ( @_INTERNAL main: $win:expr ; $result:expr ; [ $($tt:tt)* ] $($rest:tt)* ) => {
        $crate::win_write!(
            @_INTERNAL main: $win;
            $crate::win_write!(@_INTERNAL attr: $win; $result; $($tt)*);
            $($rest)*
        )
    };

    // Formatting rules
    ( @_INTERNAL main: $win:expr ; $result:expr ; ( $($tt:tt)* ) $($rest:tt)* ) => {
        $crate::win_write!(
            @_INTERNAL main: $win;
            $crate::win_write!(@_INTERNAL format: $win; $result; $($tt)*);
            $($rest)*
        )
    };
    ( @_INTERNAL main: $win:expr ; $result:expr ; $tt:tt $($rest:tt)* ) => {
        $crate::win_write!(
            @_INTERNAL main: $win;
            $crate::win_write!(@_INTERNAL literal: $win; $result; $tt);
            $($rest)*
        )
    };

    // Named attributes
    ( @_INTERNAL attr: $win:expr ; $result:expr ; standout ) => {
        $crate::win_write!(@_INTERNAL on: $win; $result; STANDOUT)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; underline ) => {
        $crate::win_write!(@_INTERNAL on: $win; $result; UNDERLINE)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; reverse ) => {
        $crate::win_write!(@_INTERNAL on: $win; $result; REVERSE)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; blink ) => {
        $crate::win_write!(@_INTERNAL on: $win; $result; BLINK)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; dim ) => {
        $crate::win_write!(@_INTERNAL on: $win; $result; DIM)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; bold ) => {
        $crate::win_write!(@_INTERNAL on: $win; $result; BOLD)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; italic ) => {
        $crate::win_write!(@_INTERNAL on: $win; $result; ITALIC)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; invis ) => {
        $crate::win_write!(@_INTERNAL on: $win; $result; INVIS)
    };

    ( @_INTERNAL attr: $win:expr ; $result:expr ; ! standout ) => {
        $crate::win_write!(@_INTERNAL off: $win; $result; STANDOUT)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; ! underline ) => {
        $crate::win_write!(@_INTERNAL off: $win; $result; UNDERLINE)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; ! reverse ) => {
        $crate::win_write!(@_INTERNAL off: $win; $result; REVERSE)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; ! blink ) => {
        $crate::win_write!(@_INTERNAL off: $win; $result; BLINK)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; ! dim ) => {
        $crate::win_write!(@_INTERNAL off: $win; $result; DIM)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; ! bold ) => {
        $crate::win_write!(@_INTERNAL off: $win; $result; BOLD)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; ! italic ) => {
        $crate::win_write!(@_INTERNAL off: $win; $result; ITALIC)
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; ! invis ) => {
        $crate::win_write!(@_INTERNAL off: $win; $result; INVIS)
    };

    ( @_INTERNAL on: $win:expr ; $result:expr ; $flag:ident ) => {
        $crate::macros::Chain::chain(
            $result, || $win.attron($crate::Attr::$flag))
    };
    ( @_INTERNAL off: $win:expr ; $result:expr ; $flag:ident ) => {
        $crate::macros::Chain::chain(
            $result, || $win.attroff($crate::Attr::$flag))
    };

    // Clear attributes
    ( @_INTERNAL attr: $win:expr ; $result:expr ; reset ) => {
        $crate::macros::Chain::chain(
            $result, || $win.attrset($crate::Attr::NORMAL))
    };

    // Attribute expressions
    ( @_INTERNAL attr: $win:expr ; $result:expr ; pair = $e:expr ) => {
        $crate::macros::Chain::chain(
            $result, || $win.color_set($e))
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; attr = $e:expr ) => {
        $crate::macros::Chain::chain(
            $result, || $win.attrset($e))
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; attr += $e:expr ) => {
        $crate::macros::Chain::chain(
            $result, || $win.attron($e))
    };
    ( @_INTERNAL attr: $win:expr ; $result:expr ; attr -= $e:expr ) => {
        $crate::macros::Chain::chain(
            $result, || $win.attroff($e))
    };

    // std::fmt formatting
    ( @_INTERNAL format: $win:expr ; $result:expr ; : $e:expr ) => {
        $crate::macros::Chain::chain(
            $result, || write!($win, "{}", $e))
    };
    ( @_INTERNAL format: $win:expr ; $result:expr ; ? $e:expr ) => {
        $crate::macros::Chain::chain(
            $result, || write!($win, "{:?}", $e))
    };
    ( @_INTERNAL format: $win:expr ; $result:expr ; $($tt:tt)* ) => {
        $crate::macros::Chain::chain(
            $result, || write!($win, $($tt)*))
    };

    // Literal formatting
    ( @_INTERNAL literal: $win:expr ; $result:expr ; $lit:tt ) => {
        $crate::macros::Chain::chain(
            $result, || $win.addstr(concat!($lit)))
    };
}

/// Writes attributes and formatted text to a `Window`.
///
/// Formatted output is followed by a newline.
///
/// See [`win_write`] for a description of macro syntax and example usage.
///
/// [`win_write`]: macro.win_write.html
#[macro_export]
macro_rules! win_writeln {
    ( $win:expr ) => {
        $crate::win_write!($win, "\n")
    };
    ( $win:expr , $($tt:tt)* ) => {
        $crate::win_write!($win, $($tt)* "\n")
    };
}

// Stops a chain of window operations at the first failure.
#[doc(hidden)]
pub trait Chain: Sized {
    fn chain<F: FnOnce() -> Self>(self, f: F) -> Self;

    fn init() -> Self;
}

impl Chain for Status {
    fn chain<F: FnOnce() -> Self>(self, f: F) -> Self {
        match self {
            Status::Ok => f(),
            Status::Err => Status::Err,
        }
    }

    fn init() -> Self { Status::Ok }
}
