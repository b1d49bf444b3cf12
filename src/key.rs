//! Key codes returned by window input

use libc::c_int;

use crate::sys::ffi::ERR;
use crate::util::{ctrl, is_ctrl, unctrl_lower};

const KEY_F0: c_int = 0o410;
const KEY_F_MAX: c_int = KEY_F0 + 63;

macro_rules! keys {
    ( $( $name:ident = $code:literal => $cname:literal , $doc:literal ; )* ) => {
        /// Represents a key read from a window.
        ///
        /// Byte values are reported as `Char`; special keys decoded by curses
        /// when keypad mode is enabled have their own variants.
        #[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
        pub enum Key {
            /// Single byte character, including control characters
            ///
            /// Only characters in the range `'\0' ..= '\u{ff}'` can be
            /// produced by curses.
            Char(char),
            /// Function key `n`, for `n` in `0 ..= 63`
            F(u8),
            $(
                #[doc = $doc]
                #[doc = ""]
                #[doc = concat!("Native code `", $cname, "`")]
                $name,
            )*
            /// Key code without a named variant
            Code(i32),
        }

        impl Key {
            /// Decodes a value returned by `getch`.
            ///
            /// Returns `None` if `code` is the error value, meaning no input
            /// was available.
            pub fn from_code(code: i32) -> Option<Key> {
                if code == ERR {
                    return None;
                }

                Some(match code {
                    0 ..= 0xff => Key::Char(code as u8 as char),
                    KEY_F0 ..= KEY_F_MAX => Key::F((code - KEY_F0) as u8),
                    $( $code => Key::$name, )*
                    _ => Key::Code(code),
                })
            }

            /// Returns the native key code.
            pub fn code(self) -> i32 {
                match self {
                    Key::Char(ch) => ch as i32,
                    Key::F(n) => KEY_F0 + n as i32,
                    $( Key::$name => $code, )*
                    Key::Code(code) => code,
                }
            }

            /// Returns the native name of a named key, e.g. `"KEY_UP"`.
            pub fn name(self) -> Option<&'static str> {
                match self {
                    $( Key::$name => Some($cname), )*
                    _ => None
                }
            }
        }
    }
}

keys!{
    Break = 0o401 => "KEY_BREAK", "Break key";
    Down = 0o402 => "KEY_DOWN", "Down arrow";
    Up = 0o403 => "KEY_UP", "Up arrow";
    Left = 0o404 => "KEY_LEFT", "Left arrow";
    Right = 0o405 => "KEY_RIGHT", "Right arrow";
    Home = 0o406 => "KEY_HOME", "Home";
    Backspace = 0o407 => "KEY_BACKSPACE", "Backspace";
    Dl = 0o510 => "KEY_DL", "Delete line";
    Il = 0o511 => "KEY_IL", "Insert line";
    Dc = 0o512 => "KEY_DC", "Delete character";
    Ic = 0o513 => "KEY_IC", "Insert character or enter insert mode";
    Eic = 0o514 => "KEY_EIC", "Exit insert mode";
    Clear = 0o515 => "KEY_CLEAR", "Clear screen";
    Eos = 0o516 => "KEY_EOS", "Clear to end of screen";
    Eol = 0o517 => "KEY_EOL", "Clear to end of line";
    Sf = 0o520 => "KEY_SF", "Scroll one line forward";
    Sr = 0o521 => "KEY_SR", "Scroll one line backward";
    Npage = 0o522 => "KEY_NPAGE", "Next page";
    Ppage = 0o523 => "KEY_PPAGE", "Previous page";
    Stab = 0o524 => "KEY_STAB", "Set tab";
    Ctab = 0o525 => "KEY_CTAB", "Clear tab";
    Catab = 0o526 => "KEY_CATAB", "Clear all tabs";
    Enter = 0o527 => "KEY_ENTER", "Enter or send";
    Sreset = 0o530 => "KEY_SRESET", "Soft reset";
    Reset = 0o531 => "KEY_RESET", "Hard reset";
    Print = 0o532 => "KEY_PRINT", "Print";
    Ll = 0o533 => "KEY_LL", "Home down or bottom";
    A1 = 0o534 => "KEY_A1", "Upper left of keypad";
    A3 = 0o535 => "KEY_A3", "Upper right of keypad";
    B2 = 0o536 => "KEY_B2", "Center of keypad";
    C1 = 0o537 => "KEY_C1", "Lower left of keypad";
    C3 = 0o540 => "KEY_C3", "Lower right of keypad";
    Btab = 0o541 => "KEY_BTAB", "Back tab";
    Beg = 0o542 => "KEY_BEG", "Beginning";
    Cancel = 0o543 => "KEY_CANCEL", "Cancel";
    Close = 0o544 => "KEY_CLOSE", "Close";
    Command = 0o545 => "KEY_COMMAND", "Command";
    Copy = 0o546 => "KEY_COPY", "Copy";
    Create = 0o547 => "KEY_CREATE", "Create";
    End = 0o550 => "KEY_END", "End";
    Exit = 0o551 => "KEY_EXIT", "Exit";
    Find = 0o552 => "KEY_FIND", "Find";
    Help = 0o553 => "KEY_HELP", "Help";
    Mark = 0o554 => "KEY_MARK", "Mark";
    Message = 0o555 => "KEY_MESSAGE", "Message";
    Move = 0o556 => "KEY_MOVE", "Move";
    Next = 0o557 => "KEY_NEXT", "Next object";
    Open = 0o560 => "KEY_OPEN", "Open";
    Options = 0o561 => "KEY_OPTIONS", "Options";
    Previous = 0o562 => "KEY_PREVIOUS", "Previous object";
    Redo = 0o563 => "KEY_REDO", "Redo";
    Reference = 0o564 => "KEY_REFERENCE", "Reference";
    Refresh = 0o565 => "KEY_REFRESH", "Refresh";
    Replace = 0o566 => "KEY_REPLACE", "Replace";
    Restart = 0o567 => "KEY_RESTART", "Restart";
    Resume = 0o570 => "KEY_RESUME", "Resume";
    Save = 0o571 => "KEY_SAVE", "Save";
    Sbeg = 0o572 => "KEY_SBEG", "Shifted beginning";
    Scancel = 0o573 => "KEY_SCANCEL", "Shifted cancel";
    Scommand = 0o574 => "KEY_SCOMMAND", "Shifted command";
    Scopy = 0o575 => "KEY_SCOPY", "Shifted copy";
    Screate = 0o576 => "KEY_SCREATE", "Shifted create";
    Sdc = 0o577 => "KEY_SDC", "Shifted delete character";
    Sdl = 0o600 => "KEY_SDL", "Shifted delete line";
    Select = 0o601 => "KEY_SELECT", "Select";
    Send = 0o602 => "KEY_SEND", "Shifted end";
    Seol = 0o603 => "KEY_SEOL", "Shifted clear to end of line";
    Sexit = 0o604 => "KEY_SEXIT", "Shifted exit";
    Sfind = 0o605 => "KEY_SFIND", "Shifted find";
    Shelp = 0o606 => "KEY_SHELP", "Shifted help";
    Shome = 0o607 => "KEY_SHOME", "Shifted home";
    Sic = 0o610 => "KEY_SIC", "Shifted insert character";
    Sleft = 0o611 => "KEY_SLEFT", "Shifted left arrow";
    Smessage = 0o612 => "KEY_SMESSAGE", "Shifted message";
    Smove = 0o613 => "KEY_SMOVE", "Shifted move";
    Snext = 0o614 => "KEY_SNEXT", "Shifted next";
    Soptions = 0o615 => "KEY_SOPTIONS", "Shifted options";
    Sprevious = 0o616 => "KEY_SPREVIOUS", "Shifted previous";
    Sprint = 0o617 => "KEY_SPRINT", "Shifted print";
    Sredo = 0o620 => "KEY_SREDO", "Shifted redo";
    Sreplace = 0o621 => "KEY_SREPLACE", "Shifted replace";
    Sright = 0o622 => "KEY_SRIGHT", "Shifted right arrow";
    Srsume = 0o623 => "KEY_SRSUME", "Shifted resume";
    Ssave = 0o624 => "KEY_SSAVE", "Shifted save";
    Ssuspend = 0o625 => "KEY_SSUSPEND", "Shifted suspend";
    Sundo = 0o626 => "KEY_SUNDO", "Shifted undo";
    Suspend = 0o627 => "KEY_SUSPEND", "Suspend";
    Undo = 0o630 => "KEY_UNDO", "Undo";
    Mouse = 0o631 => "KEY_MOUSE", "Mouse event available through `getmouse`";
    Resize = 0o632 => "KEY_RESIZE", "Terminal was resized";
}

impl Key {
    /// Returns the key produced by holding Ctrl while pressing `ch`.
    ///
    /// ```
    /// use tcurses::Key;
    ///
    /// assert_eq!(Key::ctrl('c'), Key::Char('\x03'));
    /// ```
    #[inline]
    pub fn ctrl(ch: char) -> Key {
        Key::Char(ctrl(ch))
    }

    /// If this is a control character, returns the lowercase letter
    /// that produces it with Ctrl held.
    pub fn unctrl(self) -> Option<char> {
        match self {
            Key::Char(ch) if is_ctrl(ch) => Some(unctrl_lower(ch)),
            _ => None
        }
    }
}

impl From<char> for Key {
    #[inline]
    fn from(ch: char) -> Key {
        Key::Char(ch)
    }
}

#[cfg(test)]
mod test {
    use super::Key;

    #[test]
    fn test_key_codes() {
        assert_eq!(Key::Break.code(), 0o401);
        assert_eq!(Key::Backspace.code(), 0o407);
        assert_eq!(Key::F(0).code(), 0o410);
        assert_eq!(Key::F(12).code(), 0o410 + 12);
        assert_eq!(Key::Dl.code(), 0o510);
        assert_eq!(Key::Enter.code(), 0o527);
        assert_eq!(Key::End.code(), 0o550);
        assert_eq!(Key::Undo.code(), 0o630);
        assert_eq!(Key::Mouse.code(), 0o631);
        assert_eq!(Key::Resize.code(), 0o632);
        assert_eq!(Key::Char('a').code(), 97);
    }

    #[test]
    fn test_key_from_code() {
        assert_eq!(Key::from_code(-1), None);
        assert_eq!(Key::from_code(b'q' as i32), Some(Key::Char('q')));
        assert_eq!(Key::from_code(0xff), Some(Key::Char('\u{ff}')));
        assert_eq!(Key::from_code(0o410 + 63), Some(Key::F(63)));
        // Codes past the last function key belong to named keys
        assert_eq!(Key::from_code(0o410 + 64), Some(Key::Dl));
        assert_eq!(Key::from_code(0o633), Some(Key::Code(0o633)));
        assert_eq!(Key::from_code(0o403), Some(Key::Up));
        assert_eq!(Key::from_code(0o777), Some(Key::Code(0o777)));

        for code in 0..0o1000 {
            if let Some(key) = Key::from_code(code) {
                assert_eq!(key.code(), code);
            }
        }
    }

    #[test]
    fn test_key_name() {
        assert_eq!(Key::Sredo.name(), Some("KEY_SREDO"));
        assert_eq!(Key::Resize.name(), Some("KEY_RESIZE"));
        assert_eq!(Key::Char('x').name(), None);
        assert_eq!(Key::F(1).name(), None);
    }

    #[test]
    fn test_key_ctrl() {
        assert_eq!(Key::ctrl('a'), Key::Char('\x01'));
        assert_eq!(Key::ctrl('a').unctrl(), Some('a'));
        assert_eq!(Key::Char('a').unctrl(), None);
        assert_eq!(Key::from('z'), Key::Char('z'));
    }
}
