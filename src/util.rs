//! Control character helpers
//!
//! Curses reads input one byte at a time; a control key arrives as the byte
//! produced by clearing the upper bits of its letter, and is printed by
//! `unctrl` in caret notation (`^C`, `^?`).

const CTRL_MASK: u8 = 0x1f;
const UNCTRL_BIT: u8 = 0x40;
const DEL: u8 = 0x7f;

/// Returns the control character corresponding to the given character.
///
/// `'?'` maps to DEL, matching caret notation.
///
/// # Examples
///
/// ```
/// # use tcurses::util::ctrl;
/// // Ctrl-C
/// assert_eq!(ctrl('c'), '\x03');
/// assert_eq!(ctrl('?'), '\x7f');
/// ```
#[inline]
pub fn ctrl(ch: char) -> char {
    match ch {
        '?' => DEL as char,
        _ => ((ch as u8) & CTRL_MASK) as char
    }
}

/// Returns whether the given character is a control character.
///
/// Control characters are `'\0'` through `'\x1f'` and DEL.
#[inline]
pub fn is_ctrl(ch: char) -> bool {
    let b = ch as u32;
    b == DEL as u32 || b & (CTRL_MASK as u32) == b
}

/// Returns the caret notation letter for the given control character.
///
/// If `ch` is not a control character, the result is unspecified.
///
/// # Examples
///
/// ```
/// # use tcurses::util::unctrl_upper;
/// assert_eq!(unctrl_upper('\x03'), 'C');
/// assert_eq!(unctrl_upper('\x7f'), '?');
/// ```
#[inline]
pub fn unctrl_upper(ch: char) -> char {
    match ch as u8 {
        DEL => '?',
        b => (b | UNCTRL_BIT) as char
    }
}

/// Returns the lowercase letter for the given control character.
///
/// If `ch` is not a control character, the result is unspecified.
#[inline]
pub fn unctrl_lower(ch: char) -> char {
    unctrl_upper(ch).to_ascii_lowercase()
}

#[cfg(test)]
mod test {
    use super::{ctrl, is_ctrl, unctrl_lower, unctrl_upper};

    #[test]
    fn test_unctrl() {
        for ch in 0u8..255 {
            let ch = ch as char;

            if is_ctrl(ch) {
                assert_eq!(ch, ctrl(unctrl_upper(ch)));

                if ch != '\x7f' {
                    assert_eq!(ch, ctrl(unctrl_lower(ch)));
                }
            }
        }
    }

    #[test]
    fn test_is_ctrl() {
        assert!(is_ctrl('\0'));
        assert!(is_ctrl('\x1b'));
        assert!(is_ctrl('\x7f'));
        assert!(!is_ctrl(' '));
        assert!(!is_ctrl('a'));
        assert!(!is_ctrl('\u{9b}'));
    }
}
