//! Decorated characters

use std::fmt;
use std::ops::{BitOr, BitOrAssign, BitXor, BitXorAssign};

use crate::attr::{Attr, CHAR_MASK};
use crate::sys::ffi::chtype;

/// A single-byte character combined with display attributes and a color
/// pair, as stored in each cell of a curses window.
///
/// The layout matches the native `chtype`, so slices of `Cell` are passed
/// directly to curses.
///
/// ```
/// use tcurses::{Attr, Cell};
///
/// let cell = b'A' | Attr::BOLD | Attr::color_pair(2);
///
/// assert_eq!(cell.ch(), 'A');
/// assert_eq!(cell.attr_without_color(), Attr::BOLD);
/// assert_eq!(cell.pair_number(), 2);
/// ```
#[derive(Copy, Clone, Default, Eq, PartialEq, Hash)]
#[repr(transparent)]
pub struct Cell(u32);

const _: () = assert!(std::mem::size_of::<Cell>() == std::mem::size_of::<chtype>());

/// Unpacked representation of a [`Cell`].
///
/// [`Cell`]: struct.Cell.html
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq)]
pub struct CellParts {
    /// Character code
    pub ch: u8,
    /// Attributes, without color pair
    pub attr: Attr,
    /// Color pair index
    pub pair: i32,
}

impl Cell {
    /// Creates a cell from a character and attributes.
    ///
    /// Any color pair in `attr` is kept.
    #[inline]
    pub fn new(ch: u8, attr: Attr) -> Cell {
        Cell(u32::from(ch) | (attr.bits() & !CHAR_MASK))
    }

    /// Creates a cell from a character, attributes and a color pair.
    ///
    /// Any color pair in `attr` is replaced with `pair`.
    ///
    /// # Panics
    ///
    /// If `pair` is not in the range `0..256`.
    #[inline]
    pub fn with_pair(ch: u8, attr: Attr, pair: i32) -> Cell {
        Cell::new(ch, attr.remove_color() | Attr::color_pair(pair))
    }

    /// Wraps a native `chtype` value.
    #[inline]
    pub const fn from_raw(raw: u32) -> Cell {
        Cell(raw)
    }

    /// Returns the native `chtype` value.
    #[inline]
    pub const fn raw(self) -> u32 {
        self.0
    }

    /// Returns the character code.
    #[inline]
    pub fn byte(self) -> u8 {
        (self.0 & CHAR_MASK) as u8
    }

    /// Returns the character.
    #[inline]
    pub fn ch(self) -> char {
        self.byte() as char
    }

    /// Returns the attributes, including the color pair.
    #[inline]
    pub fn attr(self) -> Attr {
        Attr::from_native(self.0)
    }

    /// Returns the attributes without the color pair.
    #[inline]
    pub fn attr_without_color(self) -> Attr {
        self.attr().remove_color()
    }

    /// Returns only the color pair bits.
    #[inline]
    pub fn color(self) -> Attr {
        self.attr().color()
    }

    /// Returns the color pair index.
    #[inline]
    pub fn pair_number(self) -> i32 {
        self.attr().pair_number()
    }

    /// Splits the cell into its components.
    pub fn parts(self) -> CellParts {
        CellParts{
            ch: self.byte(),
            attr: self.attr_without_color(),
            pair: self.pair_number(),
        }
    }

    /// Packs components into a cell.
    ///
    /// # Panics
    ///
    /// If `parts.pair` is not in the range `0..256`.
    pub fn from_parts(parts: CellParts) -> Cell {
        Cell::with_pair(parts.ch, parts.attr, parts.pair)
    }
}

impl From<u8> for Cell {
    #[inline]
    fn from(ch: u8) -> Cell {
        Cell(u32::from(ch))
    }
}

impl From<CellParts> for Cell {
    #[inline]
    fn from(parts: CellParts) -> Cell {
        Cell::from_parts(parts)
    }
}

impl BitOr<Attr> for u8 {
    type Output = Cell;

    #[inline]
    fn bitor(self, attr: Attr) -> Cell {
        Cell::new(self, attr)
    }
}

impl BitOr<Attr> for Cell {
    type Output = Cell;

    #[inline]
    fn bitor(self, attr: Attr) -> Cell {
        Cell(self.0 | (attr.bits() & !CHAR_MASK))
    }
}

impl BitOrAssign<Attr> for Cell {
    #[inline]
    fn bitor_assign(&mut self, attr: Attr) {
        *self = *self | attr;
    }
}

impl BitXor<Attr> for Cell {
    type Output = Cell;

    #[inline]
    fn bitxor(self, attr: Attr) -> Cell {
        Cell(self.0 ^ (attr.bits() & !CHAR_MASK))
    }
}

impl BitXorAssign<Attr> for Cell {
    #[inline]
    fn bitxor_assign(&mut self, attr: Attr) {
        *self = *self ^ attr;
    }
}

impl fmt::Debug for Cell {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Cell")
            .field("ch", &self.ch())
            .field("attr", &self.attr_without_color())
            .field("pair", &self.pair_number())
            .finish()
    }
}

#[cfg(test)]
mod test {
    use crate::attr::Attr;
    use super::{Cell, CellParts};

    #[test]
    fn test_cell_pack() {
        let attrs = [
            Attr::NORMAL,
            Attr::BOLD,
            Attr::REVERSE | Attr::UNDERLINE,
            Attr::ALTCHARSET | Attr::ITALIC | Attr::VERTICAL,
        ];

        for &attr in &attrs {
            for &pair in &[0, 1, 17, 255] {
                for &ch in &[b' ', b'A', b'~', 0xff] {
                    let cell = Cell::with_pair(ch, attr, pair);

                    assert_eq!(cell.byte(), ch);
                    assert_eq!(cell.attr_without_color(), attr);
                    assert_eq!(cell.pair_number(), pair);
                    assert_eq!(cell.color(), Attr::color_pair(pair));
                }
            }
        }
    }

    #[test]
    fn test_cell_parts() {
        let parts = CellParts{ch: b'x', attr: Attr::DIM, pair: 9};
        let cell = Cell::from_parts(parts);

        assert_eq!(cell.parts(), parts);
        assert_eq!(cell.raw(), 0x0010_0978);
        assert_eq!(Cell::from_raw(cell.raw()), cell);
    }

    #[test]
    fn test_cell_ops() {
        let mut cell = b'A' | Attr::BOLD;

        assert_eq!(cell, Cell::new(b'A', Attr::BOLD));
        assert_eq!(cell.ch(), 'A');

        cell |= Attr::color_pair(4);
        assert_eq!(cell.pair_number(), 4);
        assert_eq!(cell.attr(), Attr::BOLD | Attr::color_pair(4));

        cell ^= Attr::BOLD;
        assert_eq!(cell.attr_without_color(), Attr::NORMAL);
        assert_eq!(cell.ch(), 'A');

        assert_eq!(Cell::from(b'z'), Cell::new(b'z', Attr::NORMAL));
        assert_eq!(Cell::default().raw(), 0);
    }

    #[test]
    fn test_cell_debug() {
        let cell = b'Q' | Attr::color_pair(1);

        let s = format!("{:?}", cell);

        assert!(s.starts_with("Cell { ch: 'Q', attr: "));
        assert!(s.ends_with(", pair: 1 }"));
    }
}
