//! Display attributes and color pair encoding
//!
//! A curses attribute word shares its layout with [`Cell`]: the low byte is
//! reserved for the character code, the next byte holds a color pair index,
//! and the remaining bits are boolean display flags.
//!
//! [`Cell`]: ../cell/struct.Cell.html

pub(crate) const CHAR_MASK: u32 = 0xff;
pub(crate) const ATTR_SHIFT: u32 = 8;
pub(crate) const COLOR_MASK: u32 = 0xff << ATTR_SHIFT;

const fn attr_bit(n: u32) -> u32 {
    1 << (n + ATTR_SHIFT)
}

bitflags!{
    /// Represents a set of display attributes, optionally including a
    /// color pair.
    ///
    /// Flags combine with `|`, `&`, `^` and `-`. The color pair bits are only
    /// changed through [`color_pair`], [`remove_color`] or by combining with
    /// another value carrying a color pair.
    ///
    /// ```
    /// use tcurses::Attr;
    ///
    /// let attr = Attr::BOLD | Attr::color_pair(3);
    ///
    /// assert_eq!(attr.pair_number(), 3);
    /// assert_eq!(attr.remove_color(), Attr::BOLD);
    /// ```
    ///
    /// [`color_pair`]: #method.color_pair
    /// [`remove_color`]: #method.remove_color
    #[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
    pub struct Attr: u32 {
        /// Best highlighting mode of the terminal
        const STANDOUT   = attr_bit(8);
        /// Underline
        const UNDERLINE  = attr_bit(9);
        /// Reverse video
        const REVERSE    = attr_bit(10);
        /// Blinking
        const BLINK      = attr_bit(11);
        /// Half bright
        const DIM        = attr_bit(12);
        /// Extra bright or bold
        const BOLD       = attr_bit(13);
        /// Alternate character set
        const ALTCHARSET = attr_bit(14);
        /// Invisible
        const INVIS      = attr_bit(15);
        /// Protected
        const PROTECT    = attr_bit(16);
        /// Horizontal highlight
        const HORIZONTAL = attr_bit(17);
        /// Left highlight
        const LEFT       = attr_bit(18);
        /// Low highlight
        const LOW        = attr_bit(19);
        /// Right highlight
        const RIGHT      = attr_bit(20);
        /// Top highlight
        const TOP        = attr_bit(21);
        /// Vertical highlight
        const VERTICAL   = attr_bit(22);
        /// Italic
        const ITALIC     = attr_bit(23);

        /// Color pair bits
        const COLOR      = COLOR_MASK;
    }
}

impl Attr {
    /// No attributes and the default color pair
    pub const NORMAL: Attr = Attr::empty();

    /// Returns the attribute value selecting the given color pair.
    ///
    /// # Panics
    ///
    /// If `pair` is not in the range `0..256`.
    #[inline]
    pub fn color_pair(pair: i32) -> Attr {
        assert!(pair >= 0 && pair < 256,
            "color pair {} out of range 0..256", pair);
        Attr::from_bits_retain(((pair as u32) << ATTR_SHIFT) & COLOR_MASK)
    }

    /// Returns the color pair index selected by this value.
    #[inline]
    pub fn pair_number(self) -> i32 {
        ((self.bits() & COLOR_MASK) >> ATTR_SHIFT) as i32
    }

    /// Returns this value with the color pair bits cleared.
    #[inline]
    pub fn remove_color(self) -> Attr {
        Attr::from_bits_retain(self.bits() & !COLOR_MASK)
    }

    /// Returns only the color pair bits of this value.
    #[inline]
    pub fn color(self) -> Attr {
        Attr::from_bits_retain(self.bits() & COLOR_MASK)
    }

    /// Interprets a native attribute word, discarding any character bits.
    #[inline]
    pub fn from_native(bits: u32) -> Attr {
        Attr::from_bits_retain(bits & !CHAR_MASK)
    }
}
