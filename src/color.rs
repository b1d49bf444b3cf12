//! Colors and color pairs
//!
//! Colors are used in pairs of foreground and background, registered by
//! index with [`init_pair`] and selected through [`Attr::color_pair`].
//! Color support must be enabled with [`start_color`], or through
//! `SessionConfig`, before pairs are registered.
//!
//! [`init_pair`]: fn.init_pair.html
//! [`start_color`]: fn.start_color.html
//! [`Attr::color_pair`]: ../attr/struct.Attr.html#method.color_pair

use libc::c_short;

use crate::status::Status;
use crate::sys::ffi::{self, ERR};

/// Represents a terminal color.
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub enum Color {
    /// Black
    Black,
    /// Red
    Red,
    /// Green
    Green,
    /// Yellow
    Yellow,
    /// Blue
    Blue,
    /// Magenta
    Magenta,
    /// Cyan
    Cyan,
    /// White
    White,
    /// Color by index, for terminals with more than eight colors
    Index(i16),
}

impl Color {
    /// Returns the color with the given index.
    pub fn from_index(index: i16) -> Color {
        match index {
            0 => Color::Black,
            1 => Color::Red,
            2 => Color::Green,
            3 => Color::Yellow,
            4 => Color::Blue,
            5 => Color::Magenta,
            6 => Color::Cyan,
            7 => Color::White,
            n => Color::Index(n)
        }
    }

    /// Returns the index of the color.
    pub fn index(self) -> i16 {
        match self {
            Color::Black => 0,
            Color::Red => 1,
            Color::Green => 2,
            Color::Yellow => 3,
            Color::Blue => 4,
            Color::Magenta => 5,
            Color::Cyan => 6,
            Color::White => 7,
            Color::Index(n) => n,
        }
    }
}

impl From<i16> for Color {
    fn from(index: i16) -> Color {
        Color::from_index(index)
    }
}

/// Foreground and background of a color pair
#[derive(Copy, Clone, Debug, Eq, PartialEq, Hash)]
pub struct ColorPairFgBg {
    /// Foreground color
    pub fg: Color,
    /// Background color
    pub bg: Color,
}

/// Intensity of red, green and blue components, each in `0 ..= 1000`
#[derive(Copy, Clone, Debug, Default, Eq, PartialEq, Hash)]
pub struct ColorRgb {
    /// Red
    pub r: i16,
    /// Green
    pub g: i16,
    /// Blue
    pub b: i16,
}

/// Returns whether the terminal supports colors.
pub fn has_colors() -> bool {
    unsafe { ffi::has_colors() }
}

/// Returns whether color definitions can be changed with `init_color`.
pub fn can_change_color() -> bool {
    unsafe { ffi::can_change_color() }
}

/// Enables color support.
pub fn start_color() -> Status {
    Status::from(unsafe { ffi::start_color() })
}

/// Returns the number of colors supported by the terminal.
///
/// Zero until color support is enabled.
pub fn colors() -> i32 {
    unsafe { ffi::COLORS }
}

/// Returns the number of color pairs supported by the terminal.
///
/// Zero until color support is enabled.
pub fn color_pairs() -> i32 {
    unsafe { ffi::COLOR_PAIRS }
}

/// Registers the colors of a color pair.
pub fn init_pair(pair: i16, colors: ColorPairFgBg) -> Status {
    Status::from(unsafe {
        ffi::init_pair(pair, colors.fg.index(), colors.bg.index())
    })
}

/// Returns the colors registered for a color pair.
pub fn pair_content(pair: i16) -> Option<ColorPairFgBg> {
    let mut fg: c_short = 0;
    let mut bg: c_short = 0;

    if unsafe { ffi::pair_content(pair, &mut fg, &mut bg) } == ERR {
        None
    } else {
        Some(ColorPairFgBg{
            fg: Color::from_index(fg),
            bg: Color::from_index(bg),
        })
    }
}

/// Changes the definition of a color.
pub fn init_color(color: Color, rgb: ColorRgb) -> Status {
    Status::from(unsafe { ffi::init_color(color.index(), rgb.r, rgb.g, rgb.b) })
}

/// Returns the definition of a color.
pub fn color_content(color: Color) -> Option<ColorRgb> {
    let mut rgb = ColorRgb::default();

    if unsafe { ffi::color_content(color.index(),
            &mut rgb.r, &mut rgb.g, &mut rgb.b) } == ERR {
        None
    } else {
        Some(rgb)
    }
}

#[cfg(test)]
mod test {
    use super::Color;

    #[test]
    fn test_color_index() {
        let colors = [
            Color::Black, Color::Red, Color::Green, Color::Yellow,
            Color::Blue, Color::Magenta, Color::Cyan, Color::White,
        ];

        for (i, &color) in colors.iter().enumerate() {
            assert_eq!(color.index(), i as i16);
            assert_eq!(Color::from_index(i as i16), color);
        }

        assert_eq!(Color::from(8), Color::Index(8));
        assert_eq!(Color::Index(200).index(), 200);
        assert_eq!(Color::Index(3), Color::Index(3));
    }
}
