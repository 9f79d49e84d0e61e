//! Closed color palettes with a total cyclic successor function.
//!
//! Every palette is a fixed enumeration with a declared table order. The
//! successor of the last member wraps back to the first, so `next` is total
//! and applying it `ALL.len()` times is the identity.

use macroquad::color::{Color, colors};

/// A closed, ordered set of named colors.
pub trait Palette: Copy + PartialEq + Sized + 'static {
    /// Every member of the palette, in table order.
    const ALL: &'static [Self];

    /// The drawable color for this member.
    fn shade(self) -> Color;

    /// The next member in table order, wrapping at the end.
    fn next(self) -> Self {
        let position = Self::ALL
            .iter()
            .position(|member| *member == self)
            .unwrap_or(Self::ALL.len() - 1);
        Self::ALL[(position + 1) % Self::ALL.len()]
    }
}

/// The 16-color painting palette, rainbow order with shades and mixes.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SquareColor {
    /// First palette entry; successor of black.
    Pink,
    Red,
    DarkRed,
    Orange,
    Yellow,
    LightGreen,
    Green,
    DarkGreen,
    Cyan,
    Blue,
    DarkBlue,
    Purple,
    Brown,
    White,
    Gray,
    /// Last palette entry; wraps back to pink.
    Black,
}

impl Palette for SquareColor {
    const ALL: &'static [Self] = &[
        Self::Pink,
        Self::Red,
        Self::DarkRed,
        Self::Orange,
        Self::Yellow,
        Self::LightGreen,
        Self::Green,
        Self::DarkGreen,
        Self::Cyan,
        Self::Blue,
        Self::DarkBlue,
        Self::Purple,
        Self::Brown,
        Self::White,
        Self::Gray,
        Self::Black,
    ];

    fn shade(self) -> Color {
        match self {
            Self::Pink => colors::PINK,
            Self::Red => colors::RED,
            Self::DarkRed => colors::MAROON,
            Self::Orange => colors::ORANGE,
            Self::Yellow => colors::YELLOW,
            Self::LightGreen => colors::LIME,
            Self::Green => colors::GREEN,
            Self::DarkGreen => colors::DARKGREEN,
            Self::Cyan => Color::new(0.0, 1.0, 1.0, 1.0),
            Self::Blue => colors::BLUE,
            Self::DarkBlue => colors::DARKBLUE,
            Self::Purple => colors::PURPLE,
            Self::Brown => colors::BROWN,
            Self::White => colors::WHITE,
            Self::Gray => colors::GRAY,
            Self::Black => colors::BLACK,
        }
    }
}

/// The 3-color flashing palette: red, blue, green.
#[allow(missing_docs)]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CircleColor {
    Red,
    Blue,
    Green,
}

impl Palette for CircleColor {
    const ALL: &'static [Self] = &[Self::Red, Self::Blue, Self::Green];

    fn shade(self) -> Color {
        match self {
            Self::Red => colors::RED,
            Self::Blue => colors::BLUE,
            Self::Green => colors::GREEN,
        }
    }
}
