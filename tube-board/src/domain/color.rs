//! Display palette.

/// A 24-bit RGB colour.
///
/// The board only ever draws with a handful of fixed pens, exposed as
/// associated constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Color {
    pub r: u8,
    pub g: u8,
    pub b: u8,
}

impl Color {
    pub const RED: Color = Color::rgb(217, 4, 43);
    pub const GREEN: Color = Color::rgb(15, 140, 59);
    pub const BLUE: Color = Color::rgb(0, 0, 255);
    pub const YELLOW: Color = Color::rgb(242, 193, 46);
    pub const MAGENTA: Color = Color::rgb(255, 0, 255);
    /// Board title.
    pub const HEADER: Color = Color::rgb(140, 67, 3);
    /// Body text and attribution messages.
    pub const TEXT: Color = Color::rgb(217, 152, 30);

    /// Create a colour from its components.
    pub const fn rgb(r: u8, g: u8, b: u8) -> Self {
        Self { r, g, b }
    }
}
