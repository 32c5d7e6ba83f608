use colored::Color;

pub const PRIMARY: Color = Color::BrightGreen;
pub const ACCENT: Color = Color::BrightYellow;
pub const SEPARATOR: Color = Color::BrightBlack;
pub const TEXT_DEFAULT: Color = Color::White;

pub const IPV4_ADDR: Color = Color::BrightBlue;
pub const PORT: Color = Color::Cyan;
pub const SERVICE: Color = Color::Magenta;
pub const BANNER: Color = Color::TrueColor {
    r: 170,
    g: 170,
    b: 190,
};

pub const UP: Color = Color::Green;
pub const DOWN: Color = Color::Red;
