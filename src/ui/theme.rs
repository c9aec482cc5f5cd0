use ratatui::style::Color;

pub const ACCENT: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const FOCUS_BORDER: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const SLIDER_FILL: Color = Color::Rgb(0x38, 0xbd, 0xf8);
pub const SLIDER_TRACK: Color = Color::Rgb(0x33, 0x33, 0x33);
pub const EDIT_TEXT: Color = Color::Rgb(0xfa, 0xcc, 0x15);
pub const CELL_CORRECT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const CELL_WRONG: Color = Color::Rgb(0xef, 0x44, 0x44);
