use ratatui::style::Color;

pub const GLOBAL_BORDER: Color = Color::Rgb(0x40, 0x40, 0x40);
pub const HEADER_TEXT: Color = Color::Rgb(0xe5, 0xe5, 0xe5);
pub const HEADER_SEPARATOR: Color = Color::Rgb(0x6b, 0x72, 0x80);
pub const ACTIVE_HIGHLIGHT: Color = Color::Rgb(0x26, 0x26, 0x26);

pub const PRIMARY: Color = Color::Rgb(0xff, 0xde, 0x00);
pub const STATUS_OK: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const STATUS_ERROR: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const STATUS_WARN: Color = Color::Rgb(0xca, 0x8a, 0x04);

// Sorting bars
pub const BAR_IDLE: Color = PRIMARY;
pub const BAR_COMPARING: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const BAR_MERGING: Color = Color::Rgb(0x8b, 0x5c, 0xf6);
pub const BAR_MIN: Color = Color::Rgb(0x10, 0xb9, 0x81);

// Garage slots
pub const SLOT_ONLY: Color = Color::Rgb(0xef, 0x44, 0x44);
pub const SLOT_FRONT: Color = Color::Rgb(0x22, 0xc5, 0x5e);
pub const SLOT_REAR: Color = Color::Rgb(0x3b, 0x82, 0xf6);
pub const SLOT_MATCH: Color = Color::Rgb(0xea, 0xb3, 0x08);
