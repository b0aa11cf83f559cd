use ratatui::style::Color;

/// Base color palette
#[allow(dead_code)]
pub struct Palette;

#[allow(dead_code)]
impl Palette {
    pub const NIGHTFOX: Color = Color::Rgb(0x19, 0x1d, 0x24);
    pub const SLATE: Color = Color::Rgb(0x39, 0x3f, 0x4c);
}

/// Application color theme constants
#[allow(dead_code)]
pub struct Theme;

#[allow(dead_code)]
impl Theme {
    // Pane chrome
    pub const FOCUS_BORDER: Color = Color::Cyan;
    pub const UNFOCUS_BORDER: Color = Color::DarkGray;
    pub const PANE_BG: Color = Palette::NIGHTFOX;

    // DDL text
    pub const DDL_TEXT: Color = Color::White;
    pub const PLACEHOLDER: Color = Color::DarkGray;
    pub const LOADING: Color = Color::Yellow;

    // Syntax highlighting
    pub const KEYWORD: Color = Color::Cyan;
    pub const STRING_LITERAL: Color = Color::Green;
    pub const QUOTED_IDENT: Color = Color::Yellow;
    pub const NUMBER: Color = Color::Magenta;
    pub const COMMENT: Color = Color::DarkGray;
}
