use crossterm::style::Color;

// Board palette
pub fn title_bg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn title_fg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn header_bg() -> Color {
    Color::AnsiValue(21)
} // Bright blue
pub fn text_fg() -> Color {
    Color::AnsiValue(231)
} // Pure white
pub fn accent_fg() -> Color {
    Color::AnsiValue(46)
} // Bright green
pub fn selected_fg() -> Color {
    Color::AnsiValue(226)
} // Bright yellow
pub fn muted_fg() -> Color {
    Color::AnsiValue(244)
} // Grey
pub fn highlight_fg() -> Color {
    Color::AnsiValue(51)
} // Bright cyan
pub fn error_fg() -> Color {
    Color::AnsiValue(196)
} // Bright red

/// 256-colour index of `color`, or `fallback` for non-indexed colours.
pub fn ansi_code(color: Color, fallback: u8) -> u8 {
    match color {
        Color::AnsiValue(val) => val,
        _ => fallback,
    }
}
