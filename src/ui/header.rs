use crate::ui::icons;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use unicode_width::UnicodeWidthStr;

/// Home header: wordmark on the left, three decorative action icons on the
/// right. Nothing here reacts to input.
pub fn render(buf: &mut Buffer, area: Rect) {
    if area.is_empty() {
        return;
    }
    let y = area.y + area.height / 2;

    let wordmark = Line::from(vec![
        Span::styled("ⓕ ", Theme::logo()),
        Span::styled("facebook", Theme::logo()),
    ]);
    buf.set_line(area.x + 1, y, &wordmark, area.width.saturating_sub(1));

    let action_icons = format!(
        "{}  {}  {}",
        icons::glyph("headset"),
        icons::glyph("search"),
        icons::glyph("message")
    );
    let width = action_icons.width() as u16;
    if area.width > width + 12 {
        buf.set_string(
            area.right() - width - 1,
            y,
            &action_icons,
            Theme::header_icon(),
        );
    }
}
