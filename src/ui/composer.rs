use crate::feed::data;
use crate::ui::icons;
use crate::ui::media;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::Line;
use ratatui::widgets::{Block, Borders, Widget};

/// Post-composer row: avatar, an inert text field, and a photo icon.
///
/// The field captures no input in this mock; it renders placeholder text
/// only. Taps on it and on the photo icon are recognized by the handler and
/// deliberately ignored.
pub fn render(buf: &mut Buffer, area: Rect) {
    if area.width < 10 || area.height < 3 {
        return;
    }
    let y = area.y + area.height / 2;

    let avatar = Line::from(media::avatar_span(data::MY_AVATAR));
    buf.set_line(area.x + 1, y, &avatar, 1);

    let field = field_rect(area);
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(field);
    Widget::render(block, field, buf);
    if !inner.is_empty() {
        buf.set_stringn(
            inner.x + 1,
            inner.y,
            data::COMPOSER_PLACEHOLDER,
            inner.width.saturating_sub(1) as usize,
            Theme::placeholder_text(),
        );
    }

    buf.set_string(
        area.right() - 3,
        y,
        icons::glyph("photo"),
        Theme::header_icon(),
    );
}

/// The bordered text-field region, used for rendering and hit-testing.
pub fn field_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 3,
        area.y,
        area.width.saturating_sub(3 + 4),
        area.height,
    )
}

/// The photo-icon tap target at the right edge of the row.
pub fn photo_rect(area: Rect) -> Rect {
    Rect::new(area.right().saturating_sub(4), area.y, 4, area.height)
}
