use crate::feed::data::Post;
use crate::ui::icons;
use crate::ui::layout;
use crate::ui::media;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::text::{Line, Span};
use ratatui::widgets::{Block, Borders, Widget};
use unicode_width::UnicodeWidthStr;

/// The three inert action buttons, left to right.
const ACTIONS: [(&str, &str); 3] = [
    ("thumbs-up-outline", "Like"),
    ("chatbubble-outline", "Comment"),
    ("send-outline", "Send"),
];

/// A single feed post: author header, full-width image, and a row of three
/// action buttons that render icon+label but do nothing when tapped.
pub fn render(buf: &mut Buffer, area: Rect, post: &Post) {
    let block = Block::default()
        .borders(Borders::ALL)
        .border_type(Theme::border_type())
        .border_style(Theme::border());
    let inner = block.inner(area);
    Widget::render(block, area, buf);
    if inner.width < 8 || inner.height < 4 {
        return;
    }

    let header = Line::from(vec![
        media::avatar_span(post.user.avatar),
        Span::raw("  "),
        Span::styled(post.user.username, Theme::username()),
    ]);
    buf.set_line(inner.x + 1, inner.y, &header, inner.width.saturating_sub(1));

    let subtitle = super::truncate(post.text, inner.width.saturating_sub(2));
    buf.set_string(inner.x + 1, inner.y + 1, &subtitle, Theme::subtitle());

    let image = Rect::new(
        inner.x,
        inner.y + 2,
        inner.width,
        inner.height.saturating_sub(3),
    );
    media::render_image(buf, image, post.image);

    let actions = actions_rect(area);
    let segment = actions.width / ACTIONS.len() as u16;
    for (i, (icon, label)) in ACTIONS.iter().enumerate() {
        let text = format!("{} {}", icons::glyph(icon), label);
        let width = text.width() as u16;
        if width < segment {
            let x = actions.x + segment * i as u16 + (segment - width) / 2;
            buf.set_string(x, actions.y, &text, Theme::action_label());
        }
    }
}

/// The action-button row inside the card border.
pub fn actions_rect(area: Rect) -> Rect {
    Rect::new(
        area.x + 1,
        area.bottom().saturating_sub(2),
        area.width.saturating_sub(2),
        1,
    )
}

/// Which action button (0 = Like, 1 = Comment, 2 = Send) contains the given
/// point, if any.
pub fn action_at(area: Rect, x: u16, y: u16) -> Option<usize> {
    let actions = actions_rect(area);
    if !layout::contains(actions, x, y) {
        return None;
    }
    let segment = actions.width / ACTIONS.len() as u16;
    if segment == 0 {
        return None;
    }
    let index = ((x - actions.x) / segment) as usize;
    Some(index.min(ACTIONS.len() - 1))
}
