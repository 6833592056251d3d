use crate::feed::data;
use crate::ui::layout;
use crate::ui::media;
use crate::ui::theme::Theme;
use ratatui::buffer::Buffer;
use ratatui::layout::Rect;
use ratatui::style::Style;
use ratatui::widgets::{Block, Borders, Widget};
use unicode_width::UnicodeWidthStr;

pub const STORY_WIDTH: u16 = 14;
pub const STORY_GAP: u16 = 1;

/// Horizontally scrolling strip of story cards. `offset` is the index of
/// the first visible story; cards that do not fully fit are not drawn, and
/// overflow on either side is marked with a chevron.
pub fn render(buf: &mut Buffer, area: Rect, offset: usize) {
    if area.is_empty() {
        return;
    }
    let offset = offset.min(data::STORIES.len().saturating_sub(1));
    let mid = area.y + area.height / 2;

    let mut x = area.x;
    let mut clipped = false;
    for story in data::STORIES.iter().skip(offset) {
        if x + STORY_WIDTH > area.right() {
            clipped = true;
            break;
        }
        let card = Rect::new(x, area.y, STORY_WIDTH, area.height);
        let block = Block::default()
            .borders(Borders::ALL)
            .border_type(Theme::border_type())
            .border_style(Theme::border());
        let inner = block.inner(card);
        Widget::render(block, card, buf);

        if inner.height > 1 {
            let image = Rect::new(inner.x, inner.y, inner.width, inner.height - 1);
            media::render_image(buf, image, story.image);

            let name = super::truncate(story.name, inner.width);
            let name_x = inner.x + (inner.width - name.width() as u16) / 2;
            buf.set_string(name_x, inner.bottom() - 1, &name, Theme::subtitle());
        }
        x += STORY_WIDTH + STORY_GAP;
    }

    let chevron = Style::default().fg(Theme::ACCENT_AMBER);
    if offset > 0 {
        buf.set_string(area.x, mid, "❮", chevron);
    }
    if clipped && area.width > 0 {
        buf.set_string(area.right() - 1, mid, "❯", chevron);
    }
}

/// The index of the story card containing the given point, if any.
pub fn story_at(area: Rect, offset: usize, x: u16, y: u16) -> Option<usize> {
    if !layout::contains(area, x, y) {
        return None;
    }
    let stride = STORY_WIDTH + STORY_GAP;
    let rel = x - area.x;
    let slot = rel / stride;
    let within_card = rel % stride < STORY_WIDTH;
    let fully_visible = area.x + slot * stride + STORY_WIDTH <= area.right();
    let index = slot as usize + offset;
    (within_card && fully_visible && index < data::STORIES.len()).then_some(index)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_story_at_maps_cards() {
        let area = Rect::new(0, 16, 80, 8);
        assert_eq!(story_at(area, 0, 0, 18), Some(0));
        assert_eq!(story_at(area, 0, STORY_WIDTH - 1, 18), Some(0));
        // Gap column between cards hits nothing.
        assert_eq!(story_at(area, 0, STORY_WIDTH, 18), None);
        assert_eq!(story_at(area, 0, STORY_WIDTH + STORY_GAP, 18), Some(1));
        // Offset shifts indices.
        assert_eq!(story_at(area, 2, 0, 18), Some(2));
        // Outside the strip.
        assert_eq!(story_at(area, 0, 0, 30), None);
    }

    #[test]
    fn test_story_at_past_last_card() {
        let area = Rect::new(0, 0, 200, 8);
        let past_end = 5 * (STORY_WIDTH + STORY_GAP);
        assert_eq!(story_at(area, 0, past_end, 3), None);
    }
}
