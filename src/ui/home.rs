//! The Home screen: header, composer row, stories strip, and one post card.
//!
//! The content is a pure function of the sample data. It is composed into a
//! fixed-height virtual buffer and blitted into the visible screen region at
//! the shell's vertical scroll offset, so partially scrolled sections clip
//! exactly like a scroll view.

use crate::app::state::AppState;
use crate::feed::data;
use crate::ui::theme::Theme;
use crate::ui::{composer, header, layout, post_card, stories};
use ratatui::buffer::Buffer;
use ratatui::layout::{Position, Rect};
use ratatui::Frame;

pub const HEADER_HEIGHT: u16 = 3;
pub const COMPOSER_HEIGHT: u16 = 3;
pub const SECTION_TITLE_HEIGHT: u16 = 1;
pub const STORIES_HEIGHT: u16 = 8;
pub const GAP_HEIGHT: u16 = 1;
pub const POST_HEIGHT: u16 = 13;

/// Total height of the Home content in rows; the scroll limit derives from
/// this.
pub const CONTENT_HEIGHT: u16 = HEADER_HEIGHT
    + COMPOSER_HEIGHT
    + SECTION_TITLE_HEIGHT
    + STORIES_HEIGHT
    + GAP_HEIGHT
    + POST_HEIGHT;

/// Section rects in virtual (unscrolled) coordinates.
pub struct HomeLayout {
    pub header: Rect,
    pub composer: Rect,
    pub stories_title: Rect,
    pub stories: Rect,
    pub post: Rect,
}

pub fn home_layout(width: u16) -> HomeLayout {
    let mut y = 0;
    let mut take = |height: u16| {
        let rect = Rect::new(0, y, width, height);
        y += height;
        rect
    };
    let header = take(HEADER_HEIGHT);
    let composer = take(COMPOSER_HEIGHT);
    let stories_title = take(SECTION_TITLE_HEIGHT);
    let stories = take(STORIES_HEIGHT);
    let _gap = take(GAP_HEIGHT);
    let post = take(POST_HEIGHT);
    HomeLayout {
        header,
        composer,
        stories_title,
        stories,
        post,
    }
}

/// Tap targets inside the Home screen. All of them are inert in this mock.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum HomeTarget {
    Composer,
    PhotoPicker,
    Story(usize),
    Like,
    Comment,
    Send,
}

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.is_empty() {
        return;
    }
    let virt_area = Rect::new(0, 0, area.width, CONTENT_HEIGHT);
    let mut virt = Buffer::empty(virt_area);
    let sections = home_layout(area.width);

    header::render(&mut virt, sections.header);
    composer::render(&mut virt, sections.composer);
    virt.set_string(
        sections.stories_title.x + 1,
        sections.stories_title.y,
        "Stories",
        Theme::section_title(),
    );
    stories::render(&mut virt, sections.stories, state.story_offset);
    post_card::render(&mut virt, sections.post, &data::SAMPLE_POST);

    blit(frame.buffer_mut(), area, &virt, state.home_scroll);
}

/// Copy the visible window of the virtual content into the screen region.
fn blit(dst: &mut Buffer, area: Rect, src: &Buffer, scroll: u16) {
    for row in 0..area.height {
        let src_y = row + scroll;
        if src_y >= src.area.height {
            break;
        }
        for col in 0..area.width {
            let to = dst.cell_mut(Position::new(area.x + col, area.y + row));
            let from = src.cell(Position::new(col, src_y));
            if let (Some(to), Some(from)) = (to, from) {
                *to = from.clone();
            }
        }
    }
}

/// Resolve a screen-space tap to the Home target under it, accounting for
/// the current scroll offsets.
pub fn hit_test(
    screen: Rect,
    scroll: u16,
    story_offset: usize,
    x: u16,
    y: u16,
) -> Option<HomeTarget> {
    if !layout::contains(screen, x, y) {
        return None;
    }
    let vx = x - screen.x;
    let vy = y - screen.y + scroll;
    let sections = home_layout(screen.width);

    if layout::contains(composer::photo_rect(sections.composer), vx, vy) {
        return Some(HomeTarget::PhotoPicker);
    }
    if layout::contains(composer::field_rect(sections.composer), vx, vy) {
        return Some(HomeTarget::Composer);
    }
    if let Some(index) = stories::story_at(sections.stories, story_offset, vx, vy) {
        return Some(HomeTarget::Story(index));
    }
    match post_card::action_at(sections.post, vx, vy) {
        Some(0) => Some(HomeTarget::Like),
        Some(1) => Some(HomeTarget::Comment),
        Some(_) => Some(HomeTarget::Send),
        None => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sections_stack_without_overlap() {
        let l = home_layout(80);
        assert_eq!(l.header.y, 0);
        assert_eq!(l.composer.y, l.header.bottom());
        assert_eq!(l.stories_title.y, l.composer.bottom());
        assert_eq!(l.stories.y, l.stories_title.bottom());
        assert_eq!(l.post.bottom(), CONTENT_HEIGHT);
    }

    #[test]
    fn test_hit_test_action_buttons() {
        let screen = Rect::new(0, 3, 80, 40);
        let sections = home_layout(80);
        let actions = post_card::actions_rect(sections.post);
        let y = screen.y + actions.y;
        assert_eq!(
            hit_test(screen, 0, 0, actions.x + 1, y),
            Some(HomeTarget::Like)
        );
        assert_eq!(
            hit_test(screen, 0, 0, actions.x + actions.width / 2, y),
            Some(HomeTarget::Comment)
        );
        assert_eq!(
            hit_test(screen, 0, 0, actions.right() - 1, y),
            Some(HomeTarget::Send)
        );
    }

    #[test]
    fn test_hit_test_respects_scroll() {
        let screen = Rect::new(0, 3, 80, 20);
        let sections = home_layout(80);
        let actions = post_card::actions_rect(sections.post);
        // Scrolled down so the action row lands near the top of the screen.
        let scroll = actions.y - 2;
        let y = screen.y + 2;
        assert_eq!(
            hit_test(screen, scroll, 0, actions.x + 1, y),
            Some(HomeTarget::Like)
        );
        // The same point without scroll is the stories strip region instead.
        assert_ne!(
            hit_test(screen, 0, 0, actions.x + 1, y),
            Some(HomeTarget::Like)
        );
    }

    #[test]
    fn test_hit_test_composer_and_stories() {
        let screen = Rect::new(0, 3, 80, 40);
        let sections = home_layout(80);
        let field = composer::field_rect(sections.composer);
        assert_eq!(
            hit_test(screen, 0, 0, field.x + 1, screen.y + field.y + 1),
            Some(HomeTarget::Composer)
        );
        let photo = composer::photo_rect(sections.composer);
        assert_eq!(
            hit_test(screen, 0, 0, photo.x + 1, screen.y + photo.y + 1),
            Some(HomeTarget::PhotoPicker)
        );
        let story_y = screen.y + sections.stories.y + 2;
        assert_eq!(hit_test(screen, 0, 0, 2, story_y), Some(HomeTarget::Story(0)));
        assert_eq!(
            hit_test(screen, 0, 1, 2, story_y),
            Some(HomeTarget::Story(1))
        );
    }

    #[test]
    fn test_hit_test_outside_screen() {
        let screen = Rect::new(0, 3, 80, 40);
        assert_eq!(hit_test(screen, 0, 0, 0, 0), None);
    }
}
