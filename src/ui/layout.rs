use crate::app::state::Tab;
use ratatui::layout::{Constraint, Direction, Layout, Rect};

pub const TAB_BAR_HEIGHT: u16 = 3;

pub struct AppLayout {
    pub tab_bar: Rect,
    pub screen: Rect,
    pub status_bar: Rect,
}

pub fn compute_layout(area: Rect) -> AppLayout {
    // Vertical split: tab bar | screen | status bar
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(TAB_BAR_HEIGHT),
            Constraint::Min(0),
            Constraint::Length(1),
        ])
        .split(area);

    AppLayout {
        tab_bar: chunks[0],
        screen: chunks[1],
        status_bar: chunks[2],
    }
}

/// The six tab buttons, tiling the bar left to right in equal columns
/// (the last one absorbs the remainder).
pub fn tab_button_rects(tab_bar: Rect) -> [Rect; 6] {
    let count = Tab::ALL.len() as u16;
    let step = tab_bar.width / count;
    let mut rects = [Rect::default(); 6];
    for (i, rect) in rects.iter_mut().enumerate() {
        let x = tab_bar.x + step * i as u16;
        let width = if i as u16 == count - 1 {
            tab_bar.width - step * (count - 1)
        } else {
            step
        };
        *rect = Rect::new(x, tab_bar.y, width, tab_bar.height);
    }
    rects
}

/// The tab whose button contains the given point, if any.
pub fn tab_at(tab_bar: Rect, x: u16, y: u16) -> Option<Tab> {
    tab_button_rects(tab_bar)
        .iter()
        .zip(Tab::ALL)
        .find(|(rect, _)| contains(**rect, x, y))
        .map(|(_, tab)| tab)
}

pub(crate) fn contains(area: Rect, x: u16, y: u16) -> bool {
    x >= area.left() && x < area.right() && y >= area.top() && y < area.bottom()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_layout_splits_vertically() {
        let layout = compute_layout(Rect::new(0, 0, 80, 24));
        assert_eq!(layout.tab_bar.height, TAB_BAR_HEIGHT);
        assert_eq!(layout.status_bar.height, 1);
        assert_eq!(layout.screen.height, 24 - TAB_BAR_HEIGHT - 1);
        assert_eq!(layout.screen.y, TAB_BAR_HEIGHT);
    }

    #[test]
    fn test_tab_buttons_tile_the_bar() {
        let bar = Rect::new(0, 0, 80, 3);
        let rects = tab_button_rects(bar);
        let mut x = 0;
        for rect in rects {
            assert_eq!(rect.x, x);
            x += rect.width;
        }
        assert_eq!(x, bar.width);
    }

    #[test]
    fn test_tab_at_maps_every_column() {
        let bar = Rect::new(0, 0, 80, 3);
        let rects = tab_button_rects(bar);
        for (rect, tab) in rects.iter().zip(Tab::ALL) {
            assert_eq!(tab_at(bar, rect.x, 1), Some(tab));
            assert_eq!(tab_at(bar, rect.right() - 1, 1), Some(tab));
        }
        assert_eq!(tab_at(bar, 0, 3), None);
    }
}
