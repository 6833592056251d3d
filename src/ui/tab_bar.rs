use crate::app::state::{AppState, Tab};
use crate::ui::icons;
use crate::ui::layout;
use crate::ui::theme::Theme;
use ratatui::layout::Rect;
use ratatui::widgets::{Block, Borders};
use ratatui::Frame;
use unicode_width::UnicodeWidthStr;

/// Top tab bar: six icon buttons over a bottom rule. The active tab differs
/// from the rest by color only.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.is_empty() {
        return;
    }
    let block = Block::default()
        .borders(Borders::BOTTOM)
        .border_style(Theme::border());
    frame.render_widget(block, area);

    let buf = frame.buffer_mut();
    for (rect, tab) in layout::tab_button_rects(area).iter().zip(Tab::ALL) {
        let style = if state.active_tab == tab {
            Theme::tab_active()
        } else {
            Theme::tab_inactive()
        };
        let glyph = icons::glyph(tab.icon());
        let width = glyph.width() as u16;
        if rect.width > width && rect.height > 1 {
            let x = rect.x + (rect.width - width) / 2;
            buf.set_string(x, rect.y + rect.height / 2, glyph, style);
        }
    }
}
