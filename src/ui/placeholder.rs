use crate::app::state::AppState;
use crate::ui::icons;
use crate::ui::theme::Theme;
use ratatui::layout::{Alignment, Rect};
use ratatui::text::Line;
use ratatui::widgets::Paragraph;
use ratatui::Frame;

/// Placeholder screen for every tab except Home: the tab's icon and key,
/// centered.
pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    if area.is_empty() {
        return;
    }
    let lines = vec![
        Line::styled(icons::glyph(state.active_tab.icon()), Theme::tab_inactive()),
        Line::default(),
        Line::styled(state.active_tab.key(), Theme::screen_title()),
    ];
    let height = (lines.len() as u16).min(area.height);
    let top = area.y + (area.height - height) / 2;
    let centered = Rect::new(area.x, top, area.width, height);
    let paragraph = Paragraph::new(lines).alignment(Alignment::Center);
    frame.render_widget(paragraph, centered);
}
