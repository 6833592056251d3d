use crate::app::state::{AppState, Tab};
use crate::ui::theme::Theme;
use ratatui::prelude::*;
use ratatui::widgets::Paragraph;
use unicode_width::UnicodeWidthStr;

pub fn render(frame: &mut Frame, area: Rect, state: &AppState) {
    let mut parts: Vec<Span> = Vec::new();

    parts.push(Span::styled(
        " feedview ",
        Style::default()
            .fg(Theme::ACCENT_BLUE)
            .bg(Theme::BG_ELEVATED)
            .add_modifier(Modifier::BOLD),
    ));

    parts.push(Span::styled(
        format!(" {} ", state.active_tab),
        Theme::status_bar(),
    ));

    if state.config.ui.show_key_hints {
        let hints = if state.active_tab == Tab::Home {
            " 1-6 tabs · ←/→ switch · ↑/↓ scroll · [/] stories · q quit "
        } else {
            " 1-6 tabs · ←/→ switch · q quit "
        };
        parts.push(Span::styled(
            hints,
            Style::default().fg(Theme::TEXT_MUTED).bg(Theme::BG_ELEVATED),
        ));
    }

    // Pad to fill remaining space, clock at the right edge
    let clock = format!(" {} ", state.clock);
    let used: usize = parts.iter().map(|s| s.content.width()).sum();
    let remaining = (area.width as usize).saturating_sub(used + clock.width());
    parts.push(Span::styled(" ".repeat(remaining), Theme::status_bar()));
    parts.push(Span::styled(
        clock,
        Style::default()
            .fg(Theme::ACCENT_GREEN)
            .bg(Theme::BG_ELEVATED),
    ));

    let paragraph = Paragraph::new(Line::from(parts));
    frame.render_widget(paragraph, area);
}
