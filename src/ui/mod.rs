mod composer;
mod header;
pub mod home;
pub mod icons;
pub mod layout;
pub mod media;
mod placeholder;
mod post_card;
mod status_bar;
mod stories;
mod tab_bar;
mod theme;

use crate::app::state::{AppState, Tab};
use ratatui::Frame;
use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

pub fn render(frame: &mut Frame, state: &AppState) {
    let app_layout = layout::compute_layout(frame.area());

    tab_bar::render(frame, app_layout.tab_bar, state);
    match state.active_tab {
        Tab::Home => home::render(frame, app_layout.screen, state),
        _ => placeholder::render(frame, app_layout.screen, state),
    }
    status_bar::render(frame, app_layout.status_bar, state);
}

/// Truncate to a display width, appending an ellipsis when cut.
pub(crate) fn truncate(text: &str, max_width: u16) -> String {
    let max = max_width as usize;
    if max == 0 {
        return String::new();
    }
    if text.width() <= max {
        return text.to_string();
    }
    let mut out = String::new();
    let mut width = 0;
    for c in text.chars() {
        let char_width = c.width().unwrap_or(0);
        if width + char_width > max - 1 {
            break;
        }
        out.push(c);
        width += char_width;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::app::event::AppEvent;
    use crate::app::handler;
    use crate::app::state::AppState;
    use crate::config::AppConfig;
    use crossterm::event::{
        Event as CEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
    };
    use ratatui::backend::TestBackend;
    use ratatui::layout::Rect;
    use ratatui::Terminal;

    const WIDTH: u16 = 80;
    const HEIGHT: u16 = 40;

    fn new_state() -> AppState {
        let mut state = AppState::new(AppConfig::default());
        state.set_viewport(Rect::new(0, 0, WIDTH, HEIGHT));
        state
    }

    fn draw(state: &AppState) -> String {
        let backend = TestBackend::new(WIDTH, HEIGHT);
        let mut terminal = Terminal::new(backend).unwrap();
        terminal.draw(|frame| render(frame, state)).unwrap();
        let buffer = terminal.backend().buffer();
        let mut out = String::new();
        for y in 0..buffer.area.height {
            for x in 0..buffer.area.width {
                out.push_str(buffer.cell((x, y)).unwrap().symbol());
            }
            out.push('\n');
        }
        out
    }

    fn click(state: &mut AppState, x: u16, y: u16) {
        let event = AppEvent::Terminal(CEvent::Mouse(MouseEvent {
            kind: MouseEventKind::Down(MouseButton::Left),
            column: x,
            row: y,
            modifiers: KeyModifiers::NONE,
        }));
        let actions = handler::handle_event(state, event);
        assert!(actions.is_empty());
    }

    fn tab_button_center(state: &AppState, tab: Tab) -> (u16, u16) {
        let app_layout = layout::compute_layout(state.viewport);
        let rects = layout::tab_button_rects(app_layout.tab_bar);
        let rect = rects[Tab::ALL.iter().position(|t| *t == tab).unwrap()];
        (rect.x + rect.width / 2, rect.y + 1)
    }

    #[test]
    fn test_initial_render_is_home() {
        let state = new_state();
        let screen = draw(&state);
        assert!(screen.contains("facebook"));
        assert!(screen.contains("Stories"));
        for name in ["Alex", "Nel", "Samantha", "Jhon", "Nia"] {
            assert!(screen.contains(name), "missing story {name}");
        }
        assert!(screen.contains("peter_433"));
        assert!(screen.contains("London Bridge"));
        for label in ["Like", "Comment", "Send"] {
            assert!(screen.contains(label), "missing action {label}");
        }
    }

    #[test]
    fn test_other_tabs_render_their_key_as_label() {
        let mut state = new_state();
        for tab in Tab::ALL.into_iter().filter(|t| *t != Tab::Home) {
            state.select_tab(tab);
            let screen = draw(&state);
            assert!(screen.contains(tab.key()), "missing label {}", tab.key());
            assert!(!screen.contains("Stories"));
            assert!(!screen.contains("peter_433"));
        }
    }

    #[test]
    fn test_tap_scenario_friends_and_back() {
        let mut state = new_state();
        assert_eq!(state.active_tab, Tab::Home);

        let (x, y) = tab_button_center(&state, Tab::Friends);
        click(&mut state, x, y);
        assert_eq!(state.active_tab, Tab::Friends);
        let screen = draw(&state);
        assert!(screen.contains("Friends"));
        assert!(!screen.contains("Stories"));

        let (x, y) = tab_button_center(&state, Tab::Home);
        click(&mut state, x, y);
        assert_eq!(state.active_tab, Tab::Home);
        let screen = draw(&state);
        assert!(screen.contains("Stories"));
        assert!(screen.contains("peter_433"));
        for name in ["Alex", "Nel", "Samantha", "Jhon", "Nia"] {
            assert!(screen.contains(name), "missing story {name}");
        }
    }

    #[test]
    fn test_post_action_buttons_are_inert() {
        let mut state = new_state();
        let before = draw(&state);
        let screen = layout::compute_layout(state.viewport).screen;
        let sections = home::home_layout(screen.width);
        let actions = post_card::actions_rect(sections.post);
        let y = screen.y + actions.y;
        for x in [actions.x + 1, actions.x + actions.width / 2, actions.right() - 1] {
            state.dirty = false;
            click(&mut state, x, y);
            assert_eq!(state.active_tab, Tab::Home);
            assert!(!state.dirty);
        }
        assert_eq!(draw(&state), before);
    }

    #[test]
    fn test_truncate_by_display_width() {
        assert_eq!(truncate("Samantha", 12), "Samantha");
        assert_eq!(truncate("Samantha", 5), "Sama…");
        assert_eq!(truncate("abc", 0), "");
    }
}
