use crate::app::action::Action;
use crate::app::event::AppEvent;
use crate::app::state::{AppState, Tab};
use crate::ui::{home, layout};
use crossterm::event::{
    Event as CEvent, KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind,
};
use ratatui::layout::Rect;

pub fn handle_event(state: &mut AppState, event: AppEvent) -> Vec<Action> {
    match event {
        AppEvent::Terminal(cevent) => handle_terminal(state, cevent),
        AppEvent::Tick => {
            state.update_clock();
            vec![]
        }
    }
}

fn handle_terminal(state: &mut AppState, event: CEvent) -> Vec<Action> {
    match event {
        CEvent::Key(key) => handle_key(state, key),
        CEvent::Mouse(mouse) => handle_mouse(state, mouse),
        CEvent::Resize(width, height) => {
            state.set_viewport(Rect::new(0, 0, width, height));
            clamp_home_scroll(state);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_key(state: &mut AppState, key: KeyEvent) -> Vec<Action> {
    if key.modifiers.contains(KeyModifiers::CONTROL) && key.code == KeyCode::Char('c') {
        return vec![Action::Quit];
    }

    match key.code {
        KeyCode::Char('q') | KeyCode::Esc => vec![Action::Quit],

        // Tab shortcuts: 1-6 jump, arrows cycle
        KeyCode::Char(c @ '1'..='6') => {
            let index = c as usize - '1' as usize;
            state.select_tab(Tab::ALL[index]);
            vec![]
        }
        KeyCode::Left => {
            state.select_prev_tab();
            vec![]
        }
        KeyCode::Right => {
            state.select_next_tab();
            vec![]
        }

        // Home content scrolling
        KeyCode::Up => {
            scroll_home(state, -1);
            vec![]
        }
        KeyCode::Down => {
            scroll_home(state, 1);
            vec![]
        }
        KeyCode::PageUp => {
            scroll_home(state, -10);
            vec![]
        }
        KeyCode::PageDown => {
            scroll_home(state, 10);
            vec![]
        }

        // Stories strip
        KeyCode::Char('[') => {
            scroll_stories(state, -1);
            vec![]
        }
        KeyCode::Char(']') => {
            scroll_stories(state, 1);
            vec![]
        }

        _ => vec![],
    }
}

fn handle_mouse(state: &mut AppState, mouse: MouseEvent) -> Vec<Action> {
    match mouse.kind {
        MouseEventKind::Down(MouseButton::Left) => handle_tap(state, mouse.column, mouse.row),
        MouseEventKind::ScrollUp => {
            scroll_home(state, -2);
            vec![]
        }
        MouseEventKind::ScrollDown => {
            scroll_home(state, 2);
            vec![]
        }
        _ => vec![],
    }
}

fn handle_tap(state: &mut AppState, x: u16, y: u16) -> Vec<Action> {
    let app_layout = layout::compute_layout(state.viewport);

    if let Some(tab) = layout::tab_at(app_layout.tab_bar, x, y) {
        state.select_tab(tab);
        return vec![];
    }

    if state.active_tab == Tab::Home {
        if let Some(target) = home::hit_test(
            app_layout.screen,
            state.home_scroll,
            state.story_offset,
            x,
            y,
        ) {
            // Every Home control is inert in this mock.
            tracing::debug!(?target, "tap on inert control");
        }
    }

    vec![]
}

fn scroll_home(state: &mut AppState, delta: i32) {
    if state.active_tab != Tab::Home {
        return;
    }
    let screen = layout::compute_layout(state.viewport).screen;
    let max = home::CONTENT_HEIGHT.saturating_sub(screen.height);
    let next = (i32::from(state.home_scroll) + delta).clamp(0, i32::from(max)) as u16;
    if next != state.home_scroll {
        state.home_scroll = next;
        state.dirty = true;
    }
}

fn clamp_home_scroll(state: &mut AppState) {
    let screen = layout::compute_layout(state.viewport).screen;
    let max = home::CONTENT_HEIGHT.saturating_sub(screen.height);
    if state.home_scroll > max {
        state.home_scroll = max;
        state.dirty = true;
    }
}

fn scroll_stories(state: &mut AppState, delta: i32) {
    if state.active_tab != Tab::Home {
        return;
    }
    let last = crate::feed::data::STORIES.len() - 1;
    let next = (state.story_offset as i32 + delta).clamp(0, last as i32) as usize;
    if next != state.story_offset {
        state.story_offset = next;
        state.dirty = true;
    }
}
