use crate::config::AppConfig;
use chrono::Local;
use ratatui::layout::Rect;
use std::fmt;
use std::str::FromStr;
use thiserror::Error;

/// The six fixed top-level navigation destinations, in tab-bar order.
///
/// Each tab carries a unique key (its display name) and an icon identifier
/// resolved by `ui::icons`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Home,
    Friends,
    Videos,
    Profile,
    Notifications,
    More,
}

impl Tab {
    pub const ALL: [Tab; 6] = [
        Tab::Home,
        Tab::Friends,
        Tab::Videos,
        Tab::Profile,
        Tab::Notifications,
        Tab::More,
    ];

    pub fn key(self) -> &'static str {
        match self {
            Tab::Home => "Home",
            Tab::Friends => "Friends",
            Tab::Videos => "Videos",
            Tab::Profile => "Profile",
            Tab::Notifications => "Notifications",
            Tab::More => "More",
        }
    }

    /// Icon identifier, resolved to a glyph by `ui::icons`.
    pub fn icon(self) -> &'static str {
        match self {
            Tab::Home => "home",
            Tab::Friends => "people",
            Tab::Videos => "play-circle",
            Tab::Profile => "person-circle",
            Tab::Notifications => "notifications",
            Tab::More => "menu",
        }
    }

    fn index(self) -> usize {
        Self::ALL.iter().position(|t| *t == self).unwrap_or(0)
    }

    pub fn next(self) -> Tab {
        Self::ALL[(self.index() + 1) % Self::ALL.len()]
    }

    pub fn prev(self) -> Tab {
        Self::ALL[(self.index() + Self::ALL.len() - 1) % Self::ALL.len()]
    }
}

impl fmt::Display for Tab {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.key())
    }
}

#[derive(Debug, Error)]
#[error("unknown tab key: {0:?}")]
pub struct ParseTabError(String);

impl FromStr for Tab {
    type Err = ParseTabError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::ALL
            .iter()
            .copied()
            .find(|t| t.key().eq_ignore_ascii_case(s))
            .ok_or_else(|| ParseTabError(s.to_string()))
    }
}

/// All mutable UI state, exclusively owned by the main event loop.
///
/// The Home screen itself is a pure rendering of the sample data; the scroll
/// offsets here are handed to it as render parameters.
pub struct AppState {
    pub config: AppConfig,
    pub active_tab: Tab,
    /// Vertical scroll of the Home content, in rows.
    pub home_scroll: u16,
    /// Index of the first visible story in the strip.
    pub story_offset: usize,
    /// Last known terminal size, kept for mouse hit-testing.
    pub viewport: Rect,
    /// Wall-clock shown in the status bar, refreshed on tick.
    pub clock: String,
    pub should_quit: bool,
    pub dirty: bool,
}

impl AppState {
    pub fn new(config: AppConfig) -> Self {
        let active_tab = match config.ui.start_tab.parse::<Tab>() {
            Ok(tab) => tab,
            Err(err) => {
                tracing::warn!(%err, "invalid start_tab in config, falling back to Home");
                Tab::Home
            }
        };
        Self {
            config,
            active_tab,
            home_scroll: 0,
            story_offset: 0,
            viewport: Rect::default(),
            clock: Local::now().format("%H:%M").to_string(),
            should_quit: false,
            dirty: true,
        }
    }

    /// Switch to `tab`. Re-selecting the active tab is a no-op; leaving Home
    /// resets its scroll positions so the next visit starts at the top.
    pub fn select_tab(&mut self, tab: Tab) {
        if self.active_tab == tab {
            return;
        }
        if self.active_tab == Tab::Home {
            self.home_scroll = 0;
            self.story_offset = 0;
        }
        tracing::debug!(from = %self.active_tab, to = %tab, "tab switch");
        self.active_tab = tab;
        self.dirty = true;
    }

    pub fn select_next_tab(&mut self) {
        self.select_tab(self.active_tab.next());
    }

    pub fn select_prev_tab(&mut self) {
        self.select_tab(self.active_tab.prev());
    }

    pub fn set_viewport(&mut self, area: Rect) {
        if self.viewport != area {
            self.viewport = area;
            self.dirty = true;
        }
    }

    pub fn update_clock(&mut self) {
        let now = Local::now().format("%H:%M").to_string();
        if now != self.clock {
            self.clock = now;
            self.dirty = true;
        }
    }
}
