//! Dashboard navigation state.
//!
//! Kept free of terminal I/O: key codes go in, an [`Action`] comes out, and the
//! caller decides whether that means redrawing, refetching or quitting.

use crossterm::event::KeyCode;

use crate::domain::Country;

/// Sidebar menu entries.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Page {
    Explanations,
    Charts,
    Sources,
}

impl Page {
    pub const ALL: [Page; 3] = [Page::Explanations, Page::Charts, Page::Sources];

    pub fn label(self) -> &'static str {
        match self {
            Page::Explanations => "Explanations",
            Page::Charts => "Charts",
            Page::Sources => "Sources",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Page::Explanations => 0,
            Page::Charts => 1,
            Page::Sources => 2,
        }
    }

    fn next(self) -> Page {
        Page::ALL[(self.index() + 1).min(Page::ALL.len() - 1)]
    }

    fn prev(self) -> Page {
        Page::ALL[self.index().saturating_sub(1)]
    }
}

/// Which pane receives arrow keys.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Menu,
    Content,
}

/// What the caller should do after a key press.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    None,
    /// Rebuild the charts for the current selection.
    Refresh,
    Quit,
}

#[derive(Debug, Clone)]
pub struct DashboardState {
    pub page: Page,
    pub focus: Focus,
    /// Index into `Country::ALL` under the selector cursor.
    pub cursor: usize,
    selected: [bool; 4],
}

impl Default for DashboardState {
    fn default() -> Self {
        let mut selected = [false; 4];
        selected[0] = true; // France
        Self {
            page: Page::Explanations,
            focus: Focus::Menu,
            cursor: 0,
            selected,
        }
    }
}

impl DashboardState {
    /// Selected countries in table order.
    pub fn selected_countries(&self) -> Vec<Country> {
        Country::ALL
            .into_iter()
            .zip(self.selected)
            .filter_map(|(c, on)| on.then_some(c))
            .collect()
    }

    pub fn is_selected(&self, country: Country) -> bool {
        Country::ALL
            .iter()
            .position(|&c| c == country)
            .is_some_and(|i| self.selected[i])
    }

    pub fn toggle(&mut self, country: Country) {
        if let Some(i) = Country::ALL.iter().position(|&c| c == country) {
            self.selected[i] = !self.selected[i];
        }
    }

    /// Switch page; landing on Charts asks for a fresh fetch.
    pub fn open(&mut self, page: Page) -> Action {
        let changed = self.page != page;
        self.page = page;
        if page != Page::Charts {
            self.focus = Focus::Menu;
        }
        if changed && page == Page::Charts { Action::Refresh } else { Action::None }
    }

    pub fn handle_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Char('q') => return Action::Quit,
            KeyCode::Char('1') => return self.open(Page::Explanations),
            KeyCode::Char('2') => return self.open(Page::Charts),
            KeyCode::Char('3') => return self.open(Page::Sources),
            KeyCode::Char('r') if self.page == Page::Charts => return Action::Refresh,
            _ => {}
        }

        match self.focus {
            Focus::Menu => self.handle_menu_key(code),
            Focus::Content => self.handle_content_key(code),
        }
    }

    fn handle_menu_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Up => self.open(self.page.prev()),
            KeyCode::Down => self.open(self.page.next()),
            KeyCode::Enter | KeyCode::Tab | KeyCode::Right => {
                if self.page == Page::Charts {
                    self.focus = Focus::Content;
                }
                Action::None
            }
            _ => Action::None,
        }
    }

    fn handle_content_key(&mut self, code: KeyCode) -> Action {
        match code {
            KeyCode::Esc | KeyCode::Tab => {
                self.focus = Focus::Menu;
                Action::None
            }
            KeyCode::Left => {
                self.cursor = self.cursor.saturating_sub(1);
                Action::None
            }
            KeyCode::Right => {
                self.cursor = (self.cursor + 1).min(Country::ALL.len() - 1);
                Action::None
            }
            KeyCode::Char(' ') | KeyCode::Enter => {
                self.toggle(Country::ALL[self.cursor]);
                Action::Refresh
            }
            _ => Action::None,
        }
    }
}
