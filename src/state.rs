//! App state: chat log, input, theme, pending request.

use crate::backend::Recommendation;

/// UI color scheme. One value per app, owned by the controller and
/// passed into render functions; flipped by [`Theme::toggle`].
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum Theme {
    Light,
    #[default]
    Dark,
}

impl Theme {
    pub fn toggle(self) -> Self {
        match self {
            Theme::Light => Theme::Dark,
            Theme::Dark => Theme::Light,
        }
    }

    /// Label shown next to the toggle hint, reflecting the current theme.
    pub fn label(self) -> &'static str {
        match self {
            Theme::Light => "☀ Light Mode",
            Theme::Dark => "☾ Dark Mode",
        }
    }
}

/// One entry in the append-only chat log. Entries are never edited or
/// merged once pushed; only the transient loading indicator (tracked as
/// [`AppState::pending`], not as an entry) comes and goes.
#[derive(Clone, Debug)]
pub enum ChatEntry {
    User(String),
    /// Informational note from the client itself (greeting).
    Notice(String),
    /// Successful backend answer: lead-in sentence plus zero or more
    /// recommendation cards. `born_tick` drives the card stagger reveal.
    Response {
        lead_in: String,
        recommendations: Vec<Recommendation>,
        born_tick: usize,
    },
    Error(String),
}

/// In-flight query. At most one exists at a time; while it is `Some`,
/// the chat shows a loading entry after the last message and further
/// submits are ignored.
#[derive(Clone, Debug)]
pub struct PendingQuery {
    pub query: String,
}

/// Chat: entries + scroll. `follow` pins the viewport to the bottom;
/// every append re-pins it, manual scrolling detaches.
#[derive(Clone, Debug)]
pub struct ChatState {
    pub entries: Vec<ChatEntry>,
    pub scroll: usize,
    pub follow: bool,
}

impl ChatState {
    pub fn push(&mut self, entry: ChatEntry) {
        self.entries.push(entry);
        self.follow = true;
    }
}

impl Default for ChatState {
    fn default() -> Self {
        Self {
            entries: Vec::new(),
            scroll: 0,
            follow: true,
        }
    }
}

/// Global app state.
#[derive(Clone, Debug, Default)]
pub struct AppState {
    pub chat: ChatState,
    pub input_buffer: String,
    pub input_cursor: usize,
    pub history: Vec<String>,
    pub history_index: usize,
    pub theme: Theme,
    pub pending: Option<PendingQuery>,
}

impl AppState {
    pub fn input_buffer(&self) -> &str {
        self.input_buffer.as_str()
    }
    pub fn input_cursor(&self) -> usize {
        self.input_cursor
    }
    pub fn loading(&self) -> bool {
        self.pending.is_some()
    }
}
