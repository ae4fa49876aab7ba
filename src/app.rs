//! Global state container and action dispatch.

use std::sync::Arc;

use rand::rngs::SmallRng;
use tokio::runtime::Handle;
use tokio::sync::mpsc::{self, UnboundedReceiver, UnboundedSender};
use tracing::{error, warn};

use crate::actions::Action;
use crate::backend::{BackendClient, QueryResponse};
use crate::services;
use crate::state::{ChatEntry, PendingQuery};

/// What a settled request delivers back to the event loop: the decoded
/// body, or a transport/decode failure.
pub type QueryOutcome = Result<QueryResponse, String>;

pub struct App {
    pub state: crate::state::AppState,
    client: Arc<BackendClient>,
    handle: Handle,
    outcome_tx: UnboundedSender<QueryOutcome>,
    outcome_rx: UnboundedReceiver<QueryOutcome>,
    rng: SmallRng,
    pub should_quit: bool,
    /// For spinner animation and card stagger (incremented each tick).
    pub tick: usize,
}

impl App {
    pub fn new(client: BackendClient, handle: Handle, rng: SmallRng) -> Self {
        let (outcome_tx, outcome_rx) = mpsc::unbounded_channel();
        Self {
            state: crate::state::AppState::default(),
            client: Arc::new(client),
            handle,
            outcome_tx,
            outcome_rx,
            rng,
            should_quit: false,
            tick: 0,
        }
    }

    pub fn bootstrap(&mut self) {
        self.state.chat.push(ChatEntry::Notice(
            "Describe the role or skills you're hiring for. Enter to send, Ctrl+T theme."
                .to_string(),
        ));
    }

    pub fn base_url(&self) -> &str {
        self.client.base_url()
    }

    pub fn input_empty(&self) -> bool {
        self.state.input_buffer.is_empty()
    }

    /// Drain settled requests delivered since the last tick.
    pub fn poll_results(&mut self) {
        while let Ok(outcome) = self.outcome_rx.try_recv() {
            self.finish_request(outcome);
        }
    }

    pub fn dispatch(&mut self, action: Action) {
        match action {
            Action::Quit => self.should_quit = true,

            Action::Char(c) => {
                let pos = self.state.input_cursor.min(self.state.input_buffer.len());
                self.state.input_buffer.insert(pos, c);
                self.state.input_cursor = pos + c.len_utf8();
            }
            Action::Backspace => {
                let cursor = self.state.input_cursor.min(self.state.input_buffer.len());
                if let Some((i, _)) = self.state.input_buffer[..cursor].char_indices().next_back() {
                    self.state.input_buffer.remove(i);
                    self.state.input_cursor = i;
                }
            }
            Action::CursorLeft => {
                let cursor = self.state.input_cursor.min(self.state.input_buffer.len());
                if let Some((i, _)) = self.state.input_buffer[..cursor].char_indices().next_back() {
                    self.state.input_cursor = i;
                }
            }
            Action::CursorRight => {
                let cursor = self.state.input_cursor.min(self.state.input_buffer.len());
                if let Some(c) = self.state.input_buffer[cursor..].chars().next() {
                    self.state.input_cursor = cursor + c.len_utf8();
                }
            }
            Action::ClearInput => {
                self.state.input_buffer.clear();
                self.state.input_cursor = 0;
            }
            Action::Submit => self.submit_input(),

            Action::ThemeToggle => {
                self.state.theme = self.state.theme.toggle();
            }

            Action::ChatScrollUp => {
                self.state.chat.follow = false;
                self.state.chat.scroll = self.state.chat.scroll.saturating_sub(1);
            }
            Action::ChatScrollDown => {
                self.state.chat.scroll = self.state.chat.scroll.saturating_add(1);
            }
            Action::ChatScrollPageUp => {
                self.state.chat.follow = false;
                self.state.chat.scroll = self.state.chat.scroll.saturating_sub(10);
            }
            Action::ChatScrollPageDown => {
                self.state.chat.scroll = self.state.chat.scroll.saturating_add(10);
            }
            Action::ChatScrollTop => {
                self.state.chat.follow = false;
                self.state.chat.scroll = 0;
            }
            Action::ChatScrollBottom => {
                self.state.chat.follow = true;
            }

            Action::HistoryUp => self.history_up(),
            Action::HistoryDown => self.history_down(),
        }
    }

    fn submit_input(&mut self) {
        let query = self.state.input_buffer.trim().to_string();
        if query.is_empty() {
            return;
        }
        // One request at a time; the unsent text stays in the input.
        if self.state.pending.is_some() {
            return;
        }

        self.state.input_buffer.clear();
        self.state.input_cursor = 0;

        if self.state.history.last() != Some(&query) {
            self.state.history.push(query.clone());
        }
        self.state.history_index = self.state.history.len();

        self.state.chat.push(ChatEntry::User(query.clone()));
        self.state.pending = Some(PendingQuery {
            query: query.clone(),
        });

        let client = Arc::clone(&self.client);
        let tx = self.outcome_tx.clone();
        self.handle.spawn(async move {
            let outcome = client.query(&query).await;
            // Receiver gone means the app is shutting down.
            let _ = tx.send(outcome);
        });
    }

    fn finish_request(&mut self, outcome: QueryOutcome) {
        // The loading entry disappears before any branch is taken, on
        // every outcome.
        let pending = self.state.pending.take();

        match outcome {
            Err(e) => {
                error!(error = %e, "query request failed");
                self.state
                    .chat
                    .push(ChatEntry::Error(services::CONNECT_FAILED.to_string()));
            }
            Ok(resp) if !resp.success => {
                warn!(
                    error = resp.error.as_deref().unwrap_or("<none>"),
                    "query rejected by backend"
                );
                let text = resp
                    .error
                    .unwrap_or_else(|| services::DEFAULT_QUERY_ERROR.to_string());
                self.state.chat.push(ChatEntry::Error(text));
            }
            Ok(resp) => {
                // Prefer the server echo of the query; fall back to what
                // was submitted.
                let query = resp
                    .query
                    .or(pending.map(|p| p.query))
                    .unwrap_or_default();
                let index = services::pick_lead_in(&mut self.rng);
                self.state.chat.push(ChatEntry::Response {
                    lead_in: services::lead_in(&query, index),
                    recommendations: resp.recommendations.unwrap_or_default(),
                    born_tick: self.tick,
                });
            }
        }
    }

    fn history_up(&mut self) {
        if !self.state.history.is_empty() && self.state.history_index > 0 {
            self.state.history_index -= 1;
            self.state.input_buffer = self.state.history[self.state.history_index].clone();
            self.state.input_cursor = self.state.input_buffer.len();
        }
    }

    fn history_down(&mut self) {
        if self.state.history_index < self.state.history.len() {
            self.state.history_index += 1;
            self.state.input_buffer = if self.state.history_index >= self.state.history.len() {
                String::new()
            } else {
                self.state.history[self.state.history_index].clone()
            };
            self.state.input_cursor = self.state.input_buffer.len();
        }
    }
}
