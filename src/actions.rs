//! User and system actions.

#[derive(Clone, Debug)]
pub enum Action {
    Quit,
    Char(char),
    Backspace,
    CursorLeft,
    CursorRight,
    ClearInput,
    Submit,
    ThemeToggle,

    ChatScrollUp,
    ChatScrollDown,
    ChatScrollPageUp,
    ChatScrollPageDown,
    ChatScrollTop,
    ChatScrollBottom,

    HistoryUp,
    HistoryDown,
}
