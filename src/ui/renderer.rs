//! Single-panel render: header, chat, input bar, status.

use ratatui::Frame;

use crate::app::App;
use crate::ui::layout;
use crate::ui::theme::{palette, SPINNER};
use crate::ui::widgets::{render_chat, render_header, render_input, render_status};

pub fn render(f: &mut Frame, app: &App, tick: usize) {
    let area = f.area();
    let regions = layout::compute(area);
    let p = palette(app.state.theme);

    let spinner_char = SPINNER[tick % SPINNER.len()];

    render_header(f, app.base_url(), regions.header, p);
    render_chat(
        f,
        &app.state.chat,
        app.state.loading(),
        regions.chat,
        p,
        spinner_char,
        tick,
    );
    render_input(
        f,
        app.state.input_buffer(),
        app.state.input_cursor(),
        regions.input,
        p,
    );
    render_status(
        f,
        regions.status,
        app.state.loading(),
        spinner_char,
        app.state.theme,
        p,
    );
}
