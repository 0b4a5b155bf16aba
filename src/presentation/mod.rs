mod fields;
mod footer;

use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use crate::{form::FormController, login::LoginInput};

pub struct UiContext<'a> {
    pub title: &'a str,
    pub form: &'a FormController,
    pub inputs: &'a [LoginInput],
    /// Index into `inputs`; `inputs.len()` is the submit button.
    pub focus: usize,
    pub status_message: &'a str,
    pub help: Option<&'a str>,
    pub show_values: bool,
}

pub fn draw(frame: &mut Frame<'_>, ctx: UiContext<'_>) {
    let body_constraints = if ctx.show_values {
        [Constraint::Min(9), Constraint::Length(8)]
    } else {
        [Constraint::Min(9), Constraint::Length(0)]
    };
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Min(17), Constraint::Length(4)])
        .split(frame.area());
    let body = Layout::default()
        .direction(Direction::Vertical)
        .constraints(body_constraints)
        .split(rows[0]);

    let lines = fields::form_lines(ctx.form, ctx.inputs, ctx.focus);
    let form_widget = Paragraph::new(lines).block(
        Block::default()
            .title(ctx.title.to_string())
            .borders(Borders::ALL),
    );
    frame.render_widget(form_widget, body[0]);

    if ctx.show_values {
        let dump = serde_json::to_string_pretty(ctx.form.values())
            .unwrap_or_else(|err| format!("<unprintable values: {err}>"));
        let values_widget = Paragraph::new(dump)
            .wrap(Wrap { trim: false })
            .block(Block::default().title("Values").borders(Borders::ALL));
        frame.render_widget(values_widget, body[1]);
    }

    footer::render_footer(frame, rows[1], &ctx);
}
