use ratatui::{
    Frame,
    layout::{Constraint, Direction, Layout, Rect},
    style::{Color, Style},
    text::{Line, Span},
    widgets::{Block, Borders, Paragraph, Wrap},
};

use super::UiContext;
use crate::form::FormController;

pub fn render_footer(frame: &mut Frame<'_>, area: Rect, ctx: &UiContext<'_>) {
    let rows = Layout::default()
        .direction(Direction::Vertical)
        .constraints([Constraint::Length(2), Constraint::Length(2)])
        .split(area);

    let actions = ctx.help.unwrap_or(" ");
    let actions_widget = Paragraph::new(format!("Actions: {actions}"))
        .wrap(Wrap { trim: true })
        .style(Style::default().fg(Color::Yellow));
    frame.render_widget(actions_widget, rows[0]);

    let status_widget = Paragraph::new(status_line(ctx.form, ctx.status_message))
        .wrap(Wrap { trim: true })
        .block(Block::default().borders(Borders::NONE));
    frame.render_widget(status_widget, rows[1]);
}

/// Status text plus a badge counting the errors the user can already see.
pub fn status_line(form: &FormController, message: &str) -> Line<'static> {
    let visible = form
        .errors()
        .iter()
        .filter(|(name, _)| form.is_touched(name))
        .count();
    let badge = if visible > 0 {
        Span::styled(
            format!("[! {visible}]"),
            Style::default().fg(Color::Red).bg(Color::Black),
        )
    } else {
        Span::styled("[ok]", Style::default().fg(Color::Green))
    };
    Line::from(vec![
        Span::raw("Status: "),
        Span::raw(message.to_string()),
        Span::raw(" "),
        badge,
    ])
}
