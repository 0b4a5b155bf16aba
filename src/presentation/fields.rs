use ratatui::{
    style::{Color, Modifier, Style},
    text::{Line, Span},
};
use serde_json::Value;

use crate::{
    form::{FormController, InputType},
    login::LoginInput,
};

const SUBMIT_LABEL: &str = "[ Login ]";

/// Lines for every input, their visible errors, and the submit button.
pub fn form_lines(form: &FormController, inputs: &[LoginInput], focus: usize) -> Vec<Line<'static>> {
    let mut lines = Vec::with_capacity(inputs.len() * 2 + 2);
    for (idx, input) in inputs.iter().enumerate() {
        lines.push(input_line(form, input, idx == focus));
        // a radio group shares one message, shown after its last option
        let last_of_field = !inputs[idx + 1..]
            .iter()
            .any(|other| other.name == input.name);
        if last_of_field {
            if let Some(message) = form.visible_error(input.name) {
                lines.push(error_line(message));
            }
        }
    }
    lines.push(Line::default());
    lines.push(submit_line(focus == inputs.len()));
    lines
}

pub fn input_line(form: &FormController, input: &LoginInput, focused: bool) -> Line<'static> {
    let props = form.field_props(input.name, &input.options);
    let marker = if focused { "» " } else { "  " };
    let label_style = if focused {
        Style::default()
            .fg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default()
    };

    let body = match props.input_type {
        InputType::Checkbox => {
            let mark = if props.is_checked() { "[x]" } else { "[ ]" };
            vec![
                Span::raw(format!("{mark} ")),
                Span::styled(input.label.to_string(), label_style),
            ]
        }
        InputType::Radio => {
            let mark = if props.is_checked() { "(•)" } else { "( )" };
            vec![
                Span::raw(format!("{mark} ")),
                Span::styled(input.label.to_string(), label_style),
            ]
        }
        ref kind => {
            let text = display_text(props.value.as_ref());
            let shown = if matches!(kind, InputType::Password) {
                "*".repeat(text.chars().count())
            } else {
                text
            };
            vec![
                Span::styled(format!("{}: ", input.label), label_style),
                Span::raw(shown),
            ]
        }
    };

    let mut spans = vec![Span::raw(marker)];
    spans.extend(body);
    Line::from(spans)
}

fn error_line(message: &str) -> Line<'static> {
    Line::from(vec![
        Span::raw("    "),
        Span::styled(message.to_string(), Style::default().fg(Color::Red)),
    ])
}

fn submit_line(focused: bool) -> Line<'static> {
    let style = if focused {
        Style::default()
            .fg(Color::Black)
            .bg(Color::Yellow)
            .add_modifier(Modifier::BOLD)
    } else {
        Style::default().add_modifier(Modifier::BOLD)
    };
    let marker = if focused { "» " } else { "  " };
    Line::from(vec![Span::raw(marker), Span::styled(SUBMIT_LABEL, style)])
}

fn display_text(value: Option<&Value>) -> String {
    match value {
        None | Some(Value::Null) => String::new(),
        Some(Value::String(text)) => text.clone(),
        Some(other) => other.to_string(),
    }
}
