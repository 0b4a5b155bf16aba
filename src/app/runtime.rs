use anyhow::{Result, anyhow};
use crossterm::event::{self, Event, KeyEvent, KeyEventKind};
use ratatui::layout::Rect;
use serde_json::Value;
use tracing::{debug, info};

use crate::{
    form::{FormController, InputType, SubmitOutcome, Values},
    login::LoginInput,
    presentation::{self, UiContext},
};

use super::{
    input::{KeyCommand, classify},
    options::UiOptions,
    status::Status,
    terminal::with_terminal,
};

const HELP_TEXT: &str = "Tab/Shift+Tab move • Space toggle • Enter/Ctrl+S log in • Esc/Ctrl+Q quit";

pub(crate) struct App {
    form: FormController,
    inputs: Vec<LoginInput>,
    /// Index into `inputs`; `inputs.len()` is the submit button.
    focus: usize,
    title: String,
    options: UiOptions,
    status: Status,
    should_quit: bool,
    result: Option<Values>,
}

impl App {
    pub fn new(
        form: FormController,
        inputs: Vec<LoginInput>,
        title: String,
        options: UiOptions,
    ) -> Self {
        Self {
            form,
            inputs,
            focus: 0,
            title,
            options,
            status: Status::Ready,
            should_quit: false,
            result: None,
        }
    }

    pub fn run(&mut self) -> Result<Values> {
        with_terminal(|terminal| {
            while !self.should_quit {
                terminal.draw(|frame| self.draw(frame))?;
                if !event::poll(self.options.tick_rate)? {
                    continue;
                }
                match event::read()? {
                    Event::Key(key) => self.handle_key(key),
                    Event::Resize(width, height) => {
                        terminal.resize(Rect::new(0, 0, width, height))?;
                    }
                    Event::Mouse(_) => {}
                    Event::FocusGained | Event::FocusLost | Event::Paste(_) => {}
                }
            }
            Ok(())
        })?;

        self.result
            .take()
            .ok_or_else(|| anyhow!("user exited without submitting"))
    }

    fn draw(&self, frame: &mut ratatui::Frame<'_>) {
        let help = self.options.show_help.then_some(HELP_TEXT);
        let status = self.status.to_string();
        presentation::draw(
            frame,
            UiContext {
                title: &self.title,
                form: &self.form,
                inputs: &self.inputs,
                focus: self.focus,
                status_message: &status,
                help,
                show_values: self.options.show_values,
            },
        );
    }

    fn handle_key(&mut self, key: KeyEvent) {
        if key.kind != KeyEventKind::Press {
            return;
        }

        match classify(&key) {
            KeyCommand::Submit => self.on_submit(),
            KeyCommand::Quit => self.should_quit = true,
            KeyCommand::NextField => self.move_focus(1),
            KeyCommand::PrevField => self.move_focus(-1),
            KeyCommand::None => {}
            command => self.edit_focused(command),
        }
    }

    fn focused_input(&self) -> Option<&LoginInput> {
        self.inputs.get(self.focus)
    }

    /// Moves focus around the ring of inputs plus the submit button,
    /// blurring the input being left.
    fn move_focus(&mut self, delta: i32) {
        if let Some(input) = self.focused_input() {
            let name = input.name;
            self.form.handle_blur(name);
        }
        let slots = self.inputs.len() as i32 + 1;
        let next = (self.focus as i32 + delta).rem_euclid(slots);
        self.focus = next as usize;
    }

    fn edit_focused(&mut self, command: KeyCommand) {
        let Some(input) = self.focused_input() else {
            return;
        };
        let props = self.form.field_props(input.name, &input.options);
        let toggles = matches!(props.input_type, InputType::Checkbox | InputType::Radio);
        let current = props
            .value
            .as_ref()
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string();

        let action = match command {
            KeyCommand::Toggle if toggles => props.toggle(),
            KeyCommand::Toggle if !toggles => props.change(format!("{current} ")),
            KeyCommand::Insert(c) if !toggles => props.change(format!("{current}{c}")),
            KeyCommand::Backspace if !toggles => {
                let mut text = current;
                text.pop();
                props.change(text)
            }
            KeyCommand::Clear if !toggles => props.change(String::new()),
            _ => return,
        };

        let label = input.label;
        self.form.dispatch(action);
        self.status = if toggles {
            Status::Toggled(label)
        } else {
            Status::Editing(label)
        };
    }

    fn on_submit(&mut self) {
        match self.form.submit() {
            SubmitOutcome::Submitted => {
                info!("login form submitted");
                self.status = Status::LoggedIn;
                self.result = Some(self.form.values().clone());
                self.should_quit = true;
            }
            SubmitOutcome::Blocked { issues } => {
                debug!(issues, "login form blocked");
                let fields = self.form.errors().iter().map(|(name, _)| name.to_string());
                self.status = Status::Missing(fields.collect());
            }
        }
    }
}
