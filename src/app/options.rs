use std::{borrow::Cow, time::Duration};

use crate::login::LoginMessages;

#[derive(Debug, Clone)]
pub struct UiOptions {
    pub tick_rate: Duration,
    pub show_help: bool,
    pub show_values: bool,
    pub messages: LoginMessages,
}

impl Default for UiOptions {
    fn default() -> Self {
        Self {
            tick_rate: Duration::from_millis(250),
            show_help: true,
            show_values: true,
            messages: LoginMessages::default(),
        }
    }
}

impl UiOptions {
    pub fn with_tick_rate(mut self, tick_rate: Duration) -> Self {
        self.tick_rate = tick_rate;
        self
    }

    pub fn with_help(mut self, show: bool) -> Self {
        self.show_help = show;
        self
    }

    /// Whether the live JSON dump of the values is drawn under the form.
    pub fn with_values_panel(mut self, show: bool) -> Self {
        self.show_values = show;
        self
    }

    pub fn with_messages(mut self, messages: LoginMessages) -> Self {
        self.messages = messages;
        self
    }

    pub fn with_email_required(self, message: impl Into<Cow<'static, str>>) -> Self {
        self.map_messages(|messages| messages.with_email_required(message))
    }

    pub fn with_password_required(self, message: impl Into<Cow<'static, str>>) -> Self {
        self.map_messages(|messages| messages.with_password_required(message))
    }

    pub fn with_gender_required(self, message: impl Into<Cow<'static, str>>) -> Self {
        self.map_messages(|messages| messages.with_gender_required(message))
    }

    fn map_messages(mut self, map: impl FnOnce(LoginMessages) -> LoginMessages) -> Self {
        self.messages = map(self.messages);
        self
    }
}
