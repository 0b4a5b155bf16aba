use anyhow::{Context, Result};
use tracing::debug;

use crate::{
    form::FormController,
    login::{self, LoginValues},
};

use super::{options::UiOptions, runtime::App};

const DEFAULT_TITLE: &str = "Login";

/// Interactive terminal login form.
///
/// ```no_run
/// use formstate::LoginForm;
///
/// let submitted = LoginForm::new().with_title("Sign in").run()?;
/// println!("{}", submitted.email);
/// # Ok::<(), anyhow::Error>(())
/// ```
#[derive(Debug, Default)]
pub struct LoginForm {
    initial: LoginValues,
    title: Option<String>,
    options: UiOptions,
}

impl LoginForm {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_title(mut self, title: impl Into<String>) -> Self {
        self.title = Some(title.into());
        self
    }

    pub fn with_initial_values(mut self, initial: LoginValues) -> Self {
        self.initial = initial;
        self
    }

    pub fn with_options(mut self, options: UiOptions) -> Self {
        self.options = options;
        self
    }

    /// Runs the form until it is submitted or the user quits.
    pub fn run(self) -> Result<LoginValues> {
        let LoginForm {
            initial,
            title,
            options,
        } = self;

        let form = FormController::new(login::config(&initial, &options.messages));
        let title = title.unwrap_or_else(|| DEFAULT_TITLE.to_string());
        debug!(%title, "starting login form");

        let mut app = App::new(form, login::inputs(), title, options);
        let values = app.run()?;
        values
            .decode::<LoginValues>()
            .context("submitted values do not match the login form")
    }
}
