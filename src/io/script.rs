use anyhow::{Context, Result};
use serde::Serialize;
use tracing::debug;

use crate::form::{Errors, FormAction, FormConfig, FormController, SubmitOutcome, Touched, Values};

/// Final state of a replayed form session.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ScriptReport {
    pub values: Values,
    pub touched: Touched,
    pub errors: Errors,
    /// Values handed to the submit callback, one entry per successful submit.
    pub submissions: Vec<Values>,
    /// Number of submits rejected by validation.
    pub blocked: usize,
}

/// Parses a JSON array of form actions.
pub fn parse_script(contents: &str) -> Result<Vec<FormAction>> {
    serde_json::from_str(contents).context("failed to parse form action script")
}

/// Replays `actions` in order against a fresh form built from `config`.
pub fn run_script(config: FormConfig, actions: impl IntoIterator<Item = FormAction>) -> ScriptReport {
    let mut form = FormController::new(config);
    let mut submissions = Vec::new();
    let mut blocked = 0;

    for (step, action) in actions.into_iter().enumerate() {
        debug!(step, ?action, "replaying action");
        match form.dispatch(action) {
            Some(SubmitOutcome::Submitted) => submissions.push(form.values().clone()),
            Some(SubmitOutcome::Blocked { .. }) => blocked += 1,
            None => {}
        }
    }

    ScriptReport {
        values: form.values().clone(),
        touched: form.touched().clone(),
        errors: form.errors().clone(),
        submissions,
        blocked,
    }
}
