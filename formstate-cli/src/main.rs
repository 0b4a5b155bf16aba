//! Command-line front end for the formstate login form.
//!
//! Without `--script` the login form opens in the terminal and the submitted
//! values are written out once the form submits. With `--script` the given
//! JSON array of form actions is replayed without a terminal and the final
//! form state is written instead.

use std::fmt::Write as FmtWrite;
use std::fs;
use std::io::{self, Read, Write};
use std::path::{Path, PathBuf};

use clap::{ArgAction, Parser};
use color_eyre::eyre::{Report, Result, WrapErr, eyre};
use serde_json::Value;
use tracing::debug;
use tracing_subscriber::EnvFilter;

use formstate::{
    LoginForm, LoginMessages, LoginValues, UiOptions, Values, login, parse_script, run_script,
};

#[derive(Debug, Parser)]
#[command(
    name = "formstate",
    version,
    about = "Run the sample login form or replay scripted form events"
)]
struct Cli {
    /// Title shown on the form block
    #[arg(long = "title", value_name = "TEXT")]
    title: Option<String>,

    /// Initial values: file path, inline JSON object, or "-" for stdin
    #[arg(short = 'i', long = "initial", value_name = "SOURCE")]
    initial: Option<String>,

    /// Replay a JSON array of form actions instead of opening the terminal UI:
    /// file path, inline payload, or "-" for stdin
    #[arg(short = 's', long = "script", value_name = "SOURCE")]
    script: Option<String>,

    /// Output destinations ("-" writes to stdout). Defaults to stdout.
    #[arg(short = 'o', long = "output", value_name = "DEST", num_args = 1.., action = ArgAction::Append)]
    outputs: Vec<String>,

    /// Overwrite output files even if they already exist
    #[arg(short = 'f', long = "force")]
    force: bool,

    /// Emit compact JSON rather than pretty formatting
    #[arg(long = "no-pretty")]
    no_pretty: bool,

    /// Hide the live values panel under the form
    #[arg(long = "no-values")]
    no_values: bool,

    /// Message shown when the email is missing
    #[arg(long = "email-message", value_name = "TEXT")]
    email_message: Option<String>,

    /// Message shown when the password is missing
    #[arg(long = "password-message", value_name = "TEXT")]
    password_message: Option<String>,

    /// Message shown when no gender is selected
    #[arg(long = "gender-message", value_name = "TEXT")]
    gender_message: Option<String>,

    /// Diagnostics filter for stderr, e.g. "debug" (overrides RUST_LOG)
    #[arg(long = "log-level", value_name = "FILTER")]
    log_level: Option<String>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
enum Destination {
    Stdout,
    File(PathBuf),
}

fn main() -> Result<()> {
    color_eyre::install()?;
    let cli = Cli::parse();
    init_tracing(cli.log_level.as_deref())?;

    let mut diagnostics = DiagnosticCollector::default();
    let both_stdin = cli.initial.as_deref() == Some("-") && cli.script.as_deref() == Some("-");
    if both_stdin {
        diagnostics.push_input(
            "initial/script",
            "cannot read initial values and script from stdin simultaneously; provide inline content or files",
        );
    }

    let initial_text = load_optional_text(
        cli.initial.as_deref(),
        "initial values",
        both_stdin,
        &mut diagnostics,
    );
    let script_text = load_optional_text(cli.script.as_deref(), "script", both_stdin, &mut diagnostics);
    let destinations = build_destinations(&cli, &mut diagnostics);
    diagnostics.into_result()?;

    let initial = resolve_initial(initial_text.as_deref())?;
    let messages = build_messages(&cli);

    let payload = match script_text {
        Some(contents) => {
            let actions = parse_script(&contents).map_err(|err| eyre!("{err:#}"))?;
            debug!(actions = actions.len(), "replaying script");
            let report = run_script(login::config(&initial, &messages), actions);
            serde_json::to_value(&report).wrap_err("failed to serialize script report")?
        }
        None => {
            let options = UiOptions::default()
                .with_messages(messages)
                .with_values_panel(!cli.no_values);
            let mut form = LoginForm::new()
                .with_initial_values(initial)
                .with_options(options);
            if let Some(title) = cli.title.as_ref() {
                form = form.with_title(title.clone());
            }
            let submitted = form.run().map_err(|err| eyre!("{err:#}"))?;
            serde_json::to_value(&submitted).wrap_err("failed to serialize submitted values")?
        }
    };

    write_outputs(&payload, &destinations, !cli.no_pretty)
}

fn init_tracing(level: Option<&str>) -> Result<()> {
    let filter = match level {
        Some(level) => {
            EnvFilter::try_new(level).wrap_err_with(|| format!("invalid log filter '{level}'"))?
        }
        None => EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn")),
    };
    tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_writer(io::stderr)
        .with_target(false)
        .init();
    Ok(())
}

fn build_messages(cli: &Cli) -> LoginMessages {
    let mut messages = LoginMessages::default();
    if let Some(message) = &cli.email_message {
        messages = messages.with_email_required(message.clone());
    }
    if let Some(message) = &cli.password_message {
        messages = messages.with_password_required(message.clone());
    }
    if let Some(message) = &cli.gender_message {
        messages = messages.with_gender_required(message.clone());
    }
    messages
}

fn resolve_initial(contents: Option<&str>) -> Result<LoginValues> {
    let Some(contents) = contents else {
        return Ok(LoginValues::default());
    };
    let value: Value =
        serde_json::from_str(contents).wrap_err("failed to parse initial values as JSON")?;
    let overrides = Values::from_json(value).wrap_err("invalid initial values")?;
    LoginValues::from_overrides(overrides).wrap_err("invalid initial values")
}

fn load_optional_text(
    source: Option<&str>,
    label: &str,
    skip: bool,
    diagnostics: &mut DiagnosticCollector,
) -> Option<String> {
    if skip {
        return None;
    }
    let raw = source?;
    match load_text(raw, label) {
        Ok(contents) => Some(contents),
        Err(err) => {
            diagnostics.push_input(label, format!("{err:#}"));
            None
        }
    }
}

/// Reads `source` as stdin ("-"), a file, or, when no such file exists, the
/// inline payload itself.
fn load_text(source: &str, label: &str) -> Result<String> {
    if source == "-" {
        let mut buffer = String::new();
        io::stdin()
            .read_to_string(&mut buffer)
            .wrap_err("failed to read from stdin")?;
        return Ok(buffer);
    }
    if looks_inline(source) {
        return Ok(source.to_string());
    }

    let path = Path::new(source);
    match fs::read_to_string(path) {
        Ok(contents) => Ok(contents),
        Err(err) if err.kind() == io::ErrorKind::NotFound => {
            debug!(label, "no such file; treating argument as inline content");
            Ok(source.to_string())
        }
        Err(err) => {
            Err(Report::new(err).wrap_err(format!("failed to load {label} from {}", path.display())))
        }
    }
}

fn looks_inline(source: &str) -> bool {
    matches!(source.trim_start().chars().next(), Some('[' | '{'))
}

fn build_destinations(cli: &Cli, diagnostics: &mut DiagnosticCollector) -> Vec<Destination> {
    let mut destinations = Vec::new();
    for raw in &cli.outputs {
        if raw.trim().is_empty() {
            diagnostics.push_output("output destination cannot be empty");
            continue;
        }
        if raw == "-" {
            destinations.push(Destination::Stdout);
        } else {
            let path = PathBuf::from(raw);
            if path.exists() && !cli.force {
                diagnostics.push_output(format!(
                    "output file {} already exists; pass --force to overwrite",
                    path.display()
                ));
                continue;
            }
            destinations.push(Destination::File(path));
        }
    }
    if destinations.is_empty() && cli.outputs.is_empty() {
        destinations.push(Destination::Stdout);
    }
    destinations
}

fn write_outputs(payload: &Value, destinations: &[Destination], pretty: bool) -> Result<()> {
    let rendered = if pretty {
        serde_json::to_string_pretty(payload)
    } else {
        serde_json::to_string(payload)
    }
    .wrap_err("failed to serialize output")?;

    for destination in destinations {
        match destination {
            Destination::Stdout => {
                let mut stdout = io::stdout().lock();
                writeln!(stdout, "{rendered}").wrap_err("failed to write to stdout")?;
            }
            Destination::File(path) => {
                fs::write(path, format!("{rendered}\n"))
                    .wrap_err_with(|| format!("failed to write {}", path.display()))?;
            }
        }
    }
    Ok(())
}

#[derive(Default)]
struct DiagnosticCollector {
    messages: Vec<String>,
}

impl DiagnosticCollector {
    fn push_input(&mut self, label: &str, message: impl Into<String>) {
        self.messages
            .push(format!("input ({label}): {}", message.into()));
    }

    fn push_output(&mut self, message: impl Into<String>) {
        self.messages.push(format!("output: {}", message.into()));
    }

    fn into_result(self) -> Result<()> {
        if self.messages.is_empty() {
            return Ok(());
        }
        let mut body = String::from("encountered input/output issues:\n");
        for (idx, msg) in self.messages.iter().enumerate() {
            let _ = writeln!(body, "  {}. {}", idx + 1, msg);
        }
        Err(eyre!(body))
    }
}
