use std::fmt;

/// What the footer reports about the login session.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum Status {
    #[default]
    Ready,
    Editing(&'static str),
    Toggled(&'static str),
    /// Submit was blocked; holds the fields that still have errors.
    Missing(Vec<String>),
    LoggedIn,
}

impl fmt::Display for Status {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Status::Ready => f.write_str("Ready. Press Enter to log in."),
            Status::Editing(label) => write!(f, "Editing {label}"),
            Status::Toggled(label) => write!(f, "{label} updated"),
            Status::Missing(fields) => {
                write!(f, "Cannot log in yet, check: {}", fields.join(", "))
            }
            Status::LoggedIn => f.write_str("Logged in"),
        }
    }
}
