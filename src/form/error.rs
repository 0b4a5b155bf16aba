#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FormError {
    NotAnObject { found: &'static str },
    Decode { message: String },
}

impl std::fmt::Display for FormError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            FormError::NotAnObject { found } => {
                write!(f, "initial values must be a JSON object, found {found}")
            }
            FormError::Decode { message } => write!(f, "failed to decode form values: {message}"),
        }
    }
}

impl std::error::Error for FormError {}
