use std::{convert::Infallible, fmt, str::FromStr};

use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::actions::{FormAction, InputTarget};

/// HTML-style input type of a bound field.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(from = "String", into = "String")]
pub enum InputType {
    #[default]
    Text,
    Email,
    Password,
    Checkbox,
    Radio,
    Other(String),
}

impl InputType {
    pub fn as_str(&self) -> &str {
        match self {
            InputType::Text => "text",
            InputType::Email => "email",
            InputType::Password => "password",
            InputType::Checkbox => "checkbox",
            InputType::Radio => "radio",
            InputType::Other(other) => other,
        }
    }

    pub fn is_checkbox(&self) -> bool {
        matches!(self, InputType::Checkbox)
    }
}

impl FromStr for InputType {
    type Err = Infallible;

    fn from_str(raw: &str) -> Result<Self, Self::Err> {
        Ok(match raw {
            "text" => InputType::Text,
            "email" => InputType::Email,
            "password" => InputType::Password,
            "checkbox" => InputType::Checkbox,
            "radio" => InputType::Radio,
            other => InputType::Other(other.to_string()),
        })
    }
}

impl From<String> for InputType {
    fn from(raw: String) -> Self {
        match raw.parse() {
            Ok(kind) => kind,
            Err(never) => match never {},
        }
    }
}

impl From<InputType> for String {
    fn from(kind: InputType) -> Self {
        kind.as_str().to_string()
    }
}

impl fmt::Display for InputType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct BindingOptions {
    pub input_type: InputType,
    /// The radio's own value. Ignored for other input types.
    pub value: Option<String>,
}

impl BindingOptions {
    pub fn new(input_type: InputType) -> Self {
        Self {
            input_type,
            value: None,
        }
    }

    pub fn text() -> Self {
        Self::new(InputType::Text)
    }

    pub fn email() -> Self {
        Self::new(InputType::Email)
    }

    pub fn password() -> Self {
        Self::new(InputType::Password)
    }

    pub fn checkbox() -> Self {
        Self::new(InputType::Checkbox)
    }

    pub fn radio(value: impl Into<String>) -> Self {
        Self {
            input_type: InputType::Radio,
            value: Some(value.into()),
        }
    }
}

/// Property set for one input element, built by
/// [`FormController::field_props`](super::FormController::field_props).
///
/// `value` is the stored value for text-like inputs and the radio's own value
/// for radios; checkboxes carry only `checked`.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct FieldProps {
    pub name: String,
    #[serde(rename = "type")]
    pub input_type: InputType,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub value: Option<Value>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub checked: Option<bool>,
}

impl FieldProps {
    pub fn is_checked(&self) -> bool {
        self.checked.unwrap_or(false)
    }

    /// Change action carrying a new raw value for this input.
    pub fn change(&self, value: impl Into<Value>) -> FormAction {
        FormAction::Change {
            target: InputTarget {
                name: self.name.clone(),
                input_type: self.input_type.clone(),
                value: value.into(),
                checked: false,
            },
        }
    }

    /// Change action for a checkbox or radio switching to `checked`.
    pub fn set_checked(&self, checked: bool) -> FormAction {
        let value = self
            .value
            .clone()
            .unwrap_or_else(|| Value::String("on".to_string()));
        FormAction::Change {
            target: InputTarget {
                name: self.name.clone(),
                input_type: self.input_type.clone(),
                value,
                checked,
            },
        }
    }

    /// Change action a click produces: a checkbox flips, a radio selects itself.
    pub fn toggle(&self) -> FormAction {
        match self.input_type {
            InputType::Radio => self.set_checked(true),
            _ => self.set_checked(!self.is_checked()),
        }
    }

    pub fn blur(&self) -> FormAction {
        FormAction::Blur {
            name: self.name.clone(),
        }
    }
}
