use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::binding::InputType;

/// Events a host feeds into the form, one at a time.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "action", rename_all = "snake_case")]
pub enum FormAction {
    Change { target: InputTarget },
    Blur { name: String },
    Submit,
}

/// The element that fired a change event.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct InputTarget {
    pub name: String,
    #[serde(rename = "type", default)]
    pub input_type: InputType,
    #[serde(default = "empty_value")]
    pub value: Value,
    #[serde(default)]
    pub checked: bool,
}

impl InputTarget {
    pub fn text(name: impl Into<String>, value: impl Into<Value>) -> Self {
        Self {
            name: name.into(),
            input_type: InputType::Text,
            value: value.into(),
            checked: false,
        }
    }

    pub fn checkbox(name: impl Into<String>, checked: bool) -> Self {
        Self {
            name: name.into(),
            input_type: InputType::Checkbox,
            value: Value::String("on".to_string()),
            checked,
        }
    }

    pub fn radio(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            input_type: InputType::Radio,
            value: Value::String(value.into()),
            checked: true,
        }
    }

    /// What a change from this target stores: the checked flag for
    /// checkboxes, the raw value for everything else.
    pub fn stored_value(&self) -> Value {
        if self.input_type.is_checkbox() {
            Value::Bool(self.checked)
        } else {
            self.value.clone()
        }
    }
}

/// Submit event handed to the form; the form always cancels its default
/// action.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SubmitEvent {
    default_prevented: bool,
}

impl SubmitEvent {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn prevent_default(&mut self) {
        self.default_prevented = true;
    }

    pub fn default_prevented(&self) -> bool {
        self.default_prevented
    }
}

fn empty_value() -> Value {
    Value::String(String::new())
}
