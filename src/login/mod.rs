//! The sample login form: four fields, three of them required.

use std::borrow::Cow;

use serde::{Deserialize, Serialize};
use tracing::info;

use crate::form::{BindingOptions, FormConfig, FormError, Validate, Values, required};

pub const EMAIL: &str = "email";
pub const PASSWORD: &str = "password";
pub const REMEMBER_ME: &str = "rememberMe";
pub const GENDER: &str = "gender";

pub const GENDER_MALE: &str = "male";
pub const GENDER_FEMALE: &str = "female";

/// Typed view of the login form's values.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LoginValues {
    pub email: String,
    pub password: String,
    pub remember_me: bool,
    pub gender: String,
}

impl LoginValues {
    /// Defaults overlaid with `overrides`; unknown keys are ignored.
    pub fn from_overrides(overrides: Values) -> Result<Self, FormError> {
        let mut values = Self::default().to_values();
        values.merge(overrides);
        values.decode()
    }

    pub fn to_values(&self) -> Values {
        Values::new()
            .with(EMAIL, self.email.clone())
            .with(PASSWORD, self.password.clone())
            .with(REMEMBER_ME, self.remember_me)
            .with(GENDER, self.gender.clone())
    }
}

/// Messages shown for missing fields.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginMessages {
    pub email_required: Cow<'static, str>,
    pub password_required: Cow<'static, str>,
    pub gender_required: Cow<'static, str>,
}

impl Default for LoginMessages {
    fn default() -> Self {
        Self {
            email_required: Cow::Borrowed("이메일을 입력해주세요."),
            password_required: Cow::Borrowed("비밀번호를 입력해주세요."),
            gender_required: Cow::Borrowed("성별을 선택해주세요."),
        }
    }
}

impl LoginMessages {
    pub fn with_email_required(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.email_required = message.into();
        self
    }

    pub fn with_password_required(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.password_required = message.into();
        self
    }

    pub fn with_gender_required(mut self, message: impl Into<Cow<'static, str>>) -> Self {
        self.gender_required = message.into();
        self
    }
}

/// One input element of the login form, in display order.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoginInput {
    pub name: &'static str,
    pub label: &'static str,
    pub options: BindingOptions,
}

pub fn inputs() -> Vec<LoginInput> {
    vec![
        LoginInput {
            name: EMAIL,
            label: "Email",
            options: BindingOptions::email(),
        },
        LoginInput {
            name: PASSWORD,
            label: "Password",
            options: BindingOptions::password(),
        },
        LoginInput {
            name: REMEMBER_ME,
            label: "Remember me",
            options: BindingOptions::checkbox(),
        },
        LoginInput {
            name: GENDER,
            label: "남자",
            options: BindingOptions::radio(GENDER_MALE),
        },
        LoginInput {
            name: GENDER,
            label: "여자",
            options: BindingOptions::radio(GENDER_FEMALE),
        },
    ]
}

pub fn validator(messages: &LoginMessages) -> impl Validate + use<> {
    required([
        (EMAIL, messages.email_required.to_string()),
        (PASSWORD, messages.password_required.to_string()),
        (GENDER, messages.gender_required.to_string()),
    ])
}

/// Form configuration for the login form, seeded from `initial`.
pub fn config(initial: &LoginValues, messages: &LoginMessages) -> FormConfig {
    FormConfig::new(initial.to_values())
        .with_validate(validator(messages))
        .with_on_submit(|values| {
            info!(values = %values.to_json(), "login submitted");
        })
}
