use std::fmt;

use serde_json::Value;
use tracing::{debug, trace};

use super::{
    actions::{FormAction, InputTarget, SubmitEvent},
    binding::{BindingOptions, FieldProps, InputType},
    touched::Touched,
    validation::{Errors, NoValidation, Validate},
    value::{Values, is_truthy},
};

type SubmitCallback = Box<dyn FnMut(&Values)>;

/// Everything a form session starts from.
pub struct FormConfig {
    pub initial_values: Values,
    validate: Box<dyn Validate>,
    on_submit: SubmitCallback,
}

impl FormConfig {
    /// A form that accepts any values and ignores successful submits.
    pub fn new(initial_values: Values) -> Self {
        Self {
            initial_values,
            validate: Box::new(NoValidation),
            on_submit: Box::new(|_: &Values| {}),
        }
    }

    pub fn with_validate(mut self, validate: impl Validate + 'static) -> Self {
        self.validate = Box::new(validate);
        self
    }

    pub fn with_on_submit(mut self, on_submit: impl FnMut(&Values) + 'static) -> Self {
        self.on_submit = Box::new(on_submit);
        self
    }

    pub fn with_initial_values(mut self, initial_values: Values) -> Self {
        self.initial_values = initial_values;
        self
    }
}

impl fmt::Debug for FormConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormConfig")
            .field("initial_values", &self.initial_values)
            .finish_non_exhaustive()
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// The submit callback ran with the current values.
    Submitted,
    /// At least one field has an error; the callback was not called.
    Blocked { issues: usize },
}

impl SubmitOutcome {
    pub fn is_submitted(&self) -> bool {
        matches!(self, SubmitOutcome::Submitted)
    }
}

/// Owns the values, touched flags and errors of one form session and wires
/// change, blur and submit events into them.
///
/// Errors are computed from the initial values on construction and
/// recomputed from the full value map after every value change, whether or
/// not the field has been touched yet. Hosts decide visibility
/// with [`visible_error`](Self::visible_error).
pub struct FormController {
    values: Values,
    touched: Touched,
    errors: Errors,
    validate: Box<dyn Validate>,
    on_submit: SubmitCallback,
}

impl FormController {
    pub fn new(config: FormConfig) -> Self {
        let FormConfig {
            initial_values,
            validate,
            on_submit,
        } = config;
        let mut form = Self {
            values: initial_values,
            touched: Touched::new(),
            errors: Errors::new(),
            validate,
            on_submit,
        };
        form.after_change();
        form
    }

    pub fn values(&self) -> &Values {
        &self.values
    }

    pub fn touched(&self) -> &Touched {
        &self.touched
    }

    pub fn errors(&self) -> &Errors {
        &self.errors
    }

    pub fn value(&self, name: &str) -> Option<&Value> {
        self.values.get(name)
    }

    pub fn error(&self, name: &str) -> Option<&str> {
        self.errors.get(name)
    }

    pub fn is_touched(&self, name: &str) -> bool {
        self.touched.is_touched(name)
    }

    /// The message a host should display for `name`: only once the field is
    /// touched and while it has an error.
    pub fn visible_error(&self, name: &str) -> Option<&str> {
        if self.is_touched(name) {
            self.error(name)
        } else {
            None
        }
    }

    pub fn has_errors(&self) -> bool {
        self.errors.has_errors()
    }

    pub fn error_count(&self) -> usize {
        self.errors.count()
    }

    /// Stores the new value of `target` and revalidates.
    pub fn handle_change(&mut self, target: &InputTarget) {
        let value = target.stored_value();
        debug!(field = %target.name, kind = %target.input_type, "field changed");
        self.values.set(target.name.clone(), value);
        self.after_change();
    }

    pub fn handle_blur(&mut self, name: &str) {
        if self.touched.touch(name) {
            debug!(field = %name, "field touched");
        }
    }

    /// Marks every field touched, revalidates, and calls the submit callback
    /// only when no field has an error.
    pub fn handle_submit(&mut self, event: &mut SubmitEvent) -> SubmitOutcome {
        event.prevent_default();

        self.touched = self.values.names().map(|name| (name, true)).collect();
        self.errors = self.validate.validate(&self.values);

        let issues = self.errors.count();
        if issues > 0 {
            debug!(issues, "submit blocked by validation errors");
            return SubmitOutcome::Blocked { issues };
        }

        debug!(fields = self.values.len(), "submitting form");
        (self.on_submit)(&self.values);
        SubmitOutcome::Submitted
    }

    /// Submits with a fresh event, for hosts without one of their own.
    pub fn submit(&mut self) -> SubmitOutcome {
        self.handle_submit(&mut SubmitEvent::new())
    }

    /// Routes one host event. Returns the outcome for submits.
    pub fn dispatch(&mut self, action: FormAction) -> Option<SubmitOutcome> {
        match action {
            FormAction::Change { target } => {
                self.handle_change(&target);
                None
            }
            FormAction::Blur { name } => {
                self.handle_blur(&name);
                None
            }
            FormAction::Submit => Some(self.submit()),
        }
    }

    /// Builds the properties to attach to the input bound to `name`.
    pub fn field_props(&self, name: &str, options: &BindingOptions) -> FieldProps {
        let stored = self.values.get(name);
        let (value, checked) = match &options.input_type {
            InputType::Checkbox => (None, Some(stored.is_some_and(is_truthy))),
            // a radio without its own value matches an absent field
            InputType::Radio => match &options.value {
                Some(own) => {
                    let checked = matches!(stored, Some(Value::String(current)) if current == own);
                    (Some(Value::String(own.clone())), Some(checked))
                }
                None => (None, Some(stored.is_none())),
            },
            _ => (stored.cloned(), None),
        };
        FieldProps {
            name: name.to_string(),
            input_type: options.input_type.clone(),
            value,
            checked,
        }
    }

    fn after_change(&mut self) {
        self.errors = self.validate.validate(&self.values);
        trace!(errors = self.errors.count(), "errors recomputed");
    }
}

impl fmt::Debug for FormController {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("FormController")
            .field("values", &self.values)
            .field("touched", &self.touched)
            .field("errors", &self.errors)
            .finish_non_exhaustive()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::form::validation::required;
    use serde_json::json;
    use std::{cell::RefCell, rc::Rc};

    fn login_values(email: &str, password: &str, remember: bool, gender: &str) -> Values {
        Values::new()
            .with("email", email)
            .with("password", password)
            .with("rememberMe", remember)
            .with("gender", gender)
    }

    fn controller(values: Values) -> (FormController, Rc<RefCell<Vec<Values>>>) {
        let calls = Rc::new(RefCell::new(Vec::new()));
        let sink = Rc::clone(&calls);
        let config = FormConfig::new(values)
            .with_validate(required([
                ("email", "email required"),
                ("password", "password required"),
                ("gender", "gender required"),
            ]))
            .with_on_submit(move |values| sink.borrow_mut().push(values.clone()));
        (FormController::new(config), calls)
    }

    #[test]
    fn starts_with_initial_values_and_validated_errors() {
        let (form, _) = controller(login_values("", "pw", false, ""));
        assert_eq!(form.values(), &login_values("", "pw", false, ""));
        assert!(form.touched().is_empty());
        assert_eq!(
            form.errors(),
            &Errors::new()
                .with("email", "email required")
                .with("gender", "gender required")
        );
        assert!(form.has_errors());
        assert_eq!(form.visible_error("email"), None);
    }

    #[test]
    fn change_recomputes_errors_before_any_touch() {
        let (mut form, _) = controller(login_values("a@b.com", "pw", false, "male"));
        assert!(!form.has_errors());
        form.handle_change(&InputTarget::text("email", ""));
        assert_eq!(form.error("email"), Some("email required"));
        assert_eq!(form.error_count(), 1);
        assert_eq!(form.visible_error("email"), None);
        form.handle_blur("email");
        assert_eq!(form.visible_error("email"), Some("email required"));
    }

    #[test]
    fn submit_prevents_default_even_when_blocked() {
        let (mut form, calls) = controller(login_values("", "x", false, ""));
        let mut event = SubmitEvent::new();
        let outcome = form.handle_submit(&mut event);
        assert!(event.default_prevented());
        assert_eq!(outcome, SubmitOutcome::Blocked { issues: 2 });
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn dispatch_routes_each_action() {
        let (mut form, calls) = controller(login_values("", "", false, ""));
        assert_eq!(
            form.dispatch(FormAction::Change {
                target: InputTarget::text("password", "secret")
            }),
            None
        );
        assert_eq!(
            form.dispatch(FormAction::Blur {
                name: "password".to_string()
            }),
            None
        );
        assert!(form.is_touched("password"));
        assert_eq!(form.value("password"), Some(&json!("secret")));
        assert_eq!(
            form.dispatch(FormAction::Submit),
            Some(SubmitOutcome::Blocked { issues: 2 })
        );
        assert!(calls.borrow().is_empty());
    }

    #[test]
    fn text_props_carry_the_stored_value() {
        let (form, _) = controller(login_values("a@b.com", "", false, ""));
        let props = form.field_props("email", &BindingOptions::email());
        assert_eq!(props.input_type, InputType::Email);
        assert_eq!(props.value, Some(json!("a@b.com")));
        assert_eq!(props.checked, None);

        let missing = form.field_props("nickname", &BindingOptions::default());
        assert_eq!(missing.input_type, InputType::Text);
        assert_eq!(missing.value, None);
    }

    #[test]
    fn radio_without_value_is_checked_only_while_the_field_is_absent() {
        let options = BindingOptions {
            input_type: InputType::Radio,
            value: None,
        };
        let (mut form, _) = controller(login_values("", "", false, ""));
        let props = form.field_props("plan", &options);
        assert_eq!(props.value, None);
        assert_eq!(props.checked, Some(true));

        form.dispatch(props.toggle());
        assert_eq!(form.value("plan"), Some(&json!("on")));
        assert_eq!(form.field_props("plan", &options).checked, Some(false));
        assert_eq!(form.field_props("gender", &options).checked, Some(false));
    }
}
