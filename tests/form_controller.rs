use std::{cell::RefCell, rc::Rc};

use formstate::form::{
    BindingOptions, Errors, FormConfig, FormController, InputTarget, SubmitOutcome, Touched,
    Values,
};
use serde_json::{Value, json};

fn login_values(email: &str, password: &str, remember_me: bool, gender: &str) -> Values {
    Values::new()
        .with("email", email)
        .with("password", password)
        .with("rememberMe", remember_me)
        .with("gender", gender)
}

fn validate(values: &Values) -> Errors {
    let mut errors = Errors::new();
    if !values.is_truthy("email") {
        errors.set("email", "required");
    }
    if !values.is_truthy("password") {
        errors.set("password", "required");
    }
    if !values.is_truthy("gender") {
        errors.set("gender", "required");
    }
    errors
}

fn form_with_calls(initial: Values) -> (FormController, Rc<RefCell<Vec<Values>>>) {
    let calls = Rc::new(RefCell::new(Vec::new()));
    let sink = Rc::clone(&calls);
    let form = FormController::new(
        FormConfig::new(initial)
            .with_validate(validate)
            .with_on_submit(move |values| sink.borrow_mut().push(values.clone())),
    );
    (form, calls)
}

#[test]
fn last_write_wins_and_other_fields_are_untouched() {
    let (mut form, _) = form_with_calls(login_values("", "", false, ""));
    form.handle_change(&InputTarget::text("email", "a"));
    form.handle_change(&InputTarget::text("email", "ab"));
    form.handle_change(&InputTarget::text("password", "pw"));
    form.handle_change(&InputTarget::text("email", "a@b.com"));

    assert_eq!(form.values(), &login_values("a@b.com", "pw", false, ""));
}

#[test]
fn errors_always_match_the_current_values() {
    let (mut form, _) = form_with_calls(login_values("a@b.com", "pw", false, "male"));
    let steps = [
        InputTarget::text("email", ""),
        InputTarget::text("password", ""),
        InputTarget::radio("gender", "female"),
        InputTarget::text("email", "x@y.z"),
        InputTarget::checkbox("rememberMe", true),
    ];
    for target in &steps {
        form.handle_change(target);
        assert_eq!(form.errors(), &validate(form.values()));
    }
}

#[test]
fn emptying_a_field_surfaces_its_error_immediately() {
    let (mut form, _) = form_with_calls(login_values("a@b.com", "pw", false, "male"));
    assert!(!form.has_errors());
    form.handle_change(&InputTarget::text("email", ""));
    assert_eq!(form.errors(), &Errors::new().with("email", "required"));
    assert!(!form.is_touched("email"));
}

#[test]
fn blocked_submit_marks_every_field_touched() {
    let (mut form, calls) = form_with_calls(login_values("", "x", false, ""));
    let outcome = form.submit();

    assert_eq!(outcome, SubmitOutcome::Blocked { issues: 2 });
    assert!(calls.borrow().is_empty());
    let expected: Touched = [
        ("email", true),
        ("password", true),
        ("rememberMe", true),
        ("gender", true),
    ]
    .into_iter()
    .collect();
    assert_eq!(form.touched(), &expected);
    assert_eq!(form.visible_error("email"), Some("required"));
    assert_eq!(form.visible_error("password"), None);
}

#[test]
fn valid_submit_passes_the_exact_values_once() {
    let values = login_values("a@b.com", "pw", true, "male");
    let (mut form, calls) = form_with_calls(values.clone());

    assert_eq!(form.submit(), SubmitOutcome::Submitted);
    assert_eq!(calls.borrow().as_slice(), [values]);
}

#[test]
fn submit_recovers_once_errors_are_fixed() {
    let (mut form, calls) = form_with_calls(login_values("", "", false, ""));
    assert!(!form.submit().is_submitted());
    form.handle_change(&InputTarget::text("email", "a@b.com"));
    form.handle_change(&InputTarget::text("password", "pw"));
    form.handle_change(&InputTarget::radio("gender", "female"));
    assert!(form.submit().is_submitted());
    assert_eq!(calls.borrow().len(), 1);
}

#[test]
fn checkbox_checked_is_boolean_coercion_of_the_value() {
    let cases = [
        (json!(1), true),
        (json!("x"), true),
        (json!(true), true),
        (json!(""), false),
        (json!(false), false),
        (json!(0), false),
        (Value::Null, false),
    ];
    for (stored, expected) in cases {
        let (form, _) = form_with_calls(Values::new().with("rememberMe", stored.clone()));
        let props = form.field_props("rememberMe", &BindingOptions::checkbox());
        assert_eq!(props.checked, Some(expected), "stored {stored}");
        assert_eq!(props.value, None);
    }
}

#[test]
fn checkbox_change_stores_checked_state() {
    let (mut form, _) = form_with_calls(login_values("", "", false, ""));
    let props = form.field_props("rememberMe", &BindingOptions::checkbox());
    form.dispatch(props.toggle());
    assert_eq!(form.value("rememberMe"), Some(&json!(true)));
    assert!(
        form.field_props("rememberMe", &BindingOptions::checkbox())
            .is_checked()
    );
}

#[test]
fn exactly_one_radio_is_checked_after_each_change() {
    let (mut form, _) = form_with_calls(login_values("", "", false, ""));
    let options = ["male", "female"].map(BindingOptions::radio);
    let checked = |form: &FormController| -> Vec<bool> {
        options
            .iter()
            .map(|option| form.field_props("gender", option).is_checked())
            .collect()
    };

    assert_eq!(checked(&form), [false, false]);
    let female = form.field_props("gender", &options[1]);
    form.dispatch(female.toggle());
    assert_eq!(checked(&form), [false, true]);
    let male = form.field_props("gender", &options[0]);
    form.dispatch(male.toggle());
    assert_eq!(checked(&form), [true, false]);
}

#[test]
fn radio_match_is_strict() {
    let (form, _) = form_with_calls(Values::new().with("choice", 1));
    let props = form.field_props("choice", &BindingOptions::radio("1"));
    assert_eq!(props.checked, Some(false));
    assert_eq!(props.value, Some(json!("1")));
}

#[test]
fn blur_is_idempotent() {
    let (mut form, _) = form_with_calls(login_values("", "", false, ""));
    form.handle_blur("email");
    let after_first = form.touched().clone();
    form.handle_blur("email");
    assert_eq!(form.touched(), &after_first);
    assert!(form.is_touched("email"));
}

#[test]
fn blur_never_revalidates() {
    let runs = Rc::new(RefCell::new(0));
    let counter = Rc::clone(&runs);
    let mut form = FormController::new(
        FormConfig::new(login_values("", "", false, "")).with_validate(move |values: &Values| {
            *counter.borrow_mut() += 1;
            validate(values)
        }),
    );
    assert_eq!(*runs.borrow(), 1, "construction validates once");
    form.handle_blur("email");
    form.handle_blur("password");
    assert_eq!(*runs.borrow(), 1);
}

#[test]
fn errors_are_computed_before_any_event() {
    let initial = login_values("", "pw", false, "");
    let (form, calls) = form_with_calls(initial.clone());

    assert_eq!(form.errors(), &validate(&initial));
    assert_eq!(form.error("email"), Some("required"));
    assert_eq!(form.error_count(), 2);
    assert!(form.touched().is_empty());
    assert_eq!(form.visible_error("email"), None);
    assert_eq!(form.visible_error("gender"), None);
    assert!(calls.borrow().is_empty());
}

#[test]
#[should_panic(expected = "validator bug")]
fn validator_panics_propagate() {
    let mut form = FormController::new(
        FormConfig::new(Values::new().with("email", ""))
            .with_validate(|values: &Values| -> Errors {
                if values.is_truthy("email") {
                    panic!("validator bug");
                }
                Errors::new()
            }),
    );
    form.handle_change(&InputTarget::text("email", "x"));
}
