mod input;
mod login_form;
mod options;
mod runtime;
mod status;
mod terminal;

pub use login_form::LoginForm;
pub use options::UiOptions;
