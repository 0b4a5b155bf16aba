#![deny(rust_2018_idioms)]
//! Form state for interactive forms: values, touched flags and validation
//! errors, driven by change, blur and submit events.
//!
//! ```
//! use formstate::form::{FormConfig, FormController, InputTarget, Values, required};
//!
//! let mut form = FormController::new(
//!     FormConfig::new(Values::new().with("email", ""))
//!         .with_validate(required([("email", "required")])),
//! );
//! assert!(!form.submit().is_submitted());
//! form.handle_change(&InputTarget::text("email", "a@b.com"));
//! assert!(form.submit().is_submitted());
//! ```

mod app;
pub mod form;
pub mod io;
pub mod login;
mod presentation;

pub use app::{LoginForm, UiOptions};
pub use form::{FormConfig, FormController, SubmitOutcome, Values};
pub use io::{ScriptReport, parse_script, run_script};
pub use login::{LoginMessages, LoginValues};

pub mod prelude {
    pub use super::{
        FormConfig, FormController, LoginForm, LoginMessages, LoginValues, SubmitOutcome,
        UiOptions, Values,
    };
}
