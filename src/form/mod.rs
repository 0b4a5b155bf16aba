mod actions;
mod binding;
mod controller;
mod error;
mod touched;
mod validation;
mod value;

pub use actions::{FormAction, InputTarget, SubmitEvent};
pub use binding::{BindingOptions, FieldProps, InputType};
pub use controller::{FormConfig, FormController, SubmitOutcome};
pub use error::FormError;
pub use touched::Touched;
pub use validation::{Errors, NoValidation, Validate, required};
pub use value::{Values, is_truthy};
