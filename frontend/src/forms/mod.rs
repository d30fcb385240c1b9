pub mod form_state;
pub mod hours;
pub mod localized;
pub mod toggle;
pub mod validation;

pub use form_state::{FormHandle, FormState};
pub use hours::HoursEditor;
pub use localized::{field_key, Locale};
pub use toggle::{ToggleConfirmation, ToggleId, ToggleSet};
pub use validation::{FieldErrors, FieldValues, Rule, Schema};
