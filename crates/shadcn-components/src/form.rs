//! Form-bound widgets
//!
//! Widgets here read their value and validation state from a model through
//! the [`FormModel`] trait and render with a label, a hint and an error
//! message wired to the control:
//!
//! | part | id |
//! |------|----|
//! | control | `object_field` (or `field`) |
//! | label | `{id}-label` |
//! | hint | `{id}-description` |
//! | error message | `{id}-message` |
//!
//! A field with errors renders `aria-invalid="true"` and lists the message
//! id in `aria-describedby`; a valid field renders `aria-invalid="false"`
//! and lists only the hint id, when there is a hint.

mod controls;
mod field;
mod model;
mod scope;

pub use controls::{
	FormCheckbox, FormCheckboxGroup, FormDatePicker, FormInput, FormRadioGroup, FormSelect,
	FormSlider, FormSwitch, FormTextarea,
};
pub use field::FormField;
pub use model::{FormModel, JsonModel};
pub use scope::{BoundField, FormScope};
