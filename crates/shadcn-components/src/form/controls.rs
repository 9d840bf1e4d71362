//! Widgets bound to a model field
//!
//! Each wrapper takes a [`BoundField`], fills the widget's name, id and
//! value from it and renders the widget inside a [`FormField`]. A value
//! given to the wrapper beats the model's value. Further widget options
//! are set through `widget(|w| ...)`.

use shadcn_core::{IntoPage, Page, Result};

use crate::component::{Component, RenderContext};
use crate::widgets::{
	Checkbox, CheckboxGroup, CheckboxOption, DatePicker, Input, RadioGroup, RadioOption, Select,
	Slider, Switch, Textarea,
};

use super::field::FormField;
use super::model::{FormModel, value_list, value_numbers, value_text, value_truthy};
use super::scope::BoundField;

/// Label and hint shared by all wrappers.
#[derive(Debug, Clone, Default)]
struct FieldText {
	label: Option<Page>,
	hint: Option<Page>,
}

impl FieldText {
	fn wrapper<M: FormModel>(&self, field: &BoundField<'_, M>) -> FormField {
		FormField::new(field.id())
			.label_opt(self.label.clone())
			.hint_opt(self.hint.clone())
			.errors(field.errors())
	}
}

/// Adds `label`, `hint` and `widget` to a wrapper with `text` and `widget`
/// fields.
macro_rules! form_builders {
	($ty:ident, $widget:ty) => {
		impl<M: FormModel> $ty<'_, M> {
			/// Sets the label.
			pub fn label(mut self, label: impl IntoPage) -> Self {
				self.text.label = Some(label.into_page());
				self
			}

			/// Sets the hint shown under the control.
			pub fn hint(mut self, hint: impl IntoPage) -> Self {
				self.text.hint = Some(hint.into_page());
				self
			}

			/// Configures the wrapped widget.
			pub fn widget(mut self, configure: impl FnOnce($widget) -> $widget) -> Self {
				self.widget = configure(self.widget);
				self
			}
		}
	};
}

/// An [`Input`] bound to a field.
///
/// # Examples
///
/// ```
/// use shadcn_components::form::{FormInput, FormScope, JsonModel};
/// use shadcn_components::{Component, RenderContext};
///
/// let model = JsonModel::new().with_error("email", "is invalid");
/// let scope = FormScope::object("user", &model);
/// let html = FormInput::new(scope.field("email"))
/// 	.label("Email")
/// 	.render(&RenderContext::sequential())
/// 	.unwrap();
/// assert!(html.contains("name=\"user[email]\""));
/// assert!(html.contains("aria-invalid=\"true\""));
/// assert!(html.contains("aria-describedby=\"user_email-message\""));
/// ```
#[derive(Debug, Clone)]
pub struct FormInput<'a, M> {
	field: BoundField<'a, M>,
	text: FieldText,
	widget: Input,
	value: Option<String>,
}

impl<'a, M: FormModel> FormInput<'a, M> {
	/// Binds a text input to `field`.
	pub fn new(field: BoundField<'a, M>) -> Self {
		Self {
			field,
			text: FieldText::default(),
			widget: Input::new(),
			value: None,
		}
	}

	/// Sets the value, overriding the model.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}
}

form_builders!(FormInput, Input);

impl<M: FormModel> Component for FormInput<'_, M> {
	fn name(&self) -> &'static str {
		"form_input"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let wrapper = self.text.wrapper(&self.field);
		let value = self
			.value
			.clone()
			.or_else(|| self.field.value().as_ref().and_then(value_text));
		let control = self
			.widget
			.clone()
			.name(self.field.html_name())
			.value_opt(value)
			.id(self.field.id())
			.attrs(wrapper.control_attrs())
			.to_page(ctx)?;
		wrapper.control(control).to_page(ctx)
	}
}

/// A [`Textarea`] bound to a field.
#[derive(Debug, Clone)]
pub struct FormTextarea<'a, M> {
	field: BoundField<'a, M>,
	text: FieldText,
	widget: Textarea,
	value: Option<String>,
}

impl<'a, M: FormModel> FormTextarea<'a, M> {
	/// Binds a textarea to `field`.
	pub fn new(field: BoundField<'a, M>) -> Self {
		Self {
			field,
			text: FieldText::default(),
			widget: Textarea::new(),
			value: None,
		}
	}

	/// Sets the value, overriding the model.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}
}

form_builders!(FormTextarea, Textarea);

impl<M: FormModel> Component for FormTextarea<'_, M> {
	fn name(&self) -> &'static str {
		"form_textarea"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let wrapper = self.text.wrapper(&self.field);
		let value = self
			.value
			.clone()
			.or_else(|| self.field.value().as_ref().and_then(value_text));
		let control = self
			.widget
			.clone()
			.name(self.field.html_name())
			.value_opt(value)
			.id(self.field.id())
			.attrs(wrapper.control_attrs())
			.to_page(ctx)?;
		wrapper.control(control).to_page(ctx)
	}
}

/// A [`Checkbox`] bound to a boolean field.
#[derive(Debug, Clone)]
pub struct FormCheckbox<'a, M> {
	field: BoundField<'a, M>,
	text: FieldText,
	widget: Checkbox,
	checked: Option<bool>,
}

impl<'a, M: FormModel> FormCheckbox<'a, M> {
	/// Binds a checkbox to `field`.
	pub fn new(field: BoundField<'a, M>) -> Self {
		Self {
			field,
			text: FieldText::default(),
			widget: Checkbox::new(),
			checked: None,
		}
	}

	/// Sets the checked state, overriding the model.
	pub fn checked(mut self, checked: bool) -> Self {
		self.checked = Some(checked);
		self
	}
}

form_builders!(FormCheckbox, Checkbox);

impl<M: FormModel> Component for FormCheckbox<'_, M> {
	fn name(&self) -> &'static str {
		"form_checkbox"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let wrapper = self.text.wrapper(&self.field);
		let checked = self
			.checked
			.unwrap_or_else(|| self.field.value().is_some_and(|value| value_truthy(&value)));
		let control = self
			.widget
			.clone()
			.name(self.field.html_name())
			.checked(checked)
			.id(self.field.id())
			.attrs(wrapper.control_attrs())
			.to_page(ctx)?;
		wrapper.control(control).to_page(ctx)
	}
}

/// A [`Switch`] bound to a boolean field.
#[derive(Debug, Clone)]
pub struct FormSwitch<'a, M> {
	field: BoundField<'a, M>,
	text: FieldText,
	widget: Switch,
	checked: Option<bool>,
}

impl<'a, M: FormModel> FormSwitch<'a, M> {
	/// Binds a switch to `field`.
	pub fn new(field: BoundField<'a, M>) -> Self {
		Self {
			field,
			text: FieldText::default(),
			widget: Switch::new(),
			checked: None,
		}
	}

	/// Sets the checked state, overriding the model.
	pub fn checked(mut self, checked: bool) -> Self {
		self.checked = Some(checked);
		self
	}
}

form_builders!(FormSwitch, Switch);

impl<M: FormModel> Component for FormSwitch<'_, M> {
	fn name(&self) -> &'static str {
		"form_switch"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let wrapper = self.text.wrapper(&self.field);
		let checked = self
			.checked
			.unwrap_or_else(|| self.field.value().is_some_and(|value| value_truthy(&value)));
		let control = self
			.widget
			.clone()
			.name(self.field.html_name())
			.checked(checked)
			.id(self.field.id())
			.attrs(wrapper.control_attrs())
			.to_page(ctx)?;
		wrapper.control(control).to_page(ctx)
	}
}

/// A [`CheckboxGroup`] bound to a multi-valued field.
///
/// The model value may be an array or a single scalar.
#[derive(Debug, Clone)]
pub struct FormCheckboxGroup<'a, M> {
	field: BoundField<'a, M>,
	text: FieldText,
	widget: CheckboxGroup,
	selected: Option<Vec<String>>,
}

impl<'a, M: FormModel> FormCheckboxGroup<'a, M> {
	/// Binds a checkbox group to `field`; it submits as `name[]`.
	pub fn new(field: BoundField<'a, M>) -> Self {
		Self {
			widget: CheckboxGroup::new(field.html_name()),
			field,
			text: FieldText::default(),
			selected: None,
		}
	}

	/// Adds choices.
	pub fn options(mut self, options: impl IntoIterator<Item = CheckboxOption>) -> Self {
		self.widget = self.widget.options(options);
		self
	}

	/// Sets the checked values, overriding the model.
	pub fn selected<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
		self.selected = Some(values.into_iter().map(Into::into).collect());
		self
	}
}

form_builders!(FormCheckboxGroup, CheckboxGroup);

impl<M: FormModel> Component for FormCheckboxGroup<'_, M> {
	fn name(&self) -> &'static str {
		"form_checkbox_group"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let wrapper = self.text.wrapper(&self.field);
		let selected = self.selected.clone().unwrap_or_else(|| {
			self.field
				.value()
				.map(|value| value_list(&value))
				.unwrap_or_default()
		});
		let control = self
			.widget
			.clone()
			.selected(selected)
			.id(self.field.id())
			.attrs(wrapper.group_attrs())
			.to_page(ctx)?;
		wrapper.control(control).to_page(ctx)
	}
}

/// A [`RadioGroup`] bound to a single-choice field.
#[derive(Debug, Clone)]
pub struct FormRadioGroup<'a, M> {
	field: BoundField<'a, M>,
	text: FieldText,
	widget: RadioGroup,
	selected: Option<String>,
}

impl<'a, M: FormModel> FormRadioGroup<'a, M> {
	/// Binds a radio group to `field`.
	pub fn new(field: BoundField<'a, M>) -> Self {
		Self {
			widget: RadioGroup::new(field.html_name()),
			field,
			text: FieldText::default(),
			selected: None,
		}
	}

	/// Adds choices.
	pub fn options(mut self, options: impl IntoIterator<Item = RadioOption>) -> Self {
		self.widget = self.widget.options(options);
		self
	}

	/// Sets the chosen value, overriding the model.
	pub fn selected(mut self, value: impl Into<String>) -> Self {
		self.selected = Some(value.into());
		self
	}
}

form_builders!(FormRadioGroup, RadioGroup);

impl<M: FormModel> Component for FormRadioGroup<'_, M> {
	fn name(&self) -> &'static str {
		"form_radio_group"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let wrapper = self.text.wrapper(&self.field);
		let selected = self
			.selected
			.clone()
			.or_else(|| self.field.value().as_ref().and_then(value_text));
		let control = self
			.widget
			.clone()
			.selected_opt(selected)
			.id(self.field.id())
			.attrs(wrapper.group_attrs())
			.to_page(ctx)?;
		wrapper.control(control).to_page(ctx)
	}
}

/// A [`Select`] bound to a single-choice field.
#[derive(Debug, Clone)]
pub struct FormSelect<'a, M> {
	field: BoundField<'a, M>,
	text: FieldText,
	widget: Select,
	selected: Option<String>,
}

impl<'a, M: FormModel> FormSelect<'a, M> {
	/// Binds a select to `field`.
	pub fn new(field: BoundField<'a, M>) -> Self {
		Self {
			field,
			text: FieldText::default(),
			widget: Select::new(),
			selected: None,
		}
	}

	/// Adds an option.
	pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
		self.widget = self.widget.option(value, label);
		self
	}

	/// Sets the chosen value, overriding the model.
	pub fn selected(mut self, value: impl Into<String>) -> Self {
		self.selected = Some(value.into());
		self
	}
}

form_builders!(FormSelect, Select);

impl<M: FormModel> Component for FormSelect<'_, M> {
	fn name(&self) -> &'static str {
		"form_select"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let wrapper = self.text.wrapper(&self.field);
		let selected = self
			.selected
			.clone()
			.or_else(|| self.field.value().as_ref().and_then(value_text));
		let control = self
			.widget
			.clone()
			.name(self.field.html_name())
			.selected_opt(selected)
			.id(self.field.id())
			.attrs(wrapper.group_attrs())
			.to_page(ctx)?;
		wrapper.control(control).to_page(ctx)
	}
}

/// A [`Slider`] bound to one numeric field, or to a low and a high field
/// as a range.
#[derive(Debug, Clone)]
pub struct FormSlider<'a, M> {
	field: BoundField<'a, M>,
	high: Option<BoundField<'a, M>>,
	text: FieldText,
	widget: Slider,
	values: Option<Vec<f64>>,
}

impl<'a, M: FormModel> FormSlider<'a, M> {
	/// Binds a single-thumb slider to `field`.
	pub fn new(field: BoundField<'a, M>) -> Self {
		Self {
			field,
			high: None,
			text: FieldText::default(),
			widget: Slider::new(),
			values: None,
		}
	}

	/// Binds a range slider to a low and a high field.
	pub fn range(low: BoundField<'a, M>, high: BoundField<'a, M>) -> Self {
		Self {
			high: Some(high),
			..Self::new(low)
		}
	}

	/// Sets the thumb values, overriding the model.
	pub fn values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
		self.values = Some(values.into_iter().collect());
		self
	}

	fn fields(&self) -> impl Iterator<Item = &BoundField<'a, M>> {
		std::iter::once(&self.field).chain(self.high.as_ref())
	}

	fn model_values(&self) -> Vec<f64> {
		self.fields()
			.flat_map(|field| field.value().map(|value| value_numbers(&value)).unwrap_or_default())
			.collect()
	}
}

form_builders!(FormSlider, Slider);

impl<M: FormModel> Component for FormSlider<'_, M> {
	fn name(&self) -> &'static str {
		"form_slider"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let errors: Vec<String> = self.fields().flat_map(|field| field.errors()).collect();
		let wrapper = self.text.wrapper(&self.field).errors(errors);

		let values = self.values.clone().unwrap_or_else(|| self.model_values());
		let thumbs = if self.high.is_some() { 2 } else { 1 };
		let mut widget = self
			.widget
			.clone()
			.names(self.fields().map(|field| field.html_name()))
			.range(self.high.is_some());
		// partial model data leaves the thumbs at their defaults
		if values.len() == thumbs || self.values.is_some() {
			widget = widget.values(values);
		}
		let control = widget
			.id(self.field.id())
			.attrs(wrapper.group_attrs())
			.to_page(ctx)?;
		wrapper.control(control).to_page(ctx)
	}
}

/// A [`DatePicker`] bound to a date field (ISO `yyyy-MM-dd` strings).
#[derive(Debug, Clone)]
pub struct FormDatePicker<'a, M> {
	field: BoundField<'a, M>,
	text: FieldText,
	widget: DatePicker,
	value: Option<String>,
}

impl<'a, M: FormModel> FormDatePicker<'a, M> {
	/// Binds a date picker to `field`.
	pub fn new(field: BoundField<'a, M>) -> Self {
		Self {
			field,
			text: FieldText::default(),
			widget: DatePicker::new(),
			value: None,
		}
	}

	/// Sets the date, overriding the model.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}
}

form_builders!(FormDatePicker, DatePicker);

impl<M: FormModel> Component for FormDatePicker<'_, M> {
	fn name(&self) -> &'static str {
		"form_date_picker"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let wrapper = self.text.wrapper(&self.field);
		let value = self
			.value
			.clone()
			.or_else(|| self.field.value().as_ref().and_then(value_text));
		let mut widget = self
			.widget
			.clone()
			.input_id(self.field.id())
			.name(self.field.html_name())
			.value_opt(value);
		for (name, attr) in wrapper.control_attrs().iter() {
			widget = widget.input_attr(name, attr.clone());
		}
		let control = widget.to_page(ctx)?;
		wrapper.control(control).to_page(ctx)
	}
}
