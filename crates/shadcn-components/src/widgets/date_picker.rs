//! Date picker
//!
//! A text input paired with a calendar popover. The calendar grid itself is
//! drawn by the behavior layer into the `calendar` target; the server
//! renders the input, the trigger and the popover shell with their wiring.

use shadcn_core::{AttrValue, Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};
use crate::icons;

use super::{HIDDEN_STYLE, flag, open_state};

/// Default `data-date-picker-format-value`.
const DEFAULT_FORMAT: &str = "yyyy-MM-dd";

/// A date input with a calendar popover.
///
/// Behavior hooks: controller `date-picker`, values
/// `data-date-picker-open-value`, `-format-value`, `-min-value`,
/// `-max-value`, targets `input`, `trigger`, `content` and `calendar`.
#[derive(Debug, Clone)]
pub struct DatePicker {
	input_id: Option<String>,
	name: Option<String>,
	value: Option<String>,
	placeholder: Option<String>,
	format: String,
	min: Option<String>,
	max: Option<String>,
	open: bool,
	disabled: bool,
	required: bool,
	input_attrs: Attributes,
	attrs: Attributes,
}

impl Default for DatePicker {
	fn default() -> Self {
		Self::new()
	}
}

impl DatePicker {
	/// Creates a closed, empty date picker.
	pub fn new() -> Self {
		Self {
			input_id: None,
			name: None,
			value: None,
			placeholder: None,
			format: DEFAULT_FORMAT.to_string(),
			min: None,
			max: None,
			open: false,
			disabled: false,
			required: false,
			input_attrs: Attributes::new(),
			attrs: Attributes::new(),
		}
	}

	/// Sets the id of the text input; trigger and content ids derive from it.
	pub fn input_id(mut self, id: impl Into<String>) -> Self {
		self.input_id = Some(id.into());
		self
	}

	/// Sets the form field name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the date value.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Sets the date value when given.
	pub fn value_opt(mut self, value: Option<String>) -> Self {
		self.value = value;
		self
	}

	/// Sets the placeholder.
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Sets the display format handed to the behavior layer.
	pub fn format(mut self, format: impl Into<String>) -> Self {
		self.format = format.into();
		self
	}

	/// Earliest selectable date.
	pub fn min(mut self, min: impl Into<String>) -> Self {
		self.min = Some(min.into());
		self
	}

	/// Latest selectable date.
	pub fn max(mut self, max: impl Into<String>) -> Self {
		self.max = Some(max.into());
		self
	}

	/// Initial open state.
	pub fn open(mut self, open: bool) -> Self {
		self.open = open;
		self
	}

	/// Disables the picker.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Marks the input required.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Sets an attribute on the text input rather than the root.
	pub fn input_attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
		self.input_attrs.set(name, value);
		self
	}
}

root_attrs!(DatePicker);

impl Component for DatePicker {
	fn name(&self) -> &'static str {
		"date_picker"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let ids = ctx.aria_ids(self.input_id.as_deref(), "date-picker");
		let state = open_state(self.open);

		let input = PageElement::new("input")
			.attr("type", "text")
			.attr("id", ids.seed())
			.attr_opt("name", self.name.as_deref())
			.attr_opt("value", self.value.as_deref())
			.attr_opt("placeholder", self.placeholder.as_deref())
			.attr("autocomplete", "off")
			.class(&ctx.classes("date_picker", "input", &[]))
			.bool_attr("disabled", self.disabled)
			.bool_attr("required", self.required)
			.data("date_picker_target", "input")
			.data("action", "change->date-picker#parse")
			.attrs(&self.input_attrs);

		let trigger = PageElement::new("button")
			.attr("type", "button")
			.attr("id", ids.trigger())
			.aria("controls", ids.content())
			.aria("expanded", self.open)
			.aria("haspopup", "dialog")
			.aria("label", "Choose date")
			.data("state", state)
			.class(&ctx.classes("date_picker", "trigger", &[]))
			.bool_attr("disabled", self.disabled)
			.data("date_picker_target", "trigger")
			.data("action", "click->date-picker#toggle")
			.child(icons::calendar());

		let mut content = PageElement::new("div")
			.attr("id", ids.content())
			.attr("role", "dialog")
			.aria("modal", false)
			.aria("labelledby", ids.trigger())
			.data("state", state)
			.class(&ctx.classes("date_picker", "content", &[]))
			.data("date_picker_target", "content")
			.child(
				PageElement::new("div")
					.class(&ctx.classes("date_picker", "calendar", &[]))
					.data("date_picker_target", "calendar"),
			);
		if !self.open {
			content = content.attr("style", HIDDEN_STYLE);
		}

		Ok(PageElement::new("div")
			.class(&ctx.classes("date_picker", "root", &[]))
			.data("controller", "date-picker")
			.data("date_picker_open_value", flag(self.open))
			.data("date_picker_format_value", self.format.as_str())
			.data_opt("date_picker_min_value", self.min.as_deref())
			.data_opt("date_picker_max_value", self.max.as_deref())
			.attrs(&self.attrs)
			.child(input)
			.child(trigger)
			.child(content)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_date_picker_wiring() {
		let html = DatePicker::new()
			.name("due")
			.value("2024-05-01")
			.min("2024-01-01")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("<input type=\"text\" id=\"date-picker-1\" name=\"due\" value=\"2024-05-01\""));
		assert!(html.contains("id=\"date-picker-1-trigger\" aria-controls=\"date-picker-1-content\""));
		assert!(html.contains("<div id=\"date-picker-1-content\" role=\"dialog\""));
		assert!(html.contains("data-date-picker-min-value=\"2024-01-01\""));
		assert!(!html.contains("data-date-picker-max-value"));
		assert!(html.contains("data-date-picker-format-value=\"yyyy-MM-dd\""));
	}

	#[rstest]
	fn test_input_attrs_land_on_input() {
		let html = DatePicker::new()
			.input_id("due")
			.input_attr("aria-invalid", "true")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("data-action=\"change->date-picker#parse\" aria-invalid=\"true\""));
		assert!(html.contains("id=\"due-trigger\""));
	}
}
