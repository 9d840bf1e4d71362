//! Checkbox and checkbox group
//!
//! The checkbox is a `<button role="checkbox">`, which has no form
//! semantics of its own, so it carries a hidden input holding the submitted
//! value. Unchecked boxes submit their unchecked value (`0` by default).

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};
use crate::icons;

use super::{HIDDEN_STYLE, checked_state, flag};

/// A checkbox.
///
/// Behavior hooks: controller `checkbox`, action `click->checkbox#toggle`,
/// value `data-checkbox-checked-value`, targets `indicator` and `input`.
#[derive(Debug, Clone)]
pub struct Checkbox {
	name: Option<String>,
	checked: bool,
	value: String,
	unchecked_value: Option<String>,
	disabled: bool,
	required: bool,
	attrs: Attributes,
}

impl Default for Checkbox {
	fn default() -> Self {
		Self::new()
	}
}

impl Checkbox {
	/// Creates an unchecked checkbox submitting `1`/`0`.
	pub fn new() -> Self {
		Self {
			name: None,
			checked: false,
			value: "1".to_string(),
			unchecked_value: Some("0".to_string()),
			disabled: false,
			required: false,
			attrs: Attributes::new(),
		}
	}

	/// Sets the form field name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the checked state.
	pub fn checked(mut self, checked: bool) -> Self {
		self.checked = checked;
		self
	}

	/// Value submitted when checked.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	/// Value submitted when unchecked.
	pub fn unchecked_value(mut self, value: impl Into<String>) -> Self {
		self.unchecked_value = Some(value.into());
		self
	}

	/// Submits nothing when unchecked: the hidden input is rendered disabled.
	pub fn no_unchecked_value(mut self) -> Self {
		self.unchecked_value = None;
		self
	}

	/// Disables the checkbox.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Marks the checkbox required.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	fn hidden_input(&self) -> Option<PageElement> {
		let name = self.name.as_deref()?;
		let (value, inert) = match (self.checked, &self.unchecked_value) {
			(true, _) => (self.value.as_str(), false),
			(false, Some(unchecked)) => (unchecked.as_str(), false),
			(false, None) => (self.value.as_str(), true),
		};
		Some(
			PageElement::new("input")
				.attr("type", "hidden")
				.attr("name", name)
				.attr("value", value)
				.bool_attr("disabled", inert || self.disabled)
				.data("checkbox_target", "input")
				.data_opt("checkbox_unchecked_value", self.unchecked_value.as_deref())
				.data("checkbox_checked_input_value", self.value.as_str()),
		)
	}
}

root_attrs!(Checkbox);

impl Component for Checkbox {
	fn name(&self) -> &'static str {
		"checkbox"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let id = ctx.id(self.attrs.id(), "checkbox");
		let state = checked_state(self.checked);

		let mut indicator = PageElement::new("span")
			.class(&ctx.classes("checkbox", "indicator", &[]))
			.data("state", state)
			.data("checkbox_target", "indicator");
		if !self.checked {
			indicator = indicator.attr("style", HIDDEN_STYLE);
		}

		Ok(PageElement::new("button")
			.attr("type", "button")
			.attr("role", "checkbox")
			.attr("id", id)
			.aria("checked", self.checked)
			.aria_opt("required", self.required.then_some(true))
			.data("state", state)
			.data("checked", self.checked)
			.attr("value", self.value.as_str())
			.class(&ctx.classes("checkbox", "root", &[]))
			.bool_attr("disabled", self.disabled)
			.data("controller", "checkbox")
			.data("action", "click->checkbox#toggle")
			.data("checkbox_checked_value", flag(self.checked))
			.attrs(&self.attrs)
			.child(indicator.child(icons::check()))
			.child(self.hidden_input())
			.into_page())
	}
}

/// One choice of a [`CheckboxGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CheckboxOption {
	/// Submitted value
	pub value: String,
	/// Visible label
	pub label: String,
	/// Whether this choice is disabled
	pub disabled: bool,
}

impl CheckboxOption {
	/// Creates an enabled option.
	pub fn new(value: impl Into<String>, label: impl Into<String>) -> Self {
		Self {
			value: value.into(),
			label: label.into(),
			disabled: false,
		}
	}

	/// Disables this option.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

/// A set of checkboxes submitting `name[]`.
///
/// An empty hidden `name[]` input comes first so that clearing every box
/// still submits the field.
#[derive(Debug, Clone)]
pub struct CheckboxGroup {
	name: String,
	options: Vec<CheckboxOption>,
	selected: Vec<String>,
	disabled: bool,
	attrs: Attributes,
}

impl CheckboxGroup {
	/// Creates a group for `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			options: Vec::new(),
			selected: Vec::new(),
			disabled: false,
			attrs: Attributes::new(),
		}
	}

	/// Adds a choice.
	pub fn option(mut self, option: CheckboxOption) -> Self {
		self.options.push(option);
		self
	}

	/// Adds several choices.
	pub fn options(mut self, options: impl IntoIterator<Item = CheckboxOption>) -> Self {
		self.options.extend(options);
		self
	}

	/// Sets the checked values.
	pub fn selected<S: Into<String>>(mut self, values: impl IntoIterator<Item = S>) -> Self {
		self.selected = values.into_iter().map(Into::into).collect();
		self
	}

	/// Disables every choice.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

root_attrs!(CheckboxGroup);

impl Component for CheckboxGroup {
	fn name(&self) -> &'static str {
		"checkbox_group"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let ids = ctx.aria_ids(self.attrs.id(), "checkbox-group");
		let field_name = format!("{}[]", self.name);

		let mut items = Vec::with_capacity(self.options.len() + 1);
		items.push(
			PageElement::new("input")
				.attr("type", "hidden")
				.attr("name", field_name.as_str())
				.attr("value", "")
				.into_page(),
		);

		for (index, option) in self.options.iter().enumerate() {
			let item_id = ids.part(&format!("item-{index}"));
			let checkbox = Checkbox::new()
				.id(item_id.as_str())
				.name(field_name.as_str())
				.value(option.value.as_str())
				.no_unchecked_value()
				.checked(self.selected.contains(&option.value))
				.disabled(self.disabled || option.disabled)
				.to_page(ctx)?;
			items.push(
				PageElement::new("div")
					.class(&ctx.classes("checkbox", "item", &[]))
					.child(checkbox)
					.child(
						PageElement::new("label")
							.attr("for", item_id)
							.class(&ctx.classes("checkbox", "item_label", &[]))
							.child(option.label.clone()),
					)
					.into_page(),
			);
		}

		Ok(PageElement::new("div")
			.attr("id", ids.seed())
			.attr("role", "group")
			.class(&ctx.classes("checkbox", "group", &[]))
			.attrs(&self.attrs)
			.children(items)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn ctx() -> RenderContext {
		RenderContext::sequential()
	}

	#[rstest]
	fn test_unchecked_checkbox(ctx: RenderContext) {
		let html = Checkbox::new().name("terms").checked(false).render(&ctx).unwrap();
		assert!(html.contains("role=\"checkbox\""));
		assert!(html.contains("aria-checked=\"false\""));
		assert!(html.contains("data-checked=\"false\""));
		assert!(html.contains("data-state=\"unchecked\""));
		assert!(html.contains("<input type=\"hidden\" name=\"terms\" value=\"0\""));
	}

	#[rstest]
	fn test_checked_checkbox(ctx: RenderContext) {
		let html = Checkbox::new()
			.name("terms")
			.value("yes")
			.checked(true)
			.render(&ctx)
			.unwrap();
		assert!(html.contains("aria-checked=\"true\""));
		assert!(html.contains("data-checkbox-checked-value=\"true\""));
		assert!(html.contains("<input type=\"hidden\" name=\"terms\" value=\"yes\""));
		assert!(!html.contains(HIDDEN_STYLE));
	}

	#[rstest]
	fn test_checkbox_without_name_has_no_hidden_input(ctx: RenderContext) {
		let html = Checkbox::new().render(&ctx).unwrap();
		assert!(!html.contains("type=\"hidden\""));
	}

	#[rstest]
	fn test_checkbox_uses_caller_id(ctx: RenderContext) {
		let html = Checkbox::new().id("accept").render(&ctx).unwrap();
		assert!(html.contains("id=\"accept\""));
		assert!(!html.contains("checkbox-1"));
	}

	#[rstest]
	fn test_checkbox_group(ctx: RenderContext) {
		let html = CheckboxGroup::new("colors")
			.options([
				CheckboxOption::new("red", "Red"),
				CheckboxOption::new("blue", "Blue").disabled(true),
			])
			.selected(["red"])
			.render(&ctx)
			.unwrap();
		assert!(html.starts_with("<div id=\"checkbox-group-1\" role=\"group\""));
		assert!(html.contains("<input type=\"hidden\" name=\"colors[]\" value=\"\" />"));
		assert!(html.contains("id=\"checkbox-group-1-item-0\""));
		assert!(html.contains("<label for=\"checkbox-group-1-item-1\""));
		assert!(html.contains("name=\"colors[]\" value=\"red\" data-checkbox-target"));
		assert_eq!(html.matches("aria-checked=\"true\"").count(), 1);
		assert_eq!(html.matches(" disabled ").count(), 2);
	}
}
