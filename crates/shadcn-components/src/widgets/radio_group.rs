//! Radio group

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, Orientation, RenderContext};
use crate::icons;

use super::checked_state;

/// One choice of a [`RadioGroup`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RadioOption {
	/// Submitted value
	pub value: String,
	/// Visible label
	pub label: String,
	/// Whether this choice is disabled
	pub disabled: bool,
}

impl RadioOption {
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

/// A single-choice group of `role="radio"` buttons backed by one hidden
/// input.
///
/// Behavior hooks: controller `radio-group`, action
/// `click->radio-group#select` on each item, value
/// `data-radio-group-value-value`, targets `item` and `input`.
#[derive(Debug, Clone)]
pub struct RadioGroup {
	name: String,
	options: Vec<RadioOption>,
	selected: Option<String>,
	orientation: Orientation,
	disabled: bool,
	required: bool,
	attrs: Attributes,
}

impl RadioGroup {
	/// Creates a vertical group for `name`.
	pub fn new(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			options: Vec::new(),
			selected: None,
			orientation: Orientation::Vertical,
			disabled: false,
			required: false,
			attrs: Attributes::new(),
		}
	}

	/// Adds a choice.
	pub fn option(mut self, option: RadioOption) -> Self {
		self.options.push(option);
		self
	}

	/// Adds several choices.
	pub fn options(mut self, options: impl IntoIterator<Item = RadioOption>) -> Self {
		self.options.extend(options);
		self
	}

	/// Sets the selected value.
	pub fn selected(mut self, value: impl Into<String>) -> Self {
		self.selected = Some(value.into());
		self
	}

	/// Sets the selected value when given.
	pub fn selected_opt(mut self, value: Option<String>) -> Self {
		self.selected = value;
		self
	}

	/// Lays the items out in a row or a column.
	pub fn orientation(mut self, orientation: Orientation) -> Self {
		self.orientation = orientation;
		self
	}

	/// Disables every choice.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Marks the group required.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Index of the item reachable with Tab: the selected one, else the first
	/// enabled one.
	fn focus_index(&self) -> Option<usize> {
		self.options
			.iter()
			.position(|option| self.selected.as_deref() == Some(option.value.as_str()))
			.or_else(|| self.options.iter().position(|option| !option.disabled))
	}
}

root_attrs!(RadioGroup);

impl Component for RadioGroup {
	fn name(&self) -> &'static str {
		"radio_group"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let ids = ctx.aria_ids(self.attrs.id(), "radio-group");
		let focus_index = self.focus_index();

		let items = self.options.iter().enumerate().map(|(index, option)| {
			let item_id = ids.part(&format!("item-{index}"));
			let checked = self.selected.as_deref() == Some(option.value.as_str());
			let mut item = PageElement::new("button")
				.attr("type", "button")
				.attr("role", "radio")
				.attr("id", item_id.as_str())
				.aria("checked", checked)
				.data("state", checked_state(checked))
				.attr("value", option.value.as_str())
				.attr("tabindex", if focus_index == Some(index) { "0" } else { "-1" })
				.class(&ctx.classes("radio_group", "item", &[]))
				.bool_attr("disabled", self.disabled || option.disabled)
				.data("action", "click->radio-group#select")
				.data("radio_group_target", "item");
			if checked {
				item = item.child(
					PageElement::new("span")
						.class(&ctx.classes("radio_group", "indicator", &[]))
						.child(icons::circle()),
				);
			}
			PageElement::new("div")
				.class(&ctx.classes("radio_group", "option", &[]))
				.child(item)
				.child(
					PageElement::new("label")
						.attr("for", item_id)
						.class(&ctx.classes("radio_group", "item_label", &[]))
						.child(option.label.clone()),
				)
		});

		let hidden = PageElement::new("input")
			.attr("type", "hidden")
			.attr("name", self.name.as_str())
			.attr("value", self.selected.as_deref().unwrap_or_default())
			.data("radio_group_target", "input");

		Ok(PageElement::new("div")
			.attr("id", ids.seed())
			.attr("role", "radiogroup")
			.aria("orientation", self.orientation.as_str())
			.aria_opt("required", self.required.then_some(true))
			.class(&ctx.classes(
				"radio_group",
				"root",
				&[("orientation", self.orientation.as_str())],
			))
			.data("controller", "radio-group")
			.data("radio_group_value_value", self.selected.as_deref().unwrap_or_default())
			.attrs(&self.attrs)
			.children(items)
			.child(hidden)
			.into_page())
	}
}
