//! Select
//!
//! A combobox trigger opening a listbox; the chosen value travels in a
//! hidden input.

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};
use crate::icons;

use super::{HIDDEN_STYLE, checked_state, flag, open_state};

/// One choice of a [`Select`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SelectOption {
	/// Submitted value
	pub value: String,
	/// Visible label
	pub label: String,
	/// Whether this choice is disabled
	pub disabled: bool,
}

impl SelectOption {
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

/// A row of the select list.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectEntry {
	/// A choosable option
	Option(SelectOption),
	/// A non-interactive group heading
	Label(String),
	/// A divider
	Separator,
}

impl From<SelectOption> for SelectEntry {
	fn from(option: SelectOption) -> Self {
		Self::Option(option)
	}
}

/// A dropdown select.
///
/// Behavior hooks: controller `select`, value `data-select-open-value`,
/// targets `trigger`, `value`, `content`, `item` and `input`; the trigger
/// toggles with `click->select#toggle` and items pick with
/// `click->select#select`.
#[derive(Debug, Clone)]
pub struct Select {
	name: Option<String>,
	entries: Vec<SelectEntry>,
	selected: Option<String>,
	placeholder: Option<String>,
	open: bool,
	disabled: bool,
	required: bool,
	attrs: Attributes,
}

impl Default for Select {
	fn default() -> Self {
		Self::new()
	}
}

impl Select {
	/// Creates an empty, closed select.
	pub fn new() -> Self {
		Self {
			name: None,
			entries: Vec::new(),
			selected: None,
			placeholder: None,
			open: false,
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

	/// Adds an option.
	pub fn option(mut self, value: impl Into<String>, label: impl Into<String>) -> Self {
		self.entries.push(SelectOption::new(value, label).into());
		self
	}

	/// Adds entries.
	pub fn entries<E: Into<SelectEntry>>(mut self, entries: impl IntoIterator<Item = E>) -> Self {
		self.entries.extend(entries.into_iter().map(Into::into));
		self
	}

	/// Adds a group heading.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.entries.push(SelectEntry::Label(label.into()));
		self
	}

	/// Adds a divider.
	pub fn separator(mut self) -> Self {
		self.entries.push(SelectEntry::Separator);
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

	/// Text shown while nothing is selected.
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Initial open state.
	pub fn open(mut self, open: bool) -> Self {
		self.open = open;
		self
	}

	/// Disables the select.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Marks the select required.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	fn selected_option(&self) -> Option<&SelectOption> {
		let selected = self.selected.as_deref()?;
		self.entries.iter().find_map(|entry| match entry {
			SelectEntry::Option(option) if option.value == selected => Some(option),
			_ => None,
		})
	}
}

root_attrs!(Select);

impl Component for Select {
	fn name(&self) -> &'static str {
		"select"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let ids = ctx.aria_ids(self.attrs.id(), "select");
		let state = open_state(self.open);

		let value = match self.selected_option() {
			Some(option) => PageElement::new("span")
				.class(&ctx.classes("select", "value", &[]))
				.data("select_target", "value")
				.child(option.label.clone()),
			None => PageElement::new("span")
				.class(&ctx.classes("select", "value", &[]))
				.class(&ctx.classes("select", "placeholder", &[]))
				.data("select_target", "value")
				.data("placeholder", "")
				.child(self.placeholder.clone()),
		};

		let trigger = PageElement::new("button")
			.attr("type", "button")
			.attr("role", "combobox")
			.attr("id", ids.trigger())
			.aria("controls", ids.content())
			.aria("expanded", self.open)
			.aria("haspopup", "listbox")
			.aria("autocomplete", "none")
			.aria_opt("required", self.required.then_some(true))
			.data("state", state)
			.class(&ctx.classes("select", "trigger", &[]))
			.bool_attr("disabled", self.disabled)
			.data("select_target", "trigger")
			.data("action", "click->select#toggle keydown->select#keydown")
			.child(value)
			.child(icons::chevron_down().class(&ctx.classes("select", "icon", &[])));

		let mut option_index = 0usize;
		let rows = self.entries.iter().map(|entry| match entry {
			SelectEntry::Option(option) => {
				let selected = self.selected.as_deref() == Some(option.value.as_str());
				let id = ids.part(&format!("option-{option_index}"));
				option_index += 1;
				let mut indicator = PageElement::new("span")
					.class(&ctx.classes("select", "item_indicator", &[]));
				if selected {
					indicator = indicator.child(icons::check());
				}
				PageElement::new("div")
					.attr("role", "option")
					.attr("id", id)
					.aria("selected", selected)
					.aria_opt("disabled", option.disabled.then_some(true))
					.data("state", checked_state(selected))
					.data("value", option.value.as_str())
					.data_opt("disabled", option.disabled.then_some(""))
					.attr("tabindex", "-1")
					.class(&ctx.classes("select", "item", &[]))
					.data("select_target", "item")
					.data("action", "click->select#select")
					.child(indicator)
					.child(PageElement::new("span").child(option.label.clone()))
			}
			SelectEntry::Label(label) => PageElement::new("div")
				.attr("role", "presentation")
				.class(&ctx.classes("select", "label", &[]))
				.child(label.clone()),
			SelectEntry::Separator => PageElement::new("div")
				.attr("role", "separator")
				.aria("hidden", true)
				.class(&ctx.classes("select", "separator", &[])),
		});
		let rows: Vec<PageElement> = rows.collect();

		let mut content = PageElement::new("div")
			.attr("id", ids.content())
			.attr("role", "listbox")
			.aria("labelledby", ids.trigger())
			.attr("tabindex", "-1")
			.data("state", state)
			.class(&ctx.classes("select", "content", &[]))
			.data("select_target", "content")
			.children(rows);
		if !self.open {
			content = content.attr("style", HIDDEN_STYLE);
		}

		let hidden = self.name.as_deref().map(|name| {
			PageElement::new("input")
				.attr("type", "hidden")
				.attr("name", name)
				.attr("value", self.selected.as_deref().unwrap_or_default())
				.bool_attr("disabled", self.disabled)
				.data("select_target", "input")
		});

		Ok(PageElement::new("div")
			.attr("id", ids.seed())
			.class(&ctx.classes("select", "root", &[]))
			.data("controller", "select")
			.data("select_open_value", flag(self.open))
			.data("select_value_value", self.selected.as_deref().unwrap_or_default())
			.attrs(&self.attrs)
			.child(trigger)
			.child(content)
			.child(hidden)
			.into_page())
	}
}
