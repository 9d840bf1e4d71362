//! Tabs
//!
//! A `tablist` of triggers, each controlling one `tabpanel`. Tab `i` of a
//! widget seeded `tabs-1` wires `tabs-1-trigger-{i}` to
//! `tabs-1-content-{i}`.

use shadcn_core::{Attributes, ComponentError, IntoPage, Page, PageElement, Result};

use crate::component::{Component, Orientation, RenderContext};

use super::HIDDEN_STYLE;

fn active_state(active: bool) -> &'static str {
	if active { "active" } else { "inactive" }
}

/// One trigger and panel of [`Tabs`].
#[derive(Debug, Clone)]
pub struct Tab {
	value: String,
	label: Page,
	content: Vec<Page>,
	disabled: bool,
}

impl Tab {
	/// Creates a tab identified by `value`.
	pub fn new(value: impl Into<String>, label: impl IntoPage) -> Self {
		Self {
			value: value.into(),
			label: label.into_page(),
			content: Vec::new(),
			disabled: false,
		}
	}

	/// Appends panel content.
	pub fn content(mut self, content: impl IntoPage) -> Self {
		self.content.push(content.into_page());
		self
	}

	/// Disables the trigger.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

/// A tabbed set of panels.
///
/// Behavior hooks: controller `tabs`, value `data-tabs-selected-value`,
/// targets `trigger` and `content`, action `click->tabs#select`.
#[derive(Debug, Clone)]
pub struct Tabs {
	tabs: Vec<Tab>,
	selected: Option<String>,
	orientation: Orientation,
	attrs: Attributes,
}

impl Default for Tabs {
	fn default() -> Self {
		Self::new()
	}
}

impl Tabs {
	/// Creates an empty horizontal tab set.
	pub fn new() -> Self {
		Self {
			tabs: Vec::new(),
			selected: None,
			orientation: Orientation::Horizontal,
			attrs: Attributes::new(),
		}
	}

	/// Adds a tab.
	pub fn tab(mut self, tab: Tab) -> Self {
		self.tabs.push(tab);
		self
	}

	/// Selects the tab with this value; the first tab is selected otherwise.
	pub fn selected(mut self, value: impl Into<String>) -> Self {
		self.selected = Some(value.into());
		self
	}

	/// Sets the list orientation.
	pub fn orientation(mut self, orientation: Orientation) -> Self {
		self.orientation = orientation;
		self
	}

	fn selected_value(&self) -> Option<&str> {
		let requested = self
			.selected
			.as_deref()
			.filter(|value| self.tabs.iter().any(|tab| tab.value == *value));
		requested.or_else(|| self.tabs.first().map(|tab| tab.value.as_str()))
	}
}

root_attrs!(Tabs);

impl Component for Tabs {
	fn name(&self) -> &'static str {
		"tabs"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		if self.tabs.is_empty() {
			return Err(ComponentError::MissingProperty(
				"tabs: at least one tab is required".to_string(),
			));
		}
		let ids = ctx.aria_ids(self.attrs.id(), "tabs");
		let selected = self.selected_value();
		let orientation = self.orientation.as_str();

		let mut triggers = Vec::with_capacity(self.tabs.len());
		let mut panels = Vec::with_capacity(self.tabs.len());
		for (index, tab) in self.tabs.iter().enumerate() {
			let active = selected == Some(tab.value.as_str());
			let trigger_id = ids.part(&format!("trigger-{index}"));
			let content_id = ids.part(&format!("content-{index}"));

			triggers.push(
				PageElement::new("button")
					.attr("type", "button")
					.attr("role", "tab")
					.attr("id", trigger_id.as_str())
					.aria("selected", active)
					.aria("controls", content_id.as_str())
					.data("state", active_state(active))
					.data("value", tab.value.as_str())
					.attr("tabindex", if active { "0" } else { "-1" })
					.class(&ctx.classes("tabs", "trigger", &[]))
					.bool_attr("disabled", tab.disabled)
					.data("tabs_target", "trigger")
					.data("action", "click->tabs#select keydown->tabs#keydown")
					.child(tab.label.clone()),
			);

			let mut panel = PageElement::new("div")
				.attr("role", "tabpanel")
				.attr("id", content_id)
				.aria("labelledby", trigger_id)
				.data("state", active_state(active))
				.data("value", tab.value.as_str())
				.attr("tabindex", "0")
				.class(&ctx.classes("tabs", "content", &[]))
				.data("tabs_target", "content")
				.children(tab.content.iter().cloned());
			if !active {
				panel = panel.attr("style", HIDDEN_STYLE);
			}
			panels.push(panel);
		}

		let list = PageElement::new("div")
			.attr("role", "tablist")
			.aria("orientation", orientation)
			.class(&ctx.classes("tabs", "list", &[]))
			.children(triggers);

		Ok(PageElement::new("div")
			.attr("id", ids.seed())
			.data("orientation", orientation)
			.class(&ctx.classes("tabs", "root", &[]))
			.data("controller", "tabs")
			.data("tabs_selected_value", selected.unwrap_or_default())
			.attrs(&self.attrs)
			.child(list)
			.children(panels)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn settings() -> Tabs {
		Tabs::new()
			.tab(Tab::new("account", "Account").content("Account settings"))
			.tab(Tab::new("password", "Password").content("Change password"))
	}

	#[rstest]
	fn test_first_tab_selected_by_default(settings: Tabs) {
		let html = settings.render(&RenderContext::sequential()).unwrap();
		assert!(html.contains("data-tabs-selected-value=\"account\""));
		assert!(html.contains(
			"role=\"tab\" id=\"tabs-1-trigger-0\" aria-selected=\"true\" aria-controls=\"tabs-1-content-0\""
		));
		assert!(html.contains(
			"<div role=\"tabpanel\" id=\"tabs-1-content-1\" aria-labelledby=\"tabs-1-trigger-1\" data-state=\"inactive\""
		));
		assert_eq!(html.matches("display:none").count(), 1);
	}

	#[rstest]
	fn test_selected_tab(settings: Tabs) {
		let html = settings
			.selected("password")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("id=\"tabs-1-trigger-1\" aria-selected=\"true\""));
		assert!(html.contains("id=\"tabs-1-trigger-0\" aria-selected=\"false\""));
	}

	#[rstest]
	fn test_unknown_selection_falls_back_to_first(settings: Tabs) {
		let html = settings
			.selected("billing")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("data-tabs-selected-value=\"account\""));
	}

	#[rstest]
	fn test_empty_tabs_is_an_error() {
		let err = Tabs::new().render(&RenderContext::sequential()).unwrap_err();
		assert!(matches!(err, ComponentError::MissingProperty(_)));
	}
}
