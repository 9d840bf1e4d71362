//! Switch

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};

use super::{checked_state, flag};

/// An on/off switch.
///
/// Behavior hooks: controller `switch`, action `click->switch#toggle`,
/// value `data-switch-checked-value`, targets `thumb` and `input`.
#[derive(Debug, Clone)]
pub struct Switch {
	name: Option<String>,
	checked: bool,
	value: String,
	unchecked_value: String,
	disabled: bool,
	attrs: Attributes,
}

impl Default for Switch {
	fn default() -> Self {
		Self::new()
	}
}

impl Switch {
	/// Creates an off switch submitting `1`/`0`.
	pub fn new() -> Self {
		Self {
			name: None,
			checked: false,
			value: "1".to_string(),
			unchecked_value: "0".to_string(),
			disabled: false,
			attrs: Attributes::new(),
		}
	}

	/// Sets the form field name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the on state.
	pub fn checked(mut self, checked: bool) -> Self {
		self.checked = checked;
		self
	}

	/// Value submitted when on.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = value.into();
		self
	}

	/// Value submitted when off.
	pub fn unchecked_value(mut self, value: impl Into<String>) -> Self {
		self.unchecked_value = value.into();
		self
	}

	/// Disables the switch.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

root_attrs!(Switch);

impl Component for Switch {
	fn name(&self) -> &'static str {
		"switch"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let id = ctx.id(self.attrs.id(), "switch");
		let state = checked_state(self.checked);

		let hidden = self.name.as_deref().map(|name| {
			let value = if self.checked {
				self.value.as_str()
			} else {
				self.unchecked_value.as_str()
			};
			PageElement::new("input")
				.attr("type", "hidden")
				.attr("name", name)
				.attr("value", value)
				.bool_attr("disabled", self.disabled)
				.data("switch_target", "input")
		});

		Ok(PageElement::new("button")
			.attr("type", "button")
			.attr("role", "switch")
			.attr("id", id)
			.aria("checked", self.checked)
			.data("state", state)
			.attr("value", self.value.as_str())
			.class(&ctx.classes("switch", "root", &[]))
			.bool_attr("disabled", self.disabled)
			.data("controller", "switch")
			.data("action", "click->switch#toggle")
			.data("switch_checked_value", flag(self.checked))
			.data("switch_checked_input_value", self.value.as_str())
			.data("switch_unchecked_input_value", self.unchecked_value.as_str())
			.attrs(&self.attrs)
			.child(
				PageElement::new("span")
					.class(&ctx.classes("switch", "thumb", &[]))
					.data("state", state)
					.data("switch_target", "thumb"),
			)
			.child(hidden)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(false, "unchecked", "0")]
	#[case(true, "checked", "1")]
	fn test_switch_state(#[case] checked: bool, #[case] state: &str, #[case] submitted: &str) {
		let html = Switch::new()
			.name("notifications")
			.checked(checked)
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("role=\"switch\""));
		assert!(html.contains(&format!("aria-checked=\"{checked}\"")));
		assert_eq!(html.matches(&format!("data-state=\"{state}\"")).count(), 2);
		assert!(html.contains(&format!("name=\"notifications\" value=\"{submitted}\"")));
		assert!(html.contains("data-controller=\"switch\""));
	}
}
