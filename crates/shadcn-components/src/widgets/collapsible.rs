//! Collapsible region

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{ButtonSize, ButtonVariant, Component, RenderContext, TriggerSlot};

use super::{HIDDEN_STYLE, flag, open_state};

/// A region shown and hidden by a trigger.
///
/// Behavior hooks: controller `collapsible`, value
/// `data-collapsible-open-value`, targets `trigger` and `content`, action
/// `click->collapsible#toggle`.
#[derive(Debug, Clone)]
pub struct Collapsible {
	trigger: TriggerSlot,
	content: Vec<Page>,
	open: bool,
	disabled: bool,
	attrs: Attributes,
}

impl Collapsible {
	/// Creates a closed collapsible.
	pub fn new(trigger: impl Into<TriggerSlot>) -> Self {
		Self {
			trigger: trigger.into(),
			content: Vec::new(),
			open: false,
			disabled: false,
			attrs: Attributes::new(),
		}
	}

	/// Appends region content.
	pub fn content(mut self, content: impl IntoPage) -> Self {
		self.content.push(content.into_page());
		self
	}

	/// Initial open state.
	pub fn open(mut self, open: bool) -> Self {
		self.open = open;
		self
	}

	/// Disables the trigger.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

root_attrs!(Collapsible);

impl Component for Collapsible {
	fn name(&self) -> &'static str {
		"collapsible"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let ids = ctx.aria_ids(self.attrs.id(), "collapsible");
		let state = open_state(self.open);

		let computed = Attributes::new()
			.with("id", ids.trigger())
			.aria("expanded", self.open)
			.aria("controls", ids.content())
			.data("state", state)
			.with("disabled", self.disabled)
			.data("collapsible_target", "trigger")
			.data("action", "click->collapsible#toggle");
		let fallback = PageElement::new("button")
			.attr("type", "button")
			.class(&ctx.classes(
				"button",
				"root",
				&[
					("variant", ButtonVariant::Ghost.as_str()),
					("size", ButtonSize::Sm.as_str()),
				],
			))
			.class(&ctx.classes("collapsible", "trigger", &[]));
		let trigger = self.trigger.build(fallback, &computed);

		let mut content = PageElement::new("div")
			.attr("id", ids.content())
			.data("state", state)
			.class(&ctx.classes("collapsible", "content", &[]))
			.data("collapsible_target", "content")
			.children(self.content.iter().cloned());
		if !self.open {
			content = content.attr("style", HIDDEN_STYLE);
		}

		Ok(PageElement::new("div")
			.attr("id", ids.seed())
			.data("state", state)
			.class(&ctx.classes("collapsible", "root", &[]))
			.data("controller", "collapsible")
			.data("collapsible_open_value", flag(self.open))
			.attrs(&self.attrs)
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
	#[case(false, "closed")]
	#[case(true, "open")]
	fn test_collapsible_state(#[case] open: bool, #[case] state: &str) {
		let html = Collapsible::new("Toggle")
			.content("Hidden text")
			.open(open)
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains(&format!(
			"id=\"collapsible-1-trigger\" aria-expanded=\"{open}\" aria-controls=\"collapsible-1-content\" data-state=\"{state}\""
		)));
		assert_eq!(html.contains("display:none"), !open);
	}

	#[rstest]
	fn test_explicit_id_seeds_parts() {
		let html = Collapsible::new("Toggle")
			.id("faq")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("<div id=\"faq\""));
		assert!(html.contains("aria-controls=\"faq-content\""));
		assert!(html.contains("<div id=\"faq-content\""));
	}
}
