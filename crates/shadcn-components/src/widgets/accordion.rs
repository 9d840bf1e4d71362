//! Accordion
//!
//! A vertical stack of headings, each toggling its own region. Item `i` of
//! an accordion seeded `acc` wires `acc-item-{i}-trigger` to
//! `acc-item-{i}-content`.

use shadcn_core::{AriaIds, Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext, style_key};
use crate::icons;

use super::{HIDDEN_STYLE, flag, open_state};

style_key! {
	/// How many items may be open at once
	pub enum AccordionType {
		/// At most one; opening an item closes the others
		Single => "single",
		/// Any number
		Multiple => "multiple",
	}
	default = Single;
}

/// One heading and region of an [`Accordion`].
#[derive(Debug, Clone)]
pub struct AccordionItem {
	value: String,
	title: Page,
	content: Vec<Page>,
	open: bool,
	disabled: bool,
}

impl AccordionItem {
	/// Creates a closed item identified by `value`.
	pub fn new(value: impl Into<String>, title: impl IntoPage) -> Self {
		Self {
			value: value.into(),
			title: title.into_page(),
			content: Vec::new(),
			open: false,
			disabled: false,
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

	/// Disables the item's trigger.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	fn to_element(&self, ctx: &RenderContext, ids: &AriaIds, open: bool) -> PageElement {
		let state = open_state(open);

		let trigger = PageElement::new("button")
			.attr("type", "button")
			.attr("id", ids.trigger())
			.aria("expanded", open)
			.aria("controls", ids.content())
			.data("state", state)
			.class(&ctx.classes("accordion", "trigger", &[]))
			.bool_attr("disabled", self.disabled)
			.data("accordion_target", "trigger")
			.data("action", "click->accordion#toggle keydown->accordion#keydown")
			.child(self.title.clone())
			.child(icons::chevron_down().class(&ctx.classes("accordion", "icon", &[])));

		let mut region = PageElement::new("div")
			.attr("id", ids.content())
			.attr("role", "region")
			.aria("labelledby", ids.trigger())
			.data("state", state)
			.class(&ctx.classes("accordion", "content", &[]))
			.data("accordion_target", "content")
			.child(
				PageElement::new("div")
					.class(&ctx.classes("accordion", "content_inner", &[]))
					.children(self.content.iter().cloned()),
			);
		if !open {
			region = region.attr("style", HIDDEN_STYLE);
		}

		PageElement::new("div")
			.data("state", state)
			.data("value", self.value.as_str())
			.data_opt("disabled", self.disabled.then_some(""))
			.class(&ctx.classes("accordion", "item", &[]))
			.data("accordion_target", "item")
			.child(
				PageElement::new("h3")
					.data("state", state)
					.class(&ctx.classes("accordion", "header", &[]))
					.child(trigger),
			)
			.child(region)
	}
}

/// A set of collapsible sections.
///
/// Behavior hooks: controller `accordion`, values
/// `data-accordion-type-value` and `data-accordion-collapsible-value`,
/// targets `item`, `trigger` and `content`.
#[derive(Debug, Clone)]
pub struct Accordion {
	accordion_type: AccordionType,
	collapsible: bool,
	items: Vec<AccordionItem>,
	attrs: Attributes,
}

impl Default for Accordion {
	fn default() -> Self {
		Self::new()
	}
}

impl Accordion {
	/// Creates an empty single-open accordion.
	pub fn new() -> Self {
		Self {
			accordion_type: AccordionType::default(),
			collapsible: true,
			items: Vec::new(),
			attrs: Attributes::new(),
		}
	}

	/// Sets how many items may be open at once.
	pub fn accordion_type(mut self, accordion_type: AccordionType) -> Self {
		self.accordion_type = accordion_type;
		self
	}

	/// Whether the open item of a single accordion may be closed again.
	pub fn collapsible(mut self, collapsible: bool) -> Self {
		self.collapsible = collapsible;
		self
	}

	/// Adds an item.
	pub fn item(mut self, item: AccordionItem) -> Self {
		self.items.push(item);
		self
	}

	/// Adds items.
	pub fn items(mut self, items: impl IntoIterator<Item = AccordionItem>) -> Self {
		self.items.extend(items);
		self
	}
}

root_attrs!(Accordion);

impl Component for Accordion {
	fn name(&self) -> &'static str {
		"accordion"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let ids = ctx.aria_ids(self.attrs.id(), "accordion");

		// a single accordion shows only its first open item
		let mut seen_open = false;
		let items = self.items.iter().enumerate().map(|(index, item)| {
			let open = match self.accordion_type {
				AccordionType::Single => item.open && !std::mem::replace(&mut seen_open, item.open),
				AccordionType::Multiple => item.open,
			};
			let item_ids = AriaIds::new(ids.part(&format!("item-{index}")));
			item.to_element(ctx, &item_ids, open)
		});
		let items: Vec<PageElement> = items.collect();

		Ok(PageElement::new("div")
			.attr("id", ids.seed())
			.data("orientation", "vertical")
			.class(&ctx.classes("accordion", "root", &[]))
			.data("controller", "accordion")
			.data("accordion_type_value", self.accordion_type.as_str())
			.data("accordion_collapsible_value", flag(self.collapsible))
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
	fn faq() -> Vec<AccordionItem> {
		vec![
			AccordionItem::new("a", "Is it accessible?").content("Yes.").open(true),
			AccordionItem::new("b", "Is it styled?").content("Yes.").open(true),
			AccordionItem::new("c", "Is it animated?").content("Yes."),
		]
	}

	#[rstest]
	fn test_item_wiring(faq: Vec<AccordionItem>) {
		let html = Accordion::new()
			.items(faq)
			.render(&RenderContext::sequential())
			.unwrap();
		for index in 0..3 {
			assert!(html.contains(&format!(
				"id=\"accordion-1-item-{index}-trigger\" aria-expanded"
			)));
			assert!(html.contains(&format!(
				"aria-controls=\"accordion-1-item-{index}-content\""
			)));
			assert!(html.contains(&format!(
				"<div id=\"accordion-1-item-{index}-content\" role=\"region\" aria-labelledby=\"accordion-1-item-{index}-trigger\""
			)));
		}
	}

	#[rstest]
	#[case(AccordionType::Single, 1)]
	#[case(AccordionType::Multiple, 2)]
	fn test_open_items_per_type(
		faq: Vec<AccordionItem>,
		#[case] accordion_type: AccordionType,
		#[case] expected: usize,
	) {
		let html = Accordion::new()
			.accordion_type(accordion_type)
			.items(faq)
			.render(&RenderContext::sequential())
			.unwrap();
		assert_eq!(html.matches("aria-expanded=\"true\"").count(), expected);
		assert!(html.contains(&format!(
			"data-accordion-type-value=\"{}\"",
			accordion_type.as_str()
		)));
	}
}
