//! Card

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};

/// A bordered container with optional header, body and footer.
///
/// The header renders only when a title or description is set; body and
/// footer render only when they have content.
#[derive(Debug, Clone, Default)]
pub struct Card {
	title: Option<Page>,
	description: Option<Page>,
	content: Vec<Page>,
	footer: Vec<Page>,
	attrs: Attributes,
}

impl Card {
	/// Creates an empty card.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the heading.
	pub fn title(mut self, title: impl IntoPage) -> Self {
		self.title = Some(title.into_page());
		self
	}

	/// Sets the text under the heading.
	pub fn description(mut self, description: impl IntoPage) -> Self {
		self.description = Some(description.into_page());
		self
	}

	/// Appends body content.
	pub fn content(mut self, content: impl IntoPage) -> Self {
		self.content.push(content.into_page());
		self
	}

	/// Appends footer content.
	pub fn footer(mut self, footer: impl IntoPage) -> Self {
		self.footer.push(footer.into_page());
		self
	}
}

root_attrs!(Card);

impl Component for Card {
	fn name(&self) -> &'static str {
		"card"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let header = (self.title.is_some() || self.description.is_some()).then(|| {
			PageElement::new("div")
				.class(&ctx.classes("card", "header", &[]))
				.child(self.title.clone().map(|title| {
					PageElement::new("h3")
						.class(&ctx.classes("card", "title", &[]))
						.child(title)
				}))
				.child(self.description.clone().map(|description| {
					PageElement::new("p")
						.class(&ctx.classes("card", "description", &[]))
						.child(description)
				}))
		});
		let body = (!self.content.is_empty()).then(|| {
			PageElement::new("div")
				.class(&ctx.classes("card", "content", &[]))
				.children(self.content.iter().cloned())
		});
		let footer = (!self.footer.is_empty()).then(|| {
			PageElement::new("div")
				.class(&ctx.classes("card", "footer", &[]))
				.children(self.footer.iter().cloned())
		});

		Ok(PageElement::new("div")
			.class(&ctx.classes("card", "root", &[]))
			.attrs(&self.attrs)
			.child(header)
			.child(body)
			.child(footer)
			.into_page())
	}
}
