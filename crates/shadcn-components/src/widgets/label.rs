//! Label

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};

/// A `<label>`, optionally bound to a control with `for`.
#[derive(Debug, Clone)]
pub struct Label {
	content: Page,
	for_id: Option<String>,
	attrs: Attributes,
}

impl Label {
	/// Creates a label.
	pub fn new(content: impl IntoPage) -> Self {
		Self {
			content: content.into_page(),
			for_id: None,
			attrs: Attributes::new(),
		}
	}

	/// Binds the label to the control with this id.
	pub fn for_id(mut self, id: impl Into<String>) -> Self {
		self.for_id = Some(id.into());
		self
	}
}

root_attrs!(Label);

impl Component for Label {
	fn name(&self) -> &'static str {
		"label"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		Ok(PageElement::new("label")
			.attr_opt("for", self.for_id.as_deref())
			.class(&ctx.classes("label", "root", &[]))
			.attrs(&self.attrs)
			.child(self.content.clone())
			.into_page())
	}
}
