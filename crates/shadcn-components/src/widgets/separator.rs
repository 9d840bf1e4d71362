//! Separator

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, Orientation, RenderContext};

/// A horizontal or vertical rule.
///
/// Decorative separators (the default) are hidden from assistive technology
/// with `role="none"`; semantic ones carry `role="separator"` and
/// `aria-orientation`.
#[derive(Debug, Clone)]
pub struct Separator {
	orientation: Orientation,
	decorative: bool,
	attrs: Attributes,
}

impl Default for Separator {
	fn default() -> Self {
		Self::new()
	}
}

impl Separator {
	/// Creates a decorative horizontal separator.
	pub fn new() -> Self {
		Self {
			orientation: Orientation::Horizontal,
			decorative: true,
			attrs: Attributes::new(),
		}
	}

	/// Sets the orientation.
	pub fn orientation(mut self, orientation: Orientation) -> Self {
		self.orientation = orientation;
		self
	}

	/// Whether the separator is purely visual.
	pub fn decorative(mut self, decorative: bool) -> Self {
		self.decorative = decorative;
		self
	}
}

root_attrs!(Separator);

impl Component for Separator {
	fn name(&self) -> &'static str {
		"separator"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let orientation = self.orientation.as_str();
		let element = if self.decorative {
			PageElement::new("div").attr("role", "none")
		} else {
			PageElement::new("div")
				.attr("role", "separator")
				.aria("orientation", orientation)
		};
		Ok(element
			.data("orientation", orientation)
			.class(&ctx.classes("separator", "root", &[("orientation", orientation)]))
			.attrs(&self.attrs)
			.into_page())
	}
}
