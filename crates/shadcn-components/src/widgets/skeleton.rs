//! Loading placeholder

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};

/// A pulsing block standing in for content that is still loading.
///
/// Size it with caller classes, e.g. `.class("h-4 w-[250px]")`.
#[derive(Debug, Clone, Default)]
pub struct Skeleton {
	attrs: Attributes,
}

impl Skeleton {
	/// Creates a skeleton block.
	pub fn new() -> Self {
		Self::default()
	}
}

root_attrs!(Skeleton);

impl Component for Skeleton {
	fn name(&self) -> &'static str {
		"skeleton"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		Ok(PageElement::new("div")
			.aria("hidden", true)
			.class(&ctx.classes("skeleton", "root", &[]))
			.attrs(&self.attrs)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_caller_classes_override_radius() {
		let html = Skeleton::new()
			.class("h-12 w-12 rounded-full")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("rounded-full"));
		assert!(!html.contains("rounded-md"));
		assert!(html.contains("animate-pulse"));
	}
}
