//! Badge

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext, style_key};

style_key! {
	/// Badge colors
	pub enum BadgeVariant {
		/// Primary
		Default => "default",
		/// Muted
		Secondary => "secondary",
		/// Error
		Destructive => "destructive",
		/// Bordered, no fill
		Outline => "outline",
	}
	default = Default;
}

/// A small status label.
#[derive(Debug, Clone)]
pub struct Badge {
	content: Page,
	variant: BadgeVariant,
	attrs: Attributes,
}

impl Badge {
	/// Creates a badge.
	pub fn new(content: impl IntoPage) -> Self {
		Self {
			content: content.into_page(),
			variant: BadgeVariant::default(),
			attrs: Attributes::new(),
		}
	}

	/// Sets the variant.
	pub fn variant(mut self, variant: BadgeVariant) -> Self {
		self.variant = variant;
		self
	}
}

root_attrs!(Badge);

impl Component for Badge {
	fn name(&self) -> &'static str {
		"badge"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		Ok(PageElement::new("div")
			.class(&ctx.classes("badge", "root", &[("variant", self.variant.as_str())]))
			.attrs(&self.attrs)
			.child(self.content.clone())
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(BadgeVariant::Default, "bg-primary")]
	#[case(BadgeVariant::Secondary, "bg-secondary")]
	#[case(BadgeVariant::Destructive, "bg-destructive")]
	#[case(BadgeVariant::Outline, "text-foreground")]
	fn test_badge_variants(#[case] variant: BadgeVariant, #[case] expected: &str) {
		let html = Badge::new("New")
			.variant(variant)
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains(expected));
		assert!(html.ends_with(">New</div>"));
	}
}
