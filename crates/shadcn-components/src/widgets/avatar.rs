//! Avatar

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};

/// A round user image with a text fallback.
///
/// The fallback is always rendered; the behavior layer hides it once the
/// image loads and removes the image if it fails.
///
/// Behavior hooks: controller `avatar`, targets `image` and `fallback`.
#[derive(Debug, Clone, Default)]
pub struct Avatar {
	src: Option<String>,
	alt: String,
	fallback: Option<String>,
	attrs: Attributes,
}

impl Avatar {
	/// Creates an avatar without image.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the image source and alternative text.
	pub fn image(mut self, src: impl Into<String>, alt: impl Into<String>) -> Self {
		self.src = Some(src.into());
		self.alt = alt.into();
		self
	}

	/// Sets the fallback text, typically initials.
	pub fn fallback(mut self, fallback: impl Into<String>) -> Self {
		self.fallback = Some(fallback.into());
		self
	}
}

root_attrs!(Avatar);

impl Component for Avatar {
	fn name(&self) -> &'static str {
		"avatar"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let image = self.src.as_deref().map(|src| {
			PageElement::new("img")
				.attr("src", src)
				.attr("alt", self.alt.as_str())
				.class(&ctx.classes("avatar", "image", &[]))
				.data("avatar_target", "image")
				.data("action", "load->avatar#loaded error->avatar#failed")
		});
		let fallback = self.fallback.as_deref().map(|text| {
			PageElement::new("span")
				.class(&ctx.classes("avatar", "fallback", &[]))
				.data("avatar_target", "fallback")
				.child(text.to_string())
		});

		Ok(PageElement::new("span")
			.class(&ctx.classes("avatar", "root", &[]))
			.data("controller", "avatar")
			.attrs(&self.attrs)
			.child(image)
			.child(fallback)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_image_and_fallback() {
		let html = Avatar::new()
			.image("/me.png", "@me")
			.fallback("ME")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("<img src=\"/me.png\" alt=\"@me\""));
		assert!(html.contains(" />"));
		assert!(html.contains("data-avatar-target=\"fallback\">ME</span>"));
	}

	#[rstest]
	fn test_fallback_only() {
		let html = Avatar::new()
			.fallback("CN")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(!html.contains("<img"));
		assert!(html.contains(">CN</span>"));
	}
}
