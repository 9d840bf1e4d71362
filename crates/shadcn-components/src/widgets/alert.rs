//! Alert callout

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext, style_key};

style_key! {
	/// Alert look
	pub enum AlertVariant {
		/// Neutral
		Default => "default",
		/// Error
		Destructive => "destructive",
	}
	default = Default;
}

/// A callout announced to assistive technology (`role="alert"`).
#[derive(Debug, Clone, Default)]
pub struct Alert {
	variant: AlertVariant,
	icon: Option<Page>,
	title: Option<Page>,
	description: Option<Page>,
	attrs: Attributes,
}

impl Alert {
	/// Creates an empty neutral alert.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the variant.
	pub fn variant(mut self, variant: AlertVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Sets a leading icon.
	pub fn icon(mut self, icon: impl IntoPage) -> Self {
		self.icon = Some(icon.into_page());
		self
	}

	/// Sets the heading.
	pub fn title(mut self, title: impl IntoPage) -> Self {
		self.title = Some(title.into_page());
		self
	}

	/// Sets the body text.
	pub fn description(mut self, description: impl IntoPage) -> Self {
		self.description = Some(description.into_page());
		self
	}
}

root_attrs!(Alert);

impl Component for Alert {
	fn name(&self) -> &'static str {
		"alert"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		Ok(PageElement::new("div")
			.attr("role", "alert")
			.class(&ctx.classes("alert", "root", &[("variant", self.variant.as_str())]))
			.attrs(&self.attrs)
			.child(self.icon.clone())
			.child(self.title.clone().map(|title| {
				PageElement::new("h5")
					.class(&ctx.classes("alert", "title", &[]))
					.child(title)
			}))
			.child(self.description.clone().map(|description| {
				PageElement::new("div")
					.class(&ctx.classes("alert", "description", &[]))
					.child(description)
			}))
			.into_page())
	}
}
