//! Button, loading button and button-styled link

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{ButtonSize, ButtonVariant, Component, RenderContext};
use crate::icons;

use super::{HIDDEN_STYLE, flag};

fn button_classes(ctx: &RenderContext, variant: ButtonVariant, size: ButtonSize) -> String {
	ctx.classes(
		"button",
		"root",
		&[("variant", variant.as_str()), ("size", size.as_str())],
	)
}

/// A `<button>`.
///
/// # Example
///
/// ```
/// use shadcn_components::{Button, ButtonVariant, Component, RenderContext};
///
/// let html = Button::new("Save")
///     .variant(ButtonVariant::Outline)
///     .disabled(true)
///     .render(&RenderContext::default())
///     .unwrap();
/// assert!(html.starts_with("<button type=\"button\""));
/// assert!(html.contains(" disabled>"));
/// ```
#[derive(Debug, Clone)]
pub struct Button {
	content: Page,
	variant: ButtonVariant,
	size: ButtonSize,
	button_type: String,
	disabled: bool,
	as_child: Option<PageElement>,
	attrs: Attributes,
}

impl Button {
	/// Creates a `type="button"` button.
	pub fn new(content: impl IntoPage) -> Self {
		Self {
			content: content.into_page(),
			variant: ButtonVariant::default(),
			size: ButtonSize::default(),
			button_type: "button".to_string(),
			disabled: false,
			as_child: None,
			attrs: Attributes::new(),
		}
	}

	/// Sets the visual variant.
	pub fn variant(mut self, variant: ButtonVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Sets the size.
	pub fn size(mut self, size: ButtonSize) -> Self {
		self.size = size;
		self
	}

	/// Sets the `type` attribute (`button`, `submit`, `reset`).
	pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
		self.button_type = button_type.into();
		self
	}

	/// Disables the button.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Renders the button styling onto a caller element instead of a
	/// `<button>`; the caller's children replace the content.
	pub fn as_child(mut self, element: PageElement) -> Self {
		self.as_child = Some(element);
		self
	}
}

root_attrs!(Button);

impl Component for Button {
	fn name(&self) -> &'static str {
		"button"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let classes = button_classes(ctx, self.variant, self.size);

		if let Some(element) = &self.as_child {
			let computed = Attributes::new()
				.class(&classes)
				.with_opt("aria-disabled", self.disabled.then_some("true"))
				.merge(&self.attrs);
			let mut element = element.clone();
			element.merge_attrs(&computed);
			return Ok(element.into_page());
		}

		Ok(PageElement::new("button")
			.attr("type", self.button_type.as_str())
			.class(&classes)
			.bool_attr("disabled", self.disabled)
			.attrs(&self.attrs)
			.child(self.content.clone())
			.into_page())
	}
}

/// A button that shows a spinner while its action is in flight.
///
/// Behavior hooks: controller `loading-button`, value
/// `data-loading-button-loading-value`, targets `spinner` and `label`.
#[derive(Debug, Clone)]
pub struct LoadingButton {
	label: String,
	loading_label: Option<String>,
	loading: bool,
	variant: ButtonVariant,
	size: ButtonSize,
	button_type: String,
	disabled: bool,
	attrs: Attributes,
}

impl LoadingButton {
	/// Creates a `type="submit"` loading button.
	pub fn new(label: impl Into<String>) -> Self {
		Self {
			label: label.into(),
			loading_label: None,
			loading: false,
			variant: ButtonVariant::default(),
			size: ButtonSize::default(),
			button_type: "submit".to_string(),
			disabled: false,
			attrs: Attributes::new(),
		}
	}

	/// Label shown while loading.
	pub fn loading_label(mut self, label: impl Into<String>) -> Self {
		self.loading_label = Some(label.into());
		self
	}

	/// Initial loading state.
	pub fn loading(mut self, loading: bool) -> Self {
		self.loading = loading;
		self
	}

	/// Sets the visual variant.
	pub fn variant(mut self, variant: ButtonVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Sets the size.
	pub fn size(mut self, size: ButtonSize) -> Self {
		self.size = size;
		self
	}

	/// Sets the `type` attribute.
	pub fn button_type(mut self, button_type: impl Into<String>) -> Self {
		self.button_type = button_type.into();
		self
	}

	/// Disables the button.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

root_attrs!(LoadingButton);

impl Component for LoadingButton {
	fn name(&self) -> &'static str {
		"loading_button"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let mut spinner = icons::spinner()
			.class(&ctx.classes("button", "spinner", &[]))
			.data("loading_button_target", "spinner");
		if !self.loading {
			spinner = spinner.attr("style", HIDDEN_STYLE);
		}

		let label = match (&self.loading_label, self.loading) {
			(Some(loading_label), true) => loading_label.clone(),
			_ => self.label.clone(),
		};

		Ok(PageElement::new("button")
			.attr("type", self.button_type.as_str())
			.class(&button_classes(ctx, self.variant, self.size))
			.bool_attr("disabled", self.disabled || self.loading)
			.aria("busy", self.loading)
			.data("controller", "loading-button")
			.data("action", "click->loading-button#start")
			.data("loading_button_loading_value", flag(self.loading))
			.data("loading_button_label_value", self.label.as_str())
			.data_opt("loading_button_loading_label_value", self.loading_label.as_deref())
			.attrs(&self.attrs)
			.child(spinner)
			.child(
				PageElement::new("span")
					.data("loading_button_target", "label")
					.child(label),
			)
			.into_page())
	}
}

/// An `<a>` styled as a button; defaults to the `link` variant.
#[derive(Debug, Clone)]
pub struct Link {
	href: String,
	content: Page,
	variant: ButtonVariant,
	size: ButtonSize,
	disabled: bool,
	external: bool,
	attrs: Attributes,
}

impl Link {
	/// Creates a link to `href`.
	pub fn new(href: impl Into<String>, content: impl IntoPage) -> Self {
		Self {
			href: href.into(),
			content: content.into_page(),
			variant: ButtonVariant::Link,
			size: ButtonSize::default(),
			disabled: false,
			external: false,
			attrs: Attributes::new(),
		}
	}

	/// Sets the visual variant.
	pub fn variant(mut self, variant: ButtonVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Sets the size.
	pub fn size(mut self, size: ButtonSize) -> Self {
		self.size = size;
		self
	}

	/// Marks the link disabled: `aria-disabled`, no tab stop, no pointer events.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Opens in a new tab with `rel="noopener noreferrer"`.
	pub fn external(mut self, external: bool) -> Self {
		self.external = external;
		self
	}
}

root_attrs!(Link);

impl Component for Link {
	fn name(&self) -> &'static str {
		"link"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let mut link = PageElement::new("a")
			.attr("href", self.href.as_str())
			.class(&button_classes(ctx, self.variant, self.size));
		if self.external {
			link = link
				.attr("target", "_blank")
				.attr("rel", "noopener noreferrer");
		}
		if self.disabled {
			link = link
				.class("pointer-events-none opacity-50")
				.aria("disabled", true)
				.attr("tabindex", "-1");
		}
		Ok(link.attrs(&self.attrs).child(self.content.clone()).into_page())
	}
}
