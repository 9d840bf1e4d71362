//! Toggle button

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext, style_key};

use super::flag;

style_key! {
	/// Toggle look
	pub enum ToggleVariant {
		/// Transparent until pressed
		Default => "default",
		/// Bordered
		Outline => "outline",
	}
	default = Default;
}

style_key! {
	/// Toggle dimensions
	pub enum ToggleSize {
		/// Regular
		Default => "default",
		/// Small
		Sm => "sm",
		/// Large
		Lg => "lg",
	}
	default = Default;
}

/// A two-state button.
///
/// Behavior hooks: controller `toggle`, action `click->toggle#toggle`,
/// value `data-toggle-pressed-value`.
#[derive(Debug, Clone)]
pub struct Toggle {
	content: Page,
	pressed: bool,
	variant: ToggleVariant,
	size: ToggleSize,
	disabled: bool,
	attrs: Attributes,
}

impl Toggle {
	/// Creates an unpressed toggle.
	pub fn new(content: impl IntoPage) -> Self {
		Self {
			content: content.into_page(),
			pressed: false,
			variant: ToggleVariant::default(),
			size: ToggleSize::default(),
			disabled: false,
			attrs: Attributes::new(),
		}
	}

	/// Sets the pressed state.
	pub fn pressed(mut self, pressed: bool) -> Self {
		self.pressed = pressed;
		self
	}

	/// Sets the variant.
	pub fn variant(mut self, variant: ToggleVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Sets the size.
	pub fn size(mut self, size: ToggleSize) -> Self {
		self.size = size;
		self
	}

	/// Disables the toggle.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}
}

root_attrs!(Toggle);

impl Component for Toggle {
	fn name(&self) -> &'static str {
		"toggle"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		Ok(PageElement::new("button")
			.attr("type", "button")
			.aria("pressed", self.pressed)
			.data("state", if self.pressed { "on" } else { "off" })
			.class(&ctx.classes(
				"toggle",
				"root",
				&[("variant", self.variant.as_str()), ("size", self.size.as_str())],
			))
			.bool_attr("disabled", self.disabled)
			.data("controller", "toggle")
			.data("action", "click->toggle#toggle")
			.data("toggle_pressed_value", flag(self.pressed))
			.attrs(&self.attrs)
			.child(self.content.clone())
			.into_page())
	}
}
