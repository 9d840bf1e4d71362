//! Text input and textarea

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};

/// An `<input>`.
#[derive(Debug, Clone)]
pub struct Input {
	input_type: String,
	name: Option<String>,
	value: Option<String>,
	placeholder: Option<String>,
	disabled: bool,
	required: bool,
	readonly: bool,
	attrs: Attributes,
}

impl Default for Input {
	fn default() -> Self {
		Self::new()
	}
}

impl Input {
	/// Creates a `type="text"` input.
	pub fn new() -> Self {
		Self {
			input_type: "text".to_string(),
			name: None,
			value: None,
			placeholder: None,
			disabled: false,
			required: false,
			readonly: false,
			attrs: Attributes::new(),
		}
	}

	/// Sets the input type (`email`, `password`, `number`, ...).
	pub fn input_type(mut self, input_type: impl Into<String>) -> Self {
		self.input_type = input_type.into();
		self
	}

	/// Sets the form field name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the value.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Sets the value when given.
	pub fn value_opt(mut self, value: Option<String>) -> Self {
		self.value = value;
		self
	}

	/// Sets the placeholder.
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Disables the input.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Marks the input required.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Makes the input read-only.
	pub fn readonly(mut self, readonly: bool) -> Self {
		self.readonly = readonly;
		self
	}
}

root_attrs!(Input);

impl Component for Input {
	fn name(&self) -> &'static str {
		"input"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		Ok(PageElement::new("input")
			.attr("type", self.input_type.as_str())
			.attr_opt("name", self.name.as_deref())
			.attr_opt("value", self.value.as_deref())
			.attr_opt("placeholder", self.placeholder.as_deref())
			.class(&ctx.classes("input", "root", &[]))
			.bool_attr("disabled", self.disabled)
			.bool_attr("required", self.required)
			.bool_attr("readonly", self.readonly)
			.attrs(&self.attrs)
			.into_page())
	}
}

/// A `<textarea>`.
#[derive(Debug, Clone, Default)]
pub struct Textarea {
	name: Option<String>,
	value: Option<String>,
	placeholder: Option<String>,
	rows: Option<u32>,
	disabled: bool,
	required: bool,
	readonly: bool,
	attrs: Attributes,
}

impl Textarea {
	/// Creates an empty textarea.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the form field name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.name = Some(name.into());
		self
	}

	/// Sets the text content.
	pub fn value(mut self, value: impl Into<String>) -> Self {
		self.value = Some(value.into());
		self
	}

	/// Sets the text content when given.
	pub fn value_opt(mut self, value: Option<String>) -> Self {
		self.value = value;
		self
	}

	/// Sets the placeholder.
	pub fn placeholder(mut self, placeholder: impl Into<String>) -> Self {
		self.placeholder = Some(placeholder.into());
		self
	}

	/// Sets the visible row count.
	pub fn rows(mut self, rows: u32) -> Self {
		self.rows = Some(rows);
		self
	}

	/// Disables the textarea.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Marks the textarea required.
	pub fn required(mut self, required: bool) -> Self {
		self.required = required;
		self
	}

	/// Makes the textarea read-only.
	pub fn readonly(mut self, readonly: bool) -> Self {
		self.readonly = readonly;
		self
	}
}

root_attrs!(Textarea);

impl Component for Textarea {
	fn name(&self) -> &'static str {
		"textarea"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		Ok(PageElement::new("textarea")
			.attr_opt("name", self.name.as_deref())
			.attr_opt("placeholder", self.placeholder.as_deref())
			.attr_opt("rows", self.rows)
			.class(&ctx.classes("textarea", "root", &[]))
			.bool_attr("disabled", self.disabled)
			.bool_attr("required", self.required)
			.bool_attr("readonly", self.readonly)
			.attrs(&self.attrs)
			.child(self.value.clone())
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn ctx() -> RenderContext {
		RenderContext::sequential()
	}

	#[rstest]
	fn test_input_attributes(ctx: RenderContext) {
		let html = Input::new()
			.input_type("email")
			.name("email")
			.value("a@b.c")
			.placeholder("you@example.com")
			.required(true)
			.render(&ctx)
			.unwrap();
		assert!(html.starts_with(
			"<input type=\"email\" name=\"email\" value=\"a@b.c\" placeholder=\"you@example.com\" class=\""
		));
		assert!(html.ends_with(" required />"));
	}

	#[rstest]
	fn test_input_omits_absent_values(ctx: RenderContext) {
		let html = Input::new().render(&ctx).unwrap();
		assert!(!html.contains("name="));
		assert!(!html.contains("value="));
		assert!(!html.contains(" required"));
	}

	#[rstest]
	fn test_input_escapes_value(ctx: RenderContext) {
		let html = Input::new().value("\"><script>").render(&ctx).unwrap();
		assert!(html.contains("value=\"&quot;><script>\""));
	}

	#[rstest]
	fn test_textarea_content_is_escaped(ctx: RenderContext) {
		let html = Textarea::new()
			.name("bio")
			.rows(4)
			.value("<b>hi</b>")
			.render(&ctx)
			.unwrap();
		assert!(html.starts_with("<textarea name=\"bio\" rows=\"4\""));
		assert!(html.ends_with(">&lt;b&gt;hi&lt;/b&gt;</textarea>"));
	}
}
