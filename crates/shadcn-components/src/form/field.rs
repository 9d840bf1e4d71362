//! Label, hint and error block around a form control

use shadcn_core::{AriaIds, Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};

/// A form control wrapped with its label, hint and error message.
///
/// For a control with id `email` the hint is `email-description` and the
/// message is `email-message`. The control's `aria-describedby` lists the
/// hint when the field is valid, and the hint plus the message when it has
/// errors; `aria-invalid` mirrors the error state. Use
/// [`FormField::control_attrs`] to obtain those attributes for the control.
///
/// # Examples
///
/// ```
/// use shadcn_components::form::FormField;
///
/// let field = FormField::new("email")
/// 	.hint("We never share it.")
/// 	.errors(["is invalid"]);
/// let attrs = field.control_attrs();
/// assert_eq!(attrs.get_str("aria-invalid"), Some("true"));
/// assert_eq!(
/// 	attrs.get_str("aria-describedby"),
/// 	Some("email-description email-message")
/// );
/// ```
#[derive(Debug, Clone)]
pub struct FormField {
	id: String,
	label: Option<Page>,
	hint: Option<Page>,
	errors: Vec<String>,
	control: Page,
	attrs: Attributes,
}

impl FormField {
	/// Creates a field for the control with element id `id`.
	pub fn new(id: impl Into<String>) -> Self {
		Self {
			id: id.into(),
			label: None,
			hint: None,
			errors: Vec::new(),
			control: Page::Empty,
			attrs: Attributes::new(),
		}
	}

	/// Sets the label.
	pub fn label(mut self, label: impl IntoPage) -> Self {
		self.label = Some(label.into_page());
		self
	}

	/// Sets the label when given.
	pub fn label_opt(mut self, label: Option<Page>) -> Self {
		self.label = label;
		self
	}

	/// Sets the hint shown under the control.
	pub fn hint(mut self, hint: impl IntoPage) -> Self {
		self.hint = Some(hint.into_page());
		self
	}

	/// Sets the hint when given.
	pub fn hint_opt(mut self, hint: Option<Page>) -> Self {
		self.hint = hint;
		self
	}

	/// Sets the validation messages.
	pub fn errors<S: Into<String>>(mut self, errors: impl IntoIterator<Item = S>) -> Self {
		self.errors = errors.into_iter().map(Into::into).collect();
		self
	}

	/// Sets the rendered control.
	pub fn control(mut self, control: impl IntoPage) -> Self {
		self.control = control.into_page();
		self
	}

	/// Merges attributes over the wrapper element.
	pub fn attrs(mut self, attrs: Attributes) -> Self {
		self.attrs.merge_from(&attrs);
		self
	}

	/// The id family derived from the control id.
	pub fn ids(&self) -> AriaIds {
		AriaIds::new(self.id.as_str())
	}

	/// Whether the field has errors.
	pub fn is_invalid(&self) -> bool {
		!self.errors.is_empty()
	}

	/// The `aria-describedby` id list for the control, if any.
	pub fn described_by(&self) -> Option<String> {
		let ids = self.ids();
		let mut described = Vec::with_capacity(2);
		if self.hint.is_some() {
			described.push(ids.description());
		}
		if self.is_invalid() {
			described.push(ids.message());
		}
		(!described.is_empty()).then(|| described.join(" "))
	}

	/// ARIA attributes the control needs: `aria-invalid` and, when there is
	/// something to point at, `aria-describedby`.
	pub fn control_attrs(&self) -> Attributes {
		Attributes::new()
			.aria("invalid", self.is_invalid())
			.with_opt("aria-describedby", self.described_by())
	}

	/// Attributes for group controls that cannot be targeted by
	/// `<label for>`: [`FormField::control_attrs`] plus `aria-labelledby`
	/// pointing at the label.
	pub fn group_attrs(&self) -> Attributes {
		let attrs = self.control_attrs();
		match self.label {
			Some(_) => attrs.aria("labelledby", self.ids().label()),
			None => attrs,
		}
	}
}

impl Component for FormField {
	fn name(&self) -> &'static str {
		"form_field"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let ids = self.ids();
		let state = if self.is_invalid() { "invalid" } else { "valid" };

		let label = self.label.clone().map(|label| {
			PageElement::new("label")
				.attr("id", ids.label())
				.attr("for", self.id.as_str())
				.class(&ctx.classes("form_field", "label", &[("state", state)]))
				.child(label)
		});
		let hint = self.hint.clone().map(|hint| {
			PageElement::new("p")
				.attr("id", ids.description())
				.class(&ctx.classes("form_field", "description", &[]))
				.child(hint)
		});
		let message = self.is_invalid().then(|| {
			PageElement::new("p")
				.attr("id", ids.message())
				.class(&ctx.classes("form_field", "message", &[]))
				.child(self.errors.join(", "))
		});

		Ok(PageElement::new("div")
			.data("state", state)
			.class(&ctx.classes("form_field", "root", &[]))
			.attrs(&self.attrs)
			.child(label)
			.child(self.control.clone())
			.child(hint)
			.child(message)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(false, false, None)]
	#[case(true, false, Some("name-description"))]
	#[case(false, true, Some("name-message"))]
	#[case(true, true, Some("name-description name-message"))]
	fn test_described_by(#[case] hint: bool, #[case] invalid: bool, #[case] expected: Option<&str>) {
		let mut field = FormField::new("name");
		if hint {
			field = field.hint("Your full name");
		}
		if invalid {
			field = field.errors(["can't be blank"]);
		}
		assert_eq!(field.described_by().as_deref(), expected);
		let expected_invalid = if invalid { "true" } else { "false" };
		assert_eq!(field.control_attrs().get_str("aria-invalid"), Some(expected_invalid));
	}

	#[rstest]
	fn test_field_markup() {
		let html = FormField::new("name")
			.label("Name")
			.hint("Your full name")
			.errors(["can't be blank", "is too short"])
			.control(PageElement::new("input").attr("id", "name"))
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("<label id=\"name-label\" for=\"name\" class=\"text-destructive\">Name</label>"));
		assert!(html.contains("<p id=\"name-description\""));
		assert!(html.contains(">can't be blank, is too short</p>"));
		assert!(html.contains("data-state=\"invalid\""));
	}

	#[rstest]
	fn test_valid_field_has_no_message() {
		let html = FormField::new("name")
			.label("Name")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(!html.contains("name-message"));
		assert!(!html.contains("text-destructive"));
	}
}
