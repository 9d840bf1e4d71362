//! The HTML render tree
//!
//! `Page` is the render tree every widget produces: elements, escaped text,
//! pre-sanitized raw markup and fragments. It is serialized once at the end
//! of a render call with [`Page::render_to_string`].
//!
//! ## Example
//!
//! ```
//! use shadcn_core::page::{IntoPage, PageElement};
//!
//! let view = PageElement::new("div")
//!     .attr("class", "container")
//!     .child("Hello, World!")
//!     .into_page();
//!
//! assert_eq!(
//!     view.render_to_string(),
//!     "<div class=\"container\">Hello, World!</div>"
//! );
//! ```

pub mod util;

use std::borrow::Cow;

use crate::attrs::{AttrValue, Attributes};
use util::{escape_text, is_void_tag};

/// A node of the render tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Page {
	/// An HTML element.
	Element(PageElement),
	/// A text node, escaped on output.
	Text(Cow<'static, str>),
	/// Markup the caller vouches for; emitted verbatim.
	Raw(Cow<'static, str>),
	/// Several nodes without a wrapper element.
	Fragment(Vec<Page>),
	/// Renders nothing.
	Empty,
}

/// Represents an HTML element in the view tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PageElement {
	/// The tag name (e.g., "div", "span").
	tag: Cow<'static, str>,
	/// HTML attributes.
	attrs: Attributes,
	/// Child views.
	children: Vec<Page>,
	/// Whether this is a void element (no closing tag).
	is_void: bool,
}

impl PageElement {
	/// Creates a new element view.
	pub fn new(tag: impl Into<Cow<'static, str>>) -> Self {
		let tag = tag.into();
		let is_void = is_void_tag(&tag);
		Self {
			tag,
			attrs: Attributes::new(),
			children: Vec::new(),
			is_void,
		}
	}

	/// Sets an attribute, replacing a previous value.
	pub fn attr(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
		self.attrs.set(name, value);
		self
	}

	/// Sets an attribute when `value` is `Some`.
	pub fn attr_opt<V: Into<AttrValue>>(mut self, name: &str, value: Option<V>) -> Self {
		self.attrs.set_opt(name, value);
		self
	}

	/// Adds a boolean attribute.
	///
	/// Rendered bare (`disabled`) when true and left out when false.
	pub fn bool_attr(self, name: &str, value: bool) -> Self {
		self.attr(name, AttrValue::Bool(value))
	}

	/// Merges classes into the `class` attribute.
	pub fn class(mut self, classes: &str) -> Self {
		self.attrs.add_class(classes);
		self
	}

	/// Sets `data-<key>`.
	pub fn data(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
		self.attrs = self.attrs.data(key, value);
		self
	}

	/// Sets `data-<key>` when `value` is `Some`.
	pub fn data_opt<V: Into<AttrValue>>(self, key: &str, value: Option<V>) -> Self {
		match value {
			Some(value) => self.data(key, value),
			None => self,
		}
	}

	/// Sets `aria-<key>`.
	pub fn aria(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
		self.attrs = self.attrs.aria(key, value);
		self
	}

	/// Sets `aria-<key>` when `value` is `Some`.
	pub fn aria_opt<V: Into<AttrValue>>(self, key: &str, value: Option<V>) -> Self {
		match value {
			Some(value) => self.aria(key, value),
			None => self,
		}
	}

	/// Merges an attribute bag over the element's current attributes.
	pub fn attrs(mut self, attrs: &Attributes) -> Self {
		self.attrs.merge_from(attrs);
		self
	}

	/// Adds a child view.
	pub fn child(mut self, child: impl IntoPage) -> Self {
		self.children.push(child.into_page());
		self
	}

	/// Adds multiple child views.
	pub fn children(mut self, children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		self.children
			.extend(children.into_iter().map(|c| c.into_page()));
		self
	}

	/// Returns the tag name.
	pub fn tag_name(&self) -> &str {
		&self.tag
	}

	/// Returns the attributes.
	pub fn attributes(&self) -> &Attributes {
		&self.attrs
	}

	/// Returns whether this is a void element.
	pub fn is_void(&self) -> bool {
		self.is_void
	}

	/// Merges computed attributes into this element, the caller's attributes
	/// acting as the base.
	///
	/// This is the `as_child` operation: a trigger that renders through a
	/// caller-supplied element keeps the caller's tag and children while
	/// gaining the ids, ARIA wiring and behavior hooks it needs. Classes and
	/// `data-controller`/`data-action` tokens combine; for other keys the
	/// computed value wins.
	pub fn merge_attrs(&mut self, computed: &Attributes) {
		self.attrs.merge_from(computed);
	}

	/// Renders the element to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		output.push('<');
		output.push_str(&self.tag);
		output.push_str(&self.attrs.to_html());

		if self.is_void {
			output.push_str(" />");
			return;
		}

		output.push('>');
		for child in &self.children {
			child.render_into(output);
		}
		output.push_str("</");
		output.push_str(&self.tag);
		output.push('>');
	}
}

impl Page {
	/// Creates a text view.
	pub fn text(content: impl Into<Cow<'static, str>>) -> Self {
		Self::Text(content.into())
	}

	/// Creates a view from pre-sanitized markup.
	///
	/// The content is emitted as-is; never pass user input here.
	pub fn raw(markup: impl Into<Cow<'static, str>>) -> Self {
		Self::Raw(markup.into())
	}

	/// Creates a fragment view.
	pub fn fragment(children: impl IntoIterator<Item = impl IntoPage>) -> Self {
		Self::Fragment(children.into_iter().map(|c| c.into_page()).collect())
	}

	/// Whether rendering this view produces no output.
	pub fn is_empty(&self) -> bool {
		match self {
			Page::Empty => true,
			Page::Text(text) | Page::Raw(text) => text.is_empty(),
			Page::Fragment(children) => children.iter().all(Page::is_empty),
			Page::Element(_) => false,
		}
	}

	/// Renders the view to an HTML string.
	pub fn render_to_string(&self) -> String {
		let mut output = String::new();
		self.render_into(&mut output);
		output
	}

	fn render_into(&self, output: &mut String) {
		match self {
			Page::Element(el) => el.render_into(output),
			Page::Text(text) => output.push_str(&escape_text(text)),
			Page::Raw(markup) => output.push_str(markup),
			Page::Fragment(children) => {
				for child in children {
					child.render_into(output);
				}
			}
			Page::Empty => {}
		}
	}
}

impl std::fmt::Display for Page {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(&self.render_to_string())
	}
}

/// Trait for types that can be converted into a Page.
pub trait IntoPage {
	/// Converts self into a Page.
	fn into_page(self) -> Page;
}

impl IntoPage for Page {
	fn into_page(self) -> Page {
		self
	}
}

impl IntoPage for PageElement {
	fn into_page(self) -> Page {
		Page::Element(self)
	}
}

impl IntoPage for String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self))
	}
}

impl IntoPage for &String {
	fn into_page(self) -> Page {
		Page::Text(Cow::Owned(self.clone()))
	}
}

impl IntoPage for &'static str {
	fn into_page(self) -> Page {
		Page::Text(Cow::Borrowed(self))
	}
}

impl<T: IntoPage> IntoPage for Option<T> {
	fn into_page(self) -> Page {
		match self {
			Some(v) => v.into_page(),
			None => Page::Empty,
		}
	}
}

impl<T: IntoPage> IntoPage for Vec<T> {
	fn into_page(self) -> Page {
		Page::Fragment(self.into_iter().map(|v| v.into_page()).collect())
	}
}

impl IntoPage for () {
	fn into_page(self) -> Page {
		Page::Empty
	}
}

impl<A: IntoPage, B: IntoPage> IntoPage for (A, B) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![self.0.into_page(), self.1.into_page()])
	}
}

impl<A: IntoPage, B: IntoPage, C: IntoPage> IntoPage for (A, B, C) {
	fn into_page(self) -> Page {
		Page::Fragment(vec![
			self.0.into_page(),
			self.1.into_page(),
			self.2.into_page(),
		])
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_void_element_detection() {
		assert!(PageElement::new("br").is_void());
		assert!(PageElement::new("input").is_void());
		assert!(!PageElement::new("div").is_void());
	}

	#[rstest]
	fn test_render_void_element() {
		let view = PageElement::new("input").attr("type", "hidden").into_page();
		assert_eq!(view.render_to_string(), "<input type=\"hidden\" />");
	}

	#[rstest]
	fn test_render_element_with_children() {
		let view = PageElement::new("div")
			.child("Hello, ")
			.child(PageElement::new("strong").child("World"))
			.into_page();
		assert_eq!(
			view.render_to_string(),
			"<div>Hello, <strong>World</strong></div>"
		);
	}

	#[rstest]
	fn test_render_text_with_escaping() {
		let view = Page::text("<script>alert(1)</script>");
		assert_eq!(
			view.render_to_string(),
			"&lt;script&gt;alert(1)&lt;/script&gt;"
		);
	}

	#[rstest]
	fn test_raw_is_not_escaped() {
		let view = Page::raw("<svg></svg>");
		assert_eq!(view.render_to_string(), "<svg></svg>");
	}

	#[rstest]
	fn test_bool_attr() {
		let on = PageElement::new("button").bool_attr("disabled", true);
		let off = PageElement::new("button").bool_attr("disabled", false);
		assert_eq!(on.render_to_string(), "<button disabled></button>");
		assert_eq!(off.render_to_string(), "<button></button>");
	}

	#[rstest]
	fn test_class_calls_merge() {
		let el = PageElement::new("div").class("p-2 text-sm").class("p-4");
		assert_eq!(el.attributes().get_str("class"), Some("text-sm p-4"));
	}

	#[rstest]
	fn test_merge_attrs_into_caller_element() {
		let mut el = PageElement::new("a")
			.attr("href", "/x")
			.class("underline")
			.data("action", "click->analytics#track")
			.child("Open");
		let computed = Attributes::new()
			.with("id", "dlg-trigger")
			.aria("controls", "dlg-content")
			.data("action", "click->dialog#open");
		el.merge_attrs(&computed);

		let html = el.render_to_string();
		assert!(html.starts_with("<a href=\"/x\""));
		assert!(html.contains("data-action=\"click->analytics#track click->dialog#open\""));
		assert!(html.contains("aria-controls=\"dlg-content\""));
		assert!(html.ends_with(">Open</a>"));
	}

	#[rstest]
	fn test_fragment_and_empty() {
		assert_eq!(Page::fragment(["a", "b"]).render_to_string(), "ab");
		assert!(Page::fragment(Vec::<Page>::new()).is_empty());
		assert!(Page::Empty.is_empty());
		assert!(None::<&'static str>.into_page().is_empty());
	}
}
