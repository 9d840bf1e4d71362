//! Utility functions for page rendering.

use std::borrow::Cow;

/// Escapes text content (`&`, `<`, `>`).
pub fn escape_text(s: &str) -> Cow<'_, str> {
	html_escape::encode_text(s)
}

/// Escapes an attribute value for use inside double quotes.
///
/// Only `&` and `"` are replaced so behavior descriptors such as
/// `click->dialog#open` survive verbatim.
pub fn escape_attribute(s: &str) -> Cow<'_, str> {
	if s.contains(['&', '"']) {
		let mut escaped = String::with_capacity(s.len() + 8);
		for c in s.chars() {
			match c {
				'&' => escaped.push_str("&amp;"),
				'"' => escaped.push_str("&quot;"),
				_ => escaped.push(c),
			}
		}
		Cow::Owned(escaped)
	} else {
		Cow::Borrowed(s)
	}
}

/// Attributes whose mere presence switches them on.
///
/// `disabled="false"` still disables an element, so these render as a bare
/// name or not at all.
pub const BOOLEAN_ATTRS: &[&str] = &[
	"allowfullscreen",
	"async",
	"autofocus",
	"autoplay",
	"checked",
	"controls",
	"default",
	"defer",
	"disabled",
	"formnovalidate",
	"hidden",
	"inert",
	"ismap",
	"itemscope",
	"loop",
	"multiple",
	"muted",
	"nomodule",
	"novalidate",
	"open",
	"playsinline",
	"readonly",
	"required",
	"reversed",
	"selected",
	"truespeed",
];

/// Returns `true` when `name` is an HTML boolean attribute.
pub fn is_boolean_attr(name: &str) -> bool {
	BOOLEAN_ATTRS.contains(&name)
}

/// Whether a textual value switches a boolean attribute on: anything but
/// `""`, `"false"` and `"0"`.
pub fn is_boolean_attr_truthy(value: &str) -> bool {
	!value.is_empty() && value != "false" && value != "0"
}

/// Elements that never have a closing tag.
pub(crate) fn is_void_tag(tag: &str) -> bool {
	matches!(
		tag,
		"area"
			| "base" | "br"
			| "col" | "embed"
			| "hr" | "img"
			| "input" | "link"
			| "meta" | "source"
			| "track" | "wbr"
	)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_escape_text_no_special_chars() {
		assert_eq!(escape_text("Hello World"), Cow::Borrowed("Hello World"));
	}

	#[rstest]
	fn test_escape_text_markup() {
		assert_eq!(escape_text("<b>a & b</b>"), "&lt;b&gt;a &amp; b&lt;/b&gt;");
	}

	#[rstest]
	fn test_escape_attribute_quotes() {
		let escaped = escape_attribute("say \"hi\"");
		assert!(escaped.contains("&quot;"));
		assert!(!escaped.contains('"'));
	}

	#[rstest]
	fn test_is_boolean_attr_truthy() {
		assert!(is_boolean_attr_truthy("true"));
		assert!(is_boolean_attr_truthy("disabled"));
		assert!(!is_boolean_attr_truthy(""));
		assert!(!is_boolean_attr_truthy("false"));
		assert!(!is_boolean_attr_truthy("0"));
	}

	#[rstest]
	fn test_void_tags() {
		assert!(is_void_tag("input"));
		assert!(is_void_tag("br"));
		assert!(!is_void_tag("button"));
	}
}
