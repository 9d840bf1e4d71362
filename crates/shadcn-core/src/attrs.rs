//! Attribute bag.
//!
//! [`Attributes`] is the mutable-then-frozen set of HTML attributes one
//! element carries. Keys are stored lowercase, so `ID` and `id` name the same
//! attribute. The `data` and `aria` namespaces are flattened into
//! `data-*`/`aria-*` keys; [`Attributes::data`] and [`Attributes::aria`]
//! accept `snake_case` keys and hyphenate them.
//!
//! Merging ([`Attributes::merge`]) follows three rules:
//!
//! | key | rule |
//! |-----|------|
//! | `class` | [`merge_classes`] |
//! | `data-controller`, `data-action` | space-joined token list, de-duplicated |
//! | anything else | the override wins |

use indexmap::IndexMap;

use crate::class_merge::merge_classes;
use crate::error::{ComponentError, Result};
use crate::page::util::{escape_attribute, is_boolean_attr, is_boolean_attr_truthy};

/// Attributes whose values are token lists that accumulate across merges.
const TOKEN_LIST_ATTRS: &[&str] = &["data-controller", "data-action"];

/// Value of a single attribute.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AttrValue {
	/// A string value, escaped on output
	Text(String),
	/// A flag; see [`Attributes::to_html`] for how it serializes
	Bool(bool),
}

impl AttrValue {
	/// Returns the string value, or `"true"`/`"false"` for flags.
	pub fn as_str(&self) -> &str {
		match self {
			Self::Text(value) => value,
			Self::Bool(true) => "true",
			Self::Bool(false) => "false",
		}
	}
}

impl From<&str> for AttrValue {
	fn from(value: &str) -> Self {
		Self::Text(value.to_string())
	}
}

impl From<String> for AttrValue {
	fn from(value: String) -> Self {
		Self::Text(value)
	}
}

impl From<&String> for AttrValue {
	fn from(value: &String) -> Self {
		Self::Text(value.clone())
	}
}

impl From<bool> for AttrValue {
	fn from(value: bool) -> Self {
		Self::Bool(value)
	}
}

macro_rules! impl_from_number {
	($($ty:ty),*) => {
		$(
			impl From<$ty> for AttrValue {
				fn from(value: $ty) -> Self {
					Self::Text(value.to_string())
				}
			}
		)*
	};
}

impl_from_number!(i32, i64, u8, u16, u32, u64, usize, f64);

/// Normalizes an attribute key: lowercase.
fn normalize_name(name: &str) -> String {
	name.trim().to_ascii_lowercase()
}

/// Builds a namespaced key such as `data-dialog-target` from `dialog_target`.
fn namespaced(namespace: &str, key: &str) -> String {
	format!("{namespace}-{}", normalize_name(key).replace('_', "-"))
}

fn is_valid_name(name: &str) -> bool {
	!name.is_empty()
		&& !name.chars().any(|c| {
			c.is_whitespace() || c.is_control() || matches!(c, '"' | '\'' | '>' | '<' | '/' | '=')
		})
}

/// Merges two token lists, keeping first-seen order and dropping repeats.
fn merge_tokens(base: &str, extra: &str) -> String {
	let mut tokens: Vec<&str> = Vec::new();
	for token in base.split_whitespace().chain(extra.split_whitespace()) {
		if !tokens.contains(&token) {
			tokens.push(token);
		}
	}
	tokens.join(" ")
}

/// Ordered, case-insensitive map of HTML attributes.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Attributes {
	entries: IndexMap<String, AttrValue>,
}

impl Attributes {
	/// Creates an empty attribute bag.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a bag from caller-supplied pairs, rejecting names that cannot
	/// be serialized.
	pub fn from_pairs<K, V>(pairs: impl IntoIterator<Item = (K, V)>) -> Result<Self>
	where
		K: AsRef<str>,
		V: Into<AttrValue>,
	{
		let mut attrs = Self::new();
		for (name, value) in pairs {
			attrs.try_set(name.as_ref(), value)?;
		}
		Ok(attrs)
	}

	/// Sets an attribute, replacing any previous value.
	pub fn set(&mut self, name: &str, value: impl Into<AttrValue>) -> &mut Self {
		self.entries.insert(normalize_name(name), value.into());
		self
	}

	/// Sets an attribute after validating its name.
	pub fn try_set(&mut self, name: &str, value: impl Into<AttrValue>) -> Result<&mut Self> {
		let name = normalize_name(name);
		if !is_valid_name(&name) {
			return Err(ComponentError::InvalidAttribute(name));
		}
		self.entries.insert(name, value.into());
		Ok(self)
	}

	/// Sets an attribute only when `value` is `Some`.
	pub fn set_opt<V: Into<AttrValue>>(&mut self, name: &str, value: Option<V>) -> &mut Self {
		if let Some(value) = value {
			self.set(name, value);
		}
		self
	}

	/// Builder form of [`Attributes::set`].
	pub fn with(mut self, name: &str, value: impl Into<AttrValue>) -> Self {
		self.set(name, value);
		self
	}

	/// Builder form of [`Attributes::set_opt`].
	pub fn with_opt<V: Into<AttrValue>>(mut self, name: &str, value: Option<V>) -> Self {
		self.set_opt(name, value);
		self
	}

	/// Sets `data-<key>`.
	pub fn data(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
		self.entries.insert(namespaced("data", key), value.into());
		self
	}

	/// Sets `aria-<key>`.
	pub fn aria(mut self, key: &str, value: impl Into<AttrValue>) -> Self {
		self.entries.insert(namespaced("aria", key), value.into());
		self
	}

	/// Merges classes into the `class` attribute.
	pub fn class(mut self, classes: &str) -> Self {
		self.add_class(classes);
		self
	}

	/// Merges classes into the `class` attribute in place.
	pub fn add_class(&mut self, classes: &str) -> &mut Self {
		let merged = merge_classes(self.get_str("class").unwrap_or_default(), classes);
		self.entries.insert("class".to_string(), AttrValue::Text(merged));
		self
	}

	/// Appends tokens to a token-list attribute such as `data-action`.
	pub fn add_tokens(&mut self, name: &str, tokens: &str) -> &mut Self {
		let name = normalize_name(name);
		let merged = merge_tokens(self.get_str(&name).unwrap_or_default(), tokens);
		self.entries.insert(name, AttrValue::Text(merged));
		self
	}

	/// Removes an attribute, returning its value.
	pub fn remove(&mut self, name: &str) -> Option<AttrValue> {
		self.entries.shift_remove(&normalize_name(name))
	}

	/// Returns the value of an attribute.
	pub fn get(&self, name: &str) -> Option<&AttrValue> {
		self.entries.get(&normalize_name(name))
	}

	/// Returns the value of an attribute as a string.
	pub fn get_str(&self, name: &str) -> Option<&str> {
		self.get(name).map(AttrValue::as_str)
	}

	/// Returns the `id` attribute.
	pub fn id(&self) -> Option<&str> {
		self.get_str("id")
	}

	/// Whether the attribute is present.
	pub fn contains(&self, name: &str) -> bool {
		self.entries.contains_key(&normalize_name(name))
	}

	/// Number of attributes.
	pub fn len(&self) -> usize {
		self.entries.len()
	}

	/// Whether the bag is empty.
	pub fn is_empty(&self) -> bool {
		self.entries.is_empty()
	}

	/// Iterates over `(name, value)` pairs in insertion order.
	pub fn iter(&self) -> impl Iterator<Item = (&str, &AttrValue)> {
		self.entries.iter().map(|(name, value)| (name.as_str(), value))
	}

	/// Merges `other` over `self` in place.
	pub fn merge_from(&mut self, other: &Attributes) {
		for (name, value) in &other.entries {
			let merged = match (self.entries.get(name), value) {
				(Some(AttrValue::Text(base)), AttrValue::Text(extra)) if name == "class" => {
					AttrValue::Text(merge_classes(base.as_str(), extra.as_str()))
				}
				(Some(AttrValue::Text(base)), AttrValue::Text(extra))
					if TOKEN_LIST_ATTRS.contains(&name.as_str()) =>
				{
					AttrValue::Text(merge_tokens(base, extra))
				}
				_ => value.clone(),
			};
			self.entries.insert(name.clone(), merged);
		}
	}

	/// Returns `self` with `other` merged over it.
	pub fn merge(mut self, other: &Attributes) -> Self {
		self.merge_from(other);
		self
	}

	/// Serializes the bag as HTML attribute syntax, each attribute preceded
	/// by a space.
	///
	/// * boolean attributes (`disabled`, `required`, ...) render bare when
	///   truthy and are omitted otherwise;
	/// * `data-*` and `aria-*` flags render as `"true"`/`"false"`;
	/// * other flags render bare when `true` and are omitted when `false`;
	/// * an empty `class` is omitted;
	/// * names that would break out of the tag (whitespace, quotes, `=`,
	///   `<`, `>`, `/`) are dropped with a warning.
	pub fn to_html(&self) -> String {
		let mut output = String::new();
		for (name, value) in &self.entries {
			if !is_valid_name(name) {
				tracing::warn!(name = name.as_str(), "dropping attribute with an invalid name");
				continue;
			}
			match value {
				AttrValue::Bool(flag) if name.starts_with("data-") || name.starts_with("aria-") => {
					push_pair(&mut output, name, if *flag { "true" } else { "false" });
				}
				AttrValue::Bool(true) => push_bare(&mut output, name),
				AttrValue::Bool(false) => {}
				AttrValue::Text(text) if is_boolean_attr(name) => {
					if is_boolean_attr_truthy(text) {
						push_bare(&mut output, name);
					}
				}
				AttrValue::Text(text) if name == "class" && text.trim().is_empty() => {}
				AttrValue::Text(text) => push_pair(&mut output, name, text),
			}
		}
		output
	}
}

fn push_bare(output: &mut String, name: &str) {
	output.push(' ');
	output.push_str(name);
}

fn push_pair(output: &mut String, name: &str, value: &str) {
	output.push(' ');
	output.push_str(name);
	output.push_str("=\"");
	output.push_str(&escape_attribute(value));
	output.push('"');
}

/// Merges `overrides` over `base`; see [`Attributes::merge`].
pub fn merge_attributes(base: &Attributes, overrides: &Attributes) -> Attributes {
	base.clone().merge(overrides)
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_keys_are_case_insensitive() {
		let attrs = Attributes::new().with("ID", "a").with("id", "b");
		assert_eq!(attrs.len(), 1);
		assert_eq!(attrs.id(), Some("b"));
	}

	#[rstest]
	fn test_data_and_aria_helpers_hyphenate() {
		let attrs = Attributes::new()
			.data("dialog_is_open_value", false)
			.aria("described_by", "x");
		assert_eq!(attrs.get_str("data-dialog-is-open-value"), Some("false"));
		assert_eq!(attrs.get_str("aria-described-by"), Some("x"));
	}

	#[rstest]
	fn test_controller_tokens_concatenate() {
		let base = Attributes::new().data("controller", "a");
		let other = Attributes::new().data("controller", "b");
		let merged = merge_attributes(&base, &other);
		assert_eq!(merged.get_str("data-controller"), Some("a b"));
		assert!(merged.to_html().contains("data-controller=\"a b\""));
	}

	#[rstest]
	fn test_action_tokens_deduplicate() {
		let base = Attributes::new().data("action", "click->dialog#open");
		let other = Attributes::new().data("action", "click->dialog#open keydown->dialog#key");
		let merged = base.merge(&other);
		assert_eq!(
			merged.get_str("data-action"),
			Some("click->dialog#open keydown->dialog#key")
		);
	}

	#[rstest]
	fn test_class_merges_with_conflict_resolution() {
		let base = Attributes::new().class("px-4 text-red-500");
		let other = Attributes::new().class("px-6");
		let merged = base.merge(&other);
		assert_eq!(merged.get_str("class"), Some("text-red-500 px-6"));
	}

	#[rstest]
	fn test_other_keys_override() {
		let base = Attributes::new().with("id", "a").with("type", "button");
		let other = Attributes::new().with("id", "b");
		let merged = base.merge(&other);
		assert_eq!(merged.id(), Some("b"));
		assert_eq!(merged.get_str("type"), Some("button"));
		assert_eq!(merged.to_html(), " id=\"b\" type=\"button\"");
	}

	#[rstest]
	#[case(AttrValue::Bool(true), " disabled")]
	#[case(AttrValue::Bool(false), "")]
	#[case(AttrValue::Text("disabled".into()), " disabled")]
	#[case(AttrValue::Text("false".into()), "")]
	fn test_boolean_attribute_law(#[case] value: AttrValue, #[case] expected: &str) {
		let attrs = Attributes::new().with("disabled", value);
		assert_eq!(attrs.to_html(), expected);
	}

	#[rstest]
	fn test_absent_optional_value_is_omitted() {
		let attrs = Attributes::new()
			.with_opt("placeholder", None::<&str>)
			.with_opt("name", Some("q"));
		assert_eq!(attrs.to_html(), " name=\"q\"");
	}

	#[rstest]
	fn test_namespaced_flags_render_as_strings() {
		let attrs = Attributes::new()
			.aria("checked", false)
			.data("checked", true);
		assert_eq!(attrs.to_html(), " aria-checked=\"false\" data-checked=\"true\"");
	}

	#[rstest]
	fn test_values_are_escaped() {
		let attrs = Attributes::new().with("title", "a & \"b\"");
		assert_eq!(attrs.to_html(), " title=\"a &amp; &quot;b&quot;\"");
	}

	#[rstest]
	fn test_empty_class_is_omitted() {
		let attrs = Attributes::new().with("class", "  ");
		assert_eq!(attrs.to_html(), "");
	}

	#[rstest]
	#[case("a\"><script>x</script")]
	#[case("onmouseover=alert(1) data-x")]
	#[case("on click")]
	#[case("x/")]
	#[case("")]
	fn test_invalid_names_are_not_serialized(#[case] name: &str) {
		let html = Attributes::new().with(name, "v").with("title", "t").to_html();
		assert_eq!(html, " title=\"t\"");
	}

	#[rstest]
	fn test_from_pairs_rejects_bad_names() {
		let err = Attributes::from_pairs([("on click", "x")]).unwrap_err();
		assert_eq!(err, ComponentError::InvalidAttribute("on click".into()));
		assert!(Attributes::from_pairs([("data-x", "1")]).is_ok());
	}

	#[rstest]
	fn test_remove_keeps_order() {
		let mut attrs = Attributes::new().with("a", "1").with("b", "2").with("c", "3");
		attrs.remove("b");
		assert_eq!(attrs.to_html(), " a=\"1\" c=\"3\"");
	}
}
