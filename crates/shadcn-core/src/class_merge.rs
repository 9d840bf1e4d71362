//! Utility-class merging.
//!
//! [`merge_classes`] combines a component's default classes with caller
//! overrides. Utility classes that set the same CSS property (same conflict
//! group under the same variant modifiers) collapse to the last one given,
//! which keeps its own position; anything the conflict table does not know
//! is kept verbatim and only de-duplicated.
//!
//! ## Example
//!
//! ```
//! use shadcn_core::class_merge::merge_classes;
//!
//! let merged = merge_classes("px-4 py-2 text-red-500", "px-6");
//! assert_eq!(merged, "py-2 text-red-500 px-6");
//! ```

mod groups;

use std::borrow::Cow;

use groups::{class_group, conflicting_groups};

/// Something that can be read as a whitespace-separated list of classes.
pub trait ClassList {
	/// Iterates over the individual class tokens.
	fn class_tokens(&self) -> Vec<&str>;
}

impl ClassList for str {
	fn class_tokens(&self) -> Vec<&str> {
		self.split_whitespace().collect()
	}
}

impl ClassList for &str {
	fn class_tokens(&self) -> Vec<&str> {
		self.split_whitespace().collect()
	}
}

impl ClassList for String {
	fn class_tokens(&self) -> Vec<&str> {
		self.split_whitespace().collect()
	}
}

impl ClassList for Cow<'_, str> {
	fn class_tokens(&self) -> Vec<&str> {
		self.split_whitespace().collect()
	}
}

impl<T: ClassList> ClassList for [T] {
	fn class_tokens(&self) -> Vec<&str> {
		self.iter().flat_map(ClassList::class_tokens).collect()
	}
}

impl<T: ClassList, const N: usize> ClassList for [T; N] {
	fn class_tokens(&self) -> Vec<&str> {
		self.as_slice().class_tokens()
	}
}

impl<T: ClassList> ClassList for Vec<T> {
	fn class_tokens(&self) -> Vec<&str> {
		self.as_slice().class_tokens()
	}
}

impl<T: ClassList> ClassList for Option<T> {
	fn class_tokens(&self) -> Vec<&str> {
		self.as_ref().map(ClassList::class_tokens).unwrap_or_default()
	}
}

/// Conflict identity of one utility class.
#[derive(Debug, Clone, PartialEq, Eq)]
struct GroupKey {
	/// Variant modifiers, sorted and `:`-joined (`hover:focus`)
	modifiers: String,
	important: bool,
	group: &'static str,
}

impl GroupKey {
	/// Whether a class with this key replaces a class with `earlier`.
	fn overrides(&self, earlier: &GroupKey) -> bool {
		self.modifiers == earlier.modifiers
			&& self.important == earlier.important
			&& (self.group == earlier.group || conflicting_groups(self.group).contains(&earlier.group))
	}
}

/// Splits `hover:md:!px-4` into (`["hover", "md"]`, `!px-4`).
///
/// Colons inside arbitrary values (`[&:nth-child(3)]`) do not split.
fn split_modifiers(token: &str) -> (Vec<&str>, &str) {
	let mut modifiers = Vec::new();
	let mut depth = 0usize;
	let mut start = 0;
	for (idx, ch) in token.char_indices() {
		match ch {
			'[' | '(' => depth += 1,
			']' | ')' => depth = depth.saturating_sub(1),
			':' if depth == 0 => {
				modifiers.push(&token[start..idx]);
				start = idx + 1;
			}
			_ => {}
		}
	}
	(modifiers, &token[start..])
}

fn group_key(token: &str) -> Option<GroupKey> {
	let (mut modifiers, base) = split_modifiers(token);

	let (important, base) = match base.strip_prefix('!') {
		Some(rest) => (true, rest),
		None => match base.strip_suffix('!') {
			Some(rest) => (true, rest),
			None => (false, base),
		},
	};
	let base = base.strip_prefix('-').unwrap_or(base);

	let group = class_group(base)?;
	modifiers.sort_unstable();
	Some(GroupKey {
		modifiers: modifiers.join(":"),
		important,
		group,
	})
}

/// Merges `overrides` into `base`, resolving utility-class conflicts.
///
/// * a class drops every earlier class in the same conflict group, so the
///   winning class sits where the later one was given;
/// * shorthand groups also drop their narrower groups (`p-2` drops an
///   earlier `px-4`), never the other way round;
/// * classes outside the conflict table keep their last occurrence only.
///
/// Surviving classes keep their relative order. Either side may be empty, in
/// which case the other side is returned with its whitespace normalized.
pub fn merge_classes<B, O>(base: B, overrides: O) -> String
where
	B: ClassList,
	O: ClassList,
{
	let base_tokens = base.class_tokens();
	let override_tokens = overrides.class_tokens();
	let tokens: Vec<&str> = base_tokens.into_iter().chain(override_tokens).collect();

	// Walk right to left; a token survives unless some later token claims it.
	let mut later_keys: Vec<GroupKey> = Vec::new();
	let mut later_plain: Vec<&str> = Vec::new();
	let mut kept: Vec<&str> = Vec::with_capacity(tokens.len());

	for token in tokens.into_iter().rev() {
		match group_key(token) {
			None => {
				if !later_plain.contains(&token) {
					kept.push(token);
				}
				later_plain.push(token);
			}
			Some(key) => {
				if !later_keys.iter().any(|later| later.overrides(&key)) {
					kept.push(token);
				}
				later_keys.push(key);
			}
		}
	}

	kept.reverse();
	kept.join(" ")
}

/// Folds [`merge_classes`] over several class lists, left to right.
pub fn merge_many<T: ClassList>(lists: &[T]) -> String {
	lists
		.iter()
		.fold(String::new(), |acc, list| merge_classes(acc.as_str(), list.class_tokens()))
}

/// Joins class fragments, skipping empty ones, without conflict resolution.
pub fn join_classes<'a>(parts: impl IntoIterator<Item = &'a str>) -> String {
	parts
		.into_iter()
		.flat_map(str::split_whitespace)
		.collect::<Vec<_>>()
		.join(" ")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_override_law() {
		let merged = merge_classes("px-4 text-red-500", "px-6");
		assert!(merged.contains("px-6"));
		assert!(!merged.contains("px-4"));
		assert!(merged.contains("text-red-500"));
	}

	#[rstest]
	#[case("", "px-2 py-1", "px-2 py-1")]
	#[case("  px-2   py-1 ", "", "px-2 py-1")]
	#[case("p-4", "px-2", "p-4 px-2")]
	#[case("px-2", "p-4", "p-4")]
	#[case("pl-1 pr-1", "px-3", "px-3")]
	#[case("text-sm text-red-500", "text-lg", "text-red-500 text-lg")]
	#[case("text-red-500", "text-center", "text-red-500 text-center")]
	#[case("bg-primary hover:bg-primary/90", "bg-destructive", "hover:bg-primary/90 bg-destructive")]
	#[case("hover:bg-accent", "hover:bg-muted", "hover:bg-muted")]
	#[case("focus:hover:underline", "hover:focus:no-underline", "hover:focus:no-underline")]
	#[case("foo bar", "bar baz", "foo bar baz")]
	#[case("inline-flex h-10", "flex h-8", "flex h-8")]
	#[case("border border-input", "border-2 border-red-500", "border-2 border-red-500")]
	#[case("rounded-md", "rounded-t-none", "rounded-md rounded-t-none")]
	#[case("!px-2", "px-4", "!px-2 px-4")]
	#[case("mt-2", "-mt-4", "-mt-4")]
	#[case("", "py-1 pt-1 px-4", "py-1 pt-1 px-4")]
	#[case("px-4 text-red-500", "px-6", "text-red-500 px-6")]
	#[case("text-red-500 text-sm", "text-lg/7", "text-red-500 text-lg/7")]
	#[case("text-sm/6", "text-base", "text-base")]
	fn test_merge_cases(#[case] base: &str, #[case] overrides: &str, #[case] expected: &str) {
		assert_eq!(merge_classes(base, overrides), expected);
	}

	#[rstest]
	#[case("px-4 text-red-500", "px-6")]
	#[case("p-4 m-2", "px-2 p-1 mx-3")]
	#[case("pl-1 px-2", "p-3 pl-4")]
	#[case("bg-red-500 foo", "foo bar bg-blue-500")]
	#[case("rounded rounded-tl-lg", "rounded-t-md rounded-none")]
	#[case("", "text-sm text-lg underline")]
	#[case("", "py-1 pt-1 px-4")]
	#[case("pl-2 rounded-tl-md", "px-1 pl-3 rounded-t-lg rounded-tl-none")]
	#[case("inset-0 top-2", "inset-y-1 top-3")]
	fn test_merge_idempotent(#[case] a: &str, #[case] b: &str) {
		let once = merge_classes(a, b);
		assert_eq!(merge_classes(once.as_str(), b), once);
	}

	#[rstest]
	fn test_list_inputs() {
		let merged = merge_classes(vec!["px-4", "py-2"], ["px-1 font-bold"]);
		assert_eq!(merged, "py-2 px-1 font-bold");
		assert_eq!(merge_classes(None::<&str>, Some("h-4")), "h-4");
	}

	#[rstest]
	fn test_arbitrary_modifier_is_not_split() {
		let (modifiers, base) = split_modifiers("[&:nth-child(3)]:py-0");
		assert_eq!(modifiers, vec!["[&:nth-child(3)]"]);
		assert_eq!(base, "py-0");
	}

	#[rstest]
	fn test_merge_many() {
		assert_eq!(merge_many(&["px-1", "px-2 py-1", "py-3"]), "px-2 py-3");
	}

	#[rstest]
	fn test_join_classes() {
		assert_eq!(join_classes(["a  b", "", "c"]), "a b c");
	}
}
