//! Utility-class conflict groups.
//!
//! Maps a single utility class (modifiers and the important marker already
//! stripped) to the CSS property group it sets. Two classes in the same group
//! override each other; [`conflicting_groups`] lists the narrower groups a
//! shorthand group also overrides (`p-*` over `px-*`, `px-*` over `pl-*`).

const THEME_COLORS: &[&str] = &[
	"background",
	"foreground",
	"primary",
	"primary-foreground",
	"secondary",
	"secondary-foreground",
	"muted",
	"muted-foreground",
	"accent",
	"accent-foreground",
	"destructive",
	"destructive-foreground",
	"card",
	"card-foreground",
	"popover",
	"popover-foreground",
	"border",
	"input",
	"ring",
];

const PALETTE: &[&str] = &[
	"slate", "gray", "zinc", "neutral", "stone", "red", "orange", "amber", "yellow", "lime",
	"green", "emerald", "teal", "cyan", "sky", "blue", "indigo", "violet", "purple", "fuchsia",
	"pink", "rose",
];

const TEXT_SIZES: &[&str] = &[
	"xs", "sm", "base", "lg", "xl", "2xl", "3xl", "4xl", "5xl", "6xl", "7xl", "8xl", "9xl",
];

const FONT_WEIGHTS: &[&str] = &[
	"thin",
	"extralight",
	"light",
	"normal",
	"medium",
	"semibold",
	"bold",
	"extrabold",
	"black",
];

const SHADOW_SIZES: &[&str] = &["", "2xs", "xs", "sm", "md", "lg", "xl", "2xl", "inner", "none"];

const BORDER_STYLES: &[&str] = &["solid", "dashed", "dotted", "double", "hidden", "none"];

const BORDER_SIDES: &[(&str, &str, &str)] = &[
	("x", "border-w-x", "border-color-x"),
	("y", "border-w-y", "border-color-y"),
	("t", "border-w-t", "border-color-t"),
	("r", "border-w-r", "border-color-r"),
	("b", "border-w-b", "border-color-b"),
	("l", "border-w-l", "border-color-l"),
	("s", "border-w-s", "border-color-s"),
	("e", "border-w-e", "border-color-e"),
];

const ROUNDED_SIDES: &[(&str, &str)] = &[
	("tl", "rounded-tl"),
	("tr", "rounded-tr"),
	("br", "rounded-br"),
	("bl", "rounded-bl"),
	("ss", "rounded-ss"),
	("se", "rounded-se"),
	("ee", "rounded-ee"),
	("es", "rounded-es"),
	("t", "rounded-t"),
	("r", "rounded-r"),
	("b", "rounded-b"),
	("l", "rounded-l"),
	("s", "rounded-s"),
	("e", "rounded-e"),
];

/// Prefixes whose group does not depend on the value.
///
/// Longer prefixes must come before shorter ones sharing a stem.
const VALUE_AGNOSTIC_PREFIXES: &[(&str, &str)] = &[
	("px", "padding-x"),
	("py", "padding-y"),
	("pt", "padding-t"),
	("pr", "padding-r"),
	("pb", "padding-b"),
	("pl", "padding-l"),
	("ps", "padding-s"),
	("pe", "padding-e"),
	("p", "padding"),
	("mx", "margin-x"),
	("my", "margin-y"),
	("mt", "margin-t"),
	("mr", "margin-r"),
	("mb", "margin-b"),
	("ml", "margin-l"),
	("ms", "margin-s"),
	("me", "margin-e"),
	("m", "margin"),
	("space-x", "space-x"),
	("space-y", "space-y"),
	("gap-x", "gap-x"),
	("gap-y", "gap-y"),
	("gap", "gap"),
	("min-w", "min-w"),
	("max-w", "max-w"),
	("w", "w"),
	("min-h", "min-h"),
	("max-h", "max-h"),
	("h", "h"),
	("size", "size"),
	("inset-x", "inset-x"),
	("inset-y", "inset-y"),
	("inset", "inset"),
	("top", "top"),
	("right", "right"),
	("bottom", "bottom"),
	("left", "left"),
	("start", "start"),
	("end", "end"),
	("z", "z"),
	("opacity", "opacity"),
	("order", "order"),
	("basis", "basis"),
	("grow", "grow"),
	("shrink", "shrink"),
	("grid-cols", "grid-cols"),
	("grid-rows", "grid-rows"),
	("col-span", "col-span"),
	("col-start", "col-start"),
	("col-end", "col-end"),
	("row-span", "row-span"),
	("items", "align-items"),
	("justify-items", "justify-items"),
	("justify-self", "justify-self"),
	("justify", "justify-content"),
	("self", "align-self"),
	("place-content", "place-content"),
	("place-items", "place-items"),
	("place-self", "place-self"),
	("overflow-x", "overflow-x"),
	("overflow-y", "overflow-y"),
	("overflow", "overflow"),
	("cursor", "cursor"),
	("select", "user-select"),
	("pointer-events", "pointer-events"),
	("leading", "leading"),
	("tracking", "tracking"),
	("whitespace", "whitespace"),
	("align", "vertical-align"),
	("line-clamp", "line-clamp"),
	("list", "list-style-type"),
	("duration", "duration"),
	("ease", "ease"),
	("delay", "delay"),
	("animate", "animate"),
	("transition", "transition"),
	("scale-x", "scale-x"),
	("scale-y", "scale-y"),
	("scale", "scale"),
	("rotate", "rotate"),
	("translate-x", "translate-x"),
	("translate-y", "translate-y"),
	("skew-x", "skew-x"),
	("skew-y", "skew-y"),
	("origin", "transform-origin"),
	("aspect", "aspect"),
	("columns", "columns"),
	("float", "float"),
	("clear", "clear"),
	("backdrop-blur", "backdrop-blur"),
	("blur", "blur"),
	("underline-offset", "underline-offset"),
	("placeholder", "placeholder-color"),
	("caret", "caret-color"),
	("accent", "accent-color"),
	("resize", "resize"),
];

const EXACT: &[(&str, &str)] = &[
	("block", "display"),
	("inline-block", "display"),
	("inline", "display"),
	("flex", "display"),
	("inline-flex", "display"),
	("table", "display"),
	("inline-table", "display"),
	("table-caption", "display"),
	("table-cell", "display"),
	("table-row", "display"),
	("table-row-group", "display"),
	("table-header-group", "display"),
	("table-footer-group", "display"),
	("flow-root", "display"),
	("grid", "display"),
	("inline-grid", "display"),
	("contents", "display"),
	("list-item", "display"),
	("hidden", "display"),
	("static", "position"),
	("fixed", "position"),
	("absolute", "position"),
	("relative", "position"),
	("sticky", "position"),
	("visible", "visibility"),
	("invisible", "visibility"),
	("collapse", "visibility"),
	("sr-only", "sr"),
	("not-sr-only", "sr"),
	("italic", "font-style"),
	("not-italic", "font-style"),
	("underline", "text-decoration-line"),
	("overline", "text-decoration-line"),
	("line-through", "text-decoration-line"),
	("no-underline", "text-decoration-line"),
	("uppercase", "text-transform"),
	("lowercase", "text-transform"),
	("capitalize", "text-transform"),
	("normal-case", "text-transform"),
	("truncate", "text-overflow"),
	("text-ellipsis", "text-overflow"),
	("text-clip", "text-overflow"),
	("flex-row", "flex-direction"),
	("flex-row-reverse", "flex-direction"),
	("flex-col", "flex-direction"),
	("flex-col-reverse", "flex-direction"),
	("flex-wrap", "flex-wrap"),
	("flex-wrap-reverse", "flex-wrap"),
	("flex-nowrap", "flex-wrap"),
	("flex-1", "flex"),
	("flex-auto", "flex"),
	("flex-initial", "flex"),
	("flex-none", "flex"),
	("antialiased", "font-smoothing"),
	("subpixel-antialiased", "font-smoothing"),
	("box-border", "box-sizing"),
	("box-content", "box-sizing"),
	("isolate", "isolation"),
	("isolation-auto", "isolation"),
	("rounded", "rounded"),
	("border", "border-w"),
	("border-collapse", "border-collapse"),
	("border-separate", "border-collapse"),
	("shadow", "shadow"),
	("ring", "ring-w"),
	("ring-inset", "ring-inset"),
	("outline", "outline-style"),
	("outline-none", "outline-style"),
	("outline-hidden", "outline-style"),
	("outline-dashed", "outline-style"),
	("outline-dotted", "outline-style"),
	("outline-double", "outline-style"),
	("object-contain", "object-fit"),
	("object-cover", "object-fit"),
	("object-fill", "object-fit"),
	("object-none", "object-fit"),
	("object-scale-down", "object-fit"),
];

/// Groups overridden by a shorthand group in addition to itself.
const CONFLICTS: &[(&str, &[&str])] = &[
	(
		"padding",
		&[
			"padding-x",
			"padding-y",
			"padding-t",
			"padding-r",
			"padding-b",
			"padding-l",
			"padding-s",
			"padding-e",
		],
	),
	("padding-x", &["padding-l", "padding-r"]),
	("padding-y", &["padding-t", "padding-b"]),
	(
		"margin",
		&[
			"margin-x", "margin-y", "margin-t", "margin-r", "margin-b", "margin-l", "margin-s",
			"margin-e",
		],
	),
	("margin-x", &["margin-l", "margin-r"]),
	("margin-y", &["margin-t", "margin-b"]),
	("gap", &["gap-x", "gap-y"]),
	("size", &["w", "h"]),
	(
		"inset",
		&[
			"inset-x", "inset-y", "top", "right", "bottom", "left", "start", "end",
		],
	),
	("inset-x", &["left", "right"]),
	("inset-y", &["top", "bottom"]),
	("overflow", &["overflow-x", "overflow-y"]),
	("scale", &["scale-x", "scale-y"]),
	(
		"rounded",
		&[
			"rounded-t",
			"rounded-r",
			"rounded-b",
			"rounded-l",
			"rounded-s",
			"rounded-e",
			"rounded-tl",
			"rounded-tr",
			"rounded-br",
			"rounded-bl",
			"rounded-ss",
			"rounded-se",
			"rounded-ee",
			"rounded-es",
		],
	),
	("rounded-t", &["rounded-tl", "rounded-tr"]),
	("rounded-r", &["rounded-tr", "rounded-br"]),
	("rounded-b", &["rounded-br", "rounded-bl"]),
	("rounded-l", &["rounded-tl", "rounded-bl"]),
	("rounded-s", &["rounded-ss", "rounded-es"]),
	("rounded-e", &["rounded-se", "rounded-ee"]),
	(
		"border-w",
		&[
			"border-w-x",
			"border-w-y",
			"border-w-t",
			"border-w-r",
			"border-w-b",
			"border-w-l",
			"border-w-s",
			"border-w-e",
		],
	),
	("border-w-x", &["border-w-l", "border-w-r"]),
	("border-w-y", &["border-w-t", "border-w-b"]),
	(
		"border-color",
		&[
			"border-color-x",
			"border-color-y",
			"border-color-t",
			"border-color-r",
			"border-color-b",
			"border-color-l",
			"border-color-s",
			"border-color-e",
		],
	),
	("border-color-x", &["border-color-l", "border-color-r"]),
	("border-color-y", &["border-color-t", "border-color-b"]),
];

/// Returns the groups that `group` overrides besides itself.
pub(crate) fn conflicting_groups(group: &str) -> &'static [&'static str] {
	CONFLICTS
		.iter()
		.find(|(name, _)| *name == group)
		.map(|(_, others)| *others)
		.unwrap_or(&[])
}

/// Resolves the conflict group of a bare utility class.
///
/// `class` must already have variant modifiers, the important marker and the
/// leading negative sign removed. Returns `None` for classes outside the table.
pub(crate) fn class_group(class: &str) -> Option<&'static str> {
	if let Some((_, group)) = EXACT.iter().find(|(name, _)| *name == class) {
		return Some(group);
	}

	if let Some(value) = value_after(class, "text") {
		return Some(text_group(value));
	}
	if let Some(value) = value_after(class, "font") {
		return Some(if FONT_WEIGHTS.contains(&value) || is_number(value) {
			"font-weight"
		} else {
			"font-family"
		});
	}
	if let Some(value) = value_after(class, "bg") {
		return Some(background_group(value));
	}
	if let Some(value) = value_after(class, "border") {
		return border_group(value);
	}
	if let Some(value) = value_after(class, "rounded") {
		return Some(rounded_group(value));
	}
	if let Some(value) = value_after(class, "shadow") {
		return Some(if SHADOW_SIZES.contains(&value) || (is_arbitrary(value) && !is_color(value)) {
			"shadow"
		} else {
			"shadow-color"
		});
	}
	if let Some(value) = value_after(class, "ring-offset") {
		return Some(if is_number(value) || is_length(value) {
			"ring-offset-w"
		} else {
			"ring-offset-color"
		});
	}
	if let Some(value) = value_after(class, "ring") {
		return Some(if is_number(value) || is_length(value) {
			"ring-w"
		} else {
			"ring-color"
		});
	}
	if value_after(class, "outline-offset").is_some() {
		return Some("outline-offset");
	}
	if let Some(value) = value_after(class, "outline") {
		return Some(if is_number(value) || is_length(value) {
			"outline-w"
		} else {
			"outline-color"
		});
	}
	if let Some(value) = value_after(class, "decoration") {
		return Some(if is_number(value) || value == "auto" || value == "from-font" {
			"decoration-thickness"
		} else if ["solid", "double", "dotted", "dashed", "wavy"].contains(&value) {
			"decoration-style"
		} else {
			"decoration-color"
		});
	}
	if let Some(value) = value_after(class, "stroke") {
		return Some(if is_number(value) {
			"stroke-w"
		} else {
			"stroke"
		});
	}
	if value_after(class, "fill").is_some() {
		return Some("fill");
	}
	if value_after(class, "object").is_some() {
		return Some("object-position");
	}

	VALUE_AGNOSTIC_PREFIXES
		.iter()
		.find(|(prefix, _)| value_after(class, prefix).is_some())
		.map(|(_, group)| *group)
}

fn text_group(value: &str) -> &'static str {
	// `text-lg/7` carries a line height after the slash.
	let size = match value.rfind('/') {
		Some(idx) if !value[idx..].contains(']') => &value[..idx],
		_ => value,
	};
	if TEXT_SIZES.contains(&size) || is_length(size) {
		"font-size"
	} else if ["left", "center", "right", "justify", "start", "end"].contains(&value) {
		"text-align"
	} else if ["wrap", "nowrap", "balance", "pretty"].contains(&value) {
		"text-wrap"
	} else {
		"text-color"
	}
}

fn background_group(value: &str) -> &'static str {
	match value {
		"fixed" | "local" | "scroll" => "bg-attachment",
		"repeat" | "no-repeat" | "repeat-x" | "repeat-y" | "repeat-round" | "repeat-space" => {
			"bg-repeat"
		}
		"auto" | "cover" | "contain" => "bg-size",
		"bottom" | "center" | "left" | "left-bottom" | "left-top" | "right" | "right-bottom"
		| "right-top" | "top" => "bg-position",
		"none" => "bg-image",
		_ if value.starts_with("clip-") => "bg-clip",
		_ if value.starts_with("origin-") => "bg-origin",
		_ if value.starts_with("gradient-") || value.starts_with("linear-") => "bg-image",
		_ => "bg-color",
	}
}

fn border_group(value: &str) -> Option<&'static str> {
	if value.is_empty() || is_number(value) || is_length(value) {
		return Some("border-w");
	}
	if BORDER_STYLES.contains(&value) {
		return Some("border-style");
	}
	for (side, width_group, color_group) in BORDER_SIDES {
		if let Some(rest) = value_after(value, side) {
			return Some(if rest.is_empty() || is_number(rest) || is_length(rest) {
				width_group
			} else {
				color_group
			});
		}
	}
	if value.starts_with("spacing") {
		return Some("border-spacing");
	}
	Some("border-color")
}

fn rounded_group(value: &str) -> &'static str {
	ROUNDED_SIDES
		.iter()
		.find(|(side, _)| value_after(value, side).is_some())
		.map(|(_, group)| *group)
		.unwrap_or("rounded")
}

/// Returns the value part of `class` when it is `prefix` or `prefix-<value>`.
fn value_after<'a>(class: &'a str, prefix: &str) -> Option<&'a str> {
	let rest = class.strip_prefix(prefix)?;
	if rest.is_empty() {
		Some("")
	} else {
		rest.strip_prefix('-')
	}
}

fn is_arbitrary(value: &str) -> bool {
	value.starts_with('[') && value.ends_with(']')
}

fn is_number(value: &str) -> bool {
	!value.is_empty()
		&& (value == "px" || value.chars().all(|c| c.is_ascii_digit() || c == '.'))
}

fn is_length(value: &str) -> bool {
	if !is_arbitrary(value) {
		return false;
	}
	let inner = &value[1..value.len() - 1];
	if let Some(hint) = inner.strip_prefix("length:") {
		return !hint.is_empty();
	}
	inner.starts_with(|c: char| c.is_ascii_digit() || c == '.')
		|| inner.starts_with("calc(")
		|| inner.starts_with("min(")
		|| inner.starts_with("max(")
		|| inner.starts_with("clamp(")
}

fn is_color(value: &str) -> bool {
	if is_arbitrary(value) {
		let inner = &value[1..value.len() - 1];
		return inner.starts_with('#')
			|| inner.starts_with("rgb")
			|| inner.starts_with("hsl")
			|| inner.starts_with("oklch")
			|| inner.starts_with("color:");
	}
	let value = value.split('/').next().unwrap_or(value);
	if ["inherit", "current", "transparent", "black", "white"].contains(&value)
		|| THEME_COLORS.contains(&value)
	{
		return true;
	}
	match value.rsplit_once('-') {
		Some((name, shade)) => PALETTE.contains(&name) && is_number(shade),
		None => false,
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case("px-4", Some("padding-x"))]
	#[case("p-2", Some("padding"))]
	#[case("pl-1", Some("padding-l"))]
	#[case("mt-0", Some("margin-t"))]
	#[case("text-sm", Some("font-size"))]
	#[case("text-center", Some("text-align"))]
	#[case("text-red-500", Some("text-color"))]
	#[case("text-primary-foreground", Some("text-color"))]
	#[case("text-[13px]", Some("font-size"))]
	#[case("text-lg/7", Some("font-size"))]
	#[case("text-sm/[18px]", Some("font-size"))]
	#[case("text-red-500/50", Some("text-color"))]
	#[case("font-medium", Some("font-weight"))]
	#[case("font-mono", Some("font-family"))]
	#[case("bg-primary", Some("bg-color"))]
	#[case("bg-cover", Some("bg-size"))]
	#[case("border", Some("border-w"))]
	#[case("border-2", Some("border-w"))]
	#[case("border-input", Some("border-color"))]
	#[case("border-dashed", Some("border-style"))]
	#[case("border-t", Some("border-w-t"))]
	#[case("border-b-red-500", Some("border-color-b"))]
	#[case("rounded-md", Some("rounded"))]
	#[case("rounded-tl-lg", Some("rounded-tl"))]
	#[case("rounded-l", Some("rounded-l"))]
	#[case("rounded-lg", Some("rounded"))]
	#[case("shadow-sm", Some("shadow"))]
	#[case("ring-2", Some("ring-w"))]
	#[case("ring-ring", Some("ring-color"))]
	#[case("ring-offset-2", Some("ring-offset-w"))]
	#[case("ring-offset-background", Some("ring-offset-color"))]
	#[case("inline-flex", Some("display"))]
	#[case("hidden", Some("display"))]
	#[case("h-10", Some("h"))]
	#[case("max-w-lg", Some("max-w"))]
	#[case("justify-between", Some("justify-content"))]
	#[case("outline-none", Some("outline-style"))]
	#[case("peer", None)]
	#[case("group", None)]
	#[case("btn-custom", None)]
	fn test_class_group(#[case] class: &str, #[case] expected: Option<&str>) {
		assert_eq!(class_group(class), expected);
	}

	#[rstest]
	fn test_conflicting_groups() {
		assert!(conflicting_groups("padding").contains(&"padding-x"));
		assert!(conflicting_groups("padding-x").contains(&"padding-l"));
		assert!(!conflicting_groups("padding-x").contains(&"padding"));
		assert!(conflicting_groups("display").is_empty());
	}

	#[rstest]
	#[case("red-500", true)]
	#[case("red-500/50", true)]
	#[case("muted-foreground", true)]
	#[case("[#fff]", true)]
	#[case("[13px]", false)]
	#[case("lg", false)]
	fn test_is_color(#[case] value: &str, #[case] expected: bool) {
		assert_eq!(is_color(value), expected);
	}
}
