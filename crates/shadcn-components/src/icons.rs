//! Inline SVG icons
//!
//! Icons are built as [`PageElement`]s so they can be styled and merged like
//! any other element.

use shadcn_core::PageElement;

fn svg(size: u32) -> PageElement {
	PageElement::new("svg")
		.attr("xmlns", "http://www.w3.org/2000/svg")
		.attr("width", size)
		.attr("height", size)
		.attr("viewBox", "0 0 24 24")
		.attr("fill", "none")
		.attr("stroke", "currentColor")
		.attr("stroke-width", "2")
		.attr("stroke-linecap", "round")
		.attr("stroke-linejoin", "round")
		.aria("hidden", true)
}

fn path(d: &str) -> PageElement {
	PageElement::new("path").attr("d", d)
}

/// Check mark.
pub fn check() -> PageElement {
	svg(16).child(path("M20 6 9 17l-5-5"))
}

/// Downward chevron.
pub fn chevron_down() -> PageElement {
	svg(16).child(path("m6 9 6 6 6-6"))
}

/// Rightward chevron.
pub fn chevron_right() -> PageElement {
	svg(16).child(path("m9 18 6-6-6-6"))
}

/// Close cross.
pub fn x() -> PageElement {
	svg(16).child(path("M18 6 6 18")).child(path("m6 6 12 12"))
}

/// Filled dot, the radio indicator.
pub fn circle() -> PageElement {
	svg(10)
		.attr("fill", "currentColor")
		.child(
			PageElement::new("circle")
				.attr("cx", "12")
				.attr("cy", "12")
				.attr("r", "10"),
		)
}

/// Calendar.
pub fn calendar() -> PageElement {
	svg(16)
		.child(
			PageElement::new("rect")
				.attr("width", "18")
				.attr("height", "18")
				.attr("x", "3")
				.attr("y", "4")
				.attr("rx", "2"),
		)
		.child(path("M16 2v4"))
		.child(path("M8 2v4"))
		.child(path("M3 10h18"))
}

/// Spinning loader arc.
pub fn spinner() -> PageElement {
	svg(16).child(path("M21 12a9 9 0 1 1-6.219-8.56"))
}

/// Horizontal ellipsis.
pub fn ellipsis() -> PageElement {
	svg(16)
		.child(circle_at("12"))
		.child(circle_at("19"))
		.child(circle_at("5"))
}

fn circle_at(cx: &str) -> PageElement {
	PageElement::new("circle")
		.attr("cx", cx)
		.attr("cy", "12")
		.attr("r", "1")
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_icons_are_hidden_from_assistive_tech() {
		for icon in [check(), chevron_down(), chevron_right(), x(), circle(), calendar(), spinner(), ellipsis()] {
			assert_eq!(icon.tag_name(), "svg");
			assert_eq!(icon.attributes().get_str("aria-hidden"), Some("true"));
		}
	}

	#[rstest]
	fn test_check_markup() {
		let html = check().render_to_string();
		assert!(html.starts_with("<svg xmlns=\"http://www.w3.org/2000/svg\" width=\"16\""));
		assert!(html.contains("<path d=\"M20 6 9 17l-5-5\"></path>"));
	}
}
