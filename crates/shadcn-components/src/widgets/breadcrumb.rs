//! Breadcrumb trail

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};
use crate::icons;

/// One step of a [`Breadcrumb`].
///
/// A step without a path is the current page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BreadcrumbLink {
	/// Visible name
	pub name: String,
	/// Target; `None` marks the current page
	pub path: Option<String>,
}

impl BreadcrumbLink {
	/// A step linking to `path`.
	pub fn new(name: impl Into<String>, path: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			path: Some(path.into()),
		}
	}

	/// The current-page step.
	pub fn current(name: impl Into<String>) -> Self {
		Self {
			name: name.into(),
			path: None,
		}
	}
}

/// A navigation trail with one separator between consecutive steps.
#[derive(Debug, Clone, Default)]
pub struct Breadcrumb {
	links: Vec<BreadcrumbLink>,
	separator: Option<Page>,
	attrs: Attributes,
}

impl Breadcrumb {
	/// Creates an empty trail.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a step; `path: None` marks the current page.
	pub fn link(mut self, name: impl Into<String>, path: Option<&str>) -> Self {
		self.links.push(BreadcrumbLink {
			name: name.into(),
			path: path.map(str::to_string),
		});
		self
	}

	/// Adds steps.
	pub fn links(mut self, links: impl IntoIterator<Item = BreadcrumbLink>) -> Self {
		self.links.extend(links);
		self
	}

	/// Replaces the chevron separator.
	pub fn separator(mut self, separator: impl IntoPage) -> Self {
		self.separator = Some(separator.into_page());
		self
	}
}

root_attrs!(Breadcrumb);

impl Component for Breadcrumb {
	fn name(&self) -> &'static str {
		"breadcrumb"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let separator_content = self
			.separator
			.clone()
			.unwrap_or_else(|| icons::chevron_right().into_page());

		let mut items = Vec::with_capacity(self.links.len() * 2);
		for (index, link) in self.links.iter().enumerate() {
			if index > 0 {
				items.push(
					PageElement::new("li")
						.attr("role", "presentation")
						.aria("hidden", true)
						.class(&ctx.classes("breadcrumb", "separator", &[]))
						.child(separator_content.clone()),
				);
			}
			let step = match &link.path {
				Some(path) => PageElement::new("a")
					.attr("href", path.as_str())
					.class(&ctx.classes("breadcrumb", "link", &[])),
				None => PageElement::new("span")
					.aria("current", "page")
					.attr("role", "link")
					.aria("disabled", true)
					.class(&ctx.classes("breadcrumb", "page", &[])),
			};
			items.push(
				PageElement::new("li")
					.class(&ctx.classes("breadcrumb", "item", &[]))
					.child(step.child(link.name.clone())),
			);
		}

		Ok(PageElement::new("nav")
			.aria("label", "breadcrumb")
			.class(&ctx.classes("breadcrumb", "root", &[]))
			.attrs(&self.attrs)
			.child(
				PageElement::new("ol")
					.class(&ctx.classes("breadcrumb", "list", &[]))
					.children(items),
			)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_home_and_current_page() {
		let html = Breadcrumb::new()
			.link("Home", Some("/"))
			.link("Page", None)
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("<a href=\"/\">Home</a>"));
		assert!(html.contains("aria-current=\"page\""));
		assert!(html.contains("role=\"link\" aria-disabled=\"true\""));
		assert_eq!(html.matches("role=\"presentation\"").count(), 1);
	}

	#[rstest]
	#[case(0, 0)]
	#[case(1, 0)]
	#[case(4, 3)]
	fn test_separator_count(#[case] steps: usize, #[case] separators: usize) {
		let links = (0..steps).map(|i| BreadcrumbLink::new(format!("Step {i}"), format!("/{i}")));
		let html = Breadcrumb::new()
			.links(links)
			.render(&RenderContext::sequential())
			.unwrap();
		assert_eq!(html.matches("role=\"presentation\"").count(), separators);
	}

	#[rstest]
	fn test_custom_separator() {
		let html = Breadcrumb::new()
			.links([BreadcrumbLink::new("Docs", "/docs"), BreadcrumbLink::current("Install")])
			.separator("/")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains(">/</li>"));
		assert!(!html.contains("<svg"));
	}
}
