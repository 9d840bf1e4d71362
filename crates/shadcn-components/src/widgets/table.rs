//! Data table
//!
//! A plain `<table>` inside a scroll container. Caller attributes land on
//! the container.

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};

/// A table with optional caption, header row and footer row.
#[derive(Debug, Clone, Default)]
pub struct Table {
	caption: Option<Page>,
	headers: Vec<Page>,
	rows: Vec<Vec<Page>>,
	footer: Vec<Page>,
	attrs: Attributes,
}

impl Table {
	/// Creates an empty table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Sets the caption.
	pub fn caption(mut self, caption: impl IntoPage) -> Self {
		self.caption = Some(caption.into_page());
		self
	}

	/// Sets the header cells.
	pub fn headers<C: IntoPage>(mut self, headers: impl IntoIterator<Item = C>) -> Self {
		self.headers = headers.into_iter().map(IntoPage::into_page).collect();
		self
	}

	/// Appends a body row.
	pub fn row<C: IntoPage>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
		self.rows.push(cells.into_iter().map(IntoPage::into_page).collect());
		self
	}

	/// Sets the footer cells.
	pub fn footer<C: IntoPage>(mut self, cells: impl IntoIterator<Item = C>) -> Self {
		self.footer = cells.into_iter().map(IntoPage::into_page).collect();
		self
	}
}

root_attrs!(Table);

fn row(ctx: &RenderContext, cells: &[Page], cell_tag: &'static str) -> PageElement {
	let slot = if cell_tag == "th" { "head" } else { "cell" };
	PageElement::new("tr")
		.class(&ctx.classes("table", "row", &[]))
		.children(cells.iter().map(|cell| {
			PageElement::new(cell_tag)
				.attr_opt("scope", (cell_tag == "th").then_some("col"))
				.class(&ctx.classes("table", slot, &[]))
				.child(cell.clone())
		}))
}

impl Component for Table {
	fn name(&self) -> &'static str {
		"table"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let caption = self.caption.clone().map(|caption| {
			PageElement::new("caption")
				.class(&ctx.classes("table", "caption", &[]))
				.child(caption)
		});
		let head = (!self.headers.is_empty()).then(|| {
			PageElement::new("thead")
				.class(&ctx.classes("table", "header", &[]))
				.child(row(ctx, &self.headers, "th"))
		});
		let body = PageElement::new("tbody")
			.class(&ctx.classes("table", "body", &[]))
			.children(self.rows.iter().map(|cells| row(ctx, cells, "td")));
		let foot = (!self.footer.is_empty()).then(|| {
			PageElement::new("tfoot")
				.class(&ctx.classes("table", "footer", &[]))
				.child(row(ctx, &self.footer, "td"))
		});

		Ok(PageElement::new("div")
			.class(&ctx.classes("table", "container", &[]))
			.attrs(&self.attrs)
			.child(
				PageElement::new("table")
					.class(&ctx.classes("table", "root", &[]))
					.child(caption)
					.child(head)
					.child(body)
					.child(foot),
			)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_invoice_table() {
		let html = Table::new()
			.caption("Recent invoices")
			.headers(["Invoice", "Amount"])
			.row(["INV001", "$250.00"])
			.row(["INV002", "$150.00"])
			.footer(["Total", "$400.00"])
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains(">Recent invoices</caption>"));
		assert_eq!(html.matches("<th scope=\"col\"").count(), 2);
		assert_eq!(html.matches("<td").count(), 6);
		assert!(html.contains("<tfoot"));
	}

	#[rstest]
	fn test_cells_are_escaped() {
		let html = Table::new()
			.row(["<b>bold</b>"])
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("&lt;b&gt;bold&lt;/b&gt;"));
		assert!(!html.contains("<thead"));
	}
}
