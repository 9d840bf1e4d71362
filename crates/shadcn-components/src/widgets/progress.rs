//! Progress bar

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};

/// A horizontal progress bar.
///
/// The value is clamped into `0..=max`; without a value the bar is
/// indeterminate and `aria-valuenow` is left out.
#[derive(Debug, Clone)]
pub struct Progress {
	value: Option<f64>,
	max: f64,
	attrs: Attributes,
}

impl Default for Progress {
	fn default() -> Self {
		Self::new()
	}
}

impl Progress {
	/// Creates an indeterminate bar out of 100.
	pub fn new() -> Self {
		Self {
			value: None,
			max: 100.0,
			attrs: Attributes::new(),
		}
	}

	/// Sets the current value.
	pub fn value(mut self, value: f64) -> Self {
		self.value = Some(value);
		self
	}

	/// Sets the maximum; non-positive maxima fall back to 100.
	pub fn max(mut self, max: f64) -> Self {
		self.max = max;
		self
	}

	fn effective_max(&self) -> f64 {
		if self.max.is_finite() && self.max > 0.0 { self.max } else { 100.0 }
	}

	fn clamped_value(&self) -> Option<f64> {
		let max = self.effective_max();
		self.value
			.filter(|value| !value.is_nan())
			.map(|value| value.clamp(0.0, max))
	}
}

root_attrs!(Progress);

impl Component for Progress {
	fn name(&self) -> &'static str {
		"progress"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let max = self.effective_max();
		let value = self.clamped_value();
		let state = match value {
			None => "indeterminate",
			Some(value) if value >= max => "complete",
			Some(_) => "loading",
		};
		let percent = value.map_or(0.0, |value| value * 100.0 / max);

		let indicator = PageElement::new("div")
			.data("state", state)
			.class(&ctx.classes("progress", "indicator", &[]))
			.attr("style", format!("transform: translateX(-{}%)", 100.0 - percent));

		Ok(PageElement::new("div")
			.attr("role", "progressbar")
			.aria("valuemin", 0)
			.aria("valuemax", max)
			.aria_opt("valuenow", value)
			.data("state", state)
			.data_opt("value", value)
			.data("max", max)
			.class(&ctx.classes("progress", "root", &[]))
			.attrs(&self.attrs)
			.child(indicator)
			.into_page())
	}
}
