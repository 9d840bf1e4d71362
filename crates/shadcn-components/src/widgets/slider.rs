//! Slider
//!
//! A single-thumb slider submits one value; a range slider submits two,
//! each under its own name. Range sliders must be given exactly two names
//! (and two values when values are set); anything else is rejected when the
//! slider renders.

use shadcn_core::{Attributes, ComponentError, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext};

use super::flag;

/// A slider.
///
/// Behavior hooks: controller `slider`, values `data-slider-min-value`,
/// `data-slider-max-value`, `data-slider-step-value`, targets `track`,
/// `range`, `thumb` and `input`.
#[derive(Debug, Clone)]
pub struct Slider {
	names: Vec<String>,
	values: Vec<f64>,
	range: bool,
	min: f64,
	max: f64,
	step: f64,
	disabled: bool,
	attrs: Attributes,
}

impl Default for Slider {
	fn default() -> Self {
		Self::new()
	}
}

impl Slider {
	/// Creates a 0–100 single-thumb slider.
	pub fn new() -> Self {
		Self {
			names: Vec::new(),
			values: Vec::new(),
			range: false,
			min: 0.0,
			max: 100.0,
			step: 1.0,
			disabled: false,
			attrs: Attributes::new(),
		}
	}

	/// Sets a single field name.
	pub fn name(mut self, name: impl Into<String>) -> Self {
		self.names = vec![name.into()];
		self
	}

	/// Sets field names; a range slider takes `[low, high]`.
	pub fn names<S: Into<String>>(mut self, names: impl IntoIterator<Item = S>) -> Self {
		self.names = names.into_iter().map(Into::into).collect();
		self
	}

	/// Sets a single value.
	pub fn value(mut self, value: f64) -> Self {
		self.values = vec![value];
		self
	}

	/// Sets values; a range slider takes `[low, high]`.
	pub fn values(mut self, values: impl IntoIterator<Item = f64>) -> Self {
		self.values = values.into_iter().collect();
		self
	}

	/// Makes this a two-thumb range slider.
	pub fn range(mut self, range: bool) -> Self {
		self.range = range;
		self
	}

	/// Sets the lower bound.
	pub fn min(mut self, min: f64) -> Self {
		self.min = min;
		self
	}

	/// Sets the upper bound.
	pub fn max(mut self, max: f64) -> Self {
		self.max = max;
		self
	}

	/// Sets the step.
	pub fn step(mut self, step: f64) -> Self {
		self.step = step;
		self
	}

	/// Disables the slider.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	/// Checks the option shape and returns the clamped thumb values.
	fn thumb_values(&self) -> Result<Vec<f64>> {
		let invalid = |msg: &str| Err(ComponentError::invalid_property("slider", msg));

		if !self.min.is_finite() || !self.max.is_finite() || self.min >= self.max {
			return invalid("min must be less than max");
		}
		if !self.step.is_finite() || self.step <= 0.0 {
			return invalid("step must be positive");
		}
		if self.values.iter().any(|value| !value.is_finite()) {
			return invalid("values must be finite");
		}

		let thumbs = if self.range { 2 } else { 1 };
		if self.range && self.names.len() != 2 {
			return invalid("a range slider needs exactly two names");
		}
		if !self.range && self.names.len() > 1 {
			return invalid("several names require a range slider");
		}
		if !self.values.is_empty() && self.values.len() != thumbs {
			return invalid(if self.range {
				"a range slider needs exactly two values"
			} else {
				"a single slider takes one value"
			});
		}

		let values: Vec<f64> = match (self.values.is_empty(), self.range) {
			(true, true) => vec![self.min, self.max],
			(true, false) => vec![self.min],
			(false, _) => self
				.values
				.iter()
				.map(|value| value.clamp(self.min, self.max))
				.collect(),
		};
		if self.range && values[0] > values[1] {
			return invalid("range values must be in ascending order");
		}
		Ok(values)
	}

	fn percent(&self, value: f64) -> f64 {
		let percent = (value - self.min) / (self.max - self.min) * 100.0;
		(percent * 100.0).round() / 100.0
	}
}

root_attrs!(Slider);

impl Component for Slider {
	fn name(&self) -> &'static str {
		"slider"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let values = self.thumb_values()?;
		let id = ctx.id(self.attrs.id(), "slider");

		let (start, end) = match values.as_slice() {
			[low, high] => (self.percent(*low), 100.0 - self.percent(*high)),
			[value] => (0.0, 100.0 - self.percent(*value)),
			_ => (0.0, 100.0),
		};

		let track = PageElement::new("span")
			.class(&ctx.classes("slider", "track", &[]))
			.data("slider_target", "track")
			.child(
				PageElement::new("span")
					.class(&ctx.classes("slider", "range", &[]))
					.data("slider_target", "range")
					.attr("style", format!("left: {start}%; right: {end}%")),
			);

		let thumb_labels: &[&str] = if self.range {
			&["Minimum", "Maximum"]
		} else {
			&[]
		};
		let thumbs = values.iter().enumerate().map(|(index, value)| {
			PageElement::new("span")
				.attr("role", "slider")
				.attr("tabindex", if self.disabled { "-1" } else { "0" })
				.aria_opt("label", thumb_labels.get(index).copied())
				.aria("valuemin", self.min)
				.aria("valuemax", self.max)
				.aria("valuenow", *value)
				.aria("orientation", "horizontal")
				.aria_opt("disabled", self.disabled.then_some(true))
				.class(&ctx.classes("slider", "thumb", &[]))
				.attr("style", format!("left: {}%", self.percent(*value)))
				.data("slider_target", "thumb")
				.data("action", "keydown->slider#keydown pointerdown->slider#start")
		});

		let inputs = self.names.iter().zip(&values).map(|(name, value)| {
			PageElement::new("input")
				.attr("type", "hidden")
				.attr("name", name.as_str())
				.attr("value", *value)
				.bool_attr("disabled", self.disabled)
				.data("slider_target", "input")
		});

		Ok(PageElement::new("div")
			.attr("id", id)
			.class(&ctx.classes("slider", "root", &[]))
			.data("controller", "slider")
			.data("range", flag(self.range))
			.data("slider_min_value", self.min)
			.data("slider_max_value", self.max)
			.data("slider_step_value", self.step)
			.data_opt("disabled", self.disabled.then_some(""))
			.attrs(&self.attrs)
			.child(track)
			.children(thumbs)
			.children(inputs)
			.into_page())
	}
}
