//! Toasts
//!
//! A [`Toaster`] is the fixed viewport list; each [`Toast`] is one
//! notification inside it, labelled by its title and described by its
//! description (`{seed}-title`, `{seed}-description`).

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Component, RenderContext, TriggerSlot, style_key};
use crate::icons;

use super::{flag, open_state};

/// Default `data-toast-duration-value` in milliseconds.
const DEFAULT_DURATION: u32 = 5000;

style_key! {
	/// Toast look
	pub enum ToastVariant {
		/// Neutral
		Default => "default",
		/// Error, announced assertively
		Destructive => "destructive",
		/// Confirmation
		Success => "success",
	}
	default = Default;
}

/// A transient notification.
///
/// Behavior hooks: controller `toast`, values `data-toast-duration-value`
/// and `data-toast-open-value`, targets `action` and `close`, actions
/// `toast#pause`/`toast#resume` on hover and `click->toast#dismiss` on the
/// close button.
#[derive(Debug, Clone)]
pub struct Toast {
	title: Option<Page>,
	description: Option<Page>,
	variant: ToastVariant,
	action: Option<TriggerSlot>,
	closable: bool,
	duration: u32,
	open: bool,
	attrs: Attributes,
}

impl Default for Toast {
	fn default() -> Self {
		Self::new()
	}
}

impl Toast {
	/// Creates an open, closable toast dismissed after five seconds.
	pub fn new() -> Self {
		Self {
			title: None,
			description: None,
			variant: ToastVariant::default(),
			action: None,
			closable: true,
			duration: DEFAULT_DURATION,
			open: true,
			attrs: Attributes::new(),
		}
	}

	/// Sets the heading.
	pub fn title(mut self, title: impl IntoPage) -> Self {
		self.title = Some(title.into_page());
		self
	}

	/// Sets the body text.
	pub fn description(mut self, description: impl IntoPage) -> Self {
		self.description = Some(description.into_page());
		self
	}

	/// Sets the variant.
	pub fn variant(mut self, variant: ToastVariant) -> Self {
		self.variant = variant;
		self
	}

	/// Adds an action button, or a caller element as the action.
	pub fn action(mut self, action: impl Into<TriggerSlot>) -> Self {
		self.action = Some(action.into());
		self
	}

	/// Whether to render the close button.
	pub fn closable(mut self, closable: bool) -> Self {
		self.closable = closable;
		self
	}

	/// Milliseconds before auto-dismissal; `0` keeps the toast until closed.
	pub fn duration(mut self, duration: u32) -> Self {
		self.duration = duration;
		self
	}

	/// Initial open state.
	pub fn open(mut self, open: bool) -> Self {
		self.open = open;
		self
	}
}

root_attrs!(Toast);

impl Component for Toast {
	fn name(&self) -> &'static str {
		"toast"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let ids = ctx.aria_ids(self.attrs.id(), "toast");
		let live = match self.variant {
			ToastVariant::Destructive => "assertive",
			ToastVariant::Default | ToastVariant::Success => "polite",
		};

		let text = PageElement::new("div")
			.class("grid gap-1")
			.child(self.title.clone().map(|title| {
				PageElement::new("div")
					.attr("id", ids.title())
					.class(&ctx.classes("toast", "title", &[]))
					.child(title)
			}))
			.child(self.description.clone().map(|description| {
				PageElement::new("div")
					.attr("id", ids.description())
					.class(&ctx.classes("toast", "description", &[]))
					.child(description)
			}));

		let action = self.action.as_ref().map(|slot| {
			let computed = Attributes::new()
				.data("toast_target", "action")
				.data("action", "click->toast#dismiss");
			let fallback = PageElement::new("button")
				.attr("type", "button")
				.class(&ctx.classes("toast", "action", &[]));
			slot.build(fallback, &computed)
		});

		let close = self.closable.then(|| {
			PageElement::new("button")
				.attr("type", "button")
				.aria("label", "Close")
				.class(&ctx.classes("toast", "close", &[]))
				.data("toast_target", "close")
				.data("action", "click->toast#dismiss")
				.child(icons::x())
		});

		Ok(PageElement::new("li")
			.attr("id", ids.seed())
			.attr("role", "status")
			.aria("live", live)
			.aria("atomic", true)
			.aria_opt("labelledby", self.title.as_ref().map(|_| ids.title()))
			.aria_opt("describedby", self.description.as_ref().map(|_| ids.description()))
			.attr("tabindex", "0")
			.data("state", open_state(self.open))
			.data("variant", self.variant.as_str())
			.class(&ctx.classes("toast", "root", &[("variant", self.variant.as_str())]))
			.data("controller", "toast")
			.data("toast_duration_value", self.duration)
			.data("toast_open_value", flag(self.open))
			.data("action", "mouseenter->toast#pause mouseleave->toast#resume")
			.attrs(&self.attrs)
			.child(text)
			.child(action)
			.child(close)
			.into_page())
	}
}

/// The viewport holding rendered toasts.
///
/// Behavior hooks: target `data-toast-target="viewport"` where the behavior
/// layer appends toasts created on the client.
#[derive(Debug, Clone, Default)]
pub struct Toaster {
	toasts: Vec<Toast>,
	attrs: Attributes,
}

impl Toaster {
	/// Creates an empty viewport.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds a toast rendered on page load.
	pub fn toast(mut self, toast: Toast) -> Self {
		self.toasts.push(toast);
		self
	}
}

root_attrs!(Toaster);

impl Component for Toaster {
	fn name(&self) -> &'static str {
		"toaster"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let toasts = self
			.toasts
			.iter()
			.map(|toast| toast.to_page(ctx))
			.collect::<Result<Vec<_>>>()?;

		Ok(PageElement::new("ol")
			.attr("tabindex", "-1")
			.aria("label", "Notifications")
			.class(&ctx.classes("toast", "viewport", &[]))
			.data("toast_target", "viewport")
			.attrs(&self.attrs)
			.children(toasts)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	fn test_toast_wiring() {
		let html = Toast::new()
			.title("Scheduled")
			.description("Friday, February 10")
			.action("Undo")
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("role=\"status\" aria-live=\"polite\""));
		assert!(html.contains("aria-labelledby=\"toast-1-title\" aria-describedby=\"toast-1-description\""));
		assert!(html.contains("<div id=\"toast-1-title\""));
		assert!(html.contains("data-toast-duration-value=\"5000\""));
		assert!(html.contains(">Undo</button>"));
		assert!(html.contains("aria-label=\"Close\""));
	}

	#[rstest]
	#[case(ToastVariant::Destructive, "assertive", "bg-destructive")]
	#[case(ToastVariant::Success, "polite", "border-green-500")]
	fn test_toast_variants(#[case] variant: ToastVariant, #[case] live: &str, #[case] class: &str) {
		let html = Toast::new()
			.title("Done")
			.variant(variant)
			.closable(false)
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains(&format!("aria-live=\"{live}\"")));
		assert!(html.contains(class));
		assert!(!html.contains("aria-describedby"));
		assert!(!html.contains("aria-label=\"Close\""));
	}

	#[rstest]
	fn test_toaster_gives_each_toast_its_ids() {
		let html = Toaster::new()
			.toast(Toast::new().title("One"))
			.toast(Toast::new().title("Two"))
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.starts_with("<ol tabindex=\"-1\" aria-label=\"Notifications\""));
		assert!(html.contains("id=\"toast-1-title\""));
		assert!(html.contains("id=\"toast-2-title\""));
	}
}
