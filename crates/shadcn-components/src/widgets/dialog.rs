//! Dialog, alert dialog and sheet
//!
//! All three share one layout: an optional trigger, an overlay and a content
//! panel with a header (title, description), a body and a footer. Ids are
//! derived from one seed:
//!
//! | part | id |
//! |------|----|
//! | trigger | `{seed}-trigger` |
//! | content | `{seed}-content` |
//! | title | `{seed}-title` |
//! | description | `{seed}-description` |
//!
//! The trigger's `aria-controls` names the content; the content is labelled
//! by the title and described by the description when they are present.

use shadcn_core::{AriaIds, Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{
	ButtonSize, ButtonVariant, Component, RenderContext, Side, TriggerSlot,
};
use crate::icons;

use super::{HIDDEN_STYLE, flag, open_state};

/// Content shared by every modal widget.
#[derive(Debug, Clone, Default)]
struct ModalContent {
	trigger: Option<TriggerSlot>,
	title: Option<String>,
	description: Option<String>,
	body: Vec<Page>,
	footer: Vec<Page>,
	open: bool,
}

/// How one modal flavor renders.
struct ModalKind<'a> {
	/// Behavior controller, also the prefix of target/value attributes
	controller: &'static str,
	/// Style registry component
	styles: &'static str,
	role: &'static str,
	id_prefix: &'static str,
	content_selections: &'a [(&'a str, &'a str)],
	side: Option<Side>,
	overlay_closes: bool,
}

impl ModalContent {
	fn trigger_page(&self, ctx: &RenderContext, kind: &ModalKind<'_>, ids: &AriaIds) -> Page {
		let Some(slot) = &self.trigger else {
			return Page::Empty;
		};
		let controller = kind.controller;
		let computed = Attributes::new()
			.with("id", ids.trigger())
			.aria("haspopup", "dialog")
			.aria("expanded", self.open)
			.aria("controls", ids.content())
			.data("state", open_state(self.open))
			.data(&format!("{controller}-target"), "trigger")
			.data("action", format!("click->{controller}#open"));
		let fallback = PageElement::new("button").attr("type", "button").class(&ctx.classes(
			"button",
			"root",
			&[
				("variant", ButtonVariant::Outline.as_str()),
				("size", ButtonSize::Default.as_str()),
			],
		));
		slot.build(fallback, &computed).into_page()
	}

	fn header(&self, ctx: &RenderContext, kind: &ModalKind<'_>, ids: &AriaIds) -> Option<PageElement> {
		if self.title.is_none() && self.description.is_none() {
			return None;
		}
		let title = self.title.as_ref().map(|title| {
			PageElement::new("h2")
				.attr("id", ids.title())
				.class(&ctx.classes(kind.styles, "title", &[]))
				.child(title.clone())
		});
		let description = self.description.as_ref().map(|description| {
			PageElement::new("p")
				.attr("id", ids.description())
				.class(&ctx.classes(kind.styles, "description", &[]))
				.child(description.clone())
		});
		Some(
			PageElement::new("div")
				.class(&ctx.classes(kind.styles, "header", &[]))
				.child(title)
				.child(description),
		)
	}

	fn footer(&self, ctx: &RenderContext, kind: &ModalKind<'_>, extra: Vec<Page>) -> Option<PageElement> {
		if self.footer.is_empty() && extra.is_empty() {
			return None;
		}
		Some(
			PageElement::new("div")
				.class(&ctx.classes(kind.styles, "footer", &[]))
				.children(self.footer.iter().cloned())
				.children(extra),
		)
	}

	/// Builds the full widget. `footer_extra` lands after caller footer
	/// content; `close` is the corner close button, if any.
	fn render(
		&self,
		ctx: &RenderContext,
		kind: &ModalKind<'_>,
		root_attrs: &Attributes,
		footer_extra: Vec<Page>,
		close: Option<PageElement>,
	) -> Page {
		let ids = ctx.aria_ids(root_attrs.id(), kind.id_prefix);
		let controller = kind.controller;
		let state = open_state(self.open);
		let target = format!("{controller}-target");

		let mut overlay = PageElement::new("div")
			.data("state", state)
			.aria("hidden", true)
			.class(&ctx.classes(kind.styles, "overlay", &[]))
			.data(&target, "overlay");
		if kind.overlay_closes {
			overlay = overlay.data("action", format!("click->{controller}#close"));
		}

		let mut content = PageElement::new("div")
			.attr("id", ids.content())
			.attr("role", kind.role)
			.aria("modal", true)
			.aria_opt("labelledby", self.title.as_ref().map(|_| ids.title()))
			.aria_opt("describedby", self.description.as_ref().map(|_| ids.description()))
			.data("state", state)
			.data_opt("side", kind.side.map(|side| side.as_str()))
			.attr("tabindex", "-1")
			.class(&ctx.classes(kind.styles, "content", kind.content_selections))
			.data(&target, "content")
			.data("action", format!("keydown.esc->{controller}#close"))
			.child(self.header(ctx, kind, &ids))
			.children(self.body.iter().cloned())
			.child(self.footer(ctx, kind, footer_extra))
			.child(close);
		if !self.open {
			overlay = overlay.attr("style", HIDDEN_STYLE);
			content = content.attr("style", HIDDEN_STYLE);
		}

		PageElement::new("div")
			.attr("id", ids.seed())
			.class(&ctx.classes(kind.styles, "root", &[]))
			.data("controller", controller)
			.data(&format!("{controller}-is-open-value"), flag(self.open))
			.attrs(root_attrs)
			.child(self.trigger_page(ctx, kind, &ids))
			.child(overlay)
			.child(content)
			.into_page()
	}
}

/// The corner `×` button.
fn close_button(ctx: &RenderContext, styles: &str, controller: &str) -> PageElement {
	PageElement::new("button")
		.attr("type", "button")
		.class(&ctx.classes(styles, "close", &[]))
		.data("action", format!("click->{controller}#close"))
		.child(icons::x())
		.child(PageElement::new("span").class("sr-only").child("Close"))
}

/// Builder methods shared by the modal widgets.
macro_rules! modal_builders {
	($ty:ty) => {
		impl $ty {
			/// Sets the trigger: a label, content, or an `as_child` element.
			pub fn trigger(mut self, trigger: impl Into<TriggerSlot>) -> Self {
				self.content.trigger = Some(trigger.into());
				self
			}

			/// Sets the title; the content is labelled by it.
			pub fn title(mut self, title: impl Into<String>) -> Self {
				self.content.title = Some(title.into());
				self
			}

			/// Sets the description; the content is described by it.
			pub fn description(mut self, description: impl Into<String>) -> Self {
				self.content.description = Some(description.into());
				self
			}

			/// Appends body content.
			pub fn body(mut self, body: impl IntoPage) -> Self {
				self.content.body.push(body.into_page());
				self
			}

			/// Appends footer content.
			pub fn footer(mut self, footer: impl IntoPage) -> Self {
				self.content.footer.push(footer.into_page());
				self
			}

			/// Initial open state.
			pub fn open(mut self, open: bool) -> Self {
				self.content.open = open;
				self
			}
		}
	};
}

/// A modal dialog.
///
/// Behavior hooks: controller `dialog`, value `data-dialog-is-open-value`,
/// targets `trigger`, `overlay` and `content`; actions `dialog#open` and
/// `dialog#close`.
///
/// # Example
///
/// ```
/// use shadcn_components::{Component, Dialog, RenderContext};
///
/// let html = Dialog::new()
///     .id("confirm")
///     .trigger("Open")
///     .title("Are you sure?")
///     .render(&RenderContext::default())
///     .unwrap();
/// assert!(html.contains("aria-controls=\"confirm-content\""));
/// assert!(html.contains("id=\"confirm-content\""));
/// ```
#[derive(Debug, Clone)]
pub struct Dialog {
	content: ModalContent,
	show_close: bool,
	attrs: Attributes,
}

impl Default for Dialog {
	fn default() -> Self {
		Self::new()
	}
}

impl Dialog {
	/// Creates a closed dialog with a close button.
	pub fn new() -> Self {
		Self {
			content: ModalContent::default(),
			show_close: true,
			attrs: Attributes::new(),
		}
	}

	/// Shows or hides the corner close button.
	pub fn show_close(mut self, show_close: bool) -> Self {
		self.show_close = show_close;
		self
	}
}

modal_builders!(Dialog);
root_attrs!(Dialog);

impl Component for Dialog {
	fn name(&self) -> &'static str {
		"dialog"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let kind = ModalKind {
			controller: "dialog",
			styles: "dialog",
			role: "dialog",
			id_prefix: "dialog",
			content_selections: &[],
			side: None,
			overlay_closes: true,
		};
		let close = self
			.show_close
			.then(|| close_button(ctx, "dialog", "dialog"));
		Ok(self.content.render(ctx, &kind, &self.attrs, Vec::new(), close))
	}
}

/// A dialog that interrupts the user to confirm an action.
///
/// It has no close button and clicking the overlay does nothing; the user
/// must pick the action or cancel.
///
/// Behavior hooks: controller `alert-dialog`, value
/// `data-alert-dialog-is-open-value`; the cancel button runs
/// `alert-dialog#close`.
#[derive(Debug, Clone)]
pub struct AlertDialog {
	content: ModalContent,
	action: TriggerSlot,
	action_variant: ButtonVariant,
	cancel: String,
	attrs: Attributes,
}

impl Default for AlertDialog {
	fn default() -> Self {
		Self::new()
	}
}

impl AlertDialog {
	/// Creates a closed alert dialog with `Continue`/`Cancel` buttons.
	pub fn new() -> Self {
		Self {
			content: ModalContent::default(),
			action: TriggerSlot::from("Continue"),
			action_variant: ButtonVariant::Default,
			cancel: "Cancel".to_string(),
			attrs: Attributes::new(),
		}
	}

	/// Sets the confirm action: a label, or an `as_child` element such as a
	/// form submit button.
	pub fn action(mut self, action: impl Into<TriggerSlot>) -> Self {
		self.action = action.into();
		self
	}

	/// Styles the default action button.
	pub fn action_variant(mut self, variant: ButtonVariant) -> Self {
		self.action_variant = variant;
		self
	}

	/// Sets the cancel label.
	pub fn cancel(mut self, label: impl Into<String>) -> Self {
		self.cancel = label.into();
		self
	}
}

modal_builders!(AlertDialog);
root_attrs!(AlertDialog);

impl Component for AlertDialog {
	fn name(&self) -> &'static str {
		"alert_dialog"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let kind = ModalKind {
			controller: "alert-dialog",
			styles: "alert_dialog",
			role: "alertdialog",
			id_prefix: "alert-dialog",
			content_selections: &[],
			side: None,
			overlay_closes: false,
		};

		let button_classes = |variant: ButtonVariant| {
			ctx.classes("button", "root", &[("variant", variant.as_str())])
		};
		let cancel = PageElement::new("button")
			.attr("type", "button")
			.class(&button_classes(ButtonVariant::Outline))
			.class(&ctx.classes("alert_dialog", "cancel", &[]))
			.data("action", "click->alert-dialog#close")
			.child(self.cancel.clone());
		let action = self.action.build(
			PageElement::new("button")
				.attr("type", "button")
				.class(&button_classes(self.action_variant))
				.class(&ctx.classes("alert_dialog", "action", &[])),
			&Attributes::new().data("alert_dialog_target", "action"),
		);

		Ok(self.content.render(
			ctx,
			&kind,
			&self.attrs,
			vec![cancel.into_page(), action.into_page()],
			None,
		))
	}
}

/// A dialog sliding in from a screen edge.
///
/// Shares the `dialog` behavior controller; the panel carries `data-side`.
#[derive(Debug, Clone)]
pub struct Sheet {
	content: ModalContent,
	side: Side,
	attrs: Attributes,
}

impl Default for Sheet {
	fn default() -> Self {
		Self::new()
	}
}

impl Sheet {
	/// Creates a closed sheet on the right edge.
	pub fn new() -> Self {
		Self {
			content: ModalContent::default(),
			side: Side::Right,
			attrs: Attributes::new(),
		}
	}

	/// Sets the edge the sheet slides in from.
	pub fn side(mut self, side: Side) -> Self {
		self.side = side;
		self
	}
}

modal_builders!(Sheet);
root_attrs!(Sheet);

impl Component for Sheet {
	fn name(&self) -> &'static str {
		"sheet"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let selections = [("side", self.side.as_str())];
		let kind = ModalKind {
			controller: "dialog",
			styles: "sheet",
			role: "dialog",
			id_prefix: "sheet",
			content_selections: &selections,
			side: Some(self.side),
			overlay_closes: true,
		};
		let close = close_button(ctx, "sheet", "dialog");
		Ok(self.content.render(ctx, &kind, &self.attrs, Vec::new(), Some(close)))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use regex::Regex;
	use rstest::{fixture, rstest};

	#[fixture]
	fn ctx() -> RenderContext {
		RenderContext::sequential()
	}

	fn attr_value(html: &str, pattern: &str) -> String {
		Regex::new(pattern).unwrap().captures(html).unwrap()[1].to_string()
	}

	#[rstest]
	fn test_dialog_wiring(ctx: RenderContext) {
		let html = Dialog::new()
			.trigger("Edit profile")
			.title("Edit profile")
			.description("Make changes")
			.body(PageElement::new("form"))
			.render(&ctx)
			.unwrap();
		let controls = attr_value(&html, r#"aria-controls="([^"]+)""#);
		let content = attr_value(&html, r#"<div id="([^"]+)" role="dialog""#);
		assert_eq!(controls, content);
		assert!(html.contains("aria-labelledby=\"dialog-1-title\""));
		assert!(html.contains("aria-describedby=\"dialog-1-description\""));
		assert!(html.contains("<h2 id=\"dialog-1-title\""));
		assert!(html.contains("data-controller=\"dialog\" data-dialog-is-open-value=\"false\""));
		assert!(html.contains("data-action=\"click->dialog#open\""));
		assert!(html.contains("data-action=\"click->dialog#close\""));
	}

	#[rstest]
	fn test_closed_dialog_is_hidden(ctx: RenderContext) {
		let html = Dialog::new().trigger("Open").render(&ctx).unwrap();
		assert_eq!(html.matches("style=\"display:none\"").count(), 2);
		assert!(html.contains("aria-expanded=\"false\""));
		assert!(!html.contains("aria-labelledby"));
	}

	#[rstest]
	fn test_open_dialog(ctx: RenderContext) {
		let html = Dialog::new().open(true).render(&ctx).unwrap();
		assert!(!html.contains("display:none"));
		assert!(html.contains("data-dialog-is-open-value=\"true\""));
		assert_eq!(html.matches("data-state=\"open\"").count(), 2);
	}

	#[rstest]
	fn test_dialog_as_child_trigger(ctx: RenderContext) {
		let html = Dialog::new()
			.trigger(TriggerSlot::as_child(
				PageElement::new("a")
					.attr("href", "#")
					.data("action", "click->tracking#log")
					.child("Open"),
			))
			.render(&ctx)
			.unwrap();
		assert!(html.contains("<a href=\"#\" data-action=\"click->tracking#log click->dialog#open\" id=\"dialog-1-trigger\""));
		assert!(html.contains(">Open</a>"));
	}

	#[rstest]
	fn test_dialog_caller_controller_is_appended(ctx: RenderContext) {
		let html = Dialog::new().data("controller", "analytics").render(&ctx).unwrap();
		assert!(html.contains("data-controller=\"dialog analytics\""));
	}

	#[rstest]
	fn test_alert_dialog(ctx: RenderContext) {
		let html = AlertDialog::new()
			.trigger("Delete")
			.title("Delete account?")
			.action_variant(ButtonVariant::Destructive)
			.action("Delete")
			.render(&ctx)
			.unwrap();
		assert!(html.contains("role=\"alertdialog\""));
		assert!(html.contains("data-controller=\"alert-dialog\""));
		assert!(html.contains("data-alert-dialog-target=\"content\""));
		assert!(html.contains("data-action=\"click->alert-dialog#close\""));
		assert!(html.contains("bg-destructive"));
		assert!(!html.contains("sr-only"));
		assert!(!html.contains("click->alert-dialog#close\" aria-hidden"));
	}

	#[rstest]
	#[case(Side::Left, "left-0")]
	#[case(Side::Top, "top-0")]
	fn test_sheet_side(ctx: RenderContext, #[case] side: Side, #[case] class: &str) {
		let html = Sheet::new().side(side).title("Menu").render(&ctx).unwrap();
		assert!(html.contains("data-controller=\"dialog\""));
		assert!(html.contains(&format!("data-side=\"{}\"", side.as_str())));
		assert!(html.contains(class));
		assert!(html.contains("id=\"sheet-1-content\""));
	}
}
