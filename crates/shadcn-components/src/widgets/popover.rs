//! Floating content: popover, hover card and tooltip
//!
//! Each renders a root holding a trigger and a content panel positioned on
//! one `side` of the trigger with an `align`ment. Trigger and content ids
//! derive from one seed (`{seed}-trigger`, `{seed}-content`).

use shadcn_core::{AriaIds, Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{
	Align, ButtonSize, ButtonVariant, Component, RenderContext, Side, TriggerSlot,
};

use super::{HIDDEN_STYLE, flag, open_state};

/// Options shared by the floating widgets.
#[derive(Debug, Clone)]
struct Floating {
	trigger: TriggerSlot,
	content: Vec<Page>,
	side: Side,
	align: Align,
	open: bool,
}

impl Floating {
	fn new(trigger: TriggerSlot, side: Side) -> Self {
		Self {
			trigger,
			content: Vec::new(),
			side,
			align: Align::Center,
			open: false,
		}
	}
}

/// How one floating flavor wires itself.
struct FloatingKind {
	controller: &'static str,
	styles: &'static str,
	id_prefix: &'static str,
	trigger_variant: ButtonVariant,
	trigger_actions: &'static str,
	content_role: Option<&'static str>,
	content_actions: Option<&'static str>,
}

impl Floating {
	fn render(
		&self,
		ctx: &RenderContext,
		kind: &FloatingKind,
		root_attrs: &Attributes,
		values: &[(&str, String)],
		trigger_aria: impl FnOnce(Attributes, &AriaIds) -> Attributes,
	) -> Page {
		let ids = ctx.aria_ids(root_attrs.id(), kind.id_prefix);
		let controller = kind.controller;
		let target = format!("{controller}-target");
		let state = open_state(self.open);

		let computed = trigger_aria(
			Attributes::new()
				.with("id", ids.trigger())
				.data("state", state),
			&ids,
		)
		.data(&target, "trigger")
		.data("action", kind.trigger_actions);
		let fallback = PageElement::new("button").attr("type", "button").class(&ctx.classes(
			"button",
			"root",
			&[
				("variant", kind.trigger_variant.as_str()),
				("size", ButtonSize::Default.as_str()),
			],
		));
		let trigger = self.trigger.build(fallback, &computed);

		let mut content = PageElement::new("div")
			.attr("id", ids.content())
			.attr_opt("role", kind.content_role)
			.data("state", state)
			.data("side", self.side.as_str())
			.data("align", self.align.as_str())
			.class(&ctx.classes(kind.styles, "content", &[("side", self.side.as_str())]))
			.data(&target, "content")
			.data_opt("action", kind.content_actions)
			.children(self.content.iter().cloned());
		if !self.open {
			content = content.attr("style", HIDDEN_STYLE);
		}

		let mut root = PageElement::new("div")
			.attr("id", ids.seed())
			.class(&ctx.classes(kind.styles, "root", &[]))
			.data("controller", controller)
			.data(&format!("{controller}-open-value"), flag(self.open));
		for (key, value) in values {
			root = root.data(&format!("{controller}-{key}-value"), value.as_str());
		}
		root.attrs(root_attrs)
			.child(trigger)
			.child(content)
			.into_page()
	}
}

/// Builder methods shared by the floating widgets.
macro_rules! floating_builders {
	($ty:ty) => {
		impl $ty {
			/// Appends panel content.
			pub fn content(mut self, content: impl IntoPage) -> Self {
				self.floating.content.push(content.into_page());
				self
			}

			/// Sets the side of the trigger the panel opens on.
			pub fn side(mut self, side: Side) -> Self {
				self.floating.side = side;
				self
			}

			/// Sets the alignment along that side.
			pub fn align(mut self, align: Align) -> Self {
				self.floating.align = align;
				self
			}

			/// Initial open state.
			pub fn open(mut self, open: bool) -> Self {
				self.floating.open = open;
				self
			}
		}
	};
}

/// A click-toggled floating panel.
///
/// Behavior hooks: controller `popover`, value `data-popover-open-value`,
/// targets `trigger` and `content`, action `click->popover#toggle`.
#[derive(Debug, Clone)]
pub struct Popover {
	floating: Floating,
	attrs: Attributes,
}

impl Popover {
	/// Creates a closed popover opening below its trigger.
	pub fn new(trigger: impl Into<TriggerSlot>) -> Self {
		Self {
			floating: Floating::new(trigger.into(), Side::Bottom),
			attrs: Attributes::new(),
		}
	}
}

floating_builders!(Popover);
root_attrs!(Popover);

impl Component for Popover {
	fn name(&self) -> &'static str {
		"popover"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let kind = FloatingKind {
			controller: "popover",
			styles: "popover",
			id_prefix: "popover",
			trigger_variant: ButtonVariant::Outline,
			trigger_actions: "click->popover#toggle",
			content_role: Some("dialog"),
			content_actions: Some("keydown.esc->popover#close"),
		};
		let open = self.floating.open;
		Ok(self.floating.render(ctx, &kind, &self.attrs, &[], |attrs, ids| {
			attrs
				.aria("haspopup", "dialog")
				.aria("expanded", open)
				.aria("controls", ids.content())
		}))
	}
}

/// A panel previewing content while the pointer rests on its trigger.
///
/// Behavior hooks: controller `hover-card`, values
/// `data-hover-card-open-delay-value` and `-close-delay-value`, actions
/// `mouseenter->hover-card#show` and `mouseleave->hover-card#hide` on both
/// trigger and content.
#[derive(Debug, Clone)]
pub struct HoverCard {
	floating: Floating,
	open_delay: u32,
	close_delay: u32,
	attrs: Attributes,
}

impl HoverCard {
	/// Creates a hidden hover card with 700/300 ms delays.
	pub fn new(trigger: impl Into<TriggerSlot>) -> Self {
		Self {
			floating: Floating::new(trigger.into(), Side::Bottom),
			open_delay: 700,
			close_delay: 300,
			attrs: Attributes::new(),
		}
	}

	/// Milliseconds before showing.
	pub fn open_delay(mut self, ms: u32) -> Self {
		self.open_delay = ms;
		self
	}

	/// Milliseconds before hiding.
	pub fn close_delay(mut self, ms: u32) -> Self {
		self.close_delay = ms;
		self
	}
}

floating_builders!(HoverCard);
root_attrs!(HoverCard);

impl Component for HoverCard {
	fn name(&self) -> &'static str {
		"hover_card"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let kind = FloatingKind {
			controller: "hover-card",
			styles: "hover_card",
			id_prefix: "hover-card",
			trigger_variant: ButtonVariant::Link,
			trigger_actions: "mouseenter->hover-card#show mouseleave->hover-card#hide focus->hover-card#show blur->hover-card#hide",
			content_role: None,
			content_actions: Some("mouseenter->hover-card#show mouseleave->hover-card#hide"),
		};
		let values = [
			("open-delay", self.open_delay.to_string()),
			("close-delay", self.close_delay.to_string()),
		];
		let open = self.floating.open;
		Ok(self.floating.render(ctx, &kind, &self.attrs, &values, |attrs, ids| {
			attrs
				.aria("expanded", open)
				.aria("controls", ids.content())
		}))
	}
}

/// A short label shown on hover or focus.
///
/// The trigger is described by the tooltip (`aria-describedby`).
///
/// Behavior hooks: controller `tooltip`, value
/// `data-tooltip-delay-value`, actions `tooltip#show`/`tooltip#hide`.
#[derive(Debug, Clone)]
pub struct Tooltip {
	floating: Floating,
	delay: u32,
	attrs: Attributes,
}

impl Tooltip {
	/// Creates a hidden tooltip above its trigger.
	pub fn new(trigger: impl Into<TriggerSlot>, text: impl Into<String>) -> Self {
		let mut floating = Floating::new(trigger.into(), Side::Top);
		floating.content.push(Page::text(text.into()));
		Self {
			floating,
			delay: 0,
			attrs: Attributes::new(),
		}
	}

	/// Milliseconds before showing.
	pub fn delay(mut self, ms: u32) -> Self {
		self.delay = ms;
		self
	}
}

floating_builders!(Tooltip);
root_attrs!(Tooltip);

impl Component for Tooltip {
	fn name(&self) -> &'static str {
		"tooltip"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let kind = FloatingKind {
			controller: "tooltip",
			styles: "tooltip",
			id_prefix: "tooltip",
			trigger_variant: ButtonVariant::Outline,
			trigger_actions: "mouseenter->tooltip#show mouseleave->tooltip#hide focus->tooltip#show blur->tooltip#hide",
			content_role: Some("tooltip"),
			content_actions: None,
		};
		let values = [("delay", self.delay.to_string())];
		Ok(self
			.floating
			.render(ctx, &kind, &self.attrs, &values, |attrs, ids| {
				attrs.aria("describedby", ids.content())
			}))
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn ctx() -> RenderContext {
		RenderContext::sequential()
	}

	#[rstest]
	fn test_popover_wiring(ctx: RenderContext) {
		let html = Popover::new("Settings")
			.content("Body")
			.side(Side::Right)
			.align(Align::Start)
			.render(&ctx)
			.unwrap();
		assert!(html.contains("aria-controls=\"popover-1-content\""));
		assert!(html.contains(
			"<div id=\"popover-1-content\" role=\"dialog\" data-state=\"closed\" data-side=\"right\" data-align=\"start\""
		));
		assert!(html.contains("left-full"));
		assert!(html.contains("data-action=\"click->popover#toggle\""));
		assert!(html.contains("data-popover-open-value=\"false\""));
	}

	#[rstest]
	fn test_hover_card_actions(ctx: RenderContext) {
		let html = HoverCard::new("@shadcn")
			.content("Profile")
			.open_delay(200)
			.render(&ctx)
			.unwrap();
		assert!(html.contains("mouseenter->hover-card#show mouseleave->hover-card#hide"));
		assert!(html.contains("aria-controls=\"hover-card-1-content\""));
		assert!(html.contains("data-hover-card-open-delay-value=\"200\""));
		assert!(html.contains("data-hover-card-close-delay-value=\"300\""));
	}

	#[rstest]
	fn test_tooltip_describes_trigger(ctx: RenderContext) {
		let html = Tooltip::new("Hover", "Add to library").render(&ctx).unwrap();
		assert!(html.contains("aria-describedby=\"tooltip-1-content\""));
		assert!(html.contains("<div id=\"tooltip-1-content\" role=\"tooltip\""));
		assert!(html.contains("data-side=\"top\""));
		assert!(html.contains(">Add to library</div>"));
	}
}
