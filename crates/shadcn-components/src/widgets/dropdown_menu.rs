//! Dropdown menu
//!
//! A trigger opening a `role="menu"` list of items, group labels,
//! separators and nested sub-menus. Each sub-menu gets its own id seed and
//! its own `dropdown-menu-sub` controller.

use shadcn_core::{Attributes, IntoPage, Page, PageElement, Result};

use crate::component::{Align, ButtonSize, ButtonVariant, Component, RenderContext, TriggerSlot};
use crate::icons;

use super::{HIDDEN_STYLE, flag, open_state};

/// One actionable row of a menu.
#[derive(Debug, Clone)]
pub struct MenuItem {
	label: Page,
	href: Option<String>,
	shortcut: Option<String>,
	destructive: bool,
	disabled: bool,
	attrs: Attributes,
}

impl MenuItem {
	/// Creates an item with the given label.
	pub fn new(label: impl IntoPage) -> Self {
		Self {
			label: label.into_page(),
			href: None,
			shortcut: None,
			destructive: false,
			disabled: false,
			attrs: Attributes::new(),
		}
	}

	/// Renders the item as a link.
	pub fn href(mut self, href: impl Into<String>) -> Self {
		self.href = Some(href.into());
		self
	}

	/// Shows a keyboard shortcut hint.
	pub fn shortcut(mut self, shortcut: impl Into<String>) -> Self {
		self.shortcut = Some(shortcut.into());
		self
	}

	/// Uses the destructive look.
	pub fn destructive(mut self, destructive: bool) -> Self {
		self.destructive = destructive;
		self
	}

	/// Disables the item.
	pub fn disabled(mut self, disabled: bool) -> Self {
		self.disabled = disabled;
		self
	}

	fn to_element(&self, ctx: &RenderContext) -> PageElement {
		let variant = if self.destructive { "destructive" } else { "default" };
		let element = match &self.href {
			Some(href) if !self.disabled => PageElement::new("a").attr("href", href.as_str()),
			_ => PageElement::new("div"),
		};
		element
			.attr("role", "menuitem")
			.attr("tabindex", "-1")
			.aria_opt("disabled", self.disabled.then_some(true))
			.data_opt("disabled", self.disabled.then_some(""))
			.class(&ctx.classes("dropdown_menu", "item", &[("variant", variant)]))
			.data("dropdown_menu_target", "item")
			.data("action", "click->dropdown-menu#select")
			.attrs(&self.attrs)
			.child(self.label.clone())
			.child(self.shortcut.as_deref().map(|shortcut| {
				PageElement::new("span")
					.class(&ctx.classes("dropdown_menu", "shortcut", &[]))
					.child(shortcut.to_string())
			}))
	}
}

root_attrs!(MenuItem);

/// A row of a menu.
#[derive(Debug, Clone)]
pub enum MenuEntry {
	/// An actionable item
	Item(MenuItem),
	/// A non-interactive group heading
	Label(String),
	/// A divider
	Separator,
	/// A nested menu opened from a sub-trigger row
	Sub {
		/// Sub-trigger label
		label: String,
		/// Nested rows
		entries: Vec<MenuEntry>,
	},
}

impl MenuEntry {
	/// Builds a nested menu entry.
	pub fn sub(label: impl Into<String>, entries: impl IntoIterator<Item = MenuEntry>) -> Self {
		Self::Sub {
			label: label.into(),
			entries: entries.into_iter().collect(),
		}
	}
}

impl From<MenuItem> for MenuEntry {
	fn from(item: MenuItem) -> Self {
		Self::Item(item)
	}
}

fn render_entries(ctx: &RenderContext, entries: &[MenuEntry]) -> Vec<PageElement> {
	entries
		.iter()
		.map(|entry| match entry {
			MenuEntry::Item(item) => item.to_element(ctx),
			MenuEntry::Label(label) => PageElement::new("div")
				.attr("role", "presentation")
				.class(&ctx.classes("dropdown_menu", "label", &[]))
				.child(label.clone()),
			MenuEntry::Separator => PageElement::new("div")
				.attr("role", "separator")
				.aria("orientation", "horizontal")
				.class(&ctx.classes("dropdown_menu", "separator", &[])),
			MenuEntry::Sub { label, entries } => render_sub(ctx, label, entries),
		})
		.collect()
}

fn render_sub(ctx: &RenderContext, label: &str, entries: &[MenuEntry]) -> PageElement {
	let ids = ctx.aria_ids(None, "dropdown-menu-sub");

	let trigger = PageElement::new("div")
		.attr("role", "menuitem")
		.attr("id", ids.trigger())
		.attr("tabindex", "-1")
		.aria("haspopup", "menu")
		.aria("expanded", false)
		.aria("controls", ids.content())
		.data("state", open_state(false))
		.class(&ctx.classes("dropdown_menu", "sub_trigger", &[]))
		.data("dropdown_menu_sub_target", "trigger")
		.data(
			"action",
			"mouseenter->dropdown-menu-sub#open mouseleave->dropdown-menu-sub#close keydown.right->dropdown-menu-sub#open",
		)
		.child(label.to_string())
		.child(icons::chevron_right().class("ml-auto"));

	let content = PageElement::new("div")
		.attr("id", ids.content())
		.attr("role", "menu")
		.aria("labelledby", ids.trigger())
		.data("state", open_state(false))
		.class(&ctx.classes("dropdown_menu", "sub_content", &[]))
		.data("dropdown_menu_sub_target", "content")
		.data("action", "keydown.left->dropdown-menu-sub#close")
		.attr("style", HIDDEN_STYLE)
		.children(render_entries(ctx, entries));

	PageElement::new("div")
		.attr("id", ids.seed())
		.class(&ctx.classes("dropdown_menu", "sub", &[]))
		.data("controller", "dropdown-menu-sub")
		.data("dropdown_menu_sub_open_value", flag(false))
		.child(trigger)
		.child(content)
}

/// A menu of actions opened from a trigger.
///
/// Behavior hooks: controller `dropdown-menu`, value
/// `data-dropdown-menu-open-value`, targets `trigger`, `content` and
/// `item`; sub-menus use controller `dropdown-menu-sub`.
#[derive(Debug, Clone)]
pub struct DropdownMenu {
	trigger: TriggerSlot,
	entries: Vec<MenuEntry>,
	align: Align,
	open: bool,
	attrs: Attributes,
}

impl DropdownMenu {
	/// Creates a closed menu aligned to the trigger's start edge.
	pub fn new(trigger: impl Into<TriggerSlot>) -> Self {
		Self {
			trigger: trigger.into(),
			entries: Vec::new(),
			align: Align::Start,
			open: false,
			attrs: Attributes::new(),
		}
	}

	/// Adds an item.
	pub fn item(mut self, item: MenuItem) -> Self {
		self.entries.push(item.into());
		self
	}

	/// Adds a group heading.
	pub fn label(mut self, label: impl Into<String>) -> Self {
		self.entries.push(MenuEntry::Label(label.into()));
		self
	}

	/// Adds a divider.
	pub fn separator(mut self) -> Self {
		self.entries.push(MenuEntry::Separator);
		self
	}

	/// Adds a nested menu.
	pub fn sub(mut self, label: impl Into<String>, entries: impl IntoIterator<Item = MenuEntry>) -> Self {
		self.entries.push(MenuEntry::sub(label, entries));
		self
	}

	/// Adds entries.
	pub fn entries(mut self, entries: impl IntoIterator<Item = MenuEntry>) -> Self {
		self.entries.extend(entries);
		self
	}

	/// Sets the content alignment relative to the trigger.
	pub fn align(mut self, align: Align) -> Self {
		self.align = align;
		self
	}

	/// Initial open state.
	pub fn open(mut self, open: bool) -> Self {
		self.open = open;
		self
	}
}

root_attrs!(DropdownMenu);

impl Component for DropdownMenu {
	fn name(&self) -> &'static str {
		"dropdown_menu"
	}

	fn to_page(&self, ctx: &RenderContext) -> Result<Page> {
		let ids = ctx.aria_ids(self.attrs.id(), "dropdown-menu");
		let state = open_state(self.open);

		let computed = Attributes::new()
			.with("id", ids.trigger())
			.aria("haspopup", "menu")
			.aria("expanded", self.open)
			.aria("controls", ids.content())
			.data("state", state)
			.data("dropdown_menu_target", "trigger")
			.data("action", "click->dropdown-menu#toggle keydown->dropdown-menu#keydown");
		let fallback = PageElement::new("button").attr("type", "button").class(&ctx.classes(
			"button",
			"root",
			&[
				("variant", ButtonVariant::Outline.as_str()),
				("size", ButtonSize::Default.as_str()),
			],
		));
		let trigger = self.trigger.build(fallback, &computed);

		let mut content = PageElement::new("div")
			.attr("id", ids.content())
			.attr("role", "menu")
			.aria("labelledby", ids.trigger())
			.aria("orientation", "vertical")
			.data("state", state)
			.data("align", self.align.as_str())
			.attr("tabindex", "-1")
			.class(&ctx.classes("dropdown_menu", "content", &[("align", self.align.as_str())]))
			.data("dropdown_menu_target", "content")
			.data("action", "keydown.esc->dropdown-menu#close")
			.children(render_entries(ctx, &self.entries));
		if !self.open {
			content = content.attr("style", HIDDEN_STYLE);
		}

		Ok(PageElement::new("div")
			.attr("id", ids.seed())
			.class(&ctx.classes("dropdown_menu", "root", &[]))
			.data("controller", "dropdown-menu")
			.data("dropdown_menu_open_value", flag(self.open))
			.attrs(&self.attrs)
			.child(trigger)
			.child(content)
			.into_page())
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::{fixture, rstest};

	#[fixture]
	fn account_menu() -> DropdownMenu {
		DropdownMenu::new("Open")
			.label("My Account")
			.item(MenuItem::new("Profile").shortcut("⇧⌘P"))
			.item(MenuItem::new("Billing").href("/billing"))
			.separator()
			.sub(
				"Invite users",
				[
					MenuItem::new("Email").into(),
					MenuItem::new("Message").disabled(true).into(),
				],
			)
			.item(MenuItem::new("Log out").destructive(true))
	}

	#[rstest]
	fn test_menu_wiring(account_menu: DropdownMenu) {
		let html = account_menu.render(&RenderContext::sequential()).unwrap();
		assert!(html.contains("aria-controls=\"dropdown-menu-1-content\""));
		assert!(html.contains("<div id=\"dropdown-menu-1-content\" role=\"menu\""));
		assert!(html.contains("role=\"presentation\""));
		assert!(html.contains("<a href=\"/billing\" role=\"menuitem\""));
		assert!(html.contains(">⇧⌘P</span>"));
		assert!(html.contains("text-destructive"));
	}

	#[rstest]
	fn test_sub_menu_has_own_wiring(account_menu: DropdownMenu) {
		let html = account_menu.render(&RenderContext::sequential()).unwrap();
		assert!(html.contains("data-controller=\"dropdown-menu-sub\""));
		assert!(html.contains("id=\"dropdown-menu-sub-2-trigger\""));
		assert!(html.contains("aria-controls=\"dropdown-menu-sub-2-content\""));
		assert!(html.contains("<div id=\"dropdown-menu-sub-2-content\" role=\"menu\""));
		assert!(html.contains("aria-disabled=\"true\" data-disabled=\"\""));
	}

	#[rstest]
	fn test_open_menu_is_visible() {
		let html = DropdownMenu::new("Open")
			.item(MenuItem::new("One"))
			.open(true)
			.align(Align::End)
			.render(&RenderContext::sequential())
			.unwrap();
		assert!(html.contains("data-dropdown-menu-open-value=\"true\""));
		assert!(html.contains("data-align=\"end\""));
		assert!(html.contains("right-0"));
		assert_eq!(html.matches("display:none").count(), 0);
	}
}
