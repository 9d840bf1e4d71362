//! Widget rendering properties
//!
//! Success Criteria:
//! 1. Rendering is deterministic for a given id strategy
//! 2. Every `aria-controls` points at an element rendered by the same widget
//! 3. Two instances rendered with one context never share ids
//! 4. Documented markup of checkbox, breadcrumb and slider holds
//! 5. Style registries swap per render without global state
//!
//! Test Categories:
//! - Happy Path: 6 tests
//! - Error Path: 2 tests
//! - Decision Table: 2 tests

use regex::Regex;
use rstest::{fixture, rstest};
use shadcn_components::{
	Accordion, AccordionItem, Alert, AlertDialog, Avatar, Badge, Breadcrumb, Button, ButtonVariant,
	Card, Checkbox, Collapsible, Component, ComponentStyles, DatePicker, Dialog, DropdownMenu,
	HoverCard, Input, Link, LoadingButton, MenuEntry, MenuItem, Popover, Progress, RenderContext,
	Select, Separator, Sheet, Skeleton, Slider, StyleDescriptor, StyleRegistry, Switch, Tab, Table,
	Tabs, Toast, Toaster, Toggle, Tooltip,
};
use shadcn_core::{ComponentError, PageElement};
use std::collections::HashSet;

#[fixture]
fn ctx() -> RenderContext {
	RenderContext::sequential()
}

fn capture_all(html: &str, pattern: &str) -> Vec<String> {
	let re = Regex::new(pattern).unwrap();
	re.captures_iter(html)
		.map(|caps| caps[1].to_string())
		.collect()
}

/// One instance of every widget, in a fixed order.
fn gallery() -> Vec<Box<dyn Component>> {
	vec![
		Box::new(Button::new("Save").variant(ButtonVariant::Secondary)),
		Box::new(LoadingButton::new("Submit").loading(true)),
		Box::new(Link::new("/docs", "Docs")),
		Box::new(Badge::new("New")),
		Box::new(Input::new().name("email").placeholder("you@example.com")),
		Box::new(Checkbox::new().name("terms")),
		Box::new(Switch::new().name("notify").checked(true)),
		Box::new(Slider::new().name("volume").value(30.0)),
		Box::new(Toggle::new("B").pressed(true)),
		Box::new(Select::new().name("fruit").option("apple", "Apple").selected("apple")),
		Box::new(DatePicker::new().name("due")),
		Box::new(Dialog::new().trigger("Open").title("Title")),
		Box::new(AlertDialog::new().trigger("Delete").title("Sure?")),
		Box::new(Sheet::new().trigger("Menu")),
		Box::new(Popover::new("Info").content("Body")),
		Box::new(HoverCard::new("@ada").content("Profile")),
		Box::new(Tooltip::new("?", "Help")),
		Box::new(DropdownMenu::new("Actions").item(MenuItem::new("Edit"))),
		Box::new(Collapsible::new("More").content("Hidden")),
		Box::new(Accordion::new().item(AccordionItem::new("a", "First").content("One"))),
		Box::new(Tabs::new().tab(Tab::new("a", "A").content("Panel"))),
		Box::new(Breadcrumb::new().link("Home", Some("/")).link("Here", None)),
		Box::new(Card::new().title("Card").content("Body")),
		Box::new(Alert::new().title("Heads up")),
		Box::new(Table::new().headers(["Name"]).row(["Ada"])),
		Box::new(Toaster::new().toast(Toast::new().title("Saved"))),
		Box::new(Skeleton::new()),
		Box::new(Progress::new().value(40.0)),
		Box::new(Separator::new()),
		Box::new(Avatar::new().fallback("AL")),
	]
}

fn render_gallery(ctx: &RenderContext) -> Vec<String> {
	gallery()
		.iter()
		.map(|widget| widget.render(ctx).unwrap())
		.collect()
}

/// Renders two instances of a compound widget into one context.
fn render_pair(kind: &str, ctx: &RenderContext) -> (String, String) {
	let render = |ctx: &RenderContext| -> String {
		match kind {
			"dialog" => Dialog::new().trigger("Open").title("Title").render(ctx),
			"alert_dialog" => AlertDialog::new().trigger("Delete").render(ctx),
			"popover" => Popover::new("Info").content("Body").render(ctx),
			"hover_card" => HoverCard::new("@ada").content("Profile").render(ctx),
			"collapsible" => Collapsible::new("More").content("Hidden").render(ctx),
			"dropdown_sub" => DropdownMenu::new("Actions")
				.sub("Share", [MenuEntry::from(MenuItem::new("Email"))])
				.render(ctx),
			"accordion" => Accordion::new()
				.item(AccordionItem::new("a", "First"))
				.item(AccordionItem::new("b", "Second"))
				.render(ctx),
			"tabs" => Tabs::new()
				.tab(Tab::new("a", "A"))
				.tab(Tab::new("b", "B"))
				.render(ctx),
			"select" => Select::new().option("a", "A").render(ctx),
			"date_picker" => DatePicker::new().render(ctx),
			other => panic!("unknown widget kind {other}"),
		}
		.unwrap()
	};
	(render(ctx), render(ctx))
}

// ============================================================================
// Determinism
// ============================================================================

#[rstest]
fn test_fresh_sequential_contexts_render_identically() {
	let first = render_gallery(&RenderContext::sequential());
	let second = render_gallery(&RenderContext::sequential());
	assert_eq!(first, second);
}

#[rstest]
fn test_widgets_without_generated_ids_are_stable_across_renders(ctx: RenderContext) {
	let button = Button::new("Save");
	assert_eq!(button.render(&ctx).unwrap(), button.render(&ctx).unwrap());
	let breadcrumb = Breadcrumb::new().link("Home", Some("/"));
	assert_eq!(breadcrumb.render(&ctx).unwrap(), breadcrumb.render_default().unwrap());
}

// ============================================================================
// ARIA wiring
// ============================================================================

#[rstest]
#[case::dialog("dialog")]
#[case::alert_dialog("alert_dialog")]
#[case::popover("popover")]
#[case::hover_card("hover_card")]
#[case::collapsible("collapsible")]
#[case::dropdown_sub("dropdown_sub")]
#[case::accordion("accordion")]
#[case::tabs("tabs")]
#[case::select("select")]
#[case::date_picker("date_picker")]
fn test_aria_controls_names_rendered_content(#[case] kind: &str) {
	for ctx in [RenderContext::sequential(), RenderContext::default()] {
		let (first, second) = render_pair(kind, &ctx);
		for html in [&first, &second] {
			let controls = capture_all(html, r#"aria-controls="([^"]+)""#);
			assert!(!controls.is_empty(), "{kind} rendered no aria-controls");
			for target in controls {
				assert!(
					html.contains(&format!(" id=\"{target}\"")),
					"{kind}: aria-controls={target} has no matching id in {html}"
				);
			}
		}

		let ids_first: HashSet<String> = capture_all(&first, r#" id="([^"]+)""#).into_iter().collect();
		let ids_second: HashSet<String> = capture_all(&second, r#" id="([^"]+)""#).into_iter().collect();
		assert!(!ids_first.is_empty());
		assert!(
			ids_first.is_disjoint(&ids_second),
			"{kind} instances share ids: {:?}",
			ids_first.intersection(&ids_second).collect::<Vec<_>>()
		);
	}
}

#[rstest]
fn test_dropdown_submenu_wiring(ctx: RenderContext) {
	let html = DropdownMenu::new("Actions")
		.item(MenuItem::new("Edit"))
		.sub("Share", [MenuEntry::from(MenuItem::new("Email"))])
		.render(&ctx)
		.unwrap();
	assert!(html.contains("aria-controls=\"dropdown-menu-1-content\""));
	assert!(html.contains("aria-controls=\"dropdown-menu-sub-2-content\""));
	assert!(html.contains("id=\"dropdown-menu-sub-2-content\""));
	assert!(html.contains("aria-labelledby=\"dropdown-menu-sub-2-trigger\""));
}

#[rstest]
fn test_as_child_trigger_keeps_caller_element(ctx: RenderContext) {
	let trigger = PageElement::new("a").attr("href", "#settings").child("Settings");
	let html = Dialog::new().trigger(trigger).title("Settings").render(&ctx).unwrap();
	assert!(html.contains("<a href=\"#settings\" id=\"dialog-1-trigger\""));
	assert!(html.contains("aria-controls=\"dialog-1-content\""));
	assert!(html.contains(">Settings</a>"));
	assert!(!html.contains("<button type=\"button\" id=\"dialog-1-trigger\""));
}

// ============================================================================
// Documented markup
// ============================================================================

#[rstest]
fn test_unchecked_checkbox_submits_fallback_value(ctx: RenderContext) {
	let html = Checkbox::new().name("terms").checked(false).render(&ctx).unwrap();
	assert!(html.starts_with("<button type=\"button\" role=\"checkbox\""));
	assert!(html.contains("role=\"checkbox\""));
	assert!(html.contains("aria-checked=\"false\""));
	assert!(html.contains("data-checked=\"false\""));
	assert!(html.contains("<input type=\"hidden\" name=\"terms\" value=\"0\""));
}

#[rstest]
fn test_breadcrumb_links_and_current_page(ctx: RenderContext) {
	let html = Breadcrumb::new()
		.link("Home", Some("/"))
		.link("Page", None)
		.render(&ctx)
		.unwrap();
	assert!(html.contains("<a href=\"/\">Home</a>"));
	assert!(html.contains("aria-current=\"page\" role=\"link\" aria-disabled=\"true\""));
	assert_eq!(html.matches("role=\"presentation\"").count(), 1);
}

#[rstest]
fn test_range_slider_hidden_inputs(ctx: RenderContext) {
	let html = Slider::new()
		.names(["lo", "hi"])
		.values([10.0, 90.0])
		.range(true)
		.render(&ctx)
		.unwrap();
	assert!(html.contains("<input type=\"hidden\" name=\"lo\" value=\"10\""));
	assert!(html.contains("<input type=\"hidden\" name=\"hi\" value=\"90\""));
	assert!(html.contains("data-range=\"true\""));
}

#[rstest]
#[case::single_name_for_range(Slider::new().name("lo").range(true))]
#[case::three_values(Slider::new().names(["lo", "hi"]).values([1.0, 2.0, 3.0]).range(true))]
#[case::names_without_range(Slider::new().names(["lo", "hi"]))]
#[case::descending(Slider::new().names(["lo", "hi"]).values([80.0, 20.0]).range(true))]
fn test_malformed_slider_fails_at_render(#[case] slider: Slider, ctx: RenderContext) {
	let err = slider.render(&ctx).unwrap_err();
	assert!(matches!(err, ComponentError::InvalidProperty(_)), "{err:?}");
	assert!(err.to_string().contains("slider"));
}

#[rstest]
fn test_boolean_attribute_rendering(ctx: RenderContext) {
	let enabled = Input::new().name("q").disabled(false).render(&ctx).unwrap();
	let disabled = Input::new().name("q").disabled(true).render(&ctx).unwrap();
	let bare = Regex::new(r"\sdisabled[\s/>]").unwrap();
	assert!(!bare.is_match(&enabled));
	assert!(bare.is_match(&disabled));
	assert!(!disabled.contains("disabled=\""));
}

// ============================================================================
// Style registry
// ============================================================================

#[rstest]
fn test_style_override_applies_to_one_context_only(ctx: RenderContext) {
	let themed = ctx.with_styles(StyleRegistry::builtin().as_ref().clone().with_component(
		"badge",
		ComponentStyles::new().slot(
			"root",
			StyleDescriptor::new("badge")
				.variant("variant", "default", "badge-primary")
				.default_key("variant", "default"),
		),
	));

	let html = Badge::new("New").render(&themed).unwrap();
	assert!(html.contains("class=\"badge badge-primary\""));

	let builtin = Badge::new("New").render(&ctx).unwrap();
	assert!(builtin.contains("bg-primary"));
	assert!(!builtin.contains("badge-primary"));
}

#[rstest]
fn test_caller_classes_override_conflicting_defaults(ctx: RenderContext) {
	let html = Button::new("Wide").class("px-8 w-full").render(&ctx).unwrap();
	let class = capture_all(&html, r#"class="([^"]+)""#).remove(0);
	let tokens: Vec<&str> = class.split_whitespace().collect();
	assert!(tokens.contains(&"px-8"));
	assert!(tokens.contains(&"w-full"));
	assert!(!tokens.contains(&"px-4"));
}

#[rstest]
fn test_caller_controller_tokens_accumulate(ctx: RenderContext) {
	let html = Collapsible::new("More")
		.data("controller", "analytics")
		.render(&ctx)
		.unwrap();
	assert!(html.contains("data-controller=\"collapsible analytics\""));
}
