//! Facade crate smoke tests
//!
//! Success Criteria:
//! 1. The prelude alone is enough to build a page of widgets
//! 2. Page fragments compose across widgets

use rstest::rstest;
use serde_json::json;
use shadcn::prelude::*;

#[rstest]
fn test_prelude_builds_a_settings_page() {
	let ctx = RenderContext::sequential();
	let model = json!({"display_name": "Ada", "public": true});
	let scope = FormScope::object("settings", &model);

	let form = PageElement::new("form")
		.attr("method", "post")
		.child(
			FormInput::new(scope.field("display_name"))
				.label("Display name")
				.to_page(&ctx)
				.unwrap(),
		)
		.child(
			FormSwitch::new(scope.field("public"))
				.label("Public profile")
				.to_page(&ctx)
				.unwrap(),
		)
		.child(Button::new("Save").button_type("submit").to_page(&ctx).unwrap());

	let html = Card::new()
		.title("Settings")
		.content(form)
		.render(&ctx)
		.unwrap();

	assert!(html.contains("<form method=\"post\">"));
	assert!(html.contains("name=\"settings[display_name]\" value=\"Ada\""));
	assert!(html.contains("role=\"switch\""));
	assert!(html.contains("<button type=\"submit\""));
}

#[rstest]
fn test_facade_reexports_core_helpers() {
	assert_eq!(shadcn::merge_classes("px-4 text-red-500", "px-6"), "text-red-500 px-6");
	let attrs = Attributes::new().data("controller", "a");
	let merged = merge_attributes(&attrs, &Attributes::new().data("controller", "b"));
	assert_eq!(merged.get_str("data-controller"), Some("a b"));
}
