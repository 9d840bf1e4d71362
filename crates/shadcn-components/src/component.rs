//! Core component trait and common types

use std::sync::Arc;

use shadcn_core::{AriaIds, Attributes, IdGenerator, Page, PageElement, Result};

use crate::styles::StyleRegistry;

/// Everything a render call needs besides the widget's own options.
///
/// The context is passed explicitly to every render; there is no global
/// registry. Cloning is cheap (two `Arc`s).
#[derive(Debug, Clone)]
pub struct RenderContext {
	styles: Arc<StyleRegistry>,
	ids: Arc<IdGenerator>,
}

impl Default for RenderContext {
	/// Built-in styles with random ids.
	fn default() -> Self {
		Self {
			styles: StyleRegistry::builtin(),
			ids: Arc::new(IdGenerator::random()),
		}
	}
}

impl RenderContext {
	/// Creates a context from explicit parts.
	pub fn new(styles: Arc<StyleRegistry>, ids: Arc<IdGenerator>) -> Self {
		Self { styles, ids }
	}

	/// Built-in styles with sequential ids (`dialog-1`, `dialog-2`, ...).
	pub fn sequential() -> Self {
		Self {
			styles: StyleRegistry::builtin(),
			ids: Arc::new(IdGenerator::sequential()),
		}
	}

	/// Returns a context that renders with `styles` and shares this
	/// context's id generator.
	pub fn with_styles(&self, styles: StyleRegistry) -> Self {
		Self {
			styles: Arc::new(styles),
			ids: Arc::clone(&self.ids),
		}
	}

	/// Returns a context using `ids` for id generation.
	pub fn with_ids(mut self, ids: IdGenerator) -> Self {
		self.ids = Arc::new(ids);
		self
	}

	/// The style registry in use.
	pub fn styles(&self) -> &StyleRegistry {
		&self.styles
	}

	/// The id generator in use.
	pub fn ids(&self) -> &IdGenerator {
		&self.ids
	}

	/// Resolves classes for `component`/`slot`.
	pub fn classes(&self, component: &str, slot: &str, selections: &[(&str, &str)]) -> String {
		self.styles.resolve(component, slot, selections)
	}

	/// Returns the caller's id or a fresh one prefixed with `prefix`.
	pub fn id(&self, explicit: Option<&str>, prefix: &str) -> String {
		self.ids.seed(explicit, prefix)
	}

	/// Returns the ARIA id family seeded from the caller's id or a fresh one.
	pub fn aria_ids(&self, explicit: Option<&str>, prefix: &str) -> AriaIds {
		AriaIds::new(self.id(explicit, prefix))
	}
}

/// Component trait - base interface for all UI components
///
/// A component is an immutable bag of options. Rendering never mutates it,
/// so rendering the same component twice with equivalent contexts yields
/// the same markup.
pub trait Component {
	/// Returns the component's name; also its key in the style registry.
	fn name(&self) -> &'static str;

	/// Builds the render tree.
	fn to_page(&self, ctx: &RenderContext) -> Result<Page>;

	/// Renders the component to an HTML string.
	fn render(&self, ctx: &RenderContext) -> Result<String> {
		tracing::trace!(component = self.name(), "rendering component");
		Ok(self.to_page(ctx)?.render_to_string())
	}

	/// Renders with built-in styles and random ids.
	fn render_default(&self) -> Result<String> {
		self.render(&RenderContext::default())
	}
}

/// Declares a style key enum: one variant per registry key plus a default.
macro_rules! style_key {
	(
		$(#[$meta:meta])*
		$vis:vis enum $name:ident {
			$( $(#[$vmeta:meta])* $variant:ident => $key:literal, )+
		}
		default = $default:ident;
	) => {
		$(#[$meta])*
		#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
		$vis enum $name {
			$( $(#[$vmeta])* $variant, )+
		}

		impl $name {
			/// Registry key of this variant
			pub fn as_str(&self) -> &'static str {
				match self {
					$( Self::$variant => $key, )+
				}
			}
		}

		impl Default for $name {
			fn default() -> Self {
				Self::$default
			}
		}

		impl std::fmt::Display for $name {
			fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
				f.write_str(self.as_str())
			}
		}
	};
}

pub(crate) use style_key;

style_key! {
	/// Visual style of buttons and links
	pub enum ButtonVariant {
		/// Solid primary
		Default => "default",
		/// Dangerous action
		Destructive => "destructive",
		/// Bordered
		Outline => "outline",
		/// Muted solid
		Secondary => "secondary",
		/// No background until hovered
		Ghost => "ghost",
		/// Looks like a text link
		Link => "link",
	}
	default = Default;
}

style_key! {
	/// Button dimensions
	pub enum ButtonSize {
		/// Regular
		Default => "default",
		/// Small
		Sm => "sm",
		/// Large
		Lg => "lg",
		/// Square, for icon-only buttons
		Icon => "icon",
	}
	default = Default;
}

style_key! {
	/// Edge of the trigger a floating element opens on
	pub enum Side {
		/// Above
		Top => "top",
		/// To the right
		Right => "right",
		/// Below
		Bottom => "bottom",
		/// To the left
		Left => "left",
	}
	default = Bottom;
}

style_key! {
	/// Alignment of a floating element along its side
	pub enum Align {
		/// Leading edge
		Start => "start",
		/// Centered
		Center => "center",
		/// Trailing edge
		End => "end",
	}
	default = Center;
}

style_key! {
	/// Layout direction
	pub enum Orientation {
		/// Left to right
		Horizontal => "horizontal",
		/// Top to bottom
		Vertical => "vertical",
	}
	default = Horizontal;
}

/// The element that opens a compound widget.
///
/// A trigger is either rendered by the widget around the given content, or
/// supplied whole by the caller (`as_child`). In the latter case the
/// caller's tag and children are kept and the widget's ids, ARIA wiring and
/// behavior hooks are merged into its attributes.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum TriggerSlot {
	/// Plain text label inside the default trigger element.
	Text(String),
	/// Arbitrary content inside the default trigger element.
	Content(Page),
	/// Caller-supplied trigger element.
	AsChild(PageElement),
}

impl TriggerSlot {
	/// Wraps a caller element as the trigger.
	pub fn as_child(element: PageElement) -> Self {
		Self::AsChild(element)
	}

	/// Whether the caller supplied the trigger element.
	pub fn is_as_child(&self) -> bool {
		matches!(self, Self::AsChild(_))
	}

	/// Produces the trigger element.
	///
	/// `fallback` is the widget's default trigger (tag and classes);
	/// `computed` holds the wiring both forms receive.
	pub fn build(&self, fallback: PageElement, computed: &Attributes) -> PageElement {
		match self {
			Self::Text(label) => fallback.attrs(computed).child(label.clone()),
			Self::Content(content) => fallback.attrs(computed).child(content.clone()),
			Self::AsChild(element) => {
				let mut element = element.clone();
				element.merge_attrs(computed);
				element
			}
		}
	}
}

impl Default for TriggerSlot {
	fn default() -> Self {
		Self::Content(Page::Empty)
	}
}

impl From<&str> for TriggerSlot {
	fn from(label: &str) -> Self {
		Self::Text(label.to_string())
	}
}

impl From<String> for TriggerSlot {
	fn from(label: String) -> Self {
		Self::Text(label)
	}
}

impl From<Page> for TriggerSlot {
	fn from(content: Page) -> Self {
		Self::Content(content)
	}
}

impl From<PageElement> for TriggerSlot {
	fn from(element: PageElement) -> Self {
		Self::AsChild(element)
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;

	#[rstest]
	#[case(ButtonVariant::default(), "default")]
	#[case(ButtonVariant::Ghost, "ghost")]
	#[case(ButtonVariant::Link, "link")]
	fn test_button_variant_keys(#[case] key: ButtonVariant, #[case] expected: &str) {
		assert_eq!(key.as_str(), expected);
		assert_eq!(key.to_string(), expected);
	}

	#[rstest]
	fn test_defaults() {
		assert_eq!(Side::default(), Side::Bottom);
		assert_eq!(Align::default().as_str(), "center");
		assert_eq!(Orientation::default().as_str(), "horizontal");
	}

	#[rstest]
	fn test_with_styles_shares_ids() {
		let ctx = RenderContext::sequential();
		let scoped = ctx.with_styles(StyleRegistry::empty());
		assert_eq!(ctx.id(None, "x"), "x-1");
		assert_eq!(scoped.id(None, "x"), "x-2");
		assert_eq!(scoped.classes("button", "root", &[]), "");
		assert!(!ctx.classes("button", "root", &[]).is_empty());
	}

	#[rstest]
	fn test_trigger_text_uses_fallback() {
		let computed = Attributes::new().with("id", "t");
		let trigger = TriggerSlot::from("Open")
			.build(PageElement::new("button").attr("type", "button"), &computed);
		assert_eq!(
			trigger.render_to_string(),
			"<button type=\"button\" id=\"t\">Open</button>"
		);
	}

	#[rstest]
	fn test_trigger_as_child_keeps_caller_element() {
		let computed = Attributes::new().with("id", "t").data("action", "click->x#open");
		let caller = PageElement::new("a").attr("href", "#").child("Go");
		let trigger = TriggerSlot::as_child(caller)
			.build(PageElement::new("button").class("btn"), &computed);
		assert_eq!(
			trigger.render_to_string(),
			"<a href=\"#\" id=\"t\" data-action=\"click->x#open\">Go</a>"
		);
	}
}
