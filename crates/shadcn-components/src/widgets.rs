//! Widgets
//!
//! Each widget is a builder implementing [`Component`](crate::Component).
//! Caller attributes given through `attrs`/`attr`/`class`/`data`/`aria` are
//! merged over the widget's computed root attributes, so caller classes win
//! conflicts and caller `data-controller`/`data-action` tokens are appended.
//!
//! Interactive widgets annotate their markup for an external behavior layer:
//!
//! | hook | example |
//! |------|---------|
//! | controller | `data-controller="dialog"` |
//! | action | `data-action="click->dialog#open"` |
//! | target | `data-dialog-target="content"` |
//! | value | `data-dialog-is-open-value="false"` |

/// Adds the shared root-attribute builder methods to a widget with an
/// `attrs: Attributes` field.
macro_rules! root_attrs {
	($ty:ty) => {
		impl $ty {
			/// Merges caller attributes over the computed root attributes.
			pub fn attrs(mut self, attrs: shadcn_core::Attributes) -> Self {
				self.attrs.merge_from(&attrs);
				self
			}

			/// Sets one root attribute.
			pub fn attr(mut self, name: &str, value: impl Into<shadcn_core::AttrValue>) -> Self {
				self.attrs.set(name, value);
				self
			}

			/// Sets the root id, which also seeds derived sub-part ids.
			pub fn id(self, id: impl Into<String>) -> Self {
				self.attr("id", id.into())
			}

			/// Adds root classes; they replace conflicting built-in classes.
			pub fn class(mut self, classes: &str) -> Self {
				self.attrs.add_class(classes);
				self
			}

			/// Sets a root `data-*` attribute.
			pub fn data(mut self, key: &str, value: impl Into<shadcn_core::AttrValue>) -> Self {
				self.attrs = std::mem::take(&mut self.attrs).data(key, value);
				self
			}

			/// Sets a root `aria-*` attribute.
			pub fn aria(mut self, key: &str, value: impl Into<shadcn_core::AttrValue>) -> Self {
				self.attrs = std::mem::take(&mut self.attrs).aria(key, value);
				self
			}
		}
	};
}

pub mod accordion;
pub mod alert;
pub mod avatar;
pub mod badge;
pub mod breadcrumb;
pub mod button;
pub mod card;
pub mod checkbox;
pub mod collapsible;
pub mod date_picker;
pub mod dialog;
pub mod dropdown_menu;
pub mod input;
pub mod label;
pub mod popover;
pub mod progress;
pub mod radio_group;
pub mod select;
pub mod separator;
pub mod skeleton;
pub mod slider;
pub mod switch;
pub mod table;
pub mod tabs;
pub mod toast;
pub mod toggle;

pub use accordion::{Accordion, AccordionItem, AccordionType};
pub use alert::{Alert, AlertVariant};
pub use avatar::Avatar;
pub use badge::{Badge, BadgeVariant};
pub use breadcrumb::{Breadcrumb, BreadcrumbLink};
pub use button::{Button, Link, LoadingButton};
pub use card::Card;
pub use checkbox::{Checkbox, CheckboxGroup, CheckboxOption};
pub use collapsible::Collapsible;
pub use date_picker::DatePicker;
pub use dialog::{AlertDialog, Dialog, Sheet};
pub use dropdown_menu::{DropdownMenu, MenuEntry, MenuItem};
pub use input::{Input, Textarea};
pub use label::Label;
pub use popover::{HoverCard, Popover, Tooltip};
pub use progress::Progress;
pub use radio_group::{RadioGroup, RadioOption};
pub use select::{Select, SelectEntry, SelectOption};
pub use separator::Separator;
pub use skeleton::Skeleton;
pub use slider::Slider;
pub use switch::Switch;
pub use table::Table;
pub use tabs::{Tab, Tabs};
pub use toast::{Toast, ToastVariant, Toaster};
pub use toggle::{Toggle, ToggleSize, ToggleVariant};

/// `"true"`/`"false"` for `data-*` value attributes.
pub(crate) fn flag(value: bool) -> &'static str {
	if value { "true" } else { "false" }
}

/// `data-state` of an open/closed pair.
pub(crate) fn open_state(open: bool) -> &'static str {
	if open { "open" } else { "closed" }
}

/// `data-state` of a checked/unchecked pair.
pub(crate) fn checked_state(checked: bool) -> &'static str {
	if checked { "checked" } else { "unchecked" }
}

/// Inline style hiding closed content until the behavior layer shows it.
pub(crate) const HIDDEN_STYLE: &str = "display:none";
