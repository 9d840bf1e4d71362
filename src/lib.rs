//! # shadcn
//!
//! Server-rendered UI components: Tailwind utility classes for looks,
//! `data-*` attributes for a client-side behavior layer, and ARIA wiring
//! between the parts of compound widgets.
//!
//! ## Crates
//!
//! - [`shadcn_core`]: the HTML render tree, attribute bag, class merge and id
//!   generation
//! - [`shadcn_components`]: the style registry, the widgets and the form-bound
//!   widgets
//!
//! Most applications only need the [`prelude`].
//!
//! ## Example
//!
//! ```
//! use shadcn::prelude::*;
//!
//! let ctx = RenderContext::sequential();
//! let html = Dialog::new()
//! 	.trigger("Edit profile")
//! 	.title("Edit profile")
//! 	.description("Make changes to your profile here.")
//! 	.render(&ctx)
//! 	.unwrap();
//! assert!(html.contains("aria-controls=\"dialog-1-content\""));
//! assert!(html.contains("id=\"dialog-1-content\""));
//! ```
//!
//! ## Forms
//!
//! ```
//! use shadcn::prelude::*;
//!
//! let model = JsonModel::new()
//! 	.with_value("email", "ada@example.com")
//! 	.with_error("email", "is already taken");
//! let scope = FormScope::object("user", &model);
//! let html = FormInput::new(scope.field("email"))
//! 	.label("Email")
//! 	.hint("We never share it.")
//! 	.render(&RenderContext::sequential())
//! 	.unwrap();
//! assert!(html.contains("aria-invalid=\"true\""));
//! assert!(html.contains("aria-describedby=\"user_email-description user_email-message\""));
//! ```

#![warn(missing_docs)]

pub use shadcn_components;
pub use shadcn_core;

pub use shadcn_components::{Component, RenderContext, StyleRegistry};
pub use shadcn_core::{Attributes, ComponentError, Page, PageElement, Result, merge_classes};

/// Everything needed to build and render widgets.
pub mod prelude {
	pub use shadcn_components::form::{
		BoundField, FormCheckbox, FormCheckboxGroup, FormDatePicker, FormField, FormInput,
		FormModel, FormRadioGroup, FormScope, FormSelect, FormSlider, FormSwitch, FormTextarea,
		JsonModel,
	};
	pub use shadcn_components::{
		Accordion, AccordionItem, AccordionType, Alert, AlertDialog, AlertVariant, Avatar, Badge,
		BadgeVariant, Breadcrumb, BreadcrumbLink, Button, Card, Checkbox, CheckboxGroup,
		CheckboxOption, Collapsible, DatePicker, Dialog, DropdownMenu, HoverCard, Input, Label, Link,
		LoadingButton, MenuEntry, MenuItem, Popover, Progress, RadioGroup, RadioOption, Select,
		SelectEntry, SelectOption, Separator, Sheet, Skeleton, Slider, Switch, Tab, Table, Tabs,
		Textarea, Toast, ToastVariant, Toaster, Toggle, ToggleSize, ToggleVariant, Tooltip,
	};
	pub use shadcn_components::{
		Align, ButtonSize, ButtonVariant, Component, ComponentStyles, Orientation, RenderContext,
		Side, StyleDescriptor, StyleRegistry, TriggerSlot,
	};
	pub use shadcn_core::{
		AriaIds, AttrValue, Attributes, ComponentError, IdGenerator, IntoPage, Page, PageElement,
		merge_attributes, merge_classes,
	};
}
