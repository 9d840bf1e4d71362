//! # shadcn-components
//!
//! Server-rendered UI widgets styled with utility classes and annotated
//! with `data-*` hooks for a client-side behavior layer.
//!
//! - [`styles`]: the style registry (component → slot → variant → classes)
//! - [`component`]: the [`Component`] trait, [`RenderContext`] and shared
//!   option enums
//! - [`widgets`]: buttons, inputs, overlays, menus, disclosure widgets and
//!   display widgets
//! - [`form`]: widgets bound to a [`form::FormModel`], with label, hint and
//!   error wiring
//! - [`icons`]: the inline SVG icons widgets draw
//!
//! ## Example
//!
//! ```
//! use shadcn_components::{Button, ButtonVariant, Component, RenderContext};
//!
//! let ctx = RenderContext::sequential();
//! let html = Button::new("Delete")
//! 	.variant(ButtonVariant::Destructive)
//! 	.class("w-full")
//! 	.render(&ctx)
//! 	.unwrap();
//! assert!(html.starts_with("<button type=\"button\""));
//! assert!(html.contains("w-full"));
//! ```
//!
//! Re-theming is a matter of passing a different registry:
//!
//! ```
//! use shadcn_components::{Badge, Component, RenderContext, StyleRegistry};
//!
//! let overrides = StyleRegistry::from_toml_str(
//! 	r#"
//! [badge.root]
//! base = "badge"
//! "#,
//! )
//! .unwrap();
//! let ctx = RenderContext::sequential()
//! 	.with_styles(StyleRegistry::builtin().with_overrides(&overrides));
//! let html = Badge::new("New").render(&ctx).unwrap();
//! assert!(html.contains("class=\"badge\""));
//! ```

#![warn(missing_docs)]

pub mod component;
pub mod form;
pub mod icons;
pub mod styles;
pub mod widgets;

pub use component::{
	Align, ButtonSize, ButtonVariant, Component, Orientation, RenderContext, Side, TriggerSlot,
};
pub use styles::{ComponentStyles, StyleDescriptor, StyleRegistry};
pub use widgets::{
	Accordion, AccordionItem, AccordionType, Alert, AlertDialog, AlertVariant, Avatar, Badge,
	BadgeVariant, Breadcrumb, BreadcrumbLink, Button, Card, Checkbox, CheckboxGroup, CheckboxOption,
	Collapsible, DatePicker, Dialog, DropdownMenu, HoverCard, Input, Label, Link, LoadingButton,
	MenuEntry, MenuItem, Popover, Progress, RadioGroup, RadioOption, Select, SelectEntry,
	SelectOption, Separator, Sheet, Skeleton, Slider, Switch, Tab, Table, Tabs, Textarea, Toast,
	ToastVariant, Toaster, Toggle, ToggleSize, ToggleVariant, Tooltip,
};
