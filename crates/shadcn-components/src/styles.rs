//! Style registry
//!
//! Every widget looks its classes up in a [`StyleRegistry`]: a nested map of
//! component name → slot name → [`StyleDescriptor`]. A descriptor carries a
//! `base` class string, per-axis variant tables (`variant`, `size`, `side`,
//! ...) and the default key for each axis.
//!
//! The built-in table is an embedded TOML document. Callers re-theme by
//! loading their own table and layering it over the built-in one:
//!
//! ```
//! use shadcn_components::styles::StyleRegistry;
//!
//! let custom = StyleRegistry::from_toml_str(r#"
//! [badge.root]
//! base = "rounded-none px-1"
//! "#).unwrap();
//!
//! let registry = StyleRegistry::builtin().with_overrides(&custom);
//! assert_eq!(registry.resolve("badge", "root", &[]), "rounded-none px-1");
//! ```
//!
//! Unknown variant keys fall back to the axis default and emit a
//! `tracing::warn!` event instead of failing the render.

use std::sync::{Arc, LazyLock};

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use shadcn_core::{ComponentError, Result, merge_classes};

/// The built-in style table.
const BUILTIN_STYLES: &str = include_str!("builtin_styles.toml");

static BUILTIN: LazyLock<Arc<StyleRegistry>> = LazyLock::new(|| {
	// The table is a compile-time asset; a parse failure is a packaging bug.
	match StyleRegistry::from_toml_str(BUILTIN_STYLES) {
		Ok(registry) => Arc::new(registry),
		Err(err) => panic!("built-in style table is malformed: {err}"),
	}
});

/// Classes for one slot of one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct StyleDescriptor {
	/// Classes applied regardless of variant.
	pub base: String,
	/// Axis name → variant key → classes.
	pub variants: IndexMap<String, IndexMap<String, String>>,
	/// Axis name → default variant key.
	pub defaults: IndexMap<String, String>,
}

impl StyleDescriptor {
	/// Creates a descriptor with only base classes.
	pub fn new(base: impl Into<String>) -> Self {
		Self {
			base: base.into(),
			..Self::default()
		}
	}

	/// Adds a variant table entry.
	pub fn variant(
		mut self,
		axis: impl Into<String>,
		key: impl Into<String>,
		classes: impl Into<String>,
	) -> Self {
		self.variants
			.entry(axis.into())
			.or_default()
			.insert(key.into(), classes.into());
		self
	}

	/// Sets the default key of an axis.
	pub fn default_key(mut self, axis: impl Into<String>, key: impl Into<String>) -> Self {
		self.defaults.insert(axis.into(), key.into());
		self
	}

	/// Resolves the class string for the given axis selections.
	///
	/// Axes are visited in declaration order. An axis without a selection
	/// uses its default; a selection naming an unknown key falls back to the
	/// default as well. `component` and `slot` only label log events.
	pub fn resolve(&self, component: &str, slot: &str, selections: &[(&str, &str)]) -> String {
		let mut classes = self.base.clone();
		for (axis, table) in &self.variants {
			let selected = selections
				.iter()
				.find(|(name, _)| name == axis)
				.map(|(_, key)| *key);
			let default = self.defaults.get(axis).map(String::as_str);

			let chosen = match selected {
				Some(key) if table.contains_key(key) => Some(key),
				Some(key) => {
					tracing::warn!(
						component,
						slot,
						axis = axis.as_str(),
						key,
						fallback = default.unwrap_or(""),
						"unknown style variant, using default"
					);
					default
				}
				None => default,
			};

			if let Some(extra) = chosen.and_then(|key| table.get(key)) {
				classes = merge_classes(classes.as_str(), extra.as_str());
			}
		}
		classes
	}
}

/// Slot name → descriptor for one component.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ComponentStyles {
	slots: IndexMap<String, StyleDescriptor>,
}

impl ComponentStyles {
	/// Creates an empty slot table.
	pub fn new() -> Self {
		Self::default()
	}

	/// Adds or replaces a slot.
	pub fn slot(mut self, name: impl Into<String>, descriptor: StyleDescriptor) -> Self {
		self.slots.insert(name.into(), descriptor);
		self
	}

	/// Returns a slot's descriptor.
	pub fn get(&self, slot: &str) -> Option<&StyleDescriptor> {
		self.slots.get(slot)
	}

	/// Iterates over slot names in declaration order.
	pub fn slot_names(&self) -> impl Iterator<Item = &str> {
		self.slots.keys().map(String::as_str)
	}
}

/// Component name → slot styles.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct StyleRegistry {
	components: IndexMap<String, ComponentStyles>,
}

impl StyleRegistry {
	/// Creates an empty registry; every lookup resolves to no classes.
	pub fn empty() -> Self {
		Self::default()
	}

	/// Returns the shared built-in registry.
	///
	/// # Panics
	///
	/// Panics on first use if the embedded style table does not parse.
	pub fn builtin() -> Arc<StyleRegistry> {
		Arc::clone(&BUILTIN)
	}

	/// Parses a registry from TOML.
	pub fn from_toml_str(source: &str) -> Result<Self> {
		toml::from_str(source).map_err(|err| ComponentError::StyleConfig(err.to_string()))
	}

	/// Parses a registry from JSON.
	pub fn from_json_str(source: &str) -> Result<Self> {
		serde_json::from_str(source).map_err(|err| ComponentError::StyleConfig(err.to_string()))
	}

	/// Serializes the registry as TOML.
	///
	/// Table keys come out sorted, so slot and variant declaration order is
	/// not kept across a round trip.
	pub fn to_toml_string(&self) -> Result<String> {
		toml::to_string(self).map_err(|err| ComponentError::StyleConfig(err.to_string()))
	}

	/// Replaces one component's styles wholesale.
	pub fn with_component(mut self, name: impl Into<String>, styles: ComponentStyles) -> Self {
		let name = name.into();
		tracing::debug!(component = name.as_str(), "replacing component styles");
		self.components.insert(name, styles);
		self
	}

	/// Returns a copy of `self` with every component of `overrides` replacing
	/// the same-named component here.
	pub fn with_overrides(&self, overrides: &StyleRegistry) -> Self {
		let mut merged = self.clone();
		for (name, styles) in &overrides.components {
			tracing::debug!(component = name.as_str(), "overriding component styles");
			merged.components.insert(name.clone(), styles.clone());
		}
		merged
	}

	/// Returns a component's slot table.
	pub fn component(&self, name: &str) -> Option<&ComponentStyles> {
		self.components.get(name)
	}

	/// Returns the descriptor of one slot.
	pub fn descriptor(&self, component: &str, slot: &str) -> Option<&StyleDescriptor> {
		self.components.get(component)?.get(slot)
	}

	/// Whether a component has styles registered.
	pub fn contains(&self, component: &str) -> bool {
		self.components.contains_key(component)
	}

	/// Iterates over component names in declaration order.
	pub fn component_names(&self) -> impl Iterator<Item = &str> {
		self.components.keys().map(String::as_str)
	}

	/// Resolves the classes of `component`/`slot` for the given axis
	/// selections. Missing components or slots resolve to an empty string.
	pub fn resolve(&self, component: &str, slot: &str, selections: &[(&str, &str)]) -> String {
		match self.descriptor(component, slot) {
			Some(descriptor) => descriptor.resolve(component, slot, selections),
			None => {
				tracing::trace!(component, slot, "no styles registered");
				String::new()
			}
		}
	}
}
