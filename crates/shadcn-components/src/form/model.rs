//! The model collaborator form-bound widgets read from

use indexmap::IndexMap;
use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

use shadcn_core::{ComponentError, Result};

/// Source of field values and validation errors.
///
/// Any type exposing a value reader and a per-field error list can back a
/// form; [`JsonModel`] adapts plain JSON objects and serializable structs.
pub trait FormModel {
	/// Current value of `field`, if any.
	fn field_value(&self, field: &str) -> Option<Value>;

	/// Validation messages for `field`; empty when the field is valid.
	fn errors_for(&self, field: &str) -> Vec<String>;
}

impl<T: FormModel + ?Sized> FormModel for &T {
	fn field_value(&self, field: &str) -> Option<Value> {
		(**self).field_value(field)
	}

	fn errors_for(&self, field: &str) -> Vec<String> {
		(**self).errors_for(field)
	}
}

/// A bare JSON object is a model without errors.
impl FormModel for Value {
	fn field_value(&self, field: &str) -> Option<Value> {
		self.get(field).filter(|value| !value.is_null()).cloned()
	}

	fn errors_for(&self, _field: &str) -> Vec<String> {
		Vec::new()
	}
}

/// JSON-backed model: field values plus field-keyed error lists.
///
/// # Examples
///
/// ```
/// use shadcn_components::form::{FormModel, JsonModel};
///
/// let model = JsonModel::new()
/// 	.with_value("email", "ada@example.com")
/// 	.with_error("email", "is already taken");
/// assert_eq!(model.field_value("email").unwrap(), "ada@example.com");
/// assert_eq!(model.errors_for("email"), vec!["is already taken"]);
/// assert!(model.errors_for("name").is_empty());
/// ```
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct JsonModel {
	#[serde(default)]
	values: Map<String, Value>,
	#[serde(default)]
	errors: IndexMap<String, Vec<String>>,
}

impl JsonModel {
	/// Creates an empty model.
	pub fn new() -> Self {
		Self::default()
	}

	/// Builds a model from a JSON object of field values.
	pub fn from_value(values: Value) -> Result<Self> {
		match values {
			Value::Object(values) => Ok(Self {
				values,
				errors: IndexMap::new(),
			}),
			other => Err(ComponentError::invalid_property(
				"form",
				format!("model values must be a JSON object, got {other}"),
			)),
		}
	}

	/// Builds a model from any serializable record.
	pub fn from_serializable<T: Serialize>(record: &T) -> Result<Self> {
		let values = serde_json::to_value(record)
			.map_err(|err| ComponentError::RenderingError(err.to_string()))?;
		Self::from_value(values)
	}

	/// Sets a field value.
	pub fn with_value(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
		self.values.insert(field.into(), value.into());
		self
	}

	/// Adds a validation message for a field.
	pub fn with_error(mut self, field: impl Into<String>, message: impl Into<String>) -> Self {
		self.errors.entry(field.into()).or_default().push(message.into());
		self
	}

	/// Replaces all errors, e.g. with the output of a validator.
	pub fn with_errors(mut self, errors: IndexMap<String, Vec<String>>) -> Self {
		self.errors = errors;
		self
	}

	/// Whether any field has errors.
	pub fn has_errors(&self) -> bool {
		self.errors.values().any(|messages| !messages.is_empty())
	}
}

impl FormModel for JsonModel {
	fn field_value(&self, field: &str) -> Option<Value> {
		self.values.get(field).filter(|value| !value.is_null()).cloned()
	}

	fn errors_for(&self, field: &str) -> Vec<String> {
		self.errors.get(field).cloned().unwrap_or_default()
	}
}

/// Text form of a scalar value, as an input's `value` attribute carries it.
pub(crate) fn value_text(value: &Value) -> Option<String> {
	match value {
		Value::Null => None,
		Value::String(text) => Some(text.clone()),
		Value::Bool(flag) => Some(flag.to_string()),
		Value::Number(number) => Some(number.to_string()),
		Value::Array(_) | Value::Object(_) => Some(value.to_string()),
	}
}

/// Whether a value reads as "checked".
pub(crate) fn value_truthy(value: &Value) -> bool {
	match value {
		Value::Bool(flag) => *flag,
		Value::Number(number) => number.as_f64().is_some_and(|n| n != 0.0),
		Value::String(text) => matches!(
			text.trim().to_ascii_lowercase().as_str(),
			"1" | "true" | "on" | "yes"
		),
		Value::Null | Value::Array(_) | Value::Object(_) => false,
	}
}

/// Values of a multi-select field; a scalar counts as a one-element list.
pub(crate) fn value_list(value: &Value) -> Vec<String> {
	match value {
		Value::Array(items) => items.iter().filter_map(value_text).collect(),
		other => value_text(other).into_iter().collect(),
	}
}

/// Numeric values of a slider field.
pub(crate) fn value_numbers(value: &Value) -> Vec<f64> {
	let number = |value: &Value| match value {
		Value::Number(number) => number.as_f64(),
		Value::String(text) => text.trim().parse().ok(),
		_ => None,
	};
	match value {
		Value::Array(items) => items.iter().filter_map(number).collect(),
		other => number(other).into_iter().collect(),
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use rstest::rstest;
	use serde_json::json;

	#[derive(Serialize)]
	struct Profile {
		name: String,
		newsletter: bool,
	}

	#[rstest]
	fn test_from_serializable() {
		let model = JsonModel::from_serializable(&Profile {
			name: "Ada".into(),
			newsletter: true,
		})
		.unwrap();
		assert_eq!(model.field_value("name"), Some(json!("Ada")));
		assert_eq!(model.field_value("newsletter"), Some(json!(true)));
		assert!(!model.has_errors());
	}

	#[rstest]
	fn test_non_object_is_rejected() {
		let err = JsonModel::from_value(json!([1, 2])).unwrap_err();
		assert!(matches!(err, ComponentError::InvalidProperty(_)));
	}

	#[rstest]
	fn test_null_reads_as_absent() {
		let model = JsonModel::new().with_value("bio", Value::Null);
		assert_eq!(model.field_value("bio"), None);
	}

	#[rstest]
	fn test_borrowed_model() {
		let model = json!({"name": "Ada"});
		let borrowed = &model;
		assert_eq!(borrowed.field_value("name"), Some(json!("Ada")));
		assert!(borrowed.errors_for("name").is_empty());
	}

	#[rstest]
	#[case(json!(true), true)]
	#[case(json!(0), false)]
	#[case(json!(1), true)]
	#[case(json!("on"), true)]
	#[case(json!("0"), false)]
	#[case(json!(null), false)]
	fn test_value_truthy(#[case] value: Value, #[case] expected: bool) {
		assert_eq!(value_truthy(&value), expected);
	}

	#[rstest]
	#[case(json!(["a", "b"]), vec!["a", "b"])]
	#[case(json!("a"), vec!["a"])]
	#[case(json!([1, 2]), vec!["1", "2"])]
	fn test_value_list(#[case] value: Value, #[case] expected: Vec<&str>) {
		assert_eq!(value_list(&value), expected);
	}

	#[rstest]
	fn test_value_numbers() {
		assert_eq!(value_numbers(&json!([10, "90"])), vec![10.0, 90.0]);
		assert_eq!(value_numbers(&json!(42.5)), vec![42.5]);
	}
}
