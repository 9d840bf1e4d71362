//! Field naming and binding

use serde_json::Value;

use super::model::FormModel;

/// A model together with the object name its fields are nested under.
///
/// With object name `user`, field `email` submits as `user[email]` and
/// gets the element id `user_email`; without one both are `email`.
#[derive(Debug, Clone)]
pub struct FormScope<M> {
	object_name: Option<String>,
	model: M,
}

impl<M: FormModel> FormScope<M> {
	/// Binds fields to `model` without nesting.
	pub fn new(model: M) -> Self {
		Self {
			object_name: None,
			model,
		}
	}

	/// Binds fields to `model` nested under `object_name`.
	pub fn object(object_name: impl Into<String>, model: M) -> Self {
		Self {
			object_name: Some(object_name.into()),
			model,
		}
	}

	/// The object name, if any.
	pub fn object_name(&self) -> Option<&str> {
		self.object_name.as_deref()
	}

	/// The underlying model.
	pub fn model(&self) -> &M {
		&self.model
	}

	/// Submitted name of `field`.
	pub fn field_name(&self, field: &str) -> String {
		match &self.object_name {
			Some(object) => format!("{object}[{field}]"),
			None => field.to_string(),
		}
	}

	/// Element id of `field`.
	///
	/// Characters that are awkward in ids and CSS selectors become `_`.
	pub fn field_id(&self, field: &str) -> String {
		let raw = match &self.object_name {
			Some(object) => format!("{object}_{field}"),
			None => field.to_string(),
		};
		let mut id = String::with_capacity(raw.len());
		for c in raw.chars() {
			match c {
				'a'..='z' | 'A'..='Z' | '0'..='9' | '_' | '-' => id.push(c),
				']' => {}
				_ => id.push('_'),
			}
		}
		id
	}

	/// Binds one field.
	pub fn field<'a>(&'a self, field: &'a str) -> BoundField<'a, M> {
		BoundField { scope: self, field }
	}
}

/// One field of a [`FormScope`]: its name, id, value and errors.
#[derive(Debug)]
pub struct BoundField<'a, M> {
	scope: &'a FormScope<M>,
	field: &'a str,
}

impl<M> Clone for BoundField<'_, M> {
	fn clone(&self) -> Self {
		*self
	}
}

impl<M> Copy for BoundField<'_, M> {}

impl<'a, M: FormModel> BoundField<'a, M> {
	/// The bare field name.
	pub fn name(&self) -> &'a str {
		self.field
	}

	/// The submitted name, e.g. `user[email]`.
	pub fn html_name(&self) -> String {
		self.scope.field_name(self.field)
	}

	/// The element id, e.g. `user_email`.
	pub fn id(&self) -> String {
		self.scope.field_id(self.field)
	}

	/// The model's value for this field.
	pub fn value(&self) -> Option<Value> {
		self.scope.model.field_value(self.field)
	}

	/// The model's errors for this field.
	pub fn errors(&self) -> Vec<String> {
		self.scope.model.errors_for(self.field)
	}

	/// Whether the model reports errors for this field.
	pub fn has_errors(&self) -> bool {
		!self.errors().is_empty()
	}
}

#[cfg(test)]
mod tests {
	use super::*;
	use crate::form::JsonModel;
	use rstest::rstest;
	use serde_json::json;

	#[rstest]
	#[case(None, "email", "email", "email")]
	#[case(Some("user"), "email", "user[email]", "user_email")]
	#[case(Some("user"), "tags[]", "user[tags[]]", "user_tags_")]
	fn test_names_and_ids(
		#[case] object: Option<&str>,
		#[case] field: &str,
		#[case] name: &str,
		#[case] id: &str,
	) {
		let model = JsonModel::new();
		let scope = match object {
			Some(object) => FormScope::object(object, &model),
			None => FormScope::new(&model),
		};
		assert_eq!(scope.field_name(field), name);
		assert_eq!(scope.field_id(field), id);
	}

	#[rstest]
	fn test_bound_field_reads_model() {
		let model = JsonModel::new()
			.with_value("email", "ada@example.com")
			.with_error("email", "is invalid");
		let scope = FormScope::object("user", model);
		let field = scope.field("email");
		assert_eq!(field.name(), "email");
		assert_eq!(field.html_name(), "user[email]");
		assert_eq!(field.value(), Some(json!("ada@example.com")));
		assert!(field.has_errors());
		assert!(!scope.field("name").has_errors());
	}
}
