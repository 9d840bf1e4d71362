//! Error types shared by the component crates

use thiserror::Error;

/// Error type for component operations
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ComponentError {
	/// A property has the wrong shape for the options it is combined with
	#[error("Invalid component property: {0}")]
	InvalidProperty(String),

	/// Missing required property
	#[error("Missing required property: {0}")]
	MissingProperty(String),

	/// Attribute name that cannot be serialized into HTML
	#[error("Invalid HTML attribute: {0}")]
	InvalidAttribute(String),

	/// Style configuration could not be parsed
	#[error("Invalid style configuration: {0}")]
	StyleConfig(String),

	/// Rendering error
	#[error("Rendering error: {0}")]
	RenderingError(String),
}

impl ComponentError {
	/// Shorthand for an [`ComponentError::InvalidProperty`] naming the component
	pub fn invalid_property(component: &str, message: impl std::fmt::Display) -> Self {
		Self::InvalidProperty(format!("{component}: {message}"))
	}
}

/// Result type for component operations
pub type Result<T> = std::result::Result<T, ComponentError>;
