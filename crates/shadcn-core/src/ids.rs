//! Element id generation and ARIA id derivation.
//!
//! Compound widgets (dialog, popover, form field, ...) need several ids that
//! point at each other. A widget draws one seed from an [`IdGenerator`] (or
//! takes the caller's) and derives every sub-part id from it with
//! [`AriaIds`], so the wiring inside one instance is always consistent and two
//! instances never share ids.

use std::sync::atomic::{AtomicU64, Ordering};

use uuid::Uuid;

/// Length of the random token appended to generated ids.
const RANDOM_TOKEN_LEN: usize = 10;

/// How an [`IdGenerator`] produces unique tokens.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum IdStrategy {
	/// Random hex tokens (uuid v4); unique across processes.
	#[default]
	Random,
	/// A per-generator counter; deterministic, for tests and snapshots.
	Sequential,
}

/// Produces unique element ids.
#[derive(Debug, Default)]
pub struct IdGenerator {
	strategy: IdStrategy,
	counter: AtomicU64,
}

impl IdGenerator {
	/// Creates a generator with the given strategy.
	pub fn new(strategy: IdStrategy) -> Self {
		Self {
			strategy,
			counter: AtomicU64::new(0),
		}
	}

	/// Creates a random-token generator.
	pub fn random() -> Self {
		Self::new(IdStrategy::Random)
	}

	/// Creates a counter-based generator.
	pub fn sequential() -> Self {
		Self::new(IdStrategy::Sequential)
	}

	/// Returns the strategy in use.
	pub fn strategy(&self) -> IdStrategy {
		self.strategy
	}

	/// Returns a fresh id of the form `{prefix}-{token}`.
	pub fn next(&self, prefix: &str) -> String {
		let token = match self.strategy {
			IdStrategy::Random => {
				let mut token = Uuid::new_v4().simple().to_string();
				token.truncate(RANDOM_TOKEN_LEN);
				token
			}
			IdStrategy::Sequential => {
				let n = self.counter.fetch_add(1, Ordering::Relaxed) + 1;
				n.to_string()
			}
		};
		let id = format!("{prefix}-{token}");
		tracing::trace!(id = %id, "generated element id");
		id
	}

	/// Returns the caller's id when given, otherwise a fresh one.
	pub fn seed(&self, explicit: Option<&str>, prefix: &str) -> String {
		match explicit {
			Some(id) if !id.trim().is_empty() => id.trim().to_string(),
			_ => self.next(prefix),
		}
	}
}

/// Sub-part ids derived from one seed.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AriaIds {
	seed: String,
}

impl AriaIds {
	/// Wraps a seed id.
	pub fn new(seed: impl Into<String>) -> Self {
		Self { seed: seed.into() }
	}

	/// The seed itself.
	pub fn seed(&self) -> &str {
		&self.seed
	}

	/// `{seed}-trigger`
	pub fn trigger(&self) -> String {
		self.part("trigger")
	}

	/// `{seed}-content`
	pub fn content(&self) -> String {
		self.part("content")
	}

	/// `{seed}-title`
	pub fn title(&self) -> String {
		self.part("title")
	}

	/// `{seed}-description`
	pub fn description(&self) -> String {
		self.part("description")
	}

	/// `{seed}-message`, the error message of a form field
	pub fn message(&self) -> String {
		self.part("message")
	}

	/// `{seed}-label`
	pub fn label(&self) -> String {
		self.part("label")
	}

	/// `{seed}-{suffix}` for ad hoc parts such as `item-2`.
	pub fn part(&self, suffix: &str) -> String {
		format!("{}-{suffix}", self.seed)
	}
}
