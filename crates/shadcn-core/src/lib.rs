//! # shadcn-core
//!
//! Rendering primitives shared by the shadcn-ssr widgets:
//!
//! - [`page`]: the `Page`/`PageElement` render tree and its HTML serializer
//! - [`attrs`]: the attribute bag and its merge rules
//! - [`class_merge`]: utility-class conflict resolution
//! - [`ids`]: unique element ids and derived ARIA ids
//! - [`error`]: the error type shared by all component crates

#![warn(missing_docs)]

pub mod attrs;
pub mod class_merge;
pub mod error;
pub mod ids;
pub mod page;

pub use attrs::{AttrValue, Attributes, merge_attributes};
pub use class_merge::{ClassList, join_classes, merge_classes, merge_many};
pub use error::{ComponentError, Result};
pub use ids::{AriaIds, IdGenerator, IdStrategy};
pub use page::{IntoPage, Page, PageElement};
