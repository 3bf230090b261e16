//! Backing data model for a scrollable, selectable channel-list widget.
//!
//! The widget itself (row rendering, key handling) lives elsewhere and talks
//! to this crate through the [`widget::ListboxSink`] boundary; the catalog
//! owning the services sits behind [`catalog::ServiceCatalog`]. The model
//! keeps the entry order, the cursor, visibility filtering, multi-select
//! marks and the interactive reorder mode consistent, and tells the widget
//! about every structural change in visible-row coordinates.

pub mod catalog;
pub mod core;
pub mod list;
pub mod recordings;
pub mod widget;

#[cfg(test)]
pub(crate) mod fixtures;

pub use crate::core::entry::{Entry, EntryFlags, ServiceRef};
pub use crate::core::marked::MarkSet;
pub use crate::core::visibility::ViewOptions;
pub use crate::list::row::{RowArgs, RowStatus};
pub use crate::list::ServiceList;
pub use crate::widget::{ListboxSink, RefreshMode};
