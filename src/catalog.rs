//! Catalog boundary – the external service database the list is a view of.
//!
//! The model never enumerates the catalog itself. It asks for a list
//! handle, pulls content out of it, and hands reorder commits back through
//! an edit session. Any of that may fail; every failure is recoverable
//! from the model's point of view and at most costs one logged line.

use std::cmp::Ordering;
use std::rc::Rc;

use thiserror::Error;

use crate::core::entry::{Entry, ServiceRef};

/// Failures surfaced by the catalog collaborators.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("no list available for root {0}")]
    NoList(ServiceRef),
    #[error("list content could not be read")]
    Content,
    #[error("list is not editable")]
    NotEditable,
    #[error("no service handler for {0}")]
    NoHandler(ServiceRef),
    #[error("move of {service} to visible position {to} was rejected")]
    MoveRejected { service: ServiceRef, to: usize },
}

/// Entry point into the external catalog.
pub trait ServiceCatalog {
    /// Resolve the list behind `root`.
    fn list(&self, root: &ServiceRef) -> Result<Rc<dyn ListHandle>, CatalogError>;

    /// Resolve the static info provider for one service.
    fn info(&self, service: &ServiceRef) -> Result<Box<dyn ServiceInfo>, CatalogError>;
}

/// A resolved catalog list, which also carries the catalog-defined order.
pub trait ListHandle {
    /// Read the full entry content, in catalog order.
    fn content(&self) -> Result<Vec<Entry>, CatalogError>;

    /// Open an edit session against the backing list.
    fn start_edit(&self) -> Result<Box<dyn EditableList>, CatalogError>;

    /// Catalog-defined total order over entries, bound to this list.
    fn compare(&self, a: &Entry, b: &Entry) -> Ordering;
}

/// Mutable view used to persist reorders.
pub trait EditableList {
    /// Move `service` to `visible_pos` in the external ordering.
    fn move_service(
        &mut self,
        service: &ServiceRef,
        visible_pos: usize,
    ) -> Result<(), CatalogError>;
}

/// Display-side info for a single service.
pub trait ServiceInfo {
    /// Human-readable display name.
    fn name(&self, service: &ServiceRef) -> String;
}
