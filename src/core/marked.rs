//! Multi-select bookkeeping – identities marked during a batch edit
//! session, independent of any per-entry flag.

use std::collections::BTreeSet;
use std::ops::Bound;

use super::entry::ServiceRef;

/// Where an external [`MarkSet`] enumeration currently stands.
#[derive(Debug, Clone, Default)]
enum QueryPos {
    /// No enumeration running; `query_next` yields nothing.
    #[default]
    Idle,
    /// Enumeration armed, nothing yielded yet.
    Start,
    /// Last identity handed out; resume strictly after it.
    After(ServiceRef),
}

/// Set of distinct identities marked for multi-selection.
///
/// The query cursor keys off the last yielded identity rather than a live
/// iterator, so callers may mutate the set between `query_next` calls
/// without invalidating a running enumeration.
#[derive(Debug, Default)]
pub struct MarkSet {
    set: BTreeSet<ServiceRef>,
    query: QueryPos,
}

impl MarkSet {
    pub fn clear(&mut self) {
        self.set.clear();
        self.query = QueryPos::Idle;
    }

    pub fn insert(&mut self, service: ServiceRef) -> bool {
        self.set.insert(service)
    }

    pub fn remove(&mut self, service: &ServiceRef) -> bool {
        self.set.remove(service)
    }

    pub fn contains(&self, service: &ServiceRef) -> bool {
        self.set.contains(service)
    }

    pub fn len(&self) -> usize {
        self.set.len()
    }

    pub fn is_empty(&self) -> bool {
        self.set.is_empty()
    }

    /// Arm the external enumeration at the first identity.
    pub fn query_start(&mut self) {
        self.query = QueryPos::Start;
    }

    /// Hand out the next marked identity, or `None` once exhausted.
    pub fn query_next(&mut self) -> Option<ServiceRef> {
        let next = match &self.query {
            QueryPos::Idle => None,
            QueryPos::Start => self.set.iter().next().cloned(),
            QueryPos::After(last) => self
                .set
                .range((Bound::Excluded(last), Bound::Unbounded))
                .next()
                .cloned(),
        };
        match next {
            Some(service) => {
                self.query = QueryPos::After(service.clone());
                Some(service)
            }
            None => {
                self.query = QueryPos::Idle;
                None
            }
        }
    }
}
