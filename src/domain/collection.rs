//! Ordered, duplicate-free container of elements with aggregate queries.

use std::fmt;

use itertools::Itertools;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::domain::entities::Element;
use crate::domain::error::{DomainError, DomainResult};
use crate::domain::validation;

/// Ordered collection of [`Element`]s with unique ids.
///
/// Elements enter only through [`add`](Collection::add) and are never
/// removed; the only later mutation is recording relations via
/// [`relate`](Collection::relate). All lookups are linear scans.
///
/// `add` and `relate` are check-then-act sequences, so concurrent callers
/// must wrap the collection in external synchronization.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Collection {
    elements: Vec<Element>,
}

impl Collection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add an element, validating it against the current contents.
    ///
    /// The collection is unchanged when validation fails.
    pub fn add(&mut self, element: Element) -> DomainResult<()> {
        debug!("add: id={}, value={}", element.id(), element.value());
        validation::validate_element(&element)?;
        validation::validate_no_duplicate(&self.elements, &element)?;

        self.elements.push(element);
        Ok(())
    }

    /// Record a directed relation from `source_id` to `target_id`.
    ///
    /// Both ids must already be present; the relation is recorded on the
    /// source element only. The collection is unchanged when lookup or
    /// validation fails.
    pub fn relate(&mut self, source_id: &str, target_id: &str) -> DomainResult<()> {
        debug!("relate: {} -> {}", source_id, target_id);
        let source_idx = self.index_of(source_id)?;
        let target_idx = self.index_of(target_id)?;

        validation::validate_relation(&self.elements[source_idx], &self.elements[target_idx])?;

        self.elements[source_idx].add_relation(target_id);
        Ok(())
    }

    /// Look up an element by id (linear scan).
    pub fn get(&self, id: &str) -> Option<&Element> {
        self.elements.iter().find(|e| e.id() == id)
    }

    fn index_of(&self, id: &str) -> DomainResult<usize> {
        self.elements
            .iter()
            .position(|e| e.id() == id)
            .ok_or_else(|| DomainError::NotFound(id.to_string()))
    }

    /// Number of contained elements.
    pub fn size(&self) -> usize {
        self.elements.len()
    }

    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Contained elements in insertion order.
    ///
    /// Read-only view: the collection grows only through
    /// [`add`](Collection::add).
    pub fn elements(&self) -> &[Element] {
        &self.elements
    }

    /// Sum of all element values, recomputed on every call.
    pub fn total_value(&self) -> f64 {
        self.elements.iter().map(|e| e.value()).sum()
    }
}

impl fmt::Display for Collection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Collection[{}]: {}",
            self.size(),
            self.elements.iter().map(|e| e.id()).join(", ")
        )
    }
}
