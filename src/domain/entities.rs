//! Domain entities: core data structures

use serde::{Deserialize, Serialize};

/// A uniquely-identified element carrying a numeric value and its outgoing
/// relations.
///
/// The id and value are fixed at construction. Construction itself performs
/// no validation; all precondition checks live in
/// [`validation`](crate::domain::validation) and run at the collection
/// boundary.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Element {
    id: String,
    value: f64,
    /// Ids of related elements, insertion-ordered, no duplicates.
    related_ids: Vec<String>,
}

impl Element {
    /// Create a new element with no relations.
    ///
    /// Accepts any id/value pair; validity is the caller's concern.
    pub fn new(id: impl Into<String>, value: f64) -> Self {
        Self {
            id: id.into(),
            value,
            related_ids: Vec::new(),
        }
    }

    pub fn id(&self) -> &str {
        &self.id
    }

    pub fn value(&self) -> f64 {
        self.value
    }

    /// Related element ids, in the order the relations were recorded.
    pub fn related_ids(&self) -> &[String] {
        &self.related_ids
    }

    /// Whether this element already records a relation to `id`.
    pub fn is_related_to(&self, id: &str) -> bool {
        self.related_ids.iter().any(|r| r == id)
    }

    /// Record a relation to `target_id`.
    ///
    /// Idempotent: an id that is already present is not added again.
    pub fn add_relation(&mut self, target_id: impl Into<String>) {
        let target_id = target_id.into();
        if !self.is_related_to(&target_id) {
            self.related_ids.push(target_id);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_element_creation() {
        let element = Element::new("node-a", 12.5);
        assert_eq!(element.id(), "node-a");
        assert_eq!(element.value(), 12.5);
        assert!(element.related_ids().is_empty());
    }

    #[test]
    fn test_add_relation_is_idempotent() {
        let mut element = Element::new("node-a", 1.0);

        element.add_relation("node-b");
        element.add_relation("node-c");
        element.add_relation("node-b");

        assert_eq!(element.related_ids(), ["node-b", "node-c"]);
        assert!(element.is_related_to("node-b"));
        assert!(!element.is_related_to("node-d"));
    }
}
