//! Stateless validation checks run before mutating operations.
//!
//! Free functions, no state, no construction. Each returns the specific
//! [`DomainError`] kind for the violated precondition and has no side
//! effects beyond the error.

use crate::domain::entities::Element;
use crate::domain::error::{DomainError, DomainResult};

/// Check that an element is well-formed: non-empty id, strictly positive value.
pub fn validate_element(element: &Element) -> DomainResult<()> {
    if element.id().is_empty() {
        return Err(DomainError::InvalidId);
    }
    // NaN is neither positive nor negative; reject it alongside non-positives.
    if element.value() <= 0.0 || element.value().is_nan() {
        return Err(DomainError::InvalidValue {
            value: element.value(),
        });
    }
    Ok(())
}

/// Check that `candidate` does not share an id with an existing element.
pub fn validate_no_duplicate(existing: &[Element], candidate: &Element) -> DomainResult<()> {
    if existing.iter().any(|e| e.id() == candidate.id()) {
        return Err(DomainError::DuplicateId(candidate.id().to_string()));
    }
    Ok(())
}

/// Check that a source -> target relation is admissible.
///
/// Rejects self-relations and direct two-element cycles (the target already
/// relating back to the source). Longer cycles (a -> b -> c -> a) are not
/// detected.
pub fn validate_relation(source: &Element, target: &Element) -> DomainResult<()> {
    if source.id() == target.id() {
        return Err(DomainError::SelfRelation(source.id().to_string()));
    }
    if target.is_related_to(source.id()) {
        return Err(DomainError::ReciprocalRelation {
            source: source.id().to_string(),
            target: target.id().to_string(),
        });
    }
    Ok(())
}
