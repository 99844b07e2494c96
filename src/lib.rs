//! In-memory collection of uniquely-identified, valued elements with
//! directed pairwise relations.
//!
//! Elements enter a [`Collection`] through validated [`add`] calls and are
//! linked with directed [`relate`] calls; aggregate queries read the live
//! contents. All integrity checks live in [`domain::validation`] and run at
//! the collection boundary, never inside [`Element`] itself.
//!
//! [`add`]: Collection::add
//! [`relate`]: Collection::relate

pub mod domain;
pub mod render;
pub mod util;

pub use domain::{Collection, DomainError, DomainResult, Element};
