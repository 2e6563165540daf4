//! Perspective domain
//!
//! A perspective is one reasoning dimension (semantic incongruity, rhetorical
//! devices, persona conflict, ...) that scores how strongly a text reads as
//! sarcastic. The [`AgentCatalog`] is the configured subset a controller may
//! activate.

pub mod catalog;
pub mod kind;

pub use catalog::{AgentCatalog, CatalogEntry};
pub use kind::Perspective;
