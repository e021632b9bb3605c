//! Conversations domain layer: entities and validation

pub mod entities;
pub mod validation;
