//! # sd-core
//!
//! Core types shared across all spacedash crates:
//! - Entity structs for the space resources (agencies, astronauts, launches, programs)
//! - Loose deserializers for the inconsistently shaped upstream payloads
//! - Resource kinds and launch tabs
//! - The client-held [`Session`] value
//! - Cross-cutting error types

pub mod entities;
pub mod enums;
pub mod errors;
pub mod ids;
pub mod session;

pub use errors::CoreError;
pub use session::Session;
