//! Use-case services over the registry layer.
//!
//! # Responsibility
//! - Orchestrate catalog calls into use-case level entry points.
//! - Emit structured diagnostic events for successful mutations.
//!
//! # Invariants
//! - Services never bypass catalog validation or id resolution.
//! - Query paths stay side-effect free and unlogged.

pub mod catalog_service;
