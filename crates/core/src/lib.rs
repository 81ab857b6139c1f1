//! # OpenDay Core
//!
//! Shared types for the OpenDay availability service: the persisted row shape
//! used by the stores, the camelCase wire contract served to the frontend, and
//! the mapping between the two.

pub mod errors;
pub mod models;
pub mod overview;
