//! Database layer - connection pool, repositories and search builder
//!
//! # Design Principles
//!
//! - One statement per operation, always parameterized
//! - The pool is handed in by the caller, never a global
//! - Zero rows is `Ok(None)` / empty `Vec`; store failures are `Err`
//! - Rely on DB constraints, classify their failures - no check-then-insert

pub mod pool;
pub mod repos;
pub mod search;

pub use pool::{create_lazy_pool, create_pool};
pub use repos::*;
pub use search::{Predicate, PropertySearch};
