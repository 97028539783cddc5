//! Fluent, immutable assembly of GraphQL queries and variables.
//!
//! This module provides the [`QueryBuilder`] type for accumulating named
//! query fragments, their target data bindings, and the variables they
//! require, and for validating and materializing the final payload.
//!
//! # Overview
//!
//! The main types in this module are:
//!
//! - [`QueryBuilder`]: The chainable builder with `query()`, `variable()`,
//!   `remove*()` and `build()` methods
//! - [`BuiltQuery`]: The validated output handed to a transport layer
//! - [`QueryBinding`]: One fragment/binding pair within a [`BuiltQuery`]
//! - [`BuildError`]: Error type for the build step
//!
//! # Immutability
//!
//! Every mutating method takes `&self` and returns a new builder value, so
//! a builder can be branched: call sites holding earlier snapshots are never
//! affected by later mutations on a derived builder.
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::QueryBuilder;
//!
//! let base = QueryBuilder::new()
//!     .query("person", "person-binding");
//!
//! // Branch the builder: `base` is unaffected by this extension.
//! let extended = base
//!     .query("user(id: $id)", "user-binding")
//!     .variable("id", "1");
//!
//! assert_eq!(base.build().unwrap().queries.len(), 1);
//! assert_eq!(extended.build().unwrap().queries.len(), 2);
//! ```
//!
//! # Validation
//!
//! Nothing is validated while accumulating. [`QueryBuilder::build`] checks
//! that the variables referenced by the registered fragments are satisfied
//! by exactly the declared variable keys: every referenced name must be
//! declared, and the total reference count must equal the number of
//! declarations, so a declared-but-unreferenced variable also fails the
//! build.

mod errors;
mod query_builder;
mod variables;

pub use errors::BuildError;
pub use query_builder::{BuiltQuery, QueryBinding, QueryBuilder};
