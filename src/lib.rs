//! # GraphQL Query Builder
//!
//! A fluent, immutable query-assembly helper for GraphQL clients: accumulate
//! named query fragments together with their target data bindings and the
//! variables they require, validate that the declared variables exactly
//! match what the fragments reference, and hand the final payload to a
//! transport layer.
//!
//! ## Overview
//!
//! This crate provides:
//! - A chainable, value-semantics [`QueryBuilder`] for accumulating query
//!   fragments and variables
//! - Automatic extraction of each fragment's `$variable` references at
//!   insertion time
//! - Build-time validation that the declared variables satisfy exactly the
//!   variables the fragments reference
//! - Scoped removal operations (`remove`, `remove_query`, `remove_variable`)
//!   for conditionally pruning a composed request
//! - An async [`QueryExecutor`] seam for plugging in a transport layer
//!
//! ## Quick Start
//!
//! ```rust
//! use graphql_query_builder::QueryBuilder;
//!
//! let built = QueryBuilder::new()
//!     .query("user(id: $id)", "user-binding")
//!     .query("person", "person-binding")
//!     .variable("id", "1")
//!     .build()
//!     .unwrap();
//!
//! assert_eq!(built.queries[0].query, "user(id: $id)");
//! assert_eq!(built.variables["id"], "1");
//! ```
//!
//! ## Conditional Composition
//!
//! Because every mutating method returns a new builder, a base builder can
//! be branched per call site without snapshots interfering:
//!
//! ```rust
//! use graphql_query_builder::QueryBuilder;
//!
//! let base = QueryBuilder::new().query("person", "person-binding");
//!
//! let with_user = base
//!     .query("user(id: $id)", "user-binding")
//!     .variable("id", "1");
//!
//! // `base` still builds standalone; `with_user` carries the extra query.
//! assert_eq!(base.build().unwrap().queries.len(), 1);
//! assert_eq!(with_user.build().unwrap().queries.len(), 2);
//! ```
//!
//! ## Validation
//!
//! Nothing fails while accumulating: fragments with unreachable variable
//! references and variables no fragment mentions are accepted. The single
//! validation point is [`QueryBuilder::build`], which fails with
//! [`BuildError::NoQuery`] when no fragment is registered, or with
//! [`BuildError::MismatchedVariables`] when the declared variables do not
//! satisfy the fragments' references:
//!
//! ```rust
//! use graphql_query_builder::{BuildError, QueryBuilder};
//!
//! let error = QueryBuilder::new()
//!     .query("x($a)", ())
//!     .variable("a", 1)
//!     .variable("b", 2)
//!     .build()
//!     .unwrap_err();
//!
//! assert!(matches!(error, BuildError::MismatchedVariables { .. }));
//! ```
//!
//! ## Executing
//!
//! The crate performs no network I/O. A transport layer implements
//! [`QueryExecutor`] and receives the validated fragment list and variable
//! map; [`QueryBuilder::execute_query`] and
//! [`QueryBuilder::execute_mutation`] build and delegate in one call.
//!
//! ## Design Principles
//!
//! - **Value semantics**: Mutating a derived builder never affects a
//!   sibling or ancestor builder
//! - **Late validation**: Accumulation is total; the build step is the only
//!   fallible operation
//! - **Opaque bindings**: The binding type is a generic parameter the
//!   builder stores and returns but never inspects
//! - **Thread-safe**: Builders are `Send + Sync` whenever the binding type
//!   is

pub mod builder;
pub mod executor;

// Re-export public types at crate root for convenience
pub use builder::{BuildError, BuiltQuery, QueryBinding, QueryBuilder};
pub use executor::{ExecuteError, OperationKind, QueryExecutor};
