//! Error types for query building.
//!
//! This module contains the error type produced by
//! [`QueryBuilder::build`](crate::QueryBuilder::build). Building is the only
//! fallible operation on the builder; the chainable mutators are total
//! functions over their inputs (removing an unknown fragment or variable is
//! a no-op, not an error).
//!
//! # Example
//!
//! ```rust
//! use graphql_query_builder::{BuildError, QueryBuilder};
//!
//! let builder: QueryBuilder<()> = QueryBuilder::new();
//! assert!(matches!(builder.build(), Err(BuildError::NoQuery)));
//! ```

use thiserror::Error;

/// Errors that can occur when building the final query payload.
///
/// Both variants are recoverable: the builder remains usable after a failed
/// build, so the caller can add the missing fragment or fix the variable
/// mapping and build again.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum BuildError {
    /// No query fragment has been registered on the builder.
    #[error("no graphql query to be built")]
    NoQuery,

    /// The declared variables do not satisfy the variables referenced by
    /// the registered fragments.
    ///
    /// Carries both name lists so the caller can diagnose which names are
    /// missing or superfluous. `required` preserves fragment order and
    /// per-fragment reference order, duplicates included; `declared` is the
    /// sorted set of variable keys currently on the builder.
    #[error("mismatched variables; want: {required:?}; got: {declared:?}")]
    MismatchedVariables {
        /// Every variable name referenced by the registered fragments.
        required: Vec<String>,
        /// The variable names currently declared on the builder.
        declared: Vec<String>,
    },
}
