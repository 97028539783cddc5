//! The execution seam between a built query and a transport layer.
//!
//! The builder itself performs no network I/O. A transport layer plugs in
//! by implementing [`QueryExecutor`]: it receives the validated fragment
//! list and variable map, composes and sends the wire payload, populates
//! each binding with response data, and reports success or failure.
//!
//! # Overview
//!
//! The main items in this module are:
//!
//! - [`QueryExecutor`]: The async trait a transport layer implements
//! - [`OperationKind`]: Whether to execute the payload as a query or a
//!   mutation
//! - [`ExecuteError`]: Error type for one-call execution
//! - [`QueryBuilder::execute_query`] / [`QueryBuilder::execute_mutation`]:
//!   Build-then-execute convenience methods on the builder
//!
//! # Example
//!
//! ```rust,ignore
//! use graphql_query_builder::{OperationKind, QueryBinding, QueryBuilder, QueryExecutor};
//!
//! let builder = QueryBuilder::new()
//!     .query("user(id: $id)", user_binding)
//!     .variable("id", "1");
//!
//! // `client` implements `QueryExecutor`; it receives the validated
//! // fragment list and variable map and performs the request.
//! builder.execute_query(&client).await?;
//! ```

mod errors;

pub use errors::ExecuteError;

use async_trait::async_trait;
use serde_json::{Map, Value};

use crate::builder::{QueryBinding, QueryBuilder};

/// The kind of GraphQL operation a built payload should be executed as.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum OperationKind {
    /// Execute as a query.
    Query,
    /// Execute as a mutation.
    Mutation,
}

/// A transport/execution collaborator for built queries.
///
/// Implementors compose the wire payload from the fragment list and
/// variable map (joining fragment texts in order and wrapping them with a
/// variable-declaration header is the implementor's responsibility),
/// perform the request, and populate each [`QueryBinding`]'s binding with
/// response data.
///
/// `B` is the binding type shared with the [`QueryBuilder`] that produced
/// the payload.
#[async_trait]
pub trait QueryExecutor<B: Send + Sync>: Send + Sync {
    /// The transport-level error type.
    type Error: std::error::Error + Send + Sync + 'static;

    /// Executes a built payload as the given operation kind.
    ///
    /// # Errors
    ///
    /// Returns the implementor's transport or protocol error when the
    /// request fails.
    async fn execute(
        &self,
        operation: OperationKind,
        queries: &[QueryBinding<B>],
        variables: &Map<String, Value>,
    ) -> Result<(), Self::Error>;
}

impl<B> QueryBuilder<B>
where
    B: Clone + Send + Sync,
{
    /// Builds the accumulated state and executes it as a query.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::Build`] when validation fails (nothing is
    /// sent), or [`ExecuteError::Transport`] carrying the executor's error
    /// when the request fails.
    pub async fn execute_query<E>(&self, executor: &E) -> Result<(), ExecuteError<E::Error>>
    where
        E: QueryExecutor<B>,
    {
        self.execute_operation(OperationKind::Query, executor).await
    }

    /// Builds the accumulated state and executes it as a mutation.
    ///
    /// # Errors
    ///
    /// Returns [`ExecuteError::Build`] when validation fails (nothing is
    /// sent), or [`ExecuteError::Transport`] carrying the executor's error
    /// when the request fails.
    pub async fn execute_mutation<E>(&self, executor: &E) -> Result<(), ExecuteError<E::Error>>
    where
        E: QueryExecutor<B>,
    {
        self.execute_operation(OperationKind::Mutation, executor)
            .await
    }

    async fn execute_operation<E>(
        &self,
        operation: OperationKind,
        executor: &E,
    ) -> Result<(), ExecuteError<E::Error>>
    where
        E: QueryExecutor<B>,
    {
        let built = self.build()?;
        tracing::debug!(
            ?operation,
            queries = built.queries.len(),
            variables = built.variables.len(),
            "executing built graphql operation"
        );
        executor
            .execute(operation, &built.queries, &built.variables)
            .await
            .map_err(ExecuteError::Transport)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::BuildError;
    use std::convert::Infallible;

    struct AlwaysOk;

    #[async_trait]
    impl QueryExecutor<&'static str> for AlwaysOk {
        type Error = Infallible;

        async fn execute(
            &self,
            _operation: OperationKind,
            _queries: &[QueryBinding<&'static str>],
            _variables: &Map<String, Value>,
        ) -> Result<(), Self::Error> {
            Ok(())
        }
    }

    #[tokio::test]
    async fn test_execute_query_builds_then_delegates() {
        let builder = QueryBuilder::new()
            .query("user(id: $id)", "user-binding")
            .variable("id", "1");

        assert!(builder.execute_query(&AlwaysOk).await.is_ok());
    }

    #[tokio::test]
    async fn test_execute_query_surfaces_build_failure_without_sending() {
        let builder: QueryBuilder<&'static str> = QueryBuilder::new();

        let error = builder.execute_query(&AlwaysOk).await.unwrap_err();
        assert!(matches!(error, ExecuteError::Build(BuildError::NoQuery)));
    }
}
