//! Error types for one-call query execution.
//!
//! Executing a builder delegates to an executor after a successful build,
//! so either stage can fail: [`ExecuteError::Build`] wraps the builder's
//! own validation error, [`ExecuteError::Transport`] carries the executor's
//! error through unchanged.

use thiserror::Error;

use crate::builder::BuildError;

/// Error type for [`QueryBuilder::execute_query`] and
/// [`QueryBuilder::execute_mutation`].
///
/// `E` is the executor's error type.
///
/// [`QueryBuilder::execute_query`]: crate::QueryBuilder::execute_query
/// [`QueryBuilder::execute_mutation`]: crate::QueryBuilder::execute_mutation
#[derive(Debug, Error)]
pub enum ExecuteError<E>
where
    E: std::error::Error + 'static,
{
    /// The builder failed validation; nothing was sent.
    #[error(transparent)]
    Build(#[from] BuildError),

    /// The executor failed after a successful build.
    #[error(transparent)]
    Transport(E),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[derive(Debug, Error)]
    #[error("transport unavailable")]
    struct TransportDown;

    #[test]
    fn test_build_error_converts_into_execute_error() {
        let error: ExecuteError<TransportDown> = BuildError::NoQuery.into();
        assert!(matches!(error, ExecuteError::Build(BuildError::NoQuery)));
    }

    #[test]
    fn test_display_is_transparent_for_both_variants() {
        let build: ExecuteError<TransportDown> = BuildError::NoQuery.into();
        assert_eq!(build.to_string(), "no graphql query to be built");

        let transport: ExecuteError<TransportDown> = ExecuteError::Transport(TransportDown);
        assert_eq!(transport.to_string(), "transport unavailable");
    }

    #[test]
    fn test_execute_error_implements_std_error() {
        let error: ExecuteError<TransportDown> = ExecuteError::Transport(TransportDown);
        let _: &dyn std::error::Error = &error;
    }
}
