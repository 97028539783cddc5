//! The fluent, immutable query builder.
//!
//! This module provides [`QueryBuilder`], which accumulates named query
//! fragments together with their target data bindings and the variables they
//! require, and [`QueryBuilder::build`], which validates the accumulated
//! state and materializes the final payload for a transport layer.

use serde::Serialize;
use serde_json::{Map, Value};

use crate::builder::errors::BuildError;
use crate::builder::variables::find_variable_names;

/// A registered query fragment with its binding and the variables it
/// references.
///
/// `required_variables` is derived once, at insertion time, by scanning the
/// fragment text. The fragment text doubles as the identity used by the
/// removal operations.
#[derive(Debug, Clone)]
struct QueryFragment<B> {
    text: String,
    binding: B,
    required_variables: Vec<String>,
}

/// A built query fragment paired with its target data binding.
///
/// The binding is the opaque destination the caller (or its transport layer)
/// will populate with response data; the builder never inspects it.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct QueryBinding<B> {
    /// The fragment text, verbatim as registered.
    pub query: String,
    /// The caller's opaque response destination.
    pub binding: B,
}

/// The validated output of [`QueryBuilder::build`], ready for a transport
/// layer to serialize and send.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct BuiltQuery<B> {
    /// Fragment/binding pairs in insertion order.
    pub queries: Vec<QueryBinding<B>>,
    /// The full variable mapping.
    pub variables: Map<String, Value>,
}

/// A fluent, immutable builder for dynamic GraphQL queries and variables.
///
/// The builder helps compose multiple query fragments that need to be
/// conditionally added into a single request. Each mutating method takes
/// `&self` and returns a new builder, so a builder can be branched and
/// reused safely by call sites holding earlier snapshots.
///
/// `B` is the caller's binding type: an opaque destination that the
/// transport layer will later populate with response data. The builder only
/// stores bindings and hands them back from [`build`](Self::build).
///
/// Validation happens only at build time. Registering a fragment that
/// references a variable never declared (or declaring a variable no fragment
/// references) is accepted; the inconsistency surfaces as a
/// [`BuildError::MismatchedVariables`] when [`build`](Self::build) is called.
///
/// # Example
///
/// ```rust
/// use graphql_query_builder::QueryBuilder;
///
/// let built = QueryBuilder::new()
///     .query("user(id: $id)", "user-binding")
///     .query("person", "person-binding")
///     .variable("id", "1")
///     .build()
///     .unwrap();
///
/// assert_eq!(built.queries.len(), 2);
/// assert_eq!(built.variables["id"], "1");
/// ```
#[derive(Debug, Clone)]
pub struct QueryBuilder<B> {
    fragments: Vec<QueryFragment<B>>,
    variables: Map<String, Value>,
}

impl<B> Default for QueryBuilder<B> {
    fn default() -> Self {
        Self {
            fragments: Vec::new(),
            variables: Map::new(),
        }
    }
}

impl<B> QueryBuilder<B> {
    /// Creates an empty builder.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }
}

impl<B: Clone> QueryBuilder<B> {
    /// Returns a new builder with a query fragment and its target data
    /// binding appended.
    ///
    /// The fragment text is scanned for `$variable` references at insertion
    /// time; the names found become the fragment's required variables. No
    /// validation happens here, so even a fragment with malformed variable
    /// references is accepted. Errors surface only at
    /// [`build`](Self::build).
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphql_query_builder::QueryBuilder;
    ///
    /// let builder = QueryBuilder::new().query("user(id: $id)", "user-binding");
    /// ```
    #[must_use]
    pub fn query(&self, fragment: impl Into<String>, binding: B) -> Self {
        let text = fragment.into();
        let required_variables = find_variable_names(&text);

        let mut next = self.clone();
        next.fragments.push(QueryFragment {
            text,
            binding,
            required_variables,
        });
        next
    }

    /// Alias for [`query`](Self::query).
    #[must_use]
    pub fn bind(&self, fragment: impl Into<String>, binding: B) -> Self {
        self.query(fragment, binding)
    }

    /// Returns a new builder with the variable set to the given value.
    ///
    /// Overwrites any existing value under the same name. `Value::Null` is a
    /// legitimate value: the variable counts as declared even when it maps
    /// to "no value".
    #[must_use]
    pub fn variable(&self, name: impl Into<String>, value: impl Into<Value>) -> Self {
        let mut next = self.clone();
        next.variables.insert(name.into(), value.into());
        next
    }

    /// Returns a new builder with the given variables merged in.
    ///
    /// Entries in the argument map override same-named entries already
    /// present on the builder.
    #[must_use]
    pub fn variables(&self, variables: Map<String, Value>) -> Self {
        let mut next = self.clone();
        for (name, value) in variables {
            next.variables.insert(name, value);
        }
        next
    }

    /// Returns a new builder with the matching fragments and their
    /// now-unreferenced variables removed.
    ///
    /// Every fragment whose text exactly equals one of the given texts is
    /// removed. The variable mapping is then rebuilt from the surviving
    /// fragments: only variables still referenced by a surviving fragment
    /// are kept, so a variable referenced by both a removed and a surviving
    /// fragment is retained, while one referenced only by removed fragments
    /// is dropped.
    ///
    /// To remove fragments while leaving the variable mapping untouched,
    /// use [`remove_query`](Self::remove_query) instead.
    ///
    /// # Example
    ///
    /// ```rust
    /// use graphql_query_builder::QueryBuilder;
    ///
    /// let builder = QueryBuilder::new()
    ///     .query("user(id: $id)", "user")
    ///     .query("orders(id: $id, filter: $where)", "orders")
    ///     .variable("id", "1")
    ///     .variable("where", "open");
    ///
    /// // `id` survives because the orders fragment still references it.
    /// let built = builder.remove(["user(id: $id)"]).build().unwrap();
    /// assert!(built.variables.contains_key("id"));
    /// assert!(built.variables.contains_key("where"));
    /// ```
    #[must_use]
    pub fn remove<I, S>(&self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let texts: Vec<String> = fragments
            .into_iter()
            .map(|text| text.as_ref().to_string())
            .collect();

        let surviving = self.surviving_fragments(&texts);

        // Rebuild the variable map from the surviving fragments, so only
        // variables still referenced by one of them are carried over.
        let mut variables = Map::new();
        for fragment in &surviving {
            for name in &fragment.required_variables {
                if let Some(value) = self.variables.get(name) {
                    variables.insert(name.clone(), value.clone());
                }
            }
        }

        let dropped = self.variables.len() - variables.len();
        if dropped > 0 {
            tracing::debug!(dropped, "dropped variables no longer referenced by any fragment");
        }

        Self {
            fragments: surviving,
            variables,
        }
    }

    /// Returns a new builder with the matching fragments removed.
    ///
    /// Unlike [`remove`](Self::remove), the variable mapping is left
    /// untouched, which may leave now-unreferenced variables declared. A
    /// subsequent [`build`](Self::build) then fails with
    /// [`BuildError::MismatchedVariables`] citing the orphaned names.
    #[must_use]
    pub fn remove_query<I, S>(&self, fragments: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let texts: Vec<String> = fragments
            .into_iter()
            .map(|text| text.as_ref().to_string())
            .collect();

        Self {
            fragments: self.surviving_fragments(&texts),
            variables: self.variables.clone(),
        }
    }

    /// Returns a new builder with the matching variables removed.
    ///
    /// Fragments are untouched, so a fragment may now reference a missing
    /// variable; the inconsistency is caught at [`build`](Self::build).
    #[must_use]
    pub fn remove_variable<I, S>(&self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let names: Vec<String> = names
            .into_iter()
            .map(|name| name.as_ref().to_string())
            .collect();

        let variables = self
            .variables
            .iter()
            .filter(|(name, _)| !names.iter().any(|removed| removed == *name))
            .map(|(name, value)| (name.clone(), value.clone()))
            .collect();

        Self {
            fragments: self.fragments.clone(),
            variables,
        }
    }

    /// Validates the accumulated state and materializes the final payload.
    ///
    /// On success, returns the fragment/binding pairs in insertion order
    /// together with the full variable mapping. The builder itself is
    /// untouched and remains usable, so a caller can fix the state after a
    /// failure and build again.
    ///
    /// The variable check requires that every name referenced by a fragment
    /// is a declared variable key and that the total reference count equals
    /// the number of declared variables. A declared-but-unreferenced
    /// variable is therefore caught through the count inequality.
    ///
    /// # Errors
    ///
    /// - [`BuildError::NoQuery`] when no fragment has been registered.
    /// - [`BuildError::MismatchedVariables`] when the declared variables do
    ///   not satisfy the fragments' references, carrying both name lists
    ///   for diagnostics.
    pub fn build(&self) -> Result<BuiltQuery<B>, BuildError> {
        if self.fragments.is_empty() {
            return Err(BuildError::NoQuery);
        }

        let required: Vec<String> = self
            .fragments
            .iter()
            .flat_map(|fragment| fragment.required_variables.iter().cloned())
            .collect();

        let mut mismatched = self.variables.len() != required.len();
        if !mismatched && !required.is_empty() {
            mismatched = required
                .iter()
                .any(|name| !self.variables.contains_key(name));
        }
        if mismatched {
            let declared: Vec<String> = self.variables.keys().cloned().collect();
            tracing::debug!(
                ?required,
                ?declared,
                "query build failed: declared variables do not satisfy fragment references"
            );
            return Err(BuildError::MismatchedVariables { required, declared });
        }

        let queries = self
            .fragments
            .iter()
            .map(|fragment| QueryBinding {
                query: fragment.text.clone(),
                binding: fragment.binding.clone(),
            })
            .collect();

        Ok(BuiltQuery {
            queries,
            variables: self.variables.clone(),
        })
    }

    /// Fragments whose text matches none of the given texts.
    fn surviving_fragments(&self, texts: &[String]) -> Vec<QueryFragment<B>> {
        self.fragments
            .iter()
            .filter(|fragment| !texts.iter().any(|text| *text == fragment.text))
            .cloned()
            .collect()
    }
}
