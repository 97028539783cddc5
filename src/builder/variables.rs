//! Lexical extraction of GraphQL variable references from query fragments.
//!
//! Fragments are scanned as plain text for `$name` tokens. This is a lexical
//! scan, not a GraphQL parse: no nesting, comment, or string-literal
//! awareness is applied.

use once_cell::sync::Lazy;
use regex::Regex;

/// Matches a GraphQL variable reference (`$name`).
///
/// Name grammar per the GraphQL specification:
/// <https://spec.graphql.org/June2018/#sec-Names>
static VARIABLE_NAME: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"\$([_A-Za-z][_0-9A-Za-z]*)").expect("variable name pattern is valid")
});

/// Scans a query fragment for `$variable` references.
///
/// Returns every referenced name in order of appearance. Duplicate
/// references within a fragment are kept, not deduplicated; the builder's
/// variable validation counts each reference.
pub(crate) fn find_variable_names(fragment: &str) -> Vec<String> {
    VARIABLE_NAME
        .captures_iter(fragment)
        .map(|captures| captures[1].to_string())
        .collect()
}
