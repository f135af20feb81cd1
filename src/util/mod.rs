//
//  live-editor-api
//  util/mod.rs
//
//  Created by Ngonidzashe Mangudya on 2026/02/08.
//  Copyright (c) 2026 IAMNGONI. All rights reserved.
//

//! # Utility Module
//!
//! Small helpers shared by resource modules.

/// Builds the query string for relationship includes.
///
/// Resource finders accept a list of relationships to side-load; this turns
/// that list into the `include=a,b,c` query-string form the API expects.
///
/// # Parameters
///
/// * `includes` - Relationship names to include. Pass one element to include
///   a single relationship.
///
/// # Returns
///
/// The `include=` query string, or an empty string when no includes are
/// given.
///
/// # Example
///
/// ```rust
/// use live_editor_api::util::include_query_string;
///
/// assert_eq!(include_query_string(&[]), "");
/// assert_eq!(include_query_string(&["theme"]), "include=theme");
/// assert_eq!(
///     include_query_string(&["draft", "draft.user"]),
///     "include=draft,draft.user"
/// );
/// ```
pub fn include_query_string(includes: &[&str]) -> String {
    if includes.is_empty() {
        String::new()
    } else {
        format!("include={}", includes.join(","))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_includes_yield_empty_string() {
        assert_eq!(include_query_string(&[]), "");
    }

    #[test]
    fn single_include_yields_bare_query() {
        assert_eq!(include_query_string(&["theme"]), "include=theme");
    }

    #[test]
    fn multiple_includes_are_comma_delimited() {
        assert_eq!(
            include_query_string(&["draft", "draft.user"]),
            "include=draft,draft.user"
        );
    }
}
