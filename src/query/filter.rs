//! Value filter constructors
//!
//! Filters are plain [`Call`] values consumed by
//! [`Path::filter`](crate::query::Path::filter). No validation happens
//! here; the remote engine reports semantic errors.

use crate::query::path::{Arg, Call};

/// A traversal constraint, structurally a free call.
pub type Filter = Call;

/// Match values against an RE2 regular expression. By default only
/// literals are considered; pass `Some(true)` to include IRIs.
pub fn regex(expression: &str, include_iris: Option<bool>) -> Filter {
    let mut args = vec![Arg::from(expression)];
    if let Some(flag) = include_iris {
        args.push(Arg::from(flag));
    }
    Call::new("regex", args)
}

/// Match values against a wildcard pattern.
pub fn like(pattern: &str) -> Filter {
    Call::new("like", vec![Arg::from(pattern)])
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_regex_without_flag() {
        let filter = regex("ali.*", None);
        assert_eq!(filter.function, "regex");
        assert_eq!(filter.args, vec![Arg::from("ali.*")]);
    }

    #[test]
    fn test_regex_with_flag_appends_it() {
        let filter = regex("ali.*", Some(true));
        assert_eq!(filter.args, vec![Arg::from("ali.*"), Arg::from(true)]);
    }

    #[test]
    fn test_like() {
        let filter = like("%alice%");
        assert_eq!(filter.function, "like");
        assert_eq!(filter.args, vec![Arg::from("%alice%")]);
    }
}
