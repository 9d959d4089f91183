//! Track search helpers.
//!
//! Search is a case-insensitive substring match evaluated by PostgreSQL
//! `ILIKE`. The needle is matched literally, so wildcard characters typed by
//! the user are escaped before the pattern is built.

/// Escape character used in the `ESCAPE` clause of search queries.
pub const LIKE_ESCAPE: char = '\\';

/// Normalize an optional search argument.
///
/// Returns `None` when no filter should be applied: the argument is absent
/// or is the empty string.
pub fn normalize_search(search: Option<&str>) -> Option<&str> {
    search.filter(|s| !s.is_empty())
}

/// Whether `needle` can occur in stored text at all.
///
/// PostgreSQL text never contains NUL, and rejects it in parameters, so a
/// needle with one matches nothing.
pub fn is_matchable(needle: &str) -> bool {
    !needle.contains('\0')
}

/// Build a `%needle%` pattern with `%`, `_` and `\` escaped.
pub fn contains_pattern(needle: &str) -> String {
    let mut pattern = String::with_capacity(needle.len() + 2);
    pattern.push('%');
    for c in needle.chars() {
        if matches!(c, '%' | '_' | LIKE_ESCAPE) {
            pattern.push(LIKE_ESCAPE);
        }
        pattern.push(c);
    }
    pattern.push('%');
    pattern
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn absent_and_empty_mean_no_filter() {
        assert_eq!(normalize_search(None), None);
        assert_eq!(normalize_search(Some("")), None);
    }

    #[test]
    fn whitespace_is_a_real_needle() {
        assert_eq!(normalize_search(Some(" ")), Some(" "));
    }

    #[test]
    fn nul_needle_is_not_matchable() {
        assert!(is_matchable("jazz"));
        assert!(!is_matchable("a\0b"));
    }

    #[test]
    fn plain_needle_is_wrapped() {
        assert_eq!(contains_pattern("jazz"), "%jazz%");
    }

    #[test]
    fn wildcards_are_escaped() {
        assert_eq!(contains_pattern("50%_off"), "%50\\%\\_off%");
    }

    #[test]
    fn backslash_is_escaped() {
        assert_eq!(contains_pattern("a\\b"), "%a\\\\b%");
    }
}
