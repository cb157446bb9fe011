//! Storage layer
//!
//! Each repository owns the SQL for one resource and maps rows into
//! plain structs. No query derivation; everything is explicit.

pub mod location_repository;
pub mod route_optimization_repository;
pub mod transportation_repository;
pub mod trip_repository;

/// Escape LIKE metacharacters so user input only ever matches literally.
/// Postgres uses backslash as the escape character unless told otherwise.
pub(crate) fn escape_like(input: &str) -> String {
    let mut escaped = String::with_capacity(input.len());
    for c in input.chars() {
        if matches!(c, '\\' | '%' | '_') {
            escaped.push('\\');
        }
        escaped.push(c);
    }
    escaped
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_escape_like_passes_plain_text_through() {
        assert_eq!(escape_like("Lisbon"), "Lisbon");
    }

    #[test]
    fn test_escape_like_neutralizes_wildcards() {
        assert_eq!(escape_like("100%_done"), "100\\%\\_done");
    }

    #[test]
    fn test_escape_like_doubles_backslashes() {
        assert_eq!(escape_like("a\\b"), "a\\\\b");
    }
}
