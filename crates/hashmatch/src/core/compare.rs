use crate::data::ComparisonResult;

/// Lowercase form used for equality.
pub fn normalize_hash(hash: &str) -> String { hash.to_lowercase() }

/// Compare two digest strings.
///
/// Equality is exact after lowercasing; whitespace is significant and there
/// is no prefix or fuzzy matching. The inputs are returned unchanged for
/// display.
///
/// # Examples
///
/// ```
/// use hashmatch::core::compare_hashes;
///
/// assert!(compare_hashes("AABBCC", "aabbcc").is_match);
/// assert!(!compare_hashes("AABBCC", "aabbcd").is_match);
/// ```
pub fn compare_hashes(first: &str, second: &str) -> ComparisonResult {
    let is_match = normalize_hash(first) == normalize_hash(second);
    ComparisonResult::new(first, second, is_match)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn case_insensitive_match() {
        let result = compare_hashes("AABBCC", "aabbcc");
        assert!(result.is_match);
        assert_eq!(result.first_hash, "AABBCC");
        assert_eq!(result.second_hash, "aabbcc");
    }

    #[test]
    fn single_character_difference() {
        assert!(!compare_hashes("AABBCC", "aabbcd").is_match);
    }

    #[test]
    fn prefix_is_not_a_match() {
        assert!(!compare_hashes("aabbcc", "aabb").is_match);
    }

    #[test]
    fn whitespace_is_significant() {
        let result = compare_hashes("aabbcc ", "AABBCC");
        assert!(!result.is_match);
        assert_eq!(result.first_hash, "aabbcc ");
        assert_eq!(result.second_hash, "AABBCC");
    }

    #[test]
    fn empty_strings_compare_equal() {
        assert!(compare_hashes("", "").is_match);
    }
}
