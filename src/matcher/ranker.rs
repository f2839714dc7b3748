// file: src/matcher/ranker.rs
// description: orders keyword results so found keywords come first

use crate::models::KeywordResult;

/// Stable partition: existing keywords first, input order kept inside each group.
pub fn rank(mut results: Vec<KeywordResult>) -> Vec<KeywordResult> {
    results.sort_by_key(|r| !r.exists);
    results
}

#[cfg(test)]
mod tests {
    use super::*;

    fn result(keyword: &str, exists: bool) -> KeywordResult {
        let mut result = KeywordResult::absent(keyword);
        result.exists = exists;
        if exists {
            result.pages = vec![1];
        }
        result
    }

    #[test]
    fn test_existing_first_with_input_order_kept() {
        let ranked = rank(vec![
            result("a", false),
            result("b", true),
            result("c", false),
            result("d", true),
            result("e", true),
        ]);

        let order: Vec<_> = ranked.iter().map(|r| r.keyword.as_str()).collect();
        assert_eq!(order, vec!["b", "d", "e", "a", "c"]);
    }

    #[test]
    fn test_partition_property() {
        let ranked = rank(vec![
            result("x", false),
            result("y", true),
            result("x", false),
            result("y", true),
        ]);

        let first_missing = ranked.iter().position(|r| !r.exists).unwrap();
        assert!(ranked[..first_missing].iter().all(|r| r.exists));
        assert!(ranked[first_missing..].iter().all(|r| !r.exists));
    }

    #[test]
    fn test_empty() {
        assert!(rank(Vec::new()).is_empty());
    }
}
