use crate::diff::links::{LinkDiffMode, diff_link_sets, missing_from};

#[cfg(test)]
mod tests {
    use super::*;

    fn urls(list: &[&str]) -> Vec<String> {
        list.iter().map(|s| s.to_string()).collect()
    }

    #[test]
    fn test_identical_sets_produce_empty_diff() {
        let first = urls(&["http://a.example.com/", "http://a.example.com/about"]);
        let second = first.clone();

        let diff = diff_link_sets(&first, &second, LinkDiffMode::OneWay);
        assert!(diff.missing_from_second.is_empty());
        assert!(diff.missing_from_first.is_none());
    }

    #[test]
    fn test_superset_reports_exactly_the_extra_entry() {
        let first = urls(&["http://x.example.com/a", "http://x.example.com/b", "http://x.example.com/c"]);
        let second = urls(&["http://x.example.com/a", "http://x.example.com/b"]);

        let missing = missing_from(&first, &second);
        assert_eq!(missing, urls(&["http://x.example.com/c"]));
    }

    #[test]
    fn test_one_way_diff_ignores_the_other_direction() {
        let first = urls(&["http://x.example.com/only-first"]);
        let second = urls(&["http://x.example.com/only-second"]);

        let diff = diff_link_sets(&first, &second, LinkDiffMode::OneWay);
        assert_eq!(diff.missing_from_second, urls(&["http://x.example.com/only-first"]));
        assert!(diff.missing_from_first.is_none());
    }

    #[test]
    fn test_symmetric_diff_reports_both_directions() {
        let first = urls(&["http://x.example.com/shared", "http://x.example.com/only-first"]);
        let second = urls(&["http://x.example.com/shared", "http://x.example.com/only-second"]);

        let diff = diff_link_sets(&first, &second, LinkDiffMode::Symmetric);
        assert_eq!(diff.missing_from_second, urls(&["http://x.example.com/only-first"]));
        assert_eq!(
            diff.missing_from_first,
            Some(urls(&["http://x.example.com/only-second"]))
        );
    }

    #[test]
    fn test_missing_preserves_first_seen_order() {
        let first = urls(&[
            "http://x.example.com/3",
            "http://x.example.com/1",
            "http://x.example.com/2",
        ]);
        let second = Vec::new();

        assert_eq!(missing_from(&first, &second), first);
    }
}
