//! Property tests for filter pattern translation.

use std::path::Path;

use proptest::prelude::*;
use regex::Regex;

use fswatch_rsync_send::{translate, FilterPattern, SendError};

const BASE: &str = "/home/me/proj";

fn segment() -> impl Strategy<Value = String> {
    proptest::string::string_regex("[A-Za-z0-9_-]{1,12}").unwrap()
}

fn relative_dir() -> impl Strategy<Value = String> {
    proptest::collection::vec(segment(), 0..=4).prop_map(|segments| {
        segments
            .into_iter()
            .map(|s| format!("{s}/"))
            .collect::<String>()
    })
}

fn compile(pattern: &str) -> Regex {
    let expr = translate(&FilterPattern::new(pattern), Path::new(BASE)).unwrap();
    Regex::new(expr.as_str())
        .unwrap_or_else(|e| panic!("{pattern:?} -> {:?} is not a valid regex: {e}", expr.as_str()))
}

proptest! {
    #![proptest_config(ProptestConfig {
        cases: 256,
        .. ProptestConfig::default()
    })]

    /// PROPERTY: Every printable pattern without `[` translates to a valid regex.
    #[test]
    fn property_bracket_free_patterns_compile(
        pattern in "[ -Z\\\\-~]{1,32}"
    ) {
        compile(&pattern);
    }

    /// PROPERTY: Any pattern containing `[` is refused.
    #[test]
    fn property_character_classes_rejected(
        before in "[a-z*/]{0,8}",
        after in "[a-z\\]*]{0,8}"
    ) {
        let pattern = format!("{before}[{after}");
        let result = translate(&FilterPattern::new(pattern.as_str()), Path::new(BASE));
        let rejected = matches!(result, Err(SendError::UnsupportedSyntax { .. }));
        prop_assert!(rejected);
    }

    /// PROPERTY: Translation is deterministic.
    #[test]
    fn property_translate_is_idempotent(
        pattern in "[a-z*?/.]{1,16}"
    ) {
        let pattern = FilterPattern::new(pattern);
        let first = translate(&pattern, Path::new(BASE)).unwrap();
        let second = translate(&pattern, Path::new(BASE)).unwrap();
        prop_assert_eq!(first, second);
    }

    /// PROPERTY: `*.ext` excludes matching files at any depth below the root.
    #[test]
    fn property_extension_matches_at_any_depth(
        dir in relative_dir(),
        stem in segment(),
        ext in "[a-z]{1,4}"
    ) {
        let re = compile(&format!("*.{ext}"));
        let matching = format!("{BASE}/{dir}{stem}.{ext}");
        let other_ext = format!("{BASE}/{dir}{stem}.{ext}x");
        prop_assert!(re.is_match(&matching), "{}", matching);
        prop_assert!(!re.is_match(&other_ext), "{}", other_ext);
    }

    /// PROPERTY: An anchored name matches only directly below the root.
    #[test]
    fn property_anchored_name_only_at_root(
        dir in segment(),
        name in segment()
    ) {
        let re = compile(&format!("/{name}"));
        let at_root = format!("{BASE}/{name}");
        let nested = format!("{BASE}/{dir}/{name}");
        prop_assert!(re.is_match(&at_root));
        prop_assert!(!re.is_match(&nested));
    }

    /// PROPERTY: `dir/***` covers the directory and everything below it.
    #[test]
    fn property_triple_star_covers_subtree(
        name in segment(),
        below in relative_dir(),
        leaf in segment()
    ) {
        let re = compile(&format!("/{name}/***"));
        let dir = format!("{BASE}/{name}");
        let inside = format!("{BASE}/{name}/{below}{leaf}");
        let sibling = format!("{BASE}/{name}x");
        prop_assert!(re.is_match(&dir));
        prop_assert!(re.is_match(&inside));
        prop_assert!(!re.is_match(&sibling));
    }
}
