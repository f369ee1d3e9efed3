//! Multi-token boundary patterns and custom matchers

mod common;

use common::{sents, texts, toks};
use std::ops::Range;
use tokseg_core::{BoundaryPatternMatcher, Segmenter, SegmenterConfig};

fn with_pattern(pattern: &[&str]) -> SegmenterConfig {
    SegmenterConfig::builder()
        .multi_token_pattern(pattern.iter().copied())
        .build()
}

#[test]
fn test_span_ends_sentence() {
    assert_eq!(
        texts(with_pattern(&["-", "-"]), &toks("A - - B")),
        sents(&["A - -", "B"])
    );
}

#[test]
fn test_span_accepts_followers() {
    assert_eq!(
        texts(with_pattern(&["-", "-"]), &toks("A - - ) B")),
        sents(&["A - - )", "B"])
    );
}

#[test]
fn test_span_takes_precedence_over_boundary_tokens() {
    assert_eq!(
        texts(SegmenterConfig::default(), &toks("A . . B")),
        sents(&["A .", ".", "B"])
    );
    assert_eq!(
        texts(with_pattern(&[r"\.", r"\."]), &toks("A . . B")),
        sents(&["A . .", "B"])
    );
}

#[test]
fn test_single_token_pattern() {
    let config = SegmenterConfig::builder()
        .boundary_regex("")
        .multi_token_pattern(["END"])
        .build();
    assert_eq!(
        texts(config, &toks("a END b . c")),
        sents(&["a END", "b . c"])
    );
}

#[test]
fn test_longest_pattern_wins() {
    let config = SegmenterConfig::builder()
        .multi_token_pattern(["\\*", "\\*"])
        .multi_token_pattern(["\\*", "\\*", "\\*"])
        .build();
    assert_eq!(
        texts(config, &toks("a * * * b")),
        sents(&["a * * *", "b"])
    );
}

#[test]
fn test_span_ending_on_consumed_token_still_ends_sentence() {
    assert_eq!(
        texts(with_pattern(&["a", "b", "\n"]), &toks("a b \n c")),
        sents(&["a b", "c"])
    );

    let config = SegmenterConfig::builder()
        .tokens_to_discard(["um"])
        .multi_token_pattern(["a", "um"])
        .build();
    assert_eq!(texts(config, &toks("a um c")), sents(&["a", "c"]));
}

#[test]
fn test_partial_pattern_does_not_split() {
    assert_eq!(
        texts(with_pattern(&["-", "-"]), &toks("A - B")),
        sents(&["A - B"])
    );
}

/// Ends a sentence after every third token
struct EveryThird;

impl BoundaryPatternMatcher for EveryThird {
    fn find_iter<'t>(&'t self, tokens: &'t [&'t str]) -> Box<dyn Iterator<Item = Range<usize>> + 't> {
        Box::new((0..tokens.len()).filter(|i| i % 3 == 2).map(|i| i..i + 1))
    }
}

#[test]
fn test_custom_matcher() {
    let segmenter = Segmenter::new(SegmenterConfig::default())
        .unwrap()
        .with_boundary_matcher(EveryThird);
    let tokens = toks("a b c d e f g");
    let sentences: Vec<usize> = segmenter
        .segment(&tokens)
        .unwrap()
        .iter()
        .map(Vec::len)
        .collect();
    assert_eq!(sentences, vec![3, 3, 1]);
}
