//! Property tests over random token streams

use proptest::prelude::*;
use tokseg_core::{NewlinePolicy, Segmenter, SegmenterConfig};

const VOCAB: [&str; 12] = [
    "a", "b", ".", "!", "?", ")", "(", "\"", "'", "”", "\n", "*NL*",
];

fn token_stream() -> impl Strategy<Value = Vec<&'static str>> {
    prop::collection::vec(prop::sample::select(VOCAB.to_vec()), 0..64)
}

fn policy() -> impl Strategy<Value = NewlinePolicy> {
    prop::sample::select(NewlinePolicy::ALL.to_vec())
}

proptest! {
    #[test]
    fn prop_tokens_are_conserved(tokens in token_stream(), policy in policy()) {
        let segmenter = Segmenter::new(SegmenterConfig::with_newline_policy(policy)).unwrap();
        let sentences = segmenter.segment(&tokens).unwrap();

        let flattened: Vec<&str> = sentences.iter().flatten().map(|t| **t).collect();
        let expected: Vec<&str> = tokens
            .iter()
            .copied()
            .filter(|t| *t != "\n" && *t != "*NL*")
            .collect();
        prop_assert_eq!(flattened, expected);
    }

    #[test]
    fn prop_no_empty_sentences_by_default(tokens in token_stream(), policy in policy()) {
        let segmenter = Segmenter::new(SegmenterConfig::with_newline_policy(policy)).unwrap();
        let sentences = segmenter.segment(&tokens).unwrap();
        prop_assert!(sentences.iter().all(|s| !s.is_empty()));
    }

    #[test]
    fn prop_discarded_tokens_do_not_move_boundaries(
        tokens in prop::collection::vec((prop::sample::select(VOCAB.to_vec()), any::<bool>()), 0..64),
        policy in prop::sample::select(vec![NewlinePolicy::Never, NewlinePolicy::Always]),
    ) {
        let config = SegmenterConfig::builder()
            .tokens_to_discard(["\n", "*NL*", "um"])
            .newline_policy(policy)
            .build();
        let segmenter = Segmenter::new(config).unwrap();

        let plain: Vec<&str> = tokens.iter().map(|(t, _)| *t).collect();
        let mut padded = Vec::new();
        for (token, pad) in &tokens {
            if *pad {
                padded.push("um");
            }
            padded.push(*token);
        }

        let expected = segmenter.segment(&plain).unwrap();
        let actual = segmenter.segment(&padded).unwrap();
        prop_assert_eq!(actual, expected);
    }

    #[test]
    fn prop_segmentation_is_deterministic(tokens in token_stream()) {
        let segmenter = Segmenter::new(SegmenterConfig::default()).unwrap();
        let first = segmenter.segment(&tokens).unwrap();
        let second = segmenter.segment(&tokens).unwrap();
        prop_assert_eq!(first, second);
    }

    #[test]
    fn prop_one_sentence_mode(tokens in token_stream()) {
        let segmenter = Segmenter::new(SegmenterConfig::one_sentence(true)).unwrap();
        let sentences = segmenter.segment(&tokens).unwrap();
        prop_assert!(sentences.len() <= 1);
        let kept = tokens.iter().filter(|t| **t != "\n" && **t != "*NL*").count();
        prop_assert_eq!(sentences.iter().map(Vec::len).sum::<usize>(), kept);
    }
}
