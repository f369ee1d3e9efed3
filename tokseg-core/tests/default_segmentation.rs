//! Segmentation with the default configuration

mod common;

use common::{sents, texts, toks};
use tokseg_core::{segment, SegmenterConfig};

fn run(input: &str) -> Vec<Vec<String>> {
    texts(SegmenterConfig::default(), &toks(input))
}

#[test]
fn test_single_sentence() {
    let tokens = ["This", "is", "a", "test", "."];
    let sentences = segment(&tokens, &SegmenterConfig::default()).unwrap();
    assert_eq!(sentences.len(), 1);
    assert_eq!(sentences[0].len(), 5);
}

#[test]
fn test_two_sentences() {
    assert_eq!(
        run("Hello world . How are you ?"),
        sents(&["Hello world .", "How are you ?"])
    );
}

#[test]
fn test_repeated_terminators_form_one_token() {
    assert_eq!(run("Wait !!! Really ?"), sents(&["Wait !!!", "Really ?"]));
    assert_eq!(run("What ?! No"), sents(&["What ?!", "No"]));
}

#[test]
fn test_cjk_terminators() {
    assert_eq!(
        run("今日 は 晴れ 。 明日 も 晴れ ！"),
        sents(&["今日 は 晴れ 。", "明日 も 晴れ ！"])
    );
}

#[test]
fn test_terminator_must_match_whole_token() {
    assert_eq!(run("See example.com now ."), sents(&["See example.com now ."]));
    assert_eq!(run("Mr. Smith left ."), sents(&["Mr. Smith left ."]));
}

#[test]
fn test_closing_brackets_follow_boundary() {
    assert_eq!(
        run("He said ( yes . ) Then it rained ."),
        sents(&["He said ( yes . )", "Then it rained ."])
    );
    assert_eq!(
        run("He agreed . -RRB- -RSB- Then left ."),
        sents(&["He agreed . -RRB- -RSB-", "Then left ."])
    );
}

#[test]
fn test_follower_without_boundary_is_content() {
    assert_eq!(run(") A ."), sents(&[") A ."]));
    assert_eq!(run("A ) B ."), sents(&["A ) B ."]));
}

#[test]
fn test_consecutive_terminators() {
    assert_eq!(run(". ."), sents(&[".", "."]));
}

#[test]
fn test_trailing_tokens_form_last_sentence() {
    assert_eq!(run("A . B C"), sents(&["A .", "B C"]));
    assert_eq!(run("no boundary here"), sents(&["no boundary here"]));
}

#[test]
fn test_newline_tokens_discarded() {
    let tokens = ["A", "\n", "B", "*NL*", "."];
    assert_eq!(texts(SegmenterConfig::default(), &tokens), sents(&["A B ."]));
}

#[test]
fn test_discarded_token_keeps_followers_attached() {
    let exact = SegmenterConfig::with_tokens_to_discard(["\n", "um"]);
    let pattern = SegmenterConfig::builder().token_regex_to_discard("um").build();
    let input = toks("A . um ) B .");

    assert_eq!(texts(exact, &input), sents(&["A . )", "B ."]));
    assert_eq!(texts(pattern, &input), sents(&["A . )", "B ."]));
}

#[test]
fn test_discard_regex() {
    let config = SegmenterConfig::builder()
        .token_regex_to_discard(r"<!--.*-->")
        .build();
    let tokens = ["A", "<!--note-->", "B", ".", "<!--x-->", "C"];
    assert_eq!(texts(config, &tokens), sents(&["A B .", "C"]));
}

#[test]
fn test_custom_boundary_regex() {
    let config = SegmenterConfig::builder().boundary_regex(";").build();
    assert_eq!(
        texts(config, &toks("a ; b . c")),
        sents(&["a ;", "b . c"])
    );
}

#[test]
fn test_output_borrows_input() {
    let tokens = vec![String::from("A"), String::from(".")];
    let sentences = segment(&tokens, &SegmenterConfig::default()).unwrap();
    assert!(std::ptr::eq(sentences[0][0], &tokens[0]));
}
