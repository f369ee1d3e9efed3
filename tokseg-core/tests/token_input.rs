//! Token representations, configuration files and error reporting

mod common;

use common::{sents, texts};
use serde_json::{json, Value};
use std::io::Write;
use tempfile::NamedTempFile;
use tokseg_core::{Error, Segmenter, SegmenterConfig, Token};

#[test]
fn test_json_tokens() {
    let tokens: Vec<Value> = vec![
        json!("Hello"),
        json!({"text": "."}),
        json!({"word": "Bye", "forced_end": true}),
        json!(3),
    ];
    assert_eq!(
        texts(SegmenterConfig::default(), &tokens),
        sents(&["Hello .", "Bye", "3"])
    );
}

#[test]
fn test_unsupported_token_reports_position() {
    let tokens: Vec<Value> = vec![json!("a"), json!("."), json!(null)];
    let segmenter = Segmenter::new(SegmenterConfig::default()).unwrap();
    let err = segmenter.segment(&tokens).unwrap_err();
    match &err {
        Error::UnsupportedToken { index, kind } => {
            assert_eq!(*index, 2);
            assert_eq!(kind, "null");
        }
        other => panic!("unexpected error: {other}"),
    }
    assert!(err.to_string().contains("index 2"));
}

#[test]
fn test_segment_cloned() {
    let tokens = vec![Token::new("A"), Token::new("."), Token::new("B")];
    let segmenter = Segmenter::new(SegmenterConfig::default()).unwrap();
    let sentences = segmenter.segment_cloned(&tokens).unwrap();
    assert_eq!(sentences, vec![vec![Token::new("A"), Token::new(".")], vec![Token::new("B")]]);
}

#[test]
fn test_invalid_pattern_message() {
    let config = SegmenterConfig::builder().boundary_regex("[unclosed").build();
    let err = Segmenter::new(config).unwrap_err();
    assert!(err.to_string().contains("[unclosed"));
}

#[test]
fn test_config_file_drives_segmentation() {
    let mut file = NamedTempFile::new().unwrap();
    writeln!(
        file,
        r#"
[markup]
region_element = "sent"
break_elements = ["br"]

[newlines]
policy = "two"
"#
    )
    .unwrap();

    let config = SegmenterConfig::from_file(file.path()).unwrap();
    let tokens = ["x", "<sent>", "A", "<br/>", "B", "\n", "\n", "C", "</sent>", "y"];
    assert_eq!(texts(config, &tokens), sents(&["A", "B", "C"]));
}

#[test]
fn test_config_file_rejects_bad_policy() {
    let err = SegmenterConfig::from_toml_str("[newlines]\npolicy = \"sometimes\"\n").unwrap_err();
    assert!(err.to_string().contains("sometimes"));
}
