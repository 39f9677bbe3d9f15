//! End-to-end tests for the markup translation pipeline
//!
//! These tests run whole documents through `MarkupFilter` with mock
//! collaborators and pin down the exact texts and comments the
//! collaborator sees, as well as the reconstructed output.

use crate::MarkupFilter;
use crate::mt::error::MtResult;
use crate::mt::mock::{MockMode, MockTranslator};
use crate::mt::translator::MachineTranslator;
use async_trait::async_trait;
use std::sync::Mutex;

/// Test double that records every collaborator call and returns the input
/// unchanged.
struct RecordingTranslator {
    calls: Mutex<Vec<(String, Option<String>)>>,
}

impl RecordingTranslator {
    fn new() -> Self {
        RecordingTranslator {
            calls: Mutex::new(Vec::new()),
        }
    }

    fn calls(&self) -> Vec<(String, Option<String>)> {
        self.calls.lock().unwrap().clone()
    }
}

#[async_trait]
impl MachineTranslator for RecordingTranslator {
    async fn translate(&self, text: &str, comment: Option<&str>) -> MtResult<String> {
        self.calls
            .lock()
            .unwrap()
            .push((text.to_string(), comment.map(str::to_string)));
        Ok(text.to_string())
    }

    fn provider_name(&self) -> &str {
        "Recording Translator"
    }
}

fn filter() -> MarkupFilter {
    MarkupFilter::new().unwrap()
}

#[tokio::test]
async fn test_paragraph_with_inline_formatting() {
    let recorder = RecordingTranslator::new();
    let doc = "<p>Hello <strong>world</strong>!</p>";
    let output = filter().translate_document(doc, &recorder).await.unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "Hello <s1>world</s1>!");
    assert_eq!(calls[0].1, None);

    assert_eq!(output, "<p>Hello&nbsp;<strong>world</strong>!</p>");
}

#[tokio::test]
async fn test_anchor_with_href_and_trailing_text() {
    let recorder = RecordingTranslator::new();
    let doc = r#"<a href="http://x.io">Link</a> (note)"#;
    let output = filter().translate_document(doc, &recorder).await.unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 2);
    assert_eq!(calls[0].0, "<a1>Link</a1> (note)");
    assert_eq!(calls[0].1.as_deref(), Some("a1: http://x.io\n"));
    assert_eq!(calls[1].0, "http://x.io");
    assert_eq!(calls[1].1.as_deref(), Some("Hyperlink for a1"));

    assert_eq!(output, r#"<a href="http://x.io">Link</a>&nbsp;(note)"#);
}

#[tokio::test]
async fn test_orphan_closing_tag_does_not_abort() {
    let recorder = RecordingTranslator::new();
    let doc = "one</strong>two";
    let output = filter().translate_document(doc, &recorder).await.unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "one</s1>two");
    assert_eq!(output, doc);
}

#[tokio::test]
async fn test_identical_pairs_share_one_placeholder() {
    let recorder = RecordingTranslator::new();
    let doc = "<p><strong>a</strong> <strong>b</strong></p>";
    let output = filter().translate_document(doc, &recorder).await.unwrap();

    let calls = recorder.calls();
    assert_eq!(calls.len(), 1);
    assert_eq!(calls[0].0, "<s1>a</s1> <s1>b</s1>");
    assert_eq!(output, "<p><strong>a</strong>&nbsp;<strong>b</strong></p>");
}

#[tokio::test]
async fn test_composite_document() {
    let recorder = RecordingTranslator::new();
    let doc = "Title text\n\
        <p><strong>Strong text and <em>strong italic text</em></strong></p>\n\
        <table><tbody><tr><td><a href=\"http://url1.net\">Table text 1</a></td><td>Table text 2</td></tr></tbody></table>\n\
        <ul><li>list item 1</li></ul>\n\
        <p><a href=\"https://url2.org\">Link</a> (description)</p>\n\
        <p><em><em>Bad tags <strong>here</strike></em></p>\n";
    let output = filter().translate_document(doc, &recorder).await.unwrap();

    let expected_calls: Vec<(&str, Option<&str>)> = vec![
        ("Title text", None),
        ("Strong text and <e1>strong italic text</e1>", None),
        ("<a1>Table text 1</a1>", Some("a1: http://url1.net\n")),
        ("http://url1.net", Some("Hyperlink for a1")),
        ("Table text 2", None),
        ("list item 1", None),
        ("<a2>Link</a2> (description)", Some("a2: https://url2.org\n")),
        ("https://url2.org", Some("Hyperlink for a2")),
        // The doubled opening reuses the orphan's cached id, the lone
        // closing strike gets its own; crossing stays crossing.
        ("<e2><e2>Bad tags <s2>here</s3></e2>", None),
    ];
    let calls = recorder.calls();
    assert_eq!(
        calls
            .iter()
            .map(|(text, comment)| (text.as_str(), comment.as_deref()))
            .collect::<Vec<_>>(),
        expected_calls
    );

    let expected_output = "Title&nbsp;text\n\
        <p><strong>Strong&nbsp;text&nbsp;and&nbsp;<em>strong&nbsp;italic&nbsp;text</em></strong></p>\n\
        <table><tbody><tr><td><a href=\"http://url1.net\">Table&nbsp;text&nbsp;1</a></td><td>Table&nbsp;text&nbsp;2</td></tr></tbody></table>\n\
        <ul><li>list&nbsp;item&nbsp;1</li></ul>\n\
        <p><a href=\"https://url2.org\">Link</a>&nbsp;(description)</p>\n\
        <p><em><em>Bad&nbsp;tags&nbsp;<strong>here</strike></em></p>\n";
    assert_eq!(output, expected_output);
}

#[tokio::test]
async fn test_sessions_do_not_leak_between_documents() {
    let filter = filter();
    let doc = "a <strong>b</strong>";

    let first = RecordingTranslator::new();
    filter.translate_document(doc, &first).await.unwrap();
    let second = RecordingTranslator::new();
    filter.translate_document(doc, &second).await.unwrap();

    // Counters restart for every document, so both runs see <s1>.
    assert_eq!(first.calls(), second.calls());
    assert_eq!(first.calls()[0].0, "a <s1>b</s1>");
}

#[tokio::test]
async fn test_provider_failure_propagates_unmodified() {
    let mock = MockTranslator::new(MockMode::Error("backend offline".to_string()));
    let result = filter().translate_document("<p>text</p>", &mock).await;
    match result {
        Err(crate::mt::error::MtError::TranslationError(msg)) => {
            assert_eq!(msg, "backend offline");
        }
        other => panic!("Expected TranslationError, got {:?}", other),
    }
}

#[tokio::test]
async fn test_document_without_payload_needs_no_collaborator() {
    let mock = MockTranslator::new(MockMode::Error("must not be called".to_string()));
    let doc = "<p>\n  <ul></ul></p>\n";
    let output = filter().translate_document(doc, &mock).await.unwrap();
    assert_eq!(output, doc);
}
