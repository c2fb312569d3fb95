//! Integration tests for chunked input.

use declscan_markup::{
    DeclarationCollector, DeclarationEvent, DeclarationStream, MalformedKind, Position,
    StreamError,
};

const PAGE: &str = concat!(
    "<!DOCTYPE html>\n",
    "<html>\n",
    "<!-- header -->\n",
    "<body><![if !mso]>x<![endif]>\n",
    "</body></html>\n",
);

fn expected_events() -> Vec<DeclarationEvent> {
    vec![
        DeclarationEvent::Doctype("DOCTYPE html".to_string()),
        DeclarationEvent::Comment(" header ".to_string()),
        DeclarationEvent::Declaration("if !mso".to_string()),
        DeclarationEvent::Declaration("endif".to_string()),
    ]
}

/// Helper to feed `chunks` in order and return the final position and events
fn run(chunks: &[&str]) -> (Position, Vec<DeclarationEvent>) {
    let mut stream = DeclarationStream::new(DeclarationCollector::new());
    for chunk in chunks {
        stream.feed(chunk).expect("chunk should scan");
    }
    let position = stream.position();
    let collector = stream.finish().expect("input should be complete");
    (position, collector.into_events())
}

#[test]
fn test_single_chunk() {
    let (position, events) = run(&[PAGE]);
    assert_eq!(events, expected_events());
    assert_eq!(position, Position { line: 6, column: 0 });
}

#[test]
fn test_byte_at_a_time_matches_single_chunk() {
    let chunks: Vec<&str> = (0..PAGE.len()).map(|i| &PAGE[i..=i]).collect();
    let (position, events) = run(&chunks);
    assert_eq!(events, expected_events());
    assert_eq!(position, Position { line: 6, column: 0 });
}

#[test]
fn test_every_split_point() {
    for split in 0..=PAGE.len() {
        let (position, events) = run(&[&PAGE[..split], &PAGE[split..]]);
        assert_eq!(events, expected_events(), "split at {split}");
        assert_eq!(position, Position { line: 6, column: 0 });
    }
}

#[test]
fn test_unfinished_declaration_is_kept() {
    let mut stream = DeclarationStream::new(DeclarationCollector::new());
    stream.feed("abc<!DOC").expect("prefix should scan");
    assert_eq!(stream.pending(), "<!DOC");
    assert_eq!(stream.position(), Position { line: 1, column: 3 });
    assert!(stream.handler().events().is_empty());

    stream.feed("TYPE html>").expect("rest should scan");
    assert_eq!(stream.pending(), "");
    assert_eq!(stream.handler().events().len(), 1);
}

#[test]
fn test_trailing_less_than_is_not_truncation() {
    let mut stream = DeclarationStream::new(DeclarationCollector::new());
    stream.feed("a < b <").expect("text should scan");
    assert_eq!(stream.pending(), "<");
    assert!(stream.finish().is_ok());
}

#[test]
fn test_truncated_input() {
    let mut stream = DeclarationStream::new(DeclarationCollector::new());
    stream.feed("<p>\n<!-- open").expect("prefix should scan");
    match stream.finish() {
        Err(StreamError::Truncated { position }) => {
            assert_eq!(position, Position { line: 2, column: 0 });
        }
        other => panic!("expected truncation, got {other:?}"),
    }
}

#[test]
fn test_malformed_declaration() {
    let mut stream = DeclarationStream::new(DeclarationCollector::new());
    match stream.feed("<p><![bogus[x]]>") {
        Err(StreamError::Malformed(error)) => {
            assert_eq!(
                error.kind,
                MalformedKind::UnknownStatusKeyword("bogus".to_string())
            );
        }
        other => panic!("expected a malformed declaration, got {other:?}"),
    }
    assert_eq!(stream.handler().issues().len(), 1);
}

#[test]
fn test_event_json() {
    let (_, events) = run(&["<!DOCTYPE html><!--c-->"]);
    let json = serde_json::to_string(&events).expect("events serialize");
    assert_eq!(
        json,
        r#"[{"type":"doctype","data":"DOCTYPE html"},{"type":"comment","data":"c"}]"#
    );
}

#[test]
fn test_drain_events_between_chunks() {
    let mut stream = DeclarationStream::new(DeclarationCollector::new());
    stream.feed("<!DOCTYPE html>").expect("doctype should scan");
    assert_eq!(
        stream.handler_mut().take_events(),
        [DeclarationEvent::Doctype("DOCTYPE html".to_string())]
    );

    stream.feed("<!-- a --><!--").expect("comment should scan");
    assert_eq!(
        stream.handler_mut().take_events(),
        [DeclarationEvent::Comment(" a ".to_string())]
    );
    assert!(stream.handler().events().is_empty());

    stream.feed("b-->").expect("split comment should scan");
    let collector = stream.finish().expect("input is complete");
    assert_eq!(
        collector.into_events(),
        [DeclarationEvent::Comment("b".to_string())]
    );
}

#[test]
fn test_single_dash_stalls_the_stream() {
    let mut stream = DeclarationStream::new(DeclarationCollector::new());
    stream
        .feed("text <!-x> more <!DOCTYPE html> <!-- c -->")
        .expect("an unclassified '<!-' is not malformed");
    assert!(stream.handler().events().is_empty());
    assert_eq!(stream.pending(), "<!-x> more <!DOCTYPE html> <!-- c -->");
    match stream.finish() {
        Err(StreamError::Truncated { position }) => {
            assert_eq!(position, Position { line: 1, column: 5 });
        }
        other => panic!("expected truncation, got {other:?}"),
    }
}
