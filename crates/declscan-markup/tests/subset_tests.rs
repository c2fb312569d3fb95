//! Integration tests for DOCTYPE internal subsets.

use declscan_markup::{
    DeclarationCollector, DeclarationEvent, DeclarationTokenizer, MalformedDeclaration,
    MalformedKind, Position, Scan,
};

const NOTE_DTD: &str = r#"<!DOCTYPE note [
<!ELEMENT note (to,from,body)>
<!ATTLIST note id ID #REQUIRED kind (memo|letter) "memo">
<!ENTITY % common SYSTEM "common.ent">
%common;
<!ENTITY writer "Donald Duck.">
<!NOTATION gif PUBLIC "-//GIF//EN">
<!-- subset comment -->
]>"#;

fn parse(input: &str) -> (Result<Scan, MalformedDeclaration>, Vec<DeclarationEvent>) {
    let mut tokenizer = DeclarationTokenizer::new(DeclarationCollector::new());
    let result = tokenizer.parse_declaration(input, 0);
    (result, tokenizer.into_handler().into_events())
}

fn parse_error(input: &str) -> MalformedDeclaration {
    match parse(input) {
        (Err(error), events) => {
            assert!(events.is_empty());
            error
        }
        (Ok(scan), _) => panic!("expected a malformed declaration, got {scan:?}"),
    }
}

#[test]
fn test_doctype_with_internal_subset() {
    let (result, events) = parse(NOTE_DTD);
    assert_eq!(result, Ok(Scan::Complete(NOTE_DTD.len())));
    // The subset comment is skipped, not reported.
    assert_eq!(
        events,
        [DeclarationEvent::Doctype(NOTE_DTD[2..NOTE_DTD.len() - 1].to_string())]
    );
}

#[test]
fn test_doctype_with_internal_subset_followed_by_content() {
    let input = format!("{NOTE_DTD}\n<note></note>");
    let (result, _) = parse(&input);
    assert_eq!(result, Ok(Scan::Complete(NOTE_DTD.len())));
}

#[test]
fn test_every_prefix_is_incomplete() {
    for end in 2..NOTE_DTD.len() {
        let (result, events) = parse(&NOTE_DTD[..end]);
        assert_eq!(result, Ok(Scan::Incomplete), "prefix {:?}", &NOTE_DTD[..end]);
        assert!(events.is_empty());
    }
}

#[test]
fn test_whitespace_between_subset_and_close() {
    let input = "<!DOCTYPE x [ <!ELEMENT a ANY> ]  \n >";
    let (result, _) = parse(input);
    assert_eq!(result, Ok(Scan::Complete(input.len())));
}

#[test]
fn test_parameter_entity_reference_without_semicolon() {
    let input = "<!DOCTYPE x [ %pe ]>";
    let (result, _) = parse(input);
    assert_eq!(result, Ok(Scan::Complete(input.len())));
}

#[test]
fn test_element_content_model_is_skipped() {
    let input = "<!DOCTYPE x [<!ELEMENT p - O (#PCDATA|em)*>]>";
    let (result, _) = parse(input);
    assert_eq!(result, Ok(Scan::Complete(input.len())));
}

#[test]
fn test_attlist_forms() {
    for input in [
        "<!DOCTYPE x [<!ATTLIST p>]>",
        "<!DOCTYPE x [<!ATTLIST p align (left|right) #IMPLIED>]>",
        "<!DOCTYPE x [<!ATTLIST p a CDATA #IMPLIED b NUMBER '1'>]>",
        r#"<!DOCTYPE x [<!ATTLIST p a ( x | y ) "x" b CDATA #REQUIRED>]>"#,
    ] {
        let (result, _) = parse(input);
        assert_eq!(result, Ok(Scan::Complete(input.len())), "input {input:?}");
    }
}

#[test]
fn test_entity_forms() {
    for input in [
        r#"<!DOCTYPE x [<!ENTITY amp "&#38;">]>"#,
        "<!DOCTYPE x [<!ENTITY % pe '<!ELEMENT a ANY>'>]>",
        r#"<!DOCTYPE x [<!ENTITY logo SYSTEM "logo.gif" NDATA gif>]>"#,
    ] {
        let (result, _) = parse(input);
        assert_eq!(result, Ok(Scan::Complete(input.len())), "input {input:?}");
    }
}

#[test]
fn test_unknown_subset_declaration() {
    let error = parse_error("<!DOCTYPE x [<!BOGUS y>]>");
    assert_eq!(
        error.kind,
        MalformedKind::UnknownSubsetDeclaration("bogus".to_string())
    );
    assert_eq!(error.position, Position { line: 1, column: 15 });

    let error = parse_error("<!DOCTYPE x [<!DOCTYPE y>]>");
    assert_eq!(
        error.kind,
        MalformedKind::UnknownSubsetDeclaration("doctype".to_string())
    );
}

#[test]
fn test_tag_in_subset() {
    let error = parse_error("<!DOCTYPE x [ <p> ]>");
    assert_eq!(error.kind, MalformedKind::UnexpectedSubsetMarkup("<p".to_string()));
}

#[test]
fn test_junk_after_subset() {
    let error = parse_error("<!DOCTYPE x [ ] junk>");
    assert_eq!(error.kind, MalformedKind::UnexpectedAfterSubset);
}

#[test]
fn test_stray_char_in_subset_reports_position() {
    let error = parse_error("<!DOCTYPE x [\n\n @ ]>");
    assert_eq!(error.kind, MalformedKind::UnexpectedSubsetChar('@'));
    assert_eq!(error.position, Position { line: 3, column: 1 });
}

#[test]
fn test_missing_name_in_subset() {
    let error = parse_error(r#"<!DOCTYPE x [<!ENTITY 1 "x">]>"#);
    assert_eq!(
        error.kind,
        MalformedKind::ExpectedName("<!DOCTYPE x [<!ENTIT".to_string())
    );
    assert_eq!(error.position, Position { line: 1, column: 22 });
}

#[test]
fn test_parameter_entity_requires_whitespace() {
    let error = parse_error(r#"<!DOCTYPE x [<!ENTITY %pe "x">]>"#);
    assert_eq!(error.kind, MalformedKind::ExpectedWhitespace);
}
