//! End-to-end tests for the parsing module.
//!
//! Every parse here also runs the invariant checker. Expected streams are
//! written in the `snapshot::dump` format as `insta` inline snapshots.

use insta::assert_snapshot;
use pretty_assertions::assert_eq;

use crate::{
    error::ParseError,
    parsing::{ParseMode, ParseOptions, ParsedDoc, parse_document, parse_lines, snapshot},
};

fn parse_with(text: &str, mode: ParseMode) -> ParsedDoc {
    let options = ParseOptions {
        mode,
        ..Default::default()
    };
    let doc = parse_document(text, &options).unwrap();
    snapshot::invariants(&doc);
    doc
}

fn events(text: &str) -> String {
    snapshot::dump(&parse_with(text, ParseMode::BlocksAndSpans))
}

#[test]
fn atx_header() {
    assert_snapshot!(events("# Hello\n"), @r#"
    AtxHeader(1)
      Prose "Hello"
    End
    "#);
}

#[test]
fn quote_joins_lines() {
    assert_snapshot!(events("> line1\n> line2\n"), @r#"
    Quote
      Paragraph
        Prose "line1\nline2"
      End
    End
    "#);
}

#[test]
fn emphasis_levels() {
    assert_snapshot!(events("*a* **b**\n"), @r#"
    Paragraph
      Emphasis(1)
        Prose "a"
      End
      Prose " "
      Emphasis(2)
        Prose "b"
      End
    End
    "#);
}

#[test]
fn code_span() {
    assert_snapshot!(events("`code`\n"), @r#"
    Paragraph
      InlineCode "code"
    End
    "#);
}

#[test]
fn inline_link() {
    assert_snapshot!(events("[x](u \"t\")\n"), @r#"
    Paragraph
      Link("u", title="t")
        Prose "x"
      End
    End
    "#);
}

#[test]
fn unmatched_emphasis_is_prose() {
    assert_snapshot!(events("*foo\n"), @r#"
    Paragraph
      Prose "*foo"
    End
    "#);
}

#[test]
fn reference_defined_after_use() {
    assert_snapshot!(events("[x][a]\n\n[a]: /u\n"), @r#"
    Paragraph
      Link("/u", ref="a")
        Prose "x"
      End
    End
    Null
    ReferenceResolution("a" -> "/u")
    "#);
}

#[test]
fn reference_inside_quote_is_collected() {
    let doc = parse_with("see [here]\n\n> [here]: /q\n", ParseMode::BlocksAndSpans);
    assert_eq!(doc.references.get("HERE").unwrap().url, "/q");
    assert_snapshot!(snapshot::dump(&doc), @r#"
    Paragraph
      Prose "see "
      Link("/q", ref="here")
        Prose "here"
      End
    End
    Null
    Quote
      ReferenceResolution("here" -> "/q")
    End
    "#);
}

#[test]
fn duplicate_references_first_wins() {
    let doc = parse_with("[A]: /first\n[a]: /second\n\n[x][a]\n", ParseMode::BlocksAndSpans);
    assert_eq!(doc.references.len(), 1);
    assert_eq!(doc.references.get("a").unwrap().url, "/first");
    let definitions = doc
        .tags
        .iter()
        .filter(|t| t.kind.to_string().starts_with("ReferenceResolution"))
        .count();
    assert_eq!(definitions, 2);

    let doc = parse_with("[Foo]: /first\n[foo]: /second\n\n[x][FOO]\n", ParseMode::BlocksAndSpans);
    assert_snapshot!(snapshot::dump(&doc), @r#"
    ReferenceResolution("Foo" -> "/first")
    ReferenceResolution("foo" -> "/second")
    Null
    Paragraph
      Link("/first", ref="FOO")
        Prose "x"
      End
    End
    "#);
}

#[test]
fn reference_title_on_following_line() {
    assert_snapshot!(events("[a]: /u\n  \"T\"\nnext\n"), @r#"
    ReferenceResolution("a" -> "/u", "T")
    Paragraph
      Prose "next"
    End
    "#);
}

#[test]
fn list_inside_quote() {
    assert_snapshot!(events("> - a\n>   b\n"), @r#"
    Quote
      UnorderedList('-')
        Item
          Paragraph
            Prose "a\nb"
          End
        End
      End
    End
    "#);
}

#[test]
fn ordered_items_open_on_any_number() {
    assert_snapshot!(events("1. y\n3. x\n"), @r#"
    OrderedList('.', 1)
      Item
        Paragraph
          Prose "y"
        End
      End
      Item
        Paragraph
          Prose "x"
        End
      End
    End
    "#);
}

#[test]
fn code_block_is_literal() {
    assert_snapshot!(events("    let x = 1;\n\n    x *= 2;\n"), @r#"
    Code
      Prose "let x = 1;\n\nx *= 2;"
    End
    "#);
}

#[test]
fn setext_and_rule() {
    assert_snapshot!(events("Title\n=====\n\n***\n"), @r#"
    SetextHeader(1)
      Prose "Title"
    End
    Null
    HorizontalRule
    "#);
}

#[test]
fn blocks_only_leaves_spans_unresolved() {
    let doc = parse_with("*a* `b`\n", ParseMode::BlocksOnly);
    assert_snapshot!(snapshot::dump(&doc), @r#"
    Paragraph
      Prose "*a* `b`"
    End
    "#);
}

#[test]
fn top_blocks_keeps_containers_empty() {
    let doc = parse_with("> *a*\n\n- b\n", ParseMode::TopBlocks);
    assert_snapshot!(snapshot::dump(&doc), @r"
    Quote
    End
    Null
    UnorderedList('-')
      Item
      End
    End
    ");
}

#[test]
fn container_regions_survive_top_blocks() {
    let doc = parse_with("> a\n> b\n", ParseMode::TopBlocks);
    assert_eq!(doc.tags[0].region.text(&doc.source), "> a\n> b\n");
}

#[test]
fn nesting_guard_fails_the_parse() {
    let text = format!("{}deep\n", ">".repeat(70));
    let err = parse_document(&text, &ParseOptions::default()).unwrap_err();
    assert_eq!(err, ParseError::NestingTooDeep { limit: 64, line: 1 });
    assert!(!err.is_internal());
}

#[test]
fn nesting_within_the_limit_parses() {
    let text = format!("{}deep\n", ">".repeat(10));
    let doc = parse_document(&text, &ParseOptions::default()).unwrap();
    snapshot::invariants(&doc);
}

#[test]
fn parsing_is_deterministic() {
    let text = "# T\n\n> *a* [b][c]\n\n[c]: /d\n\n- x\n  - y\n";
    let first = parse_document(text, &ParseOptions::default()).unwrap();
    let second = parse_document(text, &ParseOptions::default()).unwrap();
    assert_eq!(first.tags, second.tags);
}

#[test]
fn lines_and_text_agree() {
    let from_lines = parse_lines(["# a", "b"], &ParseOptions::default()).unwrap();
    let from_text = parse_document("# a\nb", &ParseOptions::default()).unwrap();
    assert_eq!(from_lines.tags, from_text.tags);
}

#[test]
fn empty_document() {
    let doc = parse_with("", ParseMode::BlocksAndSpans);
    assert!(doc.tags.is_empty());
}

#[test]
fn blank_lines_only() {
    assert_snapshot!(events("\n\n\n"), @"Null");
}

#[test]
fn prose_regions_slice_back_to_source() {
    let doc = parse_with("> some *text*\n> here\n", ParseMode::BlocksAndSpans);
    let prose: Vec<_> = doc
        .tags
        .iter()
        .filter(|t| t.kind.to_string().starts_with("Prose"))
        .map(|t| t.region.text(&doc.source))
        .collect();
    assert_eq!(prose, vec!["some ", "text", "\nhere"]);
}
