//! # Block Parsing
//!
//! Segments a document into nested block regions, one detection cycle at a
//! time.
//!
//! ## Detection Cycle
//!
//! 1. **Detect** (`engine`): detectors are asked, in fixed priority order,
//!    whether the next one or two lines open their block; the first to
//!    answer wins and Paragraph is the catch-all.
//! 2. **Continue**: the winning handler is fed following lines and answers
//!    consumed, paused or rejected. A paused line waits for its successor to
//!    settle whether both belong to the block.
//! 3. **Close**: the handler emits its Begin tag, its pending leaf text or
//!    the output of a nested engine, then End.
//!
//! ## Modules
//!
//! - **`classify`**: `LineClass` local facts and the `LineView` line window
//! - **`kinds`**: one module per block kind, owning its syntax and handler
//! - **`engine`**: detector registry, continuation state machine, recursion
//! - **`types`**: `BlockEvent`, `LeafText`, `Within`, `Feed`
//!
//! ## Key Invariants
//!
//! - Every cycle consumes at least one line, so the pass terminates.
//! - At most one line is pending per handler.
//! - Containers run a fresh engine over prefix-stripped lines and splice its
//!   whole output between their own Begin and End.
//! - Nesting is bounded by `ParseOptions::max_nesting_depth`.

pub mod classify;
pub mod engine;
pub mod kinds;
pub mod types;

pub use classify::{LineClass, LineView};
pub use engine::parse_blocks;
pub use types::{BlockEvent, Feed, LeafText, Within};

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;
    use crate::parsing::{ParseMode, ParseOptions, rope::Source};

    fn events(text: &str, mode: ParseMode) -> Vec<String> {
        let src = Source::new(text);
        let options = ParseOptions {
            mode,
            ..Default::default()
        };
        parse_blocks(&src, &options)
            .unwrap()
            .into_iter()
            .map(|e| match e {
                BlockEvent::Tag(t) => t.kind.to_string(),
                BlockEvent::Text(t) if t.literal => format!("literal {:?}", t.region.text(&src)),
                BlockEvent::Text(t) => format!("text {:?}", t.region.text(&src)),
            })
            .collect()
    }

    fn blocks(text: &str) -> Vec<String> {
        events(text, ParseMode::BlocksAndSpans)
    }

    #[test]
    fn quote_lines_join() {
        assert_eq!(
            blocks("> line1\n> line2\n"),
            vec!["Quote", "Paragraph", "text \"line1\\nline2\"", "End", "End"]
        );
    }

    #[test]
    fn quote_lazy_continuation() {
        assert_eq!(
            blocks("> a\nb\n"),
            vec!["Quote", "Paragraph", "text \"a\\nb\"", "End", "End"]
        );
    }

    #[test]
    fn quote_blank_then_marker_continues() {
        assert_eq!(
            blocks("> a\n\n> b\n"),
            vec![
                "Quote",
                "Paragraph",
                "text \"a\"",
                "End",
                "Null",
                "Paragraph",
                "text \"b\"",
                "End",
                "End"
            ]
        );
    }

    #[test]
    fn quote_closes_on_blank_then_text() {
        assert_eq!(
            blocks("> a\n\nb\n"),
            vec![
                "Quote",
                "Paragraph",
                "text \"a\"",
                "End",
                "End",
                "Null",
                "Paragraph",
                "text \"b\"",
                "End"
            ]
        );
    }

    #[test]
    fn quote_closes_on_rule() {
        assert_eq!(
            blocks("> a\n***\n"),
            vec!["Quote", "Paragraph", "text \"a\"", "End", "End", "HorizontalRule"]
        );
    }

    #[test]
    fn nested_quotes() {
        assert_eq!(
            blocks("> > deep\n"),
            vec!["Quote", "Quote", "Paragraph", "text \"deep\"", "End", "End", "End"]
        );
    }

    #[test]
    fn headers() {
        assert_eq!(blocks("# Hello\n"), vec!["AtxHeader(1)", "text \"Hello\"", "End"]);
        assert_eq!(
            blocks("Title\n=====\n"),
            vec!["SetextHeader(1)", "text \"Title\"", "End"]
        );
        assert_eq!(
            blocks("Sub  \n---\n"),
            vec!["SetextHeader(2)", "text \"Sub\"", "End"]
        );
    }

    #[test]
    fn paragraph_then_setext_splits() {
        assert_eq!(
            blocks("a\nb\n---\n"),
            vec![
                "Paragraph",
                "text \"a\"",
                "End",
                "SetextHeader(2)",
                "text \"b\"",
                "End"
            ]
        );
    }

    #[test]
    fn code_keeps_inner_blank_and_indent() {
        assert_eq!(
            blocks("    a\n\n      b\n"),
            vec!["Code", "literal \"a\\n\\n  b\"", "End"]
        );
    }

    #[test]
    fn rule_outranks_bullet_list() {
        assert_eq!(blocks("* * *\n"), vec!["HorizontalRule"]);
    }

    #[test]
    fn reference_definition_is_self_closing() {
        assert_eq!(
            blocks("[a]: /u \"T\"\n"),
            vec!["ReferenceResolution(\"a\" -> \"/u\", \"T\")"]
        );
    }

    #[test]
    fn bullet_list_items() {
        assert_eq!(
            blocks("- a\n- b\n"),
            vec![
                "UnorderedList('-')",
                "Item",
                "Paragraph",
                "text \"a\"",
                "End",
                "End",
                "Item",
                "Paragraph",
                "text \"b\"",
                "End",
                "End",
                "End"
            ]
        );
    }

    #[test]
    fn ordered_numbers_are_not_validated() {
        let out = blocks("1. y\n3. x\n");
        assert_eq!(out[0], "OrderedList('.', 1)");
        assert_eq!(out.iter().filter(|e| *e == "Item").count(), 2);
    }

    #[test]
    fn different_bullet_closes_list() {
        let out = blocks("- a\n* b\n");
        assert_eq!(out[0], "UnorderedList('-')");
        assert!(out.contains(&"UnorderedList('*')".to_string()));
    }

    #[test]
    fn ordered_after_bullet_is_a_new_list() {
        let out = blocks("- a\n1. b\n");
        assert!(out.contains(&"OrderedList('.', 1)".to_string()));
    }

    #[test]
    fn list_continues_after_blank_with_indent() {
        assert_eq!(
            blocks("- a\n\n  b\n"),
            vec![
                "UnorderedList('-')",
                "Item",
                "Paragraph",
                "text \"a\"",
                "End",
                "Null",
                "Paragraph",
                "text \"b\"",
                "End",
                "End",
                "End"
            ]
        );
    }

    #[test]
    fn two_blank_lines_close_list() {
        let out = blocks("- a\n\n\n  b\n");
        let end_of_list = out.iter().position(|e| e == "Null").unwrap();
        assert_eq!(out[end_of_list - 1], "End");
        assert_eq!(out.last().unwrap(), "End");
        assert_eq!(out.iter().filter(|e| e.starts_with("UnorderedList")).count(), 1);
        assert!(out.contains(&"text \"b\"".to_string()));
    }

    #[test]
    fn nested_list_inside_item() {
        let out = blocks("- a\n  - b\n");
        assert_eq!(out.iter().filter(|e| *e == "UnorderedList('-')").count(), 2);
    }

    #[test]
    fn top_blocks_does_not_recurse() {
        assert_eq!(
            events("> a\n- b\n", ParseMode::TopBlocks),
            vec!["Quote", "End"]
        );
        assert_eq!(
            events("- a\n- b\n", ParseMode::TopBlocks),
            vec!["UnorderedList('-')", "Item", "End", "Item", "End", "End"]
        );
    }
}
