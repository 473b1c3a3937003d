use crate::parsing::{
    ParsedDoc,
    rope::Region,
    tags::{Pairing, TagKind},
};

/// Validates a finished stream.
///
/// Asserts that:
/// - Every `End` closes an open tag and nothing is left open
/// - Every run lies inside the source line it names
/// - Prose regions are in increasing, non-overlapping document order
/// - The span-level tags of each leaf tile its text region with no gaps
///
/// # Panics
/// Panics with a descriptive message if any invariant is violated.
pub fn check(doc: &ParsedDoc) {
    let src = &doc.source;
    // Block family of each open tag.
    let mut open: Vec<bool> = Vec::new();
    let mut prose_end = 0usize;
    let mut leaves = doc.leaves.iter().enumerate();
    let mut covered: Option<Region> = None;

    for (i, tag) in doc.tags.iter().enumerate() {
        let block = match tag.kind.pairing() {
            Pairing::Opens => {
                open.push(tag.kind.is_block());
                tag.kind.is_block()
            }
            Pairing::Closes => open
                .pop()
                .unwrap_or_else(|| panic!("End at tag {i} with nothing open")),
            Pairing::SelfClosing => tag.kind.is_block(),
        };

        if block {
            if let Some(region) = covered.take() {
                tiles_next_leaf(&region, &mut leaves, i);
            }
        } else {
            covered.get_or_insert_with(Region::new).append(&tag.region);
        }

        for run in tag.region.runs() {
            let line = src
                .line(run.line)
                .unwrap_or_else(|| panic!("tag {i} names missing line {}", run.line));
            assert!(
                !run.is_empty(),
                "tag {i} ({}) holds an empty run {run:?}",
                tag.kind
            );
            assert!(
                run.span.start >= line.span.start && run.span.end <= line.span.end,
                "tag {i} ({}) run {run:?} outside line span {:?}",
                tag.kind,
                line.span
            );
        }

        if let TagKind::Prose { .. } = tag.kind
            && let (Some(start), Some(end)) = (tag.region.start(), tag.region.end())
        {
            assert!(
                start >= prose_end,
                "Prose at tag {i} starts at {start}, before previous Prose end {prose_end}"
            );
            prose_end = end;
        }
    }
    assert!(open.is_empty(), "{} tags left open at end of stream", open.len());
    if let Some(region) = covered.take() {
        tiles_next_leaf(&region, &mut leaves, doc.tags.len());
    }
    if let Some((n, leaf)) = leaves.next() {
        panic!("leaf {n} {leaf:?} has no span tags");
    }
}

fn tiles_next_leaf<'a>(
    covered: &Region,
    leaves: &mut impl Iterator<Item = (usize, &'a Region)>,
    at: usize,
) {
    let Some((n, leaf)) = leaves.next() else {
        panic!("span tags before tag {at} belong to no leaf");
    };
    assert_eq!(covered, leaf, "span tags before tag {at} do not tile leaf {n}");
}
