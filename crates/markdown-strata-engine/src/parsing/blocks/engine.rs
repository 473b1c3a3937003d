use crate::{
    error::ParseError,
    parsing::{ParseOptions, rope::Source},
};

use super::{
    classify::LineView,
    kinds::{atx, block_quote, code_block, list, null, paragraph, reference, rule, setext},
    types::{BlockEvent, Feed, Within},
};

/// Everything a handler needs when it closes.
#[derive(Debug, Clone, Copy)]
pub struct Context<'s> {
    pub source: &'s Source,
    pub options: &'s ParseOptions,
    /// Container nesting depth; zero for the document itself.
    pub depth: usize,
    pub within: Within,
}

impl<'s> Context<'s> {
    pub fn new(source: &'s Source, options: &'s ParseOptions) -> Self {
        Self {
            source,
            options,
            depth: 0,
            within: Within::default(),
        }
    }

    /// Context for a container's nested engine.
    pub fn nested(&self, within: Within) -> Self {
        Self {
            depth: self.depth + 1,
            within,
            ..*self
        }
    }
}

/// Per-block continuation state.
///
/// Single-line blocks keep the defaults: they reject every further line.
pub trait BlockHandler<'s> {
    fn feed(&mut self, _line: LineView<'s>, _next: Option<LineView<'s>>) -> Feed {
        Feed::Rejected
    }

    /// Settles a paused line once the following line is known. Returning
    /// true means both lines now belong to the block.
    fn resume(&mut self, _paused: LineView<'s>, _line: LineView<'s>) -> bool {
        false
    }

    /// Emits Begin, contents and End.
    fn close(self: Box<Self>, cx: Context<'s>, out: &mut Vec<BlockEvent>)
    -> Result<(), ParseError>;
}

/// A detector's verdict: the handler that owns the block and how many lines
/// it took at detection time.
pub struct Detected<'s> {
    pub handler: Box<dyn BlockHandler<'s> + 's>,
    pub lines: usize,
}

type Detect = for<'s> fn(&[LineView<'s>], Within) -> Option<Detected<'s>>;

/// Fixed priority order; the first detector to answer wins.
const DETECTORS: [(&str, Detect); 10] = [
    ("null", null::detect),
    ("reference", reference::detect),
    ("setext", setext::detect),
    ("code", code_block::detect),
    ("atx", atx::detect),
    ("quote", block_quote::detect),
    ("rule", rule::detect),
    ("unordered list", list::detect_unordered),
    ("ordered list", list::detect_ordered),
    ("paragraph", paragraph::detect),
];

fn detect<'s>(lines: &[LineView<'s>], within: Within) -> Option<(&'static str, Detected<'s>)> {
    DETECTORS
        .iter()
        .find_map(|(name, detect)| detect(lines, within).map(|d| (*name, d)))
}

/// Where a handler stands between lines. At most one line is ever pending.
enum State<'s> {
    Open,
    Awaiting(LineView<'s>),
    Closed,
}

/// Feeds lines from `pos` until the handler closes; returns the index of the
/// first line it did not take.
fn drive<'s>(
    handler: &mut (dyn BlockHandler<'s> + 's),
    lines: &[LineView<'s>],
    mut pos: usize,
) -> usize {
    let mut state = State::Open;
    while let Some(&line) = lines.get(pos) {
        let next = lines.get(pos + 1).copied();
        state = match state {
            State::Open => match handler.feed(line, next) {
                Feed::Consumed => {
                    pos += 1;
                    State::Open
                }
                Feed::Paused => {
                    pos += 1;
                    State::Awaiting(line)
                }
                Feed::Rejected => State::Closed,
            },
            State::Awaiting(paused) => {
                if handler.resume(paused, line) {
                    pos += 1;
                    State::Open
                } else {
                    // Hand the paused line back for re-detection.
                    pos -= 1;
                    State::Closed
                }
            }
            State::Closed => State::Closed,
        };
        if matches!(state, State::Closed) {
            return pos;
        }
    }
    if matches!(state, State::Awaiting(_)) {
        pos -= 1;
    }
    pos
}

/// Runs one block engine over `lines`.
///
/// Containers call this recursively on their prefix-stripped lines and
/// splice the returned events between their own Begin and End.
pub fn run<'s>(cx: Context<'s>, lines: &[LineView<'s>]) -> Result<Vec<BlockEvent>, ParseError> {
    if cx.depth > cx.options.max_nesting_depth {
        let line = lines.first().map_or(0, LineView::line_number);
        log::warn!(
            "nesting depth {} exceeds limit {} at line {line}",
            cx.depth,
            cx.options.max_nesting_depth
        );
        return Err(ParseError::NestingTooDeep {
            limit: cx.options.max_nesting_depth,
            line,
        });
    }

    let mut out = Vec::new();
    let mut pos = 0;
    while pos < lines.len() {
        let (name, detected) =
            detect(&lines[pos..], cx.within).ok_or_else(|| ParseError::NoDetector {
                line: lines[pos].line_number(),
            })?;
        log::trace!(
            "{name} opens at line {} (depth {})",
            lines[pos].line_number(),
            cx.depth
        );
        let Detected { mut handler, lines: taken } = detected;
        pos = drive(handler.as_mut(), lines, pos + taken.max(1));
        handler.close(cx, &mut out)?;
    }
    Ok(out)
}

/// The block pass over a whole document.
pub fn parse_blocks(source: &Source, options: &ParseOptions) -> Result<Vec<BlockEvent>, ParseError> {
    let lines = LineView::all(source);
    log::debug!("block pass over {} lines", lines.len());
    run(Context::new(source, options), &lines)
}
