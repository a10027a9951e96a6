//! Inline mark engine
//!
//! Converts between inline markup (`**bold**`, `*italic*`, `` `code` ``,
//! `~~strike~~`, `[text](url)`) and runs of text nodes carrying marks.
//!
//! Parsing repeatedly looks for the leftmost match among a fixed pattern
//! list. Patterns are listed in priority order; the order only decides
//! between matches that start at the same offset. This rule is what
//! resolves every overlapping-syntax ambiguity, e.g. `**a**` is bold and
//! never italic around a stray `*`.

use crate::ir::nodes::{Mark, MarkKind, Node};
use once_cell::sync::Lazy;
use regex::{Captures, Regex};

struct InlinePattern {
    regex: Regex,
    build: fn(&Captures<'_>) -> Node,
}

impl InlinePattern {
    fn new(re: &str, build: fn(&Captures<'_>) -> Node) -> Self {
        InlinePattern {
            regex: Regex::new(re).expect("inline patterns are valid regexes"),
            build,
        }
    }
}

fn link(caps: &Captures<'_>) -> Node {
    Node::text(&caps[1]).with_mark(Mark::link(&caps[2]))
}

fn strong(caps: &Captures<'_>) -> Node {
    Node::text(&caps[1]).with_mark(Mark::new("strong"))
}

fn strike(caps: &Captures<'_>) -> Node {
    Node::text(&caps[1]).with_mark(Mark::new("strike"))
}

fn code(caps: &Captures<'_>) -> Node {
    Node::text(&caps[1]).with_mark(Mark::new("code"))
}

fn em(caps: &Captures<'_>) -> Node {
    Node::text(&caps[1]).with_mark(Mark::new("em"))
}

// priority order: first entry wins a tie
static PATTERNS: Lazy<Vec<InlinePattern>> = Lazy::new(|| {
    vec![
        InlinePattern::new(r"\[([^\]]+)\]\(([^)]+)\)", link),
        InlinePattern::new(r"\*\*([^*]+)\*\*", strong),
        InlinePattern::new(r"~~([^~]+)~~", strike),
        InlinePattern::new(r"`([^`]+)`", code),
        InlinePattern::new(r"\*([^*]+)\*", em),
    ]
});

/// Parses inline markdown into text nodes.
///
/// Text between matches becomes unmarked text nodes. Empty input yields no
/// nodes.
pub fn parse_inline(text: &str) -> Vec<Node> {
    let mut nodes = Vec::new();
    let mut remaining = text;

    while !remaining.is_empty() {
        let mut earliest: Option<(usize, Captures<'_>)> = None;
        for (index, pattern) in PATTERNS.iter().enumerate() {
            let Some(caps) = pattern.regex.captures(remaining) else {
                continue;
            };
            let start = caps.get(0).map_or(usize::MAX, |m| m.start());
            let wins = match &earliest {
                Some((_, best)) => start < best.get(0).map_or(usize::MAX, |m| m.start()),
                None => true,
            };
            if wins {
                earliest = Some((index, caps));
            }
        }

        let Some((index, caps)) = earliest else {
            nodes.push(Node::text(remaining));
            break;
        };
        let Some(whole) = caps.get(0) else {
            break;
        };

        if whole.start() > 0 {
            nodes.push(Node::text(&remaining[..whole.start()]));
        }
        nodes.push((PATTERNS[index].build)(&caps));
        remaining = &remaining[whole.end()..];
    }

    nodes
}

/// Wraps `text` in the markup for each mark, in list order.
///
/// Each mark nests around the result of the previous one, so the mark list
/// order is the markup order. Marks without a markdown spelling leave the
/// text unchanged.
pub fn apply_marks(text: &str, marks: &[Mark]) -> String {
    let mut out = text.to_string();
    for mark in marks {
        out = match mark.kind() {
            MarkKind::Strong => format!("**{out}**"),
            MarkKind::Em => format!("*{out}*"),
            MarkKind::Code => format!("`{out}`"),
            MarkKind::Strike => format!("~~{out}~~"),
            MarkKind::Link => format!("[{out}]({})", mark.attr_str("href").unwrap_or("")),
            MarkKind::Underline => format!("_{out}_"),
            MarkKind::SubSup | MarkKind::Unknown => out,
        };
    }
    out
}
