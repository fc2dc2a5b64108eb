//! Splits free text into plain and emphasized runs around a fixed set of
//! role names. Rendering backends decide how an emphasized run looks.

use std::sync::LazyLock;

use regex::Regex;

/// Role and function names called out across the playbook pages.
pub const HIGHLIGHT_TERMS: &[&str] = &[
    "Account Management",
    "Project Coordinators",
    "Marketing",
    "Producers",
];

// Longer terms first so the alternation prefers the longest match.
static TERM_RE: LazyLock<Regex> = LazyLock::new(|| {
    let pattern = HIGHLIGHT_TERMS
        .iter()
        .map(|t| regex::escape(t))
        .collect::<Vec<_>>()
        .join("|");
    Regex::new(&pattern).unwrap()
});

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Segment {
    pub text: String,
    pub emphasized: bool,
}

/// Split `text` into ordered segments, marking occurrences of the configured
/// terms. Empty input yields no segments.
pub fn highlight_segments(text: &str) -> Vec<Segment> {
    let mut segments = Vec::new();
    let mut cursor = 0;
    for m in TERM_RE.find_iter(text) {
        if m.start() > cursor {
            segments.push(Segment {
                text: text[cursor..m.start()].to_string(),
                emphasized: false,
            });
        }
        segments.push(Segment {
            text: m.as_str().to_string(),
            emphasized: true,
        });
        cursor = m.end();
    }
    if cursor < text.len() {
        segments.push(Segment {
            text: text[cursor..].to_string(),
            emphasized: false,
        });
    }
    segments
}
