//! Research output parser
//!
//! The research agent is instructed to answer with three exact headers
//! (`## Keywords`, `## Research Notes`, `## Potential URLs`), but model
//! output is only semi-structured in practice. Parsing is therefore
//! best-effort: three independent section extractors, each optional, and
//! a fallback chain that never loses the raw text. This function never
//! fails.

use regex::{Regex, RegexBuilder};
use std::sync::LazyLock;

/// Sentinel stored in `research_notes` when there was no text to parse.
pub const NO_INPUT_SENTINEL: &str = "N/A - No input text";

#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct ParsedResearch {
    pub keywords: Vec<String>,
    pub research_notes: String,
    pub potential_urls: Vec<String>,
}

static KEYWORDS_SECTION: LazyLock<Regex> =
    LazyLock::new(|| section(r"## Keywords\s*\n(.*?)\n## Research Notes"));

static NOTES_SECTION: LazyLock<Regex> =
    LazyLock::new(|| section(r"## Research Notes\s*\n(.*?)\n## Potential URLs"));

static URLS_SECTION: LazyLock<Regex> = LazyLock::new(|| section(r"## Potential URLs\s*\n(.*)"));

fn section(pattern: &str) -> Regex {
    RegexBuilder::new(pattern)
        .case_insensitive(true)
        .dot_matches_new_line(true)
        .build()
        .expect("section pattern is valid")
}

/// Extract keywords, research notes, and potential URLs from raw agent
/// output.
///
/// Fallbacks: empty input yields the [`NO_INPUT_SENTINEL`] notes; when no
/// notes section can be extracted from non-empty input, the entire raw
/// text becomes the notes. Partial extraction is valid (keywords without
/// URLs or vice versa).
pub fn parse_research_output(text: &str) -> ParsedResearch {
    if text.is_empty() {
        return ParsedResearch {
            keywords: Vec::new(),
            research_notes: NO_INPUT_SENTINEL.to_string(),
            potential_urls: Vec::new(),
        };
    }

    let keywords = KEYWORDS_SECTION
        .captures(text)
        .map(|captures| non_empty_lines(&captures[1]))
        .unwrap_or_default();

    let mut research_notes = NOTES_SECTION
        .captures(text)
        .map(|captures| captures[1].trim().to_string())
        .unwrap_or_default();

    // Free-form lines are accepted as-is; the agent may legitimately
    // answer "no specific URL found" here.
    let potential_urls = URLS_SECTION
        .captures(text)
        .map(|captures| non_empty_lines(&captures[1]))
        .unwrap_or_default();

    // Notes are never silently lost: a response that defies the expected
    // headers is kept whole.
    if research_notes.is_empty() {
        research_notes = text.to_string();
    }

    ParsedResearch {
        keywords,
        research_notes,
        potential_urls,
    }
}

fn non_empty_lines(block: &str) -> Vec<String> {
    block
        .trim()
        .lines()
        .map(str::trim)
        .filter(|line| !line.is_empty())
        .map(str::to_string)
        .collect()
}
