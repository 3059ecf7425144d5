//! Response Parser — turns a free-text model reply into a `ParsedResult`.
//!
//! The reply format is not guaranteed, so nothing here fails: sections that cannot be
//! located come back empty and the SEO score is simply omitted.
//!
//! Recognized section markers:
//! - bracket tags on a line of their own: `[TITLES]` ... `[/TITLES]` (closing tag optional)
//! - bold headers at line start: `**1. Titles:**`, `**Tags**:`, `## **SEO Score**`
//!
//! A section body runs to the next marker or end of text. The first non-empty
//! occurrence of a section wins.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use regex::Regex;
use serde::{Deserialize, Serialize};

static MARKER_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(concat!(
        r"(?m)^[ \t]*\[(?P<close>/?)[ \t]*(?P<tag>[A-Za-z][A-Za-z _-]*?)[ \t]*\][ \t\r]*$",
        r"|^[ \t]*(?:#{1,6}[ \t]*)?\*\*[ \t]*(?:(?P<num>\d+)[.)][ \t]*)?(?P<bold>[^*\n]+?)[ \t]*\*\*[ \t]*:?",
    ))
    .expect("marker regex is valid")
});

static ORDINAL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^(?:(?:\d{1,3}[.)]|[-*•])\s+)+").expect("ordinal regex is valid"));

static SEO_SCORE_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?i)score\s*(?:\([^)]*\)\s*)?(?:[:=\-]\s*|is\s+)?(\d{1,3})(?:\s*(?:/|out of)\s*100)?")
        .expect("seo score regex is valid")
});

static SEO_SUGGESTIONS_RE: Lazy<Regex> = Lazy::new(|| {
    Regex::new(r"(?is)suggestions?\s*[:\-]\s*(.*?)(?:\n[ \t]*\n|\z)")
        .expect("seo suggestions regex is valid")
});

/// Content categories the parser knows how to locate.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Section {
    Titles,
    Tags,
    TrendingTopics,
    Hooks,
    Hashtags,
    Seo,
}

impl Section {
    pub const ALL: [Section; 6] = [
        Section::Titles,
        Section::Tags,
        Section::TrendingTopics,
        Section::Hooks,
        Section::Hashtags,
        Section::Seo,
    ];

    /// Bracket marker name used when asking the model for this section.
    pub fn marker(self) -> &'static str {
        match self {
            Section::Titles => "TITLES",
            Section::Tags => "TAGS",
            Section::TrendingTopics => "TRENDING_TOPICS",
            Section::Hooks => "HOOKS",
            Section::Hashtags => "HASHTAGS",
            Section::Seo => "SEO",
        }
    }

    /// Maps a marker label to a section. Order matters: "hashtags" contains "tag",
    /// "trending tags" is a trend list.
    pub fn classify(label: &str) -> Option<Section> {
        let label = label
            .split(':')
            .next()
            .unwrap_or_default()
            .to_lowercase()
            .replace(['_', '-'], " ");

        if label.contains("hashtag") {
            Some(Section::Hashtags)
        } else if label.contains("trend") {
            Some(Section::TrendingTopics)
        } else if label.contains("hook") {
            Some(Section::Hooks)
        } else if label.contains("seo") || label.contains("score") {
            Some(Section::Seo)
        } else if label.contains("tag") || label.contains("keyword") {
            Some(Section::Tags)
        } else if label.contains("title") || label.contains("headline") {
            Some(Section::Titles)
        } else {
            None
        }
    }
}

/// SEO score with improvement suggestions.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct SeoScore {
    /// Always within 0..=100.
    pub score: u8,
    pub suggestions: String,
}

/// Everything extracted from one model reply.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ParsedResult {
    pub titles: Vec<String>,
    pub tags: Vec<String>,
    pub trending_topics: Vec<String>,
    pub hooks: Vec<String>,
    pub hashtags: Vec<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub seo: Option<SeoScore>,
}

impl ParsedResult {
    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
            && self.tags.is_empty()
            && self.trending_topics.is_empty()
            && self.hooks.is_empty()
            && self.hashtags.is_empty()
            && self.seo.is_none()
    }
}

struct Marker<'t> {
    section: Option<Section>,
    closing: bool,
    /// Header text for bold markers; may carry inline content after a colon.
    label: &'t str,
    start: usize,
    end: usize,
}

fn find_markers(text: &str) -> Vec<Marker<'_>> {
    MARKER_RE
        .captures_iter(text)
        .filter_map(|caps| {
            let whole = caps.get(0)?;
            if let Some(tag) = caps.name("tag") {
                // Unknown bracket text on its own line (e.g. "[Tutorial]") is content.
                let section = Section::classify(tag.as_str())?;
                return Some(Marker {
                    section: Some(section),
                    closing: caps.name("close").is_some_and(|c| !c.as_str().is_empty()),
                    label: "",
                    start: whole.start(),
                    end: whole.end(),
                });
            }

            let label = caps.name("bold")?.as_str();
            let section = Section::classify(label);
            // Unknown numbered headers still end the previous section.
            if section.is_none() && caps.name("num").is_none() {
                return None;
            }
            Some(Marker {
                section,
                closing: false,
                label,
                start: whole.start(),
                end: whole.end(),
            })
        })
        .collect()
}

/// Extracts the raw body text of every recognized section.
pub fn extract_sections(text: &str) -> HashMap<Section, String> {
    let markers = find_markers(text);
    let mut sections = HashMap::new();

    for (i, marker) in markers.iter().enumerate() {
        let Some(section) = marker.section else {
            continue;
        };
        if marker.closing {
            continue;
        }

        let body_end = markers.get(i + 1).map_or(text.len(), |next| next.start);
        let body = &text[marker.end..body_end];

        let body = if section == Section::Seo {
            format!("{}\n{}", marker.label, body)
        } else {
            let inline = marker.label.split_once(':').map_or("", |(_, rest)| rest);
            format!("{inline}\n{body}")
        };

        if body.trim().is_empty() {
            continue;
        }
        sections.entry(section).or_insert(body);
    }

    sections
}

/// Parses a model reply into every known category. Never fails.
pub fn parse_response(text: &str) -> ParsedResult {
    let sections = extract_sections(text);
    let list = |section: Section| {
        sections
            .get(&section)
            .map(|body| parse_list(body))
            .unwrap_or_default()
    };

    let seo = match sections.get(&Section::Seo) {
        Some(body) => parse_seo_score(body),
        None if text.to_lowercase().contains("seo score") => parse_seo_score(text),
        None => None,
    };

    ParsedResult {
        titles: list(Section::Titles),
        tags: sections
            .get(&Section::Tags)
            .map(|body| parse_comma_list(body))
            .unwrap_or_default(),
        trending_topics: list(Section::TrendingTopics),
        hooks: list(Section::Hooks),
        hashtags: sections
            .get(&Section::Hashtags)
            .map(|body| parse_hashtags(body))
            .unwrap_or_default(),
        seo,
    }
}

/// Splits a section body into entries.
///
/// Several non-empty lines are split per line with ordinal/bullet markers removed;
/// a single line is split on commas. Lines ending in ':' are labels, not entries,
/// and do not count towards the line total.
pub fn parse_list(body: &str) -> Vec<String> {
    let lines = content_lines(body);
    let raw: Vec<&str> = match lines.as_slice() {
        [single] => single.split(',').collect(),
        many => many.to_vec(),
    };
    clean_entries(raw)
}

/// For comma-formatted sections (tags, hashtags): every line is split on commas,
/// so lists that wrap across lines still yield one entry per item.
pub fn parse_comma_list(body: &str) -> Vec<String> {
    clean_entries(
        content_lines(body)
            .into_iter()
            .flat_map(|line| line.split(','))
            .collect(),
    )
}

/// Like `parse_comma_list`, but also splits space-separated `#tag #tag` runs.
pub fn parse_hashtags(body: &str) -> Vec<String> {
    parse_comma_list(body)
        .into_iter()
        .flat_map(|entry| {
            let words: Vec<&str> = entry.split_whitespace().collect();
            if words.len() > 1 && words.iter().all(|w| w.starts_with('#')) {
                words.into_iter().map(str::to_string).collect()
            } else {
                vec![entry]
            }
        })
        .collect()
}

/// Extracts `Score: N/100 ... Suggestions: ...`. `None` without a score.
pub fn parse_seo_score(text: &str) -> Option<SeoScore> {
    let score: u32 = SEO_SCORE_RE.captures(text)?.get(1)?.as_str().parse().ok()?;

    let suggestions = SEO_SUGGESTIONS_RE
        .captures(text)
        .and_then(|caps| caps.get(1))
        .map(|m| parse_list(m.as_str()).join(", "))
        .unwrap_or_default();

    Some(SeoScore {
        score: score.min(100) as u8,
        suggestions,
    })
}

/// Non-empty lines with ordinals stripped, minus preamble labels ("Here are 12 tags:").
fn content_lines(body: &str) -> Vec<&str> {
    body.lines()
        .map(|l| strip_ordinal(l.trim()))
        .filter(|l| {
            let cleaned = clean_entry(l);
            !cleaned.is_empty() && !cleaned.ends_with(':')
        })
        .collect()
}

fn clean_entries(raw: Vec<&str>) -> Vec<String> {
    raw.into_iter()
        .map(clean_entry)
        .filter(|e| !e.is_empty() && !e.ends_with(':'))
        .collect()
}

fn strip_ordinal(line: &str) -> &str {
    match ORDINAL_RE.find(line) {
        Some(m) => &line[m.end()..],
        None => line,
    }
}

fn clean_entry(raw: &str) -> String {
    raw.replace("**", "")
        .trim()
        .trim_end_matches(',')
        .trim_matches(|c| matches!(c, '"' | '“' | '”'))
        .trim()
        .to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    const BRACKETED_REPLY: &str = r#"[TITLES]
1. Rust in 10 Minutes
2. "Why Rust Is Taking Over"
3. Ownership Explained [Beginner Friendly]
[/TITLES]
[TAGS]
rust, rust tutorial, programming, systems programming
[/TAGS]
[TRENDING_TOPICS]
1. Rust in the Linux kernel
2. Async Rust
[/TRENDING_TOPICS]
[HOOKS]
1. What if your code could never segfault?
2. I rewrote my app in Rust. Here's what happened.
[/HOOKS]
[HASHTAGS]
#rust, #programming, #coding
[/HASHTAGS]
[SEO]
Score: 82/100. Suggestions: add timestamps, use the keyword in the first line
[/SEO]"#;

    const BOLD_REPLY: &str = "Here is your content plan!\n\n\
        **1. Titles:**\n\
        - Mastering LinkedIn in 2025\n\
        - The Personal Brand Playbook\n\n\
        **2. Tags:** personal branding, linkedin growth, career\n\n\
        **3. Trending Topics:**\n\
        * AI at work\n\
        * Remote leadership\n\n\
        **4. Hashtags:**\n\
        #LinkedIn #PersonalBranding #Career\n\n\
        **5. SEO Score:** 74/100\n\
        Suggestions: shorter headline, add a call to action\n";

    #[test]
    fn test_bracketed_reply_extracts_every_section() {
        let parsed = parse_response(BRACKETED_REPLY);
        assert_eq!(
            parsed.titles,
            vec![
                "Rust in 10 Minutes",
                "Why Rust Is Taking Over",
                "Ownership Explained [Beginner Friendly]",
            ]
        );
        assert_eq!(
            parsed.tags,
            vec!["rust", "rust tutorial", "programming", "systems programming"]
        );
        assert_eq!(
            parsed.trending_topics,
            vec!["Rust in the Linux kernel", "Async Rust"]
        );
        assert_eq!(parsed.hooks.len(), 2);
        assert_eq!(parsed.hashtags, vec!["#rust", "#programming", "#coding"]);
        assert_eq!(
            parsed.seo,
            Some(SeoScore {
                score: 82,
                suggestions: "add timestamps, use the keyword in the first line".to_string(),
            })
        );
    }

    #[test]
    fn test_bold_numbered_headers() {
        let parsed = parse_response(BOLD_REPLY);
        assert_eq!(
            parsed.titles,
            vec!["Mastering LinkedIn in 2025", "The Personal Brand Playbook"]
        );
        assert_eq!(
            parsed.tags,
            vec!["personal branding", "linkedin growth", "career"]
        );
        assert_eq!(
            parsed.trending_topics,
            vec!["AI at work", "Remote leadership"]
        );
        assert_eq!(
            parsed.hashtags,
            vec!["#LinkedIn", "#PersonalBranding", "#Career"]
        );
        assert!(parsed.hooks.is_empty(), "hooks section was never present");
        let seo = parsed.seo.expect("seo score present");
        assert_eq!(seo.score, 74);
        assert_eq!(seo.suggestions, "shorter headline, add a call to action");
    }

    #[test]
    fn test_absent_sections_are_empty() {
        let parsed = parse_response("[TAGS]\na, b\n[/TAGS]");
        assert_eq!(parsed.tags, vec!["a", "b"]);
        assert!(parsed.titles.is_empty());
        assert!(parsed.trending_topics.is_empty());
        assert!(parsed.hooks.is_empty());
        assert!(parsed.hashtags.is_empty());
        assert!(parsed.seo.is_none());
    }

    #[test]
    fn test_unclosed_bracket_sections_end_at_next_marker() {
        let parsed = parse_response("[TITLES]\n1. One\n2. Two\n[TAGS]\nx, y");
        assert_eq!(parsed.titles, vec!["One", "Two"]);
        assert_eq!(parsed.tags, vec!["x", "y"]);
    }

    #[test]
    fn test_unknown_numbered_header_ends_previous_section() {
        let text = "**1. Hooks**\n1. Stop scrolling\n2. You won't believe this\n\n\
                    **2. Posting Schedule**\n1. Tuesday 9am\n2. Thursday 5pm";
        let parsed = parse_response(text);
        assert_eq!(parsed.hooks, vec!["Stop scrolling", "You won't believe this"]);
    }

    #[test]
    fn test_first_non_empty_occurrence_wins() {
        let text = "[TAGS]\n[/TAGS]\n[TAGS]\nfirst, real\n[/TAGS]\n[TAGS]\nsecond\n[/TAGS]";
        assert_eq!(parse_response(text).tags, vec!["first", "real"]);
    }

    #[test]
    fn test_malformed_reply_yields_empty_result() {
        for text in [
            "",
            "   \n\t ",
            "I'm sorry, I can't help with that.",
            "[[[]]] ** ** :::",
            "**",
            "[/TITLES]",
        ] {
            let parsed = parse_response(text);
            assert!(parsed.is_empty(), "expected empty result for {text:?}");
        }
    }

    #[test]
    fn test_parse_list_comma_separated() {
        assert_eq!(parse_list("a, b, c"), vec!["a", "b", "c"]);
    }

    #[test]
    fn test_parse_list_numbered() {
        assert_eq!(parse_list("1. a\n2. b"), vec!["a", "b"]);
    }

    #[test]
    fn test_parse_list_drops_empty_entries_and_labels() {
        assert_eq!(parse_list("a,, b , ,"), vec!["a", "b"]);
        assert_eq!(
            parse_list("Here are 3 titles:\n1) One\n\n2) Two\n- Three"),
            vec!["One", "Two", "Three"]
        );
    }

    #[test]
    fn test_parse_list_preamble_before_comma_line() {
        assert_eq!(
            parse_list("Here are 12 tags:\nrust, cargo, crates"),
            vec!["rust", "cargo", "crates"]
        );
        let parsed = parse_response("[TAGS]\nHere are your tags:\nrust, cargo, crates\n[/TAGS]");
        assert_eq!(parsed.tags, vec!["rust", "cargo", "crates"]);
    }

    #[test]
    fn test_parse_list_keeps_commas_inside_titles() {
        assert_eq!(
            parse_list("1. Fast, Safe, Fearless\n2. Rust in 2025"),
            vec!["Fast, Safe, Fearless", "Rust in 2025"]
        );
    }

    #[test]
    fn test_comma_list_wrapped_across_lines() {
        assert_eq!(
            parse_comma_list("rust, tutorial,\nsystems, coding"),
            vec!["rust", "tutorial", "systems", "coding"]
        );
        let parsed = parse_response("[TAGS]\nrust, tutorial,\nsystems, coding\n[/TAGS]");
        assert_eq!(parsed.tags, vec!["rust", "tutorial", "systems", "coding"]);
    }

    #[test]
    fn test_parse_list_strips_stacked_markers() {
        assert_eq!(
            parse_list("- 1. First title\n- 2. Second title"),
            vec!["First title", "Second title"]
        );
    }

    #[test]
    fn test_parse_list_keeps_numbers_that_are_not_ordinals() {
        assert_eq!(
            parse_list("1. 1.5x faster builds\n2. 2024 roadmap"),
            vec!["1.5x faster builds", "2024 roadmap"]
        );
    }

    #[test]
    fn test_parse_list_strips_emphasis_and_quotes() {
        assert_eq!(
            parse_list("1. **\"Bold Title\"**\n2. “Curly”"),
            vec!["Bold Title", "Curly"]
        );
    }

    #[test]
    fn test_parse_hashtags_splits_space_runs() {
        assert_eq!(
            parse_hashtags("#a #b, #c"),
            vec!["#a", "#b", "#c"]
        );
        assert_eq!(parse_hashtags("#one, two words"), vec!["#one", "two words"]);
    }

    #[test]
    fn test_parse_hashtags_wrapped_lines_have_no_stray_commas() {
        assert_eq!(
            parse_hashtags("#rust #programming\n#coding, #dev"),
            vec!["#rust", "#programming", "#coding", "#dev"]
        );
    }

    #[test]
    fn test_inline_brackets_do_not_end_a_section() {
        let parsed = parse_response(
            "[TITLES]\n1. Read the [SEO guide](https://x.y)\n2. My [Tag Guide] for 2025\n[/TITLES]",
        );
        assert_eq!(
            parsed.titles,
            vec!["Read the [SEO guide](https://x.y)", "My [Tag Guide] for 2025"]
        );
        assert!(parsed.tags.is_empty());
        assert!(parsed.seo.is_none());
    }

    #[test]
    fn test_bracket_markers_tolerate_indent_and_crlf() {
        let parsed = parse_response("  [TAGS]  \r\na, b\r\n[/TAGS]\r\n");
        assert_eq!(parsed.tags, vec!["a", "b"]);
    }

    #[test]
    fn test_parse_seo_score_example() {
        assert_eq!(
            parse_seo_score("Score: 82/100. Suggestions: improve X, improve Y"),
            Some(SeoScore {
                score: 82,
                suggestions: "improve X, improve Y".to_string(),
            })
        );
    }

    #[test]
    fn test_parse_seo_score_variants() {
        let s = parse_seo_score("SEO Score (0-100): 91").unwrap();
        assert_eq!(s.score, 91);
        assert_eq!(s.suggestions, "");

        let s = parse_seo_score("score is 65 out of 100\nSuggestions:\n- shorter title\n- add tags")
            .unwrap();
        assert_eq!(s.score, 65);
        assert_eq!(s.suggestions, "shorter title, add tags");
    }

    #[test]
    fn test_parse_seo_score_clamps_and_rejects_missing() {
        assert_eq!(parse_seo_score("Score: 140/100").unwrap().score, 100);
        assert!(parse_seo_score("Suggestions: no number here").is_none());
        assert!(parse_seo_score("").is_none());
    }

    #[test]
    fn test_seo_fallback_without_marker() {
        let parsed = parse_response("Overall SEO score: 55/100\n\nSuggestions: add keywords");
        assert_eq!(parsed.seo.map(|s| s.score), Some(55));
    }

    #[test]
    fn test_section_classify_order() {
        assert_eq!(Section::classify("HASHTAGS"), Some(Section::Hashtags));
        assert_eq!(Section::classify("TRENDING_TOPICS"), Some(Section::TrendingTopics));
        assert_eq!(Section::classify("Trending Tags"), Some(Section::TrendingTopics));
        assert_eq!(Section::classify("SEO Score: 80/100"), Some(Section::Seo));
        assert_eq!(Section::classify("tags"), Some(Section::Tags));
        assert_eq!(Section::classify("Headlines"), Some(Section::Titles));
        assert_eq!(Section::classify("Tutorial"), None);
    }

    #[test]
    fn test_every_marker_classifies_to_its_section() {
        for section in Section::ALL {
            assert_eq!(Section::classify(section.marker()), Some(section));
        }
    }

    #[test]
    fn test_serializes_camel_case_and_omits_missing_seo() {
        let parsed = ParsedResult {
            trending_topics: vec!["x".to_string()],
            ..Default::default()
        };
        let json = serde_json::to_value(&parsed).unwrap();
        assert_eq!(json["trendingTopics"][0], "x");
        assert!(json.get("seo").is_none());
        assert!(json["hooks"].as_array().unwrap().is_empty());
    }

    #[test]
    fn test_concurrent_parses_are_independent() {
        let handles: Vec<_> = (0..8)
            .map(|i| {
                std::thread::spawn(move || {
                    let text = format!("[TAGS]\ntag{i}, shared\n[/TAGS]");
                    (i, parse_response(&text))
                })
            })
            .collect();

        for handle in handles {
            let (i, parsed) = handle.join().unwrap();
            assert_eq!(parsed.tags, vec![format!("tag{i}"), "shared".to_string()]);
        }
    }
}
