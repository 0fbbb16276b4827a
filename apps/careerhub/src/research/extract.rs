//! Field extraction: pulls key points, statistics and pay figures out of free-text
//! search answers with regexes, then merges them across sub-queries.

use std::collections::HashSet;
use std::sync::LazyLock;

use regex::Regex;
use serde::{Deserialize, Serialize};

use crate::research::fanout::QueryResult;

const MAX_KEY_POINTS: usize = 12;
const MAX_STATISTICS: usize = 8;
const MAX_PAY_FIGURES: usize = 8;

static BULLET_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?m)^[ \t]*(?:[-*•]|\d{1,2}[.)])[ \t]+(.+?)[ \t\r]*$").unwrap());

static CITATION_MARKER_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"\s*\[\d+\](?:\[\d+\])*").unwrap());

static EMPHASIS_RE: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\*\*|__").unwrap());

static PERCENT_RE: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"(?i)\d+(?:\.\d+)?\s?(?:%|percent\b)").unwrap());

static PAY_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(
        r"(?i)\$\s?\d[\d,]*(?:\.\d{1,2})?k?(?:\s*(?:-|–|to)\s*\$?\s?\d[\d,]*(?:\.\d{1,2})?k?)?(?:\s*(?:per|an|a|/)\s*(?:hour|hr|year|yr|week|month)\b)?",
    )
    .unwrap()
});

/// Fields extracted from every successful sub-query of one research request.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct ResearchInsights {
    pub key_points: Vec<String>,
    pub statistics: Vec<String>,
    pub pay_figures: Vec<String>,
    pub citations: Vec<String>,
    pub successful_queries: usize,
    pub failed_queries: usize,
}

/// Removes `[1]`-style citation markers and bold markup, collapsing whitespace.
pub fn clean_text(text: &str) -> String {
    let text = CITATION_MARKER_RE.replace_all(text, "");
    let text = EMPHASIS_RE.replace_all(&text, "");
    text.split_whitespace().collect::<Vec<_>>().join(" ")
}

/// Bullet and numbered list items, cleaned.
pub fn extract_key_points(text: &str) -> Vec<String> {
    BULLET_RE
        .captures_iter(text)
        .filter_map(|c| c.get(1))
        .map(|m| clean_text(m.as_str()))
        .filter(|s| !s.is_empty())
        .collect()
}

/// Lines that cite a percentage.
pub fn extract_statistics(text: &str) -> Vec<String> {
    text.lines()
        .filter(|line| PERCENT_RE.is_match(line))
        .map(|line| {
            let line = line.trim_start();
            let line = BULLET_RE
                .captures(line)
                .and_then(|c| c.get(1))
                .map_or(line, |m| m.as_str());
            clean_text(line)
        })
        .filter(|s| !s.is_empty())
        .collect()
}

/// Dollar amounts and ranges, with their period when one is given.
pub fn extract_pay_figures(text: &str) -> Vec<String> {
    PAY_RE
        .find_iter(text)
        .map(|m| m.as_str().trim().to_string())
        .collect()
}

/// Merges extracted fields across results. Failed results only count towards
/// `failed_queries`.
pub fn aggregate(results: &[QueryResult]) -> ResearchInsights {
    let mut insights = ResearchInsights::default();
    let mut points = Dedup::new(MAX_KEY_POINTS);
    let mut stats = Dedup::new(MAX_STATISTICS);
    let mut pay = Dedup::new(MAX_PAY_FIGURES);
    let mut citations = Dedup::new(usize::MAX);

    for result in results {
        let Some(answer) = result.answer.as_deref() else {
            insights.failed_queries += 1;
            continue;
        };
        insights.successful_queries += 1;

        points.extend(extract_key_points(answer));
        stats.extend(extract_statistics(answer));
        pay.extend(extract_pay_figures(answer));
        citations.extend(result.citations.iter().cloned());
    }

    insights.key_points = points.into_inner();
    insights.statistics = stats.into_inner();
    insights.pay_figures = pay.into_inner();
    insights.citations = citations.into_inner();
    insights
}

/// First-seen order, case-insensitive, capped.
struct Dedup {
    seen: HashSet<String>,
    items: Vec<String>,
    cap: usize,
}

impl Dedup {
    fn new(cap: usize) -> Self {
        Self {
            seen: HashSet::new(),
            items: Vec::new(),
            cap,
        }
    }

    fn extend(&mut self, values: impl IntoIterator<Item = String>) {
        for value in values {
            if self.items.len() >= self.cap {
                return;
            }
            if self.seen.insert(value.to_lowercase()) {
                self.items.push(value);
            }
        }
    }

    fn into_inner(self) -> Vec<String> {
        self.items
    }
}
