//! Query-to-recommendation matching over an in-memory catalog snapshot.
//!
//! A query is either a product URL (answered with that single record) or free text,
//! which is scored by keyword overlap with each record's title and description and
//! filtered by an optional "N minutes" limit found in the query.
use std::sync::LazyLock;

use regex::Regex;

use crate::duration::extract_minutes;
use crate::model::{AssessmentRecord, Recommendation};

/// Upper bound on the number of recommendations returned for one query.
pub const MAX_RESULTS: usize = 10;

static WORD: LazyLock<Regex> = LazyLock::new(|| Regex::new(r"\w+").expect("valid regex"));
static DURATION_LIMIT: LazyLock<Regex> =
    LazyLock::new(|| Regex::new(r"([0-9]+)\s*(?:minutes|min)").expect("valid regex"));

/// Trims, lowercases and drops one trailing `/`.
pub fn normalize(text: &str) -> String {
    let lowered = text.trim().to_lowercase();
    match lowered.strip_suffix('/') {
        Some(stripped) => stripped.to_string(),
        None => lowered,
    }
}

/// Splits normalized query text into word tokens, in order, duplicates kept.
pub fn tokenize(normalized: &str) -> Vec<&str> {
    WORD.find_iter(normalized).map(|m| m.as_str()).collect()
}

/// Maximum duration requested by the query, e.g. 30 for "under 30 minutes".
///
/// Only the first "<number> min"/"<number> minutes" occurrence counts.
pub fn duration_constraint(normalized: &str) -> Option<u32> {
    DURATION_LIMIT
        .captures(normalized)
        .and_then(|caps| caps.get(1))
        .and_then(|m| m.as_str().parse().ok())
}

/// Recommends at most [`MAX_RESULTS`] records for `query`.
///
/// The catalog is only read; every returned [`Recommendation`] owns a copy of its record.
pub fn recommend(query: &str, catalog: &[AssessmentRecord]) -> Vec<Recommendation> {
    let query = normalize(query);

    if query.is_empty() {
        return Vec::new();
    }

    if let Some(record) = catalog.iter().find(|r| normalize(&r.link) == query) {
        return vec![Recommendation::direct(
            record,
            extract_minutes(&record.assessment_length),
        )];
    }

    let tokens = tokenize(&query);
    let max_duration = duration_constraint(&query);

    let mut results: Vec<Recommendation> = catalog
        .iter()
        .filter_map(|record| score_record(record, &tokens, max_duration))
        .collect();

    // Vec::sort_by is stable, so equal scores keep catalog order.
    results.sort_by(|a, b| b.score().cmp(&a.score()));
    results.truncate(MAX_RESULTS);
    results
}

fn score_record(
    record: &AssessmentRecord,
    tokens: &[&str],
    max_duration: Option<u32>,
) -> Option<Recommendation> {
    let searchable = format!(
        "{} {}",
        record.title.to_lowercase(),
        record.description.to_lowercase()
    );

    let matched_keywords: Vec<String> = tokens
        .iter()
        .filter(|token| searchable.contains(**token))
        .map(|token| token.to_string())
        .collect();
    let mut score = matched_keywords.len() as u32;

    let duration = extract_minutes(&record.assessment_length);
    if let (Some(limit), Some(minutes)) = (max_duration, duration) {
        if minutes > limit {
            return None;
        }
        score += 1;
    }

    (score > 0).then(|| Recommendation::scored(record, duration, score, matched_keywords))
}
