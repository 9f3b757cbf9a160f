//! Presentation ordering for experiences after a job description has been analyzed.
//!
//! Matched records come first, in store order, tagged `[MATCH]`. Every other
//! stored record follows. A record from `find_all` is skipped when its
//! (title, company, responsibilities) triple equals a matched record's, so two
//! distinct records with identical text collapse into the matched one.

use std::collections::HashSet;

use serde::Serialize;

use crate::experiences::models::ExperienceRecord;

/// How many characters of the responsibilities the list label shows.
const LABEL_PREVIEW_CHARS: usize = 50;

/// One row of the experience selection list.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedExperience {
    pub matched: bool,
    pub label: String,
    #[serde(flatten)]
    pub record: ExperienceRecord,
}

impl RankedExperience {
    fn new(record: ExperienceRecord, matched: bool) -> Self {
        Self {
            label: selection_label(&record, matched),
            matched,
            record,
        }
    }
}

/// Orders `matched` ahead of the unmatched remainder of `all`.
pub fn rank_experiences(
    matched: Vec<ExperienceRecord>,
    all: Vec<ExperienceRecord>,
) -> Vec<RankedExperience> {
    let rest: Vec<ExperienceRecord> = {
        let matched_keys: HashSet<(&str, &str, &str)> =
            matched.iter().map(ExperienceRecord::content_key).collect();
        all.into_iter()
            .filter(|r| !matched_keys.contains(&r.content_key()))
            .collect()
    };

    matched
        .into_iter()
        .map(|r| RankedExperience::new(r, true))
        .chain(rest.into_iter().map(|r| RankedExperience::new(r, false)))
        .collect()
}

/// `"{title} at {company}: {first 50 chars}..."`, prefixed `[MATCH] ` when matched.
pub fn selection_label(record: &ExperienceRecord, matched: bool) -> String {
    let preview: String = record
        .responsibilities
        .chars()
        .take(LABEL_PREVIEW_CHARS)
        .collect();
    let prefix = if matched { "[MATCH] " } else { "" };
    format!(
        "{prefix}{} at {}: {preview}...",
        record.job_title, record.company
    )
}
