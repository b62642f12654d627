use std::collections::BTreeSet;

use serde::{Deserialize, Serialize};

use super::domain::{Resume, Vacancy};

/// Candidates below this overlap ratio are not worth surfacing by default.
pub const DEFAULT_MIN_SCORE: f64 = 0.25;

/// Threshold configuration for the match engine.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MatchConfig {
    /// Minimum overlap ratio a candidate must reach; the boundary itself is
    /// retained.
    pub min_score: f64,
}

impl Default for MatchConfig {
    fn default() -> Self {
        Self {
            min_score: DEFAULT_MIN_SCORE,
        }
    }
}

/// Normalize a raw qualification string into its canonical tag set: split on
/// commas, trim whitespace, lower-case, drop empty segments. Duplicate tags
/// collapse under set semantics.
pub fn qualification_tags(raw: &str) -> BTreeSet<String> {
    raw.split(',')
        .map(|segment| segment.trim().to_lowercase())
        .filter(|tag| !tag.is_empty())
        .collect()
}

/// Directional overlap ratio between two qualification strings. The reference
/// side is the denominator: the result is the fraction of reference tags also
/// present in the target, in `[0.0, 1.0]`. A reference with no tags scores
/// `0.0`, even against an identical target.
pub fn overlap_score(reference: &str, target: &str) -> f64 {
    ratio_against(&qualification_tags(reference), target)
}

fn ratio_against(reference: &BTreeSet<String>, target: &str) -> f64 {
    if reference.is_empty() {
        return 0.0;
    }

    let target = qualification_tags(target);
    let overlap = reference.intersection(&target).count();
    overlap as f64 / reference.len() as f64
}

/// A candidate retained by the engine, paired with its score.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RankedMatch<T> {
    pub record: T,
    pub score: f64,
}

/// Stateless engine ranking a candidate list against one anchor record.
#[derive(Debug, Clone, Default)]
pub struct MatchEngine {
    config: MatchConfig,
}

impl MatchEngine {
    pub fn new(config: MatchConfig) -> Self {
        Self { config }
    }

    pub fn min_score(&self) -> f64 {
        self.config.min_score
    }

    /// Rank vacancies for a resume. Each vacancy is scored by the fraction of
    /// the resume's tags it covers.
    pub fn matches_for_resume(
        &self,
        resume: &Resume,
        vacancies: &[Vacancy],
    ) -> Vec<RankedMatch<Vacancy>> {
        self.rank(&resume.qualifications, vacancies, |vacancy| {
            vacancy.qualifications.as_str()
        })
    }

    /// Rank resumes for a vacancy. Each resume is scored by the fraction of
    /// the vacancy's required tags it covers.
    pub fn matches_for_vacancy(
        &self,
        vacancy: &Vacancy,
        resumes: &[Resume],
    ) -> Vec<RankedMatch<Resume>> {
        self.rank(&vacancy.qualifications, resumes, |resume| {
            resume.qualifications.as_str()
        })
    }

    // The anchor's tags are the denominator in both directions. The sort is
    // stable, so equal scores keep candidate input order.
    fn rank<T, F>(&self, anchor: &str, candidates: &[T], qualifications: F) -> Vec<RankedMatch<T>>
    where
        T: Clone,
        F: Fn(&T) -> &str,
    {
        let anchor_tags = qualification_tags(anchor);

        let mut ranked: Vec<RankedMatch<T>> = candidates
            .iter()
            .filter_map(|candidate| {
                let score = ratio_against(&anchor_tags, qualifications(candidate));
                (score >= self.config.min_score).then(|| RankedMatch {
                    record: candidate.clone(),
                    score,
                })
            })
            .collect();

        ranked.sort_by(|a, b| b.score.total_cmp(&a.score));
        ranked
    }
}
