//! Display model for an analysis result.
//!
//! `Report` is a pure function of an [`AnalysisResult`]: every rendering
//! decision (badge or no badge, list or empty-state message) is made here so
//! the Leptos view and the terminal renderer stay in lockstep.

#[cfg(test)]
#[path = "report_test.rs"]
mod report_test;

use crate::model::AnalysisResult;

pub const EMPTY_STRENGTHS: &str = "No strengths were highlighted.";
pub const EMPTY_WEAKNESSES: &str = "No weaknesses were flagged.";
pub const EMPTY_KEYWORDS: &str = "No missing keywords detected.";
pub const EMPTY_SUGGESTIONS: &str = "No suggestions provided.";

/// Coarse score band used to pick badge styling.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ScoreTier {
    High,
    Medium,
    Low,
}

impl ScoreTier {
    #[must_use]
    pub fn from_score(score: u8) -> Self {
        match score {
            75..=u8::MAX => Self::High,
            50..=74 => Self::Medium,
            _ => Self::Low,
        }
    }

    /// Lowercase name, used as a CSS modifier.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::High => "high",
            Self::Medium => "medium",
            Self::Low => "low",
        }
    }
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub struct ScoreBadge {
    pub value: u8,
    pub tier: ScoreTier,
}

impl ScoreBadge {
    #[must_use]
    pub fn new(value: u8) -> Self {
        Self { value, tier: ScoreTier::from_score(value) }
    }

    #[must_use]
    pub fn label(&self) -> String {
        format!("{}/100", self.value)
    }
}

/// Body of a list section: the items, or the message shown in their place.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Section {
    Items(Vec<String>),
    Empty(&'static str),
}

impl Section {
    fn from_items(items: &[String], empty: &'static str) -> Self {
        if items.is_empty() { Self::Empty(empty) } else { Self::Items(items.to_vec()) }
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct SectionView {
    pub title: &'static str,
    pub body: Section,
}

/// Everything the results panel shows, in display order.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Report {
    pub target_role: Option<String>,
    pub uploaded_at: Option<String>,
    pub blob_url: Option<String>,
    pub score: Option<ScoreBadge>,
    pub summary: Option<String>,
    pub strengths: SectionView,
    pub weaknesses: SectionView,
    /// Rendered as chips rather than a bulleted list.
    pub missing_keywords: SectionView,
    pub suggestions: SectionView,
    pub raw: Option<String>,
}

impl Report {
    #[must_use]
    pub fn from_result(result: &AnalysisResult) -> Self {
        let analysis = &result.analysis;
        Self {
            target_role: result.target_role.clone(),
            uploaded_at: result.uploaded_at.clone(),
            blob_url: result.blob_url.clone(),
            score: analysis.score().map(ScoreBadge::new),
            summary: analysis.summary.clone(),
            strengths: SectionView {
                title: "Strengths",
                body: Section::from_items(&analysis.strengths, EMPTY_STRENGTHS),
            },
            weaknesses: SectionView {
                title: "Weaknesses",
                body: Section::from_items(&analysis.weaknesses, EMPTY_WEAKNESSES),
            },
            missing_keywords: SectionView {
                title: "Missing Keywords",
                body: Section::from_items(&analysis.missing_keywords, EMPTY_KEYWORDS),
            },
            suggestions: SectionView {
                title: "Improvement Suggestions",
                body: Section::from_items(&analysis.improvement_suggestions, EMPTY_SUGGESTIONS),
            },
            raw: analysis.raw.clone(),
        }
    }

    /// The bulleted list sections, in display order.
    #[must_use]
    pub fn list_sections(&self) -> [&SectionView; 3] {
        [&self.strengths, &self.weaknesses, &self.suggestions]
    }
}
