use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Translation direction for a practice session.
///
/// Source/target sides of each sentence pair are derived from this; flipping
/// it mid-session never re-segments the article.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Direction {
    #[serde(rename = "en-ko")]
    EnKo,
    #[serde(rename = "ko-en")]
    KoEn,
}

impl Direction {
    pub fn flipped(self) -> Self {
        match self {
            Direction::EnKo => Direction::KoEn,
            Direction::KoEn => Direction::EnKo,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            Direction::EnKo => "EN -> KO",
            Direction::KoEn => "KO -> EN",
        }
    }
}

impl Default for Direction {
    fn default() -> Self {
        Direction::EnKo
    }
}

/// Written translation vs. spoken interpretation practice.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SessionKind {
    Translation,
    Interpretation,
}

/// Glossary pair attached to an article, addable to the vocabulary store.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct KeyTerm {
    pub en: String,
    pub ko: String,
}

/// A practice article from the feed document. Immutable once loaded.
///
/// Ids up to 16 are reserved for curated articles; ids above 100 are
/// auto-generated by the batch generator.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Article {
    pub id: u32,
    pub title: String,
    #[serde(default)]
    pub summary: String,
    #[serde(default)]
    pub content: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub korean_content: Option<String>,
    pub category: String,
    pub level: String,
    #[serde(default)]
    pub source: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub link: Option<String>,
    #[serde(default)]
    pub key_terms: Vec<KeyTerm>,
    #[serde(default)]
    pub word_count: u32,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

impl Article {
    pub const CURATED_MAX_ID: u32 = 16;
    pub const GENERATED_MIN_ID: u32 = 101;

    pub fn is_curated(&self) -> bool {
        self.id <= Self::CURATED_MAX_ID
    }

    pub fn is_generated(&self) -> bool {
        self.id >= Self::GENERATED_MIN_ID
    }
}

/// Article category metadata from the feed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

/// Difficulty level metadata from the feed document.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct LevelInfo {
    pub id: String,
    pub name: String,
    #[serde(default)]
    pub icon: String,
    #[serde(default)]
    pub description: String,
}

/// Scored feedback for one sentence attempt.
///
/// Always well-formed: a failed upstream call degrades to a zero-score
/// placeholder instead of an error. `missed_points` is only populated for
/// interpretation sessions, `improvements` for translation sessions.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ScoredFeedback {
    pub score: u32,
    pub feedback: String,
    pub good_points: Vec<String>,
    pub improvements: Vec<String>,
    pub missed_points: Vec<String>,
    pub model_answer: String,
}

/// One sentence's outcome within a session, persisted in the archive.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SentenceRecord {
    pub original: String,
    pub user_translation: String,
    pub score: u32,
    #[serde(default)]
    pub skipped: bool,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub feedback: Option<ScoredFeedback>,
}

impl SentenceRecord {
    pub fn skipped(original: impl Into<String>) -> Self {
        Self {
            original: original.into(),
            user_translation: String::new(),
            score: 0,
            skipped: true,
            model: None,
            feedback: None,
        }
    }
}

/// Events flowing from the input reader to the practice event loop.
#[derive(Debug, Clone)]
pub enum AppEvent {
    SubmitAttempt { text: String, premium: bool },
    SkipSentence,
    FlipDirection,
    ShowSentence,
    ShowTerms,
    AddTerm(usize),
    Quit,
}
