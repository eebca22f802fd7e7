use std::collections::BTreeMap;

use chrono::{DateTime, NaiveDate, Utc};
use serde::{Deserialize, Serialize};
use studio_types::{Direction, SentenceRecord, SessionKind};
use uuid::Uuid;

/// The whole persisted state. This is also the export/import surface: an
/// exported blob is exactly this struct, pretty-printed.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StoreState {
    pub level: LevelState,
    pub streak: StreakState,
    pub daily: DailyProgress,
    pub vocabulary: Vec<VocabularyWord>,
    pub archive: Vec<ArchiveEntry>,
    pub achievements: Vec<String>,
    pub gacha_tickets: u32,
    pub game_best: BTreeMap<String, u32>,
    pub fortune: Option<FortuneState>,
    pub grass: BTreeMap<NaiveDate, u32>,
    pub history: Vec<HistoryEntry>,
    pub stickers: Vec<String>,
    pub profile: Profile,
    pub settings: Settings,
    pub diary: String,
    pub dday: Option<Dday>,
}

/// Experience only ever increases; level is recomputed from it.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct LevelState {
    pub level: u32,
    pub exp: u64,
}

impl Default for LevelState {
    fn default() -> Self {
        Self { level: 1, exp: 0 }
    }
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct StreakState {
    pub count: u32,
    pub best: u32,
    pub last_active_date: Option<NaiveDate>,
}

/// Per-calendar-day task flags. Flags latch true within a day; a date
/// change resets them, decided against the caller-supplied date rather
/// than the wall clock.
#[derive(Debug, Clone, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct DailyProgress {
    pub date: Option<NaiveDate>,
    pub article: bool,
    pub translate: bool,
    pub vocab: bool,
    pub quiz: bool,
    /// Practice minutes accumulated today
    pub time: u32,
}

/// Partial daily update; `true` fields latch, `false` fields are ignored.
#[derive(Debug, Clone, Copy, Default)]
pub struct DailyUpdate {
    pub article: bool,
    pub translate: bool,
    pub vocab: bool,
    pub quiz: bool,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct VocabularyWord {
    pub id: Uuid,
    pub english: String,
    pub korean: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub part_of_speech: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub example: Option<String>,
    #[serde(default)]
    pub starred: bool,
    #[serde(default)]
    pub mastered: bool,
    pub added_at: NaiveDate,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub last_reviewed: Option<NaiveDate>,
}

/// Input for `add_word`; duplicates by text are permitted, identity is the
/// generated id.
#[derive(Debug, Clone, Default)]
pub struct NewWord {
    pub english: String,
    pub korean: String,
    pub part_of_speech: Option<String>,
    pub example: Option<String>,
}

/// Partial vocabulary update; `None` fields are left untouched.
#[derive(Debug, Clone, Default)]
pub struct WordPatch {
    pub starred: Option<bool>,
    pub mastered: Option<bool>,
    pub last_reviewed: Option<NaiveDate>,
}

/// A completed practice session. Append-only; only the memo is mutable.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ArchiveEntry {
    pub id: Uuid,
    pub kind: SessionKind,
    pub article_id: u32,
    pub article_title: String,
    pub total_phrases: usize,
    pub completed_phrases: usize,
    pub average_score: u32,
    pub records: Vec<SentenceRecord>,
    pub direction: Direction,
    pub date: DateTime<Utc>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub memo: Option<String>,
}

/// Article-open log, consulted by the recommendation picker.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct HistoryEntry {
    pub article_id: u32,
    pub date: NaiveDate,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Profile {
    pub nickname: String,
    pub studio_name: String,
    pub mascot: String,
    pub mascot_name: String,
    pub theme: String,
}

impl Default for Profile {
    fn default() -> Self {
        Self {
            nickname: "Translator".to_string(),
            studio_name: "'s Studio".to_string(),
            mascot: "🦜".to_string(),
            mascot_name: "파랑이".to_string(),
            theme: "light".to_string(),
        }
    }
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Settings {
    /// Daily practice goal in minutes
    pub daily_goal: u32,
    pub tts_speed: f32,
}

impl Default for Settings {
    fn default() -> Self {
        Self {
            daily_goal: 60,
            tts_speed: 0.9,
        }
    }
}

/// Which fortune was drawn on which day; a stale date means today's is
/// still undrawn.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct FortuneState {
    pub date: NaiveDate,
    pub index: usize,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Dday {
    pub name: String,
    pub date: NaiveDate,
}
