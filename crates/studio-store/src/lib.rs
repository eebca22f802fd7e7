//! Durable progression state: experience, streak, vocabulary, archive,
//! achievements, gacha tickets and the activity heatmap, persisted as one
//! JSON document. Every mutating call writes the file before returning;
//! this store is the sole source of truth.

use std::fs;
use std::path::{Path, PathBuf};

use chrono::NaiveDate;
use uuid::Uuid;

pub mod achievements;
pub mod daily;
mod error;
pub mod fortune;
pub mod grass;
pub mod level;
pub mod state;
pub mod streak;

pub use error::StoreError;
pub use state::{
    ArchiveEntry, DailyProgress, DailyUpdate, Dday, FortuneState, HistoryEntry, LevelState,
    NewWord, Profile, Settings, StoreState, StreakState, VocabularyWord, WordPatch,
};

use achievements::{ACHIEVEMENTS, Achievement};

/// Result of an experience grant.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ExpGain {
    pub leveled_up: bool,
    pub level: u32,
    pub exp: u64,
}

pub struct StudioStore {
    path: PathBuf,
    state: StoreState,
}

impl StudioStore {
    /// Open the store at `path`, loading existing state if present.
    ///
    /// An unreadable or undecodable file is an error rather than a silent
    /// reset; losing progression data is worse than refusing to start.
    pub fn open(path: impl Into<PathBuf>) -> Result<Self, StoreError> {
        let path = path.into();
        let state = if path.exists() {
            let data = fs::read_to_string(&path)?;
            serde_json::from_str(&data)?
        } else {
            tracing::info!("no state file at {}, starting fresh", path.display());
            StoreState::default()
        };
        Ok(Self { path, state })
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    pub fn state(&self) -> &StoreState {
        &self.state
    }

    fn persist(&self) -> Result<(), StoreError> {
        if let Some(parent) = self.path.parent() {
            fs::create_dir_all(parent)?;
        }
        fs::write(&self.path, serde_json::to_string_pretty(&self.state)?)?;
        Ok(())
    }

    // ----- experience -----

    /// Grant experience. Exp and level are monotonic: a grant never lowers
    /// either, and a zero grant is a persisted no-op.
    pub fn add_exp(&mut self, amount: u64) -> Result<ExpGain, StoreError> {
        let before = self.state.level.level;
        self.state.level.exp += amount;
        let level = level::level_for_exp(self.state.level.exp).max(before);
        self.state.level.level = level;
        self.persist()?;

        let gain = ExpGain {
            leveled_up: level > before,
            level,
            exp: self.state.level.exp,
        };
        if gain.leveled_up {
            tracing::info!(level, "level up");
        }
        Ok(gain)
    }

    pub fn exp_for_next_level(&self) -> u64 {
        level::exp_for_next_level(self.state.level.level)
    }

    pub fn title(&self) -> &'static str {
        level::title_for_level(self.state.level.level)
    }

    // ----- streak / daily / grass -----

    pub fn update_streak(&mut self, today: NaiveDate) -> Result<StreakState, StoreError> {
        if streak::advance(&mut self.state.streak, today) {
            self.persist()?;
        }
        Ok(self.state.streak.clone())
    }

    pub fn update_daily(&mut self, today: NaiveDate, update: DailyUpdate) -> Result<(), StoreError> {
        daily::merge(&mut self.state.daily, today, update);
        self.persist()
    }

    pub fn add_practice_time(&mut self, today: NaiveDate, minutes: u32) -> Result<(), StoreError> {
        daily::add_time(&mut self.state.daily, today, minutes);
        self.persist()
    }

    /// Today's daily record, rolled over if the stored one is stale.
    pub fn daily_progress(&self, today: NaiveDate) -> DailyProgress {
        if self.state.daily.date == Some(today) {
            self.state.daily.clone()
        } else {
            DailyProgress {
                date: Some(today),
                ..DailyProgress::default()
            }
        }
    }

    pub fn record_activity(&mut self, today: NaiveDate, count: u32) -> Result<(), StoreError> {
        *self.state.grass.entry(today).or_insert(0) += count;
        self.persist()
    }

    pub fn grass_level_on(&self, date: NaiveDate) -> u8 {
        grass::grass_level(self.state.grass.get(&date).copied().unwrap_or(0))
    }

    // ----- vocabulary -----

    pub fn add_word(&mut self, word: NewWord, today: NaiveDate) -> Result<Uuid, StoreError> {
        let id = Uuid::new_v4();
        self.state.vocabulary.push(VocabularyWord {
            id,
            english: word.english,
            korean: word.korean,
            part_of_speech: word.part_of_speech,
            example: word.example,
            starred: false,
            mastered: false,
            added_at: today,
            last_reviewed: None,
        });
        self.persist()?;
        Ok(id)
    }

    /// Apply a patch to a word; returns false when the id is unknown.
    pub fn update_word(&mut self, id: Uuid, patch: WordPatch) -> Result<bool, StoreError> {
        let Some(word) = self.state.vocabulary.iter_mut().find(|w| w.id == id) else {
            return Ok(false);
        };
        if let Some(starred) = patch.starred {
            word.starred = starred;
        }
        if let Some(mastered) = patch.mastered {
            word.mastered = mastered;
        }
        if let Some(reviewed) = patch.last_reviewed {
            word.last_reviewed = Some(reviewed);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn delete_word(&mut self, id: Uuid) -> Result<bool, StoreError> {
        let before = self.state.vocabulary.len();
        self.state.vocabulary.retain(|w| w.id != id);
        if self.state.vocabulary.len() == before {
            return Ok(false);
        }
        self.persist()?;
        Ok(true)
    }

    pub fn vocabulary(&self) -> &[VocabularyWord] {
        &self.state.vocabulary
    }

    pub fn today_words(&self, today: NaiveDate) -> Vec<&VocabularyWord> {
        self.state
            .vocabulary
            .iter()
            .filter(|w| w.added_at == today)
            .collect()
    }

    pub fn starred_words(&self) -> Vec<&VocabularyWord> {
        self.state.vocabulary.iter().filter(|w| w.starred).collect()
    }

    /// Words due for spaced review: not mastered, least recently touched
    /// first. Ordering is deterministic: review date (or the add date when
    /// never reviewed), ties broken by id.
    pub fn review_words(&self) -> Vec<&VocabularyWord> {
        let mut due: Vec<&VocabularyWord> = self
            .state
            .vocabulary
            .iter()
            .filter(|w| !w.mastered)
            .collect();
        due.sort_by_key(|w| (w.last_reviewed.unwrap_or(w.added_at), w.id));
        due
    }

    // ----- archive -----

    pub fn add_archive(&mut self, entry: ArchiveEntry) -> Result<(), StoreError> {
        self.state.archive.push(entry);
        self.persist()
    }

    /// Memo is the only mutable field of an archive entry.
    pub fn update_archive_memo(&mut self, id: Uuid, memo: String) -> Result<bool, StoreError> {
        let Some(entry) = self.state.archive.iter_mut().find(|a| a.id == id) else {
            return Ok(false);
        };
        entry.memo = Some(memo);
        self.persist()?;
        Ok(true)
    }

    pub fn archive(&self) -> &[ArchiveEntry] {
        &self.state.archive
    }

    pub fn record_history(&mut self, article_id: u32, today: NaiveDate) -> Result<(), StoreError> {
        self.state.history.push(HistoryEntry {
            article_id,
            date: today,
        });
        self.persist()
    }

    pub fn history(&self) -> &[HistoryEntry] {
        &self.state.history
    }

    // ----- achievements -----

    /// Unlock by id if known and not already unlocked.
    pub fn unlock_achievement(&mut self, id: &str) -> Result<bool, StoreError> {
        if achievements::by_id(id).is_none() || self.state.achievements.iter().any(|a| a == id) {
            return Ok(false);
        }
        self.state.achievements.push(id.to_string());
        self.persist()?;
        tracing::info!(achievement = id, "achievement unlocked");
        Ok(true)
    }

    /// Evaluate every achievement rule against the current state and unlock
    /// the ones that newly pass.
    pub fn check_achievements(&mut self) -> Result<Vec<&'static Achievement>, StoreError> {
        let mut unlocked = Vec::new();
        for achievement in ACHIEVEMENTS {
            if self.state.achievements.iter().any(|a| a == achievement.id) {
                continue;
            }
            if (achievement.rule)(&self.state) {
                self.state.achievements.push(achievement.id.to_string());
                unlocked.push(achievement);
            }
        }
        if !unlocked.is_empty() {
            self.persist()?;
        }
        Ok(unlocked)
    }

    // ----- games / fortune -----

    /// Record a finished game; returns true when `score` beats the stored
    /// best for that game.
    pub fn record_game_score(&mut self, game: &str, score: u32) -> Result<bool, StoreError> {
        let best = self.state.game_best.get(game).copied().unwrap_or(0);
        if score <= best && self.state.game_best.contains_key(game) {
            return Ok(false);
        }
        self.state.game_best.insert(game.to_string(), score.max(best));
        self.persist()?;
        Ok(score > best)
    }

    pub fn game_best(&self, game: &str) -> u32 {
        self.state.game_best.get(game).copied().unwrap_or(0)
    }

    /// Today's fortune, drawing and pinning a new one on a date change.
    /// `roll` only matters on the draw; within a day it is ignored.
    pub fn fortune_of_the_day(
        &mut self,
        today: NaiveDate,
        roll: usize,
    ) -> Result<&'static fortune::Fortune, StoreError> {
        let index = fortune::refresh(self.state.fortune.as_ref(), today, roll);
        let pinned = FortuneState { date: today, index };
        if self.state.fortune != Some(pinned) {
            self.state.fortune = Some(pinned);
            self.persist()?;
        }
        Ok(&fortune::FORTUNES[index])
    }

    // ----- gacha tickets / stickers -----

    pub fn add_gacha_tickets(&mut self, n: u32) -> Result<(), StoreError> {
        self.state.gacha_tickets += n;
        self.persist()
    }

    pub fn gacha_tickets(&self) -> u32 {
        self.state.gacha_tickets
    }

    /// Consume one ticket. Returns false without side effects when the
    /// balance is already zero; the balance can never go negative.
    pub fn take_gacha_ticket(&mut self) -> Result<bool, StoreError> {
        if self.state.gacha_tickets == 0 {
            return Ok(false);
        }
        self.state.gacha_tickets -= 1;
        self.persist()?;
        Ok(true)
    }

    pub fn add_sticker(&mut self, sticker: &str) -> Result<(), StoreError> {
        if !self.state.stickers.iter().any(|s| s == sticker) {
            self.state.stickers.push(sticker.to_string());
        }
        self.persist()
    }

    // ----- profile / settings / diary / d-day -----

    pub fn save_profile(&mut self, profile: Profile) -> Result<(), StoreError> {
        self.state.profile = profile;
        self.persist()
    }

    pub fn save_settings(&mut self, settings: Settings) -> Result<(), StoreError> {
        self.state.settings = settings;
        self.persist()
    }

    pub fn save_diary(&mut self, text: String) -> Result<(), StoreError> {
        self.state.diary = text;
        self.persist()
    }

    pub fn save_dday(&mut self, dday: Dday) -> Result<(), StoreError> {
        self.state.dday = Some(dday);
        self.persist()
    }

    // ----- export / import -----

    /// Serialize the full state for a backup file.
    pub fn export_data(&self) -> Result<String, StoreError> {
        Ok(serde_json::to_string_pretty(&self.state)?)
    }

    /// Validate and replace the whole state from an exported blob.
    ///
    /// The blob must decode as a complete state document before anything is
    /// touched; a malformed import leaves the current state intact.
    pub fn import_data(&mut self, blob: &str) -> Result<(), StoreError> {
        let imported: StoreState = serde_json::from_str(blob)
            .map_err(|e| StoreError::InvalidImport(e.to_string()))?;
        self.state = imported;
        self.persist()
    }

    pub fn reset_all(&mut self) -> Result<(), StoreError> {
        self.state = StoreState::default();
        self.persist()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;
    use studio_types::{Direction, SentenceRecord, SessionKind};

    fn store() -> StudioStore {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("state.json");
        // Leak the tempdir so the path stays writable for the test body.
        std::mem::forget(dir);
        StudioStore::open(path).unwrap()
    }

    fn day(s: &str) -> NaiveDate {
        s.parse().unwrap()
    }

    #[test]
    fn add_exp_is_monotonic_and_levels_up() {
        let mut s = store();
        let before = s.state().level.clone();
        let gain = s.add_exp(0).unwrap();
        assert!(!gain.leveled_up);
        assert_eq!(gain.exp, before.exp);

        let gain = s.add_exp(150).unwrap();
        assert!(gain.leveled_up);
        assert_eq!(gain.level, 2);
        assert!(gain.exp >= before.exp);
    }

    #[test]
    fn zero_ticket_draw_cannot_go_negative() {
        let mut s = store();
        assert_eq!(s.gacha_tickets(), 0);
        assert!(!s.take_gacha_ticket().unwrap());
        assert_eq!(s.gacha_tickets(), 0);

        s.add_gacha_tickets(2).unwrap();
        assert!(s.take_gacha_ticket().unwrap());
        assert_eq!(s.gacha_tickets(), 1);
    }

    #[test]
    fn review_words_are_deterministic_and_skip_mastered() {
        let mut s = store();
        let a = s
            .add_word(
                NewWord {
                    english: "tariff".into(),
                    korean: "관세".into(),
                    ..Default::default()
                },
                day("2026-08-01"),
            )
            .unwrap();
        let b = s
            .add_word(
                NewWord {
                    english: "summit".into(),
                    korean: "정상회담".into(),
                    ..Default::default()
                },
                day("2026-08-05"),
            )
            .unwrap();
        s.update_word(
            b,
            WordPatch {
                mastered: Some(true),
                ..Default::default()
            },
        )
        .unwrap();

        let first: Vec<Uuid> = s.review_words().iter().map(|w| w.id).collect();
        let second: Vec<Uuid> = s.review_words().iter().map(|w| w.id).collect();
        assert_eq!(first, second);
        assert_eq!(first, vec![a]);
    }

    #[test]
    fn import_export_round_trip_reproduces_state() {
        let mut s = store();
        s.add_exp(420).unwrap();
        s.update_streak(day("2026-08-30")).unwrap();
        s.add_gacha_tickets(3).unwrap();
        s.add_word(
            NewWord {
                english: "monetary policy".into(),
                korean: "통화 정책".into(),
                ..Default::default()
            },
            day("2026-08-30"),
        )
        .unwrap();
        s.add_archive(ArchiveEntry {
            id: Uuid::new_v4(),
            kind: SessionKind::Translation,
            article_id: 1,
            article_title: "Test".into(),
            total_phrases: 2,
            completed_phrases: 1,
            average_score: 85,
            records: vec![SentenceRecord::skipped("A cat sat.")],
            direction: Direction::EnKo,
            date: Utc::now(),
            memo: None,
        })
        .unwrap();

        let blob = s.export_data().unwrap();
        let mut other = store();
        other.import_data(&blob).unwrap();
        assert_eq!(other.export_data().unwrap(), blob);
    }

    #[test]
    fn malformed_import_leaves_state_untouched() {
        let mut s = store();
        s.add_exp(100).unwrap();
        let before = s.export_data().unwrap();

        assert!(s.import_data("{ not json").is_err());
        assert!(s.import_data("[1, 2, 3]").is_err());
        assert_eq!(s.export_data().unwrap(), before);
    }

    #[test]
    fn achievements_are_append_only() {
        let mut s = store();
        s.record_history(1, day("2026-08-30")).unwrap();
        let unlocked = s.check_achievements().unwrap();
        assert!(unlocked.iter().any(|a| a.id == "first_article"));

        // A second pass never unlocks the same id again.
        let again = s.check_achievements().unwrap();
        assert!(again.is_empty());
        assert!(!s.unlock_achievement("first_article").unwrap());
    }

    #[test]
    fn game_best_only_moves_upward() {
        let mut s = store();
        assert_eq!(s.game_best("quiz"), 0);
        assert!(s.record_game_score("quiz", 70).unwrap());
        assert!(!s.record_game_score("quiz", 40).unwrap());
        assert!(s.record_game_score("quiz", 90).unwrap());
        assert_eq!(s.game_best("quiz"), 90);
        // A first score of zero still registers the game.
        assert!(!s.record_game_score("typing", 0).unwrap());
        assert_eq!(s.game_best("typing"), 0);
    }

    #[test]
    fn fortune_is_pinned_within_a_day_and_redrawn_after() {
        let mut s = store();
        let today = day("2026-08-30");
        let first = s.fortune_of_the_day(today, 5).unwrap().text;
        // The roll is ignored once today's fortune is pinned.
        assert_eq!(s.fortune_of_the_day(today, 777).unwrap().text, first);

        let redrawn = s.fortune_of_the_day(day("2026-08-31"), 6).unwrap().text;
        assert_eq!(redrawn, fortune::FORTUNES[6 % fortune::FORTUNES.len()].text);
    }

    #[test]
    fn practice_time_accumulates_within_the_day() {
        let mut s = store();
        let today = day("2026-08-30");
        s.add_practice_time(today, 12).unwrap();
        s.add_practice_time(today, 5).unwrap();
        assert_eq!(s.daily_progress(today).time, 17);
        // A new day starts the counter over.
        assert_eq!(s.daily_progress(day("2026-08-31")).time, 0);
    }

    #[test]
    fn state_survives_reopen() {
        let mut s = store();
        s.add_exp(250).unwrap();
        let path = s.path().to_path_buf();
        drop(s);

        let reopened = StudioStore::open(path).unwrap();
        assert_eq!(reopened.state().level.exp, 250);
        assert_eq!(reopened.state().level.level, 2);
    }
}
