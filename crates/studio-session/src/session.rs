use std::time::Instant;

use chrono::{DateTime, NaiveDate, Utc};
use studio_feedback::{FeedbackClient, FeedbackMode, FeedbackRequest};
use studio_store::{ArchiveEntry, StoreError, StudioStore};
use studio_types::{Article, Direction, ScoredFeedback, SentenceRecord, SessionKind};
use uuid::Uuid;

use crate::preprocess::normalize_attempt;
use crate::segment::{SentencePair, pair_sentences};

/// Observable phase of a practice session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SessionState {
    Empty,
    InProgress { index: usize },
    Complete,
}

/// Result of a submit or skip.
#[derive(Debug)]
pub enum Progress {
    Advanced,
    Finished(SessionSummary),
}

#[derive(Debug, thiserror::Error, PartialEq, Eq)]
pub enum SubmitError {
    /// Reported to the caller without a state transition.
    #[error("attempt is empty")]
    EmptyInput,
    #[error("no sentence in progress")]
    NotInProgress,
}

/// What a submit produced: the scored feedback plus where the session went.
#[derive(Debug)]
pub struct SubmitOutcome {
    pub feedback: ScoredFeedback,
    pub model: String,
    pub progress: Progress,
}

/// One article walked through sentence by sentence.
///
/// The session itself is ephemeral; nothing is persisted until completion,
/// when [`SessionSummary::commit`] converts it into an archive entry.
pub struct PracticeSession {
    article: Article,
    kind: SessionKind,
    direction: Direction,
    pairs: Vec<SentencePair>,
    index: usize,
    records: Vec<SentenceRecord>,
    started: Instant,
}

impl PracticeSession {
    /// Segment the article and start at the first sentence. An article with
    /// no content yields no session, which callers treat as staying Empty.
    pub fn start(article: Article, kind: SessionKind, direction: Direction) -> Option<Self> {
        let pairs = pair_sentences(&article.content, article.korean_content.as_deref());
        if pairs.is_empty() {
            tracing::warn!(article = article.id, "article has no content, not starting");
            return None;
        }
        tracing::debug!(article = article.id, sentences = pairs.len(), "session started");
        Some(Self {
            article,
            kind,
            direction,
            pairs,
            index: 0,
            records: Vec::new(),
            started: Instant::now(),
        })
    }

    pub fn state(&self) -> SessionState {
        if self.index >= self.pairs.len() {
            SessionState::Complete
        } else {
            SessionState::InProgress { index: self.index }
        }
    }

    pub fn article(&self) -> &Article {
        &self.article
    }

    pub fn kind(&self) -> SessionKind {
        self.kind
    }

    pub fn direction(&self) -> Direction {
        self.direction
    }

    /// Flip source and target for the current and subsequent sentences.
    /// Never re-segments and never resets progress.
    pub fn flip_direction(&mut self) {
        self.direction = self.direction.flipped();
    }

    pub fn total(&self) -> usize {
        self.pairs.len()
    }

    /// 1-based position for display.
    pub fn position(&self) -> usize {
        (self.index + 1).min(self.pairs.len())
    }

    /// The sentence currently shown as source text. In ko->en mode a pair
    /// with no Korean side falls back to the English side.
    pub fn current_source(&self) -> Option<&str> {
        let pair = self.pairs.get(self.index)?;
        Some(match self.direction {
            Direction::EnKo => &pair.en,
            Direction::KoEn if pair.ko.is_empty() => &pair.en,
            Direction::KoEn => &pair.ko,
        })
    }

    /// Score one attempt and advance. Blank input (after NFKC
    /// normalization) is rejected without advancing.
    pub async fn submit(
        &mut self,
        attempt: &str,
        client: &FeedbackClient,
        mode: FeedbackMode,
    ) -> Result<SubmitOutcome, SubmitError> {
        let attempt = normalize_attempt(attempt);
        if attempt.is_empty() {
            return Err(SubmitError::EmptyInput);
        }
        let original = self.current_source().ok_or(SubmitError::NotInProgress)?.to_string();

        let request = FeedbackRequest {
            original: original.clone(),
            attempt: attempt.clone(),
            direction: self.direction,
            kind: self.kind,
        };
        let feedback = client.get_feedback(&request, mode).await;
        let model = client.model_name(mode).to_string();

        self.records.push(SentenceRecord {
            original,
            user_translation: attempt,
            score: feedback.score,
            skipped: false,
            model: Some(model.clone()),
            feedback: Some(feedback.clone()),
        });
        let progress = self.advance();

        Ok(SubmitOutcome {
            feedback,
            model,
            progress,
        })
    }

    /// Record a zero-score skipped entry and advance.
    pub fn skip(&mut self) -> Result<Progress, SubmitError> {
        let original = self.current_source().ok_or(SubmitError::NotInProgress)?.to_string();
        self.records.push(SentenceRecord::skipped(original));
        Ok(self.advance())
    }

    fn advance(&mut self) -> Progress {
        self.index += 1;
        if self.index < self.pairs.len() {
            Progress::Advanced
        } else {
            Progress::Finished(self.summarize())
        }
    }

    fn summarize(&self) -> SessionSummary {
        let scored: Vec<u32> = self
            .records
            .iter()
            .filter(|r| !r.skipped)
            .map(|r| r.score)
            .collect();
        // Average over non-skipped entries only; all-skipped sessions score 0.
        let average_score = if scored.is_empty() {
            0
        } else {
            (scored.iter().sum::<u32>() as f64 / scored.len() as f64).round() as u32
        };

        SessionSummary {
            kind: self.kind,
            direction: self.direction,
            article_id: self.article.id,
            article_title: self.article.title.clone(),
            total_phrases: self.pairs.len(),
            completed_phrases: scored.len(),
            average_score,
            records: self.records.clone(),
            // A finished session always counts at least one minute.
            minutes: (self.started.elapsed().as_secs() / 60).max(1) as u32,
        }
    }
}

/// A completed session, ready to be committed to the store.
#[derive(Debug, Clone)]
pub struct SessionSummary {
    pub kind: SessionKind,
    pub direction: Direction,
    pub article_id: u32,
    pub article_title: String,
    pub total_phrases: usize,
    pub completed_phrases: usize,
    pub average_score: u32,
    pub records: Vec<SentenceRecord>,
    /// Wall-clock practice duration, rounded down but never below one.
    pub minutes: u32,
}

impl SessionSummary {
    /// Persist the archive entry, grant the completion ticket, and book the
    /// practice minutes against `today`.
    pub fn commit(
        self,
        store: &mut StudioStore,
        now: DateTime<Utc>,
        today: NaiveDate,
    ) -> Result<ArchiveEntry, StoreError> {
        let entry = ArchiveEntry {
            id: Uuid::new_v4(),
            kind: self.kind,
            article_id: self.article_id,
            article_title: self.article_title,
            total_phrases: self.total_phrases,
            completed_phrases: self.completed_phrases,
            average_score: self.average_score,
            records: self.records,
            direction: self.direction,
            date: now,
            memo: None,
        };
        store.add_archive(entry.clone())?;
        store.add_gacha_tickets(1)?;
        store.add_practice_time(today, self.minutes)?;
        Ok(entry)
    }
}
