pub mod preprocess;
pub mod segment;
pub mod session;

pub use segment::{SentencePair, pair_sentences, split_sentences};
pub use session::{
    PracticeSession, Progress, SessionState, SessionSummary, SubmitError, SubmitOutcome,
};
