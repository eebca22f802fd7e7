pub mod types;

pub use types::{
    AppEvent, Article, Category, Direction, KeyTerm, LevelInfo, ScoredFeedback, SentenceRecord,
    SessionKind,
};
