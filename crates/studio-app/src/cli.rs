use clap::{Parser, Subcommand};
use uuid::Uuid;

#[derive(Parser)]
#[command(name = "studio", about = "Korean-English translation practice studio", version)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Command,
}

#[derive(Subcommand)]
pub enum Command {
    /// Practice an article sentence by sentence
    Practice {
        /// Article id; omitted picks the recommended article
        #[arg(long)]
        article: Option<u32>,
        /// Interpretation practice instead of written translation
        #[arg(long)]
        interpret: bool,
        /// Start in Korean-to-English direction
        #[arg(long)]
        ko_en: bool,
    },
    /// List articles from the feed
    Articles {
        #[arg(long)]
        category: Option<String>,
        #[arg(long)]
        level: Option<String>,
        /// Sort oldest first instead of newest first
        #[arg(long)]
        oldest: bool,
        /// Only articles generated within the last N days
        #[arg(long, value_name = "DAYS")]
        recent: Option<i64>,
    },
    /// Level, streak, daily progress and heatmap overview
    Stats,
    /// Multiple-choice vocabulary quiz
    Quiz {
        /// Number of questions
        #[arg(long, default_value_t = 10)]
        count: usize,
    },
    /// Vocabulary notebook
    Vocab {
        #[command(subcommand)]
        command: VocabCommand,
    },
    /// Completed session archive
    Archive {
        #[command(subcommand)]
        command: ArchiveCommand,
    },
    /// Spend a ticket on a sticker draw
    Gacha {
        #[command(subcommand)]
        command: GachaCommand,
    },
    /// Write the full state to a backup file
    Export {
        #[arg(long, default_value = "studio_backup.json")]
        out: String,
    },
    /// Replace the full state from a backup file
    Import { file: String },
    /// Delete all persisted state
    Reset {
        #[arg(long)]
        yes: bool,
    },
    /// Save today's study diary text
    Diary { text: String },
    /// Set the exam D-day target
    Dday {
        name: String,
        /// Target date, YYYY-MM-DD
        date: String,
    },
    /// Update profile fields
    Profile {
        #[arg(long)]
        nickname: Option<String>,
        #[arg(long)]
        mascot: Option<String>,
        #[arg(long)]
        theme: Option<String>,
    },
    /// Update settings
    Settings {
        /// Daily practice goal in minutes
        #[arg(long)]
        daily_goal: Option<u32>,
        #[arg(long)]
        tts_speed: Option<f32>,
    },
    /// Pull RSS headlines and expand them into practice articles
    Generate {
        /// Fetch and report without writing the feed document
        #[arg(long)]
        dry_run: bool,
    },
    /// Ask the hosting side to regenerate the article feed
    TriggerUpdate,
}

#[derive(Subcommand)]
pub enum VocabCommand {
    /// List words (today's additions by default)
    List {
        #[arg(long, default_value = "today")]
        tab: String,
    },
    Add {
        english: String,
        korean: String,
        #[arg(long)]
        pos: Option<String>,
        #[arg(long)]
        example: Option<String>,
    },
    /// Toggle the star on a word
    Star { id: Uuid },
    /// Mark a word reviewed today
    Review { id: Uuid },
    /// Toggle mastered on a word
    Master { id: Uuid },
    Delete { id: Uuid },
}

#[derive(Subcommand)]
pub enum ArchiveCommand {
    List,
    Show { id: Uuid },
    Memo { id: Uuid, text: String },
}

#[derive(Subcommand)]
pub enum GachaCommand {
    /// Current ticket balance and sticker collection
    Tickets,
    Draw,
}
