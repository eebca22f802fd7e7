use clap::Parser;
use studio_config::Config;
use tracing_subscriber::EnvFilter;

pub mod cli;
pub mod commands;
pub mod controller;
pub mod events;
pub mod generator;
pub mod io;

#[cfg(test)]
mod tests;

use cli::{Cli, Command};

#[tokio::main]
async fn main() -> anyhow::Result<()> {
    dotenvy::dotenv().ok();
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .with_writer(std::io::stderr)
        .init();

    let cli = Cli::parse();
    let config = Config::new();

    match cli.command {
        Command::Practice {
            article,
            interpret,
            ko_en,
        } => commands::practice::run(&config, article, interpret, ko_en).await,
        Command::Articles {
            category,
            level,
            oldest,
            recent,
        } => commands::articles::run(&config, category, level, oldest, recent).await,
        Command::Stats => commands::stats::run(&config),
        Command::Quiz { count } => commands::quiz::run(&config, count),
        Command::Vocab { command } => commands::vocab::run(&config, command),
        Command::Archive { command } => commands::archive::run(&config, command),
        Command::Gacha { command } => commands::gacha::run(&config, command),
        Command::Export { out } => commands::data::export(&config, &out),
        Command::Import { file } => commands::data::import(&config, &file),
        Command::Reset { yes } => commands::data::reset(&config, yes),
        Command::Diary { text } => commands::data::diary(&config, text),
        Command::Dday { name, date } => commands::data::dday(&config, name, &date),
        Command::Profile {
            nickname,
            mascot,
            theme,
        } => commands::data::profile(&config, nickname, mascot, theme),
        Command::Settings {
            daily_goal,
            tts_speed,
        } => commands::data::settings(&config, daily_goal, tts_speed),
        Command::Generate { dry_run } => generator::run(&config, dry_run).await,
        Command::TriggerUpdate => commands::data::trigger_update(&config).await,
    }
}
