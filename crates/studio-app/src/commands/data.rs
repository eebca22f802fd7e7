use std::fs;

use anyhow::Context;
use chrono::NaiveDate;
use studio_config::Config;
use studio_store::Dday;

use super::open_store;

pub fn export(config: &Config, out: &str) -> anyhow::Result<()> {
    let store = open_store(config)?;
    let blob = store.export_data()?;
    fs::write(out, blob).with_context(|| format!("failed to write backup to {out}"))?;
    println!("백업 저장됨: {out}");
    Ok(())
}

pub fn import(config: &Config, file: &str) -> anyhow::Result<()> {
    let blob = fs::read_to_string(file).with_context(|| format!("failed to read {file}"))?;
    let mut store = open_store(config)?;
    store.import_data(&blob)?;
    println!("백업에서 복원됨: {file}");
    Ok(())
}

pub fn reset(config: &Config, yes: bool) -> anyhow::Result<()> {
    if !yes {
        println!("모든 진행 데이터가 삭제됩니다. 계속하려면 --yes 를 붙여 다시 실행하세요.");
        return Ok(());
    }
    let mut store = open_store(config)?;
    store.reset_all()?;
    println!("초기화 완료");
    Ok(())
}

pub fn diary(config: &Config, text: String) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    store.save_diary(text)?;
    println!("학습 일기 저장됨");
    Ok(())
}

pub fn dday(config: &Config, name: String, date: &str) -> anyhow::Result<()> {
    let date: NaiveDate = date
        .parse()
        .with_context(|| format!("invalid date '{date}', expected YYYY-MM-DD"))?;
    let mut store = open_store(config)?;
    store.save_dday(Dday { name: name.clone(), date })?;
    println!("D-day 설정됨: {name} ({date})");
    Ok(())
}

pub fn profile(
    config: &Config,
    nickname: Option<String>,
    mascot: Option<String>,
    theme: Option<String>,
) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let mut profile = store.state().profile.clone();
    if let Some(nickname) = nickname {
        profile.nickname = nickname;
    }
    if let Some(mascot) = mascot {
        profile.mascot = mascot;
    }
    if let Some(theme) = theme {
        profile.theme = theme;
    }
    store.save_profile(profile)?;
    println!("프로필 저장됨");
    Ok(())
}

pub fn settings(
    config: &Config,
    daily_goal: Option<u32>,
    tts_speed: Option<f32>,
) -> anyhow::Result<()> {
    let mut store = open_store(config)?;
    let mut settings = store.state().settings.clone();
    if let Some(goal) = daily_goal {
        settings.daily_goal = goal;
    }
    if let Some(speed) = tts_speed {
        settings.tts_speed = speed;
    }
    store.save_settings(settings.clone())?;
    println!(
        "설정 저장됨 (목표 {}분, TTS 배속 {})",
        settings.daily_goal, settings.tts_speed
    );
    Ok(())
}

pub async fn trigger_update(config: &Config) -> anyhow::Result<()> {
    studio_articles::dispatch_update(&config.articles.update_webhook, &config.articles.update_token)
        .await
        .context("update webhook request failed")?;
    println!("기사 갱신 요청 전송됨");
    Ok(())
}
