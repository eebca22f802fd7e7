//! Expansion of an RSS headline into a full practice article via a
//! completion model.

use serde::Deserialize;
use studio_feedback::{CompletionModel, Extraction, extract_json_block};
use studio_types::KeyTerm;

/// Parsed expansion payload as the model is asked to emit it.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Expanded {
    pub content: String,
    #[serde(default = "default_level")]
    pub level: String,
    #[serde(default)]
    pub key_terms: Vec<KeyTerm>,
}

fn default_level() -> String {
    "intermediate".to_string()
}

pub fn count_words(text: &str) -> usize {
    text.split_whitespace().count()
}

fn category_detail(category: &str) -> &'static str {
    match category {
        "economy" => "경제/금융 (거시경제, 통화정책, 금융시장, 무역)",
        "politics" => "국제정치/외교 (외교, 안보, 국제관계, 정상회담)",
        "law" => "법률/규제 (국제법, 통상법, 규제, 판결)",
        "health" => "의료/보건 (공중보건, 의료정책, 제약, 임상시험)",
        "tech" => "기술/IT (AI, 반도체, 디지털 전환, 사이버보안)",
        _ => "일반 시사",
    }
}

fn build_prompt(title: &str, summary: &str, category: &str, source: &str) -> String {
    format!(
        r#"You are a professional news writer creating educational content for Korean-English translation/interpretation students.

Based on this news headline and summary, write a COMPLETE NEWS ARTICLE of 350-450 words.

**Headline:** {title}
**Summary:** {summary}
**Category:** {}
**Source Style:** {source}

REQUIREMENTS:
1. Write exactly 350-450 words (this is critical!)
2. Write in clear, professional journalistic English
3. Include:
   - Opening paragraph with key facts (who, what, when, where, why)
   - 2-3 body paragraphs with details, context, and quotes
   - Background/context paragraph
   - Closing paragraph with implications or future outlook
4. Use vocabulary appropriate for the {category} domain
5. Include realistic (but clearly fabricated) quotes from officials/experts
6. Make it suitable for translation practice

Respond with ONLY this JSON format (no markdown):
{{
  "content": "The full 350-450 word article text here. Write multiple paragraphs separated by double newlines.",
  "level": "beginner|intermediate|advanced|expert",
  "keyTerms": [
    {{"en": "English term 1", "ko": "한국어 번역 1"}},
    {{"en": "English term 2", "ko": "한국어 번역 2"}},
    {{"en": "English term 3", "ko": "한국어 번역 3"}},
    {{"en": "English term 4", "ko": "한국어 번역 4"}},
    {{"en": "English term 5", "ko": "한국어 번역 5"}},
    {{"en": "English term 6", "ko": "한국어 번역 6"}}
  ]
}}

Level guidelines:
- beginner: Simple vocabulary, short sentences (for general news)
- intermediate: Technical terms, compound sentences (standard news)
- advanced: Complex structures, nuanced expressions (in-depth analysis)
- expert: Highly specialized, diplomatic/legal language (expert commentary)

IMPORTANT: The article MUST be 350-450 words. Count carefully!"#,
        category_detail(category),
    )
}

/// Expand a headline into a full article. Returns `None` when the model
/// call fails, the payload is not parseable, or the article falls short of
/// `min_words`; the caller just moves on to the next headline.
pub async fn expand_article(
    model: &dyn CompletionModel,
    title: &str,
    summary: &str,
    category: &str,
    source: &str,
    min_words: usize,
) -> Option<Expanded> {
    let prompt = build_prompt(title, summary, category, source);
    let text = match model.complete(&prompt, "").await {
        Ok(text) => text,
        Err(e) => {
            tracing::warn!(title, error = %e, "expansion call failed");
            return None;
        }
    };

    let value = match extract_json_block(&text) {
        Extraction::Parsed(value) => value,
        Extraction::NotFound => {
            tracing::warn!(title, "no JSON object in expansion response");
            return None;
        }
        Extraction::Invalid(e) => {
            tracing::warn!(title, error = %e, "malformed JSON in expansion response");
            return None;
        }
    };

    let expanded: Expanded = match serde_json::from_value(value) {
        Ok(expanded) => expanded,
        Err(e) => {
            tracing::warn!(title, error = %e, "expansion payload missing fields");
            return None;
        }
    };

    let words = count_words(&expanded.content);
    if words < min_words {
        tracing::warn!(title, words, min_words, "expanded article too short, skipped");
        return None;
    }
    tracing::info!(title, words, level = %expanded.level, "article expanded");
    Some(expanded)
}

#[cfg(test)]
mod tests {
    use super::*;
    use studio_feedback::FeedbackError;

    struct Canned(&'static str);

    #[async_trait::async_trait]
    impl CompletionModel for Canned {
        async fn complete(&self, _: &str, _: &str) -> Result<String, FeedbackError> {
            Ok(self.0.to_string())
        }

        fn name(&self) -> &str {
            "canned"
        }
    }

    struct Failing;

    #[async_trait::async_trait]
    impl CompletionModel for Failing {
        async fn complete(&self, _: &str, _: &str) -> Result<String, FeedbackError> {
            Err(FeedbackError::Api("boom".into()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn payload(words: usize) -> String {
        let content = vec!["word"; words].join(" ");
        format!(
            r#"{{"content": "{content}", "level": "advanced", "keyTerms": [{{"en": "tariff", "ko": "관세"}}]}}"#
        )
    }

    #[tokio::test]
    async fn short_articles_are_rejected() {
        let raw: &'static str = Box::leak(payload(120).into_boxed_str());
        let out = expand_article(&Canned(raw), "t", "s", "economy", "BBC", 300).await;
        assert!(out.is_none());
    }

    #[tokio::test]
    async fn long_enough_articles_pass_with_terms() {
        let raw: &'static str = Box::leak(payload(350).into_boxed_str());
        let out = expand_article(&Canned(raw), "t", "s", "economy", "BBC", 300)
            .await
            .unwrap();
        assert_eq!(out.level, "advanced");
        assert_eq!(out.key_terms.len(), 1);
        assert_eq!(count_words(&out.content), 350);
    }

    #[tokio::test]
    async fn failed_call_and_proseonly_response_yield_none() {
        assert!(expand_article(&Failing, "t", "s", "tech", "BBC", 300).await.is_none());
        let out = expand_article(&Canned("sorry, no JSON today"), "t", "s", "tech", "BBC", 300).await;
        assert!(out.is_none());
    }

    #[test]
    fn prompt_carries_headline_and_category_detail() {
        let prompt = build_prompt("Rates held", "Bank pauses", "economy", "Reuters");
        assert!(prompt.contains("Rates held"));
        assert!(prompt.contains("거시경제"));
        assert!(prompt.contains("350-450 words"));
    }
}
