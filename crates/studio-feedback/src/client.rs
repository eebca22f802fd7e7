use serde_json::Value;
use studio_types::{Direction, ScoredFeedback, SessionKind};

use crate::extract::{Extraction, extract_json_block};
use crate::{CompletionModel, prompt};

/// Which completion path scores this attempt.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum FeedbackMode {
    #[default]
    Fast,
    Premium,
}

#[derive(Debug, Clone)]
pub struct FeedbackRequest {
    pub original: String,
    pub attempt: String,
    pub direction: Direction,
    pub kind: SessionKind,
}

/// Front door for attempt scoring.
///
/// `get_feedback` is total: every transport error, relay error payload, or
/// unusable model response degrades to a zero-score placeholder so a failed
/// call only costs the in-flight submission, never the session.
pub struct FeedbackClient {
    fast: Box<dyn CompletionModel>,
    premium: Box<dyn CompletionModel>,
}

impl FeedbackClient {
    pub fn new(fast: Box<dyn CompletionModel>, premium: Box<dyn CompletionModel>) -> Self {
        Self { fast, premium }
    }

    pub fn model_name(&self, mode: FeedbackMode) -> &str {
        self.model(mode).name()
    }

    fn model(&self, mode: FeedbackMode) -> &dyn CompletionModel {
        match mode {
            FeedbackMode::Fast => self.fast.as_ref(),
            FeedbackMode::Premium => self.premium.as_ref(),
        }
    }

    pub async fn get_feedback(&self, request: &FeedbackRequest, mode: FeedbackMode) -> ScoredFeedback {
        let prompt = prompt::build(
            &request.original,
            &request.attempt,
            request.direction,
            request.kind,
        );

        let raw = match self
            .model(mode)
            .complete(&prompt, prompt::SYSTEM_PROMPT)
            .await
        {
            Ok(raw) => raw,
            Err(e) => {
                tracing::warn!(error = %e, "feedback call failed, degrading");
                return degraded(request.kind);
            }
        };

        match extract_json_block(&raw) {
            Extraction::Parsed(value) => parse_feedback(&value, request.kind).unwrap_or_else(|| {
                tracing::warn!("feedback response missing required fields, degrading");
                degraded(request.kind)
            }),
            Extraction::NotFound | Extraction::Invalid(_) => {
                tracing::warn!("no parsable feedback block in model output, degrading");
                degraded(request.kind)
            }
        }
    }
}

/// Validate the expected shape and map it into a [`ScoredFeedback`].
/// `score` and `feedback` are required; the lists and model answer are not.
fn parse_feedback(value: &Value, kind: SessionKind) -> Option<ScoredFeedback> {
    let score = value["score"].as_u64()?.min(100) as u32;
    let feedback = value["feedback"].as_str()?.to_string();

    let answer_key = match kind {
        SessionKind::Translation => "modelAnswer",
        SessionKind::Interpretation => "modelInterpretation",
    };

    Some(ScoredFeedback {
        score,
        feedback,
        good_points: string_list(&value["goodPoints"]),
        improvements: string_list(&value["improvements"]),
        missed_points: string_list(&value["missedPoints"]),
        model_answer: value[answer_key].as_str().unwrap_or_default().to_string(),
    })
}

fn string_list(value: &Value) -> Vec<String> {
    value
        .as_array()
        .map(|items| {
            items
                .iter()
                .filter_map(|v| v.as_str().map(str::to_string))
                .collect()
        })
        .unwrap_or_default()
}

/// The well-formed result every failure collapses into.
fn degraded(kind: SessionKind) -> ScoredFeedback {
    let feedback = match kind {
        SessionKind::Translation => "AI 첨삭을 가져올 수 없습니다. 잠시 후 다시 제출해주세요.",
        SessionKind::Interpretation => "AI 평가를 가져올 수 없습니다. 잠시 후 다시 제출해주세요.",
    };
    ScoredFeedback {
        score: 0,
        feedback: feedback.to_string(),
        ..ScoredFeedback::default()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::FeedbackError;

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
            Err(FeedbackError::Api("HTTP 500: no key configured".into()))
        }

        fn name(&self) -> &str {
            "failing"
        }
    }

    fn request() -> FeedbackRequest {
        FeedbackRequest {
            original: "A cat sat.".into(),
            attempt: "고양이가 앉았다.".into(),
            direction: Direction::EnKo,
            kind: SessionKind::Translation,
        }
    }

    fn client(model: impl CompletionModel + 'static) -> FeedbackClient {
        FeedbackClient::new(Box::new(model), Box::new(Failing))
    }

    #[tokio::test]
    async fn well_formed_response_is_parsed() {
        const RAW: &str = r#"Evaluation: {"score": 88, "feedback": "자연스러운 번역입니다",
            "goodPoints": ["정확한 시제"], "improvements": [], "modelAnswer": "고양이가 앉아 있었다."}"#;
        let fb = client(Canned(RAW))
            .get_feedback(&request(), FeedbackMode::Fast)
            .await;
        assert_eq!(fb.score, 88);
        assert_eq!(fb.good_points, vec!["정확한 시제"]);
        assert_eq!(fb.model_answer, "고양이가 앉아 있었다.");
    }

    #[tokio::test]
    async fn unparsable_response_degrades_to_default() {
        let fb = client(Canned("Sorry, I can only answer in prose."))
            .get_feedback(&request(), FeedbackMode::Fast)
            .await;
        assert_eq!(fb.score, 0);
        assert!(!fb.feedback.is_empty());
        assert!(fb.improvements.is_empty());
        assert!(fb.good_points.is_empty());
        assert!(fb.model_answer.is_empty());
    }

    #[tokio::test]
    async fn relay_error_degrades_to_same_default() {
        let fb = client(Failing).get_feedback(&request(), FeedbackMode::Fast).await;
        assert_eq!(fb.score, 0);
        assert!(!fb.feedback.is_empty());
    }

    #[tokio::test]
    async fn missing_required_field_degrades() {
        let fb = client(Canned(r#"{"feedback": "score is missing"}"#))
            .get_feedback(&request(), FeedbackMode::Fast)
            .await;
        assert_eq!(fb.score, 0);
    }

    #[tokio::test]
    async fn score_is_clamped_to_100() {
        let fb = client(Canned(r#"{"score": 9000, "feedback": "over-enthusiastic"}"#))
            .get_feedback(&request(), FeedbackMode::Fast)
            .await;
        assert_eq!(fb.score, 100);
    }
}
