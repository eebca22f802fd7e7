use studio_types::{Direction, SessionKind};

pub const SYSTEM_PROMPT: &str = "당신은 한영/영한 번역 전문가입니다. 친절하고 정확하게 피드백을 제공합니다.";

/// Build the scoring prompt for one attempt. The rubric and response shape
/// are fixed; only the texts and direction vary.
pub fn build(original: &str, attempt: &str, direction: Direction, kind: SessionKind) -> String {
    match kind {
        SessionKind::Translation => translation(original, attempt, direction),
        SessionKind::Interpretation => interpretation(original, attempt),
    }
}

fn translation(original: &str, attempt: &str, direction: Direction) -> String {
    let (source_lang, target_lang) = match direction {
        Direction::EnKo => ("영어", "한국어"),
        Direction::KoEn => ("한국어", "영어"),
    };

    format!(
        "다음 번역을 평가해주세요.\n\n\
         [원문] ({source_lang})\n{original}\n\n\
         [사용자 번역] ({target_lang})\n{attempt}\n\n\
         다음 JSON 형식으로만 응답해주세요:\n\
         {{\n\
           \"score\": 0-100 사이의 점수,\n\
           \"feedback\": \"전체적인 피드백\",\n\
           \"improvements\": [\"개선점1\", \"개선점2\"],\n\
           \"goodPoints\": [\"잘한 점1\", \"잘한 점2\"],\n\
           \"modelAnswer\": \"모범 번역\"\n\
         }}"
    )
}

fn interpretation(original: &str, attempt: &str) -> String {
    format!(
        "다음 통역을 평가해주세요.\n\n\
         [원문]\n{original}\n\n\
         [사용자 통역]\n{attempt}\n\n\
         다음 JSON 형식으로만 응답해주세요:\n\
         {{\n\
           \"score\": 0-100 사이의 점수,\n\
           \"feedback\": \"전체적인 피드백 (유창성, 정확성, 완성도)\",\n\
           \"missedPoints\": [\"누락된 내용1\", \"누락된 내용2\"],\n\
           \"goodPoints\": [\"잘한 점1\"],\n\
           \"modelInterpretation\": \"모범 통역\"\n\
         }}"
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn translation_prompt_embeds_both_texts_and_direction() {
        let p = build("A cat sat.", "고양이가 앉았다.", Direction::EnKo, SessionKind::Translation);
        assert!(p.contains("A cat sat."));
        assert!(p.contains("고양이가 앉았다."));
        assert!(p.contains("[원문] (영어)"));
        assert!(p.contains("\"modelAnswer\""));
    }

    #[test]
    fn interpretation_prompt_asks_for_missed_points() {
        let p = build("원문", "시도", Direction::KoEn, SessionKind::Interpretation);
        assert!(p.contains("\"missedPoints\""));
        assert!(p.contains("\"modelInterpretation\""));
    }
}
