//! Sentence segmentation and English/Korean pair alignment.

/// A derived sentence pair; never persisted. `ko` is empty when the Korean
/// text has fewer sentences than the English text.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SentencePair {
    pub en: String,
    pub ko: String,
}

const TERMINALS: [char; 3] = ['.', '!', '?'];
// Korean articles additionally use the ideographic full stop.
const KO_TERMINALS: [char; 4] = ['.', '!', '?', '。'];

/// Split text into sentences on terminal punctuation, keeping the
/// punctuation. Text with no terminal at all comes back as one sentence.
pub fn split_sentences(text: &str, terminals: &[char]) -> Vec<String> {
    let mut sentences = Vec::new();
    let mut current = String::new();
    let mut in_terminal_run = false;

    for ch in text.chars() {
        let is_terminal = terminals.contains(&ch);
        if in_terminal_run && !is_terminal {
            let sentence = current.trim();
            if !sentence.is_empty() {
                sentences.push(sentence.to_string());
            }
            current.clear();
            in_terminal_run = false;
        }
        current.push(ch);
        in_terminal_run = is_terminal;
    }

    let last = current.trim();
    if in_terminal_run && !last.is_empty() {
        sentences.push(last.to_string());
    }

    if sentences.is_empty() {
        let whole = text.trim();
        if whole.is_empty() {
            return Vec::new();
        }
        return vec![whole.to_string()];
    }
    sentences
}

/// Zip English and Korean sentences by index.
///
/// Alignment is best-effort: sentence counts may differ, and unmatched
/// Korean slots fall back to the empty string. Trailing text after the last
/// terminal is dropped, matching the segmentation the sentences came from.
pub fn pair_sentences(content: &str, korean_content: Option<&str>) -> Vec<SentencePair> {
    let en = split_sentences(content, &TERMINALS);
    let ko = korean_content
        .map(|text| split_sentences(text, &KO_TERMINALS))
        .unwrap_or_default();

    en.into_iter()
        .enumerate()
        .map(|(i, en)| SentencePair {
            en,
            ko: ko.get(i).cloned().unwrap_or_default(),
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn splits_on_terminal_punctuation_keeping_it() {
        let sentences = split_sentences("A cat sat. It slept! Did it? ", &TERMINALS);
        assert_eq!(sentences, vec!["A cat sat.", "It slept!", "Did it?"]);
    }

    #[test]
    fn terminal_runs_stay_with_their_sentence() {
        let sentences = split_sentences("Wait... what?! Yes.", &TERMINALS);
        assert_eq!(sentences, vec!["Wait...", "what?!", "Yes."]);
    }

    #[test]
    fn text_without_terminals_is_one_sentence() {
        let sentences = split_sentences("no punctuation here", &TERMINALS);
        assert_eq!(sentences, vec!["no punctuation here"]);
        assert!(split_sentences("   ", &TERMINALS).is_empty());
    }

    #[test]
    fn segmentation_is_idempotent() {
        let text = "One. Two! Three?";
        let first = split_sentences(text, &TERMINALS);
        let again = split_sentences(text, &TERMINALS);
        assert_eq!(first, again);
    }

    #[test]
    fn korean_ideographic_stop_terminates() {
        let sentences = split_sentences("고양이가 앉았다。 잠들었다。", &KO_TERMINALS);
        assert_eq!(sentences, vec!["고양이가 앉았다。", "잠들었다。"]);
    }

    #[test]
    fn unmatched_korean_slots_default_to_empty() {
        let pairs = pair_sentences("A cat sat. It slept.", Some("고양이가 앉았다."));
        assert_eq!(pairs.len(), 2);
        assert_eq!(pairs[0].ko, "고양이가 앉았다.");
        assert_eq!(pairs[1].ko, "");
    }

    #[test]
    fn no_korean_content_means_empty_ko_side() {
        let pairs = pair_sentences("One. Two.", None);
        assert!(pairs.iter().all(|p| p.ko.is_empty()));
    }
}
