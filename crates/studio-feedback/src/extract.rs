//! Best-effort extraction of a JSON object from free-form model output.

/// Tagged result of [`extract_json_block`]. Call sites branch on this
/// instead of catching parse errors ad hoc.
#[derive(Debug)]
pub enum Extraction {
    Parsed(serde_json::Value),
    /// No brace-delimited block in the text at all
    NotFound,
    /// A block was found but did not parse as JSON
    Invalid(String),
}

/// Find the first balanced brace-delimited substring and parse it.
///
/// Models are asked to answer with a bare JSON object but routinely wrap it
/// in prose or code fences; braces inside JSON strings are skipped while
/// balancing.
pub fn extract_json_block(text: &str) -> Extraction {
    let Some(start) = text.find('{') else {
        return Extraction::NotFound;
    };

    let mut depth = 0usize;
    let mut in_string = false;
    let mut escaped = false;
    for (offset, ch) in text[start..].char_indices() {
        if in_string {
            match ch {
                _ if escaped => escaped = false,
                '\\' => escaped = true,
                '"' => in_string = false,
                _ => {}
            }
            continue;
        }
        match ch {
            '"' => in_string = true,
            '{' => depth += 1,
            '}' => {
                depth -= 1;
                if depth == 0 {
                    let block = &text[start..start + offset + ch.len_utf8()];
                    return match serde_json::from_str(block) {
                        Ok(value) => Extraction::Parsed(value),
                        Err(e) => Extraction::Invalid(e.to_string()),
                    };
                }
            }
            _ => {}
        }
    }

    // Opening brace without a close: treat like no block.
    Extraction::NotFound
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn extracts_object_wrapped_in_prose() {
        let text = "Here is my evaluation:\n```json\n{\"score\": 85, \"feedback\": \"good\"}\n```\nHope that helps!";
        match extract_json_block(text) {
            Extraction::Parsed(v) => assert_eq!(v["score"], 85),
            other => panic!("expected Parsed, got {other:?}"),
        }
    }

    #[test]
    fn balances_nested_braces_and_brace_in_string() {
        let text = r#"{"feedback": "use {curly} quotes", "inner": {"score": 1}}"#;
        match extract_json_block(text) {
            Extraction::Parsed(v) => assert_eq!(v["inner"]["score"], 1),
            other => panic!("expected Parsed, got {other:?}"),
        }
    }

    #[test]
    fn plain_text_is_not_found() {
        assert!(matches!(extract_json_block("no json here"), Extraction::NotFound));
        assert!(matches!(extract_json_block("dangling { brace"), Extraction::NotFound));
    }

    #[test]
    fn malformed_block_is_invalid() {
        assert!(matches!(
            extract_json_block("{score: 85}"),
            Extraction::Invalid(_)
        ));
    }
}
