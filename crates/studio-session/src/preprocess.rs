use unicode_normalization::UnicodeNormalization;

/// Normalize a user attempt before scoring: NFKC, newlines collapsed to
/// spaces, trimmed.
pub fn normalize_attempt(text: &str) -> String {
    let text: String = text.trim().nfkc().collect();
    text.replace(['\n', '\r'], " ").trim().to_string()
}

#[cfg(test)]
mod tests {
    use super::normalize_attempt;

    #[test]
    fn trims_and_collapses_newlines() {
        assert_eq!(normalize_attempt("  고양이가\n앉았다.  "), "고양이가 앉았다.");
    }

    #[test]
    fn whitespace_only_becomes_empty() {
        assert_eq!(normalize_attempt(" \n\r "), "");
    }

    #[test]
    fn nfkc_normalizes_fullwidth_forms() {
        assert_eq!(normalize_attempt("ＡＢＣ！"), "ABC!");
    }
}
