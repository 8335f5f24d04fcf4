//! Free-text filter sanitisation.
//!
//! Search, location and custom-domain inputs feed straight into substring
//! matching, so anything that is not a letter, whitespace, `/` or `\` is
//! stripped before it reaches the filter state. The slashes stay allowed for
//! domain values like "UI/UX".

/// Strip every character that is not a letter, whitespace, `/` or `\`.
///
/// Pure and idempotent: `sanitize(sanitize(x)) == sanitize(x)` for all `x`.
pub fn sanitize(raw: &str) -> String {
    raw.chars()
        .filter(|c| c.is_alphabetic() || c.is_whitespace() || *c == '/' || *c == '\\')
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn keeps_letters_whitespace_and_slashes() {
        assert_eq!(sanitize("UI/UX Engineer!!"), "UI/UX Engineer");
        assert_eq!(sanitize("back\\end dev"), "back\\end dev");
    }

    #[test]
    fn strips_digits_and_metacharacters() {
        assert_eq!(sanitize("<script>1; DROP--"), "script DROP");
        assert_eq!(sanitize("123$%^"), "");
    }

    #[test]
    fn empty_input_stays_empty() {
        assert_eq!(sanitize(""), "");
    }

    #[test]
    fn is_idempotent() {
        for raw in ["UI/UX Engineer!!", "a1b2 c3", "<>&\"'", "tab\tand\nnewline"] {
            let once = sanitize(raw);
            assert_eq!(sanitize(&once), once);
        }
    }

    #[test]
    fn output_contains_only_allowed_characters() {
        let out = sanitize("Señor Dev @ Zürich #42 (remote)");
        assert!(out
            .chars()
            .all(|c| c.is_alphabetic() || c.is_whitespace() || c == '/' || c == '\\'));
    }
}
