//! Text normalization into the canonical form every matching step operates
//! on: lower-case, with URLs removed, whitespace runs collapsed, and
//! punctuation stripped. URL stripping must run before punctuation
//! stripping: the `:` and `/` that mark a scheme are what the URL pattern
//! keys on.

use regex::Regex;
use std::sync::OnceLock;

/// Normalizes raw extracted text into the canonical matching form.
/// Empty input yields empty output; the function is idempotent.
pub fn normalize(text: &str) -> String {
    static URL_RE: OnceLock<Regex> = OnceLock::new();
    static WS_RE: OnceLock<Regex> = OnceLock::new();
    static PUNCT_RE: OnceLock<Regex> = OnceLock::new();

    let url_re = URL_RE.get_or_init(|| Regex::new(r"http\S+").unwrap());
    let ws_re = WS_RE.get_or_init(|| Regex::new(r"\s+").unwrap());
    let punct_re = PUNCT_RE.get_or_init(|| Regex::new(r"[^\w\s]").unwrap());

    let text = text.to_lowercase();
    let text = url_re.replace_all(&text, "");
    let text = ws_re.replace_all(&text, " ");
    punct_re.replace_all(&text, "").into_owned()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_lowercases_everything() {
        assert_eq!(normalize("Senior RUST Engineer"), "senior rust engineer");
    }

    #[test]
    fn test_strips_urls() {
        let text = "portfolio at https://example.com/me and http://foo.bar/x here";
        assert_eq!(normalize(text), "portfolio at and here");
    }

    #[test]
    fn test_collapses_whitespace_runs() {
        assert_eq!(normalize("a\t\t b\n\nc"), "a b c");
    }

    #[test]
    fn test_strips_punctuation() {
        assert_eq!(normalize("C++, C#!"), "c c");
    }

    #[test]
    fn test_empty_input_yields_empty_output() {
        assert_eq!(normalize(""), "");
    }

    #[test]
    fn test_idempotent() {
        let messy = "  Check https://x.io NOW!!  \n\tPython & SQL  ";
        let once = normalize(messy);
        assert_eq!(normalize(&once), once);
    }

    #[test]
    fn test_output_has_no_uppercase_punct_or_double_space() {
        let out = normalize("Résumé: Python/SQL, see http://cv.example!  Now.");
        assert!(!out.chars().any(|c| c.is_uppercase()), "out was {out:?}");
        assert!(
            out.chars().all(|c| c.is_alphanumeric() || c == '_' || c == ' '),
            "out was {out:?}"
        );
        assert!(!out.contains("  "), "out was {out:?}");
    }
}
