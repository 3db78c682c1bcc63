//! Contact identifier patterns.
//!
//! The phone pattern is tuned for Brazilian numbers but applied to any text,
//! so it also matches unrelated runs of 10-11 digits.

use regex::Regex;
use std::sync::LazyLock;

const EMAIL_PATTERN: &str = r"[a-zA-Z0-9._%+-]+@[a-zA-Z0-9.-]+\.[a-zA-Z]{2,}";
const PHONE_PATTERN: &str = r"\(?\d{2}\)?\s?\d{4,5}-?\d{4}";
const CNPJ_PATTERN: &str = r"\d{2}\.\d{3}\.\d{3}/\d{4}-\d{2}";

/// Helper function to compile a static regex pattern, panicking with a detailed
/// error message if compilation fails.
fn compile_regex_unsafe(pattern: &str, context: &str) -> Regex {
    Regex::new(pattern).unwrap_or_else(|e| {
        panic!(
            "Failed to compile regex pattern '{}' in {}: {}. This is a programming error.",
            pattern, context, e
        )
    })
}

static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(EMAIL_PATTERN, "EMAIL_RE"));
static PHONE_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(PHONE_PATTERN, "PHONE_RE"));
static CNPJ_RE: LazyLock<Regex> = LazyLock::new(|| compile_regex_unsafe(CNPJ_PATTERN, "CNPJ_RE"));

/// Email addresses in `text`, left to right, non-overlapping.
pub fn find_emails(text: &str) -> impl Iterator<Item = &str> {
    EMAIL_RE.find_iter(text).map(|m| m.as_str())
}

/// Phone-number-like strings in `text`.
pub fn find_phones(text: &str) -> impl Iterator<Item = &str> {
    PHONE_RE.find_iter(text).map(|m| m.as_str())
}

/// CNPJ numbers in `text`. The check digits are not validated.
pub fn find_cnpjs(text: &str) -> impl Iterator<Item = &str> {
    CNPJ_RE.find_iter(text).map(|m| m.as_str())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_find_emails() {
        let found: Vec<_> = find_emails("mail contato@ong.org.br or a.b+c@x.io.").collect();
        assert_eq!(found, vec!["contato@ong.org.br", "a.b+c@x.io"]);
    }

    #[test]
    fn test_find_emails_requires_tld() {
        assert_eq!(find_emails("user@localhost").count(), 0);
    }

    #[test]
    fn test_find_phones_formats() {
        let text = "(11) 91234-5678, 11 3456-7890 e 1198765432";
        let found: Vec<_> = find_phones(text).collect();
        assert_eq!(found, vec!["(11) 91234-5678", "11 3456-7890", "1198765432"]);
    }

    #[test]
    fn test_find_phones_matches_unrelated_digit_runs() {
        // Order numbers and the like are picked up too
        let found: Vec<_> = find_phones("pedido 20240115123").collect();
        assert_eq!(found, vec!["20240115123"]);
    }

    #[test]
    fn test_find_cnpjs() {
        let found: Vec<_> = find_cnpjs("CNPJ: 12.345.678/0001-90.").collect();
        assert_eq!(found, vec!["12.345.678/0001-90"]);
    }

    #[test]
    fn test_find_cnpjs_rejects_unformatted() {
        assert_eq!(find_cnpjs("12345678000190").count(), 0);
    }
}
