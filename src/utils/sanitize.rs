//! Utilities for sanitizing error messages and bounding text.
//!
//! Removes control characters from error messages before they are written
//! into the JSON output, and truncates text on character boundaries.

/// Sanitizes an error message by removing control characters.
///
/// Control characters (0x00-0x1F, except newline/tab/carriage return) can cause
/// issues when displayed in logs or consumed downstream. This function removes
/// them while preserving readability.
///
/// # Arguments
///
/// * `message` - The error message to sanitize
///
/// # Returns
///
/// A sanitized version of the message with control characters removed.
pub fn sanitize_error_message(message: &str) -> String {
    message
        .chars()
        .filter(|c| {
            let code = *c as u32;
            code >= 0x20 // Printable ASCII starts at 0x20 (space)
                || code == 0x09 // Tab
                || code == 0x0A // Newline
                || code == 0x0D // Carriage return
        })
        .filter(|c| *c != '\u{7F}')
        .collect()
}

/// Returns the prefix of `text` holding at most `max_chars` characters.
///
/// Counts Unicode scalar values, never bytes, so multi-byte characters are
/// never split.
pub fn truncate_chars(text: &str, max_chars: usize) -> &str {
    match text.char_indices().nth(max_chars) {
        Some((byte_index, _)) => &text[..byte_index],
        None => text,
    }
}

/// Sanitizes and truncates an error message to a maximum length.
///
/// This function:
/// 1. Sanitizes the message by removing control characters
/// 2. Truncates to `MAX_ERROR_MESSAGE_LENGTH` characters if necessary
/// 3. Appends truncation indicator if the message was truncated
///
/// # Arguments
///
/// * `message` - The error message to sanitize and truncate
///
/// # Returns
///
/// A sanitized and truncated version of the message.
pub fn sanitize_and_truncate_error_message(message: &str) -> String {
    let sanitized = sanitize_error_message(message);
    let char_count = sanitized.chars().count();

    if char_count > crate::config::MAX_ERROR_MESSAGE_LENGTH {
        // Leave room for the truncation note
        let keep = crate::config::MAX_ERROR_MESSAGE_LENGTH.saturating_sub(50);
        format!(
            "{}... (truncated, original length: {} chars)",
            truncate_chars(&sanitized, keep),
            char_count
        )
    } else {
        sanitized
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sanitize_error_message_removes_control_chars() {
        let input = "Error\x00message\x01with\x02control\x03chars";
        let output = sanitize_error_message(input);
        assert_eq!(output, "Errormessagewithcontrolchars");
    }

    #[test]
    fn test_sanitize_error_message_preserves_newlines() {
        let input = "Error\nmessage\nwith\nnewlines";
        let output = sanitize_error_message(input);
        assert_eq!(output, "Error\nmessage\nwith\nnewlines");
    }

    #[test]
    fn test_sanitize_error_message_preserves_unicode() {
        let input = "Falha na conexão: não foi possível resolver 🚀";
        let output = sanitize_error_message(input);
        assert_eq!(output, input);
    }

    #[test]
    fn test_sanitize_error_message_empty_string() {
        assert_eq!(sanitize_error_message(""), "");
    }

    #[test]
    fn test_truncate_chars_counts_characters() {
        assert_eq!(truncate_chars("ação", 2), "aç");
        assert_eq!(truncate_chars("ação", 10), "ação");
        assert_eq!(truncate_chars("abc", 0), "");
        assert_eq!(truncate_chars("", 5), "");
    }

    #[test]
    fn test_sanitize_and_truncate_short_message_untouched() {
        let input = "connection refused";
        assert_eq!(sanitize_and_truncate_error_message(input), input);
    }

    #[test]
    fn test_sanitize_and_truncate_long_multibyte_message() {
        let input = "é".repeat(crate::config::MAX_ERROR_MESSAGE_LENGTH + 10);
        let output = sanitize_and_truncate_error_message(&input);
        assert!(output.contains("(truncated, original length: 2010 chars)"));
        assert!(output.chars().count() < input.chars().count());
    }
}
