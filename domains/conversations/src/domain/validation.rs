//! Validation rules for chat input
//!
//! Request extractors call these before anything reaches the service layer,
//! so the service can assume well-formed input.

use lazy_static::lazy_static;
use regex::Regex;

/// Longest accepted message, counted in characters after trimming
pub const MESSAGE_MAX_CHARS: usize = 10_000;

/// Longest accepted explicit conversation title, counted the same way
pub const TITLE_MAX_CHARS: usize = 200;

lazy_static! {
    /// Canonical UUID form: lowercase or uppercase hex in 8-4-4-4-12 groups
    pub static ref CONVERSATION_ID_REGEX: Regex = Regex::new(
        r"^[0-9a-fA-F]{8}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{4}-[0-9a-fA-F]{12}$"
    )
    .unwrap();
}

/// Validate a chat message body: non-empty after trimming and within the
/// length cap. Length is counted on the trimmed text, in characters rather
/// than bytes, so multibyte input is not penalized.
pub fn validate_message_content(content: &str) -> bool {
    let trimmed = content.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= MESSAGE_MAX_CHARS
}

/// Validate a client-supplied conversation identifier
pub fn validate_conversation_id(id: &str) -> bool {
    CONVERSATION_ID_REGEX.is_match(id)
}

/// Validate an explicit conversation title
pub fn validate_title(title: &str) -> bool {
    let trimmed = title.trim();
    !trimmed.is_empty() && trimmed.chars().count() <= TITLE_MAX_CHARS
}
