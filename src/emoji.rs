//! Emoji extraction.
//!
//! Matches whole emoji sequences rather than single code points, so a
//! family (`👨‍👩‍👧`), a flag (`🇮🇳`), a skin-toned hand (`👍🏽`) or a keycap
//! (`1️⃣`) each come back as one item.

use std::sync::LazyLock;

use regex::Regex;

static EMOJI: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(concat!(
        // regional indicator pair (flag)
        r"[\x{1F1E6}-\x{1F1FF}]{2}",
        // keycap
        r"|[#*0-9]\x{FE0F}?\x{20E3}",
        // pictograph with presentation selector / skin tone / tag sequence,
        // optionally joined to more pictographs with ZWJ
        r"|\p{Extended_Pictographic}(?:\x{FE0F}|[\x{1F3FB}-\x{1F3FF}])*[\x{E0020}-\x{E007F}]*",
        r"(?:\x{200D}\p{Extended_Pictographic}(?:\x{FE0F}|[\x{1F3FB}-\x{1F3FF}])*)*",
    ))
    .expect("emoji pattern is valid")
});

/// Returns every emoji in `text`, left to right, repeats included.
///
/// ```rust
/// use chatstats::emoji::extract_emojis;
///
/// assert_eq!(extract_emojis("see you 😊😊 👍🏽"), vec!["😊", "😊", "👍🏽"]);
/// assert!(extract_emojis("no emoji here").is_empty());
/// ```
pub fn extract_emojis(text: &str) -> Vec<String> {
    EMOJI
        .find_iter(text)
        .map(|m| m.as_str().to_string())
        .collect()
}
