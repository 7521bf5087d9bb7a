use urlencoding::decode;

use super::topic_error::{TopicError, TopicResult};

/// Multi-level wild card.
pub const WILD_CARD: char = '>';

/// Single level wild card.
pub const SINGLE_LEVEL_WILD_CARD: char = '*';

/// Level separator of a raw subtopic path.
pub const PATH_SEPARATOR: &'static str = "/";

/// Level separator of a canonical subtopic.
pub const LEVEL_SEPARATOR: &'static str = ".";

/// It converts a raw subtopic path into a canonical dot separated subtopic.
///
/// A path is percent decoded first, so an encoded separator or wild card is
/// validated the same way as a plain one. Empty levels are dropped. A wild card
/// is only allowed as a whole level.
pub fn normalize_subtopic<T: AsRef<str>>(raw: T) -> TopicResult<String> {
    let raw = raw.as_ref();

    if raw.is_empty() {
        return Ok(String::new());
    }

    let decoded = query_unescape(raw)?;
    let dotted = decoded.replace(PATH_SEPARATOR, LEVEL_SEPARATOR);

    let mut levels = Vec::new();
    for level in dotted.split(LEVEL_SEPARATOR) {
        if level.is_empty() {
            continue;
        }

        if level.chars().count() > 1
            && (level.contains(SINGLE_LEVEL_WILD_CARD) || level.contains(WILD_CARD))
        {
            return Err(TopicError::malformed_subtopic(format!(
                "wild card is mixed with other characters in \"{}\"",
                level
            )));
        }

        levels.push(level);
    }

    Ok(levels.join(LEVEL_SEPARATOR))
}

/// Percent decoding in the query component flavour: `+` stands for a space and
/// every `%` must be followed by two hex digits. `urlencoding` passes broken
/// escapes through untouched, so they are rejected before decoding.
fn query_unescape(raw: &str) -> TopicResult<String> {
    let bytes = raw.as_bytes();
    for (i, b) in bytes.iter().enumerate() {
        if *b != b'%' {
            continue;
        }
        let valid = bytes
            .get(i + 1..i + 3)
            .map(|escape| escape.iter().all(u8::is_ascii_hexdigit))
            .unwrap_or(false);
        if !valid {
            return Err(TopicError::malformed_subtopic(format!(
                "invalid escape in \"{}\"",
                raw
            )));
        }
    }

    decode(&raw.replace('+', " "))
        .map(|decoded| decoded.into_owned())
        .map_err(|_| {
            TopicError::malformed_subtopic(format!(
                "\"{}\" is not valid UTF-8 once decoded",
                raw
            ))
        })
}
