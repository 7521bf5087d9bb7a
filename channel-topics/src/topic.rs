use lazy_static::lazy_static;
use log::debug;
use regex::Regex;

use super::topic_error::{TopicError, TopicResult};

/// Group 1 is a channel id, group 2 is an optional subtopic path including
/// its leading separator, group 3 is a query string which is dropped.
pub const CHANNEL_TOPIC_PATTERN: &'static str =
    r"^/channels/([A-Za-z0-9_\-]+)/messages(/[^?]*)?(\?.*)?$";

lazy_static! {
    static ref CHANNEL_TOPIC_REGEX: Regex = Regex::new(CHANNEL_TOPIC_PATTERN).unwrap();
}

/// Channel topic split into its addressable parts.
#[derive(Debug, Clone, PartialEq)]
pub struct ChannelTopic {
    pub channel_id: String,
    /// Raw (still percent encoded) subtopic path without the leading separator.
    /// Empty if a topic has no subtopic.
    pub subtopic_path: String,
}

/// It parses a hook topic of `/channels/<channel_id>/messages[/<subtopic>][?<query>]`
/// form. The query part is ignored.
pub fn parse_topic<T: AsRef<str>>(topic: T) -> TopicResult<ChannelTopic> {
    let topic = topic.as_ref();

    let captures = match CHANNEL_TOPIC_REGEX.captures(topic) {
        Some(c) => c,
        None => {
            debug!("[Topic Parser]: topic {:?} does not match channel pattern", topic);
            return Err(TopicError::malformed_topic(format!(
                "\"{}\" is not a channel topic",
                topic
            )));
        }
    };

    let channel_id = match captures.get(1) {
        Some(m) => m.as_str().to_string(),
        None => return Err(TopicError::malformed_topic("channel id is missing")),
    };

    let subtopic_path = captures
        .get(2)
        .map(|m| {
            let path = m.as_str();
            path.strip_prefix('/').unwrap_or(path).to_string()
        })
        .unwrap_or_default();

    Ok(ChannelTopic {
        channel_id,
        subtopic_path,
    })
}
