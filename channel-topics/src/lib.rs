//! Channel topics as they are sent by the broker hooks.
//!
//! A hook topic has the `/channels/<channel_id>/messages[/<subtopic>][?<query>]`
//! shape. [`parse_topic`] splits it into a channel id and a raw subtopic path,
//! [`normalize_subtopic`] turns the raw path into its canonical dotted form.

mod subtopic;
mod topic;
mod topic_error;

pub use subtopic::*;
pub use topic::*;
pub use topic_error::*;
