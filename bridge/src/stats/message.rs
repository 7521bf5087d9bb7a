use crate::api::hooks::HookType;
use std::time::Duration;
use tokio::sync::oneshot;

#[derive(Debug)]
pub enum StatsMessage {
  HookProcessed {
    hook: HookType,
    status: u16,
    duration: Duration,
  },
  /// Asks for the current state in the text exposition format.
  Snapshot { reply: oneshot::Sender<String> },
}
