use super::{message::StatsMessage, stats_state::StatsState};
use log::debug;
use std::io;
use tokio::sync::mpsc::{unbounded_channel, UnboundedReceiver, UnboundedSender};

pub type StatsSender = UnboundedSender<StatsMessage>;
pub type StatsReceiver = UnboundedReceiver<StatsMessage>;

/// Owns request metrics. Hook handlers only ever talk to it over a channel.
pub struct Stats {
  receiver: StatsReceiver,
  state: StatsState,
}

impl Stats {
  pub fn new() -> (Self, StatsSender) {
    let (sender, receiver) = unbounded_channel();

    (
      Stats {
        receiver,
        state: StatsState::new(),
      },
      sender,
    )
  }

  pub async fn run(mut self) -> io::Result<()> {
    while let Some(stats_message) = self.receiver.recv().await {
      match stats_message {
        StatsMessage::HookProcessed {
          hook,
          status,
          duration,
        } => {
          self.state.on_hook_processed(hook, status, duration);
        }
        StatsMessage::Snapshot { reply } => {
          if reply.send(self.state.render()).is_err() {
            debug!("[Stats Worker]: snapshot requester went away");
          }
        }
      }
    }

    debug!("[Stats Worker]: all senders are dropped, stopping");
    Ok(())
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::api::hooks::HookType;
  use std::time::Duration;
  use tokio::{spawn, sync::oneshot};

  #[tokio::test]
  async fn answers_snapshots_in_order() {
    let (stats, sender) = Stats::new();
    let worker = spawn(stats.run());

    sender
      .send(StatsMessage::HookProcessed {
        hook: HookType::Subscribe,
        status: 403,
        duration: Duration::from_millis(2),
      })
      .unwrap();
    let (reply, snapshot) = oneshot::channel();
    sender.send(StatsMessage::Snapshot { reply }).unwrap();

    let exposition = snapshot.await.unwrap();
    assert!(exposition.contains(r#"mqtt_api_request_count{method="auth_on_subscribe",code="403"} 1"#));

    drop(sender);
    assert!(worker.await.unwrap().is_ok(), "worker should stop cleanly");
  }
}
