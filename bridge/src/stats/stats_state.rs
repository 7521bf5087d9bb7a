use crate::api::hooks::HookType;
use std::{collections::BTreeMap, fmt::Write, time::Duration};

/// Request counters and latencies per hook.
pub struct StatsState {
  requests: BTreeMap<(HookType, u16), u64>,
  latency: BTreeMap<HookType, (f64, u64)>,
}

impl StatsState {
  const REQUEST_COUNT_NAME: &'static str = "mqtt_api_request_count";
  const REQUEST_LATENCY_NAME: &'static str = "mqtt_api_request_latency_seconds";

  pub fn new() -> StatsState {
    StatsState {
      requests: BTreeMap::new(),
      latency: BTreeMap::new(),
    }
  }

  pub fn on_hook_processed(&mut self, hook: HookType, status: u16, duration: Duration) {
    *self.requests.entry((hook, status)).or_insert(0) += 1;

    let latency = self.latency.entry(hook).or_insert((0f64, 0));
    latency.0 += duration.as_secs_f64();
    latency.1 += 1;
  }

  /// Prometheus text exposition format.
  pub fn render(&self) -> String {
    let mut out = String::new();

    let _ = writeln!(
      out,
      "# HELP {} Number of hook requests received.",
      Self::REQUEST_COUNT_NAME
    );
    let _ = writeln!(out, "# TYPE {} counter", Self::REQUEST_COUNT_NAME);
    for ((hook, status), count) in &self.requests {
      let _ = writeln!(
        out,
        "{}{{method=\"{}\",code=\"{}\"}} {}",
        Self::REQUEST_COUNT_NAME,
        hook.name(),
        status,
        count
      );
    }

    let _ = writeln!(
      out,
      "# HELP {} Total duration of hook requests in seconds.",
      Self::REQUEST_LATENCY_NAME
    );
    let _ = writeln!(out, "# TYPE {} summary", Self::REQUEST_LATENCY_NAME);
    for (hook, (sum, count)) in &self.latency {
      let _ = writeln!(
        out,
        "{}_sum{{method=\"{}\"}} {}",
        Self::REQUEST_LATENCY_NAME,
        hook.name(),
        sum
      );
      let _ = writeln!(
        out,
        "{}_count{{method=\"{}\"}} {}",
        Self::REQUEST_LATENCY_NAME,
        hook.name(),
        count
      );
    }

    out
  }
}
