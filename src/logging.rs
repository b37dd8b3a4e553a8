//! One JSON object per line: `level`, `event`, `message`, `timestamp_ms`
//! and optional `metadata`. Errors go to stderr, everything else to stdout.

use std::sync::atomic::{AtomicBool, Ordering};
use std::time::{SystemTime, UNIX_EPOCH};

use serde::Serialize;
use serde_json::Value;

static SILENT: AtomicBool = AtomicBool::new(false);

#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
enum Level {
    Info,
    Warn,
    Error,
}

#[derive(Serialize)]
struct LogLine<'a> {
    level: Level,
    event: &'a str,
    message: &'a str,
    timestamp_ms: u128,
    #[serde(skip_serializing_if = "Option::is_none")]
    metadata: Option<&'a Value>,
}

/// Suppress all output; benches and tests that stream many events use this.
pub fn set_silent(silent: bool) {
    SILENT.store(silent, Ordering::Relaxed);
}

pub fn info(event: &str, message: &str, metadata: Value) {
    log(Level::Info, event, message, Some(&metadata));
}

pub fn warn(event: &str, message: &str, metadata: Value) {
    log(Level::Warn, event, message, Some(&metadata));
}

pub fn error(event: &str, message: &str, metadata: Value) {
    log(Level::Error, event, message, Some(&metadata));
}

fn log(level: Level, event: &str, message: &str, metadata: Option<&Value>) {
    if SILENT.load(Ordering::Relaxed) {
        return;
    }

    match render(level, event, message, metadata) {
        Ok(line) if level == Level::Error => eprintln!("{line}"),
        Ok(line) => println!("{line}"),
        Err(err) => eprintln!(
            "{{\"level\":\"error\",\"event\":\"logging_failure\",\"message\":\"failed to serialise log\",\"error\":\"{err}\"}}"
        ),
    }
}

fn render(
    level: Level,
    event: &str,
    message: &str,
    metadata: Option<&Value>,
) -> serde_json::Result<String> {
    serde_json::to_string(&LogLine {
        level,
        event,
        message,
        timestamp_ms: SystemTime::now()
            .duration_since(UNIX_EPOCH)
            .map(|elapsed| elapsed.as_millis())
            .unwrap_or_default(),
        metadata,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn renders_single_json_line() {
        let meta = json!({ "id": "AAPL" });
        let line = render(Level::Warn, "ticker.update_failed", "rejected", Some(&meta)).unwrap();
        let parsed: Value = serde_json::from_str(&line).unwrap();

        assert!(!line.contains('\n'));
        assert_eq!(parsed["level"], "warn");
        assert_eq!(parsed["event"], "ticker.update_failed");
        assert_eq!(parsed["metadata"]["id"], "AAPL");
        assert!(parsed["timestamp_ms"].as_u64().is_some());
    }

    #[test]
    fn metadata_is_omitted_when_absent() {
        let line = render(Level::Info, "server.stop", "stopped", None).unwrap();
        let parsed: Value = serde_json::from_str(&line).unwrap();
        assert!(parsed.get("metadata").is_none());
    }
}
