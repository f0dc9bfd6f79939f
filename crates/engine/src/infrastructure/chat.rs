//! Console chat sink.

use std::io::Write;
use std::sync::Mutex;

use async_trait::async_trait;

use crate::infrastructure::ports::{ChatEntry, ChatError, ChatPort};

/// Writes each entry as one pretty-printed JSON document.
pub struct ConsoleChat<W: Write + Send> {
    out: Mutex<W>,
}

impl ConsoleChat<std::io::Stdout> {
    pub fn stdout() -> Self {
        Self::new(std::io::stdout())
    }
}

impl<W: Write + Send> ConsoleChat<W> {
    pub fn new(out: W) -> Self {
        Self {
            out: Mutex::new(out),
        }
    }

    pub fn into_inner(self) -> Result<W, ChatError> {
        self.out.into_inner().map_err(|_| ChatError::Unavailable)
    }
}

#[async_trait]
impl<W: Write + Send> ChatPort for ConsoleChat<W> {
    async fn post(&self, entry: &ChatEntry) -> Result<(), ChatError> {
        let json = serde_json::to_string_pretty(entry)
            .map_err(|e| ChatError::DeliveryFailed(e.to_string()))?;
        let mut out = self.out.lock().map_err(|_| ChatError::Unavailable)?;
        writeln!(out, "{}", json).map_err(|e| ChatError::DeliveryFailed(e.to_string()))?;
        out.flush()
            .map_err(|e| ChatError::DeliveryFailed(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use arlenor_domain::{ActorId, ReferenceTables, RollMessage, RuleRevision};
    use chrono::{TimeZone, Utc};

    fn entry() -> ChatEntry {
        let result = ReferenceTables::builtin()
            .result("RES_COUT")
            .unwrap()
            .clone();
        ChatEntry {
            sent_at: Utc.with_ymd_and_hms(2024, 5, 1, 20, 0, 0).unwrap(),
            revision: RuleRevision::SuccessCount,
            message: RollMessage {
                actor_id: ActorId::new(),
                speaker: "Aldric".into(),
                title: "Escrime (hab)".into(),
                image: None,
                flavor: "Lance Escrime (hab)".into(),
                dice: vec![4, 2],
                extra_die: None,
                total: 8,
                result,
                annotation: Some("Jet réussi si action : Simple.".into()),
            },
        }
    }

    #[tokio::test]
    async fn writes_the_entry_as_json() {
        let chat = ConsoleChat::new(Vec::new());
        chat.post(&entry()).await.unwrap();

        let written = String::from_utf8(chat.into_inner().unwrap()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&written).unwrap();
        assert_eq!(value["speaker"], "Aldric");
        assert_eq!(value["revision"], "success_count");
        assert_eq!(value["result"]["code"], "RES_COUT");
        assert_eq!(value["dice"], serde_json::json!([4, 2]));
    }
}
