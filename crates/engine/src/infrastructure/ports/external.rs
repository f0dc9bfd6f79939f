//! Outbound ports to host services.

use arlenor_domain::{RollMessage, RuleRevision};
use async_trait::async_trait;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::error::ChatError;

/// What actually reaches the chat log: the roll message plus delivery metadata.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ChatEntry {
    pub sent_at: DateTime<Utc>,
    pub revision: RuleRevision,
    #[serde(flatten)]
    pub message: RollMessage,
}

/// Host chat log. Delivery is fire-and-forget from the engine's side.
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait ChatPort: Send + Sync {
    async fn post(&self, entry: &ChatEntry) -> Result<(), ChatError>;
}
