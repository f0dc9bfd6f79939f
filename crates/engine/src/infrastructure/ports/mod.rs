//! Port traits for infrastructure boundaries.
//!
//! These are the ONLY abstractions in the engine. Everything else is concrete types.
//! Ports exist for:
//! - Actor snapshots (could swap the JSON file for the host's document store)
//! - Chat output (could swap the console for the host's message log)
//! - Clock/Random (for testing)

mod error;
mod external;
mod repos;
mod testing;

pub use error::{ChatError, RepoError};
pub use external::{ChatEntry, ChatPort};
pub use repos::ActorRepo;
pub use testing::{ClockPort, RandomPort};

#[cfg(test)]
pub use external::MockChatPort;
#[cfg(test)]
pub use repos::MockActorRepo;
#[cfg(test)]
pub use testing::MockRandomPort;
