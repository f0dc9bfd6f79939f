//! Infrastructure: port traits and their adapters.

pub mod actor_store;
pub mod chat;
pub mod clock;
pub mod config;
pub mod ports;
pub mod tables;
