//! Shared domain types for Parley.
//!
//! This crate contains the core domain types used across the Parley chat
//! service: sessions, messages, summaries, and their associated error types.
//!
//! Zero infrastructure dependencies -- only serde, uuid, chrono, thiserror.

pub mod chat;
pub mod error;
