//! Test helpers module
//!
//! Shared utilities for the FarewellBuddy integration tests: a mock Telegram
//! Bot API server, a recording direct message sender and event builders.

#![allow(dead_code)]

pub mod telegram_mock;
pub mod fake_sender;
pub mod test_data;

pub use telegram_mock::*;
pub use fake_sender::*;
pub use test_data::*;
