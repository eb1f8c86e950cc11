//! Data models module
//!
//! This module contains all data structures used throughout the application

pub mod membership;

// Re-export commonly used models
pub use membership::{
    classify, MembershipSnapshot, MembershipStatus, MembershipTransition, MembershipUpdateEvent,
};
