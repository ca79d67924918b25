//! Background Tasks Module
//!
//! Contains the tasks that run alongside the coordinator.
//!
//! # Tasks
//! - Expiry: one-shot timer per entry that enqueues its eviction

mod expiry;

pub(crate) use expiry::{ExpiryScheduler, ExpiryTimer};
