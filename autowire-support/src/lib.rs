//! # Autowire Support
//!
//! Shared rendering helpers for the autowire crates:
//! - Short, readable type names for logs and error messages
//! - Plain-text tables of service registrations

pub mod rendering;
