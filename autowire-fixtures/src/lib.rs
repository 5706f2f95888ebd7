//! Marked types that live in a crate of their own.
//!
//! The autowire integration tests use this crate as the "other module"
//! when checking cross-crate discovery. Keep exactly one marked struct here;
//! the single-module tests count on it.

use autowire::auto_service;

#[auto_service]
pub struct ExternalType;

/// Carries a marker but is never registered: only structs are.
#[auto_service]
pub enum ExternalMode {
    Fast,
    Safe,
}

pub struct UnmarkedType;
