//! Error types for scanning and registration.
//!
//! Every failure is fail-fast: the registrar stops at the first error and
//! hands it to the caller, who should treat it as a start-up abort.

use std::fmt;

use crate::key::TypeKey;
use crate::lifetime::Lifetime;
use crate::module::ModuleId;

/// Main error type for all autowire operations.
///
/// An explicit service type the implementation does not actually satisfy is
/// not an error here. Explicit service types are trusted as declared; a
/// mismatch surfaces later, inside the consuming container.
#[derive(Debug, thiserror::Error)]
pub enum AutoWireError {
    /// The metadata provider could not list the types of a module.
    ///
    /// No candidates are produced for that module.
    #[error("Failed to enumerate types of module `{module}`: {source}")]
    ModuleEnumeration {
        module: ModuleId,
        #[source]
        source: Box<dyn std::error::Error + Send + Sync>,
    },

    /// The registry refused a descriptor.
    ///
    /// Descriptors added before the refusal stay registered.
    #[error("{}", .0)]
    AlreadyRegistered(AlreadyRegisteredError),
}

/// A type carries the service marker more than once, so its
/// registration data is ambiguous.
#[derive(Debug)]
pub struct AmbiguousMarkerError {
    pub implementation: TypeKey,
    pub markers: usize,
}

impl fmt::Display for AmbiguousMarkerError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} carries {} service markers",
            self.implementation, self.markers,
        )?;
        write!(f, "\n  Hint: Keep a single #[auto_service] attribute per type")
    }
}

impl std::error::Error for AmbiguousMarkerError {}

/// Error when the registry rejects a duplicate service registration.
#[derive(Debug)]
pub struct AlreadyRegisteredError {
    pub service: TypeKey,
    pub implementation: TypeKey,
    pub lifetime: Lifetime,
}

impl fmt::Display for AlreadyRegisteredError {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "Service already registered: {} (rejected {} as {})",
            self.service, self.implementation, self.lifetime,
        )?;
        write!(
            f,
            "\n  Hint: Use DuplicatePolicy::Allow to keep several registrations per service"
        )
    }
}

/// Convenient Result type for autowire operations.
pub type Result<T> = std::result::Result<T, AutoWireError>;

#[cfg(test)]
mod tests {
    use super::*;

    struct Clock;
    trait Time {}

    #[test]
    fn module_enumeration_error_display() {
        let err = AutoWireError::ModuleEnumeration {
            module: ModuleId::new("billing"),
            source: Box::new(AmbiguousMarkerError {
                implementation: TypeKey::of::<Clock>(),
                markers: 2,
            }),
        };

        let msg = format!("{err}");
        assert!(msg.contains("`billing`"));
        assert!(msg.contains("Clock"));
        assert!(msg.contains("2 service markers"));
    }

    #[test]
    fn already_registered_error_display() {
        let err = AutoWireError::AlreadyRegistered(AlreadyRegisteredError {
            service: TypeKey::of::<dyn Time>(),
            implementation: TypeKey::of::<Clock>(),
            lifetime: Lifetime::Scoped,
        });

        let msg = format!("{err}");
        assert!(msg.contains("already registered"));
        assert!(msg.contains("Time"));
        assert!(msg.contains("Scoped"));
    }

    #[test]
    fn module_enumeration_keeps_source() {
        use std::error::Error as _;

        let err = AutoWireError::ModuleEnumeration {
            module: ModuleId::new("billing"),
            source: "disk on fire".into(),
        };
        assert_eq!(err.source().map(|s| s.to_string()), Some("disk on fire".to_string()));
    }
}
