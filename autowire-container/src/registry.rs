//! Service registries: where registrations end up.
//!
//! The registrar only needs one operation from a container, appending a
//! [`ServiceDescriptor`]. [`ServiceRegistry`] is that operation;
//! [`ServiceCollection`] is the bundled, ordered implementation.

use std::fmt;

use autowire_support::rendering::{TableRow, render_table};
use tracing::debug;

use crate::error::{AlreadyRegisteredError, AutoWireError, Result};
use crate::key::TypeKey;
use crate::lifetime::Lifetime;

/// One registration: `service` is provided by `implementation` with `lifetime`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ServiceDescriptor {
    pub service: TypeKey,
    pub implementation: TypeKey,
    pub lifetime: Lifetime,
}

impl ServiceDescriptor {
    pub fn new(service: TypeKey, implementation: TypeKey, lifetime: Lifetime) -> Self {
        Self {
            service,
            implementation,
            lifetime,
        }
    }
}

impl fmt::Display for ServiceDescriptor {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{} -> {} ({})",
            self.service.short_name(),
            self.implementation.short_name(),
            self.lifetime,
        )
    }
}

/// A container that accepts registrations.
///
/// Implement this for your own container to auto-wire into it directly.
pub trait ServiceRegistry {
    /// Appends one descriptor.
    ///
    /// # Errors
    /// Implementations may refuse a descriptor, e.g. under a no-duplicates
    /// policy. The refusal is passed through to the caller unchanged.
    fn add(&mut self, descriptor: ServiceDescriptor) -> Result<()>;
}

impl ServiceRegistry for Vec<ServiceDescriptor> {
    fn add(&mut self, descriptor: ServiceDescriptor) -> Result<()> {
        self.push(descriptor);
        Ok(())
    }
}

/// What a [`ServiceCollection`] does with a second registration for the
/// same service type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DuplicatePolicy {
    /// Keep every registration, in insertion order.
    #[default]
    Allow,
    /// Refuse it with [`AutoWireError::AlreadyRegistered`].
    Reject,
}

/// Ordered, append-only list of service registrations.
///
/// # Examples
/// ```
/// use autowire_container::key::TypeKey;
/// use autowire_container::lifetime::Lifetime;
/// use autowire_container::registry::{ServiceCollection, ServiceDescriptor, ServiceRegistry};
///
/// struct Clock;
///
/// let mut services = ServiceCollection::new();
/// let clock = TypeKey::of::<Clock>();
/// services.add(ServiceDescriptor::new(clock, clock, Lifetime::Singleton)).unwrap();
///
/// assert_eq!(services.len(), 1);
/// assert!(services.contains(&clock, &clock));
/// ```
#[derive(Debug, Default, Clone)]
pub struct ServiceCollection {
    descriptors: Vec<ServiceDescriptor>,
    duplicates: DuplicatePolicy,
}

impl ServiceCollection {
    /// Creates an empty collection that allows duplicates.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the duplicate policy for subsequent additions.
    pub fn with_duplicate_policy(mut self, policy: DuplicatePolicy) -> Self {
        self.duplicates = policy;
        self
    }

    pub fn duplicate_policy(&self) -> DuplicatePolicy {
        self.duplicates
    }

    /// Returns the number of registrations.
    pub fn len(&self) -> usize {
        self.descriptors.len()
    }

    /// Returns true if nothing is registered.
    pub fn is_empty(&self) -> bool {
        self.descriptors.is_empty()
    }

    /// Iterates registrations in insertion order.
    pub fn iter(&self) -> std::slice::Iter<'_, ServiceDescriptor> {
        self.descriptors.iter()
    }

    /// Registrations for one service type, in insertion order.
    pub fn descriptors_for(&self, service: &TypeKey) -> Vec<&ServiceDescriptor> {
        self.descriptors
            .iter()
            .filter(|d| &d.service == service)
            .collect()
    }

    /// Returns true if `service` is registered with `implementation`.
    pub fn contains(&self, service: &TypeKey, implementation: &TypeKey) -> bool {
        self.descriptors
            .iter()
            .any(|d| &d.service == service && &d.implementation == implementation)
    }
}

impl ServiceRegistry for ServiceCollection {
    fn add(&mut self, descriptor: ServiceDescriptor) -> Result<()> {
        if self.duplicates == DuplicatePolicy::Reject
            && self.descriptors.iter().any(|d| d.service == descriptor.service)
        {
            return Err(AutoWireError::AlreadyRegistered(AlreadyRegisteredError {
                service: descriptor.service,
                implementation: descriptor.implementation,
                lifetime: descriptor.lifetime,
            }));
        }

        debug!(
            service = %descriptor.service,
            implementation = %descriptor.implementation,
            lifetime = %descriptor.lifetime,
            "Registered service"
        );
        self.descriptors.push(descriptor);
        Ok(())
    }
}

impl<'a> IntoIterator for &'a ServiceCollection {
    type Item = &'a ServiceDescriptor;
    type IntoIter = std::slice::Iter<'a, ServiceDescriptor>;

    fn into_iter(self) -> Self::IntoIter {
        self.iter()
    }
}

impl fmt::Display for ServiceCollection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let rows: Vec<TableRow> = self
            .descriptors
            .iter()
            .map(|d| TableRow {
                lifetime: d.lifetime.to_string(),
                service: d.service.short_name(),
                implementation: d.implementation.short_name(),
            })
            .collect();
        f.write_str(&render_table(&rows))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Database;
    struct Replica;
    trait Connection {}

    fn descriptor<S: ?Sized + 'static, I: 'static>(lifetime: Lifetime) -> ServiceDescriptor {
        ServiceDescriptor::new(TypeKey::of::<S>(), TypeKey::of::<I>(), lifetime)
    }

    #[test]
    fn add_keeps_insertion_order() {
        let mut services = ServiceCollection::new();
        services.add(descriptor::<dyn Connection, Database>(Lifetime::Singleton)).unwrap();
        services.add(descriptor::<Replica, Replica>(Lifetime::Transient)).unwrap();

        let order: Vec<TypeKey> = services.iter().map(|d| d.implementation).collect();
        assert_eq!(order, vec![TypeKey::of::<Database>(), TypeKey::of::<Replica>()]);
    }

    #[test]
    fn duplicates_allowed_by_default() {
        let mut services = ServiceCollection::new();
        services.add(descriptor::<dyn Connection, Database>(Lifetime::Singleton)).unwrap();
        services.add(descriptor::<dyn Connection, Replica>(Lifetime::Singleton)).unwrap();

        assert_eq!(services.descriptors_for(&TypeKey::of::<dyn Connection>()).len(), 2);
    }

    #[test]
    fn duplicate_rejected_under_reject_policy() {
        let mut services = ServiceCollection::new().with_duplicate_policy(DuplicatePolicy::Reject);
        services.add(descriptor::<dyn Connection, Database>(Lifetime::Singleton)).unwrap();

        let err = services
            .add(descriptor::<dyn Connection, Replica>(Lifetime::Scoped))
            .unwrap_err();

        match err {
            AutoWireError::AlreadyRegistered(e) => {
                assert_eq!(e.implementation, TypeKey::of::<Replica>());
                assert_eq!(e.lifetime, Lifetime::Scoped);
            }
            other => panic!("Expected AlreadyRegistered, got: {other:?}"),
        }
        assert_eq!(services.len(), 1);
    }

    #[test]
    fn contains_matches_pairs() {
        let mut services = ServiceCollection::new();
        services.add(descriptor::<dyn Connection, Database>(Lifetime::Singleton)).unwrap();

        assert!(services.contains(&TypeKey::of::<dyn Connection>(), &TypeKey::of::<Database>()));
        assert!(!services.contains(&TypeKey::of::<dyn Connection>(), &TypeKey::of::<Replica>()));
    }

    #[test]
    fn vec_is_a_registry() {
        let mut services: Vec<ServiceDescriptor> = Vec::new();
        services.add(descriptor::<Database, Database>(Lifetime::Singleton)).unwrap();
        assert_eq!(services.len(), 1);
    }

    #[test]
    fn display_renders_table() {
        let mut services = ServiceCollection::new();
        services.add(descriptor::<dyn Connection, Database>(Lifetime::Singleton)).unwrap();
        services.add(descriptor::<Replica, Replica>(Lifetime::Scoped)).unwrap();

        let rendered = services.to_string();
        assert!(rendered.contains("[Singleton] dyn Connection -> Database"));
        assert!(rendered.contains("[Scoped]"));
        assert!(rendered.contains("Replica"));
    }

    #[test]
    fn descriptor_display() {
        let d = descriptor::<dyn Connection, Database>(Lifetime::Transient);
        assert_eq!(d.to_string(), "dyn Connection -> Database (Transient)");
    }
}
