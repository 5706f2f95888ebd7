//! Service markers and the static metadata they travel in.
//!
//! `#[auto_service]` turns a struct declaration into a [`TypeEntry`] and
//! `#[service_impl]` turns a trait impl into a [`Conformance`]. Both are
//! submitted to [`inventory`] at link time and read back by
//! [`InventoryProvider`](crate::metadata::InventoryProvider).
//!
//! Everything here is `const`-constructible so it can live in a `static`.
//! Types are referenced through `fn() -> TypeKey` pointers because
//! [`TypeId`](std::any::TypeId) cannot be computed in a const context.

use std::fmt;

use crate::key::TypeKey;
use crate::lifetime::Lifetime;
use crate::module::ModuleId;

/// Registration data attached to a type.
///
/// # Examples
/// ```
/// use autowire_container::key::TypeKey;
/// use autowire_container::lifetime::Lifetime;
/// use autowire_container::marker::ServiceMarker;
///
/// trait Greeter {}
///
/// const GREETER: &[fn() -> TypeKey] = &[TypeKey::of::<dyn Greeter>];
/// const MARKER: ServiceMarker = ServiceMarker::new()
///     .with_service_types(GREETER)
///     .with_lifetime(Lifetime::Scoped);
///
/// assert_eq!(MARKER.lifetime(), Lifetime::Scoped);
/// assert_eq!(MARKER.service_types(), vec![TypeKey::of::<dyn Greeter>()]);
/// ```
#[derive(Debug, Clone, Copy)]
pub struct ServiceMarker {
    service_types: &'static [fn() -> TypeKey],
    lifetime: Lifetime,
}

impl ServiceMarker {
    /// A marker with no explicit service types and a singleton lifetime.
    pub const fn new() -> Self {
        Self {
            service_types: &[],
            lifetime: Lifetime::Singleton,
        }
    }

    /// Sets the explicit service types, in registration order.
    pub const fn with_service_types(self, service_types: &'static [fn() -> TypeKey]) -> Self {
        Self { service_types, ..self }
    }

    /// Sets the lifetime.
    pub const fn with_lifetime(self, lifetime: Lifetime) -> Self {
        Self { lifetime, ..self }
    }

    /// Explicit service types, in declaration order.
    pub fn service_types(&self) -> Vec<TypeKey> {
        self.service_types.iter().map(|key| key()).collect()
    }

    /// Returns `true` if the marker names its service types explicitly.
    pub fn has_service_types(&self) -> bool {
        !self.service_types.is_empty()
    }

    pub fn lifetime(&self) -> Lifetime {
        self.lifetime
    }
}

impl Default for ServiceMarker {
    fn default() -> Self {
        Self::new()
    }
}

/// The declaration kind of a type.
///
/// Only [`TypeKind::Struct`] declarations are registration candidates.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TypeKind {
    Struct,
    Enum,
    Union,
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            TypeKind::Struct => write!(f, "struct"),
            TypeKind::Enum => write!(f, "enum"),
            TypeKind::Union => write!(f, "union"),
        }
    }
}

/// Metadata for one type declaration.
pub struct TypeEntry {
    module_path: &'static str,
    kind: TypeKind,
    implementation: fn() -> TypeKey,
    marker: Option<ServiceMarker>,
}

impl TypeEntry {
    /// A declaration carrying a service marker.
    pub const fn marked(
        module_path: &'static str,
        kind: TypeKind,
        implementation: fn() -> TypeKey,
        marker: ServiceMarker,
    ) -> Self {
        Self {
            module_path,
            kind,
            implementation,
            marker: Some(marker),
        }
    }

    /// A declaration without a marker.
    pub const fn unmarked(
        module_path: &'static str,
        kind: TypeKind,
        implementation: fn() -> TypeKey,
    ) -> Self {
        Self {
            module_path,
            kind,
            implementation,
            marker: None,
        }
    }

    /// The crate that declares this type.
    pub fn module(&self) -> ModuleId {
        ModuleId::from_module_path(self.module_path)
    }

    pub fn module_path(&self) -> &'static str {
        self.module_path
    }

    pub fn kind(&self) -> TypeKind {
        self.kind
    }

    pub fn implementation(&self) -> TypeKey {
        (self.implementation)()
    }

    pub fn marker(&self) -> Option<&ServiceMarker> {
        self.marker.as_ref()
    }
}

impl fmt::Debug for TypeEntry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("TypeEntry")
            .field("module_path", &self.module_path)
            .field("kind", &self.kind)
            .field("implementation", &self.implementation())
            .field("marker", &self.marker)
            .finish()
    }
}

/// Declares that `implementation` conforms to the abstraction `abstraction`.
///
/// The usual abstraction is a trait object type such as `dyn Greeter`.
pub struct Conformance {
    implementation: fn() -> TypeKey,
    abstraction: fn() -> TypeKey,
}

impl Conformance {
    pub const fn new(implementation: fn() -> TypeKey, abstraction: fn() -> TypeKey) -> Self {
        Self {
            implementation,
            abstraction,
        }
    }

    pub fn implementation(&self) -> TypeKey {
        (self.implementation)()
    }

    pub fn abstraction(&self) -> TypeKey {
        (self.abstraction)()
    }
}

impl fmt::Debug for Conformance {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Conformance")
            .field("implementation", &self.implementation())
            .field("abstraction", &self.abstraction())
            .finish()
    }
}

inventory::collect!(TypeEntry);
inventory::collect!(Conformance);
