//! Type identity keys.
//!
//! [`TypeKey`] identifies a service or implementation type. It pairs a
//! [`TypeId`] with the type's name so registrations stay readable in logs
//! and error messages.

use std::any::{TypeId, type_name};
use std::fmt;
use std::hash::{Hash, Hasher};

use autowire_support::rendering::shorten_type_name;

/// Identifies a type taking part in a registration.
///
/// Works for sized types and for trait objects, so both the concrete
/// implementation and the abstraction it is registered under can be keyed.
///
/// # Examples
/// ```
/// use autowire_container::key::TypeKey;
///
/// trait Greeter {}
///
/// let key = TypeKey::of::<String>();
/// assert_eq!(key.type_name(), "alloc::string::String");
/// assert_eq!(key.short_name(), "String");
///
/// let abstraction = TypeKey::of::<dyn Greeter>();
/// assert_ne!(abstraction, key);
/// ```
#[derive(Clone, Copy)]
pub struct TypeKey {
    type_id: TypeId,
    type_name: &'static str,
}

impl TypeKey {
    /// Creates a key for type `T`.
    ///
    /// Also usable as a `fn() -> TypeKey` pointer inside `static` marker
    /// data, which is how the attribute macros refer to types.
    #[inline]
    pub fn of<T: ?Sized + 'static>() -> Self {
        Self {
            type_id: TypeId::of::<T>(),
            type_name: type_name::<T>(),
        }
    }

    /// Returns the [`TypeId`] of this type.
    #[inline]
    pub fn type_id(&self) -> TypeId {
        self.type_id
    }

    /// Returns the fully qualified type name.
    #[inline]
    pub fn type_name(&self) -> &'static str {
        self.type_name
    }

    /// Returns the type name with module paths stripped.
    pub fn short_name(&self) -> String {
        shorten_type_name(self.type_name)
    }
}

// Identity is the TypeId alone; names are for display only.
impl PartialEq for TypeKey {
    fn eq(&self, other: &Self) -> bool {
        self.type_id == other.type_id
    }
}

impl Eq for TypeKey {}

impl Hash for TypeKey {
    fn hash<H: Hasher>(&self, state: &mut H) {
        self.type_id.hash(state);
    }
}

impl fmt::Debug for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "TypeKey({})", self.type_name)
    }
}

impl fmt::Display for TypeKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.type_name)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    struct Database;
    trait Repository {}

    #[test]
    fn key_of_type() {
        let key = TypeKey::of::<Database>();
        assert!(key.type_name().contains("Database"));
        assert_eq!(key.short_name(), "Database");
    }

    #[test]
    fn key_equality_same_type() {
        assert_eq!(TypeKey::of::<String>(), TypeKey::of::<String>());
    }

    #[test]
    fn key_inequality_different_types() {
        assert_ne!(TypeKey::of::<String>(), TypeKey::of::<i32>());
    }

    #[test]
    fn trait_object_differs_from_implementor() {
        struct Postgres;
        impl Repository for Postgres {}

        assert_ne!(TypeKey::of::<dyn Repository>(), TypeKey::of::<Postgres>());
        assert_eq!(TypeKey::of::<dyn Repository>().short_name(), "dyn Repository");
    }

    #[test]
    fn key_usable_as_fn_pointer() {
        static KEYS: &[fn() -> TypeKey] = &[TypeKey::of::<Database>, TypeKey::of::<dyn Repository>];
        let keys: Vec<TypeKey> = KEYS.iter().map(|f| f()).collect();
        assert_eq!(keys, vec![TypeKey::of::<Database>(), TypeKey::of::<dyn Repository>()]);
    }

    #[test]
    fn key_in_hashmap() {
        use std::collections::HashMap;
        let mut map = HashMap::new();
        map.insert(TypeKey::of::<String>(), "string");
        map.insert(TypeKey::of::<i32>(), "i32");
        assert_eq!(map.get(&TypeKey::of::<String>()), Some(&"string"));
        assert_eq!(map.get(&TypeKey::of::<bool>()), None);
    }
}
