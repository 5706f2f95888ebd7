//! # autowire — convention-based service registration
//!
//! Mark structs with [`auto_service`], declare trait conformance with
//! [`service_impl`], and let [`auto_wire`] register everything into a
//! container at start-up.
//!
//! ```rust
//! use autowire::prelude::*;
//! use autowire::{auto_service, service_impl};
//!
//! trait Greeter {
//!     fn greet(&self) -> String;
//! }
//!
//! #[auto_service]
//! struct EnglishGreeter;
//!
//! #[service_impl]
//! impl Greeter for EnglishGreeter {
//!     fn greet(&self) -> String {
//!         "Hello".to_string()
//!     }
//! }
//!
//! #[auto_service(lifetime = "scoped")]
//! struct RequestLog;
//!
//! let mut services = ServiceCollection::new();
//! services.auto_wire().expect("auto-wiring failed");
//!
//! assert!(services.contains(&TypeKey::of::<dyn Greeter>(), &TypeKey::of::<EnglishGreeter>()));
//! assert_eq!(
//!     services.descriptors_for(&TypeKey::of::<RequestLog>())[0].lifetime,
//!     Lifetime::Scoped,
//! );
//! ```
//!
//! Resolution of instances is up to the container the descriptors are
//! handed to; autowire only decides what gets registered and how.

pub use autowire_container::*;
pub use autowire_macros::{auto_service, service_impl};
pub use autowire_support::*;

/// Items referenced by macro expansions. Not public API.
#[doc(hidden)]
pub mod __private {
    pub use autowire_container::key::TypeKey;
    pub use autowire_container::lifetime::Lifetime;
    pub use autowire_container::marker::{Conformance, ServiceMarker, TypeEntry, TypeKind};
    pub use inventory;
}
