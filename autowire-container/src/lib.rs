//! Core scanning and registration for autowire.

pub mod error;
pub mod key;
pub mod lifetime;
pub mod marker;
pub mod metadata;
pub mod module;
pub mod registrar;
pub mod registry;
pub mod resolver;
pub mod scanner;

pub use error::{AutoWireError, Result};
pub use key::TypeKey;
pub use lifetime::Lifetime;
pub use module::ModuleId;
pub use registrar::{AutoWireExt, AutoWirer, auto_wire, auto_wire_module};
pub use registry::{DuplicatePolicy, ServiceCollection, ServiceDescriptor, ServiceRegistry};

pub mod prelude {
    pub use crate::current_module;
    pub use crate::error::{AutoWireError, Result};
    pub use crate::key::TypeKey;
    pub use crate::lifetime::Lifetime;
    pub use crate::metadata::{InventoryProvider, MetadataProvider, StaticProvider};
    pub use crate::module::ModuleId;
    pub use crate::registrar::{AutoWireExt, AutoWirer, auto_wire, auto_wire_module};
    pub use crate::registry::{DuplicatePolicy, ServiceCollection, ServiceDescriptor, ServiceRegistry};
}
