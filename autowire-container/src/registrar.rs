//! # The registrar: scan, resolve, register
//!
//! Runs the auto-wiring pipeline for one module or for every loaded module:
//!
//! ```text
//! MetadataProvider ──scan()──> Candidate ──resolve_service_types()──> [TypeKey]
//!                                                                        │
//!                                                      register() one descriptor each
//!                                                                        ▼
//!                                                                 ServiceRegistry
//! ```
//!
//! # Examples
//! ```rust
//! use autowire_container::prelude::*;
//!
//! let mut services = ServiceCollection::new();
//! services.auto_wire().expect("auto-wiring failed");
//! ```
//!
//! Running the pipeline twice registers everything twice; the registrar
//! never looks at what the registry already holds.

use tracing::{debug, info, instrument};

use crate::error::Result;
use crate::key::TypeKey;
use crate::lifetime::Lifetime;
use crate::metadata::{InventoryProvider, MetadataProvider};
use crate::module::ModuleId;
use crate::registry::{ServiceDescriptor, ServiceRegistry};
use crate::resolver::resolve_service_types;
use crate::scanner::scan;

/// Adds one descriptor per service type, in order.
///
/// # Errors
/// Stops at the first refused descriptor. Descriptors already added for
/// `implementation` stay in the registry.
pub fn register<R: ServiceRegistry + ?Sized>(
    registry: &mut R,
    implementation: TypeKey,
    service_types: &[TypeKey],
    lifetime: Lifetime,
) -> Result<()> {
    for service in service_types {
        registry.add(ServiceDescriptor::new(*service, implementation, lifetime))?;
    }
    Ok(())
}

/// Auto-wires registries from the metadata of a [`MetadataProvider`].
///
/// The default provider is [`InventoryProvider`], i.e. everything
/// linked into the binary.
#[derive(Debug, Clone, Default)]
pub struct AutoWirer<P = InventoryProvider> {
    provider: P,
}

impl<P: MetadataProvider> AutoWirer<P> {
    pub fn new(provider: P) -> Self {
        Self { provider }
    }

    pub fn provider(&self) -> &P {
        &self.provider
    }

    /// Registers the marked types of every loaded module.
    ///
    /// Equivalent to [`wire_module`](Self::wire_module) for each module the
    /// provider reports. The first failing module aborts the run.
    #[instrument(skip_all, name = "auto_wire")]
    pub fn wire_all<'r, R: ServiceRegistry + ?Sized>(&self, registry: &'r mut R) -> Result<&'r mut R> {
        let modules = self.provider.modules();
        info!(modules = modules.len(), "Auto-wiring all loaded modules");

        for module in &modules {
            self.wire_module(registry, module)?;
        }

        Ok(registry)
    }

    /// Registers the marked types of `module` only.
    #[instrument(skip(self, registry), name = "auto_wire_module")]
    pub fn wire_module<'r, R: ServiceRegistry + ?Sized>(
        &self,
        registry: &'r mut R,
        module: &ModuleId,
    ) -> Result<&'r mut R> {
        let candidates = scan(&self.provider, module)?;
        let mut registered = 0usize;

        for candidate in &candidates {
            let service_types = resolve_service_types(&self.provider, candidate);
            let lifetime = candidate.marker.lifetime();

            debug!(
                implementation = %candidate.implementation,
                services = service_types.len(),
                lifetime = %lifetime,
                "Wiring service"
            );
            register(registry, candidate.implementation, &service_types, lifetime)?;
            registered += service_types.len();
        }

        info!(
            module = %module,
            types = candidates.len(),
            registrations = registered,
            "Module wired"
        );
        Ok(registry)
    }
}

/// Registers the marked types of every module linked into the binary.
pub fn auto_wire<R: ServiceRegistry + ?Sized>(registry: &mut R) -> Result<&mut R> {
    AutoWirer::<InventoryProvider>::default().wire_all(registry)
}

/// Registers the marked types of `module` linked into the binary.
pub fn auto_wire_module<'r, R: ServiceRegistry + ?Sized>(
    registry: &'r mut R,
    module: &ModuleId,
) -> Result<&'r mut R> {
    AutoWirer::<InventoryProvider>::default().wire_module(registry, module)
}

/// Method-style auto-wiring for every [`ServiceRegistry`].
pub trait AutoWireExt: ServiceRegistry {
    /// See [`auto_wire`].
    fn auto_wire(&mut self) -> Result<&mut Self> {
        auto_wire(self)
    }

    /// See [`auto_wire_module`].
    fn auto_wire_module(&mut self, module: &ModuleId) -> Result<&mut Self> {
        auto_wire_module(self, module)
    }

    /// Auto-wires every module known to `wirer`'s provider.
    fn auto_wire_with<P: MetadataProvider>(&mut self, wirer: &AutoWirer<P>) -> Result<&mut Self> {
        wirer.wire_all(self)
    }
}

impl<R: ServiceRegistry + ?Sized> AutoWireExt for R {}
