//! Module scanning: finds the marked structs of a module.

use tracing::{debug, trace};

use crate::error::Result;
use crate::key::TypeKey;
use crate::marker::{ServiceMarker, TypeKind};
use crate::metadata::MetadataProvider;
use crate::module::ModuleId;

/// A marked struct found while scanning, paired with its marker.
#[derive(Debug, Clone, Copy)]
pub struct Candidate {
    pub implementation: TypeKey,
    pub marker: ServiceMarker,
}

/// Lists the candidates of `module` in the provider's enumeration order.
///
/// Declarations without a marker are ignored. So are enums and unions,
/// even when a marker was attached to them.
///
/// # Errors
/// Propagates [`AutoWireError::ModuleEnumeration`](crate::error::AutoWireError::ModuleEnumeration)
/// from the provider; nothing is returned for the module in that case.
pub fn scan<P: MetadataProvider + ?Sized>(provider: &P, module: &ModuleId) -> Result<Vec<Candidate>> {
    let entries = provider.types(module)?;
    let mut candidates = Vec::with_capacity(entries.len());

    for entry in entries {
        let Some(marker) = entry.marker() else {
            continue;
        };
        let implementation = entry.implementation();

        if entry.kind() != TypeKind::Struct {
            debug!(
                module = %module,
                implementation = %implementation,
                kind = %entry.kind(),
                "Skipping marked non-struct declaration"
            );
            continue;
        }

        trace!(module = %module, implementation = %implementation, "Found marked type");
        candidates.push(Candidate {
            implementation,
            marker: *marker,
        });
    }

    Ok(candidates)
}
