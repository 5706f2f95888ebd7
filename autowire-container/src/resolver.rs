//! Service-type resolution: which types a candidate is registered under.

use tracing::trace;

use crate::key::TypeKey;
use crate::metadata::MetadataProvider;
use crate::scanner::Candidate;

/// Returns the service types for `candidate`. Never empty.
///
/// Exactly one rule applies, in this order:
/// 1. the marker's explicit service types, verbatim;
/// 2. every abstraction the implementation declares conformance to;
/// 3. the implementation itself.
///
/// Explicit service types are not checked against the implementation.
pub fn resolve_service_types<P: MetadataProvider + ?Sized>(
    provider: &P,
    candidate: &Candidate,
) -> Vec<TypeKey> {
    if candidate.marker.has_service_types() {
        trace!(implementation = %candidate.implementation, "Using explicit service types");
        return candidate.marker.service_types();
    }

    let conformances = provider.conformances(&candidate.implementation);
    if !conformances.is_empty() {
        trace!(implementation = %candidate.implementation, "Using declared conformances");
        return conformances;
    }

    trace!(implementation = %candidate.implementation, "Registering against itself");
    vec![candidate.implementation]
}
