//! Metadata providers: where the scanner learns about types.
//!
//! A [`MetadataProvider`] answers three read-only questions:
//! which modules are loaded, which types a module declares, and which
//! abstractions a type conforms to.
//!
//! [`InventoryProvider`] answers them from the entries that
//! `#[auto_service]` and `#[service_impl]` submit at link time.
//! [`StaticProvider`] answers them from a hand-assembled list.

use std::collections::HashMap;

use once_cell::sync::Lazy;
use tracing::debug;

use crate::error::{AmbiguousMarkerError, AutoWireError, Result};
use crate::key::TypeKey;
use crate::marker::{Conformance, TypeEntry};
use crate::module::ModuleId;

/// Read-only view of the type metadata available to the scanner.
pub trait MetadataProvider {
    /// Every loaded module, in first-seen order.
    fn modules(&self) -> Vec<ModuleId>;

    /// Every type declaration of `module`.
    ///
    /// # Errors
    /// Returns [`AutoWireError::ModuleEnumeration`] if the module's
    /// declarations cannot be listed.
    fn types(&self, module: &ModuleId) -> Result<Vec<&TypeEntry>>;

    /// The abstractions `implementation` declares conformance to.
    fn conformances(&self, implementation: &TypeKey) -> Vec<TypeKey>;
}

/// Groups entries by module, keeping first-seen module order.
fn group_by_module<'a>(
    entries: impl IntoIterator<Item = &'a TypeEntry>,
) -> (Vec<ModuleId>, HashMap<ModuleId, Vec<&'a TypeEntry>>) {
    let mut order = Vec::new();
    let mut grouped: HashMap<ModuleId, Vec<&'a TypeEntry>> = HashMap::new();

    for entry in entries {
        let module = entry.module();
        if !grouped.contains_key(&module) {
            order.push(module.clone());
        }
        grouped.entry(module).or_default().push(entry);
    }

    (order, grouped)
}

/// Fails if any type in `entries` carries more than one marker.
fn ensure_unambiguous(module: &ModuleId, entries: &[&TypeEntry]) -> Result<()> {
    let mut counts: HashMap<TypeKey, usize> = HashMap::new();
    for entry in entries.iter().filter(|e| e.marker().is_some()) {
        *counts.entry(entry.implementation()).or_default() += 1;
    }

    match counts.into_iter().find(|(_, n)| *n > 1) {
        Some((implementation, markers)) => Err(AutoWireError::ModuleEnumeration {
            module: module.clone(),
            source: Box::new(AmbiguousMarkerError {
                implementation,
                markers,
            }),
        }),
        None => Ok(()),
    }
}

// ═══════════════════════════════════════════
// InventoryProvider
// ═══════════════════════════════════════════

struct InventoryIndex {
    modules: Vec<ModuleId>,
    types: HashMap<ModuleId, Vec<&'static TypeEntry>>,
    conformances: HashMap<TypeKey, Vec<TypeKey>>,
}

impl InventoryIndex {
    fn collect() -> Self {
        let (modules, types) = group_by_module(inventory::iter::<TypeEntry>);

        let mut conformances: HashMap<TypeKey, Vec<TypeKey>> = HashMap::new();
        for conformance in inventory::iter::<Conformance> {
            conformances
                .entry(conformance.implementation())
                .or_default()
                .push(conformance.abstraction());
        }

        debug!(
            modules = modules.len(),
            types = types.values().map(Vec::len).sum::<usize>(),
            conformances = conformances.values().map(Vec::len).sum::<usize>(),
            "Indexed linked service metadata"
        );

        Self {
            modules,
            types,
            conformances,
        }
    }
}

static INDEX: Lazy<InventoryIndex> = Lazy::new(InventoryIndex::collect);

/// Provider backed by the metadata linked into the current binary.
///
/// A crate only counts as loaded if it is actually linked. A dependency that
/// is never referenced from code may be dropped by the linker together with
/// its entries.
#[derive(Debug, Clone, Copy, Default)]
pub struct InventoryProvider;

impl MetadataProvider for InventoryProvider {
    fn modules(&self) -> Vec<ModuleId> {
        INDEX.modules.clone()
    }

    fn types(&self, module: &ModuleId) -> Result<Vec<&TypeEntry>> {
        let entries: Vec<&TypeEntry> = match INDEX.types.get(module) {
            Some(entries) => entries.iter().map(|e| &**e).collect(),
            None => {
                debug!(module = %module, "Module has no linked service metadata");
                Vec::new()
            }
        };
        ensure_unambiguous(module, &entries)?;
        Ok(entries)
    }

    fn conformances(&self, implementation: &TypeKey) -> Vec<TypeKey> {
        INDEX
            .conformances
            .get(implementation)
            .cloned()
            .unwrap_or_default()
    }
}

// ═══════════════════════════════════════════
// StaticProvider
// ═══════════════════════════════════════════

/// Provider over an explicit list of declarations.
///
/// Useful when the set of scanned types should not depend on what the
/// linker kept, and for tests.
///
/// # Examples
/// ```
/// use autowire_container::key::TypeKey;
/// use autowire_container::marker::{ServiceMarker, TypeEntry, TypeKind};
/// use autowire_container::metadata::{MetadataProvider, StaticProvider};
/// use autowire_container::module::ModuleId;
///
/// struct Clock;
///
/// let provider = StaticProvider::new().with_type(TypeEntry::marked(
///     "timekeeping",
///     TypeKind::Struct,
///     TypeKey::of::<Clock>,
///     ServiceMarker::new(),
/// ));
///
/// assert_eq!(provider.modules(), vec![ModuleId::new("timekeeping")]);
/// assert_eq!(provider.types(&ModuleId::new("timekeeping")).unwrap().len(), 1);
/// ```
#[derive(Debug, Default)]
pub struct StaticProvider {
    types: Vec<TypeEntry>,
    conformances: Vec<Conformance>,
    failing: Vec<(ModuleId, String)>,
}

impl StaticProvider {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type declaration.
    pub fn with_type(mut self, entry: TypeEntry) -> Self {
        self.types.push(entry);
        self
    }

    /// Adds a conformance declaration.
    pub fn with_conformance(mut self, conformance: Conformance) -> Self {
        self.conformances.push(conformance);
        self
    }

    /// Makes every enumeration of `module` fail with `reason`.
    ///
    /// The module is still reported by [`MetadataProvider::modules`].
    pub fn with_failing_module(mut self, module: ModuleId, reason: impl Into<String>) -> Self {
        self.failing.push((module, reason.into()));
        self
    }
}

impl MetadataProvider for StaticProvider {
    fn modules(&self) -> Vec<ModuleId> {
        let (mut modules, _) = group_by_module(&self.types);
        for (module, _) in &self.failing {
            if !modules.contains(module) {
                modules.push(module.clone());
            }
        }
        modules
    }

    fn types(&self, module: &ModuleId) -> Result<Vec<&TypeEntry>> {
        if let Some((_, reason)) = self.failing.iter().find(|(m, _)| m == module) {
            return Err(AutoWireError::ModuleEnumeration {
                module: module.clone(),
                source: reason.clone().into(),
            });
        }

        let entries: Vec<&TypeEntry> = self
            .types
            .iter()
            .filter(|entry| &entry.module() == module)
            .collect();
        ensure_unambiguous(module, &entries)?;
        Ok(entries)
    }

    fn conformances(&self, implementation: &TypeKey) -> Vec<TypeKey> {
        self.conformances
            .iter()
            .filter(|c| &c.implementation() == implementation)
            .map(Conformance::abstraction)
            .collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::marker::{ServiceMarker, TypeKind};

    struct Ledger;
    struct Invoice;
    trait Store {}
    trait Report {}

    fn marked(module_path: &'static str, implementation: fn() -> TypeKey) -> TypeEntry {
        TypeEntry::marked(module_path, TypeKind::Struct, implementation, ServiceMarker::new())
    }

    #[test]
    fn modules_in_first_seen_order() {
        let provider = StaticProvider::new()
            .with_type(marked("billing::ledger", TypeKey::of::<Ledger>))
            .with_type(marked("reports", TypeKey::of::<Invoice>))
            .with_type(marked("billing::invoice", TypeKey::of::<Invoice>));

        assert_eq!(
            provider.modules(),
            vec![ModuleId::new("billing"), ModuleId::new("reports")]
        );
    }

    #[test]
    fn types_of_one_module() {
        let provider = StaticProvider::new()
            .with_type(marked("billing::ledger", TypeKey::of::<Ledger>))
            .with_type(marked("reports", TypeKey::of::<Invoice>));

        let types = provider.types(&ModuleId::new("billing")).unwrap();
        assert_eq!(types.len(), 1);
        assert_eq!(types[0].implementation(), TypeKey::of::<Ledger>());
    }

    #[test]
    fn unknown_module_is_empty() {
        let provider = StaticProvider::new();
        assert!(provider.types(&ModuleId::new("nowhere")).unwrap().is_empty());
    }

    #[test]
    fn failing_module_errors_but_is_listed() {
        let provider = StaticProvider::new()
            .with_failing_module(ModuleId::new("broken"), "missing dependent type");

        assert_eq!(provider.modules(), vec![ModuleId::new("broken")]);
        match provider.types(&ModuleId::new("broken")) {
            Err(AutoWireError::ModuleEnumeration { module, source }) => {
                assert_eq!(module, ModuleId::new("broken"));
                assert_eq!(source.to_string(), "missing dependent type");
            }
            other => panic!("Expected ModuleEnumeration, got: {other:?}"),
        }
    }

    #[test]
    fn doubly_marked_type_is_ambiguous() {
        let provider = StaticProvider::new()
            .with_type(marked("billing", TypeKey::of::<Ledger>))
            .with_type(marked("billing", TypeKey::of::<Ledger>));

        let err = provider.types(&ModuleId::new("billing")).unwrap_err();
        assert!(matches!(err, AutoWireError::ModuleEnumeration { .. }));
        assert!(err.to_string().contains("2 service markers"));
    }

    #[test]
    fn unmarked_duplicates_are_not_ambiguous() {
        let provider = StaticProvider::new()
            .with_type(marked("billing", TypeKey::of::<Ledger>))
            .with_type(TypeEntry::unmarked("billing", TypeKind::Struct, TypeKey::of::<Ledger>));

        assert_eq!(provider.types(&ModuleId::new("billing")).unwrap().len(), 2);
    }

    #[test]
    fn conformances_for_implementation() {
        let provider = StaticProvider::new()
            .with_conformance(Conformance::new(TypeKey::of::<Ledger>, TypeKey::of::<dyn Store>))
            .with_conformance(Conformance::new(TypeKey::of::<Ledger>, TypeKey::of::<dyn Report>))
            .with_conformance(Conformance::new(TypeKey::of::<Invoice>, TypeKey::of::<dyn Report>));

        assert_eq!(
            provider.conformances(&TypeKey::of::<Ledger>()),
            vec![TypeKey::of::<dyn Store>(), TypeKey::of::<dyn Report>()]
        );
        assert!(provider.conformances(&TypeKey::of::<String>()).is_empty());
    }

    #[test]
    fn inventory_provider_without_entries_in_module() {
        let provider = InventoryProvider;
        assert!(provider.types(&ModuleId::new("no_such_crate")).unwrap().is_empty());
        assert!(provider.conformances(&TypeKey::of::<Ledger>()).is_empty());
    }
}
