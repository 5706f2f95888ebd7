//! Module identity.
//!
//! A module is the unit the scanner walks: one crate linked into the
//! binary. It is named by the crate name, the first segment of a
//! `module_path!()` or a type path.

use std::any::type_name;
use std::borrow::Cow;
use std::fmt;

/// Names one crate whose marked types can be scanned.
///
/// # Examples
/// ```
/// use autowire_container::module::ModuleId;
///
/// let module = ModuleId::from_module_path("my_app::services::greeting");
/// assert_eq!(module.name(), "my_app");
///
/// assert_eq!(ModuleId::of::<String>().name(), "alloc");
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ModuleId(Cow<'static, str>);

impl ModuleId {
    /// Creates a module id from a crate name.
    pub fn new(name: impl Into<Cow<'static, str>>) -> Self {
        Self(name.into())
    }

    /// Takes the crate name from a `module_path!()` string.
    pub fn from_module_path(path: &'static str) -> Self {
        Self(Cow::Borrowed(crate_segment(path)))
    }

    /// Returns the module that declares type `T`.
    pub fn of<T: ?Sized + 'static>() -> Self {
        let name = type_name::<T>();
        let name = name.strip_prefix("dyn ").unwrap_or(name);
        Self(Cow::Borrowed(crate_segment(name)))
    }

    /// Returns the crate name.
    pub fn name(&self) -> &str {
        &self.0
    }
}

fn crate_segment(path: &str) -> &str {
    path.split("::").next().unwrap_or(path)
}

impl fmt::Display for ModuleId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Expands to the [`ModuleId`] of the crate invoking it.
#[macro_export]
macro_rules! current_module {
    () => {
        $crate::module::ModuleId::from_module_path(::core::module_path!())
    };
}
