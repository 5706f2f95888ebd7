//! Service lifetimes.
//!
//! A lifetime tells the consuming container how to instantiate a
//! registration:
//! - [`Lifetime::Singleton`] — one instance for the entire application
//! - [`Lifetime::Scoped`] — one instance per logical scope (e.g., a request)
//! - [`Lifetime::Transient`] — a new instance on every request

use std::fmt;

use serde::{Deserialize, Serialize};

/// Instantiation policy attached to a registration.
///
/// Defaults to [`Lifetime::Singleton`], the lifetime a marker gets when none
/// is given. Serialized in lowercase (`"scoped"`), the same spelling the
/// `#[auto_service(lifetime = "..")]` argument takes.
///
/// # Examples
/// ```
/// use autowire_container::lifetime::Lifetime;
///
/// assert_eq!(Lifetime::default(), Lifetime::Singleton);
/// assert_eq!(Lifetime::Scoped.to_string(), "Scoped");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Lifetime {
    /// One instance shared across the entire application.
    #[default]
    Singleton,

    /// One instance per scope (e.g., per HTTP request).
    Scoped,

    /// New instance created on every resolve.
    Transient,
}

impl fmt::Display for Lifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Lifetime::Singleton => write!(f, "Singleton"),
            Lifetime::Scoped => write!(f, "Scoped"),
            Lifetime::Transient => write!(f, "Transient"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_is_singleton() {
        assert_eq!(Lifetime::default(), Lifetime::Singleton);
    }

    #[test]
    fn lifetime_display() {
        assert_eq!(format!("{}", Lifetime::Singleton), "Singleton");
        assert_eq!(format!("{}", Lifetime::Scoped), "Scoped");
        assert_eq!(format!("{}", Lifetime::Transient), "Transient");
    }

    #[test]
    fn serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Lifetime::Singleton).unwrap(), "\"singleton\"");
        assert_eq!(serde_json::to_string(&Lifetime::Scoped).unwrap(), "\"scoped\"");
        assert_eq!(serde_json::to_string(&Lifetime::Transient).unwrap(), "\"transient\"");
    }

    #[test]
    fn deserializes_from_config_value() {
        #[derive(Deserialize)]
        struct ServiceConfig {
            lifetime: Lifetime,
        }

        let config: ServiceConfig = serde_json::from_str(r#"{ "lifetime": "transient" }"#).unwrap();
        assert_eq!(config.lifetime, Lifetime::Transient);
    }

    #[test]
    fn rejects_display_casing() {
        assert!(serde_json::from_str::<Lifetime>("\"Scoped\"").is_err());
    }
}
