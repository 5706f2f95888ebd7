//! Procedural macros for autowire.
//!
//! - `#[auto_service]` - mark a struct for auto-registration
//! - `#[service_impl]` - declare that a type conforms to a trait
//!
//! Generated code refers to `::autowire`, so depend on the facade crate
//! rather than on this one directly.

use proc_macro::TokenStream;
use syn::{DeriveInput, ItemImpl, parse_macro_input};

mod auto_service;
mod service_impl;

/// Mark a struct for auto-registration.
///
/// # Example
///
/// ```ignore
/// use autowire::auto_service;
///
/// #[auto_service]
/// struct Clock;
///
/// #[auto_service(lifetime = "scoped")]
/// struct RequestLog;
///
/// #[auto_service(services(dyn Greeter), lifetime = "transient")]
/// struct EnglishGreeter;
/// ```
///
/// # Arguments
///
/// - `services(T, ..)` - explicit service types; replaces conformance inference
/// - `lifetime = "singleton" | "scoped" | "transient"` - defaults to `"singleton"`
///
/// Generic types are rejected. On an enum or union the marker is recorded
/// but the type is never registered.
#[proc_macro_attribute]
pub fn auto_service(args: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    auto_service::auto_service_impl(args.into(), input)
        .unwrap_or_else(|e| e.write_errors())
        .into()
}

/// Declare that the implementing type conforms to the implemented trait.
///
/// A marked type without explicit service types is registered under every
/// trait declared this way. Supertraits count only when their impls carry
/// the attribute too. The trait must be dyn-compatible. Traits with
/// associated types or constants (`impl Iterator for X`) are rejected, since
/// their `dyn` form cannot be named without binding those items.
///
/// # Example
///
/// ```ignore
/// use autowire::service_impl;
///
/// #[service_impl]
/// impl Greeter for EnglishGreeter {
///     fn greet(&self) -> String { "Hello".into() }
/// }
/// ```
#[proc_macro_attribute]
pub fn service_impl(args: TokenStream, input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as ItemImpl);

    service_impl::service_impl_impl(args.into(), input)
        .unwrap_or_else(|e| e.write_errors())
        .into()
}
