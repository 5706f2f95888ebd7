//! Implementation of the `#[auto_service]` macro

use darling::FromMeta;
use darling::ast::NestedMeta;
use proc_macro2::TokenStream;
use quote::quote;
use syn::punctuated::Punctuated;
use syn::{Data, DeriveInput, Meta, Token, Type};

/// Arguments of `#[auto_service(...)]`
#[derive(Debug, Default, FromMeta)]
#[darling(default)]
struct AutoServiceArgs {
    /// `services(dyn A, B)`
    services: ServiceTypes,
    /// `lifetime = "scoped"`
    lifetime: LifetimeArg,
}

#[derive(Debug, Default)]
struct ServiceTypes(Vec<Type>);

impl FromMeta for ServiceTypes {
    fn from_meta(item: &Meta) -> darling::Result<Self> {
        match item {
            Meta::List(list) => {
                let types = list.parse_args_with(Punctuated::<Type, Token![,]>::parse_terminated)?;
                Ok(Self(types.into_iter().collect()))
            }
            _ => Err(darling::Error::unsupported_format("expected `services(Type, ..)`").with_span(item)),
        }
    }
}

#[derive(Debug, Default, Clone, Copy)]
enum LifetimeArg {
    #[default]
    Singleton,
    Scoped,
    Transient,
}

impl FromMeta for LifetimeArg {
    fn from_string(value: &str) -> darling::Result<Self> {
        match value {
            "singleton" => Ok(Self::Singleton),
            "scoped" => Ok(Self::Scoped),
            "transient" => Ok(Self::Transient),
            other => Err(darling::Error::unknown_value(other)),
        }
    }
}

impl LifetimeArg {
    fn variant(self) -> TokenStream {
        match self {
            Self::Singleton => quote!(Singleton),
            Self::Scoped => quote!(Scoped),
            Self::Transient => quote!(Transient),
        }
    }
}

pub fn auto_service_impl(args: TokenStream, input: DeriveInput) -> darling::Result<TokenStream> {
    let nested = NestedMeta::parse_meta_list(args)?;
    let args = AutoServiceArgs::from_list(&nested)?;

    let ident = &input.ident;
    if !input.generics.params.is_empty() {
        return Err(darling::Error::custom(
            "#[auto_service] cannot be applied to generic types; register a concrete alias instead",
        )
        .with_span(&input.generics));
    }

    let kind = match &input.data {
        Data::Struct(_) => quote!(Struct),
        Data::Enum(_) => quote!(Enum),
        Data::Union(_) => quote!(Union),
    };
    let lifetime = args.lifetime.variant();
    let services = &args.services.0;

    Ok(quote! {
        #input

        const _: () = {
            const SERVICES: &[fn() -> ::autowire::__private::TypeKey] = &[
                #(::autowire::__private::TypeKey::of::<#services>),*
            ];

            ::autowire::__private::inventory::submit! {
                ::autowire::__private::TypeEntry::marked(
                    ::core::module_path!(),
                    ::autowire::__private::TypeKind::#kind,
                    ::autowire::__private::TypeKey::of::<#ident>,
                    ::autowire::__private::ServiceMarker::new()
                        .with_service_types(SERVICES)
                        .with_lifetime(::autowire::__private::Lifetime::#lifetime),
                )
            }
        };
    })
}
