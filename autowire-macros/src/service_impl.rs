//! Implementation of the `#[service_impl]` macro

use proc_macro2::TokenStream;
use quote::quote;
use syn::{ImplItem, ItemImpl};

pub fn service_impl_impl(args: TokenStream, input: ItemImpl) -> darling::Result<TokenStream> {
    if !args.is_empty() {
        return Err(darling::Error::custom("#[service_impl] takes no arguments").with_span(&args));
    }

    let trait_path = match &input.trait_ {
        Some((None, path, _)) => path,
        Some((Some(bang), _, _)) => {
            return Err(darling::Error::custom("#[service_impl] cannot be applied to negative impls")
                .with_span(bang));
        }
        None => {
            return Err(darling::Error::custom(
                "#[service_impl] must be applied to a trait impl (`impl Trait for Type`)",
            )
            .with_span(&input.self_ty));
        }
    };

    if !input.generics.params.is_empty() {
        return Err(darling::Error::custom("#[service_impl] cannot be applied to generic impls")
            .with_span(&input.generics));
    }

    // `dyn Trait` cannot be named without binding associated items.
    for item in &input.items {
        match item {
            ImplItem::Type(ty) => {
                return Err(darling::Error::custom(
                    "#[service_impl] does not support traits with associated types",
                )
                .with_span(&ty.ident));
            }
            ImplItem::Const(c) => {
                return Err(darling::Error::custom(
                    "#[service_impl] does not support traits with associated constants",
                )
                .with_span(&c.ident));
            }
            _ => {}
        }
    }

    let self_ty = &input.self_ty;

    Ok(quote! {
        #input

        const _: () = {
            ::autowire::__private::inventory::submit! {
                ::autowire::__private::Conformance::new(
                    ::autowire::__private::TypeKey::of::<#self_ty>,
                    ::autowire::__private::TypeKey::of::<dyn #trait_path>,
                )
            }
        };
    })
}
