//! `#[volume_file]` - registers a `VolumeFile` type for a format tag.

use crate::args::FormatArgs;
use proc_macro::TokenStream;
use quote::quote;
use syn::{Item, parse_macro_input};

/// Implementation of the `#[volume_file]` macro.
pub fn volume_file_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as FormatArgs);
    let input = parse_macro_input!(item as Item);

    let (ident, generics) = match &input {
        Item::Struct(s) => (&s.ident, &s.generics),
        Item::Enum(e) => (&e.ident, &e.generics),
        other => {
            return syn::Error::new_spanned(
                other,
                "#[volume_file] can only be applied to a struct or an enum",
            )
            .to_compile_error()
            .into();
        }
    };

    if !generics.params.is_empty() {
        return syn::Error::new_spanned(
            generics,
            "#[volume_file] types cannot be generic; register a concrete instantiation instead",
        )
        .to_compile_error()
        .into();
    }

    let name = args.entry_point_name();

    let export = if args.export {
        let symbol = match args.entry_point_ident() {
            Ok(symbol) => symbol,
            Err(e) => return e.to_compile_error().into(),
        };
        quote! {
            #[doc(hidden)]
            #[unsafe(no_mangle)]
            pub fn #symbol(
                path: &::std::path::Path,
                volume: &mut dyn ::volfile::Volume,
            ) -> ::core::result::Result<::volfile::Catalog, ::volfile::BoxError> {
                ::volfile::import_with::<#ident>(path, volume)
            }
        }
    } else {
        quote! {}
    };

    let expanded = quote! {
        #input

        ::volfile::inventory::submit! {
            ::volfile::EntryPoint::new(#name, ::volfile::import_with::<#ident>)
        }

        #export
    };

    TokenStream::from(expanded)
}
