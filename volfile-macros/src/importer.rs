//! `#[importer]` - registers a plain function as the importer for a format tag.

use crate::args::FormatArgs;
use proc_macro::TokenStream;
use quote::quote;
use syn::{ItemFn, parse_macro_input};

/// Implementation of the `#[importer]` macro.
pub fn importer_impl(attr: TokenStream, item: TokenStream) -> TokenStream {
    let args = parse_macro_input!(attr as FormatArgs);
    let input = parse_macro_input!(item as ItemFn);

    let fn_name = &input.sig.ident;

    if let Some(asyncness) = &input.sig.asyncness {
        return syn::Error::new_spanned(asyncness, "Importer function must not be async")
            .to_compile_error()
            .into();
    }

    if input.sig.inputs.len() != 2 {
        return syn::Error::new_spanned(
            &input.sig.inputs,
            "Importer function must take (path: &Path, volume: &mut dyn Volume)",
        )
        .to_compile_error()
        .into();
    }

    if !input.sig.generics.params.is_empty() {
        return syn::Error::new_spanned(
            &input.sig.generics,
            "Importer function cannot be generic",
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
        if symbol == *fn_name {
            return syn::Error::new_spanned(
                fn_name,
                "exported importer would clash with the function name; rename the function",
            )
            .to_compile_error()
            .into();
        }
        quote! {
            #[doc(hidden)]
            #[unsafe(no_mangle)]
            pub fn #symbol(
                path: &::std::path::Path,
                volume: &mut dyn ::volfile::Volume,
            ) -> ::core::result::Result<::volfile::Catalog, ::volfile::BoxError> {
                #fn_name(path, volume)
            }
        }
    } else {
        quote! {}
    };

    let expanded = quote! {
        #input

        ::volfile::inventory::submit! {
            ::volfile::EntryPoint::new(#name, #fn_name)
        }

        #export
    };

    TokenStream::from(expanded)
}
