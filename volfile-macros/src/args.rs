//! Attribute argument parsing shared by the registration macros.

use syn::{
    Ident, LitStr, Token,
    parse::{Parse, ParseStream},
};

/// Prefix of every importer entry point name.
pub(crate) const ENTRY_POINT_PREFIX: &str = "volfile_import_";

/// Arguments of `#[volume_file(...)]` and `#[importer(...)]`.
///
/// ```text
/// #[volume_file("raw")]
/// #[volume_file("raw", export)]
/// ```
pub(crate) struct FormatArgs {
    pub tag: LitStr,
    pub export: bool,
}

impl Parse for FormatArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        if input.is_empty() {
            return Err(input.error("expected a format tag, e.g. #[volume_file(\"raw\")]"));
        }

        let tag: LitStr = input.parse()?;
        let mut export = false;

        while !input.is_empty() {
            input.parse::<Token![,]>()?;
            if input.is_empty() {
                break;
            }

            let ident: Ident = input.parse()?;
            match ident.to_string().as_str() {
                "export" => export = true,
                other => {
                    return Err(syn::Error::new(
                        ident.span(),
                        format!("unknown attribute: {}", other),
                    ));
                }
            }
        }

        Ok(FormatArgs { tag, export })
    }
}

impl FormatArgs {
    /// Full entry point name as a string literal.
    pub fn entry_point_name(&self) -> LitStr {
        LitStr::new(
            &format!("{}{}", ENTRY_POINT_PREFIX, self.tag.value()),
            self.tag.span(),
        )
    }

    /// Entry point name as an identifier, for the exported symbol.
    pub fn entry_point_ident(&self) -> syn::Result<Ident> {
        let name = format!("{}{}", ENTRY_POINT_PREFIX, self.tag.value());
        syn::parse_str::<Ident>(&name)
            .map(|ident| Ident::new(&ident.to_string(), self.tag.span()))
            .map_err(|_| {
                syn::Error::new(
                    self.tag.span(),
                    format!("`{}` is not a valid symbol name; exported tags must be identifier characters", name),
                )
            })
    }
}
