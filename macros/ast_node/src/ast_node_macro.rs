use syn::{
    self,
    parse::{Parse, ParseStream},
    Ident,
};

/// Arguments of `#[ast_node(..)]`.
///
/// The only accepted argument is `base`, which marks a record of fields shared
/// by several node kinds rather than a node kind of its own.
#[derive(Clone, Default)]
pub struct Args {
    pub base: bool,
}

impl Parse for Args {
    fn parse(i: ParseStream<'_>) -> syn::Result<Self> {
        if i.is_empty() {
            return Ok(Args::default());
        }
        let ident: Ident = i.parse()?;
        if ident != "base" {
            return Err(syn::Error::new(
                ident.span(),
                "#[ast_node] only accepts `base` as an argument",
            ));
        }
        Ok(Args { base: true })
    }
}
