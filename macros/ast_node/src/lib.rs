#![recursion_limit = "1024"]

extern crate proc_macro;

use quote::quote;
use syn::{parse_macro_input, Data, DeriveInput};

mod ast_node_macro;
mod derive;

/// Derives the per-kind boilerplate of a syntax node.
///
/// For a struct this is a concrete node kind: `PartialEq`, `Eq` and `Hash`
/// are generated from the same field list (the hash is seeded with the kind
/// name), together with `Node`, `NodeField`, `VisitWith`, `FoldWith` and a
/// `Deserialize` impl that checks the `"type"` tag. Fields that can hold a
/// node also get a `<Kind>Branch` enum addressing them.
///
/// For an enum (a role such as `Binding`) every variant must wrap exactly one
/// node. Equality requires the same variant, hashing delegates to the wrapped
/// node, `Deserialize` picks the variant from the `"type"` tag and a `From`
/// impl is generated for every variant.
#[proc_macro_derive(NodeMacro)]
pub fn derive_node(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    derive::Deriver::new(&input)
        .derive_node()
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Derives equality, hashing and traversal for a record of fields shared by
/// several node kinds. The record is not a node kind: it has no kind name,
/// no `visit_*`/`fold_*` method and contributes its fields to the hash of the
/// node embedding it as if they were declared there.
#[proc_macro_derive(NodeBaseMacro)]
pub fn derive_node_base(input: proc_macro::TokenStream) -> proc_macro::TokenStream {
    let input = parse_macro_input!(input as DeriveInput);

    derive::Deriver::new(&input)
        .derive_base()
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

/// Alias for
/// `#[derive(NodeMacro, Debug, Clone, Serialize)]` plus
/// `#[serde(tag = "type", rename_all = "camelCase")]` for a struct,
/// `#[derive(NodeMacro, Debug, Clone, Serialize)]` plus `#[serde(untagged)]`
/// for an enum and
/// `#[derive(NodeBaseMacro, Debug, Clone, Serialize, Deserialize)]` for
/// `#[ast_node(base)]`.
#[proc_macro_attribute]
pub fn ast_node(
    args: proc_macro::TokenStream,
    input: proc_macro::TokenStream,
) -> proc_macro::TokenStream {
    let args = parse_macro_input!(args as ast_node_macro::Args);
    let input = parse_macro_input!(input as DeriveInput);

    let item = match (&input.data, args.base) {
        (_, true) => quote! {
            #[derive(
                ::ast_node::NodeBaseMacro,
                Debug,
                Clone,
                ::serde::Serialize,
                ::serde::Deserialize,
            )]
            #[serde(rename_all = "camelCase")]
            #input
        },
        (Data::Enum(..), false) => quote! {
            #[derive(::ast_node::NodeMacro, Debug, Clone, ::serde::Serialize)]
            #[serde(untagged)]
            #input
        },
        _ => quote! {
            #[derive(::ast_node::NodeMacro, Debug, Clone, ::serde::Serialize)]
            #[serde(tag = "type", rename_all = "camelCase")]
            #input
        },
    };

    item.into()
}
