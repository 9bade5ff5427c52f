use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::{
    Data, DataEnum, DeriveInput, Field, Fields, FieldsNamed, GenericArgument, Ident,
    PathArguments, Type,
};

pub(crate) struct Deriver<'a> {
    input: &'a DeriveInput,
    visit_method: Ident,
    fold_method: Ident,
}

impl<'a> Deriver<'a> {
    pub(crate) fn new(input: &'a DeriveInput) -> Self {
        let snake = to_snake_case(&input.ident.to_string());
        Deriver {
            input,
            visit_method: format_ident!("visit_{}", snake),
            fold_method: format_ident!("fold_{}", snake),
        }
    }

    pub(crate) fn derive_node(&self) -> syn::Result<TokenStream> {
        match &self.input.data {
            Data::Struct(s) => Ok(self.node_struct(self.named_fields(&s.fields)?)),
            Data::Enum(e) => self.node_enum(e),
            Data::Union(_) => Err(syn::Error::new_spanned(
                &self.input.ident,
                "unions cannot be ast nodes",
            )),
        }
    }

    pub(crate) fn derive_base(&self) -> syn::Result<TokenStream> {
        match &self.input.data {
            Data::Struct(s) => Ok(self.base_struct(self.named_fields(&s.fields)?)),
            _ => Err(syn::Error::new_spanned(
                &self.input.ident,
                "only structs can be used as a shared node base",
            )),
        }
    }

    fn named_fields<'f>(&self, fields: &'f Fields) -> syn::Result<&'f FieldsNamed> {
        match fields {
            Fields::Named(named) => Ok(named),
            _ => Err(syn::Error::new_spanned(
                &self.input.ident,
                "ast nodes must use named fields",
            )),
        }
    }

    /// A concrete node kind.
    fn node_struct(&self, fields: &FieldsNamed) -> TokenStream {
        let ty = &self.input.ident;
        let name = ty.to_string();
        let idents = field_idents(fields);
        let visit_method = &self.visit_method;
        let fold_method = &self.fold_method;

        let eq = self.eq_impls(fields);
        let de = self.tagged_deserialize(fields);
        let branch = self.branch_enum(fields, true);

        quote! {
            #eq

            impl crate::ChildNode for #ty {
                #[inline]
                fn child_node(&self) -> ::core::option::Option<crate::AstNode<'_>> {
                    ::core::option::Option::Some(crate::AstNode::#ty(self))
                }
            }

            impl ::core::hash::Hash for #ty {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash(#name, state);
                    #(crate::NodeField::field_hash(&self.#idents, state);)*
                }
            }

            impl crate::Node for #ty {
                #[inline]
                fn as_node(&self) -> crate::AstNode<'_> {
                    crate::AstNode::#ty(self)
                }
            }

            impl<'ast> crate::VisitWith<'ast> for #ty {
                fn visit_with<V: ?Sized + crate::Visit<'ast>>(&'ast self, v: &mut V) {
                    v.enter(crate::AstNode::#ty(self));
                    v.#visit_method(self)
                }

                #[allow(unused_variables)]
                fn visit_children_with<V: ?Sized + crate::Visit<'ast>>(&'ast self, v: &mut V) {
                    #(crate::VisitWith::visit_with(&self.#idents, v);)*
                }
            }

            impl crate::FoldWith for #ty {
                fn fold_with<F: ?Sized + crate::Fold>(self, f: &mut F) -> Self {
                    f.#fold_method(self)
                }

                #[allow(unused_variables)]
                fn fold_children_with<F: ?Sized + crate::Fold>(self, f: &mut F) -> Self {
                    #ty {
                        #(#idents: crate::FoldWith::fold_with(self.#idents, f),)*
                    }
                }
            }

            #de

            #branch
        }
    }

    /// A record of shared fields. Same as a node kind, minus the kind.
    fn base_struct(&self, fields: &FieldsNamed) -> TokenStream {
        let ty = &self.input.ident;
        let idents = field_idents(fields);

        let eq = self.eq_impls(fields);
        let branch = self.branch_enum(fields, false);

        quote! {
            #eq

            #branch

            impl ::core::hash::Hash for #ty {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    #(crate::NodeField::field_hash(&self.#idents, state);)*
                }
            }

            impl<'ast> crate::VisitWith<'ast> for #ty {
                fn visit_with<V: ?Sized + crate::Visit<'ast>>(&'ast self, v: &mut V) {
                    crate::VisitWith::visit_children_with(self, v)
                }

                #[allow(unused_variables)]
                fn visit_children_with<V: ?Sized + crate::Visit<'ast>>(&'ast self, v: &mut V) {
                    #(crate::VisitWith::visit_with(&self.#idents, v);)*
                }
            }

            impl crate::FoldWith for #ty {
                fn fold_with<F: ?Sized + crate::Fold>(self, f: &mut F) -> Self {
                    crate::FoldWith::fold_children_with(self, f)
                }

                #[allow(unused_variables)]
                fn fold_children_with<F: ?Sized + crate::Fold>(self, f: &mut F) -> Self {
                    #ty {
                        #(#idents: crate::FoldWith::fold_with(self.#idents, f),)*
                    }
                }
            }
        }
    }

    /// `PartialEq`, `Eq` and `NodeField` for a struct. Equality walks the same
    /// field list as the generated `Hash`.
    fn eq_impls(&self, fields: &FieldsNamed) -> TokenStream {
        let ty = &self.input.ident;
        let idents = field_idents(fields);

        quote! {
            impl ::core::cmp::PartialEq for #ty {
                #[allow(unused_variables)]
                fn eq(&self, other: &Self) -> bool {
                    true #(&& crate::NodeField::field_eq(&self.#idents, &other.#idents))*
                }
            }

            impl ::core::cmp::Eq for #ty {}

            impl crate::NodeField for #ty {
                #[inline]
                fn field_eq(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn field_hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash(self, state)
                }
            }
        }
    }

    /// `Deserialize` through `crate::deserialize_node`, which reads the
    /// `"type"` member first and hands the remaining members to
    /// `deserialize_fields`.
    fn tagged_deserialize(&self, fields: &FieldsNamed) -> TokenStream {
        let ty = &self.input.ident;
        let name = ty.to_string();
        let idents = field_idents(fields);
        let decls = fields.named.iter().map(|f| {
            let attrs = f.attrs.iter().filter(|a| a.path().is_ident("serde"));
            let ident = &f.ident;
            let field_ty = &f.ty;
            quote!(#(#attrs)* #ident: #field_ty)
        });

        quote! {
            impl crate::DeserializeNode for #ty {
                const EXPECTING: &'static str = #name;

                #[inline]
                fn accepts(kind: crate::NodeKind) -> bool {
                    kind == crate::NodeKind::#ty
                }

                fn deserialize_fields<'de, D>(
                    _kind: crate::NodeKind,
                    fields: D,
                ) -> ::core::result::Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    #[derive(::serde::Deserialize)]
                    #[serde(rename_all = "camelCase")]
                    struct Fields {
                        #(#decls,)*
                    }

                    let Fields { #(#idents,)* } =
                        <Fields as ::serde::Deserialize<'de>>::deserialize(fields)?;
                    ::core::result::Result::Ok(#ty { #(#idents,)* })
                }
            }

            impl<'de> ::serde::Deserialize<'de> for #ty {
                fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    crate::deserialize_node(deserializer)
                }
            }
        }
    }

    /// `<Ty>Branch`: one variant per field that can hold a node, indexed for
    /// `Vec` fields. A flattened base record contributes its own branch enum.
    ///
    /// Nothing is generated for a kind without such fields.
    fn branch_enum(&self, fields: &FieldsNamed, is_node: bool) -> TokenStream {
        let ty = &self.input.ident;
        let vis = &self.input.vis;
        let branch = format_ident!("{}Branch", ty);

        let steps: Vec<_> = fields.named.iter().filter_map(Step::of).collect();
        if steps.is_empty() {
            return quote!();
        }

        let decls = steps.iter().map(|s| {
            let variant = &s.variant;
            match &s.kind {
                StepKind::Field => quote!(#variant),
                StepKind::Indexed => quote!(#variant(usize)),
                StepKind::Base(base) => {
                    let base_branch = format_ident!("{}Branch", base);
                    quote!(#variant(#base_branch))
                }
            }
        });
        let arms = steps.iter().map(|s| {
            let variant = &s.variant;
            let field = s.field;
            match &s.kind {
                StepKind::Field => quote! {
                    Self::#variant => crate::ChildNode::child_node(&n.#field)
                },
                StepKind::Indexed => quote! {
                    Self::#variant(i) => n.#field.get(i).and_then(crate::ChildNode::child_node)
                },
                StepKind::Base(..) => quote! {
                    Self::#variant(b) => b.get_in(&n.#field)
                },
            }
        });
        let names = steps.iter().map(|s| {
            let variant = &s.variant;
            let name = to_camel_case(&s.field.to_string());
            match &s.kind {
                StepKind::Field => quote!(Self::#variant => f.write_str(#name)),
                StepKind::Indexed => quote!(Self::#variant(i) => write!(f, "{}[{}]", #name, i)),
                StepKind::Base(..) => quote!(Self::#variant(b) => ::core::fmt::Display::fmt(b, f)),
            }
        });

        let get = if is_node {
            quote! {
                /// The child of `node` this branch leads to. `None` when `node`
                /// is of another kind, or the field is absent or a hole.
                pub fn get<'ast>(
                    self,
                    node: crate::AstNode<'ast>,
                ) -> ::core::option::Option<crate::AstNode<'ast>> {
                    match node {
                        crate::AstNode::#ty(n) => self.get_in(n),
                        _ => ::core::option::Option::None,
                    }
                }
            }
        } else {
            quote!()
        };

        quote! {
            #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
            #vis enum #branch {
                #(#decls,)*
            }

            impl #branch {
                #get

                pub fn get_in<'ast>(
                    self,
                    n: &'ast #ty,
                ) -> ::core::option::Option<crate::AstNode<'ast>> {
                    match self {
                        #(#arms,)*
                    }
                }
            }

            impl ::core::fmt::Display for #branch {
                fn fmt(&self, f: &mut ::core::fmt::Formatter<'_>) -> ::core::fmt::Result {
                    match self {
                        #(#names,)*
                    }
                }
            }
        }
    }

    /// A role: a closed set of node kinds (or narrower roles).
    fn node_enum(&self, e: &DataEnum) -> syn::Result<TokenStream> {
        let ty = &self.input.ident;
        let name = ty.to_string();
        let visit_method = &self.visit_method;
        let fold_method = &self.fold_method;

        let mut variants: Vec<&Ident> = Vec::with_capacity(e.variants.len());
        let mut types: Vec<&Type> = Vec::with_capacity(e.variants.len());
        for v in &e.variants {
            match &v.fields {
                Fields::Unnamed(f) if f.unnamed.len() == 1 => {
                    variants.push(&v.ident);
                    types.push(&f.unnamed[0].ty);
                }
                _ => {
                    return Err(syn::Error::new_spanned(
                        v,
                        "variants of a node role must wrap exactly one node",
                    ))
                }
            }
        }

        // Distinct variants never compare equal, even when the wrapped nodes
        // share a shape.
        let mismatch = if variants.len() > 1 {
            quote!(_ => false,)
        } else {
            quote!()
        };

        Ok(quote! {
            impl ::core::cmp::PartialEq for #ty {
                fn eq(&self, other: &Self) -> bool {
                    match (self, other) {
                        #((Self::#variants(l), Self::#variants(r)) => crate::NodeField::field_eq(l, r),)*
                        #mismatch
                    }
                }
            }

            impl ::core::cmp::Eq for #ty {}

            impl ::core::hash::Hash for #ty {
                fn hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    match self {
                        #(Self::#variants(n) => crate::NodeField::field_hash(n, state),)*
                    }
                }
            }

            impl crate::NodeField for #ty {
                #[inline]
                fn field_eq(&self, other: &Self) -> bool {
                    self == other
                }

                #[inline]
                fn field_hash<H: ::core::hash::Hasher>(&self, state: &mut H) {
                    ::core::hash::Hash::hash(self, state)
                }
            }

            impl crate::Node for #ty {
                fn as_node(&self) -> crate::AstNode<'_> {
                    match self {
                        #(Self::#variants(n) => crate::Node::as_node(n),)*
                    }
                }
            }

            impl crate::ChildNode for #ty {
                #[inline]
                fn child_node(&self) -> ::core::option::Option<crate::AstNode<'_>> {
                    ::core::option::Option::Some(crate::Node::as_node(self))
                }
            }

            impl crate::DeserializeNode for #ty {
                const EXPECTING: &'static str = #name;

                fn accepts(kind: crate::NodeKind) -> bool {
                    false #(|| <#types as crate::DeserializeNode>::accepts(kind))*
                }

                fn deserialize_fields<'de, D>(
                    kind: crate::NodeKind,
                    fields: D,
                ) -> ::core::result::Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    #(
                        if <#types as crate::DeserializeNode>::accepts(kind) {
                            return <#types as crate::DeserializeNode>::deserialize_fields(kind, fields)
                                .map(Self::#variants);
                        }
                    )*
                    ::core::result::Result::Err(<D::Error as ::serde::de::Error>::custom(
                        ::core::format_args!("`{}` cannot be used as {}", kind, #name),
                    ))
                }
            }

            impl<'de> ::serde::Deserialize<'de> for #ty {
                fn deserialize<D>(deserializer: D) -> ::core::result::Result<Self, D::Error>
                where
                    D: ::serde::Deserializer<'de>,
                {
                    crate::deserialize_node(deserializer)
                }
            }

            impl<'ast> crate::VisitWith<'ast> for #ty {
                fn visit_with<V: ?Sized + crate::Visit<'ast>>(&'ast self, v: &mut V) {
                    v.#visit_method(self)
                }

                fn visit_children_with<V: ?Sized + crate::Visit<'ast>>(&'ast self, v: &mut V) {
                    match self {
                        #(Self::#variants(n) => crate::VisitWith::visit_with(n, v),)*
                    }
                }
            }

            impl crate::FoldWith for #ty {
                fn fold_with<F: ?Sized + crate::Fold>(self, f: &mut F) -> Self {
                    f.#fold_method(self)
                }

                fn fold_children_with<F: ?Sized + crate::Fold>(self, f: &mut F) -> Self {
                    match self {
                        #(Self::#variants(n) => Self::#variants(crate::FoldWith::fold_with(n, f)),)*
                    }
                }
            }

            #(
                impl ::core::convert::From<#types> for #ty {
                    #[inline]
                    fn from(n: #types) -> Self {
                        Self::#variants(n)
                    }
                }
            )*
        })
    }
}

struct Step<'f> {
    field: &'f Ident,
    variant: Ident,
    kind: StepKind<'f>,
}

enum StepKind<'f> {
    Field,
    Indexed,
    /// A `#[serde(flatten)]` record, named by its type.
    Base(&'f Ident),
}

impl<'f> Step<'f> {
    fn of(f: &'f Field) -> Option<Self> {
        let field = f.ident.as_ref()?;
        let kind = if is_flattened(f) {
            StepKind::Base(type_ident(&f.ty)?)
        } else if is_leaf(&f.ty) {
            return None;
        } else if wrapped(&f.ty, "Vec").is_some() {
            StepKind::Indexed
        } else {
            StepKind::Field
        };

        Some(Step {
            field,
            variant: format_ident!("{}", to_pascal_case(&field.to_string())),
            kind,
        })
    }
}

fn is_flattened(f: &Field) -> bool {
    f.attrs
        .iter()
        .filter(|a| a.path().is_ident("serde"))
        .any(|a| {
            let mut flatten = false;
            let _ = a.parse_nested_meta(|meta| {
                if meta.path.is_ident("flatten") {
                    flatten = true;
                } else if meta.input.peek(syn::Token![=]) {
                    meta.value()?.parse::<syn::Expr>()?;
                }
                Ok(())
            });
            flatten
        })
}

fn type_ident(ty: &Type) -> Option<&Ident> {
    match ty {
        Type::Path(p) => p.path.segments.last().map(|s| &s.ident),
        _ => None,
    }
}

/// `T` when `ty` is `wrapper<T>`.
fn wrapped<'t>(ty: &'t Type, wrapper: &str) -> Option<&'t Type> {
    let Type::Path(p) = ty else {
        return None;
    };
    let seg = p.path.segments.last()?;
    if seg.ident != wrapper {
        return None;
    }
    match &seg.arguments {
        PathArguments::AngleBracketed(args) => args.args.iter().find_map(|a| match a {
            GenericArgument::Type(t) => Some(t),
            _ => None,
        }),
        _ => None,
    }
}

/// Scalars, text and the operator / declaration kind enums never hold a
/// node, however they are wrapped.
fn is_leaf(mut ty: &Type) -> bool {
    while let Some(inner) = ["Option", "Box", "Vec"]
        .iter()
        .find_map(|w| wrapped(ty, w))
    {
        ty = inner;
    }

    match type_ident(ty) {
        Some(ident) => {
            let name = ident.to_string();
            matches!(name.as_str(), "bool" | "f64" | "JsWord")
                || name.ends_with("Operator")
                || name.ends_with("Kind")
        }
        None => false,
    }
}

fn field_idents(fields: &FieldsNamed) -> Vec<&Ident> {
    fields
        .named
        .iter()
        .map(|f| f.ident.as_ref().expect("named fields always have an ident"))
        .collect()
}

/// `VariableDeclarator` -> `variable_declarator`
fn to_snake_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len() + 4);
    for (i, c) in s.chars().enumerate() {
        if c.is_ascii_uppercase() {
            if i != 0 {
                out.push('_');
            }
            out.push(c.to_ascii_lowercase());
        } else {
            out.push(c);
        }
    }
    out
}

/// `declarators` -> `Declarators`
fn to_pascal_case(s: &str) -> String {
    let mut out = String::with_capacity(s.len());
    let mut upper = true;
    for c in s.chars() {
        if c == '_' {
            upper = true;
        } else if upper {
            out.push(c.to_ascii_uppercase());
            upper = false;
        } else {
            out.push(c);
        }
    }
    out
}

/// `some_field` -> `someField`, the name a field has in JSON.
fn to_camel_case(s: &str) -> String {
    let pascal = to_pascal_case(s);
    let mut chars = pascal.chars();
    match chars.next() {
        Some(c) => c.to_ascii_lowercase().to_string() + chars.as_str(),
        None => pascal,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn snake_case_method_names() {
        assert_eq!(to_snake_case("ArrayBinding"), "array_binding");
        assert_eq!(to_snake_case("Super"), "super");
        assert_eq!(
            to_snake_case("BindingBindingWithDefault"),
            "binding_binding_with_default"
        );
    }

    #[test]
    fn branch_names() {
        assert_eq!(to_pascal_case("declarators"), "Declarators");
        assert_eq!(to_pascal_case("some_field"), "SomeField");
        assert_eq!(to_camel_case("some_field"), "someField");
    }

    #[test]
    fn leaf_fields() {
        let leaf = |src: &str| is_leaf(&syn::parse_str::<Type>(src).unwrap());

        assert!(leaf("JsWord"));
        assert!(leaf("Option<f64>"));
        assert!(leaf("BinaryOperator"));
        assert!(!leaf("Box<Expression>"));
        assert!(!leaf("Vec<Option<BindingBindingWithDefault>>"));
    }
}
