//! Implementation of the `#[derive(Kind)]` macro.
//!
//! For a type `Name<P1, .., Pn, A>` this generates a witness `NameK<P1, .., Pn>`
//! (an empty enum when there are no `Pi`), its `Kind` impl with
//! `type Of<A> = Name<P1, .., Pn, A>`, and the matching `Kinded` impl.

use proc_macro::TokenStream;
use proc_macro2::{TokenStream as TokenStream2, TokenTree};
use quote::{ToTokens, format_ident, quote};
use syn::{DeriveInput, GenericParam, Ident, TypeParam, WherePredicate, parse_macro_input};

/// Main implementation of the Kind derive macro.
pub fn derive_kind_impl(input: TokenStream) -> TokenStream {
    let input = parse_macro_input!(input as DeriveInput);
    TokenStream::from(expand(&input).unwrap_or_else(syn::Error::into_compile_error))
}

/// Whether `tokens` contain `ident` anywhere, including inside groups.
fn mentions(tokens: TokenStream2, ident: &Ident) -> bool {
    tokens.into_iter().any(|tree| match tree {
        TokenTree::Ident(candidate) => candidate == *ident,
        TokenTree::Group(group) => mentions(group.stream(), ident),
        TokenTree::Punct(_) | TokenTree::Literal(_) => false,
    })
}

/// Splits the generics into the fixed parameters and the element parameter.
fn split_parameters(input: &DeriveInput) -> syn::Result<(Vec<&TypeParam>, &Ident)> {
    let mut parameters = Vec::new();
    for parameter in &input.generics.params {
        match parameter {
            GenericParam::Type(type_param) => parameters.push(type_param),
            GenericParam::Lifetime(lifetime) => {
                return Err(syn::Error::new_spanned(
                    lifetime,
                    "Kind cannot be derived for types with lifetime parameters; Kind applications must be 'static",
                ));
            }
            GenericParam::Const(constant) => {
                return Err(syn::Error::new_spanned(
                    constant,
                    "Kind cannot be derived for types with const parameters",
                ));
            }
        }
    }

    let Some((element, fixed)) = parameters.split_last() else {
        return Err(syn::Error::new_spanned(
            &input.ident,
            "Kind can only be derived for generic types; the last type parameter is the element",
        ));
    };
    if !element.bounds.is_empty() {
        return Err(syn::Error::new_spanned(
            element,
            "the element parameter of a Kind cannot have bounds",
        ));
    }
    Ok((fixed.to_vec(), &element.ident))
}

pub(crate) fn expand(input: &DeriveInput) -> syn::Result<TokenStream2> {
    let name = &input.ident;
    let visibility = &input.vis;
    let witness = format_ident!("{}K", name);
    let (fixed, element) = split_parameters(input)?;

    let predicates: Vec<&WherePredicate> = input
        .generics
        .where_clause
        .as_ref()
        .map(|clause| clause.predicates.iter().collect())
        .unwrap_or_default();
    if let Some(predicate) = predicates
        .iter()
        .find(|predicate| mentions(predicate.to_token_stream(), element))
    {
        return Err(syn::Error::new_spanned(
            predicate,
            "the element parameter of a Kind cannot have bounds",
        ));
    }

    let fixed_idents: Vec<&Ident> = fixed.iter().map(|parameter| &parameter.ident).collect();
    let fixed_bounds: Vec<TokenStream2> = fixed
        .iter()
        .map(|parameter| {
            let ident = &parameter.ident;
            let bounds = &parameter.bounds;
            if bounds.is_empty() {
                quote!(#ident: 'static)
            } else {
                quote!(#ident: #bounds + 'static)
            }
        })
        .collect();
    let where_clause = if predicates.is_empty() {
        TokenStream2::new()
    } else {
        quote!(where #(#predicates),*)
    };
    let documentation = format!("Kind witness for [`{name}`].");

    let (witness_definition, witness_type) = if fixed.is_empty() {
        (
            quote! {
                #[doc = #documentation]
                #visibility enum #witness {}
            },
            quote!(#witness),
        )
    } else {
        (
            quote! {
                #[doc = #documentation]
                #visibility struct #witness<#(#fixed_idents),*>(
                    ::core::convert::Infallible,
                    ::core::marker::PhantomData<(#(#fixed_idents,)*)>,
                );
            },
            quote!(#witness<#(#fixed_idents),*>),
        )
    };

    Ok(quote! {
        #witness_definition

        impl<#(#fixed_bounds),*> ::kindred::typeclass::Kind for #witness_type #where_clause {
            type Of<#element: 'static> = #name<#(#fixed_idents,)* #element>;
        }

        impl<#(#fixed_bounds,)* #element: 'static> ::kindred::typeclass::Kinded
            for #name<#(#fixed_idents,)* #element>
        #where_clause
        {
            type Witness = #witness_type;
            type Inner = #element;

            #[inline]
            fn into_kind(self) -> Self {
                self
            }

            #[inline]
            fn from_kind(kind: Self) -> Self {
                kind
            }
        }
    })
}
