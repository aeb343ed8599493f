use super::derived_trait_names;
use proc_macro2::TokenStream;
use quote::{format_ident, quote};
use syn::parse::Parser;
use syn::{Attribute, Fields, Ident, ItemEnum, LitStr, Meta};

const INTEGER_REPRS: &[&str] = &[
    "u8", "u16", "u32", "u64", "u128", "usize", "i8", "i16", "i32", "i64", "i128", "isize",
];

const INJECTED_DERIVES: &[&str] = &["Debug", "Clone", "Copy", "PartialEq", "Eq", "Hash"];

#[derive(Default)]
struct EnumerationArgs {
    flags: bool,
}

struct Member {
    ident: Ident,
    description: Option<LitStr>,
}

pub fn expand_enumeration(args: TokenStream, mut input: ItemEnum) -> TokenStream {
    match expand(args, &mut input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(args: TokenStream, input: &mut ItemEnum) -> syn::Result<TokenStream> {
    let args = parse_args(args)?;
    let name = input.ident.clone();

    if !input.generics.params.is_empty() {
        return Err(syn::Error::new_spanned(
            &input.generics,
            "enumeration does not support generic enums",
        ));
    }
    if input.variants.is_empty() {
        return Err(syn::Error::new_spanned(&name, "enumeration requires at least one variant"));
    }

    let members = collect_members(input)?;
    let repr = repr_type(&input.attrs)?;
    let extra_derives = missing_derives(&input.attrs);

    let idents: Vec<&Ident> = members.iter().map(|m| &m.ident).collect();
    let names: Vec<String> = idents.iter().map(ToString::to_string).collect();
    let descriptions = members.iter().map(|m| match &m.description {
        Some(lit) => quote! { ::core::option::Option::Some(#lit) },
        None => quote! { ::core::option::Option::None },
    });

    let flag_impls = args.flags.then(|| flag_impls(&name));

    Ok(quote! {
        #extra_derives
        #input

        #[automatically_derived]
        impl ::enumtools::Enumeration for #name {
            type Repr = #repr;

            const MEMBERS: &'static [Self] = &[#(Self::#idents),*];

            #[inline]
            fn name(self) -> &'static str {
                match self {
                    #(Self::#idents => #names,)*
                }
            }

            #[inline]
            fn description(self) -> ::core::option::Option<&'static str> {
                match self {
                    #(Self::#idents => #descriptions,)*
                }
            }

            #[inline]
            fn to_repr(self) -> #repr {
                self as #repr
            }
        }

        #flag_impls
    })
}

fn parse_args(args: TokenStream) -> syn::Result<EnumerationArgs> {
    let parser = syn::punctuated::Punctuated::<Meta, syn::Token![,]>::parse_terminated;
    let mut parsed = EnumerationArgs::default();

    for meta in parser.parse2(args)? {
        match meta {
            Meta::Path(path) if path.is_ident("flags") => {
                if parsed.flags {
                    return Err(syn::Error::new_spanned(path, "Duplicate `flags` argument"));
                }
                parsed.flags = true;
            },
            other => {
                return Err(syn::Error::new_spanned(other, "Only the `flags` argument is supported"));
            },
        }
    }

    Ok(parsed)
}

/// Validates variants and strips their `#[description(...)]` attributes.
fn collect_members(input: &mut ItemEnum) -> syn::Result<Vec<Member>> {
    let mut members = Vec::with_capacity(input.variants.len());

    for variant in &mut input.variants {
        if !matches!(variant.fields, Fields::Unit) {
            return Err(syn::Error::new_spanned(
                &variant.fields,
                "enumeration only supports fieldless variants",
            ));
        }

        let mut description = None;
        let mut kept = Vec::with_capacity(variant.attrs.len());
        for attr in variant.attrs.drain(..) {
            if !attr.path().is_ident("description") {
                kept.push(attr);
                continue;
            }
            if description.is_some() {
                return Err(syn::Error::new_spanned(attr, "Duplicate `#[description(...)]`"));
            }
            let lit = attr.parse_args::<LitStr>().map_err(|err| {
                syn::Error::new(err.span(), "Expected `#[description(\"...\")]`")
            })?;
            description = Some(lit);
        }
        variant.attrs = kept;

        members.push(Member { ident: variant.ident.clone(), description });
    }

    Ok(members)
}

/// Picks the integer type from `#[repr(..)]`, falling back to `isize`.
fn repr_type(attrs: &[Attribute]) -> syn::Result<Ident> {
    let mut repr = None;

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("repr")) {
        attr.parse_nested_meta(|meta| {
            if let Some(ident) = meta.path.get_ident()
                && INTEGER_REPRS.iter().any(|candidate| ident == candidate)
            {
                repr = Some(ident.clone());
            }
            if meta.input.peek(syn::token::Paren) {
                let _args;
                syn::parenthesized!(_args in meta.input);
            }
            Ok(())
        })?;
    }

    Ok(repr.unwrap_or_else(|| format_ident!("isize")))
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let derived = derived_trait_names(attrs);
    let missing: Vec<Ident> = INJECTED_DERIVES
        .iter()
        .filter(|name| !derived.contains(**name))
        .map(|name| format_ident!("{name}"))
        .collect();

    if missing.is_empty() {
        quote! {}
    } else {
        quote! { #[derive(#(#missing),*)] }
    }
}

fn flag_impls(name: &Ident) -> TokenStream {
    quote! {
        #[automatically_derived]
        impl ::enumtools::FlagEnum for #name {}

        #[automatically_derived]
        impl ::core::ops::BitOr for #name {
            type Output = ::enumtools::Flags<Self>;

            #[inline]
            fn bitor(self, rhs: Self) -> Self::Output {
                ::enumtools::Flags::from(self) | rhs
            }
        }

        #[automatically_derived]
        impl ::core::ops::BitOr<::enumtools::Flags<#name>> for #name {
            type Output = ::enumtools::Flags<Self>;

            #[inline]
            fn bitor(self, rhs: ::enumtools::Flags<Self>) -> Self::Output {
                rhs | self
            }
        }

        #[automatically_derived]
        impl ::core::ops::BitAnd for #name {
            type Output = ::enumtools::Flags<Self>;

            #[inline]
            fn bitand(self, rhs: Self) -> Self::Output {
                ::enumtools::Flags::from(self) & rhs
            }
        }
    }
}
