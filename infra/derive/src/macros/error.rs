use super::derived_traits;
use fxhash::FxHashSet;
use proc_macro2::TokenStream;
use quote::{ToTokens, format_ident, quote};
use syn::{Attribute, Data, DeriveInput, Field, Fields, FieldsNamed, Ident, Type, Variant};

/// A variant that wraps an upstream error.
struct Sourced<'a> {
    field: &'a Ident,
    ty: &'a Type,
}

struct ErrorVariant<'a> {
    ident: &'a Ident,
    source: Option<Sourced<'a>>,
    has_context: bool,
    cfg: Vec<&'a Attribute>,
}

pub fn expand(input: DeriveInput) -> TokenStream {
    let Data::Enum(data) = &input.data else {
        return syn::Error::new_spanned(&input.ident, "tally_error can only be applied to enums")
            .to_compile_error();
    };

    let variants = match data.variants.iter().map(inspect_variant).collect::<Result<Vec<_>, _>>()
    {
        Ok(variants) => variants,
        Err(err) => return err.to_compile_error(),
    };
    if let Err(err) = check_sources(&variants) {
        return err.to_compile_error();
    }

    let name = &input.ident;
    let ext = format_ident!("{}Ext", name);

    let derives = missing_derives(&input.attrs);
    let context_trait = context_trait(name, &ext, &variants);
    let source_impls = variants.iter().filter_map(|v| source_impls(name, &ext, v));
    let internal_impls = internal_impls(name, &variants);

    quote! {
        #[allow(non_shorthand_field_patterns)]
        #derives
        #input

        #context_trait
        #(#source_impls)*
        #internal_impls

        #[allow(dead_code)]
        fn format_context(
            context: &Option<std::borrow::Cow<'static, str>>,
        ) -> std::borrow::Cow<'static, str> {
            match context {
                Some(c) => std::borrow::Cow::Owned(format!(" ({c})")),
                None => std::borrow::Cow::Borrowed(""),
            }
        }
    }
}

fn inspect_variant(variant: &Variant) -> syn::Result<ErrorVariant<'_>> {
    let Fields::Named(fields) = &variant.fields else {
        return Err(syn::Error::new_spanned(
            variant,
            "tally_error variants must use named fields (e.g. `{ message, context }`)",
        ));
    };

    let has_context = match named(fields, "context") {
        Some(field) if is_context_type(&field.ty) => true,
        Some(field) => {
            return Err(syn::Error::new_spanned(
                &field.ty,
                "context field must be Option<Cow<'static, str>>",
            ));
        },
        None => false,
    };

    let source = fields
        .named
        .iter()
        .find(|f| {
            f.ident.as_ref().is_some_and(|i| i == "source")
                || f.attrs.iter().any(|a| a.path().is_ident("source"))
        })
        .and_then(|f| f.ident.as_ref().map(|field| Sourced { field, ty: &f.ty }));

    Ok(ErrorVariant {
        ident: &variant.ident,
        source,
        has_context,
        cfg: variant.attrs.iter().filter(|a| a.path().is_ident("cfg")).collect(),
    })
}

fn named<'a>(fields: &'a FieldsNamed, name: &str) -> Option<&'a Field> {
    fields.named.iter().find(|f| f.ident.as_ref().is_some_and(|i| i == name))
}

fn check_sources(variants: &[ErrorVariant<'_>]) -> syn::Result<()> {
    let mut seen = FxHashSet::default();

    for variant in variants {
        let Some(source) = &variant.source else { continue };

        if !variant.has_context {
            return Err(syn::Error::new_spanned(
                variant.ident,
                "tally_error requires `context: Option<Cow<'static, str>>` next to a source field",
            ));
        }
        if variant.ident != "Internal"
            && !seen.insert(source.ty.to_token_stream().to_string())
        {
            return Err(syn::Error::new_spanned(
                source.ty,
                "each source error type may be wrapped by a single variant",
            ));
        }
    }

    Ok(())
}

fn missing_derives(attrs: &[Attribute]) -> TokenStream {
    let present = derived_traits(attrs);
    let mut wanted = Vec::new();

    if !present.contains("Debug") {
        wanted.push(quote! { Debug });
    }
    if !present.contains("Error") {
        wanted.push(quote! { ::thiserror::Error });
    }

    if wanted.is_empty() { quote! {} } else { quote! { #[derive(#(#wanted),*)] } }
}

fn context_trait(name: &Ident, ext: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let arms = variants.iter().filter(|v| v.has_context).map(|v| {
        let ident = v.ident;
        let cfg = &v.cfg;
        quote! { #(#cfg)* #name::#ident { context: slot, .. } => *slot = Some(context.into()), }
    });

    quote! {
        /// Attaches a human readable context to an error on its way up the stack.
        pub trait #ext<T> {
            fn context(
                self,
                context: impl Into<std::borrow::Cow<'static, str>>,
            ) -> Result<T, #name>;
        }

        #[automatically_derived]
        impl<T> #ext<T> for Result<T, #name> {
            #[inline]
            fn context(self, context: impl Into<std::borrow::Cow<'static, str>>) -> Self {
                self.map_err(|mut err| {
                    match &mut err {
                        #( #arms )*
                        _ => {}
                    }
                    err
                })
            }
        }
    }
}

fn source_impls(name: &Ident, ext: &Ident, variant: &ErrorVariant<'_>) -> Option<TokenStream> {
    if variant.ident == "Internal" {
        return None;
    }
    let Sourced { field, ty } = variant.source.as_ref()?;
    let ident = variant.ident;
    let cfg = &variant.cfg;

    Some(quote! {
        #(#cfg)*
        #[automatically_derived]
        impl From<#ty> for #name {
            #[inline]
            fn from(#field: #ty) -> Self { Self::#ident { #field, context: None } }
        }

        #(#cfg)*
        #[automatically_derived]
        impl<T> #ext<T> for std::result::Result<T, #ty> {
            #[inline]
            fn context(
                self,
                context: impl Into<std::borrow::Cow<'static, str>>,
            ) -> std::result::Result<T, #name> {
                self.map_err(|#field| #name::#ident { #field, context: Some(context.into()) })
            }
        }
    })
}

fn internal_impls(name: &Ident, variants: &[ErrorVariant<'_>]) -> TokenStream {
    let Some(internal) = variants.iter().find(|v| v.ident == "Internal") else {
        return quote! {};
    };
    let cfg = &internal.cfg;

    quote! {
        #(#cfg)*
        impl From<&'static str> for #name {
            #[inline]
            fn from(message: &'static str) -> Self {
                Self::Internal { message: std::borrow::Cow::Borrowed(message), context: None }
            }
        }

        #(#cfg)*
        impl From<String> for #name {
            #[inline]
            fn from(message: String) -> Self {
                Self::Internal { message: std::borrow::Cow::Owned(message), context: None }
            }
        }
    }
}

/// Matches `Option<Cow<'static, str>>`, with or without path prefixes.
fn is_context_type(ty: &Type) -> bool {
    let Some(inner) = single_generic(ty, "Option") else {
        return false;
    };
    let Type::Path(path) = inner else {
        return false;
    };
    let Some(cow) = path.path.segments.last() else {
        return false;
    };
    if cow.ident != "Cow" {
        return false;
    }
    let syn::PathArguments::AngleBracketed(args) = &cow.arguments else {
        return false;
    };

    let mut args = args.args.iter();
    matches!(args.next(), Some(syn::GenericArgument::Lifetime(lt)) if lt.ident == "static")
        && matches!(
            args.next(),
            Some(syn::GenericArgument::Type(Type::Path(s)))
                if s.path.segments.last().is_some_and(|seg| seg.ident == "str")
        )
}

fn single_generic<'a>(ty: &'a Type, wrapper: &str) -> Option<&'a Type> {
    let Type::Path(path) = ty else {
        return None;
    };
    let segment = path.path.segments.last()?;
    if segment.ident != wrapper {
        return None;
    }
    let syn::PathArguments::AngleBracketed(args) = &segment.arguments else {
        return None;
    };
    match args.args.first()? {
        syn::GenericArgument::Type(inner) => Some(inner),
        _ => None,
    }
}
