use super::derived_traits;
use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::parse::Parser;
use syn::punctuated::Punctuated;
use syn::{Attribute, Expr, ItemStruct, Lit, LitStr, Meta, MetaNameValue, Token};

#[derive(Default)]
struct ModelArgs {
    rename_all: Option<LitStr>,
    deny_unknown_fields: Option<bool>,
}

#[derive(Default)]
struct SerdePresent {
    rename_all: Option<LitStr>,
    deny_unknown_fields: bool,
}

/// Expands the `#[api_model]` attribute macro.
pub fn expand_api_model(args: TokenStream, input: ItemStruct) -> TokenStream {
    match expand(args, &input) {
        Ok(tokens) => tokens,
        Err(err) => err.to_compile_error(),
    }
}

fn expand(args: TokenStream, input: &ItemStruct) -> syn::Result<TokenStream> {
    let args = parse_args(args)?;
    let present = serde_present(&input.attrs)?;

    let derives = derive_attr(&input.attrs);

    let wanted = args.rename_all.unwrap_or_else(|| LitStr::new("camelCase", Span::call_site()));
    let rename = match &present.rename_all {
        Some(existing) if existing.value() != wanted.value() => {
            return Err(syn::Error::new_spanned(
                existing,
                "conflicting serde rename_all; remove it or pass the same value to api_model",
            ));
        },
        Some(_) => quote! {},
        None => quote! { #[serde(rename_all = #wanted)] },
    };

    let deny = match (args.deny_unknown_fields.unwrap_or(true), present.deny_unknown_fields) {
        (false, true) => {
            return Err(syn::Error::new_spanned(
                &input.ident,
                "deny_unknown_fields is already set via serde; remove it before disabling",
            ));
        },
        (true, false) => quote! { #[serde(deny_unknown_fields)] },
        _ => quote! {},
    };

    Ok(quote! {
        #derives
        #rename
        #deny
        #input
    })
}

fn parse_args(args: TokenStream) -> syn::Result<ModelArgs> {
    let metas = Punctuated::<Meta, Token![,]>::parse_terminated.parse2(args)?;
    let mut parsed = ModelArgs::default();

    for meta in metas {
        let Meta::NameValue(nv) = meta else {
            return Err(syn::Error::new_spanned(
                meta,
                "expected name-value arguments like `rename_all = \"camelCase\"`",
            ));
        };

        if nv.path.is_ident("rename_all") {
            let Lit::Str(value) = literal(&nv)? else {
                return Err(syn::Error::new_spanned(&nv.value, "rename_all must be a string"));
            };
            if parsed.rename_all.replace(value.clone()).is_some() {
                return Err(syn::Error::new_spanned(&nv, "duplicate argument"));
            }
        } else if nv.path.is_ident("deny_unknown_fields") {
            let Lit::Bool(value) = literal(&nv)? else {
                return Err(syn::Error::new_spanned(
                    &nv.value,
                    "deny_unknown_fields must be a boolean",
                ));
            };
            if parsed.deny_unknown_fields.replace(value.value).is_some() {
                return Err(syn::Error::new_spanned(&nv, "duplicate argument"));
            }
        } else {
            return Err(syn::Error::new_spanned(
                &nv.path,
                "unsupported argument; expected rename_all or deny_unknown_fields",
            ));
        }
    }

    Ok(parsed)
}

fn literal(nv: &MetaNameValue) -> syn::Result<&Lit> {
    match &nv.value {
        Expr::Lit(expr) => Ok(&expr.lit),
        other => Err(syn::Error::new_spanned(other, "expected a literal")),
    }
}

fn serde_present(attrs: &[Attribute]) -> syn::Result<SerdePresent> {
    let mut present = SerdePresent::default();

    for attr in attrs.iter().filter(|attr| attr.path().is_ident("serde")) {
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("rename_all") {
                present.rename_all = Some(meta.value()?.parse()?);
            } else if meta.path.is_ident("deny_unknown_fields") {
                present.deny_unknown_fields = true;
            } else if meta.input.peek(Token![=]) {
                let _: Expr = meta.value()?.parse()?;
            }
            Ok(())
        })?;
    }

    Ok(present)
}

fn derive_attr(attrs: &[Attribute]) -> TokenStream {
    let present = derived_traits(attrs);
    let wanted: Vec<TokenStream> = [
        ("Debug", quote! { Debug }),
        ("Clone", quote! { Clone }),
        ("Serialize", quote! { ::serde::Serialize }),
        ("Deserialize", quote! { ::serde::Deserialize }),
    ]
    .into_iter()
    .filter(|(name, _)| !present.contains(*name))
    .map(|(_, tokens)| tokens)
    .collect();

    if wanted.is_empty() { quote! {} } else { quote! { #[derive(#(#wanted),*)] } }
}
