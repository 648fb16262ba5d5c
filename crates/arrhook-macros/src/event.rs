//! `#[derive(WebhookEvent)]` implementation.
//!
//! # Struct-level attribute `#[event(...)]`
//!
//! | Key | Example | Required | Description |
//! |-----|---------|----------|-------------|
//! | `name` | `"Grab"` | No | Discriminant value (default: type name without `Event`) |
//! | `crate` | `"::arrhook::core"` | No | Path to the core crate |

use proc_macro2::{Span, TokenStream};
use quote::quote;
use syn::{Attribute, Data, DeriveInput, LitStr, Path, spanned::Spanned};

const EVENT_SUFFIX: &str = "Event";

/// Parsed `#[event(...)]` options.
struct EventAttrs {
    name: LitStr,
    krate: Path,
}

pub fn derive_webhook_event(input: &DeriveInput) -> syn::Result<TokenStream> {
    if let Data::Union(_) = input.data {
        return Err(syn::Error::new(
            input.span(),
            "WebhookEvent cannot be derived for unions",
        ));
    }

    let attrs = parse_attrs(&input.attrs, &input.ident)?;
    let ident = &input.ident;
    let EventAttrs { name, krate } = attrs;
    let (impl_generics, ty_generics, where_clause) = input.generics.split_for_impl();

    Ok(quote! {
        impl #impl_generics #krate::WebhookEvent for #ident #ty_generics #where_clause {
            const EVENT_TYPE: &'static str = #name;
        }
    })
}

fn parse_attrs(attrs: &[Attribute], ident: &syn::Ident) -> syn::Result<EventAttrs> {
    let mut name: Option<LitStr> = None;
    let mut krate: Option<Path> = None;

    for attr in attrs {
        if !attr.path().is_ident("event") {
            continue;
        }
        attr.parse_nested_meta(|meta| {
            if meta.path.is_ident("name") {
                let value: LitStr = meta.value()?.parse()?;
                if value.value().is_empty() {
                    return Err(meta.error("event name must not be empty"));
                }
                name = Some(value);
            } else if meta.path.is_ident("crate") {
                let value: LitStr = meta.value()?.parse()?;
                krate = Some(value.parse()?);
            } else {
                return Err(meta.error("unsupported event attribute, expected `name` or `crate`"));
            }
            Ok(())
        })?;
    }

    let name = match name {
        Some(name) => name,
        None => default_name(ident)?,
    };
    let krate = krate.unwrap_or_else(|| syn::parse_quote!(::arrhook_core));

    Ok(EventAttrs { name, krate })
}

fn default_name(ident: &syn::Ident) -> syn::Result<LitStr> {
    let type_name = ident.to_string();
    let stem = type_name.strip_suffix(EVENT_SUFFIX).unwrap_or(&type_name);
    if stem.is_empty() {
        return Err(syn::Error::new(
            ident.span(),
            "cannot infer an event name, add #[event(name = \"...\")]",
        ));
    }
    Ok(LitStr::new(stem, Span::call_site()))
}
