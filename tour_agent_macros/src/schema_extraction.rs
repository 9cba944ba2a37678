use proc_macro2::Span;
use syn::{
    parse::{Parse, ParseStream},
    punctuated::Punctuated,
    spanned::Spanned,
    Attribute, Expr, ExprLit, Fields, ItemStruct, Lit, LitStr, MetaNameValue, Token,
};

/// Arguments accepted by `#[completion_schema(name = "...", description = "...")]`.
#[derive(Default)]
pub struct SchemaArgs {
    pub name: Option<LitStr>,
    pub description: Option<LitStr>,
}

impl Parse for SchemaArgs {
    fn parse(input: ParseStream) -> syn::Result<Self> {
        let mut args = SchemaArgs::default();
        let pairs = Punctuated::<MetaNameValue, Token![,]>::parse_terminated(input)?;

        for pair in pairs {
            let key = pair
                .path
                .get_ident()
                .ok_or_else(|| syn::Error::new_spanned(&pair.path, "expected identifier"))?;
            let value = string_literal(&pair.value)?;

            let slot = match key.to_string().as_str() {
                "name" => &mut args.name,
                "description" => &mut args.description,
                other => {
                    return Err(syn::Error::new(
                        key.span(),
                        format!("unsupported argument `{other}`"),
                    ))
                }
            };

            if slot.replace(value).is_some() {
                return Err(syn::Error::new(
                    key.span(),
                    format!("duplicate `{key}` argument"),
                ));
            }
        }

        Ok(args)
    }
}

fn string_literal(expr: &Expr) -> syn::Result<LitStr> {
    match expr {
        Expr::Lit(ExprLit {
            lit: Lit::Str(lit), ..
        }) => Ok(lit.clone()),
        other => Err(syn::Error::new_spanned(other, "expected string literal value")),
    }
}

/// Reject tuple/unit structs and generic structs; the schema is cached per type.
pub fn check_supported(item: &ItemStruct) -> syn::Result<()> {
    if !matches!(item.fields, Fields::Named(_)) {
        return Err(syn::Error::new(
            item.struct_token.span(),
            "`#[completion_schema]` only supports structs with named fields",
        ));
    }

    if !item.generics.params.is_empty() {
        return Err(syn::Error::new(
            item.generics.span(),
            "`#[completion_schema]` does not support generic structs",
        ));
    }

    Ok(())
}

/// Joined `///` text of an item, if any.
pub fn doc_text(attrs: &[Attribute]) -> Option<String> {
    let lines: Vec<String> = attrs
        .iter()
        .filter(|attr| attr.path().is_ident("doc"))
        .filter_map(|attr| match &attr.meta {
            syn::Meta::NameValue(MetaNameValue {
                value: Expr::Lit(ExprLit {
                    lit: Lit::Str(lit), ..
                }),
                ..
            }) => Some(lit.value().trim().to_string()),
            _ => None,
        })
        .collect();

    (!lines.is_empty()).then(|| lines.join("\n"))
}

/// `(field name, doc text)` for every documented named field.
pub fn field_docs(item: &ItemStruct) -> Vec<(String, String)> {
    let Fields::Named(fields) = &item.fields else {
        return Vec::new();
    };

    fields
        .named
        .iter()
        .filter_map(|field| {
            let ident = field.ident.as_ref()?;
            let doc = doc_text(&field.attrs)?;
            Some((serialized_field_name(item, &ident.to_string()), doc))
        })
        .collect()
}

/// Apply a container-level `#[serde(rename_all = "camelCase")]` so doc
/// comments land on the property names that actually appear in the schema.
fn serialized_field_name(item: &ItemStruct, field: &str) -> String {
    let camel = item.attrs.iter().any(|attr| {
        attr.path().is_ident("serde")
            && attr
                .meta
                .require_list()
                .map(|list| list.tokens.to_string().contains("camelCase"))
                .unwrap_or(false)
    });

    if !camel {
        return field.to_string();
    }

    let mut out = String::with_capacity(field.len());
    let mut upper_next = false;
    for ch in field.chars() {
        if ch == '_' {
            upper_next = true;
        } else if upper_next {
            out.extend(ch.to_uppercase());
            upper_next = false;
        } else {
            out.push(ch);
        }
    }
    out
}

pub fn schema_name(item: &ItemStruct, explicit: Option<&LitStr>) -> LitStr {
    explicit
        .cloned()
        .unwrap_or_else(|| LitStr::new(&item.ident.to_string(), Span::call_site()))
}

pub fn description(explicit: Option<&LitStr>, docs: Option<String>) -> Option<LitStr> {
    explicit
        .cloned()
        .or_else(|| docs.map(|text| LitStr::new(&text, Span::call_site())))
}
