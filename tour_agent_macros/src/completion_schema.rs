use proc_macro::TokenStream;
use proc_macro2::{Span, TokenStream as TokenStream2};
use quote::quote;
use syn::{ItemStruct, LitStr};

use crate::schema_extraction::{
    check_supported, description, doc_text, field_docs, schema_name, SchemaArgs,
};

pub fn completion_schema(attr: TokenStream, item: TokenStream) -> TokenStream {
    expand(attr, item)
        .unwrap_or_else(syn::Error::into_compile_error)
        .into()
}

fn expand(attr: TokenStream, item: TokenStream) -> syn::Result<TokenStream2> {
    let args: SchemaArgs = if attr.is_empty() {
        SchemaArgs::default()
    } else {
        syn::parse(attr)?
    };
    let item_struct: ItemStruct = syn::parse(item)?;
    check_supported(&item_struct)?;

    let name = schema_name(&item_struct, args.name.as_ref());
    let description = match description(args.description.as_ref(), doc_text(&item_struct.attrs))
    {
        Some(lit) => quote! { Some(#lit) },
        None => quote! { None },
    };

    let docs = field_docs(&item_struct).into_iter().map(|(field, doc)| {
        let field = LitStr::new(&field, Span::call_site());
        let doc = LitStr::new(&doc, Span::call_site());
        quote! { (#field, #doc) }
    });

    let ident = &item_struct.ident;
    let type_name = LitStr::new(&ident.to_string(), Span::call_site());

    Ok(quote! {
        #item_struct

        impl tour_agent_rs::schemas::CompletionSchema for #ident {
            fn schema() -> &'static tour_agent_rs::schemas::SchemaHandle {
                static HANDLE: std::sync::OnceLock<tour_agent_rs::schemas::SchemaHandle> =
                    std::sync::OnceLock::new();
                HANDLE.get_or_init(|| {
                    let mut root = schemars::schema_for!(Self);
                    tour_agent_rs::schemas::apply_doc_comments(
                        &mut root,
                        #name,
                        #description,
                        &[#(#docs),*],
                    );
                    tour_agent_rs::schemas::SchemaHandle::from_root_schema::<Self>(
                        #name,
                        #type_name,
                        root,
                    )
                })
            }
        }
    })
}
