use crate::schema::{Field, Record, TagAttr};

use proc_macro2::TokenStream;
use quote::quote;

/// Expands the `Queryable` implementation for one record.
pub(crate) fn record(record: &Record) -> TokenStream {
    let tagql = quote!(tagql);
    let ident = &record.ident;
    let name = ident.to_string();

    let schema_fields = record
        .fields
        .iter()
        .map(|field| expand_schema_field(&tagql, field));

    let presence_arms = record.fields.iter().map(expand_presence_arm);

    wrap_in_const(quote! {
        impl #tagql::Queryable for #ident {
            fn schema() -> &'static #tagql::RecordSchema {
                static SCHEMA: ::std::sync::OnceLock<#tagql::RecordSchema> =
                    ::std::sync::OnceLock::new();

                SCHEMA.get_or_init(|| {
                    #tagql::RecordSchema::builder(#name, concat!(module_path!(), "::", #name))
                        #(#schema_fields)*
                        .build()
                })
            }

            fn value_present(
                &self,
                field: &#tagql::FieldDescriptor,
            ) -> ::std::result::Result<bool, #tagql::AccessError> {
                match field.name() {
                    #(#presence_arms)*
                    other => ::std::result::Result::Err(#tagql::AccessError::new(#name, other)),
                }
            }
        }
    })
}

fn expand_schema_field(tagql: &TokenStream, field: &Field) -> TokenStream {
    let name = field.ident.to_string();
    let tags = field.tags.iter().map(|tag| expand_tag(tagql, tag));

    quote! {
        .field(#name, ::std::vec![#(#tags),*])
    }
}

fn expand_presence_arm(field: &Field) -> TokenStream {
    let ident = &field.ident;
    let name = ident.to_string();

    if field.optional {
        quote!(#name => ::std::result::Result::Ok(self.#ident.is_some()),)
    } else {
        quote!(#name => ::std::result::Result::Ok(true),)
    }
}

fn expand_tag(tagql: &TokenStream, tag: &TagAttr) -> TokenStream {
    match tag {
        TagAttr::Ignore => quote!(#tagql::Tag::Ignore),
        TagAttr::TableAlias(prefix) => quote!(#tagql::Tag::TableAlias(#prefix.into())),
        TagAttr::CustomName(name) => quote!(#tagql::Tag::CustomName(#name.into())),
        TagAttr::AliasAs(alias) => quote!(#tagql::Tag::AliasAs(#alias.into())),
        TagAttr::AliasAsSelf => quote!(#tagql::Tag::AliasAsSelf),
        TagAttr::WrapName { func, after } => {
            let after = expand_opt(after);
            quote!(#tagql::Tag::WrapName { func: #func.into(), after: #after })
        }
        TagAttr::WrapValue { func, after } => {
            let after = expand_opt(after);
            quote!(#tagql::Tag::WrapValue { func: #func.into(), after: #after })
        }
        TagAttr::IsNull => quote!(#tagql::Tag::IsNull),
        TagAttr::IsNotNull => quote!(#tagql::Tag::IsNotNull),
        TagAttr::Between { from, to } => {
            quote!(#tagql::Tag::Between { from: #from.into(), to: #to.into() })
        }
        TagAttr::InRange {
            from,
            to,
            inclusive,
        } => quote! {
            #tagql::Tag::InRange { from: #from.into(), to: #to.into(), inclusive: #inclusive }
        },
        TagAttr::OutRange {
            from,
            to,
            inclusive,
        } => quote! {
            #tagql::Tag::OutRange { from: #from.into(), to: #to.into(), inclusive: #inclusive }
        },
        TagAttr::GreaterThan => quote!(#tagql::Tag::GreaterThan),
        TagAttr::GreaterOrEqual => quote!(#tagql::Tag::GreaterOrEqual),
        TagAttr::LessThan => quote!(#tagql::Tag::LessThan),
        TagAttr::LessOrEqual => quote!(#tagql::Tag::LessOrEqual),
        TagAttr::NotEqual => quote!(#tagql::Tag::NotEqual),
        TagAttr::Like => quote!(#tagql::Tag::Like),
        TagAttr::NotLike => quote!(#tagql::Tag::NotLike),
    }
}

fn expand_opt(value: &Option<String>) -> TokenStream {
    match value {
        Some(value) => quote!(::std::option::Option::Some(#value.into())),
        None => quote!(::std::option::Option::None),
    }
}

fn wrap_in_const(tokens: TokenStream) -> TokenStream {
    quote! {
        const _: () = {
            #tokens
        };
    }
}
