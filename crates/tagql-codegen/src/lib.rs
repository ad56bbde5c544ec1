mod expand;
mod schema;

use proc_macro2::TokenStream;

/// Expands `#[derive(Queryable)]` for one record struct.
pub fn generate(input: TokenStream) -> syn::Result<TokenStream> {
    let item: syn::ItemStruct = syn::parse2(input)?;
    let record = schema::Record::from_ast(&item)?;

    Ok(expand::record(&record))
}

#[cfg(test)]
mod tests {
    use super::*;
    use quote::quote;

    #[test]
    fn expands_a_tagged_struct() {
        let output = generate(quote! {
            struct UserSearch {
                #[table_alias("u")]
                #[like]
                name: Option<String>,
                #[greater_or_equal]
                age: Option<u32>,
                #[ignore_field]
                page: u32,
            }
        })
        .unwrap()
        .to_string();

        assert!(output.contains("Queryable"));
        assert!(output.contains("value_present"));
        assert!(output.contains("TableAlias"));
    }

    #[test]
    fn rejects_tuple_structs() {
        let err = generate(quote! {
            struct Point(u32, u32);
        })
        .unwrap_err();

        assert!(err.to_string().contains("named fields"));
    }

    #[test]
    fn rejects_duplicate_tag_attributes() {
        let err = generate(quote! {
            struct Search {
                #[like]
                #[like]
                name: Option<String>,
            }
        })
        .unwrap_err();

        assert!(err.to_string().contains("duplicate #[like] attribute"));
    }

    #[test]
    fn rejects_unknown_range_arguments() {
        let err = generate(quote! {
            struct Search {
                #[between(from = "a", upto = "b")]
                age: Option<u32>,
            }
        })
        .unwrap_err();

        assert!(err.to_string().contains("unsupported argument"));
    }

    #[test]
    fn reports_every_bad_field_at_once() {
        let err = generate(quote! {
            struct Search {
                #[table_alias]
                name: Option<String>,
                #[between(from = "a")]
                age: Option<u32>,
            }
        })
        .unwrap_err();

        // Both field errors survive aggregation.
        assert_eq!(err.into_iter().count(), 2);
    }
}
