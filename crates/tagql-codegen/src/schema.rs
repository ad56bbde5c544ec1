mod error;
mod field;

pub(crate) use error::ErrorSet;
pub(crate) use field::{Field, TagAttr};

/// Parsed view of one record struct.
pub(crate) struct Record {
    /// Struct identifier
    pub(crate) ident: syn::Ident,

    /// Fields in declaration order
    pub(crate) fields: Vec<Field>,
}

impl Record {
    pub(crate) fn from_ast(item: &syn::ItemStruct) -> syn::Result<Self> {
        let syn::Fields::Named(named) = &item.fields else {
            return Err(syn::Error::new_spanned(
                item,
                "Queryable requires a struct with named fields",
            ));
        };

        let mut errs = ErrorSet::new();
        let mut fields = Vec::new();

        for field in &named.named {
            match Field::from_ast(field) {
                Ok(field) => fields.push(field),
                Err(err) => errs.push(err),
            }
        }

        errs.into_result()?;

        Ok(Self {
            ident: item.ident.clone(),
            fields,
        })
    }
}
