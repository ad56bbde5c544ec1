extern crate proc_macro;

use proc_macro::TokenStream;

#[proc_macro_derive(
    Queryable,
    attributes(
        ignore_field,
        table_alias,
        custom_name,
        alias_as,
        alias_as_self,
        wrap_name,
        wrap_value,
        is_null,
        is_not_null,
        between,
        in_range,
        out_range,
        greater_than,
        greater_or_equal,
        less_than,
        less_or_equal,
        not_equal,
        like,
        not_like
    )
)]
pub fn derive_queryable(input: TokenStream) -> TokenStream {
    match tagql_codegen::generate(input.into()) {
        Ok(output) => output.into(),
        Err(e) => e.to_compile_error().into(),
    }
}
