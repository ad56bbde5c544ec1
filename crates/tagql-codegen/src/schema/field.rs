use super::ErrorSet;

/// Parsed view of one record field.
pub(crate) struct Field {
    /// Field identifier
    pub(crate) ident: syn::Ident,

    /// Tags parsed from the field's attributes, in attachment order
    pub(crate) tags: Vec<TagAttr>,

    /// True when the field type is `Option<..>`; presence is then probed
    /// with `is_some()`, otherwise the field always holds a value.
    pub(crate) optional: bool,
}

/// One parsed tag attribute. Mirrors the runtime `Tag` enum but holds the
/// source-level literal values, so expansion can quote them back out.
pub(crate) enum TagAttr {
    Ignore,
    TableAlias(String),
    CustomName(String),
    AliasAs(String),
    AliasAsSelf,
    WrapName { func: String, after: Option<String> },
    WrapValue { func: String, after: Option<String> },
    IsNull,
    IsNotNull,
    Between { from: String, to: String },
    InRange { from: String, to: String, inclusive: bool },
    OutRange { from: String, to: String, inclusive: bool },
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    NotEqual,
    Like,
    NotLike,
}

impl Field {
    pub(crate) fn from_ast(field: &syn::Field) -> syn::Result<Self> {
        let Some(ident) = &field.ident else {
            return Err(syn::Error::new_spanned(field, "record fields must be named"));
        };

        let mut errs = ErrorSet::new();
        let mut tags = Vec::new();
        let mut seen: Vec<String> = Vec::new();

        for attr in &field.attrs {
            let Some(path) = attr.path().get_ident() else {
                continue;
            };
            let name = path.to_string();

            let parsed = match name.as_str() {
                "ignore_field" => marker(attr, TagAttr::Ignore),
                "table_alias" => single(attr).map(TagAttr::TableAlias),
                "custom_name" => single(attr).map(TagAttr::CustomName),
                "alias_as" => single(attr).map(TagAttr::AliasAs),
                "alias_as_self" => marker(attr, TagAttr::AliasAsSelf),
                "wrap_name" => wrap(attr).map(|(func, after)| TagAttr::WrapName { func, after }),
                "wrap_value" => wrap(attr).map(|(func, after)| TagAttr::WrapValue { func, after }),
                "is_null" => marker(attr, TagAttr::IsNull),
                "is_not_null" => marker(attr, TagAttr::IsNotNull),
                "between" => range(attr, false).map(|(from, to, _)| TagAttr::Between { from, to }),
                "in_range" => range(attr, true).map(|(from, to, inclusive)| TagAttr::InRange {
                    from,
                    to,
                    inclusive,
                }),
                "out_range" => range(attr, true).map(|(from, to, inclusive)| TagAttr::OutRange {
                    from,
                    to,
                    inclusive,
                }),
                "greater_than" => marker(attr, TagAttr::GreaterThan),
                "greater_or_equal" => marker(attr, TagAttr::GreaterOrEqual),
                "less_than" => marker(attr, TagAttr::LessThan),
                "less_or_equal" => marker(attr, TagAttr::LessOrEqual),
                "not_equal" => marker(attr, TagAttr::NotEqual),
                "like" => marker(attr, TagAttr::Like),
                "not_like" => marker(attr, TagAttr::NotLike),
                // Foreign attribute (doc comments, other derives, ...)
                _ => continue,
            };

            match parsed {
                Ok(tag) => {
                    if seen.contains(&name) {
                        errs.push(syn::Error::new_spanned(
                            attr,
                            format!("duplicate #[{name}] attribute"),
                        ));
                    } else {
                        seen.push(name);
                        tags.push(tag);
                    }
                }
                Err(err) => errs.push(err),
            }
        }

        errs.into_result()?;

        Ok(Self {
            ident: ident.clone(),
            tags,
            optional: is_option(&field.ty),
        })
    }
}

/// A bare marker attribute, e.g. `#[is_null]`.
fn marker(attr: &syn::Attribute, tag: TagAttr) -> syn::Result<TagAttr> {
    match &attr.meta {
        syn::Meta::Path(_) => Ok(tag),
        _ => Err(syn::Error::new_spanned(attr, "attribute takes no arguments")),
    }
}

/// A single string argument, e.g. `#[table_alias("u")]`.
fn single(attr: &syn::Attribute) -> syn::Result<String> {
    let lit: syn::LitStr = attr.parse_args()?;
    Ok(lit.value())
}

/// `#[wrap_name("func")]` or `#[wrap_name("func", after = "suffix")]`.
fn wrap(attr: &syn::Attribute) -> syn::Result<(String, Option<String>)> {
    attr.parse_args_with(|input: syn::parse::ParseStream<'_>| {
        let func: syn::LitStr = input.parse()?;

        let mut after = None;
        if input.peek(syn::Token![,]) {
            input.parse::<syn::Token![,]>()?;

            let key: syn::Ident = input.parse()?;
            if key != "after" {
                return Err(syn::Error::new(key.span(), "expected `after`"));
            }

            input.parse::<syn::Token![=]>()?;
            let lit: syn::LitStr = input.parse()?;
            after = Some(lit.value());
        }

        Ok((func.value(), after))
    })
}

/// `#[between(from = "a", to = "b")]`; `in_range`/`out_range` additionally
/// accept `inclusive` (bare or `inclusive = <bool>`, default false).
fn range(attr: &syn::Attribute, allow_inclusive: bool) -> syn::Result<(String, String, bool)> {
    let mut from = None;
    let mut to = None;
    let mut inclusive = false;

    attr.parse_nested_meta(|meta| {
        if meta.path.is_ident("from") {
            let lit: syn::LitStr = meta.value()?.parse()?;
            from = Some(lit.value());
            Ok(())
        } else if meta.path.is_ident("to") {
            let lit: syn::LitStr = meta.value()?.parse()?;
            to = Some(lit.value());
            Ok(())
        } else if allow_inclusive && meta.path.is_ident("inclusive") {
            if meta.input.peek(syn::Token![=]) {
                let lit: syn::LitBool = meta.value()?.parse()?;
                inclusive = lit.value();
            } else {
                inclusive = true;
            }
            Ok(())
        } else {
            Err(meta.error("unsupported argument"))
        }
    })?;

    let from = from.ok_or_else(|| syn::Error::new_spanned(attr, "missing `from` parameter"))?;
    let to = to.ok_or_else(|| syn::Error::new_spanned(attr, "missing `to` parameter"))?;

    Ok((from, to, inclusive))
}

fn is_option(ty: &syn::Type) -> bool {
    let syn::Type::Path(path) = ty else {
        return false;
    };

    path.qself.is_none()
        && path
            .path
            .segments
            .last()
            .is_some_and(|segment| segment.ident == "Option")
}
