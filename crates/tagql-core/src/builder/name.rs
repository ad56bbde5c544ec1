use super::fragment::Fragment;
use super::is_not_blank;

use crate::schema::FieldDescriptor;
use crate::tag::{Tag, TagKind};

/// The name expression for a field: `[prefix.]name[ as alias]`.
///
/// Steps, in fixed order: the `TableAlias` prefix and a dot; the `CustomName`
/// or the declared name; the ` as` suffix from `AliasAsSelf` or `AliasAs`.
pub(super) fn push_name_expr(dst: &mut String, field: &FieldDescriptor) {
    if let Some(Tag::TableAlias(prefix)) = field.tag(TagKind::TableAlias) {
        frag!(dst, prefix '.');
    }

    if let Some(Tag::CustomName(custom)) = field.tag(TagKind::CustomName) {
        frag!(dst, custom);
    } else {
        frag!(dst, field.name());
    }

    if field.has(TagKind::AliasAsSelf) {
        frag!(dst, " as " field.name());
    } else if let Some(Tag::AliasAs(alias)) = field.tag(TagKind::AliasAs) {
        frag!(dst, " as " alias);
    }
}

/// Same, as an owned string. Range predicates repeat the name expression
/// between their two bound tests.
pub(super) fn name_expr(field: &FieldDescriptor) -> String {
    let mut out = String::new();
    push_name_expr(&mut out, field);
    out
}

/// The left-hand expression of a filter predicate: the name expression,
/// wrapped in a function call when `WrapName` is attached. The alias suffix
/// is part of the name expression and therefore ends up inside the wrap
/// call; that ordering is fixed.
pub(super) fn push_wrapped_name(dst: &mut String, field: &FieldDescriptor) {
    match field.tag(TagKind::WrapName) {
        Some(Tag::WrapName { func, after }) => {
            frag!(dst, func '(');
            push_name_expr(dst, field);
            if let Some(after) = after.as_deref().filter(|after| is_not_blank(after)) {
                frag!(dst, ' ' after);
            }
            frag!(dst, ')');
        }
        _ => push_name_expr(dst, field),
    }
}
