use super::fragment::Fragment;
use super::{is_not_blank, name};

use crate::schema::FieldDescriptor;
use crate::tag::{ComparisonSign, Tag, TagKind};

/// Binary tag kinds and their operator lexemes, in precedence order.
const BINARY_SIGNS: [(TagKind, ComparisonSign); 7] = [
    (TagKind::GreaterThan, ComparisonSign::GreaterThan),
    (TagKind::GreaterOrEqual, ComparisonSign::GreaterOrEqual),
    (TagKind::LessThan, ComparisonSign::LessThan),
    (TagKind::LessOrEqual, ComparisonSign::LessOrEqual),
    (TagKind::NotEqual, ComparisonSign::NotEqual),
    (TagKind::Like, ComparisonSign::Like),
    (TagKind::NotLike, ComparisonSign::NotLike),
];

/// Appends the predicate expression for a field.
///
/// Decision order: null test, range test, binary comparison. Exclusivity
/// validation has already guaranteed at most one shape applies; the order is
/// a precedence policy, not a tiebreaker.
pub(super) fn push_predicate(dst: &mut String, field: &FieldDescriptor) {
    if push_null_test(dst, field) {
        return;
    }

    if push_range_test(dst, field) {
        return;
    }

    push_binary(dst, field);
}

fn push_null_test(dst: &mut String, field: &FieldDescriptor) -> bool {
    if field.has(TagKind::IsNull) {
        frag!(dst, ' ' ComparisonSign::IsNull);
        return true;
    }

    if field.has(TagKind::IsNotNull) {
        frag!(dst, ' ' ComparisonSign::IsNotNull);
        return true;
    }

    false
}

/// Range predicates bind two values, keyed to the tag's declared parameter
/// names rather than the field's own name.
fn push_range_test(dst: &mut String, field: &FieldDescriptor) -> bool {
    if let Some(Tag::Between { from, to }) = field.tag(TagKind::Between) {
        frag!(dst, ' ' ComparisonSign::Between ' ');
        push_bound(dst, field, from);
        frag!(dst, " and ");
        push_bound(dst, field, to);
        return true;
    }

    if let Some(Tag::InRange {
        from,
        to,
        inclusive,
    }) = field.tag(TagKind::InRange)
    {
        let (lower, upper) = if *inclusive {
            (ComparisonSign::GreaterOrEqual, ComparisonSign::LessOrEqual)
        } else {
            (ComparisonSign::GreaterThan, ComparisonSign::LessThan)
        };

        frag!(dst, ' ' lower ' ');
        push_bound(dst, field, from);
        frag!(dst, " and " name::name_expr(field) ' ' upper ' ');
        push_bound(dst, field, to);
        return true;
    }

    if let Some(Tag::OutRange {
        from,
        to,
        inclusive,
    }) = field.tag(TagKind::OutRange)
    {
        // Operator senses are inverted relative to InRange, and the bound
        // tests are or-joined.
        let (lower, upper) = if *inclusive {
            (ComparisonSign::LessOrEqual, ComparisonSign::GreaterOrEqual)
        } else {
            (ComparisonSign::LessThan, ComparisonSign::GreaterThan)
        };

        frag!(dst, ' ' lower ' ');
        push_bound(dst, field, from);
        frag!(dst, " or " name::name_expr(field) ' ' upper ' ');
        push_bound(dst, field, to);
        return true;
    }

    false
}

fn push_binary(dst: &mut String, field: &FieldDescriptor) {
    let sign = BINARY_SIGNS
        .iter()
        .find(|(kind, _)| field.has(*kind))
        .map(|&(_, sign)| sign)
        .unwrap_or(ComparisonSign::Equal);

    frag!(dst, ' ' sign ' ');
    push_bound(dst, field, field.name());
}

/// Bound expression for one placeholder: `:param`, or `func(:param[ after])`
/// when the field carries `WrapValue`.
fn push_bound(dst: &mut String, field: &FieldDescriptor, param: &str) {
    match field.tag(TagKind::WrapValue) {
        Some(Tag::WrapValue { func, after }) => {
            frag!(dst, func '(' ':' param);
            if let Some(after) = after.as_deref().filter(|after| is_not_blank(after)) {
                frag!(dst, ' ' after);
            }
            frag!(dst, ')');
        }
        _ => frag!(dst, ':' param),
    }
}
