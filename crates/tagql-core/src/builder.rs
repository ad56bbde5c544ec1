#[macro_use]
mod fragment;
use fragment::Fragment;

mod name;
mod predicate;

use crate::error::Error;
use crate::schema::{Queryable, RecordSchema};
use crate::validate::ForbiddenCombinations;
use crate::Result;

/// Compiles tagged records into query-language fragments.
///
/// The forbidden-combination table is built once in [`QueryBuilder::new`] and
/// never mutated afterwards; everything else is local to each call, so a
/// single instance can be shared across threads.
#[derive(Debug, Clone)]
pub struct QueryBuilder {
    forbidden: ForbiddenCombinations,
}

impl Default for QueryBuilder {
    fn default() -> Self {
        Self::new()
    }
}

impl QueryBuilder {
    pub fn new() -> Self {
        Self::with_forbidden(ForbiddenCombinations::standard())
    }

    /// Builds a compiler around a caller-supplied exclusivity table.
    pub fn with_forbidden(forbidden: ForbiddenCombinations) -> Self {
        Self { forbidden }
    }

    /// Compiles the filter clause for a record instance.
    ///
    /// Every accepted field (not tagged `Ignore`, currently holding a value)
    /// is validated against the forbidden-combination table and appended as
    /// ` AND (<name expression> <predicate>)`, in declared field order. The
    /// buffer is seeded with `preset` when it is non-blank.
    ///
    /// Fails when `record` is absent, when an accepted field carries a
    /// forbidden tag combination, or when the accessor cannot read a field;
    /// no partial clause is returned in any of those cases.
    pub fn compile<T: Queryable>(
        &self,
        record: Option<&T>,
        preset: Option<&str>,
    ) -> Result<String> {
        let record = record.ok_or_else(Error::absent_record)?;

        let mut query = String::new();

        if let Some(preset) = preset.filter(|preset| is_not_blank(preset)) {
            query.push_str(preset);
        }

        for field in T::schema().fields() {
            if field.is_ignored() {
                continue;
            }

            if !record.value_present(field)? {
                continue;
            }

            self.forbidden.check(field)?;

            frag!(&mut query, " AND (");
            name::push_wrapped_name(&mut query, field);
            predicate::push_predicate(&mut query, field);
            frag!(&mut query, ')');
        }

        Ok(query)
    }

    /// `select a from Entity a where 1 = 1`, meant for further concatenation.
    pub fn select_header<T: Queryable>(&self, alias: Option<&str>) -> String {
        self.entity_header(T::schema().name(), alias, false)
    }

    /// `select count(a) from Entity a where 1 = 1`.
    pub fn count_header<T: Queryable>(&self, alias: Option<&str>) -> String {
        self.entity_header(T::schema().name(), alias, true)
    }

    /// [`select_header`] for callers holding only an entity name.
    ///
    /// [`select_header`]: QueryBuilder::select_header
    pub fn select_header_named(&self, entity: &str, alias: Option<&str>) -> String {
        self.entity_header(entity, alias, false)
    }

    /// [`count_header`] for callers holding only an entity name.
    ///
    /// [`count_header`]: QueryBuilder::count_header
    pub fn count_header_named(&self, entity: &str, alias: Option<&str>) -> String {
        self.entity_header(entity, alias, true)
    }

    fn entity_header(&self, entity: &str, alias: Option<&str>, count: bool) -> String {
        let alias = match alias.filter(|alias| is_not_blank(alias)) {
            Some(alias) => alias.to_string(),
            None => default_alias(entity),
        };

        let mut query = String::from("select ");

        if count {
            frag!(&mut query, "count(" alias.as_str() ')');
        } else {
            frag!(&mut query, alias.as_str());
        }

        frag!(&mut query, " from " entity ' ' alias.as_str() " where 1 = 1");

        query
    }

    /// `select new full.path.Type(field1, field2 as alias2)`: a projection
    /// header over the non-ignored fields of a projection type, each rendered
    /// through the name expression only.
    ///
    /// With zero eligible fields the constructor call is still closed:
    /// `select new full.path.Type()`. A non-blank `follow_up` is appended
    /// after a single space.
    pub fn projection_header<T: Queryable>(&self, follow_up: Option<&str>) -> String {
        self.projection_header_for(T::schema(), follow_up)
    }

    /// [`projection_header`] for callers holding a schema directly.
    ///
    /// [`projection_header`]: QueryBuilder::projection_header
    pub fn projection_header_for(
        &self,
        schema: &RecordSchema,
        follow_up: Option<&str>,
    ) -> String {
        let mut query = String::new();

        frag!(&mut query, "select new " schema.full_name() '(');

        let mut sep = "";
        for field in schema.fields() {
            if field.is_ignored() {
                continue;
            }

            frag!(&mut query, sep);
            name::push_name_expr(&mut query, field);
            sep = ", ";
        }

        frag!(&mut query, ')');

        if let Some(follow_up) = follow_up.filter(|follow_up| is_not_blank(follow_up)) {
            frag!(&mut query, ' ' follow_up);
        }

        query
    }
}

/// Default entity alias: the lowercase first character of the simple name.
fn default_alias(entity: &str) -> String {
    entity
        .chars()
        .next()
        .map(|c| c.to_lowercase().collect())
        .unwrap_or_default()
}

fn is_not_blank(s: &str) -> bool {
    !s.trim().is_empty()
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn default_alias_lowercases_first_char() {
        assert_eq!(default_alias("Customer"), "c");
        assert_eq!(default_alias("order"), "o");
        assert_eq!(default_alias(""), "");
    }

    #[test]
    fn named_select_header() {
        let builder = QueryBuilder::new();

        assert_eq!(
            builder.select_header_named("Customer", None),
            "select c from Customer c where 1 = 1"
        );
        assert_eq!(
            builder.select_header_named("Customer", Some("cust")),
            "select cust from Customer cust where 1 = 1"
        );
    }

    #[test]
    fn named_count_header() {
        let builder = QueryBuilder::new();

        assert_eq!(
            builder.count_header_named("Order", None),
            "select count(o) from Order o where 1 = 1"
        );
    }

    #[test]
    fn blank_alias_falls_back_to_default() {
        let builder = QueryBuilder::new();

        assert_eq!(
            builder.select_header_named("Customer", Some("  ")),
            "select c from Customer c where 1 = 1"
        );
    }
}
