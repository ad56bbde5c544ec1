use crate::error::Error;
use crate::schema::FieldDescriptor;
use crate::tag::TagKind;
use crate::Result;

use indexmap::IndexSet;

/// Symmetric relation over tag kinds that must not appear together on one
/// field.
///
/// Built once (see [`ForbiddenCombinations::standard`]) and read-only
/// afterwards; the [`QueryBuilder`] owns an instance and consults it for
/// every accepted field before any expression is built.
///
/// [`QueryBuilder`]: crate::builder::QueryBuilder
#[derive(Debug, Clone)]
pub struct ForbiddenCombinations {
    pairs: IndexSet<(TagKind, TagKind)>,
}

impl ForbiddenCombinations {
    /// The standard table.
    ///
    /// Two groups are internally exclusive: the comparison/null/range kinds,
    /// and the alias kinds. Kinds outside both groups (`WrapName`,
    /// `WrapValue`, `TableAlias`, `CustomName`) combine freely with anything.
    pub fn standard() -> Self {
        let mut table = Self {
            pairs: IndexSet::new(),
        };

        table.add_group(&[
            TagKind::Between,
            TagKind::GreaterThan,
            TagKind::GreaterOrEqual,
            TagKind::LessThan,
            TagKind::LessOrEqual,
            TagKind::IsNull,
            TagKind::IsNotNull,
            TagKind::NotEqual,
            TagKind::Like,
            TagKind::InRange,
            TagKind::OutRange,
        ]);

        table.add_group(&[TagKind::AliasAs, TagKind::AliasAsSelf]);

        table
    }

    /// Marks every ordered pair of distinct kinds in the group as forbidden.
    fn add_group(&mut self, kinds: &[TagKind]) {
        for &first in kinds {
            for &second in kinds {
                if first != second {
                    self.pairs.insert((first, second));
                }
            }
        }
    }

    pub fn is_forbidden(&self, first: TagKind, second: TagKind) -> bool {
        self.pairs.contains(&(first, second))
    }

    /// Checks every pair of distinct tag kinds attached to the field, in
    /// attachment order, and fails on the first forbidden pair.
    ///
    /// A field with zero or one tags passes trivially.
    pub fn check(&self, field: &FieldDescriptor) -> Result<()> {
        let tags = field.tags();

        if tags.len() <= 1 {
            return Ok(());
        }

        for (i, tag) in tags.iter().enumerate() {
            for inner in &tags[i + 1..] {
                if self.is_forbidden(tag.kind(), inner.kind()) {
                    return Err(Error::invalid_combination(
                        field.name(),
                        tag.kind(),
                        inner.kind(),
                    ));
                }
            }
        }

        Ok(())
    }
}
