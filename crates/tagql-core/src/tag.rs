use std::fmt;

/// A declarative marker attached to a record field, describing how the field
/// participates in query generation.
///
/// Tags are attached at declaration time and never change for the lifetime of
/// the field descriptor. At most one tag of each kind may be attached to a
/// field; tags of different kinds combine freely, subject to the
/// [`ForbiddenCombinations`] table.
///
/// [`ForbiddenCombinations`]: crate::validate::ForbiddenCombinations
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Tag {
    /// The field is never considered by the compiler.
    Ignore,

    /// Prefix the name expression with `prefix.`.
    TableAlias(String),

    /// Emit this name instead of the field's declared name.
    CustomName(String),

    /// Suffix the name expression with ` as <name>`.
    AliasAs(String),

    /// Suffix the name expression with ` as <own field name>`.
    AliasAsSelf,

    /// Wrap the whole name expression in a function call.
    WrapName { func: String, after: Option<String> },

    /// Wrap every bound placeholder in a function call.
    WrapValue { func: String, after: Option<String> },

    IsNull,
    IsNotNull,

    /// ` between :from and :to`
    Between { from: String, to: String },

    /// ` > :from and <name> < :to`, or `>=`/`<=` when inclusive.
    InRange {
        from: String,
        to: String,
        inclusive: bool,
    },

    /// ` < :from or <name> > :to`, or `<=`/`>=` when inclusive. The bound
    /// tests are `or`-joined: a value outside the range satisfies either.
    OutRange {
        from: String,
        to: String,
        inclusive: bool,
    },

    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    NotEqual,
    Like,
    NotLike,
}

impl Tag {
    /// Gets the kind, dropping any parameters.
    pub fn kind(&self) -> TagKind {
        match self {
            Tag::Ignore => TagKind::Ignore,
            Tag::TableAlias(..) => TagKind::TableAlias,
            Tag::CustomName(..) => TagKind::CustomName,
            Tag::AliasAs(..) => TagKind::AliasAs,
            Tag::AliasAsSelf => TagKind::AliasAsSelf,
            Tag::WrapName { .. } => TagKind::WrapName,
            Tag::WrapValue { .. } => TagKind::WrapValue,
            Tag::IsNull => TagKind::IsNull,
            Tag::IsNotNull => TagKind::IsNotNull,
            Tag::Between { .. } => TagKind::Between,
            Tag::InRange { .. } => TagKind::InRange,
            Tag::OutRange { .. } => TagKind::OutRange,
            Tag::GreaterThan => TagKind::GreaterThan,
            Tag::GreaterOrEqual => TagKind::GreaterOrEqual,
            Tag::LessThan => TagKind::LessThan,
            Tag::LessOrEqual => TagKind::LessOrEqual,
            Tag::NotEqual => TagKind::NotEqual,
            Tag::Like => TagKind::Like,
            Tag::NotLike => TagKind::NotLike,
        }
    }
}

/// Discriminant of a [`Tag`], without parameters.
///
/// Used as the key of the forbidden-combination table and in error reports.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TagKind {
    Ignore,
    TableAlias,
    CustomName,
    AliasAs,
    AliasAsSelf,
    WrapName,
    WrapValue,
    IsNull,
    IsNotNull,
    Between,
    InRange,
    OutRange,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    NotEqual,
    Like,
    NotLike,
}

impl TagKind {
    pub fn name(self) -> &'static str {
        match self {
            TagKind::Ignore => "Ignore",
            TagKind::TableAlias => "TableAlias",
            TagKind::CustomName => "CustomName",
            TagKind::AliasAs => "AliasAs",
            TagKind::AliasAsSelf => "AliasAsSelf",
            TagKind::WrapName => "WrapName",
            TagKind::WrapValue => "WrapValue",
            TagKind::IsNull => "IsNull",
            TagKind::IsNotNull => "IsNotNull",
            TagKind::Between => "Between",
            TagKind::InRange => "InRange",
            TagKind::OutRange => "OutRange",
            TagKind::GreaterThan => "GreaterThan",
            TagKind::GreaterOrEqual => "GreaterOrEqual",
            TagKind::LessThan => "LessThan",
            TagKind::LessOrEqual => "LessOrEqual",
            TagKind::NotEqual => "NotEqual",
            TagKind::Like => "Like",
            TagKind::NotLike => "NotLike",
        }
    }
}

impl fmt::Display for TagKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

/// Operator lexemes of the target query language.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ComparisonSign {
    Equal,
    NotEqual,
    GreaterThan,
    GreaterOrEqual,
    LessThan,
    LessOrEqual,
    Like,
    NotLike,
    Between,
    IsNull,
    IsNotNull,
}

impl ComparisonSign {
    pub fn sign(self) -> &'static str {
        match self {
            ComparisonSign::Equal => "=",
            ComparisonSign::NotEqual => "!=",
            ComparisonSign::GreaterThan => ">",
            ComparisonSign::GreaterOrEqual => ">=",
            ComparisonSign::LessThan => "<",
            ComparisonSign::LessOrEqual => "<=",
            ComparisonSign::Like => "like",
            ComparisonSign::NotLike => "not like",
            ComparisonSign::Between => "between",
            ComparisonSign::IsNull => "is null",
            ComparisonSign::IsNotNull => "is not null",
        }
    }
}

impl fmt::Display for ComparisonSign {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.sign())
    }
}
