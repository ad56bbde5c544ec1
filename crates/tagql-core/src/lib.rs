pub mod builder;
pub use builder::QueryBuilder;

mod error;
pub use error::{AccessError, Error};

pub mod schema;
pub use schema::{FieldDescriptor, Queryable, RecordSchema, SchemaBuilder};

pub mod tag;
pub use tag::{ComparisonSign, Tag, TagKind};

pub mod validate;
pub use validate::ForbiddenCombinations;

/// A Result type alias that uses this crate's [`Error`] type.
pub type Result<T> = core::result::Result<T, Error>;
