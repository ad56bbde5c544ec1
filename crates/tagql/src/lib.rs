//! Compile tagged records into query-language fragments.
//!
//! Record fields carry declarative tags describing how they appear in a
//! query: as a comparison predicate, a null check, a range test, an aliased
//! or renamed column, or a value wrapped by a named function. The
//! [`QueryBuilder`] walks a record's fields, validates that the tags on each
//! field are mutually consistent, and emits a deterministic textual clause.
//!
//! ```
//! use tagql::{Queryable, QueryBuilder};
//!
//! #[derive(Queryable)]
//! struct UserSearch {
//!     #[like]
//!     name: Option<String>,
//!     #[greater_or_equal]
//!     age: Option<u32>,
//! }
//!
//! let builder = QueryBuilder::new();
//! let search = UserSearch { name: None, age: Some(21) };
//!
//! let header = builder.select_header::<UserSearch>(Some("u"));
//! let clause = builder.compile(Some(&search), Some(header.as_str()))?;
//! assert_eq!(
//!     clause,
//!     "select u from UserSearch u where 1 = 1 AND (age >= :age)"
//! );
//! # Ok::<_, tagql::Error>(())
//! ```

pub use tagql_core::{
    builder::QueryBuilder,
    schema::{FieldDescriptor, Queryable, RecordSchema, SchemaBuilder},
    tag::{ComparisonSign, Tag, TagKind},
    validate::ForbiddenCombinations,
    AccessError, Error, Result,
};

pub use tagql_macros::Queryable;
