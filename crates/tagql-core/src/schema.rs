mod field;
pub use field::FieldDescriptor;

use crate::error::AccessError;
use crate::tag::Tag;

/// Declared-order metadata for one record type.
///
/// Built once per type and cached by the caller (the derive macro caches it
/// in a `OnceLock`); read-only afterwards.
#[derive(Debug, Clone)]
pub struct RecordSchema {
    /// The type's simple name, e.g. `Customer`.
    name: String,

    /// The fully qualified name, used by projection headers.
    full_name: String,

    /// Fields in declaration order. Output order follows this order.
    fields: Vec<FieldDescriptor>,
}

impl RecordSchema {
    pub fn builder(name: impl Into<String>, full_name: impl Into<String>) -> SchemaBuilder {
        SchemaBuilder {
            name: name.into(),
            full_name: full_name.into(),
            fields: Vec::new(),
        }
    }

    /// Gets the simple name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Gets the fully qualified name.
    pub fn full_name(&self) -> &str {
        &self.full_name
    }

    /// Gets the fields, in declaration order.
    pub fn fields(&self) -> &[FieldDescriptor] {
        &self.fields
    }

    /// Looks a field up by declared name.
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|field| field.name() == name)
    }
}

#[derive(Debug)]
pub struct SchemaBuilder {
    name: String,
    full_name: String,
    fields: Vec<FieldDescriptor>,
}

impl SchemaBuilder {
    pub fn field(mut self, name: impl Into<String>, tags: Vec<Tag>) -> Self {
        self.fields.push(FieldDescriptor::new(name, tags));
        self
    }

    pub fn build(self) -> RecordSchema {
        RecordSchema {
            name: self.name,
            full_name: self.full_name,
            fields: self.fields,
        }
    }
}

/// Capability implemented by record types that can be compiled into query
/// fragments. Usually derived with `#[derive(Queryable)]`.
///
/// The two methods are the metadata-provider and accessor collaborators of
/// the compiler: `schema` exposes the cached, declared-order field
/// descriptors; `value_present` probes one field of a live instance.
pub trait Queryable {
    /// The cached schema for this type.
    fn schema() -> &'static RecordSchema;

    /// Whether the given field currently holds a value on this instance.
    ///
    /// Fails with [`AccessError`] when the descriptor does not belong to this
    /// type; the compiler surfaces that as a fatal, wrapped error.
    fn value_present(&self, field: &FieldDescriptor) -> Result<bool, AccessError>;
}
