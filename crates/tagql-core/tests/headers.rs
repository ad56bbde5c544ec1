use pretty_assertions::assert_eq;
use tagql_core::{
    AccessError, FieldDescriptor, Queryable, QueryBuilder, RecordSchema, Tag,
};

use std::sync::OnceLock;

struct Customer;

impl Queryable for Customer {
    fn schema() -> &'static RecordSchema {
        static SCHEMA: OnceLock<RecordSchema> = OnceLock::new();
        SCHEMA.get_or_init(|| RecordSchema::builder("Customer", "store::Customer").build())
    }

    fn value_present(&self, field: &FieldDescriptor) -> Result<bool, AccessError> {
        Err(AccessError::new("Customer", field.name()))
    }
}

#[test]
fn select_header_defaults_the_alias() {
    let builder = QueryBuilder::new();

    assert_eq!(
        builder.select_header::<Customer>(None),
        "select c from Customer c where 1 = 1"
    );
}

#[test]
fn select_header_honors_an_explicit_alias() {
    let builder = QueryBuilder::new();

    assert_eq!(
        builder.select_header::<Customer>(Some("cust")),
        "select cust from Customer cust where 1 = 1"
    );
}

#[test]
fn count_header_wraps_the_alias() {
    let builder = QueryBuilder::new();

    assert_eq!(
        builder.count_header::<Customer>(None),
        "select count(c) from Customer c where 1 = 1"
    );
}

fn projection_schema() -> RecordSchema {
    RecordSchema::builder("CustomerRow", "store.dto.CustomerRow")
        .field("id", vec![])
        .field("name", vec![Tag::AliasAs("customer_name".into())])
        .field("internal", vec![Tag::Ignore])
        .build()
}

#[test]
fn projection_header_joins_name_expressions() {
    let builder = QueryBuilder::new();

    assert_eq!(
        builder.projection_header_for(&projection_schema(), None),
        "select new store.dto.CustomerRow(id, name as customer_name)"
    );
}

#[test]
fn projection_header_appends_follow_up() {
    let builder = QueryBuilder::new();

    assert_eq!(
        builder.projection_header_for(&projection_schema(), Some("order by id")),
        "select new store.dto.CustomerRow(id, name as customer_name) order by id"
    );
}

#[test]
fn empty_projection_still_closes_the_constructor_call() {
    let builder = QueryBuilder::new();
    let schema = RecordSchema::builder("Empty", "store.dto.Empty")
        .field("hidden", vec![Tag::Ignore])
        .build();

    assert_eq!(
        builder.projection_header_for(&schema, None),
        "select new store.dto.Empty()"
    );
    assert_eq!(
        builder.projection_header_for(&schema, Some("order by 1")),
        "select new store.dto.Empty() order by 1"
    );
}

#[test]
fn blank_follow_up_is_dropped() {
    let builder = QueryBuilder::new();

    assert_eq!(
        builder.projection_header_for(&projection_schema(), Some("  ")),
        "select new store.dto.CustomerRow(id, name as customer_name)"
    );
}
