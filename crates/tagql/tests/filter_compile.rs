use pretty_assertions::assert_eq;
use tagql::{Queryable, QueryBuilder};

#[derive(Queryable)]
struct UserSearch {
    #[table_alias("u")]
    #[custom_name("full_name")]
    #[alias_as_self]
    #[like]
    name: Option<String>,

    #[greater_or_equal]
    age: Option<u32>,

    #[allow(dead_code)]
    #[ignore_field]
    page: u32,
}

fn search(name: Option<&str>, age: Option<u32>) -> UserSearch {
    UserSearch {
        name: name.map(String::from),
        age,
        page: 0,
    }
}

#[test]
fn derived_record_compiles_in_declared_order() -> anyhow::Result<()> {
    let builder = QueryBuilder::new();

    let clause = builder.compile(Some(&search(Some("ann"), Some(21))), None)?;
    assert_eq!(
        clause,
        " AND (u.full_name as name like :name) AND (age >= :age)"
    );

    Ok(())
}

#[test]
fn single_comparison_fragment() -> anyhow::Result<()> {
    let builder = QueryBuilder::new();

    let clause = builder.compile(Some(&search(None, Some(21))), None)?;
    assert_eq!(clause, " AND (age >= :age)");

    Ok(())
}

#[test]
fn preset_fragment_seeds_the_clause() -> anyhow::Result<()> {
    let builder = QueryBuilder::new();
    let header = builder.select_header::<UserSearch>(Some("u"));

    let clause = builder.compile(Some(&search(None, Some(21))), Some(header.as_str()))?;
    assert_eq!(
        clause,
        "select u from UserSearch u where 1 = 1 AND (age >= :age)"
    );

    Ok(())
}

#[test]
fn absent_record_fails() {
    let builder = QueryBuilder::new();

    let err = builder.compile::<UserSearch>(None, None).unwrap_err();
    assert!(err.is_invalid_argument());
}

#[derive(Queryable)]
struct OrderSearch {
    #[wrap_name("upper")]
    #[wrap_value("lower")]
    #[not_equal]
    code: Option<String>,

    #[in_range(from = "min_total", to = "max_total", inclusive)]
    total: Option<u64>,

    #[out_range(from = "start", to = "end")]
    placed_at: Option<String>,

    #[between(from = "first", to = "last")]
    #[wrap_value("date")]
    updated_at: Option<String>,
}

#[test]
fn wrapped_binary_comparison() -> anyhow::Result<()> {
    let builder = QueryBuilder::new();
    let record = OrderSearch {
        code: Some("A1".into()),
        total: None,
        placed_at: None,
        updated_at: None,
    };

    let clause = builder.compile(Some(&record), None)?;
    assert_eq!(clause, " AND (upper(code) != lower(:code))");

    Ok(())
}

#[test]
fn inclusive_in_range_uses_named_bounds() -> anyhow::Result<()> {
    let builder = QueryBuilder::new();
    let record = OrderSearch {
        code: None,
        total: Some(10),
        placed_at: None,
        updated_at: None,
    };

    let clause = builder.compile(Some(&record), None)?;
    assert_eq!(clause, " AND (total >= :min_total and total <= :max_total)");

    Ok(())
}

#[test]
fn out_range_is_or_joined() -> anyhow::Result<()> {
    let builder = QueryBuilder::new();
    let record = OrderSearch {
        code: None,
        total: None,
        placed_at: Some("2024-01-01".into()),
        updated_at: None,
    };

    let clause = builder.compile(Some(&record), None)?;
    assert_eq!(clause, " AND (placed_at < :start or placed_at > :end)");

    Ok(())
}

#[test]
fn between_bounds_are_value_wrapped() -> anyhow::Result<()> {
    let builder = QueryBuilder::new();
    let record = OrderSearch {
        code: None,
        total: None,
        placed_at: None,
        updated_at: Some("2024-01-01".into()),
    };

    let clause = builder.compile(Some(&record), None)?;
    assert_eq!(clause, " AND (updated_at between date(:first) and date(:last))");

    Ok(())
}

#[test]
fn output_is_idempotent() -> anyhow::Result<()> {
    let builder = QueryBuilder::new();
    let record = search(Some("ann"), Some(21));

    assert_eq!(
        builder.compile(Some(&record), None)?,
        builder.compile(Some(&record), None)?
    );

    Ok(())
}
