//! Example building a page query and its matching count query in one pass
//!
//! Run with: cargo run --example pagination -p sqlgen
//!
//! Set RUST_LOG=sqlgen=debug to see the assembled statements logged.

use sqlgen::{Builder, Cond, Record, SqlGenResult, Value};
use tracing_subscriber::EnvFilter;

#[derive(Debug, Record)]
struct Product {
    #[sqlgen(json = "id")]
    id: i64,
    #[sqlgen(json = "name")]
    name: String,
    #[sqlgen(json = "price_cents")]
    price_cents: i64,
    #[sqlgen(json = "in_stock")]
    in_stock: bool,
    #[sqlgen(json = "cache_key,omitdb")]
    cache_key: String,
}

fn print(label: &str, sql: &str, args: &[Value]) {
    println!("{label}:");
    println!("  sql:  {sql}");
    println!("  args: {args:?}");
}

fn main() -> SqlGenResult<()> {
    tracing_subscriber::fmt()
        .with_env_filter(EnvFilter::from_default_env())
        .init();

    let product = Product {
        id: 1,
        name: "Keyboard".into(),
        price_cents: 4999,
        in_stock: true,
        cache_key: "products:1".into(),
    };

    let mut insert = Builder::postgres();
    insert.insert_struct("products", &product)?;
    let (sql, args) = insert.query();
    print("insert", sql, args);

    // Filters written once, recorded into both statements.
    let mut count = Builder::postgres();
    count.select(["COUNT(*)"]).from(["products"]);

    let mut page = Builder::postgres();
    page.select_struct(&product, &["in_stock"])?
        .from(["products"])
        .mirror(&mut count)
        .where_and([
            Cond::eq("in_stock", true)?,
            Cond::lte("price_cents", 10_000)?,
        ])
        .where_in("id", [1, 2, 3, 5, 8])
        .detach_mirror();
    page.order_by(["price_cents DESC"]).limit(20).offset(40);

    let (sql, args) = page.into_parts();
    print("page", &sql, &args);

    let (sql, args) = count.query();
    print("count", sql, args);

    Ok(())
}
