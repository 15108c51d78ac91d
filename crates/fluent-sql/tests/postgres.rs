#![cfg(feature = "pool")]

use fluent_sql::{
    Assignment, Connection, ConnectionConfig, Having, Join, Order, PgConnection, Predicate,
    Scalar, SqlError, SqlResult, table,
};
use std::time::{SystemTime, UNIX_EPOCH};

fn connect(test: &str) -> SqlResult<Option<PgConnection>> {
    if std::env::var("DATABASE_URL").is_err() {
        eprintln!("DATABASE_URL is not set; skipping {test}");
        return Ok(None);
    }
    let config = ConnectionConfig::from_env()?;
    Ok(Some(PgConnection::new(&config)?))
}

fn unique_table(prefix: &str) -> String {
    let nanos = SystemTime::now()
        .duration_since(UNIX_EPOCH)
        .expect("clock before UNIX_EPOCH")
        .as_nanos();
    format!("{prefix}_{}_{}", std::process::id(), nanos)
}

async fn create_users(conn: &PgConnection, name: &str) -> SqlResult<()> {
    conn.execute(&format!(
        "CREATE TABLE {name} (id BIGSERIAL PRIMARY KEY, name TEXT NOT NULL, email TEXT, age INT)"
    ))
    .await?;
    Ok(())
}

async fn drop_table(conn: &PgConnection, name: &str) -> SqlResult<()> {
    conn.execute(&format!("DROP TABLE IF EXISTS {name}")).await?;
    Ok(())
}

#[tokio::test]
async fn insert_select_update_delete() -> SqlResult<()> {
    let Some(conn) = connect("insert_select_update_delete")? else {
        return Ok(());
    };
    let users = unique_table("fluent_users");
    create_users(&conn, &users).await?;

    for (name, age) in [("John", 30), ("Jane", 25), ("Joe", 41)] {
        let mut qb = table(&users);
        qb.insert([("name", Scalar::from(name)), ("age", Scalar::from(age))]);
        qb.fetch_all(&conn).await?;
    }

    let mut qb = table(&users);
    qb.select(["name", "age"])
        .where_([Predicate::like("name", "Jo%")])?
        .order_by([Order::desc("age")])?;
    let rows = qb.fetch_all(&conn).await?;
    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0]["name"], "Joe");
    assert_eq!(rows[0]["age"], 41);
    assert_eq!(rows[1]["name"], "John");

    let mut qb = table(&users);
    qb.update([Assignment::new("email", "jane@example.com")])
        .where_([Predicate::eq("name", "Jane")])?;
    qb.fetch_all(&conn).await?;

    let mut qb = table(&users);
    qb.select_all().where_([Predicate::eq("name", "Jane")])?;
    let rows = qb.fetch_all(&conn).await?;
    assert_eq!(rows[0]["email"], "jane@example.com");

    let mut qb = table(&users);
    qb.select_all().where_([Predicate::eq("name", "John")])?;
    let rows = qb.fetch_all(&conn).await?;
    assert!(rows[0]["email"].is_null());

    let mut qb = table(&users);
    qb.delete().where_([Predicate::between("age", 20, 35)])?;
    qb.fetch_all(&conn).await?;

    let mut qb = table(&users);
    qb.select_all();
    let rows = qb.fetch_all(&conn).await?;
    assert_eq!(rows.len(), 1);

    drop_table(&conn, &users).await
}

#[tokio::test]
async fn join_and_group_by() -> SqlResult<()> {
    let Some(conn) = connect("join_and_group_by")? else {
        return Ok(());
    };
    let users = unique_table("fluent_users");
    let orders = unique_table("fluent_orders");
    create_users(&conn, &users).await?;
    conn.execute(&format!(
        "CREATE TABLE {orders} (id BIGSERIAL PRIMARY KEY, user_id BIGINT NOT NULL, total FLOAT8)"
    ))
    .await?;
    conn.execute(&format!(
        "INSERT INTO {users} (id, name) VALUES (1, 'ann'), (2, 'bo')"
    ))
    .await?;
    conn.execute(&format!(
        "INSERT INTO {orders} (user_id, total) VALUES (1, 10.5), (1, 4.5), (2, 1)"
    ))
    .await?;

    let mut qb = table(&users);
    qb.select(format!("{users}.name, COUNT({orders}.id) AS n").as_str())
        .join([Join::inner(&orders, "id", "user_id")])?
        .group_by([format!("{users}.name")])
        .having([Having::with_op(format!("COUNT({orders}.id)"), ">", 1)])?;
    let rows = qb.fetch_all(&conn).await?;
    assert_eq!(rows.len(), 1);
    assert_eq!(rows[0]["name"], "ann");
    assert_eq!(rows[0]["n"], 2);

    drop_table(&conn, &orders).await?;
    drop_table(&conn, &users).await
}

#[tokio::test]
async fn server_errors_are_returned() -> SqlResult<()> {
    let Some(conn) = connect("server_errors_are_returned")? else {
        return Ok(());
    };
    let mut qb = table(unique_table("fluent_missing"));
    qb.select_all();
    let err = qb.fetch_all(&conn).await.unwrap_err();
    assert!(matches!(err, SqlError::Query(_)));
    assert!(err.is_connection_error());
    Ok(())
}
