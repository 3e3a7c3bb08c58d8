#![cfg(feature = "derive")]
#![allow(dead_code)]

use sqlgen::{Builder, Cond, Placeholder, Record, SqlGenError, Value, map_columns};

#[derive(Debug, Clone, Record)]
struct Info {
    #[sqlgen(json = "name")]
    name: String,
    #[sqlgen(json = "age")]
    age: i32,
}

#[derive(Debug, Clone, Record)]
struct Person {
    #[sqlgen(json = ",")]
    info: Info,
    #[sqlgen(json = "labels,json")]
    labels: Vec<String>,
}

#[derive(Debug, Clone, Record)]
struct Audit {
    #[sqlgen(json = "created_by")]
    created_by: String,
    #[sqlgen(json = "token,omitdb")]
    token: String,
}

#[derive(Debug, Clone, Record)]
struct Document {
    #[sqlgen(json = "id", db = "doc_id")]
    id: i64,
    #[sqlgen(json = ",", db = ",")]
    person: Person,
    #[sqlgen(json = ",")]
    audit: Audit,
    #[sqlgen(json = "title")]
    title: Option<String>,
}

#[allow(non_snake_case)]
#[derive(Debug, Clone, Record)]
struct Session {
    #[sqlgen(json = "id")]
    ID: i64,
    #[sqlgen(json = "username")]
    Username: String,
    #[sqlgen(json = "token,omitdb")]
    SessionToken: String,
    CreatedAt: i64,
}

#[derive(Debug, Record)]
struct Wrapper<T: Record> {
    #[sqlgen(json = ",")]
    inner: T,
    #[sqlgen(json = "version")]
    version: u32,
}

#[derive(Debug, Record)]
struct Tagged {
    #[sqlgen(json = "id", db = "doc_id")]
    id: i64,
    #[sqlgen(db = "title")]
    heading: String,
}

#[derive(Debug, Record)]
struct Keyword {
    r#type: String,
}

fn person() -> Person {
    Person {
        info: Info {
            name: "ethan".into(),
            age: 19,
        },
        labels: vec!["a".into(), "b".into(), "c".into()],
    }
}

fn document() -> Document {
    Document {
        id: 7,
        person: person(),
        audit: Audit {
            created_by: "admin".into(),
            token: "secret".into(),
        },
        title: None,
    }
}

fn session() -> Session {
    Session {
        ID: 1,
        Username: "a".into(),
        SessionToken: "token".into(),
        CreatedAt: 1_700_000_000,
    }
}

#[test]
fn insert_embedded_struct() {
    let mut b = Builder::question("json");
    b.insert_struct("user", &person()).unwrap();

    let (sql, args) = b.query();
    assert_eq!(sql, "INSERT INTO user(`name`,`age`,`labels`)VALUES(?,?,?)");
    assert_eq!(args.len(), 3);
    assert_eq!(
        args[2],
        Value::Array(vec!["a".into(), "b".into(), "c".into()])
    );
}

#[test]
fn embedding_is_recursive() {
    let cols = map_columns(&document(), "json").unwrap();
    assert_eq!(
        cols.names,
        ["id", "name", "age", "labels", "created_by", "title"]
    );
    assert_eq!(cols.values[5], Value::Null);
}

#[test]
fn flattening_is_concatenation_in_declaration_order() {
    let doc = document();
    let outer = map_columns(&doc, "json").unwrap();

    let mut expected = vec!["id".to_string()];
    expected.extend(map_columns(&doc.person, "json").unwrap().names);
    expected.extend(map_columns(&doc.audit, "json").unwrap().names);
    expected.push("title".to_string());
    assert_eq!(outer.names, expected);
}

#[test]
fn omitted_field_never_appears() {
    let doc = document();
    for b in [
        Builder::postgres().insert_struct("docs", &doc).map(|b| b.sql().to_string()),
        Builder::postgres()
            .update_struct("docs", &doc, &[])
            .map(|b| b.sql().to_string()),
        Builder::postgres()
            .select_struct(&doc, &["token"])
            .map(|b| b.sql().to_string()),
    ] {
        let sql = b.unwrap();
        assert!(!sql.contains("token"), "{sql}");
    }
}

#[test]
fn no_tag_selector_preserves_declared_case() {
    let mut b = Builder::new(Placeholder::Question, "");
    b.insert_struct("user", &session()).unwrap();
    assert_eq!(
        b.sql(),
        "INSERT INTO user(`ID`,`Username`,`SessionToken`,`CreatedAt`)VALUES(?,?,?,?)"
    );
    assert_eq!(b.args().len(), 4);
}

#[test]
fn missing_directive_falls_back_to_declared_name() {
    let mut b = Builder::question("json");
    b.insert_struct("user", &session()).unwrap();
    assert_eq!(
        b.sql(),
        "INSERT INTO user(`id`,`username`,`CreatedAt`)VALUES(?,?,?)"
    );
}

#[test]
fn select_struct_except_removes_one_column() {
    let mut b = Builder::postgres();
    b.select_struct(&person(), &["age"])
        .unwrap()
        .from(["people"])
        .where_and([Cond::eq("name", "ethan").unwrap()]);
    assert_eq!(
        b.sql(),
        "SELECT `name`,`labels` FROM people WHERE `name`=$1"
    );
    assert_eq!(b.args(), &[Value::Text("ethan".into())]);
}

#[test]
fn update_struct_then_where() {
    let mut b = Builder::postgres();
    b.update_struct("people", &person(), &["name"])
        .unwrap()
        .where_and([Cond::eq("name", "ethan").unwrap()]);
    assert_eq!(
        b.sql(),
        "UPDATE people SET `age`=$1,`labels`=$2 WHERE `name`=$3"
    );
}

#[test]
fn nested_field_outside_embed_namespace_fails_without_writing() {
    // Person is embedded under `db`, but its `info` field is not, so it would
    // have to be bound as a single value.
    let mut b = Builder::new(Placeholder::Dollar, "db");
    b.raw("-- ", []);
    let err = b.insert_struct("docs", &document()).unwrap_err();

    assert!(err.is_field_access());
    assert!(matches!(
        err,
        SqlGenError::FieldAccess {
            record: "Person",
            field: "info"
        }
    ));
    assert_eq!(b.sql(), "-- ");
    assert!(b.args().is_empty());
}

#[test]
fn namespace_selects_column_names() {
    let t = Tagged {
        id: 1,
        heading: "hello".into(),
    };
    assert_eq!(map_columns(&t, "json").unwrap().names, ["id", "heading"]);
    assert_eq!(map_columns(&t, "db").unwrap().names, ["doc_id", "title"]);
    assert_eq!(map_columns(&t, "").unwrap().names, ["id", "heading"]);
}

#[test]
fn generic_record() {
    let w = Wrapper {
        inner: person().info,
        version: 3,
    };
    let cols = map_columns(&w, "json").unwrap();
    assert_eq!(cols.names, ["name", "age", "version"]);
    assert_eq!(cols.values[2], Value::Int(3));
}

#[test]
fn raw_identifier_field_name() {
    let cols = map_columns(&Keyword { r#type: "t".into() }, "").unwrap();
    assert_eq!(cols.names, ["type"]);
}

#[test]
fn boxed_and_borrowed_records() {
    let boxed: Box<dyn Record> = Box::new(person());
    let from_box = map_columns(&boxed, "json").unwrap();
    let from_ref = map_columns(&&person(), "json").unwrap();
    assert_eq!(from_box, from_ref);
}
