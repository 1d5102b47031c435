use pretty_assertions::assert_eq;
use quill::stmt::Value;
use tests::{assert_ok, Test};

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, quill::Model)]
struct User {
    #[tag("PRIMARY KEY")]
    Name: String,
    Age: i32,
}

async fn raw(test: &Test, sql: &str) {
    let mut session = test.session();
    assert_ok!(session.raw(sql, ()).exec().await);
}

#[tokio::test]
async fn migrate_creates_missing_table() {
    let mut test = Test::new().await;

    assert_ok!(test.engine().migrate::<User>().await);

    assert_eq!(
        test.log().sql(),
        vec![
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?",
            "CREATE TABLE IF NOT EXISTS User (Name text PRIMARY KEY, Age integer)",
        ]
    );
}

#[tokio::test]
async fn migrate_adds_missing_columns() {
    let mut test = Test::new().await;
    raw(&test, "CREATE TABLE User (Name text PRIMARY KEY)").await;
    raw(&test, "INSERT INTO User (Name) VALUES ('Tom')").await;
    test.log().clear();

    assert_ok!(test.engine().migrate::<User>().await);

    assert_eq!(
        test.log().sql(),
        vec![
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?",
            "SELECT * FROM User LIMIT 1",
            "ALTER TABLE User ADD COLUMN Age integer",
        ]
    );

    let mut session = test.session();
    let row = assert_ok!(session.raw("SELECT Name, Age FROM User", ()).query_row().await);
    assert_eq!(row.unwrap().fields, vec![Value::from("Tom"), Value::Null]);
}

#[tokio::test]
async fn migrate_again_after_adding_columns_changes_nothing() {
    let mut test = Test::new().await;
    raw(&test, "CREATE TABLE User (Name text PRIMARY KEY)").await;
    raw(&test, "INSERT INTO User (Name) VALUES ('Tom')").await;

    assert_ok!(test.engine().migrate::<User>().await);
    test.log().clear();

    assert_ok!(test.engine().migrate::<User>().await);

    assert_eq!(
        test.log().sql(),
        vec![
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?",
            "SELECT * FROM User LIMIT 1",
        ]
    );
    assert_eq!(test.log().failures(), 0);
}

#[tokio::test]
async fn migrate_rebuilds_table_without_dropped_columns() {
    let mut test = Test::new().await;
    raw(&test, "CREATE TABLE User (Name text, Email text, Age integer)").await;
    raw(&test, "INSERT INTO User (Name, Email, Age) VALUES ('Tom', 'tom@example.com', 18)").await;
    test.log().clear();

    assert_ok!(test.engine().migrate::<User>().await);

    assert_eq!(
        test.log().sql(),
        vec![
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?",
            "SELECT * FROM User LIMIT 1",
            "CREATE TABLE tmp_User AS SELECT Name, Age from User",
            "DROP TABLE User",
            "ALTER TABLE tmp_User RENAME TO User",
        ]
    );

    let mut session = test.session();
    let rows = assert_ok!(session.raw("SELECT * FROM User", ()).query_rows().await);
    assert_eq!(rows.columns(), ["Name", "Age"]);

    let users = assert_ok!(session.all::<User>().await);
    assert_eq!(
        users,
        vec![User {
            Name: "Tom".into(),
            Age: 18
        }]
    );
}

#[tokio::test]
async fn migrate_is_a_no_op_when_columns_match() {
    let mut test = Test::new().await;
    assert_ok!(test.engine().migrate::<User>().await);
    test.log().clear();

    assert_ok!(test.engine().migrate::<User>().await);

    assert_eq!(
        test.log().sql(),
        vec![
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?",
            "SELECT * FROM User LIMIT 1",
        ]
    );
}
