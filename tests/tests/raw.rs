use pretty_assertions::assert_eq;
use quill::stmt::{Statement, Value};
use tests::{assert_err, assert_none, assert_ok, assert_some, Test};

#[allow(non_snake_case)]
#[derive(Debug, quill::Model)]
struct User {
    #[tag("PRIMARY KEY")]
    Name: String,
    Age: i32,
}

async fn setup() -> Test {
    let mut test = Test::new().await;
    let mut session = test.session();
    assert_ok!(
        session
            .raw("CREATE TABLE User (Name text PRIMARY KEY, Age integer)", ())
            .exec()
            .await
    );
    test.log().clear();
    test
}

#[tokio::test]
async fn fragments_accumulate() {
    let mut test = setup().await;
    let mut session = test.session();

    let count = assert_ok!(
        session
            .raw("INSERT INTO User (Name, Age)", ())
            .raw("VALUES (?, ?), (?, ?)", ("Tom", 18, "Sam", 25))
            .exec()
            .await
    );
    assert_eq!(count, 2);

    assert_eq!(
        test.log().pop_statement(),
        Statement::new(
            "INSERT INTO User (Name, Age) VALUES (?, ?), (?, ?)",
            vec![
                Value::from("Tom"),
                Value::I32(18),
                Value::from("Sam"),
                Value::I32(25),
            ],
        )
    );
    assert!(session.is_clear());
}

#[tokio::test]
async fn query_rows_by_storage_class() {
    let test = setup().await;
    let mut session = test.session();

    assert_ok!(
        session
            .raw("INSERT INTO User (Name, Age) VALUES (?, ?), (?, ?)", ("Tom", 18, "Sam", 25))
            .exec()
            .await
    );

    let rows = assert_ok!(
        session
            .raw("SELECT Name, Age FROM User", ())
            .raw("WHERE Age > ? ORDER BY Age", (17,))
            .query_rows()
            .await
    );
    assert_eq!(rows.columns(), ["Name", "Age"]);

    let rows = assert_ok!(rows.collect().await);
    assert_eq!(
        rows.into_iter().map(|row| row.fields).collect::<Vec<_>>(),
        vec![
            vec![Value::from("Tom"), Value::I64(18)],
            vec![Value::from("Sam"), Value::I64(25)],
        ]
    );
}

#[tokio::test]
async fn query_row_returns_first_or_none() {
    let test = setup().await;
    let mut session = test.session();

    assert_none!(assert_ok!(
        session.raw("SELECT Name FROM User", ()).query_row().await
    ));

    assert_ok!(
        session
            .raw("INSERT INTO User (Name, Age) VALUES (?, ?)", ("Tom", 18))
            .exec()
            .await
    );

    let row = assert_some!(assert_ok!(
        session
            .raw("SELECT Name FROM User WHERE Name = ?", ("Tom",))
            .query_row()
            .await
    ));
    assert_eq!(row.fields, vec![Value::from("Tom")]);
}

#[tokio::test]
async fn raw_clears_pending_clauses() {
    let mut test = setup().await;
    let mut session = test.session();
    assert_ok!(session.model::<User>());

    session.filter("Age > ?", (30,)).limit(1);
    assert!(!session.is_clear());

    assert_ok!(session.raw("DELETE FROM User", ()).exec().await);
    assert!(session.is_clear());

    assert_ok!(session.count().await);
    assert_eq!(
        test.log().sql(),
        vec!["DELETE FROM User", "SELECT count(*) FROM User"]
    );
}

#[tokio::test]
async fn raw_errors_still_clear_the_buffer() {
    let mut test = setup().await;
    let mut session = test.session();

    let err = assert_err!(session.raw("SELEKT 1", ()).exec().await);
    assert!(err.is_driver_operation_failed(), "{err}");
    assert!(session.is_clear());
    assert_eq!(test.log().failures(), 1);

    let err = assert_err!(session.exec().await);
    assert!(err.is_invalid_statement(), "{err}");
}
