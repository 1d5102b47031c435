use pretty_assertions::assert_eq;
use quill::stmt::{Statement, Value};
use tests::{assert_err, assert_ok, Test};

#[allow(non_snake_case)]
#[derive(Debug, quill::Model)]
struct User {
    #[tag("PRIMARY KEY")]
    Name: String,
    Age: i32,
}

#[tokio::test]
async fn create_probe_and_drop() {
    let mut test = Test::new().await;
    let mut session = test.session();
    assert_ok!(session.model::<User>());

    assert!(!assert_ok!(session.has_table().await));
    assert_eq!(
        test.log().pop_statement(),
        Statement::new(
            "SELECT name FROM sqlite_master WHERE type='table' and name = ?",
            vec![Value::from("User")],
        )
    );

    assert_ok!(session.create_table().await);
    assert_eq!(
        test.log().pop_statement(),
        Statement::sql("CREATE TABLE IF NOT EXISTS User (Name text PRIMARY KEY, Age integer)")
    );
    assert!(assert_ok!(session.has_table().await));
    test.log().pop_statement();

    // Creating again is a no-op
    assert_ok!(session.create_table().await);
    test.log().pop_statement();

    assert_ok!(session.drop_table().await);
    assert_eq!(
        test.log().pop_statement(),
        Statement::sql("DROP TABLE IF EXISTS User")
    );
    assert!(!assert_ok!(session.has_table().await));
}

#[tokio::test]
async fn table_operations_need_a_model() {
    let mut test = Test::new().await;
    let mut session = test.session();

    let err = assert_err!(session.ref_table());
    assert!(err.is_invalid_statement());

    assert!(assert_err!(session.create_table().await).is_invalid_statement());
    assert!(assert_err!(session.has_table().await).is_invalid_statement());
    assert!(test.log().is_empty());
}
