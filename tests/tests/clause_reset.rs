use pretty_assertions::assert_eq;
use quill::stmt::{Statement, Value};
use tests::{assert_err, assert_ok, Test};

#[allow(non_snake_case)]
#[derive(Debug, Clone, PartialEq, quill::Model)]
struct User {
    #[tag("PRIMARY KEY")]
    Name: String,
    Age: i32,
}

/// Never created, so every statement against it fails.
#[allow(non_snake_case)]
#[derive(Debug, quill::Model)]
struct Ghost {
    Name: String,
}

async fn setup() -> Test {
    let mut test = Test::new().await;
    let mut session = test.session();
    assert_ok!(assert_ok!(session.model::<User>()).create_table().await);
    assert_ok!(
        session
            .insert([&User {
                Name: "Tom".into(),
                Age: 18,
            }])
            .await
    );
    test.log().clear();
    test
}

#[tokio::test]
async fn modifiers_do_not_leak_into_next_verb() {
    let mut test = setup().await;
    let mut session = test.session();

    assert_ok!(
        session
            .filter("Age > ?", (10,))
            .order_by("Age")
            .limit(5)
            .all::<User>()
            .await
    );
    assert!(session.is_clear());

    assert_ok!(session.count().await);

    assert_eq!(
        test.log().sql(),
        vec![
            "SELECT Name, Age FROM User WHERE Age > ? ORDER BY Age LIMIT ?",
            "SELECT count(*) FROM User",
        ]
    );
}

#[tokio::test]
async fn state_is_cleared_after_a_failed_statement() {
    let mut test = setup().await;
    let mut session = test.session();

    let err = assert_err!(
        session
            .filter("Name = ?", ("Tom",))
            .limit(1)
            .all::<Ghost>()
            .await
    );
    assert!(err.is_driver_operation_failed(), "{err}");
    assert!(session.is_clear());

    let users = assert_ok!(session.all::<User>().await);
    assert_eq!(users.len(), 1);

    test.log().pop_statement();
    assert_eq!(
        test.log().pop_statement(),
        Statement::sql("SELECT Name, Age FROM User")
    );
}

#[tokio::test]
async fn rebinding_to_another_model_switches_the_table() {
    let mut test = setup().await;
    let mut session = test.session();

    assert_ok!(session.model::<Ghost>());
    assert_eq!(assert_ok!(session.ref_table()).table_name, "Ghost");

    assert_ok!(session.model::<User>());
    assert_eq!(assert_ok!(session.ref_table()).table_name, "User");

    assert_ok!(session.filter("Age = ?", (18,)).delete().await);
    assert_eq!(
        test.log().pop_statement(),
        Statement::new("DELETE FROM User WHERE Age = ?", vec![Value::I32(18)])
    );
}
