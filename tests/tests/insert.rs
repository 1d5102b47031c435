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

fn user(name: &str, age: i32) -> User {
    User {
        Name: name.to_string(),
        Age: age,
    }
}

async fn setup() -> Test {
    let mut test = Test::new().await;
    let mut session = test.session();
    assert_ok!(assert_ok!(session.model::<User>()).create_table().await);
    test.log().clear();
    test
}

#[tokio::test]
async fn insert_one_record() {
    let mut test = setup().await;
    let mut session = test.session();

    let count = assert_ok!(session.insert([&user("Tom", 18)]).await);
    assert_eq!(count, 1);

    assert_eq!(
        test.log().pop_statement(),
        Statement::new(
            "INSERT INTO User (Name, Age) VALUES (?, ?)",
            vec![Value::from("Tom"), Value::I32(18)],
        )
    );
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn insert_many_records_in_one_statement() {
    let mut test = setup().await;
    let mut session = test.session();

    let users = vec![user("Tom", 18), user("Sam", 25)];
    let count = assert_ok!(session.insert(&users).await);
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
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn insert_nothing() {
    let mut test = setup().await;
    let mut session = test.session();

    let count = assert_ok!(session.insert(Vec::<&User>::new()).await);
    assert_eq!(count, 0);
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn insert_store_error_is_propagated() {
    let mut test = setup().await;
    let mut session = test.session();

    assert_ok!(session.insert([&user("Tom", 18)]).await);

    let err = assert_err!(session.insert([&user("Tom", 20)]).await);
    assert!(err.is_driver_operation_failed(), "{err}");
    assert!(session.is_clear());
    assert_eq!(test.log().failures(), 1);

    let users = assert_ok!(session.all::<User>().await);
    assert_eq!(users, vec![user("Tom", 18)]);
}
