use pretty_assertions::assert_eq;
use quill::stmt::{Statement, Value};
use std::collections::HashMap;
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
    assert_ok!(session.insert(&[user("Tom", 18), user("Sam", 25)]).await);
    test.log().clear();
    test
}

#[tokio::test]
async fn update_with_filter() {
    let mut test = setup().await;
    let mut session = test.session();

    let count = assert_ok!(
        assert_ok!(session.model::<User>())
            .filter("Name = ?", ("Tom",))
            .update([("Age", 30)])
            .await
    );
    assert_eq!(count, 1);

    assert_eq!(
        test.log().pop_statement(),
        Statement::new(
            "UPDATE User SET Age = ? WHERE Name = ?",
            vec![Value::I32(30), Value::from("Tom")],
        )
    );

    let tom = assert_ok!(session.filter("Name = ?", ("Tom",)).first::<User>().await);
    assert_eq!(tom.Age, 30);
}

#[tokio::test]
async fn update_with_flattened_pairs() {
    let mut test = setup().await;
    let mut session = test.session();
    assert_ok!(session.model::<User>());

    let count = assert_ok!(
        session
            .filter("Name = ?", ("Sam",))
            .update(vec![Value::from("Age"), Value::from(26)])
            .await
    );
    assert_eq!(count, 1);

    assert_eq!(
        test.log().pop_statement(),
        Statement::new(
            "UPDATE User SET Age = ? WHERE Name = ?",
            vec![Value::I32(26), Value::from("Sam")],
        )
    );
}

#[tokio::test]
async fn update_with_odd_flattened_pairs_fails() {
    let mut test = setup().await;
    let mut session = test.session();
    assert_ok!(session.model::<User>());

    let err = assert_err!(
        session
            .filter("Name = ?", ("Sam",))
            .update(vec![Value::from("Age")])
            .await
    );
    assert!(err.is_invalid_statement(), "{err}");
    assert!(test.log().is_empty());
    assert!(session.is_clear());
}

#[tokio::test]
async fn update_set_order_matches_params() {
    let mut test = setup().await;
    let mut session = test.session();
    assert_ok!(session.model::<User>());

    let mut values = HashMap::new();
    values.insert("Name", Value::from("Tommy"));
    values.insert("Age", Value::from(19));

    assert_ok!(session.filter("Name = ?", ("Tom",)).update(values).await);

    let stmt = test.log().pop_statement();
    let columns = stmt
        .sql
        .trim_start_matches("UPDATE User SET ")
        .trim_end_matches(" WHERE Name = ?")
        .split(", ")
        .map(|assignment| assignment.trim_end_matches(" = ?"))
        .collect::<Vec<_>>();

    for (column, param) in columns.iter().zip(&stmt.params) {
        match *column {
            "Name" => assert_eq!(*param, Value::from("Tommy")),
            "Age" => assert_eq!(*param, Value::I32(19)),
            column => panic!("unexpected column {column}"),
        }
    }
    assert_eq!(columns.len(), 2);
    assert_eq!(stmt.params.len(), 3);
}

#[tokio::test]
async fn update_without_model_fails() {
    let mut test = setup().await;
    let mut session = test.session();

    let err = assert_err!(session.update([("Age", 1)]).await);
    assert!(err.is_invalid_statement());
    assert_eq!(err.to_string(), "invalid statement: model is not set");
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn delete_with_filter() {
    let mut test = setup().await;
    let mut session = test.session();

    let count = assert_ok!(
        assert_ok!(session.model::<User>())
            .filter("Name = ?", ("Tom",))
            .delete()
            .await
    );
    assert_eq!(count, 1);

    assert_eq!(
        test.log().pop_statement(),
        Statement::new("DELETE FROM User WHERE Name = ?", vec![Value::from("Tom")])
    );
    assert_eq!(assert_ok!(session.count().await), 1);
}

#[tokio::test]
async fn count_all_and_filtered() {
    let mut test = setup().await;
    let mut session = test.session();
    assert_ok!(session.model::<User>());

    assert_eq!(assert_ok!(session.count().await), 2);
    assert_eq!(
        test.log().pop_statement(),
        Statement::sql("SELECT count(*) FROM User")
    );

    assert_eq!(
        assert_ok!(session.filter("Age > ?", (20,)).count().await),
        1
    );
    assert_eq!(
        test.log().pop_statement(),
        Statement::new(
            "SELECT count(*) FROM User WHERE Age > ?",
            vec![Value::I32(20)],
        )
    );
}
