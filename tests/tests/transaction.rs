use pretty_assertions::assert_eq;
use quill::{driver::operation::Transaction, err, Engine};
use std::time::Duration;
use tests::{assert_err, assert_ok, init_logging, Test};

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
async fn transaction_commits_on_ok() {
    let mut test = setup().await;

    let count = assert_ok!(
        test.engine()
            .transaction(|session| {
                Box::pin(async move {
                    session.insert([&user("Tom", 18)]).await?;
                    session.insert([&user("Sam", 25)]).await
                })
            })
            .await
    );
    assert_eq!(count, 1);

    assert_eq!(test.log().pop_transaction(), Transaction::Start);
    test.log().pop_statement();
    test.log().pop_statement();
    assert_eq!(test.log().pop_transaction(), Transaction::Commit);

    let mut session = test.session();
    assert_eq!(assert_ok!(session.all::<User>().await).len(), 2);
}

#[tokio::test]
async fn transaction_rolls_back_on_err() {
    let mut test = setup().await;

    let err = assert_err!(
        test.engine()
            .transaction(|session| {
                Box::pin(async move {
                    session.insert([&user("Tom", 18)]).await?;
                    Err::<(), _>(err!("changed my mind"))
                })
            })
            .await
    );
    assert_eq!(err.to_string(), "changed my mind");

    assert_eq!(test.log().pop_transaction(), Transaction::Start);
    test.log().pop_statement();
    assert_eq!(test.log().pop_transaction(), Transaction::Rollback);

    let mut session = test.session();
    assert_eq!(assert_ok!(session.model::<User>()).count().await.unwrap(), 0);
}

#[tokio::test]
async fn session_transaction() {
    let test = setup().await;
    let mut session = test.session();

    assert_ok!(session.begin().await);
    assert!(session.in_transaction());
    assert!(assert_err!(session.begin().await).is_invalid_statement());

    assert_ok!(session.insert([&user("Tom", 18)]).await);
    assert_ok!(session.rollback().await);
    assert!(!session.in_transaction());

    assert_ok!(session.begin().await);
    assert_ok!(session.insert([&user("Sam", 25)]).await);
    assert_ok!(session.commit().await);

    assert_eq!(
        assert_ok!(session.all::<User>().await),
        vec![user("Sam", 25)]
    );
}

#[tokio::test]
async fn commit_without_begin_fails() {
    let mut test = setup().await;
    let mut session = test.session();

    assert!(assert_err!(session.commit().await).is_invalid_statement());
    assert!(assert_err!(session.rollback().await).is_invalid_statement());
    assert!(test.log().is_empty());
}

#[tokio::test]
async fn dropped_session_rolls_back() {
    let mut test = setup().await;

    {
        let mut session = test.session();
        assert_ok!(session.begin().await);
        assert_ok!(session.insert([&user("Tom", 18)]).await);
    }

    // Waits for the rollback to release the connection
    let mut session = test.session();
    assert_eq!(assert_ok!(session.model::<User>()).count().await.unwrap(), 0);

    assert_eq!(test.log().pop_transaction(), Transaction::Start);
    test.log().pop_statement();
    assert_eq!(test.log().pop_transaction(), Transaction::Rollback);
}

#[tokio::test]
async fn other_session_fails_fast_while_the_only_connection_is_pinned() {
    let test = setup().await;
    let engine = test.engine().clone();

    let other = assert_ok!(
        tokio::time::timeout(
            Duration::from_secs(3),
            test.engine().transaction(move |session| {
                Box::pin(async move {
                    session.insert([&user("Tom", 18)]).await?;

                    let mut other = engine.new_session();
                    let res = other.model::<User>()?.count().await;
                    assert!(other.is_clear());
                    Ok(res)
                })
            }),
        )
        .await
    );

    let err = assert_err!(assert_ok!(other));
    assert!(err.is_connection_pool(), "{err}");

    // the transaction itself was unaffected
    let mut session = test.session();
    assert_eq!(assert_ok!(session.model::<User>()).count().await.unwrap(), 1);
}

#[tokio::test]
async fn other_session_reads_while_a_transaction_is_open() {
    init_logging();

    let path = std::env::temp_dir().join(format!("quill-{}.db", uuid::Uuid::new_v4()));
    let engine = assert_ok!(
        Engine::builder()
            .max_connections(2)
            .connect(&format!("sqlite:{}", path.display()))
            .await
    );

    let mut session = engine.new_session();
    assert_ok!(assert_ok!(session.model::<User>()).create_table().await);

    let reader = engine.clone();
    let seen = assert_ok!(
        engine
            .transaction(move |session| {
                Box::pin(async move {
                    session.insert([&user("Tom", 18)]).await?;

                    let mut other = reader.new_session();
                    other.model::<User>()?.count().await
                })
            })
            .await
    );
    assert_eq!(seen, 0);

    assert_eq!(assert_ok!(session.count().await), 1);

    assert_ok!(engine.close().await);
    let _ = std::fs::remove_file(&path);
}
