use pretty_assertions::assert_eq;
use quill::{err, Hooks, Session};
use std::sync::Mutex;
use tests::{assert_err, assert_ok, Test};

static EVENTS: Mutex<Vec<String>> = Mutex::new(Vec::new());

fn record(event: impl Into<String>) {
    EVENTS.lock().unwrap().push(event.into());
}

fn take_events() -> Vec<String> {
    std::mem::take(&mut *EVENTS.lock().unwrap())
}

#[allow(non_snake_case)]
#[derive(Debug, quill::Model)]
#[hooks]
struct Account {
    #[tag("PRIMARY KEY")]
    Name: String,
    Balance: i64,

    #[skip]
    Greeting: String,
}

#[async_trait::async_trait]
impl Hooks for Account {
    async fn before_query(session: &mut Session) -> quill::Result<()> {
        let row = session
            .raw("SELECT count(*) FROM Account", ())
            .query_row()
            .await?;
        record(format!("before_query {:?}", row.map(|row| row.fields)));
        Ok(())
    }

    async fn after_query(&mut self, _session: &mut Session) -> quill::Result<()> {
        self.Greeting = format!("hello {}", self.Name);
        Ok(())
    }

    async fn before_insert(&self, _session: &mut Session) -> quill::Result<()> {
        record(format!("before_insert {}", self.Name));
        Ok(())
    }

    async fn after_insert(_session: &mut Session) -> quill::Result<()> {
        record("after_insert");
        Ok(())
    }

    async fn before_update(_session: &mut Session) -> quill::Result<()> {
        record("before_update");
        Err(err!("updates are audited"))
    }

    async fn after_update(_session: &mut Session) -> quill::Result<()> {
        record("after_update");
        Ok(())
    }

    async fn before_delete(session: &mut Session) -> quill::Result<()> {
        record(format!("before_delete {}", session.is_clear()));
        Ok(())
    }

    async fn after_delete(_session: &mut Session) -> quill::Result<()> {
        record("after_delete");
        Ok(())
    }
}

fn account(name: &str, balance: i64) -> Account {
    Account {
        Name: name.to_string(),
        Balance: balance,
        Greeting: String::new(),
    }
}

#[tokio::test]
async fn hooks_run_around_verbs() {
    let mut test = Test::new().await;
    let mut session = test.session();
    assert_ok!(assert_ok!(session.model::<Account>()).create_table().await);
    test.log().clear();

    // Insert: once per record before, once per verb after
    assert_ok!(
        session
            .insert(&[account("Tom", 10), account("Sam", 20)])
            .await
    );
    assert_eq!(
        take_events(),
        vec!["before_insert Tom", "before_insert Sam", "after_insert"]
    );

    // `after_*` hooks only run when the statement succeeded
    let err = assert_err!(session.insert([&account("Tom", 1)]).await);
    assert!(err.is_driver_operation_failed(), "{err}");
    assert_eq!(take_events(), vec!["before_insert Tom"]);

    // Query: the hook's own statement does not disturb the pending clauses
    let found = assert_ok!(
        session
            .filter("Name = ?", ("Sam",))
            .all::<Account>()
            .await
    );
    assert_eq!(found.len(), 1);
    assert_eq!(found[0].Greeting, "hello Sam");
    assert_eq!(take_events(), vec!["before_query Some([I64(2)])"]);

    // A failing hook is logged and the update still runs
    assert_ok!(
        session
            .filter("Name = ?", ("Tom",))
            .update([("Balance", 15)])
            .await
    );
    assert_eq!(take_events(), vec!["before_update", "after_update"]);

    // Pending clauses are set aside while hooks run
    assert_ok!(session.filter("Name = ?", ("Tom",)).delete().await);
    assert_eq!(take_events(), vec!["before_delete true", "after_delete"]);

    assert_eq!(
        test.log().sql(),
        vec![
            "INSERT INTO Account (Name, Balance) VALUES (?, ?), (?, ?)",
            "INSERT INTO Account (Name, Balance) VALUES (?, ?)",
            "SELECT count(*) FROM Account",
            "SELECT Name, Balance FROM Account WHERE Name = ?",
            "UPDATE Account SET Balance = ? WHERE Name = ?",
            "DELETE FROM Account WHERE Name = ?",
        ]
    );
}
