mod builder;
pub use builder::Builder;

mod connect;
pub use connect::Connect;

mod migrate;

mod pool;
pub(crate) use pool::{Pinned, Pool};

use crate::{BoxFuture, Dialect, Driver, Result, Session};

use std::sync::Arc;

/// Entry point: owns the driver, the dialect and the pool of connections
/// shared by every session created from it.
///
/// Cloning an engine is cheap; clones share the pool.
#[derive(Debug, Clone)]
pub struct Engine {
    shared: Arc<Shared>,
}

#[derive(Debug)]
struct Shared {
    dialect: Arc<dyn Dialect>,
    pool: Pool,
}

impl Engine {
    pub fn builder() -> Builder {
        Builder::default()
    }

    /// Connects to the database at `url`. See [`Builder::connect`].
    pub async fn connect(url: &str) -> Result<Engine> {
        Builder::default().connect(url).await
    }

    /// Connects through a custom driver, using the dialect it names.
    pub async fn with_driver(driver: impl Driver) -> Result<Engine> {
        Builder::default().build(driver).await
    }

    pub fn new_session(&self) -> Session {
        Session::new(self.shared.pool.clone(), self.shared.dialect.clone())
    }

    pub fn dialect(&self) -> &dyn Dialect {
        &*self.shared.dialect
    }

    pub fn driver(&self) -> &dyn Driver {
        self.shared.pool.driver()
    }

    /// Runs `f` inside a transaction on a new session.
    ///
    /// The transaction is committed when `f` returns `Ok` and rolled back
    /// otherwise; the error returned by `f` is passed through unchanged.
    /// Other sessions keep working while `f` runs as long as the pool has a
    /// connection left; see [`Session::begin`].
    ///
    /// ```ignore
    /// engine
    ///     .transaction(|session| {
    ///         Box::pin(async move {
    ///             session.model::<User>()?.insert([&tom]).await?;
    ///             Ok(())
    ///         })
    ///     })
    ///     .await?;
    /// ```
    pub async fn transaction<T, F>(&self, f: F) -> Result<T>
    where
        F: for<'a> FnOnce(&'a mut Session) -> BoxFuture<'a, Result<T>>,
    {
        let mut session = self.new_session();
        session.begin().await?;

        match f(&mut session).await {
            Ok(ret) => {
                session.commit().await?;
                Ok(ret)
            }
            Err(err) => {
                if let Err(rollback) = session.rollback().await {
                    log::error!("rollback failed; error={rollback}");
                }
                Err(err)
            }
        }
    }

    /// Closes the pool. Statements issued afterwards fail with a
    /// `connection_pool` error.
    ///
    /// Idle connections are closed here; connections held by a running
    /// statement or an open transaction are dropped once released.
    pub async fn close(&self) -> Result<()> {
        let mut res = Ok(());

        for conn in self.shared.pool.close() {
            if let Err(err) = conn.close().await {
                log::error!("{err}");
                res = Err(err);
            }
        }

        if res.is_ok() {
            log::info!("close database success");
        }

        res
    }
}
