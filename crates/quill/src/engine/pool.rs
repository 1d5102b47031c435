//! Connections shared by the sessions of one engine.

use crate::{Driver, Error, Result};

use deadpool::managed::{self, Metrics, PoolError, RecycleResult};
use quill_core::driver::Connection;
use std::{
    fmt,
    ops::{Deref, DerefMut},
    sync::{
        atomic::{AtomicUsize, Ordering},
        Arc,
    },
    time::Duration,
};

/// Pool size used when neither the builder nor the driver sets one.
fn default_max_size() -> usize {
    managed::PoolConfig::default().max_size
}

/// Pool settings chosen on the [`Builder`](crate::Builder).
#[derive(Debug, Clone, Default)]
pub(crate) struct PoolConfig {
    /// Overrides the driver's own limit
    pub(crate) max_size: Option<usize>,

    /// How long to wait for a free connection; unbounded when `None`
    pub(crate) wait_timeout: Option<Duration>,
}

#[derive(Debug, Clone)]
pub(crate) struct Pool {
    inner: managed::Pool<Manager>,

    /// Connections currently held by open transactions
    pinned: Arc<AtomicUsize>,
}

impl Pool {
    /// Builds the pool and opens its first connection, so a store that cannot
    /// be reached fails here rather than on the first statement.
    pub(crate) async fn new(driver: impl Driver, config: &PoolConfig) -> Result<Pool> {
        let max_size = config
            .max_size
            .or(driver.max_connections())
            .unwrap_or_else(default_max_size);

        let inner = managed::Pool::builder(Manager {
            driver: Box::new(driver),
        })
        .max_size(max_size)
        .wait_timeout(config.wait_timeout)
        .runtime(deadpool::Runtime::Tokio1)
        .build()
        .map_err(Error::connection_pool)?;

        let pool = Pool {
            inner,
            pinned: Arc::new(AtomicUsize::new(0)),
        };
        drop(pool.get().await?);

        Ok(pool)
    }

    pub(crate) fn driver(&self) -> &dyn Driver {
        &*self.inner.manager().driver
    }

    /// Checks out a connection for a single statement.
    ///
    /// Fails at once when every connection is held by an open transaction:
    /// none of them returns before its transaction ends, which may be waiting
    /// on the caller.
    pub(crate) async fn get(&self) -> Result<PoolConnection> {
        let max_size = self.inner.status().max_size;

        if !self.inner.is_closed() && self.pinned.load(Ordering::Acquire) >= max_size {
            return Err(Error::connection_pool(Exhausted { max_size }));
        }

        match self.inner.get().await {
            Ok(inner) => Ok(PoolConnection { inner }),
            Err(PoolError::Backend(err)) => Err(err),
            Err(err) => Err(Error::connection_pool(err)),
        }
    }

    /// Checks out a connection that stays with the caller until the returned
    /// guard is dropped.
    pub(crate) async fn pin(&self) -> Result<Pinned> {
        let conn = self.get().await?;
        self.pinned.fetch_add(1, Ordering::AcqRel);

        Ok(Pinned {
            conn,
            _count: PinCount(self.pinned.clone()),
        })
    }

    /// Closes the pool and hands back its idle connections. Connections
    /// checked out at this point are dropped when they come back.
    pub(crate) fn close(&self) -> Vec<Box<dyn Connection>> {
        let idle = self.inner.retain(|_, _| false).removed;
        self.inner.close();
        idle
    }
}

struct Manager {
    driver: Box<dyn Driver>,
}

impl fmt::Debug for Manager {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Manager")
            .field("url", &self.driver.url())
            .finish()
    }
}

impl managed::Manager for Manager {
    type Type = Box<dyn Connection>;
    type Error = Error;

    async fn create(&self) -> Result<Box<dyn Connection>> {
        self.driver.connect().await
    }

    async fn recycle(
        &self,
        _conn: &mut Box<dyn Connection>,
        _metrics: &Metrics,
    ) -> RecycleResult<Error> {
        Ok(())
    }
}

/// A pooled connection; returned to the pool on drop.
pub(crate) struct PoolConnection {
    inner: managed::Object<Manager>,
}

impl Deref for PoolConnection {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.inner
    }
}

impl DerefMut for PoolConnection {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.inner
    }
}

/// A connection held by an open transaction.
pub(crate) struct Pinned {
    conn: PoolConnection,
    _count: PinCount,
}

impl Pinned {
    /// Stops counting the connection as held by a transaction. It returns to
    /// the pool once the result is dropped.
    pub(crate) fn unpin(self) -> PoolConnection {
        self.conn
    }
}

impl Deref for Pinned {
    type Target = Box<dyn Connection>;

    fn deref(&self) -> &Self::Target {
        &self.conn
    }
}

impl DerefMut for Pinned {
    fn deref_mut(&mut self) -> &mut Self::Target {
        &mut self.conn
    }
}

struct PinCount(Arc<AtomicUsize>);

impl Drop for PinCount {
    fn drop(&mut self) {
        self.0.fetch_sub(1, Ordering::AcqRel);
    }
}

#[derive(Debug)]
struct Exhausted {
    max_size: usize,
}

impl std::error::Error for Exhausted {}

impl fmt::Display for Exhausted {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "all {} connection(s) are held by open transactions",
            self.max_size
        )
    }
}
