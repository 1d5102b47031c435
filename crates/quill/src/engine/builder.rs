use super::{pool::PoolConfig, Connect, Engine, Pool, Shared};
use crate::{dialect, Driver, Result};

use quill_core::Error;
use std::{sync::Arc, time::Duration};

#[derive(Debug, Default)]
pub struct Builder {
    /// Registry key of the dialect; defaults to the one the driver names
    dialect: Option<String>,

    pool: PoolConfig,
}

impl Builder {
    /// Selects the dialect by its registry key instead of the driver's.
    pub fn dialect(&mut self, name: impl Into<String>) -> &mut Self {
        self.dialect = Some(name.into());
        self
    }

    /// Caps the number of pooled connections.
    ///
    /// Defaults to the driver's own limit (one for `sqlite::memory:`, whose
    /// connections each open a separate database) or, without one, twice the
    /// number of CPUs.
    pub fn max_connections(&mut self, max: usize) -> &mut Self {
        self.pool.max_size = Some(max);
        self
    }

    /// Bounds how long a statement waits for a free connection. Waits are
    /// unbounded by default.
    pub fn wait_timeout(&mut self, timeout: Duration) -> &mut Self {
        self.pool.wait_timeout = Some(timeout);
        self
    }

    /// Connects to the database at `url`.
    ///
    /// `sqlite::memory:` and `sqlite:<path>` need the `sqlite` feature,
    /// `mysql://...` the `mysql` feature.
    pub async fn connect(&mut self, url: &str) -> Result<Engine> {
        self.build(Connect::new(url)?).await
    }

    pub async fn build(&mut self, driver: impl Driver) -> Result<Engine> {
        let name = self.dialect.as_deref().unwrap_or(driver.dialect());

        let Some(dialect) = dialect::get(name) else {
            log::error!("dialect {name} not found");
            return Err(Error::invalid_driver_configuration(format!(
                "dialect `{name}` is not registered"
            )));
        };

        let pool = match Pool::new(driver, &self.pool).await {
            Ok(pool) => pool,
            Err(err) => {
                log::error!("{err}");
                return Err(err);
            }
        };

        log::info!("connect database success");

        Ok(Engine {
            shared: Arc::new(Shared { dialect, pool }),
        })
    }
}
