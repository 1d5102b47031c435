use super::Session;
use crate::Result;

use quill_core::{driver::operation::Transaction, Error};

impl Session {
    /// Starts a transaction.
    ///
    /// Until [`commit`](Self::commit) or [`rollback`](Self::rollback), every
    /// statement of this session runs on one connection taken out of the
    /// engine's pool. Other sessions use the remaining connections; when
    /// open transactions hold all of them, their statements fail with a
    /// `connection_pool` error instead of waiting.
    pub async fn begin(&mut self) -> Result<()> {
        if self.tx.is_some() {
            return Err(Error::invalid_statement("transaction already in progress"));
        }

        let mut conn = match self.pool.pin().await {
            Ok(conn) => conn,
            Err(err) => {
                log::error!("{err}");
                return Err(err);
            }
        };

        log::info!("transaction begin");
        if let Err(err) = conn.exec(Transaction::Start.into()).await {
            log::error!("{err}");
            return Err(err);
        }

        self.tx = Some(conn);
        Ok(())
    }

    pub async fn commit(&mut self) -> Result<()> {
        self.finish(Transaction::Commit).await
    }

    pub async fn rollback(&mut self) -> Result<()> {
        self.finish(Transaction::Rollback).await
    }

    /// Returns `true` while a transaction is open.
    pub fn in_transaction(&self) -> bool {
        self.tx.is_some()
    }

    async fn finish(&mut self, op: Transaction) -> Result<()> {
        let Some(mut conn) = self.tx.take() else {
            return Err(Error::invalid_statement("no transaction in progress"));
        };

        log::info!("transaction {}", op.as_sql().to_lowercase());
        let res = conn.exec(op.into()).await.map(|_| ());

        if let Err(err) = &res {
            log::error!("{err}");
        }

        res
    }
}

impl Drop for Session {
    fn drop(&mut self) {
        let Some(tx) = self.tx.take() else {
            return;
        };

        // Roll back the abandoned transaction before the connection goes
        // back to the pool. Other sessions wait for it instead of failing.
        let mut conn = tx.unpin();
        match tokio::runtime::Handle::try_current() {
            Ok(handle) => {
                handle.spawn(async move {
                    if let Err(err) = conn.exec(Transaction::Rollback.into()).await {
                        log::error!("rollback of dropped transaction failed; error={err}");
                    }
                });
            }
            Err(_) => log::error!("session dropped inside a transaction outside of a runtime"),
        }
    }
}
