use crate::{Model, Result, Session};

use async_trait::async_trait;
use std::{marker::PhantomData, sync::Arc};

/// Lifecycle callbacks of a record type.
///
/// Every method defaults to doing nothing. Associated functions run once per
/// verb; methods taking `self` run once per record. A failing hook is logged
/// and otherwise ignored: it never aborts the statement. `after_*` hooks run
/// only when the statement succeeded.
///
/// Hooks receive the session that runs the verb and may issue statements on
/// it; clauses pending on the session are set aside while a hook runs.
///
/// `#[derive(Model)]` implements this trait with the defaults unless the
/// type is annotated with `#[hooks]`.
#[async_trait]
pub trait Hooks: Send + Sync + 'static {
    /// Before rows are read by `find`, `all` or `first`.
    async fn before_query(_session: &mut Session) -> Result<()> {
        Ok(())
    }

    /// On each record loaded by `find`, `all` or `first`.
    async fn after_query(&mut self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    /// On each record passed to `insert`, before the statement is built.
    async fn before_insert(&self, _session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn after_insert(_session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn before_update(_session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn after_update(_session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn before_delete(_session: &mut Session) -> Result<()> {
        Ok(())
    }

    async fn after_delete(_session: &mut Session) -> Result<()> {
        Ok(())
    }
}

/// Type-level hooks of the model bound to a session, callable without
/// knowing the model type.
#[async_trait]
pub(crate) trait TypeHooks: Send + Sync + 'static {
    async fn before_query(&self, session: &mut Session) -> Result<()>;
    async fn after_insert(&self, session: &mut Session) -> Result<()>;
    async fn before_update(&self, session: &mut Session) -> Result<()>;
    async fn after_update(&self, session: &mut Session) -> Result<()>;
    async fn before_delete(&self, session: &mut Session) -> Result<()>;
    async fn after_delete(&self, session: &mut Session) -> Result<()>;
}

struct ModelHooks<M>(PhantomData<fn() -> M>);

pub(crate) fn type_hooks<M: Model>() -> Arc<dyn TypeHooks> {
    Arc::new(ModelHooks::<M>(PhantomData))
}

#[async_trait]
impl<M: Model> TypeHooks for ModelHooks<M> {
    async fn before_query(&self, session: &mut Session) -> Result<()> {
        M::before_query(session).await
    }

    async fn after_insert(&self, session: &mut Session) -> Result<()> {
        M::after_insert(session).await
    }

    async fn before_update(&self, session: &mut Session) -> Result<()> {
        M::before_update(session).await
    }

    async fn after_update(&self, session: &mut Session) -> Result<()> {
        M::after_update(session).await
    }

    async fn before_delete(&self, session: &mut Session) -> Result<()> {
        M::before_delete(session).await
    }

    async fn after_delete(&self, session: &mut Session) -> Result<()> {
        M::after_delete(session).await
    }
}
