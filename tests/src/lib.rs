mod exec_log;

pub use exec_log::ExecLog;
pub use logging_driver::{DriverOp, LoggingDriver};

pub use std_util::*;

use quill::{Engine, Session};
use quill_driver_sqlite::Sqlite;

/// An engine over a fresh in-memory SQLite database whose statements are
/// recorded.
pub struct Test {
    engine: Engine,
    log: ExecLog,
}

impl Test {
    pub async fn new() -> Test {
        Test::with_builder(Engine::builder()).await
    }

    pub async fn with_builder(mut builder: quill::Builder) -> Test {
        init_logging();

        let driver = LoggingDriver::new(Box::new(Sqlite::in_memory()));
        let log = ExecLog::new(driver.ops_log_handle());
        let engine = builder.build(driver).await.unwrap();

        Test { engine, log }
    }

    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    pub fn session(&self) -> Session {
        self.engine.new_session()
    }

    pub fn log(&mut self) -> &mut ExecLog {
        &mut self.log
    }
}

pub fn init_logging() {
    let _ = env_logger::builder().is_test(true).try_init();
}
